//! Scripted checkout, from cart to placed order.

use std::time::Duration;

use anyhow::{bail, Context as _, Result};
use bookshop_commerce::prelude::*;

use super::{print_cart, print_order, submit_with_spinner, DemoArgs};
use crate::context::Context;

const DEFAULT_LINES: [&str; 2] = ["1:1", "2:2"];

const CONTACT: [(&str, &str); 4] = [
    ("firstName", "Jane"),
    ("lastName", "Reader"),
    ("email", "jane.reader@example.com"),
    ("phone", "555-0134"),
];

const SHIPPING: [(&str, &str); 4] = [
    ("address", "221B Baker Street"),
    ("city", "Springfield"),
    ("state", "IL"),
    ("zipCode", "62701"),
];

const CARD: [(&str, &str); 4] = [
    ("paymentMethod", "card"),
    ("cardNumber", "4242 4242 4242 4242"),
    ("expiryDate", "12/30"),
    ("cvv", "123"),
];

/// Run the demo command.
pub async fn run(args: DemoArgs, ctx: &Context) -> Result<()> {
    let catalog = Catalog::sample();
    let mut cart = ctx.new_cart();

    let lines: Vec<String> = if args.add.is_empty() {
        DEFAULT_LINES.iter().map(|s| s.to_string()).collect()
    } else {
        args.add
    };

    ctx.output.header("Filling the cart");
    for line in &lines {
        let (id, quantity) = parse_line(line)?;
        let product = orderable(&catalog, &id)?;
        cart.add_item(product, quantity)
            .with_context(|| format!("Failed to add {}", line))?;
        ctx.output.success(&format!("Added {} x{}", product.title, quantity));
    }
    print_cart(&cart, ctx);

    let mut flow = ctx.begin_checkout(&cart);
    if flow.state() == &CheckoutState::Empty {
        bail!("Cart is empty; nothing to check out");
    }

    ctx.output.header("Checkout");
    while let Some(step) = flow.step() {
        ctx.output.step(step.number(), 4, step.display_name());
        let fields: &[(&str, &str)] = match step {
            CheckoutStep::Contact => &CONTACT,
            CheckoutStep::Shipping => &SHIPPING,
            CheckoutStep::Payment if args.card => &CARD,
            CheckoutStep::Payment | CheckoutStep::Review => &[],
        };
        for (name, value) in fields {
            flow.set_field(CheckoutField::parse(name, *value)?)?;
        }

        if step == CheckoutStep::Review {
            super::print_summary(&flow.summary(&cart), ctx);
        }
        if let Next::Submit = flow.next()? {
            break;
        }
    }

    let book = OrderBook::new();
    let sink = match args.latency_ms {
        Some(ms) => SimulatedOrderSink::with_latency(book.clone(), Duration::from_millis(ms)),
        None => ctx.order_sink(&book),
    };

    let order = submit_with_spinner(&mut flow, &mut cart, &sink, ctx).await?;

    if ctx.output.is_json() {
        ctx.output.json(&order);
        return Ok(());
    }

    ctx.output.success("Order placed successfully!");
    print_order(&order, ctx);
    ctx.output.info("");
    ctx.output.info(&format!(
        "Cart now holds {} item(s); {} order(s) recorded.",
        cart.item_count(),
        book.len()
    ));

    Ok(())
}

/// Look up a book that can be added to the cart.
fn orderable<'a>(catalog: &'a Catalog, id: &ProductId) -> Result<&'a Product> {
    let product = catalog
        .get(id)
        .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))?;
    if !product.in_stock {
        bail!("{} is out of stock", product.title);
    }
    Ok(product)
}

/// Parse `ID:QTY` (quantity defaults to 1 when omitted).
fn parse_line(line: &str) -> Result<(ProductId, i64)> {
    let (id, quantity) = match line.split_once(':') {
        Some((id, qty)) => {
            let qty: i64 = qty
                .trim()
                .parse()
                .with_context(|| format!("Invalid quantity in '{}'", line))?;
            (id.trim(), qty)
        }
        None => (line.trim(), 1),
    };
    if id.is_empty() {
        bail!("Missing product id in '{}'", line);
    }
    Ok((ProductId::new(id), quantity))
}
