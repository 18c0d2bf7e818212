//! Interactive shopping session.

use anyhow::{bail, Result};
use bookshop_commerce::prelude::*;
use dialoguer::{Input, Select};

use super::catalog::print_books;
use super::orders::list_orders;
use super::{print_cart, print_order, print_summary, submit_with_spinner, ShopArgs};
use crate::context::Context;

const MENU: [&str; 7] = [
    "Browse books",
    "View cart",
    "Change quantity",
    "Remove from cart",
    "Checkout",
    "Orders",
    "Quit",
];

/// Run the shop command.
pub async fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("The shop session is interactive and has no JSON output");
    }

    let catalog = Catalog::sample();
    let mut cart = ctx.new_cart();
    let mut cart_updates = cart.subscribe();
    let book = if args.with_sample_orders {
        OrderBook::sample()
    } else {
        OrderBook::new()
    };
    let sink = ctx.order_sink(&book);

    ctx.output.header("Welcome to the Bookshop");

    loop {
        let prompt = format!(
            "Cart: {} item(s), {}",
            cart.item_count(),
            ctx.money(cart.summary().total)
        );
        let choice = Select::new()
            .with_prompt(prompt)
            .items(&MENU)
            .default(0)
            .interact()?;

        match choice {
            0 => browse(&catalog, &mut cart, ctx)?,
            1 => {
                ctx.output.header("Your cart");
                print_cart(&cart, ctx);
            }
            2 => change_quantity(&mut cart, ctx)?,
            3 => remove_item(&mut cart, ctx)?,
            4 => checkout(&mut cart, &sink, ctx).await?,
            5 => list_orders(&book, &OrderFilter::new(), ctx)?,
            _ => break,
        }

        if cart_updates.has_changed().unwrap_or(false) {
            let state = cart_updates.borrow_and_update();
            ctx.output.debug(&format!(
                "cart changed: {} line(s), {} item(s), subtotal {}",
                state.items().len(),
                state.item_count(),
                ctx.money(state.total_amount())
            ));
        }
    }

    ctx.output.info("Goodbye!");
    Ok(())
}

fn browse(catalog: &Catalog, cart: &mut CartStore, ctx: &Context) -> Result<()> {
    let search: String = Input::new()
        .with_prompt("Search title, author or tag (blank for all)")
        .allow_empty(true)
        .interact_text()?;

    let mut categories = vec!["All categories"];
    categories.extend(catalog.categories());
    let category = Select::new()
        .with_prompt("Category")
        .items(&categories)
        .default(0)
        .interact()?;

    let sort_names: Vec<&str> = SortOption::ALL.iter().map(|s| s.display_name()).collect();
    let sort = Select::new()
        .with_prompt("Sort by")
        .items(&sort_names)
        .default(0)
        .interact()?;

    let mut query = CatalogQuery::new()
        .with_text(search)
        .with_sort(SortOption::ALL[sort]);
    if category > 0 {
        query = query.with_category(categories[category]);
    }

    let books = catalog.search(&query);
    if books.is_empty() {
        ctx.output.info("No books match your search.");
        return Ok(());
    }
    print_books(&books, ctx);

    let mut choices: Vec<String> = books
        .iter()
        .map(|b| format!("{} by {} ({})", b.title, b.author, ctx.money(b.price)))
        .collect();
    choices.push("Back".to_string());

    let pick = Select::new()
        .with_prompt("Add a book to your cart")
        .items(&choices)
        .default(0)
        .interact()?;
    let Some(product) = books.get(pick) else {
        return Ok(());
    };

    if !product.in_stock {
        ctx.output.warn(&format!("{} is out of stock.", product.title));
        return Ok(());
    }

    let quantity: i64 = Input::new()
        .with_prompt("Quantity")
        .default(1)
        .interact_text()?;
    match cart.add_item(product, quantity) {
        Ok(()) => ctx
            .output
            .success(&format!("Added {} x{} to your cart", product.title, quantity)),
        Err(e) => ctx.output.error(&e.to_string()),
    }
    Ok(())
}

/// Pick a cart line, or `None` for an empty cart or "Back".
fn pick_line(cart: &CartStore, prompt: &str, ctx: &Context) -> Result<Option<ProductId>> {
    if cart.is_empty() {
        ctx.output.info("Your cart is empty.");
        return Ok(None);
    }

    let mut choices: Vec<String> = cart
        .items()
        .iter()
        .map(|i| format!("{} (x{})", i.title, i.quantity))
        .collect();
    choices.push("Back".to_string());

    let pick = Select::new()
        .with_prompt(prompt)
        .items(&choices)
        .default(0)
        .interact()?;
    Ok(cart.items().get(pick).map(|i| i.id.clone()))
}

fn change_quantity(cart: &mut CartStore, ctx: &Context) -> Result<()> {
    let Some(id) = pick_line(cart, "Change quantity of", ctx)? else {
        return Ok(());
    };
    let current = cart.get(&id).map_or(1, |i| i.quantity);

    let quantity: i64 = Input::new()
        .with_prompt("New quantity")
        .default(current)
        .interact_text()?;
    match cart.update_quantity(&id, quantity) {
        Ok(_) => ctx.output.success(&format!("Quantity set to {}", quantity)),
        Err(e) => ctx.output.error(&e.to_string()),
    }
    Ok(())
}

fn remove_item(cart: &mut CartStore, ctx: &Context) -> Result<()> {
    let Some(id) = pick_line(cart, "Remove", ctx)? else {
        return Ok(());
    };
    if cart.remove_item(&id) {
        ctx.output.success("Removed from cart");
    }
    Ok(())
}

async fn checkout(cart: &mut CartStore, sink: &dyn OrderSink, ctx: &Context) -> Result<()> {
    let mut flow = ctx.begin_checkout(cart);
    if flow.state() == &CheckoutState::Empty {
        ctx.output
            .warn("Your cart is empty. Add some books before checking out.");
        return Ok(());
    }

    while let Some(step) = flow.step() {
        ctx.output.header(&step.to_string());
        fill_step(&mut flow, step, cart, ctx)?;

        let mut options = Vec::new();
        if step != CheckoutStep::Contact {
            options.push("Back");
        }
        options.push(if step == CheckoutStep::Review { "Place order" } else { "Next" });
        options.push("Cancel checkout");

        let pick = Select::new()
            .items(&options)
            .default(options.len() - 2)
            .interact()?;

        match options[pick] {
            "Back" => {
                flow.back()?;
            }
            "Cancel checkout" => {
                ctx.output.info("Checkout cancelled; your cart is unchanged.");
                return Ok(());
            }
            _ => match flow.next() {
                Ok(Next::Advanced(_)) => {}
                Ok(Next::Submit) => match submit_with_spinner(&mut flow, cart, sink, ctx).await {
                    Ok(order) => {
                        ctx.output.success("Order placed successfully!");
                        print_order(&order, ctx);
                        return Ok(());
                    }
                    Err(e) => {
                        ctx.output.error(&format!("{:#}", e));
                        ctx.output.info("Your cart is unchanged; you can try again.");
                    }
                },
                Err(e) => ctx.output.warn(&e.to_string()),
            },
        }
    }

    Ok(())
}

fn fill_step(
    flow: &mut CheckoutFlow,
    step: CheckoutStep,
    cart: &CartStore,
    ctx: &Context,
) -> Result<()> {
    let form = flow.form().clone();
    match step {
        CheckoutStep::Contact => prompt_fields(
            flow,
            &[
                ("firstName", "First name", &form.contact.first_name),
                ("lastName", "Last name", &form.contact.last_name),
                ("email", "Email", &form.contact.email),
                ("phone", "Phone", &form.contact.phone),
            ],
        ),
        CheckoutStep::Shipping => prompt_fields(
            flow,
            &[
                ("address", "Address", &form.shipping.address),
                ("city", "City", &form.shipping.city),
                ("state", "State", &form.shipping.state),
                ("zipCode", "ZIP code", &form.shipping.zip_code),
            ],
        ),
        CheckoutStep::Payment => {
            let methods = [PaymentMethod::CashOnDelivery, PaymentMethod::Card];
            let names: Vec<&str> = methods.iter().map(|m| m.display_name()).collect();
            let current = methods
                .iter()
                .position(|m| *m == form.payment_method)
                .unwrap_or(0);
            let pick = Select::new()
                .with_prompt("Payment method")
                .items(&names)
                .default(current)
                .interact()?;
            flow.set_field(CheckoutField::PaymentMethod(methods[pick]))?;

            if methods[pick] == PaymentMethod::Card {
                prompt_fields(
                    flow,
                    &[
                        ("cardNumber", "Card number", &form.card.number),
                        ("expiryDate", "Expiry (MM/YY)", &form.card.expiry),
                        ("cvv", "CVV", &form.card.cvv),
                    ],
                )?;
            }
            Ok(())
        }
        CheckoutStep::Review => {
            let out = &ctx.output;
            out.kv("Name", &form.contact.full_name());
            out.kv("Email", &form.contact.email);
            out.kv("Phone", &form.contact.phone);
            out.kv("Ship to", &form.shipping.one_line());
            out.kv("Payment", form.payment_method.display_name());
            if form.payment_method == PaymentMethod::Card {
                out.kv("Card", &form.card.masked_number());
            }
            out.info("");
            for item in cart.items() {
                out.list_item(&format!(
                    "{} x{} = {}",
                    item.title,
                    item.quantity,
                    ctx.money(item.line_total())
                ));
            }
            print_summary(&flow.summary(cart), ctx);
            Ok(())
        }
    }
}

fn prompt_fields(flow: &mut CheckoutFlow, fields: &[(&str, &str, &String)]) -> Result<()> {
    for (name, label, current) in fields {
        let value: String = Input::new()
            .with_prompt(*label)
            .with_initial_text(current.as_str())
            .allow_empty(true)
            .interact_text()?;
        flow.set_field(CheckoutField::parse(name, value)?)?;
    }
    Ok(())
}
