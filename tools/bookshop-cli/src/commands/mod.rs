//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod demo;
pub mod offers;
pub mod orders;
pub mod products;
pub mod shop;

use anyhow::{bail, Result};
use bookshop_commerce::prelude::*;
use clap::{Args, Subcommand};
use dialoguer::Confirm;

use crate::context::Context;

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Match title, author or tag (case-insensitive).
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only this category (e.g. fiction, history).
    #[arg(short, long)]
    pub category: Option<String>,

    /// Sort order: default, price-low-high, price-high-low, name-a-z,
    /// name-z-a, rating-high-low.
    #[arg(long, default_value = "default")]
    pub sort: SortOption,

    /// List the categories instead of books.
    #[arg(long)]
    pub categories: bool,
}

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    /// Start with the admin order samples in the order book.
    #[arg(long)]
    pub with_sample_orders: bool,
}

/// Arguments for the demo command.
#[derive(Args)]
pub struct DemoArgs {
    /// Cart line as PRODUCT_ID:QUANTITY (repeatable). Defaults to 1:1 and 2:2.
    #[arg(short, long = "add", value_name = "ID:QTY")]
    pub add: Vec<String>,

    /// Pay by card instead of cash on delivery.
    #[arg(long)]
    pub card: bool,

    /// Override the simulated submission latency in milliseconds.
    #[arg(long)]
    pub latency_ms: Option<u64>,
}

/// Arguments for the orders command.
#[derive(Args)]
pub struct OrdersArgs {
    #[command(subcommand)]
    pub command: Option<OrdersCommand>,

    /// Match order id, customer name or email.
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Only orders with this status.
    #[arg(long)]
    pub status: Option<OrderStatus>,
}

#[derive(Subcommand)]
pub enum OrdersCommand {
    /// List orders (default).
    List,
    /// Show one order with its items.
    Show {
        /// Order ID.
        id: String,
    },
    /// Change an order's status.
    SetStatus {
        /// Order ID.
        id: String,
        /// pending, processing, shipped, delivered or cancelled.
        status: OrderStatus,
    },
    /// Count orders per status.
    Stats,
}

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    #[command(subcommand)]
    pub command: Option<ProductsCommand>,

    /// Match title or author (case-insensitive).
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Only this category.
    #[arg(short, long)]
    pub category: Option<String>,
}

#[derive(Subcommand)]
pub enum ProductsCommand {
    /// List products (default).
    List,
    /// Delete a product from the catalog.
    Delete {
        /// Product ID.
        id: String,
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the offers command.
#[derive(Args)]
pub struct OffersArgs {
    #[command(subcommand)]
    pub command: Option<OffersCommand>,

    /// Only offers with this status: active, scheduled or expired.
    #[arg(long)]
    pub status: Option<OfferStatus>,
}

#[derive(Subcommand)]
pub enum OffersCommand {
    /// List offers (default).
    List,
    /// Show one offer and the products it covers.
    Show {
        /// Offer ID.
        id: String,
    },
    /// Delete an offer.
    Delete {
        /// Offer ID.
        id: String,
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

/// Ask before deleting. JSON mode cannot prompt, so it needs `--yes`.
pub fn confirm_delete(prompt: &str, yes: bool, ctx: &Context) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    if ctx.output.is_json() {
        bail!("Refusing to delete without --yes in JSON mode");
    }
    Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
}

/// Print the cart lines and the price summary.
pub fn print_cart(cart: &CartStore, ctx: &Context) {
    let out = &ctx.output;
    if cart.is_empty() {
        out.info("Your cart is empty.");
        return;
    }

    out.table_row(&["ID", "TITLE", "QTY", "PRICE", "LINE"], &[4, 36, 5, 10, 10]);
    for item in cart.items() {
        out.table_row(
            &[
                item.id.as_str(),
                &item.title,
                &item.quantity.to_string(),
                &ctx.money(item.unit_price),
                &ctx.money(item.line_total()),
            ],
            &[4, 36, 5, 10, 10],
        );
    }
    print_summary(&cart.summary(), ctx);
}

/// Print subtotal, shipping, tax and total.
pub fn print_summary(summary: &OrderSummary, ctx: &Context) {
    let out = &ctx.output;
    out.info("");
    out.kv(&format!("Subtotal ({} items)", summary.item_count), &ctx.money(summary.subtotal));
    out.kv("Shipping", "Free");
    out.kv(&format!("Tax ({:.0}%)", TAX_RATE * 100.0), &ctx.money(summary.tax));
    out.kv("Total", &ctx.money(summary.total));
}

/// Print an order's details.
pub fn print_order(order: &Order, ctx: &Context) {
    let out = &ctx.output;
    out.kv("Order", order.id.as_str());
    out.kv("Status", &crate::output::status_badge(order.status));
    out.kv("Placed", &order.created_at.format("%Y-%m-%d %H:%M UTC").to_string());
    out.kv("Customer", &format!("{} <{}>", order.customer_name(), order.customer.email));
    out.kv("Ship to", &order.shipping_address.one_line());
    out.kv("Payment", order.payment_method.display_name());
    for item in &order.items {
        out.list_item(&format!(
            "{} x{} @ {}",
            item.title,
            item.quantity,
            ctx.money(item.unit_price)
        ));
    }
    print_summary(&order.summary(), ctx);
}

/// Submit the checkout, showing a spinner while the flow is submitting.
pub async fn submit_with_spinner(
    flow: &mut CheckoutFlow,
    cart: &mut CartStore,
    sink: &dyn OrderSink,
    ctx: &Context,
) -> Result<Order> {
    let spinner = ctx.output.spinner("Waiting to submit...");
    let mut states = flow.subscribe();
    let watcher = {
        let spinner = spinner.clone();
        tokio::spawn(async move {
            while states.changed().await.is_ok() {
                let message = match &*states.borrow_and_update() {
                    CheckoutState::Submitting => "Placing order...",
                    CheckoutState::Placed(_) => "Order placed",
                    _ => "Submission stopped",
                };
                spinner.set_message(message);
            }
        })
    };

    let result = flow.submit(cart, sink).await;
    spinner.finish_and_clear();
    watcher.abort();
    Ok(result?)
}
