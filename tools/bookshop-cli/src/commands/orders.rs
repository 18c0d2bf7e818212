//! Order administration commands.

use anyhow::Result;
use bookshop_commerce::prelude::*;
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{print_order, OrdersArgs, OrdersCommand};
use crate::context::Context;
use crate::output::status_badge;

/// Run the orders command.
///
/// Works on the admin sample order book; changes last for this run only.
pub async fn run(args: OrdersArgs, ctx: &Context) -> Result<()> {
    let book = OrderBook::sample();

    match args.command {
        Some(OrdersCommand::List) | None => {
            let filter = OrderFilter::new()
                .with_search(args.search)
                .with_status(args.status);
            list_orders(&book, &filter, ctx)
        }
        Some(OrdersCommand::Show { id }) => show_order(&book, &id, ctx),
        Some(OrdersCommand::SetStatus { id, status }) => set_status(&book, &id, status, ctx),
        Some(OrdersCommand::Stats) => show_stats(&book, ctx),
    }
}

/// One row of the order listing.
#[derive(Serialize)]
struct OrderRow {
    id: String,
    customer: String,
    email: String,
    total: f64,
    status: OrderStatus,
    date: String,
    items: usize,
}

impl OrderRow {
    fn from_order(order: &Order) -> Self {
        Self {
            id: order.id.to_string(),
            customer: order.customer_name(),
            email: order.customer.email.clone(),
            total: order.total,
            status: order.status,
            date: format_date(&order.created_at),
            items: order.items.len(),
        }
    }
}

pub fn list_orders(book: &OrderBook, filter: &OrderFilter, ctx: &Context) -> Result<()> {
    let rows: Vec<OrderRow> = book.filter(filter).iter().map(OrderRow::from_order).collect();

    if ctx.output.is_json() {
        ctx.output.json(&rows);
        return Ok(());
    }

    ctx.output.header("Orders");
    if rows.is_empty() {
        ctx.output.info("No orders match your filters.");
        return Ok(());
    }

    let widths = [14, 18, 26, 10, 12, 10];
    ctx.output
        .table_row(&["ORDER", "CUSTOMER", "EMAIL", "TOTAL", "STATUS", "DATE"], &widths);
    for row in &rows {
        ctx.output.table_row(
            &[
                &row.id,
                &row.customer,
                &row.email,
                &ctx.money(row.total),
                &status_badge(row.status),
                &row.date,
            ],
            &widths,
        );
    }
    ctx.output.info("");
    ctx.output.info(&format!("{} of {} order(s)", rows.len(), book.len()));

    Ok(())
}

fn show_order(book: &OrderBook, id: &str, ctx: &Context) -> Result<()> {
    let order = book
        .get(&OrderId::new(id))
        .ok_or_else(|| CommerceError::OrderNotFound(id.to_string()))?;

    if ctx.output.is_json() {
        ctx.output.json(&order);
        return Ok(());
    }

    ctx.output.header(&format!("Order {}", order.id));
    print_order(&order, ctx);
    Ok(())
}

fn set_status(book: &OrderBook, id: &str, status: OrderStatus, ctx: &Context) -> Result<()> {
    let order = book.update_status(&OrderId::new(id), status)?;

    if ctx.output.is_json() {
        ctx.output.json(&order);
        return Ok(());
    }

    ctx.output.success(&format!(
        "Order {} is now {}",
        order.id,
        status_badge(order.status)
    ));
    Ok(())
}

fn show_stats(book: &OrderBook, ctx: &Context) -> Result<()> {
    let counts = book.status_counts();

    if ctx.output.is_json() {
        let map: serde_json::Map<String, serde_json::Value> = counts
            .iter()
            .map(|(status, n)| (status.as_str().to_string(), serde_json::Value::from(*n)))
            .collect();
        ctx.output.json(&map);
        return Ok(());
    }

    ctx.output.header("Orders by status");
    for (status, n) in counts {
        ctx.output.kv(&status_badge(status), &n.to_string());
    }
    ctx.output.kv("Total", &book.len().to_string());
    Ok(())
}

fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d").to_string()
}
