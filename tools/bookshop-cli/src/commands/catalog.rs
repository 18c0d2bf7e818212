//! Browse the catalog.

use anyhow::Result;
use bookshop_commerce::prelude::*;

use super::CatalogArgs;
use crate::context::Context;
use crate::output::format_rating;

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let catalog = Catalog::sample();

    if args.categories {
        let categories = catalog.categories();
        if ctx.output.is_json() {
            ctx.output.json(&categories);
            return Ok(());
        }
        ctx.output.header("Categories");
        for category in categories {
            ctx.output.list_item(category);
        }
        return Ok(());
    }

    let mut query = CatalogQuery::new().with_sort(args.sort);
    if let Some(text) = args.search {
        query = query.with_text(text);
    }
    if let Some(category) = args.category {
        query = query.with_category(category);
    }

    let books = catalog.search(&query);

    if ctx.output.is_json() {
        ctx.output.json(&books);
        return Ok(());
    }

    ctx.output.header(&format!("Books ({})", query.sort.display_name()));
    if books.is_empty() {
        ctx.output.info("No books match your search.");
        return Ok(());
    }
    print_books(&books, ctx);
    ctx.output.info("");
    ctx.output.info(&format!("{} of {} book(s)", books.len(), catalog.len()));

    Ok(())
}

/// Print books as a table.
pub fn print_books(books: &[&Product], ctx: &Context) {
    let widths = [4, 38, 22, 14, 12, 12];
    ctx.output
        .table_row(&["ID", "TITLE", "AUTHOR", "PRICE", "RATING", "STOCK"], &widths);

    for book in books {
        let price = match book.discount_percent() {
            Some(pct) if pct >= 1.0 => format!("{} -{:.0}%", ctx.money(book.price), pct),
            _ => ctx.money(book.price),
        };
        let stock = if book.in_stock { "In stock" } else { "Out of stock" };
        ctx.output.table_row(
            &[
                book.id.as_str(),
                &book.title,
                &book.author,
                &price,
                &format_rating(book.rating),
                stock,
            ],
            &widths,
        );
    }
}
