//! Product administration commands.

use anyhow::Result;
use bookshop_commerce::prelude::*;

use super::catalog::print_books;
use super::{confirm_delete, ProductsArgs, ProductsCommand};
use crate::context::Context;

/// Run the products command.
///
/// Works on the sample catalog; deletions last for this run only.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let mut catalog = Catalog::sample();

    let mut filter = ProductFilter::new().with_search(args.search);
    if let Some(category) = args.category {
        filter = filter.with_category(category);
    }

    match args.command {
        Some(ProductsCommand::List) | None => list_products(&catalog, &filter, ctx),
        Some(ProductsCommand::Delete { id, yes }) => {
            delete_product(&mut catalog, &ProductId::new(id), yes, ctx)?;
            list_products(&catalog, &filter, ctx)
        }
    }
}

fn list_products(catalog: &Catalog, filter: &ProductFilter, ctx: &Context) -> Result<()> {
    let products = catalog.filter(filter);

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header("Products");
    if products.is_empty() {
        ctx.output.info("No products match your filters.");
        return Ok(());
    }
    print_books(&products, ctx);
    ctx.output.info("");
    ctx.output
        .info(&format!("{} of {} product(s)", products.len(), catalog.len()));
    Ok(())
}

fn delete_product(catalog: &mut Catalog, id: &ProductId, yes: bool, ctx: &Context) -> Result<()> {
    let title = catalog
        .get(id)
        .map(|p| p.title.clone())
        .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))?;

    if !confirm_delete(&format!("Delete \"{}\"?", title), yes, ctx)? {
        ctx.output.warn("Delete cancelled");
        return Ok(());
    }

    if catalog.remove(id).is_some() {
        ctx.output.success(&format!("Deleted {}", title));
    }
    Ok(())
}
