//! Offer administration commands.

use anyhow::Result;
use bookshop_commerce::prelude::*;
use chrono::NaiveDate;

use super::{confirm_delete, OffersArgs, OffersCommand};
use crate::context::Context;
use crate::output::offer_badge;

/// Run the offers command.
///
/// Works on the sample offers; deletions last for this run only.
pub async fn run(args: OffersArgs, ctx: &Context) -> Result<()> {
    let mut offers = OfferList::sample();

    match args.command {
        Some(OffersCommand::List) | None => list_offers(&offers, args.status, ctx),
        Some(OffersCommand::Show { id }) => show_offer(&offers, &OfferId::new(id), ctx),
        Some(OffersCommand::Delete { id, yes }) => {
            delete_offer(&mut offers, &OfferId::new(id), yes, ctx)?;
            list_offers(&offers, args.status, ctx)
        }
    }
}

fn list_offers(offers: &OfferList, status: Option<OfferStatus>, ctx: &Context) -> Result<()> {
    let shown = offers.with_status(status);

    if ctx.output.is_json() {
        ctx.output.json(&shown);
        return Ok(());
    }

    ctx.output.header("Offers");
    if shown.is_empty() {
        ctx.output.info("No offers found.");
        return Ok(());
    }

    let widths = [4, 26, 20, 28, 10, 10];
    ctx.output.table_row(
        &["ID", "TITLE", "VALUE", "VALID", "PRODUCTS", "STATUS"],
        &widths,
    );
    for offer in &shown {
        ctx.output.table_row(
            &[
                offer.id.as_str(),
                &offer.title,
                &offer.value_label(ctx.currency()),
                &validity(offer),
                &product_count(offer),
                &offer_badge(offer.status),
            ],
            &widths,
        );
    }
    ctx.output.info("");
    ctx.output
        .info(&format!("{} of {} offer(s)", shown.len(), offers.len()));
    Ok(())
}

fn show_offer(offers: &OfferList, id: &OfferId, ctx: &Context) -> Result<()> {
    let offer = offers
        .get(id)
        .ok_or_else(|| CommerceError::OfferNotFound(id.to_string()))?;

    if ctx.output.is_json() {
        ctx.output.json(offer);
        return Ok(());
    }

    ctx.output.header(&offer.title);
    ctx.output.kv("Status", &offer_badge(offer.status));
    ctx.output.kv("Type", offer.kind.as_str());
    ctx.output.kv("Value", &offer.value_label(ctx.currency()));
    ctx.output.kv("Valid", &validity(offer));
    ctx.output.info(&offer.description);
    ctx.output.info("");

    if offer.covers_all_products() {
        ctx.output.info("Applies to every product.");
        return Ok(());
    }
    let catalog = Catalog::sample();
    for product_id in &offer.products {
        let title = catalog
            .get(product_id)
            .map_or("(no longer listed)", |p| p.title.as_str());
        ctx.output.list_item(&format!("{} {}", product_id, title));
    }
    Ok(())
}

fn delete_offer(offers: &mut OfferList, id: &OfferId, yes: bool, ctx: &Context) -> Result<()> {
    let title = offers
        .get(id)
        .map(|o| o.title.clone())
        .ok_or_else(|| CommerceError::OfferNotFound(id.to_string()))?;

    if !confirm_delete(&format!("Delete offer \"{}\"?", title), yes, ctx)? {
        ctx.output.warn("Delete cancelled");
        return Ok(());
    }

    offers.remove(id)?;
    ctx.output.success(&format!("Deleted offer {}", title));
    Ok(())
}

fn validity(offer: &Offer) -> String {
    format!(
        "{} - {}",
        format_date(offer.start_date),
        format_date(offer.end_date)
    )
}

fn product_count(offer: &Offer) -> String {
    if offer.covers_all_products() {
        "All".to_string()
    } else {
        offer.products.len().to_string()
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
