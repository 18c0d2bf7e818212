//! Promotional offers managed from the admin screens.
//!
//! Offers are listed and deleted here; they are not applied to cart or
//! order totals.

mod list;
mod offer;

pub use list::OfferList;
pub use offer::{Offer, OfferKind, OfferStatus};
