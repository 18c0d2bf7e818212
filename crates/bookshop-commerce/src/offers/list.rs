//! The admin offer list.

use chrono::NaiveDate;
use tracing::info;

use crate::error::CommerceError;
use crate::ids::{OfferId, ProductId};
use crate::offers::{Offer, OfferKind, OfferStatus};

/// Offers in display order.
#[derive(Debug, Clone, Default)]
pub struct OfferList {
    offers: Vec<Offer>,
}

impl OfferList {
    pub fn new(offers: Vec<Offer>) -> Self {
        Self { offers }
    }

    /// The admin demo offers.
    pub fn sample() -> Self {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
        let products = |ids: &[&str]| -> Vec<ProductId> {
            ids.iter().map(|id| ProductId::new(*id)).collect()
        };

        Self::new(vec![
            Offer {
                id: OfferId::new("1"),
                title: "Summer Reading Sale".to_string(),
                kind: OfferKind::Percentage,
                value: 20.0,
                description: "Get 20% off on all fiction books".to_string(),
                start_date: date(2023, 6, 1),
                end_date: date(2023, 6, 30),
                status: OfferStatus::Active,
                products: products(&["1", "2", "3"]),
            },
            Offer {
                id: OfferId::new("2"),
                title: "New Customer Discount".to_string(),
                kind: OfferKind::Fixed,
                value: 5.0,
                description: "$5 off on your first order".to_string(),
                start_date: date(2023, 1, 1),
                end_date: date(2023, 12, 31),
                status: OfferStatus::Active,
                products: Vec::new(),
            },
            Offer {
                id: OfferId::new("3"),
                title: "Science Bundle".to_string(),
                kind: OfferKind::Bundle,
                value: 3.0,
                description: "Buy 2 science books, get 1 free".to_string(),
                start_date: date(2023, 5, 1),
                end_date: date(2023, 8, 31),
                status: OfferStatus::Active,
                products: products(&["4"]),
            },
            Offer {
                id: OfferId::new("4"),
                title: "Holiday Special".to_string(),
                kind: OfferKind::Percentage,
                value: 15.0,
                description: "15% off on all history books".to_string(),
                start_date: date(2022, 12, 1),
                end_date: date(2022, 12, 25),
                status: OfferStatus::Expired,
                products: products(&["5", "6"]),
            },
        ])
    }

    pub fn all(&self) -> &[Offer] {
        &self.offers
    }

    pub fn get(&self, id: &OfferId) -> Option<&Offer> {
        self.offers.iter().find(|o| &o.id == id)
    }

    /// Offers with the given status, or all of them.
    pub fn with_status(&self, status: Option<OfferStatus>) -> Vec<&Offer> {
        self.offers
            .iter()
            .filter(|o| status.map_or(true, |s| o.status == s))
            .collect()
    }

    /// Offers live on `date` that cover `product`.
    pub fn live_for(&self, product: &ProductId, date: NaiveDate) -> Vec<&Offer> {
        self.offers
            .iter()
            .filter(|o| o.is_live_on(date) && o.applies_to(product))
            .collect()
    }

    /// Delete an offer and return it.
    pub fn remove(&mut self, id: &OfferId) -> Result<Offer, CommerceError> {
        let index = self
            .offers
            .iter()
            .position(|o| &o.id == id)
            .ok_or_else(|| CommerceError::OfferNotFound(id.to_string()))?;
        let removed = self.offers.remove(index);
        info!(offer_id = %id, title = %removed.title, "deleted offer");
        Ok(removed)
    }

    pub fn len(&self) -> usize {
        self.offers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(offers: &[&Offer]) -> Vec<String> {
        offers.iter().map(|o| o.id.to_string()).collect()
    }

    #[test]
    fn test_sample_offers() {
        let offers = OfferList::sample();
        assert_eq!(offers.len(), 4);

        let holiday = offers.get(&OfferId::new("4")).unwrap();
        assert_eq!(holiday.status, OfferStatus::Expired);
        assert_eq!(holiday.products.len(), 2);
        assert!(offers.get(&OfferId::new("2")).unwrap().covers_all_products());
    }

    #[test]
    fn test_status_filter() {
        let offers = OfferList::sample();
        assert_eq!(ids(&offers.with_status(Some(OfferStatus::Expired))), vec!["4"]);
        assert_eq!(offers.with_status(Some(OfferStatus::Active)).len(), 3);
        assert_eq!(offers.with_status(None).len(), 4);
    }

    #[test]
    fn test_live_for_product() {
        let offers = OfferList::sample();
        let june = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();

        assert_eq!(ids(&offers.live_for(&ProductId::new("1"), june)), vec!["1", "2"]);
        assert_eq!(ids(&offers.live_for(&ProductId::new("4"), june)), vec!["2", "3"]);
        // the holiday offer has expired
        assert_eq!(ids(&offers.live_for(&ProductId::new("6"), june)), vec!["2"]);
    }

    #[test]
    fn test_remove() {
        let mut offers = OfferList::sample();
        let removed = offers.remove(&OfferId::new("3")).unwrap();
        assert_eq!(removed.title, "Science Bundle");
        assert_eq!(offers.len(), 3);

        assert_eq!(
            offers.remove(&OfferId::new("3")),
            Err(CommerceError::OfferNotFound("3".to_string()))
        );
    }
}
