//! Book and catalog types.

use crate::catalog::{CatalogQuery, ProductFilter};
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};
use tracing::info;

/// A book in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Book title.
    pub title: String,
    /// Author name.
    pub author: String,
    /// Current price.
    pub price: f64,
    /// List price before markdown.
    pub original_price: Option<f64>,
    /// Average review rating (0-5).
    pub rating: f64,
    /// Short description for listings.
    pub description: String,
    /// Category slug (e.g., "fiction").
    pub category: String,
    /// Whether the book can be ordered.
    pub in_stock: bool,
    /// Tags for search.
    pub tags: Vec<String>,
}

impl Product {
    /// Create a new in-stock product with no markdown, rating or tags.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        author: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            price,
            original_price: None,
            rating: 0.0,
            description: String::new(),
            category: String::new(),
            in_stock: true,
            tags: Vec::new(),
        }
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Add a tag to this product.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
        self
    }

    /// Check if this book is marked down from its list price.
    pub fn is_on_sale(&self) -> bool {
        self.original_price.is_some_and(|op| op > self.price)
    }

    /// Calculate the markdown percentage if on sale.
    pub fn discount_percent(&self) -> Option<f64> {
        self.original_price.and_then(|op| {
            if op > self.price && op > 0.0 {
                Some((op - self.price) / op * 100.0)
            } else {
                None
            }
        })
    }

    /// Case-insensitive match against title, author or any tag.
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn matches_text(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.author.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

/// The product catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from a list of products, keeping their order.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The bookshop's demo catalog.
    pub fn sample() -> Self {
        let book = |id: &str,
                    title: &str,
                    author: &str,
                    price: f64,
                    original: f64,
                    rating: f64,
                    description: &str,
                    category: &str,
                    in_stock: bool,
                    tags: &[&str]| Product {
            id: ProductId::new(id),
            title: title.to_string(),
            author: author.to_string(),
            price,
            original_price: Some(original),
            rating,
            description: description.to_string(),
            category: category.to_string(),
            in_stock,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        };

        Self::new(vec![
            book("1", "The Great Gatsby", "F. Scott Fitzgerald", 12.99, 15.99, 4.5,
                "A classic novel of the Jazz Age.", "fiction", true,
                &["classic", "american", "literature"]),
            book("2", "To Kill a Mockingbird", "Harper Lee", 14.99, 18.99, 4.8,
                "A gripping tale of racial injustice.", "fiction", true,
                &["classic", "american", "literature"]),
            book("3", "1984", "George Orwell", 13.99, 16.99, 4.7,
                "A dystopian social science fiction novel.", "fiction", true,
                &["dystopian", "science fiction"]),
            book("4", "A Brief History of Time", "Stephen Hawking", 18.99, 22.99, 4.4,
                "A landmark volume in science writing.", "science", true,
                &["science", "physics", "cosmology"]),
            book("5", "The Art of War", "Sun Tzu", 9.99, 12.99, 4.3,
                "Ancient Chinese military treatise.", "history", true,
                &["military", "philosophy", "classic"]),
            book("6", "Sapiens: A Brief History of Humankind", "Yuval Noah Harari",
                16.99, 20.99, 4.6, "A brief history of humankind.", "history", true,
                &["anthropology", "history", "science"]),
            book("7", "The Power of Now", "Eckhart Tolle", 14.99, 17.99, 4.5,
                "A guide to spiritual enlightenment.", "self-help", true,
                &["spirituality", "mindfulness", "self-help"]),
            book("8", "The Hobbit", "J.R.R. Tolkien", 12.99, 15.99, 4.8,
                "Fantasy novel about Bilbo Baggins.", "fiction", false,
                &["fantasy", "adventure", "classic"]),
        ])
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for p in &self.products {
            if !p.category.is_empty() && !seen.contains(&p.category.as_str()) {
                seen.push(&p.category);
            }
        }
        seen
    }

    /// Run a query against the catalog.
    pub fn search(&self, query: &CatalogQuery) -> Vec<&Product> {
        query.apply(&self.products)
    }

    /// Products matching an admin filter, in catalog order.
    pub fn filter(&self, filter: &ProductFilter) -> Vec<&Product> {
        self.products.iter().filter(|p| filter.matches(p)).collect()
    }

    /// Delete a product, returning it if it was listed.
    pub fn remove(&mut self, id: &ProductId) -> Option<Product> {
        let index = self.products.iter().position(|p| &p.id == id)?;
        let removed = self.products.remove(index);
        info!(product_id = %id, title = %removed.title, "removed product from catalog");
        Some(removed)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.len(), 8);
        let gatsby = catalog.get(&ProductId::new("1")).unwrap();
        assert_eq!(gatsby.title, "The Great Gatsby");
        assert_eq!(gatsby.price, 12.99);
        assert!(!catalog.get(&ProductId::new("8")).unwrap().in_stock);
        assert!(catalog.get(&ProductId::new("99")).is_none());
    }

    #[test]
    fn test_categories_first_seen_order() {
        let catalog = Catalog::sample();
        assert_eq!(
            catalog.categories(),
            vec!["fiction", "science", "history", "self-help"]
        );
    }

    #[test]
    fn test_discount_percent() {
        let mut book = Product::new("x", "Title", "Author", 15.0);
        assert_eq!(book.discount_percent(), None);
        assert!(!book.is_on_sale());

        book.original_price = Some(20.0);
        assert!(book.is_on_sale());
        assert!((book.discount_percent().unwrap() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_with_tag_dedupes() {
        let book = Product::new("x", "Title", "Author", 1.0)
            .with_tag("classic")
            .with_tag("classic");
        assert_eq!(book.tags, vec!["classic".to_string()]);
    }

    #[test]
    fn test_remove_product() {
        let mut catalog = Catalog::sample();
        let removed = catalog.remove(&ProductId::new("3")).unwrap();
        assert_eq!(removed.title, "1984");
        assert_eq!(catalog.len(), 7);
        assert!(catalog.get(&ProductId::new("3")).is_none());

        assert!(catalog.remove(&ProductId::new("3")).is_none());
        assert_eq!(catalog.len(), 7);
    }
}
