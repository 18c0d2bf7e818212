//! Catalog query builder.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::catalog::Product;
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Sort options for catalog listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Catalog order.
    #[default]
    Default,
    /// Sort by price, low to high.
    PriceLowHigh,
    /// Sort by price, high to low.
    PriceHighLow,
    /// Sort by title A-Z.
    NameAZ,
    /// Sort by title Z-A.
    NameZA,
    /// Sort by rating, highest first.
    RatingHighLow,
}

impl SortOption {
    pub const ALL: [SortOption; 6] = [
        SortOption::Default,
        SortOption::PriceLowHigh,
        SortOption::PriceHighLow,
        SortOption::NameAZ,
        SortOption::NameZA,
        SortOption::RatingHighLow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Default => "default",
            SortOption::PriceLowHigh => "price-low-high",
            SortOption::PriceHighLow => "price-high-low",
            SortOption::NameAZ => "name-a-z",
            SortOption::NameZA => "name-z-a",
            SortOption::RatingHighLow => "rating-high-low",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Default => "Featured",
            SortOption::PriceLowHigh => "Price: Low to High",
            SortOption::PriceHighLow => "Price: High to Low",
            SortOption::NameAZ => "Name: A-Z",
            SortOption::NameZA => "Name: Z-A",
            SortOption::RatingHighLow => "Highest Rated",
        }
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOption::Default => Ordering::Equal,
            SortOption::PriceLowHigh => a.price.total_cmp(&b.price),
            SortOption::PriceHighLow => b.price.total_cmp(&a.price),
            SortOption::NameAZ => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            SortOption::NameZA => b.title.to_lowercase().cmp(&a.title.to_lowercase()),
            SortOption::RatingHighLow => b.rating.total_cmp(&a.rating),
        }
    }
}

impl FromStr for SortOption {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| CommerceError::InvalidFieldValue {
                field: "sort".to_string(),
                value: s.to_string(),
            })
    }
}

/// A catalog query.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CatalogQuery {
    /// Text query matched against title, author and tags.
    pub text: Option<String>,
    /// Exact category slug.
    pub category: Option<String>,
    /// Sort option.
    pub sort: SortOption,
}

impl CatalogQuery {
    /// Create an empty query (everything, catalog order).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text query. Blank text is ignored.
    pub fn with_text(mut self, q: impl Into<String>) -> Self {
        let q = q.into();
        if !q.trim().is_empty() {
            self.text = Some(q);
        }
        self
    }

    /// Restrict to a category. Blank category is ignored.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        if !category.is_empty() {
            self.category = Some(category);
        }
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Filter then sort. The sort is stable so ties keep catalog order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let needle = self.text.as_ref().map(|t| t.to_lowercase());

        let mut result: Vec<&Product> = products
            .iter()
            .filter(|p| needle.as_deref().map_or(true, |n| p.matches_text(n)))
            .filter(|p| self.category.as_deref().map_or(true, |c| p.category == c))
            .collect();

        result.sort_by(|a, b| self.sort.compare(a, b));
        result
    }
}

/// Admin product listing filter.
///
/// Unlike [`CatalogQuery`] the text is matched against title and author
/// only, and results keep catalog order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductFilter {
    /// Case-insensitive text; empty matches everything.
    pub search: String,
    /// Exact category slug.
    pub category: Option<String>,
}

impl ProductFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Restrict to a category. Blank category is ignored.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = (!category.is_empty()).then_some(category);
        self
    }

    pub fn matches(&self, product: &Product) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = product.title.to_lowercase().contains(&needle)
            || product.author.to_lowercase().contains(&needle);

        matches_search
            && self
                .category
                .as_deref()
                .map_or(true, |c| product.category == c)
    }
}
