//! Sort modes for product listings.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Sort options for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Catalog order.
    #[default]
    Featured,
    /// Sort by effective price, low to high.
    PriceAsc,
    /// Sort by effective price, high to low.
    PriceDesc,
    /// Sort by newest first.
    Newest,
    /// Sort by highest rated.
    Rating,
}

impl SortOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Featured => "featured",
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::Newest => "newest",
            SortOption::Rating => "rating",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Featured => "Featured",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::Newest => "Newest",
            SortOption::Rating => "Highest Rated",
        }
    }
}

impl FromStr for SortOption {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "featured" => Ok(SortOption::Featured),
            "price-asc" => Ok(SortOption::PriceAsc),
            "price-desc" => Ok(SortOption::PriceDesc),
            "newest" => Ok(SortOption::Newest),
            "rating" => Ok(SortOption::Rating),
            _ => Err(()),
        }
    }
}

/// Return the products in sorted order without touching the input.
///
/// The sort is stable, so equal keys keep their input order.
pub fn sort_products<'a>(products: &[&'a Product], sort: SortOption) -> Vec<&'a Product> {
    let mut sorted = products.to_vec();
    match sort {
        SortOption::Featured => {}
        SortOption::PriceAsc => {
            sorted.sort_by(|a, b| a.effective_price().total_cmp(&b.effective_price()))
        }
        SortOption::PriceDesc => {
            sorted.sort_by(|a, b| b.effective_price().total_cmp(&a.effective_price()))
        }
        SortOption::Newest => sorted.sort_by_key(|p| std::cmp::Reverse(p.created_at_millis())),
        SortOption::Rating => sorted.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::product;

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    fn catalog() -> Vec<Product> {
        let mut a = product("a", "Rings", 300.0);
        a.created_at = Some("2024-03-01T10:00:00Z".to_string());
        a.rating = 4.0;

        let mut b = product("b", "Rings", 150.0);
        b.sale_price = Some(100.0);
        b.created_at = Some("garbage".to_string());
        b.rating = 4.8;

        let mut c = product("c", "Rings", 120.0);
        c.created_at = Some("2024-05-20T08:30:00Z".to_string());
        c.rating = 4.0;

        let d = product("d", "Rings", 500.0);

        vec![a, b, c, d]
    }

    #[test]
    fn test_featured_preserves_order() {
        let products = catalog();
        let refs: Vec<&Product> = products.iter().collect();
        assert_eq!(ids(&sort_products(&refs, SortOption::Featured)), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_price_sorts_use_effective_price() {
        let products = catalog();
        let refs: Vec<&Product> = products.iter().collect();

        let asc = sort_products(&refs, SortOption::PriceAsc);
        assert_eq!(ids(&asc), vec!["b", "c", "a", "d"]);

        let mut desc = ids(&sort_products(&refs, SortOption::PriceDesc));
        desc.reverse();
        assert_eq!(ids(&asc), desc);
    }

    #[test]
    fn test_newest_treats_bad_timestamps_as_oldest() {
        let products = catalog();
        let refs: Vec<&Product> = products.iter().collect();
        // b (garbage) and d (missing) tie at epoch 0 and keep input order.
        assert_eq!(ids(&sort_products(&refs, SortOption::Newest)), vec!["c", "a", "b", "d"]);
    }

    #[test]
    fn test_rating_desc_is_stable() {
        let products = catalog();
        let refs: Vec<&Product> = products.iter().collect();
        assert_eq!(ids(&sort_products(&refs, SortOption::Rating)), vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn test_input_is_untouched() {
        let products = catalog();
        let refs: Vec<&Product> = products.iter().collect();
        let _ = sort_products(&refs, SortOption::PriceDesc);
        assert_eq!(ids(&refs), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_parse_round_trip() {
        for sort in [
            SortOption::Featured,
            SortOption::PriceAsc,
            SortOption::PriceDesc,
            SortOption::Newest,
            SortOption::Rating,
        ] {
            assert_eq!(sort.as_str().parse::<SortOption>(), Ok(sort));
        }
        assert!("cheapest".parse::<SortOption>().is_err());
    }
}
