//! Industry and keyword matching for static content.
//!
//! Matching is membership and substring only. There is no scoring and the
//! catalog's curated order is always preserved.

use crate::content::RelevanceTagged;
use crate::products::Product;

fn name_matches(product_name: &str, keywords: &[String]) -> bool {
    let name = product_name.to_lowercase();
    keywords
        .iter()
        .map(|keyword| keyword.trim().to_lowercase())
        .filter(|keyword| !keyword.is_empty())
        .any(|keyword| name.contains(&keyword))
}

/// Whether `item` should be shown to a company in `industry` that imports
/// `products`.
///
/// A blank industry applies no filter. Otherwise the item must list the
/// industry, or one of its keywords must appear in a product name.
pub fn is_relevant<T: RelevanceTagged>(item: &T, industry: &str, products: &[Product]) -> bool {
    let industry = industry.trim();
    if industry.is_empty() {
        return true;
    }
    if item
        .industries()
        .iter()
        .any(|tag| tag.trim().eq_ignore_ascii_case(industry))
    {
        return true;
    }
    products
        .iter()
        .any(|product| name_matches(&product.name, item.related_keywords()))
}

/// Keeps the items relevant to `industry` and `products`, in catalog order.
pub fn filter_relevant<T: RelevanceTagged + Clone>(
    items: &[T],
    industry: &str,
    products: &[Product],
) -> Vec<T> {
    items
        .iter()
        .filter(|item| is_relevant(*item, industry, products))
        .cloned()
        .collect()
}

/// Names of the products whose name contains one of `item`'s keywords,
/// in product order.
pub fn related_products<T: RelevanceTagged>(item: &T, products: &[Product]) -> Vec<String> {
    products
        .iter()
        .filter(|product| name_matches(&product.name, item.related_keywords()))
        .map(|product| product.name.clone())
        .collect()
}
