use crate::domain::catalog::model::Product;
use crate::domain::shared::value_objects::ProductId;

use super::model::CartEntry;

/// A cart entry joined with its live product. `product` is `None` for
/// orphaned entries the catalog no longer returns.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub entry: CartEntry,
    pub product: Option<Product>,
}

/// Cart entry shown on the delete confirmation page.
#[derive(Debug, Clone, PartialEq)]
pub struct CartEntryDetail {
    pub entry: CartEntry,
    pub product: Option<Product>,
    /// Full size image: the primary image URL without its query string.
    pub image_url: Option<String>,
}

impl CartEntryDetail {
    pub fn new(entry: CartEntry, product: Option<Product>) -> Self {
        let image_url = product
            .as_ref()
            .and_then(|p| p.primary_image_url())
            .map(canonical_image_url);

        Self {
            entry,
            product,
            image_url,
        }
    }
}

/// Distinct product ids of the entries, in first-seen order.
pub fn unique_product_ids(entries: &[CartEntry]) -> Vec<ProductId> {
    let mut ids: Vec<ProductId> = Vec::with_capacity(entries.len());
    for entry in entries {
        if !ids.contains(&entry.product_id) {
            ids.push(entry.product_id.clone());
        }
    }
    ids
}

/// Pairs every entry with the product carrying the same id.
///
/// Entries keep their order. Repeated entries share the product, and entries
/// without a match are kept with no product.
pub fn pair_with_products(entries: Vec<CartEntry>, products: &[Product]) -> Vec<CartLine> {
    entries
        .into_iter()
        .map(|entry| {
            let product = products
                .iter()
                .find(|p| p.product_id == entry.product_id)
                .cloned();
            CartLine { entry, product }
        })
        .collect()
}

/// Strips query string and fragment, keeping everything before them
/// byte for byte.
///
/// Thumbnails are served from the same path as the full image with resize
/// parameters in the query.
pub fn canonical_image_url(raw: &str) -> String {
    match raw.find(['?', '#']) {
        Some(end) => raw[..end].to_string(),
        None => raw.to_string(),
    }
}
