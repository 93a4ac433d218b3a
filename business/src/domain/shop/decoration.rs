use crate::domain::catalog::model::Product;

use super::weights::WeightSource;

/// Weight of the first product in a listing; it always gets the featured slot.
pub const FEATURED_WEIGHT: f64 = 1.0;

/// Product as shown in a shop listing.
#[derive(Debug, Clone, PartialEq)]
pub struct DecoratedProduct {
    pub product: Product,
    /// One slot per star to draw, `0..star_count`.
    pub stars: Vec<u32>,
    pub display_weight: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShopListing {
    pub shop_code: String,
    pub products: Vec<DecoratedProduct>,
    /// Standalone weight sequence, one per product, drawn separately from the
    /// per-product weights with the same first-slot pinning.
    pub display_weights: Vec<f64>,
}

/// Review average rounded half-to-even, never below one star.
pub fn star_count(review_average: f64) -> u32 {
    let rounded = review_average.round_ties_even();
    if rounded.is_nan() || rounded < 1.0 {
        return 1;
    }
    rounded as u32
}

/// Weights for `len` slots: the first is pinned, the rest are drawn.
pub fn display_weights(len: usize, source: &dyn WeightSource) -> Vec<f64> {
    (0..len)
        .map(|index| {
            if index == 0 {
                FEATURED_WEIGHT
            } else {
                source.next_weight()
            }
        })
        .collect()
}

pub fn decorate(shop_code: String, products: Vec<Product>, source: &dyn WeightSource) -> ShopListing {
    let weights = display_weights(products.len(), source);
    let products: Vec<DecoratedProduct> = products
        .into_iter()
        .zip(weights)
        .map(|(product, display_weight)| DecoratedProduct {
            stars: (0..star_count(product.review_average)).collect(),
            product,
            display_weight,
        })
        .collect();

    let display_weights = display_weights(products.len(), source);

    ShopListing {
        shop_code,
        products,
        display_weights,
    }
}
