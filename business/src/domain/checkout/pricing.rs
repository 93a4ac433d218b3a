use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;

/// Priced order ready to be confirmed.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    pub products: Vec<Product>,
    /// Sum of the item prices, shipping excluded.
    pub order_total: i64,
    pub shipping_fee: i64,
    /// `order_total + shipping_fee`.
    pub total_price: i64,
    /// Cart entries whose product could not be resolved and are not billed.
    pub unresolved_entries: usize,
}

/// Result of opening the checkout page.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutView {
    Ready(OrderSummary),
    /// Nothing billable in the cart; the caller sends the user back to browsing.
    EmptyCart,
}

/// Sum of the item prices, `None` on overflow.
pub fn order_total(products: &[Product]) -> Option<i64> {
    products
        .iter()
        .try_fold(0i64, |total, p| total.checked_add(p.item_price))
}

/// Prices the given products. Returns `Ok(None)` when there is nothing to
/// bill, so an empty order can never be presented as a valid one.
///
/// Prices that overflow the total come from a broken catalog response.
pub fn summarize(
    products: Vec<Product>,
    shipping_fee: i64,
) -> Result<Option<OrderSummary>, CatalogError> {
    if products.is_empty() {
        return Ok(None);
    }

    let order_total = order_total(&products).ok_or(CatalogError::InvalidResponse)?;
    let total_price = order_total
        .checked_add(shipping_fee)
        .ok_or(CatalogError::InvalidResponse)?;

    Ok(Some(OrderSummary {
        products,
        order_total,
        shipping_fee,
        total_price,
        unresolved_entries: 0,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::model::fixtures::product;
    use proptest::prelude::*;

    #[test]
    fn should_add_shipping_fee_to_order_total() {
        let summary = summarize(vec![product("A", 1000), product("B", 1500)], 300)
            .unwrap()
            .unwrap();

        assert_eq!(summary.order_total, 2500);
        assert_eq!(summary.total_price, 2800);
        assert_eq!(summary.shipping_fee, 300);
    }

    #[test]
    fn should_refuse_to_price_empty_order() {
        assert!(summarize(vec![], 300).unwrap().is_none());
    }

    #[test]
    fn should_count_repeated_products_once_per_occurrence() {
        let summary = summarize(vec![product("A", 700), product("A", 700)], 0)
            .unwrap()
            .unwrap();

        assert_eq!(summary.order_total, 1400);
    }

    #[test]
    fn should_reject_prices_that_overflow_the_total() {
        let result = summarize(vec![product("A", i64::MAX), product("B", 1)], 0);

        assert_eq!(result.unwrap_err(), CatalogError::InvalidResponse);
    }

    #[test]
    fn should_reject_shipping_fee_that_overflows_the_total() {
        let result = summarize(vec![product("A", i64::MAX)], 300);

        assert_eq!(result.unwrap_err(), CatalogError::InvalidResponse);
    }

    proptest! {
        #[test]
        fn total_is_sum_of_prices_plus_fee(
            prices in proptest::collection::vec(0i64..1_000_000, 1..20),
            fee in 0i64..10_000,
        ) {
            let products: Vec<_> = prices
                .iter()
                .enumerate()
                .map(|(i, price)| product(&i.to_string(), *price))
                .collect();

            let summary = summarize(products, fee).unwrap().unwrap();

            prop_assert_eq!(summary.order_total, prices.iter().sum::<i64>());
            prop_assert_eq!(summary.total_price, summary.order_total + fee);
        }
    }
}
