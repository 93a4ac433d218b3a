use crate::domain::shared::value_objects::ProductId;

/// Product record owned by the external catalog. Read-only for this system.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub product_id: ProductId,
    pub item_name: String,
    pub item_price: i64,
    pub review_average: f64,
    pub medium_image_urls: Vec<String>,
    pub item_code: String,
    pub shop_code: String,
    pub item_url: Option<String>,
}

impl Product {
    /// First medium image, used as the primary display image.
    pub fn primary_image_url(&self) -> Option<&str> {
        self.medium_image_urls.first().map(String::as_str)
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::product;

    #[test]
    fn should_return_first_medium_image_as_primary() {
        let mut p = product("A", 1000);
        p.medium_image_urls = vec!["https://a/1.jpg".to_string(), "https://a/2.jpg".to_string()];

        assert_eq!(p.primary_image_url(), Some("https://a/1.jpg"));
    }

    #[test]
    fn should_return_none_when_product_has_no_images() {
        let mut p = product("A", 1000);
        p.medium_image_urls.clear();

        assert!(p.primary_image_url().is_none());
    }
}
