use std::collections::HashMap;

/// Storefront-wide constants injected into the aggregation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontSettings {
    /// Flat surcharge added to every order.
    pub shipping_fee: i64,
    /// Shop shown when a listing is requested without a shop code.
    pub default_shop_code: String,
    /// Display image per shop, used to pick which promotional videos are shown.
    pub shop_image_urls: HashMap<String, String>,
}

impl StorefrontSettings {
    pub fn shop_image_url(&self, shop_code: &str) -> Option<&str> {
        self.shop_image_urls.get(shop_code).map(String::as_str)
    }

    /// Returns the requested shop code, or the default one when absent or blank.
    pub fn resolve_shop_code(&self, requested: Option<&str>) -> String {
        match requested.map(str::trim) {
            Some(code) if !code.is_empty() => code.to_string(),
            _ => self.default_shop_code.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> StorefrontSettings {
        StorefrontSettings {
            shipping_fee: 300,
            default_shop_code: "grazia-doris".to_string(),
            shop_image_urls: HashMap::from([(
                "grazia-doris".to_string(),
                "https://img.example.com/grazia.png".to_string(),
            )]),
        }
    }

    #[test]
    fn should_fall_back_to_default_shop_code_when_absent() {
        assert_eq!(settings().resolve_shop_code(None), "grazia-doris");
    }

    #[test]
    fn should_fall_back_to_default_shop_code_when_blank() {
        assert_eq!(settings().resolve_shop_code(Some("  ")), "grazia-doris");
    }

    #[test]
    fn should_keep_requested_shop_code() {
        assert_eq!(settings().resolve_shop_code(Some("other-shop")), "other-shop");
    }

    #[test]
    fn should_look_up_shop_image_url() {
        let settings = settings();
        assert_eq!(
            settings.shop_image_url("grazia-doris"),
            Some("https://img.example.com/grazia.png")
        );
        assert!(settings.shop_image_url("unknown").is_none());
    }
}
