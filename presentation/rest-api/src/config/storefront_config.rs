use anyhow::{Context, bail};
use std::collections::HashMap;
use std::env;

use business::domain::storefront::settings::StorefrontSettings;

const DEFAULT_SHIPPING_FEE: i64 = 300;
const DEFAULT_SHOP_CODE: &str = "grazia-doris";

/// Storefront constants and the display weight seed.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    pub settings: StorefrontSettings,
    pub weight_seed: Option<u64>,
}

impl StorefrontConfig {
    /// Load storefront configuration from environment variables
    ///
    /// Environment variables:
    /// - SHIPPING_FEE: Flat fee added to every order (default: 300)
    /// - DEFAULT_SHOP_CODE: Shop listed when none is requested (default: "grazia-doris")
    /// - SHOP_IMAGE_URLS: JSON object mapping shop codes to image URLs (default: empty)
    /// - DISPLAY_WEIGHT_SEED: Seed for reproducible display weights (optional)
    pub fn from_env() -> anyhow::Result<Self> {
        let default_shop_code = env::var("DEFAULT_SHOP_CODE")
            .ok()
            .filter(|code| !code.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SHOP_CODE.to_string());

        Ok(Self {
            settings: StorefrontSettings {
                shipping_fee: parse_shipping_fee(env::var("SHIPPING_FEE").ok().as_deref())?,
                default_shop_code,
                shop_image_urls: parse_shop_image_urls(
                    env::var("SHOP_IMAGE_URLS").ok().as_deref(),
                )?,
            },
            weight_seed: parse_weight_seed(env::var("DISPLAY_WEIGHT_SEED").ok().as_deref())?,
        })
    }
}

fn parse_shipping_fee(raw: Option<&str>) -> anyhow::Result<i64> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_SHIPPING_FEE);
    };
    let fee: i64 = raw
        .trim()
        .parse()
        .with_context(|| format!("SHIPPING_FEE must be an integer, got {:?}", raw))?;
    if fee < 0 {
        bail!("SHIPPING_FEE must not be negative, got {}", fee);
    }
    Ok(fee)
}

fn parse_shop_image_urls(raw: Option<&str>) -> anyhow::Result<HashMap<String, String>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(HashMap::new()),
        Some(json) => serde_json::from_str(json)
            .context("SHOP_IMAGE_URLS must be a JSON object of shop code to image URL"),
    }
}

fn parse_weight_seed(raw: Option<&str>) -> anyhow::Result<Option<u64>> {
    raw.map(|seed| {
        seed.trim()
            .parse()
            .with_context(|| format!("DISPLAY_WEIGHT_SEED must be an unsigned integer, got {:?}", seed))
    })
    .transpose()
}
