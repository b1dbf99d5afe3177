//! Service configuration, read from the environment at startup.
//!
//! | variable | default |
//! |---|---|
//! | `QUICKORDER_BIND_ADDR` | `0.0.0.0:8080` |
//! | `QUICKORDER_STORE_ID` | `1` |
//! | `QUICKORDER_WEBSITE_ID` | `1` |
//! | `QUICKORDER_BASE_CURRENCY` | `USD` |
//! | `QUICKORDER_DISPLAY_CURRENCY` | base currency |
//! | `QUICKORDER_SHIPPING_RATE_CODE` | `freeshipping_freeshipping` |
//! | `QUICKORDER_SHIPPING_METHOD` | `flatrate_flatrate` |
//! | `QUICKORDER_PAYMENT_METHOD` | `checkmo` |
//! | `QUICKORDER_INITIAL_PASSWORD` | `email` (`email` or `none`) |
//! | `QUICKORDER_SEED_DEMO` | `false` |

use std::net::SocketAddr;

use anyhow::{Context, anyhow};

use quickorder_core::{StoreContext, StoreId, WebsiteId};
use quickorder_purchase::{InitialPassword, PurchasePolicy};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub store: StoreContext,
    pub policy: PurchasePolicy,
    /// Seed the in-memory host with a demo catalog and customer.
    pub seed_demo: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            store: StoreContext::default(),
            policy: PurchasePolicy::default(),
            seed_demo: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = match get("QUICKORDER_BIND_ADDR") {
            Some(v) => v
                .parse::<SocketAddr>()
                .with_context(|| format!("QUICKORDER_BIND_ADDR: invalid socket address {v:?}"))?,
            None => defaults.bind_addr,
        };

        let store_id = match get("QUICKORDER_STORE_ID") {
            Some(v) => StoreId::new(parse_u64("QUICKORDER_STORE_ID", &v)?),
            None => defaults.store.store_id,
        };
        let website_id = match get("QUICKORDER_WEBSITE_ID") {
            Some(v) => WebsiteId::new(parse_u64("QUICKORDER_WEBSITE_ID", &v)?),
            None => defaults.store.website_id,
        };
        let base_currency = get("QUICKORDER_BASE_CURRENCY")
            .map(|v| v.trim().to_ascii_uppercase())
            .unwrap_or_else(|| defaults.store.base_currency.clone());
        let display_currency = get("QUICKORDER_DISPLAY_CURRENCY")
            .map(|v| v.trim().to_ascii_uppercase())
            .unwrap_or_else(|| base_currency.clone());

        let store = StoreContext::new(store_id, website_id, base_currency)
            .with_default_currency(display_currency);

        let mut policy = defaults.policy;
        if let Some(v) = get("QUICKORDER_SHIPPING_RATE_CODE") {
            policy.shipping_rate_code = v;
        }
        if let Some(v) = get("QUICKORDER_SHIPPING_METHOD") {
            policy.shipping_method = v;
        }
        if let Some(v) = get("QUICKORDER_PAYMENT_METHOD") {
            policy.payment_method = v;
        }
        match get("QUICKORDER_INITIAL_PASSWORD") {
            Some(v) => {
                policy.initial_password = v
                    .parse::<InitialPassword>()
                    .map_err(|e| anyhow!("QUICKORDER_INITIAL_PASSWORD: {e}"))?;
            }
            None => {
                tracing::warn!(
                    "QUICKORDER_INITIAL_PASSWORD not set; new customers get their email as password"
                );
            }
        }

        let seed_demo = match get("QUICKORDER_SEED_DEMO") {
            Some(v) => parse_bool("QUICKORDER_SEED_DEMO", &v)?,
            None => defaults.seed_demo,
        };

        Ok(Self {
            bind_addr,
            store,
            policy,
            seed_demo,
        })
    }
}

fn parse_u64(key: &str, value: &str) -> anyhow::Result<u64> {
    value
        .trim()
        .parse::<u64>()
        .with_context(|| format!("{key}: expected a positive integer, got {value:?}"))
}

fn parse_bool(key: &str, value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(anyhow!("{key}: expected a boolean, got {other:?}")),
    }
}
