//! Inbound purchase data as sent by integrators.

use core::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use quickorder_core::CustomerId;

/// An identifier that may arrive as a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(serde_json::Number),
    Text(String),
}

impl RawId {
    /// Whether the identifier is actually set: only `""`, `"0"` and `0`
    /// count as absent. Padded text such as `" 0"` is set.
    pub fn is_set(&self) -> bool {
        match self {
            RawId::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
            RawId::Text(s) => !s.is_empty() && s != "0",
        }
    }

    /// Textual form handed to id parsing (`12`, `"12"` → `12`).
    pub fn as_text(&self) -> String {
        match self {
            RawId::Number(n) => match (n.as_u64(), n.as_f64()) {
                (Some(v), _) => v.to_string(),
                (None, Some(v)) if v.fract() == 0.0 && v > 0.0 => format!("{v:.0}"),
                _ => n.to_string(),
            },
            RawId::Text(s) => s.trim().to_string(),
        }
    }
}

/// Name sub-record of the shipping data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShippingName {
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
}

/// Customer part of a purchase request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<RawId>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub shipping_address: ShippingName,
}

impl CustomerData {
    pub fn new(email: impl Into<String>, firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        Self {
            customer_id: None,
            email: email.into(),
            shipping_address: ShippingName {
                firstname: firstname.into(),
                lastname: lastname.into(),
            },
        }
    }

    pub fn with_customer_id(mut self, id: RawId) -> Self {
        self.customer_id = Some(id);
        self
    }

    /// The existing customer referenced by the request, if any.
    ///
    /// `Some(Err(_))` when an id is set but is not a valid customer id.
    pub fn existing_customer(&self) -> Option<Result<CustomerId, quickorder_core::DomainError>> {
        self.customer_id
            .as_ref()
            .filter(|id| id.is_set())
            .map(|id| id.as_text().parse::<CustomerId>())
    }
}

/// Requested quantities keyed by product identifier, in request order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemsData {
    entries: Vec<(String, f64)>,
}

impl ItemsData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, product_id: impl ToString, qty: f64) -> Self {
        self.insert(product_id.to_string(), qty);
        self
    }

    /// Set the quantity for a product. A repeated product keeps its first
    /// position and takes the latest quantity.
    pub fn insert(&mut self, product_id: String, qty: f64) {
        match self.entries.iter_mut().find(|(k, _)| *k == product_id) {
            Some(entry) => entry.1 = qty,
            None => self.entries.push((product_id, qty)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: ToString> FromIterator<(K, f64)> for ItemsData {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut items = Self::new();
        for (k, v) in iter {
            items.insert(k.to_string(), v);
        }
        items
    }
}

/// A quantity sent as a number or a numeric string.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawQty {
    Number(f64),
    Text(String),
}

impl RawQty {
    fn into_f64<E: de::Error>(self) -> Result<f64, E> {
        match self {
            RawQty::Number(v) => Ok(v),
            RawQty::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| E::custom(format!("invalid quantity: {s:?}"))),
        }
    }
}

impl<'de> Deserialize<'de> for ItemsData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ItemsVisitor;

        impl<'de> Visitor<'de> for ItemsVisitor {
            type Value = ItemsData;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of product id to quantity")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut items = ItemsData {
                    entries: Vec::with_capacity(map.size_hint().unwrap_or(0)),
                };
                while let Some((key, qty)) = map.next_entry::<String, RawQty>()? {
                    items.insert(key, qty.into_f64()?);
                }
                Ok(items)
            }
        }

        deserializer.deserialize_map(ItemsVisitor)
    }
}

impl Serialize for ItemsData {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
