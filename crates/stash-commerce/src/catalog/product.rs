//! Product types.

use crate::error::CommerceError;
use crate::money::Price;
use serde::{Deserialize, Serialize};

/// A product listed on the storefront.
///
/// Immutable once indexed. The name doubles as the identity key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Display name, unique within the catalog.
    pub name: String,
    /// Current price.
    pub price: Price,
    /// Image reference (URL).
    pub image: String,
    /// Leaf category.
    pub category: String,
}

impl Product {
    /// Create a product.
    pub fn new(
        name: impl Into<String>,
        price: u64,
        image: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price: Price::new(price),
            image: image.into(),
            category: category.into(),
        }
    }

    /// Build a product from a rendered entry.
    ///
    /// `position` is the entry's index in the rendered list and only feeds the
    /// error message.
    pub fn from_entry(entry: &CatalogEntry, position: usize) -> Result<Self, CommerceError> {
        let invalid = |reason: &str| CommerceError::InvalidEntry {
            position,
            reason: reason.to_string(),
        };

        let name = entry
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| invalid("missing name"))?;
        let price = entry
            .price
            .as_ref()
            .ok_or_else(|| invalid("missing price"))?;
        let price = parse_price(price).ok_or_else(|| invalid("unreadable price"))?;
        let image = entry
            .image
            .as_deref()
            .filter(|i| !i.is_empty())
            .ok_or_else(|| invalid("missing image"))?;
        let category = entry
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .ok_or_else(|| invalid("missing category"))?;

        Ok(Self {
            name: name.to_string(),
            price,
            image: image.to_string(),
            category: category.to_string(),
        })
    }
}

/// A product card as rendered on the page, before validation.
///
/// Every field is optional because the page may be missing pieces; entries
/// that lack any of them never make it into the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogEntry {
    /// Heading text.
    #[serde(default)]
    pub name: Option<String>,
    /// Price as rendered: text such as `"250 EGP"`, or a bare number.
    #[serde(default)]
    pub price: Option<serde_json::Value>,
    /// Image source.
    #[serde(default)]
    pub image: Option<String>,
    /// Category data attribute.
    #[serde(default)]
    pub category: Option<String>,
}

impl CatalogEntry {
    /// Entry with every field present and price rendered as text.
    pub fn new(name: &str, price_text: &str, image: &str, category: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            price: Some(serde_json::Value::String(price_text.to_string())),
            image: Some(image.to_string()),
            category: Some(category.to_string()),
        }
    }
}

fn parse_price(value: &serde_json::Value) -> Option<Price> {
    match value {
        serde_json::Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f >= 0.0).map(|f| f as u64))
            .map(Price::new),
        serde_json::Value::String(s) => parse_leading_int(s).map(Price::new),
        _ => None,
    }
}

/// Read the integer at the start of `text`, ignoring whatever follows it.
///
/// Leading whitespace and a `+` sign are accepted; a `-` sign is not, since
/// prices are never negative.
pub fn parse_leading_int(text: &str) -> Option<u64> {
    let rest = text.trim_start();
    let rest = rest.strip_prefix('+').unwrap_or(rest);
    let digits: &str = {
        let end = rest
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map_or(rest.len(), |(i, _)| i);
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("250"), Some(250));
        assert_eq!(parse_leading_int("  250 EGP"), Some(250));
        assert_eq!(parse_leading_int("+40"), Some(40));
        assert_eq!(parse_leading_int("1,200"), Some(1));
        assert_eq!(parse_leading_int("EGP 250"), None);
        assert_eq!(parse_leading_int("-5"), None);
        assert_eq!(parse_leading_int(""), None);
    }

    #[test]
    fn test_from_entry() {
        let entry = CatalogEntry::new("Graphic Tee", "450 EGP", "/img/tee.jpg", "tees");
        let product = Product::from_entry(&entry, 0).unwrap();
        assert_eq!(product, Product::new("Graphic Tee", 450, "/img/tee.jpg", "tees"));
    }

    #[test]
    fn test_from_entry_numeric_price() {
        let entry = CatalogEntry {
            price: Some(serde_json::json!(99)),
            ..CatalogEntry::new("Cap", "", "/img/cap.jpg", "hats")
        };
        assert_eq!(Product::from_entry(&entry, 0).unwrap().price, Price::new(99));
    }

    #[test]
    fn test_from_entry_fractional_price_truncates() {
        let entry = CatalogEntry {
            price: Some(serde_json::json!(99.5)),
            ..CatalogEntry::new("Cap", "", "/img/cap.jpg", "hats")
        };
        assert_eq!(Product::from_entry(&entry, 0).unwrap().price, Price::new(99));

        let negative = CatalogEntry { price: Some(serde_json::json!(-1.5)), ..entry };
        assert!(Product::from_entry(&negative, 0).is_err());
    }

    #[test]
    fn test_from_entry_missing_fields() {
        let full = CatalogEntry::new("Cap", "99", "/img/cap.jpg", "hats");

        let no_name = CatalogEntry { name: None, ..full.clone() };
        let blank_name = CatalogEntry { name: Some("   ".into()), ..full.clone() };
        let bad_price = CatalogEntry { price: Some(serde_json::json!("free")), ..full.clone() };
        let no_image = CatalogEntry { image: None, ..full.clone() };
        let no_category = CatalogEntry { category: None, ..full };

        for entry in [no_name, blank_name, bad_price, no_image, no_category] {
            let err = Product::from_entry(&entry, 7).unwrap_err();
            assert!(matches!(err, CommerceError::InvalidEntry { position: 7, .. }));
        }
    }

    #[test]
    fn test_entry_deserializes_with_gaps() {
        let entry: CatalogEntry = serde_json::from_str(r#"{"name":"Cap"}"#).unwrap();
        assert_eq!(entry.name.as_deref(), Some("Cap"));
        assert!(entry.price.is_none());
    }
}
