use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of the shop whose commissions are displayed.
///
/// Always non-empty and trimmed; blank input means "no shop selected".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShopId(String);

impl ShopId {
    /// Parses raw user or prop input, returning `None` for blank values.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ShopId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| "shop id must not be blank".to_string())
    }
}

impl From<ShopId> for String {
    fn from(id: ShopId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_input() {
        assert_eq!(ShopId::parse("  S1 ").unwrap().as_str(), "S1");
    }

    #[test]
    fn test_blank_input_is_no_shop() {
        assert!(ShopId::parse("").is_none());
        assert!(ShopId::parse("   ").is_none());
    }

    #[test]
    fn test_serde_round_trip_rejects_blank() {
        let id: ShopId = serde_json::from_str("\"S2\"").unwrap();
        assert_eq!(id.to_string(), "S2");
        assert!(serde_json::from_str::<ShopId>("\"\"").is_err());
    }
}
