use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A price as supplied by the caller: stored without normalization, so both
/// numeric and string representations survive a round trip through the store.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Price {
    Number(f64),
    Text(String),
}

impl FromStr for Price {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<f64>().map_or_else(|_| Self::Text(s.to_string()), Self::Number))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// An order record. `title` is the natural (non-enforced) key for
/// single-record lookup and delete; duplicates are allowed, and under
/// duplicates the store picks an arbitrary match.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OrderRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub description: String,
    pub start_price: Price,
    pub reserve_price: Price,
}

impl OrderRecord {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        start_price: Price,
        reserve_price: Price,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: description.into(),
            start_price,
            reserve_price,
        }
    }
}
