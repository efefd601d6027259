use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Position of a new block among its siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "OrderRepr", into = "OrderRepr")]
pub enum BlockOrder {
    First,
    #[default]
    Last,
    /// Zero-based index among the existing children.
    Index(u32),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid block order {0:?}: expected \"first\", \"last\" or a non-negative integer")]
pub struct ParseOrderError(pub String);

/// On the wire an order is either a keyword or a bare integer.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum OrderRepr {
    Index(u32),
    Named(String),
}

impl TryFrom<OrderRepr> for BlockOrder {
    type Error = ParseOrderError;

    fn try_from(repr: OrderRepr) -> Result<Self, Self::Error> {
        match repr {
            OrderRepr::Index(i) => Ok(BlockOrder::Index(i)),
            OrderRepr::Named(name) => match name.as_str() {
                "first" => Ok(BlockOrder::First),
                "last" => Ok(BlockOrder::Last),
                _ => Err(ParseOrderError(name)),
            },
        }
    }
}

impl From<BlockOrder> for OrderRepr {
    fn from(order: BlockOrder) -> Self {
        match order {
            BlockOrder::First => OrderRepr::Named("first".into()),
            BlockOrder::Last => OrderRepr::Named("last".into()),
            BlockOrder::Index(i) => OrderRepr::Index(i),
        }
    }
}

impl FromStr for BlockOrder {
    type Err = ParseOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "first" => Ok(BlockOrder::First),
            "last" => Ok(BlockOrder::Last),
            other => other
                .parse()
                .map(BlockOrder::Index)
                .map_err(|_| ParseOrderError(s.to_string())),
        }
    }
}

impl fmt::Display for BlockOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockOrder::First => f.write_str("first"),
            BlockOrder::Last => f.write_str("last"),
            BlockOrder::Index(i) => write!(f, "{i}"),
        }
    }
}
