use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Hands out the uids of newly created blocks.
///
/// Uids only need to be unique within one batch: they let a child action
/// name its parent before the remote side has created it.
pub trait UidSource {
    fn next_uid(&mut self) -> String;
}

/// Batch prefix plus a monotonic base-36 counter: `3f9a1c-0`, `3f9a1c-1`, ...
#[derive(Debug, Clone)]
pub struct SequentialUids {
    prefix: String,
    next: u64,
}

impl SequentialUids {
    pub const PREFIX_LEN: usize = 6;

    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }

    /// A source with a fresh random prefix.
    pub fn for_batch() -> Self {
        let mut prefix = Uuid::new_v4().simple().to_string();
        prefix.truncate(Self::PREFIX_LEN);
        Self::new(prefix)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl UidSource for SequentialUids {
    fn next_uid(&mut self) -> String {
        let uid = format!("{}-{}", self.prefix, base36(self.next));
        self.next += 1;
        uid
    }
}

fn base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut buf = vec![];
    loop {
        buf.push(DIGITS[(n % 36) as usize]);
        n /= 36;
        if n == 0 {
            break;
        }
    }
    buf.iter().rev().map(|&b| char::from(b)).collect()
}

/// A fresh v4 uuid per block, as 32 lowercase hex characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomUids;

impl UidSource for RandomUids {
    fn next_uid(&mut self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

/// Which [`UidSource`] a conversion uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UidStrategy {
    #[default]
    Sequential,
    Random,
}

impl UidStrategy {
    pub fn source(self) -> Box<dyn UidSource> {
        match self {
            UidStrategy::Sequential => Box::new(SequentialUids::for_batch()),
            UidStrategy::Random => Box::new(RandomUids),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown uid strategy {0:?}: expected \"sequential\" or \"random\"")]
pub struct ParseUidStrategyError(pub String);

impl FromStr for UidStrategy {
    type Err = ParseUidStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sequential" => Ok(UidStrategy::Sequential),
            "random" => Ok(UidStrategy::Random),
            _ => Err(ParseUidStrategyError(s.to_string())),
        }
    }
}

impl fmt::Display for UidStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UidStrategy::Sequential => f.write_str("sequential"),
            UidStrategy::Random => f.write_str("random"),
        }
    }
}
