//! # Block Actions
//!
//! Turns a [`MarkdownNode`](crate::parsing::blocks::MarkdownNode) forest into
//! the flat `create-block` records a remote batch call applies in order.
//!
//! - **`order`**: `BlockOrder`, where a root block lands among its siblings
//! - **`uid`**: synthetic uid strategies (`SequentialUids`, `RandomUids`)
//! - **`record`**: `BlockAction` and `Batch` with their wire form
//! - **`linearize`**: depth-first pre-order walk that wires parent uids
//!
//! A parent's action always precedes the actions of its children, since
//! the remote side resolves a parent uid by its earlier occurrence in the
//! same batch.

pub mod linearize;
pub mod order;
pub mod record;
pub mod uid;

pub use linearize::linearize;
pub use order::{BlockOrder, ParseOrderError};
pub use record::{Batch, BlockAction};
pub use uid::{ParseUidStrategyError, RandomUids, SequentialUids, UidSource, UidStrategy};
