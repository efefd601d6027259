use serde::{Deserialize, Serialize, Serializer, ser::SerializeStruct};

use super::order::BlockOrder;
use crate::convert::ConvertError;

/// One `create-block` operation.
///
/// `parent_uid` is either the caller's existing container or the `uid` of
/// an action earlier in the same batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WireAction", into = "WireAction")]
pub struct BlockAction {
    pub uid: String,
    pub parent_uid: String,
    pub order: BlockOrder,
    pub text: String,
    pub heading: Option<u8>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum WireKind {
    CreateBlock,
}

#[derive(Serialize, Deserialize)]
struct WireLocation {
    #[serde(rename = "parent-uid")]
    parent_uid: String,
    order: BlockOrder,
}

#[derive(Serialize, Deserialize)]
struct WireBlock {
    uid: String,
    string: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    heading: Option<u8>,
}

#[derive(Serialize, Deserialize)]
struct WireAction {
    action: WireKind,
    location: WireLocation,
    block: WireBlock,
}

impl From<BlockAction> for WireAction {
    fn from(a: BlockAction) -> Self {
        WireAction {
            action: WireKind::CreateBlock,
            location: WireLocation {
                parent_uid: a.parent_uid,
                order: a.order,
            },
            block: WireBlock {
                uid: a.uid,
                string: a.text,
                heading: a.heading,
            },
        }
    }
}

impl From<WireAction> for BlockAction {
    fn from(w: WireAction) -> Self {
        BlockAction {
            uid: w.block.uid,
            parent_uid: w.location.parent_uid,
            order: w.location.order,
            text: w.block.string,
            heading: w.block.heading,
        }
    }
}

/// The ordered action list of one conversion, submitted as a single
/// `batch-actions` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batch {
    actions: Vec<BlockAction>,
}

impl Batch {
    pub const ACTION: &'static str = "batch-actions";

    pub fn new(actions: Vec<BlockAction>) -> Self {
        Self { actions }
    }

    pub fn actions(&self) -> &[BlockAction] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// For callers that need at least one created block.
    pub fn ensure_not_empty(self) -> Result<Self, ConvertError> {
        if self.is_empty() {
            return Err(ConvertError::NoBlocks);
        }
        Ok(self)
    }
}

impl Serialize for Batch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Batch", 2)?;
        state.serialize_field("action", Self::ACTION)?;
        state.serialize_field("actions", &self.actions)?;
        state.end()
    }
}
