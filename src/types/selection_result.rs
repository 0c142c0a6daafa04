use crate::types::bounding_box::BoundingBox;
use serde::{Deserialize, Serialize};

/// The value reported to the parent application whenever a selection completes
/// or is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "bounds", rename_all = "camelCase")]
pub enum SelectionResult {
    /// A completed selection.
    Area(BoundingBox),
    /// No area is selected.
    #[default]
    None,
}

impl SelectionResult {
    pub fn bounding_box(&self) -> Option<&BoundingBox> {
        match self {
            SelectionResult::Area(bbox) => Some(bbox),
            SelectionResult::None => None,
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, SelectionResult::Area(_))
    }
}

impl From<Option<BoundingBox>> for SelectionResult {
    fn from(value: Option<BoundingBox>) -> Self {
        value.map_or(SelectionResult::None, SelectionResult::Area)
    }
}
