use serde::{Deserialize, Serialize};

use crate::model::canvas::CanvasSize;

/// Snapshot of the designer's document settings, as handed to whatever
/// persists templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDocument {
    pub name: String,
    pub canvas: CanvasSize,
    pub preset: String,
    pub transparent_background: bool,
}
