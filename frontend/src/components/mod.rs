pub mod designer;
pub mod tooltip;
