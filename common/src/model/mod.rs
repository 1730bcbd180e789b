pub mod canvas;
pub mod language;
pub mod template;
