//! Editing assistance for a code input surface.
//!
//! Everything here is a pure function of the document, the cursor and an
//! [`AssistConfig`]. The hosting widget owns the text and applies the
//! returned [`Edit`] itself.

use smartstring::{
  LazyCompact,
  SmartString,
};

pub mod config;
pub mod detect;
pub mod edit;
pub mod hooks;
pub mod indent;
pub mod lexer;
pub mod pairs;
pub mod selection;
pub mod tabs;

pub use config::AssistConfig;
pub use edit::Edit;
pub use hooks::Input;
pub use selection::Selection;

pub type Tendril = SmartString<LazyCompact>;
