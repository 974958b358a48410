//! Engine configuration.
//!
//! The configuration is passed explicitly to every entry point. It can be
//! built in code or read from TOML:
//!
//! ```
//! use the_assist::AssistConfig;
//!
//! let config = AssistConfig::from_toml(
//!   r#"
//!     indent-width = 4
//!     pairs = [["{", "}"], ["(", ")"], ['"', '"']]
//!   "#,
//! )
//! .unwrap();
//! assert_eq!(config.indent_width, 4);
//! assert!(config.pairs.is_open_brace('"'));
//! assert!(!config.pairs.is_open_brace('['));
//! ```

use serde::{
  Deserialize,
  Serialize,
};
use thiserror::Error;

use crate::pairs::PairTable;

pub const DEFAULT_INDENT_WIDTH: usize = 2;
pub const MAX_INDENT_WIDTH: usize = 16;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
  #[error(transparent)]
  Parse(#[from] toml::de::Error),
  #[error("indent width must be between 1 and {max}, got {0}", max = MAX_INDENT_WIDTH)]
  IndentWidth(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct AssistConfig {
  /// Width in spaces of one indentation level.
  pub indent_width:     usize,
  pub pairs:            PairTable,
  /// Skip delimiters inside strings and comments when counting depth.
  pub context_aware:    bool,
  /// Only auto-close when the surrounding chars are not word chars.
  pub guard_word_chars: bool,
}

impl Default for AssistConfig {
  fn default() -> Self {
    Self {
      indent_width:     DEFAULT_INDENT_WIDTH,
      pairs:            PairTable::default(),
      context_aware:    true,
      guard_word_chars: false,
    }
  }
}

impl AssistConfig {
  pub fn from_toml(source: &str) -> Result<Self> {
    let config: Self = toml::from_str(source)?;
    config.validate()?;
    tracing::debug!(
      indent_width = config.indent_width,
      pairs = config.pairs.pairs().len(),
      "loaded assist config"
    );
    Ok(config)
  }

  pub fn validate(&self) -> Result<()> {
    if !(1..=MAX_INDENT_WIDTH).contains(&self.indent_width) {
      return Err(ConfigError::IndentWidth(self.indent_width));
    }
    Ok(())
  }

  /// Indent width, never zero even if the field was set by hand.
  pub fn unit_width(&self) -> usize {
    self.indent_width.max(1)
  }

  /// Sets the indent width, clamped into `1..=MAX_INDENT_WIDTH`.
  #[must_use]
  pub fn with_indent_width(mut self, width: usize) -> Self {
    self.indent_width = width.clamp(1, MAX_INDENT_WIDTH);
    self
  }

  #[must_use]
  pub fn with_pairs(mut self, pairs: PairTable) -> Self {
    self.pairs = pairs;
    self
  }

  #[must_use]
  pub fn with_context_aware(mut self, context_aware: bool) -> Self {
    self.context_aware = context_aware;
    self
  }

  #[must_use]
  pub fn with_guard_word_chars(mut self, guard: bool) -> Self {
    self.guard_word_chars = guard;
    self
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn empty_toml_is_default() {
    assert_eq!(AssistConfig::from_toml("").unwrap(), AssistConfig::default());
  }

  #[test]
  fn partial_toml_keeps_defaults() {
    let config = AssistConfig::from_toml("context-aware = false").unwrap();
    assert!(!config.context_aware);
    assert_eq!(config.indent_width, DEFAULT_INDENT_WIDTH);
    assert_eq!(config.pairs, PairTable::default());
  }

  #[test]
  fn invalid_width_is_rejected() {
    assert!(matches!(
      AssistConfig::from_toml("indent-width = 0"),
      Err(ConfigError::IndentWidth(0))
    ));
    assert!(matches!(
      AssistConfig::from_toml("indent-width = 17"),
      Err(ConfigError::IndentWidth(17))
    ));
  }

  #[test]
  fn unknown_key_is_rejected() {
    assert!(matches!(
      AssistConfig::from_toml("tab-width = 4"),
      Err(ConfigError::Parse(_))
    ));
  }

  #[test]
  fn conflicting_pairs_are_rejected() {
    assert!(matches!(
      AssistConfig::from_toml(r#"pairs = [["(", ")"], ["[", ")"]]"#),
      Err(ConfigError::Parse(_))
    ));
  }

  #[test]
  fn builder_clamps_width() {
    assert_eq!(AssistConfig::default().with_indent_width(0).indent_width, 1);
    assert_eq!(AssistConfig::default().with_indent_width(4).indent_width, 4);
    assert_eq!(
      AssistConfig::default().with_indent_width(99).indent_width,
      MAX_INDENT_WIDTH
    );
  }
}
