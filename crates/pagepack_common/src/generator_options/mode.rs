use std::fmt::Display;

use serde::Serialize;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
  Development,
  #[default]
  Production,
}

impl Mode {
  #[inline]
  pub fn is_development(&self) -> bool {
    matches!(self, Self::Development)
  }

  /// Hash token spliced into the output filename templates. Development
  /// builds hash the compilation, production builds hash the content.
  #[inline]
  pub fn hash_token(&self) -> &'static str {
    match self {
      Self::Development => "hash",
      Self::Production => "contenthash",
    }
  }
}

impl Display for Mode {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Development => write!(f, "development"),
      Self::Production => write!(f, "production"),
    }
  }
}

#[test]
fn test_mode() {
  assert!(Mode::Development.is_development());
  assert!(!Mode::Production.is_development());
  assert_eq!(Mode::default(), Mode::Production);
  assert_eq!(Mode::Development.to_string(), "development");
}
