use std::ops::{Deref, DerefMut};

use thiserror::Error;

/// Failures the generator can diagnose on its own.
///
/// These stay downcastable after aggregation into [`BuildError`], so callers
/// can still tell a malformed page apart from an exhausted port range.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
  /// A template matched the page pattern but does not sit exactly one
  /// directory below the views root, so no page name can be derived from it.
  #[error("malformed page template path `{path}`: expected `<name>/index.html` under the views root")]
  MalformedPageName { path: String },

  /// Every candidate port in the scanned range was already bound.
  #[error("no free port between {start} and {end}")]
  PortExhaustion { start: u16, end: u16 },

  /// A file referenced by the emitted configuration vanished between
  /// discovery and the hand-off to the build engine.
  #[error("referenced file `{path}` does not exist")]
  MissingAsset { path: String },
}

/// Every failure of a generation pass, not just the first one.
#[derive(Debug)]
pub struct BuildError(pub Vec<anyhow::Error>);

impl Deref for BuildError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for BuildError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl From<anyhow::Error> for BuildError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<Vec<anyhow::Error>> for BuildError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

impl From<GenerateError> for BuildError {
  fn from(error: GenerateError) -> Self {
    Self(vec![anyhow::Error::new(error)])
  }
}

pub type BuildResult<T> = anyhow::Result<T, BuildError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn generate_error_survives_aggregation() {
    let errors = BuildError::from(GenerateError::PortExhaustion { start: 8080, end: 8179 });
    assert_eq!(errors.len(), 1);
    assert!(matches!(
      errors[0].downcast_ref::<GenerateError>(),
      Some(GenerateError::PortExhaustion { start: 8080, end: 8179 })
    ));
  }

  #[test]
  fn malformed_page_name_names_the_offender() {
    let error = GenerateError::MalformedPageName { path: "admin/users/index.html".to_string() };
    assert!(error.to_string().contains("admin/users/index.html"));
  }
}
