use serde::{Serialize, Serializer};

/// Source-map setting. The engine contract is either a preset name or the
/// literal `false`, so serialization is written out by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Devtool {
  Disabled,
  EvalCheapModuleSourceMap,
}

impl Devtool {
  pub fn as_str(&self) -> Option<&'static str> {
    match self {
      Self::Disabled => None,
      Self::EvalCheapModuleSourceMap => Some("eval-cheap-module-source-map"),
    }
  }
}

impl Serialize for Devtool {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    match self.as_str() {
      Some(preset) => serializer.serialize_str(preset),
      None => serializer.serialize_bool(false),
    }
  }
}

#[test]
fn test_devtool_serialization() {
  assert_eq!(serde_json::to_value(Devtool::Disabled).unwrap(), serde_json::json!(false));
  assert_eq!(
    serde_json::to_value(Devtool::EvalCheapModuleSourceMap).unwrap(),
    serde_json::json!("eval-cheap-module-source-map")
  );
}
