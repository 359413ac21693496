use std::path::PathBuf;

use arcstr::ArcStr;
use pagepack_utils::indexmap::FxIndexMap;
use serde::Serialize;

/// Name of the shared entry every configuration carries.
pub static MAIN_ENTRY: ArcStr = arcstr::literal!("main");

/// Entry name to ordered source file list.
///
/// Insertion order is preserved through serialization; equality is
/// order-insensitive, which is the contract re-runs are checked against.
#[derive(Default, Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EntryMap(FxIndexMap<ArcStr, Vec<PathBuf>>);

impl EntryMap {
  /// Map seeded with the shared `main` entry, script before style.
  pub fn with_main(main_script: PathBuf, main_style: PathBuf) -> Self {
    let mut entries = FxIndexMap::default();
    entries.insert(MAIN_ENTRY.clone(), vec![main_script, main_style]);
    Self(entries)
  }

  pub fn insert(&mut self, name: ArcStr, files: Vec<PathBuf>) {
    self.0.insert(name, files);
  }

  pub fn get(&self, name: &str) -> Option<&[PathBuf]> {
    self.0.get(name).map(Vec::as_slice)
  }

  pub fn contains(&self, name: &str) -> bool {
    self.0.contains_key(name)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&ArcStr, &Vec<PathBuf>)> {
    self.0.iter()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

#[test]
fn test_entry_map() {
  let mut entries = EntryMap::with_main("/app/src/main.js".into(), "/app/src/index.scss".into());
  assert!(entries.contains("main"));
  assert_eq!(entries.get("main").map(<[PathBuf]>::len), Some(2));

  entries.insert(ArcStr::from("chunk-aaaa0000"), vec!["/app/a.js".into()]);
  entries.insert(ArcStr::from("chunk-bbbb1111"), vec!["/app/b.js".into()]);

  let names: Vec<_> = entries.iter().map(|(name, _)| name.as_str()).collect();
  assert_eq!(names, ["main", "chunk-aaaa0000", "chunk-bbbb1111"]);
}

#[test]
fn test_entry_map_equality_ignores_order() {
  let mut left = EntryMap::default();
  left.insert(ArcStr::from("main"), vec!["/app/src/main.js".into()]);
  left.insert(ArcStr::from("chunk-aaaa0000"), vec!["/app/a.js".into()]);

  let mut right = EntryMap::default();
  right.insert(ArcStr::from("chunk-aaaa0000"), vec!["/app/a.js".into()]);
  right.insert(ArcStr::from("main"), vec!["/app/src/main.js".into()]);

  assert_eq!(left, right);
}
