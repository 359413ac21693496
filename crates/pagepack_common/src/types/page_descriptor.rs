use std::path::PathBuf;

use arcstr::ArcStr;
use pagepack_utils::xxhash::xxhash_hex;

use crate::types::entry_map::MAIN_ENTRY;

/// Hex digits of the page-name digest kept in a chunk id.
pub const CHUNK_ID_DIGEST_LEN: usize = 8;

/// Chunk id for a page name.
///
/// Derived from the name alone, so the id is stable across runs, platforms
/// and directory enumeration order, and never collides with the reserved
/// `main` entry.
pub fn page_chunk_id(name: &str) -> ArcStr {
  let digest = xxhash_hex(name.as_bytes());
  ArcStr::from(format!("chunk-{}", &digest[..CHUNK_ID_DIGEST_LEN]))
}

/// One page directory discovered under the views root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDescriptor {
  pub name: ArcStr,
  pub template_path: PathBuf,
  pub own_script_path: Option<PathBuf>,
  pub own_style_path: Option<PathBuf>,
}

impl PageDescriptor {
  pub fn has_own_chunk(&self) -> bool {
    self.own_script_path.is_some() || self.own_style_path.is_some()
  }

  /// `Some` only when the page owns at least one source file. Pages without
  /// own sources are served by the shared `main` chunk alone.
  pub fn chunk_id(&self) -> Option<ArcStr> {
    self.has_own_chunk().then(|| page_chunk_id(&self.name))
  }

  /// Own source files in injection order, script before style.
  pub fn own_files(&self) -> Vec<PathBuf> {
    self.own_script_path.iter().chain(self.own_style_path.iter()).cloned().collect()
  }

  /// Chunks injected into this page's document. `main` always comes first
  /// so shared code runs before page code.
  pub fn chunk_list(&self) -> Vec<ArcStr> {
    let mut chunks = vec![MAIN_ENTRY.clone()];
    chunks.extend(self.chunk_id());
    chunks
  }

  /// Emitted document path, always under the `html/` namespace and always
  /// slash-separated.
  pub fn document_filename(&self) -> String {
    format!("html/{}.html", self.name)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn page(name: &str, script: bool, style: bool) -> PageDescriptor {
    let dir = PathBuf::from("/app/src/views").join(name);
    PageDescriptor {
      name: ArcStr::from(name),
      template_path: dir.join("index.html"),
      own_script_path: script.then(|| dir.join("index.js")),
      own_style_path: style.then(|| dir.join("index.scss")),
    }
  }

  #[test]
  fn chunk_id_is_stable_and_prefixed() {
    let id = page_chunk_id("login");
    assert_eq!(id, page_chunk_id("login"));
    assert!(id.starts_with("chunk-"));
    assert_eq!(id.len(), "chunk-".len() + CHUNK_ID_DIGEST_LEN);
    assert_ne!(id, page_chunk_id("home"));
  }

  #[test]
  fn template_only_page_rides_the_main_chunk() {
    let page = page("about", false, false);
    assert!(!page.has_own_chunk());
    assert_eq!(page.chunk_id(), None);
    assert_eq!(page.chunk_list(), vec![MAIN_ENTRY.clone()]);
    assert!(page.own_files().is_empty());
  }

  #[test]
  fn page_with_sources_gets_a_dedicated_chunk() {
    let page = page("login", true, true);
    let chunk_id = page.chunk_id().unwrap();
    assert_eq!(page.chunk_list(), vec![MAIN_ENTRY.clone(), chunk_id]);
    assert_eq!(
      page.own_files(),
      vec![
        PathBuf::from("/app/src/views/login/index.js"),
        PathBuf::from("/app/src/views/login/index.scss")
      ]
    );
  }

  #[test]
  fn document_filename_lands_in_html_namespace() {
    assert_eq!(page("login", false, false).document_filename(), "html/login.html");
  }
}
