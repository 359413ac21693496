use std::path::Path;

use anyhow::Context;
use arcstr::ArcStr;
use fast_glob::glob_match;
use itertools::Itertools;
use pagepack_common::{DocumentDescriptor, EntryMap, PageDescriptor};
use pagepack_error::{BuildResult, GenerateError};

use crate::types::SharedOptions;

const PAGE_TEMPLATE: &str = "index.html";
const PAGE_SCRIPT: &str = "index.js";
const PAGE_STYLE: &str = "index.scss";

#[derive(Debug)]
pub struct DiscoverStageOutput {
  pub entries: EntryMap,
  pub documents: Vec<DocumentDescriptor>,
  pub pages: Vec<PageDescriptor>,
  pub warnings: Vec<anyhow::Error>,
}

/// Walks the views tree and derives the bundle topology from it: the shared
/// `main` entry, one dedicated entry per page that owns sources, and one
/// document descriptor per page.
///
/// A missing views root is not an error. It is the single-page profile,
/// where only the shared entry exists and no documents are emitted.
pub struct DiscoverStage {
  options: SharedOptions,
}

impl DiscoverStage {
  pub fn new(options: SharedOptions) -> Self {
    Self { options }
  }

  pub fn discover(&self) -> BuildResult<DiscoverStageOutput> {
    let mut entries =
      EntryMap::with_main(self.options.main_script.clone(), self.options.main_style.clone());
    let mut warnings = Vec::new();

    let pages = self.collect_pages()?;
    if pages.is_empty() && self.options.views_dir.is_dir() {
      log::warn!("no page template matched `{}`", self.options.page_pattern);
      warnings.push(anyhow::anyhow!(
        "no page template matched `{}` under {}",
        self.options.page_pattern,
        self.options.views_dir.display()
      ));
    }

    let mut documents = Vec::with_capacity(pages.len());
    for page in &pages {
      if let Some(chunk_id) = page.chunk_id() {
        entries.insert(chunk_id, page.own_files());
      }
      documents.push(DocumentDescriptor::for_page(page));
    }

    log::debug!("discovered {} pages across {} entries", pages.len(), entries.len());

    Ok(DiscoverStageOutput { entries, documents, pages, warnings })
  }

  /// Pages sorted by name, so the emitted topology never depends on the
  /// platform's directory enumeration order.
  fn collect_pages(&self) -> BuildResult<Vec<PageDescriptor>> {
    let views_dir = &self.options.views_dir;
    if !views_dir.is_dir() {
      return Ok(Vec::new());
    }

    let mut candidates = Vec::new();
    walk_files(views_dir, None, &mut candidates)?;

    let mut pages = Vec::new();
    let mut errors = Vec::new();

    for rel_path in &candidates {
      if !glob_match(self.options.page_pattern.as_str(), rel_path.as_str()) {
        continue;
      }
      match self.page_for_match(rel_path) {
        Ok(page) => pages.push(page),
        Err(error) => errors.push(anyhow::Error::new(error)),
      }
    }

    if !errors.is_empty() {
      Err(errors)?;
    }

    Ok(pages.into_iter().sorted_unstable_by(|a, b| a.name.cmp(&b.name)).collect())
  }

  /// Derives the page name from a views-relative match and probes the
  /// template's siblings for page-owned sources. A match without exactly one
  /// directory segment in front of the template is rejected: no page name
  /// can be derived from it.
  fn page_for_match(&self, rel_path: &str) -> Result<PageDescriptor, GenerateError> {
    let malformed = || GenerateError::MalformedPageName { path: rel_path.to_string() };

    let name = rel_path
      .strip_suffix(PAGE_TEMPLATE)
      .and_then(|prefix| prefix.strip_suffix('/'))
      .ok_or_else(malformed)?;
    if name.is_empty() || name.contains('/') {
      return Err(malformed());
    }

    let page_dir = self.options.views_dir.join(name);
    let own_script = page_dir.join(PAGE_SCRIPT);
    let own_style = page_dir.join(PAGE_STYLE);

    Ok(PageDescriptor {
      name: ArcStr::from(name),
      template_path: page_dir.join(PAGE_TEMPLATE),
      own_script_path: own_script.is_file().then_some(own_script),
      own_style_path: own_style.is_file().then_some(own_style),
    })
  }
}

/// Collects views-relative file paths, slash-separated on every platform so
/// glob matching and name derivation always see the same shape.
fn walk_files(dir: &Path, prefix: Option<&str>, out: &mut Vec<String>) -> BuildResult<()> {
  let iter = std::fs::read_dir(dir)
    .with_context(|| format!("Failed to read directory {}", dir.display()))?;

  for entry in iter {
    let entry =
      entry.with_context(|| format!("Failed to read directory entry in {}", dir.display()))?;
    let file_name = entry.file_name();
    let file_name = file_name.to_string_lossy();
    let rel_path = match prefix {
      Some(prefix) => format!("{prefix}/{file_name}"),
      None => file_name.into_owned(),
    };

    let file_type = entry
      .file_type()
      .with_context(|| format!("Failed to inspect {}", entry.path().display()))?;
    if file_type.is_dir() {
      walk_files(&entry.path(), Some(&rel_path), out)?;
    } else {
      out.push(rel_path);
    }
  }

  Ok(())
}
