use std::path::PathBuf;

use arcstr::ArcStr;
use serde::Serialize;

use crate::PageDescriptor;

/// How injected script tags are wired into the emitted document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptLoading {
  Blocking,
  Defer,
}

/// Minification payload forwarded to the document emitter.
#[allow(clippy::struct_excessive_bools)] // mirrors the emitter's flat flag set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlMinifyOptions {
  pub minify_js: bool,
  pub remove_comments: bool,
  pub collapse_whitespace: bool,
  pub continue_on_parse_error: bool,
  pub collapse_boolean_attributes: bool,
  pub remove_script_type_attributes: bool,
}

impl Default for HtmlMinifyOptions {
  fn default() -> Self {
    Self {
      minify_js: true,
      remove_comments: true,
      collapse_whitespace: true,
      continue_on_parse_error: true,
      collapse_boolean_attributes: true,
      remove_script_type_attributes: true,
    }
  }
}

/// One emitted HTML document: where it lands, the template it is rendered
/// from, and the chunks injected into it in execution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDescriptor {
  pub filename: String,
  pub template: PathBuf,
  pub chunks: Vec<ArcStr>,
  pub script_loading: ScriptLoading,
  pub minify: HtmlMinifyOptions,
}

impl DocumentDescriptor {
  pub fn for_page(page: &PageDescriptor) -> Self {
    Self {
      filename: page.document_filename(),
      template: page.template_path.clone(),
      chunks: page.chunk_list(),
      script_loading: ScriptLoading::Blocking,
      minify: HtmlMinifyOptions::default(),
    }
  }
}
