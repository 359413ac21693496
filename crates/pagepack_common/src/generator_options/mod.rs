pub mod dev_server_options;
pub mod mode;
pub mod normalized_generator_options;

use std::path::PathBuf;

use crate::{DevServerOptions, Mode};

/// Raw caller-facing options. Everything is optional; `normalize_options`
/// in the core crate fills in the defaults before any stage runs.
#[derive(Default, Debug, Clone)]
pub struct GeneratorOptions {
  // --- Input
  pub mode: Option<Mode>,
  pub cwd: Option<PathBuf>,
  pub src: Option<String>,
  pub views_dir: Option<String>,
  pub page_pattern: Option<String>,
  pub main_script: Option<String>,
  pub main_style: Option<String>,

  // --- Output
  pub dist: Option<String>,
  pub public_path: Option<String>,
  pub minify: Option<bool>,

  // --- Dev server
  pub https: Option<bool>,
  pub dev_server: Option<DevServerOptions>,
}
