use std::path::PathBuf;

use crate::Mode;

/// Hostname used in the public URL when the caller does not pick one.
pub const DEFAULT_HOSTNAME: &str = "localhost";

#[derive(Debug)]
pub struct NormalizedGeneratorOptions {
  // --- Input
  pub mode: Mode,
  pub cwd: PathBuf,
  pub src_dir: PathBuf,
  pub views_dir: PathBuf,
  pub page_pattern: String,
  pub main_script: PathBuf,
  pub main_style: PathBuf,

  // --- Output
  pub out_dir: PathBuf,
  pub public_path: String,
  pub minify: bool,

  // --- Dev server
  pub https: bool,
  pub dev_server: NormalizedDevServerOptions,
}

#[derive(Debug)]
pub struct NormalizedDevServerOptions {
  pub port: u16,
  pub host: Option<String>,
  pub open: bool,
  pub compress: bool,
}

impl NormalizedGeneratorOptions {
  /// Scheme of the public URL the negotiated endpoint is reachable under.
  pub fn scheme(&self) -> &'static str {
    if self.https { "https" } else { "http" }
  }

  /// Hostname of the public URL, distinct from the bind address: the server
  /// always binds the wildcard address so devices on the LAN can reach it.
  pub fn hostname(&self) -> &str {
    self.dev_server.host.as_deref().unwrap_or(DEFAULT_HOSTNAME)
  }
}
