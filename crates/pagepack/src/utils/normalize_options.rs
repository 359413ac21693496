use std::path::Path;

use pagepack_common::{GeneratorOptions, NormalizedDevServerOptions, NormalizedGeneratorOptions};
use sugar_path::SugarPath;

/// Port the negotiation starts scanning from when the caller does not seed one.
pub const DEFAULT_BASE_PORT: u16 = 8080;

pub fn normalize_options(mut raw_options: GeneratorOptions) -> NormalizedGeneratorOptions {
  let mode = raw_options.mode.unwrap_or_default();
  let cwd = raw_options
    .cwd
    .unwrap_or_else(|| std::env::current_dir().expect("Failed to get current dir"));

  let src_dir = Path::new(raw_options.src.as_deref().unwrap_or("src")).absolutize_with(&cwd);
  let out_dir = Path::new(raw_options.dist.as_deref().unwrap_or("dist")).absolutize_with(&cwd);

  let views_dir = src_dir.join(raw_options.views_dir.as_deref().unwrap_or("views"));
  let main_script = src_dir.join(raw_options.main_script.as_deref().unwrap_or("main.js"));
  let main_style = src_dir.join(raw_options.main_style.as_deref().unwrap_or("styles/index.scss"));

  let dev_server = std::mem::take(&mut raw_options.dev_server).unwrap_or_default();

  NormalizedGeneratorOptions {
    mode,
    cwd,
    src_dir,
    views_dir,
    page_pattern: raw_options.page_pattern.unwrap_or_else(|| "*/index.html".to_string()),
    main_script,
    main_style,
    out_dir,
    public_path: raw_options.public_path.unwrap_or_else(|| "/".to_string()),
    minify: raw_options.minify.unwrap_or(!mode.is_development()),
    https: raw_options.https.unwrap_or(false),
    dev_server: NormalizedDevServerOptions {
      port: dev_server.port.unwrap_or(DEFAULT_BASE_PORT),
      host: dev_server.host,
      open: dev_server.open.unwrap_or(true),
      compress: dev_server.compress.unwrap_or(true),
    },
  }
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use pagepack_common::Mode;

  use super::*;

  #[test]
  fn fills_in_project_layout_defaults() {
    let options = normalize_options(GeneratorOptions {
      cwd: Some(PathBuf::from("/app")),
      ..GeneratorOptions::default()
    });

    assert_eq!(options.mode, Mode::Production);
    assert_eq!(options.src_dir, PathBuf::from("/app/src"));
    assert_eq!(options.out_dir, PathBuf::from("/app/dist"));
    assert_eq!(options.views_dir, PathBuf::from("/app/src/views"));
    assert_eq!(options.main_script, PathBuf::from("/app/src/main.js"));
    assert_eq!(options.main_style, PathBuf::from("/app/src/styles/index.scss"));
    assert_eq!(options.page_pattern, "*/index.html");
    assert_eq!(options.public_path, "/");
  }

  #[test]
  fn minify_follows_mode_unless_forced() {
    let base =
      || GeneratorOptions { cwd: Some(PathBuf::from("/app")), ..GeneratorOptions::default() };

    assert!(normalize_options(base()).minify);
    assert!(
      !normalize_options(GeneratorOptions { mode: Some(Mode::Development), ..base() }).minify
    );
    assert!(
      normalize_options(GeneratorOptions {
        mode: Some(Mode::Development),
        minify: Some(true),
        ..base()
      })
      .minify
    );
  }

  #[test]
  fn dev_server_defaults() {
    let options = normalize_options(GeneratorOptions {
      cwd: Some(PathBuf::from("/app")),
      ..GeneratorOptions::default()
    });

    assert_eq!(options.dev_server.port, DEFAULT_BASE_PORT);
    assert_eq!(options.dev_server.host, None);
    assert!(options.dev_server.open);
    assert!(options.dev_server.compress);
    assert!(!options.https);
    assert_eq!(options.scheme(), "http");
    assert_eq!(options.hostname(), "localhost");
  }

  #[test]
  fn relative_paths_resolve_against_cwd() {
    let options = normalize_options(GeneratorOptions {
      cwd: Some(PathBuf::from("/app")),
      src: Some("client".to_string()),
      dist: Some("build/out".to_string()),
      views_dir: Some("pages".to_string()),
      ..GeneratorOptions::default()
    });

    assert_eq!(options.src_dir, PathBuf::from("/app/client"));
    assert_eq!(options.out_dir, PathBuf::from("/app/build/out"));
    assert_eq!(options.views_dir, PathBuf::from("/app/client/pages"));
  }
}
