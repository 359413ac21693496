use std::sync::Arc;

use pagepack_common::GeneratorOptions;
use pagepack_error::BuildResult;

use crate::{
  stages::{assemble::AssembleStage, discover::DiscoverStage, negotiate::NegotiateStage},
  types::{SharedOptions, generator_output::GeneratorOutput},
  utils::normalize_options::normalize_options,
};

/// Drives one generation pass: discover the page topology, assemble the
/// engine payload, and, in development only, negotiate the dev-server
/// endpoint into it.
pub struct ConfigGenerator {
  options: SharedOptions,
}

impl ConfigGenerator {
  pub fn new(options: GeneratorOptions) -> Self {
    Self { options: Arc::new(normalize_options(options)) }
  }

  /// The returned configuration is complete only once this future resolves;
  /// endpoint negotiation happens inside it.
  pub async fn generate(&mut self) -> BuildResult<GeneratorOutput> {
    let mut discovered = DiscoverStage::new(Arc::clone(&self.options)).discover()?;
    let warnings = std::mem::take(&mut discovered.warnings);

    let mut config = AssembleStage::new(&self.options).assemble(discovered);

    if let Some(endpoint) = NegotiateStage::new(Arc::clone(&self.options)).negotiate().await? {
      endpoint.merge_into(&mut config);
    }

    Ok(GeneratorOutput { config, warnings })
  }
}

#[cfg(test)]
mod tests {
  use std::fs;

  use pagepack_common::{DevServerOptions, MAIN_ENTRY, Mode, page_chunk_id};
  use pagepack_error::GenerateError;
  use tempfile::TempDir;
  use tokio::net::TcpListener;

  use super::*;

  fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("src/styles")).unwrap();
    fs::write(dir.path().join("src/main.js"), "").unwrap();
    fs::write(dir.path().join("src/styles/index.scss"), "").unwrap();

    for (page, files) in
      [("home", vec!["index.html", "index.js"]), ("login", vec!["index.html"])]
    {
      let page_dir = dir.path().join("src/views").join(page);
      fs::create_dir_all(&page_dir).unwrap();
      for file in files {
        fs::write(page_dir.join(file), "").unwrap();
      }
    }

    dir
  }

  fn generator(dir: &TempDir, mode: Mode) -> ConfigGenerator {
    ConfigGenerator::new(GeneratorOptions {
      mode: Some(mode),
      cwd: Some(dir.path().to_path_buf()),
      ..GeneratorOptions::default()
    })
  }

  #[tokio::test]
  async fn production_pass_is_reproducible() {
    let dir = project();

    let first = generator(&dir, Mode::Production).generate().await.unwrap();
    let second = generator(&dir, Mode::Production).generate().await.unwrap();

    let entry_names: Vec<_> = first.config.entry.iter().map(|(name, _)| name.clone()).collect();
    assert_eq!(entry_names, vec![MAIN_ENTRY.clone(), page_chunk_id("home")]);
    assert_eq!(first.config.documents.len(), 2);
    assert_eq!(first.config.dev_server.port, None);
    assert_eq!(first.config.output.public_path, "/");

    assert_eq!(
      serde_json::to_value(&first.config).unwrap(),
      serde_json::to_value(&second.config).unwrap()
    );
  }

  #[tokio::test]
  async fn development_pass_negotiates_the_endpoint() {
    let dir = project();

    let guard = TcpListener::bind("0.0.0.0:0").await.unwrap();
    let base = guard.local_addr().unwrap().port();

    let mut generator = ConfigGenerator::new(GeneratorOptions {
      mode: Some(Mode::Development),
      cwd: Some(dir.path().to_path_buf()),
      dev_server: Some(DevServerOptions { port: Some(base), ..Default::default() }),
      ..GeneratorOptions::default()
    });
    let output = generator.generate().await.unwrap();

    let port = output.config.dev_server.port.unwrap();
    assert!(port > base);
    assert_eq!(output.config.dev_server.host.as_deref(), Some("0.0.0.0"));
    assert!(output.config.dev_server.use_local_ip);
    assert_eq!(output.config.output.public_path, format!("http://localhost:{port}/"));

    drop(guard);
  }

  #[tokio::test]
  async fn validate_reports_every_vanished_asset() {
    let dir = project();

    let output = generator(&dir, Mode::Production).generate().await.unwrap();
    assert!(output.validate().is_ok());

    fs::remove_file(dir.path().join("src/views/home/index.js")).unwrap();
    fs::remove_file(dir.path().join("src/views/login/index.html")).unwrap();

    let errors = output.validate().unwrap_err();
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|error| {
      matches!(error.downcast_ref::<GenerateError>(), Some(GenerateError::MissingAsset { .. }))
    }));
  }

  #[tokio::test]
  async fn generate_is_usable_through_the_shared_options() {
    let dir = project();
    let mut generator = generator(&dir, Mode::Development);

    // Two consecutive passes over one generator reuse the same options.
    let first = generator.generate().await.unwrap();
    let second = generator.generate().await.unwrap();
    assert_eq!(first.config.entry, second.config.entry);
  }
}
