use pagepack_common::BundlerConfig;
use pagepack_error::{BuildResult, GenerateError};

/// Everything a build engine needs from one generation pass.
#[derive(Debug)]
pub struct GeneratorOutput {
  pub config: BundlerConfig,
  pub warnings: Vec<anyhow::Error>,
}

impl GeneratorOutput {
  /// Re-probes every file the configuration references.
  ///
  /// Descriptors come from a point-in-time walk; a file that vanished since
  /// then would only fail deep inside the engine, so it is surfaced here at
  /// the hand-off instead. All missing files are reported, not just the first.
  pub fn validate(&self) -> BuildResult<()> {
    let entry_files = self.config.entry.iter().flat_map(|(_, files)| files.iter());
    let templates = self.config.documents.iter().map(|document| &document.template);

    let mut errors = Vec::new();
    for path in entry_files.chain(templates) {
      if !path.exists() {
        errors.push(anyhow::Error::new(GenerateError::MissingAsset {
          path: path.display().to_string(),
        }));
      }
    }

    if !errors.is_empty() {
      Err(errors)?;
    }

    Ok(())
  }
}
