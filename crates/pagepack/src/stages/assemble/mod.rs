use pagepack_common::{
  BundlerConfig, CacheGroupConfig, DevServerConfig, Devtool, OptimizationConfig, OutputConfig,
  PerformanceConfig, ResolveConfig, SplitChunksConfig,
};
use pagepack_utils::indexmap::FxIndexMap;

use crate::{stages::discover::DiscoverStageOutput, types::SharedOptions};

/// Folds the discovered topology and the normalized options into the
/// engine-facing configuration. Pure: no filesystem or network access, so
/// the same inputs always produce the same payload.
pub struct AssembleStage<'a> {
  options: &'a SharedOptions,
}

impl<'a> AssembleStage<'a> {
  pub fn new(options: &'a SharedOptions) -> Self {
    Self { options }
  }

  pub fn assemble(&self, discovered: DiscoverStageOutput) -> BundlerConfig {
    let DiscoverStageOutput { entries, documents, .. } = discovered;

    BundlerConfig {
      mode: self.options.mode,
      target: "web".to_string(),
      devtool: self.devtool(),
      entry: entries,
      output: self.output(),
      optimization: self.optimization(),
      resolve: self.resolve(),
      dev_server: self.dev_server(),
      performance: PerformanceConfig { hints: false },
      documents,
    }
  }

  fn devtool(&self) -> Devtool {
    if self.options.mode.is_development() {
      Devtool::EvalCheapModuleSourceMap
    } else {
      Devtool::Disabled
    }
  }

  fn output(&self) -> OutputConfig {
    let hash = self.options.mode.hash_token();
    OutputConfig {
      pathinfo: false,
      public_path: self.options.public_path.clone(),
      path: self.options.out_dir.clone(),
      filename: format!("js/[name].[{hash}].js"),
      chunk_filename: format!("js/bundle.[{hash}].js"),
      css_filename: format!("css/[name].[{hash}].css"),
      css_chunk_filename: format!("css/bundle.[{hash}].css"),
      hash_digest_length: 10,
    }
  }

  fn optimization(&self) -> OptimizationConfig {
    let mut cache_groups = FxIndexMap::default();
    cache_groups.insert(
      "vendor".to_string(),
      CacheGroupConfig {
        test: Some(r"[\\/]node_modules[\\/]".to_string()),
        priority: -10,
        name: Some("vendors".to_string()),
        chunks: Some("all".to_string()),
        ..CacheGroupConfig::default()
      },
    );
    cache_groups.insert(
      "default".to_string(),
      CacheGroupConfig {
        priority: -20,
        min_size: Some(0),
        min_chunks: Some(2),
        reuse_existing_chunk: Some(true),
        ..CacheGroupConfig::default()
      },
    );

    OptimizationConfig {
      minimize: self.options.minify,
      split_chunks: SplitChunksConfig { chunks: "all".to_string(), cache_groups },
    }
  }

  fn resolve(&self) -> ResolveConfig {
    let mut alias = FxIndexMap::default();
    alias.insert("@".to_string(), self.options.src_dir.clone());
    alias.insert("images".to_string(), self.options.src_dir.join("assets/images"));
    ResolveConfig { symlinks: false, cache_with_context: false, alias }
  }

  /// Listen port and host stay empty here. Filling them is the negotiation
  /// stage's job, and only in development.
  fn dev_server(&self) -> DevServerConfig {
    DevServerConfig {
      port: None,
      host: None,
      open: self.options.dev_server.open,
      compress: self.options.dev_server.compress,
      client_log_level: "error".to_string(),
      use_local_ip: false,
    }
  }
}
