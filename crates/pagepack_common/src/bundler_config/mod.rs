pub mod devtool;

use std::path::PathBuf;

use pagepack_utils::indexmap::FxIndexMap;
use serde::Serialize;

use crate::{DocumentDescriptor, EntryMap, Mode, bundler_config::devtool::Devtool};

/// The complete payload handed to the build engine, serialized with the
/// camelCase keys the engine expects.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundlerConfig {
  pub mode: Mode,
  pub target: String,
  pub devtool: Devtool,
  pub entry: EntryMap,
  pub output: OutputConfig,
  pub optimization: OptimizationConfig,
  pub resolve: ResolveConfig,
  pub dev_server: DevServerConfig,
  pub performance: PerformanceConfig,
  pub documents: Vec<DocumentDescriptor>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputConfig {
  pub pathinfo: bool,
  pub public_path: String,
  pub path: PathBuf,
  pub filename: String,
  pub chunk_filename: String,
  pub css_filename: String,
  pub css_chunk_filename: String,
  pub hash_digest_length: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationConfig {
  pub minimize: bool,
  pub split_chunks: SplitChunksConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitChunksConfig {
  pub chunks: String,
  pub cache_groups: FxIndexMap<String, CacheGroupConfig>,
}

#[derive(Default, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheGroupConfig {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub test: Option<String>,
  pub priority: i32,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub chunks: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub min_size: Option<u64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub min_chunks: Option<u32>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reuse_existing_chunk: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveConfig {
  pub symlinks: bool,
  pub cache_with_context: bool,
  pub alias: FxIndexMap<String, PathBuf>,
}

/// Dev-server block. `port` and `host` stay empty until a negotiated
/// endpoint is merged in; a production configuration never fills them.
#[allow(clippy::struct_excessive_bools)] // mirrors the engine's flat flag set
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServerConfig {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub port: Option<u16>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub host: Option<String>,
  pub open: bool,
  pub compress: bool,
  pub client_log_level: String,
  pub use_local_ip: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceConfig {
  pub hints: bool,
}

#[cfg(test)]
mod tests {
  use std::net::{IpAddr, Ipv4Addr};

  use super::*;
  use crate::NegotiatedEndpoint;

  fn config() -> BundlerConfig {
    BundlerConfig {
      mode: Mode::Development,
      target: "web".to_string(),
      devtool: Devtool::EvalCheapModuleSourceMap,
      entry: EntryMap::with_main("/app/src/main.js".into(), "/app/src/index.scss".into()),
      output: OutputConfig {
        pathinfo: false,
        public_path: "/".to_string(),
        path: PathBuf::from("/app/dist"),
        filename: "js/[name].[hash].js".to_string(),
        chunk_filename: "js/bundle.[hash].js".to_string(),
        css_filename: "css/[name].[hash].css".to_string(),
        css_chunk_filename: "css/bundle.[hash].css".to_string(),
        hash_digest_length: 10,
      },
      optimization: OptimizationConfig {
        minimize: false,
        split_chunks: SplitChunksConfig {
          chunks: "all".to_string(),
          cache_groups: FxIndexMap::default(),
        },
      },
      resolve: ResolveConfig {
        symlinks: false,
        cache_with_context: false,
        alias: FxIndexMap::default(),
      },
      dev_server: DevServerConfig {
        port: None,
        host: None,
        open: true,
        compress: true,
        client_log_level: "error".to_string(),
        use_local_ip: false,
      },
      performance: PerformanceConfig { hints: false },
      documents: Vec::new(),
    }
  }

  #[test]
  fn keys_are_camel_cased() {
    let json = serde_json::to_value(config()).unwrap();
    assert_eq!(json["mode"], "development");
    assert_eq!(json["devtool"], "eval-cheap-module-source-map");
    assert_eq!(json["output"]["publicPath"], "/");
    assert_eq!(json["output"]["hashDigestLength"], 10);
    assert_eq!(json["devServer"]["clientLogLevel"], "error");
    assert!(json["devServer"].get("port").is_none());
    assert_eq!(json["performance"]["hints"], false);
  }

  #[test]
  fn merged_endpoint_overwrites_listen_and_public_path() {
    let mut config = config();
    let endpoint = NegotiatedEndpoint {
      port: 8081,
      bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
      public_url: url::Url::parse("http://localhost:8081").unwrap(),
    };
    endpoint.merge_into(&mut config);

    assert_eq!(config.dev_server.port, Some(8081));
    assert_eq!(config.dev_server.host.as_deref(), Some("0.0.0.0"));
    assert!(config.dev_server.use_local_ip);
    assert_eq!(config.output.public_path, "http://localhost:8081/");
  }
}
