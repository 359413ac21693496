mod bundler_config;
mod generator_options;
mod types;

pub use bundler_config::{
  BundlerConfig, CacheGroupConfig, DevServerConfig, OptimizationConfig, OutputConfig,
  PerformanceConfig, ResolveConfig, SplitChunksConfig, devtool::Devtool,
};

pub use generator_options::{
  GeneratorOptions, dev_server_options::DevServerOptions, mode::Mode,
  normalized_generator_options::{NormalizedDevServerOptions, NormalizedGeneratorOptions},
};

pub use crate::types::{
  document_descriptor::{DocumentDescriptor, HtmlMinifyOptions, ScriptLoading},
  endpoint::NegotiatedEndpoint,
  entry_map::{EntryMap, MAIN_ENTRY},
  page_descriptor::{PageDescriptor, page_chunk_id},
};
