use std::path::PathBuf;

use clap::Args;

use crate::types::mode::Mode;

#[derive(Args)]
pub struct InputArgs {
  #[clap(long)]
  pub cwd: Option<PathBuf>,

  /// Source root holding the entry files and the views tree.
  #[clap(long)]
  pub src: Option<String>,

  /// Build profile; falls back to the NODE_ENV variable.
  #[clap(long, env = "NODE_ENV")]
  pub mode: Option<Mode>,
}

#[derive(Args)]
pub struct OutputArgs {
  #[clap(long, short = 'd')]
  pub dist: Option<String>,

  #[clap(long)]
  pub public_path: Option<String>,

  /// Write the configuration JSON here instead of stdout.
  #[clap(long, short = 'o')]
  pub out: Option<PathBuf>,

  #[clap(long, short = 'm')]
  pub minify: Option<bool>,
}

#[derive(Args)]
pub struct DevServerArgs {
  /// Serve the public URL over https.
  #[clap(long)]
  pub https: bool,

  /// Base port the negotiation scans upward from.
  #[clap(long, short = 'p')]
  pub port: Option<u16>,

  /// Hostname used in the public URL instead of `localhost`.
  #[clap(long)]
  pub host: Option<String>,
}
