use clap::ValueEnum;

#[derive(PartialEq, Eq, Clone, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum Mode {
  Development,
  Production,
}

impl From<Mode> for pagepack::Mode {
  fn from(value: Mode) -> Self {
    match value {
      Mode::Development => pagepack::Mode::Development,
      Mode::Production => pagepack::Mode::Production,
    }
  }
}
