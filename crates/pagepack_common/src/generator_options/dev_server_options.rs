/// Dev-server knobs accepted from the caller.
///
/// `port` is only the base the negotiation starts scanning from; the port
/// that actually ends up in the configuration may be higher.
#[derive(Default, Debug, Clone)]
pub struct DevServerOptions {
  pub port: Option<u16>,
  pub host: Option<String>,
  pub open: Option<bool>,
  pub compress: Option<bool>,
}
