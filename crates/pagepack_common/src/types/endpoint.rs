use std::net::IpAddr;

use url::Url;

use crate::BundlerConfig;

/// Outcome of a successful endpoint negotiation.
///
/// Plain data with no side effects of its own; the caller decides when to
/// fold it into a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NegotiatedEndpoint {
  pub port: u16,
  pub bind_address: IpAddr,
  pub public_url: Url,
}

impl NegotiatedEndpoint {
  /// Writes the negotiated values into the engine-facing configuration:
  /// the listen port, the wildcard bind address, and the public base URL
  /// emitted assets resolve against.
  pub fn merge_into(&self, config: &mut BundlerConfig) {
    config.dev_server.port = Some(self.port);
    config.dev_server.host = Some(self.bind_address.to_string());
    config.dev_server.use_local_ip = true;
    config.output.public_path = self.public_url.to_string();
  }
}
