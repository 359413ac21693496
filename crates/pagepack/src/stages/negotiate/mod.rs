use std::net::{IpAddr, Ipv4Addr};

use anyhow::Context;
use pagepack_common::NegotiatedEndpoint;
use pagepack_error::{BuildResult, GenerateError};
use tokio::net::TcpListener;
use url::Url;

use crate::types::SharedOptions;

/// Upper bound on sequential bind probes before negotiation gives up.
pub const MAX_PORT_PROBES: u16 = 100;

/// Picks the dev-server endpoint: the first free port at or above the
/// configured base, always on the wildcard bind address, plus the public
/// base URL clients reach it under.
///
/// Returns `None` outside development. Production configurations are never
/// touched, no matter what dev-server options the caller passed.
pub struct NegotiateStage {
  options: SharedOptions,
}

impl NegotiateStage {
  pub fn new(options: SharedOptions) -> Self {
    Self { options }
  }

  pub async fn negotiate(&self) -> BuildResult<Option<NegotiatedEndpoint>> {
    if !self.options.mode.is_development() {
      return Ok(None);
    }

    let bind_address = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
    let port =
      find_available_port(bind_address, self.options.dev_server.port, MAX_PORT_PROBES).await?;

    let hostname = self.options.hostname();
    let public_url = Url::parse(&format!("{}://{hostname}:{port}", self.options.scheme()))
      .with_context(|| format!("Failed to build a public URL from hostname `{hostname}`"))?;

    Ok(Some(NegotiatedEndpoint { port, bind_address, public_url }))
  }
}

/// Scans upward from `base_port`, binding and immediately releasing each
/// candidate. An occupied candidate advances the scan; running out of
/// candidates is reported as [`GenerateError::PortExhaustion`], never
/// papered over with a default.
pub(crate) async fn find_available_port(
  bind_address: IpAddr,
  base_port: u16,
  max_probes: u16,
) -> Result<u16, GenerateError> {
  let mut last_probed = base_port;

  for offset in 0..max_probes {
    let Some(port) = base_port.checked_add(offset) else {
      break;
    };
    last_probed = port;

    if let Ok(listener) = TcpListener::bind((bind_address, port)).await {
      drop(listener);
      if offset > 0 {
        log::debug!("port {base_port} is taken, falling forward to {port}");
      }
      return Ok(port);
    }
  }

  Err(GenerateError::PortExhaustion { start: base_port, end: last_probed })
}
