use std::io::Write;
use std::sync::Arc;

use cepfinder_lookup::{
    AddressProvider, ApiCepProvider, Dispatcher, RaceCoordinator, ViaCepProvider,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{Config, LogFormat};
use crate::output::{render_error, render_winner};

/// Install the global subscriber. Logs go to stderr so stdout only carries
/// the lookup result; `log` records from the lookup crate are bridged in.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

pub fn build_dispatcher(config: &Config) -> Dispatcher {
    let providers: Vec<Arc<dyn AddressProvider>> = vec![
        Arc::new(ViaCepProvider::with_base_url(config.viacep_url.as_str())),
        Arc::new(ApiCepProvider::with_base_url(config.apicep_url.as_str())),
    ];
    let coordinator =
        RaceCoordinator::new(providers, config.timeout).with_all_failed_policy(config.all_failed);
    Dispatcher::new(coordinator)
}

/// Run one lookup and write the outcome.
///
/// The winner goes to `out`; input errors and race errors go to `err`.
/// Domain failures are not turned into an `Err`: only I/O on the two
/// streams can fail here.
pub async fn run<S: AsRef<str>>(
    config: &Config,
    args: &[S],
    out: &mut impl Write,
    err: &mut impl Write,
) -> std::io::Result<()> {
    let dispatcher = build_dispatcher(config);

    match dispatcher.dispatch(args).await {
        Ok(winner) => {
            tracing::debug!(
                provider = winner.provider,
                elapsed = ?winner.elapsed,
                "Lookup resolved"
            );
            write!(out, "{}", render_winner(&winner))?;
            out.flush()
        }
        Err(e) => writeln!(err, "{}", render_error(&e)),
    }
}
