//! Command-line surface.

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "cepfinder",
    version,
    about = "Look up a Brazilian CEP by racing ViaCEP and ApiCEP"
)]
pub struct Cli {
    /// Postal code in the form XXXXX-XXX.
    ///
    /// Arity is checked by the dispatcher, not by clap, so a missing or
    /// extra CEP is reported like any other input error.
    #[arg(value_name = "CEP")]
    pub ceps: Vec<String>,

    /// Race deadline in milliseconds. Overrides CEPFINDER_TIMEOUT_MS.
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Fail as soon as every provider fails instead of waiting for the deadline.
    #[arg(long, default_value_t = false)]
    pub fail_fast: bool,
}
