pub mod cli;
pub mod config;
pub mod output;
mod main_lib;

pub use main_lib::{build_dispatcher, init_tracing, run};
