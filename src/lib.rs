pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::env::Credentials;
pub use config::{cli::ConsoleReporter, CliConfig};
pub use core::{probe::ConnectivityProbe, runner::DiagnosticRunner};
pub use utils::error::{ProbeError, Result};
