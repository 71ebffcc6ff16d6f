pub mod probe;
pub mod runner;

pub use crate::domain::model::{CheckOutcome, CheckReport, ProbeSummary};
pub use crate::domain::ports::{Diagnostic, ProbeConfig, Reporter};
pub use crate::utils::error::Result;
