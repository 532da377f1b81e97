pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::ReqwestProbe;
pub use config::ProbeConfig;
pub use core::probe::ConnectivityProbe;
pub use domain::model::{ExecutableReport, ProbeOutcome, ProbeReport};
pub use utils::error::{ProbeError, Result};
