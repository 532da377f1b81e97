pub mod probe;

pub use crate::domain::model::{ExecutableReport, ProbeOutcome, ProbeReport};
pub use crate::domain::ports::{HttpProbe, ProbeTarget};
pub use crate::utils::error::Result;
