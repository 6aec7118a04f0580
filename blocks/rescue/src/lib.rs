//! Rescue block: the intake pipeline and the nearby-cases query, plus their
//! HTTP handlers. Built on the atoms' collaborator traits.

pub mod decode;
pub mod http;
pub mod intake;
pub mod matching;
pub mod types;

#[cfg(test)]
mod testing;

pub use decode::decode_report;
pub use http::{nearby_cases_handler, report_case_handler};
pub use intake::IntakePipeline;
pub use matching::{cases_within, NearbyCasesQuery};
pub use types::ReportCase;
