//! Application layer - use cases

pub mod report;

pub use report::{ReportDriver, ReportSummary};
