pub mod chart_data;
pub mod error;
pub mod options;
pub mod staleness;
pub mod timestamp;
