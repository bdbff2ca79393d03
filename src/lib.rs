// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod model;
pub mod notify;
pub mod output;
pub mod report;
pub mod session;

// Re-export commonly used types
pub use crate::engine::{compute, funnel, FunnelStage, RoiOutlook};
pub use crate::errors::{Result, RoiError};
pub use crate::model::{CampaignInputs, CampaignResults, FieldBounds, InputField};
pub use crate::report::{
    build_report, Document, ExportFormat, Report, ReportExporter, ReportOptions, ReportRenderer,
};
pub use crate::session::{CalculatorSession, ExportReceipt};
