// Interactive front end over the normalizers: prompts, retries, reports

pub mod config;
pub mod report;
pub mod session;

pub use config::{Config, ConfigError, ReportConfig, ShellConfig};
pub use report::Report;
pub use session::{Prompted, Session, SessionSummary};
