//! Workflow model
//!
//! The ordered step sequence, its mutation operations, and the
//! bounded undo history behind them. All state lives in an explicit
//! `WorkflowSession`; nothing here touches process-wide globals.

pub mod history;
pub mod session;
pub mod types;

pub use history::{History, HISTORY_LIMIT};
pub use session::WorkflowSession;
pub use types::Step;
