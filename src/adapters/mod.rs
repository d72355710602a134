//! Adapters implementing the session ports.

pub mod event_log;

pub use event_log::{EventLog, SessionEvent};
