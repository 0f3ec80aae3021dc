//! Engine-originated feedback messages.
//!
//! Engines report progress through a callback registered at construction.
//! Messages are ephemeral: formatted and printed by the relay, never stored.

/// Severity of an engine message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warn,
    /// Only shown when the debug flag is enabled.
    Debug,
}

/// Callback an engine invokes with (source name, severity, body).
///
/// The callback must only print; it may be invoked several times from
/// within a single engine call.
pub type MessageHandler = Box<dyn Fn(&str, Severity, &str)>;

/// A handler that swallows everything. Used by tests and headless callers.
pub fn null_handler() -> MessageHandler {
    Box::new(|_, _, _| {})
}
