//! # Message relay
//!
//! The bridge between engine-originated events and the screen. The engine
//! calls the relay once per message; the relay formats, colorizes by
//! source, filters debug messages, and prints. It only ever prints, so it
//! may be invoked any number of times from within one engine operation.

use super::styles;
use crate::message::Severity;

/// Source names with a fixed color: the engine itself, its data layer,
/// and any remote API library (recognized by prefix). Unknown sources
/// print verbatim with no color and no reset code.
const SOURCE_ENGINE: &str = "Engine";
const SOURCE_DATA: &str = "Data";
const API_PREFIX: &str = "lib";

#[derive(Debug, Clone, Copy)]
pub struct MessageRelay {
    debug: bool,
}

impl MessageRelay {
    pub fn new(debug: bool) -> Self {
        Self { debug }
    }

    /// Prints one engine event to the terminal.
    pub fn handle(&self, source: &str, severity: Severity, body: &str) {
        if let Some(line) = self.format(source, severity, body) {
            println!("{}", line);
        }
    }

    /// Formats an event, or `None` when it is filtered out.
    pub fn format(&self, source: &str, severity: Severity, body: &str) -> Option<String> {
        self.format_internal(source, severity, body, true)
    }

    fn format_internal(
        &self,
        source: &str,
        severity: Severity,
        body: &str,
        color: bool,
    ) -> Option<String> {
        let line = match severity {
            Severity::Info => format!("{}: {}", source, body),
            Severity::Warn => format!("{} warning: {}", source, body),
            Severity::Debug if self.debug => format!("{}: {}", source, body),
            Severity::Debug => return None,
        };

        if !color {
            return Some(line);
        }
        Some(if source == SOURCE_ENGINE {
            styles::engine(&line)
        } else if source == SOURCE_DATA {
            styles::data(&line)
        } else if source.starts_with(API_PREFIX) {
            styles::api(&line)
        } else {
            line
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(relay: &MessageRelay, source: &str, severity: Severity, body: &str) -> Option<String> {
        relay.format_internal(source, severity, body, false)
    }

    #[test]
    fn info_messages_name_their_source() {
        let relay = MessageRelay::new(false);
        assert_eq!(
            plain(&relay, "Engine", Severity::Info, "Reading list..."),
            Some("Engine: Reading list...".to_string())
        );
    }

    #[test]
    fn warnings_carry_a_warning_marker() {
        let relay = MessageRelay::new(false);
        assert_eq!(
            plain(&relay, "Data", Severity::Warn, "list is stale"),
            Some("Data warning: list is stale".to_string())
        );
    }

    #[test]
    fn debug_messages_are_dropped_unless_enabled() {
        let body = "cache hit";
        assert_eq!(plain(&MessageRelay::new(false), "Engine", Severity::Debug, body), None);
        assert_eq!(
            plain(&MessageRelay::new(true), "Engine", Severity::Debug, body),
            Some("Engine: cache hit".to_string())
        );
    }

    #[test]
    fn known_sources_are_colorized_and_unknown_ones_are_not() {
        colored::control::set_override(true);
        let relay = MessageRelay::new(false);

        let engine = relay
            .format_internal("Engine", Severity::Info, "up", true)
            .unwrap();
        let api = relay
            .format_internal("libmal", Severity::Info, "up", true)
            .unwrap();
        let other = relay
            .format_internal("Player", Severity::Info, "up", true)
            .unwrap();
        colored::control::unset_override();

        assert!(engine.contains("\u{1b}["));
        assert!(api.contains("\u{1b}["));
        // Unknown sources: plain text, no color codes and no reset.
        assert_eq!(other, "Player: up");
    }
}
