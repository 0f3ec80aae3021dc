use crate::commands::{CmdMessage, CmdResult, MISSING_ARGUMENTS};
use crate::engine::Engine;
use crate::session::SessionState;

/// Switches the session's status filter to the status named by `arg`.
/// An unknown name leaves the session untouched.
pub fn run<E: Engine>(engine: &E, session: &mut SessionState, arg: &str) -> CmdResult {
    if arg.is_empty() {
        return CmdResult::message(CmdMessage::error(MISSING_ARGUMENTS));
    }

    match engine.statuses_keys().get(arg) {
        Some(&code) => {
            let statuses = engine.statuses();
            let label = statuses.get(&code).map(String::as_str).unwrap_or(arg);
            session.set_filter(code, label);
            CmdResult::default()
        }
        None => CmdResult::message(CmdMessage::error("Invalid filter.")),
    }
}
