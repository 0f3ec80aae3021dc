use crate::commands::{CmdMessage, CmdResult};
use crate::model::SortKey;
use crate::session::SessionState;

/// Switches the session's sort key. Anything but the four fixed literals
/// (including an empty argument) is invalid and changes nothing.
pub fn run(session: &mut SessionState, arg: &str) -> CmdResult {
    match SortKey::from_name(arg) {
        Some(key) => {
            session.sort = key;
            CmdResult::default()
        }
        None => CmdResult::message(CmdMessage::error("Invalid sort.")),
    }
}
