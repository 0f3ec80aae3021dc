use crate::commands::CmdResult;
use crate::engine::Engine;
use crate::error::Result;
use crate::session::SessionState;

/// Fetches the shows matching the session filter, sorted by the session
/// sort key.
pub fn run<E: Engine>(engine: &E, session: &SessionState) -> Result<CmdResult> {
    let mut shows = engine.filter_list(session.filter)?;
    session.sort.sort(&mut shows);
    Ok(CmdResult::listing(shows))
}
