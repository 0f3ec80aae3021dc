use crate::commands::{CmdMessage, CmdResult, MISSING_ARGUMENTS};
use crate::engine::Engine;
use crate::error::{Result, TsugiError};
use crate::tokenize::tokenize;

/// Sets the watched-episode count of a show. Needs two tokens (identifier
/// and episode); fewer is a local validation failure that never reaches
/// the engine.
pub fn run<E: Engine>(engine: &mut E, arg: &str) -> Result<CmdResult> {
    let tokens = tokenize(arg);
    let (identifier, episode_token) = match (tokens.first(), tokens.get(1)) {
        (Some(identifier), Some(episode)) => (identifier, episode),
        _ => return Ok(CmdResult::message(CmdMessage::error(MISSING_ARGUMENTS))),
    };

    let episode: u32 = episode_token
        .parse()
        .map_err(|_| TsugiError::Engine(format!("Invalid episode number: {}", episode_token)))?;
    engine.set_episode(identifier, episode)?;
    Ok(CmdResult::default())
}
