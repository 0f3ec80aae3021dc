//! # Command shell
//!
//! The interactive read-eval-print loop. The shell owns the session state
//! and the line editor; commands run one at a time to completion. Domain
//! errors are caught at the command boundary and rendered; nothing a
//! single command does can take the loop down.

use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use super::render::print_show_list;
use super::styles;
use crate::commands::{self, CmdResult, MessageLevel, MISSING_ARGUMENTS};
use crate::engine::Engine;
use crate::error::{Result, TsugiError};
use crate::session::SessionState;

/// Command names and their help lines.
const COMMANDS: &[(&str, &str)] = &[
    ("filter", "filter <status>           limit listings to one status"),
    ("sort", "sort <key>                order by id, title, my_episodes or episodes"),
    ("list", "list                      show the filtered, sorted list"),
    ("search", "search <pattern>          regex search over all titles"),
    ("play", "play <show> [episode]     play an episode (the next one when omitted)"),
    ("update", "update <show> <episode>   set the watched-episode count"),
    ("help", "help                      show this text"),
    ("quit", "quit                      save and exit"),
];

/// rustyline helper: completes command names on the first word, and show
/// titles for the argument of `play` and `update`.
struct ShellHelper<E: Engine> {
    engine: Rc<RefCell<E>>,
}

impl<E: Engine> Completer for ShellHelper<E> {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        let start = line.rfind(' ').map(|i| i + 1).unwrap_or(0);
        let fragment = &line[start..];

        if start == 0 {
            let candidates = COMMANDS
                .iter()
                .filter(|(name, _)| name.starts_with(fragment))
                .map(|(name, _)| Pair {
                    display: name.to_string(),
                    replacement: name.to_string(),
                })
                .collect();
            return Ok((0, candidates));
        }

        // A bare tab on an empty fragment stays silent rather than
        // dumping every title.
        let command = line.split_whitespace().next().unwrap_or("");
        if fragment.is_empty() || (command != "play" && command != "update") {
            return Ok((start, vec![]));
        }

        let titles = self
            .engine
            .borrow()
            .regex_list_titles(fragment)
            .unwrap_or_default();
        let candidates = titles
            .into_iter()
            .map(|title| Pair {
                display: title.clone(),
                replacement: title,
            })
            .collect();
        Ok((start, candidates))
    }
}

impl<E: Engine> Hinter for ShellHelper<E> {
    type Hint = String;
}

impl<E: Engine> Highlighter for ShellHelper<E> {}
impl<E: Engine> Validator for ShellHelper<E> {}
impl<E: Engine> Helper for ShellHelper<E> {}

pub struct Shell<E: Engine> {
    engine: Rc<RefCell<E>>,
    session: SessionState,
    rl: Editor<ShellHelper<E>, DefaultHistory>,
}

impl<E: Engine> Shell<E> {
    /// Builds the shell around an already-started engine.
    pub fn new(engine: Rc<RefCell<E>>) -> Result<Self> {
        let mut rl = Editor::new()
            .map_err(|e| TsugiError::Fatal(format!("Cannot initialize line editor: {}", e)))?;
        rl.set_helper(Some(ShellHelper {
            engine: Rc::clone(&engine),
        }));
        Ok(Self {
            engine,
            session: SessionState::default(),
            rl,
        })
    }

    /// The interactive loop. Returns when the user quits; a `Ctrl-D`
    /// counts as `quit`.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let prompt = self.session.prompt.clone();
            let line = match self.rl.readline(&prompt) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) => {
                    println!("Type 'quit' to exit.");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    self.quit();
                    return Ok(());
                }
                Err(e) => return Err(TsugiError::Fatal(format!("Input error: {}", e))),
            };

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let _ = self.rl.add_history_entry(trimmed);

            let (command, arg) = split_command(trimmed);
            if self.dispatch(command, arg).is_break() {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, command: &str, arg: &str) -> ControlFlow<()> {
        match command {
            "filter" => {
                let result = commands::filter::run(&*self.engine.borrow(), &mut self.session, arg);
                self.report(Ok(result));
            }
            "sort" => {
                let result = commands::sort::run(&mut self.session, arg);
                self.report(Ok(result));
            }
            "list" => {
                let result = commands::list::run(&*self.engine.borrow(), &self.session);
                self.report(result);
            }
            "search" => {
                let result = commands::search::run(&*self.engine.borrow(), &self.session, arg);
                self.report(result);
            }
            "play" => self.play(arg),
            "update" => {
                let result = commands::update::run(&mut *self.engine.borrow_mut(), arg);
                self.report(result);
            }
            "help" => {
                for (_, help) in COMMANDS {
                    println!("{}", help);
                }
            }
            "quit" => {
                self.quit();
                return ControlFlow::Break(());
            }
            unknown => println!("Unknown command: {}", unknown),
        }
        ControlFlow::Continue(())
    }

    /// The `play` flow: play, then offer to bump the watched count when
    /// the next unwatched episode was played.
    fn play(&mut self, arg: &str) {
        if arg.is_empty() {
            println!("{}", styles::error(MISSING_ARGUMENTS));
            return;
        }

        let outcome = {
            let mut engine = self.engine.borrow_mut();
            commands::play::run(&mut *engine, arg)
        };
        let outcome = match outcome {
            Ok(outcome) => outcome,
            Err(e) => {
                self.display_error(&e);
                return;
            }
        };

        let played = match outcome.played {
            Some(played) if outcome.playing_next => played,
            _ => return,
        };

        let question = format!(
            "Should I update {} to episode {}? [y/N] ",
            outcome.show.title, played
        );
        if self.confirm(&question) {
            let result = self
                .engine
                .borrow_mut()
                .set_episode(&outcome.show.id.to_string(), played);
            if let Err(e) = result {
                self.display_error(&e);
            }
        }
    }

    fn quit(&mut self) {
        if let Err(e) = self.engine.borrow_mut().unload() {
            self.display_error(&e);
        }
        println!("Bye!");
    }

    fn confirm(&mut self, question: &str) -> bool {
        match self.rl.readline(question) {
            Ok(answer) => answer.trim().eq_ignore_ascii_case("y"),
            Err(_) => false,
        }
    }

    fn report(&mut self, result: Result<CmdResult>) {
        let result = match result {
            Ok(result) => result,
            Err(e) => {
                self.display_error(&e);
                return;
            }
        };
        if let Some(shows) = &result.shows {
            print_show_list(shows);
        }
        for message in &result.messages {
            match message.level {
                MessageLevel::Info => println!("{}", message.content),
                MessageLevel::Warning => println!("{}", styles::data(&message.content)),
                MessageLevel::Error => println!("{}", styles::error(&message.content)),
            }
        }
    }

    fn display_error(&self, e: &TsugiError) {
        println!("{}", styles::error(&format!("{}: {}", e.kind(), e)));
    }
}

fn split_command(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((command, arg)) => (command, arg.trim()),
        None => (line, ""),
    }
}
