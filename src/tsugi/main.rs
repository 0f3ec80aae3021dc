use std::cell::RefCell;
use std::rc::Rc;

use clap::Parser;
use directories::ProjectDirs;

use tsugi::cli::relay::MessageRelay;
use tsugi::cli::shell::Shell;
use tsugi::cli::styles;
use tsugi::config::TsugiConfig;
use tsugi::engine::local::LocalEngine;
use tsugi::engine::Engine;
use tsugi::error::{Result, TsugiError};
use tsugi::message::MessageHandler;

mod args;
use args::Cli;

const LIST_FILENAME: &str = "list.json";

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", styles::fatal(&format!("{}: {}", e.kind(), e)));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    println!(
        "tsugi v{}  Copyright (C) tsugi contributors",
        env!("CARGO_PKG_VERSION")
    );
    println!("This program is free software, licensed under the MIT license.");
    println!();

    let dirs = ProjectDirs::from("com", "tsugi", "tsugi")
        .ok_or_else(|| TsugiError::Fatal("Could not determine config directory".into()))?;

    let config = TsugiConfig::load(dirs.config_dir()).unwrap_or_default();
    let debug = cli.debug || config.debug;

    // Flag beats config beats the platform default.
    let data_path = cli
        .data
        .or(config.data)
        .unwrap_or_else(|| dirs.data_dir().join(LIST_FILENAME));
    if let Some(parent) = data_path.parent() {
        std::fs::create_dir_all(parent).map_err(TsugiError::Io)?;
    }

    let relay = MessageRelay::new(debug);
    let handler: MessageHandler = Box::new(move |source, severity, body| {
        relay.handle(source, severity, body);
    });

    let mut engine = LocalEngine::new(data_path, handler);
    println!("Initializing engine...");
    engine.start()?;

    println!("Ready. Type 'help' for a list of commands.");
    println!("Press tab for autocompletion and up/down for command history.");

    let engine = Rc::new(RefCell::new(engine));
    Shell::new(engine)?.run()
}
