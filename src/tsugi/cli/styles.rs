//! Color map for the terminal surface. Message sources, the airing
//! highlight and the two error classes each get a fixed color; anything
//! else is printed verbatim, with no reset code attached.

use colored::Colorize;

pub fn engine(s: &str) -> String {
    s.green().to_string()
}

pub fn data(s: &str) -> String {
    s.yellow().to_string()
}

pub fn api(s: &str) -> String {
    s.blue().to_string()
}

pub fn airing(s: &str) -> String {
    s.blue().to_string()
}

pub fn error(s: &str) -> String {
    s.red().to_string()
}

pub fn fatal(s: &str) -> String {
    s.red().bold().to_string()
}
