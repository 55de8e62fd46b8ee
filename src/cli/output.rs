//! Standard output helpers so every command reports in the same voice.

use std::fmt;

use colored::Colorize;

pub fn info(message: impl fmt::Display) {
    println!("{message}");
}

pub fn success(message: impl fmt::Display) {
    println!("{}", message.to_string().green());
}

pub fn warning(message: impl fmt::Display) {
    println!("{}", message.to_string().yellow());
}

pub fn error(message: impl fmt::Display) {
    eprintln!("{}", format!("Error: {message}").red());
}
