//! Stderr reporting helpers

use colored::*;

pub(crate) fn print_warning(msg: &str) {
    eprintln!("{}: {}", "warning".yellow().bold(), msg);
}
