//! Console channel UI components.

use crate::ui::Style;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header() {
    println!(
        "{} {} - Console Channel",
        Style::header("babelbot"),
        Style::version(format!("v{VERSION}"))
    );
    println!(
        "{}",
        Style::hint("Plain messages are translated while live mode is active.")
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    println!(
        "  {}  {}",
        Style::command("/translate [from:xx] [to:yy] <text>"),
        Style::secondary("Translate text")
    );
    println!(
        "  {}              {}",
        Style::command("/setlanguage <code>"),
        Style::secondary("Set your default target language")
    );
    println!(
        "  {}                       {}",
        Style::command("/languages"),
        Style::secondary("List supported language codes")
    );
    println!(
        "  {}                     {}",
        Style::command("/live <code>"),
        Style::secondary("Start live translation in this channel")
    );
    println!(
        "  {}                            {}",
        Style::command("/stop"),
        Style::secondary("Stop live translation")
    );
    println!(
        "  {}                {}",
        Style::command("@<thread> <text>"),
        Style::secondary("Reply into a thread (e.g. a retry correction)")
    );
    println!(
        "  {}                            {}",
        Style::command("/quit"),
        Style::secondary("Leave the console channel")
    );
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
