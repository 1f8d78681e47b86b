use std::cell::Cell;

use autorecon_common::config::Config;
use autorecon_common::log::PRINT_TARGET;
use colored::*;
use console::Term;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::{banner, colors};

pub const TOTAL_WIDTH: usize = 64;

thread_local! {
    pub static GLOBAL_KEY_WIDTH: Cell<usize> = const { Cell::new(0) }
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, "{}", msg);
}

/// Clears the screen (interactive terminals only) and shows the banner.
pub fn initialize(cfg: &Config) {
    let term = Term::stdout();
    if !cfg.no_clear && term.is_term() {
        let _ = term.clear_screen();
    }

    if cfg.no_banner {
        return;
    }

    let text_content: String = format!("⟦ AUTORECON v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═".repeat((TOTAL_WIDTH - text_width) / 2).bright_black();

    print(&format!("{}{}{}", sep, text, sep));
    banner::print();
}

pub fn header(msg: &str) {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).color(colors::HEADER);
    print(&format!("{}", sep));
}

pub fn aligned_line(key: &str, value: ColoredString) {
    let whitespace: String = ".".repeat((GLOBAL_KEY_WIDTH.get() + 1).saturating_sub(key.len()));
    let colon: String = format!(
        "{}{}",
        whitespace.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    );
    print_status(format!("{}{} {}", key.color(colors::PRIMARY), colon, value));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    let message: String = format!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT));
    print(&message);
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}", space, msg));
}

pub fn usage(usage: &str) {
    print("");
    print(&format!("{}", usage.color(colors::WARNING)));
}

/// Closing box pointing at the findings file.
pub fn summary(findings: &str) {
    print("");
    fat_separator();
    print(&format!("{}", " [✓] REPORT GENERATED SUCCESSFULLY ".bold()));
    print(&format!(" File: {findings}"));
    fat_separator();
    print("");
}

pub fn interrupted() {
    print("");
    print(&format!("{}", "[!] Execution interrupted by user.".color(colors::FAIL)));
}
