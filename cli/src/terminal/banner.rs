use colored::*;

use crate::terminal::{colors, print};

const BANNER: &str = r#"
    ██████╗ ███████╗ ██████╗ ██████╗ ███╗   ██╗    ██╗  ██╗
    ██╔══██╗██╔════╝██╔════╝██╔═══██╗████╗  ██║    ╚██╗██╔╝
    ██████╔╝█████╗  ██║     ██║   ██║██╔██╗ ██║     ╚███╔╝
    ██╔══██╗██╔══╝  ██║     ██║   ██║██║╚██╗██║     ██╔██╗
    ██║  ██║███████╗╚██████╗╚██████╔╝██║ ╚████║    ██╔╝ ██╗
    ╚═╝  ╚═╝╚══════╝ ╚═════╝ ╚═════╝ ╚═╝  ╚═══╝    ╚═╝  ╚═╝
"#;

pub fn print() {
    print::print(&format!("{}", BANNER.color(colors::PRIMARY)));
    print::centerln(&format!("{}", ">> Advanced Reconnaissance Suite <<".bold()));
    print::print("");
}
