//! Output rendering
//!
//! Pipeline steps report progress through a `Reporter` rather than printing
//! directly, so color and icon handling stay in one place.

use clap::ValueEnum;
use crossterm::style::{Color, Stylize};
use is_terminal::IsTerminal;

use super::theme::{colors, icons, icons_ascii};

/// When to apply color to output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Renders pipeline progress and warnings to stdout.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    color: bool,
    unicode: bool,
    verbose: u8,
}

impl Reporter {
    pub fn new(color: Option<ColorWhen>, verbose: u8) -> Self {
        let tty = std::io::stdout().is_terminal();
        let color = match color.unwrap_or(ColorWhen::Auto) {
            ColorWhen::Always => true,
            ColorWhen::Never => false,
            ColorWhen::Auto => tty && std::env::var_os("NO_COLOR").is_none(),
        };
        Self {
            color,
            unicode: supports_unicode(),
            verbose,
        }
    }

    pub fn verbose(&self) -> u8 {
        self.verbose
    }

    /// Announce the start of a pipeline step.
    pub fn step(&self, message: &str) {
        let icon = if self.unicode { icons::STEP } else { icons_ascii::STEP };
        println!("{} {}", self.paint(icon, colors::INFO), message);
    }

    /// Report a completed step.
    pub fn success(&self, message: &str) {
        let icon = if self.unicode { icons::SUCCESS } else { icons_ascii::SUCCESS };
        println!("{} {}", self.paint(icon, colors::SUCCESS), message);
    }

    /// Informational detail, indented under the current step.
    pub fn info(&self, message: &str) {
        println!("  {}", message);
    }

    /// Non-fatal warning.
    pub fn warn(&self, message: &str) {
        let icon = if self.unicode { icons::WARNING } else { icons_ascii::WARNING };
        println!("{} {}", self.paint(icon, colors::WARNING), message);
    }

    /// Detail shown only at -v and above.
    pub fn detail(&self, message: &str) {
        if self.verbose > 0 {
            println!("  {}", self.paint(message, colors::DIM));
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            format!("{}", text.with(color))
        } else {
            text.to_string()
        }
    }
}

fn supports_unicode() -> bool {
    let utf8 = |value: std::ffi::OsString| {
        value
            .to_str()
            .is_some_and(|v| v.to_uppercase().contains("UTF"))
    };
    std::env::var_os("LC_ALL").is_some_and(utf8) || std::env::var_os("LANG").is_some_and(utf8)
}
