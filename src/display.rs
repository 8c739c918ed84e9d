//! Terminal output for command results.

use console::style;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Failure,
}

impl MessageKind {
    fn symbol(&self) -> &'static str {
        match self {
            MessageKind::Info => ".",
            MessageKind::Success => "✔",
            MessageKind::Failure => "✘",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            MessageKind::Info => "Info:",
            MessageKind::Success => "Success:",
            MessageKind::Failure => "Error:",
        }
    }
}

/// Renders messages with a symbol or label prefix, optionally colored.
///
/// Colors are also dropped automatically when the output is not a terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Display {
    pub no_color: bool,
    pub no_symbols: bool,
}

impl Display {
    pub fn new(no_color: bool, no_symbols: bool) -> Self {
        Self {
            no_color,
            no_symbols,
        }
    }

    pub fn format(&self, kind: MessageKind, msg: &str) -> String {
        let prefix = if self.no_symbols {
            kind.label()
        } else {
            kind.symbol()
        };

        if self.no_color {
            return format!("{} {}", prefix, msg);
        }

        match kind {
            MessageKind::Info => format!(
                "{} {}",
                style(prefix).black().bright().bold(),
                style(msg).black().bright().bold()
            ),
            MessageKind::Success => format!("{} {}", style(prefix).green(), msg),
            MessageKind::Failure => format!("{} {}", style(prefix).for_stderr().red(), msg),
        }
    }

    pub fn info(&self, msg: &str) {
        println!("{}", self.format(MessageKind::Info, msg));
    }

    pub fn success(&self, msg: &str) {
        println!("{}", self.format(MessageKind::Success, msg));
    }

    pub fn failure(&self, msg: &str) {
        eprintln!("{}", self.format(MessageKind::Failure, msg));
    }
}
