//! # Command Layer
//!
//! Business logic for each user action. Commands operate on an [`Inventory`]
//! passed in by the caller and return a [`CmdResult`]; they never touch the
//! disk or the terminal. Persisting a mutation is the API's job, signalled by
//! [`CmdResult::mutated`].
//!
//! [`Inventory`]: crate::model::Inventory

use crate::report::Report;

pub mod add;
pub mod list;
pub mod search;
pub mod sell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CmdResult {
    pub report: Option<Report>,
    pub messages: Vec<CmdMessage>,
    /// The inventory changed and must be saved.
    pub mutated: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_report(mut self, report: Report) -> Self {
        self.report = Some(report);
        self
    }

    pub fn mutated(mut self) -> Self {
        self.mutated = true;
        self
    }

    /// The form's input fields are cleared only after a change went through.
    pub fn clears_inputs(&self) -> bool {
        self.mutated
    }

    /// Nothing to show and nothing changed.
    pub fn is_noop(&self) -> bool {
        self.report.is_none() && self.messages.is_empty() && !self.mutated
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Warning | MessageLevel::Error))
    }

    /// Text for the output area: the report if there is one, else the messages.
    pub fn render(&self) -> String {
        match &self.report {
            Some(report) => report.to_string(),
            None => self
                .messages
                .iter()
                .map(|m| m.content.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}
