#![forbid(unsafe_code)]

//! Core types for SVG path data: commands, the command sequence, and errors.

mod chain;
mod command;

pub use chain::{Iter, PathData, Step};
pub use command::{Command, CommandKind};

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An SVG attribute value that knows its own attribute name.
pub trait SvgAttribute: fmt::Display {
    fn name(&self) -> &'static str;

    /// Attribute value as written into markup.
    fn value(&self) -> String {
        self.to_string()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PathDataErrorCode {
    UnknownCommand,
    NumberFormat,
    MalformedCommand,
    MissingCommand,
    TooManyCommands,
}

impl PathDataErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnknownCommand => "path-data/error/unknown-command",
            Self::NumberFormat => "path-data/error/number-format",
            Self::MalformedCommand => "path-data/error/malformed-command",
            Self::MissingCommand => "path-data/error/missing-command",
            Self::TooManyCommands => "path-data/error/too-many-commands",
        }
    }
}

/// Errors raised while building path data.
///
/// Offsets are byte offsets into the parsed text.
#[derive(Debug, Clone, Serialize, Deserialize, Error, PartialEq, Eq)]
pub enum PathDataError {
    /// The letter matches no registered command kind. `offset` is `None` when
    /// the letter did not come from parsed text.
    #[error("unknown path command '{code}'{}", at_offset(.offset))]
    UnknownCommand { code: char, offset: Option<usize> },
    #[error("invalid number '{token}' at byte {offset}")]
    NumberFormat { token: String, offset: usize },
    #[error("command '{code}' takes {expected} parameters, found {found}")]
    MalformedCommand {
        code: char,
        expected: usize,
        found: usize,
    },
    /// Parameters appear before the first command letter.
    #[error("parameters at byte {offset} are not preceded by a command")]
    MissingCommand { offset: usize },
    #[error("path data exceeds the limit of {limit} commands")]
    TooManyCommands { limit: usize },
}

impl PathDataError {
    #[must_use]
    pub const fn code(&self) -> PathDataErrorCode {
        match self {
            Self::UnknownCommand { .. } => PathDataErrorCode::UnknownCommand,
            Self::NumberFormat { .. } => PathDataErrorCode::NumberFormat,
            Self::MalformedCommand { .. } => PathDataErrorCode::MalformedCommand,
            Self::MissingCommand { .. } => PathDataErrorCode::MissingCommand,
            Self::TooManyCommands { .. } => PathDataErrorCode::TooManyCommands,
        }
    }

    /// Byte offset of the offending text, when known.
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        match self {
            Self::UnknownCommand { offset, .. } => *offset,
            Self::NumberFormat { offset, .. } | Self::MissingCommand { offset } => Some(*offset),
            Self::MalformedCommand { .. } | Self::TooManyCommands { .. } => None,
        }
    }
}

fn at_offset(offset: &Option<usize>) -> String {
    offset.map_or_else(String::new, |offset| format!(" at byte {offset}"))
}
