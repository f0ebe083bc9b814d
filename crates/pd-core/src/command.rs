//! Path data commands.
//!
//! Every command is a [`CommandKind`] plus a fixed number of numeric
//! parameters. Absolute and relative forms of the same drawing operation are
//! distinct kinds with distinct letter codes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::PathDataError;

/// The registered command variants.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// Move to (absolute)
    MoveTo,
    /// Move to (relative)
    MoveToRel,
    /// Line to (absolute)
    LineTo,
    /// Line to (relative)
    LineToRel,
    /// Horizontal line to (absolute)
    HorizontalTo,
    /// Horizontal line to (relative)
    HorizontalToRel,
    /// Vertical line to (absolute)
    VerticalTo,
    /// Vertical line to (relative)
    VerticalToRel,
    /// Cubic bezier curve (absolute)
    CurveTo,
    /// Cubic bezier curve (relative)
    CurveToRel,
    /// Quadratic bezier curve (absolute)
    QuadraticTo,
    /// Quadratic bezier curve (relative)
    QuadraticToRel,
    /// Elliptical arc (absolute)
    ArcTo,
    /// Elliptical arc (relative)
    ArcToRel,
    /// Close path
    Close,
    /// Close path, lowercase form
    CloseRel,
}

impl CommandKind {
    /// Every registered kind, in letter-resolution order.
    pub const ALL: [Self; 16] = [
        Self::Close,
        Self::CloseRel,
        Self::MoveTo,
        Self::MoveToRel,
        Self::LineTo,
        Self::LineToRel,
        Self::CurveTo,
        Self::CurveToRel,
        Self::ArcTo,
        Self::ArcToRel,
        Self::QuadraticTo,
        Self::QuadraticToRel,
        Self::HorizontalTo,
        Self::HorizontalToRel,
        Self::VerticalTo,
        Self::VerticalToRel,
    ];

    /// Resolve a letter code. Matching is case-sensitive.
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    /// The letter this kind is written with.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::MoveTo => 'M',
            Self::MoveToRel => 'm',
            Self::LineTo => 'L',
            Self::LineToRel => 'l',
            Self::HorizontalTo => 'H',
            Self::HorizontalToRel => 'h',
            Self::VerticalTo => 'V',
            Self::VerticalToRel => 'v',
            Self::CurveTo => 'C',
            Self::CurveToRel => 'c',
            Self::QuadraticTo => 'Q',
            Self::QuadraticToRel => 'q',
            Self::ArcTo => 'A',
            Self::ArcToRel => 'a',
            Self::Close => 'Z',
            Self::CloseRel => 'z',
        }
    }

    /// Number of parameters a command of this kind carries.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Close | Self::CloseRel => 0,
            Self::HorizontalTo | Self::HorizontalToRel | Self::VerticalTo | Self::VerticalToRel => 1,
            Self::MoveTo | Self::MoveToRel | Self::LineTo | Self::LineToRel => 2,
            Self::QuadraticTo | Self::QuadraticToRel => 4,
            Self::CurveTo | Self::CurveToRel => 6,
            Self::ArcTo | Self::ArcToRel => 7,
        }
    }

    /// Whether coordinates are offsets from the current point.
    #[must_use]
    pub const fn is_relative(self) -> bool {
        self.code().is_ascii_lowercase()
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MoveTo | Self::MoveToRel => "move-to",
            Self::LineTo | Self::LineToRel => "line-to",
            Self::HorizontalTo | Self::HorizontalToRel => "horizontal-line-to",
            Self::VerticalTo | Self::VerticalToRel => "vertical-line-to",
            Self::CurveTo | Self::CurveToRel => "cubic-curve-to",
            Self::QuadraticTo | Self::QuadraticToRel => "quadratic-curve-to",
            Self::ArcTo | Self::ArcToRel => "arc-to",
            Self::Close | Self::CloseRel => "close-path",
        }
    }

    /// The absolute counterpart. Absolute kinds map to themselves.
    #[must_use]
    pub const fn to_absolute(self) -> Self {
        match self {
            Self::MoveToRel => Self::MoveTo,
            Self::LineToRel => Self::LineTo,
            Self::HorizontalToRel => Self::HorizontalTo,
            Self::VerticalToRel => Self::VerticalTo,
            Self::CurveToRel => Self::CurveTo,
            Self::QuadraticToRel => Self::QuadraticTo,
            Self::ArcToRel => Self::ArcTo,
            Self::CloseRel => Self::Close,
            absolute => absolute,
        }
    }

    /// The relative counterpart. Relative kinds map to themselves.
    #[must_use]
    pub const fn to_relative(self) -> Self {
        match self {
            Self::MoveTo => Self::MoveToRel,
            Self::LineTo => Self::LineToRel,
            Self::HorizontalTo => Self::HorizontalToRel,
            Self::VerticalTo => Self::VerticalToRel,
            Self::CurveTo => Self::CurveToRel,
            Self::QuadraticTo => Self::QuadraticToRel,
            Self::ArcTo => Self::ArcToRel,
            Self::Close => Self::CloseRel,
            relative => relative,
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A single drawing instruction with its parameters.
///
/// The parameter count always equals `kind.arity()`; every constructor and
/// deserialization enforce it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CommandRepr", into = "CommandRepr")]
pub struct Command {
    kind: CommandKind,
    params: Vec<f64>,
}

impl Command {
    /// Build a command, checking the parameter count against the kind.
    pub fn new(kind: CommandKind, params: Vec<f64>) -> Result<Self, PathDataError> {
        if params.len() != kind.arity() {
            return Err(PathDataError::MalformedCommand {
                code: kind.code(),
                expected: kind.arity(),
                found: params.len(),
            });
        }
        Ok(Self { kind, params })
    }

    /// Resolve `code` and build the command.
    pub fn from_code(code: char, params: Vec<f64>) -> Result<Self, PathDataError> {
        let kind = CommandKind::from_code(code)
            .ok_or(PathDataError::UnknownCommand { code, offset: None })?;
        Self::new(kind, params)
    }

    fn fixed<const N: usize>(kind: CommandKind, params: [f64; N]) -> Self {
        debug_assert_eq!(N, kind.arity());
        Self {
            kind,
            params: params.to_vec(),
        }
    }

    #[must_use]
    pub fn move_to(x: f64, y: f64) -> Self {
        Self::fixed(CommandKind::MoveTo, [x, y])
    }

    #[must_use]
    pub fn move_to_rel(dx: f64, dy: f64) -> Self {
        Self::fixed(CommandKind::MoveToRel, [dx, dy])
    }

    #[must_use]
    pub fn line_to(x: f64, y: f64) -> Self {
        Self::fixed(CommandKind::LineTo, [x, y])
    }

    #[must_use]
    pub fn line_to_rel(dx: f64, dy: f64) -> Self {
        Self::fixed(CommandKind::LineToRel, [dx, dy])
    }

    #[must_use]
    pub fn horizontal_to(x: f64) -> Self {
        Self::fixed(CommandKind::HorizontalTo, [x])
    }

    #[must_use]
    pub fn horizontal_to_rel(dx: f64) -> Self {
        Self::fixed(CommandKind::HorizontalToRel, [dx])
    }

    #[must_use]
    pub fn vertical_to(y: f64) -> Self {
        Self::fixed(CommandKind::VerticalTo, [y])
    }

    #[must_use]
    pub fn vertical_to_rel(dy: f64) -> Self {
        Self::fixed(CommandKind::VerticalToRel, [dy])
    }

    /// Cubic bezier through two control points to `(x, y)`.
    #[must_use]
    pub fn curve_to(x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> Self {
        Self::fixed(CommandKind::CurveTo, [x1, y1, x2, y2, x, y])
    }

    #[must_use]
    pub fn curve_to_rel(dx1: f64, dy1: f64, dx2: f64, dy2: f64, dx: f64, dy: f64) -> Self {
        Self::fixed(CommandKind::CurveToRel, [dx1, dy1, dx2, dy2, dx, dy])
    }

    /// Quadratic bezier through one control point to `(x, y)`.
    #[must_use]
    pub fn quadratic_to(x1: f64, y1: f64, x: f64, y: f64) -> Self {
        Self::fixed(CommandKind::QuadraticTo, [x1, y1, x, y])
    }

    #[must_use]
    pub fn quadratic_to_rel(dx1: f64, dy1: f64, dx: f64, dy: f64) -> Self {
        Self::fixed(CommandKind::QuadraticToRel, [dx1, dy1, dx, dy])
    }

    /// Elliptical arc. The two flags are stored as `0` or `1`.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn arc_to(
        rx: f64,
        ry: f64,
        x_rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) -> Self {
        Self::fixed(
            CommandKind::ArcTo,
            [rx, ry, x_rotation, flag(large_arc), flag(sweep), x, y],
        )
    }

    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn arc_to_rel(
        rx: f64,
        ry: f64,
        x_rotation: f64,
        large_arc: bool,
        sweep: bool,
        dx: f64,
        dy: f64,
    ) -> Self {
        Self::fixed(
            CommandKind::ArcToRel,
            [rx, ry, x_rotation, flag(large_arc), flag(sweep), dx, dy],
        )
    }

    #[must_use]
    pub fn close() -> Self {
        Self::fixed(CommandKind::Close, [])
    }

    #[must_use]
    pub fn close_rel() -> Self {
        Self::fixed(CommandKind::CloseRel, [])
    }

    #[must_use]
    pub const fn kind(&self) -> CommandKind {
        self.kind
    }

    #[must_use]
    pub const fn code(&self) -> char {
        self.kind.code()
    }

    /// Parameters in declaration order.
    #[must_use]
    pub fn params(&self) -> &[f64] {
        &self.params
    }

    #[must_use]
    pub fn into_params(self) -> Vec<f64> {
        self.params
    }

    /// Re-tag the parameters with another kind of the same arity.
    pub fn into_kind(self, kind: CommandKind) -> Result<Self, PathDataError> {
        Self::new(kind, self.params)
    }
}

fn flag(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.code())?;
        for param in &self.params {
            write!(f, " {param}")?;
        }
        Ok(())
    }
}

/// Wire form: the letter code instead of the variant name.
#[derive(Serialize, Deserialize)]
struct CommandRepr {
    code: char,
    params: Vec<f64>,
}

impl TryFrom<CommandRepr> for Command {
    type Error = PathDataError;

    fn try_from(repr: CommandRepr) -> Result<Self, Self::Error> {
        Self::from_code(repr.code, repr.params)
    }
}

impl From<Command> for CommandRepr {
    fn from(command: Command) -> Self {
        Self {
            code: command.kind.code(),
            params: command.params,
        }
    }
}
