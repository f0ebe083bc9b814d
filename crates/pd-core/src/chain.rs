//! The ordered command sequence behind one `d` attribute value.

use std::convert::Infallible;
use std::fmt;
use std::iter::{FusedIterator, Rev};
use std::slice;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Command, SvgAttribute};

/// Sequence of path commands.
///
/// The most recently appended command is the head. Walking with
/// [`PathData::iter`] starts at the head and moves toward the first command,
/// so iteration runs in reverse textual order. [`fmt::Display`] renders in
/// textual order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathData {
    /// Textual order; the head is the last element.
    commands: Vec<Command>,
}

impl PathData {
    /// Name of the SVG attribute this value belongs to.
    pub const ATTRIBUTE_NAME: &'static str = "d";

    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Append a command. It becomes the new head.
    pub fn append(&mut self, command: Command) -> &mut Self {
        self.commands.push(command);
        self
    }

    /// The last command in textual order.
    #[must_use]
    pub fn head(&self) -> Option<&Command> {
        self.commands.last()
    }

    /// The first command in textual order.
    #[must_use]
    pub fn first(&self) -> Option<&Command> {
        self.commands.first()
    }

    /// Commands in textual order.
    #[must_use]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Walk from the head toward the first command.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.commands.iter().rev(),
            position: 0,
        }
    }

    /// Run every command through `f`, head first.
    ///
    /// Whatever `f` returns takes the place of the command it was given.
    /// Returning the input unchanged leaves that position untouched.
    pub fn transform<F>(&mut self, mut f: F)
    where
        F: FnMut(Command) -> Command,
    {
        match self.try_transform(|command| Ok::<_, Infallible>(f(command))) {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    /// Fallible [`PathData::transform`].
    ///
    /// The first error from `f` stops the walk. Commands already visited keep
    /// their replacements; the failing command and everything before it in
    /// textual order are left as they were.
    pub fn try_transform<F, E>(&mut self, mut f: F) -> Result<(), E>
    where
        F: FnMut(Command) -> Result<Command, E>,
    {
        let mut replaced = 0_usize;
        for slot in self.commands.iter_mut().rev() {
            let transformed = f(slot.clone())?;
            if transformed != *slot {
                replaced += 1;
            }
            *slot = transformed;
        }
        debug!(
            commands = self.commands.len(),
            replaced, "transformed path data"
        );
        Ok(())
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{command}")?;
        }
        Ok(())
    }
}

impl SvgAttribute for PathData {
    fn name(&self) -> &'static str {
        Self::ATTRIBUTE_NAME
    }
}

impl FromIterator<Command> for PathData {
    fn from_iter<I: IntoIterator<Item = Command>>(iter: I) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}

impl Extend<Command> for PathData {
    fn extend<I: IntoIterator<Item = Command>>(&mut self, iter: I) {
        self.commands.extend(iter);
    }
}

impl<'a> IntoIterator for &'a PathData {
    type Item = Step<'a>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One step of a head-first walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step<'a> {
    /// `0` at the head, one lower at each following step.
    pub position: isize,
    pub command: &'a Command,
}

/// Head-first iterator returned by [`PathData::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: Rev<slice::Iter<'a, Command>>,
    position: isize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = Step<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let command = self.inner.next()?;
        let step = Step {
            position: self.position,
            command,
        };
        self.position -= 1;
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
