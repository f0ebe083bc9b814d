//! Splits path data text into letter-plus-payload runs.

use pd_core::PathDataError;
use serde::Serialize;

/// One command letter and the raw text of its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RawCommand<'a> {
    pub code: char,
    /// Byte offset of the letter.
    pub offset: usize,
    /// Everything between this letter and the next one.
    pub payload: &'a str,
    /// Byte offset of the first payload byte.
    pub payload_offset: usize,
}

/// Split `input` into runs of one letter followed by its non-letter payload.
///
/// An `e` or `E` directly after a digit or `.` is an exponent marker and stays
/// in the payload. Non-whitespace text before the first letter is an error.
pub fn tokenize(input: &str) -> Result<Vec<RawCommand<'_>>, PathDataError> {
    tokenize_with_limit(input, None)
}

/// [`tokenize`], failing with `TooManyCommands` as soon as more than `limit`
/// runs are found.
pub fn tokenize_with_limit(
    input: &str,
    limit: Option<usize>,
) -> Result<Vec<RawCommand<'_>>, PathDataError> {
    let mut runs = Vec::new();
    let mut open: Option<(char, usize)> = None;
    let mut payload_offset = 0;
    let mut prev: Option<char> = None;

    for (offset, ch) in input.char_indices() {
        if is_command_letter(ch, prev) {
            if let Some((code, letter_offset)) = open {
                push_run(
                    &mut runs,
                    RawCommand {
                        code,
                        offset: letter_offset,
                        payload: &input[payload_offset..offset],
                        payload_offset,
                    },
                    limit,
                )?;
            }
            open = Some((ch, offset));
            payload_offset = offset + ch.len_utf8();
        } else if open.is_none() && !ch.is_whitespace() {
            return Err(PathDataError::MissingCommand { offset });
        }
        prev = Some(ch);
    }

    if let Some((code, letter_offset)) = open {
        push_run(
            &mut runs,
            RawCommand {
                code,
                offset: letter_offset,
                payload: &input[payload_offset..],
                payload_offset,
            },
            limit,
        )?;
    }

    Ok(runs)
}

fn push_run<'a>(
    runs: &mut Vec<RawCommand<'a>>,
    run: RawCommand<'a>,
    limit: Option<usize>,
) -> Result<(), PathDataError> {
    if let Some(limit) = limit
        && runs.len() >= limit
    {
        return Err(PathDataError::TooManyCommands { limit });
    }
    runs.push(run);
    Ok(())
}

fn is_command_letter(ch: char, prev: Option<char>) -> bool {
    if !ch.is_ascii_alphabetic() {
        return false;
    }
    let exponent = matches!(ch, 'e' | 'E') && prev.is_some_and(|p| p.is_ascii_digit() || p == '.');
    !exponent
}

/// Split a payload into parameter tokens with their byte offsets.
///
/// Whitespace always separates tokens; commas only when `commas` is set.
pub(crate) fn split_params(payload: &str, base: usize, commas: bool) -> Vec<(usize, &str)> {
    let is_separator = |c: char| c.is_whitespace() || (commas && c == ',');
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (offset, ch) in payload.char_indices() {
        match (is_separator(ch), start) {
            (true, Some(begin)) => {
                tokens.push((base + begin, &payload[begin..offset]));
                start = None;
            }
            (false, None) => start = Some(offset),
            _ => {}
        }
    }
    if let Some(begin) = start {
        tokens.push((base + begin, &payload[begin..]));
    }
    tokens
}
