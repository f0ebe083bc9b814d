#![forbid(unsafe_code)]

//! Parser for SVG path data (`d` attribute) text.

mod config;
mod tokenizer;

pub use config::ParseConfig;
pub use tokenizer::{RawCommand, tokenize, tokenize_with_limit};

use pd_core::{Command, CommandKind, PathData, PathDataError};
use tracing::{debug, trace};

/// Parse path data with the default (whitespace-only) configuration.
pub fn parse(input: &str) -> Result<PathData, PathDataError> {
    parse_with_config(input, &ParseConfig::default())
}

/// Parse path data into a [`PathData`] sequence.
///
/// Parsing is all-or-nothing: the first unknown letter, bad number, or
/// parameter count mismatch aborts with no partial result.
pub fn parse_with_config(input: &str, config: &ParseConfig) -> Result<PathData, PathDataError> {
    let runs = tokenize_with_limit(input, config.max_commands)?;

    let mut path = PathData::new();
    for run in &runs {
        let command = build_command(run, config)?;
        trace!(offset = run.offset, %command, "parsed command");
        path.append(command);
    }

    debug!(
        commands = path.len(),
        bytes = input.len(),
        commas = config.comma_separators,
        "parsed path data"
    );
    Ok(path)
}

fn build_command(run: &RawCommand<'_>, config: &ParseConfig) -> Result<Command, PathDataError> {
    let params = tokenizer::split_params(run.payload, run.payload_offset, config.comma_separators)
        .into_iter()
        .map(|(offset, token)| {
            // Overflowing literals parse as infinity, which has no textual form here.
            token
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| PathDataError::NumberFormat {
                    token: token.to_string(),
                    offset,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let kind = CommandKind::from_code(run.code).ok_or(PathDataError::UnknownCommand {
        code: run.code,
        offset: Some(run.offset),
    })?;

    Command::new(kind, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_and_renders_move_line() {
        let path = parse("M 10 20 L 30 40").unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path.to_string(), "M 10 20 L 30 40");
    }

    #[test]
    fn parses_run_together_letters() {
        let path = parse("M10 20L30 40Z").unwrap();
        assert_eq!(path.len(), 3);
        let kinds: Vec<_> = path.commands().iter().map(Command::kind).collect();
        assert_eq!(
            kinds,
            vec![CommandKind::MoveTo, CommandKind::LineTo, CommandKind::Close]
        );
    }

    #[test]
    fn unknown_letter_fails() {
        assert_eq!(
            parse("X 1 2"),
            Err(PathDataError::UnknownCommand {
                code: 'X',
                offset: Some(0),
            })
        );
        assert_eq!(
            parse("M 0 0 S 1 2 3 4"),
            Err(PathDataError::UnknownCommand {
                code: 'S',
                offset: Some(6),
            })
        );
    }

    #[test]
    fn wrong_parameter_count_fails() {
        assert_eq!(
            parse("L 1 2 3"),
            Err(PathDataError::MalformedCommand {
                code: 'L',
                expected: 2,
                found: 3,
            })
        );
        assert!(matches!(
            parse("M 0 0 Z 1"),
            Err(PathDataError::MalformedCommand { code: 'Z', .. })
        ));
    }

    #[test]
    fn bad_number_fails_with_offset() {
        assert_eq!(
            parse("M 1.5.6 2"),
            Err(PathDataError::NumberFormat {
                token: "1.5.6".to_string(),
                offset: 2,
            })
        );
    }

    #[test]
    fn overflowing_number_fails() {
        assert_eq!(
            parse("M 1e400 0"),
            Err(PathDataError::NumberFormat {
                token: "1e400".to_string(),
                offset: 2,
            })
        );
    }

    #[test]
    fn commas_are_rejected_unless_enabled() {
        assert!(matches!(
            parse("M10,20"),
            Err(PathDataError::NumberFormat { .. })
        ));
        let path = parse_with_config("M10,20 L30,40", &ParseConfig::lenient()).unwrap();
        assert_eq!(path.to_string(), "M 10 20 L 30 40");
    }

    #[test]
    fn command_limit_is_enforced() {
        let config = ParseConfig::strict().with_max_commands(2);
        assert!(parse_with_config("M 0 0 L 1 1", &config).is_ok());
        assert_eq!(
            parse_with_config("M 0 0 L 1 1 Z", &config),
            Err(PathDataError::TooManyCommands { limit: 2 })
        );
        // Exceeding the cap wins over an error later in the text.
        assert_eq!(
            parse_with_config("M 0 0 L 1 1 Z X", &config),
            Err(PathDataError::TooManyCommands { limit: 2 })
        );
    }

    #[test]
    fn accepts_signed_and_exponent_numbers() {
        let path = parse("m -1.5 +2 l 1e2 2.5E-1 h .5").unwrap();
        assert_eq!(path.to_string(), "m -1.5 2 l 100 0.25 h 0.5");
    }

    #[test]
    fn parses_every_command_kind() {
        let input = "M 0 0 m 1 1 L 2 2 l 3 3 H 4 h 5 V 6 v 7 \
                     C 1 2 3 4 5 6 c 1 2 3 4 5 6 Q 1 2 3 4 q 1 2 3 4 \
                     A 5 5 0 0 1 10 10 a 5 5 0 1 0 10 10 Z z";
        let path = parse(input).unwrap();
        assert_eq!(path.len(), CommandKind::ALL.len());
        for kind in CommandKind::ALL {
            assert!(path.commands().iter().any(|c| c.kind() == kind));
        }
    }

    #[test]
    fn empty_input_is_an_empty_path() {
        let path = parse("").unwrap();
        assert!(path.is_empty());
        assert_eq!(path.to_string(), "");
    }

    #[test]
    fn transform_after_parse_swaps_lines_for_moves() {
        let mut path = parse("M 0 0 L 1 1").unwrap();
        path.transform(|command| match command.kind() {
            CommandKind::LineTo => command
                .into_kind(CommandKind::MoveTo)
                .expect("move and line share arity"),
            _ => command,
        });
        assert_eq!(path.to_string(), "M 0 0 M 1 1");
    }

    fn arb_command_text() -> impl Strategy<Value = (String, String)> {
        (
            0..CommandKind::ALL.len(),
            prop::collection::vec(-10_000_i32..10_000, 7),
            prop::collection::vec("[ \t\n]{0,3}", 8),
        )
            .prop_map(|(index, values, gaps)| {
                let kind = CommandKind::ALL[index];
                let values = &values[..kind.arity()];

                let mut messy = format!("{}{}", gaps[0], kind.code());
                let mut canonical = kind.code().to_string();
                for (i, value) in values.iter().enumerate() {
                    // At least one whitespace byte must separate parameters.
                    messy.push(' ');
                    messy.push_str(&gaps[i + 1]);
                    messy.push_str(&value.to_string());
                    canonical.push(' ');
                    canonical.push_str(&value.to_string());
                }
                (messy, canonical)
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(128))]

        #[test]
        fn prop_round_trips_up_to_whitespace(
            parts in prop::collection::vec(arb_command_text(), 0..24),
            trailing in "[ \t\n]{0,3}",
        ) {
            let mut input: String = parts.iter().map(|(messy, _)| messy.as_str()).collect();
            input.push_str(&trailing);
            let expected = parts
                .iter()
                .map(|(_, canonical)| canonical.as_str())
                .collect::<Vec<_>>()
                .join(" ");

            let path = parse(&input).expect("generated input is valid");
            prop_assert_eq!(path.len(), parts.len());
            prop_assert_eq!(path.to_string(), expected);
        }

        #[test]
        fn prop_parse_is_total(input in ".{0,128}") {
            // Either a path or an error; never a panic.
            let _ = parse(&input);
            let _ = parse_with_config(&input, &ParseConfig::lenient());
        }

        #[test]
        fn prop_canonical_output_reparses_identically(
            parts in prop::collection::vec(arb_command_text(), 1..16),
        ) {
            let input: String = parts.iter().map(|(messy, _)| messy.as_str()).collect();
            let path = parse(&input).expect("generated input is valid");
            let reparsed = parse(&path.to_string()).expect("canonical output is valid");
            prop_assert_eq!(reparsed, path);
        }
    }
}
