use std::path::Path;

use thiserror::Error;

use crate::core::reagent::Reagent;
use crate::core::settings::PriorSettings;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid reagent line format: {0}")]
    InvalidFormat(String),
}

/// Parse a reagent SMILES file: one `<smiles> <name>` pair per line.
///
/// Every record is seeded with the prior parameters in `settings`. With
/// `num_to_select`, at most that many records are returned, always the
/// leading lines of the file in order.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::InvalidFormat` if any line does not hold exactly two
/// whitespace-separated fields.
pub fn parse_reagent_file(
    path: &Path,
    settings: &PriorSettings,
    num_to_select: Option<usize>,
) -> Result<Vec<Reagent>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_reagent_text(&content, settings, num_to_select)
}

/// Parse reagent SMILES text: one `<smiles> <name>` pair per line.
///
/// Empty input yields an empty list. Blank lines are a format error, the
/// same as any other line without exactly two fields.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if any line does not hold exactly two
/// whitespace-separated fields, even one past the `num_to_select` cap.
pub fn parse_reagent_text(
    text: &str,
    settings: &PriorSettings,
    num_to_select: Option<usize>,
) -> Result<Vec<Reagent>, ParseError> {
    let mut reagents = Vec::new();

    for (i, line) in text.lines().enumerate() {
        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;

        let fields: Vec<&str> = line.split_whitespace().collect();

        if fields.len() != 2 {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num} has {} whitespace-separated fields, expected exactly 2 (smiles, name): '{line}'",
                fields.len()
            )));
        }

        reagents.push(Reagent::new(
            fields[1],
            fields[0],
            settings.minimum_uncertainty,
            settings.known_std,
        ));
    }

    // The cap applies only after the whole file has parsed cleanly, so a
    // malformed line past the cap still fails the load.
    if let Some(n) = num_to_select {
        reagents.truncate(n);
    }

    Ok(reagents)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> PriorSettings {
        PriorSettings::new(0.1, 2.5)
    }

    #[test]
    fn test_parse_reagent_text() {
        let text = "CCO mol1\nCCN mol2\nCCC mol3\n";

        let reagents = parse_reagent_text(text, &settings(), None).unwrap();
        assert_eq!(reagents.len(), 3);
        assert_eq!(reagents[0].smiles(), "CCO");
        assert_eq!(reagents[0].name(), "mol1");
        assert_eq!(reagents[2].smiles(), "CCC");
        assert_eq!(reagents[2].name(), "mol3");
        assert_eq!(reagents[0].minimum_uncertainty(), 0.1);
        assert_eq!(reagents[0].known_std(), 2.5);
    }

    #[test]
    fn test_num_to_select_keeps_leading_lines() {
        let text = "CCO mol1\nCCN mol2\nCCC mol3\n";

        let reagents = parse_reagent_text(text, &settings(), Some(2)).unwrap();
        assert_eq!(reagents.len(), 2);
        assert_eq!(reagents[0].name(), "mol1");
        assert_eq!(reagents[1].name(), "mol2");
    }

    #[test]
    fn test_num_to_select_larger_than_file() {
        let text = "CCO mol1\nCCN mol2\n";

        let reagents = parse_reagent_text(text, &settings(), Some(10)).unwrap();
        assert_eq!(reagents.len(), 2);
    }

    #[test]
    fn test_tabs_and_space_runs_both_delimit() {
        let text = "CCO\tmol1\nCCN   mol2\n";

        let reagents = parse_reagent_text(text, &settings(), None).unwrap();
        assert_eq!(reagents.len(), 2);
        assert_eq!(reagents[0].name(), "mol1");
        assert_eq!(reagents[1].name(), "mol2");
    }

    #[test]
    fn test_single_field_line_fails() {
        let err = parse_reagent_text("CCO\n", &settings(), None).unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(_)));
        assert!(err.to_string().contains("Line 1"));
    }

    #[test]
    fn test_extra_field_line_fails() {
        let text = "CCO mol1\nCCN mol2 duplicate\n";

        let err = parse_reagent_text(text, &settings(), None).unwrap_err();
        assert!(err.to_string().contains("Line 2"));
    }

    #[test]
    fn test_blank_line_fails() {
        let text = "CCO mol1\n\nCCN mol2\n";

        let err = parse_reagent_text(text, &settings(), None).unwrap_err();
        assert!(err.to_string().contains("Line 2"));
    }

    #[test]
    fn test_malformed_line_past_cap_still_fails() {
        let text = "CCO mol1\nCCN mol2\nbroken\n";

        assert!(parse_reagent_text(text, &settings(), Some(2)).is_err());
    }

    #[test]
    fn test_empty_text_yields_empty_list() {
        let reagents = parse_reagent_text("", &settings(), None).unwrap();
        assert!(reagents.is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = parse_reagent_file(Path::new("/nonexistent/reagents.smi"), &settings(), None)
            .unwrap_err();
        assert!(matches!(err, ParseError::Io(_)));
    }
}
