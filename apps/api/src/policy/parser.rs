//! Line-prefix field extraction for completion text.
//!
//! The model is asked for `Label: value` lines, but free-text output drifts:
//! reworded labels, missing colons, values folded into prose. Extraction is
//! therefore first-match, case-sensitive, and prefix-based, with a per-field
//! default when nothing usable is found. It never fails: every field in the
//! table resolves to either a parsed value or its default.

use tracing::debug;

/// One row of a policy field table: the line prefix scanned for in the
/// completion text, and the value used when no line yields a match.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub label: &'static str,
    pub default: &'static str,
}

/// Extracts one value per table row from raw completion text.
///
/// The text is trimmed of leading/trailing `-` and whitespace, then split
/// into lines. For each row, the first line whose trimmed text starts with
/// the row's label wins; the value is the segment between the first and
/// second `": "` of that line, trimmed. A row with no matching line, or
/// whose matching line carries no `": "` separator, resolves to the default.
pub fn extract_fields<const N: usize>(raw: &str, table: &[FieldSpec; N]) -> [String; N] {
    let cleaned = raw.trim_matches('-').trim();
    let lines: Vec<&str> = cleaned.split('\n').collect();

    table.map(|spec| {
        match lines
            .iter()
            .find(|line| line.trim().starts_with(spec.label))
        {
            Some(line) => match line.split(": ").nth(1) {
                Some(value) => value.trim().to_string(),
                None => {
                    debug!("'{}' line has no value separator, using default", spec.label);
                    spec.default.to_string()
                }
            },
            None => {
                debug!("no '{}' line in completion, using default", spec.label);
                spec.default.to_string()
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: [FieldSpec; 2] = [
        FieldSpec {
            label: "Return Window",
            default: "14 days",
        },
        FieldSpec {
            label: "Special Notes",
            default: "No special notes",
        },
    ];

    #[test]
    fn test_labeled_line_is_extracted() {
        let raw = "Return Window: 21 days\nSpecial Notes: keep the receipt";
        let [window, notes] = extract_fields(raw, &TABLE);
        assert_eq!(window, "21 days");
        assert_eq!(notes, "keep the receipt");
    }

    #[test]
    fn test_missing_line_falls_back_to_default() {
        let raw = "Special Notes: none at all";
        let [window, notes] = extract_fields(raw, &TABLE);
        assert_eq!(window, "14 days");
        assert_eq!(notes, "none at all");
    }

    #[test]
    fn test_first_match_wins() {
        let raw = "Return Window: 30 days\nReturn Window: 7 days";
        let [window, _] = extract_fields(raw, &TABLE);
        assert_eq!(window, "30 days");
    }

    #[test]
    fn test_indented_lines_match_on_trimmed_text() {
        let raw = "    Return Window: 10 days";
        let [window, _] = extract_fields(raw, &TABLE);
        assert_eq!(window, "10 days");
    }

    #[test]
    fn test_leading_dashes_are_stripped() {
        let raw = "---\nReturn Window: 5 days\n---";
        let [window, _] = extract_fields(raw, &TABLE);
        assert_eq!(window, "5 days");
    }

    #[test]
    fn test_value_stops_at_second_separator() {
        // split on ": " and take the middle segment
        let raw = "Return Window: 21 days: subject to inspection";
        let [window, _] = extract_fields(raw, &TABLE);
        assert_eq!(window, "21 days");
    }

    #[test]
    fn test_label_without_separator_falls_back() {
        let raw = "Return Window\nSpecial Notes: ok";
        let [window, notes] = extract_fields(raw, &TABLE);
        assert_eq!(window, "14 days");
        assert_eq!(notes, "ok");
    }

    #[test]
    fn test_label_match_is_case_sensitive() {
        let raw = "return window: 21 days";
        let [window, _] = extract_fields(raw, &TABLE);
        assert_eq!(window, "14 days");
    }

    #[test]
    fn test_empty_completion_yields_all_defaults() {
        let [window, notes] = extract_fields("", &TABLE);
        assert_eq!(window, "14 days");
        assert_eq!(notes, "No special notes");
    }
}
