use crate::error::OlympicsError;
use crate::trends::TrendColumn;

pub const MAX_SELECTOR_LENGTH: usize = 100;

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, OlympicsError> {
    if input.len() > max_len {
        return Err(OlympicsError::InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(OlympicsError::InvalidInput(
            "input is empty after sanitization".to_string(),
        ));
    }
    Ok(sanitized)
}

/// Validate a year, country or sport selector.
pub fn validate_selector(input: &str) -> Result<String, OlympicsError> {
    sanitize_text(input, MAX_SELECTOR_LENGTH)
}

pub fn validate_trend_column(input: &str) -> Result<TrendColumn, OlympicsError> {
    input.parse::<TrendColumn>().map_err(OlympicsError::InvalidInput)
}

/// The candidate most similar to `input`, compared case-insensitively, if
/// it reaches [`SUGGESTION_THRESHOLD`]. Earlier candidates win ties.
pub fn closest_match<'a, I>(input: &str, candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    let mut best: Option<(f64, &str)> = None;
    for candidate in candidates {
        let score = strsim::jaro_winkler(&needle, &candidate.to_lowercase());
        if score < SUGGESTION_THRESHOLD {
            continue;
        }
        match best {
            Some((best_score, _)) if score <= best_score => {}
            _ => best = Some((score, candidate)),
        }
    }
    best.map(|(_, candidate)| candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Selector sanitizing --

    #[test]
    fn selector_trimmed() {
        assert_eq!(validate_selector("  USA \n").unwrap(), "USA");
    }

    #[test]
    fn selector_control_chars_stripped() {
        assert_eq!(validate_selector("Gre\x07at Britain").unwrap(), "Great Britain");
    }

    #[test]
    fn selector_empty() {
        assert!(validate_selector("").is_err());
        assert!(validate_selector(" \t ").is_err());
    }

    #[test]
    fn selector_too_long() {
        let long = "x".repeat(MAX_SELECTOR_LENGTH + 1);
        assert!(validate_selector(&long).is_err());
        let max = "x".repeat(MAX_SELECTOR_LENGTH);
        assert_eq!(validate_selector(&max).unwrap().len(), MAX_SELECTOR_LENGTH);
    }

    // -- Trend column --

    #[test]
    fn trend_column_aliases() {
        assert_eq!(validate_trend_column("nations").unwrap(), TrendColumn::Region);
        assert_eq!(validate_trend_column("athletes").unwrap(), TrendColumn::Athlete);
        assert!(matches!(
            validate_trend_column("medals"),
            Err(OlympicsError::InvalidInput(_))
        ));
    }

    // -- Suggestions --

    #[test]
    fn closest_match_typo() {
        let countries = ["Germany", "Ghana", "Greece", "USA"];
        assert_eq!(closest_match("Germny", countries), Some("Germany"));
        assert_eq!(closest_match("greece", countries), Some("Greece"));
    }

    #[test]
    fn closest_match_nothing_close() {
        let sports = ["Athletics", "Swimming"];
        assert_eq!(closest_match("Quidditch", sports), None);
        assert_eq!(closest_match("   ", sports), None);
    }
}
