//! Naming templates: rendering and matching file names

use crate::domain::timestamp::{Timestamp, TIMESTAMP_WIDTH};
use crate::error::{Result, RotateError};

/// Token replaced with the formatted timestamp
pub const PLACEHOLDER: &str = "{now}";

/// A file naming template such as `backup-{now}.tar.gz`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingTemplate {
    raw: String,
    /// Literal text around the placeholders; always one more than the placeholder count
    literals: Vec<String>,
}

impl NamingTemplate {
    /// Parse a template, requiring at least one placeholder
    pub fn parse(raw: &str) -> Result<Self> {
        let literals: Vec<String> = raw.split(PLACEHOLDER).map(str::to_string).collect();
        if literals.len() < 2 {
            return Err(RotateError::InvalidArgument(format!(
                "<spec> must contain {} somewhere",
                PLACEHOLDER
            )));
        }

        Ok(NamingTemplate {
            raw: raw.to_string(),
            literals,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Number of placeholder occurrences
    pub fn placeholder_count(&self) -> usize {
        self.literals.len() - 1
    }

    /// Replace every placeholder with the formatted timestamp
    pub fn render(&self, timestamp: &Timestamp) -> String {
        self.literals.join(&timestamp.format())
    }

    /// Match a candidate name against the template.
    ///
    /// Literal text must be identical and each placeholder must cover exactly
    /// `TIMESTAMP_WIDTH` characters. Returns the text under the first
    /// placeholder; later ones are only checked for width.
    pub fn match_name<'a>(&self, candidate: &'a str) -> Result<&'a str> {
        let mismatch = || RotateError::TemplateMismatch(candidate.to_string());

        let (head, tail) = self.literals.split_first().ok_or_else(mismatch)?;
        let mut rest = candidate.strip_prefix(head.as_str()).ok_or_else(mismatch)?;
        let mut first_span = None;

        for literal in tail {
            let (span, after) = split_at_char(rest, TIMESTAMP_WIDTH).ok_or_else(mismatch)?;
            first_span.get_or_insert(span);
            rest = after.strip_prefix(literal.as_str()).ok_or_else(mismatch)?;
        }

        if !rest.is_empty() {
            return Err(mismatch());
        }
        first_span.ok_or_else(mismatch)
    }

    /// Match a candidate and parse its authoritative timestamp
    pub fn extract(&self, candidate: &str) -> Result<Timestamp> {
        let span = self.match_name(candidate)?;
        Timestamp::parse(span).map_err(|e| match e {
            RotateError::InvalidTimestamp { reason, .. } => RotateError::InvalidTimestamp {
                input: candidate.to_string(),
                reason,
            },
            other => other,
        })
    }
}

/// Split after `n` characters, or `None` if the string is shorter
fn split_at_char(s: &str, n: usize) -> Option<(&str, &str)> {
    s.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(s.len()))
        .nth(n)
        .map(|i| s.split_at(i))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(raw: &str) -> NamingTemplate {
        NamingTemplate::parse(raw).unwrap()
    }

    #[test]
    fn test_parse_requires_placeholder() {
        let err = NamingTemplate::parse("backup.tar").unwrap_err();
        assert!(matches!(err, RotateError::InvalidArgument(_)));
        assert!(err.to_string().contains("{now}"));
        assert!(NamingTemplate::parse("").is_err());
    }

    #[test]
    fn test_placeholder_count() {
        assert_eq!(template("{now}").placeholder_count(), 1);
        assert_eq!(template("a-{now}-b-{now}").placeholder_count(), 2);
    }

    #[test]
    fn test_render_replaces_every_placeholder() {
        let t = Timestamp::parse("2024-01-02T05:00:00").unwrap();
        assert_eq!(
            template("db/{now}/dump-{now}.sql").render(&t),
            "db/2024-01-02T05:00:00/dump-2024-01-02T05:00:00.sql"
        );
    }

    #[test]
    fn test_match_extracts_span() {
        let span = template("backup-{now}.tar")
            .match_name("backup-2024-01-02T05:00:00.tar")
            .unwrap();
        assert_eq!(span, "2024-01-02T05:00:00");
    }

    #[test]
    fn test_match_does_not_inspect_span_content() {
        let span = template("backup-{now}")
            .match_name("backup-xxxxxxxxxxxxxxxxxxx")
            .unwrap();
        assert_eq!(span, "xxxxxxxxxxxxxxxxxxx");
    }

    #[test]
    fn test_match_literal_mismatch() {
        let err = template("backup-{now}")
            .match_name("snap-2024-01-01T00:00:00")
            .unwrap_err();
        assert!(matches!(err, RotateError::TemplateMismatch(_)));
    }

    #[test]
    fn test_match_length_mismatch() {
        let t = template("backup-{now}.tar");
        assert!(t.match_name("backup-2024-01-01T00:00:0.tar").is_err());
        assert!(t.match_name("backup-2024-01-01T00:00:00.tar.gz").is_err());
        assert!(t.match_name("backup-2024-01-01T00:00:00").is_err());
        assert!(t.match_name("backup-").is_err());
        assert!(t.match_name("").is_err());
    }

    #[test]
    fn test_match_first_placeholder_is_authoritative() {
        let span = template("{now}_{now}")
            .match_name("2024-01-02T05:00:00_1999-12-31T23:59:59")
            .unwrap();
        assert_eq!(span, "2024-01-02T05:00:00");
    }

    #[test]
    fn test_match_later_placeholders_checked_for_width() {
        let t = template("{now}_{now}");
        assert!(t.match_name("2024-01-02T05:00:00_1999").is_err());
    }

    #[test]
    fn test_match_counts_characters_not_bytes() {
        let span = template("é-{now}")
            .match_name("é-ééééééééééééééééééé")
            .unwrap();
        assert_eq!(span.chars().count(), TIMESTAMP_WIDTH);
    }

    #[test]
    fn test_extract_parses_timestamp() {
        let ts = template("backup-{now}")
            .extract("backup-2024-01-02T05:00:00")
            .unwrap();
        assert_eq!(ts.hour, 5);
    }

    #[test]
    fn test_extract_reports_full_candidate_on_parse_failure() {
        let err = template("backup-{now}")
            .extract("backup-2024-01-02 05:00:00")
            .unwrap_err();
        match err {
            RotateError::InvalidTimestamp { input, .. } => {
                assert_eq!(input, "backup-2024-01-02 05:00:00")
            }
            other => panic!("Expected InvalidTimestamp, got {:?}", other),
        }
    }
}
