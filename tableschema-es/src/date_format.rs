//! Translation of strptime-style date patterns to Elasticsearch syntax

use crate::error::{Error, Result};

/// Engine default accepting ISO-8601 dates with optional time and
/// fractional seconds
pub const DEFAULT_DATE_FORMAT: &str = "strict_date_optional_time";

/// Prefix marking a descriptor `format` value as a strptime pattern
const STRPTIME_PREFIX: &str = "fmt:";

/// Supported strptime directives and their Elasticsearch letter codes
const STRPTIME_CODES: [(&str, &str); 8] = [
    ("%d", "dd"),
    ("%m", "MM"),
    ("%y", "yy"),
    ("%Y", "yyyy"),
    ("%H", "HH"),
    ("%M", "mm"),
    ("%S", "ss"),
    ("%f", "SSS"),
];

/// Convert an optional descriptor `format` value to an Elasticsearch
/// date pattern
///
/// Absent values and values without the `fmt:` prefix fall back to
/// [`DEFAULT_DATE_FORMAT`]. A `fmt:` pattern has every supported strptime
/// directive rewritten; a directive outside the supported set is a
/// hard error.
pub fn convert_date_format(format: Option<&str>) -> Result<String> {
    let Some(pattern) = format.and_then(|f| f.strip_prefix(STRPTIME_PREFIX)) else {
        return Ok(DEFAULT_DATE_FORMAT.to_string());
    };

    let mut converted = pattern.to_string();
    for (directive, code) in STRPTIME_CODES {
        converted = converted.replace(directive, code);
    }

    if let Some(pos) = converted.find('%') {
        let directive: String = converted[pos..].chars().take(2).collect();
        return Err(Error::UnsupportedDateDirective(directive));
    }

    Ok(converted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_absent_format_uses_engine_default() {
        assert_eq!(convert_date_format(None).unwrap(), DEFAULT_DATE_FORMAT);
    }

    #[test]
    fn test_unprefixed_format_uses_engine_default() {
        assert_eq!(
            convert_date_format(Some("any")).unwrap(),
            DEFAULT_DATE_FORMAT
        );
    }

    #[test_case("fmt:%Y-%m-%d", "yyyy-MM-dd")]
    #[test_case("fmt:%H:%M:%S.%f", "HH:mm:ss.SSS")]
    #[test_case("fmt:%d/%m/%y", "dd/MM/yy")]
    #[test_case("fmt:", "")]
    fn test_strptime_translation(input: &str, expected: &str) {
        assert_eq!(convert_date_format(Some(input)).unwrap(), expected);
    }

    #[test]
    fn test_unsupported_directive_is_an_error() {
        let err = convert_date_format(Some("fmt:%Q")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedDateDirective(ref d) if d == "%Q"));
    }

    #[test]
    fn test_all_directives_are_replaced_not_just_the_first() {
        assert_eq!(
            convert_date_format(Some("fmt:%d%d")).unwrap(),
            "dddd"
        );
    }
}
