//! ISO-8601-like date validation
//!
//! A string is valid when, after stripping one optional trailing timezone
//! designator (`Z`, `+hh:mm`, `-hh:mm`), the remainder parses strictly
//! with the given `strftime`-style format.
//!
//! Strict means fields carry no sign and no padding beyond what the format
//! spells out: the text must first match a pattern compiled from the
//! format (`%Y` is exactly four digits, `%m` one or two, whitespace only
//! where the format has whitespace). Values are then checked by `chrono`.

use std::sync::LazyLock;

use chrono::format::{parse, Parsed, ParseErrorKind, StrftimeItems};
use regex::Regex;

/// Default reference format: calendar date
pub const DEFAULT_FORMAT: &str = "%Y-%m-%d";

/// Trailing timezone designator
static TZ_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(Z|[+-](?:[0-1][0-9]|2[0-3]):[0-5][0-9])$").unwrap());

/// Validator settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Iso8601Check {
    /// Reference `strftime`-style format
    pub format: String,

    /// Accept and strip a trailing timezone designator
    pub allow_timezone: bool,
}

impl Default for Iso8601Check {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_string(),
            allow_timezone: true,
        }
    }
}

impl Iso8601Check {
    /// Validator for a custom format, timezone suffix allowed
    pub fn with_format(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            ..Self::default()
        }
    }

    /// Enable or disable the timezone suffix
    pub fn with_timezone(mut self, allow: bool) -> Self {
        self.allow_timezone = allow;
        self
    }

    /// Check `text` against this configuration
    pub fn check(&self, text: &str) -> bool {
        let body = if self.allow_timezone {
            match TZ_SUFFIX.find(text) {
                Some(tz) => &text[..tz.start()],
                None => text,
            }
        } else {
            text
        };

        match format_pattern(&self.format) {
            Some(pattern) if pattern.is_match(body) => {}
            _ => return false,
        }

        let mut parsed = Parsed::new();
        if parse(&mut parsed, body, StrftimeItems::new(&self.format)).is_err() {
            return false;
        }

        // Partial formats (time only, year-month, ...) leave the other half
        // underdetermined, which is fine; impossible values are not.
        let date_ok = match parsed.to_naive_date() {
            Ok(_) => true,
            Err(err) => err.kind() == ParseErrorKind::NotEnough,
        };
        let time_ok = match parsed.to_naive_time() {
            Ok(_) => true,
            Err(err) => err.kind() == ParseErrorKind::NotEnough,
        };
        date_ok && time_ok
    }
}

/// Anchored, case-insensitive regex accepting the field shapes of `format`
///
/// `None` when the format holds a directive with no strict field shape.
fn format_pattern(format: &str) -> Option<Regex> {
    let mut pattern = String::from("(?i)^");
    let mut chars = format.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '%' => {
                pattern.push_str("(?:");
                pattern.push_str(field_pattern(chars.next()?)?);
                pattern.push(')');
            }
            c if c.is_whitespace() => {
                while chars.next_if(|c| c.is_whitespace()).is_some() {}
                pattern.push_str(r"\s+");
            }
            c => pattern.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }
    pattern.push('$');
    Regex::new(&pattern).ok()
}

/// Field shape for one directive letter
fn field_pattern(directive: char) -> Option<&'static str> {
    let field = match directive {
        'Y' | 'G' => r"\d\d\d\d",
        'y' => r"\d\d",
        'm' | 'I' => r"1[0-2]|0[1-9]|[1-9]",
        'd' => r"3[01]|[12]\d|0[1-9]|[1-9]| [1-9]",
        'H' => r"2[0-3]|[0-1]\d|\d",
        'M' => r"[0-5]\d|\d",
        'S' => r"6[0-1]|[0-5]\d|\d",
        'f' => r"[0-9]{1,6}",
        'j' => r"36[0-6]|3[0-5]\d|[12]\d\d|0[1-9]\d|00[1-9]|[1-9]\d|0[1-9]|[1-9]",
        'U' | 'W' => r"5[0-3]|[0-4]\d|\d",
        'V' => r"5[0-3]|0[1-9]|[1-4]\d|\d",
        'w' => r"[0-6]",
        'u' => r"[1-7]",
        'a' | 'A' | 'b' | 'B' => r"[a-z]+",
        'p' => r"am|pm",
        'z' => r"[+-]\d\d:?[0-5]\d",
        '%' => "%",
        _ => return None,
    };
    Some(field)
}

/// Check whether `text` is a date/time in `format`, with optional timezone suffix
///
/// Never fails: anything unparsable is simply `false`.
///
/// ```
/// use nestlink::is_iso8601;
///
/// assert!(is_iso8601("2020-01-01Z", "%Y-%m-%d"));
/// assert!(!is_iso8601("not-a-date", "%Y-%m-%d"));
/// ```
pub fn is_iso8601(text: &str, format: &str) -> bool {
    Iso8601Check::with_format(format).check(text)
}
