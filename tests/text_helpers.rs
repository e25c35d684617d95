//! Date validation and camel-case splitting

use nestlink::{is_iso8601, split_camel_case, trace, Iso8601Check};
use test_case::test_case;

#[test_case("2020-01-01Z", "%Y-%m-%d" => true; "date with utc suffix")]
#[test_case("not-a-date", "%Y-%m-%d" => false; "garbage")]
#[test_case("2020-01-01", "%Y-%m-%d" => true; "plain date")]
#[test_case("2020-01-01-05:00", "%Y-%m-%d" => true; "negative offset")]
#[test_case("2020-02-30", "%Y-%m-%d" => false; "impossible day")]
#[test_case("2020-01", "%Y-%m" => true; "year and month")]
#[test_case("2020-01-01T12:00:00+01:00", "%Y-%m-%dT%H:%M:%S" => true; "date time with offset")]
#[test_case("12:61:00", "%H:%M:%S" => false; "minute out of range")]
#[test_case("", "%Y-%m-%d" => false; "empty")]
#[test_case(" 2020-01-01", "%Y-%m-%d" => false; "leading space")]
#[test_case("+2020-01-01", "%Y-%m-%d" => false; "signed year")]
#[test_case("2020- 01-01", "%Y-%m-%d" => false; "space before month")]
#[test_case("2020-1-1", "%Y-%m-%d" => true; "single digit month and day")]
#[test_case("20201-01-01", "%Y-%m-%d" => false; "five digit year")]
#[test_case("2020-01-01 12:30", "%Y-%m-%d %H:%M" => true; "spelled out space")]
fn test_iso8601(text: &str, format: &str) -> bool {
    is_iso8601(text, format)
}

#[test]
fn test_default_check_uses_calendar_date() {
    let check = Iso8601Check::default();
    assert!(check.check("1999-12-31"));
    assert!(check.check("1999-12-31+23:59"));
    assert!(!check.check("31/12/1999"));
}

#[test]
fn test_schema_type_names_split() {
    assert_eq!(split_camel_case("gYearMonth"), vec!["g", "Year", "Month"]);
    assert_eq!(split_camel_case("NCName"), vec!["NC", "Name"]);
    assert_eq!(split_camel_case("anySimpleType"), vec!["any", "Simple", "Type"]);
}

#[test]
fn test_traced_helper_forwards_result() {
    let traced = trace("split_camel_case", |text: &str| split_camel_case(text).len());
    assert_eq!(traced("complexTypeDefinition"), 3);
}
