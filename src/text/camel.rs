//! Camel-case identifier splitting

use std::sync::LazyLock;

use regex::Regex;

/// Maximal runs of ASCII capitals or of ASCII lowercase letters
static LETTER_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z]+|[a-z]+").unwrap());

/// Split a camel-case identifier into its words
///
/// Words are an optional capital followed by lowercase letters, or a run
/// of capitals (an acronym). An acronym directly followed by a lowercase
/// word gives up its last capital to that word (`XMLSchema` → `XML`,
/// `Schema`). An acronym followed by anything other than a letter or the
/// end of input loses its last capital. Digits and punctuation separate
/// words and are never part of one.
///
/// ```
/// use nestlink::split_camel_case;
///
/// assert_eq!(split_camel_case("xsdAnyURI"), vec!["xsd", "Any", "URI"]);
/// assert_eq!(split_camel_case("XMLSchema"), vec!["XML", "Schema"]);
/// ```
pub fn split_camel_case(text: &str) -> Vec<&str> {
    let mut words = Vec::new();
    // Start of a capital waiting to prefix the next lowercase run
    let mut lead: Option<usize> = None;

    for run in LETTER_RUN.find_iter(text) {
        let first = text.as_bytes()[run.start()];
        if first.is_ascii_lowercase() {
            match lead.take() {
                Some(start) if start + 1 == run.start() => words.push(&text[start..run.end()]),
                _ => words.push(run.as_str()),
            }
            continue;
        }

        lead = None;
        let acronym = run.as_str();
        match text[run.end()..].chars().next() {
            None => words.push(acronym),
            Some(next) => {
                let keep = acronym.len() - 1;
                if keep > 0 {
                    words.push(&acronym[..keep]);
                }
                if next.is_ascii_lowercase() {
                    lead = Some(run.start() + keep);
                }
            }
        }
    }

    words
}
