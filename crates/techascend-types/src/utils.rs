//! Input validation and sanitization helpers

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer};

/// Upper bound for free-text registration fields
pub const MAX_TEXT_LEN: usize = 200;

static EMAIL_RE: LazyLock<Option<Regex>> =
	LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Checks an address against the `local@domain.tld` shape
pub fn is_valid_email(email: &str) -> bool {
	EMAIL_RE.as_ref().is_some_and(|re| re.is_match(email))
}

/// Canonical form used for every email comparison and for storage
pub fn normalize_email(email: &str) -> String {
	email.trim().to_lowercase()
}

/// Case-insensitive email equality
pub fn email_eq(a: &str, b: &str) -> bool {
	normalize_email(a) == normalize_email(b)
}

/// Trims and truncates to at most `max_chars` characters.
pub fn sanitize(value: &str, max_chars: usize) -> String {
	value.trim().chars().take(max_chars).collect()
}

/// Sanitizes an optional value, falling back when it ends up empty.
pub fn sanitize_or(value: Option<&str>, max_chars: usize, fallback: &str) -> String {
	let res = value.map(|v| sanitize(v, max_chars)).unwrap_or_default();
	if res.is_empty() { fallback.to_string() } else { res }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient {
	Str(String),
	Int(i64),
	Float(f64),
	Bool(bool),
}

/// Deserializes free-text form fields that clients sometimes send as numbers
/// (e.g. `"year": 2`).
pub fn de_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(Option::<Lenient>::deserialize(deserializer)?.map(|v| match v {
		Lenient::Str(s) => s,
		Lenient::Int(n) => n.to_string(),
		Lenient::Float(n) => n.to_string(),
		Lenient::Bool(b) => b.to_string(),
	}))
}

/// Deserializes an id given either as a JSON number or a numeric string.
/// Anything that is not a valid integer reads as missing.
pub fn de_opt_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(Option::<Lenient>::deserialize(deserializer)?.and_then(|v| match v {
		Lenient::Str(s) => parse_id(&s),
		Lenient::Int(n) => Some(n),
		#[allow(clippy::cast_possible_truncation)]
		Lenient::Float(n) if n.fract() == 0.0 => Some(n as i64),
		Lenient::Float(_) | Lenient::Bool(_) => None,
	}))
}

/// Parses an id from a query string value (leading integer, like `parseInt`)
pub fn parse_id(value: &str) -> Option<i64> {
	let value = value.trim();
	let end = value
		.char_indices()
		.find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && c == '-')))
		.map_or(value.len(), |(i, _)| i);
	value[..end].parse().ok()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_email_validation() {
		assert!(is_valid_email("a@x.com"));
		assert!(is_valid_email("first.last+tag@college.ac.in"));
		assert!(!is_valid_email("not-an-email"));
		assert!(!is_valid_email("a@x"));
		assert!(!is_valid_email("a b@x.com"));
		assert!(!is_valid_email("@x.com"));
		assert!(!is_valid_email(""));
	}

	#[test]
	fn test_normalize_email() {
		assert_eq!(normalize_email("  Alice@Example.COM "), "alice@example.com");
		assert!(email_eq("ALICE@example.com", "alice@EXAMPLE.com"));
		assert!(!email_eq("alice@example.com", "bob@example.com"));
	}

	#[test]
	fn test_sanitize() {
		assert_eq!(sanitize("  hello  ", 200), "hello");
		assert_eq!(sanitize(&"x".repeat(300), 200).len(), 200);
		assert_eq!(sanitize("ünïcödé", 3), "ünï");
		assert_eq!(sanitize_or(None, 200, "Not specified"), "Not specified");
		assert_eq!(sanitize_or(Some("   "), 200, "Not provided"), "Not provided");
		assert_eq!(sanitize_or(Some(" CSE "), 200, "Not specified"), "CSE");
	}

	#[test]
	fn test_parse_id() {
		assert_eq!(parse_id("42"), Some(42));
		assert_eq!(parse_id(" 7 "), Some(7));
		assert_eq!(parse_id("12abc"), Some(12));
		assert_eq!(parse_id("abc"), None);
		assert_eq!(parse_id(""), None);
	}

	#[derive(Deserialize)]
	struct Form {
		#[serde(default, deserialize_with = "de_opt_text")]
		year: Option<String>,
		#[serde(default, deserialize_with = "de_opt_id")]
		event_id: Option<i64>,
	}

	#[test]
	fn test_lenient_fields() {
		let form: Form = serde_json::from_str(r#"{"year": 2, "event_id": "3"}"#).unwrap();
		assert_eq!(form.year.as_deref(), Some("2"));
		assert_eq!(form.event_id, Some(3));

		let form: Form = serde_json::from_str(r#"{"event_id": 5}"#).unwrap();
		assert_eq!(form.year, None);
		assert_eq!(form.event_id, Some(5));

		let form: Form = serde_json::from_str(r#"{"event_id": "soon"}"#).unwrap();
		assert_eq!(form.event_id, None);
	}
}

// vim: ts=4
