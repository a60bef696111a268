//! Total lookup into untyped JSON trees by dotted path.
//!
//! The feed has no enforced contract, so every lookup is allowed to fail
//! quietly: a missing key, an out-of-range index, a non-numeric segment
//! against an array, or an attempt to descend into a scalar all resolve to
//! `None` instead of an error.
//!
//! # Example
//!
//! ```
//! use oddsline::domain::path::{get, PathExpression};
//! use serde_json::json;
//!
//! let payload = json!({ "eventGroup": { "events": [{ "nameIdentifier": "A vs B" }] } });
//! let name = get(&payload, &PathExpression::parse("eventGroup.events.0.nameIdentifier"));
//! assert_eq!(name, Some(&json!("A vs B")));
//!
//! let missing = get(&payload, &PathExpression::parse("eventGroup.events.-1.nameIdentifier"));
//! assert_eq!(missing, None);
//! ```

use std::fmt;

use serde_json::Value;

/// A parsed dotted path such as `eventGroup.events.0.startDate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathExpression {
    segments: Vec<String>,
}

impl PathExpression {
    /// Split `path` on `.` once.
    ///
    /// The empty string parses to zero segments and resolves to the root.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        if path.is_empty() {
            return Self {
                segments: Vec::new(),
            };
        }
        Self {
            segments: path.split('.').map(str::to_owned).collect(),
        }
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for PathExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

/// Resolve `path` against `root`, returning the terminal value if every
/// segment resolves.
#[must_use]
pub fn get<'a>(root: &'a Value, path: &PathExpression) -> Option<&'a Value> {
    path.segments
        .iter()
        .try_fold(root, |cursor, segment| step(cursor, segment))
}

/// Parse-and-resolve shorthand for call sites with a literal path.
#[must_use]
pub fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    get(root, &PathExpression::parse(path))
}

/// Resolve to an array; any other value type is `None`.
#[must_use]
pub fn get_array<'a>(root: &'a Value, path: &str) -> Option<&'a Vec<Value>> {
    lookup(root, path).and_then(Value::as_array)
}

fn step<'a>(cursor: &'a Value, segment: &str) -> Option<&'a Value> {
    match cursor {
        // `usize` parsing rejects "-1"; there is no indexing from the end.
        Value::Array(items) => segment
            .parse::<usize>()
            .ok()
            .and_then(|index| items.get(index)),
        Value::Object(map) => map.get(segment),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "a": {
                "list": [10, {"b": "deep"}, []],
                "flag": false,
                "nothing": null,
                "zero": 0
            }
        })
    }

    #[test]
    fn resolves_exact_terminal_value() {
        let v = sample();
        assert_eq!(lookup(&v, "a.list.0"), Some(&json!(10)));
        assert_eq!(lookup(&v, "a.list.1.b"), Some(&json!("deep")));
        assert_eq!(lookup(&v, "a.list.2"), Some(&json!([])));
    }

    #[test]
    fn present_null_and_zero_are_not_absent() {
        let v = sample();
        assert_eq!(lookup(&v, "a.nothing"), Some(&Value::Null));
        assert_eq!(lookup(&v, "a.zero"), Some(&json!(0)));
        assert_eq!(lookup(&v, "a.flag"), Some(&json!(false)));
    }

    #[test]
    fn missing_key_is_absent() {
        let v = sample();
        assert_eq!(lookup(&v, "a.missing"), None);
        assert_eq!(lookup(&v, "missing.a.b.c"), None);
    }

    #[test]
    fn negative_and_non_numeric_index_is_absent() {
        let v = sample();
        assert_eq!(lookup(&v, "a.list.-1"), None);
        assert_eq!(lookup(&v, "a.list.first"), None);
        assert_eq!(lookup(&v, "a.list.1.5"), None);
    }

    #[test]
    fn out_of_bounds_and_empty_sequence_is_absent() {
        let v = sample();
        assert_eq!(lookup(&v, "a.list.3"), None);
        assert_eq!(lookup(&v, "a.list.2.0"), None);
    }

    #[test]
    fn cannot_descend_into_scalar_or_null() {
        let v = sample();
        assert_eq!(lookup(&v, "a.list.0.b"), None);
        assert_eq!(lookup(&v, "a.nothing.x"), None);
        assert_eq!(lookup(&v, "a.flag.0"), None);
    }

    #[test]
    fn empty_path_is_root() {
        let v = sample();
        let path = PathExpression::parse("");
        assert!(path.is_root());
        assert_eq!(get(&v, &path), Some(&v));
    }

    #[test]
    fn empty_middle_segment_is_a_key() {
        let v = json!({"a": {"": {"b": 1}}});
        assert_eq!(lookup(&v, "a..b"), Some(&json!(1)));
        assert_eq!(lookup(&sample(), "a..b"), None);
    }

    #[test]
    fn array_reader_rejects_other_types() {
        let v = sample();
        assert!(get_array(&v, "a.list").is_some());
        assert!(get_array(&v, "a.flag").is_none());
    }

    #[test]
    fn display_round_trips_segments() {
        let path = PathExpression::parse("eventGroup.events.0.startDate");
        assert_eq!(path.segments().len(), 4);
        assert_eq!(path.to_string(), "eventGroup.events.0.startDate");
    }
}
