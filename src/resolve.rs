//! Dot-path resolution over nested JSON values.
//!
//! The Nobel Prize API nests most interesting fields several levels deep
//! (`birth.place.country.en`, `knownName.en`, ...). This module provides the
//! safe-navigation walk the row builders use: a miss at any depth yields
//! `None` instead of an error.

use serde_json::Value;

/// Resolve a dot-delimited path against a nested JSON value.
///
/// Splits `path` on `.` and descends one object level per segment. Resolution
/// short-circuits to `None` as soon as the current value is not an object
/// (including `null`) or the segment key is absent. A fully resolved path
/// returns a borrow of the terminal value, exactly as stored.
///
/// ```
/// use nobeltab::resolve;
/// use serde_json::json;
///
/// let record = json!({"birth": {"place": {"country": {"en": "Poland"}}}});
/// assert_eq!(resolve(&record, "birth.place.country.en"), Some(&json!("Poland")));
/// assert_eq!(resolve(&record, "birth.place.city.en"), None);
/// ```
pub fn resolve<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = record;
    for segment in path.split('.') {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Like [`resolve`], but substitutes `default` for any miss.
pub fn resolve_or<'a>(record: &'a Value, path: &str, default: &'a Value) -> &'a Value {
    resolve(record, path).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_resolution_returns_terminal_value() {
        let record = json!({
            "knownName": {"en": "Marie Curie"},
            "birth": {"date": "1867-11-07", "place": {"city": {"en": "Warsaw"}}}
        });

        assert_eq!(resolve(&record, "knownName.en"), Some(&json!("Marie Curie")));
        assert_eq!(resolve(&record, "birth.date"), Some(&json!("1867-11-07")));
        assert_eq!(resolve(&record, "birth.place.city.en"), Some(&json!("Warsaw")));
    }

    #[test]
    fn test_single_segment_path() {
        let record = json!({"id": "1", "gender": "female"});
        assert_eq!(resolve(&record, "gender"), Some(&json!("female")));
        assert_eq!(resolve(&record, "portion"), None);
    }

    #[test]
    fn test_missing_intermediate_key() {
        let record = json!({"birth": {"date": "1867-11-07"}});
        assert_eq!(resolve(&record, "birth.place.city.en"), None);
        assert_eq!(resolve(&record, "death.date"), None);
    }

    #[test]
    fn test_null_mid_traversal() {
        // A key mapped to null, then descended into, is a miss rather than
        // a panic or a partial result.
        let record = json!({"birth": null});
        assert_eq!(resolve(&record, "birth.date"), None);
    }

    #[test]
    fn test_scalar_mid_traversal() {
        let record = json!({"birth": "1867-11-07"});
        assert_eq!(resolve(&record, "birth.date"), None);
    }

    #[test]
    fn test_no_coercion_of_terminal_value() {
        let record = json!({"prize": {"amount": 1000000, "shared": false, "note": ""}});
        assert_eq!(resolve(&record, "prize.amount"), Some(&json!(1000000)));
        assert_eq!(resolve(&record, "prize.shared"), Some(&json!(false)));
        assert_eq!(resolve(&record, "prize.note"), Some(&json!("")));
    }

    #[test]
    fn test_resolve_or_default() {
        let record = json!({"a": {"b": 1}});
        let default = json!("n/a");
        assert_eq!(resolve_or(&record, "a.c", &default), &default);
        assert_eq!(resolve_or(&record, "a.b", &default), &json!(1));
    }
}
