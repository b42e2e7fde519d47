//! Environment configuration helpers.
//!
//! Config structs are built from a plain map snapshot of the environment so
//! they can be unit tested without mutating process state.

use std::collections::HashMap;
use std::env;
use std::fmt::Debug;
use std::str::FromStr;

/// Snapshot the process environment.
pub fn env_map() -> HashMap<String, String> {
    env::vars().collect()
}

/// Read a key with a default fallback. Empty values count as unset.
pub fn get(vars: &HashMap<String, String>, key: &str, default: &str) -> String {
    vars.get(key)
        .cloned()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Read an optional key. Empty values count as unset.
pub fn optional(vars: &HashMap<String, String>, key: &str) -> Option<String> {
    vars.get(key).cloned().filter(|v| !v.is_empty())
}

/// Parse a key into the target type, with a default when unset.
/// Malformed values panic with the offending key so startup fails loudly.
pub fn parse<T>(vars: &HashMap<String, String>, key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Debug,
{
    match optional(vars, key) {
        Some(raw) => raw
            .parse()
            .unwrap_or_else(|e| panic!("invalid {key} value {raw:?}: {e:?}")),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{get, optional, parse};

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn get_falls_back_to_default() {
        assert_eq!(get(&HashMap::new(), "MISSING", "fallback"), "fallback");
    }

    #[test]
    fn get_treats_empty_as_unset() {
        let vars = vars(&[("KEY", "")]);
        assert_eq!(get(&vars, "KEY", "fallback"), "fallback");
    }

    #[test]
    fn get_prefers_set_value() {
        let vars = vars(&[("KEY", "value")]);
        assert_eq!(get(&vars, "KEY", "fallback"), "value");
    }

    #[test]
    fn optional_distinguishes_set_and_unset() {
        let vars = vars(&[("SET", "x"), ("EMPTY", "")]);
        assert_eq!(optional(&vars, "SET").as_deref(), Some("x"));
        assert_eq!(optional(&vars, "EMPTY"), None);
        assert_eq!(optional(&vars, "MISSING"), None);
    }

    #[test]
    fn parse_uses_default_when_unset() {
        assert_eq!(parse::<u16>(&HashMap::new(), "PORT", 3000), 3000);
    }

    #[test]
    fn parse_reads_typed_value() {
        let vars = vars(&[("PORT", "8123")]);
        assert_eq!(parse::<u16>(&vars, "PORT", 3000), 8123);
    }

    #[test]
    #[should_panic(expected = "invalid PORT")]
    fn parse_panics_on_malformed_value() {
        let vars = vars(&[("PORT", "not-a-port")]);
        parse::<u16>(&vars, "PORT", 3000);
    }
}
