// Argument validation for tool calls
//
// Each tool walks its raw JSON arguments through an `Arguments` reader. Every
// accessor records a violation instead of returning early, so one call to
// `finish` reports all problems at once.

use crate::error::{ToolError, ToolResult};
use serde_json::{Map, Value};
use std::fmt;

/// One broken field: dotted path plus message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub message: String,
}

impl Violation {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

const ROOT_PATH: &str = "(root)";

/// Reader over a tool's arguments object that collects violations.
#[derive(Debug)]
pub struct Arguments<'a> {
    fields: Option<&'a Map<String, Value>>,
    violations: Vec<Violation>,
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl<'a> Arguments<'a> {
    /// Missing (`null`) arguments read as an empty object.
    pub fn new(arguments: &'a Value) -> Self {
        match arguments {
            Value::Object(fields) => Self {
                fields: Some(fields),
                violations: Vec::new(),
            },
            Value::Null => Self {
                fields: None,
                violations: Vec::new(),
            },
            other => Self {
                fields: None,
                violations: vec![Violation::new(
                    ROOT_PATH,
                    format!("Expected object, received {}", type_name(other)),
                )],
            },
        }
    }

    /// Field value, treating an explicit `null` as absent.
    fn field(&self, name: &str) -> Option<&'a Value> {
        self.fields
            .and_then(|fields| fields.get(name))
            .filter(|v| !v.is_null())
    }

    fn violate(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.violations.push(Violation::new(path, message));
    }

    fn expect_string(&mut self, path: &str, value: &Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            other => {
                self.violate(
                    path,
                    format!("Expected string, received {}", type_name(other)),
                );
                None
            }
        }
    }

    pub fn required_string(&mut self, name: &str) -> Option<String> {
        match self.field(name) {
            Some(value) => self.expect_string(name, value),
            None => {
                self.violate(name, "Required");
                None
            }
        }
    }

    /// Required string with at least one character.
    pub fn required_non_empty_string(&mut self, name: &str) -> Option<String> {
        let value = self.required_string(name)?;
        if value.is_empty() {
            self.violate(name, "String must contain at least 1 character(s)");
            return None;
        }
        Some(value)
    }

    pub fn optional_string(&mut self, name: &str) -> Option<String> {
        let value = self.field(name)?;
        self.expect_string(name, value)
    }

    /// Required absolute URL, returned in the caller's original spelling.
    pub fn required_url(&mut self, name: &str) -> Option<String> {
        let value = self.required_string(name)?;
        match url::Url::parse(&value) {
            Ok(_) => Some(value),
            Err(_) => {
                self.violate(name, "Invalid url");
                None
            }
        }
    }

    /// Optional list of strings; each bad element is reported by index.
    pub fn optional_string_list(&mut self, name: &str) -> Option<Vec<String>> {
        let value = self.field(name)?;
        let Value::Array(items) = value else {
            self.violate(
                name,
                format!("Expected array, received {}", type_name(value)),
            );
            return None;
        };

        let before = self.violations.len();
        let strings: Vec<String> = items
            .iter()
            .enumerate()
            .filter_map(|(i, item)| self.expect_string(&format!("{}.{}", name, i), item))
            .collect();

        (self.violations.len() == before).then_some(strings)
    }

    /// Optional integer within `[min, max]` when bounds are given.
    pub fn optional_integer(
        &mut self,
        name: &str,
        min: Option<i64>,
        max: Option<i64>,
    ) -> Option<i64> {
        let value = self.field(name)?;
        let Value::Number(number) = value else {
            self.violate(
                name,
                format!("Expected number, received {}", type_name(value)),
            );
            return None;
        };

        let integer = match number.as_i64() {
            Some(i) => i,
            None => match number.as_f64() {
                Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => f as i64,
                _ => {
                    self.violate(name, "Expected integer, received float");
                    return None;
                }
            },
        };

        if let Some(min) = min.filter(|min| integer < *min) {
            self.violate(
                name,
                format!("Number must be greater than or equal to {}", min),
            );
            return None;
        }
        if let Some(max) = max.filter(|max| integer > *max) {
            self.violate(name, format!("Number must be less than or equal to {}", max));
            return None;
        }

        Some(integer)
    }

    pub fn optional_bool(&mut self, name: &str) -> Option<bool> {
        match self.field(name)? {
            Value::Bool(b) => Some(*b),
            other => {
                self.violate(
                    name,
                    format!("Expected boolean, received {}", type_name(other)),
                );
                None
            }
        }
    }

    /// Optional string restricted to `allowed`.
    pub fn optional_enum(&mut self, name: &str, allowed: &[&str]) -> Option<String> {
        let value = self.optional_string(name)?;
        if allowed.contains(&value.as_str()) {
            return Some(value);
        }

        let expected = allowed
            .iter()
            .map(|a| format!("'{}'", a))
            .collect::<Vec<_>>()
            .join(" | ");
        self.violate(
            name,
            format!(
                "Invalid enum value. Expected {}, received '{}'",
                expected, value
            ),
        );
        None
    }

    /// Fail with every collected violation, if any.
    pub fn finish(self) -> ToolResult<()> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ToolError::Validation(self.violations))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn violations(result: ToolResult<()>) -> Vec<Violation> {
        match result {
            Err(ToolError::Validation(v)) => v,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_null_arguments_read_as_empty() {
        let value = Value::Null;
        let mut args = Arguments::new(&value);

        assert_eq!(args.optional_string("title"), None);
        assert!(args.finish().is_ok());
    }

    #[test]
    fn test_non_object_arguments() {
        let value = json!([1, 2]);
        let args = Arguments::new(&value);

        assert_eq!(
            violations(args.finish()),
            vec![Violation::new("(root)", "Expected object, received array")]
        );
    }

    #[test]
    fn test_required_missing() {
        let value = json!({});
        let mut args = Arguments::new(&value);

        assert_eq!(args.required_string("query"), None);
        assert_eq!(
            violations(args.finish()),
            vec![Violation::new("query", "Required")]
        );
    }

    #[test]
    fn test_required_non_empty() {
        let value = json!({"query": ""});
        let mut args = Arguments::new(&value);

        assert_eq!(args.required_non_empty_string("query"), None);
        assert_eq!(violations(args.finish())[0].path, "query");
    }

    #[test]
    fn test_url_must_be_absolute() {
        let value = json!({"a": "https://example.com/x", "b": "/relative/path"});
        let mut args = Arguments::new(&value);

        assert_eq!(
            args.required_url("a").as_deref(),
            Some("https://example.com/x")
        );
        assert_eq!(args.required_url("b"), None);
        assert_eq!(
            violations(args.finish()),
            vec![Violation::new("b", "Invalid url")]
        );
    }

    #[test]
    fn test_string_list_reports_each_bad_element() {
        let value = json!({"tags": ["ok", 3, false]});
        let mut args = Arguments::new(&value);

        assert_eq!(args.optional_string_list("tags"), None);
        assert_eq!(
            violations(args.finish()),
            vec![
                Violation::new("tags.1", "Expected string, received number"),
                Violation::new("tags.2", "Expected string, received boolean"),
            ]
        );
    }

    #[test]
    fn test_integer_bounds() {
        let value = json!({"page": -1, "perpage": 51, "ok": 50, "whole": 3.0, "frac": 1.5});
        let mut args = Arguments::new(&value);

        assert_eq!(args.optional_integer("page", Some(0), None), None);
        assert_eq!(args.optional_integer("perpage", Some(1), Some(50)), None);
        assert_eq!(args.optional_integer("ok", Some(1), Some(50)), Some(50));
        assert_eq!(args.optional_integer("whole", None, None), Some(3));
        assert_eq!(args.optional_integer("frac", None, None), None);

        assert_eq!(
            violations(args.finish()),
            vec![
                Violation::new("page", "Number must be greater than or equal to 0"),
                Violation::new("perpage", "Number must be less than or equal to 50"),
                Violation::new("frac", "Expected integer, received float"),
            ]
        );
    }

    #[test]
    fn test_enum_and_bool() {
        let value = json!({"sort": "newest", "word": "yes"});
        let mut args = Arguments::new(&value);

        assert_eq!(args.optional_enum("sort", &["title", "-title"]), None);
        assert_eq!(args.optional_bool("word"), None);

        let found = violations(args.finish());
        assert_eq!(found.len(), 2);
        assert_eq!(
            found[0].message,
            "Invalid enum value. Expected 'title' | '-title', received 'newest'"
        );
        assert_eq!(found[1].message, "Expected boolean, received string");
    }

    #[test]
    fn test_explicit_null_is_absent() {
        let value = json!({"title": null});
        let mut args = Arguments::new(&value);

        assert_eq!(args.optional_string("title"), None);
        assert!(args.finish().is_ok());
    }
}
