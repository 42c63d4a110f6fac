// SPDX-FileCopyrightText: 2026 RecipePress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Key-path option lookup consumed by the surface composers.

use serde_json::Value;
use tracing::warn;

/// Read access to stored plugin options.
///
/// Options are grouped by namespace (e.g. `rpr_options`) and addressed by a
/// path of nested keys inside it. Implementations must be fully resolved
/// before any surface is composed.
pub trait OptionSource {
    /// Look up the raw value at `path` inside `namespace`.
    fn get_option(&self, namespace: &str, path: &[&str]) -> Option<Value>;

    /// Look up a boolean switch, falling back to `default` when it is absent.
    ///
    /// Checkbox values arrive in several shapes depending on who wrote them, so
    /// booleans, `0`/`1` and the usual truthy and falsy strings are accepted.
    /// Anything else is logged and treated as `default`.
    fn get_flag(&self, namespace: &str, path: &[&str], default: bool) -> bool {
        let Some(value) = self.get_option(namespace, path) else {
            return default;
        };
        match interpret_flag(&value) {
            Some(flag) => flag,
            None => {
                warn!(
                    namespace,
                    path = %path.join("."),
                    value = %value,
                    default,
                    "malformed option value, falling back to default"
                );
                default
            }
        }
    }
}

fn interpret_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_i64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" | "" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Walk `path` through nested JSON objects.
pub fn lookup_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(root, |node, key| node.get(*key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tracing_test::traced_test;

    struct Fixed(Value);

    impl OptionSource for Fixed {
        fn get_option(&self, namespace: &str, path: &[&str]) -> Option<Value> {
            self.0.get(namespace).and_then(|ns| lookup_path(ns, path)).cloned()
        }
    }

    fn source(value: Value) -> Fixed {
        Fixed(json!({ "rpr_options": { "metadata": { "use_nutritional_data": value } } }))
    }

    const PATH: &[&str] = &["metadata", "use_nutritional_data"];

    #[test]
    fn missing_option_returns_default() {
        let opts = Fixed(json!({}));
        assert!(!opts.get_flag("rpr_options", PATH, false));
        assert!(opts.get_flag("rpr_options", PATH, true));
    }

    #[test]
    fn accepts_common_checkbox_shapes() {
        for v in [json!(true), json!(1), json!("1"), json!("on"), json!("Yes")] {
            assert!(source(v.clone()).get_flag("rpr_options", PATH, false), "{v}");
        }
        for v in [json!(false), json!(0), json!("0"), json!("off"), json!("")] {
            assert!(!source(v.clone()).get_flag("rpr_options", PATH, true), "{v}");
        }
    }

    #[traced_test]
    #[test]
    fn malformed_value_falls_back_and_logs() {
        let opts = source(json!({ "nested": true }));
        assert!(!opts.get_flag("rpr_options", PATH, false));
        assert!(logs_contain("malformed option value"));

        assert!(source(json!(7)).get_flag("rpr_options", PATH, true));
    }

    #[test]
    fn lookup_path_walks_nested_objects() {
        let root = json!({ "a": { "b": { "c": 3 } } });
        assert_eq!(lookup_path(&root, &["a", "b", "c"]), Some(&json!(3)));
        assert_eq!(lookup_path(&root, &["a", "x"]), None);
        assert_eq!(lookup_path(&root, &[]), Some(&root));
    }
}
