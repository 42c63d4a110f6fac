// SPDX-FileCopyrightText: 2026 RecipePress Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Opaque handles to the code a registration points at.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// Plain callable stored in a [`HookTarget::Callback`].
pub type HookCallback = Arc<dyn Fn(&[Value]) -> Option<Value> + Send + Sync>;

/// A named object whose methods the host can call by name.
///
/// Actions ignore the returned value; filters use it as the new filtered
/// value, and `None` leaves the value untouched.
pub trait Component: Send + Sync {
    /// Name used in logs and registration listings (e.g. "admin", "nutrition").
    fn name(&self) -> &str;

    /// Invoke `method` with the arguments the host passes for the event.
    fn call(&self, method: &str, args: &[Value]) -> Option<Value>;
}

/// What a registration invokes when its event fires.
#[derive(Clone)]
pub enum HookTarget {
    /// A method on a shared component.
    Method {
        component: Arc<dyn Component>,
        method: String,
    },
    /// A free-standing closure.
    Callback { label: String, callback: HookCallback },
}

impl HookTarget {
    /// Point at `method` on `component`.
    pub fn method(component: Arc<dyn Component>, method: impl Into<String>) -> Self {
        HookTarget::Method {
            component,
            method: method.into(),
        }
    }

    /// Wrap a closure; `label` only identifies it in logs.
    pub fn callback<F>(label: impl Into<String>, callback: F) -> Self
    where
        F: Fn(&[Value]) -> Option<Value> + Send + Sync + 'static,
    {
        HookTarget::Callback {
            label: label.into(),
            callback: Arc::new(callback),
        }
    }

    /// Run the target with the given arguments.
    pub fn invoke(&self, args: &[Value]) -> Option<Value> {
        match self {
            HookTarget::Method { component, method } => component.call(method, args),
            HookTarget::Callback { callback, .. } => callback(args),
        }
    }
}

impl fmt::Display for HookTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HookTarget::Method { component, method } => {
                write!(f, "{}::{method}", component.name())
            }
            HookTarget::Callback { label, .. } => write!(f, "closure:{label}"),
        }
    }
}

impl fmt::Debug for HookTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HookTarget").field(&self.to_string()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Echo;

    impl Component for Echo {
        fn name(&self) -> &str {
            "echo"
        }

        fn call(&self, method: &str, args: &[Value]) -> Option<Value> {
            match method {
                "first" => args.first().cloned(),
                _ => None,
            }
        }
    }

    #[test]
    fn method_target_calls_component() {
        let target = HookTarget::method(Arc::new(Echo), "first");
        assert_eq!(target.invoke(&[json!("x"), json!("y")]), Some(json!("x")));
        assert_eq!(target.to_string(), "echo::first");
    }

    #[test]
    fn callback_target_calls_closure() {
        let target = HookTarget::callback("len", |args| Some(json!(args.len())));
        assert_eq!(target.invoke(&[json!(1), json!(2)]), Some(json!(2)));
        assert_eq!(target.to_string(), "closure:len");
        assert_eq!(format!("{target:?}"), "HookTarget(\"closure:len\")");
    }
}
