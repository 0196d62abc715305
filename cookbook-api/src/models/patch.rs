//! JSON-Patch-style partial updates.
//!
//! The body of a `PATCH /{entity}/{id}` request is an array of operations;
//! each controller vets it against its fixed allow-list of
//! `("replace", "/field")` pairs before applying anything.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct PatchOperation {
    pub op: String,
    pub path: String,
    #[serde(default)]
    pub value: Value,
}

impl PatchOperation {
    /// The operation value as a string; numbers are rendered to their
    /// decimal form, anything else is rejected.
    pub fn string_value(&self) -> Option<String> {
        match &self.value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// True when every operation appears in the allow-list.
pub fn all_permitted(ops: &[PatchOperation], allowed: &[(&str, &str)]) -> bool {
    ops.iter()
        .all(|op| allowed.contains(&(op.op.as_str(), op.path.as_str())))
}
