//! Patch construction

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::ops::PatchOperation;
use super::{PatchError, PatchResult};
use crate::pointer::JsonPointer;

/// An ordered list of patch operations
///
/// # Examples
/// ```
/// use jsonp3_engine::patch::JsonPatch;
/// use serde_json::json;
///
/// let patch = JsonPatch::new()
///     .add("/tags/-", json!("new"))?
///     .replace("/name", json!("updated"))?
///     .remove("/draft")?;
///
/// let mut doc = json!({"name": "post", "tags": ["a"], "draft": true});
/// patch.apply(&mut doc)?;
/// assert_eq!(doc, json!({"name": "updated", "tags": ["a", "new"]}));
/// # Ok::<(), jsonp3_engine::patch::PatchError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonPatch {
    operations: Vec<PatchOperation>,
}

/// An operation object as it appears in a JSON Patch document
#[derive(Deserialize)]
struct RawOperation {
    op: Option<String>,
    path: Option<String>,
    from: Option<String>,
    #[serde(default, deserialize_with = "present")]
    value: Option<Value>,
}

/// Distinguish `"value": null` from a missing `value` member
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl JsonPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a patch from a JSON array of operation objects
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::NotAnArray`] if `value` is not an array, and a
    /// [`PatchError::Operation`] for an unknown `op`, a missing member or a
    /// malformed pointer.
    pub fn from_value(value: &Value) -> PatchResult<Self> {
        let Value::Array(items) = value else {
            return Err(PatchError::NotAnArray);
        };

        let mut patch = Self::new();
        for (index, item) in items.iter().enumerate() {
            let raw = RawOperation::deserialize(item)
                .map_err(|error| PatchError::operation("?", index, error.to_string()))?;
            patch.operations.push(raw.into_operation(index)?);
        }
        Ok(patch)
    }

    /// Parse a JSON Patch document
    ///
    /// # Errors
    ///
    /// See [`from_value`](Self::from_value). Invalid JSON is reported as an
    /// error at index 0.
    pub fn from_json(json: &str) -> PatchResult<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|error| PatchError::operation("?", 0, error.to_string()))?;
        Self::from_value(&value)
    }

    /// Append an `add` operation
    ///
    /// # Errors
    ///
    /// Returns a [`PatchError::Operation`] if `path` is not a valid pointer.
    pub fn add(mut self, path: &str, value: Value) -> PatchResult<Self> {
        let path = self.pointer(path, "add")?;
        self.operations.push(PatchOperation::Add { path, value });
        Ok(self)
    }

    /// Append a `remove` operation
    ///
    /// # Errors
    ///
    /// Returns a [`PatchError::Operation`] if `path` is not a valid pointer.
    pub fn remove(mut self, path: &str) -> PatchResult<Self> {
        let path = self.pointer(path, "remove")?;
        self.operations.push(PatchOperation::Remove { path });
        Ok(self)
    }

    /// Append a `replace` operation
    ///
    /// # Errors
    ///
    /// Returns a [`PatchError::Operation`] if `path` is not a valid pointer.
    pub fn replace(mut self, path: &str, value: Value) -> PatchResult<Self> {
        let path = self.pointer(path, "replace")?;
        self.operations.push(PatchOperation::Replace { path, value });
        Ok(self)
    }

    /// Append a `move` operation
    ///
    /// # Errors
    ///
    /// Returns a [`PatchError::Operation`] if either pointer is invalid.
    pub fn move_to(mut self, from: &str, path: &str) -> PatchResult<Self> {
        let from = self.pointer(from, "move")?;
        let path = self.pointer(path, "move")?;
        self.operations.push(PatchOperation::Move { from, path });
        Ok(self)
    }

    /// Append a `copy` operation
    ///
    /// # Errors
    ///
    /// Returns a [`PatchError::Operation`] if either pointer is invalid.
    pub fn copy(mut self, from: &str, path: &str) -> PatchResult<Self> {
        let from = self.pointer(from, "copy")?;
        let path = self.pointer(path, "copy")?;
        self.operations.push(PatchOperation::Copy { from, path });
        Ok(self)
    }

    /// Append a `test` operation
    ///
    /// # Errors
    ///
    /// Returns a [`PatchError::Operation`] if `path` is not a valid pointer.
    pub fn test(mut self, path: &str, value: Value) -> PatchResult<Self> {
        let path = self.pointer(path, "test")?;
        self.operations.push(PatchOperation::Test { path, value });
        Ok(self)
    }

    /// Append an already built operation
    pub fn push(&mut self, operation: PatchOperation) {
        self.operations.push(operation);
    }

    /// Apply every operation in order
    ///
    /// `doc` may be partially modified when an operation fails.
    ///
    /// # Errors
    ///
    /// Returns the first failing operation's error.
    pub fn apply(&self, doc: &mut Value) -> PatchResult<()> {
        for (index, operation) in self.operations.iter().enumerate() {
            operation.apply(doc, index)?;
        }
        tracing::trace!(operations = self.operations.len(), "applied JSON patch");
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn operations(&self) -> &[PatchOperation] {
        &self.operations
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// The JSON Patch document for this patch
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Array(self.operations.iter().map(PatchOperation::to_value).collect())
    }

    fn pointer(&self, path: &str, op: &str) -> PatchResult<JsonPointer> {
        JsonPointer::parse(path)
            .map_err(|error| PatchError::operation(op, self.operations.len(), error.to_string()))
    }
}

impl RawOperation {
    fn into_operation(self, index: usize) -> PatchResult<PatchOperation> {
        let Some(op) = self.op.as_deref() else {
            return Err(PatchError::operation("?", index, "missing property 'op'"));
        };

        let pointer = |member: Option<&String>, key: &str| -> PatchResult<JsonPointer> {
            let text = member
                .ok_or_else(|| PatchError::operation(op, index, format!("missing property '{key}'")))?;
            JsonPointer::parse(text).map_err(|error| PatchError::operation(op, index, error.to_string()))
        };
        let value = |member: Option<Value>| -> PatchResult<Value> {
            member.ok_or_else(|| PatchError::operation(op, index, "missing property 'value'"))
        };

        Ok(match op {
            "add" => PatchOperation::Add {
                path: pointer(self.path.as_ref(), "path")?,
                value: value(self.value)?,
            },
            "remove" => PatchOperation::Remove {
                path: pointer(self.path.as_ref(), "path")?,
            },
            "replace" => PatchOperation::Replace {
                path: pointer(self.path.as_ref(), "path")?,
                value: value(self.value)?,
            },
            "move" => PatchOperation::Move {
                from: pointer(self.from.as_ref(), "from")?,
                path: pointer(self.path.as_ref(), "path")?,
            },
            "copy" => PatchOperation::Copy {
                from: pointer(self.from.as_ref(), "from")?,
                path: pointer(self.path.as_ref(), "path")?,
            },
            "test" => PatchOperation::Test {
                path: pointer(self.path.as_ref(), "path")?,
                value: value(self.value)?,
            },
            other => {
                return Err(PatchError::operation(
                    other,
                    index,
                    "expected 'op' to be one of 'add', 'remove', 'replace', 'move', 'copy' or 'test'",
                ));
            }
        })
    }
}

impl FromIterator<PatchOperation> for JsonPatch {
    fn from_iter<I: IntoIterator<Item = PatchOperation>>(iter: I) -> Self {
        Self {
            operations: iter.into_iter().collect(),
        }
    }
}
