//! Patch operations

use serde_json::{Value, json};

use super::{PatchError, PatchResult};
use crate::jsonpath::filter::json_eq;
use crate::pointer::{JsonPointer, parse_index};

/// One JSON Patch operation
#[derive(Debug, Clone, PartialEq)]
pub enum PatchOperation {
    Add { path: JsonPointer, value: Value },
    Remove { path: JsonPointer },
    Replace { path: JsonPointer, value: Value },
    Move { from: JsonPointer, path: JsonPointer },
    Copy { from: JsonPointer, path: JsonPointer },
    Test { path: JsonPointer, value: Value },
}

impl PatchOperation {
    /// The `op` member of this operation
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::Remove { .. } => "remove",
            Self::Replace { .. } => "replace",
            Self::Move { .. } => "move",
            Self::Copy { .. } => "copy",
            Self::Test { .. } => "test",
        }
    }

    /// The JSON form of this operation
    #[must_use]
    pub fn to_value(&self) -> Value {
        let op = self.name();
        match self {
            Self::Add { path, value } | Self::Replace { path, value } | Self::Test { path, value } => {
                json!({"op": op, "path": path.to_string(), "value": value})
            }
            Self::Remove { path } => json!({"op": op, "path": path.to_string()}),
            Self::Move { from, path } | Self::Copy { from, path } => {
                json!({"op": op, "from": from.to_string(), "path": path.to_string()})
            }
        }
    }

    /// Apply to `doc`. `index` is this operation's position, for errors.
    pub(crate) fn apply(&self, doc: &mut Value, index: usize) -> PatchResult<()> {
        let op = self.name();
        let fail = |message: &str| PatchError::operation(op, index, message);

        match self {
            Self::Add { path, value } => add(doc, path, value.clone()).map_err(|m| fail(&m)),
            Self::Remove { path } => remove(doc, path).map(drop).map_err(|m| fail(&m)),
            Self::Replace { path, value } => replace(doc, path, value.clone()).map_err(|m| fail(&m)),
            Self::Move { from, path } => {
                if path.is_relative_to(from) {
                    return Err(fail("can't move object to one of its children"));
                }
                if !from.exists(doc) {
                    return Err(fail("source object does not exist"));
                }
                let value = if from.is_root() {
                    std::mem::take(doc)
                } else {
                    remove(doc, from).map_err(|m| fail(&m))?
                };
                add(doc, path, value).map_err(|m| fail(&m))
            }
            Self::Copy { from, path } => {
                let value = from
                    .resolve(doc)
                    .map_err(|_| fail("source object does not exist"))?
                    .clone();
                add(doc, path, value).map_err(|m| fail(&m))
            }
            Self::Test { path, value } => match path.resolve(doc) {
                Ok(found) if json_eq(found, value) => Ok(()),
                _ => Err(PatchError::TestFailure { index }),
            },
        }
    }
}

/// Mutable parent of `path` and the final reference token
fn parent_of<'d, 'p>(doc: &'d mut Value, path: &'p JsonPointer) -> Result<(&'d mut Value, &'p str), String> {
    let target = path.last().ok_or_else(|| "unexpected operation".to_owned())?;
    let parent_pointer = path.parent();
    let parent = parent_pointer
        .resolve_mut(doc)
        .ok_or_else(|| format!("no such property or item '{parent_pointer}'"))?;
    Ok((parent, target))
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

fn add(doc: &mut Value, path: &JsonPointer, value: Value) -> Result<(), String> {
    if path.is_root() {
        *doc = value;
        return Ok(());
    }

    let (parent, target) = parent_of(doc, path)?;
    match parent {
        Value::Array(items) => {
            if target == "-" {
                items.push(value);
                return Ok(());
            }
            match parse_index(target) {
                Some(position) if position <= items.len() => {
                    items.insert(position, value);
                    Ok(())
                }
                _ => Err("index out of range".to_owned()),
            }
        }
        Value::Object(members) => {
            members.insert(target.to_owned(), value);
            Ok(())
        }
        other => Err(format!("unexpected operation on {}", type_name(other))),
    }
}

fn remove(doc: &mut Value, path: &JsonPointer) -> Result<Value, String> {
    if path.is_root() {
        return Err("can't remove root".to_owned());
    }

    let (parent, target) = parent_of(doc, path)?;
    match parent {
        Value::Array(items) => match parse_index(target) {
            Some(position) if position < items.len() => Ok(items.remove(position)),
            _ => Err("no item to remove".to_owned()),
        },
        Value::Object(members) => members
            .shift_remove(target)
            .ok_or_else(|| "no property to remove".to_owned()),
        other => Err(format!("unexpected operation on {}", type_name(other))),
    }
}

fn replace(doc: &mut Value, path: &JsonPointer, value: Value) -> Result<(), String> {
    let Some(slot) = path.resolve_mut(doc) else {
        let (parent, _) = parent_of(doc, path)?;
        return Err(match parent {
            Value::Array(_) => "no item to replace".to_owned(),
            Value::Object(_) => "no property to replace".to_owned(),
            other => format!("unexpected operation on {}", type_name(other)),
        });
    };
    *slot = value;
    Ok(())
}
