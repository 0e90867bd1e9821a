//! JSON Patch (RFC 6902) documents applied to `serde_json::Value`.
//!
//! A patch is applied to a JSON projection of an entity, then the projection
//! is deserialized and validated again before anything is persisted.
//! Application is all-or-nothing: if any operation fails, the target is left
//! untouched.

use serde::Deserialize;
use serde_json::Value;

/// A single patch operation, tagged by its `op` member.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOperation {
    Add { path: String, value: Value },
    Remove { path: String },
    Replace { path: String, value: Value },
    Move { from: String, path: String },
    Copy { from: String, path: String },
    Test { path: String, value: Value },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatchError {
    #[error("malformed patch document: {0}")]
    Malformed(String),

    #[error("invalid JSON pointer '{0}'")]
    InvalidPointer(String),

    #[error("path '{0}' does not exist")]
    PathNotFound(String),

    #[error("array index in '{0}' is out of bounds")]
    IndexOutOfBounds(String),

    #[error("test failed at '{0}'")]
    TestFailed(String),

    #[error("cannot move '{from}' into its own child '{path}'")]
    MoveIntoChild { from: String, path: String },

    #[error("cannot remove the document root")]
    RootRemoval,
}

/// An ordered list of patch operations.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PatchDocument(pub Vec<PatchOperation>);

impl PatchDocument {
    /// Parse a request body into a patch document.
    ///
    /// The body must be a JSON array of operation objects.
    pub fn from_value(value: Value) -> Result<Self, PatchError> {
        if !value.is_array() {
            return Err(PatchError::Malformed(
                "expected an array of operations".to_string(),
            ));
        }
        serde_json::from_value(value)
            .map(PatchDocument)
            .map_err(|e| PatchError::Malformed(e.to_string()))
    }

    /// Apply every operation in order. On failure `target` is unchanged.
    pub fn apply_to(&self, target: &mut Value) -> Result<(), PatchError> {
        let mut working = target.clone();
        for op in &self.0 {
            apply_operation(&mut working, op)?;
        }
        *target = working;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn apply_operation(doc: &mut Value, op: &PatchOperation) -> Result<(), PatchError> {
    match op {
        PatchOperation::Add { path, value } => add(doc, path, value.clone()),
        PatchOperation::Remove { path } => remove(doc, path).map(|_| ()),
        PatchOperation::Replace { path, value } => {
            check_pointer(path)?;
            let target = doc
                .pointer_mut(path)
                .ok_or_else(|| PatchError::PathNotFound(path.clone()))?;
            *target = value.clone();
            Ok(())
        }
        PatchOperation::Move { from, path } => {
            check_pointer(from)?;
            check_pointer(path)?;
            if from == path {
                return Ok(());
            }
            if path.starts_with(&format!("{from}/")) {
                return Err(PatchError::MoveIntoChild {
                    from: from.clone(),
                    path: path.clone(),
                });
            }
            let value = remove(doc, from)?;
            add(doc, path, value)
        }
        PatchOperation::Copy { from, path } => {
            check_pointer(from)?;
            let value = doc
                .pointer(from)
                .cloned()
                .ok_or_else(|| PatchError::PathNotFound(from.clone()))?;
            add(doc, path, value)
        }
        PatchOperation::Test { path, value } => {
            check_pointer(path)?;
            match doc.pointer(path) {
                Some(current) if current == value => Ok(()),
                _ => Err(PatchError::TestFailed(path.clone())),
            }
        }
    }
}

fn add(doc: &mut Value, path: &str, value: Value) -> Result<(), PatchError> {
    let Some((parent_path, token)) = split_pointer(path)? else {
        *doc = value;
        return Ok(());
    };

    let parent = doc
        .pointer_mut(parent_path)
        .ok_or_else(|| PatchError::PathNotFound(path.to_string()))?;

    match parent {
        Value::Object(map) => {
            map.insert(token, value);
            Ok(())
        }
        Value::Array(items) => {
            let index = if token == "-" {
                items.len()
            } else {
                parse_index(&token, path)?
            };
            if index > items.len() {
                return Err(PatchError::IndexOutOfBounds(path.to_string()));
            }
            items.insert(index, value);
            Ok(())
        }
        _ => Err(PatchError::PathNotFound(path.to_string())),
    }
}

fn remove(doc: &mut Value, path: &str) -> Result<Value, PatchError> {
    let Some((parent_path, token)) = split_pointer(path)? else {
        return Err(PatchError::RootRemoval);
    };

    let parent = doc
        .pointer_mut(parent_path)
        .ok_or_else(|| PatchError::PathNotFound(path.to_string()))?;

    match parent {
        Value::Object(map) => map
            .remove(&token)
            .ok_or_else(|| PatchError::PathNotFound(path.to_string())),
        Value::Array(items) => {
            let index = parse_index(&token, path)?;
            if index >= items.len() {
                return Err(PatchError::IndexOutOfBounds(path.to_string()));
            }
            Ok(items.remove(index))
        }
        _ => Err(PatchError::PathNotFound(path.to_string())),
    }
}

/// A pointer is either empty (the whole document) or starts with `/`.
fn check_pointer(path: &str) -> Result<(), PatchError> {
    if path.is_empty() || path.starts_with('/') {
        Ok(())
    } else {
        Err(PatchError::InvalidPointer(path.to_string()))
    }
}

/// Split a pointer into its parent pointer and unescaped last token.
///
/// Returns `None` for the root pointer.
fn split_pointer(path: &str) -> Result<Option<(&str, String)>, PatchError> {
    check_pointer(path)?;
    match path.rfind('/') {
        Some(pos) => Ok(Some((&path[..pos], unescape(&path[pos + 1..])))),
        None => Ok(None),
    }
}

fn unescape(token: &str) -> String {
    token.replace("~1", "/").replace("~0", "~")
}

/// Array indices are decimal digits without leading zeros.
fn parse_index(token: &str, path: &str) -> Result<usize, PatchError> {
    let well_formed = !token.is_empty()
        && token.bytes().all(|b| b.is_ascii_digit())
        && (token == "0" || !token.starts_with('0'));
    if !well_formed {
        return Err(PatchError::InvalidPointer(path.to_string()));
    }
    token
        .parse()
        .map_err(|_| PatchError::IndexOutOfBounds(path.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
