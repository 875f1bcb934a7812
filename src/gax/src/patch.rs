// Copyright 2026 The IBM Cloud Rust SDK Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Update operations in IBM Cloud services use [JSON merge patch]: fields
//! present in the request body replace the values in the resource, `null`
//! removes them, and absent fields are left unchanged.
//!
//! The `*Patch` models in the client libraries skip any field set to `None`.
//! Applications that need to remove a value use [Patch::clear].
//!
//! # Example
//! ```
//! # use ibm_cloud_gax::patch::{AsPatch, Patch};
//! #[derive(Default, serde::Serialize)]
//! struct AppPatch {
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     image_reference: Option<String>,
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     scale_max_instances: Option<i64>,
//! }
//!
//! let patch = AppPatch { scale_max_instances: Some(5), ..Default::default() };
//! let map = patch.as_patch()?;
//! assert_eq!(map.len(), 1);
//! assert_eq!(map.get("scale_max_instances"), Some(&serde_json::json!(5)));
//!
//! let patch = Patch::from_model(&patch)?.clear("image_reference");
//! assert_eq!(patch.as_map().get("image_reference"), Some(&serde_json::Value::Null));
//! # Ok::<(), ibm_cloud_gax::error::Error>(())
//! ```
//!
//! [JSON merge patch]: https://datatracker.ietf.org/doc/html/rfc7386

use crate::Result;
use crate::error::Error;
use serde_json::{Map, Value};

/// The media type for JSON merge patch request bodies.
pub const MERGE_PATCH_CONTENT_TYPE: &str = "application/merge-patch+json";

/// Renders a partial update model as a sparse JSON object.
///
/// Implemented for any serializable type. Only the fields the type serializes
/// are included in the result, which for the generated `*Patch` models means
/// only the fields set to `Some(_)`.
pub trait AsPatch: serde::Serialize {
    /// Returns the sparse JSON object for this update.
    fn as_patch(&self) -> Result<Map<String, Value>> {
        match serde_json::to_value(self).map_err(Error::ser)? {
            Value::Object(map) => Ok(map),
            Value::Null => Ok(Map::new()),
            other => Err(Error::ser(NotAnObject(type_name(&other)))),
        }
    }
}

impl<T: serde::Serialize> AsPatch for T {}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[derive(thiserror::Error, Debug)]
#[error("a merge patch must be a JSON object, got a {0}")]
struct NotAnObject(&'static str);

/// A merge patch document.
///
/// Holds the sparse rendering of a `*Patch` model, plus any fields the
/// application wants to remove.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct Patch(Map<String, Value>);

impl Patch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a patch from the sparse rendering of a `*Patch` model.
    pub fn from_model<T: AsPatch>(model: &T) -> Result<Self> {
        model.as_patch().map(Self)
    }

    /// Removes `field` from the resource, by sending an explicit `null`.
    pub fn clear<T: Into<String>>(mut self, field: T) -> Self {
        self.0.insert(field.into(), Value::Null);
        self
    }

    /// Sets `field` to an arbitrary JSON value.
    pub fn set<T: Into<String>, V: Into<Value>>(mut self, field: T, value: V) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    /// Returns the fields in this patch.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Returns true if the patch has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Patch {
    fn from(value: Map<String, Value>) -> Self {
        Self(value)
    }
}

impl From<Patch> for Map<String, Value> {
    fn from(value: Patch) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[derive(Default, serde::Serialize)]
    struct Nested {
        #[serde(skip_serializing_if = "Option::is_none")]
        cpu: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        memory: Option<String>,
    }

    #[derive(Default, serde::Serialize)]
    struct TestPatch {
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        count: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        nested: Option<Nested>,
        #[serde(skip_serializing_if = "Option::is_none")]
        labels: Option<Vec<String>>,
    }

    #[test]
    fn empty() -> anyhow::Result<()> {
        let got = TestPatch::default().as_patch()?;
        assert!(got.is_empty(), "{got:?}");
        Ok(())
    }

    #[test]
    fn sparse() -> anyhow::Result<()> {
        let patch = TestPatch {
            count: Some(0),
            nested: Some(Nested {
                memory: Some("4G".into()),
                ..Default::default()
            }),
            labels: Some(vec![]),
            ..Default::default()
        };
        let got = Value::Object(patch.as_patch()?);
        let want = json!({"count": 0, "nested": {"memory": "4G"}, "labels": []});
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn clear_and_set() -> anyhow::Result<()> {
        let patch = TestPatch {
            name: Some("new-name".into()),
            ..Default::default()
        };
        let got = Patch::from_model(&patch)?
            .clear("count")
            .set("extra", json!({"a": 1}));
        let want = json!({"name": "new-name", "count": null, "extra": {"a": 1}});
        assert_eq!(serde_json::to_value(&got)?, want);
        assert!(!got.is_empty());
        Ok(())
    }

    #[test]
    fn not_an_object() {
        let got = 42.as_patch();
        assert!(matches!(&got, Err(e) if e.is_serialization()), "{got:?}");
        let got = "abc".as_patch();
        assert!(matches!(&got, Err(e) if e.is_serialization()), "{got:?}");
    }

    #[test]
    fn conversions() {
        let mut map = Map::new();
        map.insert("a".to_string(), json!(1));
        let patch = Patch::from(map.clone());
        assert_eq!(patch.as_map(), &map);
        let back: Map<String, Value> = patch.into();
        assert_eq!(back, map);
        assert!(Patch::new().is_empty());
    }
}
