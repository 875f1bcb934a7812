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

//! Allowed outbound destinations restrict the egress traffic of a project.
//!
//! The service discriminates the kinds of destination with the `type` field.
//! Only CIDR blocks exist today, the enums are `#[non_exhaustive]` so new
//! kinds can be added without breaking applications.

use super::{CidrBlockData, CidrBlockDataPatch};

/// An allowed outbound destination.
///
/// # Example
/// ```
/// # use ibm_cloud_codeengine_v2::model::AllowedOutboundDestination;
/// let json = serde_json::json!({
///     "type": "cidr_block",
///     "name": "my-range",
///     "cidr_block": "10.0.0.0/24",
///     "entity_tag": "2385407409",
/// });
/// let destination = serde_json::from_value::<AllowedOutboundDestination>(json)?;
/// assert_eq!(destination.name(), "my-range");
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[non_exhaustive]
pub enum AllowedOutboundDestination {
    /// A range of IPv4 addresses.
    CidrBlock(CidrBlockData),
}

impl AllowedOutboundDestination {
    /// The name of the destination.
    pub fn name(&self) -> &str {
        match self {
            Self::CidrBlock(data) => data.name.as_str(),
        }
    }

    /// The version of the destination, used to achieve optimistic locking.
    pub fn entity_tag(&self) -> Option<&str> {
        match self {
            Self::CidrBlock(data) => data.entity_tag.as_deref(),
        }
    }

    /// The value of the `type` discriminator.
    pub fn type_value(&self) -> &'static str {
        match self {
            Self::CidrBlock(_) => "cidr_block",
        }
    }
}

impl std::default::Default for AllowedOutboundDestination {
    fn default() -> Self {
        Self::CidrBlock(CidrBlockData::default())
    }
}

impl std::convert::From<CidrBlockData> for AllowedOutboundDestination {
    fn from(value: CidrBlockData) -> Self {
        Self::CidrBlock(value)
    }
}

/// The request body to create an allowed outbound destination.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[non_exhaustive]
pub enum AllowedOutboundDestinationPrototype {
    /// A range of IPv4 addresses. Both `cidr_block` and `name` are required.
    CidrBlock(CidrBlockData),
}

impl std::default::Default for AllowedOutboundDestinationPrototype {
    fn default() -> Self {
        Self::CidrBlock(CidrBlockData::default())
    }
}

impl std::convert::From<CidrBlockData> for AllowedOutboundDestinationPrototype {
    fn from(value: CidrBlockData) -> Self {
        Self::CidrBlock(value)
    }
}

/// The changes to apply to an allowed outbound destination.
///
/// The `type` of a destination cannot change, the patch must use the same
/// variant as the existing destination.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[non_exhaustive]
pub enum AllowedOutboundDestinationPatch {
    CidrBlock(CidrBlockDataPatch),
}

impl std::default::Default for AllowedOutboundDestinationPatch {
    fn default() -> Self {
        Self::CidrBlock(CidrBlockDataPatch::default())
    }
}

impl std::convert::From<CidrBlockDataPatch> for AllowedOutboundDestinationPatch {
    fn from(value: CidrBlockDataPatch) -> Self {
        Self::CidrBlock(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::patch::AsPatch;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn deserialize() -> anyhow::Result<()> {
        let json = json!({
            "type": "cidr_block",
            "name": "my-range",
            "cidr_block": "10.0.0.0/24",
            "entity_tag": "2385407409",
        });
        let got = serde_json::from_value::<AllowedOutboundDestination>(json)?;
        let want = AllowedOutboundDestination::CidrBlock(
            CidrBlockData::new()
                .set_name("my-range")
                .set_cidr_block("10.0.0.0/24")
                .set_entity_tag("2385407409"),
        );
        assert_eq!(got, want);
        assert_eq!(got.name(), "my-range");
        assert_eq!(got.entity_tag(), Some("2385407409"));
        assert_eq!(got.type_value(), "cidr_block");
        Ok(())
    }

    #[test]
    fn unknown_type() {
        let json = json!({
            "type": "hostname",
            "name": "my-host",
        });
        let err = serde_json::from_value::<AllowedOutboundDestination>(json).unwrap_err();
        assert!(err.to_string().contains("hostname"), "{err}");
    }

    #[test]
    fn missing_type() {
        let json = json!({"name": "my-range", "cidr_block": "10.0.0.0/24"});
        let err = serde_json::from_value::<AllowedOutboundDestination>(json).unwrap_err();
        assert!(err.to_string().contains("type"), "{err}");
    }

    #[test]
    fn serialize_prototype() -> anyhow::Result<()> {
        let proto = AllowedOutboundDestinationPrototype::from(
            CidrBlockData::new()
                .set_name("my-range")
                .set_cidr_block("10.0.0.0/24"),
        );
        let got = serde_json::to_value(&proto)?;
        assert_eq!(
            got,
            json!({"type": "cidr_block", "name": "my-range", "cidr_block": "10.0.0.0/24"})
        );
        Ok(())
    }

    #[test]
    fn patch_is_sparse() -> anyhow::Result<()> {
        let patch = AllowedOutboundDestinationPatch::from(
            CidrBlockDataPatch::new().set_cidr_block("10.0.1.0/24"),
        );
        let got = patch.as_patch()?;
        assert_eq!(
            serde_json::Value::Object(got),
            json!({"type": "cidr_block", "cidr_block": "10.0.1.0/24"})
        );

        let empty = AllowedOutboundDestinationPatch::default().as_patch()?;
        assert_eq!(serde_json::Value::Object(empty), json!({"type": "cidr_block"}));
        Ok(())
    }
}
