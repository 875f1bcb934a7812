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

//! Checks applied to each request before it is sent.
//!
//! The service rejects these requests too, checking them locally saves a
//! round trip and returns an error naming the offending field.

use crate::Result;
use crate::model::{
    AllowedOutboundDestinationPrototype, AppPrototype, BindingPrototype, BuildPrototype,
    BuildSourceType, ConfigMapPrototype, DomainMappingPrototype, FunctionPrototype, JobPrototype,
    ProjectPrototype, SecretPrototype, VolumeMountPrototype,
};
use gax::error::Error as GaxError;
use regex::Regex;
use std::sync::LazyLock;

const PROJECT_ID_PATTERN: &str =
    "^[0-9a-z]{8}-[0-9a-z]{4}-[0-9a-z]{4}-[0-9a-z]{4}-[0-9a-z]{12}$";

/// Matches the project IDs accepted by the service.
pub(crate) static PROJECT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PROJECT_ID_PATTERN).expect("valid regex"));

const MIN_LIMIT: i64 = 1;
const MAX_LIMIT: i64 = 100;

/// The reasons a request fails validation.
///
/// Returned as the source of an [Error::binding][gax::error::Error::binding]
/// error.
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("the value {value} for `{name}` is outside the range [{min}, {max}]")]
    OutOfRange {
        name: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

fn missing(name: &'static str) -> GaxError {
    GaxError::binding(Error::MissingField(name))
}

fn non_empty(name: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(missing(name));
    }
    Ok(())
}

fn present<T>(name: &'static str, value: &Option<T>) -> Result<()> {
    value.as_ref().map(|_| ()).ok_or_else(|| missing(name))
}

pub(crate) fn limit(value: Option<i64>) -> Result<()> {
    match value {
        Some(v) if !(MIN_LIMIT..=MAX_LIMIT).contains(&v) => {
            Err(GaxError::binding(Error::OutOfRange {
                name: "limit",
                value: v,
                min: MIN_LIMIT,
                max: MAX_LIMIT,
            }))
        }
        _ => Ok(()),
    }
}

/// Returns the `If-Match` header value for an update.
pub(crate) fn if_match(value: &str) -> Result<http::HeaderValue> {
    non_empty("if_match", value)?;
    http::HeaderValue::from_str(value).map_err(GaxError::binding)
}

fn volume_mounts(mounts: &[VolumeMountPrototype]) -> Result<()> {
    mounts.iter().try_for_each(|m| {
        non_empty("run_volume_mounts.mount_path", &m.mount_path)?;
        non_empty("run_volume_mounts.reference", &m.reference)
    })
}

/// Implemented by the request bodies with required fields.
pub(crate) trait Validate {
    fn validate(&self) -> Result<()>;
}

impl Validate for ProjectPrototype {
    fn validate(&self) -> Result<()> {
        non_empty("name", &self.name)
    }
}

impl Validate for AppPrototype {
    fn validate(&self) -> Result<()> {
        non_empty("image_reference", &self.image_reference)?;
        non_empty("name", &self.name)?;
        volume_mounts(&self.run_volume_mounts)
    }
}

impl Validate for JobPrototype {
    fn validate(&self) -> Result<()> {
        non_empty("image_reference", &self.image_reference)?;
        non_empty("name", &self.name)?;
        volume_mounts(&self.run_volume_mounts)
    }
}

impl Validate for BuildPrototype {
    fn validate(&self) -> Result<()> {
        non_empty("name", &self.name)?;
        non_empty("output_image", &self.output_image)?;
        non_empty("output_secret", &self.output_secret)?;
        non_empty("strategy_type", &self.strategy_type)?;
        // Local builds upload their sources, all others fetch them from git.
        if self.source_type != Some(BuildSourceType::Local) {
            present("source_url", &self.source_url)?;
        }
        Ok(())
    }
}

impl Validate for BindingPrototype {
    fn validate(&self) -> Result<()> {
        non_empty("component.name", &self.component.name)?;
        non_empty("component.resource_type", &self.component.resource_type)?;
        non_empty("prefix", &self.prefix)?;
        non_empty("secret_name", &self.secret_name)
    }
}

impl Validate for ConfigMapPrototype {
    fn validate(&self) -> Result<()> {
        non_empty("name", &self.name)
    }
}

impl Validate for SecretPrototype {
    fn validate(&self) -> Result<()> {
        present("format", &self.format)?;
        non_empty("name", &self.name)
    }
}

impl Validate for DomainMappingPrototype {
    fn validate(&self) -> Result<()> {
        non_empty("component.name", &self.component.name)?;
        non_empty("component.resource_type", &self.component.resource_type)?;
        non_empty("name", &self.name)?;
        non_empty("tls_secret", &self.tls_secret)
    }
}

impl Validate for FunctionPrototype {
    fn validate(&self) -> Result<()> {
        non_empty("code_reference", &self.code_reference)?;
        non_empty("name", &self.name)?;
        non_empty("runtime", &self.runtime)
    }
}

impl Validate for AllowedOutboundDestinationPrototype {
    fn validate(&self) -> Result<()> {
        match self {
            Self::CidrBlock(data) => {
                non_empty("cidr_block", &data.cidr_block)?;
                non_empty("name", &data.name)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CidrBlockData, ComponentRef, SecretFormat};
    use std::error::Error as _;
    use test_case::test_case;

    fn source(e: &GaxError) -> Option<&Error> {
        e.source().and_then(|s| s.downcast_ref::<Error>())
    }

    fn missing_field(result: Result<()>) -> Option<&'static str> {
        let e = result.err()?;
        assert!(e.is_binding(), "{e:?}");
        match source(&e)? {
            Error::MissingField(f) => Some(*f),
            _ => None,
        }
    }

    #[test_case("15314cc3-85b4-4338-903f-c28cdee6d005", true)]
    #[test_case("abcdefgh-ijkl-mnop-qrst-uvwxyz012345", true)]
    #[test_case("15314CC3-85B4-4338-903F-C28CDEE6D005", false)]
    #[test_case("15314cc385b44338903fc28cdee6d005", false)]
    #[test_case("15314cc3-85b4-4338-903f-c28cdee6d005/apps", false)]
    #[test_case("", false)]
    fn project_id(value: &str, want: bool) {
        assert_eq!(PROJECT_ID.is_match(value), want, "{value}");
    }

    #[test_case(None, true)]
    #[test_case(Some(1), true)]
    #[test_case(Some(100), true)]
    #[test_case(Some(0), false)]
    #[test_case(Some(101), false)]
    #[test_case(Some(-5), false)]
    fn limits(value: Option<i64>, want: bool) {
        let got = limit(value);
        assert_eq!(got.is_ok(), want, "{got:?}");
        if let Err(e) = got {
            assert!(e.is_binding(), "{e:?}");
            assert!(
                matches!(source(&e), Some(Error::OutOfRange { name: "limit", .. })),
                "{e:?}"
            );
        }
    }

    #[test]
    fn if_match_value() -> anyhow::Result<()> {
        let got = if_match("W/\"1-abc\"")?;
        assert_eq!(got, http::HeaderValue::from_static("W/\"1-abc\""));

        assert_eq!(missing_field(if_match("").map(|_| ())), Some("if_match"));

        let e = if_match("bad\nvalue").unwrap_err();
        assert!(e.is_binding(), "{e:?}");
        Ok(())
    }

    #[test]
    fn app() {
        let app = AppPrototype::new();
        assert_eq!(missing_field(app.validate()), Some("image_reference"));
        let app = app.set_image_reference("icr.io/codeengine/helloworld");
        assert_eq!(missing_field(app.validate()), Some("name"));
        let app = app.set_name("my-app");
        assert!(app.validate().is_ok());

        let app = app.set_run_volume_mounts([VolumeMountPrototype::new().set_mount_path("/config")]);
        assert_eq!(
            missing_field(app.validate()),
            Some("run_volume_mounts.reference")
        );
    }

    #[test]
    fn job() {
        let job = JobPrototype::new().set_name("my-job");
        assert_eq!(missing_field(job.validate()), Some("image_reference"));
        let job = job.set_image_reference("icr.io/codeengine/helloworld");
        assert!(job.validate().is_ok());
    }

    #[test]
    fn build() {
        let build = BuildPrototype::new()
            .set_name("my-build")
            .set_output_image("private.de.icr.io/icr_namespace/image-name")
            .set_output_secret("ce-auto-icr-private-eu-de")
            .set_strategy_type("dockerfile");
        assert_eq!(missing_field(build.validate()), Some("source_url"));

        let git = build
            .clone()
            .set_source_type(BuildSourceType::Git)
            .set_source_url("https://github.com/IBM/CodeEngine");
        assert!(git.validate().is_ok());

        let local = build.clone().set_source_type(BuildSourceType::Local);
        assert!(local.validate().is_ok());

        let local = local.set_strategy_type("");
        assert_eq!(missing_field(local.validate()), Some("strategy_type"));
    }

    #[test]
    fn binding() {
        let binding = BindingPrototype::new()
            .set_prefix("MY_COS")
            .set_secret_name("my-service-access");
        assert_eq!(missing_field(binding.validate()), Some("component.name"));
        let binding = binding.set_component(
            ComponentRef::new()
                .set_name("my-app")
                .set_resource_type("app_v2"),
        );
        assert!(binding.validate().is_ok());
    }

    #[test]
    fn domain_mapping() {
        let dm = DomainMappingPrototype::new()
            .set_component(
                ComponentRef::new()
                    .set_name("my-app")
                    .set_resource_type("app_v2"),
            )
            .set_name("www.example.com");
        assert_eq!(missing_field(dm.validate()), Some("tls_secret"));
        assert!(dm.set_tls_secret("my-tls-secret").validate().is_ok());
    }

    #[test]
    fn secret() {
        let secret = SecretPrototype::new().set_name("my-secret");
        assert_eq!(missing_field(secret.validate()), Some("format"));
        let secret = secret.set_format(SecretFormat::Generic);
        assert!(secret.validate().is_ok());
    }

    #[test]
    fn function() {
        let function = FunctionPrototype::new()
            .set_name("my-function")
            .set_code_reference("data:text/plain;base64,YXN5bmMgZnVuY3Rpb24gbWFpbigpIHt9");
        assert_eq!(missing_field(function.validate()), Some("runtime"));
        assert!(function.set_runtime("nodejs-20").validate().is_ok());
    }

    #[test]
    fn simple() {
        assert_eq!(
            missing_field(ProjectPrototype::new().validate()),
            Some("name")
        );
        assert!(ProjectPrototype::new().set_name("p").validate().is_ok());
        assert_eq!(
            missing_field(ConfigMapPrototype::new().validate()),
            Some("name")
        );
    }

    #[test]
    fn allowed_outbound_destination() {
        let proto = AllowedOutboundDestinationPrototype::CidrBlock(
            CidrBlockData::new().set_name("my-range"),
        );
        assert_eq!(missing_field(proto.validate()), Some("cidr_block"));
        let proto = AllowedOutboundDestinationPrototype::CidrBlock(
            CidrBlockData::new()
                .set_name("my-range")
                .set_cidr_block("10.0.0.0/24"),
        );
        assert!(proto.validate().is_ok());
    }
}
