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

//! IBM Cloud Client Libraries for Rust - Code Engine API
//!
//! This crate contains traits, types, and functions to interact with
//! [IBM Cloud Code Engine]. Most applications will use the structs defined in
//! the [client] module. More specifically:
//!
//! * [CodeEngine](client/struct.CodeEngine.html)
//!
//! # Example
//! ```no_run
//! # async fn sample() -> anyhow::Result<()> {
//! use ibm_cloud_codeengine_v2::client::CodeEngine;
//! use ibm_cloud_codeengine_v2::model::AppPrototype;
//!
//! let client = CodeEngine::builder().build().await?;
//! let app = client
//!     .create_app()
//!     .set_project_id("15314cc3-85b4-4338-903f-c28cdee6d005")
//!     .set_body(
//!         AppPrototype::new()
//!             .set_name("my-app")
//!             .set_image_reference("icr.io/codeengine/helloworld"),
//!     )
//!     .send()
//!     .await?;
//! println!("created {} with entity tag {}", app.name, app.entity_tag);
//! # Ok(()) }
//! ```
//!
//! [IBM Cloud Code Engine]: https://cloud.ibm.com/docs/codeengine

/// The messages and enums that are part of this client library.
pub mod model;

pub use gax::Result;
pub use gax::error::Error;

#[allow(rustdoc::invalid_html_tags)]
#[allow(rustdoc::redundant_explicit_links)]
pub mod stub;

/// Concrete implementations of this client library traits.
pub mod client;

/// Request builders.
pub mod builder;

mod region;
pub use region::{Error as RegionError, REGIONS, get_service_url_for_region};

#[doc(hidden)]
pub(crate) mod tracing;

#[doc(hidden)]
pub(crate) mod transport;

mod validation;
pub use validation::Error as ValidationError;

/// The default endpoint, in the `au-syd` region.
pub const DEFAULT_ENDPOINT: &str = "https://api.au-syd.codeengine.cloud.ibm.com/v2";

/// The API version sent with each request, unless the client overrides it.
pub const DEFAULT_API_VERSION: &str = "2025-01-10";

pub(crate) mod info {
    /// The service name used to find credentials in the environment.
    pub(crate) const SERVICE_NAME: &str = "code_engine";

    pub(crate) static SDK_HEADERS: gaxi::api_header::SdkHeaders = gaxi::api_header::SdkHeaders {
        service_name: "code_engine",
        service_version: "V2",
    };
}
