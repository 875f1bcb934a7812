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

//! Errors returned by the client libraries.
//!
//! The IBM Cloud Client Libraries for Rust distinguish between errors
//! detected before a request is sent (e.g. a missing required parameter),
//! errors sending the request or receiving the response (e.g. cannot open a
//! connection), errors decoding the response, and errors returned by the
//! service itself.
//!
//! # Examples
//!
//! ```
//! # use ibm_cloud_gax::error::Error;
//! fn handle_error(e: Error) {
//!     if let Some(status) = e.status() {
//!         println!("the service rejected the request {:?}", status.code());
//!     }
//! }
//! ```

mod core_error;
mod credentials;
mod service_error;
pub use core_error::*;
pub use credentials::*;
pub use service_error::*;
