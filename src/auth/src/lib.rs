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

//! IBM Cloud Client Libraries for Rust - Authentication Components
//!
//! This crate contains types and functions used to authenticate applications
//! on IBM Cloud. The client libraries consume an implementation of
//! [credentials::Credentials] and use these credentials to authenticate the
//! requests issued by the application.
//!
//! Most applications authenticate with an [IBM Cloud API key]. The library
//! exchanges the key for a short lived IAM access token, caches the token, and
//! refreshes it before it expires. Other authentication schemes (a static
//! bearer token, basic authentication, or no authentication at all) are
//! available for testing and for private deployments.
//!
//! [IBM Cloud API key]: https://cloud.ibm.com/docs/account?topic=account-manapikey

pub mod errors;

/// Types and functions to work with IBM Cloud authentication credentials.
pub mod credentials;

/// Types and functions to work with auth tokens.
pub mod token;

/// The token cache
pub(crate) mod token_cache;

/// A `Result` alias where the `Err` case is
/// `ibm_cloud_auth::errors::CredentialsError`.
pub(crate) type Result<T> = std::result::Result<T, crate::errors::CredentialsError>;

pub(crate) mod headers_util;
