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

//! SDK analytics and user agent headers.

/// The header carrying the SDK analytics value.
pub const ANALYTICS_HEADER: &str = "x-ibmcloud-sdk-analytics";

/// Generated libraries create one static instance of this struct and use it
/// to format the analytics header for each operation.
#[derive(Debug, PartialEq)]
pub struct SdkHeaders {
    pub service_name: &'static str,
    pub service_version: &'static str,
}

mod build_info {
    // The file has been placed there by the build script.
    include!(concat!(env!("OUT_DIR"), "/build_env.rs"));

    pub(crate) const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
}

impl SdkHeaders {
    /// Format the analytics header value for an operation.
    pub fn analytics_value(&self, operation_id: &str) -> String {
        format!(
            "service_name={};service_version={};operation_id={operation_id}",
            self.service_name, self.service_version
        )
    }
}

/// The default `User-Agent` header value.
pub fn user_agent() -> String {
    format!(
        "ibm-cloud-rust-sdk/{} (lang=rust; arch={}; os={}; rust.version={})",
        build_info::PKG_VERSION,
        std::env::consts::ARCH,
        std::env::consts::OS,
        build_info::RUSTC_VERSION,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn breakdown(formatted: &str) -> HashMap<String, String> {
        formatted
            .split(';')
            .filter_map(|v| v.split_once('='))
            .map(|(k, v)| (k.trim().to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn analytics() {
        let header = SdkHeaders {
            service_name: "code_engine",
            service_version: "V2",
        };
        let got = header.analytics_value("list_projects");
        assert_eq!(
            got,
            "service_name=code_engine;service_version=V2;operation_id=list_projects"
        );
        let fields = breakdown(&got);
        assert_eq!(
            fields.get("operation_id").map(String::as_str),
            Some("list_projects")
        );
    }

    #[test]
    fn user_agent_format() {
        let got = user_agent();
        let prefix = format!("ibm-cloud-rust-sdk/{} (", build_info::PKG_VERSION);
        assert!(got.starts_with(&prefix), "{got}");
        assert!(got.ends_with(')'), "{got}");
        let inner = got
            .strip_prefix(&prefix)
            .and_then(|s| s.strip_suffix(')'))
            .unwrap_or_default();
        let fields = breakdown(inner);
        assert_eq!(fields.get("lang").map(String::as_str), Some("rust"));
        assert_eq!(
            fields.get("arch").map(String::as_str),
            Some(std::env::consts::ARCH)
        );
        assert_eq!(
            fields.get("os").map(String::as_str),
            Some(std::env::consts::OS)
        );
        let rustc = fields.get("rust.version").cloned().unwrap_or_default();
        assert_eq!(rustc, build_info::RUSTC_VERSION);
    }
}
