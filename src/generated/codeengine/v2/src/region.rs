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

//! Maps IBM Cloud regions to Code Engine endpoints.

/// The regions where Code Engine is available.
pub const REGIONS: [&str; 10] = [
    "au-syd", "br-sao", "ca-tor", "eu-de", "eu-es", "eu-gb", "jp-osa", "jp-tok", "us-east",
    "us-south",
];

/// The error returned for regions without a Code Engine endpoint.
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("service URL for region `{0}` not found")]
    UnknownRegion(String),
}

/// Returns the Code Engine endpoint for `region`.
///
/// # Example
/// ```
/// # use ibm_cloud_codeengine_v2::get_service_url_for_region;
/// let url = get_service_url_for_region("us-south")?;
/// assert_eq!(url, "https://api.us-south.codeengine.cloud.ibm.com/v2");
/// # Ok::<(), ibm_cloud_codeengine_v2::RegionError>(())
/// ```
pub fn get_service_url_for_region(region: &str) -> Result<String, Error> {
    if !REGIONS.contains(&region) {
        return Err(Error::UnknownRegion(region.to_string()));
    }
    Ok(format!("https://api.{region}.codeengine.cloud.ibm.com/v2"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("au-syd")]
    #[test_case("br-sao")]
    #[test_case("ca-tor")]
    #[test_case("eu-de")]
    #[test_case("eu-es")]
    #[test_case("eu-gb")]
    #[test_case("jp-osa")]
    #[test_case("jp-tok")]
    #[test_case("us-east")]
    #[test_case("us-south")]
    fn known(region: &str) {
        let got = get_service_url_for_region(region);
        assert_eq!(
            got,
            Ok(format!("https://api.{region}.codeengine.cloud.ibm.com/v2"))
        );
    }

    #[test_case("")]
    #[test_case("INVALID_REGION")]
    #[test_case("US-SOUTH")]
    #[test_case("us-west")]
    fn unknown(region: &str) {
        let got = get_service_url_for_region(region);
        assert_eq!(got, Err(Error::UnknownRegion(region.to_string())));
        let msg = got.unwrap_err().to_string();
        assert!(msg.contains(region), "{msg}");
    }

    #[test]
    fn default_endpoint() {
        assert_eq!(
            get_service_url_for_region("au-syd").ok().as_deref(),
            Some(crate::DEFAULT_ENDPOINT)
        );
    }
}
