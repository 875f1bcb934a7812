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

//! Validation of path parameters.
//!
//! Parameters used to build the request path (aka 'path parameters') are
//! required, and many services restrict their format. The client libraries
//! validate them before sending any request, a small set of helpers makes the
//! generated code easier to read.

use regex::Regex;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("missing required parameter {0}")]
    MissingRequiredParameter(String),
    #[error("the value `{value}` for parameter {name} does not match the pattern `{pattern}`")]
    PatternMismatch {
        name: String,
        value: String,
        pattern: String,
    },
}

pub fn missing(name: &str) -> gax::error::Error {
    gax::error::Error::binding(Error::MissingRequiredParameter(name.to_string()))
}

/// Returns `value` if it is not empty.
///
/// # Example
/// ```
/// # use ibm_cloud_gax_internal::path_parameter::required;
/// assert_eq!(required("name", "my-app").ok(), Some("my-app"));
/// assert!(required("name", "").is_err());
/// ```
pub fn required<'a>(name: &str, value: &'a str) -> gax::Result<&'a str> {
    if value.is_empty() {
        return Err(missing(name));
    }
    Ok(value)
}

/// Returns `value` if it is not empty and matches `pattern`.
///
/// # Example
/// ```
/// # use ibm_cloud_gax_internal::path_parameter::matching;
/// let pattern = regex::Regex::new("^[a-z]+$").unwrap();
/// assert_eq!(matching("name", "abc", &pattern).ok(), Some("abc"));
/// assert!(matching("name", "ABC", &pattern).is_err());
/// ```
pub fn matching<'a>(name: &str, value: &'a str, pattern: &Regex) -> gax::Result<&'a str> {
    let value = required(name, value)?;
    if !pattern.is_match(value) {
        return Err(gax::error::Error::binding(Error::PatternMismatch {
            name: name.to_string(),
            value: value.to_string(),
            pattern: pattern.as_str().to_string(),
        }));
    }
    Ok(value)
}

/// Percent-encodes `value` for use as a single path segment.
pub fn segment(value: &str) -> String {
    percent_encoding::utf8_percent_encode(value, SEGMENT).to_string()
}

// The characters escaped in a path segment, per RFC 3986.
const SEGMENT: &percent_encoding::AsciiSet = &percent_encoding::CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[cfg(test)]
mod tests {
    use super::Error;
    use regex::Regex;
    use std::error::Error as _;
    use test_case::test_case;

    #[test]
    fn missing() {
        let e = super::missing("abc123");
        assert!(e.is_binding(), "{e:?}");
        let fmt = format!("{e}");
        assert!(fmt.contains("abc123"), "{e:?}");
        let source = e.source().and_then(|e| e.downcast_ref::<Error>());
        assert!(
            matches!(source, Some(Error::MissingRequiredParameter(p)) if p == "abc123"),
            "{e:?}"
        );
    }

    #[test]
    fn required() {
        assert_eq!(super::required("id", "abc").ok(), Some("abc"));
        let e = super::required("id", "").unwrap_err();
        assert!(e.is_binding(), "{e:?}");
    }

    #[test_case("15314cc3-85b4-4338-903f-c28cdee6d005", true)]
    #[test_case("", false)]
    #[test_case("not-a-uuid", false)]
    #[test_case("15314CC3-85B4-4338-903F-C28CDEE6D005", false)]
    #[test_case("15314cc3-85b4-4338-903f-c28cdee6d005/apps", false)]
    fn matching(value: &str, ok: bool) {
        let pattern = Regex::new(
            "^[0-9a-z]{8}-[0-9a-z]{4}-[0-9a-z]{4}-[0-9a-z]{4}-[0-9a-z]{12}$",
        )
        .unwrap();
        let got = super::matching("project_id", value, &pattern);
        assert_eq!(got.is_ok(), ok, "{got:?}");
        if let Err(e) = got {
            assert!(e.is_binding(), "{e:?}");
            assert!(e.to_string().contains("project_id"), "{e}");
        }
    }

    #[test]
    fn mismatch_source() {
        let pattern = Regex::new("^[a-z]+$").unwrap();
        let e = super::matching("name", "ABC", &pattern).unwrap_err();
        let source = e.source().and_then(|e| e.downcast_ref::<Error>());
        assert!(
            matches!(source, Some(Error::PatternMismatch { name, value, .. }) if name == "name" && value == "ABC"),
            "{e:?}"
        );
    }

    #[test_case("my-app", "my-app")]
    #[test_case("a b", "a%20b")]
    #[test_case("a/b", "a%2Fb")]
    #[test_case("a?b#c", "a%3Fb%23c")]
    fn segment(input: &str, want: &str) {
        assert_eq!(super::segment(input), want);
    }
}
