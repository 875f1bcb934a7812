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

//! Defines traits and helpers to serialize query parameters.
//!
//! The list operations accept a handful of optional query parameters. The
//! request builders hold them as optional fields, and add them to the request
//! uniformly, without any conditional code to handle absent values.
//!
//! The types are not intended for application developers to use. They are
//! public because each generated client crate uses these helpers.

/// [QueryParameter] is a trait representing types that can be used as a query
/// parameter.
pub trait QueryParameter {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder;
}

impl<T: QueryParameter> QueryParameter for Option<T> {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        match self {
            Some(v) => v.add(builder, name),
            None => builder,
        }
    }
}

impl QueryParameter for String {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        builder.query(&[(name, self)])
    }
}

impl QueryParameter for i64 {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        builder.query(&[(name, self)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn split_query(r: &reqwest::Request) -> Vec<&str> {
        r.url()
            .query()
            .unwrap_or_default()
            .split("&")
            .filter(|p| !p.is_empty())
            .collect()
    }

    fn builder() -> std::result::Result<reqwest::RequestBuilder, reqwest::Error> {
        Ok(reqwest::Client::builder()
            .build()?
            .get("https://api.us-south.codeengine.cloud.ibm.com/v2/projects"))
    }

    #[test]
    fn optional() -> TestResult {
        let builder = Some(100_i64).add(builder()?, "limit");
        let builder = None::<String>.add(builder, "start");
        let builder = Some("abc".to_string()).add(builder, "job_name");
        let request = builder.build()?;
        assert_eq!(split_query(&request), vec!["limit=100", "job_name=abc"]);
        Ok(())
    }

    #[test]
    fn string_escaped() -> TestResult {
        let builder = "a b&c".to_string().add(builder()?, "start");
        let request = builder.build()?;
        assert_eq!(split_query(&request), vec!["start=a+b%26c"]);
        Ok(())
    }
}
