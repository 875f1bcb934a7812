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

pub use auth::credentials::Credentials;

pub type ClientConfig = gax::client_builder::internal::ClientConfig<Credentials>;

// Enables the tracing decorator without changing the application code.
pub(crate) const LOGGING_VAR: &str = "IBM_CLOUD_RUST_LOGGING";

pub fn tracing_enabled(config: &ClientConfig) -> bool {
    config.tracing
        || std::env::var(LOGGING_VAR)
            .is_ok_and(|v| v.eq_ignore_ascii_case("true") || v == "1")
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoped_env::ScopedEnv;
    use test_case::test_case;

    #[test]
    #[serial_test::serial]
    fn from_config() {
        let _e = ScopedEnv::remove(LOGGING_VAR);
        let mut config = ClientConfig::default();
        assert!(!tracing_enabled(&config));
        config.tracing = true;
        assert!(tracing_enabled(&config));
    }

    #[test_case("true", true)]
    #[test_case("TRUE", true)]
    #[test_case("1", true)]
    #[test_case("false", false)]
    #[test_case("", false)]
    #[serial_test::serial]
    fn from_environment(value: &str, want: bool) {
        let _e = ScopedEnv::set(LOGGING_VAR, value);
        assert_eq!(tracing_enabled(&ClientConfig::default()), want);
    }
}
