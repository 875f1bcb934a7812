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

use std::collections::BTreeMap;

/// Builds the `data` of secrets in the formats known to Code Engine.
///
/// Each format expects a fixed set of keys. These functions return the map
/// to use in [SecretPrototype::data][super::SecretPrototype::data] or
/// [SecretReplace::data][super::SecretReplace::data].
///
/// # Example
/// ```
/// # use ibm_cloud_codeengine_v2::model::{SecretData, SecretFormat, SecretPrototype};
/// let secret = SecretPrototype::new()
///     .set_name("my-registry")
///     .set_format(SecretFormat::Registry)
///     .set_data(SecretData::registry("us.icr.io", "iamapikey", "my-api-key", None));
/// assert_eq!(secret.data.get("server").map(String::as_str), Some("us.icr.io"));
/// ```
#[derive(Clone, Copy, Debug)]
#[non_exhaustive]
pub struct SecretData;

impl SecretData {
    /// Key-value pairs with no particular structure, for `generic` secrets.
    pub fn generic<T, K, V>(entries: T) -> BTreeMap<String, String>
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect()
    }

    /// A user name and password, for `basic_auth` secrets.
    pub fn basic_auth<U: Into<String>, P: Into<String>>(
        username: U,
        password: P,
    ) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("username".to_string(), username.into()),
            ("password".to_string(), password.into()),
        ])
    }

    /// A private SSH key, for `ssh_auth` secrets.
    pub fn ssh_auth<K: Into<String>>(
        ssh_key: K,
        known_hosts: Option<String>,
    ) -> BTreeMap<String, String> {
        let mut data = BTreeMap::from([("ssh_key".to_string(), ssh_key.into())]);
        if let Some(hosts) = known_hosts {
            data.insert("known_hosts".to_string(), hosts);
        }
        data
    }

    /// A certificate chain and its private key, for `tls` secrets.
    pub fn tls<C: Into<String>, K: Into<String>>(tls_cert: C, tls_key: K) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("tls_cert".to_string(), tls_cert.into()),
            ("tls_key".to_string(), tls_key.into()),
        ])
    }

    /// The credentials of a container registry, for `registry` secrets.
    pub fn registry<S, U, P>(
        server: S,
        username: U,
        password: P,
        email: Option<String>,
    ) -> BTreeMap<String, String>
    where
        S: Into<String>,
        U: Into<String>,
        P: Into<String>,
    {
        let mut data = BTreeMap::from([
            ("server".to_string(), server.into()),
            ("username".to_string(), username.into()),
            ("password".to_string(), password.into()),
        ]);
        if let Some(email) = email {
            data.insert("email".to_string(), email);
        }
        data
    }
}

/// Formats secret data without its values.
pub(crate) struct Censored<'a>(pub &'a BTreeMap<String, String>);

impl std::fmt::Debug for Censored<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.0.keys().map(|k| (k, "[censored]")))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Secret, SecretFormat, SecretPrototype, SecretReplace};

    #[test]
    fn generic() {
        let got = SecretData::generic([("a", "1"), ("b", "2")]);
        assert_eq!(got.len(), 2);
        assert_eq!(got.get("a").map(String::as_str), Some("1"));
    }

    #[test]
    fn well_known_keys() {
        let keys = |m: BTreeMap<String, String>| m.into_keys().collect::<Vec<_>>();
        assert_eq!(keys(SecretData::basic_auth("u", "p")), ["password", "username"]);
        assert_eq!(keys(SecretData::ssh_auth("k", None)), ["ssh_key"]);
        assert_eq!(
            keys(SecretData::ssh_auth("k", Some("github.com ssh-rsa".into()))),
            ["known_hosts", "ssh_key"]
        );
        assert_eq!(keys(SecretData::tls("c", "k")), ["tls_cert", "tls_key"]);
        assert_eq!(
            keys(SecretData::registry("s", "u", "p", Some("e@example.com".into()))),
            ["email", "password", "server", "username"]
        );
    }

    #[test]
    fn debug_hides_values() {
        let data = SecretData::basic_auth("admin", "hunter2");
        let prototype = SecretPrototype::new()
            .set_name("my-secret")
            .set_format(SecretFormat::BasicAuth)
            .set_data(data.clone());
        let got = format!("{prototype:?}");
        assert!(!got.contains("hunter2"), "{got}");
        assert!(got.contains("password"), "{got}");
        assert!(got.contains("my-secret"), "{got}");

        let secret = Secret::new().set_name("my-secret").set_data(data.clone());
        let got = format!("{secret:?}");
        assert!(!got.contains("hunter2"), "{got}");

        let replace = SecretReplace::new().set_data(data);
        let got = format!("{replace:?}");
        assert!(!got.contains("hunter2"), "{got}");
        assert!(!got.contains("admin"), "{got}");
    }

    #[test]
    fn serialize_keeps_values() -> anyhow::Result<()> {
        let prototype = SecretPrototype::new()
            .set_name("my-secret")
            .set_format(SecretFormat::Generic)
            .set_data(SecretData::generic([("key", "value")]));
        let got = serde_json::to_value(&prototype)?;
        assert_eq!(
            got,
            serde_json::json!({
                "name": "my-secret",
                "format": "generic",
                "data": {"key": "value"},
            })
        );
        Ok(())
    }
}
