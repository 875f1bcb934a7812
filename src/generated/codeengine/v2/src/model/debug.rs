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

use super::secret_data::Censored;

impl std::fmt::Debug for super::Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("Secret");
        debug_struct.field("created_at", &self.created_at);
        debug_struct.field("data", &Censored(&self.data));
        debug_struct.field("entity_tag", &self.entity_tag);
        debug_struct.field("format", &self.format);
        debug_struct.field("href", &self.href);
        debug_struct.field("id", &self.id);
        debug_struct.field("name", &self.name);
        debug_struct.field("project_id", &self.project_id);
        debug_struct.field("region", &self.region);
        debug_struct.field("resource_type", &self.resource_type);
        debug_struct.field("service_access", &self.service_access);
        debug_struct.field("service_operator", &self.service_operator);
        debug_struct.finish()
    }
}

impl std::fmt::Debug for super::SecretPrototype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("SecretPrototype");
        debug_struct.field("data", &Censored(&self.data));
        debug_struct.field("format", &self.format);
        debug_struct.field("name", &self.name);
        debug_struct.field("service_access", &self.service_access);
        debug_struct.field("service_operator", &self.service_operator);
        debug_struct.finish()
    }
}

impl std::fmt::Debug for super::SecretReplace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("SecretReplace");
        debug_struct.field("data", &Censored(&self.data));
        debug_struct.field("format", &self.format);
        debug_struct.finish()
    }
}
