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

//! The resources, request bodies, and requests of the Code Engine API.

mod debug;
mod outbound;
mod secret_data;

pub use outbound::{
    AllowedOutboundDestination, AllowedOutboundDestinationPatch,
    AllowedOutboundDestinationPrototype,
};
pub use secret_data::SecretData;

/// Describes the first page of a collection.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ListFirstMetadata {
    /// The URL of the first page.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub href: std::option::Option<std::string::String>,
}

impl ListFirstMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [href][crate::model::ListFirstMetadata::href].
    pub fn set_href<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.href = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [href][crate::model::ListFirstMetadata::href].
    pub fn set_or_clear_href<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.href = v.map(|x| x.into());
        self
    }
}

/// Describes the next page of a collection.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ListNextMetadata {
    /// The URL of the next page.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub href: std::option::Option<std::string::String>,

    /// The token for the next page, use it as the `start` parameter of the list
    /// request.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub start: std::option::Option<std::string::String>,
}

impl ListNextMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [href][crate::model::ListNextMetadata::href].
    pub fn set_href<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.href = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [href][crate::model::ListNextMetadata::href].
    pub fn set_or_clear_href<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.href = v.map(|x| x.into());
        self
    }

    /// Sets the value of [start][crate::model::ListNextMetadata::start].
    pub fn set_start<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.start = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [start][crate::model::ListNextMetadata::start].
    pub fn set_or_clear_start<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.start = v.map(|x| x.into());
        self
    }

    /// Returns the token to request the next page.
    ///
    /// The service returns the token in `start`, older versions only return
    /// the `href` of the next page.
    pub fn start_token(&self) -> std::option::Option<std::string::String> {
        self.start
            .clone()
            .filter(|s| !s.is_empty())
            .or_else(|| {
                self.href
                    .as_deref()
                    .and_then(gax::paginator::start_token_from_href)
            })
    }
}

/// A Code Engine project.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Project {
    /// The ID of the account that owns the project.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub account_id: std::option::Option<std::string::String>,

    /// The timestamp when the project was created.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub created_at: std::option::Option<std::string::String>,

    /// The CRN of the project.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub crn: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub href: std::option::Option<std::string::String>,

    /// The ID of the project.
    pub id: std::string::String,

    /// The name of the project.
    pub name: std::string::String,

    /// The region of the project.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub region: std::option::Option<std::string::String>,

    /// The ID of the resource group.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_group_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_type: std::option::Option<std::string::String>,

    /// The current state of the project.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<crate::model::project::Status>,
}

impl Project {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [account_id][crate::model::Project::account_id].
    pub fn set_account_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.account_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [account_id][crate::model::Project::account_id].
    pub fn set_or_clear_account_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.account_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [created_at][crate::model::Project::created_at].
    pub fn set_created_at<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.created_at = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [created_at][crate::model::Project::created_at].
    pub fn set_or_clear_created_at<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.created_at = v.map(|x| x.into());
        self
    }

    /// Sets the value of [crn][crate::model::Project::crn].
    pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.crn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [crn][crate::model::Project::crn].
    pub fn set_or_clear_crn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.crn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [href][crate::model::Project::href].
    pub fn set_href<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.href = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [href][crate::model::Project::href].
    pub fn set_or_clear_href<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.href = v.map(|x| x.into());
        self
    }

    /// Sets the value of [id][crate::model::Project::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [name][crate::model::Project::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [region][crate::model::Project::region].
    pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.region = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [region][crate::model::Project::region].
    pub fn set_or_clear_region<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resource_group_id][crate::model::Project::resource_group_id].
    pub fn set_resource_group_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_group_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_group_id][crate::model::Project::resource_group_id].
    pub fn set_or_clear_resource_group_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_group_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resource_type][crate::model::Project::resource_type].
    pub fn set_resource_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.resource_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_type][crate::model::Project::resource_type].
    pub fn set_or_clear_resource_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [status][crate::model::Project::status].
    pub fn set_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::project::Status>,
    {
        self.status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [status][crate::model::Project::status].
    pub fn set_or_clear_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::project::Status>,
    {
        self.status = v.map(|x| x.into());
        self
    }
}

/// The request body to create a project.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ProjectPrototype {
    /// The name of the project.
    pub name: std::string::String,

    /// The ID of the resource group, the account default is used when absent.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_group_id: std::option::Option<std::string::String>,

    /// Tags attached to the project.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub tags: std::vec::Vec<std::string::String>,
}

impl ProjectPrototype {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::ProjectPrototype::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [resource_group_id][crate::model::ProjectPrototype::resource_group_id].
    pub fn set_resource_group_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_group_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_group_id][crate::model::ProjectPrototype::resource_group_id].
    pub fn set_or_clear_resource_group_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_group_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tags][crate::model::ProjectPrototype::tags].
    pub fn set_tags<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.tags = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A page of projects.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ProjectList {
    /// Describes a page of the collection.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub first: std::option::Option<crate::model::ListFirstMetadata>,

    /// Maximum number of resources per page.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub limit: std::option::Option<i64>,

    /// Describes the next page, absent on the last page.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next: std::option::Option<crate::model::ListNextMetadata>,

    /// The projects in this page.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub projects: std::vec::Vec<crate::model::Project>,
}

impl ProjectList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [first][crate::model::ProjectList::first].
    pub fn set_first<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ListFirstMetadata>,
    {
        self.first = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [first][crate::model::ProjectList::first].
    pub fn set_or_clear_first<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ListFirstMetadata>,
    {
        self.first = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ProjectList::limit].
    pub fn set_limit<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ProjectList::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next][crate::model::ProjectList::next].
    pub fn set_next<T: std::convert::Into<crate::model::ListNextMetadata>>(mut self, v: T) -> Self {
        self.next = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next][crate::model::ProjectList::next].
    pub fn set_or_clear_next<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ListNextMetadata>,
    {
        self.next = v.map(|x| x.into());
        self
    }

    /// Sets the value of [projects][crate::model::ProjectList::projects].
    pub fn set_projects<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Project>,
    {
        use std::iter::Iterator;
        self.projects = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl gax::paginator::internal::PageableResponse for ProjectList {
    type PageItem = crate::model::Project;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.projects
    }

    fn next_page_token(&self) -> std::string::String {
        self.next
            .as_ref()
            .and_then(crate::model::ListNextMetadata::start_token)
            .unwrap_or_default()
    }
}

/// The egress IP addresses of a project.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ProjectEgressIpAddresses {
    /// The private egress IP addresses.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub private: std::vec::Vec<std::string::String>,

    /// The public egress IP addresses.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub public: std::vec::Vec<std::string::String>,
}

impl ProjectEgressIpAddresses {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [private][crate::model::ProjectEgressIpAddresses::private].
    pub fn set_private<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.private = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [public][crate::model::ProjectEgressIpAddresses::public].
    pub fn set_public<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.public = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Details about the status of a project.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ProjectStatusDetails {
    /// The status of the project domain, `unknown` or `ready`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub domain: std::option::Option<std::string::String>,

    /// The status of the project, `enabled` or `disabled`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub project: std::option::Option<std::string::String>,

    /// Whether the project cannot use virtual private endpoints.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub vpe_not_enabled: std::option::Option<bool>,
}

impl ProjectStatusDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [domain][crate::model::ProjectStatusDetails::domain].
    pub fn set_domain<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.domain = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [domain][crate::model::ProjectStatusDetails::domain].
    pub fn set_or_clear_domain<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.domain = v.map(|x| x.into());
        self
    }

    /// Sets the value of [project][crate::model::ProjectStatusDetails::project].
    pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [project][crate::model::ProjectStatusDetails::project].
    pub fn set_or_clear_project<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.project = v.map(|x| x.into());
        self
    }

    /// Sets the value of [vpe_not_enabled][crate::model::ProjectStatusDetails::vpe_not_enabled].
    pub fn set_vpe_not_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.vpe_not_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [vpe_not_enabled][crate::model::ProjectStatusDetails::vpe_not_enabled].
    pub fn set_or_clear_vpe_not_enabled<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.vpe_not_enabled = v.map(|x| x.into());
        self
    }
}

/// An environment variable of a running container.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct EnvVar {
    /// The key of the referenced config map or secret entry.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub key: std::option::Option<std::string::String>,

    /// The name of the environment variable.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    /// The prefix added to each key of a full reference.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub prefix: std::option::Option<std::string::String>,

    /// The name of the referenced config map or secret.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub reference: std::option::Option<std::string::String>,

    /// The kind of environment variable.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub r#type: std::option::Option<crate::model::env_var::Type>,

    /// The literal value.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub value: std::option::Option<std::string::String>,
}

impl EnvVar {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [key][crate::model::EnvVar::key].
    pub fn set_key<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.key = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [key][crate::model::EnvVar::key].
    pub fn set_or_clear_key<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.key = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::EnvVar::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::EnvVar::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [prefix][crate::model::EnvVar::prefix].
    pub fn set_prefix<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.prefix = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [prefix][crate::model::EnvVar::prefix].
    pub fn set_or_clear_prefix<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.prefix = v.map(|x| x.into());
        self
    }

    /// Sets the value of [reference][crate::model::EnvVar::reference].
    pub fn set_reference<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.reference = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [reference][crate::model::EnvVar::reference].
    pub fn set_or_clear_reference<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.reference = v.map(|x| x.into());
        self
    }

    /// Sets the value of [r#type][crate::model::EnvVar::r#type].
    pub fn set_type<T: std::convert::Into<crate::model::env_var::Type>>(mut self, v: T) -> Self {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [r#type][crate::model::EnvVar::r#type].
    pub fn set_or_clear_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::env_var::Type>,
    {
        self.r#type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [value][crate::model::EnvVar::value].
    pub fn set_value<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.value = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [value][crate::model::EnvVar::value].
    pub fn set_or_clear_value<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.value = v.map(|x| x.into());
        self
    }
}

/// An environment variable to set on a container.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct EnvVarPrototype {
    /// The key of the referenced config map or secret entry.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub key: std::option::Option<std::string::String>,

    /// The name of the environment variable.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    /// The prefix added to each key of a full reference.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub prefix: std::option::Option<std::string::String>,

    /// The name of the referenced config map or secret.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub reference: std::option::Option<std::string::String>,

    /// The kind of environment variable, `literal` when absent.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub r#type: std::option::Option<crate::model::env_var::Type>,

    /// The literal value.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub value: std::option::Option<std::string::String>,
}

impl EnvVarPrototype {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [key][crate::model::EnvVarPrototype::key].
    pub fn set_key<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.key = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [key][crate::model::EnvVarPrototype::key].
    pub fn set_or_clear_key<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.key = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::EnvVarPrototype::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::EnvVarPrototype::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [prefix][crate::model::EnvVarPrototype::prefix].
    pub fn set_prefix<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.prefix = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [prefix][crate::model::EnvVarPrototype::prefix].
    pub fn set_or_clear_prefix<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.prefix = v.map(|x| x.into());
        self
    }

    /// Sets the value of [reference][crate::model::EnvVarPrototype::reference].
    pub fn set_reference<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.reference = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [reference][crate::model::EnvVarPrototype::reference].
    pub fn set_or_clear_reference<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.reference = v.map(|x| x.into());
        self
    }

    /// Sets the value of [r#type][crate::model::EnvVarPrototype::r#type].
    pub fn set_type<T: std::convert::Into<crate::model::env_var::Type>>(mut self, v: T) -> Self {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [r#type][crate::model::EnvVarPrototype::r#type].
    pub fn set_or_clear_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::env_var::Type>,
    {
        self.r#type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [value][crate::model::EnvVarPrototype::value].
    pub fn set_value<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.value = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [value][crate::model::EnvVarPrototype::value].
    pub fn set_or_clear_value<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.value = v.map(|x| x.into());
        self
    }
}

/// A config map or secret mounted into a container.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct VolumeMount {
    /// The path inside the container.
    pub mount_path: std::string::String,

    /// The name of the mount.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub read_only: std::option::Option<bool>,

    /// The name of the referenced config map, secret, or persistent data store.
    pub reference: std::string::String,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sub_path: std::option::Option<std::string::String>,

    /// The kind of volume.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub r#type: std::option::Option<crate::model::volume_mount::Type>,
}

impl VolumeMount {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [mount_path][crate::model::VolumeMount::mount_path].
    pub fn set_mount_path<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.mount_path = v.into();
        self
    }

    /// Sets the value of [name][crate::model::VolumeMount::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::VolumeMount::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [read_only][crate::model::VolumeMount::read_only].
    pub fn set_read_only<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.read_only = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [read_only][crate::model::VolumeMount::read_only].
    pub fn set_or_clear_read_only<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.read_only = v.map(|x| x.into());
        self
    }

    /// Sets the value of [reference][crate::model::VolumeMount::reference].
    pub fn set_reference<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.reference = v.into();
        self
    }

    /// Sets the value of [sub_path][crate::model::VolumeMount::sub_path].
    pub fn set_sub_path<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.sub_path = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sub_path][crate::model::VolumeMount::sub_path].
    pub fn set_or_clear_sub_path<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.sub_path = v.map(|x| x.into());
        self
    }

    /// Sets the value of [r#type][crate::model::VolumeMount::r#type].
    pub fn set_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::volume_mount::Type>,
    {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [r#type][crate::model::VolumeMount::r#type].
    pub fn set_or_clear_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::volume_mount::Type>,
    {
        self.r#type = v.map(|x| x.into());
        self
    }
}

/// A volume to mount into a container.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct VolumeMountPrototype {
    /// The path inside the container.
    pub mount_path: std::string::String,

    /// The name of the mount, generated when absent.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub read_only: std::option::Option<bool>,

    /// The name of the referenced config map, secret, or persistent data store.
    pub reference: std::string::String,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub sub_path: std::option::Option<std::string::String>,

    /// The kind of volume.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub r#type: std::option::Option<crate::model::volume_mount::Type>,
}

impl VolumeMountPrototype {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [mount_path][crate::model::VolumeMountPrototype::mount_path].
    pub fn set_mount_path<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.mount_path = v.into();
        self
    }

    /// Sets the value of [name][crate::model::VolumeMountPrototype::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::VolumeMountPrototype::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [read_only][crate::model::VolumeMountPrototype::read_only].
    pub fn set_read_only<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.read_only = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [read_only][crate::model::VolumeMountPrototype::read_only].
    pub fn set_or_clear_read_only<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.read_only = v.map(|x| x.into());
        self
    }

    /// Sets the value of [reference][crate::model::VolumeMountPrototype::reference].
    pub fn set_reference<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.reference = v.into();
        self
    }

    /// Sets the value of [sub_path][crate::model::VolumeMountPrototype::sub_path].
    pub fn set_sub_path<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.sub_path = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [sub_path][crate::model::VolumeMountPrototype::sub_path].
    pub fn set_or_clear_sub_path<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.sub_path = v.map(|x| x.into());
        self
    }

    /// Sets the value of [r#type][crate::model::VolumeMountPrototype::r#type].
    pub fn set_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::volume_mount::Type>,
    {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [r#type][crate::model::VolumeMountPrototype::r#type].
    pub fn set_or_clear_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::volume_mount::Type>,
    {
        self.r#type = v.map(|x| x.into());
        self
    }
}

/// A health check of the app containers.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Probe {
    /// The number of consecutive failures before the container is restarted.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub failure_threshold: std::option::Option<i64>,

    /// Seconds to wait before the first probe.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub initial_delay: std::option::Option<i64>,

    /// Seconds between probes.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub interval: std::option::Option<i64>,

    /// The path of the HTTP request, `http` probes only.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub path: std::option::Option<std::string::String>,

    /// The port to probe.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub port: std::option::Option<i64>,

    /// Seconds until the probe times out.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub timeout: std::option::Option<i64>,

    /// The kind of probe.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub r#type: std::option::Option<crate::model::probe::Type>,
}

impl Probe {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [failure_threshold][crate::model::Probe::failure_threshold].
    pub fn set_failure_threshold<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.failure_threshold = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [failure_threshold][crate::model::Probe::failure_threshold].
    pub fn set_or_clear_failure_threshold<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.failure_threshold = v.map(|x| x.into());
        self
    }

    /// Sets the value of [initial_delay][crate::model::Probe::initial_delay].
    pub fn set_initial_delay<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.initial_delay = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [initial_delay][crate::model::Probe::initial_delay].
    pub fn set_or_clear_initial_delay<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.initial_delay = v.map(|x| x.into());
        self
    }

    /// Sets the value of [interval][crate::model::Probe::interval].
    pub fn set_interval<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.interval = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [interval][crate::model::Probe::interval].
    pub fn set_or_clear_interval<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.interval = v.map(|x| x.into());
        self
    }

    /// Sets the value of [path][crate::model::Probe::path].
    pub fn set_path<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.path = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [path][crate::model::Probe::path].
    pub fn set_or_clear_path<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.path = v.map(|x| x.into());
        self
    }

    /// Sets the value of [port][crate::model::Probe::port].
    pub fn set_port<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.port = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [port][crate::model::Probe::port].
    pub fn set_or_clear_port<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.port = v.map(|x| x.into());
        self
    }

    /// Sets the value of [timeout][crate::model::Probe::timeout].
    pub fn set_timeout<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.timeout = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [timeout][crate::model::Probe::timeout].
    pub fn set_or_clear_timeout<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.timeout = v.map(|x| x.into());
        self
    }

    /// Sets the value of [r#type][crate::model::Probe::r#type].
    pub fn set_type<T: std::convert::Into<crate::model::probe::Type>>(mut self, v: T) -> Self {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [r#type][crate::model::Probe::r#type].
    pub fn set_or_clear_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::probe::Type>,
    {
        self.r#type = v.map(|x| x.into());
        self
    }
}

/// A health check to configure on the app containers.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ProbePrototype {
    /// The number of consecutive failures before the container is restarted.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub failure_threshold: std::option::Option<i64>,

    /// Seconds to wait before the first probe.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub initial_delay: std::option::Option<i64>,

    /// Seconds between probes.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub interval: std::option::Option<i64>,

    /// The path of the HTTP request, `http` probes only.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub path: std::option::Option<std::string::String>,

    /// The port to probe.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub port: std::option::Option<i64>,

    /// Seconds until the probe times out.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub timeout: std::option::Option<i64>,

    /// The kind of probe.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub r#type: std::option::Option<crate::model::probe::Type>,
}

impl ProbePrototype {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [failure_threshold][crate::model::ProbePrototype::failure_threshold].
    pub fn set_failure_threshold<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.failure_threshold = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [failure_threshold][crate::model::ProbePrototype::failure_threshold].
    pub fn set_or_clear_failure_threshold<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.failure_threshold = v.map(|x| x.into());
        self
    }

    /// Sets the value of [initial_delay][crate::model::ProbePrototype::initial_delay].
    pub fn set_initial_delay<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.initial_delay = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [initial_delay][crate::model::ProbePrototype::initial_delay].
    pub fn set_or_clear_initial_delay<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.initial_delay = v.map(|x| x.into());
        self
    }

    /// Sets the value of [interval][crate::model::ProbePrototype::interval].
    pub fn set_interval<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.interval = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [interval][crate::model::ProbePrototype::interval].
    pub fn set_or_clear_interval<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.interval = v.map(|x| x.into());
        self
    }

    /// Sets the value of [path][crate::model::ProbePrototype::path].
    pub fn set_path<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.path = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [path][crate::model::ProbePrototype::path].
    pub fn set_or_clear_path<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.path = v.map(|x| x.into());
        self
    }

    /// Sets the value of [port][crate::model::ProbePrototype::port].
    pub fn set_port<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.port = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [port][crate::model::ProbePrototype::port].
    pub fn set_or_clear_port<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.port = v.map(|x| x.into());
        self
    }

    /// Sets the value of [timeout][crate::model::ProbePrototype::timeout].
    pub fn set_timeout<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.timeout = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [timeout][crate::model::ProbePrototype::timeout].
    pub fn set_or_clear_timeout<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.timeout = v.map(|x| x.into());
        self
    }

    /// Sets the value of [r#type][crate::model::ProbePrototype::r#type].
    pub fn set_type<T: std::convert::Into<crate::model::probe::Type>>(mut self, v: T) -> Self {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [r#type][crate::model::ProbePrototype::r#type].
    pub fn set_or_clear_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::probe::Type>,
    {
        self.r#type = v.map(|x| x.into());
        self
    }
}

/// A Code Engine app.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct App {
    /// Reference to a build associated with the app.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub build: std::option::Option<std::string::String>,

    /// Reference to a build run associated with the app.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub build_run: std::option::Option<std::string::String>,

    /// Environment variables set by the platform.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub computed_env_variables: std::vec::Vec<crate::model::EnvVar>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub created_at: std::option::Option<std::string::String>,

    /// The public URL of the app.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub endpoint: std::option::Option<std::string::String>,

    /// The URL of the app within the project.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub endpoint_internal: std::option::Option<std::string::String>,

    /// The version of the app instance, used to achieve optimistic locking.
    pub entity_tag: std::string::String,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub href: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    /// The port the app listens on.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub image_port: std::option::Option<i64>,

    /// The name of the image used by the app.
    pub image_reference: std::string::String,

    /// The name of the image registry access secret.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub image_secret: std::option::Option<std::string::String>,

    /// Which domain mappings are managed for the app.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub managed_domain_mappings: std::option::Option<crate::model::ManagedDomainMappings>,

    /// The name of the app.
    pub name: std::string::String,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub probe_liveness: std::option::Option<crate::model::Probe>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub probe_readiness: std::option::Option<crate::model::Probe>,

    /// The ID of the project the resource belongs to.
    pub project_id: std::string::String,

    /// The region the project is located in.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub region: std::option::Option<std::string::String>,

    /// The type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_type: std::option::Option<std::string::String>,

    /// Arguments for the container entrypoint.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub run_arguments: std::vec::Vec<std::string::String>,

    /// The user ID (UID) to run the container as.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub run_as_user: std::option::Option<i64>,

    /// Commands replacing the entrypoint of the image.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub run_commands: std::vec::Vec<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub run_compute_resource_token_enabled: std::option::Option<bool>,

    /// References to config maps, secrets, or literal values exposed as
    /// environment variables.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub run_env_variables: std::vec::Vec<crate::model::EnvVar>,

    /// The name of the service account.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub run_service_account: std::option::Option<crate::model::ServiceAccount>,

    /// Mounts of config maps or secrets.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub run_volume_mounts: std::vec::Vec<crate::model::VolumeMount>,

    /// The maximum number of requests processed concurrently per instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_concurrency: std::option::Option<i64>,

    /// The threshold of concurrent requests per instance that triggers scaling.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_concurrency_target: std::option::Option<i64>,

    /// The number of CPU assigned to each instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_cpu_limit: std::option::Option<std::string::String>,

    /// Seconds to wait before scaling down.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_down_delay: std::option::Option<i64>,

    /// The amount of ephemeral storage per instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_ephemeral_storage_limit: std::option::Option<std::string::String>,

    /// The number of instances created when the app is created.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_initial_instances: std::option::Option<i64>,

    /// The maximum number of instances.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_max_instances: std::option::Option<i64>,

    /// The amount of memory per instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_memory_limit: std::option::Option<std::string::String>,

    /// The minimum number of instances.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_min_instances: std::option::Option<i64>,

    /// The amount of time in seconds allowed to process a request.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_request_timeout: std::option::Option<i64>,

    /// The current status of the app.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<crate::model::app::Status>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status_details: std::option::Option<crate::model::AppStatusDetails>,
}

impl App {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [build][crate::model::App::build].
    pub fn set_build<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.build = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [build][crate::model::App::build].
    pub fn set_or_clear_build<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.build = v.map(|x| x.into());
        self
    }

    /// Sets the value of [build_run][crate::model::App::build_run].
    pub fn set_build_run<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.build_run = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [build_run][crate::model::App::build_run].
    pub fn set_or_clear_build_run<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.build_run = v.map(|x| x.into());
        self
    }

    /// Sets the value of [computed_env_variables][crate::model::App::computed_env_variables].
    pub fn set_computed_env_variables<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::EnvVar>,
    {
        use std::iter::Iterator;
        self.computed_env_variables = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [created_at][crate::model::App::created_at].
    pub fn set_created_at<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.created_at = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [created_at][crate::model::App::created_at].
    pub fn set_or_clear_created_at<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.created_at = v.map(|x| x.into());
        self
    }

    /// Sets the value of [endpoint][crate::model::App::endpoint].
    pub fn set_endpoint<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.endpoint = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [endpoint][crate::model::App::endpoint].
    pub fn set_or_clear_endpoint<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.endpoint = v.map(|x| x.into());
        self
    }

    /// Sets the value of [endpoint_internal][crate::model::App::endpoint_internal].
    pub fn set_endpoint_internal<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.endpoint_internal = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [endpoint_internal][crate::model::App::endpoint_internal].
    pub fn set_or_clear_endpoint_internal<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.endpoint_internal = v.map(|x| x.into());
        self
    }

    /// Sets the value of [entity_tag][crate::model::App::entity_tag].
    pub fn set_entity_tag<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_tag = v.into();
        self
    }

    /// Sets the value of [href][crate::model::App::href].
    pub fn set_href<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.href = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [href][crate::model::App::href].
    pub fn set_or_clear_href<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.href = v.map(|x| x.into());
        self
    }

    /// Sets the value of [id][crate::model::App::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::App::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [image_port][crate::model::App::image_port].
    pub fn set_image_port<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.image_port = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [image_port][crate::model::App::image_port].
    pub fn set_or_clear_image_port<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.image_port = v.map(|x| x.into());
        self
    }

    /// Sets the value of [image_reference][crate::model::App::image_reference].
    pub fn set_image_reference<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.image_reference = v.into();
        self
    }

    /// Sets the value of [image_secret][crate::model::App::image_secret].
    pub fn set_image_secret<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.image_secret = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [image_secret][crate::model::App::image_secret].
    pub fn set_or_clear_image_secret<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.image_secret = v.map(|x| x.into());
        self
    }

    /// Sets the value of [managed_domain_mappings][crate::model::App::managed_domain_mappings].
    pub fn set_managed_domain_mappings<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ManagedDomainMappings>,
    {
        self.managed_domain_mappings = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [managed_domain_mappings][crate::model::App::managed_domain_mappings].
    pub fn set_or_clear_managed_domain_mappings<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ManagedDomainMappings>,
    {
        self.managed_domain_mappings = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::App::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [probe_liveness][crate::model::App::probe_liveness].
    pub fn set_probe_liveness<T: std::convert::Into<crate::model::Probe>>(mut self, v: T) -> Self {
        self.probe_liveness = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [probe_liveness][crate::model::App::probe_liveness].
    pub fn set_or_clear_probe_liveness<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Probe>,
    {
        self.probe_liveness = v.map(|x| x.into());
        self
    }

    /// Sets the value of [probe_readiness][crate::model::App::probe_readiness].
    pub fn set_probe_readiness<T: std::convert::Into<crate::model::Probe>>(mut self, v: T) -> Self {
        self.probe_readiness = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [probe_readiness][crate::model::App::probe_readiness].
    pub fn set_or_clear_probe_readiness<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Probe>,
    {
        self.probe_readiness = v.map(|x| x.into());
        self
    }

    /// Sets the value of [project_id][crate::model::App::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [region][crate::model::App::region].
    pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.region = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [region][crate::model::App::region].
    pub fn set_or_clear_region<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resource_type][crate::model::App::resource_type].
    pub fn set_resource_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.resource_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_type][crate::model::App::resource_type].
    pub fn set_or_clear_resource_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_arguments][crate::model::App::run_arguments].
    pub fn set_run_arguments<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.run_arguments = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [run_as_user][crate::model::App::run_as_user].
    pub fn set_run_as_user<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.run_as_user = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [run_as_user][crate::model::App::run_as_user].
    pub fn set_or_clear_run_as_user<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.run_as_user = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_commands][crate::model::App::run_commands].
    pub fn set_run_commands<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.run_commands = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [run_compute_resource_token_enabled][crate::model::App::run_compute_resource_token_enabled].
    pub fn set_run_compute_resource_token_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.run_compute_resource_token_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [run_compute_resource_token_enabled][crate::model::App::run_compute_resource_token_enabled].
    pub fn set_or_clear_run_compute_resource_token_enabled<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.run_compute_resource_token_enabled = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_env_variables][crate::model::App::run_env_variables].
    pub fn set_run_env_variables<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::EnvVar>,
    {
        use std::iter::Iterator;
        self.run_env_variables = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [run_service_account][crate::model::App::run_service_account].
    pub fn set_run_service_account<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ServiceAccount>,
    {
        self.run_service_account = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [run_service_account][crate::model::App::run_service_account].
    pub fn set_or_clear_run_service_account<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ServiceAccount>,
    {
        self.run_service_account = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_volume_mounts][crate::model::App::run_volume_mounts].
    pub fn set_run_volume_mounts<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::VolumeMount>,
    {
        use std::iter::Iterator;
        self.run_volume_mounts = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [scale_concurrency][crate::model::App::scale_concurrency].
    pub fn set_scale_concurrency<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_concurrency = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_concurrency][crate::model::App::scale_concurrency].
    pub fn set_or_clear_scale_concurrency<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_concurrency = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_concurrency_target][crate::model::App::scale_concurrency_target].
    pub fn set_scale_concurrency_target<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_concurrency_target = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_concurrency_target][crate::model::App::scale_concurrency_target].
    pub fn set_or_clear_scale_concurrency_target<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_concurrency_target = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_cpu_limit][crate::model::App::scale_cpu_limit].
    pub fn set_scale_cpu_limit<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.scale_cpu_limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_cpu_limit][crate::model::App::scale_cpu_limit].
    pub fn set_or_clear_scale_cpu_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_cpu_limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_down_delay][crate::model::App::scale_down_delay].
    pub fn set_scale_down_delay<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_down_delay = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_down_delay][crate::model::App::scale_down_delay].
    pub fn set_or_clear_scale_down_delay<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_down_delay = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_ephemeral_storage_limit][crate::model::App::scale_ephemeral_storage_limit].
    pub fn set_scale_ephemeral_storage_limit<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_ephemeral_storage_limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_ephemeral_storage_limit][crate::model::App::scale_ephemeral_storage_limit].
    pub fn set_or_clear_scale_ephemeral_storage_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_ephemeral_storage_limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_initial_instances][crate::model::App::scale_initial_instances].
    pub fn set_scale_initial_instances<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_initial_instances = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_initial_instances][crate::model::App::scale_initial_instances].
    pub fn set_or_clear_scale_initial_instances<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_initial_instances = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_max_instances][crate::model::App::scale_max_instances].
    pub fn set_scale_max_instances<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_max_instances = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_max_instances][crate::model::App::scale_max_instances].
    pub fn set_or_clear_scale_max_instances<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_max_instances = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_memory_limit][crate::model::App::scale_memory_limit].
    pub fn set_scale_memory_limit<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_memory_limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_memory_limit][crate::model::App::scale_memory_limit].
    pub fn set_or_clear_scale_memory_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_memory_limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_min_instances][crate::model::App::scale_min_instances].
    pub fn set_scale_min_instances<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_min_instances = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_min_instances][crate::model::App::scale_min_instances].
    pub fn set_or_clear_scale_min_instances<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_min_instances = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_request_timeout][crate::model::App::scale_request_timeout].
    pub fn set_scale_request_timeout<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_request_timeout = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_request_timeout][crate::model::App::scale_request_timeout].
    pub fn set_or_clear_scale_request_timeout<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_request_timeout = v.map(|x| x.into());
        self
    }

    /// Sets the value of [status][crate::model::App::status].
    pub fn set_status<T: std::convert::Into<crate::model::app::Status>>(mut self, v: T) -> Self {
        self.status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [status][crate::model::App::status].
    pub fn set_or_clear_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::app::Status>,
    {
        self.status = v.map(|x| x.into());
        self
    }

    /// Sets the value of [status_details][crate::model::App::status_details].
    pub fn set_status_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::AppStatusDetails>,
    {
        self.status_details = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [status_details][crate::model::App::status_details].
    pub fn set_or_clear_status_details<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::AppStatusDetails>,
    {
        self.status_details = v.map(|x| x.into());
        self
    }
}

/// The detailed status of an app.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct AppStatusDetails {
    /// Latest app revision that has been created.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub latest_created_revision: std::option::Option<std::string::String>,

    /// Latest app revision that reached a ready state.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub latest_ready_revision: std::option::Option<std::string::String>,

    /// Optional information to provide more context in case of a failed state.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub reason: std::option::Option<std::string::String>,
}

impl AppStatusDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [latest_created_revision][crate::model::AppStatusDetails::latest_created_revision].
    pub fn set_latest_created_revision<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.latest_created_revision = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [latest_created_revision][crate::model::AppStatusDetails::latest_created_revision].
    pub fn set_or_clear_latest_created_revision<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.latest_created_revision = v.map(|x| x.into());
        self
    }

    /// Sets the value of [latest_ready_revision][crate::model::AppStatusDetails::latest_ready_revision].
    pub fn set_latest_ready_revision<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.latest_ready_revision = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [latest_ready_revision][crate::model::AppStatusDetails::latest_ready_revision].
    pub fn set_or_clear_latest_ready_revision<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.latest_ready_revision = v.map(|x| x.into());
        self
    }

    /// Sets the value of [reason][crate::model::AppStatusDetails::reason].
    pub fn set_reason<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.reason = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [reason][crate::model::AppStatusDetails::reason].
    pub fn set_or_clear_reason<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.reason = v.map(|x| x.into());
        self
    }
}

/// The request body to create an app.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct AppPrototype {
    /// The port the app listens on.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub image_port: std::option::Option<i64>,

    /// The name of the image used by the app.
    pub image_reference: std::string::String,

    /// The name of the image registry access secret.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub image_secret: std::option::Option<std::string::String>,

    /// Which domain mappings are managed for the app.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub managed_domain_mappings: std::option::Option<crate::model::ManagedDomainMappings>,

    /// The name of the app.
    pub name: std::string::String,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub probe_liveness: std::option::Option<crate::model::ProbePrototype>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub probe_readiness: std::option::Option<crate::model::ProbePrototype>,

    /// Arguments for the container entrypoint.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub run_arguments: std::vec::Vec<std::string::String>,

    /// The user ID (UID) to run the container as.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub run_as_user: std::option::Option<i64>,

    /// Commands replacing the entrypoint of the image.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub run_commands: std::vec::Vec<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub run_compute_resource_token_enabled: std::option::Option<bool>,

    /// References to config maps, secrets, or literal values exposed as
    /// environment variables.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub run_env_variables: std::vec::Vec<crate::model::EnvVarPrototype>,

    /// The name of the service account.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub run_service_account: std::option::Option<crate::model::ServiceAccount>,

    /// Mounts of config maps or secrets.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub run_volume_mounts: std::vec::Vec<crate::model::VolumeMountPrototype>,

    /// The maximum number of requests processed concurrently per instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_concurrency: std::option::Option<i64>,

    /// The threshold of concurrent requests per instance that triggers scaling.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_concurrency_target: std::option::Option<i64>,

    /// The number of CPU assigned to each instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_cpu_limit: std::option::Option<std::string::String>,

    /// Seconds to wait before scaling down.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_down_delay: std::option::Option<i64>,

    /// The amount of ephemeral storage per instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_ephemeral_storage_limit: std::option::Option<std::string::String>,

    /// The number of instances created when the app is created.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_initial_instances: std::option::Option<i64>,

    /// The maximum number of instances.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_max_instances: std::option::Option<i64>,

    /// The amount of memory per instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_memory_limit: std::option::Option<std::string::String>,

    /// The minimum number of instances.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_min_instances: std::option::Option<i64>,

    /// The amount of time in seconds allowed to process a request.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_request_timeout: std::option::Option<i64>,
}

impl AppPrototype {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [image_port][crate::model::AppPrototype::image_port].
    pub fn set_image_port<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.image_port = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [image_port][crate::model::AppPrototype::image_port].
    pub fn set_or_clear_image_port<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.image_port = v.map(|x| x.into());
        self
    }

    /// Sets the value of [image_reference][crate::model::AppPrototype::image_reference].
    pub fn set_image_reference<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.image_reference = v.into();
        self
    }

    /// Sets the value of [image_secret][crate::model::AppPrototype::image_secret].
    pub fn set_image_secret<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.image_secret = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [image_secret][crate::model::AppPrototype::image_secret].
    pub fn set_or_clear_image_secret<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.image_secret = v.map(|x| x.into());
        self
    }

    /// Sets the value of [managed_domain_mappings][crate::model::AppPrototype::managed_domain_mappings].
    pub fn set_managed_domain_mappings<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ManagedDomainMappings>,
    {
        self.managed_domain_mappings = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [managed_domain_mappings][crate::model::AppPrototype::managed_domain_mappings].
    pub fn set_or_clear_managed_domain_mappings<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ManagedDomainMappings>,
    {
        self.managed_domain_mappings = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::AppPrototype::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [probe_liveness][crate::model::AppPrototype::probe_liveness].
    pub fn set_probe_liveness<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ProbePrototype>,
    {
        self.probe_liveness = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [probe_liveness][crate::model::AppPrototype::probe_liveness].
    pub fn set_or_clear_probe_liveness<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ProbePrototype>,
    {
        self.probe_liveness = v.map(|x| x.into());
        self
    }

    /// Sets the value of [probe_readiness][crate::model::AppPrototype::probe_readiness].
    pub fn set_probe_readiness<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ProbePrototype>,
    {
        self.probe_readiness = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [probe_readiness][crate::model::AppPrototype::probe_readiness].
    pub fn set_or_clear_probe_readiness<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ProbePrototype>,
    {
        self.probe_readiness = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_arguments][crate::model::AppPrototype::run_arguments].
    pub fn set_run_arguments<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.run_arguments = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [run_as_user][crate::model::AppPrototype::run_as_user].
    pub fn set_run_as_user<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.run_as_user = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [run_as_user][crate::model::AppPrototype::run_as_user].
    pub fn set_or_clear_run_as_user<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.run_as_user = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_commands][crate::model::AppPrototype::run_commands].
    pub fn set_run_commands<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.run_commands = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [run_compute_resource_token_enabled][crate::model::AppPrototype::run_compute_resource_token_enabled].
    pub fn set_run_compute_resource_token_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.run_compute_resource_token_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [run_compute_resource_token_enabled][crate::model::AppPrototype::run_compute_resource_token_enabled].
    pub fn set_or_clear_run_compute_resource_token_enabled<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.run_compute_resource_token_enabled = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_env_variables][crate::model::AppPrototype::run_env_variables].
    pub fn set_run_env_variables<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::EnvVarPrototype>,
    {
        use std::iter::Iterator;
        self.run_env_variables = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [run_service_account][crate::model::AppPrototype::run_service_account].
    pub fn set_run_service_account<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ServiceAccount>,
    {
        self.run_service_account = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [run_service_account][crate::model::AppPrototype::run_service_account].
    pub fn set_or_clear_run_service_account<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ServiceAccount>,
    {
        self.run_service_account = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_volume_mounts][crate::model::AppPrototype::run_volume_mounts].
    pub fn set_run_volume_mounts<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::VolumeMountPrototype>,
    {
        use std::iter::Iterator;
        self.run_volume_mounts = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [scale_concurrency][crate::model::AppPrototype::scale_concurrency].
    pub fn set_scale_concurrency<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_concurrency = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_concurrency][crate::model::AppPrototype::scale_concurrency].
    pub fn set_or_clear_scale_concurrency<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_concurrency = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_concurrency_target][crate::model::AppPrototype::scale_concurrency_target].
    pub fn set_scale_concurrency_target<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_concurrency_target = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_concurrency_target][crate::model::AppPrototype::scale_concurrency_target].
    pub fn set_or_clear_scale_concurrency_target<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_concurrency_target = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_cpu_limit][crate::model::AppPrototype::scale_cpu_limit].
    pub fn set_scale_cpu_limit<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.scale_cpu_limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_cpu_limit][crate::model::AppPrototype::scale_cpu_limit].
    pub fn set_or_clear_scale_cpu_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_cpu_limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_down_delay][crate::model::AppPrototype::scale_down_delay].
    pub fn set_scale_down_delay<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_down_delay = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_down_delay][crate::model::AppPrototype::scale_down_delay].
    pub fn set_or_clear_scale_down_delay<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_down_delay = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_ephemeral_storage_limit][crate::model::AppPrototype::scale_ephemeral_storage_limit].
    pub fn set_scale_ephemeral_storage_limit<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_ephemeral_storage_limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_ephemeral_storage_limit][crate::model::AppPrototype::scale_ephemeral_storage_limit].
    pub fn set_or_clear_scale_ephemeral_storage_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_ephemeral_storage_limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_initial_instances][crate::model::AppPrototype::scale_initial_instances].
    pub fn set_scale_initial_instances<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_initial_instances = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_initial_instances][crate::model::AppPrototype::scale_initial_instances].
    pub fn set_or_clear_scale_initial_instances<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_initial_instances = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_max_instances][crate::model::AppPrototype::scale_max_instances].
    pub fn set_scale_max_instances<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_max_instances = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_max_instances][crate::model::AppPrototype::scale_max_instances].
    pub fn set_or_clear_scale_max_instances<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_max_instances = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_memory_limit][crate::model::AppPrototype::scale_memory_limit].
    pub fn set_scale_memory_limit<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_memory_limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_memory_limit][crate::model::AppPrototype::scale_memory_limit].
    pub fn set_or_clear_scale_memory_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_memory_limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_min_instances][crate::model::AppPrototype::scale_min_instances].
    pub fn set_scale_min_instances<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_min_instances = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_min_instances][crate::model::AppPrototype::scale_min_instances].
    pub fn set_or_clear_scale_min_instances<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_min_instances = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_request_timeout][crate::model::AppPrototype::scale_request_timeout].
    pub fn set_scale_request_timeout<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_request_timeout = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_request_timeout][crate::model::AppPrototype::scale_request_timeout].
    pub fn set_or_clear_scale_request_timeout<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_request_timeout = v.map(|x| x.into());
        self
    }
}

/// The changes to apply to an app.
///
/// Only the fields set to a value are sent, see [gax::patch::AsPatch].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct AppPatch {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub image_port: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub image_reference: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub image_secret: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub managed_domain_mappings: std::option::Option<crate::model::ManagedDomainMappings>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub probe_liveness: std::option::Option<crate::model::ProbePrototype>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub probe_readiness: std::option::Option<crate::model::ProbePrototype>,

    /// Arguments for the container entrypoint.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub run_arguments: std::option::Option<std::vec::Vec<std::string::String>>,

    /// The user ID (UID) to run the container as.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub run_as_user: std::option::Option<i64>,

    /// Commands replacing the entrypoint of the image.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub run_commands: std::option::Option<std::vec::Vec<std::string::String>>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub run_compute_resource_token_enabled: std::option::Option<bool>,

    /// References to config maps, secrets, or literal values exposed as
    /// environment variables.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub run_env_variables: std::option::Option<std::vec::Vec<crate::model::EnvVarPrototype>>,

    /// The name of the service account.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub run_service_account: std::option::Option<crate::model::ServiceAccount>,

    /// Mounts of config maps or secrets.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub run_volume_mounts: std::option::Option<std::vec::Vec<crate::model::VolumeMountPrototype>>,

    /// The maximum number of requests processed concurrently per instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_concurrency: std::option::Option<i64>,

    /// The threshold of concurrent requests per instance that triggers scaling.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_concurrency_target: std::option::Option<i64>,

    /// The number of CPU assigned to each instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_cpu_limit: std::option::Option<std::string::String>,

    /// Seconds to wait before scaling down.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_down_delay: std::option::Option<i64>,

    /// The amount of ephemeral storage per instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_ephemeral_storage_limit: std::option::Option<std::string::String>,

    /// The number of instances created when the app is created.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_initial_instances: std::option::Option<i64>,

    /// The maximum number of instances.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_max_instances: std::option::Option<i64>,

    /// The amount of memory per instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_memory_limit: std::option::Option<std::string::String>,

    /// The minimum number of instances.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_min_instances: std::option::Option<i64>,

    /// The amount of time in seconds allowed to process a request.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_request_timeout: std::option::Option<i64>,
}

impl AppPatch {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [image_port][crate::model::AppPatch::image_port].
    pub fn set_image_port<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.image_port = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [image_port][crate::model::AppPatch::image_port].
    pub fn set_or_clear_image_port<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.image_port = v.map(|x| x.into());
        self
    }

    /// Sets the value of [image_reference][crate::model::AppPatch::image_reference].
    pub fn set_image_reference<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.image_reference = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [image_reference][crate::model::AppPatch::image_reference].
    pub fn set_or_clear_image_reference<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.image_reference = v.map(|x| x.into());
        self
    }

    /// Sets the value of [image_secret][crate::model::AppPatch::image_secret].
    pub fn set_image_secret<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.image_secret = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [image_secret][crate::model::AppPatch::image_secret].
    pub fn set_or_clear_image_secret<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.image_secret = v.map(|x| x.into());
        self
    }

    /// Sets the value of [managed_domain_mappings][crate::model::AppPatch::managed_domain_mappings].
    pub fn set_managed_domain_mappings<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ManagedDomainMappings>,
    {
        self.managed_domain_mappings = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [managed_domain_mappings][crate::model::AppPatch::managed_domain_mappings].
    pub fn set_or_clear_managed_domain_mappings<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ManagedDomainMappings>,
    {
        self.managed_domain_mappings = v.map(|x| x.into());
        self
    }

    /// Sets the value of [probe_liveness][crate::model::AppPatch::probe_liveness].
    pub fn set_probe_liveness<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ProbePrototype>,
    {
        self.probe_liveness = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [probe_liveness][crate::model::AppPatch::probe_liveness].
    pub fn set_or_clear_probe_liveness<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ProbePrototype>,
    {
        self.probe_liveness = v.map(|x| x.into());
        self
    }

    /// Sets the value of [probe_readiness][crate::model::AppPatch::probe_readiness].
    pub fn set_probe_readiness<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ProbePrototype>,
    {
        self.probe_readiness = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [probe_readiness][crate::model::AppPatch::probe_readiness].
    pub fn set_or_clear_probe_readiness<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ProbePrototype>,
    {
        self.probe_readiness = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_arguments][crate::model::AppPatch::run_arguments].
    ///
    /// An empty list clears the field on the service, use
    /// [set_or_clear_run_arguments][Self::set_or_clear_run_arguments] to leave it unchanged.
    pub fn set_run_arguments<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.run_arguments = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [run_arguments][crate::model::AppPatch::run_arguments].
    pub fn set_or_clear_run_arguments<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.run_arguments = v.map(|v| v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [run_as_user][crate::model::AppPatch::run_as_user].
    pub fn set_run_as_user<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.run_as_user = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [run_as_user][crate::model::AppPatch::run_as_user].
    pub fn set_or_clear_run_as_user<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.run_as_user = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_commands][crate::model::AppPatch::run_commands].
    ///
    /// An empty list clears the field on the service, use
    /// [set_or_clear_run_commands][Self::set_or_clear_run_commands] to leave it unchanged.
    pub fn set_run_commands<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.run_commands = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [run_commands][crate::model::AppPatch::run_commands].
    pub fn set_or_clear_run_commands<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.run_commands = v.map(|v| v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [run_compute_resource_token_enabled][crate::model::AppPatch::run_compute_resource_token_enabled].
    pub fn set_run_compute_resource_token_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.run_compute_resource_token_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [run_compute_resource_token_enabled][crate::model::AppPatch::run_compute_resource_token_enabled].
    pub fn set_or_clear_run_compute_resource_token_enabled<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.run_compute_resource_token_enabled = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_env_variables][crate::model::AppPatch::run_env_variables].
    ///
    /// An empty list clears the field on the service, use
    /// [set_or_clear_run_env_variables][Self::set_or_clear_run_env_variables] to leave it unchanged.
    pub fn set_run_env_variables<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::EnvVarPrototype>,
    {
        use std::iter::Iterator;
        self.run_env_variables = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [run_env_variables][crate::model::AppPatch::run_env_variables].
    pub fn set_or_clear_run_env_variables<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::EnvVarPrototype>,
    {
        use std::iter::Iterator;
        self.run_env_variables = v.map(|v| v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [run_service_account][crate::model::AppPatch::run_service_account].
    pub fn set_run_service_account<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ServiceAccount>,
    {
        self.run_service_account = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [run_service_account][crate::model::AppPatch::run_service_account].
    pub fn set_or_clear_run_service_account<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ServiceAccount>,
    {
        self.run_service_account = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_volume_mounts][crate::model::AppPatch::run_volume_mounts].
    ///
    /// An empty list clears the field on the service, use
    /// [set_or_clear_run_volume_mounts][Self::set_or_clear_run_volume_mounts] to leave it unchanged.
    pub fn set_run_volume_mounts<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::VolumeMountPrototype>,
    {
        use std::iter::Iterator;
        self.run_volume_mounts = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [run_volume_mounts][crate::model::AppPatch::run_volume_mounts].
    pub fn set_or_clear_run_volume_mounts<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::VolumeMountPrototype>,
    {
        use std::iter::Iterator;
        self.run_volume_mounts = v.map(|v| v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [scale_concurrency][crate::model::AppPatch::scale_concurrency].
    pub fn set_scale_concurrency<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_concurrency = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_concurrency][crate::model::AppPatch::scale_concurrency].
    pub fn set_or_clear_scale_concurrency<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_concurrency = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_concurrency_target][crate::model::AppPatch::scale_concurrency_target].
    pub fn set_scale_concurrency_target<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_concurrency_target = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_concurrency_target][crate::model::AppPatch::scale_concurrency_target].
    pub fn set_or_clear_scale_concurrency_target<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_concurrency_target = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_cpu_limit][crate::model::AppPatch::scale_cpu_limit].
    pub fn set_scale_cpu_limit<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.scale_cpu_limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_cpu_limit][crate::model::AppPatch::scale_cpu_limit].
    pub fn set_or_clear_scale_cpu_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_cpu_limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_down_delay][crate::model::AppPatch::scale_down_delay].
    pub fn set_scale_down_delay<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_down_delay = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_down_delay][crate::model::AppPatch::scale_down_delay].
    pub fn set_or_clear_scale_down_delay<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_down_delay = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_ephemeral_storage_limit][crate::model::AppPatch::scale_ephemeral_storage_limit].
    pub fn set_scale_ephemeral_storage_limit<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_ephemeral_storage_limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_ephemeral_storage_limit][crate::model::AppPatch::scale_ephemeral_storage_limit].
    pub fn set_or_clear_scale_ephemeral_storage_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_ephemeral_storage_limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_initial_instances][crate::model::AppPatch::scale_initial_instances].
    pub fn set_scale_initial_instances<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_initial_instances = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_initial_instances][crate::model::AppPatch::scale_initial_instances].
    pub fn set_or_clear_scale_initial_instances<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_initial_instances = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_max_instances][crate::model::AppPatch::scale_max_instances].
    pub fn set_scale_max_instances<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_max_instances = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_max_instances][crate::model::AppPatch::scale_max_instances].
    pub fn set_or_clear_scale_max_instances<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_max_instances = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_memory_limit][crate::model::AppPatch::scale_memory_limit].
    pub fn set_scale_memory_limit<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_memory_limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_memory_limit][crate::model::AppPatch::scale_memory_limit].
    pub fn set_or_clear_scale_memory_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_memory_limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_min_instances][crate::model::AppPatch::scale_min_instances].
    pub fn set_scale_min_instances<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_min_instances = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_min_instances][crate::model::AppPatch::scale_min_instances].
    pub fn set_or_clear_scale_min_instances<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_min_instances = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_request_timeout][crate::model::AppPatch::scale_request_timeout].
    pub fn set_scale_request_timeout<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_request_timeout = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_request_timeout][crate::model::AppPatch::scale_request_timeout].
    pub fn set_or_clear_scale_request_timeout<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_request_timeout = v.map(|x| x.into());
        self
    }
}

/// A page of apps.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct AppList {
    /// The apps in this page.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub apps: std::vec::Vec<crate::model::App>,

    /// Describes a page of the collection.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub first: std::option::Option<crate::model::ListFirstMetadata>,

    /// Maximum number of resources per page.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub limit: std::option::Option<i64>,

    /// Describes the next page, absent on the last page.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next: std::option::Option<crate::model::ListNextMetadata>,
}

impl AppList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [apps][crate::model::AppList::apps].
    pub fn set_apps<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::App>,
    {
        use std::iter::Iterator;
        self.apps = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [first][crate::model::AppList::first].
    pub fn set_first<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ListFirstMetadata>,
    {
        self.first = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [first][crate::model::AppList::first].
    pub fn set_or_clear_first<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ListFirstMetadata>,
    {
        self.first = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::AppList::limit].
    pub fn set_limit<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::AppList::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next][crate::model::AppList::next].
    pub fn set_next<T: std::convert::Into<crate::model::ListNextMetadata>>(mut self, v: T) -> Self {
        self.next = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next][crate::model::AppList::next].
    pub fn set_or_clear_next<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ListNextMetadata>,
    {
        self.next = v.map(|x| x.into());
        self
    }
}

impl gax::paginator::internal::PageableResponse for AppList {
    type PageItem = crate::model::App;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.apps
    }

    fn next_page_token(&self) -> std::string::String {
        self.next
            .as_ref()
            .and_then(crate::model::ListNextMetadata::start_token)
            .unwrap_or_default()
    }
}

/// A revision of a Code Engine app.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct AppRevision {
    /// The name of the app this revision belongs to.
    pub app_name: std::string::String,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub computed_env_variables: std::vec::Vec<crate::model::EnvVar>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub created_at: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub href: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub image_port: std::option::Option<i64>,

    pub image_reference: std::string::String,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub image_secret: std::option::Option<std::string::String>,

    /// The name of the revision.
    pub name: std::string::String,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub probe_liveness: std::option::Option<crate::model::Probe>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub probe_readiness: std::option::Option<crate::model::Probe>,

    /// The ID of the project the resource belongs to.
    pub project_id: std::string::String,

    /// The region the project is located in.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub region: std::option::Option<std::string::String>,

    /// The type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_type: std::option::Option<std::string::String>,

    /// Arguments for the container entrypoint.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub run_arguments: std::vec::Vec<std::string::String>,

    /// The user ID (UID) to run the container as.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub run_as_user: std::option::Option<i64>,

    /// Commands replacing the entrypoint of the image.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub run_commands: std::vec::Vec<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub run_compute_resource_token_enabled: std::option::Option<bool>,

    /// References to config maps, secrets, or literal values exposed as
    /// environment variables.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub run_env_variables: std::vec::Vec<crate::model::EnvVar>,

    /// The name of the service account.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub run_service_account: std::option::Option<crate::model::ServiceAccount>,

    /// Mounts of config maps or secrets.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub run_volume_mounts: std::vec::Vec<crate::model::VolumeMount>,

    /// The maximum number of requests processed concurrently per instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_concurrency: std::option::Option<i64>,

    /// The threshold of concurrent requests per instance that triggers scaling.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_concurrency_target: std::option::Option<i64>,

    /// The number of CPU assigned to each instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_cpu_limit: std::option::Option<std::string::String>,

    /// Seconds to wait before scaling down.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_down_delay: std::option::Option<i64>,

    /// The amount of ephemeral storage per instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_ephemeral_storage_limit: std::option::Option<std::string::String>,

    /// The number of instances created when the app is created.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_initial_instances: std::option::Option<i64>,

    /// The maximum number of instances.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_max_instances: std::option::Option<i64>,

    /// The amount of memory per instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_memory_limit: std::option::Option<std::string::String>,

    /// The minimum number of instances.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_min_instances: std::option::Option<i64>,

    /// The amount of time in seconds allowed to process a request.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_request_timeout: std::option::Option<i64>,

    /// The current status of the revision.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<crate::model::app_revision::Status>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status_details: std::option::Option<crate::model::AppRevisionStatusDetails>,
}

impl AppRevision {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [app_name][crate::model::AppRevision::app_name].
    pub fn set_app_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.app_name = v.into();
        self
    }

    /// Sets the value of [computed_env_variables][crate::model::AppRevision::computed_env_variables].
    pub fn set_computed_env_variables<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::EnvVar>,
    {
        use std::iter::Iterator;
        self.computed_env_variables = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [created_at][crate::model::AppRevision::created_at].
    pub fn set_created_at<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.created_at = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [created_at][crate::model::AppRevision::created_at].
    pub fn set_or_clear_created_at<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.created_at = v.map(|x| x.into());
        self
    }

    /// Sets the value of [href][crate::model::AppRevision::href].
    pub fn set_href<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.href = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [href][crate::model::AppRevision::href].
    pub fn set_or_clear_href<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.href = v.map(|x| x.into());
        self
    }

    /// Sets the value of [id][crate::model::AppRevision::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::AppRevision::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [image_port][crate::model::AppRevision::image_port].
    pub fn set_image_port<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.image_port = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [image_port][crate::model::AppRevision::image_port].
    pub fn set_or_clear_image_port<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.image_port = v.map(|x| x.into());
        self
    }

    /// Sets the value of [image_reference][crate::model::AppRevision::image_reference].
    pub fn set_image_reference<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.image_reference = v.into();
        self
    }

    /// Sets the value of [image_secret][crate::model::AppRevision::image_secret].
    pub fn set_image_secret<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.image_secret = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [image_secret][crate::model::AppRevision::image_secret].
    pub fn set_or_clear_image_secret<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.image_secret = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::AppRevision::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [probe_liveness][crate::model::AppRevision::probe_liveness].
    pub fn set_probe_liveness<T: std::convert::Into<crate::model::Probe>>(mut self, v: T) -> Self {
        self.probe_liveness = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [probe_liveness][crate::model::AppRevision::probe_liveness].
    pub fn set_or_clear_probe_liveness<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Probe>,
    {
        self.probe_liveness = v.map(|x| x.into());
        self
    }

    /// Sets the value of [probe_readiness][crate::model::AppRevision::probe_readiness].
    pub fn set_probe_readiness<T: std::convert::Into<crate::model::Probe>>(mut self, v: T) -> Self {
        self.probe_readiness = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [probe_readiness][crate::model::AppRevision::probe_readiness].
    pub fn set_or_clear_probe_readiness<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Probe>,
    {
        self.probe_readiness = v.map(|x| x.into());
        self
    }

    /// Sets the value of [project_id][crate::model::AppRevision::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [region][crate::model::AppRevision::region].
    pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.region = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [region][crate::model::AppRevision::region].
    pub fn set_or_clear_region<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resource_type][crate::model::AppRevision::resource_type].
    pub fn set_resource_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.resource_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_type][crate::model::AppRevision::resource_type].
    pub fn set_or_clear_resource_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_arguments][crate::model::AppRevision::run_arguments].
    pub fn set_run_arguments<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.run_arguments = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [run_as_user][crate::model::AppRevision::run_as_user].
    pub fn set_run_as_user<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.run_as_user = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [run_as_user][crate::model::AppRevision::run_as_user].
    pub fn set_or_clear_run_as_user<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.run_as_user = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_commands][crate::model::AppRevision::run_commands].
    pub fn set_run_commands<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.run_commands = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [run_compute_resource_token_enabled][crate::model::AppRevision::run_compute_resource_token_enabled].
    pub fn set_run_compute_resource_token_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.run_compute_resource_token_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [run_compute_resource_token_enabled][crate::model::AppRevision::run_compute_resource_token_enabled].
    pub fn set_or_clear_run_compute_resource_token_enabled<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.run_compute_resource_token_enabled = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_env_variables][crate::model::AppRevision::run_env_variables].
    pub fn set_run_env_variables<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::EnvVar>,
    {
        use std::iter::Iterator;
        self.run_env_variables = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [run_service_account][crate::model::AppRevision::run_service_account].
    pub fn set_run_service_account<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ServiceAccount>,
    {
        self.run_service_account = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [run_service_account][crate::model::AppRevision::run_service_account].
    pub fn set_or_clear_run_service_account<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ServiceAccount>,
    {
        self.run_service_account = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_volume_mounts][crate::model::AppRevision::run_volume_mounts].
    pub fn set_run_volume_mounts<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::VolumeMount>,
    {
        use std::iter::Iterator;
        self.run_volume_mounts = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [scale_concurrency][crate::model::AppRevision::scale_concurrency].
    pub fn set_scale_concurrency<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_concurrency = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_concurrency][crate::model::AppRevision::scale_concurrency].
    pub fn set_or_clear_scale_concurrency<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_concurrency = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_concurrency_target][crate::model::AppRevision::scale_concurrency_target].
    pub fn set_scale_concurrency_target<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_concurrency_target = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_concurrency_target][crate::model::AppRevision::scale_concurrency_target].
    pub fn set_or_clear_scale_concurrency_target<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_concurrency_target = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_cpu_limit][crate::model::AppRevision::scale_cpu_limit].
    pub fn set_scale_cpu_limit<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.scale_cpu_limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_cpu_limit][crate::model::AppRevision::scale_cpu_limit].
    pub fn set_or_clear_scale_cpu_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_cpu_limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_down_delay][crate::model::AppRevision::scale_down_delay].
    pub fn set_scale_down_delay<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_down_delay = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_down_delay][crate::model::AppRevision::scale_down_delay].
    pub fn set_or_clear_scale_down_delay<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_down_delay = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_ephemeral_storage_limit][crate::model::AppRevision::scale_ephemeral_storage_limit].
    pub fn set_scale_ephemeral_storage_limit<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_ephemeral_storage_limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_ephemeral_storage_limit][crate::model::AppRevision::scale_ephemeral_storage_limit].
    pub fn set_or_clear_scale_ephemeral_storage_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_ephemeral_storage_limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_initial_instances][crate::model::AppRevision::scale_initial_instances].
    pub fn set_scale_initial_instances<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_initial_instances = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_initial_instances][crate::model::AppRevision::scale_initial_instances].
    pub fn set_or_clear_scale_initial_instances<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_initial_instances = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_max_instances][crate::model::AppRevision::scale_max_instances].
    pub fn set_scale_max_instances<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_max_instances = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_max_instances][crate::model::AppRevision::scale_max_instances].
    pub fn set_or_clear_scale_max_instances<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_max_instances = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_memory_limit][crate::model::AppRevision::scale_memory_limit].
    pub fn set_scale_memory_limit<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_memory_limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_memory_limit][crate::model::AppRevision::scale_memory_limit].
    pub fn set_or_clear_scale_memory_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_memory_limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_min_instances][crate::model::AppRevision::scale_min_instances].
    pub fn set_scale_min_instances<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_min_instances = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_min_instances][crate::model::AppRevision::scale_min_instances].
    pub fn set_or_clear_scale_min_instances<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_min_instances = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_request_timeout][crate::model::AppRevision::scale_request_timeout].
    pub fn set_scale_request_timeout<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_request_timeout = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_request_timeout][crate::model::AppRevision::scale_request_timeout].
    pub fn set_or_clear_scale_request_timeout<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_request_timeout = v.map(|x| x.into());
        self
    }

    /// Sets the value of [status][crate::model::AppRevision::status].
    pub fn set_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::app_revision::Status>,
    {
        self.status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [status][crate::model::AppRevision::status].
    pub fn set_or_clear_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::app_revision::Status>,
    {
        self.status = v.map(|x| x.into());
        self
    }

    /// Sets the value of [status_details][crate::model::AppRevision::status_details].
    pub fn set_status_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::AppRevisionStatusDetails>,
    {
        self.status_details = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [status_details][crate::model::AppRevision::status_details].
    pub fn set_or_clear_status_details<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::AppRevisionStatusDetails>,
    {
        self.status_details = v.map(|x| x.into());
        self
    }
}

/// The detailed status of an app revision.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct AppRevisionStatusDetails {
    /// The number of running instances of the revision.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub actual_instances: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub reason: std::option::Option<std::string::String>,
}

impl AppRevisionStatusDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [actual_instances][crate::model::AppRevisionStatusDetails::actual_instances].
    pub fn set_actual_instances<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.actual_instances = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [actual_instances][crate::model::AppRevisionStatusDetails::actual_instances].
    pub fn set_or_clear_actual_instances<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.actual_instances = v.map(|x| x.into());
        self
    }

    /// Sets the value of [reason][crate::model::AppRevisionStatusDetails::reason].
    pub fn set_reason<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.reason = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [reason][crate::model::AppRevisionStatusDetails::reason].
    pub fn set_or_clear_reason<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.reason = v.map(|x| x.into());
        self
    }
}

/// A page of app revisions.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct AppRevisionList {
    /// Describes a page of the collection.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub first: std::option::Option<crate::model::ListFirstMetadata>,

    /// Maximum number of resources per page.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub limit: std::option::Option<i64>,

    /// Describes the next page, absent on the last page.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next: std::option::Option<crate::model::ListNextMetadata>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub revisions: std::vec::Vec<crate::model::AppRevision>,
}

impl AppRevisionList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [first][crate::model::AppRevisionList::first].
    pub fn set_first<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ListFirstMetadata>,
    {
        self.first = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [first][crate::model::AppRevisionList::first].
    pub fn set_or_clear_first<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ListFirstMetadata>,
    {
        self.first = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::AppRevisionList::limit].
    pub fn set_limit<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::AppRevisionList::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next][crate::model::AppRevisionList::next].
    pub fn set_next<T: std::convert::Into<crate::model::ListNextMetadata>>(mut self, v: T) -> Self {
        self.next = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next][crate::model::AppRevisionList::next].
    pub fn set_or_clear_next<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ListNextMetadata>,
    {
        self.next = v.map(|x| x.into());
        self
    }

    /// Sets the value of [revisions][crate::model::AppRevisionList::revisions].
    pub fn set_revisions<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::AppRevision>,
    {
        use std::iter::Iterator;
        self.revisions = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl gax::paginator::internal::PageableResponse for AppRevisionList {
    type PageItem = crate::model::AppRevision;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.revisions
    }

    fn next_page_token(&self) -> std::string::String {
        self.next
            .as_ref()
            .and_then(crate::model::ListNextMetadata::start_token)
            .unwrap_or_default()
    }
}

/// A running instance of an app revision.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct AppInstance {
    pub app_name: std::string::String,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub created_at: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub href: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    pub name: std::string::String,

    /// The ID of the project the resource belongs to.
    pub project_id: std::string::String,

    /// The region the project is located in.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub region: std::option::Option<std::string::String>,

    /// The type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_type: std::option::Option<std::string::String>,

    /// The number of restarts of the app instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub restarts: std::option::Option<i64>,

    pub revision_name: std::string::String,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_cpu_limit: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_ephemeral_storage_limit: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_memory_limit: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<crate::model::app_instance::Status>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub system_container: std::option::Option<crate::model::ContainerStatus>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub user_container: std::option::Option<crate::model::ContainerStatus>,
}

impl AppInstance {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [app_name][crate::model::AppInstance::app_name].
    pub fn set_app_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.app_name = v.into();
        self
    }

    /// Sets the value of [created_at][crate::model::AppInstance::created_at].
    pub fn set_created_at<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.created_at = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [created_at][crate::model::AppInstance::created_at].
    pub fn set_or_clear_created_at<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.created_at = v.map(|x| x.into());
        self
    }

    /// Sets the value of [href][crate::model::AppInstance::href].
    pub fn set_href<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.href = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [href][crate::model::AppInstance::href].
    pub fn set_or_clear_href<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.href = v.map(|x| x.into());
        self
    }

    /// Sets the value of [id][crate::model::AppInstance::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::AppInstance::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::AppInstance::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [project_id][crate::model::AppInstance::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [region][crate::model::AppInstance::region].
    pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.region = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [region][crate::model::AppInstance::region].
    pub fn set_or_clear_region<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resource_type][crate::model::AppInstance::resource_type].
    pub fn set_resource_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.resource_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_type][crate::model::AppInstance::resource_type].
    pub fn set_or_clear_resource_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [restarts][crate::model::AppInstance::restarts].
    pub fn set_restarts<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.restarts = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [restarts][crate::model::AppInstance::restarts].
    pub fn set_or_clear_restarts<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.restarts = v.map(|x| x.into());
        self
    }

    /// Sets the value of [revision_name][crate::model::AppInstance::revision_name].
    pub fn set_revision_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.revision_name = v.into();
        self
    }

    /// Sets the value of [scale_cpu_limit][crate::model::AppInstance::scale_cpu_limit].
    pub fn set_scale_cpu_limit<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.scale_cpu_limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_cpu_limit][crate::model::AppInstance::scale_cpu_limit].
    pub fn set_or_clear_scale_cpu_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_cpu_limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_ephemeral_storage_limit][crate::model::AppInstance::scale_ephemeral_storage_limit].
    pub fn set_scale_ephemeral_storage_limit<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_ephemeral_storage_limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_ephemeral_storage_limit][crate::model::AppInstance::scale_ephemeral_storage_limit].
    pub fn set_or_clear_scale_ephemeral_storage_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_ephemeral_storage_limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_memory_limit][crate::model::AppInstance::scale_memory_limit].
    pub fn set_scale_memory_limit<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_memory_limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_memory_limit][crate::model::AppInstance::scale_memory_limit].
    pub fn set_or_clear_scale_memory_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_memory_limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [status][crate::model::AppInstance::status].
    pub fn set_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::app_instance::Status>,
    {
        self.status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [status][crate::model::AppInstance::status].
    pub fn set_or_clear_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::app_instance::Status>,
    {
        self.status = v.map(|x| x.into());
        self
    }

    /// Sets the value of [system_container][crate::model::AppInstance::system_container].
    pub fn set_system_container<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ContainerStatus>,
    {
        self.system_container = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [system_container][crate::model::AppInstance::system_container].
    pub fn set_or_clear_system_container<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ContainerStatus>,
    {
        self.system_container = v.map(|x| x.into());
        self
    }

    /// Sets the value of [user_container][crate::model::AppInstance::user_container].
    pub fn set_user_container<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ContainerStatus>,
    {
        self.user_container = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [user_container][crate::model::AppInstance::user_container].
    pub fn set_or_clear_user_container<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ContainerStatus>,
    {
        self.user_container = v.map(|x| x.into());
        self
    }
}

/// The status of a container.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ContainerStatus {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub current_state: std::option::Option<crate::model::ContainerStatusDetails>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub last_observed_state: std::option::Option<crate::model::ContainerStatusDetails>,
}

impl ContainerStatus {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [current_state][crate::model::ContainerStatus::current_state].
    pub fn set_current_state<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ContainerStatusDetails>,
    {
        self.current_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [current_state][crate::model::ContainerStatus::current_state].
    pub fn set_or_clear_current_state<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ContainerStatusDetails>,
    {
        self.current_state = v.map(|x| x.into());
        self
    }

    /// Sets the value of [last_observed_state][crate::model::ContainerStatus::last_observed_state].
    pub fn set_last_observed_state<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ContainerStatusDetails>,
    {
        self.last_observed_state = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [last_observed_state][crate::model::ContainerStatus::last_observed_state].
    pub fn set_or_clear_last_observed_state<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ContainerStatusDetails>,
    {
        self.last_observed_state = v.map(|x| x.into());
        self
    }
}

/// The state of a container at some point in time.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ContainerStatusDetails {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub completed_at: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub container_status: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub exit_code: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub reason: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub started_at: std::option::Option<std::string::String>,
}

impl ContainerStatusDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [completed_at][crate::model::ContainerStatusDetails::completed_at].
    pub fn set_completed_at<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.completed_at = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [completed_at][crate::model::ContainerStatusDetails::completed_at].
    pub fn set_or_clear_completed_at<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.completed_at = v.map(|x| x.into());
        self
    }

    /// Sets the value of [container_status][crate::model::ContainerStatusDetails::container_status].
    pub fn set_container_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.container_status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [container_status][crate::model::ContainerStatusDetails::container_status].
    pub fn set_or_clear_container_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.container_status = v.map(|x| x.into());
        self
    }

    /// Sets the value of [exit_code][crate::model::ContainerStatusDetails::exit_code].
    pub fn set_exit_code<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.exit_code = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [exit_code][crate::model::ContainerStatusDetails::exit_code].
    pub fn set_or_clear_exit_code<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.exit_code = v.map(|x| x.into());
        self
    }

    /// Sets the value of [reason][crate::model::ContainerStatusDetails::reason].
    pub fn set_reason<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.reason = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [reason][crate::model::ContainerStatusDetails::reason].
    pub fn set_or_clear_reason<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.reason = v.map(|x| x.into());
        self
    }

    /// Sets the value of [started_at][crate::model::ContainerStatusDetails::started_at].
    pub fn set_started_at<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.started_at = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [started_at][crate::model::ContainerStatusDetails::started_at].
    pub fn set_or_clear_started_at<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.started_at = v.map(|x| x.into());
        self
    }
}

/// A page of app instances.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct AppInstanceList {
    /// Describes a page of the collection.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub first: std::option::Option<crate::model::ListFirstMetadata>,

    /// Maximum number of resources per page.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub limit: std::option::Option<i64>,

    /// Describes the next page, absent on the last page.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next: std::option::Option<crate::model::ListNextMetadata>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub instances: std::vec::Vec<crate::model::AppInstance>,
}

impl AppInstanceList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [first][crate::model::AppInstanceList::first].
    pub fn set_first<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ListFirstMetadata>,
    {
        self.first = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [first][crate::model::AppInstanceList::first].
    pub fn set_or_clear_first<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ListFirstMetadata>,
    {
        self.first = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::AppInstanceList::limit].
    pub fn set_limit<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::AppInstanceList::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next][crate::model::AppInstanceList::next].
    pub fn set_next<T: std::convert::Into<crate::model::ListNextMetadata>>(mut self, v: T) -> Self {
        self.next = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next][crate::model::AppInstanceList::next].
    pub fn set_or_clear_next<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ListNextMetadata>,
    {
        self.next = v.map(|x| x.into());
        self
    }

    /// Sets the value of [instances][crate::model::AppInstanceList::instances].
    pub fn set_instances<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::AppInstance>,
    {
        use std::iter::Iterator;
        self.instances = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl gax::paginator::internal::PageableResponse for AppInstanceList {
    type PageItem = crate::model::AppInstance;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.instances
    }

    fn next_page_token(&self) -> std::string::String {
        self.next
            .as_ref()
            .and_then(crate::model::ListNextMetadata::start_token)
            .unwrap_or_default()
    }
}

/// A Code Engine job.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Job {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub build: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub build_run: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub computed_env_variables: std::vec::Vec<crate::model::EnvVar>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub created_at: std::option::Option<std::string::String>,

    /// The version of the job instance, used to achieve optimistic locking.
    pub entity_tag: std::string::String,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub href: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    /// The name of the image used by the job.
    pub image_reference: std::string::String,

    /// The name of the image registry access secret.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub image_secret: std::option::Option<std::string::String>,

    /// The name of the job.
    pub name: std::string::String,

    /// The ID of the project the resource belongs to.
    pub project_id: std::string::String,

    /// The region the project is located in.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub region: std::option::Option<std::string::String>,

    /// The type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_type: std::option::Option<std::string::String>,

    /// Arguments for the container entrypoint.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub run_arguments: std::vec::Vec<std::string::String>,

    /// The user ID (UID) to run the container as.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub run_as_user: std::option::Option<i64>,

    /// Commands replacing the entrypoint of the image.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub run_commands: std::vec::Vec<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub run_compute_resource_token_enabled: std::option::Option<bool>,

    /// References to config maps, secrets, or literal values exposed as
    /// environment variables.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub run_env_variables: std::vec::Vec<crate::model::EnvVar>,

    /// The mode for runs of the job.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub run_mode: std::option::Option<crate::model::JobRunMode>,

    /// The name of the service account.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub run_service_account: std::option::Option<crate::model::ServiceAccount>,

    /// Mounts of config maps or secrets.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub run_volume_mounts: std::vec::Vec<crate::model::VolumeMount>,

    /// The indices of the array job, for example `1-5,7-8,10`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_array_spec: std::option::Option<std::string::String>,

    /// The number of CPU assigned to each instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_cpu_limit: std::option::Option<std::string::String>,

    /// The amount of ephemeral storage per instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_ephemeral_storage_limit: std::option::Option<std::string::String>,

    /// The maximum execution time in seconds for runs of the job.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_max_execution_time: std::option::Option<i64>,

    /// The amount of memory per instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_memory_limit: std::option::Option<std::string::String>,

    /// The number of times to rerun an instance of the job before it is marked
    /// as failed.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_retry_limit: std::option::Option<i64>,
}

impl Job {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [build][crate::model::Job::build].
    pub fn set_build<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.build = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [build][crate::model::Job::build].
    pub fn set_or_clear_build<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.build = v.map(|x| x.into());
        self
    }

    /// Sets the value of [build_run][crate::model::Job::build_run].
    pub fn set_build_run<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.build_run = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [build_run][crate::model::Job::build_run].
    pub fn set_or_clear_build_run<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.build_run = v.map(|x| x.into());
        self
    }

    /// Sets the value of [computed_env_variables][crate::model::Job::computed_env_variables].
    pub fn set_computed_env_variables<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::EnvVar>,
    {
        use std::iter::Iterator;
        self.computed_env_variables = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [created_at][crate::model::Job::created_at].
    pub fn set_created_at<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.created_at = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [created_at][crate::model::Job::created_at].
    pub fn set_or_clear_created_at<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.created_at = v.map(|x| x.into());
        self
    }

    /// Sets the value of [entity_tag][crate::model::Job::entity_tag].
    pub fn set_entity_tag<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_tag = v.into();
        self
    }

    /// Sets the value of [href][crate::model::Job::href].
    pub fn set_href<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.href = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [href][crate::model::Job::href].
    pub fn set_or_clear_href<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.href = v.map(|x| x.into());
        self
    }

    /// Sets the value of [id][crate::model::Job::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::Job::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [image_reference][crate::model::Job::image_reference].
    pub fn set_image_reference<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.image_reference = v.into();
        self
    }

    /// Sets the value of [image_secret][crate::model::Job::image_secret].
    pub fn set_image_secret<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.image_secret = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [image_secret][crate::model::Job::image_secret].
    pub fn set_or_clear_image_secret<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.image_secret = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::Job::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [project_id][crate::model::Job::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [region][crate::model::Job::region].
    pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.region = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [region][crate::model::Job::region].
    pub fn set_or_clear_region<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resource_type][crate::model::Job::resource_type].
    pub fn set_resource_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.resource_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_type][crate::model::Job::resource_type].
    pub fn set_or_clear_resource_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_arguments][crate::model::Job::run_arguments].
    pub fn set_run_arguments<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.run_arguments = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [run_as_user][crate::model::Job::run_as_user].
    pub fn set_run_as_user<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.run_as_user = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [run_as_user][crate::model::Job::run_as_user].
    pub fn set_or_clear_run_as_user<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.run_as_user = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_commands][crate::model::Job::run_commands].
    pub fn set_run_commands<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.run_commands = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [run_compute_resource_token_enabled][crate::model::Job::run_compute_resource_token_enabled].
    pub fn set_run_compute_resource_token_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.run_compute_resource_token_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [run_compute_resource_token_enabled][crate::model::Job::run_compute_resource_token_enabled].
    pub fn set_or_clear_run_compute_resource_token_enabled<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.run_compute_resource_token_enabled = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_env_variables][crate::model::Job::run_env_variables].
    pub fn set_run_env_variables<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::EnvVar>,
    {
        use std::iter::Iterator;
        self.run_env_variables = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [run_mode][crate::model::Job::run_mode].
    pub fn set_run_mode<T: std::convert::Into<crate::model::JobRunMode>>(mut self, v: T) -> Self {
        self.run_mode = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [run_mode][crate::model::Job::run_mode].
    pub fn set_or_clear_run_mode<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::JobRunMode>,
    {
        self.run_mode = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_service_account][crate::model::Job::run_service_account].
    pub fn set_run_service_account<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ServiceAccount>,
    {
        self.run_service_account = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [run_service_account][crate::model::Job::run_service_account].
    pub fn set_or_clear_run_service_account<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ServiceAccount>,
    {
        self.run_service_account = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_volume_mounts][crate::model::Job::run_volume_mounts].
    pub fn set_run_volume_mounts<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::VolumeMount>,
    {
        use std::iter::Iterator;
        self.run_volume_mounts = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [scale_array_spec][crate::model::Job::scale_array_spec].
    pub fn set_scale_array_spec<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_array_spec = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_array_spec][crate::model::Job::scale_array_spec].
    pub fn set_or_clear_scale_array_spec<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_array_spec = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_cpu_limit][crate::model::Job::scale_cpu_limit].
    pub fn set_scale_cpu_limit<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.scale_cpu_limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_cpu_limit][crate::model::Job::scale_cpu_limit].
    pub fn set_or_clear_scale_cpu_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_cpu_limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_ephemeral_storage_limit][crate::model::Job::scale_ephemeral_storage_limit].
    pub fn set_scale_ephemeral_storage_limit<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_ephemeral_storage_limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_ephemeral_storage_limit][crate::model::Job::scale_ephemeral_storage_limit].
    pub fn set_or_clear_scale_ephemeral_storage_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_ephemeral_storage_limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_max_execution_time][crate::model::Job::scale_max_execution_time].
    pub fn set_scale_max_execution_time<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_max_execution_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_max_execution_time][crate::model::Job::scale_max_execution_time].
    pub fn set_or_clear_scale_max_execution_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_max_execution_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_memory_limit][crate::model::Job::scale_memory_limit].
    pub fn set_scale_memory_limit<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_memory_limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_memory_limit][crate::model::Job::scale_memory_limit].
    pub fn set_or_clear_scale_memory_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_memory_limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_retry_limit][crate::model::Job::scale_retry_limit].
    pub fn set_scale_retry_limit<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_retry_limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_retry_limit][crate::model::Job::scale_retry_limit].
    pub fn set_or_clear_scale_retry_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_retry_limit = v.map(|x| x.into());
        self
    }
}

/// The request body to create a job.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct JobPrototype {
    /// The name of the image used by the job.
    pub image_reference: std::string::String,

    /// The name of the image registry access secret.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub image_secret: std::option::Option<std::string::String>,

    /// The name of the job.
    pub name: std::string::String,

    /// Arguments for the container entrypoint.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub run_arguments: std::vec::Vec<std::string::String>,

    /// The user ID (UID) to run the container as.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub run_as_user: std::option::Option<i64>,

    /// Commands replacing the entrypoint of the image.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub run_commands: std::vec::Vec<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub run_compute_resource_token_enabled: std::option::Option<bool>,

    /// References to config maps, secrets, or literal values exposed as
    /// environment variables.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub run_env_variables: std::vec::Vec<crate::model::EnvVarPrototype>,

    /// The mode for runs of the job.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub run_mode: std::option::Option<crate::model::JobRunMode>,

    /// The name of the service account.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub run_service_account: std::option::Option<crate::model::ServiceAccount>,

    /// Mounts of config maps or secrets.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub run_volume_mounts: std::vec::Vec<crate::model::VolumeMountPrototype>,

    /// The indices of the array job, for example `1-5,7-8,10`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_array_spec: std::option::Option<std::string::String>,

    /// The number of CPU assigned to each instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_cpu_limit: std::option::Option<std::string::String>,

    /// The amount of ephemeral storage per instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_ephemeral_storage_limit: std::option::Option<std::string::String>,

    /// The maximum execution time in seconds for runs of the job.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_max_execution_time: std::option::Option<i64>,

    /// The amount of memory per instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_memory_limit: std::option::Option<std::string::String>,

    /// The number of times to rerun an instance of the job before it is marked
    /// as failed.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_retry_limit: std::option::Option<i64>,
}

impl JobPrototype {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [image_reference][crate::model::JobPrototype::image_reference].
    pub fn set_image_reference<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.image_reference = v.into();
        self
    }

    /// Sets the value of [image_secret][crate::model::JobPrototype::image_secret].
    pub fn set_image_secret<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.image_secret = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [image_secret][crate::model::JobPrototype::image_secret].
    pub fn set_or_clear_image_secret<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.image_secret = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::JobPrototype::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [run_arguments][crate::model::JobPrototype::run_arguments].
    pub fn set_run_arguments<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.run_arguments = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [run_as_user][crate::model::JobPrototype::run_as_user].
    pub fn set_run_as_user<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.run_as_user = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [run_as_user][crate::model::JobPrototype::run_as_user].
    pub fn set_or_clear_run_as_user<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.run_as_user = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_commands][crate::model::JobPrototype::run_commands].
    pub fn set_run_commands<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.run_commands = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [run_compute_resource_token_enabled][crate::model::JobPrototype::run_compute_resource_token_enabled].
    pub fn set_run_compute_resource_token_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.run_compute_resource_token_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [run_compute_resource_token_enabled][crate::model::JobPrototype::run_compute_resource_token_enabled].
    pub fn set_or_clear_run_compute_resource_token_enabled<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.run_compute_resource_token_enabled = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_env_variables][crate::model::JobPrototype::run_env_variables].
    pub fn set_run_env_variables<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::EnvVarPrototype>,
    {
        use std::iter::Iterator;
        self.run_env_variables = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [run_mode][crate::model::JobPrototype::run_mode].
    pub fn set_run_mode<T: std::convert::Into<crate::model::JobRunMode>>(mut self, v: T) -> Self {
        self.run_mode = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [run_mode][crate::model::JobPrototype::run_mode].
    pub fn set_or_clear_run_mode<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::JobRunMode>,
    {
        self.run_mode = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_service_account][crate::model::JobPrototype::run_service_account].
    pub fn set_run_service_account<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ServiceAccount>,
    {
        self.run_service_account = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [run_service_account][crate::model::JobPrototype::run_service_account].
    pub fn set_or_clear_run_service_account<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ServiceAccount>,
    {
        self.run_service_account = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_volume_mounts][crate::model::JobPrototype::run_volume_mounts].
    pub fn set_run_volume_mounts<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::VolumeMountPrototype>,
    {
        use std::iter::Iterator;
        self.run_volume_mounts = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [scale_array_spec][crate::model::JobPrototype::scale_array_spec].
    pub fn set_scale_array_spec<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_array_spec = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_array_spec][crate::model::JobPrototype::scale_array_spec].
    pub fn set_or_clear_scale_array_spec<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_array_spec = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_cpu_limit][crate::model::JobPrototype::scale_cpu_limit].
    pub fn set_scale_cpu_limit<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.scale_cpu_limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_cpu_limit][crate::model::JobPrototype::scale_cpu_limit].
    pub fn set_or_clear_scale_cpu_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_cpu_limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_ephemeral_storage_limit][crate::model::JobPrototype::scale_ephemeral_storage_limit].
    pub fn set_scale_ephemeral_storage_limit<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_ephemeral_storage_limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_ephemeral_storage_limit][crate::model::JobPrototype::scale_ephemeral_storage_limit].
    pub fn set_or_clear_scale_ephemeral_storage_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_ephemeral_storage_limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_max_execution_time][crate::model::JobPrototype::scale_max_execution_time].
    pub fn set_scale_max_execution_time<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_max_execution_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_max_execution_time][crate::model::JobPrototype::scale_max_execution_time].
    pub fn set_or_clear_scale_max_execution_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_max_execution_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_memory_limit][crate::model::JobPrototype::scale_memory_limit].
    pub fn set_scale_memory_limit<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_memory_limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_memory_limit][crate::model::JobPrototype::scale_memory_limit].
    pub fn set_or_clear_scale_memory_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_memory_limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_retry_limit][crate::model::JobPrototype::scale_retry_limit].
    pub fn set_scale_retry_limit<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_retry_limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_retry_limit][crate::model::JobPrototype::scale_retry_limit].
    pub fn set_or_clear_scale_retry_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_retry_limit = v.map(|x| x.into());
        self
    }
}

/// The changes to apply to a job.
///
/// Only the fields set to a value are sent, see [gax::patch::AsPatch].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct JobPatch {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub image_reference: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub image_secret: std::option::Option<std::string::String>,

    /// Arguments for the container entrypoint.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub run_arguments: std::option::Option<std::vec::Vec<std::string::String>>,

    /// The user ID (UID) to run the container as.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub run_as_user: std::option::Option<i64>,

    /// Commands replacing the entrypoint of the image.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub run_commands: std::option::Option<std::vec::Vec<std::string::String>>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub run_compute_resource_token_enabled: std::option::Option<bool>,

    /// References to config maps, secrets, or literal values exposed as
    /// environment variables.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub run_env_variables: std::option::Option<std::vec::Vec<crate::model::EnvVarPrototype>>,

    /// The mode for runs of the job.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub run_mode: std::option::Option<crate::model::JobRunMode>,

    /// The name of the service account.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub run_service_account: std::option::Option<crate::model::ServiceAccount>,

    /// Mounts of config maps or secrets.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub run_volume_mounts: std::option::Option<std::vec::Vec<crate::model::VolumeMountPrototype>>,

    /// The indices of the array job, for example `1-5,7-8,10`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_array_spec: std::option::Option<std::string::String>,

    /// The number of CPU assigned to each instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_cpu_limit: std::option::Option<std::string::String>,

    /// The amount of ephemeral storage per instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_ephemeral_storage_limit: std::option::Option<std::string::String>,

    /// The maximum execution time in seconds for runs of the job.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_max_execution_time: std::option::Option<i64>,

    /// The amount of memory per instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_memory_limit: std::option::Option<std::string::String>,

    /// The number of times to rerun an instance of the job before it is marked
    /// as failed.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_retry_limit: std::option::Option<i64>,
}

impl JobPatch {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [image_reference][crate::model::JobPatch::image_reference].
    pub fn set_image_reference<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.image_reference = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [image_reference][crate::model::JobPatch::image_reference].
    pub fn set_or_clear_image_reference<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.image_reference = v.map(|x| x.into());
        self
    }

    /// Sets the value of [image_secret][crate::model::JobPatch::image_secret].
    pub fn set_image_secret<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.image_secret = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [image_secret][crate::model::JobPatch::image_secret].
    pub fn set_or_clear_image_secret<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.image_secret = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_arguments][crate::model::JobPatch::run_arguments].
    ///
    /// An empty list clears the field on the service, use
    /// [set_or_clear_run_arguments][Self::set_or_clear_run_arguments] to leave it unchanged.
    pub fn set_run_arguments<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.run_arguments = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [run_arguments][crate::model::JobPatch::run_arguments].
    pub fn set_or_clear_run_arguments<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.run_arguments = v.map(|v| v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [run_as_user][crate::model::JobPatch::run_as_user].
    pub fn set_run_as_user<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.run_as_user = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [run_as_user][crate::model::JobPatch::run_as_user].
    pub fn set_or_clear_run_as_user<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.run_as_user = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_commands][crate::model::JobPatch::run_commands].
    ///
    /// An empty list clears the field on the service, use
    /// [set_or_clear_run_commands][Self::set_or_clear_run_commands] to leave it unchanged.
    pub fn set_run_commands<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.run_commands = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [run_commands][crate::model::JobPatch::run_commands].
    pub fn set_or_clear_run_commands<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.run_commands = v.map(|v| v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [run_compute_resource_token_enabled][crate::model::JobPatch::run_compute_resource_token_enabled].
    pub fn set_run_compute_resource_token_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.run_compute_resource_token_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [run_compute_resource_token_enabled][crate::model::JobPatch::run_compute_resource_token_enabled].
    pub fn set_or_clear_run_compute_resource_token_enabled<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.run_compute_resource_token_enabled = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_env_variables][crate::model::JobPatch::run_env_variables].
    ///
    /// An empty list clears the field on the service, use
    /// [set_or_clear_run_env_variables][Self::set_or_clear_run_env_variables] to leave it unchanged.
    pub fn set_run_env_variables<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::EnvVarPrototype>,
    {
        use std::iter::Iterator;
        self.run_env_variables = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [run_env_variables][crate::model::JobPatch::run_env_variables].
    pub fn set_or_clear_run_env_variables<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::EnvVarPrototype>,
    {
        use std::iter::Iterator;
        self.run_env_variables = v.map(|v| v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [run_mode][crate::model::JobPatch::run_mode].
    pub fn set_run_mode<T: std::convert::Into<crate::model::JobRunMode>>(mut self, v: T) -> Self {
        self.run_mode = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [run_mode][crate::model::JobPatch::run_mode].
    pub fn set_or_clear_run_mode<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::JobRunMode>,
    {
        self.run_mode = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_service_account][crate::model::JobPatch::run_service_account].
    pub fn set_run_service_account<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ServiceAccount>,
    {
        self.run_service_account = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [run_service_account][crate::model::JobPatch::run_service_account].
    pub fn set_or_clear_run_service_account<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ServiceAccount>,
    {
        self.run_service_account = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_volume_mounts][crate::model::JobPatch::run_volume_mounts].
    ///
    /// An empty list clears the field on the service, use
    /// [set_or_clear_run_volume_mounts][Self::set_or_clear_run_volume_mounts] to leave it unchanged.
    pub fn set_run_volume_mounts<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::VolumeMountPrototype>,
    {
        use std::iter::Iterator;
        self.run_volume_mounts = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [run_volume_mounts][crate::model::JobPatch::run_volume_mounts].
    pub fn set_or_clear_run_volume_mounts<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::VolumeMountPrototype>,
    {
        use std::iter::Iterator;
        self.run_volume_mounts = v.map(|v| v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [scale_array_spec][crate::model::JobPatch::scale_array_spec].
    pub fn set_scale_array_spec<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_array_spec = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_array_spec][crate::model::JobPatch::scale_array_spec].
    pub fn set_or_clear_scale_array_spec<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_array_spec = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_cpu_limit][crate::model::JobPatch::scale_cpu_limit].
    pub fn set_scale_cpu_limit<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.scale_cpu_limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_cpu_limit][crate::model::JobPatch::scale_cpu_limit].
    pub fn set_or_clear_scale_cpu_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_cpu_limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_ephemeral_storage_limit][crate::model::JobPatch::scale_ephemeral_storage_limit].
    pub fn set_scale_ephemeral_storage_limit<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_ephemeral_storage_limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_ephemeral_storage_limit][crate::model::JobPatch::scale_ephemeral_storage_limit].
    pub fn set_or_clear_scale_ephemeral_storage_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_ephemeral_storage_limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_max_execution_time][crate::model::JobPatch::scale_max_execution_time].
    pub fn set_scale_max_execution_time<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_max_execution_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_max_execution_time][crate::model::JobPatch::scale_max_execution_time].
    pub fn set_or_clear_scale_max_execution_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_max_execution_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_memory_limit][crate::model::JobPatch::scale_memory_limit].
    pub fn set_scale_memory_limit<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_memory_limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_memory_limit][crate::model::JobPatch::scale_memory_limit].
    pub fn set_or_clear_scale_memory_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_memory_limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_retry_limit][crate::model::JobPatch::scale_retry_limit].
    pub fn set_scale_retry_limit<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_retry_limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_retry_limit][crate::model::JobPatch::scale_retry_limit].
    pub fn set_or_clear_scale_retry_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_retry_limit = v.map(|x| x.into());
        self
    }
}

/// A page of jobs.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct JobList {
    /// Describes a page of the collection.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub first: std::option::Option<crate::model::ListFirstMetadata>,

    /// Maximum number of resources per page.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub limit: std::option::Option<i64>,

    /// Describes the next page, absent on the last page.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next: std::option::Option<crate::model::ListNextMetadata>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub jobs: std::vec::Vec<crate::model::Job>,
}

impl JobList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [first][crate::model::JobList::first].
    pub fn set_first<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ListFirstMetadata>,
    {
        self.first = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [first][crate::model::JobList::first].
    pub fn set_or_clear_first<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ListFirstMetadata>,
    {
        self.first = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::JobList::limit].
    pub fn set_limit<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::JobList::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next][crate::model::JobList::next].
    pub fn set_next<T: std::convert::Into<crate::model::ListNextMetadata>>(mut self, v: T) -> Self {
        self.next = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next][crate::model::JobList::next].
    pub fn set_or_clear_next<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ListNextMetadata>,
    {
        self.next = v.map(|x| x.into());
        self
    }

    /// Sets the value of [jobs][crate::model::JobList::jobs].
    pub fn set_jobs<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Job>,
    {
        use std::iter::Iterator;
        self.jobs = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl gax::paginator::internal::PageableResponse for JobList {
    type PageItem = crate::model::Job;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.jobs
    }

    fn next_page_token(&self) -> std::string::String {
        self.next
            .as_ref()
            .and_then(crate::model::ListNextMetadata::start_token)
            .unwrap_or_default()
    }
}

/// A run of a Code Engine job.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct JobRun {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub computed_env_variables: std::vec::Vec<crate::model::EnvVar>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub created_at: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub href: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub image_reference: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub image_secret: std::option::Option<std::string::String>,

    /// The name of the job this run belongs to, if any.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub job_name: std::option::Option<std::string::String>,

    /// The name of the job run.
    pub name: std::string::String,

    /// The ID of the project the resource belongs to.
    pub project_id: std::string::String,

    /// The region the project is located in.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub region: std::option::Option<std::string::String>,

    /// The type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_type: std::option::Option<std::string::String>,

    /// Arguments for the container entrypoint.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub run_arguments: std::vec::Vec<std::string::String>,

    /// The user ID (UID) to run the container as.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub run_as_user: std::option::Option<i64>,

    /// Commands replacing the entrypoint of the image.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub run_commands: std::vec::Vec<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub run_compute_resource_token_enabled: std::option::Option<bool>,

    /// References to config maps, secrets, or literal values exposed as
    /// environment variables.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub run_env_variables: std::vec::Vec<crate::model::EnvVar>,

    /// The mode for runs of the job.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub run_mode: std::option::Option<crate::model::JobRunMode>,

    /// The name of the service account.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub run_service_account: std::option::Option<crate::model::ServiceAccount>,

    /// Mounts of config maps or secrets.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub run_volume_mounts: std::vec::Vec<crate::model::VolumeMount>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_array_size_variable_override: std::option::Option<i64>,

    /// The indices of the array job, for example `1-5,7-8,10`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_array_spec: std::option::Option<std::string::String>,

    /// The number of CPU assigned to each instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_cpu_limit: std::option::Option<std::string::String>,

    /// The amount of ephemeral storage per instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_ephemeral_storage_limit: std::option::Option<std::string::String>,

    /// The maximum execution time in seconds for runs of the job.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_max_execution_time: std::option::Option<i64>,

    /// The amount of memory per instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_memory_limit: std::option::Option<std::string::String>,

    /// The number of times to rerun an instance of the job before it is marked
    /// as failed.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_retry_limit: std::option::Option<i64>,

    /// The current status of the job run.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<crate::model::job_run::Status>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status_details: std::option::Option<crate::model::JobRunStatus>,
}

impl JobRun {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [computed_env_variables][crate::model::JobRun::computed_env_variables].
    pub fn set_computed_env_variables<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::EnvVar>,
    {
        use std::iter::Iterator;
        self.computed_env_variables = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [created_at][crate::model::JobRun::created_at].
    pub fn set_created_at<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.created_at = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [created_at][crate::model::JobRun::created_at].
    pub fn set_or_clear_created_at<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.created_at = v.map(|x| x.into());
        self
    }

    /// Sets the value of [href][crate::model::JobRun::href].
    pub fn set_href<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.href = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [href][crate::model::JobRun::href].
    pub fn set_or_clear_href<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.href = v.map(|x| x.into());
        self
    }

    /// Sets the value of [id][crate::model::JobRun::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::JobRun::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [image_reference][crate::model::JobRun::image_reference].
    pub fn set_image_reference<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.image_reference = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [image_reference][crate::model::JobRun::image_reference].
    pub fn set_or_clear_image_reference<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.image_reference = v.map(|x| x.into());
        self
    }

    /// Sets the value of [image_secret][crate::model::JobRun::image_secret].
    pub fn set_image_secret<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.image_secret = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [image_secret][crate::model::JobRun::image_secret].
    pub fn set_or_clear_image_secret<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.image_secret = v.map(|x| x.into());
        self
    }

    /// Sets the value of [job_name][crate::model::JobRun::job_name].
    pub fn set_job_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.job_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [job_name][crate::model::JobRun::job_name].
    pub fn set_or_clear_job_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.job_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::JobRun::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [project_id][crate::model::JobRun::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [region][crate::model::JobRun::region].
    pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.region = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [region][crate::model::JobRun::region].
    pub fn set_or_clear_region<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resource_type][crate::model::JobRun::resource_type].
    pub fn set_resource_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.resource_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_type][crate::model::JobRun::resource_type].
    pub fn set_or_clear_resource_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_arguments][crate::model::JobRun::run_arguments].
    pub fn set_run_arguments<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.run_arguments = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [run_as_user][crate::model::JobRun::run_as_user].
    pub fn set_run_as_user<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.run_as_user = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [run_as_user][crate::model::JobRun::run_as_user].
    pub fn set_or_clear_run_as_user<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.run_as_user = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_commands][crate::model::JobRun::run_commands].
    pub fn set_run_commands<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.run_commands = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [run_compute_resource_token_enabled][crate::model::JobRun::run_compute_resource_token_enabled].
    pub fn set_run_compute_resource_token_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.run_compute_resource_token_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [run_compute_resource_token_enabled][crate::model::JobRun::run_compute_resource_token_enabled].
    pub fn set_or_clear_run_compute_resource_token_enabled<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.run_compute_resource_token_enabled = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_env_variables][crate::model::JobRun::run_env_variables].
    pub fn set_run_env_variables<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::EnvVar>,
    {
        use std::iter::Iterator;
        self.run_env_variables = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [run_mode][crate::model::JobRun::run_mode].
    pub fn set_run_mode<T: std::convert::Into<crate::model::JobRunMode>>(mut self, v: T) -> Self {
        self.run_mode = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [run_mode][crate::model::JobRun::run_mode].
    pub fn set_or_clear_run_mode<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::JobRunMode>,
    {
        self.run_mode = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_service_account][crate::model::JobRun::run_service_account].
    pub fn set_run_service_account<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ServiceAccount>,
    {
        self.run_service_account = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [run_service_account][crate::model::JobRun::run_service_account].
    pub fn set_or_clear_run_service_account<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ServiceAccount>,
    {
        self.run_service_account = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_volume_mounts][crate::model::JobRun::run_volume_mounts].
    pub fn set_run_volume_mounts<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::VolumeMount>,
    {
        use std::iter::Iterator;
        self.run_volume_mounts = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [scale_array_size_variable_override][crate::model::JobRun::scale_array_size_variable_override].
    pub fn set_scale_array_size_variable_override<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_array_size_variable_override = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_array_size_variable_override][crate::model::JobRun::scale_array_size_variable_override].
    pub fn set_or_clear_scale_array_size_variable_override<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_array_size_variable_override = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_array_spec][crate::model::JobRun::scale_array_spec].
    pub fn set_scale_array_spec<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_array_spec = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_array_spec][crate::model::JobRun::scale_array_spec].
    pub fn set_or_clear_scale_array_spec<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_array_spec = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_cpu_limit][crate::model::JobRun::scale_cpu_limit].
    pub fn set_scale_cpu_limit<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.scale_cpu_limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_cpu_limit][crate::model::JobRun::scale_cpu_limit].
    pub fn set_or_clear_scale_cpu_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_cpu_limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_ephemeral_storage_limit][crate::model::JobRun::scale_ephemeral_storage_limit].
    pub fn set_scale_ephemeral_storage_limit<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_ephemeral_storage_limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_ephemeral_storage_limit][crate::model::JobRun::scale_ephemeral_storage_limit].
    pub fn set_or_clear_scale_ephemeral_storage_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_ephemeral_storage_limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_max_execution_time][crate::model::JobRun::scale_max_execution_time].
    pub fn set_scale_max_execution_time<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_max_execution_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_max_execution_time][crate::model::JobRun::scale_max_execution_time].
    pub fn set_or_clear_scale_max_execution_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_max_execution_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_memory_limit][crate::model::JobRun::scale_memory_limit].
    pub fn set_scale_memory_limit<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_memory_limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_memory_limit][crate::model::JobRun::scale_memory_limit].
    pub fn set_or_clear_scale_memory_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_memory_limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_retry_limit][crate::model::JobRun::scale_retry_limit].
    pub fn set_scale_retry_limit<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_retry_limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_retry_limit][crate::model::JobRun::scale_retry_limit].
    pub fn set_or_clear_scale_retry_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_retry_limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [status][crate::model::JobRun::status].
    pub fn set_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::job_run::Status>,
    {
        self.status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [status][crate::model::JobRun::status].
    pub fn set_or_clear_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::job_run::Status>,
    {
        self.status = v.map(|x| x.into());
        self
    }

    /// Sets the value of [status_details][crate::model::JobRun::status_details].
    pub fn set_status_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::JobRunStatus>,
    {
        self.status_details = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [status_details][crate::model::JobRun::status_details].
    pub fn set_or_clear_status_details<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::JobRunStatus>,
    {
        self.status_details = v.map(|x| x.into());
        self
    }
}

/// The detailed status of a job run.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct JobRunStatus {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub completion_time: std::option::Option<std::string::String>,

    /// Number of failed instances.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub failed: std::option::Option<i64>,

    /// Number of pending instances.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub pending: std::option::Option<i64>,

    /// Number of requested instances.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub requested: std::option::Option<i64>,

    /// Number of running instances.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub running: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub start_time: std::option::Option<std::string::String>,

    /// Number of succeeded instances.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub succeeded: std::option::Option<i64>,

    /// Number of instances with unknown state.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub unknown: std::option::Option<i64>,
}

impl JobRunStatus {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [completion_time][crate::model::JobRunStatus::completion_time].
    pub fn set_completion_time<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.completion_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [completion_time][crate::model::JobRunStatus::completion_time].
    pub fn set_or_clear_completion_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.completion_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [failed][crate::model::JobRunStatus::failed].
    pub fn set_failed<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.failed = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [failed][crate::model::JobRunStatus::failed].
    pub fn set_or_clear_failed<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.failed = v.map(|x| x.into());
        self
    }

    /// Sets the value of [pending][crate::model::JobRunStatus::pending].
    pub fn set_pending<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.pending = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [pending][crate::model::JobRunStatus::pending].
    pub fn set_or_clear_pending<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.pending = v.map(|x| x.into());
        self
    }

    /// Sets the value of [requested][crate::model::JobRunStatus::requested].
    pub fn set_requested<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.requested = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [requested][crate::model::JobRunStatus::requested].
    pub fn set_or_clear_requested<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.requested = v.map(|x| x.into());
        self
    }

    /// Sets the value of [running][crate::model::JobRunStatus::running].
    pub fn set_running<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.running = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [running][crate::model::JobRunStatus::running].
    pub fn set_or_clear_running<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.running = v.map(|x| x.into());
        self
    }

    /// Sets the value of [start_time][crate::model::JobRunStatus::start_time].
    pub fn set_start_time<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.start_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [start_time][crate::model::JobRunStatus::start_time].
    pub fn set_or_clear_start_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.start_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [succeeded][crate::model::JobRunStatus::succeeded].
    pub fn set_succeeded<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.succeeded = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [succeeded][crate::model::JobRunStatus::succeeded].
    pub fn set_or_clear_succeeded<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.succeeded = v.map(|x| x.into());
        self
    }

    /// Sets the value of [unknown][crate::model::JobRunStatus::unknown].
    pub fn set_unknown<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.unknown = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [unknown][crate::model::JobRunStatus::unknown].
    pub fn set_or_clear_unknown<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.unknown = v.map(|x| x.into());
        self
    }
}

/// The request body to run a job.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct JobRunPrototype {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub image_reference: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub image_secret: std::option::Option<std::string::String>,

    /// The name of the job to run, the run carries its own configuration when
    /// absent.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub job_name: std::option::Option<std::string::String>,

    /// The name of the job run, generated when absent.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    /// Arguments for the container entrypoint.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub run_arguments: std::vec::Vec<std::string::String>,

    /// The user ID (UID) to run the container as.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub run_as_user: std::option::Option<i64>,

    /// Commands replacing the entrypoint of the image.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub run_commands: std::vec::Vec<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub run_compute_resource_token_enabled: std::option::Option<bool>,

    /// References to config maps, secrets, or literal values exposed as
    /// environment variables.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub run_env_variables: std::vec::Vec<crate::model::EnvVarPrototype>,

    /// The mode for runs of the job.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub run_mode: std::option::Option<crate::model::JobRunMode>,

    /// The name of the service account.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub run_service_account: std::option::Option<crate::model::ServiceAccount>,

    /// Mounts of config maps or secrets.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub run_volume_mounts: std::vec::Vec<crate::model::VolumeMountPrototype>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_array_size_variable_override: std::option::Option<i64>,

    /// The indices of the array job, for example `1-5,7-8,10`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_array_spec: std::option::Option<std::string::String>,

    /// The number of CPU assigned to each instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_cpu_limit: std::option::Option<std::string::String>,

    /// The amount of ephemeral storage per instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_ephemeral_storage_limit: std::option::Option<std::string::String>,

    /// The maximum execution time in seconds for runs of the job.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_max_execution_time: std::option::Option<i64>,

    /// The amount of memory per instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_memory_limit: std::option::Option<std::string::String>,

    /// The number of times to rerun an instance of the job before it is marked
    /// as failed.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_retry_limit: std::option::Option<i64>,
}

impl JobRunPrototype {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [image_reference][crate::model::JobRunPrototype::image_reference].
    pub fn set_image_reference<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.image_reference = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [image_reference][crate::model::JobRunPrototype::image_reference].
    pub fn set_or_clear_image_reference<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.image_reference = v.map(|x| x.into());
        self
    }

    /// Sets the value of [image_secret][crate::model::JobRunPrototype::image_secret].
    pub fn set_image_secret<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.image_secret = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [image_secret][crate::model::JobRunPrototype::image_secret].
    pub fn set_or_clear_image_secret<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.image_secret = v.map(|x| x.into());
        self
    }

    /// Sets the value of [job_name][crate::model::JobRunPrototype::job_name].
    pub fn set_job_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.job_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [job_name][crate::model::JobRunPrototype::job_name].
    pub fn set_or_clear_job_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.job_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::JobRunPrototype::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::JobRunPrototype::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_arguments][crate::model::JobRunPrototype::run_arguments].
    pub fn set_run_arguments<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.run_arguments = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [run_as_user][crate::model::JobRunPrototype::run_as_user].
    pub fn set_run_as_user<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.run_as_user = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [run_as_user][crate::model::JobRunPrototype::run_as_user].
    pub fn set_or_clear_run_as_user<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.run_as_user = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_commands][crate::model::JobRunPrototype::run_commands].
    pub fn set_run_commands<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.run_commands = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [run_compute_resource_token_enabled][crate::model::JobRunPrototype::run_compute_resource_token_enabled].
    pub fn set_run_compute_resource_token_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.run_compute_resource_token_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [run_compute_resource_token_enabled][crate::model::JobRunPrototype::run_compute_resource_token_enabled].
    pub fn set_or_clear_run_compute_resource_token_enabled<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.run_compute_resource_token_enabled = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_env_variables][crate::model::JobRunPrototype::run_env_variables].
    pub fn set_run_env_variables<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::EnvVarPrototype>,
    {
        use std::iter::Iterator;
        self.run_env_variables = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [run_mode][crate::model::JobRunPrototype::run_mode].
    pub fn set_run_mode<T: std::convert::Into<crate::model::JobRunMode>>(mut self, v: T) -> Self {
        self.run_mode = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [run_mode][crate::model::JobRunPrototype::run_mode].
    pub fn set_or_clear_run_mode<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::JobRunMode>,
    {
        self.run_mode = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_service_account][crate::model::JobRunPrototype::run_service_account].
    pub fn set_run_service_account<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ServiceAccount>,
    {
        self.run_service_account = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [run_service_account][crate::model::JobRunPrototype::run_service_account].
    pub fn set_or_clear_run_service_account<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ServiceAccount>,
    {
        self.run_service_account = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_volume_mounts][crate::model::JobRunPrototype::run_volume_mounts].
    pub fn set_run_volume_mounts<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::VolumeMountPrototype>,
    {
        use std::iter::Iterator;
        self.run_volume_mounts = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [scale_array_size_variable_override][crate::model::JobRunPrototype::scale_array_size_variable_override].
    pub fn set_scale_array_size_variable_override<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_array_size_variable_override = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_array_size_variable_override][crate::model::JobRunPrototype::scale_array_size_variable_override].
    pub fn set_or_clear_scale_array_size_variable_override<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_array_size_variable_override = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_array_spec][crate::model::JobRunPrototype::scale_array_spec].
    pub fn set_scale_array_spec<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_array_spec = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_array_spec][crate::model::JobRunPrototype::scale_array_spec].
    pub fn set_or_clear_scale_array_spec<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_array_spec = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_cpu_limit][crate::model::JobRunPrototype::scale_cpu_limit].
    pub fn set_scale_cpu_limit<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.scale_cpu_limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_cpu_limit][crate::model::JobRunPrototype::scale_cpu_limit].
    pub fn set_or_clear_scale_cpu_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_cpu_limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_ephemeral_storage_limit][crate::model::JobRunPrototype::scale_ephemeral_storage_limit].
    pub fn set_scale_ephemeral_storage_limit<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_ephemeral_storage_limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_ephemeral_storage_limit][crate::model::JobRunPrototype::scale_ephemeral_storage_limit].
    pub fn set_or_clear_scale_ephemeral_storage_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_ephemeral_storage_limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_max_execution_time][crate::model::JobRunPrototype::scale_max_execution_time].
    pub fn set_scale_max_execution_time<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_max_execution_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_max_execution_time][crate::model::JobRunPrototype::scale_max_execution_time].
    pub fn set_or_clear_scale_max_execution_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_max_execution_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_memory_limit][crate::model::JobRunPrototype::scale_memory_limit].
    pub fn set_scale_memory_limit<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_memory_limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_memory_limit][crate::model::JobRunPrototype::scale_memory_limit].
    pub fn set_or_clear_scale_memory_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_memory_limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_retry_limit][crate::model::JobRunPrototype::scale_retry_limit].
    pub fn set_scale_retry_limit<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_retry_limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_retry_limit][crate::model::JobRunPrototype::scale_retry_limit].
    pub fn set_or_clear_scale_retry_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_retry_limit = v.map(|x| x.into());
        self
    }
}

/// A page of job runs.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct JobRunList {
    /// Describes a page of the collection.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub first: std::option::Option<crate::model::ListFirstMetadata>,

    /// Maximum number of resources per page.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub limit: std::option::Option<i64>,

    /// Describes the next page, absent on the last page.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next: std::option::Option<crate::model::ListNextMetadata>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub job_runs: std::vec::Vec<crate::model::JobRun>,
}

impl JobRunList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [first][crate::model::JobRunList::first].
    pub fn set_first<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ListFirstMetadata>,
    {
        self.first = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [first][crate::model::JobRunList::first].
    pub fn set_or_clear_first<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ListFirstMetadata>,
    {
        self.first = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::JobRunList::limit].
    pub fn set_limit<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::JobRunList::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next][crate::model::JobRunList::next].
    pub fn set_next<T: std::convert::Into<crate::model::ListNextMetadata>>(mut self, v: T) -> Self {
        self.next = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next][crate::model::JobRunList::next].
    pub fn set_or_clear_next<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ListNextMetadata>,
    {
        self.next = v.map(|x| x.into());
        self
    }

    /// Sets the value of [job_runs][crate::model::JobRunList::job_runs].
    pub fn set_job_runs<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::JobRun>,
    {
        use std::iter::Iterator;
        self.job_runs = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl gax::paginator::internal::PageableResponse for JobRunList {
    type PageItem = crate::model::JobRun;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.job_runs
    }

    fn next_page_token(&self) -> std::string::String {
        self.next
            .as_ref()
            .and_then(crate::model::ListNextMetadata::start_token)
            .unwrap_or_default()
    }
}

/// A Code Engine build.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Build {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub created_at: std::option::Option<std::string::String>,

    /// The version of the build instance, used to achieve optimistic locking.
    pub entity_tag: std::string::String,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub href: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    /// The name of the build.
    pub name: std::string::String,

    /// The name of the image.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub output_image: std::option::Option<std::string::String>,

    /// The secret required to access the image registry.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub output_secret: std::option::Option<std::string::String>,

    /// The ID of the project the resource belongs to.
    pub project_id: std::string::String,

    /// The region the project is located in.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub region: std::option::Option<std::string::String>,

    /// The type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_type: std::option::Option<std::string::String>,

    /// The directory in the repository that contains the buildpacks file or the
    /// Dockerfile.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_context_dir: std::option::Option<std::string::String>,

    /// Commit, tag, or branch in the source repository.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_revision: std::option::Option<std::string::String>,

    /// The name of the SSH secret with the credentials to access the
    /// repository.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_secret: std::option::Option<std::string::String>,

    /// Where the source code is located.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_type: std::option::Option<crate::model::BuildSourceType>,

    /// The URL of the code repository.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_url: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<crate::model::build::Status>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status_details: std::option::Option<crate::model::BuildStatus>,

    /// The size of the build, which determines the amount of resources used.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub strategy_size: std::option::Option<std::string::String>,

    /// The path to the specification file used for build strategies.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub strategy_spec_file: std::option::Option<std::string::String>,

    /// The strategy to use for building the image, `dockerfile` or
    /// `buildpacks`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub strategy_type: std::option::Option<std::string::String>,

    /// The maximum amount of time in seconds the build can run.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub timeout: std::option::Option<i64>,
}

impl Build {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [created_at][crate::model::Build::created_at].
    pub fn set_created_at<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.created_at = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [created_at][crate::model::Build::created_at].
    pub fn set_or_clear_created_at<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.created_at = v.map(|x| x.into());
        self
    }

    /// Sets the value of [entity_tag][crate::model::Build::entity_tag].
    pub fn set_entity_tag<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_tag = v.into();
        self
    }

    /// Sets the value of [href][crate::model::Build::href].
    pub fn set_href<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.href = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [href][crate::model::Build::href].
    pub fn set_or_clear_href<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.href = v.map(|x| x.into());
        self
    }

    /// Sets the value of [id][crate::model::Build::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::Build::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::Build::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [output_image][crate::model::Build::output_image].
    pub fn set_output_image<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.output_image = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [output_image][crate::model::Build::output_image].
    pub fn set_or_clear_output_image<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.output_image = v.map(|x| x.into());
        self
    }

    /// Sets the value of [output_secret][crate::model::Build::output_secret].
    pub fn set_output_secret<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.output_secret = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [output_secret][crate::model::Build::output_secret].
    pub fn set_or_clear_output_secret<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.output_secret = v.map(|x| x.into());
        self
    }

    /// Sets the value of [project_id][crate::model::Build::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [region][crate::model::Build::region].
    pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.region = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [region][crate::model::Build::region].
    pub fn set_or_clear_region<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resource_type][crate::model::Build::resource_type].
    pub fn set_resource_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.resource_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_type][crate::model::Build::resource_type].
    pub fn set_or_clear_resource_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_context_dir][crate::model::Build::source_context_dir].
    pub fn set_source_context_dir<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_context_dir = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_context_dir][crate::model::Build::source_context_dir].
    pub fn set_or_clear_source_context_dir<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_context_dir = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_revision][crate::model::Build::source_revision].
    pub fn set_source_revision<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_revision = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_revision][crate::model::Build::source_revision].
    pub fn set_or_clear_source_revision<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_revision = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_secret][crate::model::Build::source_secret].
    pub fn set_source_secret<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_secret = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_secret][crate::model::Build::source_secret].
    pub fn set_or_clear_source_secret<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_secret = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_type][crate::model::Build::source_type].
    pub fn set_source_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::BuildSourceType>,
    {
        self.source_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_type][crate::model::Build::source_type].
    pub fn set_or_clear_source_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::BuildSourceType>,
    {
        self.source_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_url][crate::model::Build::source_url].
    pub fn set_source_url<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_url = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_url][crate::model::Build::source_url].
    pub fn set_or_clear_source_url<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_url = v.map(|x| x.into());
        self
    }

    /// Sets the value of [status][crate::model::Build::status].
    pub fn set_status<T: std::convert::Into<crate::model::build::Status>>(mut self, v: T) -> Self {
        self.status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [status][crate::model::Build::status].
    pub fn set_or_clear_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::build::Status>,
    {
        self.status = v.map(|x| x.into());
        self
    }

    /// Sets the value of [status_details][crate::model::Build::status_details].
    pub fn set_status_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::BuildStatus>,
    {
        self.status_details = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [status_details][crate::model::Build::status_details].
    pub fn set_or_clear_status_details<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::BuildStatus>,
    {
        self.status_details = v.map(|x| x.into());
        self
    }

    /// Sets the value of [strategy_size][crate::model::Build::strategy_size].
    pub fn set_strategy_size<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.strategy_size = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [strategy_size][crate::model::Build::strategy_size].
    pub fn set_or_clear_strategy_size<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.strategy_size = v.map(|x| x.into());
        self
    }

    /// Sets the value of [strategy_spec_file][crate::model::Build::strategy_spec_file].
    pub fn set_strategy_spec_file<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.strategy_spec_file = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [strategy_spec_file][crate::model::Build::strategy_spec_file].
    pub fn set_or_clear_strategy_spec_file<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.strategy_spec_file = v.map(|x| x.into());
        self
    }

    /// Sets the value of [strategy_type][crate::model::Build::strategy_type].
    pub fn set_strategy_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.strategy_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [strategy_type][crate::model::Build::strategy_type].
    pub fn set_or_clear_strategy_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.strategy_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [timeout][crate::model::Build::timeout].
    pub fn set_timeout<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.timeout = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [timeout][crate::model::Build::timeout].
    pub fn set_or_clear_timeout<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.timeout = v.map(|x| x.into());
        self
    }
}

/// The detailed status of a build.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct BuildStatus {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub reason: std::option::Option<std::string::String>,
}

impl BuildStatus {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [reason][crate::model::BuildStatus::reason].
    pub fn set_reason<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.reason = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [reason][crate::model::BuildStatus::reason].
    pub fn set_or_clear_reason<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.reason = v.map(|x| x.into());
        self
    }
}

/// The request body to create a build.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct BuildPrototype {
    /// The name of the build.
    pub name: std::string::String,

    /// The name of the image.
    pub output_image: std::string::String,

    /// The secret required to access the image registry.
    pub output_secret: std::string::String,

    /// The directory in the repository that contains the buildpacks file or the
    /// Dockerfile.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_context_dir: std::option::Option<std::string::String>,

    /// Commit, tag, or branch in the source repository.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_revision: std::option::Option<std::string::String>,

    /// The name of the SSH secret with the credentials to access the
    /// repository.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_secret: std::option::Option<std::string::String>,

    /// Where the source code is located.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_type: std::option::Option<crate::model::BuildSourceType>,

    /// The URL of the code repository.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_url: std::option::Option<std::string::String>,

    /// The size of the build, which determines the amount of resources used.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub strategy_size: std::option::Option<std::string::String>,

    /// The path to the specification file used for build strategies.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub strategy_spec_file: std::option::Option<std::string::String>,

    /// The strategy to use for building the image.
    pub strategy_type: std::string::String,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub timeout: std::option::Option<i64>,
}

impl BuildPrototype {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::BuildPrototype::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [output_image][crate::model::BuildPrototype::output_image].
    pub fn set_output_image<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.output_image = v.into();
        self
    }

    /// Sets the value of [output_secret][crate::model::BuildPrototype::output_secret].
    pub fn set_output_secret<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.output_secret = v.into();
        self
    }

    /// Sets the value of [source_context_dir][crate::model::BuildPrototype::source_context_dir].
    pub fn set_source_context_dir<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_context_dir = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_context_dir][crate::model::BuildPrototype::source_context_dir].
    pub fn set_or_clear_source_context_dir<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_context_dir = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_revision][crate::model::BuildPrototype::source_revision].
    pub fn set_source_revision<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_revision = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_revision][crate::model::BuildPrototype::source_revision].
    pub fn set_or_clear_source_revision<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_revision = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_secret][crate::model::BuildPrototype::source_secret].
    pub fn set_source_secret<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_secret = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_secret][crate::model::BuildPrototype::source_secret].
    pub fn set_or_clear_source_secret<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_secret = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_type][crate::model::BuildPrototype::source_type].
    pub fn set_source_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::BuildSourceType>,
    {
        self.source_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_type][crate::model::BuildPrototype::source_type].
    pub fn set_or_clear_source_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::BuildSourceType>,
    {
        self.source_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_url][crate::model::BuildPrototype::source_url].
    pub fn set_source_url<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_url = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_url][crate::model::BuildPrototype::source_url].
    pub fn set_or_clear_source_url<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_url = v.map(|x| x.into());
        self
    }

    /// Sets the value of [strategy_size][crate::model::BuildPrototype::strategy_size].
    pub fn set_strategy_size<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.strategy_size = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [strategy_size][crate::model::BuildPrototype::strategy_size].
    pub fn set_or_clear_strategy_size<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.strategy_size = v.map(|x| x.into());
        self
    }

    /// Sets the value of [strategy_spec_file][crate::model::BuildPrototype::strategy_spec_file].
    pub fn set_strategy_spec_file<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.strategy_spec_file = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [strategy_spec_file][crate::model::BuildPrototype::strategy_spec_file].
    pub fn set_or_clear_strategy_spec_file<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.strategy_spec_file = v.map(|x| x.into());
        self
    }

    /// Sets the value of [strategy_type][crate::model::BuildPrototype::strategy_type].
    pub fn set_strategy_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.strategy_type = v.into();
        self
    }

    /// Sets the value of [timeout][crate::model::BuildPrototype::timeout].
    pub fn set_timeout<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.timeout = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [timeout][crate::model::BuildPrototype::timeout].
    pub fn set_or_clear_timeout<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.timeout = v.map(|x| x.into());
        self
    }
}

/// The changes to apply to a build.
///
/// Only the fields set to a value are sent, see [gax::patch::AsPatch].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct BuildPatch {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub output_image: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub output_secret: std::option::Option<std::string::String>,

    /// The directory in the repository that contains the buildpacks file or the
    /// Dockerfile.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_context_dir: std::option::Option<std::string::String>,

    /// Commit, tag, or branch in the source repository.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_revision: std::option::Option<std::string::String>,

    /// The name of the SSH secret with the credentials to access the
    /// repository.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_secret: std::option::Option<std::string::String>,

    /// Where the source code is located.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_type: std::option::Option<crate::model::BuildSourceType>,

    /// The URL of the code repository.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_url: std::option::Option<std::string::String>,

    /// The size of the build, which determines the amount of resources used.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub strategy_size: std::option::Option<std::string::String>,

    /// The path to the specification file used for build strategies.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub strategy_spec_file: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub strategy_type: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub timeout: std::option::Option<i64>,
}

impl BuildPatch {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [output_image][crate::model::BuildPatch::output_image].
    pub fn set_output_image<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.output_image = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [output_image][crate::model::BuildPatch::output_image].
    pub fn set_or_clear_output_image<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.output_image = v.map(|x| x.into());
        self
    }

    /// Sets the value of [output_secret][crate::model::BuildPatch::output_secret].
    pub fn set_output_secret<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.output_secret = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [output_secret][crate::model::BuildPatch::output_secret].
    pub fn set_or_clear_output_secret<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.output_secret = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_context_dir][crate::model::BuildPatch::source_context_dir].
    pub fn set_source_context_dir<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_context_dir = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_context_dir][crate::model::BuildPatch::source_context_dir].
    pub fn set_or_clear_source_context_dir<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_context_dir = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_revision][crate::model::BuildPatch::source_revision].
    pub fn set_source_revision<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_revision = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_revision][crate::model::BuildPatch::source_revision].
    pub fn set_or_clear_source_revision<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_revision = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_secret][crate::model::BuildPatch::source_secret].
    pub fn set_source_secret<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_secret = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_secret][crate::model::BuildPatch::source_secret].
    pub fn set_or_clear_source_secret<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_secret = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_type][crate::model::BuildPatch::source_type].
    pub fn set_source_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::BuildSourceType>,
    {
        self.source_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_type][crate::model::BuildPatch::source_type].
    pub fn set_or_clear_source_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::BuildSourceType>,
    {
        self.source_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_url][crate::model::BuildPatch::source_url].
    pub fn set_source_url<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_url = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_url][crate::model::BuildPatch::source_url].
    pub fn set_or_clear_source_url<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_url = v.map(|x| x.into());
        self
    }

    /// Sets the value of [strategy_size][crate::model::BuildPatch::strategy_size].
    pub fn set_strategy_size<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.strategy_size = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [strategy_size][crate::model::BuildPatch::strategy_size].
    pub fn set_or_clear_strategy_size<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.strategy_size = v.map(|x| x.into());
        self
    }

    /// Sets the value of [strategy_spec_file][crate::model::BuildPatch::strategy_spec_file].
    pub fn set_strategy_spec_file<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.strategy_spec_file = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [strategy_spec_file][crate::model::BuildPatch::strategy_spec_file].
    pub fn set_or_clear_strategy_spec_file<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.strategy_spec_file = v.map(|x| x.into());
        self
    }

    /// Sets the value of [strategy_type][crate::model::BuildPatch::strategy_type].
    pub fn set_strategy_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.strategy_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [strategy_type][crate::model::BuildPatch::strategy_type].
    pub fn set_or_clear_strategy_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.strategy_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [timeout][crate::model::BuildPatch::timeout].
    pub fn set_timeout<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.timeout = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [timeout][crate::model::BuildPatch::timeout].
    pub fn set_or_clear_timeout<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.timeout = v.map(|x| x.into());
        self
    }
}

/// A page of builds.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct BuildList {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub builds: std::vec::Vec<crate::model::Build>,

    /// Describes a page of the collection.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub first: std::option::Option<crate::model::ListFirstMetadata>,

    /// Maximum number of resources per page.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub limit: std::option::Option<i64>,

    /// Describes the next page, absent on the last page.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next: std::option::Option<crate::model::ListNextMetadata>,
}

impl BuildList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [builds][crate::model::BuildList::builds].
    pub fn set_builds<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Build>,
    {
        use std::iter::Iterator;
        self.builds = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [first][crate::model::BuildList::first].
    pub fn set_first<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ListFirstMetadata>,
    {
        self.first = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [first][crate::model::BuildList::first].
    pub fn set_or_clear_first<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ListFirstMetadata>,
    {
        self.first = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::BuildList::limit].
    pub fn set_limit<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::BuildList::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next][crate::model::BuildList::next].
    pub fn set_next<T: std::convert::Into<crate::model::ListNextMetadata>>(mut self, v: T) -> Self {
        self.next = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next][crate::model::BuildList::next].
    pub fn set_or_clear_next<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ListNextMetadata>,
    {
        self.next = v.map(|x| x.into());
        self
    }
}

impl gax::paginator::internal::PageableResponse for BuildList {
    type PageItem = crate::model::Build;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.builds
    }

    fn next_page_token(&self) -> std::string::String {
        self.next
            .as_ref()
            .and_then(crate::model::ListNextMetadata::start_token)
            .unwrap_or_default()
    }
}

/// A run of a Code Engine build.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct BuildRun {
    /// The name of the build this run belongs to, if any.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub build_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub created_at: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub href: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    /// The name of the build run.
    pub name: std::string::String,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub output_image: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub output_secret: std::option::Option<std::string::String>,

    /// The ID of the project the resource belongs to.
    pub project_id: std::string::String,

    /// The region the project is located in.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub region: std::option::Option<std::string::String>,

    /// The type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_type: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub service_account: std::option::Option<crate::model::ServiceAccount>,

    /// The directory in the repository that contains the buildpacks file or the
    /// Dockerfile.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_context_dir: std::option::Option<std::string::String>,

    /// Commit, tag, or branch in the source repository.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_revision: std::option::Option<std::string::String>,

    /// The name of the SSH secret with the credentials to access the
    /// repository.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_secret: std::option::Option<std::string::String>,

    /// Where the source code is located.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_type: std::option::Option<crate::model::BuildSourceType>,

    /// The URL of the code repository.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_url: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<crate::model::build_run::Status>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status_details: std::option::Option<crate::model::BuildRunStatus>,

    /// The size of the build, which determines the amount of resources used.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub strategy_size: std::option::Option<std::string::String>,

    /// The path to the specification file used for build strategies.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub strategy_spec_file: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub strategy_type: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub timeout: std::option::Option<i64>,
}

impl BuildRun {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [build_name][crate::model::BuildRun::build_name].
    pub fn set_build_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.build_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [build_name][crate::model::BuildRun::build_name].
    pub fn set_or_clear_build_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.build_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [created_at][crate::model::BuildRun::created_at].
    pub fn set_created_at<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.created_at = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [created_at][crate::model::BuildRun::created_at].
    pub fn set_or_clear_created_at<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.created_at = v.map(|x| x.into());
        self
    }

    /// Sets the value of [href][crate::model::BuildRun::href].
    pub fn set_href<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.href = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [href][crate::model::BuildRun::href].
    pub fn set_or_clear_href<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.href = v.map(|x| x.into());
        self
    }

    /// Sets the value of [id][crate::model::BuildRun::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::BuildRun::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::BuildRun::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [output_image][crate::model::BuildRun::output_image].
    pub fn set_output_image<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.output_image = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [output_image][crate::model::BuildRun::output_image].
    pub fn set_or_clear_output_image<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.output_image = v.map(|x| x.into());
        self
    }

    /// Sets the value of [output_secret][crate::model::BuildRun::output_secret].
    pub fn set_output_secret<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.output_secret = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [output_secret][crate::model::BuildRun::output_secret].
    pub fn set_or_clear_output_secret<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.output_secret = v.map(|x| x.into());
        self
    }

    /// Sets the value of [project_id][crate::model::BuildRun::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [region][crate::model::BuildRun::region].
    pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.region = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [region][crate::model::BuildRun::region].
    pub fn set_or_clear_region<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resource_type][crate::model::BuildRun::resource_type].
    pub fn set_resource_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.resource_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_type][crate::model::BuildRun::resource_type].
    pub fn set_or_clear_resource_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [service_account][crate::model::BuildRun::service_account].
    pub fn set_service_account<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ServiceAccount>,
    {
        self.service_account = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [service_account][crate::model::BuildRun::service_account].
    pub fn set_or_clear_service_account<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ServiceAccount>,
    {
        self.service_account = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_context_dir][crate::model::BuildRun::source_context_dir].
    pub fn set_source_context_dir<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_context_dir = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_context_dir][crate::model::BuildRun::source_context_dir].
    pub fn set_or_clear_source_context_dir<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_context_dir = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_revision][crate::model::BuildRun::source_revision].
    pub fn set_source_revision<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_revision = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_revision][crate::model::BuildRun::source_revision].
    pub fn set_or_clear_source_revision<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_revision = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_secret][crate::model::BuildRun::source_secret].
    pub fn set_source_secret<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_secret = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_secret][crate::model::BuildRun::source_secret].
    pub fn set_or_clear_source_secret<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_secret = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_type][crate::model::BuildRun::source_type].
    pub fn set_source_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::BuildSourceType>,
    {
        self.source_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_type][crate::model::BuildRun::source_type].
    pub fn set_or_clear_source_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::BuildSourceType>,
    {
        self.source_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_url][crate::model::BuildRun::source_url].
    pub fn set_source_url<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_url = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_url][crate::model::BuildRun::source_url].
    pub fn set_or_clear_source_url<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_url = v.map(|x| x.into());
        self
    }

    /// Sets the value of [status][crate::model::BuildRun::status].
    pub fn set_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::build_run::Status>,
    {
        self.status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [status][crate::model::BuildRun::status].
    pub fn set_or_clear_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::build_run::Status>,
    {
        self.status = v.map(|x| x.into());
        self
    }

    /// Sets the value of [status_details][crate::model::BuildRun::status_details].
    pub fn set_status_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::BuildRunStatus>,
    {
        self.status_details = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [status_details][crate::model::BuildRun::status_details].
    pub fn set_or_clear_status_details<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::BuildRunStatus>,
    {
        self.status_details = v.map(|x| x.into());
        self
    }

    /// Sets the value of [strategy_size][crate::model::BuildRun::strategy_size].
    pub fn set_strategy_size<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.strategy_size = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [strategy_size][crate::model::BuildRun::strategy_size].
    pub fn set_or_clear_strategy_size<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.strategy_size = v.map(|x| x.into());
        self
    }

    /// Sets the value of [strategy_spec_file][crate::model::BuildRun::strategy_spec_file].
    pub fn set_strategy_spec_file<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.strategy_spec_file = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [strategy_spec_file][crate::model::BuildRun::strategy_spec_file].
    pub fn set_or_clear_strategy_spec_file<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.strategy_spec_file = v.map(|x| x.into());
        self
    }

    /// Sets the value of [strategy_type][crate::model::BuildRun::strategy_type].
    pub fn set_strategy_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.strategy_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [strategy_type][crate::model::BuildRun::strategy_type].
    pub fn set_or_clear_strategy_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.strategy_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [timeout][crate::model::BuildRun::timeout].
    pub fn set_timeout<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.timeout = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [timeout][crate::model::BuildRun::timeout].
    pub fn set_or_clear_timeout<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.timeout = v.map(|x| x.into());
        self
    }
}

/// The detailed status of a build run.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct BuildRunStatus {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub completion_time: std::option::Option<std::string::String>,

    /// The digest of the built image.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub output_digest: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub reason: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub start_time: std::option::Option<std::string::String>,
}

impl BuildRunStatus {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [completion_time][crate::model::BuildRunStatus::completion_time].
    pub fn set_completion_time<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.completion_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [completion_time][crate::model::BuildRunStatus::completion_time].
    pub fn set_or_clear_completion_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.completion_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [output_digest][crate::model::BuildRunStatus::output_digest].
    pub fn set_output_digest<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.output_digest = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [output_digest][crate::model::BuildRunStatus::output_digest].
    pub fn set_or_clear_output_digest<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.output_digest = v.map(|x| x.into());
        self
    }

    /// Sets the value of [reason][crate::model::BuildRunStatus::reason].
    pub fn set_reason<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.reason = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [reason][crate::model::BuildRunStatus::reason].
    pub fn set_or_clear_reason<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.reason = v.map(|x| x.into());
        self
    }

    /// Sets the value of [start_time][crate::model::BuildRunStatus::start_time].
    pub fn set_start_time<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.start_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [start_time][crate::model::BuildRunStatus::start_time].
    pub fn set_or_clear_start_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.start_time = v.map(|x| x.into());
        self
    }
}

/// The request body to run a build.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct BuildRunPrototype {
    /// The name of the build to run, the run carries its own configuration when
    /// absent.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub build_name: std::option::Option<std::string::String>,

    /// The name of the build run, generated when absent.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub output_image: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub output_secret: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub service_account: std::option::Option<crate::model::ServiceAccount>,

    /// The directory in the repository that contains the buildpacks file or the
    /// Dockerfile.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_context_dir: std::option::Option<std::string::String>,

    /// Commit, tag, or branch in the source repository.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_revision: std::option::Option<std::string::String>,

    /// The name of the SSH secret with the credentials to access the
    /// repository.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_secret: std::option::Option<std::string::String>,

    /// Where the source code is located.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_type: std::option::Option<crate::model::BuildSourceType>,

    /// The URL of the code repository.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub source_url: std::option::Option<std::string::String>,

    /// The size of the build, which determines the amount of resources used.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub strategy_size: std::option::Option<std::string::String>,

    /// The path to the specification file used for build strategies.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub strategy_spec_file: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub strategy_type: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub timeout: std::option::Option<i64>,
}

impl BuildRunPrototype {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [build_name][crate::model::BuildRunPrototype::build_name].
    pub fn set_build_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.build_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [build_name][crate::model::BuildRunPrototype::build_name].
    pub fn set_or_clear_build_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.build_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::BuildRunPrototype::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::BuildRunPrototype::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [output_image][crate::model::BuildRunPrototype::output_image].
    pub fn set_output_image<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.output_image = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [output_image][crate::model::BuildRunPrototype::output_image].
    pub fn set_or_clear_output_image<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.output_image = v.map(|x| x.into());
        self
    }

    /// Sets the value of [output_secret][crate::model::BuildRunPrototype::output_secret].
    pub fn set_output_secret<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.output_secret = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [output_secret][crate::model::BuildRunPrototype::output_secret].
    pub fn set_or_clear_output_secret<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.output_secret = v.map(|x| x.into());
        self
    }

    /// Sets the value of [service_account][crate::model::BuildRunPrototype::service_account].
    pub fn set_service_account<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ServiceAccount>,
    {
        self.service_account = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [service_account][crate::model::BuildRunPrototype::service_account].
    pub fn set_or_clear_service_account<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ServiceAccount>,
    {
        self.service_account = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_context_dir][crate::model::BuildRunPrototype::source_context_dir].
    pub fn set_source_context_dir<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_context_dir = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_context_dir][crate::model::BuildRunPrototype::source_context_dir].
    pub fn set_or_clear_source_context_dir<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_context_dir = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_revision][crate::model::BuildRunPrototype::source_revision].
    pub fn set_source_revision<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_revision = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_revision][crate::model::BuildRunPrototype::source_revision].
    pub fn set_or_clear_source_revision<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_revision = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_secret][crate::model::BuildRunPrototype::source_secret].
    pub fn set_source_secret<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_secret = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_secret][crate::model::BuildRunPrototype::source_secret].
    pub fn set_or_clear_source_secret<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_secret = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_type][crate::model::BuildRunPrototype::source_type].
    pub fn set_source_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::BuildSourceType>,
    {
        self.source_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_type][crate::model::BuildRunPrototype::source_type].
    pub fn set_or_clear_source_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::BuildSourceType>,
    {
        self.source_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_url][crate::model::BuildRunPrototype::source_url].
    pub fn set_source_url<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_url = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [source_url][crate::model::BuildRunPrototype::source_url].
    pub fn set_or_clear_source_url<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.source_url = v.map(|x| x.into());
        self
    }

    /// Sets the value of [strategy_size][crate::model::BuildRunPrototype::strategy_size].
    pub fn set_strategy_size<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.strategy_size = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [strategy_size][crate::model::BuildRunPrototype::strategy_size].
    pub fn set_or_clear_strategy_size<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.strategy_size = v.map(|x| x.into());
        self
    }

    /// Sets the value of [strategy_spec_file][crate::model::BuildRunPrototype::strategy_spec_file].
    pub fn set_strategy_spec_file<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.strategy_spec_file = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [strategy_spec_file][crate::model::BuildRunPrototype::strategy_spec_file].
    pub fn set_or_clear_strategy_spec_file<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.strategy_spec_file = v.map(|x| x.into());
        self
    }

    /// Sets the value of [strategy_type][crate::model::BuildRunPrototype::strategy_type].
    pub fn set_strategy_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.strategy_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [strategy_type][crate::model::BuildRunPrototype::strategy_type].
    pub fn set_or_clear_strategy_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.strategy_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [timeout][crate::model::BuildRunPrototype::timeout].
    pub fn set_timeout<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.timeout = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [timeout][crate::model::BuildRunPrototype::timeout].
    pub fn set_or_clear_timeout<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.timeout = v.map(|x| x.into());
        self
    }
}

/// A page of build runs.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct BuildRunList {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub build_runs: std::vec::Vec<crate::model::BuildRun>,

    /// Describes a page of the collection.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub first: std::option::Option<crate::model::ListFirstMetadata>,

    /// Maximum number of resources per page.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub limit: std::option::Option<i64>,

    /// Describes the next page, absent on the last page.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next: std::option::Option<crate::model::ListNextMetadata>,
}

impl BuildRunList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [build_runs][crate::model::BuildRunList::build_runs].
    pub fn set_build_runs<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::BuildRun>,
    {
        use std::iter::Iterator;
        self.build_runs = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [first][crate::model::BuildRunList::first].
    pub fn set_first<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ListFirstMetadata>,
    {
        self.first = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [first][crate::model::BuildRunList::first].
    pub fn set_or_clear_first<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ListFirstMetadata>,
    {
        self.first = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::BuildRunList::limit].
    pub fn set_limit<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::BuildRunList::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next][crate::model::BuildRunList::next].
    pub fn set_next<T: std::convert::Into<crate::model::ListNextMetadata>>(mut self, v: T) -> Self {
        self.next = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next][crate::model::BuildRunList::next].
    pub fn set_or_clear_next<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ListNextMetadata>,
    {
        self.next = v.map(|x| x.into());
        self
    }
}

impl gax::paginator::internal::PageableResponse for BuildRunList {
    type PageItem = crate::model::BuildRun;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.build_runs
    }

    fn next_page_token(&self) -> std::string::String {
        self.next
            .as_ref()
            .and_then(crate::model::ListNextMetadata::start_token)
            .unwrap_or_default()
    }
}

/// A reference to another component.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ComponentRef {
    /// The name of the referenced component.
    pub name: std::string::String,

    /// The type of the referenced component, for example `app_v2`.
    pub resource_type: std::string::String,
}

impl ComponentRef {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::ComponentRef::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [resource_type][crate::model::ComponentRef::resource_type].
    pub fn set_resource_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.resource_type = v.into();
        self
    }
}

/// A binding between a secret and an app or job.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Binding {
    pub component: crate::model::ComponentRef,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub href: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    /// The prefix of the environment variables injected into the component.
    pub prefix: std::string::String,

    pub project_id: std::string::String,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_type: std::option::Option<std::string::String>,

    /// The name of the bound secret.
    pub secret_name: std::string::String,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<crate::model::binding::Status>,
}

impl Binding {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [component][crate::model::Binding::component].
    pub fn set_component<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ComponentRef>,
    {
        self.component = v.into();
        self
    }

    /// Sets the value of [href][crate::model::Binding::href].
    pub fn set_href<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.href = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [href][crate::model::Binding::href].
    pub fn set_or_clear_href<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.href = v.map(|x| x.into());
        self
    }

    /// Sets the value of [id][crate::model::Binding::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::Binding::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [prefix][crate::model::Binding::prefix].
    pub fn set_prefix<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.prefix = v.into();
        self
    }

    /// Sets the value of [project_id][crate::model::Binding::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [resource_type][crate::model::Binding::resource_type].
    pub fn set_resource_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.resource_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_type][crate::model::Binding::resource_type].
    pub fn set_or_clear_resource_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [secret_name][crate::model::Binding::secret_name].
    pub fn set_secret_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.secret_name = v.into();
        self
    }

    /// Sets the value of [status][crate::model::Binding::status].
    pub fn set_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::binding::Status>,
    {
        self.status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [status][crate::model::Binding::status].
    pub fn set_or_clear_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::binding::Status>,
    {
        self.status = v.map(|x| x.into());
        self
    }
}

/// The request body to create a binding.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct BindingPrototype {
    /// The app or job to bind the secret to.
    pub component: crate::model::ComponentRef,

    /// The prefix of the environment variables injected into the component.
    pub prefix: std::string::String,

    /// The name of the service access secret to bind.
    pub secret_name: std::string::String,
}

impl BindingPrototype {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [component][crate::model::BindingPrototype::component].
    pub fn set_component<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ComponentRef>,
    {
        self.component = v.into();
        self
    }

    /// Sets the value of [prefix][crate::model::BindingPrototype::prefix].
    pub fn set_prefix<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.prefix = v.into();
        self
    }

    /// Sets the value of [secret_name][crate::model::BindingPrototype::secret_name].
    pub fn set_secret_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.secret_name = v.into();
        self
    }
}

/// A page of bindings.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct BindingList {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub bindings: std::vec::Vec<crate::model::Binding>,

    /// Describes a page of the collection.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub first: std::option::Option<crate::model::ListFirstMetadata>,

    /// Maximum number of resources per page.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub limit: std::option::Option<i64>,

    /// Describes the next page, absent on the last page.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next: std::option::Option<crate::model::ListNextMetadata>,
}

impl BindingList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [bindings][crate::model::BindingList::bindings].
    pub fn set_bindings<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Binding>,
    {
        use std::iter::Iterator;
        self.bindings = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [first][crate::model::BindingList::first].
    pub fn set_first<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ListFirstMetadata>,
    {
        self.first = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [first][crate::model::BindingList::first].
    pub fn set_or_clear_first<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ListFirstMetadata>,
    {
        self.first = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::BindingList::limit].
    pub fn set_limit<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::BindingList::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next][crate::model::BindingList::next].
    pub fn set_next<T: std::convert::Into<crate::model::ListNextMetadata>>(mut self, v: T) -> Self {
        self.next = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next][crate::model::BindingList::next].
    pub fn set_or_clear_next<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ListNextMetadata>,
    {
        self.next = v.map(|x| x.into());
        self
    }
}

impl gax::paginator::internal::PageableResponse for BindingList {
    type PageItem = crate::model::Binding;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.bindings
    }

    fn next_page_token(&self) -> std::string::String {
        self.next
            .as_ref()
            .and_then(crate::model::ListNextMetadata::start_token)
            .unwrap_or_default()
    }
}

/// A Code Engine config map.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ConfigMap {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub created_at: std::option::Option<std::string::String>,

    /// The key-value pairs of the config map.
    #[serde(skip_serializing_if = "std::collections::BTreeMap::is_empty")]
    pub data: std::collections::BTreeMap<std::string::String, std::string::String>,

    /// The version of the config map instance, used to achieve optimistic
    /// locking.
    pub entity_tag: std::string::String,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub href: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    pub name: std::string::String,

    /// The ID of the project the resource belongs to.
    pub project_id: std::string::String,

    /// The region the project is located in.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub region: std::option::Option<std::string::String>,

    /// The type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_type: std::option::Option<std::string::String>,
}

impl ConfigMap {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [created_at][crate::model::ConfigMap::created_at].
    pub fn set_created_at<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.created_at = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [created_at][crate::model::ConfigMap::created_at].
    pub fn set_or_clear_created_at<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.created_at = v.map(|x| x.into());
        self
    }

    /// Sets the value of [data][crate::model::ConfigMap::data].
    pub fn set_data<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.data = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [entity_tag][crate::model::ConfigMap::entity_tag].
    pub fn set_entity_tag<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_tag = v.into();
        self
    }

    /// Sets the value of [href][crate::model::ConfigMap::href].
    pub fn set_href<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.href = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [href][crate::model::ConfigMap::href].
    pub fn set_or_clear_href<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.href = v.map(|x| x.into());
        self
    }

    /// Sets the value of [id][crate::model::ConfigMap::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::ConfigMap::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::ConfigMap::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [project_id][crate::model::ConfigMap::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [region][crate::model::ConfigMap::region].
    pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.region = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [region][crate::model::ConfigMap::region].
    pub fn set_or_clear_region<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resource_type][crate::model::ConfigMap::resource_type].
    pub fn set_resource_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.resource_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_type][crate::model::ConfigMap::resource_type].
    pub fn set_or_clear_resource_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_type = v.map(|x| x.into());
        self
    }
}

/// The request body to create a config map.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ConfigMapPrototype {
    /// The key-value pairs of the config map.
    #[serde(skip_serializing_if = "std::collections::BTreeMap::is_empty")]
    pub data: std::collections::BTreeMap<std::string::String, std::string::String>,

    /// The name of the config map.
    pub name: std::string::String,
}

impl ConfigMapPrototype {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [data][crate::model::ConfigMapPrototype::data].
    pub fn set_data<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.data = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [name][crate::model::ConfigMapPrototype::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// The new contents of a config map.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ConfigMapReplace {
    /// The key-value pairs replacing the current contents.
    #[serde(skip_serializing_if = "std::collections::BTreeMap::is_empty")]
    pub data: std::collections::BTreeMap<std::string::String, std::string::String>,
}

impl ConfigMapReplace {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [data][crate::model::ConfigMapReplace::data].
    pub fn set_data<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.data = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

/// A page of config maps.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ConfigMapList {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub config_maps: std::vec::Vec<crate::model::ConfigMap>,

    /// Describes a page of the collection.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub first: std::option::Option<crate::model::ListFirstMetadata>,

    /// Maximum number of resources per page.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub limit: std::option::Option<i64>,

    /// Describes the next page, absent on the last page.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next: std::option::Option<crate::model::ListNextMetadata>,
}

impl ConfigMapList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [config_maps][crate::model::ConfigMapList::config_maps].
    pub fn set_config_maps<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::ConfigMap>,
    {
        use std::iter::Iterator;
        self.config_maps = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [first][crate::model::ConfigMapList::first].
    pub fn set_first<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ListFirstMetadata>,
    {
        self.first = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [first][crate::model::ConfigMapList::first].
    pub fn set_or_clear_first<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ListFirstMetadata>,
    {
        self.first = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::ConfigMapList::limit].
    pub fn set_limit<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ConfigMapList::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next][crate::model::ConfigMapList::next].
    pub fn set_next<T: std::convert::Into<crate::model::ListNextMetadata>>(mut self, v: T) -> Self {
        self.next = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next][crate::model::ConfigMapList::next].
    pub fn set_or_clear_next<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ListNextMetadata>,
    {
        self.next = v.map(|x| x.into());
        self
    }
}

impl gax::paginator::internal::PageableResponse for ConfigMapList {
    type PageItem = crate::model::ConfigMap;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.config_maps
    }

    fn next_page_token(&self) -> std::string::String {
        self.next
            .as_ref()
            .and_then(crate::model::ListNextMetadata::start_token)
            .unwrap_or_default()
    }
}

/// A reference to a service credential.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ResourceKeyRef {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,
}

impl ResourceKeyRef {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::ResourceKeyRef::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::ResourceKeyRef::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::ResourceKeyRef::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::ResourceKeyRef::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }
}

/// A reference to an IAM role.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct RoleRef {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub crn: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,
}

impl RoleRef {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [crn][crate::model::RoleRef::crn].
    pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.crn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [crn][crate::model::RoleRef::crn].
    pub fn set_or_clear_crn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.crn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::RoleRef::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::RoleRef::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }
}

/// A reference to a service instance.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ServiceInstanceRef {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub r#type: std::option::Option<std::string::String>,
}

impl ServiceInstanceRef {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::ServiceInstanceRef::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::ServiceInstanceRef::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::ServiceInstanceRef::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::ServiceInstanceRef::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [r#type][crate::model::ServiceInstanceRef::r#type].
    pub fn set_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [r#type][crate::model::ServiceInstanceRef::r#type].
    pub fn set_or_clear_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.r#type = v.map(|x| x.into());
        self
    }
}

/// A reference to a service ID.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ServiceIdRef {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub crn: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,
}

impl ServiceIdRef {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [crn][crate::model::ServiceIdRef::crn].
    pub fn set_crn<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.crn = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [crn][crate::model::ServiceIdRef::crn].
    pub fn set_or_clear_crn<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.crn = v.map(|x| x.into());
        self
    }

    /// Sets the value of [id][crate::model::ServiceIdRef::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::ServiceIdRef::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }
}

/// Properties of a `service_access` secret.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ServiceAccessSecretProps {
    /// The service credential.
    pub resource_key: crate::model::ResourceKeyRef,

    /// The IAM role of the service credential.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub role: std::option::Option<crate::model::RoleRef>,

    /// The service instance.
    pub service_instance: crate::model::ServiceInstanceRef,

    /// The service ID of the service credential.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub serviceid: std::option::Option<crate::model::ServiceIdRef>,
}

impl ServiceAccessSecretProps {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [resource_key][crate::model::ServiceAccessSecretProps::resource_key].
    pub fn set_resource_key<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ResourceKeyRef>,
    {
        self.resource_key = v.into();
        self
    }

    /// Sets the value of [role][crate::model::ServiceAccessSecretProps::role].
    pub fn set_role<T: std::convert::Into<crate::model::RoleRef>>(mut self, v: T) -> Self {
        self.role = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [role][crate::model::ServiceAccessSecretProps::role].
    pub fn set_or_clear_role<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::RoleRef>,
    {
        self.role = v.map(|x| x.into());
        self
    }

    /// Sets the value of [service_instance][crate::model::ServiceAccessSecretProps::service_instance].
    pub fn set_service_instance<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ServiceInstanceRef>,
    {
        self.service_instance = v.into();
        self
    }

    /// Sets the value of [serviceid][crate::model::ServiceAccessSecretProps::serviceid].
    pub fn set_serviceid<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ServiceIdRef>,
    {
        self.serviceid = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [serviceid][crate::model::ServiceAccessSecretProps::serviceid].
    pub fn set_or_clear_serviceid<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ServiceIdRef>,
    {
        self.serviceid = v.map(|x| x.into());
        self
    }
}

/// Properties of a `service_operator` secret.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ServiceOperatorSecretProps {
    /// The ID of the API key used by the operator.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub apikey_id: std::option::Option<std::string::String>,

    /// The resource groups the operator can access.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub resource_group_ids: std::vec::Vec<std::string::String>,

    /// The service ID of the operator.
    pub serviceid: crate::model::ServiceIdRef,

    /// Whether the API key is managed by the user.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub user_managed: std::option::Option<bool>,
}

impl ServiceOperatorSecretProps {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [apikey_id][crate::model::ServiceOperatorSecretProps::apikey_id].
    pub fn set_apikey_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.apikey_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [apikey_id][crate::model::ServiceOperatorSecretProps::apikey_id].
    pub fn set_or_clear_apikey_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.apikey_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resource_group_ids][crate::model::ServiceOperatorSecretProps::resource_group_ids].
    pub fn set_resource_group_ids<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.resource_group_ids = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [serviceid][crate::model::ServiceOperatorSecretProps::serviceid].
    pub fn set_serviceid<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ServiceIdRef>,
    {
        self.serviceid = v.into();
        self
    }

    /// Sets the value of [user_managed][crate::model::ServiceOperatorSecretProps::user_managed].
    pub fn set_user_managed<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.user_managed = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [user_managed][crate::model::ServiceOperatorSecretProps::user_managed].
    pub fn set_or_clear_user_managed<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.user_managed = v.map(|x| x.into());
        self
    }
}

/// A Code Engine secret.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Secret {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub created_at: std::option::Option<std::string::String>,

    /// The contents of the secret.
    #[serde(skip_serializing_if = "std::collections::BTreeMap::is_empty")]
    pub data: std::collections::BTreeMap<std::string::String, std::string::String>,

    /// The version of the secret instance, used to achieve optimistic locking.
    pub entity_tag: std::string::String,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub format: std::option::Option<crate::model::SecretFormat>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub href: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    pub name: std::string::String,

    /// The ID of the project the resource belongs to.
    pub project_id: std::string::String,

    /// The region the project is located in.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub region: std::option::Option<std::string::String>,

    /// The type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_type: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub service_access: std::option::Option<crate::model::ServiceAccessSecretProps>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub service_operator: std::option::Option<crate::model::ServiceOperatorSecretProps>,
}

impl Secret {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [created_at][crate::model::Secret::created_at].
    pub fn set_created_at<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.created_at = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [created_at][crate::model::Secret::created_at].
    pub fn set_or_clear_created_at<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.created_at = v.map(|x| x.into());
        self
    }

    /// Sets the value of [data][crate::model::Secret::data].
    pub fn set_data<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.data = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [entity_tag][crate::model::Secret::entity_tag].
    pub fn set_entity_tag<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_tag = v.into();
        self
    }

    /// Sets the value of [format][crate::model::Secret::format].
    pub fn set_format<T: std::convert::Into<crate::model::SecretFormat>>(mut self, v: T) -> Self {
        self.format = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [format][crate::model::Secret::format].
    pub fn set_or_clear_format<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SecretFormat>,
    {
        self.format = v.map(|x| x.into());
        self
    }

    /// Sets the value of [href][crate::model::Secret::href].
    pub fn set_href<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.href = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [href][crate::model::Secret::href].
    pub fn set_or_clear_href<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.href = v.map(|x| x.into());
        self
    }

    /// Sets the value of [id][crate::model::Secret::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::Secret::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::Secret::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [project_id][crate::model::Secret::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [region][crate::model::Secret::region].
    pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.region = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [region][crate::model::Secret::region].
    pub fn set_or_clear_region<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resource_type][crate::model::Secret::resource_type].
    pub fn set_resource_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.resource_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_type][crate::model::Secret::resource_type].
    pub fn set_or_clear_resource_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [service_access][crate::model::Secret::service_access].
    pub fn set_service_access<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ServiceAccessSecretProps>,
    {
        self.service_access = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [service_access][crate::model::Secret::service_access].
    pub fn set_or_clear_service_access<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ServiceAccessSecretProps>,
    {
        self.service_access = v.map(|x| x.into());
        self
    }

    /// Sets the value of [service_operator][crate::model::Secret::service_operator].
    pub fn set_service_operator<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ServiceOperatorSecretProps>,
    {
        self.service_operator = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [service_operator][crate::model::Secret::service_operator].
    pub fn set_or_clear_service_operator<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ServiceOperatorSecretProps>,
    {
        self.service_operator = v.map(|x| x.into());
        self
    }
}

/// The request body to create a secret.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct SecretPrototype {
    /// The contents of the secret, see [SecretData] for the well-known formats.
    #[serde(skip_serializing_if = "std::collections::BTreeMap::is_empty")]
    pub data: std::collections::BTreeMap<std::string::String, std::string::String>,

    /// The format of the secret, required.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub format: std::option::Option<crate::model::SecretFormat>,

    /// The name of the secret.
    pub name: std::string::String,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub service_access: std::option::Option<crate::model::ServiceAccessSecretProps>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub service_operator: std::option::Option<crate::model::ServiceOperatorSecretProps>,
}

impl SecretPrototype {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [data][crate::model::SecretPrototype::data].
    pub fn set_data<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.data = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [format][crate::model::SecretPrototype::format].
    pub fn set_format<T: std::convert::Into<crate::model::SecretFormat>>(mut self, v: T) -> Self {
        self.format = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [format][crate::model::SecretPrototype::format].
    pub fn set_or_clear_format<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SecretFormat>,
    {
        self.format = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::SecretPrototype::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [service_access][crate::model::SecretPrototype::service_access].
    pub fn set_service_access<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ServiceAccessSecretProps>,
    {
        self.service_access = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [service_access][crate::model::SecretPrototype::service_access].
    pub fn set_or_clear_service_access<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ServiceAccessSecretProps>,
    {
        self.service_access = v.map(|x| x.into());
        self
    }

    /// Sets the value of [service_operator][crate::model::SecretPrototype::service_operator].
    pub fn set_service_operator<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ServiceOperatorSecretProps>,
    {
        self.service_operator = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [service_operator][crate::model::SecretPrototype::service_operator].
    pub fn set_or_clear_service_operator<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ServiceOperatorSecretProps>,
    {
        self.service_operator = v.map(|x| x.into());
        self
    }
}

/// The new contents of a secret.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct SecretReplace {
    /// The contents replacing the current data.
    #[serde(skip_serializing_if = "std::collections::BTreeMap::is_empty")]
    pub data: std::collections::BTreeMap<std::string::String, std::string::String>,

    /// The format of the secret, it must match the existing secret.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub format: std::option::Option<crate::model::SecretFormat>,
}

impl SecretReplace {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [data][crate::model::SecretReplace::data].
    pub fn set_data<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.data = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [format][crate::model::SecretReplace::format].
    pub fn set_format<T: std::convert::Into<crate::model::SecretFormat>>(mut self, v: T) -> Self {
        self.format = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [format][crate::model::SecretReplace::format].
    pub fn set_or_clear_format<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SecretFormat>,
    {
        self.format = v.map(|x| x.into());
        self
    }
}

/// A page of secrets.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct SecretList {
    /// Describes a page of the collection.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub first: std::option::Option<crate::model::ListFirstMetadata>,

    /// Maximum number of resources per page.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub limit: std::option::Option<i64>,

    /// Describes the next page, absent on the last page.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next: std::option::Option<crate::model::ListNextMetadata>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub secrets: std::vec::Vec<crate::model::Secret>,
}

impl SecretList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [first][crate::model::SecretList::first].
    pub fn set_first<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ListFirstMetadata>,
    {
        self.first = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [first][crate::model::SecretList::first].
    pub fn set_or_clear_first<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ListFirstMetadata>,
    {
        self.first = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::SecretList::limit].
    pub fn set_limit<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::SecretList::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next][crate::model::SecretList::next].
    pub fn set_next<T: std::convert::Into<crate::model::ListNextMetadata>>(mut self, v: T) -> Self {
        self.next = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next][crate::model::SecretList::next].
    pub fn set_or_clear_next<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ListNextMetadata>,
    {
        self.next = v.map(|x| x.into());
        self
    }

    /// Sets the value of [secrets][crate::model::SecretList::secrets].
    pub fn set_secrets<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Secret>,
    {
        use std::iter::Iterator;
        self.secrets = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl gax::paginator::internal::PageableResponse for SecretList {
    type PageItem = crate::model::Secret;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.secrets
    }

    fn next_page_token(&self) -> std::string::String {
        self.next
            .as_ref()
            .and_then(crate::model::ListNextMetadata::start_token)
            .unwrap_or_default()
    }
}

/// A custom domain mapped to an app.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DomainMapping {
    /// The value of the CNAME record to configure for the domain.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub cname_target: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub component: std::option::Option<crate::model::ComponentRef>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub created_at: std::option::Option<std::string::String>,

    /// The version of the domain mapping instance, used to achieve optimistic
    /// locking.
    pub entity_tag: std::string::String,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub href: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    /// The fully qualified domain name.
    pub name: std::string::String,

    /// The ID of the project the resource belongs to.
    pub project_id: std::string::String,

    /// The region the project is located in.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub region: std::option::Option<std::string::String>,

    /// The type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_type: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<crate::model::domain_mapping::Status>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status_details: std::option::Option<crate::model::DomainMappingStatus>,

    /// The name of the TLS secret for the domain.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tls_secret: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub user_managed: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub visibility: std::option::Option<std::string::String>,
}

impl DomainMapping {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [cname_target][crate::model::DomainMapping::cname_target].
    pub fn set_cname_target<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.cname_target = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [cname_target][crate::model::DomainMapping::cname_target].
    pub fn set_or_clear_cname_target<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.cname_target = v.map(|x| x.into());
        self
    }

    /// Sets the value of [component][crate::model::DomainMapping::component].
    pub fn set_component<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ComponentRef>,
    {
        self.component = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [component][crate::model::DomainMapping::component].
    pub fn set_or_clear_component<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ComponentRef>,
    {
        self.component = v.map(|x| x.into());
        self
    }

    /// Sets the value of [created_at][crate::model::DomainMapping::created_at].
    pub fn set_created_at<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.created_at = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [created_at][crate::model::DomainMapping::created_at].
    pub fn set_or_clear_created_at<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.created_at = v.map(|x| x.into());
        self
    }

    /// Sets the value of [entity_tag][crate::model::DomainMapping::entity_tag].
    pub fn set_entity_tag<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_tag = v.into();
        self
    }

    /// Sets the value of [href][crate::model::DomainMapping::href].
    pub fn set_href<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.href = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [href][crate::model::DomainMapping::href].
    pub fn set_or_clear_href<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.href = v.map(|x| x.into());
        self
    }

    /// Sets the value of [id][crate::model::DomainMapping::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::DomainMapping::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::DomainMapping::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [project_id][crate::model::DomainMapping::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [region][crate::model::DomainMapping::region].
    pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.region = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [region][crate::model::DomainMapping::region].
    pub fn set_or_clear_region<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resource_type][crate::model::DomainMapping::resource_type].
    pub fn set_resource_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.resource_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_type][crate::model::DomainMapping::resource_type].
    pub fn set_or_clear_resource_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [status][crate::model::DomainMapping::status].
    pub fn set_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::domain_mapping::Status>,
    {
        self.status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [status][crate::model::DomainMapping::status].
    pub fn set_or_clear_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::domain_mapping::Status>,
    {
        self.status = v.map(|x| x.into());
        self
    }

    /// Sets the value of [status_details][crate::model::DomainMapping::status_details].
    pub fn set_status_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::DomainMappingStatus>,
    {
        self.status_details = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [status_details][crate::model::DomainMapping::status_details].
    pub fn set_or_clear_status_details<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::DomainMappingStatus>,
    {
        self.status_details = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tls_secret][crate::model::DomainMapping::tls_secret].
    pub fn set_tls_secret<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.tls_secret = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tls_secret][crate::model::DomainMapping::tls_secret].
    pub fn set_or_clear_tls_secret<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tls_secret = v.map(|x| x.into());
        self
    }

    /// Sets the value of [user_managed][crate::model::DomainMapping::user_managed].
    pub fn set_user_managed<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.user_managed = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [user_managed][crate::model::DomainMapping::user_managed].
    pub fn set_or_clear_user_managed<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.user_managed = v.map(|x| x.into());
        self
    }

    /// Sets the value of [visibility][crate::model::DomainMapping::visibility].
    pub fn set_visibility<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.visibility = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [visibility][crate::model::DomainMapping::visibility].
    pub fn set_or_clear_visibility<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.visibility = v.map(|x| x.into());
        self
    }
}

/// The detailed status of a domain mapping.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DomainMappingStatus {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub reason: std::option::Option<std::string::String>,
}

impl DomainMappingStatus {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [reason][crate::model::DomainMappingStatus::reason].
    pub fn set_reason<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.reason = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [reason][crate::model::DomainMappingStatus::reason].
    pub fn set_or_clear_reason<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.reason = v.map(|x| x.into());
        self
    }
}

/// The request body to create a domain mapping.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DomainMappingPrototype {
    /// The app the domain is mapped to.
    pub component: crate::model::ComponentRef,

    /// The fully qualified domain name.
    pub name: std::string::String,

    /// The name of the TLS secret for the domain.
    pub tls_secret: std::string::String,
}

impl DomainMappingPrototype {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [component][crate::model::DomainMappingPrototype::component].
    pub fn set_component<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ComponentRef>,
    {
        self.component = v.into();
        self
    }

    /// Sets the value of [name][crate::model::DomainMappingPrototype::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [tls_secret][crate::model::DomainMappingPrototype::tls_secret].
    pub fn set_tls_secret<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.tls_secret = v.into();
        self
    }
}

/// The changes to apply to a domain mapping.
///
/// Only the fields set to a value are sent, see [gax::patch::AsPatch].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DomainMappingPatch {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub component: std::option::Option<crate::model::ComponentRef>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tls_secret: std::option::Option<std::string::String>,
}

impl DomainMappingPatch {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [component][crate::model::DomainMappingPatch::component].
    pub fn set_component<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ComponentRef>,
    {
        self.component = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [component][crate::model::DomainMappingPatch::component].
    pub fn set_or_clear_component<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ComponentRef>,
    {
        self.component = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tls_secret][crate::model::DomainMappingPatch::tls_secret].
    pub fn set_tls_secret<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.tls_secret = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tls_secret][crate::model::DomainMappingPatch::tls_secret].
    pub fn set_or_clear_tls_secret<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.tls_secret = v.map(|x| x.into());
        self
    }
}

/// A page of domain mappings.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct DomainMappingList {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub domain_mappings: std::vec::Vec<crate::model::DomainMapping>,

    /// Describes a page of the collection.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub first: std::option::Option<crate::model::ListFirstMetadata>,

    /// Maximum number of resources per page.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub limit: std::option::Option<i64>,

    /// Describes the next page, absent on the last page.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next: std::option::Option<crate::model::ListNextMetadata>,
}

impl DomainMappingList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [domain_mappings][crate::model::DomainMappingList::domain_mappings].
    pub fn set_domain_mappings<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::DomainMapping>,
    {
        use std::iter::Iterator;
        self.domain_mappings = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [first][crate::model::DomainMappingList::first].
    pub fn set_first<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ListFirstMetadata>,
    {
        self.first = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [first][crate::model::DomainMappingList::first].
    pub fn set_or_clear_first<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ListFirstMetadata>,
    {
        self.first = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::DomainMappingList::limit].
    pub fn set_limit<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::DomainMappingList::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next][crate::model::DomainMappingList::next].
    pub fn set_next<T: std::convert::Into<crate::model::ListNextMetadata>>(mut self, v: T) -> Self {
        self.next = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next][crate::model::DomainMappingList::next].
    pub fn set_or_clear_next<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ListNextMetadata>,
    {
        self.next = v.map(|x| x.into());
        self
    }
}

impl gax::paginator::internal::PageableResponse for DomainMappingList {
    type PageItem = crate::model::DomainMapping;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.domain_mappings
    }

    fn next_page_token(&self) -> std::string::String {
        self.next
            .as_ref()
            .and_then(crate::model::ListNextMetadata::start_token)
            .unwrap_or_default()
    }
}

/// A Code Engine function.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Function {
    /// Whether the code is binary.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub code_binary: std::option::Option<bool>,

    /// The name of the function to invoke.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub code_main: std::option::Option<std::string::String>,

    /// The location of the function code.
    pub code_reference: std::string::String,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub code_secret: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub computed_env_variables: std::vec::Vec<crate::model::EnvVar>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub created_at: std::option::Option<std::string::String>,

    /// The public URL of the function.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub endpoint: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub endpoint_internal: std::option::Option<std::string::String>,

    /// The version of the function instance, used to achieve optimistic
    /// locking.
    pub entity_tag: std::string::String,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub href: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub managed_domain_mappings: std::option::Option<crate::model::ManagedDomainMappings>,

    pub name: std::string::String,

    /// The ID of the project the resource belongs to.
    pub project_id: std::string::String,

    /// The region the project is located in.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub region: std::option::Option<std::string::String>,

    /// The type of the resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_type: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub run_compute_resource_token_enabled: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub run_env_variables: std::vec::Vec<crate::model::EnvVar>,

    /// The runtime of the function, for example `nodejs-20`.
    pub runtime: std::string::String,

    /// The number of concurrent requests per instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_concurrency: std::option::Option<i64>,

    /// The number of CPU assigned to each instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_cpu_limit: std::option::Option<std::string::String>,

    /// Seconds to wait before scaling down.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_down_delay: std::option::Option<i64>,

    /// Maximum execution time in seconds.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_max_execution_time: std::option::Option<i64>,

    /// The amount of memory per instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_memory_limit: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<crate::model::function::Status>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status_details: std::option::Option<crate::model::FunctionStatusDetails>,
}

impl Function {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [code_binary][crate::model::Function::code_binary].
    pub fn set_code_binary<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.code_binary = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [code_binary][crate::model::Function::code_binary].
    pub fn set_or_clear_code_binary<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.code_binary = v.map(|x| x.into());
        self
    }

    /// Sets the value of [code_main][crate::model::Function::code_main].
    pub fn set_code_main<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.code_main = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [code_main][crate::model::Function::code_main].
    pub fn set_or_clear_code_main<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.code_main = v.map(|x| x.into());
        self
    }

    /// Sets the value of [code_reference][crate::model::Function::code_reference].
    pub fn set_code_reference<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.code_reference = v.into();
        self
    }

    /// Sets the value of [code_secret][crate::model::Function::code_secret].
    pub fn set_code_secret<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.code_secret = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [code_secret][crate::model::Function::code_secret].
    pub fn set_or_clear_code_secret<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.code_secret = v.map(|x| x.into());
        self
    }

    /// Sets the value of [computed_env_variables][crate::model::Function::computed_env_variables].
    pub fn set_computed_env_variables<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::EnvVar>,
    {
        use std::iter::Iterator;
        self.computed_env_variables = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [created_at][crate::model::Function::created_at].
    pub fn set_created_at<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.created_at = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [created_at][crate::model::Function::created_at].
    pub fn set_or_clear_created_at<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.created_at = v.map(|x| x.into());
        self
    }

    /// Sets the value of [endpoint][crate::model::Function::endpoint].
    pub fn set_endpoint<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.endpoint = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [endpoint][crate::model::Function::endpoint].
    pub fn set_or_clear_endpoint<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.endpoint = v.map(|x| x.into());
        self
    }

    /// Sets the value of [endpoint_internal][crate::model::Function::endpoint_internal].
    pub fn set_endpoint_internal<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.endpoint_internal = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [endpoint_internal][crate::model::Function::endpoint_internal].
    pub fn set_or_clear_endpoint_internal<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.endpoint_internal = v.map(|x| x.into());
        self
    }

    /// Sets the value of [entity_tag][crate::model::Function::entity_tag].
    pub fn set_entity_tag<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_tag = v.into();
        self
    }

    /// Sets the value of [href][crate::model::Function::href].
    pub fn set_href<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.href = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [href][crate::model::Function::href].
    pub fn set_or_clear_href<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.href = v.map(|x| x.into());
        self
    }

    /// Sets the value of [id][crate::model::Function::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::Function::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [managed_domain_mappings][crate::model::Function::managed_domain_mappings].
    pub fn set_managed_domain_mappings<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ManagedDomainMappings>,
    {
        self.managed_domain_mappings = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [managed_domain_mappings][crate::model::Function::managed_domain_mappings].
    pub fn set_or_clear_managed_domain_mappings<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ManagedDomainMappings>,
    {
        self.managed_domain_mappings = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::Function::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [project_id][crate::model::Function::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [region][crate::model::Function::region].
    pub fn set_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.region = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [region][crate::model::Function::region].
    pub fn set_or_clear_region<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.region = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resource_type][crate::model::Function::resource_type].
    pub fn set_resource_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.resource_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_type][crate::model::Function::resource_type].
    pub fn set_or_clear_resource_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.resource_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_compute_resource_token_enabled][crate::model::Function::run_compute_resource_token_enabled].
    pub fn set_run_compute_resource_token_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.run_compute_resource_token_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [run_compute_resource_token_enabled][crate::model::Function::run_compute_resource_token_enabled].
    pub fn set_or_clear_run_compute_resource_token_enabled<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.run_compute_resource_token_enabled = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_env_variables][crate::model::Function::run_env_variables].
    pub fn set_run_env_variables<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::EnvVar>,
    {
        use std::iter::Iterator;
        self.run_env_variables = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [runtime][crate::model::Function::runtime].
    pub fn set_runtime<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.runtime = v.into();
        self
    }

    /// Sets the value of [scale_concurrency][crate::model::Function::scale_concurrency].
    pub fn set_scale_concurrency<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_concurrency = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_concurrency][crate::model::Function::scale_concurrency].
    pub fn set_or_clear_scale_concurrency<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_concurrency = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_cpu_limit][crate::model::Function::scale_cpu_limit].
    pub fn set_scale_cpu_limit<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.scale_cpu_limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_cpu_limit][crate::model::Function::scale_cpu_limit].
    pub fn set_or_clear_scale_cpu_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_cpu_limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_down_delay][crate::model::Function::scale_down_delay].
    pub fn set_scale_down_delay<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_down_delay = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_down_delay][crate::model::Function::scale_down_delay].
    pub fn set_or_clear_scale_down_delay<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_down_delay = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_max_execution_time][crate::model::Function::scale_max_execution_time].
    pub fn set_scale_max_execution_time<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_max_execution_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_max_execution_time][crate::model::Function::scale_max_execution_time].
    pub fn set_or_clear_scale_max_execution_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_max_execution_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_memory_limit][crate::model::Function::scale_memory_limit].
    pub fn set_scale_memory_limit<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_memory_limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_memory_limit][crate::model::Function::scale_memory_limit].
    pub fn set_or_clear_scale_memory_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_memory_limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [status][crate::model::Function::status].
    pub fn set_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::function::Status>,
    {
        self.status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [status][crate::model::Function::status].
    pub fn set_or_clear_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::function::Status>,
    {
        self.status = v.map(|x| x.into());
        self
    }

    /// Sets the value of [status_details][crate::model::Function::status_details].
    pub fn set_status_details<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::FunctionStatusDetails>,
    {
        self.status_details = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [status_details][crate::model::Function::status_details].
    pub fn set_or_clear_status_details<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::FunctionStatusDetails>,
    {
        self.status_details = v.map(|x| x.into());
        self
    }
}

/// The detailed status of a function.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct FunctionStatusDetails {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub reason: std::option::Option<std::string::String>,
}

impl FunctionStatusDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [reason][crate::model::FunctionStatusDetails::reason].
    pub fn set_reason<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.reason = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [reason][crate::model::FunctionStatusDetails::reason].
    pub fn set_or_clear_reason<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.reason = v.map(|x| x.into());
        self
    }
}

/// The request body to create a function.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct FunctionPrototype {
    /// Whether the code is binary.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub code_binary: std::option::Option<bool>,

    /// The name of the function to invoke.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub code_main: std::option::Option<std::string::String>,

    /// The location of the function code.
    pub code_reference: std::string::String,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub code_secret: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub managed_domain_mappings: std::option::Option<crate::model::ManagedDomainMappings>,

    /// The name of the function.
    pub name: std::string::String,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub run_compute_resource_token_enabled: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub run_env_variables: std::vec::Vec<crate::model::EnvVarPrototype>,

    /// The runtime of the function.
    pub runtime: std::string::String,

    /// The number of concurrent requests per instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_concurrency: std::option::Option<i64>,

    /// The number of CPU assigned to each instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_cpu_limit: std::option::Option<std::string::String>,

    /// Seconds to wait before scaling down.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_down_delay: std::option::Option<i64>,

    /// Maximum execution time in seconds.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_max_execution_time: std::option::Option<i64>,

    /// The amount of memory per instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_memory_limit: std::option::Option<std::string::String>,
}

impl FunctionPrototype {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [code_binary][crate::model::FunctionPrototype::code_binary].
    pub fn set_code_binary<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.code_binary = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [code_binary][crate::model::FunctionPrototype::code_binary].
    pub fn set_or_clear_code_binary<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.code_binary = v.map(|x| x.into());
        self
    }

    /// Sets the value of [code_main][crate::model::FunctionPrototype::code_main].
    pub fn set_code_main<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.code_main = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [code_main][crate::model::FunctionPrototype::code_main].
    pub fn set_or_clear_code_main<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.code_main = v.map(|x| x.into());
        self
    }

    /// Sets the value of [code_reference][crate::model::FunctionPrototype::code_reference].
    pub fn set_code_reference<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.code_reference = v.into();
        self
    }

    /// Sets the value of [code_secret][crate::model::FunctionPrototype::code_secret].
    pub fn set_code_secret<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.code_secret = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [code_secret][crate::model::FunctionPrototype::code_secret].
    pub fn set_or_clear_code_secret<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.code_secret = v.map(|x| x.into());
        self
    }

    /// Sets the value of [managed_domain_mappings][crate::model::FunctionPrototype::managed_domain_mappings].
    pub fn set_managed_domain_mappings<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ManagedDomainMappings>,
    {
        self.managed_domain_mappings = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [managed_domain_mappings][crate::model::FunctionPrototype::managed_domain_mappings].
    pub fn set_or_clear_managed_domain_mappings<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ManagedDomainMappings>,
    {
        self.managed_domain_mappings = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::FunctionPrototype::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [run_compute_resource_token_enabled][crate::model::FunctionPrototype::run_compute_resource_token_enabled].
    pub fn set_run_compute_resource_token_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.run_compute_resource_token_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [run_compute_resource_token_enabled][crate::model::FunctionPrototype::run_compute_resource_token_enabled].
    pub fn set_or_clear_run_compute_resource_token_enabled<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.run_compute_resource_token_enabled = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_env_variables][crate::model::FunctionPrototype::run_env_variables].
    pub fn set_run_env_variables<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::EnvVarPrototype>,
    {
        use std::iter::Iterator;
        self.run_env_variables = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [runtime][crate::model::FunctionPrototype::runtime].
    pub fn set_runtime<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.runtime = v.into();
        self
    }

    /// Sets the value of [scale_concurrency][crate::model::FunctionPrototype::scale_concurrency].
    pub fn set_scale_concurrency<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_concurrency = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_concurrency][crate::model::FunctionPrototype::scale_concurrency].
    pub fn set_or_clear_scale_concurrency<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_concurrency = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_cpu_limit][crate::model::FunctionPrototype::scale_cpu_limit].
    pub fn set_scale_cpu_limit<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.scale_cpu_limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_cpu_limit][crate::model::FunctionPrototype::scale_cpu_limit].
    pub fn set_or_clear_scale_cpu_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_cpu_limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_down_delay][crate::model::FunctionPrototype::scale_down_delay].
    pub fn set_scale_down_delay<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_down_delay = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_down_delay][crate::model::FunctionPrototype::scale_down_delay].
    pub fn set_or_clear_scale_down_delay<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_down_delay = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_max_execution_time][crate::model::FunctionPrototype::scale_max_execution_time].
    pub fn set_scale_max_execution_time<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_max_execution_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_max_execution_time][crate::model::FunctionPrototype::scale_max_execution_time].
    pub fn set_or_clear_scale_max_execution_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_max_execution_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_memory_limit][crate::model::FunctionPrototype::scale_memory_limit].
    pub fn set_scale_memory_limit<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_memory_limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_memory_limit][crate::model::FunctionPrototype::scale_memory_limit].
    pub fn set_or_clear_scale_memory_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_memory_limit = v.map(|x| x.into());
        self
    }
}

/// The changes to apply to a function.
///
/// Only the fields set to a value are sent, see [gax::patch::AsPatch].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct FunctionPatch {
    /// Whether the code is binary.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub code_binary: std::option::Option<bool>,

    /// The name of the function to invoke.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub code_main: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub code_reference: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub code_secret: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub managed_domain_mappings: std::option::Option<crate::model::ManagedDomainMappings>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub run_compute_resource_token_enabled: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub run_env_variables: std::option::Option<std::vec::Vec<crate::model::EnvVarPrototype>>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub runtime: std::option::Option<std::string::String>,

    /// The number of concurrent requests per instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_concurrency: std::option::Option<i64>,

    /// The number of CPU assigned to each instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_cpu_limit: std::option::Option<std::string::String>,

    /// Seconds to wait before scaling down.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_down_delay: std::option::Option<i64>,

    /// Maximum execution time in seconds.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_max_execution_time: std::option::Option<i64>,

    /// The amount of memory per instance.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub scale_memory_limit: std::option::Option<std::string::String>,
}

impl FunctionPatch {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [code_binary][crate::model::FunctionPatch::code_binary].
    pub fn set_code_binary<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.code_binary = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [code_binary][crate::model::FunctionPatch::code_binary].
    pub fn set_or_clear_code_binary<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.code_binary = v.map(|x| x.into());
        self
    }

    /// Sets the value of [code_main][crate::model::FunctionPatch::code_main].
    pub fn set_code_main<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.code_main = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [code_main][crate::model::FunctionPatch::code_main].
    pub fn set_or_clear_code_main<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.code_main = v.map(|x| x.into());
        self
    }

    /// Sets the value of [code_reference][crate::model::FunctionPatch::code_reference].
    pub fn set_code_reference<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.code_reference = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [code_reference][crate::model::FunctionPatch::code_reference].
    pub fn set_or_clear_code_reference<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.code_reference = v.map(|x| x.into());
        self
    }

    /// Sets the value of [code_secret][crate::model::FunctionPatch::code_secret].
    pub fn set_code_secret<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.code_secret = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [code_secret][crate::model::FunctionPatch::code_secret].
    pub fn set_or_clear_code_secret<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.code_secret = v.map(|x| x.into());
        self
    }

    /// Sets the value of [managed_domain_mappings][crate::model::FunctionPatch::managed_domain_mappings].
    pub fn set_managed_domain_mappings<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ManagedDomainMappings>,
    {
        self.managed_domain_mappings = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [managed_domain_mappings][crate::model::FunctionPatch::managed_domain_mappings].
    pub fn set_or_clear_managed_domain_mappings<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ManagedDomainMappings>,
    {
        self.managed_domain_mappings = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_compute_resource_token_enabled][crate::model::FunctionPatch::run_compute_resource_token_enabled].
    pub fn set_run_compute_resource_token_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.run_compute_resource_token_enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [run_compute_resource_token_enabled][crate::model::FunctionPatch::run_compute_resource_token_enabled].
    pub fn set_or_clear_run_compute_resource_token_enabled<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.run_compute_resource_token_enabled = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_env_variables][crate::model::FunctionPatch::run_env_variables].
    ///
    /// An empty list clears the field on the service, use
    /// [set_or_clear_run_env_variables][Self::set_or_clear_run_env_variables] to leave it unchanged.
    pub fn set_run_env_variables<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::EnvVarPrototype>,
    {
        use std::iter::Iterator;
        self.run_env_variables = std::option::Option::Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets or clears the value of [run_env_variables][crate::model::FunctionPatch::run_env_variables].
    pub fn set_or_clear_run_env_variables<T, V>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::EnvVarPrototype>,
    {
        use std::iter::Iterator;
        self.run_env_variables = v.map(|v| v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [runtime][crate::model::FunctionPatch::runtime].
    pub fn set_runtime<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.runtime = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [runtime][crate::model::FunctionPatch::runtime].
    pub fn set_or_clear_runtime<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.runtime = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_concurrency][crate::model::FunctionPatch::scale_concurrency].
    pub fn set_scale_concurrency<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_concurrency = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_concurrency][crate::model::FunctionPatch::scale_concurrency].
    pub fn set_or_clear_scale_concurrency<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_concurrency = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_cpu_limit][crate::model::FunctionPatch::scale_cpu_limit].
    pub fn set_scale_cpu_limit<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.scale_cpu_limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_cpu_limit][crate::model::FunctionPatch::scale_cpu_limit].
    pub fn set_or_clear_scale_cpu_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_cpu_limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_down_delay][crate::model::FunctionPatch::scale_down_delay].
    pub fn set_scale_down_delay<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_down_delay = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_down_delay][crate::model::FunctionPatch::scale_down_delay].
    pub fn set_or_clear_scale_down_delay<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_down_delay = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_max_execution_time][crate::model::FunctionPatch::scale_max_execution_time].
    pub fn set_scale_max_execution_time<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.scale_max_execution_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_max_execution_time][crate::model::FunctionPatch::scale_max_execution_time].
    pub fn set_or_clear_scale_max_execution_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.scale_max_execution_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scale_memory_limit][crate::model::FunctionPatch::scale_memory_limit].
    pub fn set_scale_memory_limit<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_memory_limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [scale_memory_limit][crate::model::FunctionPatch::scale_memory_limit].
    pub fn set_or_clear_scale_memory_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.scale_memory_limit = v.map(|x| x.into());
        self
    }
}

/// A page of functions.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct FunctionList {
    /// Describes a page of the collection.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub first: std::option::Option<crate::model::ListFirstMetadata>,

    /// Maximum number of resources per page.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub limit: std::option::Option<i64>,

    /// Describes the next page, absent on the last page.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next: std::option::Option<crate::model::ListNextMetadata>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub functions: std::vec::Vec<crate::model::Function>,
}

impl FunctionList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [first][crate::model::FunctionList::first].
    pub fn set_first<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ListFirstMetadata>,
    {
        self.first = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [first][crate::model::FunctionList::first].
    pub fn set_or_clear_first<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ListFirstMetadata>,
    {
        self.first = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::FunctionList::limit].
    pub fn set_limit<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::FunctionList::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next][crate::model::FunctionList::next].
    pub fn set_next<T: std::convert::Into<crate::model::ListNextMetadata>>(mut self, v: T) -> Self {
        self.next = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next][crate::model::FunctionList::next].
    pub fn set_or_clear_next<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ListNextMetadata>,
    {
        self.next = v.map(|x| x.into());
        self
    }

    /// Sets the value of [functions][crate::model::FunctionList::functions].
    pub fn set_functions<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Function>,
    {
        use std::iter::Iterator;
        self.functions = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl gax::paginator::internal::PageableResponse for FunctionList {
    type PageItem = crate::model::Function;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.functions
    }

    fn next_page_token(&self) -> std::string::String {
        self.next
            .as_ref()
            .and_then(crate::model::ListNextMetadata::start_token)
            .unwrap_or_default()
    }
}

/// A runtime available to functions.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct FunctionRuntime {
    /// Whether this is the default runtime of its family.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub default: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub deprecated: std::option::Option<bool>,

    /// The runtime family, for example `nodejs`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub family: std::option::Option<std::string::String>,

    /// The ID of the runtime, used in [FunctionPrototype::runtime].
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub optimized: std::option::Option<bool>,
}

impl FunctionRuntime {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [default][crate::model::FunctionRuntime::default].
    pub fn set_default<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.default = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [default][crate::model::FunctionRuntime::default].
    pub fn set_or_clear_default<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.default = v.map(|x| x.into());
        self
    }

    /// Sets the value of [deprecated][crate::model::FunctionRuntime::deprecated].
    pub fn set_deprecated<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.deprecated = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [deprecated][crate::model::FunctionRuntime::deprecated].
    pub fn set_or_clear_deprecated<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.deprecated = v.map(|x| x.into());
        self
    }

    /// Sets the value of [family][crate::model::FunctionRuntime::family].
    pub fn set_family<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.family = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [family][crate::model::FunctionRuntime::family].
    pub fn set_or_clear_family<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.family = v.map(|x| x.into());
        self
    }

    /// Sets the value of [id][crate::model::FunctionRuntime::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [id][crate::model::FunctionRuntime::id].
    pub fn set_or_clear_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::FunctionRuntime::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::FunctionRuntime::name].
    pub fn set_or_clear_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [optimized][crate::model::FunctionRuntime::optimized].
    pub fn set_optimized<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.optimized = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [optimized][crate::model::FunctionRuntime::optimized].
    pub fn set_or_clear_optimized<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.optimized = v.map(|x| x.into());
        self
    }
}

/// The runtimes available to functions.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct FunctionRuntimeList {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub function_runtimes: std::vec::Vec<crate::model::FunctionRuntime>,
}

impl FunctionRuntimeList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [function_runtimes][crate::model::FunctionRuntimeList::function_runtimes].
    pub fn set_function_runtimes<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::FunctionRuntime>,
    {
        use std::iter::Iterator;
        self.function_runtimes = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl gax::paginator::internal::PageableResponse for FunctionRuntimeList {
    type PageItem = crate::model::FunctionRuntime;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.function_runtimes
    }

    fn next_page_token(&self) -> std::string::String {
        // All the runtimes are returned in a single page.
        std::string::String::new()
    }
}

/// An allowed outbound destination given by a CIDR block.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CidrBlockData {
    /// The IPv4 address range, for example `10.0.0.0/24`.
    pub cidr_block: std::string::String,

    /// The version of the destination, present on resources returned by the
    /// service.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entity_tag: std::option::Option<std::string::String>,

    /// The name of the destination.
    pub name: std::string::String,
}

impl CidrBlockData {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [cidr_block][crate::model::CidrBlockData::cidr_block].
    pub fn set_cidr_block<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.cidr_block = v.into();
        self
    }

    /// Sets the value of [entity_tag][crate::model::CidrBlockData::entity_tag].
    pub fn set_entity_tag<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_tag = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [entity_tag][crate::model::CidrBlockData::entity_tag].
    pub fn set_or_clear_entity_tag<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.entity_tag = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::CidrBlockData::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// The changes to apply to a CIDR block destination.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CidrBlockDataPatch {
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub cidr_block: std::option::Option<std::string::String>,
}

impl CidrBlockDataPatch {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [cidr_block][crate::model::CidrBlockDataPatch::cidr_block].
    pub fn set_cidr_block<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.cidr_block = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [cidr_block][crate::model::CidrBlockDataPatch::cidr_block].
    pub fn set_or_clear_cidr_block<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.cidr_block = v.map(|x| x.into());
        self
    }
}

/// A page of allowed outbound destinations.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct AllowedOutboundDestinationList {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub allowed_outbound_destinations: std::vec::Vec<crate::model::AllowedOutboundDestination>,

    /// Describes a page of the collection.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub first: std::option::Option<crate::model::ListFirstMetadata>,

    /// Maximum number of resources per page.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub limit: std::option::Option<i64>,

    /// Describes the next page, absent on the last page.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub next: std::option::Option<crate::model::ListNextMetadata>,
}

impl AllowedOutboundDestinationList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [allowed_outbound_destinations][crate::model::AllowedOutboundDestinationList::allowed_outbound_destinations].
    pub fn set_allowed_outbound_destinations<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::AllowedOutboundDestination>,
    {
        use std::iter::Iterator;
        self.allowed_outbound_destinations = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [first][crate::model::AllowedOutboundDestinationList::first].
    pub fn set_first<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ListFirstMetadata>,
    {
        self.first = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [first][crate::model::AllowedOutboundDestinationList::first].
    pub fn set_or_clear_first<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ListFirstMetadata>,
    {
        self.first = v.map(|x| x.into());
        self
    }

    /// Sets the value of [limit][crate::model::AllowedOutboundDestinationList::limit].
    pub fn set_limit<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::AllowedOutboundDestinationList::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [next][crate::model::AllowedOutboundDestinationList::next].
    pub fn set_next<T: std::convert::Into<crate::model::ListNextMetadata>>(mut self, v: T) -> Self {
        self.next = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [next][crate::model::AllowedOutboundDestinationList::next].
    pub fn set_or_clear_next<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ListNextMetadata>,
    {
        self.next = v.map(|x| x.into());
        self
    }
}

impl gax::paginator::internal::PageableResponse for AllowedOutboundDestinationList {
    type PageItem = crate::model::AllowedOutboundDestination;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.allowed_outbound_destinations
    }

    fn next_page_token(&self) -> std::string::String {
        self.next
            .as_ref()
            .and_then(crate::model::ListNextMetadata::start_token)
            .unwrap_or_default()
    }
}

/// Defines additional types related to [Project].
pub mod project {
    /// The current state of a project.
    ///
    /// # Working with unknown values
    ///
    /// The service may add new values at any time. Values unknown to this
    /// version of the library are preserved in the `UnknownValue` variant, and
    /// serialized back unchanged.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum Status {
        Creating,
        CreationFailed,
        Deleting,
        DeletionFailed,
        /// The project is deleted, and can be restored.
        SoftDeleted,
        Preparing,
        Ready,
        HardDeleting,
        HardDeletionFailed,
        /// A value not known to this version of the library.
        UnknownValue(std::string::String),
    }

    impl Status {
        /// Gets the wire value of the enum.
        pub fn value(&self) -> &str {
            match self {
                Self::Creating => "creating",
                Self::CreationFailed => "creation_failed",
                Self::Deleting => "deleting",
                Self::DeletionFailed => "deletion_failed",
                Self::SoftDeleted => "soft_deleted",
                Self::Preparing => "preparing",
                Self::Ready => "ready",
                Self::HardDeleting => "hard_deleting",
                Self::HardDeletionFailed => "hard_deletion_failed",
                Self::UnknownValue(v) => v.as_str(),
            }
        }
    }

    impl std::fmt::Display for Status {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.value())
        }
    }

    impl std::convert::From<&str> for Status {
        fn from(value: &str) -> Self {
            match value {
                "creating" => Self::Creating,
                "creation_failed" => Self::CreationFailed,
                "deleting" => Self::Deleting,
                "deletion_failed" => Self::DeletionFailed,
                "soft_deleted" => Self::SoftDeleted,
                "preparing" => Self::Preparing,
                "ready" => Self::Ready,
                "hard_deleting" => Self::HardDeleting,
                "hard_deletion_failed" => Self::HardDeletionFailed,
                _ => Self::UnknownValue(value.to_string()),
            }
        }
    }

    impl serde::ser::Serialize for Status {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.value())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for Status {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// Defines additional types related to [App].
pub mod app {
    /// The current status of an app.
    ///
    /// # Working with unknown values
    ///
    /// The service may add new values at any time. Values unknown to this
    /// version of the library are preserved in the `UnknownValue` variant, and
    /// serialized back unchanged.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum Status {
        Ready,
        Deploying,
        Failed,
        Warning,
        /// A value not known to this version of the library.
        UnknownValue(std::string::String),
    }

    impl Status {
        /// Gets the wire value of the enum.
        pub fn value(&self) -> &str {
            match self {
                Self::Ready => "ready",
                Self::Deploying => "deploying",
                Self::Failed => "failed",
                Self::Warning => "warning",
                Self::UnknownValue(v) => v.as_str(),
            }
        }
    }

    impl std::fmt::Display for Status {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.value())
        }
    }

    impl std::convert::From<&str> for Status {
        fn from(value: &str) -> Self {
            match value {
                "ready" => Self::Ready,
                "deploying" => Self::Deploying,
                "failed" => Self::Failed,
                "warning" => Self::Warning,
                _ => Self::UnknownValue(value.to_string()),
            }
        }
    }

    impl serde::ser::Serialize for Status {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.value())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for Status {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// Defines additional types related to [AppRevision].
pub mod app_revision {
    /// The current status of an app revision.
    ///
    /// # Working with unknown values
    ///
    /// The service may add new values at any time. Values unknown to this
    /// version of the library are preserved in the `UnknownValue` variant, and
    /// serialized back unchanged.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum Status {
        Ready,
        Loading,
        Warning,
        Failed,
        /// A value not known to this version of the library.
        UnknownValue(std::string::String),
    }

    impl Status {
        /// Gets the wire value of the enum.
        pub fn value(&self) -> &str {
            match self {
                Self::Ready => "ready",
                Self::Loading => "loading",
                Self::Warning => "warning",
                Self::Failed => "failed",
                Self::UnknownValue(v) => v.as_str(),
            }
        }
    }

    impl std::fmt::Display for Status {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.value())
        }
    }

    impl std::convert::From<&str> for Status {
        fn from(value: &str) -> Self {
            match value {
                "ready" => Self::Ready,
                "loading" => Self::Loading,
                "warning" => Self::Warning,
                "failed" => Self::Failed,
                _ => Self::UnknownValue(value.to_string()),
            }
        }
    }

    impl serde::ser::Serialize for Status {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.value())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for Status {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// Defines additional types related to [AppInstance].
pub mod app_instance {
    /// The current status of an app instance.
    ///
    /// # Working with unknown values
    ///
    /// The service may add new values at any time. Values unknown to this
    /// version of the library are preserved in the `UnknownValue` variant, and
    /// serialized back unchanged.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum Status {
        Pending,
        Running,
        Succeeded,
        Failed,
        /// A value not known to this version of the library.
        UnknownValue(std::string::String),
    }

    impl Status {
        /// Gets the wire value of the enum.
        pub fn value(&self) -> &str {
            match self {
                Self::Pending => "pending",
                Self::Running => "running",
                Self::Succeeded => "succeeded",
                Self::Failed => "failed",
                Self::UnknownValue(v) => v.as_str(),
            }
        }
    }

    impl std::fmt::Display for Status {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.value())
        }
    }

    impl std::convert::From<&str> for Status {
        fn from(value: &str) -> Self {
            match value {
                "pending" => Self::Pending,
                "running" => Self::Running,
                "succeeded" => Self::Succeeded,
                "failed" => Self::Failed,
                _ => Self::UnknownValue(value.to_string()),
            }
        }
    }

    impl serde::ser::Serialize for Status {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.value())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for Status {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// Defines additional types related to [JobRun].
pub mod job_run {
    /// The current status of a job run.
    ///
    /// # Working with unknown values
    ///
    /// The service may add new values at any time. Values unknown to this
    /// version of the library are preserved in the `UnknownValue` variant, and
    /// serialized back unchanged.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum Status {
        Failed,
        Completed,
        Running,
        Pending,
        /// A value not known to this version of the library.
        UnknownValue(std::string::String),
    }

    impl Status {
        /// Gets the wire value of the enum.
        pub fn value(&self) -> &str {
            match self {
                Self::Failed => "failed",
                Self::Completed => "completed",
                Self::Running => "running",
                Self::Pending => "pending",
                Self::UnknownValue(v) => v.as_str(),
            }
        }
    }

    impl std::fmt::Display for Status {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.value())
        }
    }

    impl std::convert::From<&str> for Status {
        fn from(value: &str) -> Self {
            match value {
                "failed" => Self::Failed,
                "completed" => Self::Completed,
                "running" => Self::Running,
                "pending" => Self::Pending,
                _ => Self::UnknownValue(value.to_string()),
            }
        }
    }

    impl serde::ser::Serialize for Status {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.value())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for Status {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// Defines additional types related to [Build].
pub mod build {
    /// The current status of a build.
    ///
    /// # Working with unknown values
    ///
    /// The service may add new values at any time. Values unknown to this
    /// version of the library are preserved in the `UnknownValue` variant, and
    /// serialized back unchanged.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum Status {
        Ready,
        Failed,
        /// A value not known to this version of the library.
        UnknownValue(std::string::String),
    }

    impl Status {
        /// Gets the wire value of the enum.
        pub fn value(&self) -> &str {
            match self {
                Self::Ready => "ready",
                Self::Failed => "failed",
                Self::UnknownValue(v) => v.as_str(),
            }
        }
    }

    impl std::fmt::Display for Status {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.value())
        }
    }

    impl std::convert::From<&str> for Status {
        fn from(value: &str) -> Self {
            match value {
                "ready" => Self::Ready,
                "failed" => Self::Failed,
                _ => Self::UnknownValue(value.to_string()),
            }
        }
    }

    impl serde::ser::Serialize for Status {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.value())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for Status {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// Defines additional types related to [BuildRun].
pub mod build_run {
    /// The current status of a build run.
    ///
    /// # Working with unknown values
    ///
    /// The service may add new values at any time. Values unknown to this
    /// version of the library are preserved in the `UnknownValue` variant, and
    /// serialized back unchanged.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum Status {
        Succeeded,
        Running,
        Pending,
        Failed,
        /// A value not known to this version of the library.
        UnknownValue(std::string::String),
    }

    impl Status {
        /// Gets the wire value of the enum.
        pub fn value(&self) -> &str {
            match self {
                Self::Succeeded => "succeeded",
                Self::Running => "running",
                Self::Pending => "pending",
                Self::Failed => "failed",
                Self::UnknownValue(v) => v.as_str(),
            }
        }
    }

    impl std::fmt::Display for Status {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.value())
        }
    }

    impl std::convert::From<&str> for Status {
        fn from(value: &str) -> Self {
            match value {
                "succeeded" => Self::Succeeded,
                "running" => Self::Running,
                "pending" => Self::Pending,
                "failed" => Self::Failed,
                _ => Self::UnknownValue(value.to_string()),
            }
        }
    }

    impl serde::ser::Serialize for Status {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.value())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for Status {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// Defines additional types related to [Binding].
pub mod binding {
    /// The current status of a binding.
    ///
    /// # Working with unknown values
    ///
    /// The service may add new values at any time. Values unknown to this
    /// version of the library are preserved in the `UnknownValue` variant, and
    /// serialized back unchanged.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum Status {
        Creating,
        Active,
        Deleting,
        Failed,
        /// A value not known to this version of the library.
        UnknownValue(std::string::String),
    }

    impl Status {
        /// Gets the wire value of the enum.
        pub fn value(&self) -> &str {
            match self {
                Self::Creating => "creating",
                Self::Active => "active",
                Self::Deleting => "deleting",
                Self::Failed => "failed",
                Self::UnknownValue(v) => v.as_str(),
            }
        }
    }

    impl std::fmt::Display for Status {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.value())
        }
    }

    impl std::convert::From<&str> for Status {
        fn from(value: &str) -> Self {
            match value {
                "creating" => Self::Creating,
                "active" => Self::Active,
                "deleting" => Self::Deleting,
                "failed" => Self::Failed,
                _ => Self::UnknownValue(value.to_string()),
            }
        }
    }

    impl serde::ser::Serialize for Status {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.value())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for Status {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// Defines additional types related to [DomainMapping].
pub mod domain_mapping {
    /// The current status of a domain mapping.
    ///
    /// # Working with unknown values
    ///
    /// The service may add new values at any time. Values unknown to this
    /// version of the library are preserved in the `UnknownValue` variant, and
    /// serialized back unchanged.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum Status {
        Ready,
        Failed,
        Deploying,
        /// A value not known to this version of the library.
        UnknownValue(std::string::String),
    }

    impl Status {
        /// Gets the wire value of the enum.
        pub fn value(&self) -> &str {
            match self {
                Self::Ready => "ready",
                Self::Failed => "failed",
                Self::Deploying => "deploying",
                Self::UnknownValue(v) => v.as_str(),
            }
        }
    }

    impl std::fmt::Display for Status {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.value())
        }
    }

    impl std::convert::From<&str> for Status {
        fn from(value: &str) -> Self {
            match value {
                "ready" => Self::Ready,
                "failed" => Self::Failed,
                "deploying" => Self::Deploying,
                _ => Self::UnknownValue(value.to_string()),
            }
        }
    }

    impl serde::ser::Serialize for Status {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.value())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for Status {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// Defines additional types related to [Function].
pub mod function {
    /// The current status of a function.
    ///
    /// # Working with unknown values
    ///
    /// The service may add new values at any time. Values unknown to this
    /// version of the library are preserved in the `UnknownValue` variant, and
    /// serialized back unchanged.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum Status {
        Offline,
        Deploying,
        Ready,
        Failed,
        /// A value not known to this version of the library.
        UnknownValue(std::string::String),
    }

    impl Status {
        /// Gets the wire value of the enum.
        pub fn value(&self) -> &str {
            match self {
                Self::Offline => "offline",
                Self::Deploying => "deploying",
                Self::Ready => "ready",
                Self::Failed => "failed",
                Self::UnknownValue(v) => v.as_str(),
            }
        }
    }

    impl std::fmt::Display for Status {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.value())
        }
    }

    impl std::convert::From<&str> for Status {
        fn from(value: &str) -> Self {
            match value {
                "offline" => Self::Offline,
                "deploying" => Self::Deploying,
                "ready" => Self::Ready,
                "failed" => Self::Failed,
                _ => Self::UnknownValue(value.to_string()),
            }
        }
    }

    impl serde::ser::Serialize for Status {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.value())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for Status {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// Defines additional types related to [EnvVar].
pub mod env_var {
    /// The kind of an environment variable.
    ///
    /// # Working with unknown values
    ///
    /// The service may add new values at any time. Values unknown to this
    /// version of the library are preserved in the `UnknownValue` variant, and
    /// serialized back unchanged.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum Type {
        /// A literal value.
        Literal,
        Key,
        /// All the keys of a config map.
        ConfigMapFullReference,
        /// All the keys of a secret.
        SecretFullReference,
        /// A single key of a config map.
        ConfigMapKeyReference,
        /// A single key of a secret.
        SecretKeyReference,
        /// A value not known to this version of the library.
        UnknownValue(std::string::String),
    }

    impl Type {
        /// Gets the wire value of the enum.
        pub fn value(&self) -> &str {
            match self {
                Self::Literal => "literal",
                Self::Key => "key",
                Self::ConfigMapFullReference => "config_map_full_reference",
                Self::SecretFullReference => "secret_full_reference",
                Self::ConfigMapKeyReference => "config_map_key_reference",
                Self::SecretKeyReference => "secret_key_reference",
                Self::UnknownValue(v) => v.as_str(),
            }
        }
    }

    impl std::fmt::Display for Type {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.value())
        }
    }

    impl std::convert::From<&str> for Type {
        fn from(value: &str) -> Self {
            match value {
                "literal" => Self::Literal,
                "key" => Self::Key,
                "config_map_full_reference" => Self::ConfigMapFullReference,
                "secret_full_reference" => Self::SecretFullReference,
                "config_map_key_reference" => Self::ConfigMapKeyReference,
                "secret_key_reference" => Self::SecretKeyReference,
                _ => Self::UnknownValue(value.to_string()),
            }
        }
    }

    impl serde::ser::Serialize for Type {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.value())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for Type {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// Defines additional types related to [VolumeMount].
pub mod volume_mount {
    /// The kind of a mounted volume.
    ///
    /// # Working with unknown values
    ///
    /// The service may add new values at any time. Values unknown to this
    /// version of the library are preserved in the `UnknownValue` variant, and
    /// serialized back unchanged.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum Type {
        ConfigMap,
        Secret,
        PersistentDataStore,
        /// A value not known to this version of the library.
        UnknownValue(std::string::String),
    }

    impl Type {
        /// Gets the wire value of the enum.
        pub fn value(&self) -> &str {
            match self {
                Self::ConfigMap => "config_map",
                Self::Secret => "secret",
                Self::PersistentDataStore => "persistent_data_store",
                Self::UnknownValue(v) => v.as_str(),
            }
        }
    }

    impl std::fmt::Display for Type {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.value())
        }
    }

    impl std::convert::From<&str> for Type {
        fn from(value: &str) -> Self {
            match value {
                "config_map" => Self::ConfigMap,
                "secret" => Self::Secret,
                "persistent_data_store" => Self::PersistentDataStore,
                _ => Self::UnknownValue(value.to_string()),
            }
        }
    }

    impl serde::ser::Serialize for Type {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.value())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for Type {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// Defines additional types related to [Probe].
pub mod probe {
    /// The kind of a probe.
    ///
    /// # Working with unknown values
    ///
    /// The service may add new values at any time. Values unknown to this
    /// version of the library are preserved in the `UnknownValue` variant, and
    /// serialized back unchanged.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum Type {
        Tcp,
        Http,
        /// A value not known to this version of the library.
        UnknownValue(std::string::String),
    }

    impl Type {
        /// Gets the wire value of the enum.
        pub fn value(&self) -> &str {
            match self {
                Self::Tcp => "tcp",
                Self::Http => "http",
                Self::UnknownValue(v) => v.as_str(),
            }
        }
    }

    impl std::fmt::Display for Type {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.value())
        }
    }

    impl std::convert::From<&str> for Type {
        fn from(value: &str) -> Self {
            match value {
                "tcp" => Self::Tcp,
                "http" => Self::Http,
                _ => Self::UnknownValue(value.to_string()),
            }
        }
    }

    impl serde::ser::Serialize for Type {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.value())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for Type {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
            Ok(Self::from(value.as_str()))
        }
    }
}

/// The mode of a job run.
///
/// # Working with unknown values
///
/// The service may add new values at any time. Values unknown to this
/// version of the library are preserved in the `UnknownValue` variant, and
/// serialized back unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum JobRunMode {
    /// Instances run to completion.
    Task,
    /// Instances run indefinitely, and are restarted on failure.
    Daemon,
    /// A value not known to this version of the library.
    UnknownValue(std::string::String),
}

impl JobRunMode {
    /// Gets the wire value of the enum.
    pub fn value(&self) -> &str {
        match self {
            Self::Task => "task",
            Self::Daemon => "daemon",
            Self::UnknownValue(v) => v.as_str(),
        }
    }
}

impl std::fmt::Display for JobRunMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.value())
    }
}

impl std::convert::From<&str> for JobRunMode {
    fn from(value: &str) -> Self {
        match value {
            "task" => Self::Task,
            "daemon" => Self::Daemon,
            _ => Self::UnknownValue(value.to_string()),
        }
    }
}

impl serde::ser::Serialize for JobRunMode {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.value())
    }
}

impl<'de> serde::de::Deserialize<'de> for JobRunMode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The service account used by a workload.
///
/// # Working with unknown values
///
/// The service may add new values at any time. Values unknown to this
/// version of the library are preserved in the `UnknownValue` variant, and
/// serialized back unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ServiceAccount {
    Default,
    Manager,
    Reader,
    Writer,
    None,
    /// A value not known to this version of the library.
    UnknownValue(std::string::String),
}

impl ServiceAccount {
    /// Gets the wire value of the enum.
    pub fn value(&self) -> &str {
        match self {
            Self::Default => "default",
            Self::Manager => "manager",
            Self::Reader => "reader",
            Self::Writer => "writer",
            Self::None => "none",
            Self::UnknownValue(v) => v.as_str(),
        }
    }
}

impl std::fmt::Display for ServiceAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.value())
    }
}

impl std::convert::From<&str> for ServiceAccount {
    fn from(value: &str) -> Self {
        match value {
            "default" => Self::Default,
            "manager" => Self::Manager,
            "reader" => Self::Reader,
            "writer" => Self::Writer,
            "none" => Self::None,
            _ => Self::UnknownValue(value.to_string()),
        }
    }
}

impl serde::ser::Serialize for ServiceAccount {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.value())
    }
}

impl<'de> serde::de::Deserialize<'de> for ServiceAccount {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// Which domain mappings are managed for an app or function.
///
/// # Working with unknown values
///
/// The service may add new values at any time. Values unknown to this
/// version of the library are preserved in the `UnknownValue` variant, and
/// serialized back unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ManagedDomainMappings {
    /// Only reachable from within the project.
    Local,
    LocalPrivate,
    LocalPublic,
    /// A value not known to this version of the library.
    UnknownValue(std::string::String),
}

impl ManagedDomainMappings {
    /// Gets the wire value of the enum.
    pub fn value(&self) -> &str {
        match self {
            Self::Local => "local",
            Self::LocalPrivate => "local_private",
            Self::LocalPublic => "local_public",
            Self::UnknownValue(v) => v.as_str(),
        }
    }
}

impl std::fmt::Display for ManagedDomainMappings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.value())
    }
}

impl std::convert::From<&str> for ManagedDomainMappings {
    fn from(value: &str) -> Self {
        match value {
            "local" => Self::Local,
            "local_private" => Self::LocalPrivate,
            "local_public" => Self::LocalPublic,
            _ => Self::UnknownValue(value.to_string()),
        }
    }
}

impl serde::ser::Serialize for ManagedDomainMappings {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.value())
    }
}

impl<'de> serde::de::Deserialize<'de> for ManagedDomainMappings {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// Where the source code of a build is located.
///
/// # Working with unknown values
///
/// The service may add new values at any time. Values unknown to this
/// version of the library are preserved in the `UnknownValue` variant, and
/// serialized back unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum BuildSourceType {
    /// The source is uploaded from the local machine.
    Local,
    /// The source is in a git repository.
    Git,
    /// A value not known to this version of the library.
    UnknownValue(std::string::String),
}

impl BuildSourceType {
    /// Gets the wire value of the enum.
    pub fn value(&self) -> &str {
        match self {
            Self::Local => "local",
            Self::Git => "git",
            Self::UnknownValue(v) => v.as_str(),
        }
    }
}

impl std::fmt::Display for BuildSourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.value())
    }
}

impl std::convert::From<&str> for BuildSourceType {
    fn from(value: &str) -> Self {
        match value {
            "local" => Self::Local,
            "git" => Self::Git,
            _ => Self::UnknownValue(value.to_string()),
        }
    }
}

impl serde::ser::Serialize for BuildSourceType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.value())
    }
}

impl<'de> serde::de::Deserialize<'de> for BuildSourceType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The format of a secret.
///
/// # Working with unknown values
///
/// The service may add new values at any time. Values unknown to this
/// version of the library are preserved in the `UnknownValue` variant, and
/// serialized back unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SecretFormat {
    Generic,
    SshAuth,
    BasicAuth,
    HmacAuth,
    Tls,
    ServiceAccess,
    ServiceOperator,
    Registry,
    Other,
    /// A value not known to this version of the library.
    UnknownValue(std::string::String),
}

impl SecretFormat {
    /// Gets the wire value of the enum.
    pub fn value(&self) -> &str {
        match self {
            Self::Generic => "generic",
            Self::SshAuth => "ssh_auth",
            Self::BasicAuth => "basic_auth",
            Self::HmacAuth => "hmac_auth",
            Self::Tls => "tls",
            Self::ServiceAccess => "service_access",
            Self::ServiceOperator => "service_operator",
            Self::Registry => "registry",
            Self::Other => "other",
            Self::UnknownValue(v) => v.as_str(),
        }
    }
}

impl std::fmt::Display for SecretFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.value())
    }
}

impl std::convert::From<&str> for SecretFormat {
    fn from(value: &str) -> Self {
        match value {
            "generic" => Self::Generic,
            "ssh_auth" => Self::SshAuth,
            "basic_auth" => Self::BasicAuth,
            "hmac_auth" => Self::HmacAuth,
            "tls" => Self::Tls,
            "service_access" => Self::ServiceAccess,
            "service_operator" => Self::ServiceOperator,
            "registry" => Self::Registry,
            "other" => Self::Other,
            _ => Self::UnknownValue(value.to_string()),
        }
    }
}

impl serde::ser::Serialize for SecretFormat {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.value())
    }
}

impl<'de> serde::de::Deserialize<'de> for SecretFormat {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <std::string::String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The request for [CodeEngine::list_projects][crate::client::CodeEngine::list_projects].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListProjectsRequest {
    /// The maximum number of items in each page, between 1 and 100.
    pub limit: std::option::Option<i64>,

    /// The token of the page to return, as found in the `next` field of a
    /// previous page.
    pub start: std::option::Option<std::string::String>,
}

impl ListProjectsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [limit][crate::model::ListProjectsRequest::limit].
    pub fn set_limit<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListProjectsRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [start][crate::model::ListProjectsRequest::start].
    pub fn set_start<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.start = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [start][crate::model::ListProjectsRequest::start].
    pub fn set_or_clear_start<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.start = v.map(|x| x.into());
        self
    }
}

/// The request for [CodeEngine::create_project][crate::client::CodeEngine::create_project].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateProjectRequest {
    pub body: crate::model::ProjectPrototype,
}

impl CreateProjectRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [body][crate::model::CreateProjectRequest::body].
    pub fn set_body<T: std::convert::Into<crate::model::ProjectPrototype>>(mut self, v: T) -> Self {
        self.body = v.into();
        self
    }
}

/// The request for [CodeEngine::get_project][crate::client::CodeEngine::get_project].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetProjectRequest {
    /// The ID of the project.
    pub id: std::string::String,
}

impl GetProjectRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::GetProjectRequest::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }
}

/// The request for [CodeEngine::delete_project][crate::client::CodeEngine::delete_project].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteProjectRequest {
    /// The ID of the project.
    pub id: std::string::String,
}

impl DeleteProjectRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::DeleteProjectRequest::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }
}

/// The request for [CodeEngine::get_project_egress_ips][crate::client::CodeEngine::get_project_egress_ips].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetProjectEgressIpsRequest {
    /// The ID of the project.
    pub project_id: std::string::String,
}

impl GetProjectEgressIpsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::GetProjectEgressIpsRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }
}

/// The request for [CodeEngine::get_project_status_details][crate::client::CodeEngine::get_project_status_details].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetProjectStatusDetailsRequest {
    /// The ID of the project.
    pub project_id: std::string::String,
}

impl GetProjectStatusDetailsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::GetProjectStatusDetailsRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }
}

/// The request for [CodeEngine::list_allowed_outbound_destinations][crate::client::CodeEngine::list_allowed_outbound_destinations].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListAllowedOutboundDestinationsRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    /// The maximum number of items in each page, between 1 and 100.
    pub limit: std::option::Option<i64>,

    /// The token of the page to return, as found in the `next` field of a
    /// previous page.
    pub start: std::option::Option<std::string::String>,
}

impl ListAllowedOutboundDestinationsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::ListAllowedOutboundDestinationsRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [limit][crate::model::ListAllowedOutboundDestinationsRequest::limit].
    pub fn set_limit<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListAllowedOutboundDestinationsRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [start][crate::model::ListAllowedOutboundDestinationsRequest::start].
    pub fn set_start<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.start = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [start][crate::model::ListAllowedOutboundDestinationsRequest::start].
    pub fn set_or_clear_start<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.start = v.map(|x| x.into());
        self
    }
}

/// The request for [CodeEngine::create_allowed_outbound_destination][crate::client::CodeEngine::create_allowed_outbound_destination].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateAllowedOutboundDestinationRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    pub body: crate::model::AllowedOutboundDestinationPrototype,
}

impl CreateAllowedOutboundDestinationRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::CreateAllowedOutboundDestinationRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [body][crate::model::CreateAllowedOutboundDestinationRequest::body].
    pub fn set_body<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::AllowedOutboundDestinationPrototype>,
    {
        self.body = v.into();
        self
    }
}

/// The request for [CodeEngine::get_allowed_outbound_destination][crate::client::CodeEngine::get_allowed_outbound_destination].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetAllowedOutboundDestinationRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    /// The name of the allowed outbound destination.
    pub name: std::string::String,
}

impl GetAllowedOutboundDestinationRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::GetAllowedOutboundDestinationRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [name][crate::model::GetAllowedOutboundDestinationRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// The request for [CodeEngine::update_allowed_outbound_destination][crate::client::CodeEngine::update_allowed_outbound_destination].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateAllowedOutboundDestinationRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    /// The name of the allowed outbound destination.
    pub name: std::string::String,

    /// The entity tag of the resource, the request fails if it changed since it
    /// was read.
    pub if_match: std::string::String,

    pub body: crate::model::AllowedOutboundDestinationPatch,

    /// Fields removed from the resource, sent as explicit `null` values.
    pub clear_fields: std::vec::Vec<std::string::String>,
}

impl UpdateAllowedOutboundDestinationRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::UpdateAllowedOutboundDestinationRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [name][crate::model::UpdateAllowedOutboundDestinationRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [if_match][crate::model::UpdateAllowedOutboundDestinationRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = v.into();
        self
    }

    /// Sets the value of [body][crate::model::UpdateAllowedOutboundDestinationRequest::body].
    pub fn set_body<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::AllowedOutboundDestinationPatch>,
    {
        self.body = v.into();
        self
    }

    /// Sets the value of [clear_fields][crate::model::UpdateAllowedOutboundDestinationRequest::clear_fields].
    pub fn set_clear_fields<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.clear_fields = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The request for [CodeEngine::delete_allowed_outbound_destination][crate::client::CodeEngine::delete_allowed_outbound_destination].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteAllowedOutboundDestinationRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    /// The name of the allowed outbound destination.
    pub name: std::string::String,
}

impl DeleteAllowedOutboundDestinationRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::DeleteAllowedOutboundDestinationRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [name][crate::model::DeleteAllowedOutboundDestinationRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// The request for [CodeEngine::list_apps][crate::client::CodeEngine::list_apps].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListAppsRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    /// The maximum number of items in each page, between 1 and 100.
    pub limit: std::option::Option<i64>,

    /// The token of the page to return, as found in the `next` field of a
    /// previous page.
    pub start: std::option::Option<std::string::String>,
}

impl ListAppsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::ListAppsRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [limit][crate::model::ListAppsRequest::limit].
    pub fn set_limit<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListAppsRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [start][crate::model::ListAppsRequest::start].
    pub fn set_start<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.start = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [start][crate::model::ListAppsRequest::start].
    pub fn set_or_clear_start<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.start = v.map(|x| x.into());
        self
    }
}

/// The request for [CodeEngine::create_app][crate::client::CodeEngine::create_app].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateAppRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    pub body: crate::model::AppPrototype,
}

impl CreateAppRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::CreateAppRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [body][crate::model::CreateAppRequest::body].
    pub fn set_body<T: std::convert::Into<crate::model::AppPrototype>>(mut self, v: T) -> Self {
        self.body = v.into();
        self
    }
}

/// The request for [CodeEngine::get_app][crate::client::CodeEngine::get_app].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetAppRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    /// The name of the app.
    pub name: std::string::String,
}

impl GetAppRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::GetAppRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [name][crate::model::GetAppRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// The request for [CodeEngine::update_app][crate::client::CodeEngine::update_app].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateAppRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    /// The name of the app.
    pub name: std::string::String,

    /// The entity tag of the resource, the request fails if it changed since it
    /// was read.
    pub if_match: std::string::String,

    pub body: crate::model::AppPatch,

    /// Fields removed from the resource, sent as explicit `null` values.
    pub clear_fields: std::vec::Vec<std::string::String>,
}

impl UpdateAppRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::UpdateAppRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [name][crate::model::UpdateAppRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [if_match][crate::model::UpdateAppRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = v.into();
        self
    }

    /// Sets the value of [body][crate::model::UpdateAppRequest::body].
    pub fn set_body<T: std::convert::Into<crate::model::AppPatch>>(mut self, v: T) -> Self {
        self.body = v.into();
        self
    }

    /// Sets the value of [clear_fields][crate::model::UpdateAppRequest::clear_fields].
    pub fn set_clear_fields<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.clear_fields = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The request for [CodeEngine::delete_app][crate::client::CodeEngine::delete_app].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteAppRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    /// The name of the app.
    pub name: std::string::String,
}

impl DeleteAppRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::DeleteAppRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [name][crate::model::DeleteAppRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// The request for [CodeEngine::list_app_instances][crate::client::CodeEngine::list_app_instances].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListAppInstancesRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    /// The name of the app.
    pub app_name: std::string::String,

    /// The maximum number of items in each page, between 1 and 100.
    pub limit: std::option::Option<i64>,

    /// The token of the page to return, as found in the `next` field of a
    /// previous page.
    pub start: std::option::Option<std::string::String>,
}

impl ListAppInstancesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::ListAppInstancesRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [app_name][crate::model::ListAppInstancesRequest::app_name].
    pub fn set_app_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.app_name = v.into();
        self
    }

    /// Sets the value of [limit][crate::model::ListAppInstancesRequest::limit].
    pub fn set_limit<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListAppInstancesRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [start][crate::model::ListAppInstancesRequest::start].
    pub fn set_start<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.start = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [start][crate::model::ListAppInstancesRequest::start].
    pub fn set_or_clear_start<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.start = v.map(|x| x.into());
        self
    }
}

/// The request for [CodeEngine::list_app_revisions][crate::client::CodeEngine::list_app_revisions].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListAppRevisionsRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    /// The name of the app.
    pub app_name: std::string::String,

    /// The maximum number of items in each page, between 1 and 100.
    pub limit: std::option::Option<i64>,

    /// The token of the page to return, as found in the `next` field of a
    /// previous page.
    pub start: std::option::Option<std::string::String>,
}

impl ListAppRevisionsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::ListAppRevisionsRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [app_name][crate::model::ListAppRevisionsRequest::app_name].
    pub fn set_app_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.app_name = v.into();
        self
    }

    /// Sets the value of [limit][crate::model::ListAppRevisionsRequest::limit].
    pub fn set_limit<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListAppRevisionsRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [start][crate::model::ListAppRevisionsRequest::start].
    pub fn set_start<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.start = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [start][crate::model::ListAppRevisionsRequest::start].
    pub fn set_or_clear_start<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.start = v.map(|x| x.into());
        self
    }
}

/// The request for [CodeEngine::get_app_revision][crate::client::CodeEngine::get_app_revision].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetAppRevisionRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    /// The name of the app.
    pub app_name: std::string::String,

    /// The name of the app revision.
    pub name: std::string::String,
}

impl GetAppRevisionRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::GetAppRevisionRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [app_name][crate::model::GetAppRevisionRequest::app_name].
    pub fn set_app_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.app_name = v.into();
        self
    }

    /// Sets the value of [name][crate::model::GetAppRevisionRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// The request for [CodeEngine::delete_app_revision][crate::client::CodeEngine::delete_app_revision].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteAppRevisionRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    /// The name of the app.
    pub app_name: std::string::String,

    /// The name of the app revision.
    pub name: std::string::String,
}

impl DeleteAppRevisionRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::DeleteAppRevisionRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [app_name][crate::model::DeleteAppRevisionRequest::app_name].
    pub fn set_app_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.app_name = v.into();
        self
    }

    /// Sets the value of [name][crate::model::DeleteAppRevisionRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// The request for [CodeEngine::list_function_runtimes][crate::client::CodeEngine::list_function_runtimes].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListFunctionRuntimesRequest {
}

impl ListFunctionRuntimesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

/// The request for [CodeEngine::list_functions][crate::client::CodeEngine::list_functions].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListFunctionsRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    /// The maximum number of items in each page, between 1 and 100.
    pub limit: std::option::Option<i64>,

    /// The token of the page to return, as found in the `next` field of a
    /// previous page.
    pub start: std::option::Option<std::string::String>,
}

impl ListFunctionsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::ListFunctionsRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [limit][crate::model::ListFunctionsRequest::limit].
    pub fn set_limit<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListFunctionsRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [start][crate::model::ListFunctionsRequest::start].
    pub fn set_start<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.start = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [start][crate::model::ListFunctionsRequest::start].
    pub fn set_or_clear_start<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.start = v.map(|x| x.into());
        self
    }
}

/// The request for [CodeEngine::create_function][crate::client::CodeEngine::create_function].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateFunctionRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    pub body: crate::model::FunctionPrototype,
}

impl CreateFunctionRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::CreateFunctionRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [body][crate::model::CreateFunctionRequest::body].
    pub fn set_body<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::FunctionPrototype>,
    {
        self.body = v.into();
        self
    }
}

/// The request for [CodeEngine::get_function][crate::client::CodeEngine::get_function].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetFunctionRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    /// The name of the function.
    pub name: std::string::String,
}

impl GetFunctionRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::GetFunctionRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [name][crate::model::GetFunctionRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// The request for [CodeEngine::update_function][crate::client::CodeEngine::update_function].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateFunctionRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    /// The name of the function.
    pub name: std::string::String,

    /// The entity tag of the resource, the request fails if it changed since it
    /// was read.
    pub if_match: std::string::String,

    pub body: crate::model::FunctionPatch,

    /// Fields removed from the resource, sent as explicit `null` values.
    pub clear_fields: std::vec::Vec<std::string::String>,
}

impl UpdateFunctionRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::UpdateFunctionRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [name][crate::model::UpdateFunctionRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [if_match][crate::model::UpdateFunctionRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = v.into();
        self
    }

    /// Sets the value of [body][crate::model::UpdateFunctionRequest::body].
    pub fn set_body<T: std::convert::Into<crate::model::FunctionPatch>>(mut self, v: T) -> Self {
        self.body = v.into();
        self
    }

    /// Sets the value of [clear_fields][crate::model::UpdateFunctionRequest::clear_fields].
    pub fn set_clear_fields<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.clear_fields = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The request for [CodeEngine::delete_function][crate::client::CodeEngine::delete_function].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteFunctionRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    /// The name of the function.
    pub name: std::string::String,
}

impl DeleteFunctionRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::DeleteFunctionRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [name][crate::model::DeleteFunctionRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// The request for [CodeEngine::list_jobs][crate::client::CodeEngine::list_jobs].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListJobsRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    /// The maximum number of items in each page, between 1 and 100.
    pub limit: std::option::Option<i64>,

    /// The token of the page to return, as found in the `next` field of a
    /// previous page.
    pub start: std::option::Option<std::string::String>,
}

impl ListJobsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::ListJobsRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [limit][crate::model::ListJobsRequest::limit].
    pub fn set_limit<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListJobsRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [start][crate::model::ListJobsRequest::start].
    pub fn set_start<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.start = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [start][crate::model::ListJobsRequest::start].
    pub fn set_or_clear_start<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.start = v.map(|x| x.into());
        self
    }
}

/// The request for [CodeEngine::create_job][crate::client::CodeEngine::create_job].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateJobRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    pub body: crate::model::JobPrototype,
}

impl CreateJobRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::CreateJobRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [body][crate::model::CreateJobRequest::body].
    pub fn set_body<T: std::convert::Into<crate::model::JobPrototype>>(mut self, v: T) -> Self {
        self.body = v.into();
        self
    }
}

/// The request for [CodeEngine::get_job][crate::client::CodeEngine::get_job].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetJobRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    /// The name of the job.
    pub name: std::string::String,
}

impl GetJobRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::GetJobRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [name][crate::model::GetJobRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// The request for [CodeEngine::update_job][crate::client::CodeEngine::update_job].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateJobRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    /// The name of the job.
    pub name: std::string::String,

    /// The entity tag of the resource, the request fails if it changed since it
    /// was read.
    pub if_match: std::string::String,

    pub body: crate::model::JobPatch,

    /// Fields removed from the resource, sent as explicit `null` values.
    pub clear_fields: std::vec::Vec<std::string::String>,
}

impl UpdateJobRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::UpdateJobRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [name][crate::model::UpdateJobRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [if_match][crate::model::UpdateJobRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = v.into();
        self
    }

    /// Sets the value of [body][crate::model::UpdateJobRequest::body].
    pub fn set_body<T: std::convert::Into<crate::model::JobPatch>>(mut self, v: T) -> Self {
        self.body = v.into();
        self
    }

    /// Sets the value of [clear_fields][crate::model::UpdateJobRequest::clear_fields].
    pub fn set_clear_fields<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.clear_fields = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The request for [CodeEngine::delete_job][crate::client::CodeEngine::delete_job].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteJobRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    /// The name of the job.
    pub name: std::string::String,
}

impl DeleteJobRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::DeleteJobRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [name][crate::model::DeleteJobRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// The request for [CodeEngine::list_job_runs][crate::client::CodeEngine::list_job_runs].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListJobRunsRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    /// The maximum number of items in each page, between 1 and 100.
    pub limit: std::option::Option<i64>,

    /// The token of the page to return, as found in the `next` field of a
    /// previous page.
    pub start: std::option::Option<std::string::String>,

    /// Only return the runs of this job.
    pub job_name: std::option::Option<std::string::String>,
}

impl ListJobRunsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::ListJobRunsRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [limit][crate::model::ListJobRunsRequest::limit].
    pub fn set_limit<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListJobRunsRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [start][crate::model::ListJobRunsRequest::start].
    pub fn set_start<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.start = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [start][crate::model::ListJobRunsRequest::start].
    pub fn set_or_clear_start<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.start = v.map(|x| x.into());
        self
    }

    /// Sets the value of [job_name][crate::model::ListJobRunsRequest::job_name].
    pub fn set_job_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.job_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [job_name][crate::model::ListJobRunsRequest::job_name].
    pub fn set_or_clear_job_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.job_name = v.map(|x| x.into());
        self
    }
}

/// The request for [CodeEngine::create_job_run][crate::client::CodeEngine::create_job_run].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateJobRunRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    pub body: crate::model::JobRunPrototype,
}

impl CreateJobRunRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::CreateJobRunRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [body][crate::model::CreateJobRunRequest::body].
    pub fn set_body<T: std::convert::Into<crate::model::JobRunPrototype>>(mut self, v: T) -> Self {
        self.body = v.into();
        self
    }
}

/// The request for [CodeEngine::get_job_run][crate::client::CodeEngine::get_job_run].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetJobRunRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    /// The name of the job run.
    pub name: std::string::String,
}

impl GetJobRunRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::GetJobRunRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [name][crate::model::GetJobRunRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// The request for [CodeEngine::delete_job_run][crate::client::CodeEngine::delete_job_run].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteJobRunRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    /// The name of the job run.
    pub name: std::string::String,
}

impl DeleteJobRunRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::DeleteJobRunRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [name][crate::model::DeleteJobRunRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// The request for [CodeEngine::list_builds][crate::client::CodeEngine::list_builds].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListBuildsRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    /// The maximum number of items in each page, between 1 and 100.
    pub limit: std::option::Option<i64>,

    /// The token of the page to return, as found in the `next` field of a
    /// previous page.
    pub start: std::option::Option<std::string::String>,
}

impl ListBuildsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::ListBuildsRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [limit][crate::model::ListBuildsRequest::limit].
    pub fn set_limit<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListBuildsRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [start][crate::model::ListBuildsRequest::start].
    pub fn set_start<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.start = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [start][crate::model::ListBuildsRequest::start].
    pub fn set_or_clear_start<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.start = v.map(|x| x.into());
        self
    }
}

/// The request for [CodeEngine::create_build][crate::client::CodeEngine::create_build].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateBuildRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    pub body: crate::model::BuildPrototype,
}

impl CreateBuildRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::CreateBuildRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [body][crate::model::CreateBuildRequest::body].
    pub fn set_body<T: std::convert::Into<crate::model::BuildPrototype>>(mut self, v: T) -> Self {
        self.body = v.into();
        self
    }
}

/// The request for [CodeEngine::get_build][crate::client::CodeEngine::get_build].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetBuildRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    /// The name of the build.
    pub name: std::string::String,
}

impl GetBuildRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::GetBuildRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [name][crate::model::GetBuildRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// The request for [CodeEngine::update_build][crate::client::CodeEngine::update_build].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateBuildRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    /// The name of the build.
    pub name: std::string::String,

    /// The entity tag of the resource, the request fails if it changed since it
    /// was read.
    pub if_match: std::string::String,

    pub body: crate::model::BuildPatch,

    /// Fields removed from the resource, sent as explicit `null` values.
    pub clear_fields: std::vec::Vec<std::string::String>,
}

impl UpdateBuildRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::UpdateBuildRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [name][crate::model::UpdateBuildRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [if_match][crate::model::UpdateBuildRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = v.into();
        self
    }

    /// Sets the value of [body][crate::model::UpdateBuildRequest::body].
    pub fn set_body<T: std::convert::Into<crate::model::BuildPatch>>(mut self, v: T) -> Self {
        self.body = v.into();
        self
    }

    /// Sets the value of [clear_fields][crate::model::UpdateBuildRequest::clear_fields].
    pub fn set_clear_fields<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.clear_fields = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The request for [CodeEngine::delete_build][crate::client::CodeEngine::delete_build].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteBuildRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    /// The name of the build.
    pub name: std::string::String,
}

impl DeleteBuildRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::DeleteBuildRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [name][crate::model::DeleteBuildRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// The request for [CodeEngine::list_build_runs][crate::client::CodeEngine::list_build_runs].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListBuildRunsRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    /// The maximum number of items in each page, between 1 and 100.
    pub limit: std::option::Option<i64>,

    /// The token of the page to return, as found in the `next` field of a
    /// previous page.
    pub start: std::option::Option<std::string::String>,

    /// Only return the runs of this build.
    pub build_name: std::option::Option<std::string::String>,
}

impl ListBuildRunsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::ListBuildRunsRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [limit][crate::model::ListBuildRunsRequest::limit].
    pub fn set_limit<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListBuildRunsRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [start][crate::model::ListBuildRunsRequest::start].
    pub fn set_start<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.start = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [start][crate::model::ListBuildRunsRequest::start].
    pub fn set_or_clear_start<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.start = v.map(|x| x.into());
        self
    }

    /// Sets the value of [build_name][crate::model::ListBuildRunsRequest::build_name].
    pub fn set_build_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.build_name = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [build_name][crate::model::ListBuildRunsRequest::build_name].
    pub fn set_or_clear_build_name<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.build_name = v.map(|x| x.into());
        self
    }
}

/// The request for [CodeEngine::create_build_run][crate::client::CodeEngine::create_build_run].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateBuildRunRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    pub body: crate::model::BuildRunPrototype,
}

impl CreateBuildRunRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::CreateBuildRunRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [body][crate::model::CreateBuildRunRequest::body].
    pub fn set_body<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::BuildRunPrototype>,
    {
        self.body = v.into();
        self
    }
}

/// The request for [CodeEngine::get_build_run][crate::client::CodeEngine::get_build_run].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetBuildRunRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    /// The name of the build run.
    pub name: std::string::String,
}

impl GetBuildRunRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::GetBuildRunRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [name][crate::model::GetBuildRunRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// The request for [CodeEngine::delete_build_run][crate::client::CodeEngine::delete_build_run].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteBuildRunRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    /// The name of the build run.
    pub name: std::string::String,
}

impl DeleteBuildRunRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::DeleteBuildRunRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [name][crate::model::DeleteBuildRunRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// The request for [CodeEngine::list_bindings][crate::client::CodeEngine::list_bindings].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListBindingsRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    /// The maximum number of items in each page, between 1 and 100.
    pub limit: std::option::Option<i64>,

    /// The token of the page to return, as found in the `next` field of a
    /// previous page.
    pub start: std::option::Option<std::string::String>,
}

impl ListBindingsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::ListBindingsRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [limit][crate::model::ListBindingsRequest::limit].
    pub fn set_limit<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListBindingsRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [start][crate::model::ListBindingsRequest::start].
    pub fn set_start<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.start = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [start][crate::model::ListBindingsRequest::start].
    pub fn set_or_clear_start<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.start = v.map(|x| x.into());
        self
    }
}

/// The request for [CodeEngine::create_binding][crate::client::CodeEngine::create_binding].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateBindingRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    pub body: crate::model::BindingPrototype,
}

impl CreateBindingRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::CreateBindingRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [body][crate::model::CreateBindingRequest::body].
    pub fn set_body<T: std::convert::Into<crate::model::BindingPrototype>>(mut self, v: T) -> Self {
        self.body = v.into();
        self
    }
}

/// The request for [CodeEngine::get_binding][crate::client::CodeEngine::get_binding].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetBindingRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    /// The ID of the binding.
    pub id: std::string::String,
}

impl GetBindingRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::GetBindingRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [id][crate::model::GetBindingRequest::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }
}

/// The request for [CodeEngine::delete_binding][crate::client::CodeEngine::delete_binding].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteBindingRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    /// The ID of the binding.
    pub id: std::string::String,
}

impl DeleteBindingRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::DeleteBindingRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [id][crate::model::DeleteBindingRequest::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }
}

/// The request for [CodeEngine::list_domain_mappings][crate::client::CodeEngine::list_domain_mappings].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListDomainMappingsRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    /// The maximum number of items in each page, between 1 and 100.
    pub limit: std::option::Option<i64>,

    /// The token of the page to return, as found in the `next` field of a
    /// previous page.
    pub start: std::option::Option<std::string::String>,
}

impl ListDomainMappingsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::ListDomainMappingsRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [limit][crate::model::ListDomainMappingsRequest::limit].
    pub fn set_limit<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListDomainMappingsRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [start][crate::model::ListDomainMappingsRequest::start].
    pub fn set_start<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.start = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [start][crate::model::ListDomainMappingsRequest::start].
    pub fn set_or_clear_start<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.start = v.map(|x| x.into());
        self
    }
}

/// The request for [CodeEngine::create_domain_mapping][crate::client::CodeEngine::create_domain_mapping].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateDomainMappingRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    pub body: crate::model::DomainMappingPrototype,
}

impl CreateDomainMappingRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::CreateDomainMappingRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [body][crate::model::CreateDomainMappingRequest::body].
    pub fn set_body<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::DomainMappingPrototype>,
    {
        self.body = v.into();
        self
    }
}

/// The request for [CodeEngine::get_domain_mapping][crate::client::CodeEngine::get_domain_mapping].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetDomainMappingRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    /// The name of the domain mapping.
    pub name: std::string::String,
}

impl GetDomainMappingRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::GetDomainMappingRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [name][crate::model::GetDomainMappingRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// The request for [CodeEngine::update_domain_mapping][crate::client::CodeEngine::update_domain_mapping].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateDomainMappingRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    /// The name of the domain mapping.
    pub name: std::string::String,

    /// The entity tag of the resource, the request fails if it changed since it
    /// was read.
    pub if_match: std::string::String,

    pub body: crate::model::DomainMappingPatch,

    /// Fields removed from the resource, sent as explicit `null` values.
    pub clear_fields: std::vec::Vec<std::string::String>,
}

impl UpdateDomainMappingRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::UpdateDomainMappingRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [name][crate::model::UpdateDomainMappingRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [if_match][crate::model::UpdateDomainMappingRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = v.into();
        self
    }

    /// Sets the value of [body][crate::model::UpdateDomainMappingRequest::body].
    pub fn set_body<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::DomainMappingPatch>,
    {
        self.body = v.into();
        self
    }

    /// Sets the value of [clear_fields][crate::model::UpdateDomainMappingRequest::clear_fields].
    pub fn set_clear_fields<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.clear_fields = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The request for [CodeEngine::delete_domain_mapping][crate::client::CodeEngine::delete_domain_mapping].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteDomainMappingRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    /// The name of the domain mapping.
    pub name: std::string::String,
}

impl DeleteDomainMappingRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::DeleteDomainMappingRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [name][crate::model::DeleteDomainMappingRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// The request for [CodeEngine::list_config_maps][crate::client::CodeEngine::list_config_maps].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListConfigMapsRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    /// The maximum number of items in each page, between 1 and 100.
    pub limit: std::option::Option<i64>,

    /// The token of the page to return, as found in the `next` field of a
    /// previous page.
    pub start: std::option::Option<std::string::String>,
}

impl ListConfigMapsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::ListConfigMapsRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [limit][crate::model::ListConfigMapsRequest::limit].
    pub fn set_limit<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListConfigMapsRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [start][crate::model::ListConfigMapsRequest::start].
    pub fn set_start<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.start = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [start][crate::model::ListConfigMapsRequest::start].
    pub fn set_or_clear_start<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.start = v.map(|x| x.into());
        self
    }
}

/// The request for [CodeEngine::create_config_map][crate::client::CodeEngine::create_config_map].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateConfigMapRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    pub body: crate::model::ConfigMapPrototype,
}

impl CreateConfigMapRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::CreateConfigMapRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [body][crate::model::CreateConfigMapRequest::body].
    pub fn set_body<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ConfigMapPrototype>,
    {
        self.body = v.into();
        self
    }
}

/// The request for [CodeEngine::get_config_map][crate::client::CodeEngine::get_config_map].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetConfigMapRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    /// The name of the config map.
    pub name: std::string::String,
}

impl GetConfigMapRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::GetConfigMapRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [name][crate::model::GetConfigMapRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// The request for [CodeEngine::replace_config_map][crate::client::CodeEngine::replace_config_map].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ReplaceConfigMapRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    /// The name of the config map.
    pub name: std::string::String,

    /// The entity tag of the resource, the request fails if it changed since it
    /// was read.
    pub if_match: std::string::String,

    pub body: crate::model::ConfigMapReplace,
}

impl ReplaceConfigMapRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::ReplaceConfigMapRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [name][crate::model::ReplaceConfigMapRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [if_match][crate::model::ReplaceConfigMapRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = v.into();
        self
    }

    /// Sets the value of [body][crate::model::ReplaceConfigMapRequest::body].
    pub fn set_body<T: std::convert::Into<crate::model::ConfigMapReplace>>(mut self, v: T) -> Self {
        self.body = v.into();
        self
    }
}

/// The request for [CodeEngine::delete_config_map][crate::client::CodeEngine::delete_config_map].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteConfigMapRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    /// The name of the config map.
    pub name: std::string::String,
}

impl DeleteConfigMapRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::DeleteConfigMapRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [name][crate::model::DeleteConfigMapRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// The request for [CodeEngine::list_secrets][crate::client::CodeEngine::list_secrets].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListSecretsRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    /// The maximum number of items in each page, between 1 and 100.
    pub limit: std::option::Option<i64>,

    /// The token of the page to return, as found in the `next` field of a
    /// previous page.
    pub start: std::option::Option<std::string::String>,
}

impl ListSecretsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::ListSecretsRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [limit][crate::model::ListSecretsRequest::limit].
    pub fn set_limit<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::ListSecretsRequest::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.limit = v.map(|x| x.into());
        self
    }

    /// Sets the value of [start][crate::model::ListSecretsRequest::start].
    pub fn set_start<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.start = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [start][crate::model::ListSecretsRequest::start].
    pub fn set_or_clear_start<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.start = v.map(|x| x.into());
        self
    }
}

/// The request for [CodeEngine::create_secret][crate::client::CodeEngine::create_secret].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateSecretRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    pub body: crate::model::SecretPrototype,
}

impl CreateSecretRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::CreateSecretRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [body][crate::model::CreateSecretRequest::body].
    pub fn set_body<T: std::convert::Into<crate::model::SecretPrototype>>(mut self, v: T) -> Self {
        self.body = v.into();
        self
    }
}

/// The request for [CodeEngine::get_secret][crate::client::CodeEngine::get_secret].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetSecretRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    /// The name of the secret.
    pub name: std::string::String,
}

impl GetSecretRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::GetSecretRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [name][crate::model::GetSecretRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// The request for [CodeEngine::replace_secret][crate::client::CodeEngine::replace_secret].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ReplaceSecretRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    /// The name of the secret.
    pub name: std::string::String,

    /// The entity tag of the resource, the request fails if it changed since it
    /// was read.
    pub if_match: std::string::String,

    pub body: crate::model::SecretReplace,
}

impl ReplaceSecretRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::ReplaceSecretRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [name][crate::model::ReplaceSecretRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [if_match][crate::model::ReplaceSecretRequest::if_match].
    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = v.into();
        self
    }

    /// Sets the value of [body][crate::model::ReplaceSecretRequest::body].
    pub fn set_body<T: std::convert::Into<crate::model::SecretReplace>>(mut self, v: T) -> Self {
        self.body = v.into();
        self
    }
}

/// The request for [CodeEngine::delete_secret][crate::client::CodeEngine::delete_secret].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteSecretRequest {
    /// The ID of the project.
    pub project_id: std::string::String,

    /// The name of the secret.
    pub name: std::string::String,
}

impl DeleteSecretRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::DeleteSecretRequest::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [name][crate::model::DeleteSecretRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}
