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

pub mod code_engine {
    use crate::Result;

    /// A builder for [CodeEngine][crate::client::CodeEngine].
    ///
    /// ```no_run
    /// # async fn sample() -> anyhow::Result<()> {
    /// # use ibm_cloud_codeengine_v2::*;
    /// # use builder::code_engine::ClientBuilder;
    /// # use client::CodeEngine;
    /// let builder: ClientBuilder = CodeEngine::builder();
    /// let client = builder
    ///     .with_endpoint("https://api.us-south.codeengine.cloud.ibm.com/v2")
    ///     .build()
    ///     .await?;
    /// # Ok(()) }
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::CodeEngine;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = CodeEngine;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::CodeEngine] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [CodeEngine::list_projects][crate::client::CodeEngine::list_projects] calls.
    #[derive(Clone, Debug)]
    pub struct ListProjects(RequestBuilder<crate::model::ListProjectsRequest>);

    impl ListProjects {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListProjectsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ProjectList> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::ProjectList>> {
            (*self.0.stub)
                .list_projects(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::ProjectList, gax::error::Error> {
            use std::clone::Clone;
            let token = self.0.request.start.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.start = Some(token).filter(|t| !t.is_empty());
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<crate::model::ProjectList, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [limit][crate::model::ListProjectsRequest::limit].
        pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListProjectsRequest::limit].
        pub fn set_or_clear_limit<T: Into<i64>>(mut self, v: Option<T>) -> Self {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [start][crate::model::ListProjectsRequest::start].
        pub fn set_start<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.start = Some(v.into());
            self
        }

        /// Sets or clears the value of [start][crate::model::ListProjectsRequest::start].
        pub fn set_or_clear_start<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.start = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListProjects {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::create_project][crate::client::CodeEngine::create_project] calls.
    #[derive(Clone, Debug)]
    pub struct CreateProject(RequestBuilder<crate::model::CreateProjectRequest>);

    impl CreateProject {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateProjectRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Project> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::Project>> {
            (*self.0.stub)
                .create_project(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [body][crate::model::CreateProjectRequest::body].
        ///
        /// This is a **required** field for requests.
        pub fn set_body<T: Into<crate::model::ProjectPrototype>>(mut self, v: T) -> Self {
            self.0.request.body = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateProject {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::get_project][crate::client::CodeEngine::get_project] calls.
    #[derive(Clone, Debug)]
    pub struct GetProject(RequestBuilder<crate::model::GetProjectRequest>);

    impl GetProject {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetProjectRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Project> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::Project>> {
            (*self.0.stub)
                .get_project(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [id][crate::model::GetProjectRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetProject {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::delete_project][crate::client::CodeEngine::delete_project] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteProject(RequestBuilder<crate::model::DeleteProjectRequest>);

    impl DeleteProject {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteProjectRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<()> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_project(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [id][crate::model::DeleteProjectRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteProject {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::get_project_egress_ips][crate::client::CodeEngine::get_project_egress_ips] calls.
    #[derive(Clone, Debug)]
    pub struct GetProjectEgressIps(RequestBuilder<crate::model::GetProjectEgressIpsRequest>);

    impl GetProjectEgressIps {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetProjectEgressIpsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ProjectEgressIpAddresses> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::ProjectEgressIpAddresses>> {
            (*self.0.stub)
                .get_project_egress_ips(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [project_id][crate::model::GetProjectEgressIpsRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetProjectEgressIps {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::get_project_status_details][crate::client::CodeEngine::get_project_status_details] calls.
    #[derive(Clone, Debug)]
    pub struct GetProjectStatusDetails(
        RequestBuilder<crate::model::GetProjectStatusDetailsRequest>,
    );

    impl GetProjectStatusDetails {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetProjectStatusDetailsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ProjectStatusDetails> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::ProjectStatusDetails>> {
            (*self.0.stub)
                .get_project_status_details(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [project_id][crate::model::GetProjectStatusDetailsRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetProjectStatusDetails {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::list_allowed_outbound_destinations][crate::client::CodeEngine::list_allowed_outbound_destinations] calls.
    #[derive(Clone, Debug)]
    pub struct ListAllowedOutboundDestinations(
        RequestBuilder<crate::model::ListAllowedOutboundDestinationsRequest>,
    );

    impl ListAllowedOutboundDestinations {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListAllowedOutboundDestinationsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::AllowedOutboundDestinationList> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::AllowedOutboundDestinationList>> {
            (*self.0.stub)
                .list_allowed_outbound_destinations(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::AllowedOutboundDestinationList, gax::error::Error> {
            use std::clone::Clone;
            let token = self.0.request.start.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.start = Some(token).filter(|t| !t.is_empty());
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<crate::model::AllowedOutboundDestinationList, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [project_id][crate::model::ListAllowedOutboundDestinationsRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [limit][crate::model::ListAllowedOutboundDestinationsRequest::limit].
        pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListAllowedOutboundDestinationsRequest::limit].
        pub fn set_or_clear_limit<T: Into<i64>>(mut self, v: Option<T>) -> Self {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [start][crate::model::ListAllowedOutboundDestinationsRequest::start].
        pub fn set_start<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.start = Some(v.into());
            self
        }

        /// Sets or clears the value of [start][crate::model::ListAllowedOutboundDestinationsRequest::start].
        pub fn set_or_clear_start<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.start = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListAllowedOutboundDestinations {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::create_allowed_outbound_destination][crate::client::CodeEngine::create_allowed_outbound_destination] calls.
    #[derive(Clone, Debug)]
    pub struct CreateAllowedOutboundDestination(
        RequestBuilder<crate::model::CreateAllowedOutboundDestinationRequest>,
    );

    impl CreateAllowedOutboundDestination {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateAllowedOutboundDestinationRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::AllowedOutboundDestination> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::AllowedOutboundDestination>> {
            (*self.0.stub)
                .create_allowed_outbound_destination(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [project_id][crate::model::CreateAllowedOutboundDestinationRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [body][crate::model::CreateAllowedOutboundDestinationRequest::body].
        ///
        /// This is a **required** field for requests.
        pub fn set_body<T: Into<crate::model::AllowedOutboundDestinationPrototype>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.body = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateAllowedOutboundDestination {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::get_allowed_outbound_destination][crate::client::CodeEngine::get_allowed_outbound_destination] calls.
    #[derive(Clone, Debug)]
    pub struct GetAllowedOutboundDestination(
        RequestBuilder<crate::model::GetAllowedOutboundDestinationRequest>,
    );

    impl GetAllowedOutboundDestination {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetAllowedOutboundDestinationRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::AllowedOutboundDestination> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::AllowedOutboundDestination>> {
            (*self.0.stub)
                .get_allowed_outbound_destination(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [project_id][crate::model::GetAllowedOutboundDestinationRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [name][crate::model::GetAllowedOutboundDestinationRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetAllowedOutboundDestination {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::update_allowed_outbound_destination][crate::client::CodeEngine::update_allowed_outbound_destination] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateAllowedOutboundDestination(
        RequestBuilder<crate::model::UpdateAllowedOutboundDestinationRequest>,
    );

    impl UpdateAllowedOutboundDestination {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateAllowedOutboundDestinationRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::AllowedOutboundDestination> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::AllowedOutboundDestination>> {
            (*self.0.stub)
                .update_allowed_outbound_destination(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [project_id][crate::model::UpdateAllowedOutboundDestinationRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [name][crate::model::UpdateAllowedOutboundDestinationRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }

        /// Sets the value of [if_match][crate::model::UpdateAllowedOutboundDestinationRequest::if_match].
        ///
        /// This is a **required** field for requests.
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = v.into();
            self
        }

        /// Sets the value of [body][crate::model::UpdateAllowedOutboundDestinationRequest::body].
        pub fn set_body<T: Into<crate::model::AllowedOutboundDestinationPatch>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.body = v.into();
            self
        }

        /// Sets the value of [clear_fields][crate::model::UpdateAllowedOutboundDestinationRequest::clear_fields].
        pub fn set_clear_fields<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<std::string::String>,
        {
            use std::iter::Iterator;
            self.0.request.clear_fields = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateAllowedOutboundDestination {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::delete_allowed_outbound_destination][crate::client::CodeEngine::delete_allowed_outbound_destination] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteAllowedOutboundDestination(
        RequestBuilder<crate::model::DeleteAllowedOutboundDestinationRequest>,
    );

    impl DeleteAllowedOutboundDestination {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteAllowedOutboundDestinationRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<()> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_allowed_outbound_destination(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [project_id][crate::model::DeleteAllowedOutboundDestinationRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [name][crate::model::DeleteAllowedOutboundDestinationRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteAllowedOutboundDestination {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::list_apps][crate::client::CodeEngine::list_apps] calls.
    #[derive(Clone, Debug)]
    pub struct ListApps(RequestBuilder<crate::model::ListAppsRequest>);

    impl ListApps {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListAppsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::AppList> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::AppList>> {
            (*self.0.stub)
                .list_apps(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::AppList, gax::error::Error> {
            use std::clone::Clone;
            let token = self.0.request.start.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.start = Some(token).filter(|t| !t.is_empty());
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<crate::model::AppList, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [project_id][crate::model::ListAppsRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [limit][crate::model::ListAppsRequest::limit].
        pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListAppsRequest::limit].
        pub fn set_or_clear_limit<T: Into<i64>>(mut self, v: Option<T>) -> Self {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [start][crate::model::ListAppsRequest::start].
        pub fn set_start<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.start = Some(v.into());
            self
        }

        /// Sets or clears the value of [start][crate::model::ListAppsRequest::start].
        pub fn set_or_clear_start<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.start = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListApps {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::create_app][crate::client::CodeEngine::create_app] calls.
    #[derive(Clone, Debug)]
    pub struct CreateApp(RequestBuilder<crate::model::CreateAppRequest>);

    impl CreateApp {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateAppRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::App> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::App>> {
            (*self.0.stub)
                .create_app(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [project_id][crate::model::CreateAppRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [body][crate::model::CreateAppRequest::body].
        ///
        /// This is a **required** field for requests.
        pub fn set_body<T: Into<crate::model::AppPrototype>>(mut self, v: T) -> Self {
            self.0.request.body = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateApp {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::get_app][crate::client::CodeEngine::get_app] calls.
    #[derive(Clone, Debug)]
    pub struct GetApp(RequestBuilder<crate::model::GetAppRequest>);

    impl GetApp {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetAppRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::App> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::App>> {
            (*self.0.stub)
                .get_app(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [project_id][crate::model::GetAppRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [name][crate::model::GetAppRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetApp {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::update_app][crate::client::CodeEngine::update_app] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateApp(RequestBuilder<crate::model::UpdateAppRequest>);

    impl UpdateApp {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateAppRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::App> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::App>> {
            (*self.0.stub)
                .update_app(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [project_id][crate::model::UpdateAppRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [name][crate::model::UpdateAppRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }

        /// Sets the value of [if_match][crate::model::UpdateAppRequest::if_match].
        ///
        /// This is a **required** field for requests.
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = v.into();
            self
        }

        /// Sets the value of [body][crate::model::UpdateAppRequest::body].
        pub fn set_body<T: Into<crate::model::AppPatch>>(mut self, v: T) -> Self {
            self.0.request.body = v.into();
            self
        }

        /// Sets the value of [clear_fields][crate::model::UpdateAppRequest::clear_fields].
        pub fn set_clear_fields<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<std::string::String>,
        {
            use std::iter::Iterator;
            self.0.request.clear_fields = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateApp {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::delete_app][crate::client::CodeEngine::delete_app] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteApp(RequestBuilder<crate::model::DeleteAppRequest>);

    impl DeleteApp {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteAppRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<()> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_app(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [project_id][crate::model::DeleteAppRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [name][crate::model::DeleteAppRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteApp {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::list_app_instances][crate::client::CodeEngine::list_app_instances] calls.
    #[derive(Clone, Debug)]
    pub struct ListAppInstances(RequestBuilder<crate::model::ListAppInstancesRequest>);

    impl ListAppInstances {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListAppInstancesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::AppInstanceList> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::AppInstanceList>> {
            (*self.0.stub)
                .list_app_instances(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::AppInstanceList, gax::error::Error> {
            use std::clone::Clone;
            let token = self.0.request.start.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.start = Some(token).filter(|t| !t.is_empty());
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<crate::model::AppInstanceList, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [project_id][crate::model::ListAppInstancesRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [app_name][crate::model::ListAppInstancesRequest::app_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_app_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.app_name = v.into();
            self
        }

        /// Sets the value of [limit][crate::model::ListAppInstancesRequest::limit].
        pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListAppInstancesRequest::limit].
        pub fn set_or_clear_limit<T: Into<i64>>(mut self, v: Option<T>) -> Self {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [start][crate::model::ListAppInstancesRequest::start].
        pub fn set_start<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.start = Some(v.into());
            self
        }

        /// Sets or clears the value of [start][crate::model::ListAppInstancesRequest::start].
        pub fn set_or_clear_start<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.start = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListAppInstances {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::list_app_revisions][crate::client::CodeEngine::list_app_revisions] calls.
    #[derive(Clone, Debug)]
    pub struct ListAppRevisions(RequestBuilder<crate::model::ListAppRevisionsRequest>);

    impl ListAppRevisions {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListAppRevisionsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::AppRevisionList> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::AppRevisionList>> {
            (*self.0.stub)
                .list_app_revisions(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::AppRevisionList, gax::error::Error> {
            use std::clone::Clone;
            let token = self.0.request.start.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.start = Some(token).filter(|t| !t.is_empty());
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<crate::model::AppRevisionList, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [project_id][crate::model::ListAppRevisionsRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [app_name][crate::model::ListAppRevisionsRequest::app_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_app_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.app_name = v.into();
            self
        }

        /// Sets the value of [limit][crate::model::ListAppRevisionsRequest::limit].
        pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListAppRevisionsRequest::limit].
        pub fn set_or_clear_limit<T: Into<i64>>(mut self, v: Option<T>) -> Self {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [start][crate::model::ListAppRevisionsRequest::start].
        pub fn set_start<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.start = Some(v.into());
            self
        }

        /// Sets or clears the value of [start][crate::model::ListAppRevisionsRequest::start].
        pub fn set_or_clear_start<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.start = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListAppRevisions {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::get_app_revision][crate::client::CodeEngine::get_app_revision] calls.
    #[derive(Clone, Debug)]
    pub struct GetAppRevision(RequestBuilder<crate::model::GetAppRevisionRequest>);

    impl GetAppRevision {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetAppRevisionRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::AppRevision> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::AppRevision>> {
            (*self.0.stub)
                .get_app_revision(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [project_id][crate::model::GetAppRevisionRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [app_name][crate::model::GetAppRevisionRequest::app_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_app_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.app_name = v.into();
            self
        }

        /// Sets the value of [name][crate::model::GetAppRevisionRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetAppRevision {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::delete_app_revision][crate::client::CodeEngine::delete_app_revision] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteAppRevision(RequestBuilder<crate::model::DeleteAppRevisionRequest>);

    impl DeleteAppRevision {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteAppRevisionRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<()> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_app_revision(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [project_id][crate::model::DeleteAppRevisionRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [app_name][crate::model::DeleteAppRevisionRequest::app_name].
        ///
        /// This is a **required** field for requests.
        pub fn set_app_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.app_name = v.into();
            self
        }

        /// Sets the value of [name][crate::model::DeleteAppRevisionRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteAppRevision {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::list_function_runtimes][crate::client::CodeEngine::list_function_runtimes] calls.
    #[derive(Clone, Debug)]
    pub struct ListFunctionRuntimes(RequestBuilder<crate::model::ListFunctionRuntimesRequest>);

    impl ListFunctionRuntimes {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListFunctionRuntimesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::FunctionRuntimeList> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::FunctionRuntimeList>> {
            (*self.0.stub)
                .list_function_runtimes(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::FunctionRuntimeList, gax::error::Error> {
            use std::clone::Clone;
            let execute = move |_: String| self.clone().send();
            gax::paginator::Paginator::new(String::new(), execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<crate::model::FunctionRuntimeList, gax::error::Error> {
            self.by_page().items()
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListFunctionRuntimes {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::list_functions][crate::client::CodeEngine::list_functions] calls.
    #[derive(Clone, Debug)]
    pub struct ListFunctions(RequestBuilder<crate::model::ListFunctionsRequest>);

    impl ListFunctions {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListFunctionsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::FunctionList> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::FunctionList>> {
            (*self.0.stub)
                .list_functions(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::FunctionList, gax::error::Error> {
            use std::clone::Clone;
            let token = self.0.request.start.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.start = Some(token).filter(|t| !t.is_empty());
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<crate::model::FunctionList, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [project_id][crate::model::ListFunctionsRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [limit][crate::model::ListFunctionsRequest::limit].
        pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListFunctionsRequest::limit].
        pub fn set_or_clear_limit<T: Into<i64>>(mut self, v: Option<T>) -> Self {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [start][crate::model::ListFunctionsRequest::start].
        pub fn set_start<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.start = Some(v.into());
            self
        }

        /// Sets or clears the value of [start][crate::model::ListFunctionsRequest::start].
        pub fn set_or_clear_start<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.start = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListFunctions {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::create_function][crate::client::CodeEngine::create_function] calls.
    #[derive(Clone, Debug)]
    pub struct CreateFunction(RequestBuilder<crate::model::CreateFunctionRequest>);

    impl CreateFunction {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateFunctionRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Function> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::Function>> {
            (*self.0.stub)
                .create_function(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [project_id][crate::model::CreateFunctionRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [body][crate::model::CreateFunctionRequest::body].
        ///
        /// This is a **required** field for requests.
        pub fn set_body<T: Into<crate::model::FunctionPrototype>>(mut self, v: T) -> Self {
            self.0.request.body = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateFunction {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::get_function][crate::client::CodeEngine::get_function] calls.
    #[derive(Clone, Debug)]
    pub struct GetFunction(RequestBuilder<crate::model::GetFunctionRequest>);

    impl GetFunction {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetFunctionRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Function> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::Function>> {
            (*self.0.stub)
                .get_function(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [project_id][crate::model::GetFunctionRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [name][crate::model::GetFunctionRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetFunction {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::update_function][crate::client::CodeEngine::update_function] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateFunction(RequestBuilder<crate::model::UpdateFunctionRequest>);

    impl UpdateFunction {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateFunctionRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Function> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::Function>> {
            (*self.0.stub)
                .update_function(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [project_id][crate::model::UpdateFunctionRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [name][crate::model::UpdateFunctionRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }

        /// Sets the value of [if_match][crate::model::UpdateFunctionRequest::if_match].
        ///
        /// This is a **required** field for requests.
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = v.into();
            self
        }

        /// Sets the value of [body][crate::model::UpdateFunctionRequest::body].
        pub fn set_body<T: Into<crate::model::FunctionPatch>>(mut self, v: T) -> Self {
            self.0.request.body = v.into();
            self
        }

        /// Sets the value of [clear_fields][crate::model::UpdateFunctionRequest::clear_fields].
        pub fn set_clear_fields<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<std::string::String>,
        {
            use std::iter::Iterator;
            self.0.request.clear_fields = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateFunction {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::delete_function][crate::client::CodeEngine::delete_function] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteFunction(RequestBuilder<crate::model::DeleteFunctionRequest>);

    impl DeleteFunction {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteFunctionRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<()> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_function(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [project_id][crate::model::DeleteFunctionRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [name][crate::model::DeleteFunctionRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteFunction {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::list_jobs][crate::client::CodeEngine::list_jobs] calls.
    #[derive(Clone, Debug)]
    pub struct ListJobs(RequestBuilder<crate::model::ListJobsRequest>);

    impl ListJobs {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListJobsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::JobList> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::JobList>> {
            (*self.0.stub)
                .list_jobs(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::JobList, gax::error::Error> {
            use std::clone::Clone;
            let token = self.0.request.start.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.start = Some(token).filter(|t| !t.is_empty());
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<crate::model::JobList, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [project_id][crate::model::ListJobsRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [limit][crate::model::ListJobsRequest::limit].
        pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListJobsRequest::limit].
        pub fn set_or_clear_limit<T: Into<i64>>(mut self, v: Option<T>) -> Self {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [start][crate::model::ListJobsRequest::start].
        pub fn set_start<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.start = Some(v.into());
            self
        }

        /// Sets or clears the value of [start][crate::model::ListJobsRequest::start].
        pub fn set_or_clear_start<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.start = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListJobs {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::create_job][crate::client::CodeEngine::create_job] calls.
    #[derive(Clone, Debug)]
    pub struct CreateJob(RequestBuilder<crate::model::CreateJobRequest>);

    impl CreateJob {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateJobRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Job> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::Job>> {
            (*self.0.stub)
                .create_job(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [project_id][crate::model::CreateJobRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [body][crate::model::CreateJobRequest::body].
        ///
        /// This is a **required** field for requests.
        pub fn set_body<T: Into<crate::model::JobPrototype>>(mut self, v: T) -> Self {
            self.0.request.body = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::get_job][crate::client::CodeEngine::get_job] calls.
    #[derive(Clone, Debug)]
    pub struct GetJob(RequestBuilder<crate::model::GetJobRequest>);

    impl GetJob {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetJobRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Job> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::Job>> {
            (*self.0.stub)
                .get_job(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [project_id][crate::model::GetJobRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [name][crate::model::GetJobRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::update_job][crate::client::CodeEngine::update_job] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateJob(RequestBuilder<crate::model::UpdateJobRequest>);

    impl UpdateJob {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateJobRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Job> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::Job>> {
            (*self.0.stub)
                .update_job(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [project_id][crate::model::UpdateJobRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [name][crate::model::UpdateJobRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }

        /// Sets the value of [if_match][crate::model::UpdateJobRequest::if_match].
        ///
        /// This is a **required** field for requests.
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = v.into();
            self
        }

        /// Sets the value of [body][crate::model::UpdateJobRequest::body].
        pub fn set_body<T: Into<crate::model::JobPatch>>(mut self, v: T) -> Self {
            self.0.request.body = v.into();
            self
        }

        /// Sets the value of [clear_fields][crate::model::UpdateJobRequest::clear_fields].
        pub fn set_clear_fields<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<std::string::String>,
        {
            use std::iter::Iterator;
            self.0.request.clear_fields = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::delete_job][crate::client::CodeEngine::delete_job] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteJob(RequestBuilder<crate::model::DeleteJobRequest>);

    impl DeleteJob {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteJobRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<()> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_job(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [project_id][crate::model::DeleteJobRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [name][crate::model::DeleteJobRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteJob {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::list_job_runs][crate::client::CodeEngine::list_job_runs] calls.
    #[derive(Clone, Debug)]
    pub struct ListJobRuns(RequestBuilder<crate::model::ListJobRunsRequest>);

    impl ListJobRuns {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListJobRunsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::JobRunList> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::JobRunList>> {
            (*self.0.stub)
                .list_job_runs(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::JobRunList, gax::error::Error> {
            use std::clone::Clone;
            let token = self.0.request.start.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.start = Some(token).filter(|t| !t.is_empty());
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<crate::model::JobRunList, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [project_id][crate::model::ListJobRunsRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [limit][crate::model::ListJobRunsRequest::limit].
        pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListJobRunsRequest::limit].
        pub fn set_or_clear_limit<T: Into<i64>>(mut self, v: Option<T>) -> Self {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [start][crate::model::ListJobRunsRequest::start].
        pub fn set_start<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.start = Some(v.into());
            self
        }

        /// Sets or clears the value of [start][crate::model::ListJobRunsRequest::start].
        pub fn set_or_clear_start<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.start = v.map(|x| x.into());
            self
        }

        /// Sets the value of [job_name][crate::model::ListJobRunsRequest::job_name].
        pub fn set_job_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.job_name = Some(v.into());
            self
        }

        /// Sets or clears the value of [job_name][crate::model::ListJobRunsRequest::job_name].
        pub fn set_or_clear_job_name<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.job_name = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListJobRuns {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::create_job_run][crate::client::CodeEngine::create_job_run] calls.
    #[derive(Clone, Debug)]
    pub struct CreateJobRun(RequestBuilder<crate::model::CreateJobRunRequest>);

    impl CreateJobRun {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateJobRunRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::JobRun> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::JobRun>> {
            (*self.0.stub)
                .create_job_run(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [project_id][crate::model::CreateJobRunRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [body][crate::model::CreateJobRunRequest::body].
        pub fn set_body<T: Into<crate::model::JobRunPrototype>>(mut self, v: T) -> Self {
            self.0.request.body = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateJobRun {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::get_job_run][crate::client::CodeEngine::get_job_run] calls.
    #[derive(Clone, Debug)]
    pub struct GetJobRun(RequestBuilder<crate::model::GetJobRunRequest>);

    impl GetJobRun {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetJobRunRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::JobRun> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::JobRun>> {
            (*self.0.stub)
                .get_job_run(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [project_id][crate::model::GetJobRunRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [name][crate::model::GetJobRunRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetJobRun {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::delete_job_run][crate::client::CodeEngine::delete_job_run] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteJobRun(RequestBuilder<crate::model::DeleteJobRunRequest>);

    impl DeleteJobRun {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteJobRunRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<()> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_job_run(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [project_id][crate::model::DeleteJobRunRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [name][crate::model::DeleteJobRunRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteJobRun {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::list_builds][crate::client::CodeEngine::list_builds] calls.
    #[derive(Clone, Debug)]
    pub struct ListBuilds(RequestBuilder<crate::model::ListBuildsRequest>);

    impl ListBuilds {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListBuildsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::BuildList> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::BuildList>> {
            (*self.0.stub)
                .list_builds(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::BuildList, gax::error::Error> {
            use std::clone::Clone;
            let token = self.0.request.start.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.start = Some(token).filter(|t| !t.is_empty());
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<crate::model::BuildList, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [project_id][crate::model::ListBuildsRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [limit][crate::model::ListBuildsRequest::limit].
        pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListBuildsRequest::limit].
        pub fn set_or_clear_limit<T: Into<i64>>(mut self, v: Option<T>) -> Self {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [start][crate::model::ListBuildsRequest::start].
        pub fn set_start<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.start = Some(v.into());
            self
        }

        /// Sets or clears the value of [start][crate::model::ListBuildsRequest::start].
        pub fn set_or_clear_start<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.start = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListBuilds {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::create_build][crate::client::CodeEngine::create_build] calls.
    #[derive(Clone, Debug)]
    pub struct CreateBuild(RequestBuilder<crate::model::CreateBuildRequest>);

    impl CreateBuild {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateBuildRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Build> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::Build>> {
            (*self.0.stub)
                .create_build(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [project_id][crate::model::CreateBuildRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [body][crate::model::CreateBuildRequest::body].
        ///
        /// This is a **required** field for requests.
        pub fn set_body<T: Into<crate::model::BuildPrototype>>(mut self, v: T) -> Self {
            self.0.request.body = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateBuild {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::get_build][crate::client::CodeEngine::get_build] calls.
    #[derive(Clone, Debug)]
    pub struct GetBuild(RequestBuilder<crate::model::GetBuildRequest>);

    impl GetBuild {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetBuildRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Build> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::Build>> {
            (*self.0.stub)
                .get_build(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [project_id][crate::model::GetBuildRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [name][crate::model::GetBuildRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetBuild {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::update_build][crate::client::CodeEngine::update_build] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateBuild(RequestBuilder<crate::model::UpdateBuildRequest>);

    impl UpdateBuild {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateBuildRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Build> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::Build>> {
            (*self.0.stub)
                .update_build(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [project_id][crate::model::UpdateBuildRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [name][crate::model::UpdateBuildRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }

        /// Sets the value of [if_match][crate::model::UpdateBuildRequest::if_match].
        ///
        /// This is a **required** field for requests.
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = v.into();
            self
        }

        /// Sets the value of [body][crate::model::UpdateBuildRequest::body].
        pub fn set_body<T: Into<crate::model::BuildPatch>>(mut self, v: T) -> Self {
            self.0.request.body = v.into();
            self
        }

        /// Sets the value of [clear_fields][crate::model::UpdateBuildRequest::clear_fields].
        pub fn set_clear_fields<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<std::string::String>,
        {
            use std::iter::Iterator;
            self.0.request.clear_fields = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateBuild {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::delete_build][crate::client::CodeEngine::delete_build] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteBuild(RequestBuilder<crate::model::DeleteBuildRequest>);

    impl DeleteBuild {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteBuildRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<()> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_build(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [project_id][crate::model::DeleteBuildRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [name][crate::model::DeleteBuildRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteBuild {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::list_build_runs][crate::client::CodeEngine::list_build_runs] calls.
    #[derive(Clone, Debug)]
    pub struct ListBuildRuns(RequestBuilder<crate::model::ListBuildRunsRequest>);

    impl ListBuildRuns {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListBuildRunsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::BuildRunList> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::BuildRunList>> {
            (*self.0.stub)
                .list_build_runs(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::BuildRunList, gax::error::Error> {
            use std::clone::Clone;
            let token = self.0.request.start.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.start = Some(token).filter(|t| !t.is_empty());
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<crate::model::BuildRunList, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [project_id][crate::model::ListBuildRunsRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [limit][crate::model::ListBuildRunsRequest::limit].
        pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListBuildRunsRequest::limit].
        pub fn set_or_clear_limit<T: Into<i64>>(mut self, v: Option<T>) -> Self {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [start][crate::model::ListBuildRunsRequest::start].
        pub fn set_start<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.start = Some(v.into());
            self
        }

        /// Sets or clears the value of [start][crate::model::ListBuildRunsRequest::start].
        pub fn set_or_clear_start<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.start = v.map(|x| x.into());
            self
        }

        /// Sets the value of [build_name][crate::model::ListBuildRunsRequest::build_name].
        pub fn set_build_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.build_name = Some(v.into());
            self
        }

        /// Sets or clears the value of [build_name][crate::model::ListBuildRunsRequest::build_name].
        pub fn set_or_clear_build_name<T: Into<std::string::String>>(
            mut self,
            v: Option<T>,
        ) -> Self {
            self.0.request.build_name = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListBuildRuns {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::create_build_run][crate::client::CodeEngine::create_build_run] calls.
    #[derive(Clone, Debug)]
    pub struct CreateBuildRun(RequestBuilder<crate::model::CreateBuildRunRequest>);

    impl CreateBuildRun {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateBuildRunRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::BuildRun> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::BuildRun>> {
            (*self.0.stub)
                .create_build_run(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [project_id][crate::model::CreateBuildRunRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [body][crate::model::CreateBuildRunRequest::body].
        pub fn set_body<T: Into<crate::model::BuildRunPrototype>>(mut self, v: T) -> Self {
            self.0.request.body = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateBuildRun {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::get_build_run][crate::client::CodeEngine::get_build_run] calls.
    #[derive(Clone, Debug)]
    pub struct GetBuildRun(RequestBuilder<crate::model::GetBuildRunRequest>);

    impl GetBuildRun {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetBuildRunRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::BuildRun> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::BuildRun>> {
            (*self.0.stub)
                .get_build_run(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [project_id][crate::model::GetBuildRunRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [name][crate::model::GetBuildRunRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetBuildRun {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::delete_build_run][crate::client::CodeEngine::delete_build_run] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteBuildRun(RequestBuilder<crate::model::DeleteBuildRunRequest>);

    impl DeleteBuildRun {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteBuildRunRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<()> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_build_run(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [project_id][crate::model::DeleteBuildRunRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [name][crate::model::DeleteBuildRunRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteBuildRun {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::list_bindings][crate::client::CodeEngine::list_bindings] calls.
    #[derive(Clone, Debug)]
    pub struct ListBindings(RequestBuilder<crate::model::ListBindingsRequest>);

    impl ListBindings {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListBindingsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::BindingList> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::BindingList>> {
            (*self.0.stub)
                .list_bindings(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::BindingList, gax::error::Error> {
            use std::clone::Clone;
            let token = self.0.request.start.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.start = Some(token).filter(|t| !t.is_empty());
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<crate::model::BindingList, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [project_id][crate::model::ListBindingsRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [limit][crate::model::ListBindingsRequest::limit].
        pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListBindingsRequest::limit].
        pub fn set_or_clear_limit<T: Into<i64>>(mut self, v: Option<T>) -> Self {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [start][crate::model::ListBindingsRequest::start].
        pub fn set_start<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.start = Some(v.into());
            self
        }

        /// Sets or clears the value of [start][crate::model::ListBindingsRequest::start].
        pub fn set_or_clear_start<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.start = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListBindings {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::create_binding][crate::client::CodeEngine::create_binding] calls.
    #[derive(Clone, Debug)]
    pub struct CreateBinding(RequestBuilder<crate::model::CreateBindingRequest>);

    impl CreateBinding {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateBindingRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Binding> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::Binding>> {
            (*self.0.stub)
                .create_binding(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [project_id][crate::model::CreateBindingRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [body][crate::model::CreateBindingRequest::body].
        ///
        /// This is a **required** field for requests.
        pub fn set_body<T: Into<crate::model::BindingPrototype>>(mut self, v: T) -> Self {
            self.0.request.body = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateBinding {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::get_binding][crate::client::CodeEngine::get_binding] calls.
    #[derive(Clone, Debug)]
    pub struct GetBinding(RequestBuilder<crate::model::GetBindingRequest>);

    impl GetBinding {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetBindingRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Binding> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::Binding>> {
            (*self.0.stub)
                .get_binding(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [project_id][crate::model::GetBindingRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [id][crate::model::GetBindingRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetBinding {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::delete_binding][crate::client::CodeEngine::delete_binding] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteBinding(RequestBuilder<crate::model::DeleteBindingRequest>);

    impl DeleteBinding {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteBindingRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<()> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_binding(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [project_id][crate::model::DeleteBindingRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [id][crate::model::DeleteBindingRequest::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.id = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteBinding {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::list_domain_mappings][crate::client::CodeEngine::list_domain_mappings] calls.
    #[derive(Clone, Debug)]
    pub struct ListDomainMappings(RequestBuilder<crate::model::ListDomainMappingsRequest>);

    impl ListDomainMappings {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListDomainMappingsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DomainMappingList> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::DomainMappingList>> {
            (*self.0.stub)
                .list_domain_mappings(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::DomainMappingList, gax::error::Error> {
            use std::clone::Clone;
            let token = self.0.request.start.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.start = Some(token).filter(|t| !t.is_empty());
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<crate::model::DomainMappingList, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [project_id][crate::model::ListDomainMappingsRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [limit][crate::model::ListDomainMappingsRequest::limit].
        pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListDomainMappingsRequest::limit].
        pub fn set_or_clear_limit<T: Into<i64>>(mut self, v: Option<T>) -> Self {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [start][crate::model::ListDomainMappingsRequest::start].
        pub fn set_start<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.start = Some(v.into());
            self
        }

        /// Sets or clears the value of [start][crate::model::ListDomainMappingsRequest::start].
        pub fn set_or_clear_start<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.start = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListDomainMappings {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::create_domain_mapping][crate::client::CodeEngine::create_domain_mapping] calls.
    #[derive(Clone, Debug)]
    pub struct CreateDomainMapping(RequestBuilder<crate::model::CreateDomainMappingRequest>);

    impl CreateDomainMapping {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateDomainMappingRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DomainMapping> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::DomainMapping>> {
            (*self.0.stub)
                .create_domain_mapping(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [project_id][crate::model::CreateDomainMappingRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [body][crate::model::CreateDomainMappingRequest::body].
        ///
        /// This is a **required** field for requests.
        pub fn set_body<T: Into<crate::model::DomainMappingPrototype>>(mut self, v: T) -> Self {
            self.0.request.body = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateDomainMapping {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::get_domain_mapping][crate::client::CodeEngine::get_domain_mapping] calls.
    #[derive(Clone, Debug)]
    pub struct GetDomainMapping(RequestBuilder<crate::model::GetDomainMappingRequest>);

    impl GetDomainMapping {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetDomainMappingRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DomainMapping> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::DomainMapping>> {
            (*self.0.stub)
                .get_domain_mapping(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [project_id][crate::model::GetDomainMappingRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [name][crate::model::GetDomainMappingRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetDomainMapping {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::update_domain_mapping][crate::client::CodeEngine::update_domain_mapping] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateDomainMapping(RequestBuilder<crate::model::UpdateDomainMappingRequest>);

    impl UpdateDomainMapping {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateDomainMappingRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DomainMapping> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::DomainMapping>> {
            (*self.0.stub)
                .update_domain_mapping(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [project_id][crate::model::UpdateDomainMappingRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [name][crate::model::UpdateDomainMappingRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }

        /// Sets the value of [if_match][crate::model::UpdateDomainMappingRequest::if_match].
        ///
        /// This is a **required** field for requests.
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = v.into();
            self
        }

        /// Sets the value of [body][crate::model::UpdateDomainMappingRequest::body].
        pub fn set_body<T: Into<crate::model::DomainMappingPatch>>(mut self, v: T) -> Self {
            self.0.request.body = v.into();
            self
        }

        /// Sets the value of [clear_fields][crate::model::UpdateDomainMappingRequest::clear_fields].
        pub fn set_clear_fields<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<std::string::String>,
        {
            use std::iter::Iterator;
            self.0.request.clear_fields = v.into_iter().map(|i| i.into()).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateDomainMapping {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::delete_domain_mapping][crate::client::CodeEngine::delete_domain_mapping] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteDomainMapping(RequestBuilder<crate::model::DeleteDomainMappingRequest>);

    impl DeleteDomainMapping {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteDomainMappingRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<()> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_domain_mapping(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [project_id][crate::model::DeleteDomainMappingRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [name][crate::model::DeleteDomainMappingRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteDomainMapping {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::list_config_maps][crate::client::CodeEngine::list_config_maps] calls.
    #[derive(Clone, Debug)]
    pub struct ListConfigMaps(RequestBuilder<crate::model::ListConfigMapsRequest>);

    impl ListConfigMaps {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListConfigMapsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ConfigMapList> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::ConfigMapList>> {
            (*self.0.stub)
                .list_config_maps(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::ConfigMapList, gax::error::Error> {
            use std::clone::Clone;
            let token = self.0.request.start.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.start = Some(token).filter(|t| !t.is_empty());
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<crate::model::ConfigMapList, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [project_id][crate::model::ListConfigMapsRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [limit][crate::model::ListConfigMapsRequest::limit].
        pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListConfigMapsRequest::limit].
        pub fn set_or_clear_limit<T: Into<i64>>(mut self, v: Option<T>) -> Self {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [start][crate::model::ListConfigMapsRequest::start].
        pub fn set_start<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.start = Some(v.into());
            self
        }

        /// Sets or clears the value of [start][crate::model::ListConfigMapsRequest::start].
        pub fn set_or_clear_start<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.start = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListConfigMaps {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::create_config_map][crate::client::CodeEngine::create_config_map] calls.
    #[derive(Clone, Debug)]
    pub struct CreateConfigMap(RequestBuilder<crate::model::CreateConfigMapRequest>);

    impl CreateConfigMap {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateConfigMapRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ConfigMap> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::ConfigMap>> {
            (*self.0.stub)
                .create_config_map(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [project_id][crate::model::CreateConfigMapRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [body][crate::model::CreateConfigMapRequest::body].
        ///
        /// This is a **required** field for requests.
        pub fn set_body<T: Into<crate::model::ConfigMapPrototype>>(mut self, v: T) -> Self {
            self.0.request.body = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateConfigMap {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::get_config_map][crate::client::CodeEngine::get_config_map] calls.
    #[derive(Clone, Debug)]
    pub struct GetConfigMap(RequestBuilder<crate::model::GetConfigMapRequest>);

    impl GetConfigMap {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetConfigMapRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ConfigMap> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::ConfigMap>> {
            (*self.0.stub)
                .get_config_map(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [project_id][crate::model::GetConfigMapRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [name][crate::model::GetConfigMapRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetConfigMap {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::replace_config_map][crate::client::CodeEngine::replace_config_map] calls.
    #[derive(Clone, Debug)]
    pub struct ReplaceConfigMap(RequestBuilder<crate::model::ReplaceConfigMapRequest>);

    impl ReplaceConfigMap {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ReplaceConfigMapRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ConfigMap> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::ConfigMap>> {
            (*self.0.stub)
                .replace_config_map(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [project_id][crate::model::ReplaceConfigMapRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [name][crate::model::ReplaceConfigMapRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }

        /// Sets the value of [if_match][crate::model::ReplaceConfigMapRequest::if_match].
        ///
        /// This is a **required** field for requests.
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = v.into();
            self
        }

        /// Sets the value of [body][crate::model::ReplaceConfigMapRequest::body].
        pub fn set_body<T: Into<crate::model::ConfigMapReplace>>(mut self, v: T) -> Self {
            self.0.request.body = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ReplaceConfigMap {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::delete_config_map][crate::client::CodeEngine::delete_config_map] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteConfigMap(RequestBuilder<crate::model::DeleteConfigMapRequest>);

    impl DeleteConfigMap {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteConfigMapRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<()> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_config_map(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [project_id][crate::model::DeleteConfigMapRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [name][crate::model::DeleteConfigMapRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteConfigMap {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::list_secrets][crate::client::CodeEngine::list_secrets] calls.
    #[derive(Clone, Debug)]
    pub struct ListSecrets(RequestBuilder<crate::model::ListSecretsRequest>);

    impl ListSecrets {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListSecretsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::SecretList> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::SecretList>> {
            (*self.0.stub)
                .list_secrets(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::SecretList, gax::error::Error> {
            use std::clone::Clone;
            let token = self.0.request.start.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.start = Some(token).filter(|t| !t.is_empty());
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<crate::model::SecretList, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [project_id][crate::model::ListSecretsRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [limit][crate::model::ListSecretsRequest::limit].
        pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets or clears the value of [limit][crate::model::ListSecretsRequest::limit].
        pub fn set_or_clear_limit<T: Into<i64>>(mut self, v: Option<T>) -> Self {
            self.0.request.limit = v.map(|x| x.into());
            self
        }

        /// Sets the value of [start][crate::model::ListSecretsRequest::start].
        pub fn set_start<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.start = Some(v.into());
            self
        }

        /// Sets or clears the value of [start][crate::model::ListSecretsRequest::start].
        pub fn set_or_clear_start<T: Into<std::string::String>>(mut self, v: Option<T>) -> Self {
            self.0.request.start = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListSecrets {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::create_secret][crate::client::CodeEngine::create_secret] calls.
    #[derive(Clone, Debug)]
    pub struct CreateSecret(RequestBuilder<crate::model::CreateSecretRequest>);

    impl CreateSecret {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateSecretRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Secret> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::Secret>> {
            (*self.0.stub)
                .create_secret(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [project_id][crate::model::CreateSecretRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [body][crate::model::CreateSecretRequest::body].
        ///
        /// This is a **required** field for requests.
        pub fn set_body<T: Into<crate::model::SecretPrototype>>(mut self, v: T) -> Self {
            self.0.request.body = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateSecret {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::get_secret][crate::client::CodeEngine::get_secret] calls.
    #[derive(Clone, Debug)]
    pub struct GetSecret(RequestBuilder<crate::model::GetSecretRequest>);

    impl GetSecret {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetSecretRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Secret> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::Secret>> {
            (*self.0.stub)
                .get_secret(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [project_id][crate::model::GetSecretRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [name][crate::model::GetSecretRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetSecret {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::replace_secret][crate::client::CodeEngine::replace_secret] calls.
    #[derive(Clone, Debug)]
    pub struct ReplaceSecret(RequestBuilder<crate::model::ReplaceSecretRequest>);

    impl ReplaceSecret {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ReplaceSecretRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Secret> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(
            self,
        ) -> Result<gax::response::Response<crate::model::Secret>> {
            (*self.0.stub)
                .replace_secret(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [project_id][crate::model::ReplaceSecretRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [name][crate::model::ReplaceSecretRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }

        /// Sets the value of [if_match][crate::model::ReplaceSecretRequest::if_match].
        ///
        /// This is a **required** field for requests.
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = v.into();
            self
        }

        /// Sets the value of [body][crate::model::ReplaceSecretRequest::body].
        pub fn set_body<T: Into<crate::model::SecretReplace>>(mut self, v: T) -> Self {
            self.0.request.body = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ReplaceSecret {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CodeEngine::delete_secret][crate::client::CodeEngine::delete_secret] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteSecret(RequestBuilder<crate::model::DeleteSecretRequest>);

    impl DeleteSecret {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CodeEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteSecretRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<()> {
            self.send_with_response()
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sends the request, and returns the response headers with the body.
        pub async fn send_with_response(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_secret(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [project_id][crate::model::DeleteSecretRequest::project_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_project_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [name][crate::model::DeleteSecretRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteSecret {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
