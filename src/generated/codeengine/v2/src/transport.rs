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

use crate::Result;
use crate::validation::{PROJECT_ID, Validate};
use gax::response::Response;
use gaxi::path_parameter::{matching, required, segment};
use gaxi::query_parameter::QueryParameter;

/// The environment variable overriding the default endpoint.
const ENDPOINT_VAR: &str = "CODE_ENGINE_URL";

/// Implements [CodeEngine](super::stub::CodeEngine) using a [gaxi::http::ReqwestClient].
#[derive(Clone, Debug)]
pub struct CodeEngine {
    inner: gaxi::http::ReqwestClient,
    api_version: String,
}

impl CodeEngine {
    pub async fn new(mut config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        if config.cred.is_none() {
            let cred = auth::credentials::Builder::from_env(crate::info::SERVICE_NAME)
                .build()
                .map_err(gax::client_builder::Error::cred)?;
            config.cred = Some(cred);
        }
        if config.endpoint.is_none() {
            config.endpoint = std::env::var(ENDPOINT_VAR).ok().filter(|v| !v.is_empty());
        }
        let api_version = config
            .api_version
            .clone()
            .unwrap_or_else(|| crate::DEFAULT_API_VERSION.to_string());
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_ENDPOINT).await?;
        tracing::debug!(endpoint = inner.endpoint(), %api_version, "created Code Engine client");
        Ok(Self { inner, api_version })
    }

    fn builder(
        &self,
        method: reqwest::Method,
        path: String,
        operation_id: &str,
    ) -> reqwest::RequestBuilder {
        self.inner
            .builder(method, path)
            .query(&[("version", self.api_version.as_str())])
            .header(
                gaxi::api_header::ANALYTICS_HEADER,
                crate::info::SDK_HEADERS.analytics_value(operation_id),
            )
    }
}

// Deletes return an empty body, or a body the library has no use for.
fn discard_body(response: Response<serde_json::Value>) -> Response<()> {
    let (parts, _) = response.into_parts();
    Response::from_parts(parts, ())
}

impl super::stub::CodeEngine for CodeEngine {
    async fn list_projects(
        &self,
        req: crate::model::ListProjectsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::ProjectList>> {
        crate::validation::limit(req.limit)?;
        let path = "/projects".to_string();
        let builder = self.builder(reqwest::Method::GET, path, "ListProjects");
        let builder = req.limit.add(builder, "limit");
        let builder = req.start.add(builder, "start");
        let options = gax::options::internal::set_default_idempotency(options, true);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn create_project(
        &self,
        req: crate::model::CreateProjectRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Project>> {
        req.body.validate()?;
        let path = "/projects".to_string();
        let builder = self.builder(reqwest::Method::POST, path, "CreateProject");
        let options = gax::options::internal::set_default_idempotency(options, false);
        self.inner.execute(builder, Some(req.body), options).await
    }

    async fn get_project(
        &self,
        req: crate::model::GetProjectRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Project>> {
        let id = matching("id", &req.id, &PROJECT_ID)?;
        let path = format!("/projects/{}", segment(id));
        let builder = self.builder(reqwest::Method::GET, path, "GetProject");
        let options = gax::options::internal::set_default_idempotency(options, true);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn delete_project(
        &self,
        req: crate::model::DeleteProjectRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<()>> {
        let id = matching("id", &req.id, &PROJECT_ID)?;
        let path = format!("/projects/{}", segment(id));
        let builder = self.builder(reqwest::Method::DELETE, path, "DeleteProject");
        let options = gax::options::internal::set_default_idempotency(options, true);
        self.inner
            .execute::<gaxi::http::NoBody, serde_json::Value>(builder, None, options)
            .await
            .map(discard_body)
    }

    async fn get_project_egress_ips(
        &self,
        req: crate::model::GetProjectEgressIpsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::ProjectEgressIpAddresses>> {
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let path = format!("/projects/{}/egress_ips", segment(project_id));
        let builder = self.builder(reqwest::Method::GET, path, "GetProjectEgressIps");
        let options = gax::options::internal::set_default_idempotency(options, true);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_project_status_details(
        &self,
        req: crate::model::GetProjectStatusDetailsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::ProjectStatusDetails>> {
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let path = format!("/projects/{}/status_details", segment(project_id));
        let builder = self.builder(reqwest::Method::GET, path, "GetProjectStatusDetails");
        let options = gax::options::internal::set_default_idempotency(options, true);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_allowed_outbound_destinations(
        &self,
        req: crate::model::ListAllowedOutboundDestinationsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::AllowedOutboundDestinationList>> {
        crate::validation::limit(req.limit)?;
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let path = format!("/projects/{}/allowed_outbound_destinations", segment(project_id));
        let builder = self.builder(reqwest::Method::GET, path, "ListAllowedOutboundDestinations");
        let builder = req.limit.add(builder, "limit");
        let builder = req.start.add(builder, "start");
        let options = gax::options::internal::set_default_idempotency(options, true);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn create_allowed_outbound_destination(
        &self,
        req: crate::model::CreateAllowedOutboundDestinationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::AllowedOutboundDestination>> {
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        req.body.validate()?;
        let path = format!("/projects/{}/allowed_outbound_destinations", segment(project_id));
        let builder = self.builder(reqwest::Method::POST, path, "CreateAllowedOutboundDestination");
        let options = gax::options::internal::set_default_idempotency(options, false);
        self.inner.execute(builder, Some(req.body), options).await
    }

    async fn get_allowed_outbound_destination(
        &self,
        req: crate::model::GetAllowedOutboundDestinationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::AllowedOutboundDestination>> {
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let name = required("name", &req.name)?;
        let path = format!(
            "/projects/{}/allowed_outbound_destinations/{}",
            segment(project_id),
            segment(name)
        );
        let builder = self.builder(reqwest::Method::GET, path, "GetAllowedOutboundDestination");
        let options = gax::options::internal::set_default_idempotency(options, true);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn update_allowed_outbound_destination(
        &self,
        req: crate::model::UpdateAllowedOutboundDestinationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::AllowedOutboundDestination>> {
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let name = required("name", &req.name)?;
        let if_match = crate::validation::if_match(&req.if_match)?;
        let path = format!(
            "/projects/{}/allowed_outbound_destinations/{}",
            segment(project_id),
            segment(name)
        );
        let builder = self
            .builder(reqwest::Method::PATCH, path, "UpdateAllowedOutboundDestination")
            .header(reqwest::header::IF_MATCH, if_match);
        let options = gax::options::internal::set_default_idempotency(options, false);
        let patch = req
            .clear_fields
            .iter()
            .fold(gax::patch::Patch::from_model(&req.body)?, |patch, field| {
                patch.clear(field.as_str())
            });
        self.inner.execute_patch(builder, patch, options).await
    }

    async fn delete_allowed_outbound_destination(
        &self,
        req: crate::model::DeleteAllowedOutboundDestinationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<()>> {
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let name = required("name", &req.name)?;
        let path = format!(
            "/projects/{}/allowed_outbound_destinations/{}",
            segment(project_id),
            segment(name)
        );
        let builder = self.builder(
            reqwest::Method::DELETE,
            path,
            "DeleteAllowedOutboundDestination",
        );
        let options = gax::options::internal::set_default_idempotency(options, true);
        self.inner
            .execute::<gaxi::http::NoBody, serde_json::Value>(builder, None, options)
            .await
            .map(discard_body)
    }

    async fn list_apps(
        &self,
        req: crate::model::ListAppsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::AppList>> {
        crate::validation::limit(req.limit)?;
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let path = format!("/projects/{}/apps", segment(project_id));
        let builder = self.builder(reqwest::Method::GET, path, "ListApps");
        let builder = req.limit.add(builder, "limit");
        let builder = req.start.add(builder, "start");
        let options = gax::options::internal::set_default_idempotency(options, true);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn create_app(
        &self,
        req: crate::model::CreateAppRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::App>> {
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        req.body.validate()?;
        let path = format!("/projects/{}/apps", segment(project_id));
        let builder = self.builder(reqwest::Method::POST, path, "CreateApp");
        let options = gax::options::internal::set_default_idempotency(options, false);
        self.inner.execute(builder, Some(req.body), options).await
    }

    async fn get_app(
        &self,
        req: crate::model::GetAppRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::App>> {
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let name = required("name", &req.name)?;
        let path = format!("/projects/{}/apps/{}", segment(project_id), segment(name));
        let builder = self.builder(reqwest::Method::GET, path, "GetApp");
        let options = gax::options::internal::set_default_idempotency(options, true);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn update_app(
        &self,
        req: crate::model::UpdateAppRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::App>> {
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let name = required("name", &req.name)?;
        let if_match = crate::validation::if_match(&req.if_match)?;
        let path = format!("/projects/{}/apps/{}", segment(project_id), segment(name));
        let builder = self
            .builder(reqwest::Method::PATCH, path, "UpdateApp")
            .header(reqwest::header::IF_MATCH, if_match);
        let options = gax::options::internal::set_default_idempotency(options, false);
        let patch = req
            .clear_fields
            .iter()
            .fold(gax::patch::Patch::from_model(&req.body)?, |patch, field| {
                patch.clear(field.as_str())
            });
        self.inner.execute_patch(builder, patch, options).await
    }

    async fn delete_app(
        &self,
        req: crate::model::DeleteAppRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<()>> {
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let name = required("name", &req.name)?;
        let path = format!("/projects/{}/apps/{}", segment(project_id), segment(name));
        let builder = self.builder(reqwest::Method::DELETE, path, "DeleteApp");
        let options = gax::options::internal::set_default_idempotency(options, true);
        self.inner
            .execute::<gaxi::http::NoBody, serde_json::Value>(builder, None, options)
            .await
            .map(discard_body)
    }

    async fn list_app_instances(
        &self,
        req: crate::model::ListAppInstancesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::AppInstanceList>> {
        crate::validation::limit(req.limit)?;
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let app_name = required("app_name", &req.app_name)?;
        let path = format!(
            "/projects/{}/apps/{}/instances",
            segment(project_id),
            segment(app_name)
        );
        let builder = self.builder(reqwest::Method::GET, path, "ListAppInstances");
        let builder = req.limit.add(builder, "limit");
        let builder = req.start.add(builder, "start");
        let options = gax::options::internal::set_default_idempotency(options, true);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_app_revisions(
        &self,
        req: crate::model::ListAppRevisionsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::AppRevisionList>> {
        crate::validation::limit(req.limit)?;
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let app_name = required("app_name", &req.app_name)?;
        let path = format!(
            "/projects/{}/apps/{}/revisions",
            segment(project_id),
            segment(app_name)
        );
        let builder = self.builder(reqwest::Method::GET, path, "ListAppRevisions");
        let builder = req.limit.add(builder, "limit");
        let builder = req.start.add(builder, "start");
        let options = gax::options::internal::set_default_idempotency(options, true);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_app_revision(
        &self,
        req: crate::model::GetAppRevisionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::AppRevision>> {
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let app_name = required("app_name", &req.app_name)?;
        let name = required("name", &req.name)?;
        let path = format!(
            "/projects/{}/apps/{}/revisions/{}",
            segment(project_id),
            segment(app_name),
            segment(name)
        );
        let builder = self.builder(reqwest::Method::GET, path, "GetAppRevision");
        let options = gax::options::internal::set_default_idempotency(options, true);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn delete_app_revision(
        &self,
        req: crate::model::DeleteAppRevisionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<()>> {
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let app_name = required("app_name", &req.app_name)?;
        let name = required("name", &req.name)?;
        let path = format!(
            "/projects/{}/apps/{}/revisions/{}",
            segment(project_id),
            segment(app_name),
            segment(name)
        );
        let builder = self.builder(reqwest::Method::DELETE, path, "DeleteAppRevision");
        let options = gax::options::internal::set_default_idempotency(options, true);
        self.inner
            .execute::<gaxi::http::NoBody, serde_json::Value>(builder, None, options)
            .await
            .map(discard_body)
    }

    async fn list_function_runtimes(
        &self,
        _req: crate::model::ListFunctionRuntimesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::FunctionRuntimeList>> {
        let path = "/function_runtimes".to_string();
        let builder = self.builder(reqwest::Method::GET, path, "ListFunctionRuntimes");
        let options = gax::options::internal::set_default_idempotency(options, true);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_functions(
        &self,
        req: crate::model::ListFunctionsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::FunctionList>> {
        crate::validation::limit(req.limit)?;
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let path = format!("/projects/{}/functions", segment(project_id));
        let builder = self.builder(reqwest::Method::GET, path, "ListFunctions");
        let builder = req.limit.add(builder, "limit");
        let builder = req.start.add(builder, "start");
        let options = gax::options::internal::set_default_idempotency(options, true);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn create_function(
        &self,
        req: crate::model::CreateFunctionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Function>> {
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        req.body.validate()?;
        let path = format!("/projects/{}/functions", segment(project_id));
        let builder = self.builder(reqwest::Method::POST, path, "CreateFunction");
        let options = gax::options::internal::set_default_idempotency(options, false);
        self.inner.execute(builder, Some(req.body), options).await
    }

    async fn get_function(
        &self,
        req: crate::model::GetFunctionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Function>> {
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let name = required("name", &req.name)?;
        let path = format!("/projects/{}/functions/{}", segment(project_id), segment(name));
        let builder = self.builder(reqwest::Method::GET, path, "GetFunction");
        let options = gax::options::internal::set_default_idempotency(options, true);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn update_function(
        &self,
        req: crate::model::UpdateFunctionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Function>> {
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let name = required("name", &req.name)?;
        let if_match = crate::validation::if_match(&req.if_match)?;
        let path = format!("/projects/{}/functions/{}", segment(project_id), segment(name));
        let builder = self
            .builder(reqwest::Method::PATCH, path, "UpdateFunction")
            .header(reqwest::header::IF_MATCH, if_match);
        let options = gax::options::internal::set_default_idempotency(options, false);
        let patch = req
            .clear_fields
            .iter()
            .fold(gax::patch::Patch::from_model(&req.body)?, |patch, field| {
                patch.clear(field.as_str())
            });
        self.inner.execute_patch(builder, patch, options).await
    }

    async fn delete_function(
        &self,
        req: crate::model::DeleteFunctionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<()>> {
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let name = required("name", &req.name)?;
        let path = format!("/projects/{}/functions/{}", segment(project_id), segment(name));
        let builder = self.builder(reqwest::Method::DELETE, path, "DeleteFunction");
        let options = gax::options::internal::set_default_idempotency(options, true);
        self.inner
            .execute::<gaxi::http::NoBody, serde_json::Value>(builder, None, options)
            .await
            .map(discard_body)
    }

    async fn list_jobs(
        &self,
        req: crate::model::ListJobsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::JobList>> {
        crate::validation::limit(req.limit)?;
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let path = format!("/projects/{}/jobs", segment(project_id));
        let builder = self.builder(reqwest::Method::GET, path, "ListJobs");
        let builder = req.limit.add(builder, "limit");
        let builder = req.start.add(builder, "start");
        let options = gax::options::internal::set_default_idempotency(options, true);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn create_job(
        &self,
        req: crate::model::CreateJobRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Job>> {
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        req.body.validate()?;
        let path = format!("/projects/{}/jobs", segment(project_id));
        let builder = self.builder(reqwest::Method::POST, path, "CreateJob");
        let options = gax::options::internal::set_default_idempotency(options, false);
        self.inner.execute(builder, Some(req.body), options).await
    }

    async fn get_job(
        &self,
        req: crate::model::GetJobRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Job>> {
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let name = required("name", &req.name)?;
        let path = format!("/projects/{}/jobs/{}", segment(project_id), segment(name));
        let builder = self.builder(reqwest::Method::GET, path, "GetJob");
        let options = gax::options::internal::set_default_idempotency(options, true);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn update_job(
        &self,
        req: crate::model::UpdateJobRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Job>> {
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let name = required("name", &req.name)?;
        let if_match = crate::validation::if_match(&req.if_match)?;
        let path = format!("/projects/{}/jobs/{}", segment(project_id), segment(name));
        let builder = self
            .builder(reqwest::Method::PATCH, path, "UpdateJob")
            .header(reqwest::header::IF_MATCH, if_match);
        let options = gax::options::internal::set_default_idempotency(options, false);
        let patch = req
            .clear_fields
            .iter()
            .fold(gax::patch::Patch::from_model(&req.body)?, |patch, field| {
                patch.clear(field.as_str())
            });
        self.inner.execute_patch(builder, patch, options).await
    }

    async fn delete_job(
        &self,
        req: crate::model::DeleteJobRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<()>> {
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let name = required("name", &req.name)?;
        let path = format!("/projects/{}/jobs/{}", segment(project_id), segment(name));
        let builder = self.builder(reqwest::Method::DELETE, path, "DeleteJob");
        let options = gax::options::internal::set_default_idempotency(options, true);
        self.inner
            .execute::<gaxi::http::NoBody, serde_json::Value>(builder, None, options)
            .await
            .map(discard_body)
    }

    async fn list_job_runs(
        &self,
        req: crate::model::ListJobRunsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::JobRunList>> {
        crate::validation::limit(req.limit)?;
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let path = format!("/projects/{}/job_runs", segment(project_id));
        let builder = self.builder(reqwest::Method::GET, path, "ListJobRuns");
        let builder = req.limit.add(builder, "limit");
        let builder = req.start.add(builder, "start");
        let builder = req.job_name.add(builder, "job_name");
        let options = gax::options::internal::set_default_idempotency(options, true);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn create_job_run(
        &self,
        req: crate::model::CreateJobRunRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::JobRun>> {
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let path = format!("/projects/{}/job_runs", segment(project_id));
        let builder = self.builder(reqwest::Method::POST, path, "CreateJobRun");
        let options = gax::options::internal::set_default_idempotency(options, false);
        self.inner.execute(builder, Some(req.body), options).await
    }

    async fn get_job_run(
        &self,
        req: crate::model::GetJobRunRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::JobRun>> {
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let name = required("name", &req.name)?;
        let path = format!("/projects/{}/job_runs/{}", segment(project_id), segment(name));
        let builder = self.builder(reqwest::Method::GET, path, "GetJobRun");
        let options = gax::options::internal::set_default_idempotency(options, true);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn delete_job_run(
        &self,
        req: crate::model::DeleteJobRunRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<()>> {
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let name = required("name", &req.name)?;
        let path = format!("/projects/{}/job_runs/{}", segment(project_id), segment(name));
        let builder = self.builder(reqwest::Method::DELETE, path, "DeleteJobRun");
        let options = gax::options::internal::set_default_idempotency(options, true);
        self.inner
            .execute::<gaxi::http::NoBody, serde_json::Value>(builder, None, options)
            .await
            .map(discard_body)
    }

    async fn list_builds(
        &self,
        req: crate::model::ListBuildsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::BuildList>> {
        crate::validation::limit(req.limit)?;
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let path = format!("/projects/{}/builds", segment(project_id));
        let builder = self.builder(reqwest::Method::GET, path, "ListBuilds");
        let builder = req.limit.add(builder, "limit");
        let builder = req.start.add(builder, "start");
        let options = gax::options::internal::set_default_idempotency(options, true);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn create_build(
        &self,
        req: crate::model::CreateBuildRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Build>> {
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        req.body.validate()?;
        let path = format!("/projects/{}/builds", segment(project_id));
        let builder = self.builder(reqwest::Method::POST, path, "CreateBuild");
        let options = gax::options::internal::set_default_idempotency(options, false);
        self.inner.execute(builder, Some(req.body), options).await
    }

    async fn get_build(
        &self,
        req: crate::model::GetBuildRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Build>> {
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let name = required("name", &req.name)?;
        let path = format!("/projects/{}/builds/{}", segment(project_id), segment(name));
        let builder = self.builder(reqwest::Method::GET, path, "GetBuild");
        let options = gax::options::internal::set_default_idempotency(options, true);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn update_build(
        &self,
        req: crate::model::UpdateBuildRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Build>> {
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let name = required("name", &req.name)?;
        let if_match = crate::validation::if_match(&req.if_match)?;
        let path = format!("/projects/{}/builds/{}", segment(project_id), segment(name));
        let builder = self
            .builder(reqwest::Method::PATCH, path, "UpdateBuild")
            .header(reqwest::header::IF_MATCH, if_match);
        let options = gax::options::internal::set_default_idempotency(options, false);
        let patch = req
            .clear_fields
            .iter()
            .fold(gax::patch::Patch::from_model(&req.body)?, |patch, field| {
                patch.clear(field.as_str())
            });
        self.inner.execute_patch(builder, patch, options).await
    }

    async fn delete_build(
        &self,
        req: crate::model::DeleteBuildRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<()>> {
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let name = required("name", &req.name)?;
        let path = format!("/projects/{}/builds/{}", segment(project_id), segment(name));
        let builder = self.builder(reqwest::Method::DELETE, path, "DeleteBuild");
        let options = gax::options::internal::set_default_idempotency(options, true);
        self.inner
            .execute::<gaxi::http::NoBody, serde_json::Value>(builder, None, options)
            .await
            .map(discard_body)
    }

    async fn list_build_runs(
        &self,
        req: crate::model::ListBuildRunsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::BuildRunList>> {
        crate::validation::limit(req.limit)?;
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let path = format!("/projects/{}/build_runs", segment(project_id));
        let builder = self.builder(reqwest::Method::GET, path, "ListBuildRuns");
        let builder = req.limit.add(builder, "limit");
        let builder = req.start.add(builder, "start");
        let builder = req.build_name.add(builder, "build_name");
        let options = gax::options::internal::set_default_idempotency(options, true);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn create_build_run(
        &self,
        req: crate::model::CreateBuildRunRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::BuildRun>> {
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let path = format!("/projects/{}/build_runs", segment(project_id));
        let builder = self.builder(reqwest::Method::POST, path, "CreateBuildRun");
        let options = gax::options::internal::set_default_idempotency(options, false);
        self.inner.execute(builder, Some(req.body), options).await
    }

    async fn get_build_run(
        &self,
        req: crate::model::GetBuildRunRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::BuildRun>> {
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let name = required("name", &req.name)?;
        let path = format!("/projects/{}/build_runs/{}", segment(project_id), segment(name));
        let builder = self.builder(reqwest::Method::GET, path, "GetBuildRun");
        let options = gax::options::internal::set_default_idempotency(options, true);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn delete_build_run(
        &self,
        req: crate::model::DeleteBuildRunRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<()>> {
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let name = required("name", &req.name)?;
        let path = format!("/projects/{}/build_runs/{}", segment(project_id), segment(name));
        let builder = self.builder(reqwest::Method::DELETE, path, "DeleteBuildRun");
        let options = gax::options::internal::set_default_idempotency(options, true);
        self.inner
            .execute::<gaxi::http::NoBody, serde_json::Value>(builder, None, options)
            .await
            .map(discard_body)
    }

    async fn list_bindings(
        &self,
        req: crate::model::ListBindingsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::BindingList>> {
        crate::validation::limit(req.limit)?;
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let path = format!("/projects/{}/bindings", segment(project_id));
        let builder = self.builder(reqwest::Method::GET, path, "ListBindings");
        let builder = req.limit.add(builder, "limit");
        let builder = req.start.add(builder, "start");
        let options = gax::options::internal::set_default_idempotency(options, true);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn create_binding(
        &self,
        req: crate::model::CreateBindingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Binding>> {
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        req.body.validate()?;
        let path = format!("/projects/{}/bindings", segment(project_id));
        let builder = self.builder(reqwest::Method::POST, path, "CreateBinding");
        let options = gax::options::internal::set_default_idempotency(options, false);
        self.inner.execute(builder, Some(req.body), options).await
    }

    async fn get_binding(
        &self,
        req: crate::model::GetBindingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Binding>> {
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let id = required("id", &req.id)?;
        let path = format!("/projects/{}/bindings/{}", segment(project_id), segment(id));
        let builder = self.builder(reqwest::Method::GET, path, "GetBinding");
        let options = gax::options::internal::set_default_idempotency(options, true);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn delete_binding(
        &self,
        req: crate::model::DeleteBindingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<()>> {
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let id = required("id", &req.id)?;
        let path = format!("/projects/{}/bindings/{}", segment(project_id), segment(id));
        let builder = self.builder(reqwest::Method::DELETE, path, "DeleteBinding");
        let options = gax::options::internal::set_default_idempotency(options, true);
        self.inner
            .execute::<gaxi::http::NoBody, serde_json::Value>(builder, None, options)
            .await
            .map(discard_body)
    }

    async fn list_domain_mappings(
        &self,
        req: crate::model::ListDomainMappingsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::DomainMappingList>> {
        crate::validation::limit(req.limit)?;
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let path = format!("/projects/{}/domain_mappings", segment(project_id));
        let builder = self.builder(reqwest::Method::GET, path, "ListDomainMappings");
        let builder = req.limit.add(builder, "limit");
        let builder = req.start.add(builder, "start");
        let options = gax::options::internal::set_default_idempotency(options, true);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn create_domain_mapping(
        &self,
        req: crate::model::CreateDomainMappingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::DomainMapping>> {
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        req.body.validate()?;
        let path = format!("/projects/{}/domain_mappings", segment(project_id));
        let builder = self.builder(reqwest::Method::POST, path, "CreateDomainMapping");
        let options = gax::options::internal::set_default_idempotency(options, false);
        self.inner.execute(builder, Some(req.body), options).await
    }

    async fn get_domain_mapping(
        &self,
        req: crate::model::GetDomainMappingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::DomainMapping>> {
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let name = required("name", &req.name)?;
        let path = format!("/projects/{}/domain_mappings/{}", segment(project_id), segment(name));
        let builder = self.builder(reqwest::Method::GET, path, "GetDomainMapping");
        let options = gax::options::internal::set_default_idempotency(options, true);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn update_domain_mapping(
        &self,
        req: crate::model::UpdateDomainMappingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::DomainMapping>> {
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let name = required("name", &req.name)?;
        let if_match = crate::validation::if_match(&req.if_match)?;
        let path = format!("/projects/{}/domain_mappings/{}", segment(project_id), segment(name));
        let builder = self
            .builder(reqwest::Method::PATCH, path, "UpdateDomainMapping")
            .header(reqwest::header::IF_MATCH, if_match);
        let options = gax::options::internal::set_default_idempotency(options, false);
        let patch = req
            .clear_fields
            .iter()
            .fold(gax::patch::Patch::from_model(&req.body)?, |patch, field| {
                patch.clear(field.as_str())
            });
        self.inner.execute_patch(builder, patch, options).await
    }

    async fn delete_domain_mapping(
        &self,
        req: crate::model::DeleteDomainMappingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<()>> {
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let name = required("name", &req.name)?;
        let path = format!("/projects/{}/domain_mappings/{}", segment(project_id), segment(name));
        let builder = self.builder(reqwest::Method::DELETE, path, "DeleteDomainMapping");
        let options = gax::options::internal::set_default_idempotency(options, true);
        self.inner
            .execute::<gaxi::http::NoBody, serde_json::Value>(builder, None, options)
            .await
            .map(discard_body)
    }

    async fn list_config_maps(
        &self,
        req: crate::model::ListConfigMapsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::ConfigMapList>> {
        crate::validation::limit(req.limit)?;
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let path = format!("/projects/{}/config_maps", segment(project_id));
        let builder = self.builder(reqwest::Method::GET, path, "ListConfigMaps");
        let builder = req.limit.add(builder, "limit");
        let builder = req.start.add(builder, "start");
        let options = gax::options::internal::set_default_idempotency(options, true);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn create_config_map(
        &self,
        req: crate::model::CreateConfigMapRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::ConfigMap>> {
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        req.body.validate()?;
        let path = format!("/projects/{}/config_maps", segment(project_id));
        let builder = self.builder(reqwest::Method::POST, path, "CreateConfigMap");
        let options = gax::options::internal::set_default_idempotency(options, false);
        self.inner.execute(builder, Some(req.body), options).await
    }

    async fn get_config_map(
        &self,
        req: crate::model::GetConfigMapRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::ConfigMap>> {
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let name = required("name", &req.name)?;
        let path = format!("/projects/{}/config_maps/{}", segment(project_id), segment(name));
        let builder = self.builder(reqwest::Method::GET, path, "GetConfigMap");
        let options = gax::options::internal::set_default_idempotency(options, true);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn replace_config_map(
        &self,
        req: crate::model::ReplaceConfigMapRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::ConfigMap>> {
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let name = required("name", &req.name)?;
        let if_match = crate::validation::if_match(&req.if_match)?;
        let path = format!("/projects/{}/config_maps/{}", segment(project_id), segment(name));
        let builder = self
            .builder(reqwest::Method::PUT, path, "ReplaceConfigMap")
            .header(reqwest::header::IF_MATCH, if_match);
        let options = gax::options::internal::set_default_idempotency(options, true);
        self.inner.execute(builder, Some(req.body), options).await
    }

    async fn delete_config_map(
        &self,
        req: crate::model::DeleteConfigMapRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<()>> {
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let name = required("name", &req.name)?;
        let path = format!("/projects/{}/config_maps/{}", segment(project_id), segment(name));
        let builder = self.builder(reqwest::Method::DELETE, path, "DeleteConfigMap");
        let options = gax::options::internal::set_default_idempotency(options, true);
        self.inner
            .execute::<gaxi::http::NoBody, serde_json::Value>(builder, None, options)
            .await
            .map(discard_body)
    }

    async fn list_secrets(
        &self,
        req: crate::model::ListSecretsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::SecretList>> {
        crate::validation::limit(req.limit)?;
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let path = format!("/projects/{}/secrets", segment(project_id));
        let builder = self.builder(reqwest::Method::GET, path, "ListSecrets");
        let builder = req.limit.add(builder, "limit");
        let builder = req.start.add(builder, "start");
        let options = gax::options::internal::set_default_idempotency(options, true);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn create_secret(
        &self,
        req: crate::model::CreateSecretRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Secret>> {
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        req.body.validate()?;
        let path = format!("/projects/{}/secrets", segment(project_id));
        let builder = self.builder(reqwest::Method::POST, path, "CreateSecret");
        let options = gax::options::internal::set_default_idempotency(options, false);
        self.inner.execute(builder, Some(req.body), options).await
    }

    async fn get_secret(
        &self,
        req: crate::model::GetSecretRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Secret>> {
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let name = required("name", &req.name)?;
        let path = format!("/projects/{}/secrets/{}", segment(project_id), segment(name));
        let builder = self.builder(reqwest::Method::GET, path, "GetSecret");
        let options = gax::options::internal::set_default_idempotency(options, true);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn replace_secret(
        &self,
        req: crate::model::ReplaceSecretRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<crate::model::Secret>> {
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let name = required("name", &req.name)?;
        let if_match = crate::validation::if_match(&req.if_match)?;
        let path = format!("/projects/{}/secrets/{}", segment(project_id), segment(name));
        let builder = self
            .builder(reqwest::Method::PUT, path, "ReplaceSecret")
            .header(reqwest::header::IF_MATCH, if_match);
        let options = gax::options::internal::set_default_idempotency(options, true);
        self.inner.execute(builder, Some(req.body), options).await
    }

    async fn delete_secret(
        &self,
        req: crate::model::DeleteSecretRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Response<()>> {
        let project_id = matching("project_id", &req.project_id, &PROJECT_ID)?;
        let name = required("name", &req.name)?;
        let path = format!("/projects/{}/secrets/{}", segment(project_id), segment(name));
        let builder = self.builder(reqwest::Method::DELETE, path, "DeleteSecret");
        let options = gax::options::internal::set_default_idempotency(options, true);
        self.inner
            .execute::<gaxi::http::NoBody, serde_json::Value>(builder, None, options)
            .await
            .map(discard_body)
    }
}
