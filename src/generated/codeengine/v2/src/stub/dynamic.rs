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

/// A dyn-compatible, crate-private version of [super::CodeEngine].
#[async_trait::async_trait]
pub trait CodeEngine: std::fmt::Debug + Send + Sync {
    async fn list_projects(
        &self,
        req: crate::model::ListProjectsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ProjectList>>;

    async fn create_project(
        &self,
        req: crate::model::CreateProjectRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Project>>;

    async fn get_project(
        &self,
        req: crate::model::GetProjectRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Project>>;

    async fn delete_project(
        &self,
        req: crate::model::DeleteProjectRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn get_project_egress_ips(
        &self,
        req: crate::model::GetProjectEgressIpsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ProjectEgressIpAddresses>>;

    async fn get_project_status_details(
        &self,
        req: crate::model::GetProjectStatusDetailsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ProjectStatusDetails>>;

    async fn list_allowed_outbound_destinations(
        &self,
        req: crate::model::ListAllowedOutboundDestinationsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AllowedOutboundDestinationList>>;

    async fn create_allowed_outbound_destination(
        &self,
        req: crate::model::CreateAllowedOutboundDestinationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AllowedOutboundDestination>>;

    async fn get_allowed_outbound_destination(
        &self,
        req: crate::model::GetAllowedOutboundDestinationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AllowedOutboundDestination>>;

    async fn update_allowed_outbound_destination(
        &self,
        req: crate::model::UpdateAllowedOutboundDestinationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AllowedOutboundDestination>>;

    async fn delete_allowed_outbound_destination(
        &self,
        req: crate::model::DeleteAllowedOutboundDestinationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn list_apps(
        &self,
        req: crate::model::ListAppsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AppList>>;

    async fn create_app(
        &self,
        req: crate::model::CreateAppRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::App>>;

    async fn get_app(
        &self,
        req: crate::model::GetAppRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::App>>;

    async fn update_app(
        &self,
        req: crate::model::UpdateAppRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::App>>;

    async fn delete_app(
        &self,
        req: crate::model::DeleteAppRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn list_app_instances(
        &self,
        req: crate::model::ListAppInstancesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AppInstanceList>>;

    async fn list_app_revisions(
        &self,
        req: crate::model::ListAppRevisionsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AppRevisionList>>;

    async fn get_app_revision(
        &self,
        req: crate::model::GetAppRevisionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AppRevision>>;

    async fn delete_app_revision(
        &self,
        req: crate::model::DeleteAppRevisionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn list_function_runtimes(
        &self,
        req: crate::model::ListFunctionRuntimesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::FunctionRuntimeList>>;

    async fn list_functions(
        &self,
        req: crate::model::ListFunctionsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::FunctionList>>;

    async fn create_function(
        &self,
        req: crate::model::CreateFunctionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Function>>;

    async fn get_function(
        &self,
        req: crate::model::GetFunctionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Function>>;

    async fn update_function(
        &self,
        req: crate::model::UpdateFunctionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Function>>;

    async fn delete_function(
        &self,
        req: crate::model::DeleteFunctionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn list_jobs(
        &self,
        req: crate::model::ListJobsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::JobList>>;

    async fn create_job(
        &self,
        req: crate::model::CreateJobRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Job>>;

    async fn get_job(
        &self,
        req: crate::model::GetJobRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Job>>;

    async fn update_job(
        &self,
        req: crate::model::UpdateJobRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Job>>;

    async fn delete_job(
        &self,
        req: crate::model::DeleteJobRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn list_job_runs(
        &self,
        req: crate::model::ListJobRunsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::JobRunList>>;

    async fn create_job_run(
        &self,
        req: crate::model::CreateJobRunRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::JobRun>>;

    async fn get_job_run(
        &self,
        req: crate::model::GetJobRunRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::JobRun>>;

    async fn delete_job_run(
        &self,
        req: crate::model::DeleteJobRunRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn list_builds(
        &self,
        req: crate::model::ListBuildsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::BuildList>>;

    async fn create_build(
        &self,
        req: crate::model::CreateBuildRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Build>>;

    async fn get_build(
        &self,
        req: crate::model::GetBuildRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Build>>;

    async fn update_build(
        &self,
        req: crate::model::UpdateBuildRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Build>>;

    async fn delete_build(
        &self,
        req: crate::model::DeleteBuildRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn list_build_runs(
        &self,
        req: crate::model::ListBuildRunsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::BuildRunList>>;

    async fn create_build_run(
        &self,
        req: crate::model::CreateBuildRunRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::BuildRun>>;

    async fn get_build_run(
        &self,
        req: crate::model::GetBuildRunRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::BuildRun>>;

    async fn delete_build_run(
        &self,
        req: crate::model::DeleteBuildRunRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn list_bindings(
        &self,
        req: crate::model::ListBindingsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::BindingList>>;

    async fn create_binding(
        &self,
        req: crate::model::CreateBindingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Binding>>;

    async fn get_binding(
        &self,
        req: crate::model::GetBindingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Binding>>;

    async fn delete_binding(
        &self,
        req: crate::model::DeleteBindingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn list_domain_mappings(
        &self,
        req: crate::model::ListDomainMappingsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DomainMappingList>>;

    async fn create_domain_mapping(
        &self,
        req: crate::model::CreateDomainMappingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DomainMapping>>;

    async fn get_domain_mapping(
        &self,
        req: crate::model::GetDomainMappingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DomainMapping>>;

    async fn update_domain_mapping(
        &self,
        req: crate::model::UpdateDomainMappingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DomainMapping>>;

    async fn delete_domain_mapping(
        &self,
        req: crate::model::DeleteDomainMappingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn list_config_maps(
        &self,
        req: crate::model::ListConfigMapsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ConfigMapList>>;

    async fn create_config_map(
        &self,
        req: crate::model::CreateConfigMapRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ConfigMap>>;

    async fn get_config_map(
        &self,
        req: crate::model::GetConfigMapRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ConfigMap>>;

    async fn replace_config_map(
        &self,
        req: crate::model::ReplaceConfigMapRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ConfigMap>>;

    async fn delete_config_map(
        &self,
        req: crate::model::DeleteConfigMapRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn list_secrets(
        &self,
        req: crate::model::ListSecretsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::SecretList>>;

    async fn create_secret(
        &self,
        req: crate::model::CreateSecretRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Secret>>;

    async fn get_secret(
        &self,
        req: crate::model::GetSecretRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Secret>>;

    async fn replace_secret(
        &self,
        req: crate::model::ReplaceSecretRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Secret>>;

    async fn delete_secret(
        &self,
        req: crate::model::DeleteSecretRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;
}

/// All implementations of [super::CodeEngine] also implement [CodeEngine].
#[async_trait::async_trait]
impl<T: super::CodeEngine> CodeEngine for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn list_projects(
        &self,
        req: crate::model::ListProjectsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ProjectList>> {
        T::list_projects(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_project(
        &self,
        req: crate::model::CreateProjectRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Project>> {
        T::create_project(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_project(
        &self,
        req: crate::model::GetProjectRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Project>> {
        T::get_project(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_project(
        &self,
        req: crate::model::DeleteProjectRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::delete_project(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_project_egress_ips(
        &self,
        req: crate::model::GetProjectEgressIpsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ProjectEgressIpAddresses>> {
        T::get_project_egress_ips(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_project_status_details(
        &self,
        req: crate::model::GetProjectStatusDetailsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ProjectStatusDetails>> {
        T::get_project_status_details(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_allowed_outbound_destinations(
        &self,
        req: crate::model::ListAllowedOutboundDestinationsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AllowedOutboundDestinationList>> {
        T::list_allowed_outbound_destinations(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_allowed_outbound_destination(
        &self,
        req: crate::model::CreateAllowedOutboundDestinationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AllowedOutboundDestination>> {
        T::create_allowed_outbound_destination(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_allowed_outbound_destination(
        &self,
        req: crate::model::GetAllowedOutboundDestinationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AllowedOutboundDestination>> {
        T::get_allowed_outbound_destination(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_allowed_outbound_destination(
        &self,
        req: crate::model::UpdateAllowedOutboundDestinationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AllowedOutboundDestination>> {
        T::update_allowed_outbound_destination(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_allowed_outbound_destination(
        &self,
        req: crate::model::DeleteAllowedOutboundDestinationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::delete_allowed_outbound_destination(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_apps(
        &self,
        req: crate::model::ListAppsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AppList>> {
        T::list_apps(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_app(
        &self,
        req: crate::model::CreateAppRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::App>> {
        T::create_app(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_app(
        &self,
        req: crate::model::GetAppRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::App>> {
        T::get_app(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_app(
        &self,
        req: crate::model::UpdateAppRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::App>> {
        T::update_app(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_app(
        &self,
        req: crate::model::DeleteAppRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::delete_app(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_app_instances(
        &self,
        req: crate::model::ListAppInstancesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AppInstanceList>> {
        T::list_app_instances(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_app_revisions(
        &self,
        req: crate::model::ListAppRevisionsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AppRevisionList>> {
        T::list_app_revisions(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_app_revision(
        &self,
        req: crate::model::GetAppRevisionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AppRevision>> {
        T::get_app_revision(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_app_revision(
        &self,
        req: crate::model::DeleteAppRevisionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::delete_app_revision(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_function_runtimes(
        &self,
        req: crate::model::ListFunctionRuntimesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::FunctionRuntimeList>> {
        T::list_function_runtimes(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_functions(
        &self,
        req: crate::model::ListFunctionsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::FunctionList>> {
        T::list_functions(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_function(
        &self,
        req: crate::model::CreateFunctionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Function>> {
        T::create_function(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_function(
        &self,
        req: crate::model::GetFunctionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Function>> {
        T::get_function(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_function(
        &self,
        req: crate::model::UpdateFunctionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Function>> {
        T::update_function(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_function(
        &self,
        req: crate::model::DeleteFunctionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::delete_function(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_jobs(
        &self,
        req: crate::model::ListJobsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::JobList>> {
        T::list_jobs(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_job(
        &self,
        req: crate::model::CreateJobRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Job>> {
        T::create_job(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_job(
        &self,
        req: crate::model::GetJobRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Job>> {
        T::get_job(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_job(
        &self,
        req: crate::model::UpdateJobRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Job>> {
        T::update_job(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_job(
        &self,
        req: crate::model::DeleteJobRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::delete_job(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_job_runs(
        &self,
        req: crate::model::ListJobRunsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::JobRunList>> {
        T::list_job_runs(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_job_run(
        &self,
        req: crate::model::CreateJobRunRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::JobRun>> {
        T::create_job_run(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_job_run(
        &self,
        req: crate::model::GetJobRunRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::JobRun>> {
        T::get_job_run(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_job_run(
        &self,
        req: crate::model::DeleteJobRunRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::delete_job_run(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_builds(
        &self,
        req: crate::model::ListBuildsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::BuildList>> {
        T::list_builds(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_build(
        &self,
        req: crate::model::CreateBuildRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Build>> {
        T::create_build(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_build(
        &self,
        req: crate::model::GetBuildRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Build>> {
        T::get_build(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_build(
        &self,
        req: crate::model::UpdateBuildRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Build>> {
        T::update_build(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_build(
        &self,
        req: crate::model::DeleteBuildRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::delete_build(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_build_runs(
        &self,
        req: crate::model::ListBuildRunsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::BuildRunList>> {
        T::list_build_runs(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_build_run(
        &self,
        req: crate::model::CreateBuildRunRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::BuildRun>> {
        T::create_build_run(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_build_run(
        &self,
        req: crate::model::GetBuildRunRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::BuildRun>> {
        T::get_build_run(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_build_run(
        &self,
        req: crate::model::DeleteBuildRunRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::delete_build_run(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_bindings(
        &self,
        req: crate::model::ListBindingsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::BindingList>> {
        T::list_bindings(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_binding(
        &self,
        req: crate::model::CreateBindingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Binding>> {
        T::create_binding(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_binding(
        &self,
        req: crate::model::GetBindingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Binding>> {
        T::get_binding(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_binding(
        &self,
        req: crate::model::DeleteBindingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::delete_binding(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_domain_mappings(
        &self,
        req: crate::model::ListDomainMappingsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DomainMappingList>> {
        T::list_domain_mappings(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_domain_mapping(
        &self,
        req: crate::model::CreateDomainMappingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DomainMapping>> {
        T::create_domain_mapping(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_domain_mapping(
        &self,
        req: crate::model::GetDomainMappingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DomainMapping>> {
        T::get_domain_mapping(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_domain_mapping(
        &self,
        req: crate::model::UpdateDomainMappingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DomainMapping>> {
        T::update_domain_mapping(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_domain_mapping(
        &self,
        req: crate::model::DeleteDomainMappingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::delete_domain_mapping(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_config_maps(
        &self,
        req: crate::model::ListConfigMapsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ConfigMapList>> {
        T::list_config_maps(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_config_map(
        &self,
        req: crate::model::CreateConfigMapRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ConfigMap>> {
        T::create_config_map(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_config_map(
        &self,
        req: crate::model::GetConfigMapRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ConfigMap>> {
        T::get_config_map(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn replace_config_map(
        &self,
        req: crate::model::ReplaceConfigMapRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ConfigMap>> {
        T::replace_config_map(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_config_map(
        &self,
        req: crate::model::DeleteConfigMapRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::delete_config_map(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_secrets(
        &self,
        req: crate::model::ListSecretsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::SecretList>> {
        T::list_secrets(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_secret(
        &self,
        req: crate::model::CreateSecretRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Secret>> {
        T::create_secret(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_secret(
        &self,
        req: crate::model::GetSecretRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Secret>> {
        T::get_secret(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn replace_secret(
        &self,
        req: crate::model::ReplaceSecretRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Secret>> {
        T::replace_secret(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_secret(
        &self,
        req: crate::model::DeleteSecretRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::delete_secret(self, req, options).await
    }
}
