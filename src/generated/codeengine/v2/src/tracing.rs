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

/// Implements a [CodeEngine](super::stub::CodeEngine) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct CodeEngine<T>
where
    T: super::stub::CodeEngine + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> CodeEngine<T>
where
    T: super::stub::CodeEngine + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::CodeEngine for CodeEngine<T>
where
    T: super::stub::CodeEngine + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn list_projects(
        &self,
        req: crate::model::ListProjectsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ProjectList>> {
        self.inner.list_projects(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_project(
        &self,
        req: crate::model::CreateProjectRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Project>> {
        self.inner.create_project(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_project(
        &self,
        req: crate::model::GetProjectRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Project>> {
        self.inner.get_project(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_project(
        &self,
        req: crate::model::DeleteProjectRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_project(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_project_egress_ips(
        &self,
        req: crate::model::GetProjectEgressIpsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ProjectEgressIpAddresses>> {
        self.inner.get_project_egress_ips(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_project_status_details(
        &self,
        req: crate::model::GetProjectStatusDetailsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ProjectStatusDetails>> {
        self.inner.get_project_status_details(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_allowed_outbound_destinations(
        &self,
        req: crate::model::ListAllowedOutboundDestinationsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AllowedOutboundDestinationList>> {
        self.inner.list_allowed_outbound_destinations(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_allowed_outbound_destination(
        &self,
        req: crate::model::CreateAllowedOutboundDestinationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AllowedOutboundDestination>> {
        self.inner.create_allowed_outbound_destination(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_allowed_outbound_destination(
        &self,
        req: crate::model::GetAllowedOutboundDestinationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AllowedOutboundDestination>> {
        self.inner.get_allowed_outbound_destination(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_allowed_outbound_destination(
        &self,
        req: crate::model::UpdateAllowedOutboundDestinationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AllowedOutboundDestination>> {
        self.inner.update_allowed_outbound_destination(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_allowed_outbound_destination(
        &self,
        req: crate::model::DeleteAllowedOutboundDestinationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_allowed_outbound_destination(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_apps(
        &self,
        req: crate::model::ListAppsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AppList>> {
        self.inner.list_apps(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_app(
        &self,
        req: crate::model::CreateAppRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::App>> {
        self.inner.create_app(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_app(
        &self,
        req: crate::model::GetAppRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::App>> {
        self.inner.get_app(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_app(
        &self,
        req: crate::model::UpdateAppRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::App>> {
        self.inner.update_app(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_app(
        &self,
        req: crate::model::DeleteAppRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_app(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_app_instances(
        &self,
        req: crate::model::ListAppInstancesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AppInstanceList>> {
        self.inner.list_app_instances(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_app_revisions(
        &self,
        req: crate::model::ListAppRevisionsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AppRevisionList>> {
        self.inner.list_app_revisions(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_app_revision(
        &self,
        req: crate::model::GetAppRevisionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AppRevision>> {
        self.inner.get_app_revision(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_app_revision(
        &self,
        req: crate::model::DeleteAppRevisionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_app_revision(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_function_runtimes(
        &self,
        req: crate::model::ListFunctionRuntimesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::FunctionRuntimeList>> {
        self.inner.list_function_runtimes(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_functions(
        &self,
        req: crate::model::ListFunctionsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::FunctionList>> {
        self.inner.list_functions(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_function(
        &self,
        req: crate::model::CreateFunctionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Function>> {
        self.inner.create_function(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_function(
        &self,
        req: crate::model::GetFunctionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Function>> {
        self.inner.get_function(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_function(
        &self,
        req: crate::model::UpdateFunctionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Function>> {
        self.inner.update_function(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_function(
        &self,
        req: crate::model::DeleteFunctionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_function(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_jobs(
        &self,
        req: crate::model::ListJobsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::JobList>> {
        self.inner.list_jobs(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_job(
        &self,
        req: crate::model::CreateJobRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Job>> {
        self.inner.create_job(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_job(
        &self,
        req: crate::model::GetJobRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Job>> {
        self.inner.get_job(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_job(
        &self,
        req: crate::model::UpdateJobRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Job>> {
        self.inner.update_job(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_job(
        &self,
        req: crate::model::DeleteJobRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_job(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_job_runs(
        &self,
        req: crate::model::ListJobRunsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::JobRunList>> {
        self.inner.list_job_runs(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_job_run(
        &self,
        req: crate::model::CreateJobRunRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::JobRun>> {
        self.inner.create_job_run(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_job_run(
        &self,
        req: crate::model::GetJobRunRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::JobRun>> {
        self.inner.get_job_run(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_job_run(
        &self,
        req: crate::model::DeleteJobRunRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_job_run(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_builds(
        &self,
        req: crate::model::ListBuildsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::BuildList>> {
        self.inner.list_builds(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_build(
        &self,
        req: crate::model::CreateBuildRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Build>> {
        self.inner.create_build(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_build(
        &self,
        req: crate::model::GetBuildRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Build>> {
        self.inner.get_build(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_build(
        &self,
        req: crate::model::UpdateBuildRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Build>> {
        self.inner.update_build(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_build(
        &self,
        req: crate::model::DeleteBuildRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_build(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_build_runs(
        &self,
        req: crate::model::ListBuildRunsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::BuildRunList>> {
        self.inner.list_build_runs(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_build_run(
        &self,
        req: crate::model::CreateBuildRunRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::BuildRun>> {
        self.inner.create_build_run(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_build_run(
        &self,
        req: crate::model::GetBuildRunRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::BuildRun>> {
        self.inner.get_build_run(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_build_run(
        &self,
        req: crate::model::DeleteBuildRunRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_build_run(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_bindings(
        &self,
        req: crate::model::ListBindingsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::BindingList>> {
        self.inner.list_bindings(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_binding(
        &self,
        req: crate::model::CreateBindingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Binding>> {
        self.inner.create_binding(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_binding(
        &self,
        req: crate::model::GetBindingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Binding>> {
        self.inner.get_binding(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_binding(
        &self,
        req: crate::model::DeleteBindingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_binding(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_domain_mappings(
        &self,
        req: crate::model::ListDomainMappingsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DomainMappingList>> {
        self.inner.list_domain_mappings(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_domain_mapping(
        &self,
        req: crate::model::CreateDomainMappingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DomainMapping>> {
        self.inner.create_domain_mapping(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_domain_mapping(
        &self,
        req: crate::model::GetDomainMappingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DomainMapping>> {
        self.inner.get_domain_mapping(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_domain_mapping(
        &self,
        req: crate::model::UpdateDomainMappingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DomainMapping>> {
        self.inner.update_domain_mapping(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_domain_mapping(
        &self,
        req: crate::model::DeleteDomainMappingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_domain_mapping(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_config_maps(
        &self,
        req: crate::model::ListConfigMapsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ConfigMapList>> {
        self.inner.list_config_maps(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_config_map(
        &self,
        req: crate::model::CreateConfigMapRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ConfigMap>> {
        self.inner.create_config_map(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_config_map(
        &self,
        req: crate::model::GetConfigMapRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ConfigMap>> {
        self.inner.get_config_map(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn replace_config_map(
        &self,
        req: crate::model::ReplaceConfigMapRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ConfigMap>> {
        self.inner.replace_config_map(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_config_map(
        &self,
        req: crate::model::DeleteConfigMapRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_config_map(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_secrets(
        &self,
        req: crate::model::ListSecretsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::SecretList>> {
        self.inner.list_secrets(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_secret(
        &self,
        req: crate::model::CreateSecretRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Secret>> {
        self.inner.create_secret(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_secret(
        &self,
        req: crate::model::GetSecretRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Secret>> {
        self.inner.get_secret(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn replace_secret(
        &self,
        req: crate::model::ReplaceSecretRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Secret>> {
        self.inner.replace_secret(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_secret(
        &self,
        req: crate::model::DeleteSecretRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        self.inner.delete_secret(req, options).await
    }
}
