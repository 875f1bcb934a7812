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

#![allow(rustdoc::redundant_explicit_links)]
#![allow(rustdoc::broken_intra_doc_links)]

/// Implements a client for the Code Engine API.
///
/// # Example
/// ```no_run
/// # async fn sample() -> anyhow::Result<()> {
/// # use ibm_cloud_codeengine_v2::client::CodeEngine;
/// let client = CodeEngine::builder().build().await?;
/// let mut projects = client.list_projects().by_item();
/// while let Some(project) = projects.next().await {
///     let project = project?;
///     println!("{} {}", project.id, project.name);
/// }
/// # Ok(()) }
/// ```
///
/// # Service Description
///
/// IBM Cloud Code Engine runs containerized apps, batch jobs, and functions,
/// and builds container images from source. Workloads live in projects, each
/// project is an isolated, region-scoped namespace.
///
/// # Configuration
///
/// To configure `CodeEngine` use the `with_*` methods in the type returned
/// by [builder()][CodeEngine::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the `au-syd` endpoint
///   (`https://api.au-syd.codeengine.cloud.ibm.com/v2`). Use
///   [get_service_url_for_region][crate::get_service_url_for_region] to
///   target other regions.
/// * [with_credentials()]: by default this client reads the credentials from
///   the `CODE_ENGINE_*` environment variables.
///
/// # Pooling and Cloning
///
/// `CodeEngine` holds a connection pool internally, it is advised to
/// create one and the reuse it.  You do not need to wrap `CodeEngine` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
///
/// [with_endpoint()]: super::builder::code_engine::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::code_engine::ClientBuilder::with_credentials
#[derive(Clone, Debug)]
pub struct CodeEngine {
    inner: std::sync::Arc<dyn super::stub::dynamic::CodeEngine>,
}

impl CodeEngine {
    /// Returns a builder for [CodeEngine].
    ///
    /// ```no_run
    /// # async fn sample() -> anyhow::Result<()> {
    /// # use ibm_cloud_codeengine_v2::client::CodeEngine;
    /// let client = CodeEngine::builder()
    ///     .with_endpoint(ibm_cloud_codeengine_v2::get_service_url_for_region("eu-de")?)
    ///     .build()
    ///     .await?;
    /// # Ok(()) }
    /// ```
    pub fn builder() -> super::builder::code_engine::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::code_engine::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::CodeEngine + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::CodeEngine>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::CodeEngine> {
        super::transport::CodeEngine::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::CodeEngine> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::CodeEngine::new)
    }

    /// List all projects in the current account.
    pub fn list_projects(&self) -> super::builder::code_engine::ListProjects {
        super::builder::code_engine::ListProjects::new(self.inner.clone())
    }

    /// Create a project.
    ///
    /// The service provisions the project asynchronously, the returned project
    /// is usually in the `creating` state.
    pub fn create_project(&self) -> super::builder::code_engine::CreateProject {
        super::builder::code_engine::CreateProject::new(self.inner.clone())
    }

    /// Display the details of a single project.
    pub fn get_project(&self) -> super::builder::code_engine::GetProject {
        super::builder::code_engine::GetProject::new(self.inner.clone())
    }

    /// Delete a project.
    ///
    /// Deleted projects are kept in the `soft_deleted` state for some time
    /// before
    /// they are removed.
    pub fn delete_project(&self) -> super::builder::code_engine::DeleteProject {
        super::builder::code_engine::DeleteProject::new(self.inner.clone())
    }

    /// Lists the egress IP addresses of a project.
    pub fn get_project_egress_ips(&self) -> super::builder::code_engine::GetProjectEgressIps {
        super::builder::code_engine::GetProjectEgressIps::new(self.inner.clone())
    }

    /// Retrieves the status details of a project.
    pub fn get_project_status_details(
        &self,
    ) -> super::builder::code_engine::GetProjectStatusDetails {
        super::builder::code_engine::GetProjectStatusDetails::new(self.inner.clone())
    }

    /// List the allowed outbound destinations of a project.
    pub fn list_allowed_outbound_destinations(
        &self,
    ) -> super::builder::code_engine::ListAllowedOutboundDestinations {
        super::builder::code_engine::ListAllowedOutboundDestinations::new(self.inner.clone())
    }

    /// Create a allowed outbound destination.
    pub fn create_allowed_outbound_destination(
        &self,
    ) -> super::builder::code_engine::CreateAllowedOutboundDestination {
        super::builder::code_engine::CreateAllowedOutboundDestination::new(self.inner.clone())
    }

    /// Display the details of a allowed outbound destination.
    pub fn get_allowed_outbound_destination(
        &self,
    ) -> super::builder::code_engine::GetAllowedOutboundDestination {
        super::builder::code_engine::GetAllowedOutboundDestination::new(self.inner.clone())
    }

    /// Update a allowed outbound destination.
    pub fn update_allowed_outbound_destination(
        &self,
    ) -> super::builder::code_engine::UpdateAllowedOutboundDestination {
        super::builder::code_engine::UpdateAllowedOutboundDestination::new(self.inner.clone())
    }

    /// Delete a allowed outbound destination.
    pub fn delete_allowed_outbound_destination(
        &self,
    ) -> super::builder::code_engine::DeleteAllowedOutboundDestination {
        super::builder::code_engine::DeleteAllowedOutboundDestination::new(self.inner.clone())
    }

    /// List all apps in a project.
    pub fn list_apps(&self) -> super::builder::code_engine::ListApps {
        super::builder::code_engine::ListApps::new(self.inner.clone())
    }

    /// Create an app.
    ///
    /// The service creates a first revision of the app and rolls it out.
    pub fn create_app(&self) -> super::builder::code_engine::CreateApp {
        super::builder::code_engine::CreateApp::new(self.inner.clone())
    }

    /// Display the details of a app.
    pub fn get_app(&self) -> super::builder::code_engine::GetApp {
        super::builder::code_engine::GetApp::new(self.inner.clone())
    }

    /// Update a app.
    pub fn update_app(&self) -> super::builder::code_engine::UpdateApp {
        super::builder::code_engine::UpdateApp::new(self.inner.clone())
    }

    /// Delete a app.
    pub fn delete_app(&self) -> super::builder::code_engine::DeleteApp {
        super::builder::code_engine::DeleteApp::new(self.inner.clone())
    }

    /// List the running instances of an app.
    pub fn list_app_instances(&self) -> super::builder::code_engine::ListAppInstances {
        super::builder::code_engine::ListAppInstances::new(self.inner.clone())
    }

    /// List the revisions of an app.
    pub fn list_app_revisions(&self) -> super::builder::code_engine::ListAppRevisions {
        super::builder::code_engine::ListAppRevisions::new(self.inner.clone())
    }

    /// Display the details of an app revision.
    pub fn get_app_revision(&self) -> super::builder::code_engine::GetAppRevision {
        super::builder::code_engine::GetAppRevision::new(self.inner.clone())
    }

    /// Delete an app revision.
    pub fn delete_app_revision(&self) -> super::builder::code_engine::DeleteAppRevision {
        super::builder::code_engine::DeleteAppRevision::new(self.inner.clone())
    }

    /// List the runtimes available to functions.
    pub fn list_function_runtimes(&self) -> super::builder::code_engine::ListFunctionRuntimes {
        super::builder::code_engine::ListFunctionRuntimes::new(self.inner.clone())
    }

    /// List all functions in a project.
    pub fn list_functions(&self) -> super::builder::code_engine::ListFunctions {
        super::builder::code_engine::ListFunctions::new(self.inner.clone())
    }

    /// Create a function.
    pub fn create_function(&self) -> super::builder::code_engine::CreateFunction {
        super::builder::code_engine::CreateFunction::new(self.inner.clone())
    }

    /// Display the details of a function.
    pub fn get_function(&self) -> super::builder::code_engine::GetFunction {
        super::builder::code_engine::GetFunction::new(self.inner.clone())
    }

    /// Update a function.
    pub fn update_function(&self) -> super::builder::code_engine::UpdateFunction {
        super::builder::code_engine::UpdateFunction::new(self.inner.clone())
    }

    /// Delete a function.
    pub fn delete_function(&self) -> super::builder::code_engine::DeleteFunction {
        super::builder::code_engine::DeleteFunction::new(self.inner.clone())
    }

    /// List all jobs in a project.
    pub fn list_jobs(&self) -> super::builder::code_engine::ListJobs {
        super::builder::code_engine::ListJobs::new(self.inner.clone())
    }

    /// Create a job.
    pub fn create_job(&self) -> super::builder::code_engine::CreateJob {
        super::builder::code_engine::CreateJob::new(self.inner.clone())
    }

    /// Display the details of a job.
    pub fn get_job(&self) -> super::builder::code_engine::GetJob {
        super::builder::code_engine::GetJob::new(self.inner.clone())
    }

    /// Update a job.
    pub fn update_job(&self) -> super::builder::code_engine::UpdateJob {
        super::builder::code_engine::UpdateJob::new(self.inner.clone())
    }

    /// Delete a job.
    pub fn delete_job(&self) -> super::builder::code_engine::DeleteJob {
        super::builder::code_engine::DeleteJob::new(self.inner.clone())
    }

    /// List the job runs of a project, optionally filtered by job.
    pub fn list_job_runs(&self) -> super::builder::code_engine::ListJobRuns {
        super::builder::code_engine::ListJobRuns::new(self.inner.clone())
    }

    /// Run a job.
    ///
    /// The run either references an existing job, or carries its own
    /// configuration.
    pub fn create_job_run(&self) -> super::builder::code_engine::CreateJobRun {
        super::builder::code_engine::CreateJobRun::new(self.inner.clone())
    }

    /// Display the details of a job run.
    pub fn get_job_run(&self) -> super::builder::code_engine::GetJobRun {
        super::builder::code_engine::GetJobRun::new(self.inner.clone())
    }

    /// Delete a job run.
    pub fn delete_job_run(&self) -> super::builder::code_engine::DeleteJobRun {
        super::builder::code_engine::DeleteJobRun::new(self.inner.clone())
    }

    /// List all builds in a project.
    pub fn list_builds(&self) -> super::builder::code_engine::ListBuilds {
        super::builder::code_engine::ListBuilds::new(self.inner.clone())
    }

    /// Create a build.
    pub fn create_build(&self) -> super::builder::code_engine::CreateBuild {
        super::builder::code_engine::CreateBuild::new(self.inner.clone())
    }

    /// Display the details of a build.
    pub fn get_build(&self) -> super::builder::code_engine::GetBuild {
        super::builder::code_engine::GetBuild::new(self.inner.clone())
    }

    /// Update a build.
    pub fn update_build(&self) -> super::builder::code_engine::UpdateBuild {
        super::builder::code_engine::UpdateBuild::new(self.inner.clone())
    }

    /// Delete a build.
    pub fn delete_build(&self) -> super::builder::code_engine::DeleteBuild {
        super::builder::code_engine::DeleteBuild::new(self.inner.clone())
    }

    /// List the build runs of a project, optionally filtered by build.
    pub fn list_build_runs(&self) -> super::builder::code_engine::ListBuildRuns {
        super::builder::code_engine::ListBuildRuns::new(self.inner.clone())
    }

    /// Run a build.
    pub fn create_build_run(&self) -> super::builder::code_engine::CreateBuildRun {
        super::builder::code_engine::CreateBuildRun::new(self.inner.clone())
    }

    /// Display the details of a build run.
    pub fn get_build_run(&self) -> super::builder::code_engine::GetBuildRun {
        super::builder::code_engine::GetBuildRun::new(self.inner.clone())
    }

    /// Delete a build run.
    pub fn delete_build_run(&self) -> super::builder::code_engine::DeleteBuildRun {
        super::builder::code_engine::DeleteBuildRun::new(self.inner.clone())
    }

    /// List all bindings in a project.
    pub fn list_bindings(&self) -> super::builder::code_engine::ListBindings {
        super::builder::code_engine::ListBindings::new(self.inner.clone())
    }

    /// Bind a service access secret to an app or job.
    pub fn create_binding(&self) -> super::builder::code_engine::CreateBinding {
        super::builder::code_engine::CreateBinding::new(self.inner.clone())
    }

    /// Display the details of a binding.
    pub fn get_binding(&self) -> super::builder::code_engine::GetBinding {
        super::builder::code_engine::GetBinding::new(self.inner.clone())
    }

    /// Delete a binding.
    pub fn delete_binding(&self) -> super::builder::code_engine::DeleteBinding {
        super::builder::code_engine::DeleteBinding::new(self.inner.clone())
    }

    /// List all domain mappings in a project.
    pub fn list_domain_mappings(&self) -> super::builder::code_engine::ListDomainMappings {
        super::builder::code_engine::ListDomainMappings::new(self.inner.clone())
    }

    /// Create a domain mapping.
    pub fn create_domain_mapping(&self) -> super::builder::code_engine::CreateDomainMapping {
        super::builder::code_engine::CreateDomainMapping::new(self.inner.clone())
    }

    /// Display the details of a domain mapping.
    pub fn get_domain_mapping(&self) -> super::builder::code_engine::GetDomainMapping {
        super::builder::code_engine::GetDomainMapping::new(self.inner.clone())
    }

    /// Update a domain mapping.
    pub fn update_domain_mapping(&self) -> super::builder::code_engine::UpdateDomainMapping {
        super::builder::code_engine::UpdateDomainMapping::new(self.inner.clone())
    }

    /// Delete a domain mapping.
    pub fn delete_domain_mapping(&self) -> super::builder::code_engine::DeleteDomainMapping {
        super::builder::code_engine::DeleteDomainMapping::new(self.inner.clone())
    }

    /// List all config maps in a project.
    pub fn list_config_maps(&self) -> super::builder::code_engine::ListConfigMaps {
        super::builder::code_engine::ListConfigMaps::new(self.inner.clone())
    }

    /// Create a config map.
    pub fn create_config_map(&self) -> super::builder::code_engine::CreateConfigMap {
        super::builder::code_engine::CreateConfigMap::new(self.inner.clone())
    }

    /// Display the details of a config map.
    pub fn get_config_map(&self) -> super::builder::code_engine::GetConfigMap {
        super::builder::code_engine::GetConfigMap::new(self.inner.clone())
    }

    /// Replace the contents of a config map.
    pub fn replace_config_map(&self) -> super::builder::code_engine::ReplaceConfigMap {
        super::builder::code_engine::ReplaceConfigMap::new(self.inner.clone())
    }

    /// Delete a config map.
    pub fn delete_config_map(&self) -> super::builder::code_engine::DeleteConfigMap {
        super::builder::code_engine::DeleteConfigMap::new(self.inner.clone())
    }

    /// List all secrets in a project.
    pub fn list_secrets(&self) -> super::builder::code_engine::ListSecrets {
        super::builder::code_engine::ListSecrets::new(self.inner.clone())
    }

    /// Create a secret.
    pub fn create_secret(&self) -> super::builder::code_engine::CreateSecret {
        super::builder::code_engine::CreateSecret::new(self.inner.clone())
    }

    /// Display the details of a secret.
    pub fn get_secret(&self) -> super::builder::code_engine::GetSecret {
        super::builder::code_engine::GetSecret::new(self.inner.clone())
    }

    /// Replace the contents of a secret.
    pub fn replace_secret(&self) -> super::builder::code_engine::ReplaceSecret {
        super::builder::code_engine::ReplaceSecret::new(self.inner.clone())
    }

    /// Delete a secret.
    pub fn delete_secret(&self) -> super::builder::code_engine::DeleteSecret {
        super::builder::code_engine::DeleteSecret::new(self.inner.clone())
    }
}
