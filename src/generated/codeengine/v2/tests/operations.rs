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

//! Verify the client sends the right requests and decodes the responses.
//!
//! Each test starts a local HTTP server with the expected request, and checks
//! the decoded response.

#[cfg(test)]
mod tests {
    use gax::exponential_backoff::ExponentialBackoffBuilder;
    use gax::options::RequestOptionsBuilder;
    use gax::retry_policy::{AlwaysRetry, RetryPolicyExt};
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use ibm_cloud_codeengine_v2::client::CodeEngine;
    use ibm_cloud_codeengine_v2::model;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::time::Duration;

    const PROJECT_ID: &str = "15314cc3-85b4-4338-903f-c28cdee6d005";
    const ANALYTICS: &str = "x-ibmcloud-sdk-analytics";

    async fn test_client(server: &Server) -> anyhow::Result<CodeEngine> {
        let client = CodeEngine::builder()
            .with_endpoint(format!("http://{}/v2", server.addr()))
            .with_credentials(auth::credentials::anonymous::Builder::new().build())
            .build()
            .await?;
        Ok(client)
    }

    fn app_path(name: &str) -> String {
        format!("/v2/projects/{PROJECT_ID}/apps/{name}")
    }

    fn project_path(suffix: &str) -> String {
        format!("/v2/projects/{PROJECT_ID}/{suffix}")
    }

    fn created(body: serde_json::Value) -> impl httptest::responders::Responder {
        status_code(201)
            .append_header("content-type", "application/json")
            .body(body.to_string())
    }

    #[tokio::test]
    async fn list_projects() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v2/projects"),
                request::query(url_decoded(contains(("version", "2025-01-10")))),
                request::query(url_decoded(contains(("limit", "10")))),
                request::headers(contains((ANALYTICS, matches("operation_id=ListProjects$")))),
                request::headers(contains(("accept", "application/json"))),
            ])
            .respond_with(json_encoded(json!({
                "limit": 10,
                "first": {"href": "https://example.com/v2/projects?limit=10"},
                "projects": [
                    {"id": PROJECT_ID, "name": "my-project", "status": "ready"}
                ]
            }))),
        );

        let client = test_client(&server).await?;
        let response = client.list_projects().set_limit(10).send().await?;
        assert_eq!(response.limit, Some(10));
        assert_eq!(response.next, None);
        let names: Vec<_> = response.projects.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["my-project"]);
        assert_eq!(
            response.projects[0].status,
            Some(model::project::Status::Ready)
        );
        Ok(())
    }

    #[tokio::test]
    async fn create_app() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("POST"),
                request::path(eq(format!("/v2/projects/{PROJECT_ID}/apps"))),
                request::headers(contains(("content-type", "application/json"))),
                request::headers(contains((ANALYTICS, matches("operation_id=CreateApp$")))),
                request::body(json_decoded(eq(json!({
                    "image_reference": "icr.io/codeengine/helloworld",
                    "name": "my-app",
                    "scale_min_instances": 1
                })))),
            ])
            .respond_with(
                status_code(201)
                    .append_header("content-type", "application/json")
                    .append_header("etag", "W/\"abc123\"")
                    .body(
                        json!({
                            "name": "my-app",
                            "project_id": PROJECT_ID,
                            "entity_tag": "1",
                            "image_reference": "icr.io/codeengine/helloworld",
                            "status": "deploying"
                        })
                        .to_string(),
                    ),
            ),
        );

        let client = test_client(&server).await?;
        let response = client
            .create_app()
            .set_project_id(PROJECT_ID)
            .set_body(
                model::AppPrototype::new()
                    .set_image_reference("icr.io/codeengine/helloworld")
                    .set_name("my-app")
                    .set_scale_min_instances(1),
            )
            .send_with_response()
            .await?;
        assert_eq!(response.etag(), Some("W/\"abc123\""));
        let app = response.into_body();
        assert_eq!(app.name, "my-app");
        assert_eq!(app.entity_tag, "1");
        assert_eq!(app.status, Some(model::app::Status::Deploying));
        Ok(())
    }

    #[tokio::test]
    async fn get_app_unknown_status() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path(eq(app_path("my-app"))),
            ])
            .times(2)
            .respond_with(cycle![
                json_encoded(json!({"name": "my-app", "status": "ready"})),
                json_encoded(json!({"name": "my-app", "status": "hibernating"})),
            ]),
        );

        let client = test_client(&server).await?;
        let get = || {
            client
                .get_app()
                .set_project_id(PROJECT_ID)
                .set_name("my-app")
                .send()
        };
        let app = get().await?;
        assert_eq!(app.status, Some(model::app::Status::Ready));

        let app = get().await?;
        let status = app.status.clone();
        assert_eq!(
            status,
            Some(model::app::Status::UnknownValue("hibernating".to_string()))
        );
        assert_eq!(
            serde_json::to_value(&app)?.get("status"),
            Some(&json!("hibernating"))
        );
        Ok(())
    }

    #[tokio::test]
    async fn update_app() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("PATCH"),
                request::path(eq(app_path("my-app"))),
                request::headers(contains(("content-type", "application/merge-patch+json"))),
                request::headers(contains(("if-match", "W/\"abc123\""))),
                request::headers(contains((ANALYTICS, matches("operation_id=UpdateApp$")))),
                request::body(json_decoded(eq(json!({
                    "scale_max_instances": 5,
                    "run_commands": null
                })))),
            ])
            .respond_with(json_encoded(json!({
                "name": "my-app",
                "scale_max_instances": 5
            }))),
        );

        let client = test_client(&server).await?;
        let app = client
            .update_app()
            .set_project_id(PROJECT_ID)
            .set_name("my-app")
            .set_if_match("W/\"abc123\"")
            .set_body(model::AppPatch::new().set_scale_max_instances(5))
            .set_clear_fields(["run_commands"])
            .send()
            .await?;
        assert_eq!(app.scale_max_instances, Some(5));
        assert!(app.run_commands.is_empty(), "{app:?}");
        Ok(())
    }

    #[tokio::test]
    async fn replace_config_map() -> anyhow::Result<()> {
        let server = Server::run();
        let path = format!("/v2/projects/{PROJECT_ID}/config_maps/my-config");
        server.expect(
            Expectation::matching(all_of![
                request::method("PUT"),
                request::path(eq(path)),
                request::headers(contains(("if-match", "*"))),
                request::headers(contains(("content-type", "application/json"))),
                request::body(json_decoded(eq(json!({"data": {"key": "value"}})))),
            ])
            .respond_with(json_encoded(json!({
                "name": "my-config",
                "entity_tag": "2",
                "data": {"key": "value"}
            }))),
        );

        let client = test_client(&server).await?;
        let config_map = client
            .replace_config_map()
            .set_project_id(PROJECT_ID)
            .set_name("my-config")
            .set_if_match("*")
            .set_body(model::ConfigMapReplace::new().set_data([("key", "value")]))
            .send()
            .await?;
        assert_eq!(config_map.entity_tag, "2");
        assert_eq!(
            config_map.data.get("key").map(String::as_str),
            Some("value")
        );
        Ok(())
    }

    #[tokio::test]
    async fn delete_with_empty_body() -> anyhow::Result<()> {
        let server = Server::run();
        let path = format!("/v2/projects/{PROJECT_ID}/config_maps/my-config");
        server.expect(
            Expectation::matching(all_of![
                request::method("DELETE"),
                request::path(eq(path)),
                request::headers(contains((ANALYTICS, matches("operation_id=DeleteConfigMap$")))),
            ])
            .respond_with(status_code(202)),
        );

        let client = test_client(&server).await?;
        client
            .delete_config_map()
            .set_project_id(PROJECT_ID)
            .set_name("my-config")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn delete_with_json_body() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("DELETE"),
                request::path(eq(app_path("my-app"))),
            ])
            .respond_with(status_code(202).body(json!({}).to_string())),
        );

        let client = test_client(&server).await?;
        let response = client
            .delete_app()
            .set_project_id(PROJECT_ID)
            .set_name("my-app")
            .send_with_response()
            .await?;
        assert_eq!(response.body(), &());
        Ok(())
    }

    #[tokio::test]
    async fn list_job_runs_by_job() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path(eq(format!("/v2/projects/{PROJECT_ID}/job_runs"))),
                request::query(url_decoded(contains(("job_name", "my-job")))),
                request::query(url_decoded(not(contains(key("start"))))),
            ])
            .respond_with(json_encoded(json!({
                "job_runs": [
                    {"name": "my-job-run-1", "job_name": "my-job", "status": "completed"}
                ]
            }))),
        );

        let client = test_client(&server).await?;
        let response = client
            .list_job_runs()
            .set_project_id(PROJECT_ID)
            .set_job_name("my-job")
            .send()
            .await?;
        assert_eq!(response.job_runs.len(), 1);
        assert_eq!(
            response.job_runs[0].status,
            Some(model::job_run::Status::Completed)
        );
        Ok(())
    }

    #[tokio::test]
    async fn list_function_runtimes() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v2/function_runtimes"),
                request::query(url_decoded(contains(("version", "2025-01-10")))),
            ])
            .respond_with(json_encoded(json!({
                "function_runtimes": [
                    {"id": "nodejs-20", "family": "nodejs", "default": true},
                    {"id": "python-3.11", "family": "python"}
                ]
            }))),
        );

        let client = test_client(&server).await?;
        let response = client.list_function_runtimes().send().await?;
        let ids: Vec<_> = response
            .function_runtimes
            .iter()
            .filter_map(|r| r.id.as_deref())
            .collect();
        assert_eq!(ids, vec!["nodejs-20", "python-3.11"]);
        assert_eq!(response.function_runtimes[0].default, Some(true));
        Ok(())
    }

    #[tokio::test]
    async fn create_allowed_outbound_destination() -> anyhow::Result<()> {
        let server = Server::run();
        let path = format!("/v2/projects/{PROJECT_ID}/allowed_outbound_destinations");
        server.expect(
            Expectation::matching(all_of![
                request::method("POST"),
                request::path(eq(path)),
                request::body(json_decoded(eq(json!({
                    "type": "cidr_block",
                    "cidr_block": "10.0.0.0/24",
                    "name": "private-net"
                })))),
            ])
            .respond_with(
                status_code(201)
                    .append_header("content-type", "application/json")
                    .body(
                        json!({
                            "type": "cidr_block",
                            "cidr_block": "10.0.0.0/24",
                            "name": "private-net",
                            "entity_tag": "1"
                        })
                        .to_string(),
                    ),
            ),
        );

        let client = test_client(&server).await?;
        let destination = client
            .create_allowed_outbound_destination()
            .set_project_id(PROJECT_ID)
            .set_body(
                model::CidrBlockData::new()
                    .set_cidr_block("10.0.0.0/24")
                    .set_name("private-net"),
            )
            .send()
            .await?;
        assert_eq!(destination.name(), "private-net");
        assert_eq!(destination.entity_tag(), Some("1"));
        assert_eq!(destination.type_value(), "cidr_block");
        Ok(())
    }

    #[tokio::test]
    async fn get_project_egress_ips() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path(eq(project_path("egress_ips"))),
                request::query(url_decoded(contains(("version", "2025-01-10")))),
                request::headers(contains((
                    ANALYTICS,
                    matches("operation_id=GetProjectEgressIps$")
                ))),
            ])
            .respond_with(json_encoded(json!({
                "private": ["10.223.21.64/26"],
                "public": ["149.81.103.128/27", "158.177.72.64/27"]
            }))),
        );

        let client = test_client(&server).await?;
        let ips = client
            .get_project_egress_ips()
            .set_project_id(PROJECT_ID)
            .send()
            .await?;
        assert_eq!(ips.private, vec!["10.223.21.64/26"]);
        assert_eq!(ips.public.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn get_project_status_details() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path(eq(project_path("status_details"))),
                request::headers(contains((
                    ANALYTICS,
                    matches("operation_id=GetProjectStatusDetails$")
                ))),
            ])
            .respond_with(json_encoded(json!({
                "domain": "ready",
                "project": "enabled",
                "vpe_not_enabled": true
            }))),
        );

        let client = test_client(&server).await?;
        let details = client
            .get_project_status_details()
            .set_project_id(PROJECT_ID)
            .send()
            .await?;
        assert_eq!(details.domain.as_deref(), Some("ready"));
        assert_eq!(details.project.as_deref(), Some("enabled"));
        assert_eq!(details.vpe_not_enabled, Some(true));
        Ok(())
    }

    #[tokio::test]
    async fn update_allowed_outbound_destination() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("PATCH"),
                request::path(eq(project_path("allowed_outbound_destinations/private-net"))),
                request::headers(contains(("content-type", "application/merge-patch+json"))),
                request::headers(contains(("if-match", "1"))),
                request::body(json_decoded(eq(json!({
                    "type": "cidr_block",
                    "cidr_block": "10.0.1.0/24"
                })))),
            ])
            .respond_with(json_encoded(json!({
                "type": "cidr_block",
                "cidr_block": "10.0.1.0/24",
                "name": "private-net",
                "entity_tag": "2"
            }))),
        );

        let client = test_client(&server).await?;
        let destination = client
            .update_allowed_outbound_destination()
            .set_project_id(PROJECT_ID)
            .set_name("private-net")
            .set_if_match("1")
            .set_body(model::CidrBlockDataPatch::new().set_cidr_block("10.0.1.0/24"))
            .send()
            .await?;
        assert_eq!(destination.entity_tag(), Some("2"));
        Ok(())
    }

    #[tokio::test]
    async fn update_job() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("PATCH"),
                request::path(eq(project_path("jobs/my-job"))),
                request::headers(contains(("content-type", "application/merge-patch+json"))),
                request::headers(contains(("if-match", "W/\"job-3\""))),
                request::headers(contains((ANALYTICS, matches("operation_id=UpdateJob$")))),
                request::body(json_decoded(eq(json!({
                    "run_arguments": ["--verbose"],
                    "scale_cpu_limit": "2",
                    "image_secret": null
                })))),
            ])
            .respond_with(json_encoded(json!({
                "name": "my-job",
                "entity_tag": "4",
                "run_arguments": ["--verbose"],
                "scale_cpu_limit": "2"
            }))),
        );

        let client = test_client(&server).await?;
        let job = client
            .update_job()
            .set_project_id(PROJECT_ID)
            .set_name("my-job")
            .set_if_match("W/\"job-3\"")
            .set_body(
                model::JobPatch::new()
                    .set_run_arguments(["--verbose"])
                    .set_scale_cpu_limit("2"),
            )
            .set_clear_fields(["image_secret"])
            .send()
            .await?;
        assert_eq!(job.entity_tag, "4");
        assert_eq!(job.run_arguments, vec!["--verbose"]);
        assert_eq!(job.image_secret, None);
        Ok(())
    }

    #[tokio::test]
    async fn update_function() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("PATCH"),
                request::path(eq(project_path("functions/my-function"))),
                request::headers(contains(("content-type", "application/merge-patch+json"))),
                request::headers(contains(("if-match", "7"))),
                request::headers(contains((ANALYTICS, matches("operation_id=UpdateFunction$")))),
                request::body(json_decoded(eq(json!({
                    "scale_concurrency": 5,
                    "code_main": null
                })))),
            ])
            .respond_with(json_encoded(json!({
                "name": "my-function",
                "runtime": "nodejs-20",
                "scale_concurrency": 5,
                "status": "deploying"
            }))),
        );

        let client = test_client(&server).await?;
        let function = client
            .update_function()
            .set_project_id(PROJECT_ID)
            .set_name("my-function")
            .set_if_match("7")
            .set_body(model::FunctionPatch::new().set_scale_concurrency(5))
            .set_clear_fields(["code_main"])
            .send()
            .await?;
        assert_eq!(function.scale_concurrency, Some(5));
        assert_eq!(function.status, Some(model::function::Status::Deploying));
        Ok(())
    }

    #[tokio::test]
    async fn builds() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("POST"),
                request::path(eq(project_path("builds"))),
                request::headers(contains(("content-type", "application/json"))),
                request::headers(contains((ANALYTICS, matches("operation_id=CreateBuild$")))),
                request::body(json_decoded(eq(json!({
                    "name": "my-build",
                    "output_image": "private.de.icr.io/team/app",
                    "output_secret": "ce-auto-icr-private-eu-de",
                    "source_url": "https://github.com/IBM/CodeEngine",
                    "strategy_type": "dockerfile"
                })))),
            ])
            .respond_with(created(json!({
                "name": "my-build",
                "entity_tag": "1",
                "strategy_type": "dockerfile",
                "status": "ready"
            }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method("PATCH"),
                request::path(eq(project_path("builds/my-build"))),
                request::headers(contains(("content-type", "application/merge-patch+json"))),
                request::headers(contains(("if-match", "1"))),
                request::headers(contains((ANALYTICS, matches("operation_id=UpdateBuild$")))),
                request::body(json_decoded(eq(json!({
                    "timeout": 600,
                    "source_revision": null
                })))),
            ])
            .respond_with(json_encoded(json!({
                "name": "my-build",
                "entity_tag": "2",
                "timeout": 600
            }))),
        );

        let client = test_client(&server).await?;
        let build = client
            .create_build()
            .set_project_id(PROJECT_ID)
            .set_body(
                model::BuildPrototype::new()
                    .set_name("my-build")
                    .set_output_image("private.de.icr.io/team/app")
                    .set_output_secret("ce-auto-icr-private-eu-de")
                    .set_source_url("https://github.com/IBM/CodeEngine")
                    .set_strategy_type("dockerfile"),
            )
            .send()
            .await?;
        assert_eq!(build.status, Some(model::build::Status::Ready));

        let build = client
            .update_build()
            .set_project_id(PROJECT_ID)
            .set_name("my-build")
            .set_if_match(&build.entity_tag)
            .set_body(model::BuildPatch::new().set_timeout(600))
            .set_clear_fields(["source_revision"])
            .send()
            .await?;
        assert_eq!(build.entity_tag, "2");
        assert_eq!(build.timeout, Some(600));
        Ok(())
    }

    #[tokio::test]
    async fn build_runs() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("POST"),
                request::path(eq(project_path("build_runs"))),
                request::headers(contains((ANALYTICS, matches("operation_id=CreateBuildRun$")))),
                request::body(json_decoded(eq(json!({"build_name": "my-build"})))),
            ])
            .respond_with(created(json!({
                "name": "my-build-run-1",
                "build_name": "my-build",
                "status": "pending"
            }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path(eq(project_path("build_runs"))),
                request::query(url_decoded(contains(("build_name", "my-build")))),
                request::query(url_decoded(contains(("limit", "5")))),
                request::headers(contains((ANALYTICS, matches("operation_id=ListBuildRuns$")))),
            ])
            .respond_with(json_encoded(json!({
                "limit": 5,
                "build_runs": [
                    {"name": "my-build-run-1", "build_name": "my-build", "status": "succeeded"}
                ]
            }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path(eq(project_path("build_runs/my-build-run-1"))),
                request::headers(contains((ANALYTICS, matches("operation_id=GetBuildRun$")))),
            ])
            .respond_with(json_encoded(json!({
                "name": "my-build-run-1",
                "status": "running"
            }))),
        );

        let client = test_client(&server).await?;
        let run = client
            .create_build_run()
            .set_project_id(PROJECT_ID)
            .set_body(model::BuildRunPrototype::new().set_build_name("my-build"))
            .send()
            .await?;
        assert_eq!(run.status, Some(model::build_run::Status::Pending));

        let runs = client
            .list_build_runs()
            .set_project_id(PROJECT_ID)
            .set_build_name("my-build")
            .set_limit(5)
            .send()
            .await?;
        assert_eq!(runs.build_runs.len(), 1);
        assert_eq!(
            runs.build_runs[0].status,
            Some(model::build_run::Status::Succeeded)
        );

        let run = client
            .get_build_run()
            .set_project_id(PROJECT_ID)
            .set_name("my-build-run-1")
            .send()
            .await?;
        assert_eq!(run.status, Some(model::build_run::Status::Running));
        Ok(())
    }

    #[tokio::test]
    async fn bindings() -> anyhow::Result<()> {
        // Binding ids are not UUIDs.
        const BINDING_ID: &str = "a172ced-b5f21bc-71ba50c-1638604";
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("POST"),
                request::path(eq(project_path("bindings"))),
                request::headers(contains((ANALYTICS, matches("operation_id=CreateBinding$")))),
                request::body(json_decoded(eq(json!({
                    "component": {"name": "my-app", "resource_type": "app_v2"},
                    "prefix": "MY_COS",
                    "secret_name": "my-service-access"
                })))),
            ])
            .respond_with(created(json!({
                "id": BINDING_ID,
                "component": {"name": "my-app", "resource_type": "app_v2"},
                "prefix": "MY_COS",
                "secret_name": "my-service-access",
                "status": "creating"
            }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path(eq(project_path(&format!("bindings/{BINDING_ID}")))),
                request::headers(contains((ANALYTICS, matches("operation_id=GetBinding$")))),
            ])
            .respond_with(json_encoded(json!({
                "id": BINDING_ID,
                "prefix": "MY_COS",
                "status": "active"
            }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method("DELETE"),
                request::path(eq(project_path(&format!("bindings/{BINDING_ID}")))),
                request::headers(contains((ANALYTICS, matches("operation_id=DeleteBinding$")))),
            ])
            .respond_with(status_code(202)),
        );

        let client = test_client(&server).await?;
        let binding = client
            .create_binding()
            .set_project_id(PROJECT_ID)
            .set_body(
                model::BindingPrototype::new()
                    .set_component(
                        model::ComponentRef::new()
                            .set_name("my-app")
                            .set_resource_type("app_v2"),
                    )
                    .set_prefix("MY_COS")
                    .set_secret_name("my-service-access"),
            )
            .send()
            .await?;
        assert_eq!(binding.id.as_deref(), Some(BINDING_ID));
        assert_eq!(binding.component.name, "my-app");

        let binding = client
            .get_binding()
            .set_project_id(PROJECT_ID)
            .set_id(BINDING_ID)
            .send()
            .await?;
        assert_eq!(binding.status, Some(model::binding::Status::Active));

        client
            .delete_binding()
            .set_project_id(PROJECT_ID)
            .set_id(BINDING_ID)
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn domain_mappings() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("POST"),
                request::path(eq(project_path("domain_mappings"))),
                request::headers(contains((
                    ANALYTICS,
                    matches("operation_id=CreateDomainMapping$")
                ))),
                request::body(json_decoded(eq(json!({
                    "component": {"name": "my-app", "resource_type": "app_v2"},
                    "name": "www.example.com",
                    "tls_secret": "my-tls-secret"
                })))),
            ])
            .respond_with(created(json!({
                "name": "www.example.com",
                "entity_tag": "1",
                "cname_target": "custom.abcdabcdabc.eu-de.codeengine.appdomain.cloud",
                "status": "deploying"
            }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method("PATCH"),
                request::path(eq(project_path("domain_mappings/www.example.com"))),
                request::headers(contains(("content-type", "application/merge-patch+json"))),
                request::headers(contains(("if-match", "1"))),
                request::headers(contains((
                    ANALYTICS,
                    matches("operation_id=UpdateDomainMapping$")
                ))),
                request::body(json_decoded(eq(json!({
                    "component": {"name": "my-app-v2", "resource_type": "app_v2"}
                })))),
            ])
            .respond_with(json_encoded(json!({
                "name": "www.example.com",
                "entity_tag": "2",
                "component": {"name": "my-app-v2", "resource_type": "app_v2"},
                "status": "ready"
            }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method("DELETE"),
                request::path(eq(project_path("domain_mappings/www.example.com"))),
            ])
            .respond_with(status_code(202)),
        );

        let client = test_client(&server).await?;
        let mapping = client
            .create_domain_mapping()
            .set_project_id(PROJECT_ID)
            .set_body(
                model::DomainMappingPrototype::new()
                    .set_component(
                        model::ComponentRef::new()
                            .set_name("my-app")
                            .set_resource_type("app_v2"),
                    )
                    .set_name("www.example.com")
                    .set_tls_secret("my-tls-secret"),
            )
            .send()
            .await?;
        assert_eq!(mapping.status, Some(model::domain_mapping::Status::Deploying));
        assert!(mapping.cname_target.is_some(), "{mapping:?}");

        let mapping = client
            .update_domain_mapping()
            .set_project_id(PROJECT_ID)
            .set_name("www.example.com")
            .set_if_match(&mapping.entity_tag)
            .set_body(
                model::DomainMappingPatch::new().set_component(
                    model::ComponentRef::new()
                        .set_name("my-app-v2")
                        .set_resource_type("app_v2"),
                ),
            )
            .send()
            .await?;
        assert_eq!(mapping.status, Some(model::domain_mapping::Status::Ready));
        assert_eq!(
            mapping.component.map(|c| c.name),
            Some("my-app-v2".to_string())
        );

        client
            .delete_domain_mapping()
            .set_project_id(PROJECT_ID)
            .set_name("www.example.com")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn secrets() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("POST"),
                request::path(eq(project_path("secrets"))),
                request::headers(contains((ANALYTICS, matches("operation_id=CreateSecret$")))),
                request::body(json_decoded(eq(json!({
                    "format": "basic_auth",
                    "name": "my-credentials",
                    "data": {"username": "admin", "password": "s3cr3t"}
                })))),
            ])
            .respond_with(created(json!({
                "name": "my-credentials",
                "entity_tag": "1",
                "format": "basic_auth",
                "data": {"username": "admin", "password": "s3cr3t"}
            }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method("PUT"),
                request::path(eq(project_path("secrets/my-credentials"))),
                request::headers(contains(("content-type", "application/json"))),
                request::headers(contains(("if-match", "1"))),
                request::headers(contains((ANALYTICS, matches("operation_id=ReplaceSecret$")))),
                request::body(json_decoded(eq(json!({
                    "format": "basic_auth",
                    "data": {"username": "admin", "password": "n3w-s3cr3t"}
                })))),
            ])
            .respond_with(json_encoded(json!({
                "name": "my-credentials",
                "entity_tag": "2",
                "format": "basic_auth",
                "data": {"username": "admin", "password": "n3w-s3cr3t"}
            }))),
        );

        let client = test_client(&server).await?;
        let secret = client
            .create_secret()
            .set_project_id(PROJECT_ID)
            .set_body(
                model::SecretPrototype::new()
                    .set_format(model::SecretFormat::BasicAuth)
                    .set_name("my-credentials")
                    .set_data(model::SecretData::basic_auth("admin", "s3cr3t")),
            )
            .send()
            .await?;
        assert_eq!(secret.format, Some(model::SecretFormat::BasicAuth));

        let secret = client
            .replace_secret()
            .set_project_id(PROJECT_ID)
            .set_name("my-credentials")
            .set_if_match(&secret.entity_tag)
            .set_body(
                model::SecretReplace::new()
                    .set_format(model::SecretFormat::BasicAuth)
                    .set_data(model::SecretData::basic_auth("admin", "n3w-s3cr3t")),
            )
            .send()
            .await?;
        assert_eq!(secret.entity_tag, "2");
        assert_eq!(
            secret.data.get("password").map(String::as_str),
            Some("n3w-s3cr3t")
        );
        Ok(())
    }

    #[tokio::test]
    async fn service_error() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path(eq(app_path("missing"))),
            ])
            .respond_with(
                status_code(404)
                    .append_header("content-type", "application/json")
                    .body(
                        json!({
                            "errors": [{
                                "code": "resource_not_found",
                                "message": "The app `missing` was not found."
                            }],
                            "trace": "abc-123",
                            "status_code": 404
                        })
                        .to_string(),
                    ),
            ),
        );

        let client = test_client(&server).await?;
        let err = client
            .get_app()
            .set_project_id(PROJECT_ID)
            .set_name("missing")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(404));
        let status = err.status().expect("the error carries the service details");
        assert_eq!(status.code(), Some("resource_not_found"));
        assert_eq!(status.message(), "The app `missing` was not found.");
        assert_eq!(status.trace.as_deref(), Some("abc-123"));
        Ok(())
    }

    #[tokio::test]
    async fn api_version_override() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path(eq(format!("/v2/projects/{PROJECT_ID}"))),
                request::query(url_decoded(contains(("version", "2024-11-18")))),
            ])
            .respond_with(json_encoded(json!({"id": PROJECT_ID, "name": "my-project"}))),
        );

        let client = CodeEngine::builder()
            .with_endpoint(format!("http://{}/v2", server.addr()))
            .with_credentials(auth::credentials::anonymous::Builder::new().build())
            .with_api_version("2024-11-18")
            .build()
            .await?;
        let project = client.get_project().set_id(PROJECT_ID).send().await?;
        assert_eq!(project.name, "my-project");
        Ok(())
    }

    #[tokio::test]
    async fn path_segments_are_escaped() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path(eq(app_path("my%20app%2Fv2"))),
            ])
            .respond_with(json_encoded(json!({"name": "my app/v2"}))),
        );

        let client = test_client(&server).await?;
        let app = client
            .get_app()
            .set_project_id(PROJECT_ID)
            .set_name("my app/v2")
            .send()
            .await?;
        assert_eq!(app.name, "my app/v2");
        Ok(())
    }

    #[tokio::test]
    async fn per_request_headers() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path(eq(app_path("my-app"))),
                request::headers(contains(("x-correlation-id", "test-123"))),
            ])
            .respond_with(json_encoded(json!({"name": "my-app"}))),
        );

        let client = test_client(&server).await?;
        let app = client
            .get_app()
            .set_project_id(PROJECT_ID)
            .set_name("my-app")
            .with_header(
                http::HeaderName::from_static("x-correlation-id"),
                http::HeaderValue::from_static("test-123"),
            )
            .send()
            .await?;
        assert_eq!(app.name, "my-app");
        Ok(())
    }

    #[tokio::test]
    async fn with_tracing() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path(eq(app_path("my-app"))),
            ])
            .respond_with(json_encoded(json!({"name": "my-app"}))),
        );

        let client = CodeEngine::builder()
            .with_endpoint(format!("http://{}/v2", server.addr()))
            .with_credentials(auth::credentials::anonymous::Builder::new().build())
            .with_tracing()
            .build()
            .await?;
        let app = client
            .get_app()
            .set_project_id(PROJECT_ID)
            .set_name("my-app")
            .send()
            .await?;
        assert_eq!(app.name, "my-app");
        Ok(())
    }

    #[tokio::test]
    async fn retry_transient_errors() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path(eq(app_path("my-app"))),
            ])
            .times(3)
            .respond_with(cycle![
                status_code(503).body("try again"),
                status_code(503).body("try again"),
                json_encoded(json!({"name": "my-app"})),
            ]),
        );

        let client = CodeEngine::builder()
            .with_endpoint(format!("http://{}/v2", server.addr()))
            .with_credentials(auth::credentials::anonymous::Builder::new().build())
            .with_retry_policy(AlwaysRetry.with_attempt_limit(3))
            .with_backoff_policy(
                ExponentialBackoffBuilder::new()
                    .with_initial_delay(Duration::from_millis(1))
                    .with_maximum_delay(Duration::from_millis(2))
                    .clamp(),
            )
            .build()
            .await?;
        let app = client
            .get_app()
            .set_project_id(PROJECT_ID)
            .set_name("my-app")
            .send()
            .await?;
        assert_eq!(app.name, "my-app");
        Ok(())
    }

    #[tokio::test]
    async fn retry_exhausted() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path(eq(app_path("my-app"))),
            ])
            .times(2)
            .respond_with(status_code(503).body("try again")),
        );

        let client = CodeEngine::builder()
            .with_endpoint(format!("http://{}/v2", server.addr()))
            .with_credentials(auth::credentials::anonymous::Builder::new().build())
            .with_retry_policy(AlwaysRetry.with_attempt_limit(2))
            .with_backoff_policy(
                ExponentialBackoffBuilder::new()
                    .with_initial_delay(Duration::from_millis(1))
                    .with_maximum_delay(Duration::from_millis(2))
                    .clamp(),
            )
            .build()
            .await?;
        let err = client
            .get_app()
            .set_project_id(PROJECT_ID)
            .set_name("my-app")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(503));
        Ok(())
    }
}
