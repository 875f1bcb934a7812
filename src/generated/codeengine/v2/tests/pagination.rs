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

//! Verify the list operations follow the `next` links.

#[cfg(test)]
mod tests {
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use ibm_cloud_codeengine_v2::client::CodeEngine;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const PROJECT_ID: &str = "15314cc3-85b4-4338-903f-c28cdee6d005";

    async fn test_client(server: &Server) -> anyhow::Result<CodeEngine> {
        let client = CodeEngine::builder()
            .with_endpoint(format!("http://{}/v2", server.addr()))
            .with_credentials(auth::credentials::anonymous::Builder::new().build())
            .build()
            .await?;
        Ok(client)
    }

    fn two_pages(server: &Server) {
        let path = format!("/v2/projects/{PROJECT_ID}/apps");
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path(eq(path.clone())),
                request::query(url_decoded(contains(("limit", "2")))),
                request::query(url_decoded(not(contains(key("start"))))),
            ])
            .respond_with(json_encoded(json!({
                "limit": 2,
                "apps": [{"name": "app-1"}, {"name": "app-2"}],
                "next": {
                    "href": format!("https://example.com{path}?limit=2&start=token%2F2"),
                    "start": "token/2"
                }
            }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path(eq(path)),
                request::query(url_decoded(contains(("limit", "2")))),
                request::query(url_decoded(contains(("start", "token/2")))),
            ])
            .respond_with(json_encoded(json!({
                "limit": 2,
                "apps": [{"name": "app-3"}]
            }))),
        );
    }

    #[tokio::test]
    async fn by_item() -> anyhow::Result<()> {
        let server = Server::run();
        two_pages(&server);

        let client = test_client(&server).await?;
        let mut items = client
            .list_apps()
            .set_project_id(PROJECT_ID)
            .set_limit(2)
            .by_item();
        let mut names = Vec::new();
        while let Some(app) = items.next().await {
            names.push(app?.name);
        }
        assert_eq!(names, vec!["app-1", "app-2", "app-3"]);
        Ok(())
    }

    #[tokio::test]
    async fn by_page() -> anyhow::Result<()> {
        let server = Server::run();
        two_pages(&server);

        let client = test_client(&server).await?;
        let mut pages = client
            .list_apps()
            .set_project_id(PROJECT_ID)
            .set_limit(2)
            .by_page();
        let mut sizes = Vec::new();
        while let Some(page) = pages.next().await {
            sizes.push(page?.apps.len());
        }
        assert_eq!(sizes, vec![2, 1]);
        Ok(())
    }

    #[tokio::test]
    async fn token_from_href() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path("/v2/projects"),
                request::query(url_decoded(not(contains(key("start"))))),
            ])
            .respond_with(json_encoded(json!({
                "projects": [{"name": "project-1"}],
                "next": {"href": "https://example.com/v2/projects?start=abc%3D%3D&limit=1"}
            }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path("/v2/projects"),
                request::query(url_decoded(contains(("start", "abc==")))),
            ])
            .respond_with(json_encoded(json!({
                "projects": [{"name": "project-2"}]
            }))),
        );

        let client = test_client(&server).await?;
        let names = {
            use futures::TryStreamExt;
            client
                .list_projects()
                .by_item()
                .into_stream()
                .map_ok(|p| p.name)
                .try_collect::<Vec<_>>()
                .await?
        };
        assert_eq!(names, vec!["project-1", "project-2"]);
        Ok(())
    }

    #[tokio::test]
    async fn error_stops_iteration() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v2/projects"))
                .respond_with(status_code(500).body("internal error")),
        );

        let client = test_client(&server).await?;
        let mut items = client.list_projects().by_item();
        let err = items.next().await.transpose().unwrap_err();
        assert_eq!(err.http_status_code(), Some(500));
        assert!(items.next().await.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn single_page_collection() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v2/function_runtimes"))
                .respond_with(json_encoded(json!({
                    "function_runtimes": [{"id": "nodejs-20"}, {"id": "python-3.11"}]
                }))),
        );

        let client = test_client(&server).await?;
        let mut items = client.list_function_runtimes().by_item();
        let mut ids = Vec::new();
        while let Some(runtime) = items.next().await {
            ids.extend(runtime?.id);
        }
        assert_eq!(ids, vec!["nodejs-20", "python-3.11"]);
        Ok(())
    }
}
