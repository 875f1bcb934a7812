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

//! Applications can mock the client to test their own code.

#[cfg(test)]
mod tests {
    use ce::model;
    use gax::error::{Error, ErrorDetail, ServiceError};
    use gax::response::Response;
    use ibm_cloud_codeengine_v2 as ce;

    mockall::mock! {
        #[derive(Debug)]
        CodeEngine {}
        impl ce::stub::CodeEngine for CodeEngine {
            async fn get_app(&self, req: model::GetAppRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<model::App>>;
            async fn list_apps(&self, req: model::ListAppsRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<model::AppList>>;
            async fn delete_app(&self, req: model::DeleteAppRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<()>>;
        }
    }

    const PROJECT_ID: &str = "15314cc3-85b4-4338-903f-c28cdee6d005";

    /// The function under test.
    async fn is_ready(
        client: &ce::client::CodeEngine,
        project: &str,
        name: &str,
    ) -> gax::Result<bool> {
        let app = client
            .get_app()
            .set_project_id(project)
            .set_name(name)
            .send()
            .await?;
        Ok(app.status == Some(model::app::Status::Ready))
    }

    /// Deletes all the apps with a `failed` status, returns their names.
    async fn delete_failed(
        client: &ce::client::CodeEngine,
        project: &str,
    ) -> gax::Result<Vec<String>> {
        let mut deleted = Vec::new();
        let mut apps = client.list_apps().set_project_id(project).by_item();
        while let Some(app) = apps.next().await {
            let app = app?;
            if app.status != Some(model::app::Status::Failed) {
                continue;
            }
            client
                .delete_app()
                .set_project_id(project)
                .set_name(&app.name)
                .send()
                .await?;
            deleted.push(app.name);
        }
        Ok(deleted)
    }

    fn app(name: &str, status: model::app::Status) -> model::App {
        model::App::new().set_name(name).set_status(status)
    }

    #[tokio::test]
    async fn ready() -> anyhow::Result<()> {
        let mut mock = MockCodeEngine::new();
        mock.expect_get_app()
            .withf(|r, _| r.project_id == PROJECT_ID && r.name == "my-app")
            .return_once(|_, _| Ok(Response::from(app("my-app", model::app::Status::Ready))));

        let client = ce::client::CodeEngine::from_stub(mock);
        assert!(is_ready(&client, PROJECT_ID, "my-app").await?);
        Ok(())
    }

    #[tokio::test]
    async fn not_found() -> anyhow::Result<()> {
        let mut mock = MockCodeEngine::new();
        mock.expect_get_app().return_once(|_, _| Err(not_found_error()));

        let client = ce::client::CodeEngine::from_stub(mock);
        let err = is_ready(&client, PROJECT_ID, "missing").await.unwrap_err();
        assert_eq!(err.http_status_code(), Some(404));
        assert_eq!(
            err.status().and_then(ServiceError::code),
            Some("resource_not_found")
        );
        Ok(())
    }

    #[tokio::test]
    async fn pages_and_deletes() -> anyhow::Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockCodeEngine::new();
        mock.expect_list_apps()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|r, _| r.project_id == PROJECT_ID && r.start.is_none())
            .return_once(|_, _| {
                Ok(Response::from(
                    model::AppList::new()
                        .set_apps([
                            app("app-1", model::app::Status::Ready),
                            app("app-2", model::app::Status::Failed),
                        ])
                        .set_next(model::ListNextMetadata::new().set_start("page-2")),
                ))
            });
        mock.expect_delete_app()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|r, _| r.name == "app-2")
            .return_once(|_, _| Ok(Response::from(())));
        mock.expect_list_apps()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|r, _| r.start.as_deref() == Some("page-2"))
            .return_once(|_, _| {
                Ok(Response::from(model::AppList::new().set_apps([app(
                    "app-3",
                    model::app::Status::Failed,
                )])))
            });
        mock.expect_delete_app()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|r, _| r.name == "app-3")
            .return_once(|_, _| Ok(Response::from(())));

        let client = ce::client::CodeEngine::from_stub(mock);
        let deleted = delete_failed(&client, PROJECT_ID).await?;
        assert_eq!(deleted, vec!["app-2", "app-3"]);
        Ok(())
    }

    fn not_found_error() -> Error {
        Error::service(
            ServiceError::default()
                .set_status_code(404_u16)
                .set_errors([ErrorDetail::new()
                    .set_code("resource_not_found")
                    .set_message("app not found")]),
        )
    }
}
