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

//! Invalid requests fail before any request is sent.
//!
//! The server in these tests has no expectations, it fails the test if it
//! receives any request.

#[cfg(test)]
mod tests {
    use gaxi::path_parameter::Error as PathError;
    use httptest::Server;
    use ibm_cloud_codeengine_v2::client::CodeEngine;
    use ibm_cloud_codeengine_v2::{ValidationError, model};
    use std::error::Error as _;

    const PROJECT_ID: &str = "15314cc3-85b4-4338-903f-c28cdee6d005";

    async fn test_client(server: &Server) -> anyhow::Result<CodeEngine> {
        let client = CodeEngine::builder()
            .with_endpoint(format!("http://{}/v2", server.addr()))
            .with_credentials(auth::credentials::anonymous::Builder::new().build())
            .build()
            .await?;
        Ok(client)
    }

    fn validation_error(err: &gax::error::Error) -> Option<&ValidationError> {
        err.source().and_then(|e| e.downcast_ref::<ValidationError>())
    }

    #[tokio::test]
    async fn bad_project_id() -> anyhow::Result<()> {
        let server = Server::run();
        let client = test_client(&server).await?;
        let err = client
            .get_app()
            .set_project_id("not-a-project-id")
            .set_name("my-app")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        let source = err.source().and_then(|e| e.downcast_ref::<PathError>());
        assert!(
            matches!(source, Some(PathError::PatternMismatch { name, .. }) if name == "project_id"),
            "{err:?}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn missing_path_parameter() -> anyhow::Result<()> {
        let server = Server::run();
        let client = test_client(&server).await?;
        let err = client
            .get_job()
            .set_project_id(PROJECT_ID)
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        let source = err.source().and_then(|e| e.downcast_ref::<PathError>());
        assert!(
            matches!(source, Some(PathError::MissingRequiredParameter(name)) if name == "name"),
            "{err:?}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn missing_binding_id() -> anyhow::Result<()> {
        let server = Server::run();
        let client = test_client(&server).await?;
        let err = client
            .delete_binding()
            .set_project_id(PROJECT_ID)
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        let source = err.source().and_then(|e| e.downcast_ref::<PathError>());
        assert!(
            matches!(source, Some(PathError::MissingRequiredParameter(name)) if name == "id"),
            "{err:?}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn limit_out_of_range() -> anyhow::Result<()> {
        let server = Server::run();
        let client = test_client(&server).await?;
        for limit in [0, 101] {
            let err = client
                .list_apps()
                .set_project_id(PROJECT_ID)
                .set_limit(limit)
                .send()
                .await
                .unwrap_err();
            assert!(err.is_binding(), "{err:?}");
            assert_eq!(
                validation_error(&err),
                Some(&ValidationError::OutOfRange {
                    name: "limit",
                    value: limit,
                    min: 1,
                    max: 100
                })
            );
        }
        Ok(())
    }

    #[tokio::test]
    async fn missing_if_match() -> anyhow::Result<()> {
        let server = Server::run();
        let client = test_client(&server).await?;
        let err = client
            .update_job()
            .set_project_id(PROJECT_ID)
            .set_name("my-job")
            .set_body(model::JobPatch::new().set_image_reference("icr.io/codeengine/hello"))
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert_eq!(
            validation_error(&err),
            Some(&ValidationError::MissingField("if_match"))
        );
        Ok(())
    }

    #[tokio::test]
    async fn missing_required_field() -> anyhow::Result<()> {
        let server = Server::run();
        let client = test_client(&server).await?;
        let err = client
            .create_app()
            .set_project_id(PROJECT_ID)
            .set_body(model::AppPrototype::new().set_name("my-app"))
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert_eq!(
            validation_error(&err),
            Some(&ValidationError::MissingField("image_reference"))
        );
        Ok(())
    }

    #[tokio::test]
    async fn build_source_url() -> anyhow::Result<()> {
        let server = Server::run();
        let client = test_client(&server).await?;
        let body = model::BuildPrototype::new()
            .set_name("my-build")
            .set_output_image("private.de.icr.io/icr_namespace/image-name")
            .set_output_secret("ce-auto-icr-private-eu-de")
            .set_strategy_type("dockerfile");
        let err = client
            .create_build()
            .set_project_id(PROJECT_ID)
            .set_body(body)
            .send()
            .await
            .unwrap_err();
        assert_eq!(
            validation_error(&err),
            Some(&ValidationError::MissingField("source_url"))
        );
        Ok(())
    }
}
