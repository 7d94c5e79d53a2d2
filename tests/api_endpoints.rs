#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use taskbook::db::db::Db;
    use taskbook::libs::config::DbConfig;
    use taskbook::server;
    use tempfile::TempDir;
    use test_context::{test_context, AsyncTestContext};

    struct ApiTestContext {
        _temp_dir: TempDir,
        base_url: String,
        client: reqwest::Client,
    }

    impl AsyncTestContext for ApiTestContext {
        async fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let config = DbConfig {
                path: temp_dir.path().join("taskbook.db"),
                pool_size: 2,
            };
            let db = Db::init(&config).await.unwrap();

            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            tokio::spawn(async move {
                axum::serve(listener, server::router(db)).await.unwrap();
            });

            ApiTestContext {
                _temp_dir: temp_dir,
                base_url: format!("http://{}", addr),
                client: reqwest::Client::new(),
            }
        }
    }

    impl ApiTestContext {
        fn url(&self, path: &str) -> String {
            format!("{}{}", self.base_url, path)
        }
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_health(ctx: &mut ApiTestContext) {
        let response = ctx.client.get(ctx.url("/health")).send().await.unwrap();
        assert_eq!(response.status(), 200);

        let body: Value = response.json().await.unwrap();
        assert_eq!(body["status"], "OK");
        assert!(body["timestamp"].is_string());
        assert!(body["uptime"].is_number());
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_list_empty(ctx: &mut ApiTestContext) {
        let response = ctx.client.get(ctx.url("/tasks")).send().await.unwrap();
        assert_eq!(response.status(), 200);

        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!([]));
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_create_get_delete_scenario(ctx: &mut ApiTestContext) {
        // POST with only a title
        let response = ctx
            .client
            .post(ctx.url("/tasks"))
            .json(&json!({ "title": "Buy milk" }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 201);

        let created: Value = response.json().await.unwrap();
        assert_eq!(created["title"], "Buy milk");
        assert_eq!(created["description"], Value::Null);
        assert_eq!(created["completed"], false);
        let id = created["id"].as_i64().unwrap();

        // GET by the returned id yields identical fields
        let response = ctx.client.get(ctx.url(&format!("/tasks/{}", id))).send().await.unwrap();
        assert_eq!(response.status(), 200);
        let fetched: Value = response.json().await.unwrap();
        assert_eq!(fetched, created);

        // DELETE removes it with an empty body
        let response = ctx.client.delete(ctx.url(&format!("/tasks/{}", id))).send().await.unwrap();
        assert_eq!(response.status(), 204);
        assert!(response.bytes().await.unwrap().is_empty());

        // The id no longer resolves
        let response = ctx.client.get(ctx.url(&format!("/tasks/{}", id))).send().await.unwrap();
        assert_eq!(response.status(), 404);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_create_requires_title(ctx: &mut ApiTestContext) {
        for body in [json!({ "description": "No title" }), json!({ "title": "" })] {
            let response = ctx.client.post(ctx.url("/tasks")).json(&body).send().await.unwrap();
            assert_eq!(response.status(), 400);

            let error: Value = response.json().await.unwrap();
            assert_eq!(error["error"], "Title is required");
        }

        // No row was inserted
        let tasks: Value = ctx.client.get(ctx.url("/tasks")).send().await.unwrap().json().await.unwrap();
        assert_eq!(tasks, json!([]));
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_update_task(ctx: &mut ApiTestContext) {
        let created: Value = ctx
            .client
            .post(ctx.url("/tasks"))
            .json(&json!({ "title": "T", "description": "D" }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        let id = created["id"].as_i64().unwrap();

        let response = ctx
            .client
            .put(ctx.url(&format!("/tasks/{}", id)))
            .json(&json!({ "title": "T2", "description": "D2", "completed": true }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);

        let updated: Value = response.json().await.unwrap();
        assert_eq!(updated["title"], "T2");
        assert_eq!(updated["description"], "D2");
        assert_eq!(updated["completed"], true);
        assert!(updated["updated_at"].as_str().unwrap() >= created["created_at"].as_str().unwrap());
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_update_requires_title(ctx: &mut ApiTestContext) {
        let created: Value = ctx
            .client
            .post(ctx.url("/tasks"))
            .json(&json!({ "title": "Keep me" }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        let id = created["id"].as_i64().unwrap();

        let response = ctx
            .client
            .put(ctx.url(&format!("/tasks/{}", id)))
            .json(&json!({ "description": "No title" }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 400);

        let error: Value = response.json().await.unwrap();
        assert_eq!(error["error"], "Title is required");

        // The row is untouched
        let fetched: Value = ctx
            .client
            .get(ctx.url(&format!("/tasks/{}", id)))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(fetched["title"], "Keep me");
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_update_missing_id_is_not_found(ctx: &mut ApiTestContext) {
        let response = ctx
            .client
            .put(ctx.url("/tasks/999"))
            .json(&json!({ "title": "Ghost" }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 404);

        let error: Value = response.json().await.unwrap();
        assert_eq!(error["error"], "Task not found");
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_delete_missing_id_leaves_table_unchanged(ctx: &mut ApiTestContext) {
        let created: Value = ctx
            .client
            .post(ctx.url("/tasks"))
            .json(&json!({ "title": "Survivor" }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        let id = created["id"].as_i64().unwrap();

        let response = ctx.client.delete(ctx.url(&format!("/tasks/{}", id + 1))).send().await.unwrap();
        assert_eq!(response.status(), 404);

        let tasks: Value = ctx.client.get(ctx.url("/tasks")).send().await.unwrap().json().await.unwrap();
        assert_eq!(tasks.as_array().unwrap().len(), 1);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_client_controller_end_to_end(ctx: &mut ApiTestContext) {
        use taskbook::client::api::HttpTasksApi;
        use taskbook::client::controller::TaskController;
        use taskbook::client::view::{HtmlTaskView, TaskAction};

        let mut controller = TaskController::new(HttpTasksApi::new(&ctx.base_url), HtmlTaskView);

        let rendered = controller.load().await;
        assert!(rendered.markup.contains("No tasks yet"));
        assert!(rendered.actions.is_empty());

        let rendered = controller.submit("Walk the dog", "Around the block").await.unwrap();
        assert!(rendered.markup.contains("Walk the dog"));
        assert_eq!(rendered.actions.len(), 3);

        // Toggle through the freshly bound action
        let toggle = rendered.actions.iter().find(|a| matches!(a, TaskAction::Toggle { .. })).unwrap();
        let (id, completed) = match toggle {
            TaskAction::Toggle { id, completed } => (*id, *completed),
            _ => unreachable!(),
        };
        assert!(completed);
        let rendered = controller.toggle(id, completed).await.unwrap();
        assert!(rendered.markup.contains("Completed"));

        let rendered = controller.delete(id).await.unwrap();
        assert!(rendered.markup.contains("No tasks yet"));
    }
}
