//! REST integration test macro for article stores.
//!
//! The `rest_integration_tests!` macro generates HTTP-level tests that drive
//! the full stack: JSON → HTTP request → validation → service → store →
//! response envelope → JSON.
//!
//! # Generated Tests
//!
//! ## CRUD
//! - `test_rest_create`: POST 201 + envelope
//! - `test_rest_get` / `test_rest_update_partial` / `test_rest_delete`
//!
//! ## Validation
//! - `test_rest_create_empty_body`: every field reported as `required`
//! - `test_rest_create_short_title` / `test_rest_create_unknown_status`
//! - `test_rest_create_malformed_json`: 400 before validation
//! - `test_rest_update_invalid_field`
//!
//! ## Listing
//! - `test_rest_list_clamps_limit` / `test_rest_list_filters`
//! - `test_rest_list_invalid_status_filter` / `test_rest_list_page_out_of_range`
//!
//! ## Error handling
//! - `test_rest_not_found` / `test_rest_invalid_id`
//! - `test_rest_update_bad_id_reported_before_body`

/// Generate a REST integration test suite for a store.
///
/// `$store_factory` must produce an `impl ArticleStore + 'static` holding no
/// articles.
#[macro_export]
macro_rules! rest_integration_tests {
    ($store_factory:expr) => {
        mod rest_integration_tests {
            use super::*;
            use articles::server::ServerBuilder;
            use axum::http::StatusCode;
            use axum_test::TestServer;
            use serde_json::{Value, json};

            async fn make_server() -> TestServer {
                let store = $store_factory;
                let router = ServerBuilder::new().with_store(store).build().unwrap();
                TestServer::try_new(router).unwrap()
            }

            async fn create(server: &TestServer, title: &str) -> Value {
                let response = server.post("/articles").json(&valid_create_body(title)).await;
                response.assert_status(StatusCode::CREATED);
                response.json::<Value>()["data"].clone()
            }

            // ==============================================================
            // CRUD
            // ==============================================================

            #[tokio::test]
            async fn test_rest_create() {
                let server = make_server().await;

                let response = server
                    .post("/articles")
                    .json(&valid_create_body("Creating an article over HTTP"))
                    .await;

                response.assert_status(StatusCode::CREATED);
                let body: Value = response.json();
                assert_eq!(body["success"], true);
                assert_eq!(body["message"], "article created successfully");
                assert!(body["data"]["id"].as_i64().unwrap() > 0);
                assert_eq!(body["data"]["title"], "Creating an article over HTTP");
                assert_eq!(body["data"]["status"], "draft");
                assert_eq!(body["data"]["created_at"], body["data"]["updated_at"]);
                assert!(body.get("error").is_none());
            }

            #[tokio::test]
            async fn test_rest_get() {
                let server = make_server().await;
                let created = create(&server, "Fetching an article by id").await;
                let id = created["id"].as_i64().unwrap();

                let response = server.get(&format!("/articles/{}", id)).await;

                response.assert_status(StatusCode::OK);
                let body: Value = response.json();
                assert_eq!(body["message"], "article retrieved successfully");
                assert_eq!(body["data"], created);
            }

            #[tokio::test]
            async fn test_rest_update_partial() {
                let server = make_server().await;
                let created = create(&server, "Original title before edit").await;
                let id = created["id"].as_i64().unwrap();

                let response = server
                    .put(&format!("/articles/{}", id))
                    .json(&json!({"status": "publish", "title": ""}))
                    .await;

                response.assert_status(StatusCode::OK);
                let body: Value = response.json();
                assert_eq!(body["message"], "article updated successfully");
                assert_eq!(body["data"]["status"], "publish");
                assert_eq!(body["data"]["title"], "Original title before edit");
                assert_eq!(body["data"]["content"], created["content"]);

                let unchanged = server
                    .put(&format!("/articles/{}", id))
                    .json(&json!({}))
                    .await;
                unchanged.assert_status(StatusCode::OK);
                assert_eq!(unchanged.json::<Value>()["data"]["status"], "publish");
            }

            #[tokio::test]
            async fn test_rest_delete() {
                let server = make_server().await;
                let created = create(&server, "This article will be gone").await;
                let path = format!("/articles/{}", created["id"]);

                let response = server.delete(&path).await;
                response.assert_status(StatusCode::OK);
                let body: Value = response.json();
                assert_eq!(body["success"], true);
                assert_eq!(body["message"], "article deleted successfully");
                assert!(body.get("data").is_none());

                server.get(&path).await.assert_status(StatusCode::NOT_FOUND);
                server.delete(&path).await.assert_status(StatusCode::NOT_FOUND);
            }

            // ==============================================================
            // Validation
            // ==============================================================

            #[tokio::test]
            async fn test_rest_create_empty_body() {
                let server = make_server().await;

                let response = server.post("/articles").json(&json!({})).await;

                response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
                let body: Value = response.json();
                assert_eq!(body["success"], false);
                assert_eq!(
                    body["errors"],
                    json!([
                        {"field": "title", "message": "title wajib diisi", "tag": "required"},
                        {"field": "content", "message": "content wajib diisi", "tag": "required"},
                        {"field": "category", "message": "category wajib diisi", "tag": "required"},
                        {"field": "status", "message": "status wajib diisi", "tag": "required"},
                    ])
                );
            }

            #[tokio::test]
            async fn test_rest_create_short_title() {
                let server = make_server().await;
                let mut payload = valid_create_body("placeholder");
                payload["title"] = json!("a".repeat(19));

                let response = server.post("/articles").json(&payload).await;

                response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
                let body: Value = response.json();
                assert_eq!(
                    body["errors"],
                    json!([{
                        "field": "title",
                        "message": "title minimal 20 karakter",
                        "tag": "min",
                        "param": "20",
                    }])
                );
            }

            #[tokio::test]
            async fn test_rest_create_unknown_status() {
                let server = make_server().await;
                let mut payload = valid_create_body("An article with odd status");
                payload["status"] = json!("archived");

                let response = server.post("/articles").json(&payload).await;

                response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
                let error = &response.json::<Value>()["errors"][0];
                assert_eq!(error["field"], "status");
                assert_eq!(error["tag"], "oneof");
                assert_eq!(error["param"], "publish draft thrash");
                assert_eq!(
                    error["message"],
                    "status harus salah satu dari: publish, draft, thrash"
                );
            }

            #[tokio::test]
            async fn test_rest_create_malformed_json() {
                let server = make_server().await;

                let response = server
                    .post("/articles")
                    .json(&json!({"title": 42}))
                    .await;

                response.assert_status(StatusCode::BAD_REQUEST);
                let body: Value = response.json();
                assert_eq!(body, json!({"success": false, "error": "invalid JSON body"}));

                let plain = server.post("/articles").text("{not json").await;
                plain.assert_status(StatusCode::BAD_REQUEST);
            }

            #[tokio::test]
            async fn test_rest_update_invalid_field() {
                let server = make_server().await;
                let created = create(&server, "An article to mis-update").await;

                let response = server
                    .put(&format!("/articles/{}", created["id"]))
                    .json(&json!({"category": "ab"}))
                    .await;

                response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
                let error = &response.json::<Value>()["errors"][0];
                assert_eq!(error["field"], "category");
                assert_eq!(error["message"], "category minimal 3 karakter");
            }

            // ==============================================================
            // Listing
            // ==============================================================

            #[tokio::test]
            async fn test_rest_list_clamps_limit() {
                let server = make_server().await;
                for i in 0..12 {
                    create(&server, &format!("Paginated article number {:02}", i)).await;
                }

                let response = server
                    .get("/articles")
                    .add_query_param("limit", 5)
                    .add_query_param("page", 1)
                    .await;

                response.assert_status(StatusCode::OK);
                let body: Value = response.json();
                assert_eq!(body["message"], "articles retrieved successfully");
                assert_eq!(body["data"]["items"].as_array().unwrap().len(), 10);
                assert_eq!(
                    body["data"]["meta"],
                    json!({"limit": 10, "page": 1, "total": 12, "has_next": true})
                );

                let last = server
                    .get("/articles")
                    .add_query_param("page", 2)
                    .await
                    .json::<Value>();
                assert_eq!(last["data"]["items"].as_array().unwrap().len(), 2);
                assert_eq!(last["data"]["meta"]["has_next"], false);
            }

            #[tokio::test]
            async fn test_rest_list_bad_numbers_fall_back_to_floor() {
                let server = make_server().await;
                create(&server, "A lonely article in the list").await;

                let body = server
                    .get("/articles")
                    .add_query_param("limit", "many")
                    .add_query_param("page", "first")
                    .await
                    .json::<Value>();

                assert_eq!(body["data"]["meta"]["limit"], 10);
                assert_eq!(body["data"]["meta"]["page"], 1);
                assert_eq!(body["data"]["meta"]["total"], 1);
            }

            #[tokio::test]
            async fn test_rest_list_filters() {
                let server = make_server().await;
                create(&server, "Async Rust in production").await;
                create(&server, "Gardening through the year").await;

                let body = server
                    .get("/articles")
                    .add_query_param("title", "RUST")
                    .add_query_param("status", "DRAFT")
                    .add_query_param("category", " technology ")
                    .await
                    .json::<Value>();

                assert_eq!(body["data"]["meta"]["total"], 1);
                assert_eq!(body["data"]["items"][0]["title"], "Async Rust in production");
            }

            #[tokio::test]
            async fn test_rest_list_invalid_status_filter() {
                let server = make_server().await;

                let response = server
                    .get("/articles")
                    .add_query_param("status", "archived")
                    .await;

                response.assert_status(StatusCode::BAD_REQUEST);
                assert_eq!(
                    response.json::<Value>(),
                    json!({
                        "success": false,
                        "error": "status filter invalid: pilih publish | draft | thrash",
                    })
                );
            }

            // ==============================================================
            // Error handling
            // ==============================================================

            #[tokio::test]
            async fn test_rest_not_found() {
                let server = make_server().await;

                let response = server.get("/articles/987654").await;

                response.assert_status(StatusCode::NOT_FOUND);
                assert_eq!(
                    response.json::<Value>(),
                    json!({"success": false, "error": "article tidak ditemukan"})
                );
            }

            #[tokio::test]
            async fn test_rest_invalid_id() {
                let server = make_server().await;

                for path in ["/articles/abc", "/articles/1.5"] {
                    let response = server.get(path).await;
                    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
                    assert_eq!(response.json::<Value>()["error"], "id harus integer");
                }

                server
                    .delete("/articles/abc")
                    .await
                    .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
            }

            #[tokio::test]
            async fn test_rest_update_bad_id_reported_before_body() {
                let server = make_server().await;

                let malformed = server.put("/articles/abc").text("not json").await;
                malformed.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
                assert_eq!(
                    malformed.json::<Value>(),
                    json!({"success": false, "error": "id harus integer"})
                );

                let invalid = server
                    .put("/articles/abc")
                    .json(&json!({"title": "short"}))
                    .await;
                invalid.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
                let body: Value = invalid.json();
                assert_eq!(body["error"], "id harus integer");
                assert!(body.get("errors").is_none());
            }

            #[tokio::test]
            async fn test_rest_list_page_out_of_range() {
                let server = make_server().await;

                for (limit, page) in [("10", "9223372036854775807"), ("9223372036854775807", "2")] {
                    let response = server
                        .get("/articles")
                        .add_query_param("limit", limit)
                        .add_query_param("page", page)
                        .await;

                    response.assert_status(StatusCode::BAD_REQUEST);
                    assert_eq!(
                        response.json::<Value>(),
                        json!({"success": false, "error": "page out of range"})
                    );
                }

                let first = server
                    .get("/articles")
                    .add_query_param("limit", "9223372036854775807")
                    .await;
                first.assert_status(StatusCode::OK);
                assert_eq!(first.json::<Value>()["data"]["meta"]["page"], 1);
            }
        }
    };
}
