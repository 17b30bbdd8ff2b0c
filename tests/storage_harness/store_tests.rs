//! Macro-generated test suite for the `ArticleStore` contract.
//!
//! # Generated Tests
//!
//! ## CRUD
//! - `test_insert_assigns_id_and_timestamps`
//! - `test_find_by_id_round_trip` / `test_find_missing_returns_none`
//! - `test_update_all_overwrites_fields` / `test_update_all_missing_returns_none`
//! - `test_update_all_with_same_values_still_found`
//! - `test_delete_existing` / `test_delete_missing_returns_false`
//!
//! ## Listing
//! - `test_list_window_and_total`: ordering by id, limit/offset window
//! - `test_list_title_is_case_insensitive_substring`
//! - `test_list_title_wildcards_are_literal`
//! - `test_list_category_and_status_are_exact`
//! - `test_count_matches_list_total`
//!
//! ## Edge Cases
//! - `test_concurrent_inserts_get_distinct_ids`

/// Generate a full `ArticleStore` conformance test suite.
///
/// `$factory` must evaluate to an empty store implementing
/// `ArticleStore + Clone + 'static`. It is re-evaluated for each test.
#[macro_export]
macro_rules! article_store_tests {
    ($factory:expr) => {
        mod article_store_contract_tests {
            use super::*;
            use articles::article::{ArticleStatus, ArticleStore, ListFilter};
            use std::collections::HashSet;

            // ==================================================================
            // CRUD
            // ==================================================================

            #[tokio::test]
            async fn test_insert_assigns_id_and_timestamps() {
                let store = $factory;
                let fields = article_fields("A first article title", "tech", ArticleStatus::Draft);

                let created = store.insert(fields.clone()).await.unwrap();

                assert!(created.id > 0);
                assert_eq!(created.title, fields.title);
                assert_eq!(created.content, fields.content);
                assert_eq!(created.category, "tech");
                assert_eq!(created.status, ArticleStatus::Draft);
                assert_eq!(created.created_at, created.updated_at);
            }

            #[tokio::test]
            async fn test_find_by_id_round_trip() {
                let store = $factory;
                let created = store
                    .insert(article_fields("Round trip article title", "news", ArticleStatus::Publish))
                    .await
                    .unwrap();

                let found = store.find_by_id(created.id).await.unwrap().unwrap();
                assert_eq!(found, created);
            }

            #[tokio::test]
            async fn test_find_missing_returns_none() {
                let store = $factory;
                assert!(store.find_by_id(987_654).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_update_all_overwrites_fields() {
                let store = $factory;
                let created = store
                    .insert(article_fields("Before the update happens", "tech", ArticleStatus::Draft))
                    .await
                    .unwrap();

                let updated = store
                    .update_all(
                        created.id,
                        article_fields("After the update happened", "science", ArticleStatus::Thrash),
                    )
                    .await
                    .unwrap()
                    .unwrap();

                assert_eq!(updated.id, created.id);
                assert_eq!(updated.title, "After the update happened");
                assert_eq!(updated.category, "science");
                assert_eq!(updated.status, ArticleStatus::Thrash);
                assert_eq!(updated.created_at, created.created_at);
                assert!(updated.updated_at >= created.updated_at);
            }

            #[tokio::test]
            async fn test_update_all_missing_returns_none() {
                let store = $factory;
                let result = store
                    .update_all(
                        987_654,
                        article_fields("Nobody will store this", "tech", ArticleStatus::Draft),
                    )
                    .await
                    .unwrap();
                assert!(result.is_none());
            }

            #[tokio::test]
            async fn test_update_all_with_same_values_still_found() {
                let store = $factory;
                let fields = article_fields("Unchanged article title", "tech", ArticleStatus::Draft);
                let created = store.insert(fields.clone()).await.unwrap();

                let first = store.update_all(created.id, fields.clone()).await.unwrap();
                let second = store.update_all(created.id, fields).await.unwrap();

                assert!(first.is_some());
                assert!(second.is_some());
            }

            #[tokio::test]
            async fn test_delete_existing() {
                let store = $factory;
                let created = store
                    .insert(article_fields("Soon to be deleted title", "tech", ArticleStatus::Draft))
                    .await
                    .unwrap();

                assert!(store.delete(created.id).await.unwrap());
                assert!(store.find_by_id(created.id).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_delete_missing_returns_false() {
                let store = $factory;
                store
                    .insert(article_fields("A survivor of the delete", "tech", ArticleStatus::Draft))
                    .await
                    .unwrap();

                assert!(!store.delete(987_654).await.unwrap());
                assert_eq!(store.count(&ListFilter::default()).await.unwrap(), 1);
            }

            // ==================================================================
            // Listing
            // ==================================================================

            #[tokio::test]
            async fn test_list_window_and_total() {
                let store = $factory;
                let mut ids = Vec::new();
                for i in 0..12 {
                    let created = store
                        .insert(article_fields(
                            &format!("Listing article number {:02}", i),
                            "tech",
                            ArticleStatus::Publish,
                        ))
                        .await
                        .unwrap();
                    ids.push(created.id);
                }

                let (first, total) = store.list(10, 0, &ListFilter::default()).await.unwrap();
                assert_eq!(total, 12);
                assert_eq!(
                    first.iter().map(|a| a.id).collect::<Vec<_>>(),
                    ids[..10].to_vec()
                );

                let (second, total) = store.list(10, 10, &ListFilter::default()).await.unwrap();
                assert_eq!(total, 12);
                assert_eq!(
                    second.iter().map(|a| a.id).collect::<Vec<_>>(),
                    ids[10..].to_vec()
                );

                let (beyond, _) = store.list(10, 20, &ListFilter::default()).await.unwrap();
                assert!(beyond.is_empty());
            }

            #[tokio::test]
            async fn test_list_title_is_case_insensitive_substring() {
                let store = $factory;
                store
                    .insert(article_fields("Learning RUST the hard way", "tech", ArticleStatus::Publish))
                    .await
                    .unwrap();
                store
                    .insert(article_fields("Cooking pasta for a crowd", "food", ArticleStatus::Publish))
                    .await
                    .unwrap();

                let filter = ListFilter {
                    title: Some("rust".to_string()),
                    ..Default::default()
                };
                let (items, total) = store.list(10, 0, &filter).await.unwrap();

                assert_eq!(total, 1);
                assert_eq!(items[0].title, "Learning RUST the hard way");

                let empty = ListFilter {
                    title: Some(String::new()),
                    ..Default::default()
                };
                assert_eq!(store.count(&empty).await.unwrap(), 2);
            }

            #[tokio::test]
            async fn test_list_title_wildcards_are_literal() {
                let store = $factory;
                store
                    .insert(article_fields("100% natural ingredients", "food", ArticleStatus::Publish))
                    .await
                    .unwrap();
                store
                    .insert(article_fields("1000 natural ingredients", "food", ArticleStatus::Publish))
                    .await
                    .unwrap();
                store
                    .insert(article_fields("snake_case naming in Rust", "tech", ArticleStatus::Publish))
                    .await
                    .unwrap();
                store
                    .insert(article_fields("snakeXcase is not a style", "tech", ArticleStatus::Publish))
                    .await
                    .unwrap();

                let percent = ListFilter {
                    title: Some("100%".to_string()),
                    ..Default::default()
                };
                let (items, _) = store.list(10, 0, &percent).await.unwrap();
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].title, "100% natural ingredients");

                let underscore = ListFilter {
                    title: Some("snake_case".to_string()),
                    ..Default::default()
                };
                assert_eq!(store.count(&underscore).await.unwrap(), 1);
            }

            #[tokio::test]
            async fn test_list_category_and_status_are_exact() {
                let store = $factory;
                store
                    .insert(article_fields("Published technology piece", "tech", ArticleStatus::Publish))
                    .await
                    .unwrap();
                store
                    .insert(article_fields("Drafted technology article", "tech", ArticleStatus::Draft))
                    .await
                    .unwrap();
                store
                    .insert(article_fields("Published techno music post", "techno", ArticleStatus::Publish))
                    .await
                    .unwrap();

                let by_category = ListFilter {
                    category: Some("tech".to_string()),
                    ..Default::default()
                };
                assert_eq!(store.count(&by_category).await.unwrap(), 2);

                let by_both = ListFilter {
                    category: Some("tech".to_string()),
                    status: Some(ArticleStatus::Publish),
                    ..Default::default()
                };
                let (items, total) = store.list(10, 0, &by_both).await.unwrap();
                assert_eq!(total, 1);
                assert_eq!(items[0].title, "Published technology piece");

                let by_status = ListFilter {
                    status: Some(ArticleStatus::Thrash),
                    ..Default::default()
                };
                assert_eq!(store.count(&by_status).await.unwrap(), 0);
            }

            #[tokio::test]
            async fn test_count_matches_list_total() {
                let store = $factory;
                for (title, status) in [
                    ("Counting articles part one", ArticleStatus::Draft),
                    ("Counting articles part two", ArticleStatus::Publish),
                    ("Counting articles part three", ArticleStatus::Draft),
                ] {
                    store.insert(article_fields(title, "tech", status)).await.unwrap();
                }

                let filter = ListFilter {
                    status: Some(ArticleStatus::Draft),
                    ..Default::default()
                };
                let (_, total) = store.list(1, 0, &filter).await.unwrap();
                assert_eq!(total, store.count(&filter).await.unwrap());
                assert_eq!(total, 2);
            }

            // ==================================================================
            // Edge Cases
            // ==================================================================

            #[tokio::test]
            async fn test_concurrent_inserts_get_distinct_ids() {
                let store = $factory;
                let mut handles = Vec::new();

                for i in 0..10 {
                    let store = store.clone();
                    handles.push(tokio::spawn(async move {
                        store
                            .insert(article_fields(
                                &format!("Concurrent article number {}", i),
                                "tech",
                                ArticleStatus::Draft,
                            ))
                            .await
                            .unwrap()
                            .id
                    }));
                }

                let mut ids = HashSet::new();
                for handle in handles {
                    ids.insert(handle.await.unwrap());
                }

                assert_eq!(ids.len(), 10);
                assert_eq!(store.count(&ListFilter::default()).await.unwrap(), 10);
            }
        }
    };
}
