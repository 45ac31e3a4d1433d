//! HTTP-level integration tests for the admin content-resource API.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router.
//! Covers authentication short-circuiting, the create/update/delete
//! lifecycle, slug and order uniqueness, cover/gallery resolution rules,
//! and pagination metadata.

mod common;

use axum::http::StatusCode;
use common::{
    admin_token, body_json, build_test_app, build_test_app_with_store, delete_auth, get_auth,
    post_multipart, put_multipart, token_with_role, MultipartForm,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// A complete, valid create form for a service.
fn service_form(name: &str, order: i32) -> MultipartForm {
    MultipartForm::new()
        .text("name", name)
        .text("shortDescription", "Short blurb")
        .text("description", "<p>Full description</p>")
        .text("order", &order.to_string())
        .text("features", r#"["24/7 support","NDIS registered"]"#)
        .file("image", "cover.png", "image/png", b"cover-bytes")
}

// ---------------------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_routes_reject_missing_token(pool: PgPool) {
    let app = build_test_app(pool);

    let response = common::get(&app, "/api/v1/admin/services").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["message"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_routes_reject_invalid_token(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get_auth(&app, "/api/v1/admin/services", "not-a-real-token").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_routes_reject_non_admin_role(pool: PgPool) {
    let app = build_test_app(pool);
    let token = token_with_role("viewer");

    let response = get_auth(&app, "/api/v1/admin/services", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn auth_runs_before_business_logic(pool: PgPool) {
    let app = build_test_app(pool);

    // An invalid payload with no token must still yield 401, not 400.
    let response = post_multipart(
        &app,
        "/api/v1/admin/services",
        "bad-token",
        MultipartForm::new().text("name", ""),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_service_happy_path(pool: PgPool) {
    let (app, store) = build_test_app_with_store(pool);
    let token = admin_token();

    let form = service_form("Respite Care", 1)
        .file("galleryImages", "g1.png", "image/png", b"gallery-1")
        .file("galleryImages", "g2.png", "image/png", b"gallery-2");

    let response = post_multipart(&app, "/api/v1/admin/services", &token, form).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    let data = &json["data"];
    assert_eq!(data["slug"], "respite-care");
    assert_eq!(data["status"], "active", "status defaults to active");
    assert_eq!(data["view_count"], 0);
    assert_eq!(data["booking_count"], 0);
    assert_eq!(data["sort_order"], 1);
    assert_eq!(
        data["cover_image_url"],
        "memory://assets/services/respite-care/main"
    );
    assert_eq!(data["gallery_image_urls"].as_array().unwrap().len(), 2);
    assert_eq!(data["features"][0], "24/7 support");

    // Asset keys are namespaced by kind and slug.
    assert!(store.contains("services/respite-care/main"));
    assert!(store.contains("services/respite-care/gallery-1"));
    assert!(store.contains("services/respite-care/gallery-2"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_requires_name_and_description(pool: PgPool) {
    let app = build_test_app(pool);
    let token = admin_token();

    let form = MultipartForm::new()
        .text("name", "   ")
        .text("description", "<p>x</p>")
        .text("order", "1")
        .file("image", "cover.png", "image/png", b"img");

    let response = post_multipart(&app, "/api/v1/admin/services", &token, form).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["message"]
        .as_str()
        .unwrap()
        .contains("name and description are required"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_requires_cover_image(pool: PgPool) {
    let (app, store) = build_test_app_with_store(pool);
    let token = admin_token();

    let form = MultipartForm::new()
        .text("name", "Respite Care")
        .text("description", "<p>x</p>")
        .text("order", "1");

    let response = post_multipart(&app, "/api/v1/admin/services", &token, form).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert!(json["message"].as_str().unwrap().contains("image is required"));

    // Validation failure must not have uploaded anything.
    assert!(store.keys().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_rejects_malformed_fields(pool: PgPool) {
    let app = build_test_app(pool);
    let token = admin_token();

    // Non-integer order.
    let form = service_form("Respite Care", 1).text("order", "first");
    let response = post_multipart(&app, "/api/v1/admin/services", &token, form).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Malformed features JSON.
    let form = service_form("Respite Care", 1).text("features", "not-json");
    let response = post_multipart(&app, "/api/v1/admin/services", &token, form).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Unknown status.
    let form = service_form("Respite Care", 1).text("status", "archived");
    let response = post_multipart(&app, "/api/v1/admin/services", &token, form).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Uniqueness
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_order_conflicts(pool: PgPool) {
    let app = build_test_app(pool);
    let token = admin_token();

    let response =
        post_multipart(&app, "/api/v1/admin/services", &token, service_form("One", 1)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // Same order, different name: rejected, naming the order value.
    let response =
        post_multipart(&app, "/api/v1/admin/services", &token, service_form("Two", 1)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["message"].as_str().unwrap().contains("order 1"));

    // A different order succeeds.
    let response =
        post_multipart(&app, "/api/v1/admin/services", &token, service_form("Two", 2)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn names_normalizing_to_same_slug_conflict(pool: PgPool) {
    let app = build_test_app(pool);
    let token = admin_token();

    let response = post_multipart(
        &app,
        "/api/v1/admin/services",
        &token,
        service_form("Day Care", 1),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // "Day  Care!" also slugs to "day-care".
    let response = post_multipart(
        &app,
        "/api/v1/admin/services",
        &token,
        service_form("Day  Care!", 2),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["message"].as_str().unwrap().contains("already exists"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn same_slug_allowed_across_kinds(pool: PgPool) {
    let app = build_test_app(pool);
    let token = admin_token();

    let response = post_multipart(
        &app,
        "/api/v1/admin/services",
        &token,
        service_form("Respite Care", 1),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_multipart(
        &app,
        "/api/v1/admin/support-models",
        &token,
        service_form("Respite Care", 1),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn update_resubmitting_own_values_succeeds(pool: PgPool) {
    let app = build_test_app(pool);
    let token = admin_token();

    let response = post_multipart(
        &app,
        "/api/v1/admin/services",
        &token,
        service_form("Respite Care", 1),
    )
    .await;
    let created = body_json(response).await;
    let id = created["data"]["id"].as_i64().unwrap();

    // Same name and order: self-match is not a conflict.
    let form = MultipartForm::new()
        .text("name", "Respite Care")
        .text("description", "<p>Updated description</p>")
        .text("order", "1");
    let response =
        put_multipart(&app, &format!("/api/v1/admin/services/{id}"), &token, form).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["slug"], "respite-care");
    assert_eq!(json["data"]["description"], "<p>Updated description</p>");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_keeps_cover_without_new_file(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let token = admin_token();

    let response = post_multipart(
        &app,
        "/api/v1/admin/services",
        &token,
        service_form("Respite Care", 1),
    )
    .await;
    let created = body_json(response).await;
    let id = created["data"]["id"].as_i64().unwrap();
    let original_cover = created["data"]["cover_image_url"].clone();

    // No image file and no existingImage field.
    let form = MultipartForm::new()
        .text("name", "Respite Care")
        .text("description", "<p>x</p>")
        .text("order", "1");
    let response =
        put_multipart(&app, &format!("/api/v1/admin/services/{id}"), &token, form).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["cover_image_url"], original_cover);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_gallery_omission_drops_url_without_store_delete(pool: PgPool) {
    let (app, store) = build_test_app_with_store(pool);
    let token = admin_token();

    let form = service_form("Respite Care", 1)
        .file("galleryImages", "g1.png", "image/png", b"gallery-1")
        .file("galleryImages", "g2.png", "image/png", b"gallery-2");
    let response = post_multipart(&app, "/api/v1/admin/services", &token, form).await;
    let created = body_json(response).await;
    let id = created["data"]["id"].as_i64().unwrap();
    let gallery = created["data"]["gallery_image_urls"].as_array().unwrap();
    let kept = gallery[0].as_str().unwrap().to_string();

    // Retain only the first gallery URL.
    let form = MultipartForm::new()
        .text("name", "Respite Care")
        .text("description", "<p>x</p>")
        .text("order", "1")
        .text("existingGallery[0]", &kept);
    let response =
        put_multipart(&app, &format!("/api/v1/admin/services/{id}"), &token, form).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let updated_gallery = json["data"]["gallery_image_urls"].as_array().unwrap();
    assert_eq!(updated_gallery.len(), 1);
    assert_eq!(updated_gallery[0], kept.as_str());

    // The dropped object is orphaned, not deleted from the store.
    assert!(store.contains("services/respite-care/gallery-2"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_missing_id_returns_404(pool: PgPool) {
    let app = build_test_app(pool);
    let token = admin_token();

    let form = MultipartForm::new()
        .text("name", "Ghost")
        .text("description", "<p>x</p>")
        .text("order", "1");
    let response = put_multipart(&app, "/api/v1/admin/services/9999", &token, form).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_to_taken_order_conflicts(pool: PgPool) {
    let app = build_test_app(pool);
    let token = admin_token();

    post_multipart(&app, "/api/v1/admin/services", &token, service_form("One", 1)).await;
    let response =
        post_multipart(&app, "/api/v1/admin/services", &token, service_form("Two", 2)).await;
    let second = body_json(response).await;
    let id = second["data"]["id"].as_i64().unwrap();

    // Moving "Two" onto order 1 collides with "One".
    let form = MultipartForm::new()
        .text("name", "Two")
        .text("description", "<p>x</p>")
        .text("order", "1");
    let response =
        put_multipart(&app, &format!("/api/v1/admin/services/{id}"), &token, form).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["message"].as_str().unwrap().contains("order 1"));
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_then_redelete_returns_404(pool: PgPool) {
    let app = build_test_app(pool);
    let token = admin_token();

    let response = post_multipart(
        &app,
        "/api/v1/admin/services",
        &token,
        service_form("Respite Care", 1),
    )
    .await;
    let created = body_json(response).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = delete_auth(&app, &format!("/api/v1/admin/services/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);

    // Second delete: the id no longer resolves.
    let response = delete_auth(&app, &format!("/api/v1/admin/services/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // And neither does a GET.
    let response = get_auth(&app, &format!("/api/v1/admin/services/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_frees_slug_and_order_for_reuse(pool: PgPool) {
    let app = build_test_app(pool);
    let token = admin_token();

    let response = post_multipart(
        &app,
        "/api/v1/admin/services",
        &token,
        service_form("Respite Care", 1),
    )
    .await;
    let created = body_json(response).await;
    let id = created["data"]["id"].as_i64().unwrap();

    delete_auth(&app, &format!("/api/v1/admin/services/{id}"), &token).await;

    // Both unique keys are available again.
    let response = post_multipart(
        &app,
        "/api/v1/admin/services",
        &token,
        service_form("Respite Care", 1),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

// ---------------------------------------------------------------------------
// Listing and pagination
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_list_paginates(pool: PgPool) {
    let app = build_test_app(pool);
    let token = admin_token();

    for (name, order) in [("Alpha", 1), ("Bravo", 2), ("Charlie", 3)] {
        let response = post_multipart(
            &app,
            "/api/v1/admin/services",
            &token,
            service_form(name, order),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get_auth(&app, "/api/v1/admin/services?page=2&limit=2", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["slug"], "charlie");

    let pagination = &json["pagination"];
    assert_eq!(pagination["current_page"], 2);
    assert_eq!(pagination["total_pages"], 2);
    assert_eq!(pagination["total_items"], 3);
    assert_eq!(pagination["has_next_page"], false);
    assert_eq!(pagination["has_prev_page"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_list_rejects_unknown_status_filter(pool: PgPool) {
    let app = build_test_app(pool);
    let token = admin_token();

    let response = get_auth(&app, "/api/v1/admin/services?status=archived", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_list_filters_by_status(pool: PgPool) {
    let app = build_test_app(pool);
    let token = admin_token();

    let form = service_form("Hidden", 1).text("status", "inactive");
    post_multipart(&app, "/api/v1/admin/services", &token, form).await;
    post_multipart(
        &app,
        "/api/v1/admin/services",
        &token,
        service_form("Visible", 2),
    )
    .await;

    let response = get_auth(&app, "/api/v1/admin/services?status=active", &token).await;
    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["slug"], "visible");

    // Unfiltered listing sees both.
    let response = get_auth(&app, "/api/v1/admin/services", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}
