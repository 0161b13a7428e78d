// tests/integration/skills/skill_tests.rs

use axum::http::StatusCode;
use serde_json::json;
use skills_backend::domain::skill_model;
use sea_orm::EntityTrait;

use crate::common::{
    app_helper,
    request::{create_request, get_request, send},
    test_data,
};

#[tokio::test]
async fn test_list_skills_empty_is_no_content() {
    let (app, token) = app_helper::setup_app_with_token().await;

    let (status, body) = send(&app.router, get_request("/api/skills/all", &token)).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());
}

#[tokio::test]
async fn test_list_skills_with_category_and_employee_count() {
    let (app, token) = app_helper::setup_app_with_token().await;
    test_data::seed_fixture(&app.db.connection).await;

    let (status, body) = send(&app.router, get_request("/api/skills/all", &token)).await;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["skill_name"], "Design");
    assert_eq!(rows[0]["skill_category"], "Uncategorized");
    assert_eq!(rows[0]["employee_count"], 2);
    assert_eq!(rows[1]["skill_name"], "SQL");
    assert_eq!(rows[1]["employee_count"], 3);
}

#[tokio::test]
async fn test_add_skill_is_idempotent_by_name() {
    let (app, token) = app_helper::setup_app_with_token().await;

    for _ in 0..2 {
        let (status, body) = send(
            &app.router,
            create_request(
                "POST",
                "/api/skills/add",
                &token,
                &json!({ "skillName": "Rust" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Skill added successfully");
    }

    let skills = skill_model::Entity::find()
        .all(&app.db.connection)
        .await
        .unwrap();
    assert_eq!(skills.len(), 1);
    assert_eq!(skills[0].skill_name, "Rust");
    assert_eq!(skills[0].max_score, 10.0);
}

#[tokio::test]
async fn test_add_skill_with_category() {
    let (app, token) = app_helper::setup_app_with_token().await;

    let (status, category) = send(
        &app.router,
        create_request(
            "POST",
            "/api/skills/categories/add",
            &token,
            &json!({ "category_name": "Backend" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(
        &app.router,
        create_request(
            "POST",
            "/api/skills/add",
            &token,
            &json!({
                "skillName": "Rust",
                "category_id": category["category_id"],
                "max_score": 5.0
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app.router, get_request("/api/skills/all", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["skill_category"], "Backend");
    assert_eq!(body[0]["employee_count"], 0);
}

#[tokio::test]
async fn test_add_skill_unknown_category_is_not_found() {
    let (app, token) = app_helper::setup_app_with_token().await;

    let (status, _) = send(
        &app.router,
        create_request(
            "POST",
            "/api/skills/add",
            &token,
            &json!({ "skillName": "Rust", "category_id": 404 }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_add_skill_rejects_non_positive_max_score() {
    let (app, token) = app_helper::setup_app_with_token().await;

    let (status, _) = send(
        &app.router,
        create_request(
            "POST",
            "/api/skills/add",
            &token,
            &json!({ "skillName": "Rust", "max_score": 0 }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_remove_skill_cascades_evaluations() {
    let (app, token) = app_helper::setup_app_with_token().await;
    let fixture = test_data::seed_fixture(&app.db.connection).await;

    let uri = format!("/api/skills/remove/{}", fixture.sql.skill_id);
    let (status, body) = send(&app.router, create_request("DELETE", &uri, &token, &json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Skill deleted successfully");
    assert!(test_data::find_evaluations_for_skill(&app.db.connection, fixture.sql.skill_id)
        .await
        .is_empty());
}

#[tokio::test]
async fn test_remove_skill_invalid_and_missing_ids() {
    let (app, token) = app_helper::setup_app_with_token().await;

    let (status, body) = send(
        &app.router,
        create_request("DELETE", "/api/skills/remove/abc", &token, &json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid skill ID");

    let (status, body) = send(
        &app.router,
        create_request("DELETE", "/api/skills/remove/9999", &token, &json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Skill not found");
}

#[tokio::test]
async fn test_skill_average_uses_normalized_scores() {
    let (app, token) = app_helper::setup_app_with_token().await;
    test_data::seed_fixture(&app.db.connection).await;

    let (status, body) = send(&app.router, get_request("/api/skills/average", &token)).await;

    // 正規化後: 5, 7, 2, 9, 8, 5
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["average_score"], 6.0);
    assert_eq!(rows[0]["high_score"], 9.0);
}

#[tokio::test]
async fn test_skill_average_without_evaluations_is_null() {
    let (app, token) = app_helper::setup_app_with_token().await;

    let (status, body) = send(&app.router, get_request("/api/skills/average", &token)).await;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert!(rows[0]["average_score"].is_null());
    assert!(rows[0]["high_score"].is_null());
}

#[tokio::test]
async fn test_employee_skills() {
    let (app, token) = app_helper::setup_app_with_token().await;
    let fixture = test_data::seed_fixture(&app.db.connection).await;

    let uri = format!("/api/skills/employee-skills?empId={}", fixture.alice.emp_id);
    let (status, body) = send(&app.router, get_request(&uri, &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "skill_id": fixture.design.skill_id, "skill_name": "Design" },
            { "skill_id": fixture.sql.skill_id, "skill_name": "SQL" }
        ])
    );

    let (status, body) = send(
        &app.router,
        get_request("/api/skills/employee-skills", &token),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "empId is required");

    let (status, _) = send(
        &app.router,
        get_request("/api/skills/employee-skills?empId=9999", &token),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_categories_listed_by_name_and_unique() {
    let (app, token) = app_helper::setup_app_with_token().await;

    for name in ["Frontend", "Backend"] {
        let (status, _) = send(
            &app.router,
            create_request(
                "POST",
                "/api/skills/categories/add",
                &token,
                &json!({ "category_name": name }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(
        &app.router,
        create_request(
            "POST",
            "/api/skills/categories/add",
            &token,
            &json!({ "category_name": "Backend" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Category already exists");

    let (status, body) = send(&app.router, get_request("/api/skills/categories", &token)).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["category_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Backend", "Frontend"]);
}
