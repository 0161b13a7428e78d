// tests/integration/employees/employee_query_tests.rs

use axum::http::StatusCode;
use serde_json::Value;
use skills_backend::domain::quarter::Quarter;

use crate::common::{
    app_helper,
    request::{get_request, send},
    test_data,
};

#[tokio::test]
async fn test_list_all_employees() {
    let (app, token) = app_helper::setup_app_with_token().await;
    test_data::seed_fixture(&app.db.connection).await;

    let (status, body) = send(&app.router, get_request("/api/employees/all", &token)).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["emp_name"].as_str().unwrap())
        .collect();
    assert_eq!(names.len(), 3);
    assert!(names.contains(&"Alice"));
}

#[tokio::test]
async fn test_search_is_case_insensitive_and_counts_all_matches() {
    let (app, token) = app_helper::setup_app_with_token().await;
    test_data::seed_fixture(&app.db.connection).await;

    // Alice の評価は3件。1件ずつ取得しても総数は3。
    let (status, body) = send(
        &app.router,
        get_request("/api/employees/search?empName=aLi&limit=1&offset=0", &token),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"].as_array().unwrap().len(), 1);
    assert_eq!(body["dataSize"][0]["count"], 3);

    let row = &body["result"][0];
    assert_eq!(row["emp_name"], "Alice");
    assert_eq!(row["dept_name"], "Engineering");
    // スキル名順
    assert_eq!(row["skill_name"], "Design");
    assert_eq!(row["skill_level"], "Advanced");
}

#[tokio::test]
async fn test_search_treats_wildcards_literally() {
    let (app, token) = app_helper::setup_app_with_token().await;
    test_data::seed_fixture(&app.db.connection).await;

    let (status, body) = send(
        &app.router,
        get_request("/api/employees/search?empName=%25", &token),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], Value::Array(vec![]));
    assert_eq!(body["dataSize"][0]["count"], 0);
}

#[tokio::test]
async fn test_recent_evaluations_latest_per_employee() {
    let (app, token) = app_helper::setup_app_with_token().await;
    test_data::seed_fixture(&app.db.connection).await;

    let (status, body) = send(&app.router, get_request("/api/employees/recent", &token)).await;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    // 3名それぞれの最新評価を評価ID降順で
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["emp_name"], "Carol");
    assert_eq!(rows[0]["skill_name"], "Design");
    assert_eq!(rows[1]["emp_name"], "Alice");
    assert_eq!(rows[1]["score"], 16.0);
    assert_eq!(rows[2]["emp_name"], "Bob");
}

#[tokio::test]
async fn test_main_summary_normalizes_scores() {
    let (app, token) = app_helper::setup_app_with_token().await;
    test_data::seed_fixture(&app.db.connection).await;

    let (status, body) = send(&app.router, get_request("/api/employees/main", &token)).await;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 3);

    // Alice: SQL 5/10, 7/10, Design 16/20 → 正規化 5, 7, 8
    let alice = &rows[0];
    assert_eq!(alice["emp_name"], "Alice");
    assert_eq!(alice["skills"], serde_json::json!(["Design", "SQL"]));
    assert_eq!(alice["average_score"], 6.67);
    assert_eq!(alice["high_score"], 8.0);
}

#[tokio::test]
async fn test_main_summary_empty_is_not_found() {
    let (app, token) = app_helper::setup_app_with_token().await;

    let (status, body) = send(&app.router, get_request("/api/employees/main", &token)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No results found");
}

#[tokio::test]
async fn test_scores_by_skill_with_and_without_year() {
    let (app, token) = app_helper::setup_app_with_token().await;
    let fixture = test_data::seed_fixture(&app.db.connection).await;
    test_data::seed_evaluation(
        &app.db.connection,
        &fixture.bob,
        &fixture.sql,
        4.0,
        Quarter::Q1,
        2024,
    )
    .await;

    let uri = format!("/api/employees/by-skill?skillId={}&year=all", fixture.sql.skill_id);
    let (status, body) = send(&app.router, get_request(&uri, &token)).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 5);
    // 従業員名・年・四半期順
    assert_eq!(rows[0]["emp_name"], "Alice");
    assert_eq!(rows[0]["quarter"], "Q1");
    assert_eq!(rows[1]["quarter"], "Q3");
    assert_eq!(rows[2]["emp_name"], "Bob");
    assert_eq!(rows[2]["year"], 2023);
    assert_eq!(rows[3]["year"], 2024);

    let uri = format!("/api/employees/by-skill?skillId={}&year=2024", fixture.sql.skill_id);
    let (status, body) = send(&app.router, get_request(&uri, &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_scores_by_skill_requires_skill_id() {
    let (app, token) = app_helper::setup_app_with_token().await;

    let (status, _) = send(&app.router, get_request("/api/employees/by-skill", &token)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
