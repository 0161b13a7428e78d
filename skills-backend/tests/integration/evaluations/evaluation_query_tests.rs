// tests/integration/evaluations/evaluation_query_tests.rs

use axum::http::StatusCode;
use serde_json::json;

use crate::common::{
    app_helper,
    request::{get_request, send},
    test_data,
};

#[tokio::test]
async fn test_details_pages_with_total_count() {
    let (app, token) = app_helper::setup_app_with_token().await;
    test_data::seed_fixture(&app.db.connection).await;

    let (status, body) = send(
        &app.router,
        get_request("/api/evaluations/details?limit=2&offset=2", &token),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["dataSize"], json!([{ "count": 6 }]));
    let rows = body["result"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    // 年昇順・評価ID昇順の3件目と4件目
    assert_eq!(rows[0]["emp_name"], "Bob");
    assert_eq!(rows[0]["year"], 2023);
    assert_eq!(rows[1]["emp_name"], "Carol");
    assert_eq!(rows[1]["dept_name"], "Sales");
    assert_eq!(rows[1]["skill_name"], "SQL");
    assert_eq!(rows[1]["skill_level"], "Expert");
    assert_eq!(rows[1]["max_score"], 10.0);
}

#[tokio::test]
async fn test_details_sorted_by_score_descending() {
    let (app, token) = app_helper::setup_app_with_token().await;
    test_data::seed_fixture(&app.db.connection).await;

    let (status, body) = send(
        &app.router,
        get_request("/api/evaluations/details?sortBy=score&order=desc", &token),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let scores: Vec<f64> = body["result"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["score"].as_f64().unwrap())
        .collect();
    assert_eq!(scores, vec![16.0, 10.0, 9.0, 7.0, 5.0, 2.0]);
}

#[tokio::test]
async fn test_details_past_the_end_is_not_found() {
    let (app, token) = app_helper::setup_app_with_token().await;
    test_data::seed_fixture(&app.db.connection).await;

    let (status, body) = send(
        &app.router,
        get_request("/api/evaluations/details?offset=100", &token),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No results available");
}

#[tokio::test]
async fn test_search_without_filters_matches_full_listing() {
    let (app, token) = app_helper::setup_app_with_token().await;
    test_data::seed_fixture(&app.db.connection).await;

    let (status, search) = send(&app.router, get_request("/api/evaluations/search", &token)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, details) = send(
        &app.router,
        get_request("/api/evaluations/details?limit=1000", &token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(search, details["result"]);
}

#[tokio::test]
async fn test_search_by_department_is_case_insensitive() {
    let (app, token) = app_helper::setup_app_with_token().await;
    test_data::seed_fixture(&app.db.connection).await;

    let (status, body) = send(
        &app.router,
        get_request("/api/evaluations/search?department=engineering", &token),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|r| r["dept_name"] == "Engineering"));
}

#[tokio::test]
async fn test_search_combines_filters() {
    let (app, token) = app_helper::setup_app_with_token().await;
    let fixture = test_data::seed_fixture(&app.db.connection).await;

    let uri = format!(
        "/api/evaluations/search?empId={}&skill=sql&yearFrom=2023&yearTo=2023",
        fixture.alice.emp_id
    );
    let (status, body) = send(&app.router, get_request(&uri, &token)).await;

    assert_eq!(status, StatusCode::OK);
    let scores: Vec<f64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["score"].as_f64().unwrap())
        .collect();
    assert_eq!(scores, vec![5.0, 7.0]);

    // 下限のみ
    let (status, body) = send(
        &app.router,
        get_request("/api/evaluations/search?yearFrom=2024", &token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_search_without_matches_is_not_found() {
    let (app, token) = app_helper::setup_app_with_token().await;
    test_data::seed_fixture(&app.db.connection).await;

    let (status, body) = send(
        &app.router,
        get_request("/api/evaluations/search?year=1999", &token),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No results found");
}

#[tokio::test]
async fn test_years_are_distinct_and_ascending() {
    let (app, token) = app_helper::setup_app_with_token().await;
    test_data::seed_fixture(&app.db.connection).await;

    let (status, body) = send(&app.router, get_request("/api/evaluations/years", &token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([2023, 2024]));
}
