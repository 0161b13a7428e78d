// tests/integration/analytics/chart_tests.rs

use axum::http::StatusCode;
use serde_json::json;
use skills_backend::domain::quarter::Quarter;

use crate::common::{
    app_helper,
    request::{get_request, send},
    test_data,
};

#[tokio::test]
async fn test_quarter_wise_requires_year() {
    let (app, token) = app_helper::setup_app_with_token().await;

    let (status, body) = send(&app.router, get_request("/api/analytics/quarter-wise", &token)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "year is required");
}

#[tokio::test]
async fn test_quarter_wise_rounds_raw_averages() {
    let (app, token) = app_helper::setup_app_with_token().await;
    let fixture = test_data::seed_fixture(&app.db.connection).await;
    let db = &app.db.connection;
    test_data::seed_evaluation(db, &fixture.bob, &fixture.sql, 1.0, Quarter::Q2, 2024).await;
    test_data::seed_evaluation(db, &fixture.bob, &fixture.sql, 0.0, Quarter::Q2, 2024).await;

    let (status, body) = send(
        &app.router,
        get_request("/api/analytics/quarter-wise?year=2024", &token),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // Q2: (10 + 1 + 0) / 3
    assert_eq!(
        body,
        json!([
            { "average_score": 16.0, "quarter": "Q1", "year": 2024 },
            { "average_score": 3.7, "quarter": "Q2", "year": 2024 },
            { "average_score": 9.0, "quarter": "Q4", "year": 2024 }
        ])
    );
}

#[tokio::test]
async fn test_quarter_wise_year_without_data_is_empty() {
    let (app, token) = app_helper::setup_app_with_token().await;
    test_data::seed_fixture(&app.db.connection).await;

    let (status, body) = send(
        &app.router,
        get_request("/api/analytics/quarter-wise?year=2010", &token),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_department_wise_averages() {
    let (app, token) = app_helper::setup_app_with_token().await;
    test_data::seed_fixture(&app.db.connection).await;

    let (status, body) = send(
        &app.router,
        get_request("/api/analytics/department-wise", &token),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "dept_name": "Engineering", "average_score": 7.5 },
            { "dept_name": "Sales", "average_score": 9.5 }
        ])
    );
}

#[tokio::test]
async fn test_skill_level_distribution() {
    let (app, token) = app_helper::setup_app_with_token().await;
    test_data::seed_fixture(&app.db.connection).await;

    let (status, body) = send(
        &app.router,
        get_request("/api/analytics/skilllevel-wise", &token),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "name": "Beginner", "value": 1 },
            { "name": "Intermediate", "value": 2 },
            { "name": "Advanced", "value": 2 },
            { "name": "Expert", "value": 1 }
        ])
    );
}

#[tokio::test]
async fn test_skill_level_distribution_keeps_empty_levels() {
    let (app, token) = app_helper::setup_app_with_token().await;
    let db = &app.db.connection;
    let department = test_data::seed_department(db, "Engineering").await;
    let employee =
        test_data::seed_employee(db, "Dana", department.dept_id, test_data::date(2022, 2, 1)).await;
    let skill = test_data::seed_skill(db, "SQL", 10.0).await;
    for score in [2.0, 5.0, 7.0, 3.5] {
        test_data::seed_evaluation(db, &employee, &skill, score, Quarter::Q1, 2024).await;
    }

    let (status, body) = send(
        &app.router,
        get_request("/api/analytics/skilllevel-wise", &token),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "name": "Beginner", "value": 1 },
            { "name": "Intermediate", "value": 1 },
            { "name": "Advanced", "value": 1 },
            { "name": "Expert", "value": 0 },
            { "name": "Unclassified", "value": 1 }
        ])
    );
}

#[tokio::test]
async fn test_skill_level_distribution_without_evaluations() {
    let (app, token) = app_helper::setup_app_with_token().await;

    let (status, body) = send(
        &app.router,
        get_request("/api/analytics/skilllevel-wise", &token),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let values: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["value"].as_i64().unwrap())
        .collect();
    assert_eq!(values, vec![0, 0, 0, 0]);
}

#[tokio::test]
async fn test_top_performers_by_raw_score() {
    let (app, token) = app_helper::setup_app_with_token().await;
    test_data::seed_fixture(&app.db.connection).await;

    let (status, body) = send(
        &app.router,
        get_request("/api/analytics/top-performers", &token),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 5);

    let scores: Vec<f64> = rows.iter().map(|r| r["score"].as_f64().unwrap()).collect();
    assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
    assert_eq!(scores, vec![16.0, 10.0, 9.0, 7.0, 5.0]);

    assert_eq!(rows[0]["emp_name"], "Alice");
    assert_eq!(rows[0]["dept_name"], "Engineering");
    assert_eq!(rows[0]["max_score"], 20.0);
}

#[tokio::test]
async fn test_top_performers_collapses_duplicates() {
    let (app, token) = app_helper::setup_app_with_token().await;
    let db = &app.db.connection;
    let department = test_data::seed_department(db, "Engineering").await;
    let employee =
        test_data::seed_employee(db, "Dana", department.dept_id, test_data::date(2022, 2, 1)).await;
    let skill = test_data::seed_skill(db, "SQL", 10.0).await;
    test_data::seed_evaluation(db, &employee, &skill, 8.0, Quarter::Q1, 2024).await;
    test_data::seed_evaluation(db, &employee, &skill, 8.0, Quarter::Q2, 2024).await;

    let (status, body) = send(
        &app.router,
        get_request("/api/analytics/top-performers", &token),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{ "emp_name": "Dana", "dept_name": "Engineering", "score": 8.0, "max_score": 10.0 }])
    );
}

#[tokio::test]
async fn test_top_performers_without_evaluations_is_not_found() {
    let (app, token) = app_helper::setup_app_with_token().await;

    let (status, _) = send(
        &app.router,
        get_request("/api/analytics/top-performers", &token),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
