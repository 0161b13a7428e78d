// tests/integration/employees/employee_write_tests.rs

use axum::http::StatusCode;
use serde_json::json;

use crate::common::{
    app_helper,
    request::{create_request, send},
    test_data,
};

#[tokio::test]
async fn test_create_employee() {
    let (app, token) = app_helper::setup_app_with_token().await;
    let department = test_data::seed_department(&app.db.connection, "Research").await;

    let (status, body) = send(
        &app.router,
        create_request(
            "POST",
            "/api/employees/add",
            &token,
            &json!({
                "emp_name": "Dana",
                "dept_id": department.dept_id,
                "date_joined": "2024-05-02"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["emp_name"], "Dana");
    assert_eq!(body["dept_id"], department.dept_id);
    assert_eq!(body["date_joined"], "2024-05-02");
    assert!(body["emp_id"].is_i64());
}

#[tokio::test]
async fn test_create_employee_unknown_department_is_not_found() {
    let (app, token) = app_helper::setup_app_with_token().await;

    let (status, body) = send(
        &app.router,
        create_request(
            "POST",
            "/api/employees/add",
            &token,
            &json!({ "emp_name": "Dana", "dept_id": 999 }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Department not found");
}

#[tokio::test]
async fn test_create_employee_blank_name_is_bad_request() {
    let (app, token) = app_helper::setup_app_with_token().await;
    let department = test_data::seed_department(&app.db.connection, "Research").await;

    let (status, _) = send(
        &app.router,
        create_request(
            "POST",
            "/api/employees/add",
            &token,
            &json!({ "emp_name": "  ", "dept_id": department.dept_id }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
