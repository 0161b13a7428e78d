// tests/integration/skills/rescale_tests.rs

use axum::http::StatusCode;
use sea_orm::EntityTrait;
use serde_json::json;
use skills_backend::domain::{skill_level::SkillLevel, skill_model};

use crate::common::{
    app_helper,
    request::{create_request, send},
    test_data,
};

#[tokio::test]
async fn test_rescale_keeps_normalized_scores() {
    let (app, token) = app_helper::setup_app_with_token().await;
    let fixture = test_data::seed_fixture(&app.db.connection).await;
    let before = test_data::find_evaluations_for_skill(&app.db.connection, fixture.sql.skill_id).await;

    let uri = format!("/api/skills/edit/{}", fixture.sql.skill_id);
    let (status, body) = send(
        &app.router,
        create_request("PUT", &uri, &token, &json!({ "max_score": 20 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Skill level updated successfully");
    assert_eq!(body["updated"], 4);

    let after = test_data::find_evaluations_for_skill(&app.db.connection, fixture.sql.skill_id).await;
    let scores: Vec<f64> = after.iter().map(|e| e.score).collect();
    assert_eq!(scores, vec![10.0, 14.0, 4.0, 18.0]);

    for (old, new) in before.iter().zip(after.iter()) {
        assert_eq!(new.max_score, 20.0);
        assert_eq!(old.normalized_score(), new.normalized_score());
        // 再計算ではレベルを付け直さない
        assert_eq!(old.skill_level, new.skill_level);
    }

    let skill = skill_model::Entity::find_by_id(fixture.sql.skill_id)
        .one(&app.db.connection)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(skill.max_score, 20.0);

    // 他スキルの評価は変わらない
    let design = test_data::find_evaluations_for_skill(&app.db.connection, fixture.design.skill_id).await;
    assert_eq!(design[0].score, 16.0);
    assert_eq!(design[0].max_score, 20.0);
}

#[tokio::test]
async fn test_rescale_accepts_string_max_score() {
    let (app, token) = app_helper::setup_app_with_token().await;
    let fixture = test_data::seed_fixture(&app.db.connection).await;

    let uri = format!("/api/skills/edit/{}", fixture.sql.skill_id);
    let (status, body) = send(
        &app.router,
        create_request("PUT", &uri, &token, &json!({ "max_score": "20" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updated"], 4);

    let skill = skill_model::Entity::find_by_id(fixture.sql.skill_id)
        .one(&app.db.connection)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(skill.max_score, 20.0);
}

#[tokio::test]
async fn test_new_evaluation_after_rescale_uses_new_max() {
    let (app, token) = app_helper::setup_app_with_token().await;
    let fixture = test_data::seed_fixture(&app.db.connection).await;

    let uri = format!("/api/skills/edit/{}", fixture.sql.skill_id);
    let (status, _) = send(
        &app.router,
        create_request("PUT", &uri, &token, &json!({ "max_score": 20 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // 18/20 → 9 → Expert
    let uri = format!(
        "/api/evaluations/add?empId={}&skillId={}",
        fixture.bob.emp_id, fixture.sql.skill_id
    );
    let (status, body) = send(
        &app.router,
        create_request(
            "POST",
            &uri,
            &token,
            &json!({ "score": 18, "quarter": "Q1", "year": 2025 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let evaluations = test_data::find_evaluations_for_skill(&app.db.connection, fixture.sql.skill_id).await;
    let created = evaluations
        .iter()
        .find(|e| Some(e.eval_id as i64) == body["eval_id"].as_i64())
        .unwrap();
    assert_eq!(created.max_score, 20.0);
    assert_eq!(created.skill_level, Some(SkillLevel::Expert));
}

#[tokio::test]
async fn test_rescale_without_evaluations_is_not_found() {
    let (app, token) = app_helper::setup_app_with_token().await;
    let skill = test_data::seed_skill(&app.db.connection, "Unused", 10.0).await;

    let uri = format!("/api/skills/edit/{}", skill.skill_id);
    let (status, body) = send(
        &app.router,
        create_request("PUT", &uri, &token, &json!({ "max_score": 50 })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No evaluations found for the specified skillId");

    let skill = skill_model::Entity::find_by_id(skill.skill_id)
        .one(&app.db.connection)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(skill.max_score, 10.0);
}

#[tokio::test]
async fn test_rescale_rejects_invalid_max_score() {
    let (app, token) = app_helper::setup_app_with_token().await;
    let fixture = test_data::seed_fixture(&app.db.connection).await;
    let uri = format!("/api/skills/edit/{}", fixture.sql.skill_id);

    for payload in [json!({ "max_score": 0 }), json!({ "max_score": -3 }), json!({})] {
        let (status, _) = send(&app.router, create_request("PUT", &uri, &token, &payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    let scores: Vec<f64> = test_data::find_evaluations_for_skill(&app.db.connection, fixture.sql.skill_id)
        .await
        .iter()
        .map(|e| e.score)
        .collect();
    assert_eq!(scores, vec![5.0, 7.0, 2.0, 9.0]);
}
