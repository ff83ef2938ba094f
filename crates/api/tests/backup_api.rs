//! HTTP-level tests for backup download and restore.

mod common;

use axum::http::StatusCode;
use common::{add_record, body_json, get, post_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn backup_is_the_record_array_as_attachment(pool: PgPool) {
    let created = add_record(
        &pool,
        json!({"feeType": "yearly", "studentNo": "S1", "studentName": "A", "payment": "10"}),
    )
    .await;

    let response = get(common::build_test_app(pool), "/api/backup?feeType=yearly").await;
    assert_eq!(response.status(), StatusCode::OK);

    let disposition = response
        .headers()
        .get("content-disposition")
        .expect("Missing Content-Disposition header")
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"yearly_fees_backup_"));
    assert!(disposition.ends_with(".json\""));

    assert_eq!(body_json(response).await, json!([created]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn restore_replaces_fee_type_with_fresh_ids(pool: PgPool) {
    let old = add_record(
        &pool,
        json!({"feeType": "yearly", "studentNo": "OLD", "studentName": "Old", "payment": "1"}),
    )
    .await;
    add_record(
        &pool,
        json!({"feeType": "monthly", "studentNo": "M1", "studentName": "Kept", "payment": "2"}),
    )
    .await;

    let backup = json!([
        {"id": old["id"], "feeType": "monthly", "studentNo": "S1", "studentName": "Alice",
         "payment": "10.00", "timestamp": "2024-06-01T00:00:00Z"},
        {"studentNo": "S2", "name": "Bob", "payment": 20}
    ]);
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/restoreStudents?feeType=yearly",
        backup,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"message": "Restored successfully", "restored": 2})
    );

    let response = get(
        common::build_test_app(pool.clone()),
        "/api/getStudents?feeType=yearly",
    )
    .await;
    let rows = body_json(response).await;
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r["id"] != old["id"]));
    assert!(rows.iter().all(|r| r["feeType"] == "yearly"));
    assert_eq!(rows[0]["studentNo"], "S1");
    assert_eq!(rows[0]["timestamp"], "2024-06-01T00:00:00Z");
    assert_eq!(rows[1]["studentName"], "Bob");
    assert_eq!(rows[1]["payment"], "20.00");

    let response = get(
        common::build_test_app(pool),
        "/api/getStudents?feeType=monthly",
    )
    .await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn restore_accepts_entries_carrying_both_name_keys(pool: PgPool) {
    let backup = json!([
        {"studentNo": "S1", "studentName": "Alice", "name": "Alice", "payment": "1"},
        {"studentNo": "S2", "studentName": null, "name": "Bob", "payment": "2"}
    ]);
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/restoreStudents?feeType=monthly",
        backup,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(
        common::build_test_app(pool),
        "/api/getStudents?feeType=monthly",
    )
    .await;
    let rows = body_json(response).await;
    assert_eq!(rows[0]["studentName"], "Alice");
    assert_eq!(rows[1]["studentName"], "Bob");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_backup_entry_deletes_nothing(pool: PgPool) {
    add_record(
        &pool,
        json!({"feeType": "yearly", "studentNo": "S1", "studentName": "A", "payment": "1"}),
    )
    .await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/restoreStudents?feeType=yearly",
        json!([{"studentNo": "S2", "studentName": "B"}]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("backup entry 0"));

    let response = get(
        common::build_test_app(pool),
        "/api/getStudents?feeType=yearly",
    )
    .await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn restore_rejects_non_array_body(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/restoreStudents?feeType=yearly",
        json!({"not": "an array"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
