//! HTTP-level tests for the statistics and per-student total endpoints.

mod common;

use axum::http::StatusCode;
use chrono::{Datelike, Utc};
use common::{add_record, body_json, get};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn stats_on_empty_ledger_are_zero(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/stats").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["totalStudents"], 0);
    assert_eq!(json["monthlyCollection"], "0");
    assert_eq!(json["yearlyCollection"], "0");
    assert_eq!(json["growthRate"], "0");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn stats_count_distinct_students_and_sum_per_type(pool: PgPool) {
    let now = Utc::now();
    for (fee_type, no, payment) in [
        ("monthly", "S1", "10.00"),
        ("monthly", "S1", "15.50"),
        ("monthly", "S2", "4.50"),
        ("yearly", "S2", "100.00"),
        ("yearly", "S3", "200.00"),
    ] {
        add_record(
            &pool,
            json!({
                "feeType": fee_type,
                "studentNo": no,
                "studentName": format!("Student {no}"),
                "payment": payment,
                "timestamp": now,
            }),
        )
        .await;
    }

    let response = get(common::build_test_app(pool), "/api/stats").await;
    let json = body_json(response).await;
    assert_eq!(json["totalStudents"], 3);
    assert_eq!(json["monthlyCollection"], "30.00");
    assert_eq!(json["yearlyCollection"], "300.00");
    // Nothing in the previous month: growth falls back to zero.
    assert_eq!(json["growthRate"], "0");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn stats_growth_compares_with_previous_calendar_month(pool: PgPool) {
    let now = Utc::now();
    // Mid-month of the previous calendar month.
    let (year, month) = if now.month() == 1 {
        (now.year() - 1, 12)
    } else {
        (now.year(), now.month() - 1)
    };
    let previous = format!("{year:04}-{month:02}-15T12:00:00Z");

    add_record(
        &pool,
        json!({"feeType": "monthly", "studentNo": "S1", "studentName": "A",
               "payment": "100.00", "timestamp": previous}),
    )
    .await;
    add_record(
        &pool,
        json!({"feeType": "monthly", "studentNo": "S1", "studentName": "A",
               "payment": "150.00", "timestamp": now}),
    )
    .await;

    let response = get(common::build_test_app(pool), "/api/stats").await;
    let json = body_json(response).await;
    assert_eq!(json["growthRate"], "50.0");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn student_totals_sum_each_students_rows(pool: PgPool) {
    for (no, name, payment) in [
        ("S1", "Alice", "10.00"),
        ("S2", "Bob", "3.00"),
        ("S1", "Alice", "2.50"),
    ] {
        add_record(
            &pool,
            json!({"feeType": "yearly", "studentNo": no, "studentName": name, "payment": payment}),
        )
        .await;
    }
    add_record(
        &pool,
        json!({"feeType": "monthly", "studentNo": "S1", "studentName": "Alice", "payment": "99"}),
    )
    .await;

    let response = get(
        common::build_test_app(pool),
        "/api/studentTotals?feeType=yearly",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!([
            {"studentNo": "S1", "studentName": "Alice", "totalPayment": "12.50"},
            {"studentNo": "S2", "studentName": "Bob", "totalPayment": "3.00"}
        ])
    );
}
