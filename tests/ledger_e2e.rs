//! End-to-end tests for the ledger, finance reports and dashboard

mod common;

use axum::http::{Method, StatusCode};
use rust_decimal::Decimal;
use serde_json::json;

use common::{amount, id_of, TestApp};

fn dec(value: &str) -> Decimal {
    value.parse().unwrap()
}

#[tokio::test]
async fn test_manual_entries_and_summary() {
    let app = TestApp::new().await;

    let expense = app
        .create(
            "/api/transactions",
            json!({
                "type": "EXPENSE",
                "source": "MANUAL_EXPENSE",
                "amount": "350.50",
                "motif": "Fournitures",
                "transactionDate": "2030-03-02",
            }),
        )
        .await;
    assert_eq!(expense["typeLabel"], "Dépense");
    assert_eq!(expense["sourceLabel"], "Dépense manuelle");
    assert!(!expense["createdBy"].is_null());

    app.create(
        "/api/transactions",
        json!({
            "type": "INCOME",
            "source": "OTHER_INCOME",
            "amount": "1000",
            "transactionDate": "2030-04-15",
        }),
    )
    .await;

    let (_, body) = app.admin(Method::GET, "/api/transactions/summary", None).await;
    let summary = &body["data"];
    assert_eq!(amount(&summary["totalIncome"]), dec("1000"));
    assert_eq!(amount(&summary["totalExpense"]), dec("350.50"));
    assert_eq!(amount(&summary["balance"]), dec("649.50"));
    assert_eq!(summary["transactionsCount"], 2);

    let (_, body) = app
        .admin(Method::GET, "/api/transactions/summary?from=2030-04-01&to=2030-04-30", None)
        .await;
    assert_eq!(body["data"]["transactionsCount"], 1);
    assert_eq!(amount(&body["data"]["totalExpense"]), Decimal::ZERO);

    let (_, body) = app.admin(Method::GET, "/api/transactions?type=D%C3%A9pense", None).await;
    let entries = body["data"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["id"], expense["id"]);

    let (status, _) = app
        .admin(Method::GET, "/api/transactions?from=2030-05-01&to=2030-04-01", None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_installment_source_is_reserved() {
    let app = TestApp::new().await;

    let (status, body) = app
        .admin(
            Method::POST,
            "/api/transactions",
            Some(json!({ "type": "INCOME", "source": "PAYMENT_INSTALLMENT", "amount": "100" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_non_positive_amount_is_rejected() {
    let app = TestApp::new().await;

    let (status, _) = app
        .admin(
            Method::POST,
            "/api/transactions",
            Some(json!({ "type": "EXPENSE", "source": "MANUAL_EXPENSE", "amount": "-5" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);

    // rounds to 0.00
    let (status, body) = app
        .admin(
            Method::POST,
            "/api/transactions",
            Some(json!({ "type": "INCOME", "source": "OTHER_INCOME", "amount": "0.004" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_get_and_delete_transaction() {
    let app = TestApp::new().await;
    let entry = app
        .create(
            "/api/transactions",
            json!({ "type": "INCOME", "source": "OTHER_INCOME", "amount": "80" }),
        )
        .await;
    let id = id_of(&entry);

    let (status, body) = app.admin(Method::GET, &format!("/api/transactions/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(amount(&body["data"]["amount"]), dec("80"));

    let (status, _) = app.admin(Method::DELETE, &format!("/api/transactions/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.admin(Method::DELETE, &format!("/api/transactions/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_monthly_tracking_and_finance_stats() {
    let app = TestApp::new().await;
    let student = app.create_student("Yasmine", "Haddad").await;
    let course = app.create_course("Bureautique", "3000", "0").await;
    let other = app.create_course("Anglais B1", "18000", "0").await;
    let plan = app.create_plan("3 mensualités", 3, 30).await;

    let created = app
        .create(
            "/api/enrollments",
            json!({
                "studentId": id_of(&student),
                "courseId": id_of(&course),
                "paymentPlanId": id_of(&plan),
                "startDate": "2030-01-10",
            }),
        )
        .await;
    let first = id_of(&created["installments"][0]);
    app.admin(
        Method::POST,
        &format!("/api/payment-schedules/{first}/pay"),
        Some(json!({ "amount": "1000", "paymentMethod": "CARD" })),
    )
    .await;

    let (status, body) = app
        .admin(Method::GET, "/api/finance/monthly-tracking?year=2030", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    let tracking = &body["data"];
    assert_eq!(tracking["students"].as_array().unwrap().len(), 1);
    assert_eq!(tracking["students"][0]["studentName"], "Yasmine Haddad");
    assert_eq!(amount(&tracking["totalExpected"]), dec("3000"));
    assert_eq!(amount(&tracking["totalPaid"]), dec("1000"));
    assert_eq!(tracking["collectionRate"], 33);

    let (_, body) = app
        .admin(
            Method::GET,
            &format!("/api/finance/monthly-tracking?year=2030&course_id={}", id_of(&other)),
            None,
        )
        .await;
    assert!(body["data"]["students"].as_array().unwrap().is_empty());

    let (status, body) = app.admin(Method::GET, "/api/finance/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(amount(&body["data"]["schedule"]["totalAmount"]), dec("3000"));
    assert_eq!(amount(&body["data"]["ledger"]["totalIncome"]), dec("1000"));
    assert_eq!(body["data"]["overdueCount"], 0);
}

#[tokio::test]
async fn test_dashboard_stats_and_alerts() {
    let app = TestApp::new().await;
    let student = app.create_student("Omar", "Mansouri").await;
    let course = app.create_course("Bureautique", "3000", "0").await;
    let plan = app.create_plan("3 mensualités", 3, 30).await;
    let start = chrono::Utc::now().date_naive() - chrono::Days::new(40);

    app.create(
        "/api/enrollments",
        json!({
            "studentId": id_of(&student),
            "courseId": id_of(&course),
            "paymentPlanId": id_of(&plan),
            "startDate": start,
        }),
    )
    .await;
    app.create(
        "/api/registrations",
        json!({ "firstName": "Lina", "lastName": "Bouzid", "courseId": id_of(&course) }),
    )
    .await;

    let (status, body) = app.admin(Method::GET, "/api/dashboard/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    let stats = &body["data"];
    assert_eq!(stats["totalStudents"], 1);
    assert_eq!(stats["activeCourses"], 1);
    assert_eq!(stats["activeEnrollments"], 1);
    assert_eq!(stats["pendingRegistrations"], 1);
    assert_eq!(amount(&stats["totalExpected"]), dec("3000"));
    assert_eq!(amount(&stats["totalRevenue"]), Decimal::ZERO);
    assert_eq!(stats["overdueCount"], 2);
    assert_eq!(amount(&stats["overdueAmount"]), dec("2000"));

    // Two late installments plus the one due in 20 days
    let (_, body) = app
        .admin(Method::GET, "/api/dashboard/payment-alerts?days=30", None)
        .await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);

    let (_, body) = app
        .admin(Method::GET, "/api/dashboard/payment-alerts?days=7", None)
        .await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let (status, _) = app
        .admin(Method::GET, "/api/dashboard/payment-alerts?days=-1", None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
