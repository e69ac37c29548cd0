//! End-to-end tests for the registration workflow

mod common;

use axum::http::{Method, StatusCode};
use rust_decimal::Decimal;
use serde_json::{json, Value};

use common::{amount, id_of, TestApp};

async fn register(app: &TestApp, course: &Value) -> Value {
    app.create(
        "/api/registrations",
        json!({
            "firstName": "Lina",
            "lastName": "Bouzid",
            "phone": "+213 555 12 34 56",
            "courseId": id_of(course),
        }),
    )
    .await
}

#[tokio::test]
async fn test_registration_starts_pending_with_course_fee() {
    let app = TestApp::new().await;
    let course = app.create_course("Anglais B1", "18000", "1500").await;

    let registration = register(&app, &course).await;

    assert_eq!(registration["status"], "PENDING_PAYMENT");
    assert_eq!(registration["statusLabel"], "En attente de paiement");
    assert_eq!(amount(&registration["registrationFee"]), "1500".parse::<Decimal>().unwrap());
    assert_eq!(registration["registrationFeePaid"], false);
}

#[tokio::test]
async fn test_pay_fee_then_validate_creates_student_and_schedule() {
    let app = TestApp::new().await;
    let course = app.create_course("Anglais B1", "18000", "1500").await;
    let plan = app.create_plan("6 mensualités", 6, 30).await;
    let id = id_of(&register(&app, &course).await);

    let (status, body) = app
        .admin(Method::POST, &format!("/api/registrations/{id}/pay-fee"), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["registrationFeePaid"], true);

    let (status, _) = app
        .admin(Method::POST, &format!("/api/registrations/{id}/pay-fee"), None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app
        .admin(
            Method::POST,
            &format!("/api/registrations/{id}/validate"),
            Some(json!({ "paymentPlanId": id_of(&plan) })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    let outcome = &body["data"];
    assert_eq!(outcome["registration"]["status"], "VALIDATED");
    assert_eq!(outcome["registration"]["studentId"], outcome["student"]["id"]);
    assert_eq!(outcome["student"]["fullName"], "Lina Bouzid");
    assert_eq!(outcome["student"]["isRegistrationFeePaid"], true);
    assert_eq!(outcome["enrollment"]["courseId"], course["id"]);
    assert_eq!(outcome["installmentsCount"], 6);

    // Fee was paid up front, so installments only split the course price
    let enrollment_id = outcome["enrollment"]["id"].as_str().unwrap();
    let (_, body) = app
        .admin(
            Method::GET,
            &format!("/api/payment-schedules/enrollment/{enrollment_id}"),
            None,
        )
        .await;
    assert_eq!(
        amount(&body["data"]["summary"]["totalAmount"]),
        "18000".parse::<Decimal>().unwrap()
    );

    let (_, body) = app
        .admin(Method::GET, "/api/transactions?source=REGISTRATION_FEE", None)
        .await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_validate_without_body_or_plan() {
    let app = TestApp::new().await;
    let course = app.create_course("Anglais B1", "18000", "1500").await;
    let id = id_of(&register(&app, &course).await);

    let (status, body) = app
        .admin(Method::POST, &format!("/api/registrations/{id}/validate"), None)
        .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["installmentsCount"], 0);
    assert_eq!(body["data"]["student"]["isRegistrationFeePaid"], false);

    let (status, _) = app
        .admin(Method::POST, &format!("/api/registrations/{id}/validate"), None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_reject_and_status_filter() {
    let app = TestApp::new().await;
    let course = app.create_course("Anglais B1", "18000", "0").await;
    let rejected = id_of(&register(&app, &course).await);
    register(&app, &course).await;

    let (status, body) = app
        .admin(
            Method::POST,
            &format!("/api/registrations/{rejected}/reject"),
            Some(json!({ "notes": "Dossier incomplet" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "REJECTED");
    assert_eq!(body["data"]["notes"], "Dossier incomplet");

    let (_, body) = app
        .admin(Method::GET, "/api/registrations?status=REJECTED", None)
        .await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (_, body) = app
        .admin(Method::GET, "/api/registrations?status=En%20attente%20de%20paiement", None)
        .await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, _) = app
        .admin(Method::POST, &format!("/api/registrations/{rejected}/pay-fee"), None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_validated_registration_cannot_be_deleted() {
    let app = TestApp::new().await;
    let course = app.create_course("Anglais B1", "18000", "0").await;
    let id = id_of(&register(&app, &course).await);

    app.admin(Method::POST, &format!("/api/registrations/{id}/validate"), None)
        .await;

    let (status, _) = app
        .admin(Method::DELETE, &format!("/api/registrations/{id}"), None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_staff_cannot_validate() {
    let app = TestApp::new().await;
    app.create(
        "/api/users",
        json!({
            "firstName": "Sara",
            "lastName": "Amrani",
            "email": "sara@school.test",
            "password": "StaffPass12",
        }),
    )
    .await;
    let token = app.login("sara@school.test", "StaffPass12").await;
    let course = app.create_course("Anglais B1", "18000", "0").await;
    let id = id_of(&register(&app, &course).await);

    let (status, _) = app
        .send(
            Method::POST,
            &format!("/api/registrations/{id}/validate"),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Staff may still collect the fee
    let (status, _) = app
        .send(
            Method::POST,
            &format!("/api/registrations/{id}/pay-fee"),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_registration_for_unknown_course_is_not_found() {
    let app = TestApp::new().await;

    let (status, body) = app
        .admin(
            Method::POST,
            "/api/registrations",
            Some(json!({
                "firstName": "Lina",
                "lastName": "Bouzid",
                "courseId": "00000000-0000-0000-0000-000000000001",
            })),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_failed_fee_booking_leaves_registration_unpaid() {
    let app = TestApp::new().await;
    let course = app.create_course("Anglais B1", "18000", "1500").await;
    let id = id_of(&register(&app, &course).await);
    app.execute_sql(
        "ALTER TABLE transactions ADD CONSTRAINT no_fee_income CHECK (source <> 'REGISTRATION_FEE')",
    )
    .await;

    let (status, _) = app
        .admin(Method::POST, &format!("/api/registrations/{id}/pay-fee"), None)
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (_, body) = app.admin(Method::GET, &format!("/api/registrations/{id}"), None).await;
    assert_eq!(body["data"]["registrationFeePaid"], false);
    assert_eq!(app.count_rows("transactions").await, 0);
}

#[tokio::test]
async fn test_failed_validation_creates_nothing() {
    let app = TestApp::new().await;
    let course = app.create_course("Anglais B1", "18000", "1500").await;
    let plan = app.create_plan("6 mensualités", 6, 30).await;
    let id = id_of(&register(&app, &course).await);
    app.execute_sql("ALTER TABLE payment_schedules ADD CONSTRAINT no_schedules CHECK (installment_number < 0)")
        .await;

    let (status, _) = app
        .admin(
            Method::POST,
            &format!("/api/registrations/{id}/validate"),
            Some(json!({ "paymentPlanId": id_of(&plan) })),
        )
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    assert_eq!(app.count_rows("students").await, 0);
    assert_eq!(app.count_rows("enrollments").await, 0);
    let (_, body) = app.admin(Method::GET, &format!("/api/registrations/{id}"), None).await;
    assert_eq!(body["data"]["status"], "PENDING_PAYMENT");
    assert!(body["data"]["studentId"].is_null());
}

#[tokio::test]
async fn test_concurrent_validations_create_one_student() {
    let app = TestApp::new().await;
    let course = app.create_course("Anglais B1", "18000", "0").await;
    let id = id_of(&register(&app, &course).await);
    let uri = format!("/api/registrations/{id}/validate");

    let (first, second) = tokio::join!(
        app.admin(Method::POST, &uri, None),
        app.admin(Method::POST, &uri, None),
    );

    let statuses = [first.0, second.0];
    assert_eq!(statuses.iter().filter(|s| **s == StatusCode::OK).count(), 1, "{statuses:?}");
    assert!(statuses
        .iter()
        .any(|s| *s == StatusCode::CONFLICT || *s == StatusCode::BAD_REQUEST));
    assert_eq!(app.count_rows("students").await, 1);
    assert_eq!(app.count_rows("enrollments").await, 1);
}
