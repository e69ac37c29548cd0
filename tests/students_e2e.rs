//! End-to-end tests for students, trainers and courses

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{amount, id_of, TestApp};

#[tokio::test]
async fn test_student_crud() {
    let app = TestApp::new().await;

    let student = app.create_student("Yasmine", "Haddad").await;
    let id = id_of(&student);
    assert_eq!(student["fullName"], "Yasmine Haddad");
    assert_eq!(student["isRegistrationFeePaid"], false);

    let (status, body) = app.admin(Method::GET, &format!("/api/students/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["email"], "yasmine.haddad@mail.test");

    let (status, body) = app
        .admin(
            Method::PUT,
            &format!("/api/students/{id}"),
            Some(json!({ "address": "12 rue des Oliviers" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Student updated");
    assert_eq!(body["data"]["address"], "12 rue des Oliviers");
    assert_eq!(body["data"]["firstName"], "Yasmine");

    let (status, body) = app.admin(Method::DELETE, &format!("/api/students/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, body) = app.admin(Method::GET, &format!("/api/students/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_student_search_matches_name() {
    let app = TestApp::new().await;
    app.create_student("Yasmine", "Haddad").await;
    app.create_student("Omar", "Mansouri").await;

    let (status, body) = app.admin(Method::GET, "/api/students?search=mans", None).await;

    assert_eq!(status, StatusCode::OK);
    let students = body["data"].as_array().unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0]["lastName"], "Mansouri");
}

#[tokio::test]
async fn test_invalid_student_body_lists_field_errors() {
    let app = TestApp::new().await;

    let (status, body) = app
        .admin(
            Method::POST,
            "/api/students",
            Some(json!({ "firstName": "", "lastName": "Haddad", "phone": "call me" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    let fields: Vec<&str> = body["error"]["details"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|d| d["field"].as_str())
        .collect();
    assert!(fields.contains(&"first_name"));
    assert!(fields.contains(&"phone"));
}

#[tokio::test]
async fn test_malformed_id_is_bad_request() {
    let app = TestApp::new().await;

    let (status, body) = app.admin(Method::GET, "/api/students/not-a-uuid", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_UUID");
}

#[tokio::test]
async fn test_course_with_trainer_and_active_filter() {
    let app = TestApp::new().await;

    let trainer = app
        .create(
            "/api/trainers",
            json!({ "firstName": "Nadia", "lastName": "Ferhat", "specialty": "Mathématiques" }),
        )
        .await;

    let course = app
        .create(
            "/api/courses",
            json!({
                "title": "Soutien maths 3AS",
                "courseType": "TUTORING_GROUP",
                "priceModel": "MONTHLY",
                "totalPrice": "4000",
                "durationMonths": 10,
                "trainerId": id_of(&trainer),
            }),
        )
        .await;
    assert_eq!(course["trainerId"], trainer["id"]);
    assert_eq!(amount(&course["contractValue"]), "40000".parse().unwrap());
    assert_eq!(course["courseTypeLabel"], "Soutien scolaire (groupe)");

    let other = app.create_course("Bureautique", "12000", "0").await;
    let (status, _) = app
        .admin(
            Method::PUT,
            &format!("/api/courses/{}", id_of(&other)),
            Some(json!({ "isActive": false })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, all) = app.admin(Method::GET, "/api/courses", None).await;
    assert_eq!(all["data"].as_array().unwrap().len(), 2);

    let (_, active) = app.admin(Method::GET, "/api/courses?active_only=true", None).await;
    let active = active["data"].as_array().unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0]["id"], course["id"]);
}

#[tokio::test]
async fn test_deleting_trainer_detaches_courses() {
    let app = TestApp::new().await;

    let trainer = app
        .create("/api/trainers", json!({ "firstName": "Nadia", "lastName": "Ferhat" }))
        .await;
    let course = app
        .create(
            "/api/courses",
            json!({
                "title": "Anglais B1",
                "courseType": "QUALIFYING",
                "totalPrice": "18000",
                "durationMonths": 6,
                "trainerId": id_of(&trainer),
            }),
        )
        .await;

    let (status, _) = app
        .admin(Method::DELETE, &format!("/api/trainers/{}", id_of(&trainer)), None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = app
        .admin(Method::GET, &format!("/api/courses/{}", id_of(&course)), None)
        .await;
    assert!(body["data"]["trainerId"].is_null());
}

#[tokio::test]
async fn test_session_seats_and_course_filter() {
    let app = TestApp::new().await;
    let course = app.create_course("Anglais B1", "18000", "0").await;
    let other = app.create_course("Bureautique", "12000", "0").await;

    let session = app
        .create(
            "/api/sessions",
            json!({
                "courseId": id_of(&course),
                "startDate": "2030-09-01",
                "endDate": "2031-02-28",
                "capacity": 12,
                "location": "Salle A",
            }),
        )
        .await;
    assert_eq!(session["year"], 2030);
    assert_eq!(session["month"], 9);
    assert_eq!(session["enrolledCount"], 0);
    assert_eq!(session["availableSeats"], 12);

    app.create(
        "/api/sessions",
        json!({
            "courseId": id_of(&other),
            "startDate": "2030-10-01",
            "endDate": "2030-12-31",
            "capacity": 8,
            "location": "Salle B",
        }),
    )
    .await;

    let (_, body) = app
        .admin(Method::GET, &format!("/api/sessions?course_id={}", id_of(&course)), None)
        .await;
    let sessions = body["data"].as_array().unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0]["location"], "Salle A");
}

#[tokio::test]
async fn test_session_ending_before_start_is_rejected() {
    let app = TestApp::new().await;
    let course = app.create_course("Anglais B1", "18000", "0").await;

    let (status, body) = app
        .admin(
            Method::POST,
            "/api/sessions",
            Some(json!({
                "courseId": id_of(&course),
                "startDate": "2030-09-01",
                "endDate": "2030-08-01",
                "capacity": 12,
                "location": "Salle A",
            })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}
