//! Shared builders for use case tests.

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::gateways::clock::MockClock;
use crate::domain::models::course::{Course, CourseType, CreateCourseData, PriceModel};
use crate::domain::models::enrollment::{CreateEnrollmentData, Enrollment};
use crate::domain::models::ids::{CourseId, StudentId};
use crate::domain::models::payment_plan::{CreatePaymentPlanData, PaymentPlan};
use crate::domain::models::student::{CreateStudentData, Student};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Clock frozen on 2025-11-10 at noon
pub fn clock() -> MockClock {
    let mut clock = MockClock::new();
    clock
        .expect_now()
        .returning(|| Utc.with_ymd_and_hms(2025, 11, 10, 12, 0, 0).unwrap());
    clock.expect_today().returning(|| date(2025, 11, 10));
    clock
}

pub fn course(course_type: CourseType, price_model: PriceModel, total: Decimal, months: i32) -> Course {
    Course::new(CreateCourseData {
        title: "Anglais B1".to_string(),
        description: None,
        trainer_id: None,
        course_type,
        price_model,
        total_price: total,
        price_per_month: None,
        registration_fee: dec!(1500),
        duration_months: months,
    })
    .unwrap()
}

pub fn student(first_name: &str) -> Student {
    Student::new(CreateStudentData {
        first_name: first_name.to_string(),
        last_name: "Benali".to_string(),
        birth_date: None,
        phone: None,
        email: None,
        address: None,
    })
    .unwrap()
}

pub fn plan(count: i32, interval_days: i32) -> PaymentPlan {
    PaymentPlan::new(CreatePaymentPlanData {
        name: format!("{count} versements"),
        installments_count: count,
        interval_days,
        description: None,
    })
    .unwrap()
}

pub fn enrollment(student_id: StudentId, course_id: CourseId, start: NaiveDate) -> Enrollment {
    Enrollment::new(CreateEnrollmentData {
        student_id,
        course_id,
        session_id: None,
        payment_plan_id: None,
        start_date: start,
        end_date: None,
    })
    .unwrap()
}
