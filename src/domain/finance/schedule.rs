//! Installment schedule generation.
//!
//! Two generators exist. [`plan_schedule`] spreads a course contract over a
//! [`PaymentPlan`] at a fixed day interval. [`course_schedule`] follows the
//! calendar pattern of the course type: ten school-year months for tutoring,
//! one installment per month for long qualifying courses and two halves for
//! short ones.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use super::calendar::{
    academic_year_start, add_days, day_of_month, month_label, months_between_inclusive,
    shift_month, ACADEMIC_YEAR_START_MONTH, MONTHLY_DUE_DAY,
};
use crate::domain::models::course::{Course, PriceModel};
use crate::domain::models::payment_plan::PaymentPlan;
use crate::domain::models::rules::round_money;
use crate::shared::errors::DomainError;

/// Installments in a tutoring school year (September to June)
pub const TUTORING_INSTALLMENTS: u32 = 10;

/// Qualifying courses shorter than this are paid in two halves
pub const SHORT_COURSE_MONTHS: u32 = 3;

/// Days between the two halves of a short course
pub const SHORT_COURSE_SECOND_PAYMENT_DAYS: u64 = 30;

/// One line of a generated schedule, not yet attached to an enrollment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledInstallment {
    pub number: i32,
    pub amount: Decimal,
    pub due_date: NaiveDate,
    pub notes: Option<String>,
}

/// Split `total` into `count` cent-rounded parts; the last part absorbs the
/// rounding difference so the parts sum to `total` exactly.
#[must_use]
pub fn split_evenly(total: Decimal, count: u32) -> Vec<Decimal> {
    if count == 0 {
        return Vec::new();
    }
    let share = round_money(total / Decimal::from(count));
    let mut parts = vec![share; count as usize];
    let others = share * Decimal::from(count - 1);
    if let Some(last) = parts.last_mut() {
        *last = total - others;
    }
    parts
}

fn count_from(value: i32, field: &str) -> Result<u32, DomainError> {
    u32::try_from(value)
        .ok()
        .filter(|v| *v > 0)
        .ok_or_else(|| DomainError::Validation(format!("{field} must be at least 1")))
}

fn number(index: u32) -> i32 {
    i32::try_from(index + 1).unwrap_or(i32::MAX)
}

fn ensure_positive(lines: &[ScheduledInstallment]) -> Result<(), DomainError> {
    if lines.iter().any(|l| l.amount <= Decimal::ZERO) {
        return Err(DomainError::Validation(
            "course price is too low to build a schedule".to_string(),
        ));
    }
    Ok(())
}

/// Schedule a course contract over a payment plan
///
/// `registration_fee` is added to the first installment; pass zero when the
/// fee was collected separately.
///
/// # Errors
///
/// Returns `DomainError::Validation` when the course has no price or the
/// plan produces dates out of range.
pub fn plan_schedule(
    course: &Course,
    plan: &PaymentPlan,
    start_date: NaiveDate,
    registration_fee: Decimal,
) -> Result<Vec<ScheduledInstallment>, DomainError> {
    let count = count_from(plan.installments_count(), "installments_count")?;
    let interval = u64::from(count_from(plan.interval_days(), "interval_days")?);

    let mut lines = Vec::with_capacity(count as usize);
    for (index, amount) in (0..count).zip(split_evenly(course.contract_value(), count)) {
        let due_date = add_days(start_date, u64::from(index) * interval)?;
        let mut note = format!(
            "Paiement {}/{} - {}",
            index + 1,
            count,
            month_label(due_date.year(), due_date.month())
        );
        let amount = if index == 0 && registration_fee > Decimal::ZERO {
            note.push_str(" (frais d'inscription inclus)");
            amount + registration_fee
        } else {
            amount
        };
        lines.push(ScheduledInstallment {
            number: number(index),
            amount,
            due_date,
            notes: Some(note),
        });
    }
    ensure_positive(&lines)?;
    Ok(lines)
}

/// Schedule an enrollment from its course type
///
/// The course duration is the inclusive month span from `start_date` to
/// `end_date`, or the course's `duration_months` when there is no end date.
///
/// # Errors
///
/// Returns `DomainError::Validation` when `end_date` precedes `start_date`
/// or the course has no price.
pub fn course_schedule(
    course: &Course,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
) -> Result<Vec<ScheduledInstallment>, DomainError> {
    let lines = if course.course_type().is_tutoring() {
        tutoring_schedule(course, start_date)?
    } else {
        let months = end_date.map_or(course.duration_months(), |end| {
            months_between_inclusive(start_date, end)
        });
        let months = count_from(months, "course duration")?;
        if months < SHORT_COURSE_MONTHS {
            short_course_schedule(course, start_date)?
        } else {
            monthly_schedule(start_date.year(), start_date.month(), monthly_amounts(course, months))?
        }
    };
    ensure_positive(&lines)?;
    Ok(lines)
}

/// Per-month amounts for a qualifying course spread over `months` installments
fn monthly_amounts(course: &Course, months: u32) -> Vec<Decimal> {
    match course.price_per_month() {
        Some(per_month) if per_month > Decimal::ZERO => vec![per_month; months as usize],
        _ if course.price_model() == PriceModel::Monthly => {
            vec![course.total_price(); months as usize]
        }
        _ => split_evenly(course.total_price(), months),
    }
}

/// Tutoring bills `price_per_month`, else a tenth of `total_price`, whatever the price model
fn tutoring_amounts(course: &Course) -> Vec<Decimal> {
    match course.price_per_month() {
        Some(per_month) if per_month > Decimal::ZERO => vec![per_month; TUTORING_INSTALLMENTS as usize],
        _ => split_evenly(course.total_price(), TUTORING_INSTALLMENTS),
    }
}

fn tutoring_schedule(
    course: &Course,
    start_date: NaiveDate,
) -> Result<Vec<ScheduledInstallment>, DomainError> {
    monthly_schedule(
        academic_year_start(start_date),
        ACADEMIC_YEAR_START_MONTH,
        tutoring_amounts(course),
    )
}

fn monthly_schedule(
    first_year: i32,
    first_month: u32,
    amounts: Vec<Decimal>,
) -> Result<Vec<ScheduledInstallment>, DomainError> {
    let months = amounts.len();
    (0u32..)
        .zip(amounts)
        .map(|(index, amount)| {
            let (year, month) = shift_month(first_year, first_month, index);
            Ok(ScheduledInstallment {
                number: number(index),
                amount,
                due_date: day_of_month(year, month, MONTHLY_DUE_DAY)?,
                notes: Some(format!(
                    "Paiement {}/{} - {}",
                    index + 1,
                    months,
                    month_label(year, month)
                )),
            })
        })
        .collect()
}

fn short_course_schedule(
    course: &Course,
    start_date: NaiveDate,
) -> Result<Vec<ScheduledInstallment>, DomainError> {
    let halves = split_evenly(course.contract_value(), 2);
    let (first, second) = match halves.as_slice() {
        [first, second] => (*first, *second),
        _ => return Ok(Vec::new()),
    };
    Ok(vec![
        ScheduledInstallment {
            number: 1,
            amount: first,
            due_date: start_date,
            notes: Some("Paiement 1/2 - 50% du montant total".to_string()),
        },
        ScheduledInstallment {
            number: 2,
            amount: second,
            due_date: add_days(start_date, SHORT_COURSE_SECOND_PAYMENT_DAYS)?,
            notes: Some("Paiement 2/2 - 50% restant".to_string()),
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::course::{CourseType, CreateCourseData};
    use crate::domain::models::payment_plan::CreatePaymentPlanData;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn course(
        course_type: CourseType,
        price_model: PriceModel,
        total_price: Decimal,
        price_per_month: Option<Decimal>,
        duration_months: i32,
    ) -> Course {
        Course::new(CreateCourseData {
            title: "Cours".into(),
            description: None,
            trainer_id: None,
            course_type,
            price_model,
            total_price,
            price_per_month,
            registration_fee: dec!(1000),
            duration_months,
        })
        .unwrap()
    }

    fn plan(count: i32, interval_days: i32) -> PaymentPlan {
        PaymentPlan::new(CreatePaymentPlanData {
            name: "Plan".into(),
            installments_count: count,
            interval_days,
            description: None,
        })
        .unwrap()
    }

    fn total(lines: &[ScheduledInstallment]) -> Decimal {
        lines.iter().map(|l| l.amount).sum()
    }

    #[test]
    fn test_split_evenly_puts_remainder_on_last() {
        assert_eq!(split_evenly(dec!(100), 3), vec![dec!(33.33), dec!(33.33), dec!(33.34)]);
        assert_eq!(split_evenly(dec!(90), 3), vec![dec!(30), dec!(30), dec!(30)]);
        assert!(split_evenly(dec!(90), 0).is_empty());
    }

    #[test]
    fn test_plan_schedule_monthly_contract() {
        let course = course(CourseType::Qualifying, PriceModel::Monthly, dec!(5000), None, 6);
        let lines = plan_schedule(&course, &plan(3, 30), date(2025, 10, 1), Decimal::ZERO).unwrap();

        assert_eq!(lines.len(), 3);
        assert_eq!(total(&lines), dec!(30000));
        assert_eq!(lines[0].due_date, date(2025, 10, 1));
        assert_eq!(lines[1].due_date, date(2025, 10, 31));
        assert_eq!(lines[2].due_date, date(2025, 11, 30));
        assert_eq!(lines[2].number, 3);
    }

    #[test]
    fn test_plan_schedule_adds_fee_to_first_installment_and_sums_exactly() {
        let course = course(CourseType::Qualifying, PriceModel::Global, dec!(10000), None, 3);
        let lines = plan_schedule(&course, &plan(3, 15), date(2025, 10, 1), dec!(1000)).unwrap();

        assert_eq!(lines[0].amount, dec!(4333.33));
        assert_eq!(lines[1].amount, dec!(3333.33));
        assert_eq!(lines[2].amount, dec!(3333.34));
        assert_eq!(total(&lines), dec!(11000));
        assert!(lines[0].notes.as_deref().unwrap().contains("frais d'inscription"));
    }

    #[test]
    fn test_tutoring_schedule_covers_school_year() {
        // a tenth of the yearly price, even for a monthly price model
        let course = course(CourseType::TutoringGroup, PriceModel::Monthly, dec!(3000), None, 10);
        let lines = course_schedule(&course, date(2025, 11, 12), None).unwrap();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0].due_date, date(2025, 9, 5));
        assert_eq!(lines[3].due_date, date(2025, 12, 5));
        assert_eq!(lines[4].due_date, date(2026, 1, 5));
        assert_eq!(lines[9].due_date, date(2026, 6, 5));
        assert_eq!(lines[2].notes.as_deref(), Some("Paiement 3/10 - Novembre 2025"));
        assert!(lines.iter().all(|l| l.amount == dec!(300)));
        assert_eq!(total(&lines), dec!(3000));
    }

    #[test]
    fn test_tutoring_started_in_spring_belongs_to_previous_september() {
        let course = course(CourseType::TutoringOnline, PriceModel::Global, dec!(25000), None, 10);
        let lines = course_schedule(&course, date(2026, 3, 2), None).unwrap();

        assert_eq!(lines[0].due_date, date(2025, 9, 5));
        assert!(lines.iter().all(|l| l.amount == dec!(2500)));
    }

    #[test]
    fn test_tutoring_prefers_price_per_month() {
        let course = course(
            CourseType::TutoringIndividual,
            PriceModel::Global,
            dec!(40000),
            Some(dec!(3500)),
            10,
        );
        let lines = course_schedule(&course, date(2025, 9, 1), None).unwrap();
        assert_eq!(total(&lines), dec!(35000));
    }

    #[test]
    fn test_long_qualifying_course_is_monthly_from_start_month() {
        let course = course(CourseType::Qualifying, PriceModel::Global, dec!(10000), None, 6);
        let lines = course_schedule(&course, date(2025, 11, 20), Some(date(2026, 1, 31))).unwrap();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].due_date, date(2025, 11, 5));
        assert_eq!(lines[2].due_date, date(2026, 1, 5));
        assert_eq!(total(&lines), dec!(10000));
        assert_eq!(lines[2].notes.as_deref(), Some("Paiement 3/3 - Janvier 2026"));
    }

    #[test]
    fn test_qualifying_without_end_date_uses_duration() {
        let course = course(CourseType::Qualifying, PriceModel::Monthly, dec!(4000), None, 4);
        let lines = course_schedule(&course, date(2025, 10, 1), None).unwrap();
        assert_eq!(lines.len(), 4);
        assert_eq!(total(&lines), dec!(16000));
    }

    #[test]
    fn test_short_course_is_paid_in_two_halves() {
        let course = course(CourseType::Qualifying, PriceModel::Global, dec!(9000.01), None, 2);
        let start = date(2025, 10, 10);
        let lines = course_schedule(&course, start, Some(date(2025, 11, 20))).unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].due_date, start);
        assert_eq!(lines[1].due_date, date(2025, 11, 9));
        assert_eq!(lines[0].amount, dec!(4500.01));
        assert_eq!(lines[1].amount, dec!(4500.00));
    }

    #[test]
    fn test_end_before_start_is_rejected() {
        let course = course(CourseType::Qualifying, PriceModel::Global, dec!(9000), None, 2);
        let result = course_schedule(&course, date(2025, 10, 10), Some(date(2025, 8, 1)));
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_free_course_cannot_be_scheduled() {
        let course = course(CourseType::Qualifying, PriceModel::Global, Decimal::ZERO, None, 1);
        assert!(course_schedule(&course, date(2025, 10, 10), None).is_err());
    }
}
