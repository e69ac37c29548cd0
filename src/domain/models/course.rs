//! Course Domain Model
//!
//! A course is the catalogue entry students enroll into. Its pricing
//! fields drive installment schedule generation.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::ids::{CourseId, TrainerId};
use super::labels::labeled_enum;
use super::rules::{non_negative_amount, optional_text, required_text, round_money};
use crate::shared::errors::DomainError;

labeled_enum!(
    /// Kind of course, which selects the schedule pattern
    CourseType {
        TutoringGroup => ("TUTORING_GROUP", "Soutien scolaire (groupe)"),
        TutoringIndividual => ("TUTORING_INDIVIDUAL", "Soutien scolaire (individuel)"),
        TutoringOnline => ("TUTORING_ONLINE", "Soutien scolaire (en ligne)"),
        Qualifying => ("QUALIFYING", "Formation qualifiante"),
    }
);

impl CourseType {
    /// Tutoring courses follow the school year (September to June)
    #[must_use]
    pub fn is_tutoring(self) -> bool {
        !matches!(self, Self::Qualifying)
    }
}

labeled_enum!(
    /// How `total_price` should be read
    PriceModel {
        /// `total_price` is charged per month of the course
        Monthly => ("MONTHLY", "Mensuel"),
        /// `total_price` is the price of the whole course
        Global => ("GLOBAL", "Global"),
    }
);

/// Data required to create a new Course
#[derive(Debug, Clone)]
pub struct CreateCourseData {
    pub title: String,
    pub description: Option<String>,
    pub trainer_id: Option<TrainerId>,
    pub course_type: CourseType,
    pub price_model: PriceModel,
    pub total_price: Decimal,
    pub price_per_month: Option<Decimal>,
    pub registration_fee: Decimal,
    pub duration_months: i32,
}

/// Data for updating an existing Course
#[derive(Debug, Clone, Default)]
pub struct UpdateCourseData {
    pub title: Option<String>,
    pub description: Option<String>,
    pub trainer_id: Option<TrainerId>,
    pub course_type: Option<CourseType>,
    pub price_model: Option<PriceModel>,
    pub total_price: Option<Decimal>,
    pub price_per_month: Option<Decimal>,
    pub registration_fee: Option<Decimal>,
    pub duration_months: Option<i32>,
    pub is_active: Option<bool>,
}

/// Course domain entity
#[derive(Debug, Clone)]
pub struct Course {
    id: CourseId,
    title: String,
    description: Option<String>,
    trainer_id: Option<TrainerId>,
    course_type: CourseType,
    price_model: PriceModel,
    total_price: Decimal,
    price_per_month: Option<Decimal>,
    registration_fee: Decimal,
    duration_months: i32,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

fn check_duration(duration_months: i32) -> Result<i32, DomainError> {
    if duration_months < 1 {
        return Err(DomainError::Validation(
            "duration_months must be at least 1".to_string(),
        ));
    }
    Ok(duration_months)
}

impl Course {
    /// Create a new active Course
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` on a blank title, a negative price
    /// or a duration below one month.
    pub fn new(data: CreateCourseData) -> Result<Self, DomainError> {
        let now = Utc::now();
        Ok(Self {
            id: CourseId::new(),
            title: required_text("title", data.title)?,
            description: optional_text(data.description),
            trainer_id: data.trainer_id,
            course_type: data.course_type,
            price_model: data.price_model,
            total_price: non_negative_amount("total_price", data.total_price)?,
            price_per_month: data
                .price_per_month
                .map(|p| non_negative_amount("price_per_month", p))
                .transpose()?,
            registration_fee: non_negative_amount("registration_fee", data.registration_fee)?,
            duration_months: check_duration(data.duration_months)?,
            is_active: true,
            created_at: now,
            updated_at: now,
        })
    }

    /// Restore a Course from persisted data
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: CourseId,
        title: String,
        description: Option<String>,
        trainer_id: Option<TrainerId>,
        course_type: CourseType,
        price_model: PriceModel,
        total_price: Decimal,
        price_per_month: Option<Decimal>,
        registration_fee: Decimal,
        duration_months: i32,
        is_active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            trainer_id,
            course_type,
            price_model,
            total_price,
            price_per_month,
            registration_fee,
            duration_months,
            is_active,
            created_at,
            updated_at,
        }
    }

    /// Apply updates, returning a new instance
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when an updated field breaks an invariant.
    pub fn with_updates(self, data: UpdateCourseData) -> Result<Self, DomainError> {
        Ok(Self {
            title: match data.title {
                Some(v) => required_text("title", v)?,
                None => self.title,
            },
            description: optional_text(data.description).or(self.description),
            trainer_id: data.trainer_id.or(self.trainer_id),
            course_type: data.course_type.unwrap_or(self.course_type),
            price_model: data.price_model.unwrap_or(self.price_model),
            total_price: match data.total_price {
                Some(v) => non_negative_amount("total_price", v)?,
                None => self.total_price,
            },
            price_per_month: match data.price_per_month {
                Some(v) => Some(non_negative_amount("price_per_month", v)?),
                None => self.price_per_month,
            },
            registration_fee: match data.registration_fee {
                Some(v) => non_negative_amount("registration_fee", v)?,
                None => self.registration_fee,
            },
            duration_months: match data.duration_months {
                Some(v) => check_duration(v)?,
                None => self.duration_months,
            },
            is_active: data.is_active.unwrap_or(self.is_active),
            updated_at: Utc::now(),
            ..self
        })
    }

    /// Full value of the course contract, before registration fee
    #[must_use]
    pub fn contract_value(&self) -> Decimal {
        match self.price_model {
            PriceModel::Monthly => round_money(self.total_price * Decimal::from(self.duration_months)),
            PriceModel::Global => self.total_price,
        }
    }

    #[must_use]
    pub fn id(&self) -> &CourseId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn trainer_id(&self) -> Option<&TrainerId> {
        self.trainer_id.as_ref()
    }

    #[must_use]
    pub fn course_type(&self) -> CourseType {
        self.course_type
    }

    #[must_use]
    pub fn price_model(&self) -> PriceModel {
        self.price_model
    }

    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.total_price
    }

    #[must_use]
    pub fn price_per_month(&self) -> Option<Decimal> {
        self.price_per_month
    }

    #[must_use]
    pub fn registration_fee(&self) -> Decimal {
        self.registration_fee
    }

    #[must_use]
    pub fn duration_months(&self) -> i32 {
        self.duration_months
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn create_test_course_data() -> CreateCourseData {
        CreateCourseData {
            title: "Anglais B1".to_string(),
            description: None,
            trainer_id: None,
            course_type: CourseType::Qualifying,
            price_model: PriceModel::Monthly,
            total_price: dec!(4000),
            price_per_month: None,
            registration_fee: dec!(1500),
            duration_months: 3,
        }
    }

    #[test]
    fn test_monthly_contract_value_multiplies_duration() {
        let course = Course::new(create_test_course_data()).unwrap();
        assert_eq!(course.contract_value(), dec!(12000));
    }

    #[test]
    fn test_global_contract_value_is_total_price() {
        let mut data = create_test_course_data();
        data.price_model = PriceModel::Global;
        let course = Course::new(data).unwrap();
        assert_eq!(course.contract_value(), dec!(4000));
    }

    #[test]
    fn test_course_rejects_zero_duration() {
        let mut data = create_test_course_data();
        data.duration_months = 0;
        assert!(Course::new(data).is_err());
    }

    #[test]
    fn test_course_type_labels() {
        assert!(CourseType::TutoringOnline.is_tutoring());
        assert!(!CourseType::Qualifying.is_tutoring());
        assert_eq!(CourseType::Qualifying.label(), "Formation qualifiante");
    }

    #[test]
    fn test_course_update_can_deactivate() {
        let course = Course::new(create_test_course_data()).unwrap();
        let updated = course
            .with_updates(UpdateCourseData {
                is_active: Some(false),
                ..Default::default()
            })
            .unwrap();
        assert!(!updated.is_active());
        assert_eq!(updated.title(), "Anglais B1");
    }
}
