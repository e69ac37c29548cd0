//! Create Course Use Case

use std::sync::Arc;

use crate::domain::gateways::{CourseRepository, TrainerRepository};
use crate::domain::models::course::{Course, CreateCourseData};
use crate::shared::errors::UseCaseError;

/// Use case for adding a course to the catalogue
pub struct CreateCourseUseCase {
    course_repository: Arc<dyn CourseRepository>,
    trainer_repository: Arc<dyn TrainerRepository>,
}

impl CreateCourseUseCase {
    #[must_use]
    pub fn new(
        course_repository: Arc<dyn CourseRepository>,
        trainer_repository: Arc<dyn TrainerRepository>,
    ) -> Self {
        Self {
            course_repository,
            trainer_repository,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the referenced trainer doesn't exist.
    /// Returns `UseCaseError::Domain` if the pricing or duration is invalid.
    pub async fn execute(&self, data: CreateCourseData) -> Result<Course, UseCaseError> {
        tracing::info!(title = %data.title, course_type = %data.course_type, "Creating new course");

        if let Some(trainer_id) = &data.trainer_id {
            if self.trainer_repository.find_by_id(trainer_id).await?.is_none() {
                return Err(UseCaseError::not_found("Trainer", trainer_id));
            }
        }

        let course = Course::new(data)?;
        let created = self.course_repository.create(&course).await?;

        tracing::info!(course_id = %created.id(), "Course created successfully");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::course_repository::MockCourseRepository;
    use crate::domain::gateways::trainer_repository::MockTrainerRepository;
    use crate::domain::models::course::{CourseType, PriceModel};
    use crate::domain::models::ids::TrainerId;
    use rust_decimal_macros::dec;

    fn create_test_data(trainer_id: Option<TrainerId>) -> CreateCourseData {
        CreateCourseData {
            title: "Mathématiques 3AS".to_string(),
            description: None,
            trainer_id,
            course_type: CourseType::TutoringGroup,
            price_model: PriceModel::Monthly,
            total_price: dec!(3000),
            price_per_month: Some(dec!(3000)),
            registration_fee: dec!(1000),
            duration_months: 10,
        }
    }

    #[tokio::test]
    async fn should_create_course_without_trainer() {
        let mut courses = MockCourseRepository::new();
        courses.expect_create().times(1).returning(|c| Ok(c.clone()));
        let mut trainers = MockTrainerRepository::new();
        trainers.expect_find_by_id().never();

        let use_case = CreateCourseUseCase::new(Arc::new(courses), Arc::new(trainers));
        let course = use_case.execute(create_test_data(None)).await.unwrap();

        assert!(course.is_active());
        assert_eq!(course.contract_value(), dec!(30000));
    }

    #[tokio::test]
    async fn should_reject_unknown_trainer() {
        let mut courses = MockCourseRepository::new();
        courses.expect_create().never();
        let mut trainers = MockTrainerRepository::new();
        trainers.expect_find_by_id().returning(|_| Ok(None));

        let use_case = CreateCourseUseCase::new(Arc::new(courses), Arc::new(trainers));
        let result = use_case.execute(create_test_data(Some(TrainerId::new()))).await;

        assert!(matches!(result, Err(UseCaseError::NotFound { .. })));
    }
}
