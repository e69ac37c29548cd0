//! Course Use Cases

mod create_course;
mod delete_course;
mod get_course_by_id;
mod list_courses;
mod update_course;

use std::sync::Arc;

pub use create_course::CreateCourseUseCase;
pub use delete_course::DeleteCourseUseCase;
pub use get_course_by_id::GetCourseByIdUseCase;
pub use list_courses::ListCoursesUseCase;
pub use update_course::UpdateCourseUseCase;

use crate::domain::gateways::{CourseRepository, TrainerRepository};

pub struct CourseUseCases {
    pub create: CreateCourseUseCase,
    pub list: ListCoursesUseCase,
    pub get: GetCourseByIdUseCase,
    pub update: UpdateCourseUseCase,
    pub delete: DeleteCourseUseCase,
}

impl CourseUseCases {
    #[must_use]
    pub fn new(courses: &Arc<dyn CourseRepository>, trainers: &Arc<dyn TrainerRepository>) -> Self {
        Self {
            create: CreateCourseUseCase::new(courses.clone(), trainers.clone()),
            list: ListCoursesUseCase::new(courses.clone()),
            get: GetCourseByIdUseCase::new(courses.clone()),
            update: UpdateCourseUseCase::new(courses.clone(), trainers.clone()),
            delete: DeleteCourseUseCase::new(courses.clone()),
        }
    }
}
