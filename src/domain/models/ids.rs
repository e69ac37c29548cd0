//! Entity Identifiers
//!
//! UUID newtypes giving each aggregate its own id type.

use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random id
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Create an id from an existing UUID
            #[must_use]
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Get the underlying UUID
            #[must_use]
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl TryFrom<&str> for $name {
            type Error = uuid::Error;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Ok(Self(Uuid::parse_str(value)?))
            }
        }
    };
}

entity_id!(
    /// Identifier of a back-office user
    UserId
);
entity_id!(
    /// Identifier of a student
    StudentId
);
entity_id!(
    /// Identifier of a trainer
    TrainerId
);
entity_id!(
    /// Identifier of a course
    CourseId
);
entity_id!(
    /// Identifier of a course session
    SessionId
);
entity_id!(
    /// Identifier of a registration request
    RegistrationId
);
entity_id!(
    /// Identifier of an enrollment
    EnrollmentId
);
entity_id!(
    /// Identifier of a payment plan template
    PaymentPlanId
);
entity_id!(
    /// Identifier of a scheduled installment
    InstallmentId
);
entity_id!(
    /// Identifier of a recorded payment
    PaymentId
);
entity_id!(
    /// Identifier of a ledger transaction
    TransactionId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(StudentId::new(), StudentId::new());
    }

    #[test]
    fn test_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id = CourseId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
        assert_eq!(Uuid::from(id), uuid);
    }

    #[test]
    fn test_id_try_from_str() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id = EnrollmentId::try_from(uuid_str).unwrap();
        assert_eq!(id.to_string(), uuid_str);
        assert!(EnrollmentId::try_from("not-a-uuid").is_err());
    }
}
