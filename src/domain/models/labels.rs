//! Labeled Enums
//!
//! Status enums carry an English wire code (stored and serialized) and a
//! French display label. Both forms are accepted when parsing.

/// Declares an enum whose variants map to a `(code, label)` pair
macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => ($code:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $code)] $variant),+
        }

        impl $name {
            /// Every variant, in declaration order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// English code used on the wire and in the database
            #[must_use]
            pub fn code(self) -> &'static str {
                match self {
                    $(Self::$variant => $code),+
                }
            }

            /// French display label
            #[must_use]
            pub fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.code())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::shared::errors::DomainError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                let trimmed = value.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.code().eq_ignore_ascii_case(trimmed) || v.label().eq_ignore_ascii_case(trimmed))
                    .ok_or_else(|| {
                        $crate::shared::errors::DomainError::Validation(format!(
                            "Unknown {} '{}'",
                            stringify!($name),
                            value
                        ))
                    })
            }
        }
    };
}

pub(crate) use labeled_enum;
