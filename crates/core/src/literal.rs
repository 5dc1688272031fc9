//! Closed sets of string literals stored as TEXT and submitted by forms.
//!
//! [`define_literal_enum!`] generates an enum whose variants each map to one
//! literal, plus `as_str`, `VALUES` (for `Constraint::In` rule tables),
//! `FromStr`, `Display` and serde impls that use the literal.

/// Error returned when a string is not one of an enum's literals.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not a valid {kind}")]
pub struct UnknownLiteral {
    pub kind: &'static str,
    pub value: String,
}

#[macro_export]
macro_rules! define_literal_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident = $lit:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $lit)] $variant ),+
        }

        impl $name {
            /// Every accepted literal, in declaration order.
            pub const VALUES: &'static [&'static str] = &[$($lit),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $lit ),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::literal::UnknownLiteral;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $lit => Ok($name::$variant), )+
                    other => Err($crate::literal::UnknownLiteral {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}
