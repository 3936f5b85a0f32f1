//! Macro for implementing Display and FromStr for wire-level enums
//!
//! Several domain enums (day types, report states) travel as lowercase
//! strings in tool payloads and provider responses. The macro keeps their
//! string mapping in one place.
//!
//! # Example
//!
//! ```rust
//! use travex_domain::impl_domain_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Leg {
//!     Outbound,
//!     Return,
//! }
//!
//! impl_domain_enum_conversions!(Leg {
//!     Outbound => "outbound",
//!     Return => "return",
//! });
//!
//! assert_eq!(Leg::Return.to_string(), "return");
//! assert_eq!("OUTBOUND".parse::<Leg>().unwrap(), Leg::Outbound);
//! ```

/// Implements Display and FromStr traits for simple enums
///
/// - Display writes the mapped lowercase string
/// - FromStr parses case-insensitively and names the enum in its error
#[macro_export]
macro_rules! impl_domain_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
