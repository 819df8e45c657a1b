//! Macro for implementing Display and FromStr for provider status enums
//!
//! PayPal reports lifecycle states and patch operations as plain strings.
//! This macro maps enum variants to their canonical wire spelling and
//! accepts case-insensitive input, plus optional alternate spellings.
//!
//! # Example
//!
//! ```rust
//! use paypal_agreements_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum PlanState {
//!     Created,
//!     Active,
//!     Inactive,
//! }
//!
//! impl_domain_status_conversions!(PlanState {
//!     Created => "CREATED",
//!     Active => "ACTIVE",
//!     Inactive => "INACTIVE" | "DISABLED",
//! });
//!
//! assert_eq!("active".parse::<PlanState>(), Ok(PlanState::Active));
//! assert_eq!("Disabled".parse::<PlanState>(), Ok(PlanState::Inactive));
//! assert_eq!(PlanState::Created.to_string(), "CREATED");
//! ```

/// Implements Display and FromStr traits for status enums
///
/// This macro generates:
/// - Display trait: writes the canonical string for each variant
/// - FromStr trait: parses the canonical string or any listed alias,
///   ignoring ASCII case
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str | $alias...` - Mapping of enum variants to their
///   canonical representation and optional aliases
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal $(| $alias:literal)*),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                $(
                    if s.eq_ignore_ascii_case($str) $(|| s.eq_ignore_ascii_case($alias))* {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestState {
        Active,
        Suspended,
        Cancelled,
    }

    impl_domain_status_conversions!(TestState {
        Active => "Active",
        Suspended => "Suspended" | "Suspend",
        Cancelled => "Cancelled" | "Cancel" | "Canceled",
    });

    #[test]
    fn test_display_conversion() {
        assert_eq!(TestState::Active.to_string(), "Active");
        assert_eq!(TestState::Suspended.to_string(), "Suspended");
        assert_eq!(TestState::Cancelled.to_string(), "Cancelled");
    }

    #[test]
    fn test_fromstr_ignores_case() {
        assert_eq!(TestState::from_str("active").unwrap(), TestState::Active);
        assert_eq!(TestState::from_str("ACTIVE").unwrap(), TestState::Active);
        assert_eq!(TestState::from_str("SuSpEnDeD").unwrap(), TestState::Suspended);
    }

    #[test]
    fn test_fromstr_aliases() {
        assert_eq!(TestState::from_str("Suspend").unwrap(), TestState::Suspended);
        assert_eq!(TestState::from_str("cancel").unwrap(), TestState::Cancelled);
        assert_eq!(TestState::from_str("Canceled").unwrap(), TestState::Cancelled);
    }

    #[test]
    fn test_fromstr_trims_whitespace() {
        assert_eq!(TestState::from_str("  Active ").unwrap(), TestState::Active);
    }

    #[test]
    fn test_fromstr_invalid() {
        let result = TestState::from_str("expired");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid TestState: expired"));
    }

    #[test]
    fn test_fromstr_empty() {
        assert!(TestState::from_str("").is_err());
    }

    #[test]
    fn test_roundtrip() {
        for state in [TestState::Active, TestState::Suspended, TestState::Cancelled] {
            let parsed = TestState::from_str(&state.to_string()).unwrap();
            assert_eq!(state, parsed);
        }
    }
}
