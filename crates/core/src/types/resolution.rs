//! Outcome of resolving a loose user-facing designator.

/// Result of a lookup that always produces a value.
///
/// Site and period resolution never fail: unknown input falls back to a
/// default. `Defaulted` keeps the original input so callers can tell an
/// explicit request for the default apart from a typo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<T> {
    /// The input matched a known entry.
    Resolved(T),
    /// The input matched nothing and the default was substituted.
    Defaulted {
        /// The substituted default.
        value: T,
        /// The input as given by the caller.
        input: String,
    },
}

impl<T> Resolution<T> {
    /// Get the resolved (or defaulted) value.
    #[must_use]
    pub const fn value(&self) -> &T {
        match self {
            Self::Resolved(value) | Self::Defaulted { value, .. } => value,
        }
    }

    /// Consume the resolution and return the value.
    #[must_use]
    pub fn into_value(self) -> T {
        match self {
            Self::Resolved(value) | Self::Defaulted { value, .. } => value,
        }
    }

    /// Whether the default was substituted for unrecognized input.
    #[must_use]
    pub const fn is_defaulted(&self) -> bool {
        matches!(self, Self::Defaulted { .. })
    }

    /// The unrecognized input, if the default was substituted.
    #[must_use]
    pub fn defaulted_from(&self) -> Option<&str> {
        match self {
            Self::Resolved(_) => None,
            Self::Defaulted { input, .. } => Some(input),
        }
    }
}
