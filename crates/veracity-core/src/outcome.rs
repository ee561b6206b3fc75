//! Complete-or-degraded results.

/// The result of a stage that always produces a value.
///
/// A stage that hits a fault substitutes a fallback value and records the
/// cause instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The stage ran to completion.
    Complete(T),
    /// The stage fell back to a substitute value.
    Degraded {
        /// The substitute value.
        value: T,
        /// Why the stage degraded.
        cause: String,
    },
}

impl<T> Outcome<T> {
    /// Whether the stage fell back.
    pub const fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }

    /// Borrow the value regardless of variant.
    pub const fn value(&self) -> &T {
        match self {
            Self::Complete(value) | Self::Degraded { value, .. } => value,
        }
    }

    /// The degradation cause, if any.
    pub fn cause(&self) -> Option<&str> {
        match self {
            Self::Complete(_) => None,
            Self::Degraded { cause, .. } => Some(cause),
        }
    }

    /// Discard the variant and keep the value.
    pub fn into_inner(self) -> T {
        match self {
            Self::Complete(value) | Self::Degraded { value, .. } => value,
        }
    }

    /// Split into the value and the optional cause.
    pub fn into_parts(self) -> (T, Option<String>) {
        match self {
            Self::Complete(value) => (value, None),
            Self::Degraded { value, cause } => (value, Some(cause)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_has_no_cause() {
        let outcome = Outcome::Complete(3);
        assert!(!outcome.is_degraded());
        assert_eq!(outcome.cause(), None);
        assert_eq!(outcome.into_inner(), 3);
    }

    #[test]
    fn degraded_keeps_value_and_cause() {
        let outcome = Outcome::Degraded {
            value: 0,
            cause: "tagger offline".to_string(),
        };
        assert!(outcome.is_degraded());
        assert_eq!(*outcome.value(), 0);
        assert_eq!(
            outcome.into_parts(),
            (0, Some("tagger offline".to_string()))
        );
    }
}
