///
/// Comparison
///
/// Three-way outcome of a synthesized comparison. A cross-type comparison
/// is explicitly *incomparable*, never `false`: the sentinel is what the
/// caller's fallback-comparison mechanism dispatches on.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Comparison {
    Decided(bool),
    Incomparable,
}

impl Comparison {
    /// Logical negation; `Incomparable` propagates unchanged.
    #[must_use]
    pub const fn negate(self) -> Self {
        match self {
            Self::Decided(b) => Self::Decided(!b),
            Self::Incomparable => Self::Incomparable,
        }
    }

    #[must_use]
    pub const fn is_decided(self) -> bool {
        matches!(self, Self::Decided(_))
    }

    /// The decided boolean, if any.
    #[must_use]
    pub const fn decided(self) -> Option<bool> {
        match self {
            Self::Decided(b) => Some(b),
            Self::Incomparable => None,
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::Comparison;

    #[test]
    fn negate_flips_decided_outcomes() {
        assert_eq!(
            Comparison::Decided(true).negate(),
            Comparison::Decided(false)
        );
        assert_eq!(
            Comparison::Decided(false).negate(),
            Comparison::Decided(true)
        );
    }

    #[test]
    fn negate_propagates_incomparable() {
        assert_eq!(Comparison::Incomparable.negate(), Comparison::Incomparable);
        assert_eq!(Comparison::Incomparable.decided(), None);
    }
}
