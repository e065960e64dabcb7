//! One-sided views over pairs.
//!
//! A [`PairFirst`] lets `map` reach only the first component of a pair and a
//! [`PairSecond`] only the second, the same way an `Either` projection scopes
//! operations to one side.

/// A pair whose operations act on the first component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairFirst<A, B> {
    pair: (A, B),
}

/// A pair whose operations act on the second component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairSecond<A, B> {
    pair: (A, B),
}

impl<A, B> PairFirst<A, B> {
    /// Wraps a pair.
    pub const fn new(pair: (A, B)) -> Self {
        Self { pair }
    }

    /// The focused component.
    pub const fn get(&self) -> &A {
        &self.pair.0
    }

    /// Transforms the first component, keeping the second.
    pub fn map<C, F>(self, function: F) -> PairFirst<C, B>
    where
        F: FnOnce(A) -> C,
    {
        let (first, second) = self.pair;
        PairFirst::new((function(first), second))
    }

    /// Refocuses on the second component.
    pub fn to_second(self) -> PairSecond<A, B> {
        PairSecond::new(self.pair)
    }

    /// Unwraps the pair.
    pub fn into_pair(self) -> (A, B) {
        self.pair
    }
}

impl<A, B> PairSecond<A, B> {
    /// Wraps a pair.
    pub const fn new(pair: (A, B)) -> Self {
        Self { pair }
    }

    /// The focused component.
    pub const fn get(&self) -> &B {
        &self.pair.1
    }

    /// Transforms the second component, keeping the first.
    pub fn map<C, F>(self, function: F) -> PairSecond<A, C>
    where
        F: FnOnce(B) -> C,
    {
        let (first, second) = self.pair;
        PairSecond::new((first, function(second)))
    }

    /// Refocuses on the first component.
    pub fn to_first(self) -> PairFirst<A, B> {
        PairFirst::new(self.pair)
    }

    /// Unwraps the pair.
    pub fn into_pair(self) -> (A, B) {
        self.pair
    }
}

impl<A, B> From<(A, B)> for PairFirst<A, B> {
    fn from(pair: (A, B)) -> Self {
        Self::new(pair)
    }
}

impl<A, B> From<(A, B)> for PairSecond<A, B> {
    fn from(pair: (A, B)) -> Self {
        Self::new(pair)
    }
}

/// Extension methods projecting a tuple onto one side.
pub trait PairExt<A, B> {
    /// Views the pair through its first component.
    fn to_first(self) -> PairFirst<A, B>;

    /// Views the pair through its second component.
    fn to_second(self) -> PairSecond<A, B>;
}

impl<A, B> PairExt<A, B> for (A, B) {
    fn to_first(self) -> PairFirst<A, B> {
        PairFirst::new(self)
    }

    fn to_second(self) -> PairSecond<A, B> {
        PairSecond::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn first_map_leaves_second_alone() {
        let mapped = (2, "keep").to_first().map(|n| n * 10);
        assert_eq!(mapped.into_pair(), (20, "keep"));
    }

    #[rstest]
    fn second_map_leaves_first_alone() {
        let mapped = ("keep", 2).to_second().map(|n| n.to_string());
        assert_eq!(mapped.into_pair(), ("keep", "2".to_string()));
    }

    #[rstest]
    fn refocusing_keeps_both_components() {
        let pair = (1, 'b').to_first().map(|n| n + 1).to_second().map(|c| c.to_ascii_uppercase());
        assert_eq!(pair.into_pair(), (2, 'B'));
    }

    #[rstest]
    fn get_reads_the_focused_side() {
        let pair = (3, 4);
        assert_eq!(*pair.to_first().get(), 3);
        assert_eq!(*pair.to_second().get(), 4);
    }
}
