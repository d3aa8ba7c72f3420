//! # Shared behavior
//!
//! Operations that the integer types implement once, with the remaining forms derived.

/// Stepping a value up or down by one.
///
/// Implementors provide the in place forms; the postfix forms, which return the value from before
/// the step, are derived.
pub trait Step: Clone {
    /// Add one in place.
    fn increment(&mut self);
    /// Subtract one in place.
    ///
    /// # Panics
    ///
    /// If the type can't represent the result.
    fn decrement(&mut self);

    /// Add one, returning the old value.
    #[must_use]
    fn post_increment(&mut self) -> Self {
        let old = self.clone();
        self.increment();
        old
    }

    /// Subtract one, returning the old value.
    ///
    /// # Panics
    ///
    /// If the type can't represent the result.
    #[must_use]
    fn post_decrement(&mut self) -> Self {
        let old = self.clone();
        self.decrement();
        old
    }
}
