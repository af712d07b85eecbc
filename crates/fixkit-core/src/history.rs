use arrayvec::ArrayVec;

use crate::{
    Numeric,
    shift::{shift_insert_back, shift_insert_front},
    sort::sort_ascending,
    stats::{ArrayStats, StatsError},
};

/// Rolling measurement history of fixed depth `N`.
///
/// Values accumulate until the history is full. From then on every push
/// evicts one value from the opposite end, using the same shift-insert
/// operations that work on plain buffers.
///
/// # Example
///
/// ```
/// use fixkit_core::History;
///
/// let mut history = History::<i32, 3>::new();
/// assert_eq!(history.push(1), None);
/// assert_eq!(history.push(2), None);
/// assert_eq!(history.push(3), None);
/// assert_eq!(history.push(4), Some(1));
/// assert_eq!(history.as_slice(), &[2, 3, 4]);
/// assert_eq!(history.stats().unwrap().mean, 3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct History<T, const N: usize> {
    values: ArrayVec<T, N>,
}

impl<T, const N: usize> Default for History<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> History<T, N> {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: ArrayVec::new(),
        }
    }

    /// Maximum number of values kept.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.values.is_full()
    }

    /// Values in storage order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl<T, const N: usize> History<T, N>
where
    T: Numeric,
{
    /// Appends `value` as the newest entry at the end.
    ///
    /// Once full, the first (oldest) value is evicted and returned.
    /// A zero-capacity history returns `value` itself.
    pub fn push(&mut self, value: T) -> Option<T> {
        match self.values.try_push(value) {
            Ok(()) => None,
            Err(_) => Some(shift_insert_back(&mut self.values, value).unwrap_or(value)),
        }
    }

    /// Inserts `value` as the newest entry at the start.
    ///
    /// Once full, the last (oldest) value is evicted and returned.
    /// A zero-capacity history returns `value` itself.
    pub fn push_front(&mut self, value: T) -> Option<T> {
        if self.values.is_full() {
            return Some(shift_insert_front(&mut self.values, value).unwrap_or(value));
        }
        self.values.insert(0, value);
        None
    }

    /// Statistics over the values currently held.
    pub fn stats(&self) -> Result<ArrayStats<T>, StatsError> {
        ArrayStats::new(&self.values)
    }

    /// A sorted copy of the values currently held.
    #[must_use]
    pub fn sorted(&self) -> ArrayVec<T, N> {
        let mut sorted = self.values.clone();
        sort_ascending(&mut sorted);
        sorted
    }
}
