//! Fixed-capacity sliding-window mean over a scalar stream.

use std::collections::VecDeque;

/// Sliding-window average of the most recent samples.
///
/// Holds at most `capacity` values, oldest first. Adding to a full window
/// evicts the oldest value.
///
/// # Example
///
/// ```
/// use tilt_engine::input::motion::MovingAverage;
///
/// let mut filter = MovingAverage::new(3);
/// for value in [1.0, 2.0, 3.0, 4.0, 5.0, 6.0] {
///     filter.add(value);
/// }
/// assert_eq!(filter.average(), 5.0);
/// ```
#[derive(Debug, Clone)]
pub struct MovingAverage {
    capacity: usize,
    window: VecDeque<f32>,
}

impl MovingAverage {
    /// Creates an empty window. A capacity of zero is treated as one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            window: VecDeque::with_capacity(capacity.min(1024)),
        }
    }

    /// Maximum number of retained samples.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of samples currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// Returns true if no sample has been added since creation or `clear`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Appends a sample, evicting the oldest ones past capacity.
    pub fn add(&mut self, value: f32) {
        self.window.push_back(value);
        while self.window.len() > self.capacity {
            self.window.pop_front();
        }
    }

    /// Unweighted mean of the held samples.
    ///
    /// An empty window yields `NaN` (0 / 0). Callers that need a number
    /// should check [`is_empty`](Self::is_empty) or use
    /// [`try_average`](Self::try_average).
    #[must_use]
    pub fn average(&self) -> f32 {
        let sum: f32 = self.window.iter().sum();
        #[allow(clippy::cast_precision_loss)]
        let count = self.window.len() as f32;
        sum / count
    }

    /// Mean of the held samples, or `None` when the window is empty.
    #[must_use]
    pub fn try_average(&self) -> Option<f32> {
        (!self.is_empty()).then(|| self.average())
    }

    /// Held samples, oldest first.
    pub fn values(&self) -> impl Iterator<Item = f32> + '_ {
        self.window.iter().copied()
    }

    /// Drops every held sample.
    pub fn clear(&mut self) {
        self.window.clear();
    }
}
