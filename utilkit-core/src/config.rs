use crate::error::UtilError;

/// Configuration for a guessing game
///
/// # Example
///
/// ```rust
/// use utilkit_core::GameConfig;
///
/// let config = GameConfig::default()
///     .with_range(1, 50)
///     .with_max_attempts(5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Smallest possible secret and guess (default: 1)
    pub low: u32,
    /// Largest possible secret and guess (default: 100)
    pub high: u32,
    /// Attempt bound (default: 10). The loop stops once the attempt count
    /// exceeds this value, so at most `max_attempts + 1` guesses are made.
    pub max_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            low: 1,
            high: 100,
            max_attempts: 10,
        }
    }
}

impl GameConfig {
    /// Creates a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the inclusive range secrets and guesses are drawn from
    ///
    /// # Arguments
    ///
    /// * `low` - Smallest value (inclusive)
    /// * `high` - Largest value (inclusive)
    pub fn with_range(mut self, low: u32, high: u32) -> Self {
        self.low = low;
        self.high = high;
        self
    }

    /// Sets the attempt bound
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Checks that the range is not empty
    pub fn validate(&self) -> Result<(), UtilError> {
        if self.low > self.high {
            return Err(UtilError::InvalidRange {
                low: self.low,
                high: self.high,
                secret: None,
            });
        }
        Ok(())
    }

    /// Returns `true` if `value` lies inside the configured range
    pub fn contains(&self, value: u32) -> bool {
        (self.low..=self.high).contains(&value)
    }
}
