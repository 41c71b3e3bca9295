//! Bounded resource pools backing health and mana.

/// A depletable resource clamped to `[0, maximum]`.
///
/// All mutations clamp at the point of mutation and report the amount that
/// actually changed, so callers can relay exact numbers without re-deriving
/// them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourcePool {
    current: u32,
    maximum: u32,
}

impl ResourcePool {
    /// Creates a full pool with the given capacity.
    pub const fn new(maximum: u32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    /// Creates a pool at a specific fill level, clamped to capacity.
    pub const fn with_current(current: u32, maximum: u32) -> Self {
        let current = if current > maximum { maximum } else { current };
        Self { current, maximum }
    }

    pub const fn current(&self) -> u32 {
        self.current
    }

    pub const fn maximum(&self) -> u32 {
        self.maximum
    }

    pub const fn is_empty(&self) -> bool {
        self.current == 0
    }

    pub const fn is_full(&self) -> bool {
        self.current == self.maximum
    }

    /// Headroom left before the pool is full.
    pub const fn missing(&self) -> u32 {
        self.maximum - self.current
    }

    /// Removes up to `amount`, flooring at zero.
    ///
    /// Returns the amount actually removed, which is what combat reports as
    /// damage dealt: a pool at 4 depleted by 9 loses exactly 4.
    pub fn deplete(&mut self, amount: u32) -> u32 {
        let removed = amount.min(self.current);
        self.current -= removed;
        removed
    }

    /// Restores up to `amount`, capped at capacity.
    ///
    /// Returns the amount actually restored.
    pub fn restore(&mut self, amount: u32) -> u32 {
        let restored = amount.min(self.missing());
        self.current += restored;
        restored
    }

    /// Spends exactly `amount` if the balance covers it.
    ///
    /// Returns `false` and leaves the pool untouched when it does not.
    pub fn spend(&mut self, amount: u32) -> bool {
        if self.current < amount {
            return false;
        }
        self.current -= amount;
        true
    }

    /// Raises capacity without filling the difference.
    pub fn raise_maximum(&mut self, amount: u32) {
        self.maximum += amount;
    }

    /// Refills the pool to capacity.
    pub fn refill(&mut self) {
        self.current = self.maximum;
    }
}
