//! Quantity stepper backing the product detail view.

/// A clamped quantity with increment/decrement controls. Out-of-range input
/// clamps silently, matching the storefront stepper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityStepper {
    value: u32,
    min: u32,
    max: Option<u32>,
}

impl QuantityStepper {
    pub fn new(min: u32, max: Option<u32>) -> Self {
        let min = min.max(1);
        QuantityStepper {
            value: min,
            min,
            max,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn increment(&mut self) {
        self.set(self.value.saturating_add(1));
    }

    pub fn decrement(&mut self) {
        self.set(self.value.saturating_sub(1));
    }

    pub fn set(&mut self, value: u32) {
        let mut v = value.max(self.min);
        if let Some(max) = self.max {
            v = v.min(max);
        }
        self.value = v;
    }

    pub fn reset(&mut self) {
        self.value = self.min;
    }
}

impl Default for QuantityStepper {
    fn default() -> Self {
        QuantityStepper::new(1, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_min() {
        let q = QuantityStepper::default();
        assert_eq!(q.value(), 1);
    }

    #[test]
    fn never_below_min() {
        let mut q = QuantityStepper::default();
        q.decrement();
        assert_eq!(q.value(), 1);
        q.set(0);
        assert_eq!(q.value(), 1);
    }

    #[test]
    fn never_above_max() {
        let mut q = QuantityStepper::new(1, Some(3));
        for _ in 0..10 {
            q.increment();
        }
        assert_eq!(q.value(), 3);
        q.set(99);
        assert_eq!(q.value(), 3);
    }

    #[test]
    fn reset_returns_to_min() {
        let mut q = QuantityStepper::new(2, None);
        q.increment();
        q.increment();
        q.reset();
        assert_eq!(q.value(), 2);
    }
}
