//! SectionCursor - linear navigation over a fixed number of sections.
//!
//! Ordinals are 1-based. Next/Previous clamp at both ends; there is no
//! wraparound.

use crate::domain::foundation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionCursor {
    current: usize,
    count: usize,
}

impl SectionCursor {
    /// Starts at section 1 of `count` (at least one section).
    pub fn new(count: usize) -> Self {
        Self {
            current: 1,
            count: count.max(1),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_first(&self) -> bool {
        self.current == 1
    }

    pub fn is_last(&self) -> bool {
        self.current == self.count
    }

    /// Moves forward one section; stays put on the last one.
    pub fn advance(&mut self) -> usize {
        if self.current < self.count {
            self.current += 1;
        }
        self.current
    }

    /// Moves back one section; stays put on the first one.
    pub fn retreat(&mut self) -> usize {
        if self.current > 1 {
            self.current -= 1;
        }
        self.current
    }

    /// Jumps directly to `section`.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `section` is not in `1..=count`.
    pub fn jump_to(&mut self, section: usize) -> Result<usize, ValidationError> {
        if section == 0 || section > self.count {
            return Err(ValidationError::out_of_range("section", 1, self.count, section));
        }
        self.current = section;
        Ok(self.current)
    }

    pub fn reset(&mut self) {
        self.current = 1;
    }
}
