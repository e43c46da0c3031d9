//! Shared motion line for `no_std` environments.
//!
//! Holds the level of the motion signal behind a critical section so an
//! interrupt handler, another thread or a test can drive it while the
//! control loop polls it.

use core::cell::Cell;

use critical_section::Mutex;

use crate::board::MotionInput;

/// Motion level shared between a writer and the control loop
pub struct SharedMotionLine {
    level: Mutex<Cell<bool>>,
}

impl SharedMotionLine {
    /// Create a line that starts low
    pub const fn new() -> Self {
        Self {
            level: Mutex::new(Cell::new(false)),
        }
    }

    /// Drive the line to the given level
    pub fn set(&self, asserted: bool) {
        critical_section::with(|cs| self.level.borrow(cs).set(asserted));
    }

    /// Read the current level
    pub fn get(&self) -> bool {
        critical_section::with(|cs| self.level.borrow(cs).get())
    }
}

impl Default for SharedMotionLine {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionInput for &SharedMotionLine {
    fn is_motion(&mut self) -> bool {
        self.get()
    }
}
