// Debug-build diagnostics. None of this exists in release builds.

use crate::raw::{RawSpinlock, FREE, SPIN_WARN_THRESHOLD};

pub(crate) struct SpinWatchdog<'a> {
    lock: &'a RawSpinlock,
    spins: usize,
}

impl<'a> SpinWatchdog<'a> {
    pub(crate) fn new(lock: &'a RawSpinlock) -> Self {
        Self { lock, spins: 0 }
    }

    #[cfg(test)]
    pub(crate) fn with_spins(lock: &'a RawSpinlock, spins: usize) -> Self {
        Self { lock, spins }
    }

    // Warns once per acquire, then keeps quiet. Returns whether it warned.
    #[inline]
    pub(crate) fn tick(&mut self) -> bool {
        self.spins = self.spins.wrapping_add(1);
        if self.spins != SPIN_WARN_THRESHOLD {
            return false;
        }

        log::warn!(
            "Spinlock {:p} still held after {} polls, possible self-deadlock or missing release",
            self.lock,
            self.spins
        );
        true
    }
}

pub(crate) fn check_release(lock: &RawSpinlock, previous: u32) {
    if previous == FREE {
        log::error!("Spinlock {:p} released while free", lock);
        panic!("release of a spinlock that was not held");
    }
}
