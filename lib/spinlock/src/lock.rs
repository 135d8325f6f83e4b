use core::cell::UnsafeCell;
use core::fmt;
use core::ops::{Deref, DerefMut};

use crate::{RawSpinlock, WouldBlock};

/// A [`RawSpinlock`] bundled with the data it protects.
///
/// The data is only reachable through a [`SpinlockGuard`], and dropping the
/// guard is the only way to release, so lock and unlock always pair up.
///
/// ```
/// use spinlock::Spinlock;
///
/// static COUNTER: Spinlock<u64> = Spinlock::new(0);
///
/// *COUNTER.lock() += 1;
/// assert_eq!(*COUNTER.lock(), 1);
/// ```
pub struct Spinlock<T> {
    lock: RawSpinlock,
    data: UnsafeCell<T>
}

unsafe impl<T: Send> Send for Spinlock<T> {}
unsafe impl<T: Send> Sync for Spinlock<T> {}

pub struct SpinlockGuard<'a, T> {
    lock: &'a RawSpinlock,
    data: &'a mut T
}

impl<T> Deref for SpinlockGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &*self.data
    }
}

impl<T> DerefMut for SpinlockGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.data
    }
}

impl<T> Drop for SpinlockGuard<'_, T> {
    fn drop(&mut self) {
        // The guard only exists while the lock is held
        unsafe { self.lock.release() }
    }
}

impl<T> Spinlock<T> {

    pub const fn new(data: T) -> Self {
        Spinlock {
            lock: RawSpinlock::new(),
            data: UnsafeCell::new(data)
        }
    }

    /// Spins until the lock is ours. Calling this again before the guard is
    /// dropped deadlocks.
    pub fn lock(&self) -> SpinlockGuard<'_, T> {
        self.lock.acquire();
        self.guard()
    }

    pub fn try_lock(&self) -> Result<SpinlockGuard<'_, T>, WouldBlock> {
        if self.lock.try_acquire() {
            Ok(self.guard())
        } else {
            Err(WouldBlock)
        }
    }

    pub fn is_locked(&self) -> bool {
        self.lock.is_locked()
    }

    pub fn get_mut(&mut self) -> &mut T {
        self.data.get_mut()
    }

    pub fn into_inner(self) -> T {
        self.data.into_inner()
    }

    // Caller must hold self.lock
    fn guard(&self) -> SpinlockGuard<'_, T> {
        SpinlockGuard { lock: &self.lock, data: unsafe { &mut *self.data.get() } }
    }
}

impl<T: Default> Default for Spinlock<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Spinlock<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.try_lock() {
            Ok(guard) => f.debug_struct("Spinlock").field("data", &*guard).finish(),
            Err(_) => f.debug_struct("Spinlock").field("data", &format_args!("<locked>")).finish()
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SpinlockGuard<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}
