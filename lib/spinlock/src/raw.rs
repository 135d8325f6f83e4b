use core::fmt;
use core::hint;
use core::sync::atomic::{self, AtomicU32, Ordering};

#[cfg(debug_assertions)]
use crate::debug;

pub(crate) const FREE: u32 = 0;
pub(crate) const HELD: u32 = 1;

/// Read-phase polls in a single `acquire` before debug builds log a warning.
/// Release builds never count.
pub const SPIN_WARN_THRESHOLD: usize = 1 << 26;

// Layout is shared with C `int` through spinlock_t
const _: () = {
    assert!(core::mem::size_of::<RawSpinlock>() == 4);
    assert!(core::mem::align_of::<RawSpinlock>() == 4);
};

/// The lock word: 0 when free, 1 when held.
///
/// All-zero memory is a valid free lock, so a `RawSpinlock` may live in
/// `.bss`, in memory from a zeroing allocator, or in a `static` built with
/// [`RawSpinlock::new`]. Nothing is owned, so nothing needs tearing down.
///
/// The lock stores no owner. Acquiring it twice from the same context hangs
/// that context forever, and releasing it from a context that does not hold
/// it breaks mutual exclusion for everyone. Both are the caller's problem.
///
/// ```
/// use spinlock::RawSpinlock;
///
/// static LOCK: RawSpinlock = RawSpinlock::new();
///
/// LOCK.acquire();
/// // critical section
/// unsafe { LOCK.release() };
/// ```
#[repr(transparent)]
pub struct RawSpinlock(AtomicU32);

impl RawSpinlock {
    #[allow(clippy::declare_interior_mutable_const)]
    pub const INIT: RawSpinlock = RawSpinlock::new();

    /// A free lock. Same bit pattern as zeroed memory.
    pub const fn new() -> Self {
        Self(AtomicU32::new(FREE))
    }

    /// Views a word owned elsewhere as a lock.
    ///
    /// # Safety
    /// `ptr` must be non-null, 4-byte aligned, already zero (or otherwise a
    /// valid lock state) and valid for `'a`. For that whole lifetime every
    /// access to the word must go through a `RawSpinlock` or `spinlock_t`.
    pub unsafe fn from_ptr<'a>(ptr: *mut u32) -> &'a RawSpinlock {
        &*ptr.cast::<RawSpinlock>()
    }

    /// Spins until the calling context owns the lock.
    ///
    /// Waiters first poll with plain loads so they spin against their own
    /// cached copy of the line, and only issue a compare-and-swap once the
    /// word reads free. No fairness: whichever waiter wins the CAS gets it.
    pub fn acquire(&self) {
        #[cfg(debug_assertions)]
        let mut watchdog = debug::SpinWatchdog::new(self);

        loop {
            // Read-only poll, no coherence writes while someone holds it
            while self.0.load(Ordering::Relaxed) != FREE {
                #[cfg(debug_assertions)]
                watchdog.tick();

                hint::spin_loop();
            }

            if self.0
                .compare_exchange_weak(FREE, HELD, Ordering::Acquire, Ordering::Relaxed)
                .is_ok()
            {
                return;
            }
        }
    }

    /// Single attempt to take the lock. Never spins.
    pub fn try_acquire(&self) -> bool {
        self.0
            .compare_exchange(FREE, HELD, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
    }

    /// Marks the lock free and publishes every write made while holding it.
    ///
    /// # Safety
    /// The calling context must hold the lock. Release builds do not check;
    /// debug builds panic if the lock was already free.
    pub unsafe fn release(&self) {
        #[cfg(debug_assertions)]
        debug::check_release(self, self.0.swap(FREE, Ordering::Release));

        #[cfg(not(debug_assertions))]
        self.0.store(FREE, Ordering::Release);

        atomic::fence(Ordering::SeqCst);
    }

    /// Snapshot of the word. Stale as soon as it returns; never use it to
    /// decide whether to enter a critical section.
    pub fn is_locked(&self) -> bool {
        self.0.load(Ordering::Relaxed) != FREE
    }
}

impl Default for RawSpinlock {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RawSpinlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawSpinlock")
            .field("locked", &self.is_locked())
            .finish()
    }
}
