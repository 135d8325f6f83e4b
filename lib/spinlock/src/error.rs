use core::fmt;

/// Returned by [`Spinlock::try_lock`](crate::Spinlock::try_lock) when another
/// context holds the lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WouldBlock;

impl fmt::Display for WouldBlock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "lock is held by another context")
    }
}
