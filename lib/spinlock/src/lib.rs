//! Busy-wait mutual exclusion for kernels and bare-metal code.
//!
//! [`RawSpinlock`] is a single zero-initialized word with `acquire` and
//! `release`. [`Spinlock`] wraps it together with the data it protects and
//! releases through a guard. With the `ffi` feature the same word is also
//! reachable from C as `spinlock_t`.
//!
//! There is no fairness, no reentrancy and no sleeping. Keep critical
//! sections short and never acquire a lock the current context already holds.

#![cfg_attr(not(test), no_std)]

mod raw;
mod lock;
mod error;

#[cfg(debug_assertions)]
mod debug;

#[cfg(feature = "ffi")]
mod ffi;

pub use raw::{RawSpinlock, SPIN_WARN_THRESHOLD};
pub use lock::{Spinlock, SpinlockGuard};
pub use error::WouldBlock;

#[cfg(feature = "ffi")]
pub use ffi::*;
