// C entry points. A C caller declares
//
//     typedef volatile int spinlock_t;
//     void acquire_spinlock(spinlock_t *sp);
//     void release_spinlock(spinlock_t *sp);
//     bool try_acquire_spinlock(spinlock_t *sp);
//
// and zeroes the word before first use.

use crate::RawSpinlock;

#[allow(non_camel_case_types)]
pub type spinlock_t = RawSpinlock;

#[no_mangle]
pub extern "C" fn acquire_spinlock(lock: &spinlock_t) {
    lock.acquire();
}

/// # Safety
/// The calling context must hold `lock`.
#[no_mangle]
pub unsafe extern "C" fn release_spinlock(lock: &spinlock_t) {
    lock.release();
}

#[no_mangle]
pub extern "C" fn try_acquire_spinlock(lock: &spinlock_t) -> bool {
    lock.try_acquire()
}
