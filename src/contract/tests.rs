use core::sync::atomic::{AtomicBool, Ordering};

use super::{RawExclusiveLock, RawSharedLock, RawTryExclusiveLock, RawTrySharedLock};
use super::{SharedLockFamily, SpinLockFamily};

/// Exclusive-only lock implemented directly against the contract, without
/// going through `lock_api`.
struct FlagLock(AtomicBool);

unsafe impl RawExclusiveLock for FlagLock {
  fn new() -> Self {
    Self(AtomicBool::new(false))
  }

  fn lock_exclusive(&self) {
    while self
      .0
      .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
      .is_err()
    {
      core::hint::spin_loop();
    }
  }

  unsafe fn unlock_exclusive(&self) {
    self.0.store(false, Ordering::Release);
  }
}

fn assert_shared_lock<L: RawSharedLock>() {}
fn assert_try_shared_lock<L: RawTrySharedLock>() {}

#[test]
fn spin_lock_satisfies_shared_tiers() {
  assert_shared_lock::<spin::RwLock<()>>();
  assert_try_shared_lock::<spin::RwLock<()>>();
}

#[cfg(feature = "std")]
#[test]
fn parking_lot_lock_satisfies_all_tiers() {
  use super::{RawTimedExclusiveLock, RawTimedSharedLock};

  fn assert_timed_shared_lock<L: RawTimedSharedLock>() {}
  fn assert_timed_exclusive_lock<L: RawTimedExclusiveLock>() {}

  assert_shared_lock::<parking_lot::RawRwLock>();
  assert_try_shared_lock::<parking_lot::RawRwLock>();
  assert_timed_exclusive_lock::<parking_lot::RawRwLock>();
  assert_timed_shared_lock::<parking_lot::RawRwLock>();
}

#[test]
fn directly_implemented_lock_qualifies() {
  let lock = FlagLock::new();
  lock.lock_exclusive();
  unsafe { lock.unlock_exclusive() };
  lock.lock_exclusive();
  unsafe { lock.unlock_exclusive() };
}

#[test]
fn spin_family_creates_functional_lock() {
  let lock = SpinLockFamily::create();
  lock.lock_shared();
  assert!(!lock.try_lock_exclusive());
  unsafe { lock.unlock_shared() };
  assert!(lock.try_lock_exclusive());
  unsafe { lock.unlock_exclusive() };
}

#[cfg(feature = "std")]
#[test]
fn default_family_creates_functional_lock() {
  use super::DefaultLockFamily;

  let lock = DefaultLockFamily::create();
  lock.lock_exclusive();
  assert!(!lock.try_lock_shared());
  unsafe { lock.unlock_exclusive() };
  assert!(lock.try_lock_shared());
  unsafe { lock.unlock_shared() };
}

#[cfg(feature = "std")]
#[test]
fn timed_acquisition_succeeds_on_free_lock() {
  use core::time::Duration;

  use super::RawTimedSharedLock;

  let lock = super::DefaultLockFamily::create();
  assert!(lock.try_lock_shared_for(Duration::from_millis(10)));
  unsafe { lock.unlock_shared() };
}
