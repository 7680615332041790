use super::{ExclusiveAccessor, ExclusiveGuard, SharedAccessor, SharedGuard};
use crate::contract::{RawExclusiveLock, RawSharedLock, RawTryExclusiveLock, RawTrySharedLock};

type SpinLock = spin::RwLock<()>;

fn new_lock() -> SpinLock {
  RawExclusiveLock::new()
}

#[test]
fn shared_guard_holds_lock_until_drop() {
  let lock = new_lock();
  let guard = SharedGuard::acquire(&lock);
  assert!(!lock.try_lock_exclusive());
  drop(guard);
  assert!(lock.try_lock_exclusive());
  unsafe { lock.unlock_exclusive() };
}

#[test]
fn shared_guards_coexist() {
  let lock = new_lock();
  let first = SharedGuard::acquire(&lock);
  let second = SharedGuard::acquire(&lock);
  assert!(!lock.try_lock_exclusive());
  drop(first);
  assert!(!lock.try_lock_exclusive());
  drop(second);
  assert!(lock.try_lock_exclusive());
  unsafe { lock.unlock_exclusive() };
}

#[test]
fn exclusive_guard_excludes_everything() {
  let lock = new_lock();
  let guard = ExclusiveGuard::acquire(&lock);
  assert!(!lock.try_lock_shared());
  assert!(!lock.try_lock_exclusive());
  drop(guard);
  assert!(lock.try_lock_shared());
  unsafe { lock.unlock_shared() };
}

#[test]
fn try_acquire_reports_contention() {
  let lock = new_lock();
  let held = ExclusiveGuard::acquire(&lock);
  assert!(SharedGuard::try_acquire(&lock).is_none());
  assert!(ExclusiveGuard::try_acquire(&lock).is_none());
  drop(held);
  assert!(SharedGuard::try_acquire(&lock).is_some());
}

#[test]
fn shared_accessor_adopts_preacquired_guard() {
  let lock = new_lock();
  let value = 7_u32;
  let guard = SharedGuard::try_acquire(&lock).expect("lock is free");
  let accessor = SharedAccessor::from_parts(guard, &value);
  assert_eq!(*accessor, 7);
  assert!(!lock.try_lock_exclusive());
  drop(accessor);
  assert!(lock.try_lock_exclusive());
  unsafe { lock.unlock_exclusive() };
}

#[test]
fn exclusive_accessor_adopts_preacquired_guard() {
  let lock = new_lock();
  let mut value = 7_u32;
  let guard = ExclusiveGuard::try_acquire(&lock).expect("lock is free");
  let mut accessor = ExclusiveAccessor::from_parts(guard, &mut value);
  *accessor += 1;
  drop(accessor);
  assert_eq!(value, 8);
}

#[test]
fn accessor_forwards_member_access() {
  let lock = new_lock();
  let value = [1_i32, 2, 3];
  let accessor = SharedAccessor::from_parts(SharedGuard::acquire(&lock), &value[..]);
  assert_eq!(accessor.len(), 3);
  assert_eq!(accessor.first(), Some(&1));
}

#[test]
fn moving_accessor_keeps_lock_held() {
  let lock = new_lock();
  let value = 1_u32;
  let accessor = SharedAccessor::from_parts(SharedGuard::acquire(&lock), &value);
  let moved = accessor;
  assert!(!lock.try_lock_exclusive());
  assert_eq!(*moved, 1);
  drop(moved);
  assert!(lock.try_lock_exclusive());
  unsafe { lock.unlock_exclusive() };
}

#[cfg(feature = "std")]
#[test]
fn timed_acquisition_times_out_under_writer() {
  use core::time::Duration;

  let lock: parking_lot::RawRwLock = RawExclusiveLock::new();
  let held = ExclusiveGuard::acquire(&lock);
  assert!(SharedGuard::acquire_for(&lock, Duration::from_millis(5)).is_none());
  assert!(ExclusiveGuard::acquire_for(&lock, Duration::from_millis(5)).is_none());
  drop(held);
  assert!(SharedGuard::acquire_for(&lock, Duration::from_millis(5)).is_some());
}

#[cfg(feature = "std")]
#[test]
fn deadline_acquisition_times_out_under_writer() {
  use core::time::Duration;
  use std::time::Instant;

  let lock: parking_lot::RawRwLock = RawExclusiveLock::new();
  let held = ExclusiveGuard::acquire(&lock);
  let deadline = Instant::now() + Duration::from_millis(5);
  assert!(ExclusiveGuard::acquire_until(&lock, deadline).is_none());
  drop(held);
  let deadline = Instant::now() + Duration::from_millis(5);
  assert!(SharedGuard::acquire_until(&lock, deadline).is_some());
}

#[cfg(feature = "std")]
#[test]
fn accessor_debug_shows_value() {
  use std::format;

  let lock = new_lock();
  let value = 42_u32;
  let accessor = SharedAccessor::from_parts(SharedGuard::acquire(&lock), &value);
  let rendered = format!("{accessor:?}");
  assert!(rendered.contains("SharedAccessor"));
  assert!(rendered.contains("42"));
}
