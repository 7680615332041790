//! Blanket impls lifting `lock_api` raw locks into the capability hierarchy.
//!
//! `lock_api` is how the ecosystem's lock crates (parking_lot, spin, usync,
//! ...) expose their raw state machines, so bridging from it lets any of them
//! be supplied to a [`GuardedResource`] without an adaptation layer.
//!
//! [`GuardedResource`]: crate::resource::GuardedResource

#[cfg(feature = "std")]
use core::time::Duration;
#[cfg(feature = "std")]
use std::time::Instant;

use super::{RawExclusiveLock, RawSharedLock, RawTryExclusiveLock, RawTrySharedLock};
#[cfg(feature = "std")]
use super::{RawTimedExclusiveLock, RawTimedSharedLock};

unsafe impl<R> RawExclusiveLock for R
where
  R: lock_api::RawRwLock,
{
  fn new() -> Self
  where
    Self: Sized, {
    <R as lock_api::RawRwLock>::INIT
  }

  fn lock_exclusive(&self) {
    <R as lock_api::RawRwLock>::lock_exclusive(self);
  }

  unsafe fn unlock_exclusive(&self) {
    <R as lock_api::RawRwLock>::unlock_exclusive(self);
  }
}

unsafe impl<R> RawTryExclusiveLock for R
where
  R: lock_api::RawRwLock,
{
  fn try_lock_exclusive(&self) -> bool {
    <R as lock_api::RawRwLock>::try_lock_exclusive(self)
  }
}

unsafe impl<R> RawSharedLock for R
where
  R: lock_api::RawRwLock,
{
  fn lock_shared(&self) {
    <R as lock_api::RawRwLock>::lock_shared(self);
  }

  unsafe fn unlock_shared(&self) {
    <R as lock_api::RawRwLock>::unlock_shared(self);
  }
}

unsafe impl<R> RawTrySharedLock for R
where
  R: lock_api::RawRwLock,
{
  fn try_lock_shared(&self) -> bool {
    <R as lock_api::RawRwLock>::try_lock_shared(self)
  }
}

#[cfg(feature = "std")]
unsafe impl<R> RawTimedExclusiveLock for R
where
  R: lock_api::RawRwLockTimed<Duration = Duration, Instant = Instant>,
{
  fn try_lock_exclusive_for(&self, timeout: Duration) -> bool {
    <R as lock_api::RawRwLockTimed>::try_lock_exclusive_for(self, timeout)
  }

  fn try_lock_exclusive_until(&self, deadline: Instant) -> bool {
    <R as lock_api::RawRwLockTimed>::try_lock_exclusive_until(self, deadline)
  }
}

#[cfg(feature = "std")]
unsafe impl<R> RawTimedSharedLock for R
where
  R: lock_api::RawRwLockTimed<Duration = Duration, Instant = Instant>,
{
  fn try_lock_shared_for(&self, timeout: Duration) -> bool {
    <R as lock_api::RawRwLockTimed>::try_lock_shared_for(self, timeout)
  }

  fn try_lock_shared_until(&self, deadline: Instant) -> bool {
    <R as lock_api::RawRwLockTimed>::try_lock_shared_until(self, deadline)
  }
}
