#[cfg(feature = "std")]
use core::time::Duration;
#[cfg(feature = "std")]
use std::time::Instant;

use crate::contract::RawSharedLock;
#[cfg(feature = "std")]
use crate::contract::RawTimedSharedLock;
use crate::contract::RawTrySharedLock;

/// RAII token for shared ownership of a raw lock.
///
/// The lock is held from construction until drop. The guard is not copyable;
/// duplicating it would release the lock twice.
#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct SharedGuard<'a, L>
where
  L: RawSharedLock, {
  lock: &'a L,
}

impl<'a, L> SharedGuard<'a, L>
where
  L: RawSharedLock,
{
  /// Acquires shared ownership of `lock`, blocking until it is available.
  pub fn acquire(lock: &'a L) -> Self {
    lock.lock_shared();
    Self { lock }
  }

  /// Attempts to acquire shared ownership without blocking.
  pub fn try_acquire(lock: &'a L) -> Option<Self>
  where
    L: RawTrySharedLock, {
    lock.try_lock_shared().then(|| Self { lock })
  }

  /// Attempts to acquire shared ownership, giving up after `timeout`.
  #[cfg(feature = "std")]
  pub fn acquire_for(lock: &'a L, timeout: Duration) -> Option<Self>
  where
    L: RawTimedSharedLock, {
    lock.try_lock_shared_for(timeout).then(|| Self { lock })
  }

  /// Attempts to acquire shared ownership, giving up at `deadline`.
  #[cfg(feature = "std")]
  pub fn acquire_until(lock: &'a L, deadline: Instant) -> Option<Self>
  where
    L: RawTimedSharedLock, {
    lock.try_lock_shared_until(deadline).then(|| Self { lock })
  }
}

impl<L> Drop for SharedGuard<'_, L>
where
  L: RawSharedLock,
{
  fn drop(&mut self) {
    // Constructed only after a successful shared acquisition, and held
    // continuously since, so releasing here is sound.
    unsafe { self.lock.unlock_shared() };
  }
}
