#[cfg(feature = "std")]
use core::time::Duration;
#[cfg(feature = "std")]
use std::time::Instant;

use crate::contract::RawExclusiveLock;
#[cfg(feature = "std")]
use crate::contract::RawTimedExclusiveLock;
use crate::contract::RawTryExclusiveLock;

/// RAII token for exclusive ownership of a raw lock.
///
/// The lock is held from construction until drop. The guard is not copyable;
/// duplicating it would release the lock twice.
#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct ExclusiveGuard<'a, L>
where
  L: RawExclusiveLock, {
  lock: &'a L,
}

impl<'a, L> ExclusiveGuard<'a, L>
where
  L: RawExclusiveLock,
{
  /// Acquires exclusive ownership of `lock`, blocking until no other owner
  /// remains.
  pub fn acquire(lock: &'a L) -> Self {
    lock.lock_exclusive();
    Self { lock }
  }

  /// Attempts to acquire exclusive ownership without blocking.
  pub fn try_acquire(lock: &'a L) -> Option<Self>
  where
    L: RawTryExclusiveLock, {
    lock.try_lock_exclusive().then(|| Self { lock })
  }

  /// Attempts to acquire exclusive ownership, giving up after `timeout`.
  #[cfg(feature = "std")]
  pub fn acquire_for(lock: &'a L, timeout: Duration) -> Option<Self>
  where
    L: RawTimedExclusiveLock, {
    lock.try_lock_exclusive_for(timeout).then(|| Self { lock })
  }

  /// Attempts to acquire exclusive ownership, giving up at `deadline`.
  #[cfg(feature = "std")]
  pub fn acquire_until(lock: &'a L, deadline: Instant) -> Option<Self>
  where
    L: RawTimedExclusiveLock, {
    lock.try_lock_exclusive_until(deadline).then(|| Self { lock })
  }
}

impl<L> Drop for ExclusiveGuard<'_, L>
where
  L: RawExclusiveLock,
{
  fn drop(&mut self) {
    // Constructed only after a successful exclusive acquisition, and held
    // continuously since, so releasing here is sound.
    unsafe { self.lock.unlock_exclusive() };
  }
}
