use core::time::Duration;
use std::time::Instant;

use super::{RawTimedExclusiveLock, RawTrySharedLock};

/// Raw readers-writer lock additionally supporting timed acquisition in both
/// modes.
///
/// # Safety
///
/// As for [`RawTrySharedLock`]; a `true` return must carry the same
/// guarantees as a return from the corresponding blocking acquisition.
pub unsafe trait RawTimedSharedLock: RawTrySharedLock + RawTimedExclusiveLock {
  /// Attempts to acquire shared ownership, giving up after `timeout`.
  fn try_lock_shared_for(&self, timeout: Duration) -> bool;

  /// Attempts to acquire shared ownership, giving up at `deadline`.
  fn try_lock_shared_until(&self, deadline: Instant) -> bool;
}
