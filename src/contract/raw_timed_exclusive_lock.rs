use core::time::Duration;
use std::time::Instant;

use super::RawTryExclusiveLock;

/// Raw lock additionally supporting timed exclusive acquisition, against a
/// relative timeout or an absolute deadline.
///
/// # Safety
///
/// As for [`RawTryExclusiveLock`]; a `true` return must carry the same
/// guarantees as a return from `lock_exclusive`.
pub unsafe trait RawTimedExclusiveLock: RawTryExclusiveLock {
  /// Attempts to acquire exclusive ownership, giving up after `timeout`.
  fn try_lock_exclusive_for(&self, timeout: Duration) -> bool;

  /// Attempts to acquire exclusive ownership, giving up at `deadline`.
  fn try_lock_exclusive_until(&self, deadline: Instant) -> bool;
}
