use super::{RawSharedLock, RawTryExclusiveLock};

/// Raw readers-writer lock additionally supporting non-blocking acquisition
/// in both modes.
///
/// # Safety
///
/// As for [`RawSharedLock`]; a `true` return from `try_lock_shared` must
/// carry the same guarantees as a return from `lock_shared`.
pub unsafe trait RawTrySharedLock: RawSharedLock + RawTryExclusiveLock {
  /// Attempts to acquire shared ownership without blocking.
  ///
  /// Returns `true` when the lock was acquired.
  fn try_lock_shared(&self) -> bool;
}
