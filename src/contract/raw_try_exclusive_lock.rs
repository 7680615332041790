use super::RawExclusiveLock;

/// Raw lock additionally supporting non-blocking exclusive acquisition.
///
/// # Safety
///
/// As for [`RawExclusiveLock`]; a `true` return from `try_lock_exclusive`
/// must carry the same guarantees as a return from `lock_exclusive`.
pub unsafe trait RawTryExclusiveLock: RawExclusiveLock {
  /// Attempts to acquire exclusive ownership without blocking.
  ///
  /// Returns `true` when the lock was acquired.
  fn try_lock_exclusive(&self) -> bool;
}
