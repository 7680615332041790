/// Raw lock supporting blocking acquisition and release of exclusive
/// ownership.
///
/// This is the minimum capability tier. The lock carries no payload of its
/// own; it is pure synchronization state, default-constructed by
/// [`RawExclusiveLock::new`] and owned by whatever wraps it.
///
/// # Safety
///
/// Implementors must guarantee that at most one exclusive owner exists at a
/// time: `lock_exclusive` must not return while another thread holds the lock
/// in any mode, and `unlock_exclusive` must make the lock available again.
pub unsafe trait RawExclusiveLock {
  /// Creates the lock in the unlocked state.
  fn new() -> Self
  where
    Self: Sized;

  /// Acquires exclusive ownership, blocking the calling thread until it is
  /// available.
  fn lock_exclusive(&self);

  /// Releases exclusive ownership.
  ///
  /// # Safety
  ///
  /// The lock must be held exclusively by the current context.
  unsafe fn unlock_exclusive(&self);
}
