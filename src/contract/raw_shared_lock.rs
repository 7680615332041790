use super::RawExclusiveLock;

/// Raw readers-writer lock: exclusive ownership plus blocking acquisition
/// and release of shared ownership.
///
/// This is the tier a [`GuardedResource`] requires by default.
///
/// # Safety
///
/// Implementors must guarantee readers-writer mutual exclusion: any number of
/// shared owners may coexist, an exclusive owner excludes everything else,
/// and `lock_shared` must not return while an exclusive owner exists.
///
/// [`GuardedResource`]: crate::resource::GuardedResource
pub unsafe trait RawSharedLock: RawExclusiveLock {
  /// Acquires shared ownership, blocking the calling thread until no
  /// exclusive owner remains.
  fn lock_shared(&self);

  /// Releases one shared ownership.
  ///
  /// # Safety
  ///
  /// The lock must be held in shared mode by the current context.
  unsafe fn unlock_shared(&self);
}
