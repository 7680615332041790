use super::RawSharedLock;

/// Provides a constructor for the raw lock implementation a runtime injects.
pub trait SharedLockFamily {
  /// Concrete raw lock type produced by this family.
  type Lock: RawSharedLock;

  /// Creates a new raw lock in the unlocked state.
  fn create() -> Self::Lock;
}
