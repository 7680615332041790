use super::{RawExclusiveLock, SharedLockFamily};

/// Lock family backed by [`parking_lot::RawRwLock`], the default under `std`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultLockFamily;

impl SharedLockFamily for DefaultLockFamily {
  type Lock = parking_lot::RawRwLock;

  fn create() -> Self::Lock {
    <parking_lot::RawRwLock as RawExclusiveLock>::new()
  }
}
