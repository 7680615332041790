use super::{RawExclusiveLock, SharedLockFamily};

/// Lock family backed by [`spin::RwLock`], suited for no_std environments.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpinLockFamily;

impl SharedLockFamily for SpinLockFamily {
  type Lock = spin::RwLock<()>;

  fn create() -> Self::Lock {
    <spin::RwLock<()> as RawExclusiveLock>::new()
  }
}
