use core::fmt;
use core::ops::{Deref, DerefMut};

/// Accessor-like handle granting read-write access without holding any lock.
///
/// Issued only by [`GuardedResource::unsafe_write_access`]. Never blocks and
/// never touches the lock's state; correctness rests entirely on the
/// exclusivity guarantee the caller made when obtaining it.
///
/// [`GuardedResource::unsafe_write_access`]: crate::resource::GuardedResource::unsafe_write_access
pub struct UnsafeExclusiveAccessor<'a, T>
where
  T: ?Sized, {
  value: &'a mut T,
}

impl<'a, T> UnsafeExclusiveAccessor<'a, T>
where
  T: ?Sized,
{
  pub(crate) fn new(value: &'a mut T) -> Self {
    Self { value }
  }
}

impl<T> Deref for UnsafeExclusiveAccessor<'_, T>
where
  T: ?Sized,
{
  type Target = T;

  fn deref(&self) -> &Self::Target {
    self.value
  }
}

impl<T> DerefMut for UnsafeExclusiveAccessor<'_, T>
where
  T: ?Sized,
{
  fn deref_mut(&mut self) -> &mut Self::Target {
    self.value
  }
}

impl<T> fmt::Debug for UnsafeExclusiveAccessor<'_, T>
where
  T: ?Sized + fmt::Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("UnsafeExclusiveAccessor").field(&self.value).finish()
  }
}
