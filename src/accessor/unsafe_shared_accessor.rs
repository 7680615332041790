use core::fmt;
use core::ops::Deref;

/// Accessor-like handle granting read-only access without holding any lock.
///
/// Issued only by [`GuardedResource::unsafe_read_access`]. Never blocks and
/// never touches the lock's state; correctness rests entirely on the
/// exclusivity guarantee the caller made when obtaining it.
///
/// [`GuardedResource::unsafe_read_access`]: crate::resource::GuardedResource::unsafe_read_access
pub struct UnsafeSharedAccessor<'a, T>
where
  T: ?Sized, {
  value: &'a T,
}

impl<'a, T> UnsafeSharedAccessor<'a, T>
where
  T: ?Sized,
{
  pub(crate) fn new(value: &'a T) -> Self {
    Self { value }
  }
}

impl<T> Deref for UnsafeSharedAccessor<'_, T>
where
  T: ?Sized,
{
  type Target = T;

  fn deref(&self) -> &Self::Target {
    self.value
  }
}

impl<T> fmt::Debug for UnsafeSharedAccessor<'_, T>
where
  T: ?Sized + fmt::Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("UnsafeSharedAccessor").field(&self.value).finish()
  }
}
