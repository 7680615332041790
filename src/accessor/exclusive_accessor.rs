use core::fmt;
use core::ops::{Deref, DerefMut};

use super::ExclusiveGuard;
use crate::contract::RawExclusiveLock;

/// Scoped handle granting read-write access to a guarded payload.
///
/// Holds an [`ExclusiveGuard`] for its whole lifetime, so no other accessor
/// to the same resource can exist while this one is alive. Mutations become
/// visible to the next accessor acquired after this one is dropped.
///
/// ```
/// use guarded_resource_rs::GuardedResource;
///
/// let resource = GuardedResource::<i32>::new(1);
/// {
///   let mut writer = resource.write_access();
///   *writer += 1;
/// }
/// assert_eq!(*resource.read_access(), 2);
/// ```
#[must_use = "the lock is released as soon as the accessor is dropped"]
pub struct ExclusiveAccessor<'a, T, L>
where
  T: ?Sized,
  L: RawExclusiveLock, {
  _guard: ExclusiveGuard<'a, L>,
  value: &'a mut T,
}

impl<'a, T, L> ExclusiveAccessor<'a, T, L>
where
  T: ?Sized,
  L: RawExclusiveLock,
{
  /// Wraps an already-acquired guard together with the payload it protects.
  ///
  /// This is the adoption path for callers that pre-acquire a guard through
  /// a try or timed constructor on [`ExclusiveGuard`].
  pub fn from_parts(guard: ExclusiveGuard<'a, L>, value: &'a mut T) -> Self {
    Self { _guard: guard, value }
  }
}

impl<T, L> Deref for ExclusiveAccessor<'_, T, L>
where
  T: ?Sized,
  L: RawExclusiveLock,
{
  type Target = T;

  fn deref(&self) -> &Self::Target {
    self.value
  }
}

impl<T, L> DerefMut for ExclusiveAccessor<'_, T, L>
where
  T: ?Sized,
  L: RawExclusiveLock,
{
  fn deref_mut(&mut self) -> &mut Self::Target {
    self.value
  }
}

impl<T, L> fmt::Debug for ExclusiveAccessor<'_, T, L>
where
  T: ?Sized + fmt::Debug,
  L: RawExclusiveLock,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("ExclusiveAccessor").field(&self.value).finish()
  }
}
