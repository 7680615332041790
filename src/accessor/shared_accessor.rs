use core::fmt;
use core::ops::Deref;

use super::SharedGuard;
use crate::contract::RawSharedLock;

/// Scoped handle granting read-only access to a guarded payload.
///
/// Holds a [`SharedGuard`] for its whole lifetime, so the payload cannot be
/// written by anyone while the accessor is alive. Any number of shared
/// accessors to the same resource may coexist. Member access goes through
/// deref coercion:
///
/// ```
/// use guarded_resource_rs::GuardedResource;
///
/// let resource = GuardedResource::<Vec<i32>>::new(vec![1, 2]);
/// let reader = resource.read_access();
/// assert_eq!(reader.len(), 2);
/// ```
///
/// Writing through a shared accessor does not compile:
///
/// ```compile_fail
/// use guarded_resource_rs::GuardedResource;
///
/// let resource = GuardedResource::<i32>::new(1);
/// let reader = resource.read_access();
/// *reader = 2;
/// ```
#[must_use = "the lock is released as soon as the accessor is dropped"]
pub struct SharedAccessor<'a, T, L>
where
  T: ?Sized,
  L: RawSharedLock, {
  _guard: SharedGuard<'a, L>,
  value: &'a T,
}

impl<'a, T, L> SharedAccessor<'a, T, L>
where
  T: ?Sized,
  L: RawSharedLock,
{
  /// Wraps an already-acquired guard together with the payload it protects.
  ///
  /// This is the adoption path for callers that pre-acquire a guard through
  /// a try or timed constructor on [`SharedGuard`].
  pub fn from_parts(guard: SharedGuard<'a, L>, value: &'a T) -> Self {
    Self { _guard: guard, value }
  }
}

impl<T, L> Deref for SharedAccessor<'_, T, L>
where
  T: ?Sized,
  L: RawSharedLock,
{
  type Target = T;

  fn deref(&self) -> &Self::Target {
    self.value
  }
}

impl<T, L> fmt::Debug for SharedAccessor<'_, T, L>
where
  T: ?Sized + fmt::Debug,
  L: RawSharedLock,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("SharedAccessor").field(&self.value).finish()
  }
}
