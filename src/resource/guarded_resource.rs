use core::cell::UnsafeCell;
use core::fmt;
#[cfg(feature = "std")]
use core::time::Duration;
#[cfg(feature = "std")]
use std::time::Instant;

use super::DefaultRawLock;
use crate::accessor::{
  ExclusiveAccessor, ExclusiveGuard, SharedAccessor, SharedGuard, UnsafeExclusiveAccessor,
  UnsafeSharedAccessor,
};
use crate::contract::{RawExclusiveLock, RawSharedLock, RawTryExclusiveLock, RawTrySharedLock};
#[cfg(feature = "std")]
use crate::contract::{RawTimedExclusiveLock, RawTimedSharedLock};

/// A value paired with a raw readers-writer lock, reachable only through
/// scoped accessors.
///
/// The resource owns exactly one payload and one lock for its whole life; the
/// lock is always default-constructed internally. Accessors borrow the
/// resource, so it cannot be dropped while any accessor it issued is alive.
///
/// The lock type is a compile-time parameter bounded by the capability
/// contract in [`contract`](crate::contract); the try and timed entry points
/// appear only when the supplied lock meets the stronger tiers.
///
/// # Fairness
///
/// No ordering policy of its own: acquisition order under contention is
/// whatever the supplied lock provides.
///
/// # Reentrancy
///
/// The reference lock implementations are non-reentrant. Acquiring a second
/// accessor (of any mode) on a thread that still holds one from the same
/// resource deadlocks, or is undefined for shared-then-shared reentry
/// depending on the lock. This is not detected; it is a caller obligation.
pub struct GuardedResource<T, L = DefaultRawLock>
where
  T: ?Sized, {
  lock: L,
  value: UnsafeCell<T>,
}

// Same bounds as the ecosystem's lock wrappers: handing the payload to
// another thread requires T: Send, and sharing the resource additionally
// requires T: Sync because readers alias it concurrently.
unsafe impl<T, L> Send for GuardedResource<T, L>
where
  T: ?Sized + Send,
  L: Send,
{
}

unsafe impl<T, L> Sync for GuardedResource<T, L>
where
  T: ?Sized + Send + Sync,
  L: Sync,
{
}

impl<T, L> GuardedResource<T, L>
where
  L: RawExclusiveLock,
{
  /// Creates a resource wrapping `value`, with a freshly created lock.
  #[must_use]
  pub fn new(value: T) -> Self {
    Self { lock: L::new(), value: UnsafeCell::new(value) }
  }
}

impl<T, L> GuardedResource<T, L> {
  /// Consumes the resource and returns the payload.
  ///
  /// Consuming `self` proves no accessor exists, so no lock capability is
  /// required.
  #[must_use]
  pub fn into_inner(self) -> T {
    self.value.into_inner()
  }
}

impl<T, L> GuardedResource<T, L>
where
  T: ?Sized,
{
  /// Returns a mutable reference to the payload without locking.
  ///
  /// Safe because the exclusive borrow of the resource proves no accessor
  /// exists.
  pub fn get_mut(&mut self) -> &mut T {
    self.value.get_mut()
  }

  /// Grants read-only access to the payload without touching the lock.
  ///
  /// Never blocks. This is an escape hatch for callers with out-of-band
  /// proof of exclusivity, such as single-threaded setup before the resource
  /// is shared.
  ///
  /// # Safety
  ///
  /// No thread may write the payload for as long as the returned handle (or
  /// anything borrowed from it) is alive.
  pub unsafe fn unsafe_read_access(&self) -> UnsafeSharedAccessor<'_, T> {
    UnsafeSharedAccessor::new(&*self.value.get())
  }

  /// Grants read-write access to the payload without touching the lock.
  ///
  /// Never blocks. This is an escape hatch for callers with out-of-band
  /// proof of exclusivity, such as single-threaded setup before the resource
  /// is shared.
  ///
  /// # Safety
  ///
  /// No other access to the payload — through accessors, this method, or
  /// [`unsafe_read_access`](Self::unsafe_read_access) — may exist for as
  /// long as the returned handle (or anything borrowed from it) is alive.
  pub unsafe fn unsafe_write_access(&self) -> UnsafeExclusiveAccessor<'_, T> {
    UnsafeExclusiveAccessor::new(&mut *self.value.get())
  }
}

impl<T, L> GuardedResource<T, L>
where
  T: ?Sized,
  L: RawSharedLock,
{
  /// Grants read-only access, blocking until no exclusive accessor remains.
  ///
  /// Any number of shared accessors may coexist.
  pub fn read_access(&self) -> SharedAccessor<'_, T, L> {
    let guard = SharedGuard::acquire(&self.lock);
    // Shared mode is held: concurrent reads are the only possible accesses.
    let value = unsafe { &*self.value.get() };
    SharedAccessor::from_parts(guard, value)
  }
}

impl<T, L> GuardedResource<T, L>
where
  T: ?Sized,
  L: RawExclusiveLock,
{
  /// Grants read-write access, blocking until no other accessor remains.
  ///
  /// At most one exclusive accessor exists at a time.
  pub fn write_access(&self) -> ExclusiveAccessor<'_, T, L> {
    let guard = ExclusiveGuard::acquire(&self.lock);
    // Exclusive mode is held: this is the only access.
    let value = unsafe { &mut *self.value.get() };
    ExclusiveAccessor::from_parts(guard, value)
  }
}

impl<T, L> GuardedResource<T, L>
where
  T: ?Sized,
  L: RawTrySharedLock,
{
  /// Attempts [`read_access`](Self::read_access) without blocking.
  ///
  /// Returns `None` when the lock could not be acquired; access is never
  /// partially granted.
  pub fn try_read_access(&self) -> Option<SharedAccessor<'_, T, L>> {
    let guard = SharedGuard::try_acquire(&self.lock)?;
    let value = unsafe { &*self.value.get() };
    Some(SharedAccessor::from_parts(guard, value))
  }
}

impl<T, L> GuardedResource<T, L>
where
  T: ?Sized,
  L: RawTryExclusiveLock,
{
  /// Attempts [`write_access`](Self::write_access) without blocking.
  ///
  /// Returns `None` when the lock could not be acquired; access is never
  /// partially granted.
  pub fn try_write_access(&self) -> Option<ExclusiveAccessor<'_, T, L>> {
    let guard = ExclusiveGuard::try_acquire(&self.lock)?;
    let value = unsafe { &mut *self.value.get() };
    Some(ExclusiveAccessor::from_parts(guard, value))
  }
}

#[cfg(feature = "std")]
impl<T, L> GuardedResource<T, L>
where
  T: ?Sized,
  L: RawTimedSharedLock,
{
  /// Attempts [`read_access`](Self::read_access), giving up after `timeout`.
  pub fn read_access_for(&self, timeout: Duration) -> Option<SharedAccessor<'_, T, L>> {
    let guard = SharedGuard::acquire_for(&self.lock, timeout)?;
    let value = unsafe { &*self.value.get() };
    Some(SharedAccessor::from_parts(guard, value))
  }

  /// Attempts [`read_access`](Self::read_access), giving up at `deadline`.
  pub fn read_access_until(&self, deadline: Instant) -> Option<SharedAccessor<'_, T, L>> {
    let guard = SharedGuard::acquire_until(&self.lock, deadline)?;
    let value = unsafe { &*self.value.get() };
    Some(SharedAccessor::from_parts(guard, value))
  }
}

#[cfg(feature = "std")]
impl<T, L> GuardedResource<T, L>
where
  T: ?Sized,
  L: RawTimedExclusiveLock,
{
  /// Attempts [`write_access`](Self::write_access), giving up after
  /// `timeout`.
  pub fn write_access_for(&self, timeout: Duration) -> Option<ExclusiveAccessor<'_, T, L>> {
    let guard = ExclusiveGuard::acquire_for(&self.lock, timeout)?;
    let value = unsafe { &mut *self.value.get() };
    Some(ExclusiveAccessor::from_parts(guard, value))
  }

  /// Attempts [`write_access`](Self::write_access), giving up at `deadline`.
  pub fn write_access_until(&self, deadline: Instant) -> Option<ExclusiveAccessor<'_, T, L>> {
    let guard = ExclusiveGuard::acquire_until(&self.lock, deadline)?;
    let value = unsafe { &mut *self.value.get() };
    Some(ExclusiveAccessor::from_parts(guard, value))
  }
}

impl<T, L> Default for GuardedResource<T, L>
where
  T: Default,
  L: RawExclusiveLock,
{
  fn default() -> Self {
    Self::new(T::default())
  }
}

impl<T, L> From<T> for GuardedResource<T, L>
where
  L: RawExclusiveLock,
{
  fn from(value: T) -> Self {
    Self::new(value)
  }
}

impl<T, L> fmt::Debug for GuardedResource<T, L>
where
  T: ?Sized + fmt::Debug,
  L: RawTrySharedLock,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut s = f.debug_struct("GuardedResource");
    match self.try_read_access() {
      Some(accessor) => s.field("value", &&*accessor),
      None => s.field("value", &format_args!("<locked>")),
    };
    s.finish()
  }
}
