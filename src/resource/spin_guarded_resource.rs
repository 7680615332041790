use super::GuardedResource;
use crate::contract::{SharedLockFamily, SpinLockFamily};

/// Guarded resource over the spinlock family, for no_std environments or
/// callers that want busy-wait acquisition regardless of platform.
pub type SpinGuardedResource<T> = GuardedResource<T, <SpinLockFamily as SharedLockFamily>::Lock>;
