#[cfg(feature = "std")]
use crate::contract::DefaultLockFamily;
use crate::contract::SharedLockFamily;
#[cfg(not(feature = "std"))]
use crate::contract::SpinLockFamily;

/// Raw lock a [`GuardedResource`](crate::resource::GuardedResource) uses when
/// none is named: parking_lot under `std`, a spinlock otherwise.
#[cfg(feature = "std")]
pub type DefaultRawLock = <DefaultLockFamily as SharedLockFamily>::Lock;

/// Raw lock a [`GuardedResource`](crate::resource::GuardedResource) uses when
/// none is named: parking_lot under `std`, a spinlock otherwise.
#[cfg(not(feature = "std"))]
pub type DefaultRawLock = <SpinLockFamily as SharedLockFamily>::Lock;
