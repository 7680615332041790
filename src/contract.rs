//! Capability contract for the raw locks a [`GuardedResource`] can be built
//! over.
//!
//! Each trait tier is a strict superset of the previous one. The tiers are
//! checked where the resource is instantiated, so supplying a lock that lacks
//! a required capability is rejected at compile time rather than at the point
//! of use. Implementors of [`lock_api::RawRwLock`] (and
//! [`lock_api::RawRwLockTimed`] for the timed tiers) are lifted into the
//! hierarchy by blanket impls, so any lock speaking the ecosystem contract
//! qualifies unmodified.
//!
//! [`GuardedResource`]: crate::resource::GuardedResource

#[cfg(feature = "std")]
mod default_lock_family;
mod lock_api_bridge;
mod raw_exclusive_lock;
mod raw_shared_lock;
#[cfg(feature = "std")]
mod raw_timed_exclusive_lock;
#[cfg(feature = "std")]
mod raw_timed_shared_lock;
mod raw_try_exclusive_lock;
mod raw_try_shared_lock;
mod shared_lock_family;
mod spin_lock_family;

#[cfg(feature = "std")]
pub use default_lock_family::DefaultLockFamily;
pub use raw_exclusive_lock::RawExclusiveLock;
pub use raw_shared_lock::RawSharedLock;
#[cfg(feature = "std")]
pub use raw_timed_exclusive_lock::RawTimedExclusiveLock;
#[cfg(feature = "std")]
pub use raw_timed_shared_lock::RawTimedSharedLock;
pub use raw_try_exclusive_lock::RawTryExclusiveLock;
pub use raw_try_shared_lock::RawTrySharedLock;
pub use shared_lock_family::SharedLockFamily;
pub use spin_lock_family::SpinLockFamily;

#[cfg(test)]
mod tests;
