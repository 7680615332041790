#![no_std]
#![deny(missing_docs)]

//! Thread-safe wrappers for arbitrary values, guarded by a pluggable
//! readers-writer lock and reachable only through scoped accessors.
//!
//! A [`GuardedResource`] owns a payload value together with a raw
//! readers-writer lock. The payload can only be reached through accessor
//! handles issued by the resource: a [`SharedAccessor`] grants read-only
//! access alongside any number of concurrent readers, an
//! [`ExclusiveAccessor`] grants read-write access to exactly one holder.
//! Acquisition happens when the accessor is created and release happens when
//! it is dropped, so a live accessor is always backed by a held lock.
//!
//! The lock is a compile-time parameter. Any raw lock implementing the
//! capability contract in [`contract`] can be plugged in; implementors of
//! [`lock_api::RawRwLock`] qualify automatically, so third-party locks need
//! no adaptation layer. The read/write distinction is carried by the accessor
//! types themselves, not by a runtime flag: mutating through a
//! [`SharedAccessor`] does not compile.
//!
//! ```
//! use guarded_resource_rs::GuardedResource;
//!
//! let resource: GuardedResource<Vec<&str>> = GuardedResource::default();
//! {
//!   let mut writer = resource.write_access();
//!   writer.push("x");
//! }
//! let reader = resource.read_access();
//! assert_eq!(reader.as_slice(), &["x"]);
//! ```
//!
//! # Hazards
//!
//! The reference lock implementations are non-reentrant: acquiring a second
//! accessor on a thread that still holds one from the same resource
//! deadlocks. The crate neither detects nor prevents this; see
//! [`GuardedResource`] for the full contract.

pub mod accessor;
pub mod contract;
pub mod resource;

pub use accessor::{
  ExclusiveAccessor, ExclusiveGuard, SharedAccessor, SharedGuard, UnsafeExclusiveAccessor,
  UnsafeSharedAccessor,
};
pub use contract::{
  RawExclusiveLock, RawSharedLock, RawTryExclusiveLock, RawTrySharedLock, SharedLockFamily,
  SpinLockFamily,
};
#[cfg(feature = "std")]
pub use contract::{DefaultLockFamily, RawTimedExclusiveLock, RawTimedSharedLock};
pub use resource::{DefaultRawLock, GuardedResource, SpinGuardedResource};

#[cfg(feature = "std")]
extern crate std;
