//! The guarded resource: owner of the payload and the lock, sole issuer of
//! accessors.

mod default_raw_lock;
mod guarded_resource;
mod spin_guarded_resource;

pub use default_raw_lock::DefaultRawLock;
pub use guarded_resource::GuardedResource;
pub use spin_guarded_resource::SpinGuardedResource;
