//! Accessor handles bundling a held lock guard with typed access to the
//! guarded payload.
//!
//! An accessor owns its guard for its whole lifetime: the lock is acquired
//! when the accessor is created and released when it is dropped, never in
//! between. Read-only versus read-write access is a property of the accessor
//! type, not a runtime flag. Accessors are not copyable; moving one transfers
//! the guard and statically invalidates the source.

mod exclusive_accessor;
mod exclusive_guard;
mod shared_accessor;
mod shared_guard;
mod unsafe_exclusive_accessor;
mod unsafe_shared_accessor;

pub use exclusive_accessor::ExclusiveAccessor;
pub use exclusive_guard::ExclusiveGuard;
pub use shared_accessor::SharedAccessor;
pub use shared_guard::SharedGuard;
pub use unsafe_exclusive_accessor::UnsafeExclusiveAccessor;
pub use unsafe_shared_accessor::UnsafeSharedAccessor;

#[cfg(test)]
mod tests;
