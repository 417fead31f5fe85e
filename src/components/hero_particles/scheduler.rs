//! Frame scheduling capability.
//!
//! The field never calls `requestAnimationFrame` directly; it asks a
//! [`Scheduler`] for the next frame and keeps the returned handle so the loop
//! can be cancelled. Tests substitute a manually stepped scheduler.

/// Cancellation token for one scheduled frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Work to run on the next frame.
pub type FrameCallback = Box<dyn FnOnce()>;

pub trait Scheduler {
	/// Queues `callback` for the next frame. `None` if the host refused.
	fn request_frame(&self, callback: FrameCallback) -> Option<FrameHandle>;
	/// Drops a queued frame. Unknown or already-fired handles are ignored.
	fn cancel_frame(&self, handle: FrameHandle);
}
