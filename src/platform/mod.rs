//! Platform abstraction layer
//!
//! The render loop is built on two host operations: "call me back before the
//! next repaint" and "forget that callback". On the web these are
//! `requestAnimationFrame` / `cancelAnimationFrame`; tests and the native
//! runner drive frames by hand.

#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::error::Result;

/// Identifies one requested frame to the game; stale tokens are ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameToken(pub u64);

/// Host-side id of a scheduled callback (the rAF request id on the web)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Schedules frame callbacks that deliver a [`FrameToken`] back to the game
pub trait FrameScheduler {
    fn request_frame(&mut self, token: FrameToken) -> Result<FrameHandle>;

    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Scheduler whose frames fire only when the owner asks
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_handle: i32,
    queued: Vec<(FrameHandle, FrameToken)>,
    cancelled: usize,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return every due frame, in request order
    pub fn take_due(&mut self) -> Vec<FrameToken> {
        self.queued.drain(..).map(|(_, token)| token).collect()
    }

    /// Tokens still waiting to fire
    pub fn pending_tokens(&self) -> Vec<FrameToken> {
        self.queued.iter().map(|(_, token)| *token).collect()
    }

    pub fn pending(&self) -> usize {
        self.queued.len()
    }

    /// How many callbacks have been cancelled so far
    pub fn cancelled(&self) -> usize {
        self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self, token: FrameToken) -> Result<FrameHandle> {
        self.next_handle += 1;
        let handle = FrameHandle(self.next_handle);
        self.queued.push((handle, token));
        Ok(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let before = self.queued.len();
        self.queued.retain(|(h, _)| *h != handle);
        if self.queued.len() != before {
            self.cancelled += 1;
        }
    }
}
