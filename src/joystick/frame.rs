//! Frame-coalesced visual commits
//!
//! Pointer moves can arrive several times per frame. Only the latest
//! coordinates matter to the renderer, so updates are merged into a single
//! pending commit and at most one animation frame is requested for it.

use crate::host::{FrameHandle, JoystickHost};
use crate::types::JoystickCoordinates;

/// Change to the committed coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum CoordinateCommit {
    Set(JoystickCoordinates),
    Clear,
}

/// Visual state applied when the frame fires
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct PendingCommit {
    pub coordinates: Option<CoordinateCommit>,
    /// Drop the dragging flag
    pub end_drag: bool,
}

#[derive(Debug, Default)]
pub(crate) struct FrameCoalescer {
    handle: Option<FrameHandle>,
    pending: PendingCommit,
}

impl FrameCoalescer {
    /// Overwrite the pending coordinates
    pub fn schedule_coordinates<H: JoystickHost>(&mut self, host: &mut H, coordinates: JoystickCoordinates) {
        self.pending.coordinates = Some(CoordinateCommit::Set(coordinates));
        self.ensure_requested(host);
    }

    /// End the drag on the next frame, clearing the stick unless it is sticky
    pub fn schedule_release<H: JoystickHost>(&mut self, host: &mut H, clear: bool) {
        if clear {
            self.pending.coordinates = Some(CoordinateCommit::Clear);
        }
        self.pending.end_drag = true;
        self.ensure_requested(host);
    }

    /// Forget a release that has not been committed yet
    pub fn cancel_release(&mut self) {
        self.pending.end_drag = false;
    }

    fn ensure_requested<H: JoystickHost>(&mut self, host: &mut H) {
        if self.handle.is_none() {
            self.handle = Some(host.request_animation_frame());
        }
    }

    /// Take the pending commit if `handle` is the outstanding request
    pub fn take(&mut self, handle: FrameHandle) -> Option<PendingCommit> {
        if self.handle != Some(handle) {
            return None;
        }
        self.handle = None;
        Some(std::mem::take(&mut self.pending))
    }

    /// Cancel the outstanding request and drop its data
    pub fn cancel<H: JoystickHost>(&mut self, host: &mut H) {
        if let Some(handle) = self.handle.take() {
            host.cancel_animation_frame(handle);
        }
        self.pending = PendingCommit::default();
    }

    /// Coordinates change waiting for the next frame
    pub fn pending_coordinates(&self) -> Option<CoordinateCommit> {
        self.pending.coordinates
    }

    pub fn handle(&self) -> Option<FrameHandle> {
        self.handle
    }
}
