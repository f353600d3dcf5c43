//! Interaction session state
//!
//! Owned by the joystick for the lifetime of one gesture (or of follow-cursor
//! mode while mounted).

use crate::host::{JoystickHost, ListenerId, ListenerKind};
use crate::types::{PointerId, Rect};

#[derive(Debug, Default)]
pub(crate) struct InteractionSession {
    /// Pointer owning the gesture; `None` in follow-cursor mode
    pub active_pointer: Option<PointerId>,
    /// Base bounds captured at gesture start, stale until the next one
    pub parent_bounds: Option<Rect>,
    pub dragging: bool,
    move_listener: Option<ListenerId>,
    up_listener: Option<ListenerId>,
}

impl InteractionSession {
    /// Capture `bounds` and register the global listeners for a new gesture
    ///
    /// A follow-cursor gesture passes no pointer and gets no up listener.
    pub fn begin<H: JoystickHost>(&mut self, host: &mut H, bounds: Rect, pointer: Option<PointerId>) {
        self.parent_bounds = Some(bounds);
        self.dragging = true;
        self.active_pointer = pointer;

        if self.move_listener.is_none() {
            self.move_listener = Some(host.add_listener(ListenerKind::PointerMove));
        }
        if pointer.is_some() && self.up_listener.is_none() {
            self.up_listener = Some(host.add_listener(ListenerKind::PointerUp));
        }
    }

    /// Deregister whatever listeners are still registered, each exactly once
    pub fn release_listeners<H: JoystickHost>(&mut self, host: &mut H) {
        if let Some(id) = self.up_listener.take() {
            host.remove_listener(id);
        }
        if let Some(id) = self.move_listener.take() {
            host.remove_listener(id);
        }
    }

    pub fn is_listening(&self) -> bool {
        self.move_listener.is_some()
    }
}
