//! Platform seam for the joystick
//!
//! The joystick is headless. Everything it needs from the rendering layer
//! (element bounds, pointer capture, global listeners, animation frames) goes
//! through [`JoystickHost`]. A web integration maps these onto
//! `getBoundingClientRect`, `setPointerCapture`, `addEventListener` and
//! `requestAnimationFrame`; a render loop can use [`HeadlessHost`] and poll
//! [`HeadlessHost::take_frame_request`] once per frame.

use std::collections::BTreeMap;

use tracing::trace;

use crate::types::{PointerId, Rect};

/// Global pointer listener kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ListenerKind {
    PointerMove,
    PointerUp,
}

/// Handle of a registered global listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Handle of an outstanding animation-frame request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Services the joystick needs from its platform
pub trait JoystickHost {
    /// Current bounding rectangle of the base, `None` while it is not mounted
    fn base_rect(&self) -> Option<Rect>;

    /// Whether the stick element is mounted
    fn stick_mounted(&self) -> bool;

    /// Route subsequent events of `pointer_id` to the stick, even outside its bounds
    fn set_pointer_capture(&mut self, pointer_id: PointerId);

    /// Start delivering `kind` events globally
    fn add_listener(&mut self, kind: ListenerKind) -> ListenerId;

    fn remove_listener(&mut self, id: ListenerId);

    /// Ask for a callback on the next frame
    fn request_animation_frame(&mut self) -> FrameHandle;

    fn cancel_animation_frame(&mut self, handle: FrameHandle);
}

impl<T: JoystickHost + ?Sized> JoystickHost for &mut T {
    fn base_rect(&self) -> Option<Rect> {
        (**self).base_rect()
    }

    fn stick_mounted(&self) -> bool {
        (**self).stick_mounted()
    }

    fn set_pointer_capture(&mut self, pointer_id: PointerId) {
        (**self).set_pointer_capture(pointer_id)
    }

    fn add_listener(&mut self, kind: ListenerKind) -> ListenerId {
        (**self).add_listener(kind)
    }

    fn remove_listener(&mut self, id: ListenerId) {
        (**self).remove_listener(id)
    }

    fn request_animation_frame(&mut self) -> FrameHandle {
        (**self).request_animation_frame()
    }

    fn cancel_animation_frame(&mut self, handle: FrameHandle) {
        (**self).cancel_animation_frame(handle)
    }
}

/// In-memory host for render loops and tests
///
/// Records pointer captures and listener registrations, and holds at most
/// one outstanding frame request for the loop to pick up.
#[derive(Debug, Default)]
pub struct HeadlessHost {
    base_rect: Option<Rect>,
    stick_mounted: bool,
    captured: Vec<PointerId>,
    listeners: BTreeMap<ListenerId, ListenerKind>,
    next_listener: u64,
    pending_frame: Option<FrameHandle>,
    next_frame: u64,
    cancelled_frames: usize,
}

impl HeadlessHost {
    /// Host with a mounted base at `rect` and a mounted stick
    pub fn new(rect: Rect) -> Self {
        Self {
            base_rect: Some(rect),
            stick_mounted: true,
            ..Self::default()
        }
    }

    /// Host whose elements are not mounted yet
    pub fn unmounted() -> Self {
        Self::default()
    }

    /// Move or resize the base; takes effect on the next captured gesture
    pub fn set_base_rect(&mut self, rect: Option<Rect>) {
        self.base_rect = rect;
    }

    pub fn set_stick_mounted(&mut self, mounted: bool) {
        self.stick_mounted = mounted;
    }

    /// Take the outstanding frame request, if any
    ///
    /// The caller passes the handle back to `Joystick::animation_frame`.
    pub fn take_frame_request(&mut self) -> Option<FrameHandle> {
        self.pending_frame.take()
    }

    pub fn has_frame_request(&self) -> bool {
        self.pending_frame.is_some()
    }

    /// Pointers captured so far, oldest first
    pub fn captured_pointers(&self) -> &[PointerId] {
        &self.captured
    }

    /// Number of registered listeners of `kind`
    pub fn listener_count(&self, kind: ListenerKind) -> usize {
        self.listeners.values().filter(|k| **k == kind).count()
    }

    pub fn active_listeners(&self) -> usize {
        self.listeners.len()
    }

    pub fn cancelled_frames(&self) -> usize {
        self.cancelled_frames
    }
}

impl JoystickHost for HeadlessHost {
    fn base_rect(&self) -> Option<Rect> {
        self.base_rect
    }

    fn stick_mounted(&self) -> bool {
        self.stick_mounted
    }

    fn set_pointer_capture(&mut self, pointer_id: PointerId) {
        self.captured.push(pointer_id);
    }

    fn add_listener(&mut self, kind: ListenerKind) -> ListenerId {
        self.next_listener += 1;
        let id = ListenerId(self.next_listener);
        self.listeners.insert(id, kind);
        trace!("Registered {:?} listener {:?}", kind, id);
        id
    }

    fn remove_listener(&mut self, id: ListenerId) {
        if self.listeners.remove(&id).is_none() {
            trace!("Listener {:?} was not registered", id);
        }
    }

    fn request_animation_frame(&mut self) -> FrameHandle {
        self.next_frame += 1;
        let handle = FrameHandle(self.next_frame);
        self.pending_frame = Some(handle);
        handle
    }

    fn cancel_animation_frame(&mut self, handle: FrameHandle) {
        if self.pending_frame == Some(handle) {
            self.pending_frame = None;
        }
        self.cancelled_frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listener_bookkeeping() {
        let mut host = HeadlessHost::new(Rect::new(0.0, 0.0, 100.0, 100.0));

        let mv = host.add_listener(ListenerKind::PointerMove);
        let up = host.add_listener(ListenerKind::PointerUp);
        assert_ne!(mv, up);
        assert_eq!(host.listener_count(ListenerKind::PointerMove), 1);
        assert_eq!(host.active_listeners(), 2);

        host.remove_listener(mv);
        host.remove_listener(mv);
        assert_eq!(host.listener_count(ListenerKind::PointerMove), 0);
        assert_eq!(host.active_listeners(), 1);
    }

    #[test]
    fn test_frame_request_cycle() {
        let mut host = HeadlessHost::new(Rect::default());
        assert!(host.take_frame_request().is_none());

        let handle = host.request_animation_frame();
        assert!(host.has_frame_request());
        assert_eq!(host.take_frame_request(), Some(handle));
        assert!(!host.has_frame_request());

        let handle = host.request_animation_frame();
        host.cancel_animation_frame(handle);
        assert!(host.take_frame_request().is_none());
        assert_eq!(host.cancelled_frames(), 1);
    }

    #[test]
    fn test_unmounted_host() {
        let host = HeadlessHost::unmounted();
        assert!(host.base_rect().is_none());
        assert!(!host.stick_mounted());
    }
}
