//! Pointer lifecycle controller
//!
//! Turns pointer down/move/up into start/move/stop [`UpdateEvent`]s:
//!
//! 1. Pointer-down on the stick captures the pointer and the base bounds,
//!    registers global move/up listeners and emits `start`.
//! 2. Every accepted move is bounded to the control plane, classified,
//!    scheduled for the next animation frame and pushed through the throttle
//!    gate as a `move` event.
//! 3. Pointer-up releases the listeners and emits `stop`.
//!
//! In follow-cursor mode step 1 happens on [`Joystick::mount`] instead, pointer
//! ids are ignored and there is no up listener.
//!
//! Callbacks fire synchronously inside the triggering call. Visual state
//! (coordinates, dragging flag) is only committed in
//! [`Joystick::animation_frame`].

mod frame;
mod session;


use tracing::{debug, trace};

use crate::config::{ConfigError, JoystickConfig};
use crate::geometry::{classify_direction, distance, distance_to_percentile, shape_bounds, BoundsInput};
use crate::host::{FrameHandle, JoystickHost};
use crate::layout::{self, BaseLayout, StickLayout};
use crate::throttle::{Clock, SystemClock, ThrottleGate};
use crate::types::{EventType, JoystickCoordinates, PointerEvent, PointerId, UpdateEvent};

use frame::{CoordinateCommit, FrameCoalescer};
use session::InteractionSession;

/// Consumer callback for start/move/stop updates
pub type Callback = Box<dyn FnMut(&UpdateEvent)>;

/// Headless virtual joystick driven by pointer events
pub struct Joystick<H: JoystickHost, C: Clock = SystemClock> {
    config: JoystickConfig,
    host: H,
    session: InteractionSession,
    frames: FrameCoalescer,
    throttle: ThrottleGate<C>,
    /// Coordinates committed on the last animation frame
    coordinates: Option<JoystickCoordinates>,
    on_start: Option<Callback>,
    on_move: Option<Callback>,
    on_stop: Option<Callback>,
    mounted: bool,
}

impl<H: JoystickHost> Joystick<H, SystemClock> {
    /// Create a joystick throttled by the system clock
    pub fn new(config: JoystickConfig, host: H) -> Result<Self, ConfigError> {
        Self::with_clock(config, host, SystemClock::new())
    }
}

impl<H: JoystickHost, C: Clock> Joystick<H, C> {
    pub fn with_clock(config: JoystickConfig, host: H, clock: C) -> Result<Self, ConfigError> {
        config.validate()?;
        let throttle = ThrottleGate::new(config.throttle_ms, clock);
        Ok(Self {
            config,
            host,
            session: InteractionSession::default(),
            frames: FrameCoalescer::default(),
            throttle,
            coordinates: None,
            on_start: None,
            on_move: None,
            on_stop: None,
            mounted: false,
        })
    }

    pub fn on_start(mut self, callback: impl FnMut(&UpdateEvent) + 'static) -> Self {
        self.on_start = Some(Box::new(callback));
        self
    }

    pub fn on_move(mut self, callback: impl FnMut(&UpdateEvent) + 'static) -> Self {
        self.on_move = Some(Box::new(callback));
        self
    }

    pub fn on_stop(mut self, callback: impl FnMut(&UpdateEvent) + 'static) -> Self {
        self.on_stop = Some(Box::new(callback));
        self
    }

    /// Attach the joystick to its host
    ///
    /// In follow-cursor mode this starts tracking right away. Mounting twice
    /// is a no-op.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        if !self.config.follow_cursor {
            return;
        }
        let Some(bounds) = self.host.base_rect() else {
            debug!("Follow-cursor mount without a base element, not tracking");
            return;
        };

        self.session.begin(&mut self.host, bounds, None);
        debug!("Follow-cursor tracking started");
        emit(&mut self.on_start, UpdateEvent::empty(EventType::Start));
    }

    /// Detach from the host, releasing listeners and any pending frame
    ///
    /// Safe to call at any point, including mid-drag; also runs on drop.
    pub fn unmount(&mut self) {
        self.session.release_listeners(&mut self.host);
        self.frames.cancel(&mut self.host);
        if self.mounted || self.session.dragging {
            debug!("Joystick unmounted");
        }
        self.session.active_pointer = None;
        self.session.dragging = false;
        self.mounted = false;
    }

    /// Pointer pressed on the stick
    pub fn pointer_down(&mut self, event: &PointerEvent) {
        if self.config.disabled || self.config.follow_cursor {
            return;
        }
        if let Some(active) = self.session.active_pointer {
            trace!("Pointer {} ignored, gesture owned by {}", event.pointer_id, active);
            return;
        }
        let Some(bounds) = self.host.base_rect() else {
            return;
        };
        if !self.host.stick_mounted() {
            return;
        }

        // A release still waiting for its frame must not end this gesture
        self.frames.cancel_release();
        self.session.begin(&mut self.host, bounds, Some(event.pointer_id));
        self.host.set_pointer_capture(event.pointer_id);

        debug!("Pointer {} captured", event.pointer_id);
        emit(&mut self.on_start, UpdateEvent::empty(EventType::Start));
    }

    /// Global pointer move
    pub fn pointer_move(&mut self, event: &PointerEvent) {
        let Some(bounds) = self.session.parent_bounds else {
            return;
        };
        if !self.session.is_listening() {
            return;
        }
        if !self.config.follow_cursor && self.session.active_pointer != Some(event.pointer_id) {
            return;
        }

        let size = self.config.size;
        let radius = self.config.radius();
        let raw_x = event.client_x - bounds.left - radius;
        let raw_y = event.client_y - bounds.top - radius;
        let raw_distance = distance(raw_x, raw_y);

        let (relative_x, relative_y) = shape_bounds(&BoundsInput {
            shape: self.config.control_plane_shape,
            absolute_x: event.client_x,
            absolute_y: event.client_y,
            relative_x: raw_x,
            relative_y: raw_y,
            distance: raw_distance,
            radius,
            base_size: size,
            parent_rect: bounds,
        });

        let coordinates = JoystickCoordinates {
            relative_x,
            relative_y,
            axis_x: event.client_x - bounds.left,
            axis_y: event.client_y - bounds.top,
            direction: classify_direction(relative_x.atan2(relative_y)),
            distance: distance_to_percentile(raw_distance, size),
        };
        self.frames.schedule_coordinates(&mut self.host, coordinates);

        if let Some(min) = self.config.min_distance {
            if coordinates.distance < min {
                trace!("Move below min distance ({:.1} < {:.1})", coordinates.distance, min);
                return;
            }
        }

        let update = UpdateEvent::from_coordinates(EventType::Move, &coordinates, size);
        let on_move = &mut self.on_move;
        let forwarded = self.throttle.call(update, |e| emit(on_move, e));
        if !forwarded {
            trace!("Move throttled");
        }
    }

    /// Global pointer release
    pub fn pointer_up(&mut self, event: &PointerEvent) {
        if self.session.active_pointer != Some(event.pointer_id) {
            return;
        }

        let update = if self.config.sticky {
            match self.latest_coordinates() {
                Some(c) => UpdateEvent::stop_from_coordinates(&c, self.config.size),
                None => UpdateEvent::empty(EventType::Stop),
            }
        } else {
            UpdateEvent::empty(EventType::Stop)
        };

        self.frames.schedule_release(&mut self.host, !self.config.sticky);
        self.session.release_listeners(&mut self.host);
        self.session.active_pointer = None;

        debug!("Pointer {} released", event.pointer_id);
        emit(&mut self.on_stop, update);
    }

    /// Commit the pending visual state for the frame `handle`
    ///
    /// Handles that are stale or were cancelled are ignored.
    pub fn animation_frame(&mut self, handle: FrameHandle) {
        let Some(commit) = self.frames.take(handle) else {
            return;
        };
        match commit.coordinates {
            Some(CoordinateCommit::Set(c)) => self.coordinates = Some(c),
            Some(CoordinateCommit::Clear) => self.coordinates = None,
            None => {}
        }
        if commit.end_drag {
            self.session.dragging = false;
        }
    }

    /// Most recent coordinates, including ones still waiting for a frame
    fn latest_coordinates(&self) -> Option<JoystickCoordinates> {
        match self.frames.pending_coordinates() {
            Some(CoordinateCommit::Set(c)) => Some(c),
            Some(CoordinateCommit::Clear) => None,
            None => self.coordinates,
        }
    }

    /// Coordinates committed on the last frame, `None` when the stick is centered
    pub fn coordinates(&self) -> Option<&JoystickCoordinates> {
        self.coordinates.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.dragging
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn active_pointer(&self) -> Option<PointerId> {
        self.session.active_pointer
    }

    /// Outstanding animation-frame request
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.frames.handle()
    }

    pub fn config(&self) -> &JoystickConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn base_layout(&self) -> BaseLayout {
        layout::base_layout(&self.config)
    }

    pub fn stick_layout(&self) -> StickLayout {
        layout::stick_layout(&self.config, self.coordinates.as_ref())
    }
}

impl<H: JoystickHost, C: Clock> Drop for Joystick<H, C> {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn emit(callback: &mut Option<Callback>, event: UpdateEvent) {
    if let Some(cb) = callback.as_mut() {
        cb(&event);
    }
}
