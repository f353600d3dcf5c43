//! Touch Joystick - headless virtual joystick core
//!
//! Translates pointer events into a normalized stick vector (x, y in [-1, 1]),
//! a 4-way direction and a distance percentage, bounded by a circular, square
//! or single-axis control plane, with throttled move callbacks and optional
//! sticky and follow-cursor modes.
//!
//! Rendering is left to the embedder, which implements [`JoystickHost`] for
//! its platform (or uses [`HeadlessHost`]) and forwards pointer events.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use touch_joystick::{HeadlessHost, Joystick, JoystickConfig, PointerEvent, Rect};
//!
//! let moves = Rc::new(RefCell::new(Vec::new()));
//! let sink = moves.clone();
//!
//! let host = HeadlessHost::new(Rect::new(0.0, 0.0, 100.0, 100.0));
//! let mut joystick = Joystick::new(JoystickConfig::default(), host)
//!     .unwrap()
//!     .on_move(move |e| sink.borrow_mut().push(*e));
//!
//! joystick.pointer_down(&PointerEvent::new(1, 50.0, 50.0));
//! joystick.pointer_move(&PointerEvent::new(1, 75.0, 50.0));
//!
//! // Render loop: commit the coalesced visual update
//! if let Some(frame) = joystick.host_mut().take_frame_request() {
//!     joystick.animation_frame(frame);
//! }
//!
//! assert_eq!(moves.borrow()[0].x, Some(0.5));
//! assert!(joystick.coordinates().is_some());
//! ```

pub mod config;
pub mod geometry;
pub mod host;
pub mod joystick;
pub mod layout;
pub mod throttle;
pub mod types;

pub use config::{ConfigError, JoystickConfig, StickPosition};
pub use host::{FrameHandle, HeadlessHost, JoystickHost, ListenerId, ListenerKind};
pub use joystick::{Callback, Joystick};
pub use layout::{BaseLayout, StickLayout};
pub use throttle::{Clock, ManualClock, SystemClock, ThrottleGate};
pub use types::{
    Direction, EventType, JoystickCoordinates, PointerEvent, PointerId, Rect, Shape, UpdateEvent,
};
