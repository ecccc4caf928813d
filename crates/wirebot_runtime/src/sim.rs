//! A simulated character for the headless host.
//!
//! Stands in for the game-side controller at the handler boundary: it walks
//! toward one destination at a time on the XZ plane, and the movement gate
//! stays closed while a walk is in progress. Used by `wirebot-host` and the
//! end-to-end tests; the real game registers its own handlers instead.

use std::cell::RefCell;
use std::rc::Rc;

use wirebot_foundation::Vec3;
use wirebot_interpreter::Handlers;

/// Ground distance covered per tick while walking.
const DEFAULT_STEP_LENGTH: f32 = 0.5;

/// A character with a position, a heading, and the boolean latches the
/// command set can flip.
#[derive(Debug)]
pub struct SimCharacter {
    position: Vec3,
    /// Heading in degrees; 0 faces +Z, positive degrees turn left.
    heading: f32,
    destination: Option<Vec3>,
    step_length: f32,
    signal_on: bool,
    marker_down: bool,
    beeps: u32,
    marker_strokes: u32,
}

impl Default for SimCharacter {
    fn default() -> Self {
        Self::new()
    }
}

impl SimCharacter {
    /// Creates a character at the origin, facing +Z.
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            heading: 0.0,
            destination: None,
            step_length: DEFAULT_STEP_LENGTH,
            signal_on: false,
            marker_down: false,
            beeps: 0,
            marker_strokes: 0,
        }
    }

    /// Sets the per-tick walking distance.
    #[must_use]
    pub fn with_step_length(mut self, step_length: f32) -> Self {
        self.step_length = step_length;
        self
    }

    /// The movement gate: free iff no walk is in progress.
    #[must_use]
    pub fn can_move(&self) -> bool {
        self.destination.is_none()
    }

    /// Starts walking to `position + delta`.
    pub fn walk_by(&mut self, delta: Vec3) {
        if delta == Vec3::ZERO {
            return;
        }
        let destination = self.position + delta;
        log::info!("walking from {} to {destination}", self.position);
        self.destination = Some(destination);
    }

    /// Starts walking along the current heading for `length` units.
    pub fn walk_ahead(&mut self, length: f32) {
        self.walk_by(self.heading_vector().scaled(length));
    }

    /// Rotates by signed degrees (positive turns left).
    pub fn turn(&mut self, degrees: f32) {
        self.heading = (self.heading + degrees).rem_euclid(360.0);
        log::info!("turned {degrees} degrees, now heading {}", self.heading);
    }

    /// Stops walking immediately.
    pub fn halt(&mut self) {
        if self.destination.take().is_some() {
            log::info!("halted at {}", self.position);
        }
    }

    /// Beeps.
    pub fn beep(&mut self) {
        self.beeps += 1;
        log::info!("beep!");
    }

    /// Raises or lowers the signal. Redundant transitions do nothing.
    pub fn set_signal(&mut self, on: bool) {
        if on == self.signal_on {
            return;
        }
        self.signal_on = on;
        log::info!("signal {}", if on { "raised" } else { "lowered" });
    }

    /// Puts the marker down or lifts it. Redundant transitions do nothing;
    /// each down-stroke starts a new trail.
    pub fn set_marker(&mut self, down: bool) {
        if down == self.marker_down {
            return;
        }
        self.marker_down = down;
        if down {
            self.marker_strokes += 1;
            log::info!("marker down, starting trail {}", self.marker_strokes);
        } else {
            log::info!("marker up");
        }
    }

    /// Advances one tick of walking, arriving exactly on the destination.
    pub fn step(&mut self) {
        let Some(destination) = self.destination else {
            return;
        };
        let to_go = destination - self.position;
        if to_go.length() <= self.step_length {
            self.position = destination;
            self.destination = None;
            log::info!("arrived at {}", self.position);
        } else {
            self.position += to_go.with_length(self.step_length);
        }
    }

    /// Current position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Current heading in degrees.
    #[must_use]
    pub fn heading(&self) -> f32 {
        self.heading
    }

    /// Number of beeps played.
    #[must_use]
    pub fn beeps(&self) -> u32 {
        self.beeps
    }

    /// Whether the signal is up.
    #[must_use]
    pub fn is_signal_on(&self) -> bool {
        self.signal_on
    }

    /// Whether the marker is down.
    #[must_use]
    pub fn is_marker_down(&self) -> bool {
        self.marker_down
    }

    /// Number of marker trails started.
    #[must_use]
    pub fn marker_strokes(&self) -> u32 {
        self.marker_strokes
    }

    /// Unit vector of the current heading on the XZ plane.
    fn heading_vector(&self) -> Vec3 {
        let radians = self.heading.to_radians();
        Vec3::new(radians.sin(), 0.0, radians.cos())
    }
}

/// Builds a dispatch table wired to a shared character.
#[must_use]
pub fn bind_character(character: &Rc<RefCell<SimCharacter>>) -> Handlers {
    Handlers::new()
        .on_can_move({
            let character = Rc::clone(character);
            move || character.borrow().can_move()
        })
        .on_move({
            let character = Rc::clone(character);
            move |delta| character.borrow_mut().walk_by(delta)
        })
        .on_move_current({
            let character = Rc::clone(character);
            move |length| character.borrow_mut().walk_ahead(length)
        })
        .on_turn({
            let character = Rc::clone(character);
            move |degrees| character.borrow_mut().turn(degrees)
        })
        .on_halt({
            let character = Rc::clone(character);
            move || character.borrow_mut().halt()
        })
        .on_beep({
            let character = Rc::clone(character);
            move || character.borrow_mut().beep()
        })
        .on_signal({
            let character = Rc::clone(character);
            move |on| character.borrow_mut().set_signal(on)
        })
        .on_marker({
            let character = Rc::clone(character);
            move |down| character.borrow_mut().set_marker(down)
        })
}
