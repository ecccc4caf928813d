//! The command dispatch table.
//!
//! The game-side controller binds one capability-typed callback per command
//! kind at start-up; dispatch routes through whatever is bound at call time.
//! An unbound slot makes its dispatch a no-op, never a crash.

use wirebot_foundation::Vec3;

/// Moves the character by a world-relative direction vector.
pub type MoveFn = Box<dyn FnMut(Vec3)>;
/// Moves the character along its current heading by a length.
pub type MoveCurrentFn = Box<dyn FnMut(f32)>;
/// Rotates the character by signed degrees (positive turns left).
pub type TurnFn = Box<dyn FnMut(f32)>;
/// Halts all movement.
pub type HaltFn = Box<dyn FnMut()>;
/// Plays the beep.
pub type BeepFn = Box<dyn FnMut()>;
/// Raises (`true`) or lowers (`false`) the signal.
pub type SignalFn = Box<dyn FnMut(bool)>;
/// Puts the marker down (`true`) or lifts it up (`false`).
pub type MarkerFn = Box<dyn FnMut(bool)>;
/// The movement gate: whether the character may start a new action now.
pub type CanMoveFn = Box<dyn FnMut() -> bool>;

/// The dispatch table: at most one handler per command kind, late-bound.
///
/// Built with the `on_*` methods:
///
/// ```
/// use wirebot_interpreter::Handlers;
///
/// let handlers = Handlers::new()
///     .on_beep(|| println!("beep!"))
///     .on_turn(|degrees| println!("turning {degrees}"));
/// ```
#[derive(Default)]
pub struct Handlers {
    move_to: Option<MoveFn>,
    move_current: Option<MoveCurrentFn>,
    turn: Option<TurnFn>,
    halt: Option<HaltFn>,
    beep: Option<BeepFn>,
    signal: Option<SignalFn>,
    marker: Option<MarkerFn>,
    can_move: Option<CanMoveFn>,
}

impl Handlers {
    /// Creates an empty dispatch table. Every dispatch is a no-op and the
    /// movement gate reads as open until handlers are bound.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds the directional move handler.
    #[must_use]
    pub fn on_move(mut self, handler: impl FnMut(Vec3) + 'static) -> Self {
        self.move_to = Some(Box::new(handler));
        self
    }

    /// Binds the current-heading move handler.
    #[must_use]
    pub fn on_move_current(mut self, handler: impl FnMut(f32) + 'static) -> Self {
        self.move_current = Some(Box::new(handler));
        self
    }

    /// Binds the turn handler.
    #[must_use]
    pub fn on_turn(mut self, handler: impl FnMut(f32) + 'static) -> Self {
        self.turn = Some(Box::new(handler));
        self
    }

    /// Binds the halt handler.
    #[must_use]
    pub fn on_halt(mut self, handler: impl FnMut() + 'static) -> Self {
        self.halt = Some(Box::new(handler));
        self
    }

    /// Binds the beep handler.
    #[must_use]
    pub fn on_beep(mut self, handler: impl FnMut() + 'static) -> Self {
        self.beep = Some(Box::new(handler));
        self
    }

    /// Binds the signal handler.
    #[must_use]
    pub fn on_signal(mut self, handler: impl FnMut(bool) + 'static) -> Self {
        self.signal = Some(Box::new(handler));
        self
    }

    /// Binds the marker handler.
    #[must_use]
    pub fn on_marker(mut self, handler: impl FnMut(bool) + 'static) -> Self {
        self.marker = Some(Box::new(handler));
        self
    }

    /// Binds the movement-gate predicate.
    ///
    /// The predicate must be cheap and side-effect-free: it is queried once
    /// per gated dispatch and once per pendant retry.
    #[must_use]
    pub fn on_can_move(mut self, predicate: impl FnMut() -> bool + 'static) -> Self {
        self.can_move = Some(Box::new(predicate));
        self
    }

    /// Queries the movement gate. An unbound gate reads as open.
    pub(crate) fn gate_open(&mut self) -> bool {
        match &mut self.can_move {
            Some(predicate) => predicate(),
            None => true,
        }
    }

    pub(crate) fn fire_move(&mut self, direction: Vec3) {
        match &mut self.move_to {
            Some(handler) => handler(direction),
            None => log::debug!("no move handler bound; dropping move {direction}"),
        }
    }

    pub(crate) fn fire_move_current(&mut self, length: f32) {
        match &mut self.move_current {
            Some(handler) => handler(length),
            None => log::debug!("no current-heading move handler bound; dropping move {length}"),
        }
    }

    pub(crate) fn fire_turn(&mut self, degrees: f32) {
        match &mut self.turn {
            Some(handler) => handler(degrees),
            None => log::debug!("no turn handler bound; dropping turn {degrees}"),
        }
    }

    pub(crate) fn fire_halt(&mut self) {
        match &mut self.halt {
            Some(handler) => handler(),
            None => log::debug!("no halt handler bound"),
        }
    }

    pub(crate) fn fire_beep(&mut self) {
        match &mut self.beep {
            Some(handler) => handler(),
            None => log::debug!("no beep handler bound"),
        }
    }

    pub(crate) fn fire_signal(&mut self, on: bool) {
        match &mut self.signal {
            Some(handler) => handler(on),
            None => log::debug!("no signal handler bound; dropping signal {on}"),
        }
    }

    pub(crate) fn fire_marker(&mut self, down: bool) {
        match &mut self.marker {
            Some(handler) => handler(down),
            None => log::debug!("no marker handler bound; dropping marker {down}"),
        }
    }
}

impl std::fmt::Debug for Handlers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handlers")
            .field("move", &self.move_to.is_some())
            .field("move_current", &self.move_current.is_some())
            .field("turn", &self.turn.is_some())
            .field("halt", &self.halt.is_some())
            .field("beep", &self.beep.is_some())
            .field("signal", &self.signal.is_some())
            .field("marker", &self.marker.is_some())
            .field("can_move", &self.can_move.is_some())
            .finish()
    }
}
