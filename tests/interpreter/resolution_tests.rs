//! Operand resolution properties for `move` and `turn`.

use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;
use wirebot_foundation::{Direction, Vec3};
use wirebot_interpreter::{Handlers, Interpreter};

/// Runs a one-command batch and returns the vector the move handler saw.
fn captured_move(line: &str) -> Option<Vec3> {
    let captured = Rc::new(RefCell::new(None));
    let slot = Rc::clone(&captured);
    let mut interpreter =
        Interpreter::new(Handlers::new().on_move(move |v| *slot.borrow_mut() = Some(v)));
    interpreter.execute(line).expect("queued");
    interpreter.execute("end").expect("drained");
    let vector = *captured.borrow();
    vector
}

/// Runs a one-command batch and returns what the turn handler saw.
fn captured_turn(line: &str) -> Result<Option<f32>, wirebot_foundation::Error> {
    let captured = Rc::new(RefCell::new(None));
    let slot = Rc::clone(&captured);
    let mut interpreter =
        Interpreter::new(Handlers::new().on_turn(move |deg| *slot.borrow_mut() = Some(deg)));
    interpreter.execute(line).expect("queued");
    interpreter.execute("end")?;
    let degrees = *captured.borrow();
    Ok(degrees)
}

proptest! {
    #[test]
    fn move_vector_matches_direction_and_magnitude(
        direction in prop::sample::select(Direction::ALL.to_vec()),
        magnitude in 0.01f32..10_000.0,
    ) {
        let vector = captured_move(&format!("move {direction} {magnitude}"))
            .expect("move fired");
        prop_assert_eq!(vector, direction.vector(magnitude));
    }

    #[test]
    fn move_without_magnitude_defaults_to_one(
        direction in prop::sample::select(Direction::ALL.to_vec()),
    ) {
        let vector = captured_move(&format!("move {direction}")).expect("move fired");
        prop_assert_eq!(vector, direction.vector(1.0));
    }

    #[test]
    fn turn_left_is_positive_right_is_negative(degrees in -1000.0f32..1000.0) {
        let left = captured_turn(&format!("turn left {degrees}"))
            .expect("well-formed")
            .expect("turn fired");
        prop_assert_eq!(left, degrees);

        let right = captured_turn(&format!("turn right {degrees}"))
            .expect("well-formed")
            .expect("turn fired");
        prop_assert_eq!(right, -degrees);
    }

    #[test]
    fn non_numeric_turn_degrees_are_invalid(
        junk in "[a-zA-Z]{1,8}".prop_filter(
            "must not parse as a float",
            |s| s.parse::<f32>().is_err(),
        ),
    ) {
        let err = captured_turn(&format!("turn left {junk}")).expect_err("bad degrees");
        assert!(matches!(
            err.kind,
            wirebot_foundation::ErrorKind::InvalidOperand { .. }
        ));
    }
}
