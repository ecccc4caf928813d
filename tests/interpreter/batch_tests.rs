//! Batch semantics.

use std::cell::RefCell;
use std::rc::Rc;

use wirebot_foundation::Vec3;
use wirebot_interpreter::{Handlers, Interpreter};

/// Interpreter whose handlers append labels to a shared event log.
fn logging_interpreter() -> (Interpreter, Rc<RefCell<Vec<String>>>) {
    let events = Rc::new(RefCell::new(Vec::new()));
    let handlers = Handlers::new()
        .on_move({
            let events = Rc::clone(&events);
            move |v: Vec3| events.borrow_mut().push(format!("move {v}"))
        })
        .on_move_current({
            let events = Rc::clone(&events);
            move |len| events.borrow_mut().push(format!("ahead {len}"))
        })
        .on_turn({
            let events = Rc::clone(&events);
            move |deg| events.borrow_mut().push(format!("turn {deg}"))
        })
        .on_halt({
            let events = Rc::clone(&events);
            move || events.borrow_mut().push("halt".into())
        })
        .on_beep({
            let events = Rc::clone(&events);
            move || events.borrow_mut().push("beep".into())
        })
        .on_signal({
            let events = Rc::clone(&events);
            move |on| events.borrow_mut().push(format!("signal {on}"))
        })
        .on_marker({
            let events = Rc::clone(&events);
            move |down| events.borrow_mut().push(format!("marker {down}"))
        });
    (Interpreter::new(handlers), events)
}

#[test]
fn batch_runs_in_order_only_after_end() {
    let (mut interpreter, events) = logging_interpreter();

    interpreter.execute("move up 3").expect("queued");
    interpreter.execute("turn left 90").expect("queued");
    assert!(events.borrow().is_empty());

    interpreter.execute("end").expect("drained");
    assert_eq!(*events.borrow(), vec!["move (3, 0, 0)", "turn 90"]);
    assert_eq!(interpreter.batched(), 0);
}

#[test]
fn malformed_lines_never_reach_the_batch() {
    let (mut interpreter, events) = logging_interpreter();

    interpreter.execute("bogus").expect("swallowed");
    interpreter.execute("move up 1").expect("queued");
    interpreter.execute("end").expect("drained");

    assert_eq!(events.borrow().len(), 1);
    assert!(events.borrow()[0].starts_with("move"));
}

#[test]
fn every_action_kind_dispatches() {
    let (mut interpreter, events) = logging_interpreter();

    for line in [
        "move down 2",
        "move 4",
        "turn right 30",
        "stop",
        "beep",
        "signal on",
        "marker down",
        "end",
    ] {
        interpreter.execute(line).expect("well-formed batch");
    }

    assert_eq!(
        *events.borrow(),
        vec![
            "move (-2, 0, 0)",
            "ahead 4",
            "turn -30",
            "halt",
            "beep",
            "signal true",
            "marker true",
        ]
    );
}

#[test]
fn consecutive_batches_are_independent() {
    let (mut interpreter, events) = logging_interpreter();

    interpreter.execute("beep").expect("queued");
    interpreter.execute("end").expect("drained");
    interpreter.execute("stop").expect("queued");
    interpreter.execute("end").expect("drained");

    assert_eq!(*events.borrow(), vec!["beep", "halt"]);
}

#[test]
fn empty_batch_terminator_is_harmless() {
    let (mut interpreter, events) = logging_interpreter();
    interpreter.execute("end").expect("nothing to drain");
    interpreter.execute("end").expect("still nothing");
    assert!(events.borrow().is_empty());
}

#[test]
fn turn_errors_surface_but_the_drain_completes() {
    let (mut interpreter, events) = logging_interpreter();

    interpreter.execute("beep").expect("queued");
    interpreter.execute("turn left fast").expect("queued");
    interpreter.execute("beep").expect("queued");
    let err = interpreter.execute("end").expect_err("bad degrees");

    assert_eq!(err.command(), Some("turn left fast"));
    assert_eq!(*events.borrow(), vec!["beep", "beep"]);
    assert_eq!(interpreter.batched(), 0);
}
