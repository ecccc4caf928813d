//! Movement-gate deferral and the tick driver.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wirebot_foundation::Mailbox;
use wirebot_interpreter::{Handlers, Interpreter, TickDriver};

#[test]
fn closed_gate_is_idempotent_for_retries() {
    let fired = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&fired);
    let handlers = Handlers::new()
        .on_can_move(|| false)
        .on_beep(move || counter.set(counter.get() + 1));
    let mut interpreter = Interpreter::new(handlers);

    interpreter.execute("beep").expect("queued");
    interpreter.execute("end").expect("deferred");
    assert_eq!(interpreter.pending(), 1);

    // A deterministic false gate: retries never shrink the queue and
    // never invoke any handler.
    for _ in 0..10 {
        interpreter.next_pendant_action().expect("no-op");
        assert_eq!(interpreter.pending(), 1);
    }
    assert_eq!(fired.get(), 0);
}

#[test]
fn pendant_entries_replay_in_fifo_order() {
    let gate = Rc::new(Cell::new(false));
    let events = Rc::new(RefCell::new(Vec::new()));

    let gate_handle = Rc::clone(&gate);
    let beeps = Rc::clone(&events);
    let turns = Rc::clone(&events);
    let handlers = Handlers::new()
        .on_can_move(move || gate_handle.get())
        .on_beep(move || beeps.borrow_mut().push("beep".to_string()))
        .on_turn(move |deg| turns.borrow_mut().push(format!("turn {deg}")));
    let mut interpreter = Interpreter::new(handlers);

    for line in ["beep", "turn left 10", "beep", "end"] {
        interpreter.execute(line).expect("queued then deferred");
    }
    assert_eq!(interpreter.pending(), 3);

    gate.set(true);
    interpreter.next_pendant_action().expect("replay 1");
    interpreter.next_pendant_action().expect("replay 2");
    interpreter.next_pendant_action().expect("replay 3");

    assert_eq!(*events.borrow(), vec!["beep", "turn 10", "beep"]);
    assert_eq!(interpreter.pending(), 0);
}

#[test]
fn fresh_batches_interleave_with_pendant_replays() {
    let gate = Rc::new(Cell::new(false));
    let events = Rc::new(RefCell::new(Vec::new()));

    let gate_handle = Rc::clone(&gate);
    let halts = Rc::clone(&events);
    let beeps = Rc::clone(&events);
    let handlers = Handlers::new()
        .on_can_move(move || gate_handle.get())
        .on_halt(move || halts.borrow_mut().push("halt".to_string()))
        .on_beep(move || beeps.borrow_mut().push("beep".to_string()));

    let mailbox = Mailbox::new();
    let mut driver = TickDriver::new(Interpreter::new(handlers), mailbox.clone());

    // Tick 1-2: a batch lands behind the closed gate.
    mailbox.push("stop");
    driver.tick().expect("queued");
    mailbox.push("end");
    driver.tick().expect("deferred");
    assert_eq!(driver.interpreter().pending(), 1);

    // Gate opens. Tick 3 queues a fresh line and replays the pendant halt;
    // tick 4 drains the fresh batch. Pendant replays interleave with
    // freshly arriving batches instead of waiting for them.
    gate.set(true);
    mailbox.push("beep");
    driver.tick().expect("queued fresh, replayed pendant");
    mailbox.push("end");
    driver.tick().expect("drained fresh");

    assert_eq!(*events.borrow(), vec!["halt", "beep"]);
    assert_eq!(driver.interpreter().pending(), 0);
}

#[test]
fn driver_reports_idle_only_when_everything_drained() {
    let mailbox = Mailbox::new();
    let mut driver = TickDriver::new(
        Interpreter::new(Handlers::new().on_can_move(|| false)),
        mailbox.clone(),
    );
    assert!(driver.is_idle());

    mailbox.push("beep");
    assert!(!driver.is_idle());
    driver.tick().expect("queued");
    assert!(!driver.is_idle()); // batched

    mailbox.push("end");
    driver.tick().expect("deferred");
    assert!(!driver.is_idle()); // pending
}
