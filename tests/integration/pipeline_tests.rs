//! Console-to-character pipeline tests.

use std::cell::RefCell;
use std::rc::Rc;
use std::thread;
use std::time::{Duration, Instant};

use wirebot_foundation::{Mailbox, Vec3};
use wirebot_interpreter::{Interpreter, TickDriver};
use wirebot_protocol::parse;
use wirebot_runtime::{SimCharacter, bind_character};
use wirebot_transport::{ChannelListener, ProducerEndpoint};

/// Sends each line the way the console does: parse, then transmit the
/// canonical rendering.
fn console_script(handle: String, lines: &'static [&'static str]) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut endpoint = ProducerEndpoint::connect(&handle).expect("connect");
        for line in lines {
            let command = parse(line).expect("script lines are well-formed");
            endpoint.send_line(&command.to_string()).expect("send");
        }
    })
}

/// Ticks the driver and character until the pipeline drains or the tick
/// budget runs out.
fn tick_until_idle(
    driver: &mut TickDriver,
    character: &Rc<RefCell<SimCharacter>>,
    max_ticks: u32,
) -> u32 {
    let mut ticks = 0;
    while ticks < max_ticks {
        if let Err(err) = driver.tick() {
            panic!("unexpected command error: {err}");
        }
        character.borrow_mut().step();
        ticks += 1;
        if driver.is_idle() && character.borrow().can_move() {
            break;
        }
    }
    ticks
}

#[test]
fn a_batch_walks_the_character_and_defers_behind_the_gate() {
    let mailbox = Mailbox::new();
    let listener = ChannelListener::bind().expect("bind");
    let handle = listener.handle().expect("handle");

    let console = console_script(handle, &["move up 2", "turn left 90", "beep", "end"]);
    let consumer = listener.accept(mailbox.clone()).expect("accept");
    console.join().expect("console thread");

    let character = Rc::new(RefCell::new(SimCharacter::new().with_step_length(1.0)));
    let mut driver = TickDriver::new(
        Interpreter::new(bind_character(&character)),
        mailbox,
    );

    // All four lines are already in the mailbox. The first tick that
    // drains `end` starts the walk; the turn and beep defer behind it.
    let ticks = tick_until_idle(&mut driver, &character, 100);
    assert!(ticks < 100, "pipeline never drained");

    let character = character.borrow();
    assert_eq!(character.position(), Vec3::new(2.0, 0.0, 0.0));
    assert_eq!(character.heading(), 90.0);
    assert_eq!(character.beeps(), 1);
    drop(consumer);
}

#[test]
fn the_gate_holds_actions_while_the_walk_is_in_progress() {
    let mailbox = Mailbox::new();
    mailbox.push("move up 3");
    mailbox.push("beep");
    mailbox.push("end");

    let character = Rc::new(RefCell::new(SimCharacter::new().with_step_length(1.0)));
    let mut driver = TickDriver::new(
        Interpreter::new(bind_character(&character)),
        mailbox,
    );

    // Three ticks feed the three lines; the batch drains on the third.
    for _ in 0..3 {
        driver.tick().expect("tick");
        character.borrow_mut().step();
    }
    assert!(!character.borrow().can_move(), "walk should be in progress");
    assert_eq!(character.borrow().beeps(), 0, "beep must wait for the walk");
    assert_eq!(driver.interpreter().pending(), 1);

    // Let the walk finish; the pendant beep fires on a later tick.
    for _ in 0..10 {
        driver.tick().expect("tick");
        character.borrow_mut().step();
    }
    assert!(character.borrow().can_move());
    assert_eq!(character.borrow().beeps(), 1);
    assert_eq!(driver.interpreter().pending(), 0);
}

#[test]
fn malformed_and_invalid_lines_do_not_stall_the_session() {
    let mailbox = Mailbox::new();
    for line in [
        "bogus line from a confused operator",
        "move up 1",
        "turn left ninety",
        "beep",
        "end",
        "beep",
        "end",
    ] {
        mailbox.push(line);
    }

    let character = Rc::new(RefCell::new(SimCharacter::new().with_step_length(10.0)));
    let mut driver = TickDriver::new(
        Interpreter::new(bind_character(&character)),
        mailbox,
    );

    let mut reported = 0;
    for _ in 0..50 {
        if driver.tick().is_err() {
            reported += 1;
        }
        character.borrow_mut().step();
        if driver.is_idle() && character.borrow().can_move() {
            break;
        }
    }

    // Exactly one reportable error (the bad turn); the move and both
    // beeps still happened.
    assert_eq!(reported, 1);
    let character = character.borrow();
    assert_eq!(character.position(), Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(character.beeps(), 2);
}

#[test]
fn channel_teardown_leaves_the_tick_loop_healthy() {
    let mailbox = Mailbox::new();
    let listener = ChannelListener::bind().expect("bind");
    let handle = listener.handle().expect("handle");

    let console = console_script(handle, &["beep", "end"]);
    let consumer = listener.accept(mailbox.clone()).expect("accept");
    console.join().expect("console thread");

    let character = Rc::new(RefCell::new(SimCharacter::new()));
    let mut driver = TickDriver::new(
        Interpreter::new(bind_character(&character)),
        mailbox,
    );

    // The console is gone; the consumer notices without the tick loop
    // ever blocking on channel I/O.
    let deadline = Instant::now() + Duration::from_secs(2);
    while consumer.is_connected() && Instant::now() < deadline {
        driver.tick().expect("tick");
        character.borrow_mut().step();
        thread::sleep(Duration::from_millis(5));
    }
    assert!(!consumer.is_connected());

    // Ticking continues to work after the channel died.
    let ticks = tick_until_idle(&mut driver, &character, 50);
    assert!(ticks < 50);
    assert_eq!(character.borrow().beeps(), 1);
}
