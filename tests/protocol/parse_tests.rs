//! Parser tests.
//!
//! The parser only fails on lexical/shape problems; operand semantics are
//! the interpreter's concern.

use wirebot_protocol::{CommandKind, parse};

#[test]
fn every_keyword_parses_with_operands() {
    let lines = [
        ("move up 3", CommandKind::Move),
        ("turn left 90", CommandKind::Turn),
        ("stop", CommandKind::Stop),
        ("beep", CommandKind::Beep),
        ("signal on", CommandKind::Signal),
        ("marker down", CommandKind::Marker),
        ("end", CommandKind::End),
    ];
    for (line, expected) in lines {
        let command = parse(line).expect("well-formed");
        assert_eq!(command.kind(), expected, "line: {line}");
    }
}

#[test]
fn operands_keep_their_order() {
    let command = parse("turn right 45.5").expect("well-formed");
    assert_eq!(command.operands(), ["right", "45.5"]);
}

#[test]
fn extra_operands_are_preserved_not_rejected() {
    let command = parse("move up 3 extra tokens").expect("well-formed");
    assert_eq!(command.operands().len(), 4);
}

#[test]
fn semantically_bad_operands_still_parse() {
    // Shape is fine; semantics are validated at dispatch.
    assert!(parse("turn sideways 90").is_ok());
    assert!(parse("signal maybe").is_ok());
    assert!(parse("marker sideways").is_ok());
    assert!(parse("move sideways").is_ok());
}

#[test]
fn shape_violations_are_malformed() {
    for line in ["", "   ", "bogus", "MOVE up", "move", "signal", "marker"] {
        let err = parse(line).expect_err(line);
        assert!(err.is_malformed(), "line: {line:?}");
    }
}

#[test]
fn the_raw_line_travels_with_the_error() {
    let err = parse("warp 9").expect_err("unknown keyword");
    assert_eq!(err.command(), Some("warp 9"));
}

#[test]
fn identical_input_yields_identical_output() {
    let a = parse("move left 2.5").expect("well-formed");
    let b = parse("move left 2.5").expect("well-formed");
    assert_eq!(a, b);
}
