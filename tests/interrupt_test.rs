use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tinybasic::lang::ErrorCode;
use tinybasic::mach::{Config, Interpreter};

#[test]
fn test_interrupt_flag_breaks_the_run() {
    let mut out = Vec::new();
    let mut interpreter = Interpreter::with_output("10 GOTO 10\n", Config::default(), &mut out);
    interpreter.set_interrupt(Arc::new(AtomicBool::new(true)));
    let err = interpreter.run().unwrap_err();
    assert_eq!(err.code(), ErrorCode::Break as u16);
    assert_eq!(err.to_string(), "BREAK");
}

#[test]
fn test_unset_flag_does_not_break() {
    let mut out = Vec::new();
    let mut interpreter =
        Interpreter::with_output("10 PRINT \"ok\"\n", Config::default(), &mut out);
    interpreter.set_interrupt(Arc::new(AtomicBool::new(false)));
    interpreter.run().unwrap();
    assert!(interpreter.finished());
    assert_eq!(String::from_utf8(out).unwrap(), "ok\n");
}
