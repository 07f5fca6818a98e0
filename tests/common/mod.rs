use tinybasic::lang::Error;
use tinybasic::mach::{Config, Interpreter};

#[allow(dead_code)]
pub fn run(source: &str) -> String {
    let mut out = Vec::new();
    let mut interpreter = Interpreter::with_output(source, Config::default(), &mut out);
    interpreter.run().unwrap();
    String::from_utf8(out).unwrap()
}

/// Output produced before the failure, plus the failure itself.
#[allow(dead_code)]
pub fn run_err(source: &str) -> (String, Error) {
    let mut out = Vec::new();
    let mut interpreter = Interpreter::with_output(source, Config::default(), &mut out);
    let err = interpreter.run().unwrap_err();
    (String::from_utf8(out).unwrap(), err)
}
