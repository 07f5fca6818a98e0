
use crate::mach::{Config, Interpreter};

fn run(source: &str) -> String {
    run_with(source, Config::default())
}

fn run_with(source: &str, config: Config) -> String {
    let mut out = Vec::new();
    let mut interpreter = Interpreter::with_output(source, config, &mut out);
    interpreter.run().unwrap();
    String::from_utf8(out).unwrap()
}
