/// Progress observer injected into the transfer pipeline. The core logic
/// only depends on this trait, never on a specific front-end.
pub trait Reporter {
    fn update(&self, message: &str);
}

/// Reporter used by the CLI binary.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn update(&self, message: &str) {
        println!("{}", message);
    }
}
