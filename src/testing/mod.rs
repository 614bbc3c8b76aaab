//! On-target test support.
//!
//! The host unit tests cover the pure modules; this runner re-checks the
//! same properties on real hardware and reports over the serial console.
//! See `src/bin/test_runner.rs` for the suite.

use ufmt::uwriteln;

use crate::drivers::SerialConsole;

pub trait TestCase {
    fn name(&self) -> &'static str;
    fn run(&self) -> TestResult;
}

#[derive(PartialEq)]
pub enum TestResult {
    Pass,
    Fail(&'static str),
}

pub struct TestRunner {
    console: SerialConsole,
    total: u32,
    passed: u32,
}

impl TestRunner {
    pub fn new() -> Self {
        Self {
            console: SerialConsole::new(),
            total: 0,
            passed: 0,
        }
    }

    pub fn run_suite(&mut self, name: &'static str, tests: &[&dyn TestCase]) {
        uwriteln!(self.console, "=== Suite: {} ===", name).ok();

        for test in tests {
            self.total += 1;
            match test.run() {
                TestResult::Pass => {
                    self.passed += 1;
                    uwriteln!(self.console, "{}: PASS", test.name()).ok();
                }
                TestResult::Fail(why) => {
                    uwriteln!(self.console, "{}: FAIL - {}", test.name(), why).ok();
                }
            }
        }
    }

    pub fn summary(&mut self) {
        uwriteln!(self.console, "Passed: {}/{}", self.passed, self.total).ok();
    }
}

impl Default for TestRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Early-return check for `TestCase::run` bodies.
#[macro_export]
macro_rules! expect {
    ($cond:expr, $why:expr) => {
        if !$cond {
            return $crate::testing::TestResult::Fail($why);
        }
    };
}
