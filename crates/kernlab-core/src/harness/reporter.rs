//! Delivery of the final harness signal

use std::fmt;
use std::sync::mpsc::{self, Receiver, SyncSender};

use serde::Serialize;

use crate::error::KernelError;

/// Aggregate result of a harness run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TestOutcome {
    Passed,
    Failed,
}

impl TestOutcome {
    /// Message id understood by the test observer
    pub fn code(&self) -> u32 {
        match self {
            TestOutcome::Passed => 100,
            TestOutcome::Failed => 101,
        }
    }

    pub fn from_failed(failed: bool) -> Self {
        if failed {
            TestOutcome::Failed
        } else {
            TestOutcome::Passed
        }
    }
}

impl fmt::Display for TestOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestOutcome::Passed => write!(f, "PASSED"),
            TestOutcome::Failed => write!(f, "FAILED"),
        }
    }
}

/// Observer of the final test signal
///
/// `send_blocking` returns once the observer has taken the signal.
pub trait ResultReporter {
    fn send_blocking(&self, outcome: TestOutcome) -> Result<(), KernelError>;
}

/// Reporter over a rendezvous channel: each send waits for the receiver
pub struct ChannelReporter {
    tx: SyncSender<TestOutcome>,
}

impl ChannelReporter {
    /// Reporter plus the receiving end for the observer
    pub fn rendezvous() -> (Self, Receiver<TestOutcome>) {
        let (tx, rx) = mpsc::sync_channel(0);
        (Self { tx }, rx)
    }
}

impl ResultReporter for ChannelReporter {
    fn send_blocking(&self, outcome: TestOutcome) -> Result<(), KernelError> {
        self.tx
            .send(outcome)
            .map_err(|e| KernelError::ReportFailed(e.to_string()))
    }
}

/// Reporter that only writes the outcome to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl ResultReporter for LogReporter {
    fn send_blocking(&self, outcome: TestOutcome) -> Result<(), KernelError> {
        match outcome {
            TestOutcome::Passed => log::info!("tests {} ({})", outcome, outcome.code()),
            TestOutcome::Failed => log::error!("tests {} ({})", outcome, outcome.code()),
        }
        Ok(())
    }
}
