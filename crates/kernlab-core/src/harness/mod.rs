//! Self-checking multi-input kernel harness
//!
//! Runs four kernels that combine several input allocations element by
//! element, verifies every output element against the expected arithmetic,
//! and reports a single PASSED/FAILED signal.
//!
//! The stages are separate types so the ordering is enforced:
//! 1. [`MultiInputHarness`]: input allocations (`ain0..ain3`)
//! 2. [`HarnessRun`]: returned by [`MultiInputHarness::run_kernels`] only after
//!    every kernel invocation has finished; holds the outputs
//! 3. [`HarnessRun::finish`]: consumes the run and sends the signal once
//!
//! Failures from kernel preconditions and from output checks all land in
//! one [`FailureFlag`].

mod checks;
mod kernels;
mod reporter;


pub use checks::{check_sum2, check_sum2_struct, check_sum3, check_sum_mixed, CheckReport};
pub use kernels::{
    init_uint16_alloc, init_uint32_alloc, sum2, sum2_struct, sum3, sum_mixed, FailureFlag,
    RetStruct,
};
pub use reporter::{ChannelReporter, LogReporter, ResultReporter, TestOutcome};

use crate::dispatch::parallel_map_indexed;
use crate::error::KernelError;

/// Largest `dim` whose indices all fit the `u16` input `ain3`
///
/// Past this, index-initialised `ain3` wraps and `sum_mixed` reports FAILED.
pub const MAX_INDEXED_DIM: usize = u16::MAX as usize + 1;

/// Input allocations of the harness
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiInputHarness {
    pub ain0: Vec<u32>,
    pub ain1: Vec<u32>,
    pub ain2: Vec<u32>,
    pub ain3: Vec<u16>,
}

/// Output allocations written by the sum kernels
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KernelOutputs {
    /// `sum2`
    pub aout0: Vec<u32>,
    /// `sum3`
    pub aout1: Vec<u32>,
    /// `sum_mixed`
    pub aout2: Vec<u32>,
    /// `sum2_struct`
    pub aout3: Vec<RetStruct>,
}

impl MultiInputHarness {
    /// Inputs of length `dim`, each element initialised to its index
    pub fn new(dim: usize) -> Self {
        let ain0 = parallel_map_indexed(dim, |x| init_uint32_alloc(x as u32));
        Self {
            ain1: ain0.clone(),
            ain2: ain0.clone(),
            ain3: parallel_map_indexed(dim, |x| init_uint16_alloc(x as u32)),
            ain0,
        }
    }

    /// Caller-supplied inputs; all four must have the same length
    pub fn from_inputs(
        ain0: Vec<u32>,
        ain1: Vec<u32>,
        ain2: Vec<u32>,
        ain3: Vec<u16>,
    ) -> Result<Self, KernelError> {
        let dim = ain0.len();
        for (what, len) in [("ain1", ain1.len()), ("ain2", ain2.len()), ("ain3", ain3.len())] {
            if len != dim {
                return Err(KernelError::DimensionMismatch {
                    what,
                    expected: dim,
                    actual: len,
                });
            }
        }
        Ok(Self {
            ain0,
            ain1,
            ain2,
            ain3,
        })
    }

    pub fn dim(&self) -> usize {
        self.ain0.len()
    }

    /// Launch every sum kernel over the full index range
    ///
    /// Each launch joins before the next starts and before this returns, so
    /// the returned run only ever holds complete outputs.
    pub fn run_kernels(self) -> HarnessRun {
        let failed = FailureFlag::new();
        let dim = self.dim();
        log::debug!("Launching sum kernels over {} elements", dim);

        let outputs = KernelOutputs {
            aout0: parallel_map_indexed(dim, |i| {
                sum2(self.ain0[i], self.ain1[i], i as u32, &failed)
            }),
            aout1: parallel_map_indexed(dim, |i| {
                sum3(self.ain0[i], self.ain1[i], self.ain2[i], i as u32, &failed)
            }),
            aout2: parallel_map_indexed(dim, |i| {
                sum_mixed(self.ain0[i], self.ain3[i], i as u32, &failed)
            }),
            aout3: parallel_map_indexed(dim, |i| {
                sum2_struct(self.ain0[i], self.ain1[i], i as u32, &failed)
            }),
        };

        if failed.is_set() {
            log::warn!("Kernel input preconditions failed");
        }

        HarnessRun {
            inputs: self,
            outputs,
            failed,
            reports: None,
        }
    }
}

/// Harness state after every kernel has completed
#[derive(Debug)]
pub struct HarnessRun {
    inputs: MultiInputHarness,
    outputs: KernelOutputs,
    failed: FailureFlag,
    reports: Option<Vec<CheckReport>>,
}

impl HarnessRun {
    pub fn inputs(&self) -> &MultiInputHarness {
        &self.inputs
    }

    pub fn outputs(&self) -> &KernelOutputs {
        &self.outputs
    }

    /// Mutable outputs, e.g. to inject a fault before verification
    pub fn outputs_mut(&mut self) -> &mut KernelOutputs {
        self.reports = None;
        &mut self.outputs
    }

    /// Run all four output checks and OR their results into the failure flag
    pub fn verify_outputs(&mut self) -> &[CheckReport] {
        let ins = &self.inputs;
        let outs = &self.outputs;
        let reports = vec![
            check_sum2(&ins.ain0, &ins.ain1, &outs.aout0),
            check_sum3(&ins.ain0, &ins.ain1, &ins.ain2, &outs.aout1),
            check_sum_mixed(&ins.ain0, &ins.ain3, &outs.aout2),
            check_sum2_struct(&ins.ain0, &ins.ain1, &outs.aout3),
        ];
        for report in &reports {
            self.failed.record(!report.passed());
        }
        self.reports.insert(reports)
    }

    /// Whether any precondition or check has failed so far
    pub fn has_failed(&self) -> bool {
        self.failed.is_set()
    }

    /// Verify (if not done yet) and send the aggregate outcome exactly once
    pub fn finish<R: ResultReporter + ?Sized>(
        mut self,
        reporter: &R,
    ) -> Result<TestOutcome, KernelError> {
        if self.reports.is_none() {
            self.verify_outputs();
        }
        let outcome = TestOutcome::from_failed(self.failed.is_set());
        reporter.send_blocking(outcome)?;
        Ok(outcome)
    }
}
