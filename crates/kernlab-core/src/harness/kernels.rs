//! Kernels exercised by the multi-input harness
//!
//! Sum kernels receive their inputs plus the element index `x`. Inputs are
//! initialised so that every element equals its index; each kernel asserts
//! that precondition and records a violation in the shared failure flag
//! before returning the sum.

use std::sync::atomic::{AtomicBool, Ordering};

use bytemuck::{Pod, Zeroable};

/// Failure flag shared by concurrent kernel invocations and checks
///
/// Only ever moves from clear to set; combining is an atomic OR so parallel
/// writers cannot lose a failure.
#[derive(Debug, Default)]
pub struct FailureFlag(AtomicBool);

impl FailureFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// OR `failed` into the flag
    pub fn record(&self, failed: bool) {
        if failed {
            self.0.fetch_or(true, Ordering::SeqCst);
        }
    }

    /// Record a failure when `condition` is false; returns `condition`
    pub fn check(&self, condition: bool, what: &str) -> bool {
        if !condition {
            log::debug!("{} FAILED", what);
            self.record(true);
        }
        condition
    }

    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Eight-field record written by [`sum2_struct`]
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct RetStruct {
    pub i0: u32,
    pub i1: u32,
    pub i2: u32,
    pub i3: u32,
    pub i4: u32,
    pub i5: u32,
    pub i6: u32,
    pub i7: u32,
}

impl RetStruct {
    /// Record with every field set to `v`
    pub fn splat(v: u32) -> Self {
        Self {
            i0: v,
            i1: v,
            i2: v,
            i3: v,
            i4: v,
            i5: v,
            i6: v,
            i7: v,
        }
    }

    pub fn fields(&self) -> [u32; 8] {
        [
            self.i0, self.i1, self.i2, self.i3, self.i4, self.i5, self.i6, self.i7,
        ]
    }
}

pub fn init_uint32_alloc(x: u32) -> u32 {
    x
}

/// Truncates indices above `u16::MAX`
pub fn init_uint16_alloc(x: u32) -> u16 {
    x as u16
}

pub fn sum2(in0: u32, in1: u32, x: u32, failed: &FailureFlag) -> u32 {
    failed.check(in0 == x, "sum2: in0 == x");
    failed.check(in1 == x, "sum2: in1 == x");

    in0.wrapping_add(in1)
}

pub fn sum2_struct(in0: u32, in1: u32, x: u32, failed: &FailureFlag) -> RetStruct {
    failed.check(in0 == x, "sum2_struct: in0 == x");
    failed.check(in1 == x, "sum2_struct: in1 == x");

    RetStruct::splat(in0.wrapping_add(in1))
}

pub fn sum3(in0: u32, in1: u32, in2: u32, x: u32, failed: &FailureFlag) -> u32 {
    failed.check(in0 == x, "sum3: in0 == x");
    failed.check(in1 == x, "sum3: in1 == x");
    failed.check(in2 == x, "sum3: in2 == x");

    in0.wrapping_add(in1).wrapping_add(in2)
}

pub fn sum_mixed(in0: u32, in1: u16, x: u32, failed: &FailureFlag) -> u32 {
    failed.check(in0 == x, "sum_mixed: in0 == x");
    failed.check(in1 as u32 == x, "sum_mixed: in1 == x");

    in0.wrapping_add(in1 as u32)
}
