//! Output verification
//!
//! Every check scans the full index range and counts mismatches; nothing
//! stops early, so one report covers every bad element.

use serde::Serialize;

use super::kernels::RetStruct;

/// Result of verifying one output allocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub name: &'static str,
    pub checked: usize,
    pub mismatches: usize,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.mismatches == 0
    }
}

fn check_elements<F>(name: &'static str, len: usize, element_ok: F) -> CheckReport
where
    F: Fn(usize) -> bool,
{
    let mut mismatches = 0;
    for i in 0..len {
        if !element_ok(i) {
            log::debug!("{}: mismatch at index {}", name, i);
            mismatches += 1;
        }
    }

    let report = CheckReport {
        name,
        checked: len,
        mismatches,
    };
    if report.passed() {
        log::info!("{} PASSED", name);
    } else {
        log::warn!("{} FAILED ({} of {} elements)", name, mismatches, len);
    }
    report
}

/// `aout0[i] == ain0[i] + ain1[i]`
pub fn check_sum2(ain0: &[u32], ain1: &[u32], aout0: &[u32]) -> CheckReport {
    check_elements("test_sum2_output", ain0.len(), |i| {
        match (ain1.get(i), aout0.get(i)) {
            (Some(&b), Some(&out)) => out == ain0[i].wrapping_add(b),
            _ => false,
        }
    })
}

/// `aout1[i] == ain0[i] + ain1[i] + ain2[i]`
pub fn check_sum3(ain0: &[u32], ain1: &[u32], ain2: &[u32], aout1: &[u32]) -> CheckReport {
    check_elements("test_sum3_output", ain0.len(), |i| {
        match (ain1.get(i), ain2.get(i), aout1.get(i)) {
            (Some(&b), Some(&c), Some(&out)) => out == ain0[i].wrapping_add(b).wrapping_add(c),
            _ => false,
        }
    })
}

/// `aout2[i] == ain0[i] + ain3[i]` with a 16-bit second input
pub fn check_sum_mixed(ain0: &[u32], ain3: &[u16], aout2: &[u32]) -> CheckReport {
    check_elements("test_sum_mixed_output", ain0.len(), |i| {
        match (ain3.get(i), aout2.get(i)) {
            (Some(&b), Some(&out)) => out == ain0[i].wrapping_add(b as u32),
            _ => false,
        }
    })
}

/// Every field of `aout3[i]` equals `ain0[i] + ain1[i]`
pub fn check_sum2_struct(ain0: &[u32], ain1: &[u32], aout3: &[RetStruct]) -> CheckReport {
    check_elements("test_sum2_struct_output", ain0.len(), |i| {
        match (ain1.get(i), aout3.get(i)) {
            (Some(&b), Some(out)) => {
                let sum = ain0[i].wrapping_add(b);
                out.fields().iter().all(|&f| f == sum)
            }
            _ => false,
        }
    })
}
