//! Error type for kernel preparation, dispatch and reporting

/// Errors raised by kernel setup and the test harness
#[derive(Debug, Clone, PartialEq)]
pub enum KernelError {
    /// A kernel parameter is outside the range the kernel can handle
    InvalidParameter {
        kernel: &'static str,
        message: String,
    },
    /// Buffer length does not match the dimensions it is used with
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
    /// The result observer could not be reached
    ReportFailed(String),
}

impl KernelError {
    pub(crate) fn invalid(kernel: &'static str, message: impl Into<String>) -> Self {
        KernelError::InvalidParameter {
            kernel,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::InvalidParameter { kernel, message } => {
                write!(f, "Invalid {} parameter: {}", kernel, message)
            }
            KernelError::DimensionMismatch {
                what,
                expected,
                actual,
            } => write!(
                f,
                "Dimension mismatch for {}: expected {}, got {}",
                what, expected, actual
            ),
            KernelError::ReportFailed(e) => write!(f, "Failed to report test result: {}", e),
        }
    }
}

impl std::error::Error for KernelError {}
