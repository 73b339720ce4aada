//! Error types for convolution calls.

use thiserror::Error;

use crate::types::Capability;

/// Precondition violations detected before a kernel enters its hot loop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvError {
    /// The kernel has no coefficients.
    #[error("kernel must contain at least one coefficient")]
    EmptyKernel,

    /// Valid-mode convolution needs `K <= N`.
    #[error("kernel length {kernel_len} exceeds signal length {signal_len}")]
    KernelTooLong {
        /// Length of the kernel.
        kernel_len: usize,
        /// Length of the signal.
        signal_len: usize,
    },

    /// The output buffer is not exactly `N - K + 1` samples long.
    #[error("output buffer holds {actual} samples, expected {expected}")]
    OutputLength {
        /// Required output length.
        expected: usize,
        /// Length of the buffer that was supplied.
        actual: usize,
    },

    /// The strategy blocks taps and needs `K` to be a multiple of the block.
    #[error("kernel length {kernel_len} is not a multiple of {multiple}")]
    KernelNotMultiple {
        /// Length of the kernel.
        kernel_len: usize,
        /// Required multiple.
        multiple: usize,
    },

    /// The strategy is compiled for one kernel length only.
    #[error("kernel length {actual} does not match the fixed length {expected}")]
    FixedKernelLength {
        /// Compile-time kernel length.
        expected: usize,
        /// Length of the kernel that was supplied.
        actual: usize,
    },

    /// The running CPU lacks the instruction tier a variant needs.
    #[error("variant `{variant}` needs {required:?} support")]
    Unsupported {
        /// Name of the rejected variant.
        variant: &'static str,
        /// Capability the variant requires.
        required: Capability,
    },

    /// A variant name did not match any known strategy.
    #[error("unknown convolution variant: {0}")]
    UnknownVariant(String),
}

/// Result type for convolution calls.
pub type Result<T> = std::result::Result<T, ConvError>;
