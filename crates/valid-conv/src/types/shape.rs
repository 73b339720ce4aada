use crate::error::{ConvError, Result};

/// Validated signal/kernel lengths for one valid-mode convolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvShape {
    signal_len: usize,
    kernel_len: usize,
}

impl ConvShape {
    /// Validate `1 <= kernel_len <= signal_len`.
    pub fn new(signal_len: usize, kernel_len: usize) -> Result<Self> {
        if kernel_len == 0 {
            return Err(ConvError::EmptyKernel);
        }
        if kernel_len > signal_len {
            return Err(ConvError::KernelTooLong {
                kernel_len,
                signal_len,
            });
        }
        Ok(Self {
            signal_len,
            kernel_len,
        })
    }

    /// Signal length `N`.
    #[inline]
    pub fn signal_len(&self) -> usize {
        self.signal_len
    }

    /// Kernel length `K`.
    #[inline]
    pub fn kernel_len(&self) -> usize {
        self.kernel_len
    }

    /// `N - K + 1`.
    #[inline]
    pub fn output_len(&self) -> usize {
        self.signal_len - self.kernel_len + 1
    }

    /// Check that a caller-supplied output buffer has exactly `N - K + 1` slots.
    pub fn check_output(&self, actual: usize) -> Result<()> {
        let expected = self.output_len();
        if actual != expected {
            return Err(ConvError::OutputLength { expected, actual });
        }
        Ok(())
    }
}

/// Kernel length constraints a strategy places on its callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirements {
    /// `K` must be a multiple of this (1 means unconstrained).
    pub multiple: usize,
    /// `K` must equal this, if set.
    pub fixed_len: Option<usize>,
}

impl Requirements {
    /// No constraint beyond `1 <= K <= N`.
    pub const NONE: Self = Self {
        multiple: 1,
        fixed_len: None,
    };

    /// `K % multiple == 0`.
    pub const fn multiple_of(multiple: usize) -> Self {
        Self {
            multiple,
            fixed_len: None,
        }
    }

    /// `K == len`, with `len % multiple == 0`.
    pub const fn fixed(len: usize, multiple: usize) -> Self {
        Self {
            multiple,
            fixed_len: Some(len),
        }
    }

    /// Whether a kernel of `kernel_len` taps is accepted.
    pub fn admits(&self, kernel_len: usize) -> bool {
        self.check_kernel(kernel_len).is_ok()
    }

    /// Check a kernel length against these requirements.
    pub fn check_kernel(&self, kernel_len: usize) -> Result<()> {
        if let Some(expected) = self.fixed_len {
            if kernel_len != expected {
                return Err(ConvError::FixedKernelLength {
                    expected,
                    actual: kernel_len,
                });
            }
        }
        if kernel_len % self.multiple != 0 {
            return Err(ConvError::KernelNotMultiple {
                kernel_len,
                multiple: self.multiple,
            });
        }
        Ok(())
    }

    /// Full precondition check for one call.
    pub fn check(&self, signal_len: usize, kernel_len: usize, output_len: usize) -> Result<ConvShape> {
        let shape = ConvShape::new(signal_len, kernel_len)?;
        shape.check_output(output_len)?;
        self.check_kernel(kernel_len)?;
        Ok(shape)
    }
}

impl Default for Requirements {
    fn default() -> Self {
        Self::NONE
    }
}

/// A kernel whose length is known to be a multiple of `M`.
///
/// Blocked strategies build their tap tables from this view, so a kernel
/// that cannot be split into `M`-tap groups never reaches their loops.
#[derive(Debug, Clone, Copy)]
pub struct BlockedKernel<'a, const M: usize> {
    coeffs: &'a [f32],
}

impl<'a, const M: usize> BlockedKernel<'a, M> {
    /// Wrap `coeffs` if it is non-empty and `coeffs.len() % M == 0`.
    pub fn new(coeffs: &'a [f32]) -> Result<Self> {
        if coeffs.is_empty() {
            return Err(ConvError::EmptyKernel);
        }
        Requirements::multiple_of(M).check_kernel(coeffs.len())?;
        Ok(Self { coeffs })
    }

    /// The wrapped coefficients.
    #[inline]
    pub fn coeffs(&self) -> &'a [f32] {
        self.coeffs
    }

    /// Number of `M`-tap groups.
    #[inline]
    pub fn blocks(&self) -> usize {
        self.coeffs.len() / M
    }
}
