use crate::core::Convolve;
use crate::error::Result;
use crate::simd::{convolve_variant, Naive, Variant};
use crate::types::ConvShape;

/// Valid-mode convolution with the reference strategy.
///
/// Returns `signal.len() - kernel.len() + 1` samples where
/// `out[i] = Σ_k signal[i + k] * kernel[K - 1 - k]`.
///
/// # Example
///
/// ```
/// use valid_conv::convolve_valid;
///
/// let out = convolve_valid(&[1.0, 2.0, 3.0, 4.0, 5.0], &[1.0, 0.0, -1.0]).unwrap();
/// assert_eq!(out, vec![2.0, 2.0, 2.0]);
/// ```
pub fn convolve_valid(signal: &[f32], kernel: &[f32]) -> Result<Vec<f32>> {
    let shape = ConvShape::new(signal.len(), kernel.len())?;
    let mut output = vec![0.0f32; shape.output_len()];
    Naive.convolve(signal, kernel, &mut output)?;
    Ok(output)
}

/// Builder for running one named convolution strategy.
///
/// By default a variant is refused when the detected CPU lacks its
/// capability tier. [`Convolver::force`] lifts that check; the strategy then
/// runs its portable build and still produces correct results, only slower.
///
/// # Example
///
/// ```
/// use valid_conv::{Convolver, Variant};
///
/// let signal: Vec<f32> = (0..40).map(|i| i as f32).collect();
/// let kernel = [0.25f32; 8];
///
/// let out = Convolver::new(Variant::WideUnaligned)
///     .force()
///     .run(&signal, &kernel)
///     .unwrap();
/// assert_eq!(out.len(), 33);
/// assert_eq!(out[0], 7.0); // 0.25 * (0 + 1 + ... + 7)
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Convolver {
    variant: Variant,
    force: bool,
}

impl Convolver {
    /// Create a builder for `variant`.
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            force: false,
        }
    }

    /// Run even if the CPU does not advertise the variant's capability.
    pub fn force(mut self) -> Self {
        self.force = true;
        self
    }

    /// The configured variant.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Convolve into a caller-owned buffer of `N - K + 1` samples.
    pub fn execute(&self, signal: &[f32], kernel: &[f32], output: &mut [f32]) -> Result<()> {
        if self.force {
            self.variant.strategy().convolve(signal, kernel, output)
        } else {
            convolve_variant(self.variant, signal, kernel, output)
        }
    }

    /// Convolve into a freshly allocated buffer.
    pub fn run(&self, signal: &[f32], kernel: &[f32]) -> Result<Vec<f32>> {
        let shape = ConvShape::new(signal.len(), kernel.len())?;
        let mut output = vec![0.0f32; shape.output_len()];
        self.execute(signal, kernel, &mut output)?;
        Ok(output)
    }
}

impl Default for Convolver {
    fn default() -> Self {
        Self::new(Variant::Naive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvError;

    #[test]
    fn test_convolve_valid() {
        let out = convolve_valid(&[1.0, 2.0, 3.0, 4.0, 5.0], &[1.0, 0.0, -1.0]).unwrap();
        assert_eq!(out, vec![2.0, 2.0, 2.0]);
        assert_eq!(convolve_valid(&[1.0], &[]), Err(ConvError::EmptyKernel));
    }

    #[test]
    fn test_builder_forced_matches_reference() {
        let signal: Vec<f32> = (0..70).map(|i| ((i * 5) % 9) as f32 - 4.0).collect();
        let kernel: Vec<f32> = (0..16).map(|i| (i % 3) as f32 - 1.0).collect();
        let expected = convolve_valid(&signal, &kernel).unwrap();

        for v in Variant::ALL {
            let out = Convolver::new(v).force().run(&signal, &kernel).unwrap();
            // Small integers: every strategy is exact here.
            assert_eq!(out, expected, "{}", v);
        }
    }

    #[test]
    fn test_builder_reports_errors() {
        let conv = Convolver::new(Variant::NarrowUnrolled).force();
        assert_eq!(
            conv.run(&[1.0; 10], &[1.0; 3]),
            Err(ConvError::KernelNotMultiple {
                kernel_len: 3,
                multiple: 4
            })
        );

        let mut out = [0.0f32; 4];
        assert!(matches!(
            Convolver::default().execute(&[1.0; 10], &[1.0; 3], &mut out),
            Err(ConvError::OutputLength { .. })
        ));
        assert_eq!(Convolver::default().variant(), Variant::Naive);
    }
}
