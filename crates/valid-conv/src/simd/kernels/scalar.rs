use crate::core::{convolve_naive, convolve_reordered, Convolve};
use crate::types::{Capability, Strategy};

/// Reference scalar convolution; the oracle for every other strategy.
#[derive(Debug, Default, Clone, Copy)]
pub struct Naive;

impl Convolve for Naive {
    fn name(&self) -> &'static str {
        "naive"
    }

    fn capability(&self) -> Capability {
        Capability::Scalar
    }

    fn strategy(&self) -> Strategy {
        Strategy::SCALAR
    }

    fn execute(&self, signal: &[f32], kernel: &[f32], output: &mut [f32]) {
        convolve_naive(signal, kernel, output);
    }
}

/// Scalar convolution with taps in the outer loop.
#[derive(Debug, Default, Clone, Copy)]
pub struct Reordered;

impl Convolve for Reordered {
    fn name(&self) -> &'static str {
        "reordered"
    }

    fn capability(&self) -> Capability {
        Capability::Scalar
    }

    fn strategy(&self) -> Strategy {
        Strategy::SCALAR
    }

    fn execute(&self, signal: &[f32], kernel: &[f32], output: &mut [f32]) {
        convolve_reordered(signal, kernel, output);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvError;

    #[test]
    fn test_scenario() {
        let signal = [1.0f32, 2.0, 3.0, 4.0, 5.0];
        let kernel = [1.0f32, 0.0, -1.0];
        for strategy in [&Naive as &dyn Convolve, &Reordered] {
            let mut out = [0.0f32; 3];
            strategy.convolve(&signal, &kernel, &mut out).unwrap();
            assert_eq!(out, [2.0, 2.0, 2.0], "{}", strategy.name());
        }
    }

    #[test]
    fn test_rejects_bad_lengths() {
        let signal = [1.0f32; 4];
        let mut out = [0.0f32; 2];
        assert_eq!(
            Naive.convolve(&signal, &[], &mut out),
            Err(ConvError::EmptyKernel)
        );
        assert_eq!(
            Reordered.convolve(&signal, &[1.0; 2], &mut out),
            Err(ConvError::OutputLength {
                expected: 3,
                actual: 2
            })
        );
    }
}
