/// One valid-mode output sample: `Σ_k window[k] * kernel[K-1-k]`.
///
/// Accumulates from `0.0` with `k` ascending. This is the reference
/// summation order; every vector strategy computes its tail with it.
///
/// `window` must hold at least `kernel.len()` samples.
#[inline(always)]
pub fn dot_reversed(window: &[f32], kernel: &[f32]) -> f32 {
    let window = &window[..kernel.len()];
    let mut acc = 0.0f32;
    for (x, c) in window.iter().zip(kernel.iter().rev()) {
        acc += x * c;
    }
    acc
}

/// Reference valid-mode convolution, one output sample at a time.
///
/// # Panics
/// If `kernel` is empty, longer than `signal`, or `output` is not
/// `signal.len() - kernel.len() + 1` long.
pub fn convolve_naive(signal: &[f32], kernel: &[f32], output: &mut [f32]) {
    assert_eq!(output.len() + kernel.len(), signal.len() + 1, "output length");
    for (i, out) in output.iter_mut().enumerate() {
        *out = dot_reversed(&signal[i..], kernel);
    }
}

/// Loop-interchanged reference: taps outside, outputs inside.
///
/// The whole output is zeroed first, then each reversed coefficient is
/// accumulated into every output sample before moving to the next tap.
///
/// # Panics
/// Same as [`convolve_naive`].
pub fn convolve_reordered(signal: &[f32], kernel: &[f32], output: &mut [f32]) {
    assert_eq!(output.len() + kernel.len(), signal.len() + 1, "output length");
    output.fill(0.0);

    let n_out = output.len();
    for (k, &coeff) in kernel.iter().rev().enumerate() {
        let window = &signal[k..k + n_out];
        for (out, &x) in output.iter_mut().zip(window) {
            *out += x * coeff;
        }
    }
}

/// Scalar remainder for outputs `start..` that a vector main loop could
/// not reach with a full step.
#[inline]
pub fn finish_tail(signal: &[f32], kernel: &[f32], output: &mut [f32], start: usize) {
    for i in start..output.len() {
        output[i] = dot_reversed(&signal[i..], kernel);
    }
}

/// Accepted deviation from the reference for one output sample.
///
/// The bound is the classical forward error of a length-`K` dot product,
/// `γ_K · Σ|products|`, with `γ_K` over-approximated by `K · ε` (`ε` is
/// `f32::EPSILON`, twice the unit roundoff). Fused strategies get twice
/// that to cover the different rounding points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tolerance {
    /// Bit-identical to the reference.
    Exact,
    /// Same products, different summation order.
    Reassociated,
    /// Products fused into the accumulation.
    Fused,
}

impl Tolerance {
    /// Absolute bound for output sample computed from `window` and `kernel`.
    pub fn bound(&self, window: &[f32], kernel: &[f32]) -> f32 {
        let factor = match self {
            Tolerance::Exact => return 0.0,
            Tolerance::Reassociated => 1.0,
            Tolerance::Fused => 2.0,
        };
        let magnitude: f32 = window
            .iter()
            .zip(kernel.iter().rev())
            .map(|(x, c)| (x * c).abs())
            .sum();
        factor * kernel.len() as f32 * f32::EPSILON * magnitude + f32::MIN_POSITIVE
    }

    /// Whether `actual` is within the bound of `expected` at every index.
    ///
    /// Returns the first offending index otherwise.
    pub fn check(
        &self,
        signal: &[f32],
        kernel: &[f32],
        expected: &[f32],
        actual: &[f32],
    ) -> Result<(), usize> {
        for (i, (e, a)) in expected.iter().zip(actual).enumerate() {
            let ok = match self {
                Tolerance::Exact => e.to_bits() == a.to_bits(),
                _ => (e - a).abs() <= self.bound(&signal[i..], kernel),
            };
            if !ok {
                return Err(i);
            }
        }
        if expected.len() != actual.len() {
            return Err(expected.len().min(actual.len()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(n: usize) -> Vec<f32> {
        (0..n).map(|i| ((i * 7 + 3) % 11) as f32 - 5.0).collect()
    }

    #[test]
    fn test_naive_scenario() {
        let signal = [1.0f32, 2.0, 3.0, 4.0, 5.0];
        let kernel = [1.0f32, 0.0, -1.0];
        let mut out = [0.0f32; 3];
        convolve_naive(&signal, &kernel, &mut out);
        assert_eq!(out, [2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_reordered_scenario() {
        let signal = [1.0f32, 2.0, 3.0, 4.0, 5.0];
        let kernel = [1.0f32, 0.0, -1.0];
        let mut out = [f32::NAN; 3];
        convolve_reordered(&signal, &kernel, &mut out);
        assert_eq!(out, [2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_single_tap_scales() {
        let signal = ramp(17);
        let mut out = vec![0.0f32; 17];
        convolve_naive(&signal, &[2.5], &mut out);
        for (o, s) in out.iter().zip(&signal) {
            assert_eq!(*o, s * 2.5);
        }
    }

    #[test]
    fn test_full_length_kernel_is_dot_product() {
        let signal = [1.0f32, 2.0, 3.0, 4.0];
        let kernel = [1.0f32, 10.0, 100.0, 1000.0];
        let mut out = [0.0f32; 1];
        convolve_naive(&signal, &kernel, &mut out);
        // 1*1000 + 2*100 + 3*10 + 4*1
        assert_eq!(out[0], 1234.0);
    }

    #[test]
    fn test_linearity_exact() {
        let signal = ramp(40);
        let kernel: Vec<f32> = (0..6).map(|i| i as f32 - 2.0).collect();
        let scaled: Vec<f32> = kernel.iter().map(|c| c * 4.0).collect();

        let mut base = vec![0.0f32; 35];
        let mut out = vec![0.0f32; 35];
        convolve_naive(&signal, &kernel, &mut base);
        convolve_naive(&signal, &scaled, &mut out);
        for (b, o) in base.iter().zip(&out) {
            // Scaling by a power of two is exact.
            assert_eq!(b * 4.0, *o);
        }

        let other: Vec<f32> = (0..6).map(|i| (i % 2) as f32).collect();
        let sum: Vec<f32> = kernel.iter().zip(&other).map(|(a, b)| a + b).collect();
        let mut other_out = vec![0.0f32; 35];
        let mut sum_out = vec![0.0f32; 35];
        convolve_naive(&signal, &other, &mut other_out);
        convolve_naive(&signal, &sum, &mut sum_out);
        for i in 0..35 {
            // Small integers: every intermediate is exactly representable.
            assert_eq!(base[i] + other_out[i], sum_out[i]);
        }
    }

    #[test]
    fn test_reordered_matches_naive() {
        let signal: Vec<f32> = (0..200).map(|i| (i as f32 * 0.37).sin()).collect();
        let kernel: Vec<f32> = (0..13).map(|i| (i as f32 * 1.3).cos()).collect();
        let mut a = vec![0.0f32; 188];
        let mut b = vec![0.0f32; 188];
        convolve_naive(&signal, &kernel, &mut a);
        convolve_reordered(&signal, &kernel, &mut b);
        assert_eq!(
            Tolerance::Reassociated.check(&signal, &kernel, &a, &b),
            Ok(())
        );
    }

    #[test]
    fn test_finish_tail() {
        let signal = ramp(12);
        let kernel = [0.5f32, -1.0, 2.0];
        let mut expected = vec![0.0f32; 10];
        convolve_naive(&signal, &kernel, &mut expected);

        let mut out = vec![-7.0f32; 10];
        finish_tail(&signal, &kernel, &mut out, 6);
        assert!(out[..6].iter().all(|&x| x == -7.0));
        assert_eq!(&out[6..], &expected[6..]);
    }

    #[test]
    fn test_tolerance() {
        let signal = [1.0f32, 2.0, 3.0];
        let kernel = [1.0f32, 1.0];
        let expected = [3.0f32, 5.0];
        assert_eq!(Tolerance::Exact.check(&signal, &kernel, &expected, &[3.0, 5.0]), Ok(()));
        assert_eq!(Tolerance::Exact.check(&signal, &kernel, &expected, &[3.0, 5.5]), Err(1));
        assert_eq!(Tolerance::Reassociated.check(&signal, &kernel, &expected, &[3.0]), Err(1));

        let nudged = f32::from_bits(5.0f32.to_bits() + 1);
        assert_eq!(
            Tolerance::Reassociated.check(&signal, &kernel, &expected, &[3.0, nudged]),
            Ok(())
        );
        assert!(Tolerance::Fused.bound(&signal, &kernel) > Tolerance::Reassociated.bound(&signal, &kernel));
    }
}
