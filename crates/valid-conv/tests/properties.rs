//! Property-based tests: every strategy against the scalar reference.

use proptest::prelude::*;
use valid_conv::{ConvError, Convolver, Requirements, Variant};

/// Kernel length a variant accepts, given a block count.
fn kernel_len(req: Requirements, blocks: usize) -> usize {
    req.fixed_len.unwrap_or(8 * blocks)
}

fn reference(signal: &[f32], kernel: &[f32]) -> Vec<f32> {
    valid_conv::convolve_valid(signal, kernel).unwrap()
}

proptest! {
    #[test]
    fn prop_every_variant_matches_reference(
        signal in prop::collection::vec(-4.0f32..4.0, 160),
        kernel in prop::collection::vec(-2.0f32..2.0, 32),
        blocks in 1usize..=4,
        n_out in 1usize..=100,
    ) {
        for variant in Variant::ALL {
            let k = kernel_len(variant.requirements(), blocks);
            let signal = &signal[..n_out + k - 1];
            let kernel = &kernel[..k];

            let expected = reference(signal, kernel);
            let out = Convolver::new(variant).force().run(signal, kernel).unwrap();
            prop_assert_eq!(
                variant.tolerance().check(signal, kernel, &expected, &out),
                Ok(()),
                "{} n_out={} k={}", variant, n_out, k
            );
        }
    }

    #[test]
    fn prop_any_kernel_length(
        signal in prop::collection::vec(-4.0f32..4.0, 64),
        kernel in prop::collection::vec(-2.0f32..2.0, 20),
        k in 1usize..=20,
        n_out in 1usize..=44,
    ) {
        let signal = &signal[..n_out + k - 1];
        let kernel = &kernel[..k];
        let expected = reference(signal, kernel);

        for variant in Variant::ALL.into_iter().filter(|v| v.requirements() == Requirements::NONE) {
            let out = Convolver::new(variant).force().run(signal, kernel).unwrap();
            prop_assert_eq!(out.len(), signal.len() - kernel.len() + 1);
            prop_assert_eq!(
                variant.tolerance().check(signal, kernel, &expected, &out),
                Ok(()),
                "{} k={}", variant, k
            );
        }
    }

    #[test]
    fn prop_tail_is_exact(
        signal in prop::collection::vec(-4.0f32..4.0, 160),
        kernel in prop::collection::vec(-2.0f32..2.0, 32),
        blocks in 1usize..=2,
        steps in 0usize..=4,
        extra in 1usize..=15,
    ) {
        for variant in Variant::ALL {
            let strategy = variant.strategy().strategy();
            let k = kernel_len(variant.requirements(), blocks);
            // A non-empty partial step after `steps` full ones.
            let step = strategy.step();
            let n_out = steps * step + 1 + extra % (step.max(2) - 1);
            let signal = &signal[..n_out + k - 1];
            let kernel = &kernel[..k];

            let expected = reference(signal, kernel);
            let out = Convolver::new(variant).force().run(signal, kernel).unwrap();
            let tail = strategy.tail_len(n_out);
            prop_assert_eq!(&out[n_out - tail..], &expected[n_out - tail..], "{}", variant);
        }
    }

    #[test]
    fn prop_scaling_by_power_of_two_is_exact(
        signal in prop::collection::vec(-4.0f32..4.0, 120),
        kernel in prop::collection::vec(-2.0f32..2.0, 16),
        n_out in 1usize..=100,
    ) {
        let kernel = &kernel[..];
        let signal = &signal[..n_out + kernel.len() - 1];
        let scaled: Vec<f32> = kernel.iter().map(|c| c * 4.0).collect();

        for variant in Variant::ALL {
            let conv = Convolver::new(variant).force();
            let base = conv.run(signal, kernel).unwrap();
            let out = conv.run(signal, &scaled).unwrap();
            for (b, o) in base.iter().zip(&out) {
                prop_assert_eq!(b * 4.0, *o, "{}", variant);
            }
        }
    }

    #[test]
    fn prop_additive_in_kernel(
        signal in prop::collection::vec(-4.0f32..4.0, 120),
        k1 in prop::collection::vec(-2.0f32..2.0, 16),
        k2 in prop::collection::vec(-2.0f32..2.0, 16),
        n_out in 1usize..=100,
    ) {
        let signal = &signal[..n_out + 15];
        let sum: Vec<f32> = k1.iter().zip(&k2).map(|(a, b)| a + b).collect();

        for variant in Variant::ALL {
            let conv = Convolver::new(variant).force();
            let lhs = conv.run(signal, &sum).unwrap();
            let a = conv.run(signal, &k1).unwrap();
            let b = conv.run(signal, &k2).unwrap();

            for i in 0..n_out {
                let magnitude: f32 = signal[i..i + 16]
                    .iter()
                    .zip(k1.iter().rev().zip(k2.iter().rev()))
                    .map(|(x, (c1, c2))| x.abs() * (c1.abs() + c2.abs()))
                    .sum();
                let bound = 4.0 * 17.0 * f32::EPSILON * magnitude + f32::MIN_POSITIVE;
                prop_assert!(
                    (lhs[i] - (a[i] + b[i])).abs() <= bound,
                    "{} i={} lhs={} rhs={}", variant, i, lhs[i], a[i] + b[i]
                );
            }
        }
    }

    #[test]
    fn prop_output_length_law(
        n in 1usize..=64,
        k in 1usize..=64,
        delta in 1usize..=3,
    ) {
        let signal = vec![1.0f32; n];
        let kernel = vec![1.0f32; k];
        let conv = Convolver::new(Variant::Reordered);
        if k > n {
            prop_assert_eq!(
                conv.run(&signal, &kernel),
                Err(ConvError::KernelTooLong { kernel_len: k, signal_len: n })
            );
        } else {
            let expected = n - k + 1;
            prop_assert_eq!(conv.run(&signal, &kernel).unwrap().len(), expected);

            let mut wrong = vec![0.0f32; expected + delta];
            prop_assert_eq!(
                conv.execute(&signal, &kernel, &mut wrong),
                Err(ConvError::OutputLength { expected, actual: expected + delta })
            );
        }
    }
}

#[test]
fn scenario_for_every_variant() {
    let signal = [1.0f32, 2.0, 3.0, 4.0, 5.0];
    let kernel = [1.0f32, 0.0, -1.0];

    for variant in Variant::ALL {
        let req = variant.requirements();
        let k = req.fixed_len.unwrap_or(req.multiple.max(3));
        let pad = k - 3;

        let mut padded_kernel = kernel.to_vec();
        padded_kernel.resize(k, 0.0);
        let mut padded_signal = vec![0.0f32; pad];
        padded_signal.extend_from_slice(&signal);

        let out = Convolver::new(variant)
            .force()
            .run(&padded_signal, &padded_kernel)
            .unwrap();
        assert_eq!(out, vec![2.0, 2.0, 2.0], "{}", variant);
    }
}

#[test]
fn single_tap_scales_signal() {
    let signal: Vec<f32> = (0..37).map(|i| i as f32 - 18.0).collect();
    for variant in Variant::ALL.into_iter().filter(|v| v.requirements().admits(1)) {
        let out = Convolver::new(variant).force().run(&signal, &[3.0]).unwrap();
        let expected: Vec<f32> = signal.iter().map(|x| x * 3.0).collect();
        assert_eq!(out, expected, "{}", variant);
    }
}

#[test]
fn full_length_kernel_is_dot_product() {
    let signal: Vec<f32> = (1..=16).map(|i| i as f32).collect();
    let kernel: Vec<f32> = (0..16).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
    // Σ signal[k] * kernel[15 - k]; kernel[15 - k] = -1 for even k.
    let expected: f32 = (0..16).map(|k| signal[k] * kernel[15 - k]).sum();
    for variant in Variant::ALL {
        let out = Convolver::new(variant).force().run(&signal, &kernel).unwrap();
        assert_eq!(out, vec![expected], "{}", variant);
    }
}

#[test]
fn unsupported_variants_are_rejected() {
    for variant in Variant::ALL.into_iter().filter(|v| !v.is_available()) {
        let err = Convolver::new(variant)
            .run(&[0.0; 32], &[0.0; 16])
            .unwrap_err();
        assert!(matches!(err, ConvError::Unsupported { .. }), "{}", variant);
    }
}
