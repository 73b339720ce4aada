use wide::f32x4;

use super::{blocked, blocked_loop};
use crate::core::{Convolve, FixedTaps, ReplicaAligned, Replicas, ReversedTaps, Separate, Unaligned};
use crate::types::{Capability, LoadMode, OutputMode, Requirements, Strategy};

const fn descriptor(
    accumulators: usize,
    tap_block: usize,
    load: LoadMode,
    fixed_kernel: Option<usize>,
) -> Strategy {
    Strategy {
        lanes: 4,
        accumulators,
        tap_block,
        load,
        fused: false,
        output: OutputMode::Direct,
        fixed_kernel,
    }
}

/// Four aligned replicas, `ACC` four-wide accumulators per step.
#[inline(always)]
fn aligned_replicas<const ACC: usize>(signal: &[f32], kernel: &[f32], output: &mut [f32]) {
    let taps = ReversedTaps::<f32x4>::blocked(blocked::<4>(kernel));
    let replicas = Replicas::<4>::new(signal);
    blocked_loop::<f32x4, _, Separate, _, 4, ACC>(
        &ReplicaAligned::new::<f32x4>(&replicas),
        taps.as_slice(),
        signal,
        kernel,
        output,
    );
}

/// Four-wide unaligned loads, one tap at a time, any kernel length.
#[derive(Debug, Default, Clone, Copy)]
pub struct NarrowPlain;

impl Convolve for NarrowPlain {
    fn name(&self) -> &'static str {
        "narrow_plain"
    }

    fn capability(&self) -> Capability {
        Capability::Narrow
    }

    fn strategy(&self) -> Strategy {
        descriptor(1, 1, LoadMode::Unaligned, None)
    }

    fn execute(&self, signal: &[f32], kernel: &[f32], output: &mut [f32]) {
        let taps = ReversedTaps::<f32x4>::new(kernel);
        blocked_loop::<f32x4, _, Separate, _, 1, 1>(
            &Unaligned::new(signal),
            taps.as_slice(),
            signal,
            kernel,
            output,
        );
    }
}

/// Four-wide unaligned loads with taps unrolled in groups of four.
#[derive(Debug, Default, Clone, Copy)]
pub struct NarrowUnrolled;

impl Convolve for NarrowUnrolled {
    fn name(&self) -> &'static str {
        "narrow_unrolled"
    }

    fn capability(&self) -> Capability {
        Capability::Narrow
    }

    fn requirements(&self) -> Requirements {
        Requirements::multiple_of(4)
    }

    fn strategy(&self) -> Strategy {
        descriptor(1, 4, LoadMode::Unaligned, None)
    }

    fn execute(&self, signal: &[f32], kernel: &[f32], output: &mut [f32]) {
        let taps = ReversedTaps::<f32x4>::blocked(blocked::<4>(kernel));
        blocked_loop::<f32x4, _, Separate, _, 4, 1>(
            &Unaligned::new(signal),
            taps.as_slice(),
            signal,
            kernel,
            output,
        );
    }
}

/// Aligned 16-byte loads from four shifted replicas of the signal.
#[derive(Debug, Default, Clone, Copy)]
pub struct NarrowAligned;

impl Convolve for NarrowAligned {
    fn name(&self) -> &'static str {
        "narrow_aligned"
    }

    fn capability(&self) -> Capability {
        Capability::Narrow
    }

    fn requirements(&self) -> Requirements {
        Requirements::multiple_of(4)
    }

    fn strategy(&self) -> Strategy {
        descriptor(1, 4, LoadMode::ReplicaAligned { replicas: 4 }, None)
    }

    fn execute(&self, signal: &[f32], kernel: &[f32], output: &mut [f32]) {
        aligned_replicas::<1>(signal, kernel, output);
    }
}

/// [`NarrowAligned`] with two accumulators, eight outputs per step.
#[derive(Debug, Default, Clone, Copy)]
pub struct NarrowAlignedX2;

impl Convolve for NarrowAlignedX2 {
    fn name(&self) -> &'static str {
        "narrow_aligned_x2"
    }

    fn capability(&self) -> Capability {
        Capability::Narrow
    }

    fn requirements(&self) -> Requirements {
        Requirements::multiple_of(4)
    }

    fn strategy(&self) -> Strategy {
        descriptor(2, 4, LoadMode::ReplicaAligned { replicas: 4 }, None)
    }

    fn execute(&self, signal: &[f32], kernel: &[f32], output: &mut [f32]) {
        aligned_replicas::<2>(signal, kernel, output);
    }
}

/// [`NarrowAligned`] with four accumulators, sixteen outputs per step.
#[derive(Debug, Default, Clone, Copy)]
pub struct NarrowAlignedX4;

impl Convolve for NarrowAlignedX4 {
    fn name(&self) -> &'static str {
        "narrow_aligned_x4"
    }

    fn capability(&self) -> Capability {
        Capability::Narrow
    }

    fn requirements(&self) -> Requirements {
        Requirements::multiple_of(4)
    }

    fn strategy(&self) -> Strategy {
        descriptor(4, 4, LoadMode::ReplicaAligned { replicas: 4 }, None)
    }

    fn execute(&self, signal: &[f32], kernel: &[f32], output: &mut [f32]) {
        aligned_replicas::<4>(signal, kernel, output);
    }
}

/// Four aligned replicas with a kernel of exactly `K` taps.
///
/// The taps stay a `[f32x4; K]` all the way into the main loop.
#[inline(always)]
fn fixed_replicas<const K: usize>(signal: &[f32], kernel: &[f32], output: &mut [f32]) {
    const { assert!(K > 0 && K % 4 == 0, "fixed kernel length must be a multiple of 4") };
    let taps = match FixedTaps::<f32x4, K>::new(kernel) {
        Ok(taps) => taps,
        Err(err) => panic!("{}", err),
    };
    let replicas = Replicas::<4>::new(signal);
    blocked_loop::<f32x4, _, Separate, _, 4, 1>(
        &ReplicaAligned::new::<f32x4>(&replicas),
        taps.as_array(),
        signal,
        kernel,
        output,
    );
}

/// [`NarrowAligned`] with the kernel length fixed at compile time to
/// [`NarrowFixed::TAPS`].
#[derive(Debug, Default, Clone, Copy)]
pub struct NarrowFixed;

impl NarrowFixed {
    /// The only kernel length accepted.
    pub const TAPS: usize = 16;
}

impl Convolve for NarrowFixed {
    fn name(&self) -> &'static str {
        "narrow_fixed"
    }

    fn capability(&self) -> Capability {
        Capability::Narrow
    }

    fn requirements(&self) -> Requirements {
        Requirements::fixed(Self::TAPS, 4)
    }

    fn strategy(&self) -> Strategy {
        descriptor(1, 4, LoadMode::ReplicaAligned { replicas: 4 }, Some(Self::TAPS))
    }

    fn execute(&self, signal: &[f32], kernel: &[f32], output: &mut [f32]) {
        fixed_replicas::<{ NarrowFixed::TAPS }>(signal, kernel, output);
    }
}
