use wide::f32x8;

use super::{blocked, blocked_loop};
use crate::core::{
    Accumulate, Convolve, Fused, ReplicaAligned, ReplicaComposed, ReplicaMixed, ReplicaUnaligned,
    Replicas, ReversedTaps, Separate, TapSource, Unaligned,
};
use crate::types::{Capability, OutputMode, Requirements, Strategy};

/// Accumulators per step for every wide strategy.
const ACC: usize = 2;
/// Taps per unrolled group.
const BLOCK: usize = 8;

fn descriptor<S: TapSource<f32x8>, A: Accumulate>(output: OutputMode) -> Strategy {
    Strategy {
        lanes: 8,
        accumulators: ACC,
        tap_block: BLOCK,
        load: S::MODE,
        fused: A::FUSED,
        output,
        fixed_kernel: None,
    }
}

#[inline(always)]
fn run<S: TapSource<f32x8>, A: Accumulate>(
    source: &S,
    signal: &[f32],
    kernel: &[f32],
    output: &mut [f32],
) {
    let taps = ReversedTaps::<f32x8>::blocked(blocked::<BLOCK>(kernel));
    blocked_loop::<f32x8, S, A, _, BLOCK, ACC>(source, taps.as_slice(), signal, kernel, output);
}

/// Eight-wide unaligned loads straight from the signal.
#[derive(Debug, Default, Clone, Copy)]
pub struct WideUnaligned;

impl Convolve for WideUnaligned {
    fn name(&self) -> &'static str {
        "wide_unaligned"
    }

    fn capability(&self) -> Capability {
        Capability::Wide
    }

    fn requirements(&self) -> Requirements {
        Requirements::multiple_of(BLOCK)
    }

    fn strategy(&self) -> Strategy {
        descriptor::<Unaligned<'_>, Separate>(OutputMode::Direct)
    }

    fn execute(&self, signal: &[f32], kernel: &[f32], output: &mut [f32]) {
        run::<_, Separate>(&Unaligned::new(signal), signal, kernel, output);
    }
}

/// Eight-wide unaligned loads from four shifted replicas.
#[derive(Debug, Default, Clone, Copy)]
pub struct WideReplica;

impl Convolve for WideReplica {
    fn name(&self) -> &'static str {
        "wide_replica"
    }

    fn capability(&self) -> Capability {
        Capability::Wide
    }

    fn requirements(&self) -> Requirements {
        Requirements::multiple_of(BLOCK)
    }

    fn strategy(&self) -> Strategy {
        descriptor::<ReplicaUnaligned<'_, 4>, Separate>(OutputMode::Direct)
    }

    fn execute(&self, signal: &[f32], kernel: &[f32], output: &mut [f32]) {
        let replicas = Replicas::<4>::new(signal);
        run::<_, Separate>(&ReplicaUnaligned::new(&replicas), signal, kernel, output);
    }
}

/// [`WideUnaligned`] with fused multiply-add accumulation.
///
/// Every tap is folded in with a single rounding, so results may differ
/// from [`WideUnaligned`] in the last bits. On AVX + FMA CPUs the loop is
/// compiled with the `fma` target feature; elsewhere the fused rounding is
/// emulated and slow.
#[derive(Debug, Default, Clone, Copy)]
pub struct WideFma;

impl Convolve for WideFma {
    fn name(&self) -> &'static str {
        "wide_fma"
    }

    fn capability(&self) -> Capability {
        Capability::WideFma
    }

    fn requirements(&self) -> Requirements {
        Requirements::multiple_of(BLOCK)
    }

    fn strategy(&self) -> Strategy {
        descriptor::<Unaligned<'_>, Fused>(OutputMode::Direct)
    }

    fn execute(&self, signal: &[f32], kernel: &[f32], output: &mut [f32]) {
        run::<_, Fused>(&Unaligned::new(signal), signal, kernel, output);
    }
}

/// Each eight-wide window joined from two aligned four-wide loads of a
/// four-replica set.
#[derive(Debug, Default, Clone, Copy)]
pub struct WideComposed;

impl Convolve for WideComposed {
    fn name(&self) -> &'static str {
        "wide_composed"
    }

    fn capability(&self) -> Capability {
        Capability::Wide
    }

    fn requirements(&self) -> Requirements {
        Requirements::multiple_of(BLOCK)
    }

    fn strategy(&self) -> Strategy {
        descriptor::<ReplicaComposed<'_>, Separate>(OutputMode::Direct)
    }

    fn execute(&self, signal: &[f32], kernel: &[f32], output: &mut [f32]) {
        let replicas = Replicas::<4>::new(signal);
        run::<_, Separate>(&ReplicaComposed::new(&replicas), signal, kernel, output);
    }
}

/// Aligned 32-byte loads from eight shifted replicas.
#[derive(Debug, Default, Clone, Copy)]
pub struct WideAligned;

impl Convolve for WideAligned {
    fn name(&self) -> &'static str {
        "wide_aligned"
    }

    fn capability(&self) -> Capability {
        Capability::Wide
    }

    fn requirements(&self) -> Requirements {
        Requirements::multiple_of(BLOCK)
    }

    fn strategy(&self) -> Strategy {
        descriptor::<ReplicaAligned<'_, 8>, Separate>(OutputMode::Direct)
    }

    fn execute(&self, signal: &[f32], kernel: &[f32], output: &mut [f32]) {
        let replicas = Replicas::<8>::new(signal);
        run::<_, Separate>(
            &ReplicaAligned::new::<f32x8>(&replicas),
            signal,
            kernel,
            output,
        );
    }
}

/// Four replicas; aligned eight-wide loads where the replica offset is a
/// multiple of eight, unaligned ones elsewhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct WidePartial;

impl Convolve for WidePartial {
    fn name(&self) -> &'static str {
        "wide_partial"
    }

    fn capability(&self) -> Capability {
        Capability::Wide
    }

    fn requirements(&self) -> Requirements {
        Requirements::multiple_of(BLOCK)
    }

    fn strategy(&self) -> Strategy {
        descriptor::<ReplicaMixed<'_>, Separate>(OutputMode::Direct)
    }

    fn execute(&self, signal: &[f32], kernel: &[f32], output: &mut [f32]) {
        let replicas = Replicas::<4>::new(signal);
        run::<_, Separate>(&ReplicaMixed::new(&replicas), signal, kernel, output);
    }
}

/// [`WideUnaligned`] writing into a call-local buffer, copied out in bulk.
#[derive(Debug, Default, Clone, Copy)]
pub struct WideLocalOutput;

impl Convolve for WideLocalOutput {
    fn name(&self) -> &'static str {
        "wide_local_output"
    }

    fn capability(&self) -> Capability {
        Capability::Wide
    }

    fn requirements(&self) -> Requirements {
        Requirements::multiple_of(BLOCK)
    }

    fn strategy(&self) -> Strategy {
        descriptor::<Unaligned<'_>, Separate>(OutputMode::Local)
    }

    fn execute(&self, signal: &[f32], kernel: &[f32], output: &mut [f32]) {
        let mut local = vec![0.0f32; output.len()];
        run::<_, Separate>(&Unaligned::new(signal), signal, kernel, &mut local);
        output.copy_from_slice(&local);
    }
}
