//! Convolution strategies.
//!
//! Scalar strategies are the reference; the narrow (4-wide) and wide
//! (8-wide) families are compositions of a tap source, an accumulation
//! rule, a tap block and an accumulator count on one shared main loop.

mod narrow;
mod scalar;
mod wide;

pub use narrow::{
    NarrowAligned, NarrowAlignedX2, NarrowAlignedX4, NarrowFixed, NarrowPlain, NarrowUnrolled,
};
pub use scalar::{Naive, Reordered};
pub use wide::{
    WideAligned, WideComposed, WideFma, WideLocalOutput, WidePartial, WideReplica, WideUnaligned,
};

#[cfg(target_arch = "x86_64")]
use super::detect::{simd_level, SimdLevel};
use crate::core::{convolve_blocked, Accumulate, TapSource};
use crate::types::{BlockedKernel, Lanes};

/// Blocked view of a kernel inside `execute`, where a bad length panics.
fn blocked<const M: usize>(kernel: &[f32]) -> BlockedKernel<'_, M> {
    match BlockedKernel::new(kernel) {
        Ok(kernel) => kernel,
        Err(err) => panic!("{}", err),
    }
}

/// Shared main loop, compiled for the best instruction set the CPU reports.
///
/// On x86-64 the loop runs inside a `#[target_feature]` entry point picked
/// from [`simd_level`], so `f32x8` work gets 256-bit registers and fused
/// multiply-adds lower to single instructions. Everywhere else, and on CPUs
/// below SSE3, the portable build runs.
#[inline(always)]
fn blocked_loop<V, S, A, T, const BLOCK: usize, const ACC: usize>(
    source: &S,
    taps: &T,
    signal: &[f32],
    kernel: &[f32],
    output: &mut [f32],
) where
    V: Lanes,
    S: TapSource<V>,
    A: Accumulate,
    T: AsRef<[V]> + ?Sized,
{
    #[cfg(target_arch = "x86_64")]
    {
        match simd_level() {
            // SAFETY: each entry point is only reached after runtime detection
            // confirmed its features.
            SimdLevel::AvxFma => {
                return unsafe {
                    x86::avx_fma::<V, S, A, T, BLOCK, ACC>(source, taps, signal, kernel, output)
                };
            }
            SimdLevel::Avx => {
                return unsafe {
                    x86::avx::<V, S, A, T, BLOCK, ACC>(source, taps, signal, kernel, output)
                };
            }
            SimdLevel::Sse3 => {
                return unsafe {
                    x86::sse3::<V, S, A, T, BLOCK, ACC>(source, taps, signal, kernel, output)
                };
            }
            _ => {}
        }
    }

    convolve_blocked::<V, S, A, T, BLOCK, ACC>(source, taps, signal, kernel, output);
}

#[cfg(target_arch = "x86_64")]
mod x86 {
    use crate::core::{convolve_blocked, Accumulate, TapSource};
    use crate::types::Lanes;

    #[target_feature(enable = "sse3")]
    pub(super) unsafe fn sse3<V, S, A, T, const BLOCK: usize, const ACC: usize>(
        source: &S,
        taps: &T,
        signal: &[f32],
        kernel: &[f32],
        output: &mut [f32],
    ) where
        V: Lanes,
        S: TapSource<V>,
        A: Accumulate,
        T: AsRef<[V]> + ?Sized,
    {
        convolve_blocked::<V, S, A, T, BLOCK, ACC>(source, taps, signal, kernel, output);
    }

    #[target_feature(enable = "avx")]
    pub(super) unsafe fn avx<V, S, A, T, const BLOCK: usize, const ACC: usize>(
        source: &S,
        taps: &T,
        signal: &[f32],
        kernel: &[f32],
        output: &mut [f32],
    ) where
        V: Lanes,
        S: TapSource<V>,
        A: Accumulate,
        T: AsRef<[V]> + ?Sized,
    {
        convolve_blocked::<V, S, A, T, BLOCK, ACC>(source, taps, signal, kernel, output);
    }

    #[target_feature(enable = "avx,fma")]
    pub(super) unsafe fn avx_fma<V, S, A, T, const BLOCK: usize, const ACC: usize>(
        source: &S,
        taps: &T,
        signal: &[f32],
        kernel: &[f32],
        output: &mut [f32],
    ) where
        V: Lanes,
        S: TapSource<V>,
        A: Accumulate,
        T: AsRef<[V]> + ?Sized,
    {
        convolve_blocked::<V, S, A, T, BLOCK, ACC>(source, taps, signal, kernel, output);
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::noise;
    use super::*;
    use crate::core::{Fused, ReversedTaps, Separate, Unaligned};
    use ::wide::{f32x4, f32x8};

    #[test]
    fn test_entry_point_matches_portable_build() {
        let signal = noise(100, 31);
        let kernel = noise(16, 32);
        let source = Unaligned::new(&signal);
        let wide = ReversedTaps::<f32x8>::new(&kernel);
        let narrow = ReversedTaps::<f32x4>::new(&kernel);

        let mut portable = vec![0.0f32; 85];
        let mut dispatched = vec![f32::NAN; 85];

        convolve_blocked::<f32x8, _, Fused, _, 8, 2>(
            &source,
            wide.as_slice(),
            &signal,
            &kernel,
            &mut portable,
        );
        blocked_loop::<f32x8, _, Fused, _, 8, 2>(
            &source,
            wide.as_slice(),
            &signal,
            &kernel,
            &mut dispatched,
        );
        assert_eq!(dispatched, portable);

        convolve_blocked::<f32x4, _, Separate, _, 4, 4>(
            &source,
            narrow.as_slice(),
            &signal,
            &kernel,
            &mut portable,
        );
        blocked_loop::<f32x4, _, Separate, _, 4, 4>(
            &source,
            narrow.as_slice(),
            &signal,
            &kernel,
            &mut dispatched,
        );
        assert_eq!(dispatched, portable);
    }
}
