use super::scalar::finish_tail;
use super::source::TapSource;
use crate::types::Lanes;

/// How one tap's product is folded into an accumulator.
pub trait Accumulate {
    /// Whether the product is fused into the addition.
    const FUSED: bool;

    /// Fold `coeff * data` into `acc`.
    fn accumulate<V: Lanes>(acc: V, coeff: V, data: V) -> V;
}

/// Multiply, round, then add.
#[derive(Debug, Clone, Copy, Default)]
pub struct Separate;

impl Accumulate for Separate {
    const FUSED: bool = false;

    #[inline(always)]
    fn accumulate<V: Lanes>(acc: V, coeff: V, data: V) -> V {
        acc + data * coeff
    }
}

/// Fused multiply-add, a single rounding per tap.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fused;

impl Accumulate for Fused {
    const FUSED: bool = true;

    #[inline(always)]
    fn accumulate<V: Lanes>(acc: V, coeff: V, data: V) -> V {
        data.mul_add(coeff, acc)
    }
}

/// Vector main loop shared by every narrow and wide strategy.
///
/// Each step produces `V::WIDTH * ACC` outputs held in `ACC` independent
/// accumulators. Taps are visited in ascending order, `BLOCK` at a time,
/// and every window comes from `source`. Outputs the last full step cannot
/// reach are finished with the scalar reference routine.
///
/// `taps` must hold the reversed broadcast kernel and its length must be a
/// multiple of `BLOCK`; callers get that from [`crate::types::BlockedKernel`]
/// or a fixed-length tap array. Passing `[V; K]` keeps the tap count a
/// compile-time constant in the monomorphized loop.
///
/// # Panics
/// If `output.len() + kernel.len() != signal.len() + 1`.
#[inline(always)]
pub fn convolve_blocked<V, S, A, T, const BLOCK: usize, const ACC: usize>(
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
    const { assert!(BLOCK > 0 && ACC > 0) };
    assert_eq!(output.len() + kernel.len(), signal.len() + 1, "output length");
    let taps = taps.as_ref();
    debug_assert_eq!(taps.len(), kernel.len());
    debug_assert_eq!(taps.len() % BLOCK, 0);

    let step = V::WIDTH * ACC;
    let mut i = 0;
    while i + step <= output.len() {
        let mut acc = [V::zero(); ACC];

        let blocks = taps
            .chunks_exact(BLOCK)
            .filter_map(|block| <&[V; BLOCK]>::try_from(block).ok());
        for (b, block) in blocks.enumerate() {
            let base = b * BLOCK;
            for (l, &coeff) in block.iter().enumerate() {
                let tap = base + l;
                for (a, sum) in acc.iter_mut().enumerate() {
                    let data = source.load(i + a * V::WIDTH, tap);
                    *sum = A::accumulate(*sum, coeff, data);
                }
            }
        }

        for (a, sum) in acc.iter().enumerate() {
            sum.store(&mut output[i + a * V::WIDTH..]);
        }
        i += step;
    }

    finish_tail(signal, kernel, output, i);
}
