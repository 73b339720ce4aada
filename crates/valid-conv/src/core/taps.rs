use crate::error::{ConvError, Result};
use crate::types::{BlockedKernel, Lanes};

/// Reversed kernel with every coefficient broadcast across a vector.
///
/// `taps[t]` holds `kernel[K-1-t]` in every lane, so tap `t` multiplies the
/// signal window starting `t` samples after the output position.
#[derive(Debug, Clone)]
pub struct ReversedTaps<V: Lanes> {
    taps: Vec<V>,
}

impl<V: Lanes> ReversedTaps<V> {
    /// Reverse and broadcast any kernel.
    pub fn new(kernel: &[f32]) -> Self {
        Self {
            taps: kernel.iter().rev().map(|&c| V::splat(c)).collect(),
        }
    }

    /// Reverse and broadcast a kernel whose length is a multiple of `M`.
    pub fn blocked<const M: usize>(kernel: BlockedKernel<'_, M>) -> Self {
        Self::new(kernel.coeffs())
    }

    /// Broadcast taps in application order.
    #[inline]
    pub fn as_slice(&self) -> &[V] {
        &self.taps
    }

    /// Number of taps.
    #[inline]
    pub fn len(&self) -> usize {
        self.taps.len()
    }

    /// Whether there are no taps.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.taps.is_empty()
    }
}

/// Reversed broadcast taps for a kernel length fixed at compile time.
#[derive(Debug, Clone, Copy)]
pub struct FixedTaps<V: Lanes, const K: usize> {
    taps: [V; K],
}

impl<V: Lanes, const K: usize> FixedTaps<V, K> {
    /// Reverse and broadcast `kernel`, which must hold exactly `K` taps.
    pub fn new(kernel: &[f32]) -> Result<Self> {
        if kernel.len() != K {
            return Err(ConvError::FixedKernelLength {
                expected: K,
                actual: kernel.len(),
            });
        }
        Ok(Self {
            taps: std::array::from_fn(|t| V::splat(kernel[K - 1 - t])),
        })
    }

    /// Broadcast taps in application order.
    #[inline(always)]
    pub fn as_array(&self) -> &[V; K] {
        &self.taps
    }
}
