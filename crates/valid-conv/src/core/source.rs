//! Tap sources: where a strategy gets the signal window for one tap.
//!
//! A source answers one question: the vector of signal samples
//! `signal[pos + tap .. pos + tap + V::WIDTH]`. The engine always asks for
//! `pos` a multiple of `V::WIDTH`; the replica sources rely on that to turn
//! the request into an aligned offset.

use wide::{f32x4, f32x8};

use super::replicas::Replicas;
use crate::types::{Lanes, LoadMode};

/// Supplies the signal window for one `(output position, tap)` pair.
pub trait TapSource<V: Lanes> {
    /// Descriptor of the load technique.
    const MODE: LoadMode;

    /// `signal[pos + tap .. pos + tap + V::WIDTH]`.
    fn load(&self, pos: usize, tap: usize) -> V;
}

/// Unaligned loads straight from the caller's signal.
#[derive(Debug, Clone, Copy)]
pub struct Unaligned<'a> {
    signal: &'a [f32],
}

impl<'a> Unaligned<'a> {
    /// Read from `signal`.
    pub fn new(signal: &'a [f32]) -> Self {
        Self { signal }
    }
}

impl<V: Lanes> TapSource<V> for Unaligned<'_> {
    const MODE: LoadMode = LoadMode::Unaligned;

    #[inline(always)]
    fn load(&self, pos: usize, tap: usize) -> V {
        V::load(&self.signal[pos + tap..])
    }
}

/// Unaligned vector loads from shifted replicas.
///
/// Used when the replica set is narrower than the vector, so offsets are
/// only guaranteed to be multiples of `R`.
#[derive(Debug, Clone, Copy)]
pub struct ReplicaUnaligned<'a, const R: usize> {
    replicas: &'a Replicas<R>,
}

impl<'a, const R: usize> ReplicaUnaligned<'a, R> {
    /// Read from `replicas`.
    pub fn new(replicas: &'a Replicas<R>) -> Self {
        Self { replicas }
    }
}

impl<V: Lanes, const R: usize> TapSource<V> for ReplicaUnaligned<'_, R> {
    const MODE: LoadMode = LoadMode::ReplicaUnaligned { replicas: R };

    #[inline(always)]
    fn load(&self, pos: usize, tap: usize) -> V {
        let (r, offset) = Replicas::<R>::locate(pos + tap);
        self.replicas.copy(r).load_unaligned(offset)
    }
}

/// Aligned vector loads from shifted replicas.
///
/// Only constructible when `R` is a multiple of the vector width, which
/// makes every offset handed out by [`Replicas::locate`] aligned for `V`.
#[derive(Debug, Clone, Copy)]
pub struct ReplicaAligned<'a, const R: usize> {
    replicas: &'a Replicas<R>,
}

impl<'a, const R: usize> ReplicaAligned<'a, R> {
    /// Read from `replicas` with aligned `V` loads.
    pub fn new<V: Lanes>(replicas: &'a Replicas<R>) -> Self {
        const { assert!(R % V::WIDTH == 0, "replica count must cover the vector width") };
        Self { replicas }
    }
}

impl<V: Lanes, const R: usize> TapSource<V> for ReplicaAligned<'_, R> {
    const MODE: LoadMode = LoadMode::ReplicaAligned { replicas: R };

    #[inline(always)]
    fn load(&self, pos: usize, tap: usize) -> V {
        let (r, offset) = Replicas::<R>::locate(pos + tap);
        self.replicas.copy(r).load_aligned(offset)
    }
}

/// Wide vectors assembled from two aligned narrow loads of a 4-replica set.
#[derive(Debug, Clone, Copy)]
pub struct ReplicaComposed<'a> {
    replicas: &'a Replicas<4>,
}

impl<'a> ReplicaComposed<'a> {
    /// Read from `replicas`.
    pub fn new(replicas: &'a Replicas<4>) -> Self {
        Self { replicas }
    }
}

impl TapSource<f32x8> for ReplicaComposed<'_> {
    const MODE: LoadMode = LoadMode::ReplicaComposed { replicas: 4 };

    #[inline(always)]
    fn load(&self, pos: usize, tap: usize) -> f32x8 {
        let (r, offset) = Replicas::<4>::locate(pos + tap);
        let copy = self.replicas.copy(r);
        let lo: f32x4 = copy.load_aligned(offset);
        let hi: f32x4 = copy.load_aligned(offset + 4);
        bytemuck::cast([lo, hi])
    }
}

/// Aligned wide loads where a 4-replica offset happens to be a multiple of
/// 8, unaligned wide loads for the other half of the taps.
#[derive(Debug, Clone, Copy)]
pub struct ReplicaMixed<'a> {
    replicas: &'a Replicas<4>,
}

impl<'a> ReplicaMixed<'a> {
    /// Read from `replicas`.
    pub fn new(replicas: &'a Replicas<4>) -> Self {
        Self { replicas }
    }
}

impl TapSource<f32x8> for ReplicaMixed<'_> {
    const MODE: LoadMode = LoadMode::ReplicaMixed { replicas: 4 };

    #[inline(always)]
    fn load(&self, pos: usize, tap: usize) -> f32x8 {
        let (r, offset) = Replicas::<4>::locate(pos + tap);
        let copy = self.replicas.copy(r);
        if offset % 8 == 0 {
            copy.load_aligned(offset)
        } else {
            copy.load_unaligned(offset)
        }
    }
}
