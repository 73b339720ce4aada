use std::fmt::Debug;
use std::ops::{Add, Mul};

use bytemuck::Pod;
use wide::{f32x4, f32x8};

/// An `f32` SIMD register type used by the vector strategies.
///
/// Implemented for `wide::f32x4` (narrow, 16 bytes) and `wide::f32x8`
/// (wide, 32 bytes). Both are `Pod` with alignment equal to their size,
/// which is what lets [`crate::core::AlignedBuffer`] hand out aligned
/// vector slices.
pub trait Lanes:
    Copy + Send + Sync + Debug + Pod + Add<Output = Self> + Mul<Output = Self> + 'static
{
    /// Number of `f32` lanes.
    const WIDTH: usize;

    /// Every lane set to `value`.
    fn splat(value: f32) -> Self;

    /// All lanes zero.
    #[inline(always)]
    fn zero() -> Self {
        Self::splat(0.0)
    }

    /// `self * m + a` with a single rounding in every lane.
    ///
    /// Always fused. Compiled with the `fma` target feature this is one
    /// instruction per lane group; without it the rounding is emulated.
    fn mul_add(self, m: Self, a: Self) -> Self;

    /// Unaligned load of the first `WIDTH` samples of `src`.
    ///
    /// # Panics
    /// If `src` holds fewer than `WIDTH` samples.
    fn load(src: &[f32]) -> Self;

    /// Unaligned store into the first `WIDTH` samples of `dst`.
    ///
    /// # Panics
    /// If `dst` holds fewer than `WIDTH` samples.
    fn store(self, dst: &mut [f32]);
}

impl Lanes for f32x4 {
    const WIDTH: usize = 4;

    #[inline(always)]
    fn splat(value: f32) -> Self {
        f32x4::splat(value)
    }

    #[inline(always)]
    fn mul_add(self, m: Self, a: Self) -> Self {
        let (x, y, z): ([f32; 4], [f32; 4], [f32; 4]) = (self.into(), m.into(), a.into());
        f32x4::from(std::array::from_fn::<f32, 4, _>(|l| x[l].mul_add(y[l], z[l])))
    }

    #[inline(always)]
    fn load(src: &[f32]) -> Self {
        bytemuck::pod_read_unaligned(bytemuck::cast_slice(&src[..4]))
    }

    #[inline(always)]
    fn store(self, dst: &mut [f32]) {
        let lanes: [f32; 4] = self.into();
        dst[..4].copy_from_slice(&lanes);
    }
}

impl Lanes for f32x8 {
    const WIDTH: usize = 8;

    #[inline(always)]
    fn splat(value: f32) -> Self {
        f32x8::splat(value)
    }

    #[inline(always)]
    fn mul_add(self, m: Self, a: Self) -> Self {
        let (x, y, z): ([f32; 8], [f32; 8], [f32; 8]) = (self.into(), m.into(), a.into());
        f32x8::from(std::array::from_fn::<f32, 8, _>(|l| x[l].mul_add(y[l], z[l])))
    }

    #[inline(always)]
    fn load(src: &[f32]) -> Self {
        bytemuck::pod_read_unaligned(bytemuck::cast_slice(&src[..8]))
    }

    #[inline(always)]
    fn store(self, dst: &mut [f32]) {
        let lanes: [f32; 8] = self.into();
        dst[..8].copy_from_slice(&lanes);
    }
}
