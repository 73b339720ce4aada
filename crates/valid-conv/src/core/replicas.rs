use wide::f32x8;

use crate::types::Lanes;

/// Zero-padded `f32` storage whose base address is 32-byte aligned.
///
/// The samples live in a `Vec<f32x8>`, so alignment is a property of the
/// element type rather than of the allocator. Aligned vector loads are
/// plain indexing into [`AlignedBuffer::lanes`]; there is no way to issue
/// one against memory that lacks the guarantee.
#[derive(Debug, Clone)]
pub struct AlignedBuffer {
    blocks: Vec<f32x8>,
    len: usize,
}

impl AlignedBuffer {
    /// Byte alignment of the storage.
    pub const ALIGN: usize = 32;

    /// `len` zeroed samples.
    pub fn zeroed(len: usize) -> Self {
        Self {
            blocks: vec![f32x8::splat(0.0); len.div_ceil(8)],
            len,
        }
    }

    /// Copy of `src[shift..]`, padded with zeros to `src.len()` samples.
    ///
    /// Element `j` equals `src[j + shift]`, so the sample at `shift + q`
    /// sits at an aligned address whenever `q` is a multiple of the lane
    /// width.
    pub fn shifted(src: &[f32], shift: usize) -> Self {
        let mut buf = Self::zeroed(src.len());
        if let Some(tail) = src.get(shift..) {
            buf.as_mut_slice()[..tail.len()].copy_from_slice(tail);
        }
        buf
    }

    /// Logical length in samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the buffer holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Samples as a flat slice.
    #[inline(always)]
    pub fn as_slice(&self) -> &[f32] {
        &bytemuck::cast_slice::<f32x8, f32>(self.blocks.as_slice())[..self.len]
    }

    /// Samples as a flat mutable slice.
    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut bytemuck::cast_slice_mut::<f32x8, f32>(self.blocks.as_mut_slice())[..self.len]
    }

    /// Storage viewed as aligned vectors of type `V`, padding included.
    #[inline(always)]
    pub fn lanes<V: Lanes>(&self) -> &[V] {
        bytemuck::cast_slice(self.blocks.as_slice())
    }

    /// Aligned load of `V::WIDTH` samples starting at `offset`.
    ///
    /// # Panics
    /// If `offset` is not a multiple of `V::WIDTH` (debug builds) or the
    /// load runs past the padded storage.
    #[inline(always)]
    pub fn load_aligned<V: Lanes>(&self, offset: usize) -> V {
        debug_assert_eq!(offset % V::WIDTH, 0, "misaligned offset {}", offset);
        self.lanes::<V>()[offset / V::WIDTH]
    }

    /// Unaligned load of `V::WIDTH` samples starting at `offset`.
    #[inline(always)]
    pub fn load_unaligned<V: Lanes>(&self, offset: usize) -> V {
        V::load(&bytemuck::cast_slice::<f32x8, f32>(self.blocks.as_slice())[offset..])
    }
}

/// `R` copies of the signal, copy `r` starting at sample `r`.
///
/// Sample `p` of the signal sits at offset `p - p % R` of copy `p % R`, so
/// every sample is reachable from an offset that is a multiple of `R`.
/// Building the set costs `O(N * R)` copies per call.
#[derive(Debug, Clone)]
pub struct Replicas<const R: usize> {
    copies: [AlignedBuffer; R],
}

impl<const R: usize> Replicas<R> {
    /// Build all `R` shifted copies of `signal`.
    pub fn new(signal: &[f32]) -> Self {
        Self {
            copies: std::array::from_fn(|r| AlignedBuffer::shifted(signal, r)),
        }
    }

    /// Copy `r`.
    #[inline(always)]
    pub fn copy(&self, r: usize) -> &AlignedBuffer {
        &self.copies[r]
    }

    /// Split an absolute signal position into `(copy, aligned offset)`.
    #[inline(always)]
    pub fn locate(position: usize) -> (usize, usize) {
        let r = position % R;
        (r, position - r)
    }
}
