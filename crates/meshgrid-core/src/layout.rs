// File: crates/meshgrid-core/src/layout.rs
// Summary: Row-major (C order) mapping between D-dimensional indices and flat buffer offsets.
// Contract: the last axis varies fastest; stride[D-1] == 1 and
// stride[j] == stride[j+1] * shape[j+1]. `offset` and `unravel` are inverse bijections on [0, len).

use crate::error::{MeshError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridLayout<const D: usize> {
    shape: [usize; D],
    strides: [usize; D],
    len: usize,
}

impl<const D: usize> GridLayout<D> {
    /// Panics if the element count overflows `usize`, as `Vec::with_capacity` would.
    pub fn new(shape: [usize; D]) -> Self {
        match Self::try_new(shape) {
            Ok(layout) => layout,
            Err(_) => panic!("grid shape {:?} has more elements than usize can count", shape),
        }
    }

    /// Like [`GridLayout::new`], but reports an overflowing element count as [`MeshError::ShapeOverflow`].
    pub fn try_new(shape: [usize; D]) -> Result<Self> {
        let empty = shape.contains(&0);
        let mut strides = [0usize; D];
        let mut acc = 1usize;
        for j in (0..D).rev() {
            strides[j] = acc;
            acc = match acc.checked_mul(shape[j]) {
                Some(next) => next,
                // empty grids are never indexed
                None if empty => usize::MAX,
                None => return Err(MeshError::ShapeOverflow),
            };
        }
        Ok(Self { shape, strides, len: if empty { 0 } else { acc } })
    }

    pub const fn shape(&self) -> [usize; D] { self.shape }
    pub const fn strides(&self) -> [usize; D] { self.strides }

    /// Total element count; 0 as soon as any axis is empty.
    pub const fn len(&self) -> usize { self.len }
    pub const fn is_empty(&self) -> bool { self.len == 0 }

    /// Flat offset of `index`. Components must be in range (asserted in debug builds only).
    #[inline]
    pub fn offset(&self, index: [usize; D]) -> usize {
        let mut off = 0usize;
        for j in 0..D {
            debug_assert!(index[j] < self.shape[j], "index {} out of range for axis {} of size {}", index[j], j, self.shape[j]);
            off += index[j] * self.strides[j];
        }
        off
    }

    pub fn checked_offset(&self, index: [usize; D]) -> Option<usize> {
        if index.iter().zip(self.shape.iter()).any(|(&i, &n)| i >= n) { return None; }
        Some(self.offset(index))
    }

    /// Component `axis` of the index stored at `offset`.
    #[inline]
    pub fn coordinate(&self, offset: usize, axis: usize) -> usize {
        (offset / self.strides[axis]) % self.shape[axis]
    }

    pub fn unravel(&self, offset: usize) -> [usize; D] {
        let mut index = [0usize; D];
        for j in 0..D {
            index[j] = self.coordinate(offset, j);
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use super::GridLayout;
    use crate::error::MeshError;

    #[test]
    fn strides_are_row_major() {
        let l = GridLayout::new([2, 3, 4]);
        assert_eq!(l.strides(), [12, 4, 1]);
        assert_eq!(l.len(), 24);
        assert_eq!(l.offset([1, 2, 3]), 23);
        assert_eq!(l.offset([0, 1, 0]), 4);
    }

    #[test]
    fn offset_and_unravel_are_inverse() {
        let l = GridLayout::new([3, 1, 2, 5]);
        let mut seen = vec![false; l.len()];
        for off in 0..l.len() {
            let idx = l.unravel(off);
            assert_eq!(l.offset(idx), off);
            seen[off] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn empty_axis_means_empty_layout() {
        let l = GridLayout::new([4, 0, 2]);
        assert!(l.is_empty());
        assert_eq!(l.checked_offset([0, 0, 0]), None);
    }

    #[test]
    fn checked_offset_rejects_each_axis() {
        let l = GridLayout::new([2, 3]);
        assert_eq!(l.checked_offset([1, 2]), Some(5));
        assert_eq!(l.checked_offset([2, 0]), None);
        assert_eq!(l.checked_offset([0, 3]), None);
    }

    #[test]
    fn overflowing_shape_is_rejected() {
        assert_eq!(GridLayout::try_new([usize::MAX, 2]), Err(MeshError::ShapeOverflow));
        assert_eq!(GridLayout::try_new([1usize << 30, 1 << 30, 1 << 30]), Err(MeshError::ShapeOverflow));
    }

    #[test]
    fn huge_but_empty_shape_is_fine() {
        let l = GridLayout::try_new([0, usize::MAX, usize::MAX]).expect("empty layout");
        assert_eq!(l.len(), 0);
        assert!(l.is_empty());
    }

    #[test]
    #[should_panic(expected = "more elements than usize can count")]
    fn new_panics_on_overflow() {
        let _ = GridLayout::new([usize::MAX, usize::MAX]);
    }
}
