// File: crates/meshgrid-core/src/mesh.rs
// Summary: Dense D-dimensional coordinate grids and the meshgrid builder.
// Notes:
// - `MeshGrid<T, K, D>` holds axis K's samples broadcast across the other D-1 axes,
//   so grid[[i_0, .., i_(D-1)]] == axis_K[i_K] for every in-range index.
// - Storage is row-major (see `layout`); every grid of one `meshgrid` call shares it.
// - Grids are read-only once built and own their buffers.

use std::ops::Index;

use crate::coords::Coords;
use crate::error::{MeshError, Result};
use crate::layout::GridLayout;

/// Axis `K` of a `D`-dimensional sample space, materialized over the full index space.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshGrid<T, const K: usize, const D: usize> {
    layout: GridLayout<D>,
    data: Vec<T>,
}

impl<T, const K: usize, const D: usize> MeshGrid<T, K, D> {
    /// Index of the broadcast axis.
    pub const AXIS: usize = K;
    /// Dimension count of the sample space.
    pub const DIMS: usize = D;

    const AXIS_IN_RANGE: () = assert!(K < D, "broadcast axis must be below the dimension count");

    pub fn layout(&self) -> &GridLayout<D> { &self.layout }
    pub fn shape(&self) -> [usize; D] { self.layout.shape() }
    pub fn len(&self) -> usize { self.data.len() }
    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    /// Flat row-major buffer (last axis fastest).
    pub fn as_slice(&self) -> &[T] { &self.data }
    pub fn into_vec(self) -> Vec<T> { self.data }
    pub fn iter(&self) -> std::slice::Iter<'_, T> { self.data.iter() }

    /// Checked access; `None` if any component is out of range.
    pub fn get(&self, index: [usize; D]) -> Option<&T> {
        self.layout.checked_offset(index).map(|off| &self.data[off])
    }

    /// Every element paired with its D-dimensional index, in buffer order.
    pub fn indexed_iter(&self) -> impl Iterator<Item = ([usize; D], &T)> + '_ {
        self.data.iter().enumerate().map(move |(off, v)| (self.layout.unravel(off), v))
    }
}

impl<T: Clone, const K: usize, const D: usize> MeshGrid<T, K, D> {
    /// The samples along axis `K`, read back from the grid (empty if the grid is empty).
    pub fn axis_values(&self) -> Vec<T> {
        if self.data.is_empty() { return Vec::new(); }
        let stride = self.layout.strides()[K];
        (0..self.layout.shape()[K]).map(|i| self.data[i * stride].clone()).collect()
    }
}

/// Build the grid for axis `K` of a sample space with extents `shape`.
///
/// Fails with [`MeshError::AxisLengthMismatch`] if `axis.len() != shape[K]`, and with
/// [`MeshError::ShapeOverflow`] if the element count does not fit in `usize`.
pub fn broadcast_axis<T: Clone, const K: usize, const D: usize>(axis: &[T], shape: [usize; D]) -> Result<MeshGrid<T, K, D>> {
    #[allow(clippy::let_unit_value)]
    let () = MeshGrid::<T, K, D>::AXIS_IN_RANGE;
    if axis.len() != shape[K] {
        return Err(MeshError::AxisLengthMismatch { axis: K, expected: shape[K], got: axis.len() });
    }
    Ok(fill_axis(axis, GridLayout::try_new(shape)?))
}

// Each sample is repeated stride[K] times and that run pattern is tiled over the
// slower axes, visiting the buffer once. Requires axis.len() == layout.shape()[K].
fn fill_axis<T: Clone, const K: usize, const D: usize>(axis: &[T], layout: GridLayout<D>) -> MeshGrid<T, K, D> {
    #[allow(clippy::let_unit_value)]
    let () = MeshGrid::<T, K, D>::AXIS_IN_RANGE;
    debug_assert_eq!(axis.len(), layout.shape()[K]);

    let len = layout.len();
    let mut data = Vec::with_capacity(len);
    if len > 0 {
        let run = layout.strides()[K];
        let tiles = len / (run * axis.len());
        for _ in 0..tiles {
            for v in axis {
                data.extend(std::iter::repeat(v).take(run).cloned());
            }
        }
    }
    debug_assert_eq!(data.len(), len);
    MeshGrid { layout, data }
}

impl<T, const K: usize, const D: usize> Index<[usize; D]> for MeshGrid<T, K, D> {
    type Output = T;
    #[inline]
    fn index(&self, index: [usize; D]) -> &T { &self.data[self.layout.offset(index)] }
}

impl<T, const K: usize> Index<(usize, usize)> for MeshGrid<T, K, 2> {
    type Output = T;
    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T { &self[[i, j]] }
}

impl<T, const K: usize> Index<(usize, usize, usize)> for MeshGrid<T, K, 3> {
    type Output = T;
    #[inline]
    fn index(&self, (i, j, l): (usize, usize, usize)) -> &T { &self[[i, j, l]] }
}

/// A tuple of per-axis coordinate arguments that can be expanded into one grid per axis.
pub trait Meshgrid<'a, T: Clone + 'a> {
    type Output;
    fn meshgrid(self) -> Self::Output;
}

macro_rules! impl_meshgrid {
    ($d:literal; $($k:literal => $a:ident),+) => {
        impl<'a, T: Clone + 'a, $($a: Coords<'a, T>),+> Meshgrid<'a, T> for ($($a,)+) {
            type Output = ($(MeshGrid<T, $k, $d>,)+);

            #[allow(non_snake_case)]
            fn meshgrid(self) -> Self::Output {
                let ($($a,)+) = self;
                let ($($a,)+) = ($($a.into_coords(),)+);
                let layout = GridLayout::new([$($a.len()),+]);
                ($(fill_axis::<T, $k, $d>(&$a, layout),)+)
            }
        }
    };
}

impl_meshgrid!(2; 0 => A0, 1 => A1);
impl_meshgrid!(3; 0 => A0, 1 => A1, 2 => A2);
impl_meshgrid!(4; 0 => A0, 1 => A1, 2 => A2, 3 => A3);
impl_meshgrid!(5; 0 => A0, 1 => A1, 2 => A2, 3 => A3, 4 => A4);
impl_meshgrid!(6; 0 => A0, 1 => A1, 2 => A2, 3 => A3, 4 => A4, 5 => A5);

/// Expand one coordinate sequence per axis into one dense grid per axis.
///
/// Panics if the product of the axis lengths overflows `usize`, as `Vec::with_capacity` would.
///
/// ```
/// use meshgrid_core::meshgrid;
///
/// let x = vec![0.0, 1.0, 2.0];
/// let y = [10.0, 20.0];
/// let (gx, gy) = meshgrid((&x, &y));
/// assert_eq!(gx.shape(), [3, 2]);
/// assert_eq!(gx[(2, 1)], 2.0);
/// assert_eq!(gy[(2, 1)], 20.0);
/// ```
pub fn meshgrid<'a, T, M>(axes: M) -> M::Output
where
    T: Clone + 'a,
    M: Meshgrid<'a, T>,
{
    axes.meshgrid()
}
