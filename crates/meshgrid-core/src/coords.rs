// File: crates/meshgrid-core/src/coords.rs
// Summary: One coordinate-range abstraction (a contiguous view) with adapters for each input shape.
// Shapes accepted wherever an axis is expected:
// - whole containers: `&Vec<T>`, `&[T]`, `&[T; N]`
// - iterator ranges: `slice::Iter` (borrowed as-is) or `FromIter(iterator of T)` (collected)
// - raw pointer ranges: `unsafe { from_ptr_range(v.as_ptr_range()) }`

use std::borrow::Cow;
use std::ops::Range;

/// Anything that can present one axis' samples as a contiguous slice.
pub trait Coords<'a, T: Clone + 'a> {
    fn into_coords(self) -> Cow<'a, [T]>;
}

impl<'a, T: Clone> Coords<'a, T> for &'a [T] {
    fn into_coords(self) -> Cow<'a, [T]> { Cow::Borrowed(self) }
}

impl<'a, T: Clone> Coords<'a, T> for &'a Vec<T> {
    fn into_coords(self) -> Cow<'a, [T]> { Cow::Borrowed(self.as_slice()) }
}

impl<'a, T: Clone + 'a> Coords<'a, T> for Vec<T> {
    fn into_coords(self) -> Cow<'a, [T]> { Cow::Owned(self) }
}

impl<'a, T: Clone, const N: usize> Coords<'a, T> for &'a [T; N] {
    fn into_coords(self) -> Cow<'a, [T]> { Cow::Borrowed(self.as_slice()) }
}

impl<'a, T: Clone> Coords<'a, T> for std::slice::Iter<'a, T> {
    fn into_coords(self) -> Cow<'a, [T]> { Cow::Borrowed(self.as_slice()) }
}

/// Wraps any forward iterator of owned samples; collected once on use.
/// Borrowing iterators go through `.copied()`/`.cloned()` first.
#[derive(Clone, Debug)]
pub struct FromIter<I>(pub I);

impl<'a, T, I> Coords<'a, T> for FromIter<I>
where
    T: Clone + 'a,
    I: IntoIterator<Item = T>,
{
    fn into_coords(self) -> Cow<'a, [T]> { Cow::Owned(self.0.into_iter().collect()) }
}

/// Rebuild a slice from a `[begin, end)` pointer pair.
///
/// # Safety
/// `range.start..range.end` must come from a single live allocation of initialized `T`
/// (e.g. `slice::as_ptr_range`), with `start <= end`, valid for reads for `'a`.
pub unsafe fn from_ptr_range<'a, T>(range: Range<*const T>) -> &'a [T] {
    let len = range.end.offset_from(range.start);
    debug_assert!(len >= 0, "pointer range end precedes start");
    std::slice::from_raw_parts(range.start, len as usize)
}

/// Mutable counterpart of [`from_ptr_range`], for linspace destinations.
///
/// # Safety
/// Same as [`from_ptr_range`], plus the range must be valid for writes and not aliased for `'a`.
pub unsafe fn from_ptr_range_mut<'a, T>(range: Range<*mut T>) -> &'a mut [T] {
    let len = range.end.offset_from(range.start);
    debug_assert!(len >= 0, "pointer range end precedes start");
    std::slice::from_raw_parts_mut(range.start, len as usize)
}
