// File: crates/meshgrid-core/src/linspace.rs
// Summary: Evenly spaced sample generation, from a step size or from a target sample count.
// Notes:
// - Values are produced by plain repeated addition (start, start+h, start+h+h, ...),
//   so rounding matches a naive accumulation loop. The step is only added between
//   writes, so the last sample may sit at the type's maximum.
// - Destinations are any `IntoIterator<Item = &mut T>`: `&mut Vec<T>`, `&mut [T]`,
//   `iter_mut()`, or a slice rebuilt with `coords::from_ptr_range_mut`.

use num_traits::{Num, NumCast};

use crate::error::{MeshError, Result};

/// Numeric sample types that know how to split a span into equal intervals.
///
/// Floats divide directly. Integers take the span in `i128`, so `end - start` never has
/// to fit the sample type itself (`-100i8..=100` in two intervals steps by 100).
pub trait Sample: Copy + Num + NumCast {
    /// `(end - start) / intervals`, or `None` when that step is not representable in `Self`.
    fn interval(start: Self, end: Self, intervals: Self) -> Option<Self>;
}

macro_rules! impl_sample_float {
    ($($t:ty),*) => {$(
        impl Sample for $t {
            #[inline]
            fn interval(start: $t, end: $t, intervals: $t) -> Option<$t> { Some((end - start) / intervals) }
        }
    )*};
}

macro_rules! impl_sample_int {
    ($($t:ty),*) => {$(
        impl Sample for $t {
            #[allow(unreachable_patterns)]
            fn interval(start: $t, end: $t, intervals: $t) -> Option<$t> {
                match (i128::try_from(start), i128::try_from(end), i128::try_from(intervals)) {
                    (Ok(s), Ok(e), Ok(k)) => <$t>::try_from(e.checked_sub(s)? / k).ok(),
                    // u128 beyond i128::MAX
                    _ => end.checked_sub(start).map(|span| span / intervals),
                }
            }
        }
    )*};
}

impl_sample_float!(f32, f64);
impl_sample_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Fill every slot of `dest` with `start, start + step, start + 2*step, ...`.
/// Returns how many values were written (the destination length).
pub fn linspace_step<'a, T, I>(dest: I, start: T, step: T) -> usize
where
    T: Copy + Num + 'a,
    I: IntoIterator<Item = &'a mut T>,
{
    let mut slots = dest.into_iter();
    let Some(first) = slots.next() else { return 0 };
    *first = start;
    let mut value = start;
    let mut written = 1usize;
    for slot in slots {
        value = value + step;
        *slot = value;
        written += 1;
    }
    written
}

/// Step implied by `count` samples spanning `[start, end]`; `None` when `count < 2`.
///
/// Fails with [`MeshError::CountNotRepresentable`] when `count - 1` does not fit `T`, and
/// with [`MeshError::StepNotRepresentable`] when the step itself does not (a descending
/// unsigned range, or two integer samples further apart than `T` can step).
pub fn step_for<T: Sample>(start: T, end: T, count: usize) -> Result<Option<T>> {
    if count < 2 { return Ok(None); }
    let intervals: T = NumCast::from(count - 1).ok_or(MeshError::CountNotRepresentable { count })?;
    T::interval(start, end, intervals)
        .map(Some)
        .ok_or(MeshError::StepNotRepresentable { count })
}

/// Write `count` samples spanning `[start, end]` into the front of `dest`.
///
/// `count == 1` writes `start` alone and `count == 0` writes nothing; neither divides.
/// Fails with [`MeshError::DestinationTooShort`] when `dest` has fewer than `count` slots.
/// That check happens up front for exact-size destinations (slices, vectors); for other
/// iterators the values that fit are written before the error is reported.
pub fn linspace_into<'a, T, I>(dest: I, start: T, end: T, count: usize) -> Result<()>
where
    T: Sample + 'a,
    I: IntoIterator<Item = &'a mut T>,
{
    let step = step_for(start, end, count)?.unwrap_or_else(T::zero);
    let iter = dest.into_iter();
    if let (lo, Some(hi)) = iter.size_hint() {
        if lo == hi && hi < count {
            return Err(MeshError::DestinationTooShort { required: count, provided: hi });
        }
    }
    let written = linspace_step(iter.take(count), start, step);
    if written < count {
        return Err(MeshError::DestinationTooShort { required: count, provided: written });
    }
    Ok(())
}

/// `count` evenly spaced samples from `start` to `end` (inclusive) in a new vector.
/// Nothing is allocated when the inputs are rejected.
pub fn linspace<T: Sample>(start: T, end: T, count: usize) -> Result<Vec<T>> {
    let step = step_for(start, end, count)?.unwrap_or_else(T::zero);
    Ok(linspace_with_step(start, step, count))
}

/// `count` samples `start, start + step, ...` in a new vector.
pub fn linspace_with_step<T>(start: T, step: T, count: usize) -> Vec<T>
where
    T: Copy + Num,
{
    let mut out = vec![start; count];
    linspace_step(&mut out, start, step);
    out
}
