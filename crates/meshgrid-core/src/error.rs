// File: crates/meshgrid-core/src/error.rs
// Summary: Error type shared by the linspace and meshgrid entry points.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshError {
    /// The destination ran out of slots before `required` values were written.
    #[error("destination too short: need {required} slots, got {provided}")]
    DestinationTooShort { required: usize, provided: usize },

    /// `count - 1` has no representation in the sample type (e.g. 300 as `u8`).
    #[error("sample count {count} is not representable in the coordinate type")]
    CountNotRepresentable { count: usize },

    /// The step between `count` samples does not fit the sample type
    /// (e.g. a descending `u8` range, or `-100i8..=100` in two samples).
    #[error("step for {count} samples is not representable in the coordinate type")]
    StepNotRepresentable { count: usize },

    /// An axis passed to `broadcast_axis` disagrees with the shape's extent for that axis.
    #[error("axis {axis} has {got} samples but the shape expects {expected}")]
    AxisLengthMismatch { axis: usize, expected: usize, got: usize },

    /// The product of the axis extents does not fit in `usize`.
    #[error("grid shape has more elements than usize can count")]
    ShapeOverflow,
}

pub type Result<T> = std::result::Result<T, MeshError>;
