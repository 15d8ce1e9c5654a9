// File: crates/meshgrid-core/src/lib.rs
// Summary: Library entry point; exports linspace generation and N-dimensional meshgrid construction.

pub mod coords;
pub mod error;
pub mod layout;
pub mod linspace;
pub mod mesh;

pub use coords::{from_ptr_range, from_ptr_range_mut, Coords, FromIter};
pub use error::{MeshError, Result};
pub use layout::GridLayout;
pub use linspace::{linspace, linspace_into, linspace_step, linspace_with_step, step_for, Sample};
pub use mesh::{broadcast_axis, meshgrid, MeshGrid, Meshgrid};
