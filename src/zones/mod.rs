//! Card containers and placement names.
//!
//! ## Key Types
//!
//! - `Placement`: closed set of pile names (`draw`, `build1`, `hand`, ...)
//! - `Side`: front or back of a pile
//! - `CardContainer`: a labelled set of placements with deal/take/peek

pub mod container;
pub mod placement;

pub use container::CardContainer;
pub use placement::{Placement, Side};
