//! # Primitives
//!
//! Shapes a plate is assembled from. Primitives are appended to one triangle
//! soup without boolean union: dots and the tube sit on the slab surface.

pub mod dome;
pub mod outline;
pub mod slab;
pub mod tube;

pub use dome::Dome;
pub use outline::{circle_points, project_to_circle, rounded_rect_outline};
pub use slab::HoledSlab;
pub use tube::Tube;
