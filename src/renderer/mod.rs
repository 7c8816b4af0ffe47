//! API-agnostic rendering data
//!
//! Turns sim state into plain vertex lists; no graphics API dependency.

pub mod shapes;
pub mod vertex;

pub use shapes::{line, player_outline, wall_lines};
pub use vertex::{Vertex, colors};
