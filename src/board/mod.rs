//! The Yut board: cells, routes, occupancy and route resolution.
//!
//! The topology is fixed and built once per process. Occupancy is the
//! only mutable part and belongs to a single match.

pub mod cell;
pub mod topology;
pub mod occupancy;
pub mod resolver;

pub use cell::{CellId, CellKind};
pub use topology::{Board, Route, RouteId};
pub use occupancy::Occupancy;
pub use resolver::{Destination, Destinations, RouteResolver};
