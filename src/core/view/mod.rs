//! Screen-to-plane mapping and the pan/zoom view it reads.

pub mod coordinate_mapper;
pub mod view_state;
