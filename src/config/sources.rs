//! Configuration sources, added to the builder in merge order.

pub mod environment;
pub mod global_file;
