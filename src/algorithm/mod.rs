//! Algorithms operating on census data

pub mod census;
