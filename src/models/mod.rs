//! Data models for the census

pub mod person;

pub use person::Person;
