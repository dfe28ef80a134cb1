//! Core domain entities
//!
//! All roster entities are defined here. These are pure data structures
//! with validation logic - no I/O or external dependencies.

mod fields;
mod index;
mod person;
pub mod result;
mod tutorial;

pub use fields::{Email, Name, Phone, StudentId, Tag};
pub use index::Index;
pub use person::{Person, PersonBuilder};
pub use tutorial::Tutorial;
