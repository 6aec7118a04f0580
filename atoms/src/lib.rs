//! Rescue domain atoms: records, the animal policy, distance, and the
//! collaborator seams the pipelines are built on.

pub mod cases;
pub mod error;
pub mod geo;
pub mod labels;
pub mod media;
pub mod ngos;

pub use error::{RescueError, Result};
