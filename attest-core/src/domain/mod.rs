pub mod models;
pub mod ports;
pub mod services;

mod changeset;
mod error;
mod grid;
mod reconcile;

pub use changeset::*;
pub use error::*;
pub use grid::*;
pub use reconcile::*;
