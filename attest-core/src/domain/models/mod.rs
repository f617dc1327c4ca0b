mod entry;
mod ids;
mod requests;

pub use entry::*;
pub use ids::*;
pub use requests::*;
