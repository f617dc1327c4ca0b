mod approval_row;
mod filters;
mod project_summary;
mod requests;
mod responses;

pub use approval_row::*;
pub use filters::*;
pub use project_summary::*;
pub use requests::*;
pub use responses::*;
