mod mock;
mod rpc;

pub use mock::*;
pub use rpc::*;
