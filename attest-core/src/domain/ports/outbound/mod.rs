mod approval_client;
mod notifier;

pub use approval_client::*;
pub use notifier::*;
