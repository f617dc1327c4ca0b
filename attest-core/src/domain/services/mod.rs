mod approval;

pub use approval::*;
