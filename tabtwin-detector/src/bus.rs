mod decoration;

pub use decoration::*;
