mod passes;

pub use passes::*;
