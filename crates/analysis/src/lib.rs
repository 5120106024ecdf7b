pub mod hash;
pub mod props;

pub use hash::*;
pub use props::*;
