pub mod filter;
pub mod nl;
pub mod schema;
pub mod store;

pub use filter::*;
pub use nl::*;
pub use schema::*;
pub use store::*;
