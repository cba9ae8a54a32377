pub mod errors;
pub mod helpers;
pub mod ids;
pub mod store;
