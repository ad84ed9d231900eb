pub mod decimal_serde;
pub use decimal_serde::*;
