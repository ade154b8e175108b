pub mod aggregate;
pub mod catalog;
pub mod config;
pub mod consultant;
pub mod coverage;
pub mod error;
pub mod filter;
pub mod identity;
pub mod io;
pub mod matrix;
pub mod paths;
pub mod store;
pub mod submission;
pub mod tier;

pub use error::{BoardError, Result};
