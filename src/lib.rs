pub mod cli;
pub mod core;
pub mod utils;

pub use utils::error::{Result, TimesinceError};
