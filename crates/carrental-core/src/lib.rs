pub mod config;
pub mod error;
pub mod form;
pub mod io;
pub mod page;
pub mod paths;

pub use error::{RentalError, Result};
