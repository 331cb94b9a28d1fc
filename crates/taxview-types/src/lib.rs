pub mod error;
pub mod table;
pub mod value;

pub use error::{Error, Result};
pub use table::*;
pub use value::CellValue;
