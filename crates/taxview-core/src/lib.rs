//! Data-shaping core for taxview: load a wide CSV of per-year parameter
//! values, melt it to long format, and filter by parameter name.

pub mod dataset;
pub mod loader;
pub mod reshape;
pub mod select;

pub use dataset::ParamDataset;
pub use loader::load_table;
pub use reshape::melt;
pub use select::{filter_parameter, parameter_names};
