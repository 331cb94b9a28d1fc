//! The immutable dataset shared by every interaction.

use std::path::Path;

use taxview_types::{ParamPoint, ParamTable, Result, Year};

use crate::{loader, reshape, select};

/// Table plus its melted points, constructed once at process start and
/// passed by reference into selection and rendering. Never mutated after
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamDataset {
    table: ParamTable,
    points: Vec<ParamPoint>,
}

impl ParamDataset {
    /// Load and reshape the file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let table = loader::load_table(path)?;
        Ok(Self::from_table(table))
    }

    pub fn from_table(table: ParamTable) -> Self {
        let points = reshape::melt(&table);
        Self { table, points }
    }

    pub fn table(&self) -> &ParamTable {
        &self.table
    }

    /// Every long-format point, row-major.
    pub fn points(&self) -> &[ParamPoint] {
        &self.points
    }

    /// The full known year range, in file order.
    pub fn years(&self) -> &[Year] {
        &self.table.years
    }

    /// Selectable parameter names, first-occurrence order.
    pub fn parameters(&self) -> Vec<String> {
        select::parameter_names(&self.points)
    }

    /// The points for one parameter, in year order.
    pub fn series(&self, parameter: &str) -> Vec<ParamPoint> {
        select::filter_parameter(&self.points, parameter)
    }

    /// True if any value in the parameter's series is missing.
    pub fn has_missing(&self, parameter: &str) -> bool {
        self.points
            .iter()
            .any(|point| point.parameter == parameter && point.value.is_missing())
    }

    /// Count of missing cells across the whole table.
    pub fn missing_cell_count(&self) -> usize {
        self.points
            .iter()
            .filter(|point| point.value.is_missing())
            .count()
    }
}
