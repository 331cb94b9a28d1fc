//! Canonical sample CSV content for tests.
//!
//! The well-formed sample mirrors the production data shape: an identifier
//! column, year columns 2025-2035 in ascending order, and one row with a
//! blank cell (Estate Tax Exemption at 2030) to exercise the missing-value
//! warning path.

use std::fs;
use std::path::Path;

use anyhow::Result;

/// Well-formed sample: 4 parameters x 11 years, one blank cell at 2030.
pub const SAMPLE_CSV: &str = "\
Standard Deduction,2025,2026,2027,2028,2029,2030,2031,2032,2033,2034,2035
Standard Deduction (Single),15000,15300,15650,16000,16350,16700,17050,17400,17750,18100,18450
Standard Deduction (Married Filing Jointly),30000,30600,31300,32000,32700,33400,34100,34800,35500,36200,36900
Child Tax Credit,2000,2000,2000,2000,2000,2000,2000,2000,2000,2000,2000
Estate Tax Exemption,13990000,14300000,14620000,14950000,15280000,,15970000,16330000,16700000,17070000,17450000
";

/// Second data row is one field short.
pub const RAGGED_CSV: &str = "\
Standard Deduction,2025,2026,2027
Standard Deduction (Single),15000,15300,15650
Child Tax Credit,2000,2000
";

/// Header with a year column that is not an integer.
pub const BAD_YEAR_HEADER_CSV: &str = "\
Standard Deduction,2025,Notes
Standard Deduction (Single),15000,see appendix
";

/// A value cell that is neither numeric nor blank.
pub const BAD_VALUE_CSV: &str = "\
Standard Deduction,2025,2026
Standard Deduction (Single),15000,n/a
";

/// Write `content` to `path`, creating parent directories as needed.
pub fn write_csv(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Write the well-formed sample to `path`.
pub fn write_sample(path: &Path) -> Result<()> {
    write_csv(path, SAMPLE_CSV)
}
