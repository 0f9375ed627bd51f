//! Column names shared by the reshape and output stages.

pub const COL_UNIT: &str = "unit";
pub const COL_SEX: &str = "sex";
pub const COL_AGE: &str = "age";
pub const COL_REGION: &str = "region";
pub const COL_YEAR: &str = "year";
pub const COL_VALUE: &str = "value";

/// Identifier columns produced by splitting the composite key, in order.
pub const ID_COLUMNS: [&str; 4] = [COL_UNIT, COL_SEX, COL_AGE, COL_REGION];

/// Output column set, in header order.
pub const OUTPUT_COLUMNS: [&str; 6] = [
    COL_UNIT, COL_SEX, COL_AGE, COL_REGION, COL_YEAR, COL_VALUE,
];
