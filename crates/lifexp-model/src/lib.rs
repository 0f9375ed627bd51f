pub mod columns;
pub mod error;
pub mod record;
pub mod table;

pub use columns::{
    COL_AGE, COL_REGION, COL_SEX, COL_UNIT, COL_VALUE, COL_YEAR, ID_COLUMNS, OUTPUT_COLUMNS,
};
pub use error::{ModelError, Result};
pub use record::{CompositeKey, LongRecord, LongTable};
pub use table::RawTable;
