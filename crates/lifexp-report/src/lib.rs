pub mod csv_writer;

pub use csv_writer::{render_long_csv, write_long_csv};
