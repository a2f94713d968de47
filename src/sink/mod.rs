pub mod csv_sink;
pub mod parquet_sink;
pub mod record_sink;

pub use csv_sink::*;
pub use parquet_sink::*;
pub use record_sink::*;
