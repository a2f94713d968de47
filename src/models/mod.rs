pub mod records;
pub mod run;

pub use records::*;
pub use run::*;
