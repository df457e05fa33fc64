pub mod findings_table;

pub use findings_table::FindingsTable;
