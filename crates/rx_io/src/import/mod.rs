// crates/rx_io/src/import/mod.rs

//! 数据导入

pub mod fault_csv;
