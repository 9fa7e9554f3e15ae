// apps/rx_cli/src/commands/mod.rs

//! CLI 子命令

pub mod generate;
pub mod info;
pub mod run;
pub mod validate;
