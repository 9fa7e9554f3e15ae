// crates/rx_io/src/lib.rs

//! RelaxKit IO 模块
//!
//! 提供数据输入输出功能。
//!
//! # 模块
//!
//! - [`import`]: 断层几何表导入（文件或内联文本）
//! - [`script`]: 卡片脚本写出（整体渲染完成后一次写入）
//! - [`runner`]: 阻塞式脚本执行，输出与退出码原样返回
//! - [`results`]: 求解器输出目录扫描 (.grd)
//!
//! # 使用示例
//!
//! ```rust,ignore
//! use rx_io::import::fault_csv::{parse_fault_string, FaultCsvConfig};
//!
//! let segments = parse_fault_string("1 1 -10 0 0 10 10 0 90 0", &FaultCsvConfig::default())?;
//! assert_eq!(segments.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod import;
pub mod results;
pub mod runner;
pub mod script;

pub use results::{scan_grd_folder, GrdEntry};
pub use runner::{run_script, run_script_file, RunnerError, ScriptOutput};
pub use script::write_script;
