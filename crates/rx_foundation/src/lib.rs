// crates/rx_foundation/src/lib.rs

//! RelaxKit Foundation Layer
//!
//! 零依赖基础层，提供整个项目的统一错误类型。
//!
//! # 模块概览
//!
//! - [`error`]: 统一错误类型 `RxError` / `RxResult`
//!
//! # 设计原则
//!
//! 1. **零外部依赖**: 仅依赖 thiserror
//! 2. **层次化**: 基础层只定义核心错误，配置、执行等错误在各自的 crate 中定义
//! 3. **可追溯**: 支持错误链
//!
//! # 示例
//!
//! ```
//! use rx_foundation::error::{RxError, RxResult};
//!
//! fn require_geo_origin(origin: Option<(f64, f64)>) -> RxResult<(f64, f64)> {
//!     origin.ok_or_else(|| RxError::missing_config("geo_origin"))
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;

pub use error::{RxError, RxResult};
