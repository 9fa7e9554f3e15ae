// crates/rx_geo/src/lib.rs

//! RelaxKit 地理模块
//!
//! 提供输入卡片所需的唯一地理计算：由地理原点确定 UTM 带号。
//! 完整的投影正反算不在本项目范围内（求解器自行处理投影）。
//!
//! # 示例
//!
//! ```
//! use rx_geo::utm::zone_number;
//!
//! // 台湾集集 (120.982°E, 23.772°N) -> UTM 51
//! let zone = zone_number(120.982, 23.772).unwrap();
//! assert_eq!(zone, 51);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod utm;

pub use utm::{zone_number, LENGTH_UNIT_M};
