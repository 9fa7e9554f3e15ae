// crates/rx_config/src/lib.rs

//! RelaxKit 配置层
//!
//! 场景配置：一次求解器运行所需的全部参数，纯数据（全 f64 与字符串），
//! JSON 序列化。原实现中分散在多个构造函数默认值里的配置在这里全部
//! 显式化 —— 渲染层不自动填充任何分区。
//!
//! # 模块概览
//!
//! - [`scenario`]: `ScenarioConfig` 场景配置
//! - [`error`]: 配置错误类型
//!
//! # 示例
//!
//! ```
//! use rx_config::{ElasticSpec, ScenarioConfig};
//!
//! let json = r#"{
//!     "output": { "no_proj_output": true },
//!     "elastic": { "explicit": { "lambda_mpa": 3e4, "mu_mpa": 3e4, "gamma_per_km": 8.33e-4 } },
//!     "events": [ { "inline": "1 1 -10 0 0 10 10 0 90 0" } ]
//! }"#;
//! let config: ScenarioConfig = serde_json::from_str(json).unwrap();
//! config.validate().unwrap();
//! assert!(matches!(config.elastic, ElasticSpec::Explicit { .. }));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod scenario;

pub use error::ConfigError;
pub use scenario::{
    ElasticSpec, EventConfig, GridConfig, InterfaceConfig, ObservationConfig, OutputConfig,
    ScenarioConfig, TableInput, TimeConfig,
};
