// crates/rx_deck/src/lib.rs

//! RelaxKit 核心层
//!
//! 将断层几何与观测数据组装为 relax 求解器的输入卡片（shell 脚本 +
//! 参数文档）。本层是整个项目的确定性文档构建器：
//!
//! - [`section`]: 按序号排序的分区存储（后写覆盖先写）
//! - [`tabular`]: 三种表格输入表示的归一化与定宽渲染
//! - [`elastic`]: 弹性参数与浮力项 gamma 的推导
//! - [`fault`]: 断层几何行类型
//! - [`events`]: 同震事件块
//! - [`envelope`]: shell 脚本外壳
//! - [`model`]: 面向调用方的 `RelaxModel` 组装 API
//!
//! # 示例
//!
//! ```
//! use rx_deck::prelude::*;
//!
//! let mut model = RelaxModel::new(OutputOptions {
//!     no_proj_output: true,
//!     ..OutputOptions::default()
//! });
//! model.set_grid_model(&GridModel::default()).unwrap();
//! model.set_elastic_parameters(&ElasticParameters::new(3e4, 3e4, 8.33e-4));
//! model.set_time_integration(&TimeIntegration::default());
//! let script = model.render_script("coseismic.sh").unwrap();
//! assert!(script.starts_with("#!/bin/bash coseismic"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod elastic;
pub mod envelope;
pub mod events;
pub mod fault;
pub mod model;
pub mod section;
pub mod tabular;

/// 预导入模块
pub mod prelude {
    pub use crate::elastic::{buoyancy_gamma, ElasticParameters};
    pub use crate::envelope::OutputOptions;
    pub use crate::events::CoseismicEvents;
    pub use crate::fault::FaultSegment;
    pub use crate::model::{GridModel, RelaxModel, TimeIntegration};
    pub use crate::section::{DeckBuilder, SectionId};
    pub use crate::tabular::TableSource;
}

pub use elastic::ElasticParameters;
pub use envelope::OutputOptions;
pub use events::CoseismicEvents;
pub use fault::FaultSegment;
pub use model::{GridModel, RelaxModel, TimeIntegration};
pub use section::{DeckBuilder, SectionId};
pub use tabular::TableSource;
