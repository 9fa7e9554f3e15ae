// crates/rx_deck/src/model.rs

//! RelaxModel 组装 API
//!
//! 面向调用方的高层接口：每个分区一个 `set_*` 操作，内部持有显式的
//! [`DeckBuilder`] 实例。没有任何分区被自动填充 —— 所有默认值都由
//! 调用方（通常经 rx_config 的场景配置）显式给出。
//!
//! 地理原点在投影输出未被抑制时为必填项：缺失时在渲染任何分区文本
//! 之前即返回致命错误。
//!
//! # 示例
//!
//! ```
//! use rx_deck::prelude::*;
//!
//! let mut model = RelaxModel::new(OutputOptions::default());
//! let grid = GridModel {
//!     geo_origin: Some((120.982, 23.772)),
//!     ..GridModel::default()
//! };
//! model.set_grid_model(&grid).unwrap();
//! assert!(model.builder().is_populated(SectionId::GridModel));
//! ```

use std::fmt::Write as _;

use rx_foundation::error::{RxError, RxResult};
use rx_geo::utm::{zone_number, LENGTH_UNIT_M};

use crate::elastic::ElasticParameters;
use crate::envelope::{host_parallelism, render_envelope, OutputOptions};
use crate::events::CoseismicEvents;
use crate::section::{DeckBuilder, SectionId};
use crate::tabular::{render_block, TableSource};

/// 通用数据表的渲染精度（小数位）；同震段表为 2 位，见 [`crate::events`]
pub const TABLE_PRECISION: usize = 3;

/// 网格与模型几何
#[derive(Debug, Clone, PartialEq)]
pub struct GridModel {
    /// 网格尺寸 SX1, SX2, SX3（南北、东西、深度）
    pub dimension: (u32, u32, u32),
    /// 网格间距 dx1, dx2, dx3 (km)
    pub spacing: (f64, f64, f64),
    /// 平滑参数 beta (0-0.5) 与 Nyquist 参数 nq
    pub smoothing: (f64, f64),
    /// 原点位置 x0, y0 (km)
    pub origin: (f64, f64),
    /// 旋转角 (度)
    pub rotation: f64,
    /// 地理原点 (经度, 纬度)；投影输出未抑制时必填
    pub geo_origin: Option<(f64, f64)>,
    /// 观测深度（位移、应力）(km)
    pub observation_depths: (f64, f64),
}

impl Default for GridModel {
    fn default() -> Self {
        Self {
            dimension: (256, 256, 256),
            spacing: (0.5, 0.5, 0.5),
            smoothing: (0.2, 2.0),
            origin: (0.0, 0.0),
            rotation: 0.0,
            geo_origin: None,
            observation_depths: (0.0, 5.0),
        }
    }
}

/// 时间积分参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeIntegration {
    /// 积分时长；0 表示仅同震解
    pub interval: f64,
    /// 正值为时间步长，负值为跳步
    pub step: f64,
    /// 步长缩放
    pub scaling: f64,
}

impl Default for TimeIntegration {
    fn default() -> Self {
        Self {
            interval: 0.0,
            step: -1.0,
            scaling: 1.0,
        }
    }
}

/// relax 输入卡片模型
///
/// 持有输出开关与分区构建器；每个 `set_*` 渲染一个分区。
#[derive(Debug, Clone, Default)]
pub struct RelaxModel {
    output: OutputOptions,
    builder: DeckBuilder,
}

impl RelaxModel {
    /// 创建模型
    pub fn new(output: OutputOptions) -> Self {
        Self {
            output,
            builder: DeckBuilder::new(),
        }
    }

    /// 输出开关
    pub fn output_options(&self) -> &OutputOptions {
        &self.output
    }

    /// 分区构建器
    pub fn builder(&self) -> &DeckBuilder {
        &self.builder
    }

    /// 尚未填充的分区
    pub fn missing_sections(&self) -> Vec<SectionId> {
        self.builder.missing_sections()
    }

    /// 写入网格与模型几何分区
    ///
    /// # Errors
    /// 投影输出未抑制而地理原点缺失时返回 [`RxError::MissingConfig`]，
    /// 此时不渲染任何文本；地理原点超出 UTM 有效范围时返回无效输入错误。
    pub fn set_grid_model(&mut self, grid: &GridModel) -> RxResult<()> {
        // 先决条件在任何渲染之前检查
        let geo_line = if self.output.no_proj_output {
            None
        } else {
            let (lon, lat) = grid
                .geo_origin
                .ok_or_else(|| RxError::missing_config("geo_origin"))?;
            let zone = zone_number(lon, lat)?;
            Some(format!("{lon} {lat} {zone} {LENGTH_UNIT_M}"))
        };

        let mut text = String::from("# SX1,SX2,SX3 (grid size)\n");
        let _ = writeln!(
            text,
            "{} {} {}",
            grid.dimension.0, grid.dimension.1, grid.dimension.2
        );
        text.push_str("# dx1,dx2,dx3 (km), beta (0-0.5), nq (2)\n");
        let _ = writeln!(
            text,
            "{} {} {} {} {}",
            grid.spacing.0, grid.spacing.1, grid.spacing.2, grid.smoothing.0, grid.smoothing.1
        );
        text.push_str("# origin position & rotation\n");
        let _ = writeln!(text, "{} {} {}", grid.origin.0, grid.origin.1, grid.rotation);
        if let Some(line) = geo_line {
            text.push_str("# geographic origin (longitude, latitude, UTM zone, unit)\n");
            text.push_str(&line);
            text.push('\n');
        }
        text.push_str("# observation depths (for displacement and for stress)\n");
        let _ = writeln!(
            text,
            "{} {}",
            grid.observation_depths.0, grid.observation_depths.1
        );
        text.push_str("# output directory (all output written here)\n$WDIR\n");

        self.builder.set_section(SectionId::GridModel, text);
        Ok(())
    }

    /// 写入弹性参数分区
    pub fn set_elastic_parameters(&mut self, params: &ElasticParameters) {
        self.builder
            .set_section(SectionId::ElasticParams, params.render_section());
    }

    /// 写入时间积分分区
    pub fn set_time_integration(&mut self, time: &TimeIntegration) {
        let text = format!(
            "# time interval, (positive time step) or (negative skip, scaling)\n{} {} {}\n",
            time.interval, time.step, time.scaling
        );
        self.builder.set_section(SectionId::TimeIntegration, text);
    }

    /// 写入观测面分区（用于导出应力分量的观测面）
    pub fn set_observation_planes(&mut self, data: Option<&TableSource>) {
        self.set_table_section(
            SectionId::ObservationPlanes,
            "# number of observation planes",
            "# n x1 x2 x3 length width strike dip",
            data,
        );
    }

    /// 写入观测点分区
    ///
    /// 观测点带名称列，结构化数值表无法携带，名称数据经
    /// [`TableSource::Inline`] 或 [`TableSource::Rendered`] 提供。
    pub fn set_observation_points(&mut self, data: Option<&TableSource>) {
        self.set_table_section(
            SectionId::ObservationPoints,
            "# number of observation points",
            "# no name x1 x2 x3",
            data,
        );
    }

    /// 写入应力观测段分区
    pub fn set_stress_observation_segments(&mut self, data: Option<&TableSource>) {
        self.set_table_section(
            SectionId::StressObservationSegments,
            "# number of stress observation segments",
            "# n x1 x2 x3 length width strike dip rake friction",
            data,
        );
    }

    /// 写入预应力界面分区（仅计数）
    pub fn set_prestress_interfaces(&mut self, count: usize) {
        let text = format!("# number of prestress interfaces\n{count}\n");
        self.builder.set_section(SectionId::PrestressInterfaces, text);
    }

    /// 写入线性黏性界面分区
    pub fn set_linear_viscous_interfaces(&mut self, data: Option<&TableSource>) {
        self.set_table_section(
            SectionId::LinearViscousInterfaces,
            "# number of linear viscous interfaces",
            "# no depth gammadot0 cohesion",
            data,
        );
    }

    /// 写入非线性黏性界面分区
    pub fn set_nonlinear_viscous_interfaces(&mut self, data: Option<&TableSource>) {
        self.set_table_section(
            SectionId::NonlinearViscousInterfaces,
            "# number of nonlinear viscous interfaces",
            "# no depth gammadot0 cohesion",
            data,
        );
    }

    /// 写入断层蠕滑界面分区
    ///
    /// 蠕滑界面存在时嵌套余滑面块；蠕滑界面缺失时整个分区只有零计数，
    /// 余滑面块不输出。
    pub fn set_fault_creep_interfaces(
        &mut self,
        creep: Option<&TableSource>,
        afterslip: Option<&TableSource>,
    ) {
        let text = match creep {
            None => "# number of fault creep interfaces\n0\n".to_string(),
            Some(creep) => {
                let mut text = render_block(
                    "# number of fault creep interfaces",
                    "# no depth gamma0 (a-b)sig friction cohesion",
                    creep,
                    TABLE_PRECISION,
                );
                let empty = TableSource::empty();
                text.push_str(&render_block(
                    "# number of afterslip planes",
                    "# no x1 x2 x3 length width strike dip rake",
                    afterslip.unwrap_or(&empty),
                    TABLE_PRECISION,
                ));
                text
            }
        };
        self.builder.set_section(SectionId::FaultCreepInterfaces, text);
    }

    /// 写入震间走滑段分区（仅计数）
    pub fn set_inter_seismic_strike_slip(&mut self, count: usize) {
        let text = format!("# number of inter-seismic strike-slip segments\n{count}\n");
        self.builder
            .set_section(SectionId::InterSeismicStrikeSlip, text);
    }

    /// 写入震间张性段分区（仅计数）
    pub fn set_inter_seismic_tensile(&mut self, count: usize) {
        let text = format!("# number of inter-seismic tensile segments\n{count}\n");
        self.builder.set_section(SectionId::InterSeismicTensile, text);
    }

    /// 写入同震事件分区
    pub fn set_coseismic_events(&mut self, events: &CoseismicEvents) {
        self.builder
            .set_section(SectionId::CoseismicEvents, events.render());
    }

    /// 渲染完整脚本，使用主机并行度
    ///
    /// 外壳分区在此时（文件名已知后）写入 —— 对序号 0 的刻意覆盖。
    pub fn render_script(&mut self, script_filename: &str) -> RxResult<String> {
        self.render_script_with_threads(script_filename, host_parallelism())
    }

    /// 渲染完整脚本，显式指定并行度
    pub fn render_script_with_threads(
        &mut self,
        script_filename: &str,
        threads: usize,
    ) -> RxResult<String> {
        let envelope = render_envelope(script_filename, &self.output, threads);
        self.builder.set_section(SectionId::ShellHeader, envelope);
        Ok(self.builder.render())
    }

    fn set_table_section(
        &mut self,
        id: SectionId,
        count_label: &str,
        header_comment: &str,
        data: Option<&TableSource>,
    ) {
        let empty = TableSource::empty();
        let text = render_block(
            count_label,
            header_comment,
            data.unwrap_or(&empty),
            TABLE_PRECISION,
        );
        self.builder.set_section(id, text);
    }
}
