// crates/rx_config/src/scenario.rs

//! ScenarioConfig - 场景配置（全 f64）
//!
//! 一次 relax 运行的完整描述，使用纯 f64 / 字符串存储以便 JSON
//! 序列化。所有默认值来自原软件包的文档化签名（网格 256^3、间距
//! 0.5 km、平滑 (0.2, 2)、时间积分 (0, -1, 1)），并以显式的
//! `default_*` 函数给出。

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// 场景配置
///
/// 弹性参数没有默认值：必须显式给出或显式要求推导。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// 求解器输出开关
    #[serde(default)]
    pub output: OutputConfig,

    /// 网格与模型几何
    #[serde(default)]
    pub grid: GridConfig,

    /// 弹性参数（必填）
    pub elastic: ElasticSpec,

    /// 时间积分
    #[serde(default)]
    pub time: TimeConfig,

    /// 观测定义
    #[serde(default)]
    pub observation: ObservationConfig,

    /// 界面定义
    #[serde(default)]
    pub interfaces: InterfaceConfig,

    /// 同震事件，每个事件一张断层几何表
    #[serde(default)]
    pub events: Vec<EventConfig>,
}

/// 求解器输出开关
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// 不输出投影坐标
    #[serde(default)]
    pub no_proj_output: bool,
    /// 不输出应力
    #[serde(default)]
    pub no_stress_output: bool,
    /// 不输出 VTK
    #[serde(default)]
    pub no_vtk_output: bool,
    /// 不输出 GRD
    #[serde(default)]
    pub no_grd_output: bool,
}

/// 网格配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// 网格尺寸 SX1, SX2, SX3
    #[serde(default = "default_dimension")]
    pub dimension: [u32; 3],

    /// 网格间距 dx1, dx2, dx3 [km]
    #[serde(default = "default_spacing")]
    pub spacing: [f64; 3],

    /// 平滑参数 beta, nq
    #[serde(default = "default_smoothing")]
    pub smoothing: [f64; 2],

    /// 原点位置 x0, y0 [km]
    #[serde(default)]
    pub origin: [f64; 2],

    /// 旋转角 [度]
    #[serde(default)]
    pub rotation: f64,

    /// 地理原点 (经度, 纬度)；投影输出未抑制时必填
    #[serde(default)]
    pub geo_origin: Option<[f64; 2]>,

    /// 观测深度（位移、应力）[km]
    #[serde(default = "default_observation_depths")]
    pub observation_depths: [f64; 2],
}

fn default_dimension() -> [u32; 3] {
    [256, 256, 256]
}
fn default_spacing() -> [f64; 3] {
    [0.5, 0.5, 0.5]
}
fn default_smoothing() -> [f64; 2] {
    [0.2, 2.0]
}
fn default_observation_depths() -> [f64; 2] {
    [0.0, 5.0]
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            dimension: default_dimension(),
            spacing: default_spacing(),
            smoothing: default_smoothing(),
            origin: [0.0, 0.0],
            rotation: 0.0,
            geo_origin: None,
            observation_depths: default_observation_depths(),
        }
    }
}

/// 弹性参数：直接给定或由地壳物性推导
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElasticSpec {
    /// 直接给定卡片单位的参数
    Explicit {
        /// 第一拉梅常数 [MPa]
        lambda_mpa: f64,
        /// 剪切模量 [MPa]
        mu_mpa: f64,
        /// 浮力项 [1/km]
        gamma_per_km: f64,
    },
    /// 由 SI 单位的地壳物性推导
    Derived {
        /// 泊松比
        poisson_ratio: f64,
        /// 密度 [kg/m^3]
        density: f64,
        /// 重力加速度 [m/s^2]
        gravity: f64,
        /// 剪切模量 [Pa]
        shear_modulus_pa: f64,
        /// 第一拉梅常数 [Pa]
        lambda_pa: f64,
    },
}

/// 时间积分配置
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TimeConfig {
    /// 积分时长；0 表示仅同震解
    #[serde(default)]
    pub interval: f64,
    /// 正值为时间步长，负值为跳步
    #[serde(default = "default_time_step")]
    pub step: f64,
    /// 步长缩放
    #[serde(default = "default_time_scaling")]
    pub scaling: f64,
}

fn default_time_step() -> f64 {
    -1.0
}
fn default_time_scaling() -> f64 {
    1.0
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            interval: 0.0,
            step: default_time_step(),
            scaling: default_time_scaling(),
        }
    }
}

/// 表格输入：文件路径或内联文本，二者必居其一
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableInput {
    /// 数据文件路径
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// 内联文本
    #[serde(default)]
    pub inline: Option<String>,
}

impl TableInput {
    /// 校验恰好给出一种表示
    pub fn validate(&self, key: &str) -> Result<(), ConfigError> {
        match (&self.path, &self.inline) {
            (Some(_), Some(_)) => Err(ConfigError::InvalidValue {
                key: key.to_string(),
                value: "path + inline".to_string(),
                reason: "path 与 inline 只能给出一个".to_string(),
            }),
            (None, None) => Err(ConfigError::Missing(format!(
                "{key}: 需要 path 或 inline"
            ))),
            _ => Ok(()),
        }
    }
}

/// 观测定义
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObservationConfig {
    /// 观测面 (n x1 x2 x3 length width strike dip)
    #[serde(default)]
    pub planes: Option<TableInput>,
    /// 观测点 (no name x1 x2 x3)
    #[serde(default)]
    pub points: Option<TableInput>,
    /// 应力观测段 (n x1 x2 x3 length width strike dip rake friction)
    #[serde(default)]
    pub stress_segments: Option<TableInput>,
}

/// 界面定义
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterfaceConfig {
    /// 预应力界面数
    #[serde(default)]
    pub prestress_count: usize,
    /// 线性黏性界面 (no depth gammadot0 cohesion)
    #[serde(default)]
    pub linear_viscous: Option<TableInput>,
    /// 非线性黏性界面 (no depth gammadot0 cohesion)
    #[serde(default)]
    pub nonlinear_viscous: Option<TableInput>,
    /// 断层蠕滑界面 (no depth gamma0 (a-b)sig friction cohesion)
    #[serde(default)]
    pub fault_creep: Option<TableInput>,
    /// 余滑面 (no x1 x2 x3 length width strike dip rake)；仅在蠕滑界面存在时输出
    #[serde(default)]
    pub afterslip_planes: Option<TableInput>,
    /// 震间走滑段数
    #[serde(default)]
    pub inter_seismic_strike_slip_count: usize,
    /// 震间张性段数
    #[serde(default)]
    pub inter_seismic_tensile_count: usize,
}

/// 一个同震事件的断层几何来源
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventConfig {
    /// 断层几何表
    #[serde(flatten)]
    pub table: TableInput,
    /// 字段分隔符；空格分隔符合并连续空白
    #[serde(default = "default_event_delimiter")]
    pub delimiter: char,
}

fn default_event_delimiter() -> char {
    ' '
}

impl ScenarioConfig {
    /// 从文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;

        let config: ScenarioConfig =
            serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 网格验证
        if self.grid.dimension.iter().any(|&d| d == 0) {
            return Err(ConfigError::InvalidValue {
                key: "grid.dimension".to_string(),
                value: format!("{:?}", self.grid.dimension),
                reason: "网格尺寸必须为正".to_string(),
            });
        }

        if self.grid.spacing.iter().any(|&dx| dx <= 0.0) {
            return Err(ConfigError::InvalidValue {
                key: "grid.spacing".to_string(),
                value: format!("{:?}", self.grid.spacing),
                reason: "网格间距必须为正".to_string(),
            });
        }

        let beta = self.grid.smoothing[0];
        if !(0.0..=0.5).contains(&beta) {
            return Err(ConfigError::InvalidValue {
                key: "grid.smoothing".to_string(),
                value: beta.to_string(),
                reason: "beta 必须在 [0, 0.5] 内".to_string(),
            });
        }

        // 投影输出未抑制时地理原点必填
        if !self.output.no_proj_output && self.grid.geo_origin.is_none() {
            return Err(ConfigError::Missing(
                "grid.geo_origin (或设置 output.no_proj_output)".to_string(),
            ));
        }

        // 弹性参数验证
        match &self.elastic {
            ElasticSpec::Explicit { mu_mpa, .. } => {
                if *mu_mpa <= 0.0 {
                    return Err(ConfigError::InvalidValue {
                        key: "elastic.mu_mpa".to_string(),
                        value: mu_mpa.to_string(),
                        reason: "剪切模量必须为正".to_string(),
                    });
                }
            }
            ElasticSpec::Derived {
                poisson_ratio,
                shear_modulus_pa,
                ..
            } => {
                if *shear_modulus_pa <= 0.0 {
                    return Err(ConfigError::InvalidValue {
                        key: "elastic.shear_modulus_pa".to_string(),
                        value: shear_modulus_pa.to_string(),
                        reason: "剪切模量必须为正".to_string(),
                    });
                }
                if !(0.0..0.5).contains(poisson_ratio) {
                    return Err(ConfigError::InvalidValue {
                        key: "elastic.poisson_ratio".to_string(),
                        value: poisson_ratio.to_string(),
                        reason: "泊松比必须在 [0, 0.5) 内".to_string(),
                    });
                }
            }
        }

        // 表格输入验证：path 与 inline 必居其一
        let tables = [
            ("observation.planes", &self.observation.planes),
            ("observation.points", &self.observation.points),
            ("observation.stress_segments", &self.observation.stress_segments),
            ("interfaces.linear_viscous", &self.interfaces.linear_viscous),
            ("interfaces.nonlinear_viscous", &self.interfaces.nonlinear_viscous),
            ("interfaces.fault_creep", &self.interfaces.fault_creep),
            ("interfaces.afterslip_planes", &self.interfaces.afterslip_planes),
        ];
        for (key, table) in tables {
            if let Some(table) = table {
                table.validate(key)?;
            }
        }

        for (i, event) in self.events.iter().enumerate() {
            event.table.validate(&format!("events[{i}]"))?;
        }

        Ok(())
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(ConfigError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> ScenarioConfig {
        ScenarioConfig {
            output: OutputConfig {
                no_proj_output: true,
                ..OutputConfig::default()
            },
            grid: GridConfig::default(),
            elastic: ElasticSpec::Explicit {
                lambda_mpa: 3e4,
                mu_mpa: 3e4,
                gamma_per_km: 8.33e-4,
            },
            time: TimeConfig::default(),
            observation: ObservationConfig::default(),
            interfaces: InterfaceConfig::default(),
            events: Vec::new(),
        }
    }

    #[test]
    fn test_minimal_config_valid() {
        assert!(minimal().validate().is_ok());
    }

    #[test]
    fn test_geo_origin_required_without_suppression() {
        let mut config = minimal();
        config.output.no_proj_output = false;
        assert!(matches!(config.validate(), Err(ConfigError::Missing(_))));

        config.grid.geo_origin = Some([120.982, 23.772]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_beta() {
        let mut config = minimal();
        config.grid.smoothing = [0.9, 2.0];
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_table_input_exactly_one() {
        let both = TableInput {
            path: Some(PathBuf::from("faults.flt")),
            inline: Some("1 2 3".to_string()),
        };
        assert!(both.validate("events[0]").is_err());

        let neither = TableInput::default();
        assert!(neither.validate("events[0]").is_err());

        let inline_only = TableInput {
            path: None,
            inline: Some("1 2 3".to_string()),
        };
        assert!(inline_only.validate("events[0]").is_ok());
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = minimal();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ScenarioConfig = serde_json::from_str(&json).unwrap();
        assert!(parsed.validate().is_ok());
        assert_eq!(parsed.grid.dimension, [256, 256, 256]);
        assert_eq!(parsed.time.step, -1.0);
    }

    #[test]
    fn test_defaults_from_sparse_json() {
        let json = r#"{
            "output": { "no_proj_output": true },
            "elastic": { "explicit": { "lambda_mpa": 3e4, "mu_mpa": 3e4, "gamma_per_km": 8.33e-4 } }
        }"#;
        let config: ScenarioConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.grid.dimension, [256, 256, 256]);
        assert_eq!(config.grid.spacing, [0.5, 0.5, 0.5]);
        assert_eq!(config.grid.smoothing, [0.2, 2.0]);
        assert_eq!(config.time.scaling, 1.0);
        assert!(config.events.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file_missing() {
        let err = ScenarioConfig::from_file("no/such/scenario.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenario.json");
        let mut config = minimal();
        config.events.push(EventConfig {
            table: TableInput {
                path: None,
                inline: Some("1 1 -10 0 0 10 10 0 90 0".to_string()),
            },
            delimiter: ' ',
        });
        config.save_to_file(&path).unwrap();
        let loaded = ScenarioConfig::from_file(&path).unwrap();
        assert_eq!(loaded.events.len(), 1);
        assert_eq!(loaded.events[0].delimiter, ' ');
    }
}
