// apps/rx_cli/src/commands/validate.rs

//! 场景配置验证命令
//!
//! 验证场景配置文件的正确性，并对可疑取值给出告警。

use anyhow::{bail, Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::{error, info, warn};

use rx_config::ScenarioConfig;

/// 验证参数
#[derive(Args)]
pub struct ValidateArgs {
    /// 场景配置文件路径 (JSON)
    #[arg(short, long)]
    pub scenario: PathBuf,

    /// 严格模式（告警也视为错误）
    #[arg(long)]
    pub strict: bool,
}

/// 验证结果
#[derive(Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    fn is_ok_strict(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// 执行验证命令
pub fn execute(args: ValidateArgs) -> Result<()> {
    info!("=== RelaxKit 场景验证 ===");

    let mut result = ValidationResult::default();

    let content = std::fs::read_to_string(&args.scenario)
        .with_context(|| format!("读取 {} 失败", args.scenario.display()))?;

    match serde_json::from_str::<ScenarioConfig>(&content) {
        Err(e) => result.add_error(format!("JSON 解析失败: {e}")),
        Ok(config) => {
            if let Err(e) = config.validate() {
                result.add_error(e.to_string());
            } else {
                check_warnings(&config, &mut result);
            }
        }
    }

    for msg in &result.errors {
        error!("错误: {msg}");
    }
    for msg in &result.warnings {
        warn!("告警: {msg}");
    }

    let ok = if args.strict {
        result.is_ok_strict()
    } else {
        result.is_ok()
    };

    if ok {
        info!("场景配置有效");
        Ok(())
    } else {
        bail!(
            "验证未通过: {} 个错误, {} 个告警",
            result.errors.len(),
            result.warnings.len()
        );
    }
}

fn check_warnings(config: &ScenarioConfig, result: &mut ValidationResult) {
    // 谱方法求解器偏好 2 的幂网格
    for (axis, &n) in ["SX1", "SX2", "SX3"].iter().zip(config.grid.dimension.iter()) {
        if !n.is_power_of_two() {
            result.add_warning(format!("{axis}={n} 不是 2 的幂，FFT 效率会下降"));
        }
    }

    if config.events.is_empty() {
        result.add_warning("未定义同震事件，卡片只描述背景模型");
    }

    if config.time.interval > 0.0 && config.time.step > config.time.interval {
        result.add_warning("时间步长大于积分时长");
    }
}
