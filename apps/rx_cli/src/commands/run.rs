// apps/rx_cli/src/commands/run.rs

//! 生成并执行命令
//!
//! 生成卡片脚本后阻塞执行。求解器输出与退出码原样透传，
//! 本命令不做任何解释。

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::{info, warn};

use rx_config::ScenarioConfig;
use rx_io::{run_script_file, write_script};

use crate::compose::build_model;

/// 运行参数
#[derive(Args)]
pub struct RunArgs {
    /// 场景配置文件路径 (JSON)
    #[arg(short, long)]
    pub scenario: PathBuf,

    /// 脚本输出路径
    #[arg(short, long, default_value = "relax.sh")]
    pub output: PathBuf,
}

/// 执行运行命令
pub fn execute(args: RunArgs) -> Result<()> {
    let config = ScenarioConfig::from_file(&args.scenario)
        .with_context(|| format!("加载场景配置 {} 失败", args.scenario.display()))?;

    let mut model = build_model(&config)?;
    let filename = args.output.to_string_lossy().into_owned();
    let script = model.render_script(&filename)?;
    write_script(&args.output, &script)?;
    info!("卡片脚本已写入 {}", args.output.display());

    info!("执行求解器...");
    let result = run_script_file(&args.output)?;

    // 捕获的输出原样透传
    if !result.stdout.is_empty() {
        print!("{}", result.stdout);
    }
    if !result.stderr.is_empty() {
        eprint!("{}", result.stderr);
    }

    if result.success() {
        info!("求解器正常结束");
        Ok(())
    } else {
        warn!("求解器退出码: {:?}", result.status.code());
        std::process::exit(result.status.code().unwrap_or(1));
    }
}
