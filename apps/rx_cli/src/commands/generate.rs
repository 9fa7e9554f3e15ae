// apps/rx_cli/src/commands/generate.rs

//! 生成卡片脚本命令
//!
//! 加载场景配置，组装卡片，整体渲染后写入脚本文件。

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use rx_config::ScenarioConfig;
use rx_io::write_script;

use crate::compose::build_model;

/// 生成参数
#[derive(Args)]
pub struct GenerateArgs {
    /// 场景配置文件路径 (JSON)
    #[arg(short, long)]
    pub scenario: PathBuf,

    /// 输出脚本路径
    #[arg(short, long, default_value = "relax.sh")]
    pub output: PathBuf,

    /// 只打印到标准输出，不写文件
    #[arg(long)]
    pub stdout: bool,
}

/// 执行生成命令
pub fn execute(args: GenerateArgs) -> Result<()> {
    let config = ScenarioConfig::from_file(&args.scenario)
        .with_context(|| format!("加载场景配置 {} 失败", args.scenario.display()))?;

    let mut model = build_model(&config)?;
    let filename = args.output.to_string_lossy().into_owned();
    let script = model.render_script(&filename)?;

    if args.stdout {
        print!("{script}");
        return Ok(());
    }

    write_script(&args.output, &script)?;
    info!("卡片脚本已写入 {}", args.output.display());
    info!("同震事件: {} 个", config.events.len());
    Ok(())
}
