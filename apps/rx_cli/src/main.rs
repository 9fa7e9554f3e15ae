// apps/rx_cli/src/main.rs

//! RelaxKit 命令行界面
//!
//! 由场景配置生成 relax 求解器的输入卡片脚本，并可直接执行。
//!
//! # 架构层级
//!
//! 本模块属于 **Layer 5: Application**：仅使用 `ScenarioConfig` 与
//! `RelaxModel` 的公开接口，场景到分区的翻译集中在 [`compose`]。

mod commands;
mod compose;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// RelaxKit 输入卡片生成工具
#[derive(Parser)]
#[command(name = "rx_cli")]
#[command(author = "RelaxKit Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Input deck generator for the relax viscoelastic solver", long_about = None)]
struct Cli {
    /// 日志级别 (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 生成卡片脚本
    Generate(commands::generate::GenerateArgs),
    /// 生成并执行
    Run(commands::run::RunArgs),
    /// 验证场景配置
    Validate(commands::validate::ValidateArgs),
    /// 显示场景信息
    Info(commands::info::InfoArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 初始化日志
    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // 执行命令
    match cli.command {
        Commands::Generate(args) => commands::generate::execute(args),
        Commands::Run(args) => commands::run::execute(args),
        Commands::Validate(args) => commands::validate::execute(args),
        Commands::Info(args) => commands::info::execute(args),
    }
}
