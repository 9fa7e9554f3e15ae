// apps/rx_cli/src/commands/info.rs

//! 场景信息命令

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use rx_config::ScenarioConfig;
use rx_geo::utm::zone_number;

use crate::compose::resolve_elastic;

/// 信息参数
#[derive(Args)]
pub struct InfoArgs {
    /// 场景配置文件路径 (JSON)
    #[arg(short, long)]
    pub scenario: PathBuf,
}

/// 执行信息命令
pub fn execute(args: InfoArgs) -> Result<()> {
    let config = ScenarioConfig::from_file(&args.scenario)
        .with_context(|| format!("加载场景配置 {} 失败", args.scenario.display()))?;

    info!("=== RelaxKit 场景信息 ===");
    let [sx1, sx2, sx3] = config.grid.dimension;
    let [dx1, dx2, dx3] = config.grid.spacing;
    info!("网格: {sx1} x {sx2} x {sx3}, 间距 ({dx1}, {dx2}, {dx3}) km");

    match config.grid.geo_origin {
        Some([lon, lat]) => {
            let zone = zone_number(lon, lat)?;
            info!("地理原点: ({lon}, {lat}), UTM 带 {zone}");
        }
        None => info!("地理原点: 未设置"),
    }

    let elastic = resolve_elastic(&config.elastic);
    info!(
        "弹性参数: lambda={} MPa, mu={} MPa, gamma={} 1/km",
        elastic.lambda_mpa, elastic.mu_mpa, elastic.gamma_per_km
    );

    info!("时间积分: ({}, {}, {})", config.time.interval, config.time.step, config.time.scaling);
    info!("同震事件: {} 个", config.events.len());

    let flags = [
        ("no_proj_output", config.output.no_proj_output),
        ("no_stress_output", config.output.no_stress_output),
        ("no_vtk_output", config.output.no_vtk_output),
        ("no_grd_output", config.output.no_grd_output),
    ];
    let enabled: Vec<&str> = flags
        .iter()
        .filter(|(_, on)| *on)
        .map(|(name, _)| *name)
        .collect();
    if enabled.is_empty() {
        info!("输出开关: 全部输出");
    } else {
        info!("输出开关: {}", enabled.join(", "));
    }

    Ok(())
}
