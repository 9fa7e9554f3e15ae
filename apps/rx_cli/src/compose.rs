// apps/rx_cli/src/compose.rs

//! 场景配置 -> RelaxModel 的翻译
//!
//! 这是全部十三个参数分区被显式填充的唯一位置：配置里没有的表格
//! 一律以零计数写入，渲染层不自动补任何分区。

use anyhow::{bail, Context, Result};
use rx_config::{ElasticSpec, ScenarioConfig, TableInput};
use rx_deck::prelude::*;
use rx_io::import::fault_csv::{load_fault_segments, parse_fault_string, FaultCsvConfig};

/// 由场景配置组装卡片模型
pub fn build_model(config: &ScenarioConfig) -> Result<RelaxModel> {
    let output = OutputOptions {
        no_proj_output: config.output.no_proj_output,
        no_stress_output: config.output.no_stress_output,
        no_vtk_output: config.output.no_vtk_output,
        no_grd_output: config.output.no_grd_output,
    };
    let mut model = RelaxModel::new(output);

    let grid = GridModel {
        dimension: (
            config.grid.dimension[0],
            config.grid.dimension[1],
            config.grid.dimension[2],
        ),
        spacing: (
            config.grid.spacing[0],
            config.grid.spacing[1],
            config.grid.spacing[2],
        ),
        smoothing: (config.grid.smoothing[0], config.grid.smoothing[1]),
        origin: (config.grid.origin[0], config.grid.origin[1]),
        rotation: config.grid.rotation,
        geo_origin: config.grid.geo_origin.map(|[lon, lat]| (lon, lat)),
        observation_depths: (
            config.grid.observation_depths[0],
            config.grid.observation_depths[1],
        ),
    };
    model.set_grid_model(&grid).context("写入网格分区失败")?;

    model.set_elastic_parameters(&resolve_elastic(&config.elastic));
    model.set_time_integration(&TimeIntegration {
        interval: config.time.interval,
        step: config.time.step,
        scaling: config.time.scaling,
    });

    let planes = load_optional_table(&config.observation.planes)?;
    model.set_observation_planes(planes.as_ref());
    let points = load_optional_table(&config.observation.points)?;
    model.set_observation_points(points.as_ref());
    let stress = load_optional_table(&config.observation.stress_segments)?;
    model.set_stress_observation_segments(stress.as_ref());

    model.set_prestress_interfaces(config.interfaces.prestress_count);
    let linear = load_optional_table(&config.interfaces.linear_viscous)?;
    model.set_linear_viscous_interfaces(linear.as_ref());
    let nonlinear = load_optional_table(&config.interfaces.nonlinear_viscous)?;
    model.set_nonlinear_viscous_interfaces(nonlinear.as_ref());
    let creep = load_optional_table(&config.interfaces.fault_creep)?;
    let afterslip = load_optional_table(&config.interfaces.afterslip_planes)?;
    model.set_fault_creep_interfaces(creep.as_ref(), afterslip.as_ref());
    model.set_inter_seismic_strike_slip(config.interfaces.inter_seismic_strike_slip_count);
    model.set_inter_seismic_tensile(config.interfaces.inter_seismic_tensile_count);

    let mut events = Vec::with_capacity(config.events.len());
    for (i, event) in config.events.iter().enumerate() {
        let csv = FaultCsvConfig::default().with_delimiter(event.delimiter);
        let segments = match (&event.table.path, &event.table.inline) {
            (Some(path), None) => load_fault_segments(path, &csv)
                .with_context(|| format!("events[{i}]: 读取断层几何失败"))?,
            (None, Some(text)) => parse_fault_string(text, &csv)
                .with_context(|| format!("events[{i}]: 解析断层几何失败"))?,
            _ => bail!("events[{i}]: path 与 inline 必居其一"),
        };
        events.push(segments);
    }
    model.set_coseismic_events(&CoseismicEvents::new(events));

    Ok(model)
}

/// 解析弹性参数规格
pub fn resolve_elastic(spec: &ElasticSpec) -> ElasticParameters {
    match spec {
        ElasticSpec::Explicit {
            lambda_mpa,
            mu_mpa,
            gamma_per_km,
        } => ElasticParameters::new(*lambda_mpa, *mu_mpa, *gamma_per_km),
        ElasticSpec::Derived {
            poisson_ratio,
            density,
            gravity,
            shear_modulus_pa,
            lambda_pa,
        } => ElasticParameters::derive(
            *poisson_ratio,
            *density,
            *gravity,
            *shear_modulus_pa,
            *lambda_pa,
        ),
    }
}

fn load_optional_table(input: &Option<TableInput>) -> Result<Option<TableSource>> {
    let Some(input) = input else {
        return Ok(None);
    };
    match (&input.path, &input.inline) {
        (Some(path), None) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("读取 {} 失败", path.display()))?;
            Ok(Some(TableSource::Rendered(content)))
        }
        (None, Some(text)) => Ok(Some(TableSource::Inline(text.clone()))),
        _ => bail!("表格输入需要且只需要 path 或 inline 之一"),
    }
}
