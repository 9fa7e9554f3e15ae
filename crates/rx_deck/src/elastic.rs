// crates/rx_deck/src/elastic.rs

//! 弹性参数
//!
//! 输入卡片第 2 分区：第一拉梅常数 lambda (MPa)、剪切模量 mu (MPa)、
//! 浮力项 gamma (1/km)。gamma 可由泊松比、密度、重力加速度与剪切模量
//! 推导：gamma = (1 - nu) * rho * g / mu，单位 1/m，再换算为 1/km。
//! 推导是纯函数，精确计算；小数位截断只发生在渲染阶段。

use std::fmt::Write as _;

/// Pa -> MPa 换算因子
const PA_PER_MPA: f64 = 1e6;

/// 1/m -> 1/km 换算因子
const M_PER_KM: f64 = 1e3;

/// 浮力项 gamma (1/m)
///
/// gamma = (1 - nu) * rho * g / mu
///
/// # Arguments
/// - `poisson_ratio`: 泊松比 nu
/// - `density`: 密度 rho (kg/m^3)
/// - `gravity`: 重力加速度 g (m/s^2)
/// - `shear_modulus_pa`: 剪切模量 mu (Pa)
#[inline]
pub fn buoyancy_gamma(poisson_ratio: f64, density: f64, gravity: f64, shear_modulus_pa: f64) -> f64 {
    (1.0 - poisson_ratio) * density * gravity / shear_modulus_pa
}

/// 弹性参数（卡片单位：MPa 与 1/km）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElasticParameters {
    /// 第一拉梅常数 (MPa)
    pub lambda_mpa: f64,
    /// 剪切模量 (MPa)
    pub mu_mpa: f64,
    /// 浮力项 (1/km)
    pub gamma_per_km: f64,
}

impl ElasticParameters {
    /// 直接给定卡片单位的参数
    pub fn new(lambda_mpa: f64, mu_mpa: f64, gamma_per_km: f64) -> Self {
        Self {
            lambda_mpa,
            mu_mpa,
            gamma_per_km,
        }
    }

    /// 由 SI 单位的地壳物性推导
    ///
    /// lambda、mu 由 Pa 换算为 MPa，gamma 由 1/m 换算为 1/km。
    pub fn derive(
        poisson_ratio: f64,
        density: f64,
        gravity: f64,
        shear_modulus_pa: f64,
        lambda_pa: f64,
    ) -> Self {
        let gamma_per_m = buoyancy_gamma(poisson_ratio, density, gravity, shear_modulus_pa);
        Self {
            lambda_mpa: lambda_pa / PA_PER_MPA,
            mu_mpa: shear_modulus_pa / PA_PER_MPA,
            gamma_per_km: gamma_per_m * M_PER_KM,
        }
    }

    /// 渲染弹性参数分区
    pub fn render_section(&self) -> String {
        let mut out = String::from("# lambda (MPa), mu (MPa), gamma (1/km)\n");
        let _ = writeln!(out, "{} {} {}", self.lambda_mpa, self.mu_mpa, self.gamma_per_km);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gamma_derivation_exact() {
        // nu=0.25, rho=2700 kg/m^3, g=9.8 m/s^2, mu=3e10 Pa
        let gamma = buoyancy_gamma(0.25, 2700.0, 9.8, 3e10);
        let expected = 0.75 * 2700.0 * 9.8 / 3e10;
        assert_eq!(gamma, expected);
        assert!((gamma - 6.615e-7).abs() < 1e-12);
    }

    #[test]
    fn test_derive_unit_scaling() {
        let params = ElasticParameters::derive(0.25, 2700.0, 9.8, 3e10, 3e10);
        assert!((params.mu_mpa - 3e4).abs() < 1e-9);
        assert!((params.lambda_mpa - 3e4).abs() < 1e-9);
        // 6.615e-7 1/m == 6.615e-4 1/km
        assert!((params.gamma_per_km - 6.615e-4).abs() < 1e-12);
    }

    #[test]
    fn test_render_section() {
        let params = ElasticParameters::new(3e4, 3e4, 8.33e-4);
        assert_eq!(
            params.render_section(),
            "# lambda (MPa), mu (MPa), gamma (1/km)\n30000 30000 0.000833\n"
        );
    }
}
