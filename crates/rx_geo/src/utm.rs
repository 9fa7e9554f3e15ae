// crates/rx_geo/src/utm.rs

//! UTM 带号选取
//!
//! 由地理坐标（经度、纬度）确定 UTM 带号，用于输入卡片的
//! geographic origin 行。标准 6° 分带，外加两处例外：
//!
//! - 挪威西南 (56°N–64°N, 3°E–12°E) 统一划入 32 带
//! - 斯瓦尔巴群岛 (72°N–84°N) 只使用 31/33/35/37 奇数带
//!
//! # 示例
//!
//! ```
//! use rx_geo::utm::zone_number;
//!
//! // 北京 (116°E, 40°N) -> UTM 50
//! assert_eq!(zone_number(116.0, 40.0).unwrap(), 50);
//! ```

use rx_foundation::error::{RxError, RxResult};

/// 输入卡片中 geographic origin 行的长度单位（米/千米换算因子）
pub const LENGTH_UNIT_M: f64 = 1e3;

/// 地理坐标 -> UTM 带号
///
/// # Arguments
/// - `lon`: 经度 (度)
/// - `lat`: 纬度 (度)
///
/// # Returns
/// UTM 带号 (1-60)
///
/// # Errors
/// 纬度超出 UTM 有效范围 (-80°, 84°) 或经度超出 (-180°, 180°) 时返回错误
pub fn zone_number(lon: f64, lat: f64) -> RxResult<u8> {
    // 验证纬度范围
    if !(-80.0..=84.0).contains(&lat) {
        return Err(RxError::InvalidInput {
            message: format!("Latitude {lat} out of UTM range (-80, 84)"),
        });
    }

    // 验证经度范围
    if !(-180.0..=180.0).contains(&lon) {
        return Err(RxError::InvalidInput {
            message: format!("Longitude {lon} out of range (-180, 180)"),
        });
    }

    // 挪威西南例外
    if (56.0..64.0).contains(&lat) && (3.0..12.0).contains(&lon) {
        return Ok(32);
    }

    // 斯瓦尔巴例外
    if (72.0..=84.0).contains(&lat) && lon >= 0.0 {
        if lon < 9.0 {
            return Ok(31);
        } else if lon < 21.0 {
            return Ok(33);
        } else if lon < 33.0 {
            return Ok(35);
        } else if lon < 42.0 {
            return Ok(37);
        }
    }

    // 标准 6° 分带；180° 经线归入 60 带
    let zone = ((lon + 180.0) / 6.0).floor() as i32 + 1;
    Ok(zone.clamp(1, 60) as u8)
}
