// crates/rx_io/src/results.rs

//! 求解器输出目录扫描
//!
//! relax 把结果写入工作目录下的 .grd 栅格文件，文件名形如
//! `000.op001-s11.grd`（时间步、属性、扩展名）。本模块只枚举文件并
//! 提取属性标记，栅格解码不在本项目范围内。

use std::path::{Path, PathBuf};

use rx_foundation::error::{RxError, RxResult};

/// 一个 .grd 输出文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrdEntry {
    /// 文件路径
    pub path: PathBuf,
    /// 属性标记（文件名倒数第二个点段）
    pub property: String,
}

/// 枚举目录下的 .grd 输出文件，按路径排序
///
/// # Errors
/// 目录不存在时返回 [`RxError::FileNotFound`]。
pub fn scan_grd_folder(dir: &Path) -> RxResult<Vec<GrdEntry>> {
    if !dir.is_dir() {
        return Err(RxError::file_not_found(dir));
    }

    let entries = std::fs::read_dir(dir).map_err(|e| {
        RxError::io_with_source(format!("Failed to read {}", dir.display()), e)
    })?;

    let mut found = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            RxError::io_with_source(format!("Failed to read {}", dir.display()), e)
        })?;
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("grd") {
            continue;
        }
        let property = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map(|stem| stem.rsplit('.').next().unwrap_or(stem).to_string())
            .unwrap_or_default();
        found.push(GrdEntry { path, property });
    }

    found.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(found)
}
