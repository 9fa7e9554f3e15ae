// crates/rx_foundation/src/error.rs

//! 错误处理模块，定义统一错误类型
//!
//! 提供 `RxError` 枚举和 `RxResult` 类型别名，用于整个项目的错误处理。
//!
//! # 设计原则
//!
//! 1. **层次化**: 基础层只定义核心错误，配置错误在 rx_config 中定义，
//!    脚本执行错误在 rx_io 中定义
//! 2. **易用性**: 提供便捷的构造方法
//! 3. **同步传播**: 所有错误同步抛给直接调用方，内部不捕获、不重试

use std::path::PathBuf;
use thiserror::Error;

/// 统一结果类型
pub type RxResult<T> = Result<T, RxError>;

/// RelaxKit 错误类型
///
/// 核心错误类型，用于整个项目。配置装载相关的错误在 `rx_config` 中扩展。
#[derive(Error, Debug)]
pub enum RxError {
    /// IO 错误
    #[error("IO错误: {message}")]
    Io {
        /// 描述性错误信息
        message: String,
        #[source]
        /// 可选的底层 IO 错误
        source: Option<std::io::Error>,
    },

    /// 文件或目录不存在
    #[error("文件不存在: {path}")]
    FileNotFound {
        /// 未找到的路径
        path: PathBuf,
    },

    /// 文件解析错误
    #[error("文件解析错误: {file} 第{line}行: {message}")]
    ParseError {
        /// 文件路径（内联数据为 `<inline>`）
        file: PathBuf,
        /// 行号（从 1 开始）
        line: usize,
        /// 错误信息
        message: String,
    },

    /// 无效输入
    #[error("无效的输入数据: {message}")]
    InvalidInput {
        /// 说明无效原因
        message: String,
    },

    /// 数据超出范围
    #[error("数据超出范围: {field}={value}, 期望范围=[{min}, {max}]")]
    OutOfRange {
        /// 字段名
        field: &'static str,
        /// 实际值
        value: f64,
        /// 最小允许值
        min: f64,
        /// 最大允许值
        max: f64,
    },

    /// 缺少必需的配置项
    #[error("缺少必需的配置项: {key}")]
    MissingConfig {
        /// 配置键名
        key: String,
    },
}

impl RxError {
    /// 从IO错误创建
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// 从IO错误创建（带源）
    pub fn io_with_source(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(source),
        }
    }

    /// 文件不存在
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// 解析错误
    pub fn parse(file: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            file: file.into(),
            line,
            message: message.into(),
        }
    }

    /// 无效输入
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// 缺少配置项
    pub fn missing_config(key: impl Into<String>) -> Self {
        Self::MissingConfig { key: key.into() }
    }

    /// 检查值是否在范围内
    #[inline]
    pub fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> RxResult<()> {
        if value < min || value > max {
            Err(Self::OutOfRange {
                field,
                value,
                min,
                max,
            })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RxError::missing_config("geo_origin");
        assert!(err.to_string().contains("geo_origin"));

        let err = RxError::parse("faults.flt", 3, "expected 10 columns");
        let text = err.to_string();
        assert!(text.contains("faults.flt"));
        assert!(text.contains('3'));
    }

    #[test]
    fn test_check_range() {
        assert!(RxError::check_range("lat", 40.0, -80.0, 84.0).is_ok());
        let err = RxError::check_range("lat", 90.0, -80.0, 84.0).unwrap_err();
        assert!(matches!(err, RxError::OutOfRange { field: "lat", .. }));
    }

    #[test]
    fn test_io_with_source_chain() {
        let inner = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = RxError::io_with_source("写入失败", inner);
        assert!(std::error::Error::source(&err).is_some());
    }
}
