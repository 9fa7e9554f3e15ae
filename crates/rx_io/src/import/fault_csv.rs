// crates/rx_io/src/import/fault_csv.rs

//! 断层几何表导入
//!
//! 从分隔符文本（文件或内联字符串）加载断层段，支持：
//! - 可配置分隔符（空格分隔符合并连续空白）
//! - 注释行与空行跳过
//! - 可选表头行
//!
//! 每行必须恰好十列：`no slip xs ys zs length width strike dip rake`。
//! 畸形行一律拒绝，解析错误给出来源与行号。
//!
//! # 使用示例
//!
//! ```ignore
//! use std::path::Path;
//! use rx_io::import::fault_csv::{load_fault_segments, FaultCsvConfig};
//!
//! let config = FaultCsvConfig::default();
//! let segments = load_fault_segments(Path::new("faults/chichi.flt"), &config)?;
//! ```

use std::path::Path;

use rx_deck::fault::FaultSegment;
use rx_foundation::error::{RxError, RxResult};

/// 断层表加载配置
#[derive(Debug, Clone)]
pub struct FaultCsvConfig {
    /// 字段分隔符；空格表示按任意连续空白切分
    pub delimiter: char,
    /// 是否有表头行
    pub has_header: bool,
    /// 注释行前缀（以此开头的行将被跳过）
    pub comment_prefix: Option<char>,
}

impl Default for FaultCsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ' ',
            has_header: false,
            comment_prefix: Some('#'),
        }
    }
}

impl FaultCsvConfig {
    /// 创建逗号分隔的配置
    pub fn comma_separated() -> Self {
        Self {
            delimiter: ',',
            ..Default::default()
        }
    }

    /// 创建制表符分隔的配置
    pub fn tab_separated() -> Self {
        Self {
            delimiter: '\t',
            ..Default::default()
        }
    }

    /// 设置分隔符
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// 设置表头行
    pub fn with_header(mut self) -> Self {
        self.has_header = true;
        self
    }
}

/// 从文件加载断层段
///
/// # Errors
///
/// - 文件读取失败
/// - 无有效数据
/// - 遇到畸形行（列数不足或字段不可解析）
pub fn load_fault_segments(path: &Path, config: &FaultCsvConfig) -> RxResult<Vec<FaultSegment>> {
    let content = std::fs::read_to_string(path).map_err(|e| RxError::Io {
        message: format!("Failed to read {}: {}", path.display(), e),
        source: Some(e),
    })?;

    parse_fault_content(&content, config, Some(path))
}

/// 从字符串解析断层段
pub fn parse_fault_string(content: &str, config: &FaultCsvConfig) -> RxResult<Vec<FaultSegment>> {
    parse_fault_content(content, config, None)
}

/// 内部解析函数
fn parse_fault_content(
    content: &str,
    config: &FaultCsvConfig,
    path: Option<&Path>,
) -> RxResult<Vec<FaultSegment>> {
    let error_path = || path.unwrap_or_else(|| Path::new("<inline>")).to_path_buf();
    let mut segments = Vec::new();
    let mut data_line_seen = false;

    for (line_num, line) in content.lines().enumerate() {
        let trimmed = line.trim();

        // 跳过空行
        if trimmed.is_empty() {
            continue;
        }

        // 跳过注释行
        if let Some(prefix) = config.comment_prefix {
            if trimmed.starts_with(prefix) {
                continue;
            }
        }

        // 跳过表头
        if config.has_header && !data_line_seen {
            data_line_seen = true;
            continue;
        }
        data_line_seen = true;

        // 分割列
        let parts: Vec<&str> = if config.delimiter == ' ' {
            trimmed.split_whitespace().collect()
        } else {
            trimmed.split(config.delimiter).map(str::trim).collect()
        };

        if parts.len() != FaultSegment::COLUMNS.len() {
            return Err(RxError::parse(
                error_path(),
                line_num + 1,
                format!(
                    "expected {} columns, got {}",
                    FaultSegment::COLUMNS.len(),
                    parts.len()
                ),
            ));
        }

        let mut fields = [0.0f64; 10];
        for (i, part) in parts.iter().enumerate() {
            fields[i] = match part.parse::<f64>() {
                Ok(v) if v.is_finite() => v,
                _ => {
                    return Err(RxError::parse(
                        error_path(),
                        line_num + 1,
                        format!("failed to parse column '{}': {part}", FaultSegment::COLUMNS[i]),
                    ));
                }
            };
        }

        segments.push(FaultSegment::from_fields(fields));
    }

    // 检查是否有有效数据
    if segments.is_empty() {
        let source = path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<inline>".to_string());
        return Err(RxError::invalid_input(format!(
            "{source}: No valid fault segments found"
        )));
    }

    Ok(segments)
}
