// crates/rx_deck/src/tabular.rs

//! 表格块渲染
//!
//! 输入卡片中的数据表以三种形式提供，统一归一化为同一输出表示：
//!
//! - [`TableSource::Rows`]: 结构化数值表，按指定小数位数格式化
//! - [`TableSource::Rendered`]: 已渲染文本（每行一条记录），原样使用
//! - [`TableSource::Inline`]: 原始字符串，原样使用
//!
//! 渲染输出固定为：计数说明行、行数、列头注释行、数据行。
//! 行数为零时只输出行数 `0`，省略列头与数据行。
//!
//! # 示例
//!
//! ```
//! use rx_deck::tabular::{render_block, TableSource};
//!
//! let table = TableSource::Rows(vec![vec![1.0, 168.5, -438.7, 0.0]]);
//! let text = render_block(
//!     "# number of observation planes",
//!     "# n x1 x2 x3",
//!     &table,
//!     3,
//! );
//! assert_eq!(
//!     text,
//!     "# number of observation planes\n1\n# n x1 x2 x3\n1.000 168.500 -438.700 0.000\n"
//! );
//! ```

use std::fmt::Write as _;

/// 表格数据来源
///
/// 结构化表与等值的已渲染文本（相同数值、相同精度）渲染结果逐字节相同。
#[derive(Debug, Clone, PartialEq)]
pub enum TableSource {
    /// 结构化数值表，渲染时按指定精度格式化
    Rows(Vec<Vec<f64>>),
    /// 已渲染文本块，每行一条记录
    Rendered(String),
    /// 原始字符串
    Inline(String),
}

impl TableSource {
    /// 空表
    pub fn empty() -> Self {
        TableSource::Rows(Vec::new())
    }

    /// 数据行数
    ///
    /// 文本形式按非空行计数（忽略结尾换行）。
    pub fn row_count(&self) -> usize {
        match self {
            TableSource::Rows(rows) => rows.len(),
            TableSource::Rendered(text) | TableSource::Inline(text) => {
                text.lines().filter(|line| !line.trim().is_empty()).count()
            }
        }
    }

    /// 渲染数据行（每行以换行结尾）
    pub fn render_rows(&self, precision: usize) -> String {
        match self {
            TableSource::Rows(rows) => {
                let mut out = String::new();
                for row in rows {
                    let mut first = true;
                    for value in row {
                        if !first {
                            out.push(' ');
                        }
                        let _ = write!(out, "{:.*}", precision, value);
                        first = false;
                    }
                    out.push('\n');
                }
                out
            }
            TableSource::Rendered(text) | TableSource::Inline(text) => {
                let mut out = String::new();
                for line in text.lines().filter(|line| !line.trim().is_empty()) {
                    out.push_str(line.trim_end());
                    out.push('\n');
                }
                out
            }
        }
    }
}

impl From<Vec<Vec<f64>>> for TableSource {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        TableSource::Rows(rows)
    }
}

impl From<String> for TableSource {
    fn from(text: String) -> Self {
        TableSource::Inline(text)
    }
}

impl From<&str> for TableSource {
    fn from(text: &str) -> Self {
        TableSource::Inline(text.to_string())
    }
}

/// 渲染一个完整表格块
///
/// 输出依次为 `count_label` 行、行数行、`header_comment` 行、数据行；
/// 行数为零时省略列头与数据行。
pub fn render_block(
    count_label: &str,
    header_comment: &str,
    source: &TableSource,
    precision: usize,
) -> String {
    let count = source.row_count();
    let mut out = format!("{count_label}\n{count}\n");
    if count > 0 {
        out.push_str(header_comment);
        out.push('\n');
        out.push_str(&source.render_rows(precision));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_rows_emits_count_only() {
        let text = render_block("# number of observation points", "# no name x1 x2 x3", &TableSource::empty(), 3);
        assert_eq!(text, "# number of observation points\n0\n");
    }

    #[test]
    fn test_row_count_matches_data_lines() {
        for n in 0..5 {
            let rows: Vec<Vec<f64>> = (0..n).map(|i| vec![i as f64, 1.0]).collect();
            let text = render_block("# count", "# a b", &TableSource::Rows(rows), 2);
            let lines: Vec<&str> = text.lines().collect();
            assert_eq!(lines[1], n.to_string());
            let data_lines = lines.len() - if n == 0 { 2 } else { 3 };
            assert_eq!(data_lines, n);
        }
    }

    #[test]
    fn test_rows_and_rendered_round_trip() {
        let rows = TableSource::Rows(vec![
            vec![1.0, 1.0, -10.0, 0.0, 0.0, 10.0, 10.0, 0.0, 90.0, 0.0],
            vec![2.0, 0.5, -12.0, 3.0, 0.0, 8.0, 6.0, 45.0, 60.0, 90.0],
        ]);
        let pre_rendered = TableSource::Rendered(
            "1.00 1.00 -10.00 0.00 0.00 10.00 10.00 0.00 90.00 0.00\n\
             2.00 0.50 -12.00 3.00 0.00 8.00 6.00 45.00 60.00 90.00\n"
                .to_string(),
        );
        let a = render_block("# n", "# h", &rows, 2);
        let b = render_block("# n", "# h", &pre_rendered, 2);
        assert_eq!(a, b);
    }

    #[test]
    fn test_inline_trailing_newline_not_counted() {
        let inline = TableSource::from("1 2 0\n2 1 3\n");
        assert_eq!(inline.row_count(), 2);
        let bare = TableSource::from("1 2 0\n2 1 3");
        assert_eq!(bare.row_count(), 2);
    }

    #[test]
    fn test_precision_applied_per_block() {
        let table = TableSource::Rows(vec![vec![1.0, 0.125]]);
        assert_eq!(table.render_rows(2), "1.00 0.13\n");
        assert_eq!(table.render_rows(3), "1.000 0.125\n");
    }
}
