// crates/rx_deck/src/fault.rs

//! 断层几何行类型
//!
//! 一条断层段记录十个定形字段：编号、滑移量、三维位置、长宽、
//! 走向、倾角、滑动角。全部以 f64 存储，统一经数值格式化渲染。

use crate::tabular::TableSource;

/// 一条断层段
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FaultSegment {
    /// 段编号
    pub no: f64,
    /// 滑移量 (m)
    pub slip: f64,
    /// 位置 x1 (km, 北向)
    pub x1: f64,
    /// 位置 x2 (km, 东向)
    pub x2: f64,
    /// 位置 x3 (km, 深度)
    pub x3: f64,
    /// 段长 (km)
    pub length: f64,
    /// 段宽 (km)
    pub width: f64,
    /// 走向 (度)
    pub strike: f64,
    /// 倾角 (度)
    pub dip: f64,
    /// 滑动角 (度)
    pub rake: f64,
}

impl FaultSegment {
    /// 列名，与文件列序一致
    pub const COLUMNS: [&'static str; 10] = [
        "no", "slip", "xs", "ys", "zs", "length", "width", "strike", "dip", "rake",
    ];

    /// 由一行十个字段构造
    pub fn from_fields(fields: [f64; 10]) -> Self {
        let [no, slip, x1, x2, x3, length, width, strike, dip, rake] = fields;
        Self {
            no,
            slip,
            x1,
            x2,
            x3,
            length,
            width,
            strike,
            dip,
            rake,
        }
    }

    /// 展开为表格行
    pub fn to_row(&self) -> Vec<f64> {
        vec![
            self.no,
            self.slip,
            self.x1,
            self.x2,
            self.x3,
            self.length,
            self.width,
            self.strike,
            self.dip,
            self.rake,
        ]
    }
}

/// 断层段序列 -> 结构化表
pub fn segments_to_table(segments: &[FaultSegment]) -> TableSource {
    TableSource::Rows(segments.iter().map(FaultSegment::to_row).collect())
}
