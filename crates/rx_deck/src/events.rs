// crates/rx_deck/src/events.rs

//! 同震事件块
//!
//! 输入卡片的最后一个分区：事件数，每个事件一张走滑段表
//! （两位小数），随后是张性段、膨胀点源、地表牵引三个零计数块，
//! 以 heredoc 结束标记 `EOF` 收尾。
//!
//! 同震段数据无论来自内联文本还是断层文件，都先经断层几何读取器
//! 解析为 [`FaultSegment`] 行，再统一按两位小数渲染。

use crate::fault::{segments_to_table, FaultSegment};
use crate::tabular::render_block;

/// 同震段表的渲染精度（小数位）
pub const COSEISMIC_PRECISION: usize = 2;

/// 走滑段表的列头注释
const SEGMENT_HEADER: &str =
    "# n     slip       xs       ys       zs  length   width strike   dip   rake";

/// 同震事件集合
///
/// 每个事件携带一组走滑段。
#[derive(Debug, Clone, Default)]
pub struct CoseismicEvents {
    events: Vec<Vec<FaultSegment>>,
}

impl CoseismicEvents {
    /// 由断层段序列构造（每个事件一组段）
    pub fn new(events: Vec<Vec<FaultSegment>>) -> Self {
        Self { events }
    }

    /// 单事件便捷构造
    pub fn single(segments: Vec<FaultSegment>) -> Self {
        Self {
            events: vec![segments],
        }
    }

    /// 事件数
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// 渲染同震事件分区（含 EOF 结束标记）
    pub fn render(&self) -> String {
        let mut out = format!("# number of coseismic events\n{}\n", self.events.len());
        for segments in &self.events {
            out.push_str(&render_block(
                "# number of coseismic strike-slip segments",
                SEGMENT_HEADER,
                &segments_to_table(segments),
                COSEISMIC_PRECISION,
            ));
        }
        out.push_str("# number of coseismic tensile segments\n0\n");
        out.push_str("# number of coseismic dilatation point sources\n0\n");
        out.push_str("# number of surface traction sources\n0\nEOF\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_event_single_segment() {
        let events = CoseismicEvents::single(vec![FaultSegment::from_fields([
            1.0, 1.0, -10.0, 0.0, 0.0, 10.0, 10.0, 0.0, 90.0, 0.0,
        ])]);
        let text = events.render();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "# number of coseismic events");
        assert_eq!(lines[1], "1");
        assert_eq!(lines[2], "# number of coseismic strike-slip segments");
        assert_eq!(lines[3], "1");
        assert_eq!(lines[5], "1.00 1.00 -10.00 0.00 0.00 10.00 10.00 0.00 90.00 0.00");
        assert_eq!(lines.last(), Some(&"EOF"));
    }

    #[test]
    fn test_segment_count_is_row_count() {
        let segments = vec![
            FaultSegment::from_fields([0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]),
            FaultSegment::from_fields([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 0.0]),
        ];
        let text = CoseismicEvents::single(segments).render();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[3], "2");
    }

    #[test]
    fn test_two_events_two_tables() {
        let a = vec![FaultSegment::from_fields([1.0; 10])];
        let b = vec![FaultSegment::from_fields([2.0; 10])];
        let text = CoseismicEvents::new(vec![a, b]).render();
        assert_eq!(text.lines().nth(1), Some("2"));
        assert_eq!(
            text.matches("# number of coseismic strike-slip segments").count(),
            2
        );
    }

    #[test]
    fn test_trailing_zero_blocks_and_sentinel() {
        let text = CoseismicEvents::default().render();
        assert_eq!(
            text,
            "# number of coseismic events\n0\n\
             # number of coseismic tensile segments\n0\n\
             # number of coseismic dilatation point sources\n0\n\
             # number of surface traction sources\n0\nEOF\n"
        );
    }
}
