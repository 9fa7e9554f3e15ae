// crates/rx_deck/src/section.rs

//! 分区存储
//!
//! 输入卡片由固定的十四个分区按序拼接而成。分区用固定枚举标识，
//! 存储在有序映射中：写入顺序任意，渲染时严格按序号升序拼接；
//! 对同一分区重复写入时后写覆盖先写（shell 外壳分区依赖该语义，
//! 在文件名确定后重写）。缺失的分区渲染时直接跳过，不补缺、不报错。

use std::collections::BTreeMap;

/// 输入卡片分区标识
///
/// 判别值即渲染顺序。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum SectionId {
    /// shell 脚本外壳（解释器行、工作目录、求解器调用行）
    ShellHeader = 0,
    /// 网格尺寸、间距、平滑、原点与观测深度
    GridModel = 1,
    /// 弹性参数 (lambda, mu, gamma)
    ElasticParams = 2,
    /// 时间积分
    TimeIntegration = 3,
    /// 观测面
    ObservationPlanes = 4,
    /// 观测点
    ObservationPoints = 5,
    /// 应力观测段
    StressObservationSegments = 6,
    /// 预应力界面
    PrestressInterfaces = 7,
    /// 线性黏性界面
    LinearViscousInterfaces = 8,
    /// 非线性黏性界面
    NonlinearViscousInterfaces = 9,
    /// 断层蠕滑界面（含余滑面）
    FaultCreepInterfaces = 10,
    /// 震间走滑段
    InterSeismicStrikeSlip = 11,
    /// 震间张性段
    InterSeismicTensile = 12,
    /// 同震事件块（含 EOF 结束标记）
    CoseismicEvents = 13,
}

impl SectionId {
    /// 全部分区，按渲染顺序
    pub const ALL: [SectionId; 14] = [
        SectionId::ShellHeader,
        SectionId::GridModel,
        SectionId::ElasticParams,
        SectionId::TimeIntegration,
        SectionId::ObservationPlanes,
        SectionId::ObservationPoints,
        SectionId::StressObservationSegments,
        SectionId::PrestressInterfaces,
        SectionId::LinearViscousInterfaces,
        SectionId::NonlinearViscousInterfaces,
        SectionId::FaultCreepInterfaces,
        SectionId::InterSeismicStrikeSlip,
        SectionId::InterSeismicTensile,
        SectionId::CoseismicEvents,
    ];

    /// 渲染序号
    #[inline]
    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

/// 输入卡片构建器
///
/// 累积各分区文本，`render` 时按序号升序拼接为完整文档。
/// 单次构建使用，渲染本身无副作用、可重复调用。
#[derive(Debug, Clone, Default)]
pub struct DeckBuilder {
    sections: BTreeMap<SectionId, String>,
}

impl DeckBuilder {
    /// 创建空构建器
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入或覆盖分区内容
    pub fn set_section(&mut self, id: SectionId, text: impl Into<String>) {
        self.sections.insert(id, text.into());
    }

    /// 读取分区内容
    pub fn section(&self, id: SectionId) -> Option<&str> {
        self.sections.get(&id).map(String::as_str)
    }

    /// 分区是否已写入
    pub fn is_populated(&self, id: SectionId) -> bool {
        self.sections.contains_key(&id)
    }

    /// 尚未写入的分区，按渲染顺序
    pub fn missing_sections(&self) -> Vec<SectionId> {
        SectionId::ALL
            .iter()
            .copied()
            .filter(|id| !self.sections.contains_key(id))
            .collect()
    }

    /// 按序号升序拼接所有已写入分区
    pub fn render(&self) -> String {
        let mut out = String::new();
        for text in self.sections.values() {
            out.push_str(text);
        }
        out
    }
}
