//! # 八字命理常量表
//!
//! 天干地支的五行阴阳、地支藏干、月令旺衰分值、地支六冲六合，以及
//! 强弱评分与格局判断的各项阈值。
//!
//! 所有查表均通过 `get()` 访问，缺项时返回 `ChartError::DomainTableIncomplete`，
//! 不以默认值代替。

use crate::types::{ChartError, ConstantTable, DiZhi, ShiShen, TianGan, WuXing, YinYang};

// ============================================================================
// 名称
// ============================================================================

pub const TIANGAN_NAMES: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

pub const DIZHI_NAMES: [&str; 12] =
	["子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥"];

// ============================================================================
// 五行与阴阳
// ============================================================================

/// 天干五行：甲乙木 丙丁火 戊己土 庚辛金 壬癸水
pub const TIANGAN_WUXING: [WuXing; 10] = [
	WuXing::Mu,
	WuXing::Mu,
	WuXing::Huo,
	WuXing::Huo,
	WuXing::Tu,
	WuXing::Tu,
	WuXing::Jin,
	WuXing::Jin,
	WuXing::Shui,
	WuXing::Shui,
];

/// 天干阴阳：甲丙戊庚壬为阳
pub const TIANGAN_YINYANG: [YinYang; 10] = [
	YinYang::Yang,
	YinYang::Yin,
	YinYang::Yang,
	YinYang::Yin,
	YinYang::Yang,
	YinYang::Yin,
	YinYang::Yang,
	YinYang::Yin,
	YinYang::Yang,
	YinYang::Yin,
];

/// 地支五行
pub const DIZHI_WUXING: [WuXing; 12] = [
	WuXing::Shui, // 子
	WuXing::Tu,   // 丑
	WuXing::Mu,   // 寅
	WuXing::Mu,   // 卯
	WuXing::Tu,   // 辰
	WuXing::Huo,  // 巳
	WuXing::Huo,  // 午
	WuXing::Tu,   // 未
	WuXing::Jin,  // 申
	WuXing::Jin,  // 酉
	WuXing::Tu,   // 戌
	WuXing::Shui, // 亥
];

// ============================================================================
// 地支藏干
// ============================================================================

/// 地支藏干表，第一项为本气，其后为中气、余气
pub const CANGGAN_TABLE: [&[TianGan]; 12] = [
	&[TianGan::GUI],                              // 子
	&[TianGan::JI, TianGan::GUI, TianGan::XIN],   // 丑
	&[TianGan::JIA, TianGan::BING, TianGan::WU],  // 寅
	&[TianGan::YI],                               // 卯
	&[TianGan::WU, TianGan::YI, TianGan::GUI],    // 辰
	&[TianGan::BING, TianGan::GENG, TianGan::WU], // 巳
	&[TianGan::DING, TianGan::JI],                // 午
	&[TianGan::JI, TianGan::DING, TianGan::YI],   // 未
	&[TianGan::GENG, TianGan::REN, TianGan::WU],  // 申
	&[TianGan::XIN],                              // 酉
	&[TianGan::WU, TianGan::XIN, TianGan::DING],  // 戌
	&[TianGan::REN, TianGan::JIA],                // 亥
];

// ============================================================================
// 月令旺衰
// ============================================================================

/// 日主五行在各月令的得分，行按 `WuXing` 索引，列按地支索引（子..亥）
pub const YUELING_SCORE: [[i32; 12]; 5] = [
	// 木
	[20, 0, 30, 30, 10, -10, -10, 0, -30, -30, 0, 20],
	// 火
	[-30, -10, 20, 20, -10, 30, 30, 10, -20, -20, 10, -30],
	// 土
	[-20, 30, -20, -20, 30, 20, 20, 30, -10, -10, 30, -20],
	// 金
	[-20, 10, -30, -30, 10, -10, -20, 0, 30, 30, 10, -20],
	// 水
	[30, 10, -20, -20, 0, -30, -30, -10, 20, 20, -10, 30],
];

/// 月令得分 >= 此值为得令
pub const YUELING_DELING_MIN: i32 = 20;
/// 月令得分 <= 此值为失令
pub const YUELING_SHILING_MAX: i32 = -10;

// ============================================================================
// 强弱评分
// ============================================================================

/// 本气通根得分
pub const TONGGEN_BENQI_SCORE: i32 = 15;
/// 中气、余气通根得分
pub const TONGGEN_OTHER_SCORE: i32 = 8;
/// 每个帮扶或克泄耗天干的分值
pub const TIANGAN_SCORE: i32 = 10;

pub const JI_QIANG_MIN: i32 = 50;
pub const PIAN_QIANG_MIN: i32 = 20;
pub const ZHONG_HE_MIN: i32 = -10;
pub const PIAN_RUO_MIN: i32 = -40;

// ============================================================================
// 格局
// ============================================================================

/// 专旺格最低分
pub const ZHUANWANG_MIN_SCORE: i32 = 60;
/// 从格最高分
pub const CONGGE_MAX_SCORE: i32 = -40;

// ============================================================================
// 大运
// ============================================================================

/// 大运最多输出步数（不含起运前童限），运行时配置只能进一步收紧
pub const MAX_DAYUN_STEPS: usize = 8;

// ============================================================================
// 调候
// ============================================================================

/// 冬月（亥子丑）喜火
pub const WINTER_ZHI: [DiZhi; 3] = [DiZhi::HAI, DiZhi::ZI, DiZhi::CHOU];
/// 夏月（巳午未）喜水
pub const SUMMER_ZHI: [DiZhi; 3] = [DiZhi::SI, DiZhi::WU, DiZhi::WEI];

// ============================================================================
// 十神
// ============================================================================

/// 十神表，行按 `WuXingRelation` 索引，列 0 为异阴阳、1 为同阴阳
pub const SHISHEN_TABLE: [[ShiShen; 2]; 5] = [
	[ShiShen::JieCai, ShiShen::BiJian],     // 同我
	[ShiShen::ShangGuan, ShiShen::ShiShen], // 我生
	[ShiShen::ZhengCai, ShiShen::PianCai],  // 我克
	[ShiShen::ZhengGuan, ShiShen::QiSha],   // 克我
	[ShiShen::ZhengYin, ShiShen::PianYin],  // 生我
];

// ============================================================================
// 地支六冲六合
// ============================================================================

/// 地支六冲：子午、丑未、寅申、卯酉、辰戌、巳亥
pub const DIZHI_LIUCHONG_PAIRS: [(DiZhi, DiZhi); 6] = [
	(DiZhi::ZI, DiZhi::WU),
	(DiZhi::CHOU, DiZhi::WEI),
	(DiZhi::YIN, DiZhi::SHEN),
	(DiZhi::MAO, DiZhi::YOU),
	(DiZhi::CHEN, DiZhi::XU),
	(DiZhi::SI, DiZhi::HAI),
];

/// 地支六合：子丑、寅亥、卯戌、辰酉、巳申、午未
pub const DIZHI_LIUHE_PAIRS: [(DiZhi, DiZhi); 6] = [
	(DiZhi::ZI, DiZhi::CHOU),
	(DiZhi::YIN, DiZhi::HAI),
	(DiZhi::MAO, DiZhi::XU),
	(DiZhi::CHEN, DiZhi::YOU),
	(DiZhi::SI, DiZhi::SHEN),
	(DiZhi::WU, DiZhi::WEI),
];

// ============================================================================
// 查表
// ============================================================================

fn table_miss(table: ConstantTable) -> ChartError {
	log::error!(target: crate::LOG_TARGET, "❌ 常量表缺项: {}", table.name());
	ChartError::DomainTableIncomplete(table)
}

pub fn tiangan_wuxing(gan: TianGan) -> Result<WuXing, ChartError> {
	TIANGAN_WUXING
		.get(gan.index())
		.copied()
		.ok_or_else(|| table_miss(ConstantTable::TianGanWuXing))
}

pub fn tiangan_yinyang(gan: TianGan) -> Result<YinYang, ChartError> {
	TIANGAN_YINYANG
		.get(gan.index())
		.copied()
		.ok_or_else(|| table_miss(ConstantTable::TianGanYinYang))
}

pub fn dizhi_wuxing(zhi: DiZhi) -> Result<WuXing, ChartError> {
	DIZHI_WUXING
		.get(zhi.index())
		.copied()
		.ok_or_else(|| table_miss(ConstantTable::DiZhiWuXing))
}

/// 地支藏干；空列表同样视为缺项
pub fn canggan(zhi: DiZhi) -> Result<&'static [TianGan], ChartError> {
	CANGGAN_TABLE
		.get(zhi.index())
		.copied()
		.filter(|stems| !stems.is_empty())
		.ok_or_else(|| table_miss(ConstantTable::CangGan))
}

/// 地支本气
pub fn canggan_benqi(zhi: DiZhi) -> Result<TianGan, ChartError> {
	canggan(zhi)?
		.first()
		.copied()
		.ok_or_else(|| table_miss(ConstantTable::CangGan))
}

pub fn yueling_score(wuxing: WuXing, zhi: DiZhi) -> Result<i32, ChartError> {
	YUELING_SCORE
		.get(wuxing.index())
		.and_then(|row| row.get(zhi.index()))
		.copied()
		.ok_or_else(|| table_miss(ConstantTable::YueLing))
}

pub fn is_dizhi_liuchong(a: DiZhi, b: DiZhi) -> bool {
	DIZHI_LIUCHONG_PAIRS
		.iter()
		.any(|&(x, y)| (a == x && b == y) || (a == y && b == x))
}

pub fn is_dizhi_liuhe(a: DiZhi, b: DiZhi) -> bool {
	DIZHI_LIUHE_PAIRS
		.iter()
		.any(|&(x, y)| (a == x && b == y) || (a == y && b == x))
}
