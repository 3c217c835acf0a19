//! # 八字命理类型定义
//!
//! 本模块定义命理推演所需的全部数据结构：
//! - 基础符号：天干、地支、五行、阴阳、干支、十神
//! - 四柱输入：柱、四柱、大运/流年外壳（由历法模块提供）
//! - 推演结果：日主强弱、喜用神、格局、大运流年、整盘分析
//! - 错误类型：`ChartError`
//!
//! ## 索引约定
//!
//! - 天干: 甲(0) 乙(1) 丙(2) 丁(3) 戊(4) 己(5) 庚(6) 辛(7) 壬(8) 癸(9)
//! - 地支: 子(0) 丑(1) 寅(2) 卯(3) 辰(4) 巳(5) 午(6) 未(7) 申(8) 酉(9) 戌(10) 亥(11)
//! - 五行: 按相生顺序 木(0) 火(1) 土(2) 金(3) 水(4)

use crate::constants;
use alloc::string::String;
use codec::{Decode, Encode, MaxEncodedLen};
use frame_support::{
	traits::{ConstU32, Get},
	BoundedVec, CloneNoBound, EqNoBound, PartialEqNoBound, RuntimeDebugNoBound,
};
use scale_info::TypeInfo;
use sp_std::vec::Vec;

// ============================================================================
// 五行
// ============================================================================

/// 五行
///
/// 判别值按相生顺序排列，生克关系可由索引差直接推得。
#[derive(
	Clone, Copy, Encode, Decode, TypeInfo, MaxEncodedLen, PartialEq, Eq, PartialOrd, Ord, Debug, Default,
)]
pub enum WuXing {
	#[default]
	Mu = 0,
	Huo = 1,
	Tu = 2,
	Jin = 3,
	Shui = 4,
}

impl WuXing {
	/// 相生顺序：木 → 火 → 土 → 金 → 水
	pub const ALL: [WuXing; 5] = [WuXing::Mu, WuXing::Huo, WuXing::Tu, WuXing::Jin, WuXing::Shui];

	pub fn index(&self) -> usize {
		*self as usize
	}

	pub fn from_index(index: usize) -> Option<Self> {
		Self::ALL.get(index).copied()
	}

	pub fn name(&self) -> &'static str {
		match self {
			WuXing::Mu => "木",
			WuXing::Huo => "火",
			WuXing::Tu => "土",
			WuXing::Jin => "金",
			WuXing::Shui => "水",
		}
	}

	/// 以 `self` 为我，求 `other` 与我的关系
	pub fn relation_to(&self, other: WuXing) -> WuXingRelation {
		match (other.index() + 5 - self.index()) % 5 {
			0 => WuXingRelation::TongWo,
			1 => WuXingRelation::WoSheng,
			2 => WuXingRelation::WoKe,
			3 => WuXingRelation::KeWo,
			_ => WuXingRelation::ShengWo,
		}
	}

	/// 以 `self` 为我，求处于 `relation` 关系的五行
	pub fn by_relation(&self, relation: WuXingRelation) -> WuXing {
		let offset = match relation {
			WuXingRelation::TongWo => 0,
			WuXingRelation::WoSheng => 1,
			WuXingRelation::WoKe => 2,
			WuXingRelation::KeWo => 3,
			WuXingRelation::ShengWo => 4,
		};
		Self::ALL[(self.index() + offset) % 5]
	}
}

/// 五行生克关系（以日主为"我"）
#[derive(Clone, Copy, Encode, Decode, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug)]
pub enum WuXingRelation {
	/// 同我（比劫）
	TongWo = 0,
	/// 我生（食伤）
	WoSheng = 1,
	/// 我克（财）
	WoKe = 2,
	/// 克我（官杀）
	KeWo = 3,
	/// 生我（印）
	ShengWo = 4,
}

impl WuXingRelation {
	pub fn index(&self) -> usize {
		*self as usize
	}

	pub fn name(&self) -> &'static str {
		match self {
			WuXingRelation::TongWo => "同我",
			WuXingRelation::WoSheng => "我生",
			WuXingRelation::WoKe => "我克",
			WuXingRelation::KeWo => "克我",
			WuXingRelation::ShengWo => "生我",
		}
	}
}

/// 阴阳
#[derive(Clone, Copy, Encode, Decode, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug)]
pub enum YinYang {
	Yang = 0,
	Yin = 1,
}

impl YinYang {
	pub fn name(&self) -> &'static str {
		match self {
			YinYang::Yang => "阳",
			YinYang::Yin => "阴",
		}
	}
}

// ============================================================================
// 天干 / 地支 / 干支
// ============================================================================

/// 天干（0-9）
#[derive(
	Clone, Copy, Encode, Decode, TypeInfo, MaxEncodedLen, PartialEq, Eq, PartialOrd, Ord, Debug, Default,
)]
pub struct TianGan(pub u8);

impl TianGan {
	pub const JIA: Self = Self(0);
	pub const YI: Self = Self(1);
	pub const BING: Self = Self(2);
	pub const DING: Self = Self(3);
	pub const WU: Self = Self(4);
	pub const JI: Self = Self(5);
	pub const GENG: Self = Self(6);
	pub const XIN: Self = Self(7);
	pub const REN: Self = Self(8);
	pub const GUI: Self = Self(9);

	pub fn from_index(index: u8) -> Option<Self> {
		(index < 10).then_some(Self(index))
	}

	pub fn is_valid(&self) -> bool {
		self.0 < 10
	}

	pub fn index(&self) -> usize {
		self.0 as usize
	}

	/// 十天干顺序迭代
	pub fn all() -> impl Iterator<Item = TianGan> {
		(0..10u8).map(TianGan)
	}

	pub fn name(&self) -> &'static str {
		constants::TIANGAN_NAMES.get(self.index()).copied().unwrap_or("?")
	}

	pub fn from_name(name: char) -> Option<Self> {
		constants::TIANGAN_NAMES
			.iter()
			.position(|n| n.starts_with(name))
			.map(|i| Self(i as u8))
	}

	pub fn to_wuxing(&self) -> Result<WuXing, ChartError> {
		constants::tiangan_wuxing(*self)
	}

	pub fn yin_yang(&self) -> Result<YinYang, ChartError> {
		constants::tiangan_yinyang(*self)
	}
}

/// 地支（0-11）
#[derive(
	Clone, Copy, Encode, Decode, TypeInfo, MaxEncodedLen, PartialEq, Eq, PartialOrd, Ord, Debug, Default,
)]
pub struct DiZhi(pub u8);

impl DiZhi {
	pub const ZI: Self = Self(0);
	pub const CHOU: Self = Self(1);
	pub const YIN: Self = Self(2);
	pub const MAO: Self = Self(3);
	pub const CHEN: Self = Self(4);
	pub const SI: Self = Self(5);
	pub const WU: Self = Self(6);
	pub const WEI: Self = Self(7);
	pub const SHEN: Self = Self(8);
	pub const YOU: Self = Self(9);
	pub const XU: Self = Self(10);
	pub const HAI: Self = Self(11);

	pub fn from_index(index: u8) -> Option<Self> {
		(index < 12).then_some(Self(index))
	}

	pub fn is_valid(&self) -> bool {
		self.0 < 12
	}

	pub fn index(&self) -> usize {
		self.0 as usize
	}

	pub fn all() -> impl Iterator<Item = DiZhi> {
		(0..12u8).map(DiZhi)
	}

	pub fn name(&self) -> &'static str {
		constants::DIZHI_NAMES.get(self.index()).copied().unwrap_or("?")
	}

	pub fn from_name(name: char) -> Option<Self> {
		constants::DIZHI_NAMES
			.iter()
			.position(|n| n.starts_with(name))
			.map(|i| Self(i as u8))
	}

	pub fn to_wuxing(&self) -> Result<WuXing, ChartError> {
		constants::dizhi_wuxing(*self)
	}

	/// 地支藏干（本气在前）
	pub fn canggan(&self) -> Result<&'static [TianGan], ChartError> {
		constants::canggan(*self)
	}
}

/// 干支组合
#[derive(Clone, Copy, Encode, Decode, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default)]
pub struct GanZhi {
	pub gan: TianGan,
	pub zhi: DiZhi,
}

impl GanZhi {
	pub fn new(gan: TianGan, zhi: DiZhi) -> Self {
		Self { gan, zhi }
	}

	/// 从六十甲子索引（0-59）构建，0 = 甲子
	pub fn from_index(index: u8) -> Option<Self> {
		if index >= 60 {
			return None;
		}
		Some(Self { gan: TianGan(index % 10), zhi: DiZhi(index % 12) })
	}

	/// 六十甲子索引；非法组合（阴阳不配）返回 None
	pub fn index(&self) -> Option<u8> {
		if !self.is_valid() {
			return None;
		}
		let raw = (6 * self.gan.0 as i32 - 5 * self.zhi.0 as i32).rem_euclid(60);
		Some(raw as u8)
	}

	/// 天干地支均在范围内，且阴阳相配（同为阳或同为阴）
	pub fn is_valid(&self) -> bool {
		self.gan.is_valid() && self.zhi.is_valid() && self.gan.0 % 2 == self.zhi.0 % 2
	}

	/// 六十甲子中的下一个干支
	pub fn next(&self) -> Option<Self> {
		self.index().and_then(|i| Self::from_index((i + 1) % 60))
	}

	/// 从"甲子"形式的两字文本解析
	pub fn from_name(name: &str) -> Option<Self> {
		let mut chars = name.chars();
		let gan = TianGan::from_name(chars.next()?)?;
		let zhi = DiZhi::from_name(chars.next()?)?;
		if chars.next().is_some() {
			return None;
		}
		Some(Self { gan, zhi })
	}

	pub fn name(&self) -> String {
		let mut s = String::from(self.gan.name());
		s.push_str(self.zhi.name());
		s
	}
}

// ============================================================================
// 十神
// ============================================================================

/// 十神
#[derive(Clone, Copy, Encode, Decode, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug)]
pub enum ShiShen {
	/// 比肩：同五行同阴阳
	BiJian = 0,
	/// 劫财：同五行异阴阳
	JieCai = 1,
	/// 食神：我生同阴阳
	ShiShen = 2,
	/// 伤官：我生异阴阳
	ShangGuan = 3,
	/// 偏财：我克同阴阳
	PianCai = 4,
	/// 正财：我克异阴阳
	ZhengCai = 5,
	/// 七杀：克我同阴阳
	QiSha = 6,
	/// 正官：克我异阴阳
	ZhengGuan = 7,
	/// 偏印：生我同阴阳
	PianYin = 8,
	/// 正印：生我异阴阳
	ZhengYin = 9,
}

impl ShiShen {
	pub const ALL: [ShiShen; 10] = [
		ShiShen::BiJian,
		ShiShen::JieCai,
		ShiShen::ShiShen,
		ShiShen::ShangGuan,
		ShiShen::PianCai,
		ShiShen::ZhengCai,
		ShiShen::QiSha,
		ShiShen::ZhengGuan,
		ShiShen::PianYin,
		ShiShen::ZhengYin,
	];

	pub fn name(&self) -> &'static str {
		match self {
			ShiShen::BiJian => "比肩",
			ShiShen::JieCai => "劫财",
			ShiShen::ShiShen => "食神",
			ShiShen::ShangGuan => "伤官",
			ShiShen::PianCai => "偏财",
			ShiShen::ZhengCai => "正财",
			ShiShen::QiSha => "七杀",
			ShiShen::ZhengGuan => "正官",
			ShiShen::PianYin => "偏印",
			ShiShen::ZhengYin => "正印",
		}
	}

	/// 比劫类（比肩、劫财）不取正格
	pub fn is_bijie(&self) -> bool {
		matches!(self, ShiShen::BiJian | ShiShen::JieCai)
	}
}

/// 柱的十神身份
///
/// 日柱天干是日主本身，不参与十神关系。
#[derive(Clone, Copy, Encode, Decode, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug)]
pub enum ZhuShiShen {
	RiZhu,
	ShiShen(ShiShen),
}

impl ZhuShiShen {
	pub fn name(&self) -> &'static str {
		match self {
			ZhuShiShen::RiZhu => "日主",
			ZhuShiShen::ShiShen(s) => s.name(),
		}
	}
}

// ============================================================================
// 四柱
// ============================================================================

/// 四柱位置
#[derive(Clone, Copy, Encode, Decode, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug)]
pub enum SiZhuPosition {
	Year = 0,
	Month = 1,
	Day = 2,
	Hour = 3,
}

impl SiZhuPosition {
	pub const ALL: [SiZhuPosition; 4] =
		[SiZhuPosition::Year, SiZhuPosition::Month, SiZhuPosition::Day, SiZhuPosition::Hour];

	pub fn name(&self) -> &'static str {
		match self {
			SiZhuPosition::Year => "年柱",
			SiZhuPosition::Month => "月柱",
			SiZhuPosition::Day => "日柱",
			SiZhuPosition::Hour => "时柱",
		}
	}
}

/// 纳音等装饰标签，原样透传
pub type NaYinLabel = BoundedVec<u8, ConstU32<32>>;

/// 单柱
#[derive(Clone, Encode, Decode, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default)]
pub struct Zhu {
	pub ganzhi: GanZhi,
	/// 纳音（历法模块提供，本模块不解读）
	pub nayin: NaYinLabel,
}

impl Zhu {
	pub fn new(ganzhi: GanZhi) -> Self {
		Self { ganzhi, nayin: Default::default() }
	}

	pub fn with_nayin(ganzhi: GanZhi, nayin: NaYinLabel) -> Self {
		Self { ganzhi, nayin }
	}
}

/// 四柱
#[derive(Clone, Encode, Decode, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default)]
pub struct SiZhu {
	pub year_zhu: Zhu,
	pub month_zhu: Zhu,
	pub day_zhu: Zhu,
	pub hour_zhu: Zhu,
}

impl SiZhu {
	pub fn new(year_zhu: Zhu, month_zhu: Zhu, day_zhu: Zhu, hour_zhu: Zhu) -> Self {
		Self { year_zhu, month_zhu, day_zhu, hour_zhu }
	}

	/// 仅由四个干支构建（无纳音标签）
	pub fn from_ganzhi(year: GanZhi, month: GanZhi, day: GanZhi, hour: GanZhi) -> Self {
		Self::new(Zhu::new(year), Zhu::new(month), Zhu::new(day), Zhu::new(hour))
	}

	pub fn get(&self, position: SiZhuPosition) -> &Zhu {
		match position {
			SiZhuPosition::Year => &self.year_zhu,
			SiZhuPosition::Month => &self.month_zhu,
			SiZhuPosition::Day => &self.day_zhu,
			SiZhuPosition::Hour => &self.hour_zhu,
		}
	}

	/// 按 年、月、日、时 顺序迭代
	pub fn iter(&self) -> impl Iterator<Item = (SiZhuPosition, &Zhu)> {
		SiZhuPosition::ALL.into_iter().map(move |p| (p, self.get(p)))
	}

	/// 日主
	pub fn day_gan(&self) -> TianGan {
		self.day_zhu.ganzhi.gan
	}

	/// 月令
	pub fn month_zhi(&self) -> DiZhi {
		self.month_zhu.ganzhi.zhi
	}

	/// 四柱天干中是否出现指定天干（透干判断）
	pub fn has_visible_gan(&self, gan: TianGan) -> bool {
		self.iter().any(|(_, zhu)| zhu.ganzhi.gan == gan)
	}
}

// ============================================================================
// 大运 / 流年（输入外壳）
// ============================================================================

/// 流年外壳（历法模块提供）
#[derive(Clone, Copy, Encode, Decode, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug)]
pub struct LiuNianInput {
	pub year: u16,
	pub age: u8,
	pub ganzhi: GanZhi,
}

/// 大运外壳（历法模块提供，已按性别顺逆与节气起运）
#[derive(Clone, Encode, Decode, TypeInfo, PartialEq, Eq, Debug)]
pub struct DaYunInput {
	/// 0 为起运前童限
	pub index: u8,
	pub start_age: u8,
	pub end_age: u8,
	pub start_year: u16,
	pub end_year: u16,
	pub ganzhi: GanZhi,
	pub liunian: Vec<LiuNianInput>,
}

// ============================================================================
// 大运 / 流年（推演结果）
// ============================================================================

/// 流年与原局的刑冲合关系
#[derive(Clone, Copy, Encode, Decode, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug)]
pub enum LiuNianEvent {
	/// 日柱伏吟：流年干支与日柱相同
	RiZhuFuYin,
	/// 日支相冲
	RiZhiChong,
	/// 日支相合
	RiZhiHe,
	/// 本命年：流年干支与年柱相同
	BenMingNian,
	/// 冲太岁
	ChongTaiSui,
	/// 合太岁
	HeTaiSui,
}

impl LiuNianEvent {
	pub fn name(&self) -> &'static str {
		match self {
			LiuNianEvent::RiZhuFuYin => "日柱伏吟",
			LiuNianEvent::RiZhiChong => "日支相冲",
			LiuNianEvent::RiZhiHe => "日支相合",
			LiuNianEvent::BenMingNian => "本命年",
			LiuNianEvent::ChongTaiSui => "冲太岁",
			LiuNianEvent::HeTaiSui => "合太岁",
		}
	}
}

/// 流年
#[derive(Clone, Encode, Decode, TypeInfo, PartialEq, Eq, Debug)]
pub struct LiuNian {
	pub year: u16,
	pub age: u8,
	pub ganzhi: GanZhi,
	/// 流年天干相对日主的十神
	pub shishen: ShiShen,
	pub events: Vec<LiuNianEvent>,
}

/// 大运
#[derive(Clone, Encode, Decode, TypeInfo, PartialEq, Eq, Debug)]
pub struct DaYun {
	pub index: u8,
	pub start_age: u8,
	pub end_age: u8,
	pub start_year: u16,
	pub end_year: u16,
	pub ganzhi: GanZhi,
	pub liunian: Vec<LiuNian>,
}

// ============================================================================
// 日主强弱
// ============================================================================

/// 月令状态
#[derive(Clone, Copy, Encode, Decode, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug)]
pub enum YueLingState {
	/// 得令
	DeLing,
	/// 失令
	ShiLing,
	/// 平常
	PingChang,
}

impl YueLingState {
	pub fn from_score(score: i32) -> Self {
		if score >= constants::YUELING_DELING_MIN {
			YueLingState::DeLing
		} else if score <= constants::YUELING_SHILING_MAX {
			YueLingState::ShiLing
		} else {
			YueLingState::PingChang
		}
	}

	pub fn name(&self) -> &'static str {
		match self {
			YueLingState::DeLing => "得令",
			YueLingState::ShiLing => "失令",
			YueLingState::PingChang => "平常",
		}
	}
}

/// 单个通根
#[derive(Clone, Copy, Encode, Decode, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug)]
pub struct TongGen {
	pub position: SiZhuPosition,
	pub zhi: DiZhi,
	/// 与日主同五行的藏干
	pub gan: TianGan,
	/// 是否为本气根
	pub is_benqi: bool,
	pub score: i32,
}

/// 强弱评分明细（有序）
#[derive(Clone, Encode, Decode, TypeInfo, PartialEq, Eq, Debug)]
pub enum StrengthDetail {
	/// 月令得分
	YueLing { zhi: DiZhi, state: YueLingState, score: i32 },
	/// 通根（无根时不出现）
	TongGen(Vec<TongGen>),
	/// 天干帮扶（印、比劫）
	BangFu { count: u8, score: i32 },
	/// 天干克泄耗（官杀、食伤、财）
	HaoXie { count: u8, score: i32 },
}

/// 日主强弱等级（由强到弱）
#[derive(Clone, Copy, Encode, Decode, TypeInfo, MaxEncodedLen, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum StrengthLevel {
	JiQiang = 0,
	PianQiang = 1,
	ZhongHe = 2,
	PianRuo = 3,
	JiRuo = 4,
}

impl StrengthLevel {
	/// 分档：每档含下界，五档覆盖全部整数且互不重叠
	pub fn from_score(score: i32) -> Self {
		if score >= constants::JI_QIANG_MIN {
			StrengthLevel::JiQiang
		} else if score >= constants::PIAN_QIANG_MIN {
			StrengthLevel::PianQiang
		} else if score >= constants::ZHONG_HE_MIN {
			StrengthLevel::ZhongHe
		} else if score >= constants::PIAN_RUO_MIN {
			StrengthLevel::PianRuo
		} else {
			StrengthLevel::JiRuo
		}
	}

	pub fn name(&self) -> &'static str {
		match self {
			StrengthLevel::JiQiang => "极强",
			StrengthLevel::PianQiang => "偏强",
			StrengthLevel::ZhongHe => "中和",
			StrengthLevel::PianRuo => "偏弱",
			StrengthLevel::JiRuo => "极弱",
		}
	}

	pub fn description(&self) -> &'static str {
		match self {
			StrengthLevel::JiQiang => "日主极旺，多为专旺或从强",
			StrengthLevel::PianQiang => "日主偏旺，喜克泄耗",
			StrengthLevel::ZhongHe => "日主中和，五行流通",
			StrengthLevel::PianRuo => "日主偏弱，喜生扶",
			StrengthLevel::JiRuo => "日主极弱，多为从弱或从势",
		}
	}
}

/// 日主强弱结果
#[derive(Clone, Encode, Decode, TypeInfo, PartialEq, Eq, Debug)]
pub struct StrengthResult {
	pub score: i32,
	pub level: StrengthLevel,
	pub details: Vec<StrengthDetail>,
	pub day_element: WuXing,
}

// ============================================================================
// 喜用神
// ============================================================================

/// 喜用忌神
///
/// `xi_shen` 含用神本身；`xi_shen` 与 `ji_shen` 恒不相交。
#[derive(Clone, Encode, Decode, TypeInfo, PartialEq, Eq, Debug)]
pub struct XiYongShen {
	/// 用神（最主要的喜用五行）
	pub yong_shen: WuXing,
	/// 喜神（按取用顺序）
	pub xi_shen: Vec<WuXing>,
	/// 忌神
	pub ji_shen: Vec<WuXing>,
	/// 调候用神（冬火夏水，且不是用神本身时记录）
	pub tiao_hou: Option<WuXing>,
}

// ============================================================================
// 格局
// ============================================================================

/// 格局类别
#[derive(Clone, Copy, Encode, Decode, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug)]
pub enum GeJuCategory {
	/// 外格（特殊格局）
	WaiGe,
	/// 正格
	ZhengGe,
}

impl GeJuCategory {
	pub fn name(&self) -> &'static str {
		match self {
			GeJuCategory::WaiGe => "外格",
			GeJuCategory::ZhengGe => "正格",
		}
	}
}

/// 从格种类
#[derive(Clone, Copy, Encode, Decode, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug)]
pub enum CongGeKind {
	/// 从杀格：势从官杀
	CongSha,
	/// 从财格：势从财星
	CongCai,
	/// 从儿格：势从食伤
	CongEr,
	/// 从弱格
	CongRuo,
}

impl CongGeKind {
	pub fn name(&self) -> &'static str {
		match self {
			CongGeKind::CongSha => "从杀格",
			CongGeKind::CongCai => "从财格",
			CongGeKind::CongEr => "从儿格",
			CongGeKind::CongRuo => "从弱格",
		}
	}
}

/// 格局
#[derive(Clone, Copy, Encode, Decode, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug)]
pub enum GeJu {
	/// 专旺格（附日主五行）
	ZhuanWang(WuXing),
	/// 从格（附最旺五行）
	Cong { kind: CongGeKind, dominant: WuXing },
	/// 建禄格：月令本气为比肩
	JianLu,
	/// 羊刃格：月令本气为劫财
	YangRen,
	/// 十神格：月令藏干取格，如正官格、七杀格
	ShiShenGe(ShiShen),
}

impl GeJu {
	pub fn name(&self) -> &'static str {
		match self {
			GeJu::ZhuanWang(wuxing) => match wuxing {
				WuXing::Mu => "木专旺格",
				WuXing::Huo => "火专旺格",
				WuXing::Tu => "土专旺格",
				WuXing::Jin => "金专旺格",
				WuXing::Shui => "水专旺格",
			},
			GeJu::Cong { kind, .. } => kind.name(),
			GeJu::JianLu => "建禄格",
			GeJu::YangRen => "羊刃格",
			GeJu::ShiShenGe(shishen) => match shishen {
				ShiShen::BiJian => "比肩格",
				ShiShen::JieCai => "劫财格",
				ShiShen::ShiShen => "食神格",
				ShiShen::ShangGuan => "伤官格",
				ShiShen::PianCai => "偏财格",
				ShiShen::ZhengCai => "正财格",
				ShiShen::QiSha => "七杀格",
				ShiShen::ZhengGuan => "正官格",
				ShiShen::PianYin => "偏印格",
				ShiShen::ZhengYin => "正印格",
			},
		}
	}
}

/// 格局候选
#[derive(Clone, Copy, Encode, Decode, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug)]
pub struct GeJuCandidate {
	pub geju: GeJu,
	pub category: GeJuCategory,
	/// 是否透干（外格恒为 true）
	pub revealed: bool,
	pub month_zhi: DiZhi,
	/// 取格的月令藏干（外格为 None）
	pub source_gan: Option<TianGan>,
	/// 取格藏干的十神（外格为 None）
	pub source_shishen: Option<ShiShen>,
	/// 取格藏干在月令藏干表中的位置
	pub canggan_order: u8,
}

impl GeJuCandidate {
	pub fn name(&self) -> &'static str {
		self.geju.name()
	}

	/// 格局说明
	pub fn description(&self) -> String {
		match (self.geju, self.source_gan, self.source_shishen) {
			(GeJu::ZhuanWang(wuxing), _, _) => {
				alloc::format!("日主极旺，气势专一于{}，顺势而为", wuxing.name())
			},
			(GeJu::Cong { kind, dominant }, _, _) => {
				alloc::format!("日主极弱，势从{}，为{}", dominant.name(), kind.name())
			},
			(GeJu::JianLu | GeJu::YangRen, _, Some(shishen)) => {
				alloc::format!("月令{}为日主之{}", self.month_zhi.name(), shishen.name())
			},
			(_, Some(gan), Some(shishen)) => alloc::format!(
				"月支藏{}({}){}",
				gan.name(),
				shishen.name(),
				if self.revealed { "透干" } else { "未透" }
			),
			_ => String::from(self.geju.name()),
		}
	}
}

/// 格局判断结果
#[derive(Clone, Encode, Decode, TypeInfo, PartialEq, Eq, Debug)]
pub struct GeJuResult {
	/// 主格局（候选列表第一项）
	pub main_geju: Option<GeJuCandidate>,
	/// 全部候选：外格在前；正格透干在前，同类保持藏干表顺序
	pub all_geju: Vec<GeJuCandidate>,
	pub strength_level: StrengthLevel,
}

// ============================================================================
// 整盘分析
// ============================================================================

/// 藏干层次
#[derive(Clone, Copy, Encode, Decode, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug)]
pub enum CangGanType {
	/// 本气
	BenQi,
	/// 中气
	ZhongQi,
	/// 余气
	YuQi,
}

impl CangGanType {
	pub fn from_order(order: usize) -> Self {
		match order {
			0 => CangGanType::BenQi,
			1 => CangGanType::ZhongQi,
			_ => CangGanType::YuQi,
		}
	}

	pub fn name(&self) -> &'static str {
		match self {
			CangGanType::BenQi => "本气",
			CangGanType::ZhongQi => "中气",
			CangGanType::YuQi => "余气",
		}
	}
}

/// 藏干信息
#[derive(Clone, Copy, Encode, Decode, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug)]
pub struct CangGanInfo {
	pub gan: TianGan,
	pub canggan_type: CangGanType,
	pub shishen: ShiShen,
}

/// 单柱详情
///
/// 藏干列表以 `S` 为上限（运行时配置 `MaxCangGan`）。
#[derive(Encode, Decode, CloneNoBound, PartialEqNoBound, EqNoBound, RuntimeDebugNoBound, TypeInfo)]
#[scale_info(skip_type_params(S))]
pub struct ZhuDetail<S: Get<u32>> {
	pub position: SiZhuPosition,
	pub ganzhi: GanZhi,
	pub gan_wuxing: WuXing,
	pub zhi_wuxing: WuXing,
	pub gan_yinyang: YinYang,
	pub shishen: ZhuShiShen,
	pub canggan: BoundedVec<CangGanInfo, S>,
	pub nayin: NaYinLabel,
}

/// 日主信息
#[derive(Clone, Copy, Encode, Decode, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug)]
pub struct RiZhuInfo {
	pub gan: TianGan,
	pub wuxing: WuXing,
	pub yinyang: YinYang,
}

/// 五行个数统计（按 `WuXing` 索引）
#[derive(Clone, Copy, Encode, Decode, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug, Default)]
pub struct WuXingCount(pub [u8; 5]);

impl WuXingCount {
	pub fn get(&self, wuxing: WuXing) -> u8 {
		self.0[wuxing.index()]
	}

	pub fn add(&mut self, wuxing: WuXing) {
		self.0[wuxing.index()] = self.0[wuxing.index()].saturating_add(1);
	}

	pub fn remove(&mut self, wuxing: WuXing) {
		self.0[wuxing.index()] = self.0[wuxing.index()].saturating_sub(1);
	}

	/// 个数最多的五行；并列时取相生顺序靠前者
	pub fn dominant(&self) -> WuXing {
		let mut best = WuXing::Mu;
		for wuxing in WuXing::ALL {
			if self.get(wuxing) > self.get(best) {
				best = wuxing;
			}
		}
		best
	}

	pub fn total(&self) -> u32 {
		self.0.iter().map(|c| *c as u32).sum()
	}
}

/// 整盘分析结果
#[derive(Encode, Decode, CloneNoBound, PartialEqNoBound, EqNoBound, RuntimeDebugNoBound, TypeInfo)]
#[scale_info(skip_type_params(S))]
pub struct BaziAnalysis<S: Get<u32>> {
	pub zhu_details: Vec<ZhuDetail<S>>,
	pub rizhu: RiZhuInfo,
	pub wuxing_count: WuXingCount,
	pub strength: StrengthResult,
	pub xiyong_shen: XiYongShen,
	pub geju: GeJuResult,
	pub dayun: Vec<DaYun>,
}

// ============================================================================
// 错误类型
// ============================================================================

/// 常量表名称（用于报告查表失败）
#[derive(Clone, Copy, Encode, Decode, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug)]
pub enum ConstantTable {
	TianGanWuXing,
	TianGanYinYang,
	DiZhiWuXing,
	CangGan,
	YueLing,
}

impl ConstantTable {
	pub fn name(&self) -> &'static str {
		match self {
			ConstantTable::TianGanWuXing => "天干五行表",
			ConstantTable::TianGanYinYang => "天干阴阳表",
			ConstantTable::DiZhiWuXing => "地支五行表",
			ConstantTable::CangGan => "地支藏干表",
			ConstantTable::YueLing => "月令旺衰表",
		}
	}
}

/// 外部输入错误原因
#[derive(Clone, Copy, Encode, Decode, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug)]
pub enum InvalidInput {
	/// 天干索引超出 0-9
	TianGan(u8),
	/// 地支索引超出 0-11
	DiZhi(u8),
	/// 干支阴阳不配，不是六十甲子
	GanZhiMismatch { gan: u8, zhi: u8 },
	/// 传入的日主与日柱天干不一致
	DayGanMismatch,
	/// 传入的月令与月柱地支不一致
	MonthZhiMismatch,
	/// 强弱结果的日主五行与日主不一致
	StrengthMismatch,
	/// 大运列表为空
	EmptyDaYunList,
	/// 大运序号不连续或不从 0 开始
	DaYunIndexGap { expected: u8, found: u8 },
	/// 只有起运前童限，没有正式大运
	NoActiveDaYun,
	/// 大运流年个数不是 10
	LiuNianCount { index: u8, count: u32 },
	/// 流年年份未严格递增
	LiuNianNotAscending { index: u8 },
}

/// 命理推演错误
#[derive(Clone, Copy, Encode, Decode, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug)]
pub enum ChartError {
	/// 外部输入不合法，推演前拒绝
	InvalidChartInput(InvalidInput),
	/// 常量表缺项（程序不变量被破坏）
	DomainTableIncomplete(ConstantTable),
	/// 地支藏干数量超过配置上限
	TooManyCangGan(DiZhi),
}

impl ChartError {
	pub fn invalid(reason: InvalidInput) -> Self {
		ChartError::InvalidChartInput(reason)
	}
}

impl core::fmt::Display for ChartError {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			ChartError::DomainTableIncomplete(table) => write!(f, "常量表缺项: {}", table.name()),
			ChartError::TooManyCangGan(zhi) => write!(f, "地支{}藏干数量超过上限", zhi.name()),
			ChartError::InvalidChartInput(reason) => match reason {
				InvalidInput::TianGan(v) => write!(f, "天干索引无效: {}", v),
				InvalidInput::DiZhi(v) => write!(f, "地支索引无效: {}", v),
				InvalidInput::GanZhiMismatch { gan, zhi } => {
					write!(f, "干支阴阳不配: 天干 {} 地支 {}", gan, zhi)
				},
				InvalidInput::DayGanMismatch => write!(f, "日主与日柱天干不一致"),
				InvalidInput::MonthZhiMismatch => write!(f, "月令与月柱地支不一致"),
				InvalidInput::StrengthMismatch => write!(f, "强弱结果与日主五行不一致"),
				InvalidInput::EmptyDaYunList => write!(f, "大运列表为空"),
				InvalidInput::DaYunIndexGap { expected, found } => {
					write!(f, "大运序号不连续: 应为 {} 实为 {}", expected, found)
				},
				InvalidInput::NoActiveDaYun => write!(f, "缺少起运后的大运"),
				InvalidInput::LiuNianCount { index, count } => {
					write!(f, "第 {} 步大运流年个数为 {}，应为 10", index, count)
				},
				InvalidInput::LiuNianNotAscending { index } => {
					write!(f, "第 {} 步大运流年年份未递增", index)
				},
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_wuxing_relation_cycle() {
		assert_eq!(WuXing::Mu.relation_to(WuXing::Huo), WuXingRelation::WoSheng);
		assert_eq!(WuXing::Mu.relation_to(WuXing::Tu), WuXingRelation::WoKe);
		assert_eq!(WuXing::Mu.relation_to(WuXing::Jin), WuXingRelation::KeWo);
		assert_eq!(WuXing::Mu.relation_to(WuXing::Shui), WuXingRelation::ShengWo);
		assert_eq!(WuXing::Shui.relation_to(WuXing::Huo), WuXingRelation::WoKe);

		for me in WuXing::ALL {
			for other in WuXing::ALL {
				assert_eq!(me.by_relation(me.relation_to(other)), other);
			}
		}
	}

	#[test]
	fn test_ganzhi_index_roundtrip() {
		for i in 0..60u8 {
			let gz = GanZhi::from_index(i).unwrap();
			assert!(gz.is_valid());
			assert_eq!(gz.index(), Some(i));
		}
		assert_eq!(GanZhi::from_index(60), None);
		// 甲丑 阴阳不配
		assert_eq!(GanZhi::new(TianGan::JIA, DiZhi::CHOU).index(), None);
		// 癸亥之后回到甲子
		assert_eq!(GanZhi::from_index(59).unwrap().next(), GanZhi::from_index(0));
	}

	#[test]
	fn test_ganzhi_from_name() {
		let gz = GanZhi::from_name("丙寅").unwrap();
		assert_eq!(gz.gan, TianGan::BING);
		assert_eq!(gz.zhi, DiZhi::YIN);
		assert_eq!(gz.name(), "丙寅");
		assert_eq!(GanZhi::from_name("丙"), None);
		assert_eq!(GanZhi::from_name("丙寅甲"), None);
		assert_eq!(GanZhi::from_name("寅丙"), None);
	}

	#[test]
	fn test_wuxing_count_dominant_tie_break() {
		let mut count = WuXingCount::default();
		count.add(WuXing::Shui);
		count.add(WuXing::Huo);
		// 火、水并列，取相生顺序靠前的火
		assert_eq!(count.dominant(), WuXing::Huo);
		count.add(WuXing::Shui);
		assert_eq!(count.dominant(), WuXing::Shui);
		count.remove(WuXing::Mu);
		assert_eq!(count.get(WuXing::Mu), 0);
		assert_eq!(count.total(), 3);
	}

	#[test]
	fn test_error_display() {
		let err = ChartError::invalid(InvalidInput::LiuNianCount { index: 2, count: 9 });
		assert_eq!(alloc::format!("{}", err), "第 2 步大运流年个数为 9，应为 10");
		let err = ChartError::DomainTableIncomplete(ConstantTable::CangGan);
		assert_eq!(alloc::format!("{}", err), "常量表缺项: 地支藏干表");
	}
}
