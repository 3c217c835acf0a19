//! # 八字命理推演 Pallet (Pallet Bazi Chart)
//!
//! ## 概述
//!
//! 本 Pallet 在已排好的四柱之上做命理推演，包括：
//! - 十神关系计算
//! - 日主强弱评分（月令、通根、天干帮扶）
//! - 喜用神与调候
//! - 格局判断（专旺、从格、正格）
//! - 大运流年标注（伏吟、冲合、太岁）
//!
//! 排盘（公历农历换算、节气、起运）由历法模块完成，本 Pallet 只消费其产出的
//! 四柱与大运外壳。
//!
//! ## 技术特性
//!
//! - ✅ **无状态**: 不读写链上存储，所有接口为纯计算
//! - ✅ **辰藏干**: 使用"戊乙癸"
//! - ✅ **查表不兜底**: 常量表缺项直接报错，不以默认值代替
//!
//! ## 使用示例
//!
//! ```ignore
//! let strength = BaziChart::compute_strength(day_gan, month_zhi, &sizhu)?;
//! let xiyong = BaziChart::compute_xiyong_shen(day_gan, &strength, month_zhi)?;
//! let geju = BaziChart::classify_geju(day_gan, month_zhi, &sizhu, &strength)?;
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

#[cfg(test)]
mod mock;

#[cfg(test)]
mod tests;

pub mod calculations;
pub mod constants;
pub mod types;
pub mod validation;

// 重新导出纯函数层
pub use calculations::{
	analyze_chart, annotate_dayun, calculate_shishen, calculate_strength, calculate_xiyong_shen,
	count_wuxing, determine_geju,
};

/// 日志 target
pub const LOG_TARGET: &str = "bazi";

#[frame_support::pallet]
pub mod pallet {
	use frame_support::pallet_prelude::*;
	use sp_std::vec::Vec;

	use crate::{calculations, validation};
	pub use crate::types::*;

	/// Pallet 配置 Trait
	#[pallet::config]
	pub trait Config: frame_system::Config {
		/// 大运最多输出步数（不含起运前童限）
		#[pallet::constant]
		type MaxDaYunSteps: Get<u32> + Clone + core::fmt::Debug;

		/// 每个地支最多藏干数量（最多3个）
		#[pallet::constant]
		type MaxCangGan: Get<u32> + Clone + core::fmt::Debug;
	}

	#[pallet::pallet]
	pub struct Pallet<T>(_);

	/// Pallet 错误
	#[pallet::error]
	pub enum Error<T> {
		/// 无效的天干
		InvalidTianGan,
		/// 无效的地支
		InvalidDiZhi,
		/// 干支阴阳不配
		InvalidGanZhi,
		/// 日主、月令或强弱结果与四柱不一致
		InconsistentChart,
		/// 大运序列无效（为空、序号不连续或缺少正式大运）
		InvalidDaYunSequence,
		/// 流年序列无效（个数不为 10 或年份未递增）
		InvalidLiuNianSequence,
		/// 藏干数量超过上限
		TooManyCangGan,
		/// 常量表缺项
		DomainTableIncomplete,
	}

	impl<T: Config> From<ChartError> for Error<T> {
		fn from(err: ChartError) -> Self {
			match err {
				ChartError::DomainTableIncomplete(_) => Error::DomainTableIncomplete,
				ChartError::TooManyCangGan(_) => Error::TooManyCangGan,
				ChartError::InvalidChartInput(reason) => match reason {
					InvalidInput::TianGan(_) => Error::InvalidTianGan,
					InvalidInput::DiZhi(_) => Error::InvalidDiZhi,
					InvalidInput::GanZhiMismatch { .. } => Error::InvalidGanZhi,
					InvalidInput::DayGanMismatch |
					InvalidInput::MonthZhiMismatch |
					InvalidInput::StrengthMismatch => Error::InconsistentChart,
					InvalidInput::EmptyDaYunList |
					InvalidInput::DaYunIndexGap { .. } |
					InvalidInput::NoActiveDaYun => Error::InvalidDaYunSequence,
					InvalidInput::LiuNianCount { .. } | InvalidInput::LiuNianNotAscending { .. } =>
						Error::InvalidLiuNianSequence,
				},
			}
		}
	}

	impl<T: Config> Pallet<T> {
		/// 十神：`other_gan` 相对日主 `day_gan`
		pub fn resolve_shishen(day_gan: TianGan, other_gan: TianGan) -> Result<ShiShen, Error<T>> {
			calculations::calculate_shishen(day_gan, other_gan).map_err(Self::reject)
		}

		/// 日主强弱
		pub fn compute_strength(
			day_gan: TianGan,
			month_zhi: DiZhi,
			sizhu: &SiZhu,
		) -> Result<StrengthResult, Error<T>> {
			validation::validate_chart(sizhu, day_gan, month_zhi).map_err(Self::reject)?;
			let result =
				calculations::calculate_strength(day_gan, month_zhi, sizhu).map_err(Self::reject)?;
			log::debug!(
				target: crate::LOG_TARGET,
				"强弱: 日主{} 月令{} 评分 {} ({})",
				day_gan.name(),
				month_zhi.name(),
				result.score,
				result.level.name()
			);
			Ok(result)
		}

		/// 喜用神
		pub fn compute_xiyong_shen(
			day_gan: TianGan,
			strength: &StrengthResult,
			month_zhi: DiZhi,
		) -> Result<XiYongShen, Error<T>> {
			let result = calculations::calculate_xiyong_shen(day_gan, strength, month_zhi)
				.map_err(Self::reject)?;
			log::debug!(
				target: crate::LOG_TARGET,
				"喜用神: 用{} 喜{} 忌{}",
				result.yong_shen.name(),
				result.xi_shen.len(),
				result.ji_shen.len()
			);
			Ok(result)
		}

		/// 格局
		pub fn classify_geju(
			day_gan: TianGan,
			month_zhi: DiZhi,
			sizhu: &SiZhu,
			strength: &StrengthResult,
		) -> Result<GeJuResult, Error<T>> {
			validation::validate_chart(sizhu, day_gan, month_zhi).map_err(Self::reject)?;
			let result = calculations::determine_geju(day_gan, month_zhi, sizhu, strength)
				.map_err(Self::reject)?;
			if let Some(main) = result.main_geju.as_ref() {
				log::debug!(
					target: crate::LOG_TARGET,
					"格局: {} ({} 个候选)",
					main.name(),
					result.all_geju.len()
				);
			}
			Ok(result)
		}

		/// 大运流年，输出步数受 `MaxDaYunSteps` 限制（至多 8 步）
		pub fn annotate_dayun(
			day_gan: TianGan,
			sizhu: &SiZhu,
			dayun_list: &[DaYunInput],
		) -> Result<Vec<DaYun>, Error<T>> {
			validation::validate_sizhu(sizhu).map_err(Self::reject)?;
			validation::validate_day_gan(sizhu, day_gan).map_err(Self::reject)?;
			validation::validate_dayun_list(dayun_list).map_err(Self::reject)?;
			calculations::annotate_dayun(day_gan, sizhu, dayun_list, Self::max_dayun_steps())
				.map_err(Self::reject)
		}

		/// 整盘分析
		pub fn analyze_chart(
			sizhu: &SiZhu,
			dayun_list: &[DaYunInput],
		) -> Result<BaziAnalysis<T::MaxCangGan>, Error<T>> {
			validation::validate_sizhu(sizhu).map_err(Self::reject)?;
			validation::validate_dayun_list(dayun_list).map_err(Self::reject)?;

			let analysis = calculations::analyze_chart::<T::MaxCangGan>(
				sizhu,
				dayun_list,
				Self::max_dayun_steps(),
			)
			.map_err(Self::reject)?;

			log::debug!(
				target: crate::LOG_TARGET,
				"整盘: 日主{} {} 大运 {} 步",
				analysis.rizhu.gan.name(),
				analysis.strength.level.name(),
				analysis.dayun.len()
			);
			Ok(analysis)
		}

		fn max_dayun_steps() -> usize {
			T::MaxDaYunSteps::get() as usize
		}

		fn reject(err: ChartError) -> Error<T> {
			if let ChartError::InvalidChartInput(_) = err {
				log::warn!(target: crate::LOG_TARGET, "⚠️ 输入被拒绝: {}", err);
			}
			err.into()
		}
	}
}
