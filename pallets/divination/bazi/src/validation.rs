//! # 输入校验
//!
//! 历法模块交来的四柱与大运外壳在推演前统一校验，任一不合法即整体拒绝，
//! 不做部分推演。

use crate::types::{ChartError, DaYunInput, DiZhi, GanZhi, InvalidInput, SiZhu, TianGan};

/// 每步正式大运的流年数
pub const LIUNIAN_PER_DAYUN: u32 = 10;

pub fn validate_tiangan(gan: TianGan) -> Result<(), ChartError> {
	if gan.is_valid() {
		Ok(())
	} else {
		Err(ChartError::invalid(InvalidInput::TianGan(gan.0)))
	}
}

pub fn validate_dizhi(zhi: DiZhi) -> Result<(), ChartError> {
	if zhi.is_valid() {
		Ok(())
	} else {
		Err(ChartError::invalid(InvalidInput::DiZhi(zhi.0)))
	}
}

/// 干支须为六十甲子之一
pub fn validate_ganzhi(ganzhi: GanZhi) -> Result<(), ChartError> {
	validate_tiangan(ganzhi.gan)?;
	validate_dizhi(ganzhi.zhi)?;
	if ganzhi.gan.0 % 2 != ganzhi.zhi.0 % 2 {
		return Err(ChartError::invalid(InvalidInput::GanZhiMismatch {
			gan: ganzhi.gan.0,
			zhi: ganzhi.zhi.0,
		}));
	}
	Ok(())
}

pub fn validate_sizhu(sizhu: &SiZhu) -> Result<(), ChartError> {
	for (_, zhu) in sizhu.iter() {
		validate_ganzhi(zhu.ganzhi)?;
	}
	Ok(())
}

/// 单独传入的日主须与日柱天干一致
pub fn validate_day_gan(sizhu: &SiZhu, day_gan: TianGan) -> Result<(), ChartError> {
	validate_tiangan(day_gan)?;
	if sizhu.day_gan() != day_gan {
		return Err(ChartError::invalid(InvalidInput::DayGanMismatch));
	}
	Ok(())
}

/// 校验四柱，并确认单独传入的日主、月令与四柱一致
pub fn validate_chart(sizhu: &SiZhu, day_gan: TianGan, month_zhi: DiZhi) -> Result<(), ChartError> {
	validate_sizhu(sizhu)?;
	validate_day_gan(sizhu, day_gan)?;
	if sizhu.month_zhi() != month_zhi {
		return Err(ChartError::invalid(InvalidInput::MonthZhiMismatch));
	}
	Ok(())
}

/// 大运外壳校验
///
/// - 列表非空，序号从 0 起连续递增
/// - 至少有一步起运后的大运（序号 >= 1）
/// - 每步正式大运恰有 10 个流年，年份严格递增
/// - 童限（序号 0）流年个数不限，但年份同样须递增
/// - 全部干支合法
pub fn validate_dayun_list(dayun_list: &[DaYunInput]) -> Result<(), ChartError> {
	if dayun_list.is_empty() {
		return Err(ChartError::invalid(InvalidInput::EmptyDaYunList));
	}

	for (expected, dayun) in dayun_list.iter().enumerate() {
		let expected = u8::try_from(expected).unwrap_or(u8::MAX);
		if dayun.index != expected {
			return Err(ChartError::invalid(InvalidInput::DaYunIndexGap {
				expected,
				found: dayun.index,
			}));
		}
		validate_ganzhi(dayun.ganzhi)?;

		let count = dayun.liunian.len() as u32;
		if dayun.index != 0 && count != LIUNIAN_PER_DAYUN {
			return Err(ChartError::invalid(InvalidInput::LiuNianCount {
				index: dayun.index,
				count,
			}));
		}
		if dayun.liunian.windows(2).any(|w| w[1].year <= w[0].year) {
			return Err(ChartError::invalid(InvalidInput::LiuNianNotAscending {
				index: dayun.index,
			}));
		}
		for liunian in dayun.liunian.iter() {
			validate_ganzhi(liunian.ganzhi)?;
		}
	}

	if !dayun_list.iter().any(|d| d.index != 0) {
		return Err(ChartError::invalid(InvalidInput::NoActiveDaYun));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::mock::{dayun_fixture, gz, sizhu};

	#[test]
	fn test_validate_ganzhi() {
		assert!(validate_ganzhi(gz("甲子")).is_ok());
		assert_eq!(
			validate_ganzhi(GanZhi::new(TianGan(10), DiZhi::ZI)),
			Err(ChartError::invalid(InvalidInput::TianGan(10)))
		);
		assert_eq!(
			validate_ganzhi(GanZhi::new(TianGan::JIA, DiZhi(12))),
			Err(ChartError::invalid(InvalidInput::DiZhi(12)))
		);
		assert_eq!(
			validate_ganzhi(GanZhi::new(TianGan::JIA, DiZhi::CHOU)),
			Err(ChartError::invalid(InvalidInput::GanZhiMismatch { gan: 0, zhi: 1 }))
		);
	}

	#[test]
	fn test_validate_chart_consistency() {
		let chart = sizhu(["丙申", "壬子", "戊子", "壬子"]);
		assert!(validate_chart(&chart, TianGan::WU, DiZhi::ZI).is_ok());
		assert_eq!(
			validate_chart(&chart, TianGan::JIA, DiZhi::ZI),
			Err(ChartError::invalid(InvalidInput::DayGanMismatch))
		);
		assert_eq!(
			validate_chart(&chart, TianGan::WU, DiZhi::WU),
			Err(ChartError::invalid(InvalidInput::MonthZhiMismatch))
		);
	}

	#[test]
	fn test_validate_dayun_list_ok() {
		let list = dayun_fixture(gz("辛巳"), 1990, 3, 4);
		assert!(validate_dayun_list(&list).is_ok());
	}

	#[test]
	fn test_validate_dayun_list_empty() {
		assert_eq!(
			validate_dayun_list(&[]),
			Err(ChartError::invalid(InvalidInput::EmptyDaYunList))
		);
	}

	#[test]
	fn test_validate_dayun_only_childhood() {
		let list = dayun_fixture(gz("辛巳"), 1990, 3, 1);
		assert_eq!(
			validate_dayun_list(&list),
			Err(ChartError::invalid(InvalidInput::NoActiveDaYun))
		);
	}

	#[test]
	fn test_validate_dayun_index_gap() {
		let mut list = dayun_fixture(gz("辛巳"), 1990, 3, 4);
		list.remove(1);
		assert_eq!(
			validate_dayun_list(&list),
			Err(ChartError::invalid(InvalidInput::DaYunIndexGap { expected: 1, found: 2 }))
		);
	}

	#[test]
	fn test_validate_liunian_count() {
		let mut list = dayun_fixture(gz("辛巳"), 1990, 3, 3);
		list[2].liunian.pop();
		assert_eq!(
			validate_dayun_list(&list),
			Err(ChartError::invalid(InvalidInput::LiuNianCount { index: 2, count: 9 }))
		);
	}

	#[test]
	fn test_validate_liunian_not_ascending() {
		let mut list = dayun_fixture(gz("辛巳"), 1990, 3, 3);
		list[1].liunian.swap(3, 4);
		assert_eq!(
			validate_dayun_list(&list),
			Err(ChartError::invalid(InvalidInput::LiuNianNotAscending { index: 1 }))
		);
	}

	#[test]
	fn test_validate_liunian_bad_ganzhi() {
		let mut list = dayun_fixture(gz("辛巳"), 1990, 3, 2);
		list[1].liunian[0].ganzhi = GanZhi::new(TianGan::YI, DiZhi::ZI);
		assert_eq!(
			validate_dayun_list(&list),
			Err(ChartError::invalid(InvalidInput::GanZhiMismatch { gan: 1, zhi: 0 }))
		);
	}
}
