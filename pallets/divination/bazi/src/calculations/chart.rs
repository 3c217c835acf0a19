//! # 整盘分析
//!
//! 汇总四柱详情、日主、五行个数、强弱、喜用神、格局与大运流年。
//! 排盘（历法换算）不在本模块范围内，四柱与大运外壳由调用方提供。

use crate::{
	calculations::{
		annotate_dayun, calculate_canggan_shishen, calculate_shishen, calculate_strength,
		calculate_xiyong_shen, determine_geju,
	},
	types::{
		BaziAnalysis, CangGanInfo, ChartError, DaYunInput, RiZhuInfo, SiZhu, SiZhuPosition, WuXingCount,
		ZhuDetail, ZhuShiShen,
	},
	validation::{validate_dayun_list, validate_sizhu},
};
use frame_support::{traits::Get, BoundedVec};
use sp_std::vec::Vec;

/// 统计四柱八字（四干四支）的五行个数
pub fn count_wuxing(sizhu: &SiZhu) -> Result<WuXingCount, ChartError> {
	let mut count = WuXingCount::default();
	for (_, zhu) in sizhu.iter() {
		count.add(zhu.ganzhi.gan.to_wuxing()?);
		count.add(zhu.ganzhi.zhi.to_wuxing()?);
	}
	Ok(count)
}

/// 整盘分析
///
/// 每柱藏干以 `S` 为上限，超出时返回 `ChartError::TooManyCangGan`。
pub fn analyze_chart<S: Get<u32>>(
	sizhu: &SiZhu,
	dayun_list: &[DaYunInput],
	max_steps: usize,
) -> Result<BaziAnalysis<S>, ChartError> {
	validate_sizhu(sizhu)?;
	validate_dayun_list(dayun_list)?;

	let day_gan = sizhu.day_gan();
	let month_zhi = sizhu.month_zhi();

	let mut zhu_details = Vec::with_capacity(4);
	for (position, zhu) in sizhu.iter() {
		let ganzhi = zhu.ganzhi;
		let shishen = if position == SiZhuPosition::Day {
			ZhuShiShen::RiZhu
		} else {
			ZhuShiShen::ShiShen(calculate_shishen(day_gan, ganzhi.gan)?)
		};

		let mut canggan = BoundedVec::<CangGanInfo, S>::default();
		for info in calculate_canggan_shishen(day_gan, ganzhi.zhi)? {
			canggan
				.try_push(info)
				.map_err(|_| ChartError::TooManyCangGan(ganzhi.zhi))?;
		}

		zhu_details.push(ZhuDetail {
			position,
			ganzhi,
			gan_wuxing: ganzhi.gan.to_wuxing()?,
			zhi_wuxing: ganzhi.zhi.to_wuxing()?,
			gan_yinyang: ganzhi.gan.yin_yang()?,
			shishen,
			canggan,
			nayin: zhu.nayin.clone(),
		});
	}

	let rizhu = RiZhuInfo { gan: day_gan, wuxing: day_gan.to_wuxing()?, yinyang: day_gan.yin_yang()? };
	let strength = calculate_strength(day_gan, month_zhi, sizhu)?;
	let xiyong_shen = calculate_xiyong_shen(day_gan, &strength, month_zhi)?;
	let geju = determine_geju(day_gan, month_zhi, sizhu, &strength)?;
	let dayun = annotate_dayun(day_gan, sizhu, dayun_list, max_steps)?;

	Ok(BaziAnalysis {
		zhu_details,
		rizhu,
		wuxing_count: count_wuxing(sizhu)?,
		strength,
		xiyong_shen,
		geju,
		dayun,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		mock::{dayun_fixture, gz, sizhu},
		types::{
			CangGanType, DiZhi, InvalidInput, ShiShen, StrengthLevel, TianGan, WuXing, YinYang, Zhu,
		},
	};
	use frame_support::traits::ConstU32;

	#[test]
	fn test_count_wuxing() {
		let count = count_wuxing(&sizhu(["庚申", "丙申", "甲申", "辛酉"])).unwrap();
		assert_eq!(count.get(WuXing::Jin), 6);
		assert_eq!(count.get(WuXing::Huo), 1);
		assert_eq!(count.get(WuXing::Mu), 1);
		assert_eq!(count.get(WuXing::Tu), 0);
		assert_eq!(count.total(), 8);
	}

	#[test]
	fn test_analyze_chart() {
		let mut chart = sizhu(["庚午", "辛巳", "丙寅", "甲午"]);
		chart.year_zhu = Zhu::with_nayin(gz("庚午"), "路旁土".as_bytes().to_vec().try_into().unwrap());
		let list = dayun_fixture(gz("辛巳"), 1990, 3, 10);

		let analysis = analyze_chart::<ConstU32<3>>(&chart, &list, 8).unwrap();

		assert_eq!(analysis.zhu_details.len(), 4);
		let year = &analysis.zhu_details[0];
		assert_eq!(year.shishen, ZhuShiShen::ShiShen(ShiShen::PianCai));
		assert_eq!(year.gan_wuxing, WuXing::Jin);
		assert_eq!(year.zhi_wuxing, WuXing::Huo);
		assert_eq!(year.nayin.to_vec(), "路旁土".as_bytes().to_vec());

		let day = &analysis.zhu_details[2];
		assert_eq!(day.shishen, ZhuShiShen::RiZhu);
		assert_eq!(day.canggan.len(), 3);
		assert_eq!(day.canggan[0].gan, TianGan::JIA);
		assert_eq!(day.canggan[0].shishen, ShiShen::PianYin);
		assert_eq!(day.canggan[2].canggan_type, CangGanType::YuQi);

		assert_eq!(analysis.rizhu.gan, TianGan::BING);
		assert_eq!(analysis.rizhu.yinyang, YinYang::Yang);
		assert_eq!(analysis.wuxing_count.total(), 8);
		assert_eq!(analysis.strength.level, StrengthLevel::JiQiang);
		assert_eq!(analysis.xiyong_shen.yong_shen, WuXing::Huo);
		assert_eq!(analysis.dayun.len(), 8);
		assert!(analysis.geju.main_geju.is_some());
	}

	#[test]
	fn test_analyze_chart_rejects_before_scoring() {
		let chart = sizhu(["庚午", "辛巳", "丙寅", "甲午"]);
		assert_eq!(
			analyze_chart::<ConstU32<3>>(&chart, &[], 8),
			Err(ChartError::invalid(InvalidInput::EmptyDaYunList))
		);
	}

	#[test]
	fn test_analyze_chart_canggan_bound() {
		// 年支午藏两干可容纳，月支巳藏三干超出上限 2
		let chart = sizhu(["庚午", "辛巳", "丙寅", "甲午"]);
		let list = dayun_fixture(gz("辛巳"), 1990, 3, 3);
		assert_eq!(
			analyze_chart::<ConstU32<2>>(&chart, &list, 8),
			Err(ChartError::TooManyCangGan(DiZhi::SI))
		);

		let analysis = analyze_chart::<ConstU32<3>>(&chart, &list, 8).unwrap();
		assert!(analysis.zhu_details.iter().all(|zhu| zhu.canggan.len() <= 3));
	}
}
