//! # 大运流年
//!
//! 为历法模块交来的大运外壳填入流年十神，并标注流年与原局的刑冲合：
//! - 对日柱：伏吟 > 相冲 > 相合，三者取一
//! - 对年柱：本命年 > 冲太岁 > 合太岁，三者取一
//!
//! 起运前童限（序号 0）不输出。

use crate::{
	calculations::calculate_shishen,
	constants::{is_dizhi_liuchong, is_dizhi_liuhe, MAX_DAYUN_STEPS},
	types::{
		ChartError, DaYun, DaYunInput, GanZhi, LiuNian, LiuNianEvent, LiuNianInput, SiZhu, TianGan,
	},
	validation::{validate_day_gan, validate_dayun_list, validate_sizhu},
};
use sp_std::vec::Vec;

/// 标注大运流年，最多输出 `max_steps` 步起运后的大运，且不超过 `MAX_DAYUN_STEPS`
pub fn annotate_dayun(
	day_gan: TianGan,
	sizhu: &SiZhu,
	dayun_list: &[DaYunInput],
	max_steps: usize,
) -> Result<Vec<DaYun>, ChartError> {
	validate_sizhu(sizhu)?;
	validate_day_gan(sizhu, day_gan)?;
	validate_dayun_list(dayun_list)?;

	dayun_list
		.iter()
		.filter(|dayun| dayun.index != 0)
		.take(max_steps.min(MAX_DAYUN_STEPS))
		.map(|dayun| -> Result<DaYun, ChartError> {
			let liunian = dayun
				.liunian
				.iter()
				.map(|ln| annotate_liunian(day_gan, sizhu, ln))
				.collect::<Result<Vec<_>, _>>()?;
			Ok(DaYun {
				index: dayun.index,
				start_age: dayun.start_age,
				end_age: dayun.end_age,
				start_year: dayun.start_year,
				end_year: dayun.end_year,
				ganzhi: dayun.ganzhi,
				liunian,
			})
		})
		.collect()
}

fn annotate_liunian(
	day_gan: TianGan,
	sizhu: &SiZhu,
	liunian: &LiuNianInput,
) -> Result<LiuNian, ChartError> {
	Ok(LiuNian {
		year: liunian.year,
		age: liunian.age,
		ganzhi: liunian.ganzhi,
		shishen: calculate_shishen(day_gan, liunian.ganzhi.gan)?,
		events: calculate_liunian_events(liunian.ganzhi, sizhu),
	})
}

/// 流年干支与原局日柱、年柱的关系
pub fn calculate_liunian_events(ganzhi: GanZhi, sizhu: &SiZhu) -> Vec<LiuNianEvent> {
	let mut events = Vec::new();

	let day = sizhu.day_zhu.ganzhi;
	if ganzhi == day {
		events.push(LiuNianEvent::RiZhuFuYin);
	} else if is_dizhi_liuchong(ganzhi.zhi, day.zhi) {
		events.push(LiuNianEvent::RiZhiChong);
	} else if is_dizhi_liuhe(ganzhi.zhi, day.zhi) {
		events.push(LiuNianEvent::RiZhiHe);
	}

	let year = sizhu.year_zhu.ganzhi;
	if ganzhi == year {
		events.push(LiuNianEvent::BenMingNian);
	} else if is_dizhi_liuchong(ganzhi.zhi, year.zhi) {
		events.push(LiuNianEvent::ChongTaiSui);
	} else if is_dizhi_liuhe(ganzhi.zhi, year.zhi) {
		events.push(LiuNianEvent::HeTaiSui);
	}

	events
}
