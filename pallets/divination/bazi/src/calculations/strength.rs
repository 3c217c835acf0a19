//! # 日主强弱
//!
//! 分三部分累加：
//! 1. 月令：日主五行在月支的旺衰分值
//! 2. 通根：四柱地支藏干中与日主同五行者，本气 +15，中气余气 +8（每支只取第一个）
//! 3. 天干：年、月、时三干中生我或同我者 +10，其余 -10
//!
//! 总分按阈值分为 极强 / 偏强 / 中和 / 偏弱 / 极弱 五档。

use crate::{
	constants::{yueling_score, TIANGAN_SCORE, TONGGEN_BENQI_SCORE, TONGGEN_OTHER_SCORE},
	types::{
		ChartError, DiZhi, SiZhu, SiZhuPosition, StrengthDetail, StrengthLevel, StrengthResult,
		TianGan, TongGen, WuXingRelation, YueLingState,
	},
	validation::validate_chart,
};
use sp_std::vec::Vec;

/// 计算日主强弱
///
/// `day_gan` 与 `month_zhi` 须与四柱的日干、月支一致。
pub fn calculate_strength(
	day_gan: TianGan,
	month_zhi: DiZhi,
	sizhu: &SiZhu,
) -> Result<StrengthResult, ChartError> {
	validate_chart(sizhu, day_gan, month_zhi)?;

	let day_element = day_gan.to_wuxing()?;
	let mut score = 0i32;
	let mut details = Vec::new();

	// 月令
	let yueling = yueling_score(day_element, month_zhi)?;
	score += yueling;
	details.push(StrengthDetail::YueLing {
		zhi: month_zhi,
		state: YueLingState::from_score(yueling),
		score: yueling,
	});

	// 通根
	let mut roots = Vec::new();
	for (position, zhu) in sizhu.iter() {
		let zhi = zhu.ganzhi.zhi;
		for (order, gan) in zhi.canggan()?.iter().enumerate() {
			if gan.to_wuxing()? != day_element {
				continue;
			}
			let is_benqi = order == 0;
			let root_score = if is_benqi { TONGGEN_BENQI_SCORE } else { TONGGEN_OTHER_SCORE };
			roots.push(TongGen { position, zhi, gan: *gan, is_benqi, score: root_score });
			score += root_score;
			break;
		}
	}
	if !roots.is_empty() {
		details.push(StrengthDetail::TongGen(roots));
	}

	// 天干帮扶与克泄耗（日干本身不计）
	let mut bangfu = 0u8;
	let mut haoxie = 0u8;
	for (position, zhu) in sizhu.iter() {
		if position == SiZhuPosition::Day {
			continue;
		}
		match day_element.relation_to(zhu.ganzhi.gan.to_wuxing()?) {
			WuXingRelation::ShengWo | WuXingRelation::TongWo => bangfu += 1,
			_ => haoxie += 1,
		}
	}
	if bangfu > 0 {
		let s = bangfu as i32 * TIANGAN_SCORE;
		score += s;
		details.push(StrengthDetail::BangFu { count: bangfu, score: s });
	}
	if haoxie > 0 {
		let s = -(haoxie as i32) * TIANGAN_SCORE;
		score += s;
		details.push(StrengthDetail::HaoXie { count: haoxie, score: s });
	}

	let level = StrengthLevel::from_score(score);
	log::debug!(
		target: crate::LOG_TARGET,
		"日主{}强弱评分 {} => {}",
		day_gan.name(),
		score,
		level.name()
	);

	Ok(StrengthResult { score, level, details, day_element })
}
