//! # 喜用神
//!
//! 按日主强弱等级取喜忌，再叠加调候：冬月（亥子丑）喜火，夏月（巳午未）喜水。
//!
//! | 等级 | 用神 | 喜 | 忌 |
//! |------|------|----|----|
//! | 极强 | 同我 | 同我、生我 | 克我、我克 |
//! | 偏强 | 克我 | 克我、我生、我克 | 生我、同我 |
//! | 中和 | 我生 | 我生 | 无 |
//! | 偏弱 | 生我 | 生我、同我 | 克我、我生、我克 |
//! | 极弱 | 克我 | 克我、我生、我克 | 生我、同我 |

use crate::{
	constants::{SUMMER_ZHI, WINTER_ZHI},
	types::{
		ChartError, DiZhi, InvalidInput, StrengthLevel, StrengthResult, TianGan, WuXing,
		WuXingRelation, XiYongShen,
	},
	validation::{validate_dizhi, validate_tiangan},
};
use sp_std::{vec, vec::Vec};

/// 计算喜用神
pub fn calculate_xiyong_shen(
	day_gan: TianGan,
	strength: &StrengthResult,
	month_zhi: DiZhi,
) -> Result<XiYongShen, ChartError> {
	validate_tiangan(day_gan)?;
	validate_dizhi(month_zhi)?;

	let me = day_gan.to_wuxing()?;
	if strength.day_element != me {
		return Err(ChartError::invalid(InvalidInput::StrengthMismatch));
	}

	use WuXingRelation::*;
	let of = |relation| me.by_relation(relation);

	let (yong_shen, mut xi_shen, mut ji_shen) = match strength.level {
		StrengthLevel::JiQiang => (of(TongWo), vec![of(TongWo), of(ShengWo)], vec![of(KeWo), of(WoKe)]),
		StrengthLevel::PianQiang | StrengthLevel::JiRuo => (
			of(KeWo),
			vec![of(KeWo), of(WoSheng), of(WoKe)],
			vec![of(ShengWo), of(TongWo)],
		),
		StrengthLevel::ZhongHe => (of(WoSheng), vec![of(WoSheng)], Vec::new()),
		StrengthLevel::PianRuo => (
			of(ShengWo),
			vec![of(ShengWo), of(TongWo)],
			vec![of(KeWo), of(WoSheng), of(WoKe)],
		),
	};

	// 调候
	let mut tiao_hou = None;
	if let Some(element) = tiaohou_element(month_zhi) {
		if !xi_shen.contains(&element) {
			xi_shen.push(element);
			if element != yong_shen {
				tiao_hou = Some(element);
			}
		}
	}

	dedup_in_order(&mut xi_shen);
	dedup_in_order(&mut ji_shen);
	ji_shen.retain(|e| !xi_shen.contains(e));

	Ok(XiYongShen { yong_shen, xi_shen, ji_shen, tiao_hou })
}

/// 月令所需的调候五行
pub fn tiaohou_element(month_zhi: DiZhi) -> Option<WuXing> {
	if WINTER_ZHI.contains(&month_zhi) {
		Some(WuXing::Huo)
	} else if SUMMER_ZHI.contains(&month_zhi) {
		Some(WuXing::Shui)
	} else {
		None
	}
}

fn dedup_in_order(list: &mut Vec<WuXing>) {
	let mut seen = Vec::with_capacity(list.len());
	list.retain(|e| {
		if seen.contains(e) {
			false
		} else {
			seen.push(*e);
			true
		}
	});
}
