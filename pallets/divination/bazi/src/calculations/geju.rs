//! # 格局判断
//!
//! 判断顺序：
//! 1. 专旺格：极强且评分 >= 60
//! 2. 从格：极弱且评分 <= -40，按八字五行个数（扣除日干）取最旺者定从杀、从财、从儿、从弱
//! 3. 正格：月令本气与日主同五行取建禄或羊刃；否则月令各藏干（比劫除外）各成一格
//!
//! 候选按 外格优先、透干优先、藏干表顺序 稳定排序，首项为主格局。

use crate::{
	calculations::{calculate_shishen, count_wuxing},
	constants::{canggan_benqi, CONGGE_MAX_SCORE, ZHUANWANG_MIN_SCORE},
	types::{
		ChartError, CongGeKind, DiZhi, GeJu, GeJuCandidate, GeJuCategory, GeJuResult, InvalidInput,
		ShiShen, SiZhu, StrengthLevel, StrengthResult, TianGan, WuXing, WuXingRelation,
	},
	validation::validate_chart,
};
use core::cmp::Ordering;
use sp_std::vec::Vec;

/// 判断格局
pub fn determine_geju(
	day_gan: TianGan,
	month_zhi: DiZhi,
	sizhu: &SiZhu,
	strength: &StrengthResult,
) -> Result<GeJuResult, ChartError> {
	validate_chart(sizhu, day_gan, month_zhi)?;
	let me = day_gan.to_wuxing()?;
	if strength.day_element != me {
		return Err(ChartError::invalid(InvalidInput::StrengthMismatch));
	}

	let mut all_geju = Vec::new();

	if let Some(special) = special_geju(me, month_zhi, sizhu, strength)? {
		all_geju.push(special);
	}

	let benqi = canggan_benqi(month_zhi)?;
	if benqi.to_wuxing()? == me {
		let shishen = calculate_shishen(day_gan, benqi)?;
		let geju = if shishen == ShiShen::BiJian { GeJu::JianLu } else { GeJu::YangRen };
		all_geju.push(GeJuCandidate {
			geju,
			category: GeJuCategory::ZhengGe,
			revealed: true,
			month_zhi,
			source_gan: Some(benqi),
			source_shishen: Some(shishen),
			canggan_order: 0,
		});
	} else {
		for (order, gan) in month_zhi.canggan()?.iter().enumerate() {
			let shishen = calculate_shishen(day_gan, *gan)?;
			if shishen.is_bijie() {
				continue;
			}
			all_geju.push(GeJuCandidate {
				geju: GeJu::ShiShenGe(shishen),
				category: GeJuCategory::ZhengGe,
				revealed: sizhu.has_visible_gan(*gan),
				month_zhi,
				source_gan: Some(*gan),
				source_shishen: Some(shishen),
				canggan_order: order as u8,
			});
		}
	}

	all_geju.sort_by(compare_candidates);

	Ok(GeJuResult {
		main_geju: all_geju.first().copied(),
		all_geju,
		strength_level: strength.level,
	})
}

/// 专旺格或从格
fn special_geju(
	me: WuXing,
	month_zhi: DiZhi,
	sizhu: &SiZhu,
	strength: &StrengthResult,
) -> Result<Option<GeJuCandidate>, ChartError> {
	let geju = if strength.level == StrengthLevel::JiQiang && strength.score >= ZHUANWANG_MIN_SCORE {
		GeJu::ZhuanWang(me)
	} else if strength.level == StrengthLevel::JiRuo && strength.score <= CONGGE_MAX_SCORE {
		let mut count = count_wuxing(sizhu)?;
		count.remove(me);
		let dominant = count.dominant();
		let kind = match me.relation_to(dominant) {
			WuXingRelation::KeWo => CongGeKind::CongSha,
			WuXingRelation::WoKe => CongGeKind::CongCai,
			WuXingRelation::WoSheng => CongGeKind::CongEr,
			_ => CongGeKind::CongRuo,
		};
		GeJu::Cong { kind, dominant }
	} else {
		return Ok(None);
	};

	Ok(Some(GeJuCandidate {
		geju,
		category: GeJuCategory::WaiGe,
		revealed: true,
		month_zhi,
		source_gan: None,
		source_shishen: None,
		canggan_order: 0,
	}))
}

fn category_rank(category: GeJuCategory) -> u8 {
	match category {
		GeJuCategory::WaiGe => 0,
		GeJuCategory::ZhengGe => 1,
	}
}

fn compare_candidates(a: &GeJuCandidate, b: &GeJuCandidate) -> Ordering {
	category_rank(a.category)
		.cmp(&category_rank(b.category))
		.then_with(|| b.revealed.cmp(&a.revealed))
		.then_with(|| a.canggan_order.cmp(&b.canggan_order))
}
