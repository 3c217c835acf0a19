//! # 十神计算
//!
//! 以日主为"我"，由另一天干与日主的五行生克和阴阳异同推出十神：
//!
//! | 关系 | 同阴阳 | 异阴阳 |
//! |------|--------|--------|
//! | 同我 | 比肩   | 劫财   |
//! | 我生 | 食神   | 伤官   |
//! | 我克 | 偏财   | 正财   |
//! | 克我 | 七杀   | 正官   |
//! | 生我 | 偏印   | 正印   |

use crate::{
	constants::SHISHEN_TABLE,
	types::{CangGanInfo, CangGanType, ChartError, DiZhi, ShiShen, TianGan},
	validation::{validate_dizhi, validate_tiangan},
};
use sp_std::vec::Vec;

/// 计算 `other_gan` 相对日主 `day_gan` 的十神
pub fn calculate_shishen(day_gan: TianGan, other_gan: TianGan) -> Result<ShiShen, ChartError> {
	validate_tiangan(day_gan)?;
	validate_tiangan(other_gan)?;

	let day_wuxing = day_gan.to_wuxing()?;
	let other_wuxing = other_gan.to_wuxing()?;
	let same_yinyang = day_gan.yin_yang()? == other_gan.yin_yang()?;

	let relation = day_wuxing.relation_to(other_wuxing);
	Ok(SHISHEN_TABLE[relation.index()][same_yinyang as usize])
}

/// 地支各藏干相对日主的十神，按本气、中气、余气排列
pub fn calculate_canggan_shishen(day_gan: TianGan, zhi: DiZhi) -> Result<Vec<CangGanInfo>, ChartError> {
	validate_dizhi(zhi)?;
	zhi.canggan()?
		.iter()
		.enumerate()
		.map(|(order, gan)| {
			Ok(CangGanInfo {
				gan: *gan,
				canggan_type: CangGanType::from_order(order),
				shishen: calculate_shishen(day_gan, *gan)?,
			})
		})
		.collect()
}
