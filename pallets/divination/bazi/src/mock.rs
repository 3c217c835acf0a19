//! # 测试模拟环境
//!
//! 为单元测试提供模拟的运行时环境，以及四柱、大运外壳的构造辅助函数

use crate as pallet_bazi_chart;
use crate::types::{DaYunInput, GanZhi, LiuNianInput, SiZhu};
use frame_support::{derive_impl, traits::ConstU32};
use sp_runtime::BuildStorage;

type Block = frame_system::mocking::MockBlock<Test>;

// 配置测试运行时
frame_support::construct_runtime!(
	pub enum Test
	{
		System: frame_system,
		BaziChart: pallet_bazi_chart,
	}
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
	type Block = Block;
}

impl pallet_bazi_chart::Config for Test {
	type MaxDaYunSteps = ConstU32<8>;
	type MaxCangGan = ConstU32<3>;
}

// 构建测试用的存储
pub fn new_test_ext() -> sp_io::TestExternalities {
	let t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();
	let mut ext = sp_io::TestExternalities::new(t);
	ext.execute_with(|| System::set_block_number(1));
	ext
}

/// 解析"甲子"形式的干支
pub fn gz(name: &str) -> GanZhi {
	GanZhi::from_name(name).unwrap_or_else(|| panic!("无效干支: {}", name))
}

/// 按 年、月、日、时 构建四柱
pub fn sizhu(pillars: [&str; 4]) -> SiZhu {
	SiZhu::from_ganzhi(gz(pillars[0]), gz(pillars[1]), gz(pillars[2]), gz(pillars[3]))
}

/// 公历年份对应的流年干支（1984 为甲子）
pub fn year_ganzhi(year: u16) -> GanZhi {
	GanZhi::from_index((year as i32 - 4).rem_euclid(60) as u8).unwrap()
}

/// 构建顺排大运外壳
///
/// 第 0 项为起运前童限（流年不足 10 个），其后每步 10 年，大运干支从月柱顺推。
/// `count` 含童限在内。
pub fn dayun_fixture(month: GanZhi, birth_year: u16, start_age: u8, count: u8) -> Vec<DaYunInput> {
	let mut list = Vec::new();
	let mut ganzhi = month;

	for index in 0..count {
		let (start_age_i, end_age_i) = if index == 0 {
			(0, start_age.saturating_sub(1))
		} else {
			let start = start_age + 10 * (index - 1);
			(start, start + 9)
		};
		let start_year = birth_year + start_age_i as u16;
		let end_year = birth_year + end_age_i as u16;

		let years = if index == 0 { start_age as u16 } else { 10 };
		let liunian = (0..years)
			.map(|offset| {
				let year = start_year + offset;
				LiuNianInput { year, age: (year - birth_year) as u8, ganzhi: year_ganzhi(year) }
			})
			.collect();

		list.push(DaYunInput {
			index,
			start_age: start_age_i,
			end_age: end_age_i,
			start_year,
			end_year,
			ganzhi,
			liunian,
		});
		ganzhi = ganzhi.next().unwrap();
	}

	list
}
