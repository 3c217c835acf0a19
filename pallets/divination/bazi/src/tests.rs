//! # Pallet 接口测试

use crate::{mock::*, types::*, Error};
use frame_support::{assert_err, assert_ok};
use sp_runtime::DispatchError;

type Bazi = crate::Pallet<Test>;

/// `Error<T>` 无 `PartialEq`，断言前统一转为 `DispatchError`
fn dispatch<R>(result: Result<R, Error<Test>>) -> Result<R, DispatchError> {
	result.map_err(Into::into)
}

#[test]
fn test_resolve_shishen() {
	new_test_ext().execute_with(|| {
		assert_ok!(dispatch(Bazi::resolve_shishen(TianGan::JIA, TianGan::GENG)), ShiShen::QiSha);
		assert_ok!(dispatch(Bazi::resolve_shishen(TianGan::JIA, TianGan::JIA)), ShiShen::BiJian);
		assert_err!(
			dispatch(Bazi::resolve_shishen(TianGan(10), TianGan::JIA)),
			Error::<Test>::InvalidTianGan
		);
	});
}

#[test]
fn test_compute_strength_weak_earth() {
	new_test_ext().execute_with(|| {
		let chart = sizhu(["丙申", "壬子", "戊子", "壬子"]);
		let result = Bazi::compute_strength(TianGan::WU, DiZhi::ZI, &chart).unwrap();
		assert!(matches!(
			result.details[0],
			StrengthDetail::YueLing { state: YueLingState::ShiLing, score, .. } if score < 0
		));
		assert_eq!(result.level, StrengthLevel::PianRuo);

		// 重复计算结果一致
		assert_eq!(Bazi::compute_strength(TianGan::WU, DiZhi::ZI, &chart).unwrap(), result);
	});
}

#[test]
fn test_compute_strength_rejects_invalid_pillars() {
	new_test_ext().execute_with(|| {
		let mut chart = sizhu(["丙申", "壬子", "戊子", "壬子"]);
		chart.hour_zhu.ganzhi = GanZhi::new(TianGan::REN, DiZhi::CHOU);
		assert_err!(
			dispatch(Bazi::compute_strength(TianGan::WU, DiZhi::ZI, &chart)),
			Error::<Test>::InvalidGanZhi
		);

		chart.hour_zhu.ganzhi = GanZhi::new(TianGan::REN, DiZhi(20));
		assert_err!(
			dispatch(Bazi::compute_strength(TianGan::WU, DiZhi::ZI, &chart)),
			Error::<Test>::InvalidDiZhi
		);

		let chart = sizhu(["丙申", "壬子", "戊子", "壬子"]);
		assert_err!(
			dispatch(Bazi::compute_strength(TianGan::JIA, DiZhi::ZI, &chart)),
			Error::<Test>::InconsistentChart
		);
	});
}

#[test]
fn test_fire_day_master_summer_pipeline() {
	new_test_ext().execute_with(|| {
		let chart = sizhu(["甲午", "丁巳", "丙午", "庚寅"]);
		let strength = Bazi::compute_strength(TianGan::BING, DiZhi::SI, &chart).unwrap();
		assert!(strength.level <= StrengthLevel::PianQiang);

		let xiyong = Bazi::compute_xiyong_shen(TianGan::BING, &strength, DiZhi::SI).unwrap();
		assert!(xiyong.xi_shen.contains(&WuXing::Shui));
		assert_eq!(xiyong.tiao_hou, Some(WuXing::Shui));

		let geju = Bazi::classify_geju(TianGan::BING, DiZhi::SI, &chart, &strength).unwrap();
		let main = geju.main_geju.unwrap();
		assert_eq!(main.geju, GeJu::ZhuanWang(WuXing::Huo));
		assert_eq!(main.category.name(), "外格");
	});
}

#[test]
fn test_compute_xiyong_rejects_mismatched_strength() {
	new_test_ext().execute_with(|| {
		let chart = sizhu(["甲午", "丁巳", "丙午", "庚寅"]);
		let strength = Bazi::compute_strength(TianGan::BING, DiZhi::SI, &chart).unwrap();
		assert_err!(
			dispatch(Bazi::compute_xiyong_shen(TianGan::REN, &strength, DiZhi::SI)),
			Error::<Test>::InconsistentChart
		);
	});
}

#[test]
fn test_annotate_dayun_capped_by_config() {
	new_test_ext().execute_with(|| {
		let chart = sizhu(["庚午", "辛巳", "丙寅", "甲午"]);
		let list = dayun_fixture(gz("辛巳"), 1990, 3, 11);
		let dayun = Bazi::annotate_dayun(TianGan::BING, &chart, &list).unwrap();
		assert_eq!(dayun.len(), 8);
		assert!(dayun.iter().all(|d| d.index != 0 && d.liunian.len() == 10));
	});
}

#[test]
fn test_annotate_dayun_day_pillar_fuyin() {
	new_test_ext().execute_with(|| {
		// 1986 丙寅年与日柱相同
		let chart = sizhu(["庚午", "辛巳", "丙寅", "甲午"]);
		let list = dayun_fixture(gz("辛巳"), 1980, 3, 3);
		let dayun = Bazi::annotate_dayun(TianGan::BING, &chart, &list).unwrap();
		let year = dayun[0].liunian.iter().find(|ln| ln.year == 1986).unwrap();
		assert_eq!(year.ganzhi, gz("丙寅"));
		assert!(year.events.contains(&LiuNianEvent::RiZhuFuYin));
		assert!(!year.events.contains(&LiuNianEvent::RiZhiChong));
	});
}

#[test]
fn test_annotate_dayun_rejects_bad_sequence() {
	new_test_ext().execute_with(|| {
		let chart = sizhu(["庚午", "辛巳", "丙寅", "甲午"]);
		assert_err!(
			dispatch(Bazi::annotate_dayun(TianGan::BING, &chart, &[])),
			Error::<Test>::InvalidDaYunSequence
		);

		let mut list = dayun_fixture(gz("辛巳"), 1990, 3, 3);
		list[2].liunian.push(LiuNianInput { year: 2020, age: 30, ganzhi: year_ganzhi(2020) });
		assert_err!(
			dispatch(Bazi::annotate_dayun(TianGan::BING, &chart, &list)),
			Error::<Test>::InvalidLiuNianSequence
		);
	});
}

#[test]
fn test_analyze_chart() {
	new_test_ext().execute_with(|| {
		let chart = sizhu(["庚申", "丙申", "甲申", "辛酉"]);
		let list = dayun_fixture(gz("丙申"), 1980, 5, 10);
		let analysis = Bazi::analyze_chart(&chart, &list).unwrap();

		assert_eq!(analysis.strength.level, StrengthLevel::JiRuo);
		assert_eq!(analysis.wuxing_count.get(WuXing::Jin), 6);
		assert_eq!(
			analysis.geju.main_geju.map(|g| g.geju),
			Some(GeJu::Cong { kind: CongGeKind::CongSha, dominant: WuXing::Jin })
		);
		assert_eq!(analysis.xiyong_shen.yong_shen, WuXing::Jin);
		assert_eq!(analysis.dayun.len(), 8);
		assert_eq!(analysis.zhu_details[2].shishen, ZhuShiShen::RiZhu);
	});
}

#[test]
fn test_annotate_dayun_rejects_foreign_day_master() {
	new_test_ext().execute_with(|| {
		let chart = sizhu(["庚午", "辛巳", "丙寅", "甲午"]);
		let list = dayun_fixture(gz("辛巳"), 1990, 3, 3);
		assert_err!(
			dispatch(Bazi::annotate_dayun(TianGan::JIA, &chart, &list)),
			Error::<Test>::InconsistentChart
		);
		assert_ok!(dispatch(Bazi::annotate_dayun(TianGan::BING, &chart, &list).map(|d| d.len())), 2);
	});
}
