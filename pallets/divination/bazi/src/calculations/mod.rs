//! # 命理推演
//!
//! 纯函数层，无存储、无副作用，只读常量表。

pub mod chart;
pub mod dayun;
pub mod geju;
pub mod shishen;
pub mod strength;
pub mod xiyong;

pub use chart::{analyze_chart, count_wuxing};
pub use dayun::{annotate_dayun, calculate_liunian_events};
pub use geju::determine_geju;
pub use shishen::{calculate_canggan_shishen, calculate_shishen};
pub use strength::calculate_strength;
pub use xiyong::{calculate_xiyong_shen, tiaohou_element};
