//! 数据变换函数
//!
//! 提供常用的数据预处理操作。

use ndarray::ArrayD;

/// 将数组从旧范围仿射映射到新范围
///
/// 每个元素按 `new_min + (x - old_min) * (new_max - new_min) / (old_max - old_min)` 变换。
/// 范围合法性由调用方负责校验（见 `Dataset::rescale`）。
pub fn rescale_array(
    a: &ArrayD<f32>,
    old_range: (f32, f32),
    new_range: (f32, f32),
) -> ArrayD<f32> {
    let (old_min, old_max) = old_range;
    let (new_min, new_max) = new_range;
    let old_delta = old_max - old_min;
    let new_delta = new_max - new_min;
    a.mapv(|x| new_min + (x - old_min) * new_delta / old_delta)
}
