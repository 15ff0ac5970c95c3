/*
 * @Author       : 老董
 * @Date         : 2026-02-10
 * @Description  : Dataset - .npz数据集的加载、切分、重洗与重缩放
 */

use super::error::DataError;
use super::transforms::rescale_array;
use ndarray::{ArrayD, ArrayViewD, Axis, Slice};
use ndarray_npy::NpzReader;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fmt;
use std::fs::File;
use std::path::Path;

/// 训练/测试切分方式
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplitSpec {
    /// 数据集大小的比例，取值[0,1]
    Fraction(f32),
    /// 绝对条数，取值[0,数据集大小]
    Count(usize),
}

impl From<f32> for SplitSpec {
    fn from(fraction: f32) -> Self {
        Self::Fraction(fraction)
    }
}

impl From<usize> for SplitSpec {
    fn from(count: usize) -> Self {
        Self::Count(count)
    }
}

/// Dataset - 同长的输入/标签数组对
///
/// 训练/测试分区是切分点处的前缀/后缀切片，按需取视图，
/// 因此重洗之后无需显式重建分区。
#[derive(Debug, Clone)]
pub struct Dataset {
    inputs: ArrayD<f32>,
    labels: ArrayD<f32>,
    size: usize,
    /// 观测到的输入最小/最大值
    inputs_range: (f32, f32),
    /// 当前切分点（训练集条数）
    split: usize,
}

impl Dataset {
    // ========== 加载 ==========

    /// 从.npz档案加载data/labels两个数组
    ///
    /// 扩展名必须是.npz；两数组条数必须一致且非空。
    /// 任何底层失败（文件缺失、档案损坏、元素类型不符）
    /// 都包装成统一的格式错误，不向外泄漏底层错误类型。
    /// 成功后默认按50/50切分。
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DataError> {
        let path = path.as_ref();
        if path.extension().and_then(|e| e.to_str()) != Some("npz") {
            return Err(DataError::Format(format!(
                "文件名必须以.npz结尾: {}",
                path.display()
            )));
        }

        let file = File::open(path)
            .map_err(|e| DataError::Format(format!("无法打开{}: {e}", path.display())))?;
        let mut npz = NpzReader::new(file)
            .map_err(|e| DataError::Format(format!("无法读取npz档案{}: {e}", path.display())))?;
        let inputs: ArrayD<f32> = npz
            .by_name("data.npy")
            .map_err(|e| DataError::Format(format!("无法读取data数组: {e}")))?;
        let labels: ArrayD<f32> = npz
            .by_name("labels.npy")
            .map_err(|e| DataError::Format(format!("无法读取labels数组: {e}")))?;

        if inputs.ndim() == 0 || labels.ndim() == 0 {
            return Err(DataError::Format(
                "data/labels数组至少需要一维".to_string(),
            ));
        }
        let size = inputs.shape()[0];
        if size != labels.shape()[0] {
            return Err(DataError::Format(format!(
                "输入与标签条数不一致: {} vs {}",
                size,
                labels.shape()[0]
            )));
        }
        if size == 0 {
            return Err(DataError::Format("数据集为空".to_string()));
        }

        let inputs_range = observed_range(&inputs);
        let mut dataset = Self {
            inputs,
            labels,
            size,
            inputs_range,
            split: 0,
        };
        dataset.split(SplitSpec::Fraction(0.5))?;
        Ok(dataset)
    }

    // ========== 基础访问器 ==========

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn inputs(&self) -> &ArrayD<f32> {
        &self.inputs
    }

    pub fn labels(&self) -> &ArrayD<f32> {
        &self.labels
    }

    /// 观测到的输入最小/最大值
    pub fn inputs_range(&self) -> (f32, f32) {
        self.inputs_range
    }

    /// 当前切分点（训练集条数）
    pub fn split_point(&self) -> usize {
        self.split
    }

    pub fn train_inputs(&self) -> ArrayViewD<'_, f32> {
        self.inputs.slice_axis(Axis(0), Slice::from(..self.split))
    }

    pub fn test_inputs(&self) -> ArrayViewD<'_, f32> {
        self.inputs.slice_axis(Axis(0), Slice::from(self.split..))
    }

    pub fn train_labels(&self) -> ArrayViewD<'_, f32> {
        self.labels.slice_axis(Axis(0), Slice::from(..self.split))
    }

    pub fn test_labels(&self) -> ArrayViewD<'_, f32> {
        self.labels.slice_axis(Axis(0), Slice::from(self.split..))
    }

    // ========== 切分 ==========

    /// 重新计算训练/测试分区：训练=[0,切分点)，测试=[切分点,末尾)
    ///
    /// 比例必须在[0,1]内，绝对条数必须不超过数据集大小；
    /// 校验失败时既有切分不变。
    pub fn split(&mut self, split: impl Into<SplitSpec>) -> Result<(), DataError> {
        let boundary = match split.into() {
            SplitSpec::Fraction(f) => {
                if !(0.0..=1.0).contains(&f) {
                    return Err(DataError::Range(format!("切分比例不在0-1范围内: {f}")));
                }
                (self.size as f32 * f) as usize
            }
            SplitSpec::Count(n) => {
                if n > self.size {
                    return Err(DataError::Range(format!("切分条数超出范围: {n}")));
                }
                n
            }
        };
        self.split = boundary;
        Ok(())
    }

    // ========== 重洗 ==========

    /// 对输入与标签施加同一个随机排列（保持对应关系），
    /// 切分点维持不变
    pub fn reshuffle(&mut self) {
        let mut rng = StdRng::from_entropy();
        self.reshuffle_with_rng(&mut rng);
    }

    /// 带固定种子的重洗（可重复）
    pub fn reshuffle_seeded(&mut self, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        self.reshuffle_with_rng(&mut rng);
    }

    fn reshuffle_with_rng(&mut self, rng: &mut StdRng) {
        let mut indices: Vec<usize> = (0..self.size).collect();
        indices.shuffle(rng);
        self.inputs = self.inputs.select(Axis(0), &indices);
        self.labels = self.labels.select(Axis(0), &indices);
    }

    // ========== 重缩放 ==========

    /// 将所有输入值从旧范围仿射映射到新范围
    ///
    /// 观测到的输入值必须全部落在旧范围内，新范围必须min < max；
    /// 校验失败时不改动任何数据。
    pub fn rescale(
        &mut self,
        old_range: (f32, f32),
        new_range: (f32, f32),
    ) -> Result<(), DataError> {
        let (old_min, old_max) = old_range;
        let (new_min, new_max) = new_range;
        let (observed_min, observed_max) = self.inputs_range;
        if observed_min < old_min || observed_max > old_max {
            return Err(DataError::Range(format!(
                "观测范围{:?}超出旧范围{:?}",
                self.inputs_range, old_range
            )));
        }
        if new_min >= new_max {
            return Err(DataError::Range(format!("新范围不合法: {new_range:?}")));
        }
        self.inputs = rescale_array(&self.inputs, old_range, new_range);
        self.inputs_range = observed_range(&self.inputs);
        Ok(())
    }
}

/// 观测数组的最小/最大值
fn observed_range(a: &ArrayD<f32>) -> (f32, f32) {
    let min = a.iter().copied().fold(f32::INFINITY, f32::min);
    let max = a.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    (min, max)
}

impl fmt::Display for Dataset {
    /// 数据集摘要：条数、单样本形状、输入范围、切分情况
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}条样本（训练{}条，测试{}条），单样本形状{:?}，输入范围{:?}",
            self.size,
            self.split,
            self.size - self.split,
            &self.inputs.shape()[1..],
            self.inputs_range
        )
    }
}
