/*
 * @Author       : 老董
 * @Date         : 2026-02-10
 * @Description  : Network 的数据集管理：加载、切分、重洗、重缩放
 */

use super::Network;
use crate::data::{DataError, Dataset, SplitSpec};
use std::path::Path;

impl Network {
    /// 从.npz档案加载数据集（data与labels两个数组）
    ///
    /// 任何底层加载失败都被包装成统一的格式错误。
    /// 成功后默认按50/50切分。
    pub fn load_dataset<P: AsRef<Path>>(&mut self, path: P) -> Result<(), DataError> {
        self.dataset = Some(Dataset::load(path)?);
        Ok(())
    }

    /// 当前数据集（未加载时为None）
    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    fn dataset_mut(&mut self) -> Result<&mut Dataset, DataError> {
        self.dataset.as_mut().ok_or(DataError::NoDataset)
    }

    /// 重新切分训练/测试集（比例或绝对条数）
    pub fn split_dataset(&mut self, split: impl Into<SplitSpec>) -> Result<(), DataError> {
        self.dataset_mut()?.split(split)
    }

    /// 对输入与标签施加同一个随机排列（保持对应关系），
    /// 切分点维持不变
    pub fn reshuffle_dataset(&mut self) -> Result<(), DataError> {
        self.dataset_mut()?.reshuffle();
        Ok(())
    }

    /// 将所有输入值从旧范围仿射映射到新范围
    pub fn rescale_inputs(
        &mut self,
        old_range: (f32, f32),
        new_range: (f32, f32),
    ) -> Result<(), DataError> {
        self.dataset_mut()?.rescale(old_range, new_range)
    }
}
