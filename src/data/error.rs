//! 数据集错误类型定义

use thiserror::Error;

/// 数据集相关错误
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DataError {
    /// 格式错误：扩展名不对、数组缺失、条数不一致、数据集为空，
    /// 以及一切底层加载失败（文件缺失、档案损坏、元素类型不符）
    #[error("数据集格式错误: {0}")]
    Format(String),

    /// 参数超出有效范围（切分边界、重缩放范围）
    #[error("参数超出有效范围: {0}")]
    Range(String),

    /// 尚未加载任何数据集
    #[error("尚未加载任何数据集")]
    NoDataset,
}
