//! 数据集模块
//!
//! 提供数据集加载、切分与预处理功能。
//!
//! # 主要组件
//!
//! - [`Dataset`]: 持有输入与标签的数据集（.npz档案加载）
//! - [`SplitSpec`]: 训练/测试切分方式（比例或绝对条数）
//! - [`transforms`]: 数据变换函数（仿射重缩放等）
//! - [`DataError`]: 数据集错误类型

mod dataset;
pub mod error;
pub mod transforms;


// Re-exports
pub use dataset::{Dataset, SplitSpec};
pub use error::DataError;
