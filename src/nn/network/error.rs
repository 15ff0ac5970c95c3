/*
 * @Author       : 老董
 * @Date         : 2026-02-10
 * @Description  : Network 模块的错误类型
 */

use thiserror::Error;

/// 网络建模与编译的错误类型
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NetworkError {
    /// 层定义不合法（名称/形状/显示形状/丢弃率）
    #[error("非法层定义: {0}")]
    InvalidLayer(String),

    /// 按名称查找不到层
    #[error("未知层: {0}")]
    LayerNotFound(String),

    /// 图拓扑无法编译（没有输入层、链上存在环等）
    #[error("编译失败: {0}")]
    Compilation(String),

    /// 尚未编译就请求传播
    #[error("网络尚未编译，请先调用compile()")]
    NotCompiled,

    /// 当前模型状态下不允许的操作
    #[error("非法操作: {0}")]
    InvalidOperation(String),

    /// 传播输入的长度与输入层大小不匹配
    #[error("形状不匹配: 期望长度{expected}, 实际{got}")]
    ShapeMismatch { expected: usize, got: usize },
}
