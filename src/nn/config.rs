/*
 * @Author       : 老董
 * @Date         : 2026-02-10
 * @Description  : 编译配置：损失函数、优化器与评估指标
 *
 * 本层只记录配置并随编译产物保存；数值更新属于外部训练引擎。
 */

use serde::{Deserialize, Serialize};

/// 损失函数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Loss {
    /// 均方误差
    MeanSquaredError,
    /// 多分类交叉熵
    CategoricalCrossentropy,
    /// 二分类交叉熵
    BinaryCrossentropy,
}

/// 优化器配置（只含超参数）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OptimizerSpec {
    Sgd { lr: f32, momentum: f32 },
    RmsProp { lr: f32 },
    Adam { lr: f32 },
}

impl OptimizerSpec {
    /// SGD，无动量
    pub fn sgd(lr: f32) -> Self {
        Self::Sgd { lr, momentum: 0.0 }
    }

    /// SGD，带动量
    pub fn sgd_momentum(lr: f32, momentum: f32) -> Self {
        Self::Sgd { lr, momentum }
    }

    /// RMSProp，常规默认学习率
    pub fn rmsprop() -> Self {
        Self::RmsProp { lr: 0.001 }
    }

    /// Adam，常规默认学习率
    pub fn adam() -> Self {
        Self::Adam { lr: 0.001 }
    }
}

/// 评估指标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metric {
    Accuracy,
}

/// 编译配置：compile时对模型应用的构建配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompileConfig {
    pub loss: Loss,
    pub optimizer: OptimizerSpec,
    #[serde(default)]
    pub metrics: Vec<Metric>,
}

impl CompileConfig {
    pub fn new(loss: Loss, optimizer: OptimizerSpec) -> Self {
        Self {
            loss,
            optimizer,
            metrics: Vec::new(),
        }
    }

    /// 追加一个评估指标
    pub fn metric(mut self, metric: Metric) -> Self {
        self.metrics.push(metric);
        self
    }
}
