/*
 * @Author       : 老董
 * @Date         : 2026-02-10
 * @Description  : 执行器：把层图的编译产物（全连接/丢弃步骤）物化为可前向求值的模型
 *
 * 本模块只做推理期前向求值，训练与梯度属于外部引擎，不在本层。
 */

use super::config::CompileConfig;
use super::layer::LayerId;
use super::network::NetworkError;
use super::Activation;
use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::Rng;
use std::rc::Rc;

// ==================== Init 枚举 ====================

/// 参数初始化策略
#[derive(Debug, Clone)]
pub enum Init {
    /// 常数初始化
    Constant(f32),
    /// 全零
    Zeros,
    /// 全一
    Ones,
    /// 正态分布
    Normal { mean: f32, std: f32 },
    /// Kaiming/He 初始化（适用于`ReLU`）
    Kaiming,
    /// Xavier/Glorot 初始化（适用于Sigmoid/Tanh）
    Xavier,
}

impl Init {
    /// 生成 [rows, cols] 的初始化矩阵
    pub fn generate(&self, rows: usize, cols: usize, rng: &mut StdRng) -> Array2<f32> {
        match self {
            Self::Constant(v) => Array2::from_elem((rows, cols), *v),
            Self::Zeros => Array2::zeros((rows, cols)),
            Self::Ones => Array2::ones((rows, cols)),
            Self::Normal { mean, std } => sample_normal(rows, cols, *mean, *std, rng),
            Self::Kaiming => {
                let std = (2.0 / rows as f32).sqrt();
                sample_normal(rows, cols, 0.0, std, rng)
            }
            Self::Xavier => {
                let std = (2.0 / (rows + cols) as f32).sqrt();
                sample_normal(rows, cols, 0.0, std, rng)
            }
        }
    }
}

/// Box-Muller 正态采样
fn sample_normal(rows: usize, cols: usize, mean: f32, std: f32, rng: &mut StdRng) -> Array2<f32> {
    Array2::from_shape_fn((rows, cols), |_| {
        let u1: f32 = rng.gen_range(f32::EPSILON..1.0);
        let u2: f32 = rng.gen_range(0.0..1.0);
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f32::consts::PI * u2).cos();
        mean + std * z
    })
}

// ==================== 执行原语与编译步骤 ====================

/// 层展开出的执行原语（编译前的中间表示）
#[derive(Clone)]
pub enum LayerOp {
    /// 全连接：宽度 + 激活
    Dense { units: usize, activation: Activation },
    /// 丢弃
    Dropout { rate: f32 },
}

/// 编译后的单个执行步骤
pub(in crate::nn) enum CompiledStep {
    /// 全连接：y = σ(x·W + b)
    Dense {
        weights: Array2<f32>,
        bias: Array1<f32>,
        activation: Activation,
    },
    /// 丢弃：推理期为恒等变换，只记录比率
    Dropout { rate: f32 },
}

impl CompiledStep {
    /// 物化一个全连接步骤：权重Kaiming初始化，偏置全零
    pub(in crate::nn) fn dense(
        fan_in: usize,
        units: usize,
        activation: Activation,
        rng: &mut StdRng,
    ) -> Self {
        let weights = Init::Kaiming.generate(fan_in, units, rng);
        let bias = Array1::zeros(units);
        Self::Dense {
            weights,
            bias,
            activation,
        }
    }

    fn forward(&self, x: Array1<f32>) -> Array1<f32> {
        match self {
            Self::Dense {
                weights,
                bias,
                activation,
            } => activation.apply(x.dot(weights) + bias),
            Self::Dropout { .. } => x,
        }
    }
}

/// 对步骤栈的前缀做单实例前向求值
fn forward_stack(
    steps: &[CompiledStep],
    input_len: usize,
    input: &[f32],
) -> Result<Vec<f32>, NetworkError> {
    if input.len() != input_len {
        return Err(NetworkError::ShapeMismatch {
            expected: input_len,
            got: input.len(),
        });
    }
    let mut x = Array1::from_vec(input.to_vec());
    for step in steps {
        x = step.forward(x);
    }
    Ok(x.to_vec())
}

// ==================== 子模型与整网模型 ====================

/// 层级子模型：原输入到某层累计输出的映射
///
/// 与整网模型共享同一份步骤栈，只记录前缀长度。
#[derive(Clone)]
pub struct LayerModel {
    input_len: usize,
    stack: Rc<Vec<CompiledStep>>,
    upto: usize,
}

impl LayerModel {
    pub(in crate::nn) fn new(input_len: usize, stack: Rc<Vec<CompiledStep>>, upto: usize) -> Self {
        Self {
            input_len,
            stack,
            upto,
        }
    }

    /// 单实例前向求值（到本层为止）
    pub fn forward(&self, input: &[f32]) -> Result<Vec<f32>, NetworkError> {
        forward_stack(&self.stack[..self.upto], self.input_len, input)
    }
}

/// 单条链的编译产物：一个输入层对应一条链
pub(in crate::nn) struct ChainModel {
    pub(in crate::nn) input: LayerId,
    pub(in crate::nn) input_shape: Vec<usize>,
    pub(in crate::nn) input_len: usize,
    pub(in crate::nn) stack: Rc<Vec<CompiledStep>>,
    pub(in crate::nn) output_len: usize,
}

impl ChainModel {
    fn forward(&self, input: &[f32]) -> Result<Vec<f32>, NetworkError> {
        forward_stack(&self.stack, self.input_len, input)
    }
}

/// 整网的可执行模型：全部链 + 编译时应用的构建配置
pub struct CompiledModel {
    chains: Vec<ChainModel>,
    config: CompileConfig,
}

impl CompiledModel {
    pub(in crate::nn) fn new(chains: Vec<ChainModel>, config: CompileConfig) -> Self {
        Self { chains, config }
    }

    pub(in crate::nn) fn chains(&self) -> &[ChainModel] {
        &self.chains
    }

    /// 输入链的数量
    pub fn num_inputs(&self) -> usize {
        self.chains.len()
    }

    /// 编译时应用的构建配置
    pub fn config(&self) -> &CompileConfig {
        &self.config
    }

    /// 各链的输出宽度
    pub fn output_lens(&self) -> Vec<usize> {
        self.chains.iter().map(|chain| chain.output_len).collect()
    }

    /// 单输入模型的单实例预测
    pub fn predict(&self, input: &[f32]) -> Result<Vec<f32>, NetworkError> {
        if self.chains.len() != 1 {
            return Err(NetworkError::InvalidOperation(format!(
                "模型有{}个输入，请改用propagate_multi",
                self.chains.len()
            )));
        }
        self.chains[0].forward(input)
    }

    /// 多输入模型：按链的顺序各喂一个实例，返回各链输出
    pub fn predict_multi(&self, inputs: &[&[f32]]) -> Result<Vec<Vec<f32>>, NetworkError> {
        if inputs.len() != self.chains.len() {
            return Err(NetworkError::InvalidOperation(format!(
                "模型有{}个输入，实际提供{}个",
                self.chains.len(),
                inputs.len()
            )));
        }
        self.chains
            .iter()
            .zip(inputs)
            .map(|(chain, input)| chain.forward(input))
            .collect()
    }
}
