/*
 * @Author       : 老董
 * @Date         : 2026-02-10
 * @Description  : 编译与前向传播：把声明的层图物化为可执行模型
 */

use super::{Network, NetworkError};
use crate::nn::backend::{ChainModel, CompiledModel, CompiledStep, LayerModel, LayerOp};
use crate::nn::config::CompileConfig;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::rc::Rc;

impl Network {
    /// 编译：对每个输入层，沿其链拼接各层的执行原语成顺序变换
    ///
    /// 编译过程中在每个途经层上记下一个独立子模型
    /// （原输入到该层累计输出的映射），供propagate_to使用。
    /// 单输入网络的输出即该链的输出；多输入网络按多输入/多输出处理。
    /// 拓扑必须先用connect建好：没有输入层或链上有环都报编译错误。
    pub fn compile(&mut self, config: CompileConfig) -> Result<(), NetworkError> {
        let input_ids = self.input_layer_ids();
        if input_ids.is_empty() {
            return Err(NetworkError::Compilation(format!(
                "网络{}中没有输入层（需要先用connect建立拓扑）",
                self.name
            )));
        }

        // 重复编译时先清掉上一次记下的子模型
        for layer in &mut self.layers {
            layer.compiled = None;
        }

        // 编译期专用RNG：有种子时从网络种子派生，否则用系统熵
        let mut rng = match &mut self.rng {
            Some(seeded) => StdRng::seed_from_u64(seeded.next_u64()),
            None => StdRng::from_entropy(),
        };

        let mut chains = Vec::with_capacity(input_ids.len());
        for input_id in input_ids {
            let chain = self.chain_from(input_id)?;
            let input_len = self.layers[input_id.0].size();
            let input_shape = self.layers[input_id.0].shape().to_vec();

            // 沿链物化执行步骤，顺手记下每层对应的前缀长度
            let mut steps = Vec::new();
            let mut prefix_ends = Vec::with_capacity(chain.len());
            let mut width = input_len;
            for &id in &chain {
                for op in self.layers[id.0].layer_ops() {
                    match op {
                        LayerOp::Dense { units, activation } => {
                            steps.push(CompiledStep::dense(width, units, activation, &mut rng));
                            width = units;
                        }
                        LayerOp::Dropout { rate } => steps.push(CompiledStep::Dropout { rate }),
                    }
                }
                prefix_ends.push((id, steps.len()));
            }

            let stack = Rc::new(steps);
            for (id, upto) in prefix_ends {
                self.layers[id.0].compiled =
                    Some(LayerModel::new(input_len, Rc::clone(&stack), upto));
            }
            chains.push(ChainModel {
                input: input_id,
                input_shape,
                input_len,
                stack,
                output_len: width,
            });
        }

        self.model = Some(CompiledModel::new(chains, config));
        Ok(())
    }

    /// 将单个输入实例送入已编译模型，返回网络输出向量
    pub fn propagate(&self, input: &[f32]) -> Result<Vec<f32>, NetworkError> {
        let model = self.model.as_ref().ok_or(NetworkError::NotCompiled)?;
        model.predict(input)
    }

    /// 多输入网络：每条链喂一个输入实例，返回各链输出
    pub fn propagate_multi(&self, inputs: &[&[f32]]) -> Result<Vec<Vec<f32>>, NetworkError> {
        let model = self.model.as_ref().ok_or(NetworkError::NotCompiled)?;
        model.predict_multi(inputs)
    }

    /// 传播到中间层：返回该层的激活输出
    pub fn propagate_to(&self, layer_name: &str, input: &[f32]) -> Result<Vec<f32>, NetworkError> {
        let id = self.id_of(layer_name)?;
        self.layers[id.0].output(input)
    }
}
