/*
 * @Author       : 老董
 * @Date         : 2026-02-10
 * @Description  : Network 核心操作：构造、查找、连接与链式遍历
 */

use super::{Network, NetworkError};
use crate::nn::backend::{CompiledModel, LayerOp};
use crate::nn::descriptor::{LayerDescriptor, LayerOpDescriptor, NetworkDescriptor};
use crate::nn::layer::{Layer, LayerId, LayerKind, VShape};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::{HashMap, HashSet};

impl Network {
    // ========== 创建 ==========

    /// 从固定的层列表创建网络（成员关系此后不可变）
    pub fn new(layers: Vec<Layer>) -> Result<Self, NetworkError> {
        Self::with_name("default_network", layers)
    }

    /// 创建带名称的网络
    ///
    /// 层名在网络内必须唯一：查找表在此建好，重名即拒绝。
    pub fn with_name(name: &str, layers: Vec<Layer>) -> Result<Self, NetworkError> {
        let mut layer_dict = HashMap::new();
        for (index, layer) in layers.iter().enumerate() {
            if layer_dict
                .insert(layer.name().to_string(), LayerId(index))
                .is_some()
            {
                return Err(NetworkError::InvalidLayer(format!(
                    "层{}在网络{}中重复",
                    layer.name(),
                    name
                )));
            }
        }
        Ok(Self {
            name: name.to_string(),
            layers,
            layer_dict,
            model: None,
            dataset: None,
            rng: None,
        })
    }

    /// 创建带固定种子的网络（编译期参数初始化可重复）
    pub fn new_with_seed(layers: Vec<Layer>, seed: u64) -> Result<Self, NetworkError> {
        let mut net = Self::new(layers)?;
        net.rng = Some(StdRng::seed_from_u64(seed));
        Ok(net)
    }

    // ========== 基础访问器 ==========

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layers_count(&self) -> usize {
        self.layers.len()
    }

    /// 按名称取层（未知名称返回None）
    pub fn get(&self, name: &str) -> Option<&Layer> {
        self.layer_dict.get(name).map(|id| &self.layers[id.0])
    }

    /// 按句柄取层
    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.get(id.0)
    }

    /// 按名称取层句柄，未知名称报错
    pub fn id_of(&self, name: &str) -> Result<LayerId, NetworkError> {
        self.layer_dict
            .get(name)
            .copied()
            .ok_or_else(|| NetworkError::LayerNotFound(name.to_string()))
    }

    /// 是否已有编译产物
    pub fn is_compiled(&self) -> bool {
        self.model.is_some()
    }

    /// 编译产物
    pub fn model(&self) -> Option<&CompiledModel> {
        self.model.as_ref()
    }

    // ========== 连接 ==========

    /// 建立有向连接 from→to
    ///
    /// 两个名字都必须已存在；查找失败时不改动任何状态。
    /// 不做环检测也不去重：重复connect会产生重复边，
    /// 而链式遍历只会沿第一条出边行走。
    pub fn connect(&mut self, from: &str, to: &str) -> Result<(), NetworkError> {
        let from_id = self.id_of(from)?;
        let to_id = self.id_of(to)?;
        self.layers[from_id.0].outgoing.push(to_id);
        self.layers[to_id.0].incoming.push(from_id);
        Ok(())
    }

    // ========== 链式遍历 ==========

    /// 自某层起的单支链：只沿第一条出边递归行走
    ///
    /// 已知拓扑限制：一层若有多条出边，除第一条外全部忽略，
    /// 因此编译只能正确处理每个输入出发的单支链。
    /// 链上出现环时报编译错误（这样的链永不终止）。
    pub fn chain_from(&self, start: LayerId) -> Result<Vec<LayerId>, NetworkError> {
        let mut chain = Vec::new();
        let mut visited = HashSet::new();
        let mut current = start;
        loop {
            if !visited.insert(current) {
                return Err(NetworkError::Compilation(format!(
                    "从层{}出发的链上存在环",
                    self.layers[start.0].name()
                )));
            }
            chain.push(current);
            match self.layers[current.0].outgoing.first() {
                Some(&next) => current = next,
                None => return Ok(chain),
            }
        }
    }

    /// 当前拓扑下所有输入层的句柄
    pub(in crate::nn) fn input_layer_ids(&self) -> Vec<LayerId> {
        self.layers
            .iter()
            .enumerate()
            .filter(|(_, layer)| layer.kind() == LayerKind::Input)
            .map(|(index, _)| LayerId(index))
            .collect()
    }

    // ========== 描述 ==========

    /// 生成网络的可序列化描述
    pub fn describe(&self) -> NetworkDescriptor {
        let mut desc = NetworkDescriptor::new(&self.name);
        for layer in &self.layers {
            let vshape = match layer.vshape() {
                VShape::Flat(n) => vec![*n],
                VShape::Grid(r, c) => vec![*r, *c],
            };
            let ops = layer
                .layer_ops()
                .iter()
                .map(|op| match op {
                    LayerOp::Dense { units, activation } => LayerOpDescriptor::Dense {
                        units: *units,
                        activation: activation.name().to_string(),
                    },
                    LayerOp::Dropout { rate } => LayerOpDescriptor::Dropout { rate: *rate },
                })
                .collect();
            desc.add_layer(LayerDescriptor {
                name: layer.name().to_string(),
                kind: layer.kind().to_string(),
                shape: layer.shape().to_vec(),
                size: layer.size(),
                vshape,
                activation: layer.activation().name().to_string(),
                dropout: layer.dropout(),
                incoming: self.connection_names(layer.incoming_connections()),
                outgoing: self.connection_names(layer.outgoing_connections()),
                ops,
            });
        }
        desc
    }

    fn connection_names(&self, ids: &[LayerId]) -> Vec<String> {
        ids.iter()
            .map(|&id| self.layers[id.0].name().to_string())
            .collect()
    }
}
