/*
 * @Author       : 老董
 * @Date         : 2026-02-10
 * @Description  : Layer - 网络中的命名节点（形状、激活、丢弃率与连接记录）
 */

use super::activation::Activation;
use super::backend::{LayerModel, LayerOp};
use super::network::NetworkError;
use std::fmt;

/// 层的索引句柄（指向所属Network的层列表）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId(pub usize);

/// 层的派生类别：由当前连接数推导，永不缓存
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    /// 无入边也无出边
    Unconnected,
    /// 只有出边
    Input,
    /// 有入边也有出边
    Hidden,
    /// 只有入边
    Output,
}

/// 显示形状：与层大小乘积一致的一维或二维排布
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VShape {
    Flat(usize),
    Grid(usize, usize),
}

impl VShape {
    /// 该显示形状覆盖的单元数
    pub fn size(&self) -> usize {
        match self {
            Self::Flat(n) => *n,
            Self::Grid(r, c) => r * c,
        }
    }
}

/// 层的配置项：显式字段替代动态参数表，构造时统一校验
#[derive(Clone, Default)]
pub struct LayerConfig {
    /// 显示形状覆盖（默认从shape推导）
    pub vshape: Option<VShape>,
    /// 激活函数（默认linear）
    pub activation: Activation,
    /// 丢弃率，取值[0,1]（默认0，即不丢弃）
    pub dropout: f32,
}

impl LayerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置显示形状
    pub fn vshape(mut self, vshape: VShape) -> Self {
        self.vshape = Some(vshape);
        self
    }

    /// 设置激活函数
    pub fn activation(mut self, activation: Activation) -> Self {
        self.activation = activation;
        self
    }

    /// 设置丢弃率
    pub fn dropout(mut self, dropout: f32) -> Self {
        self.dropout = dropout;
        self
    }
}

/// Layer - 带形状与激活配置的命名节点
///
/// 层本身不拥有与之相连的层：连接以索引句柄记录，
/// 所有层的生命周期都由所属的Network独占管理。
pub struct Layer {
    name: String,
    shape: Vec<usize>,
    /// shape各维的乘积，构造时算定后不再变
    size: usize,
    vshape: VShape,
    activation: Activation,
    dropout: f32,
    pub(in crate::nn) incoming: Vec<LayerId>,
    pub(in crate::nn) outgoing: Vec<LayerId>,
    /// 编译时记下的子模型（原输入到本层累计输出的映射）
    pub(in crate::nn) compiled: Option<LayerModel>,
}

impl Layer {
    /// 创建新层
    ///
    /// # 参数
    /// - `name`: 非空层名（网络内唯一性由Network构造时校验）
    /// - `shape`: 各维均为正整数的形状；单个正整数等价于一维形状
    /// - `config`: 显示形状/激活/丢弃率配置
    ///
    /// 名称为空、形状非法、显示形状与层大小不兼容、
    /// 丢弃率超出[0,1]时返回错误。
    pub fn new(name: &str, shape: &[usize], config: LayerConfig) -> Result<Self, NetworkError> {
        if name.is_empty() {
            return Err(NetworkError::InvalidLayer("层名不能为空".to_string()));
        }
        if shape.is_empty() || shape.iter().any(|&d| d == 0) {
            return Err(NetworkError::InvalidLayer(format!("非法形状: {shape:?}")));
        }
        let size = shape.iter().product();

        let vshape = match config.vshape {
            Some(vs) => {
                if vs.size() != size {
                    return Err(NetworkError::InvalidLayer(format!(
                        "显示形状{vs:?}与大小为{size}的层不兼容"
                    )));
                }
                vs
            }
            None => match shape {
                [n] => VShape::Flat(*n),
                [r, c] => VShape::Grid(*r, *c),
                _ => VShape::Flat(size),
            },
        };

        if !(0.0..=1.0).contains(&config.dropout) {
            return Err(NetworkError::InvalidLayer(format!(
                "非法丢弃率: {}",
                config.dropout
            )));
        }

        Ok(Self {
            name: name.to_string(),
            shape: shape.to_vec(),
            size,
            vshape,
            activation: config.activation,
            dropout: config.dropout,
            incoming: Vec::new(),
            outgoing: Vec::new(),
            compiled: None,
        })
    }

    /// 便捷构造：默认配置（线性激活、无丢弃）
    pub fn with_defaults(name: &str, shape: &[usize]) -> Result<Self, NetworkError> {
        Self::new(name, shape, LayerConfig::default())
    }

    // ========== 基础访问器 ==========

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn vshape(&self) -> &VShape {
        &self.vshape
    }

    pub fn activation(&self) -> &Activation {
        &self.activation
    }

    pub fn dropout(&self) -> f32 {
        self.dropout
    }

    pub fn incoming_connections(&self) -> &[LayerId] {
        &self.incoming
    }

    pub fn outgoing_connections(&self) -> &[LayerId] {
        &self.outgoing
    }

    /// 派生类别：每次调用都从当前连接数重新推导，
    /// 因此总能反映connect之后的最新拓扑
    pub fn kind(&self) -> LayerKind {
        match (self.incoming.is_empty(), self.outgoing.is_empty()) {
            (true, true) => LayerKind::Unconnected,
            (true, false) => LayerKind::Input,
            (false, false) => LayerKind::Hidden,
            (false, true) => LayerKind::Output,
        }
    }

    /// 展开为执行器的原语序列
    ///
    /// 非输入层贡献一个全连接原语（宽度为本层大小、带本层激活）；
    /// 丢弃率大于0时再追加一个丢弃原语。
    /// 输入层只确立输入形状，不贡献全连接原语。
    pub fn layer_ops(&self) -> Vec<LayerOp> {
        let mut ops = Vec::new();
        if self.kind() != LayerKind::Input {
            ops.push(LayerOp::Dense {
                units: self.size,
                activation: self.activation.clone(),
            });
        }
        if self.dropout > 0.0 {
            ops.push(LayerOp::Dropout { rate: self.dropout });
        }
        ops
    }

    /// 本层的激活输出：委托给编译时记下的子模型
    pub fn output(&self, input: &[f32]) -> Result<Vec<f32>, NetworkError> {
        match &self.compiled {
            Some(model) => model.forward(input),
            None => Err(NetworkError::NotCompiled),
        }
    }

    /// 本层是否已有编译好的子模型
    pub fn is_compiled(&self) -> bool {
        self.compiled.is_some()
    }
}

impl fmt::Debug for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layer")
            .field("name", &self.name)
            .field("shape", &self.shape)
            .field("kind", &self.kind())
            .finish()
    }
}
