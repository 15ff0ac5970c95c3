/*
 * @Author       : 老董
 * @Date         : 2026-02-10
 * @Description  : 网络描述符（Network Descriptor）
 *                 统一的中间表示（IR），用于序列化、展示和调试输出
 */

use serde::{Deserialize, Serialize};

/// 网络的可序列化描述
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkDescriptor {
    /// 格式版本（用于向后兼容）
    pub version: String,
    /// 网络名称
    pub name: String,
    /// 所有层描述
    pub layers: Vec<LayerDescriptor>,
}

/// 层描述
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerDescriptor {
    /// 层名称
    pub name: String,
    /// 派生类别（input/hidden/output/unconnected）
    pub kind: String,
    /// 声明形状
    pub shape: Vec<usize>,
    /// 单元数（形状各维乘积）
    pub size: usize,
    /// 显示形状
    pub vshape: Vec<usize>,
    /// 激活函数名
    pub activation: String,
    /// 丢弃率
    pub dropout: f32,
    /// 入边来源层名
    pub incoming: Vec<String>,
    /// 出边目标层名
    pub outgoing: Vec<String>,
    /// 展开出的执行原语
    pub ops: Vec<LayerOpDescriptor>,
}

/// 执行原语描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LayerOpDescriptor {
    Dense { units: usize, activation: String },
    Dropout { rate: f32 },
}

impl NetworkDescriptor {
    /// 创建新的网络描述符
    pub fn new(name: &str) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            name: name.to_string(),
            layers: Vec::new(),
        }
    }

    /// 添加层描述
    pub fn add_layer(&mut self, layer: LayerDescriptor) {
        self.layers.push(layer);
    }

    /// 转换为 JSON 字符串
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// 从 JSON 字符串解析
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
