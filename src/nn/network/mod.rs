/*
 * @Author       : 老董
 * @Date         : 2026-02-10
 * @Description  : Network 模块：层集合、连接操作与编译
 *
 * 公开 API：
 * - `Network`: 层的所有者，提供 connect/compile/propagate 及数据集管理
 * - `NetworkError`: 错误类型
 */

mod compile;
mod core;
mod dataset;
mod error;

pub use error::NetworkError;

use crate::data::Dataset;
use crate::nn::backend::CompiledModel;
use crate::nn::layer::{Layer, LayerId};
use rand::rngs::StdRng;
use std::collections::HashMap;

/// Network - 命名层的所有者集合
///
/// 层的成员关系在构造时确定，此后不可增删；
/// 连接与编译状态在构造后原地修改。
/// 数据集状态独立于图状态，可随时加载/重载/重洗而不影响已编译的模型。
pub struct Network {
    name: String,
    layers: Vec<Layer>,
    /// 名称到层句柄的查找表，构造时建好
    layer_dict: HashMap<String, LayerId>,
    /// 编译产物，compile成功前不存在
    model: Option<CompiledModel>,
    dataset: Option<Dataset>,
    /// 固定种子时存在，编译期参数初始化由它派生
    rng: Option<StdRng>,
}
