/*
 * @Author       : 老董
 * @Date         : 2026-02-10
 * @Description  : 负责网络（Network）的声明式建模与编译
 */

mod activation;
mod backend;
mod config;
mod descriptor;
mod display;
mod layer;
mod network;

pub use activation::Activation;
pub use backend::{CompiledModel, Init, LayerModel, LayerOp};
pub use config::{CompileConfig, Loss, Metric, OptimizerSpec};
pub use descriptor::{LayerDescriptor, LayerOpDescriptor, NetworkDescriptor};
pub use layer::{Layer, LayerConfig, LayerId, LayerKind, VShape};
pub use network::{Network, NetworkError};

#[cfg(test)]
mod tests;
