/*
 * @Author       : 老董
 * @Date         : 2026-02-10
 * @Description  : Layer / Network 的展示输出
 */

use super::layer::{Layer, LayerKind, VShape};
use super::network::Network;
use std::fmt;

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Unconnected => "unconnected",
            Self::Input => "input",
            Self::Hidden => "hidden",
            Self::Output => "output",
        };
        write!(f, "{text}")
    }
}

impl fmt::Display for VShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flat(n) => write!(f, "[{n}]"),
            Self::Grid(r, c) => write!(f, "[{r}, {c}]"),
        }
    }
}

impl fmt::Display for Layer {
    /// 单行层摘要：名称（类别）、形状、大小、显示形状、激活、丢弃率
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) 形状: {:?} 大小: {} 显示形状: {} 激活: {} 丢弃率: {}",
            self.name(),
            self.kind(),
            self.shape(),
            self.size(),
            self.vshape(),
            self.activation(),
            self.dropout()
        )
    }
}

impl Network {
    /// 多行网络摘要：每层一行，带出边信息；已编译时附各链概要
    pub fn summary(&self) -> String {
        let mut out = format!("网络: {}\n", self.name());
        for layer in self.layers() {
            out.push_str(&format!("  {layer}"));
            if !layer.outgoing_connections().is_empty() {
                let targets: Vec<&str> = layer
                    .outgoing_connections()
                    .iter()
                    .filter_map(|&id| self.layer(id).map(Layer::name))
                    .collect();
                out.push_str(&format!(" -> {targets:?}"));
            }
            out.push('\n');
        }
        if let Some(model) = self.model() {
            for chain in model.chains() {
                let input_name = self
                    .layer(chain.input)
                    .map(Layer::name)
                    .unwrap_or("?");
                out.push_str(&format!(
                    "  已编译链: {} {:?} -> 宽度{}\n",
                    input_name, chain.input_shape, chain.output_len
                ));
            }
        }
        out
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}

impl fmt::Debug for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Network")
            .field("name", &self.name())
            .field("layers", &self.layers_count())
            .field("compiled", &self.is_compiled())
            .finish()
    }
}
