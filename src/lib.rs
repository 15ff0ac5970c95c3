//! # Only Keras
//!
//! `only_keras`项目旨在用纯rust仿造[keras](https://keras.io)早期的声明式建模API：
//! 以命名的层（Layer）声明网络结构，用显式连接（connect）搭建拓扑，
//! 再编译（compile）成可前向求值的模型。训练与梯度计算不在本项目范围内
//! （那是姊妹项目[only_torch](https://github.com/dbsxdbsx/only_torch)的领域）。
//!
//! # 示例
//! ```
//! use only_keras::nn::{Layer, Network};
//!
//! let net = Network::new(vec![Layer::with_defaults("input1", &[2]).unwrap()]).unwrap();
//! assert_eq!(net.layers_count(), 1);
//! assert_eq!(net.get("input1").unwrap().size(), 2);
//! ```

pub mod data;
pub mod nn;
pub mod utils;
