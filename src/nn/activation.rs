/*
 * @Author       : 老董
 * @Date         : 2026-02-10
 * @Description  : 激活函数枚举（含用户自定义变换）
 */

use ndarray::Array1;
use std::fmt;
use std::rc::Rc;

/// 激活函数
///
/// 固定集合为relu/sigmoid/linear/softmax，
/// 另支持用户提供的自定义变换（对整层输出向量一并变换）。
#[derive(Clone, Default)]
pub enum Activation {
    Relu,
    Sigmoid,
    #[default]
    Linear,
    Softmax,
    /// 用户自定义变换：输入整层输出，返回同长度向量
    Custom(Rc<dyn Fn(&[f32]) -> Vec<f32>>),
}

impl Activation {
    /// 按名称解析激活函数（未知名称返回None）
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "relu" => Some(Self::Relu),
            "sigmoid" => Some(Self::Sigmoid),
            "linear" => Some(Self::Linear),
            "softmax" => Some(Self::Softmax),
            _ => None,
        }
    }

    /// 激活函数名称（自定义变换统一显示为custom）
    pub fn name(&self) -> &'static str {
        match self {
            Self::Relu => "relu",
            Self::Sigmoid => "sigmoid",
            Self::Linear => "linear",
            Self::Softmax => "softmax",
            Self::Custom(_) => "custom",
        }
    }

    /// 对一层的输出施加激活
    pub fn apply(&self, x: Array1<f32>) -> Array1<f32> {
        match self {
            Self::Relu => x.mapv(|v| v.max(0.0)),
            Self::Sigmoid => x.mapv(|v| 1.0 / (1.0 + (-v).exp())),
            Self::Linear => x,
            Self::Softmax => {
                // 数值稳定：先减去最大值再取指数
                let max = x.iter().copied().fold(f32::NEG_INFINITY, f32::max);
                let exp = x.mapv(|v| (v - max).exp());
                let sum = exp.sum();
                exp / sum
            }
            Self::Custom(f) => {
                let out = f(x.as_slice().expect("激活输入必须是连续内存"));
                Array1::from_vec(out)
            }
        }
    }
}

impl PartialEq for Activation {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            // 自定义变换只在指向同一个闭包时视为相等
            (Self::Custom(a), Self::Custom(b)) => Rc::ptr_eq(a, b),
            _ => self.name() == other.name(),
        }
    }
}

impl fmt::Debug for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
