/*
 * @Author       : 老董
 * @Date         : 2026-02-12
 * @Description  : 声明式建模演示：XOR形状的网络
 *
 * 运行：cargo run --example xor
 */
use only_keras::nn::{
    Activation, CompileConfig, Layer, LayerConfig, Loss, Metric, Network, NetworkError,
    OptimizerSpec,
};

fn main() -> Result<(), NetworkError> {
    // 声明三个命名层，再用显式连接搭出 input1 -> hidden -> output1
    let mut net = Network::with_name(
        "xor",
        vec![
            Layer::with_defaults("input1", &[2])?,
            Layer::new(
                "hidden",
                &[2],
                LayerConfig::new().activation(Activation::Sigmoid),
            )?,
            Layer::new(
                "output1",
                &[1],
                LayerConfig::new().activation(Activation::Sigmoid),
            )?,
        ],
    )?;
    net.connect("input1", "hidden")?;
    net.connect("hidden", "output1")?;

    // 编译成可前向求值的模型
    net.compile(
        CompileConfig::new(Loss::MeanSquaredError, OptimizerSpec::sgd_momentum(0.3, 0.9))
            .metric(Metric::Accuracy),
    )?;
    println!("{net}");

    for input in [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]] {
        let output = net.propagate(&input)?;
        println!("{input:?} -> {output:?}");
    }

    // 网络的可序列化描述
    println!("{}", net.describe().to_json().expect("序列化网络描述失败"));
    Ok(())
}
