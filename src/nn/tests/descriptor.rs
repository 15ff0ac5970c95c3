use crate::nn::{
    Activation, Layer, LayerConfig, LayerOpDescriptor, Network, NetworkDescriptor,
};

fn described_net() -> Network {
    let mut net = Network::with_name(
        "xor",
        vec![
            Layer::with_defaults("input1", &[2]).unwrap(),
            Layer::new(
                "hidden",
                &[2],
                LayerConfig::new()
                    .activation(Activation::Sigmoid)
                    .dropout(0.25),
            )
            .unwrap(),
            Layer::new(
                "output1",
                &[1],
                LayerConfig::new().activation(Activation::Sigmoid),
            )
            .unwrap(),
        ],
    )
    .unwrap();
    net.connect("input1", "hidden").unwrap();
    net.connect("hidden", "output1").unwrap();
    net
}

#[test]
fn test_describe_layers_and_ops() {
    let desc = described_net().describe();
    assert_eq!(desc.name, "xor");
    assert_eq!(desc.version, env!("CARGO_PKG_VERSION"));
    assert_eq!(desc.layers.len(), 3);

    let input = &desc.layers[0];
    assert_eq!(input.kind, "input");
    // 输入层不贡献执行原语，只确立输入形状
    assert!(input.ops.is_empty());
    assert_eq!(input.outgoing, vec!["hidden"]);
    assert!(input.incoming.is_empty());

    let hidden = &desc.layers[1];
    assert_eq!(hidden.kind, "hidden");
    assert_eq!(hidden.incoming, vec!["input1"]);
    assert_eq!(
        hidden.ops,
        vec![
            LayerOpDescriptor::Dense {
                units: 2,
                activation: "sigmoid".to_string()
            },
            LayerOpDescriptor::Dropout { rate: 0.25 },
        ]
    );

    let output = &desc.layers[2];
    assert_eq!(output.kind, "output");
    assert_eq!(output.vshape, vec![1]);
}

#[test]
fn test_descriptor_json_roundtrip() {
    let desc = described_net().describe();
    let json = desc.to_json().unwrap();
    let parsed = NetworkDescriptor::from_json(&json).unwrap();
    assert_eq!(parsed.name, "xor");
    assert_eq!(parsed.layers.len(), 3);
    assert_eq!(parsed.layers[1].activation, "sigmoid");
    assert_eq!(parsed.layers[1].dropout, 0.25);
    assert_eq!(parsed.layers[1].ops, desc.layers[1].ops);
}
