use crate::assert_err;
use crate::nn::{Activation, Layer, LayerConfig, LayerKind, LayerOp, NetworkError, VShape};

#[test]
fn test_layer_creation_defaults() {
    let layer = Layer::with_defaults("input1", &[2]).unwrap();
    assert_eq!(layer.name(), "input1");
    assert_eq!(layer.shape(), &[2]);
    assert_eq!(layer.size(), 2);
    assert_eq!(layer.vshape(), &VShape::Flat(2));
    assert_eq!(layer.activation().name(), "linear");
    assert_eq!(layer.dropout(), 0.0);
    assert_eq!(layer.kind(), LayerKind::Unconnected);
    assert!(!layer.is_compiled());
}

#[test]
fn test_layer_size_is_shape_product() {
    let cube = Layer::with_defaults("cube", &[2, 2, 2]).unwrap();
    assert_eq!(cube.size(), 8);
    // 高于二维时默认显示形状坍缩成一维
    assert_eq!(cube.vshape(), &VShape::Flat(8));

    let grid = Layer::with_defaults("grid", &[3, 4]).unwrap();
    assert_eq!(grid.size(), 12);
    assert_eq!(grid.vshape(), &VShape::Grid(3, 4));
}

#[test]
fn test_layer_vshape_override() {
    let layer = Layer::new(
        "input1",
        &[64],
        LayerConfig::new().vshape(VShape::Grid(8, 8)),
    )
    .unwrap();
    assert_eq!(layer.vshape(), &VShape::Grid(8, 8));

    // 乘积不等于层大小的显示形状被拒绝
    assert_err!(
        Layer::new("bad", &[64], LayerConfig::new().vshape(VShape::Grid(8, 9))),
        NetworkError::InvalidLayer(msg) if msg.contains("显示形状")
    );
    assert_err!(
        Layer::new("bad", &[64], LayerConfig::new().vshape(VShape::Flat(63))),
        NetworkError::InvalidLayer(_)
    );
}

#[test]
fn test_layer_invalid_name_and_shape() {
    assert_err!(
        Layer::with_defaults("", &[2]),
        NetworkError::InvalidLayer(msg) if msg.contains("层名")
    );
    assert_err!(
        Layer::with_defaults("zero", &[0]),
        NetworkError::InvalidLayer(msg) if msg.contains("形状")
    );
    assert_err!(
        Layer::with_defaults("zero_dim", &[2, 0]),
        NetworkError::InvalidLayer(_)
    );
    assert_err!(
        Layer::with_defaults("empty", &[]),
        NetworkError::InvalidLayer(_)
    );
}

#[test]
fn test_layer_invalid_dropout() {
    assert_err!(
        Layer::new("d", &[2], LayerConfig::new().dropout(1.5)),
        NetworkError::InvalidLayer(msg) if msg.contains("丢弃率")
    );
    assert_err!(
        Layer::new("d", &[2], LayerConfig::new().dropout(-0.1)),
        NetworkError::InvalidLayer(_)
    );
    // 边界值0和1都合法
    assert!(Layer::new("d0", &[2], LayerConfig::new().dropout(0.0)).is_ok());
    assert!(Layer::new("d1", &[2], LayerConfig::new().dropout(1.0)).is_ok());
}

#[test]
fn test_layer_ops_expansion() {
    let layer = Layer::new(
        "hidden",
        &[16],
        LayerConfig::new()
            .activation(Activation::Relu)
            .dropout(0.5),
    )
    .unwrap();
    let ops = layer.layer_ops();
    assert_eq!(ops.len(), 2);
    match &ops[0] {
        LayerOp::Dense { units, activation } => {
            assert_eq!(*units, 16);
            assert_eq!(activation.name(), "relu");
        }
        LayerOp::Dropout { .. } => panic!("第一个原语应是全连接"),
    }
    match &ops[1] {
        LayerOp::Dropout { rate } => assert_eq!(*rate, 0.5),
        LayerOp::Dense { .. } => panic!("第二个原语应是丢弃"),
    }

    // 无丢弃时只有全连接原语
    let plain = Layer::with_defaults("plain", &[4]).unwrap();
    assert_eq!(plain.layer_ops().len(), 1);
}

#[test]
fn test_layer_output_before_compile_fails() {
    let layer = Layer::with_defaults("lonely", &[2]).unwrap();
    assert_err!(layer.output(&[0.0, 0.0]), NetworkError::NotCompiled);
}
