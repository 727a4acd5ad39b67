// Integration tests for model and config files.

use std::fs;

use shallow_nn::{ActivationFunction, HiddenGradient, Network, NetworkConfig, NnError};
use tempfile::tempdir;

fn config() -> NetworkConfig {
    NetworkConfig::new(4, 8, 3, 0.1).with_activation(ActivationFunction::Sigmoid)
}

#[test]
fn save_then_load_reproduces_outputs() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("model.txt");
    let path = path.to_str().unwrap();

    let trained = Network::with_seeds(config(), 1, 2).unwrap();
    trained.save_model(path).unwrap();

    let mut loaded = Network::with_seeds(config(), 99, 2).unwrap();
    assert_ne!(loaded.weights(), trained.weights());
    assert!(loaded.load_model(path).unwrap());
    assert_eq!(loaded.weights(), trained.weights());

    for x in [[0.1, 0.2, 0.3, 0.4], [5.1, 3.5, 1.4, 0.2], [0.0; 4]] {
        assert_eq!(loaded.predict(&x).unwrap(), trained.predict(&x).unwrap());
    }
}

#[test]
fn model_file_is_flat_whitespace_separated_text() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("model.txt");
    let net = Network::with_seeds(config(), 5, 5).unwrap();
    net.save_model(path.to_str().unwrap()).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let values: Vec<f64> = text.split_whitespace().map(|t| t.parse().unwrap()).collect();
    assert_eq!(values.len(), 4 * 8 + 8 * 3);
    assert_eq!(values[1], net.weights().input_to_hidden.data[0][1]);
    assert_eq!(values[8], net.weights().input_to_hidden.data[1][0]);
    assert_eq!(values[32 + 3], net.weights().hidden_to_output.data[1][0]);
}

#[test]
fn missing_model_file_reports_false() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.txt");
    let mut net = Network::with_seeds(config(), 1, 1).unwrap();
    let before = net.weights().clone();
    assert!(!net.load_model(path.to_str().unwrap()).unwrap());
    assert_eq!(net.weights(), &before);
}

#[test]
fn loading_a_differently_shaped_model_fails_without_touching_weights() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("small.txt");
    let path = path.to_str().unwrap();

    let small = Network::with_seeds(NetworkConfig::new(2, 3, 1, 0.1), 1, 1).unwrap();
    small.save_model(path).unwrap();

    let mut big = Network::with_seeds(config(), 1, 1).unwrap();
    let before = big.weights().clone();
    assert!(matches!(
        big.load_model(path),
        Err(NnError::ShapeMismatch { got: 9, expected: 56, .. })
    ));
    assert_eq!(big.weights(), &before);
}

#[test]
fn garbage_in_model_file_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(&path, "0.5 0.25 oops").unwrap();
    let mut net = Network::with_seeds(NetworkConfig::new(1, 1, 1, 0.1), 1, 1).unwrap();
    assert!(matches!(
        net.load_model(path.to_str().unwrap()),
        Err(NnError::Parse { position: 2, .. })
    ));
}

#[test]
fn config_json_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    let path = path.to_str().unwrap();

    let original = config()
        .with_dropout(0.25)
        .with_hidden_gradient(HiddenGradient::ActivationDerivative);
    original.save_json(path).unwrap();
    assert_eq!(NetworkConfig::load_json(path).unwrap(), original);
}

#[test]
fn invalid_config_json_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{"input_size":2,"hidden_size":3,"output_size":1,"learning_rate":0.1,"dropout_rate":1.5}"#,
    )
    .unwrap();
    assert!(matches!(
        NetworkConfig::load_json(path.to_str().unwrap()),
        Err(NnError::InvalidConfig(_))
    ));

    fs::write(&path, "not json").unwrap();
    assert!(matches!(
        NetworkConfig::load_json(path.to_str().unwrap()),
        Err(NnError::Json(_))
    ));
}

#[test]
fn unknown_activation_in_config_falls_back_to_tanh() {
    let c: NetworkConfig = serde_json::from_str(
        r#"{"input_size":2,"hidden_size":3,"output_size":1,"learning_rate":0.1,"activation":"mystery"}"#,
    )
    .unwrap();
    assert_eq!(c.activation, ActivationFunction::Tanh);
}
