// XOR driver: loads `xor-model.txt` (or the path given as the first
// argument) if present, otherwise trains a fresh network and saves it.
// Set RUST_LOG=debug to watch training.
use log::{error, info};
use shallow_nn::{examples_from_pairs, ActivationFunction, Network, NetworkConfig};

const ITERATIONS: usize = 100_000;

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> shallow_nn::Result<()> {
    let model_path = std::env::args().nth(1).unwrap_or_else(|| "xor-model.txt".to_string());

    let config = NetworkConfig::new(2, 3, 1, 0.1).with_activation(ActivationFunction::Sigmoid);
    let mut network = Network::new(config)?;

    let training = examples_from_pairs(vec![
        (vec![0.0, 0.0], vec![0.0]),
        (vec![0.0, 1.0], vec![1.0]),
        (vec![1.0, 0.0], vec![1.0]),
        (vec![1.0, 1.0], vec![0.0]),
    ]);

    if !network.load_model(&model_path)? {
        info!("training for {ITERATIONS} iterations");
        network.train(&training, ITERATIONS)?;
        network.save_model(&model_path)?;
        info!("model saved to {model_path}");
    }

    for example in &training {
        let output = network.predict(&example.input)?[0];
        let correct = (output > 0.5) == (example.target[0] > 0.5);
        println!(
            "Input: {:?} -> Output: {output:.4} {}",
            example.input,
            if correct { "ok" } else { "wrong" }
        );
    }
    println!("loss = {:.6}", network.calculate_loss(&training)?);
    Ok(())
}
