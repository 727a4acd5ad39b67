// Predicts the quadrant of a point on the unit circle, training with a
// held-out validation set and early stopping.
//
//   RUST_LOG=debug cargo run --example quadrants
use std::f64::consts::PI;
use std::sync::mpsc;

use shallow_nn::{
    train_loop, ActivationFunction, Example, Network, NetworkConfig, TrainConfig,
};

fn point(degrees: f64) -> Example {
    let radians = degrees * PI / 180.0;
    let quadrant = (degrees / 90.0) as usize % 4;
    let mut target = vec![0.0; 4];
    target[quadrant] = 1.0;
    Example::new(vec![radians.cos(), radians.sin()], target)
}

fn main() -> shallow_nn::Result<()> {
    env_logger::init();

    // Every 5 degrees for training, offset by 2.5 for validation.
    let training: Vec<Example> = (0..72).map(|i| point(i as f64 * 5.0)).collect();
    let validation: Vec<Example> = (0..72).map(|i| point(i as f64 * 5.0 + 2.5)).collect();

    let config = NetworkConfig::new(2, 8, 4, 0.1).with_activation(ActivationFunction::Sigmoid);
    let mut network = Network::with_seeds(config, 7, 11)?;

    let (tx, rx) = mpsc::channel();
    let train_config = TrainConfig::with_checkpoints(200_000, 5_000).with_progress(tx);
    let report = train_loop(&mut network, &training, Some(&validation), &train_config)?;
    drop(train_config);

    for stats in rx.iter() {
        println!(
            "iter {:>7}: val loss {:.5}{}",
            stats.iteration,
            stats.validation_loss,
            if stats.improved { " *" } else { "" }
        );
    }
    println!("{report:?}");
    println!("validation accuracy: {:.1}%", network.accuracy(&validation)? * 100.0);

    for degrees in [30.0, 120.0, 200.0, 300.0] {
        let x = point(degrees);
        println!("{degrees:>5} deg -> quadrant {}", network.classify(&x.input)? + 1);
    }
    Ok(())
}
