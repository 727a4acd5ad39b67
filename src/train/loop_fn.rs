use log::{debug, info};
use rand::Rng;

use crate::data::example::Example;
use crate::error::{NnError, Result};
use crate::network::network::Network;
use crate::network::weights::Checkpoint;
use crate::train::checkpoint_stats::CheckpointStats;
use crate::train::report::{TrainOutcome, TrainReport};
use crate::train::train_config::TrainConfig;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` for up to `config.iterations` single-example SGD steps.
///
/// Each step draws one example uniformly, with replacement, from
/// `training` using the network's training generator.
///
/// # Validation
/// With `validation` set, the validation loss is computed after every
/// `config.checkpoint_interval` completed steps. A strictly lower loss
/// becomes the new checkpoint; anything else ends training at once. When the
/// loop ends, either way, the network is reset to the checkpoint weights. If
/// the loop ends before the first evaluation, the final weights are scored
/// and kept as the checkpoint.
///
/// # Errors
/// - `EmptyDataset` if `training` (or a given `validation`) is empty
/// - `InvalidConfig` if validating with `checkpoint_interval == 0`
/// - `ShapeMismatch` from any example whose lengths don't fit the network
pub fn train_loop(
    network: &mut Network,
    training: &[Example],
    validation: Option<&[Example]>,
    config: &TrainConfig,
) -> Result<TrainReport> {
    if training.is_empty() {
        return Err(NnError::EmptyDataset { what: "training" });
    }
    if let Some(val) = validation {
        if val.is_empty() {
            return Err(NnError::EmptyDataset { what: "validation" });
        }
        if config.checkpoint_interval == 0 {
            return Err(NnError::InvalidConfig(
                "checkpoint_interval must be at least 1".to_string(),
            ));
        }
    }

    let mut best: Option<Checkpoint> = None;
    let mut checkpoints = 0;
    let mut iterations_run = 0;
    let mut outcome = TrainOutcome::Exhausted;

    for step in 1..=config.iterations {
        run_one_step(network, training)?;
        iterations_run = step;

        let Some(val) = validation else { continue };
        if step % config.checkpoint_interval != 0 {
            continue;
        }

        // ── Checkpoint evaluation ─────────────────────────────────────────
        let loss = network.calculate_loss(val)?;
        checkpoints += 1;
        let improved = best.as_ref().map_or(true, |b| loss < b.validation_loss);

        if improved {
            best = Some(Checkpoint {
                weights: network.weights.clone(),
                validation_loss: loss,
                iteration: step,
            });
        }
        let best_loss = best.as_ref().map_or(loss, |b| b.validation_loss);
        debug!("iteration {step}/{}: validation loss {loss:.6} (best {best_loss:.6})", config.iterations);

        if let Some(ref tx) = config.progress_tx {
            // A vanished receiver only means nobody is watching.
            let _ = tx.send(CheckpointStats {
                iteration: step,
                total_iterations: config.iterations,
                validation_loss: loss,
                best_loss,
                improved,
            });
        }

        if !improved {
            info!("early stop at iteration {step}: validation loss {loss:.6} did not beat {best_loss:.6}");
            outcome = TrainOutcome::EarlyStopped;
            break;
        }
    }

    let best_validation_loss = match validation {
        Some(val) => Some(restore_best(network, val, best, iterations_run)?),
        None => None,
    };

    info!("training finished after {iterations_run} iterations ({outcome:?})");
    Ok(TrainReport {
        iterations_run,
        outcome,
        best_validation_loss,
        checkpoints,
    })
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// One SGD step on a uniformly sampled example.
fn run_one_step(network: &mut Network, training: &[Example]) -> Result<()> {
    let idx = network.rng.gen_range(0..training.len());
    let example = &training[idx];
    network.backpropagation(&example.input, &example.target)
}

/// Puts the checkpoint weights back into the network and returns their loss.
/// Without a checkpoint the current weights are scored and kept.
fn restore_best(
    network: &mut Network,
    validation: &[Example],
    best: Option<Checkpoint>,
    iterations_run: usize,
) -> Result<f64> {
    let checkpoint = match best {
        Some(checkpoint) => checkpoint,
        None => Checkpoint {
            weights: network.weights.clone(),
            validation_loss: network.calculate_loss(validation)?,
            iteration: iterations_run,
        },
    };
    debug!(
        "restoring checkpoint from iteration {} (validation loss {:.6})",
        checkpoint.iteration, checkpoint.validation_loss
    );
    network.weights = checkpoint.weights;
    Ok(checkpoint.validation_loss)
}
