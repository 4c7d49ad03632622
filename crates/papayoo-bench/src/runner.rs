use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use papayoo_core::model::player::Seat;
use papayoo_core::model::suit::Suit;
use papayoo_core::{PapayooError, RoundEngine};
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng, rngs::StdRng};
use serde::Serialize;
use thiserror::Error;
use tracing::{Level, event};

use crate::config::{PlayoutConfig, ResolvedOutputs};

/// Safety cap on decisions per round: 12 passes plus 60 plays.
const MAX_STEPS_PER_ROUND: usize = 72;

/// Plays seeded rounds with uniformly random legal actions and records the results.
pub struct PlayoutRunner {
    config: PlayoutConfig,
    outputs: ResolvedOutputs,
    logging_enabled: bool,
}

/// Summary details returned after a run.
#[derive(Debug)]
pub struct RunSummary {
    pub rounds_played: usize,
    pub rows_written: usize,
    pub jsonl_path: PathBuf,
    pub summary_path: PathBuf,
    pub stats: PlayoutStats,
}

/// One JSONL row per finished round.
#[derive(Debug, Clone, Serialize)]
pub struct RoundRow<'a> {
    pub run_id: &'a str,
    pub round_index: usize,
    /// Master seed of the run. Replaying it reproduces every round in order.
    pub seed: u64,
    pub dealer: Seat,
    pub trump: Option<Suit>,
    pub steps: usize,
    pub tricks: usize,
    pub scores: [u32; 4],
    pub rewards: [f64; 4],
}

/// Per-seat aggregates across a run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayoutStats {
    rounds: usize,
    score_totals: [u64; 4],
    reward_totals: [f64; 4],
    first_places: [f64; 4],
}

impl PlayoutStats {
    pub fn record(&mut self, scores: [u32; 4], rewards: [f64; 4]) {
        self.rounds += 1;
        let best = scores.iter().copied().min().unwrap_or_default();
        let leaders = scores.iter().filter(|s| **s == best).count() as f64;
        for seat in 0..4 {
            self.score_totals[seat] += u64::from(scores[seat]);
            self.reward_totals[seat] += rewards[seat];
            if scores[seat] == best {
                self.first_places[seat] += 1.0 / leaders;
            }
        }
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn mean_score(&self, seat: Seat) -> f64 {
        self.mean(self.score_totals[seat.index()] as f64)
    }

    pub fn mean_reward(&self, seat: Seat) -> f64 {
        self.mean(self.reward_totals[seat.index()])
    }

    pub fn first_place_share(&self, seat: Seat) -> f64 {
        self.mean(self.first_places[seat.index()])
    }

    fn mean(&self, total: f64) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            total / self.rounds as f64
        }
    }

    pub fn to_markdown(&self, run_id: &str) -> String {
        let mut out = format!("# Papayoo playout `{run_id}`\n\nRounds: {}\n\n", self.rounds);
        out.push_str("| Seat | Mean score | Mean reward | First place |\n");
        out.push_str("|------|-----------:|------------:|------------:|\n");
        for seat in Seat::LOOP {
            out.push_str(&format!(
                "| {seat} | {:.2} | {:+.3} | {:.1}% |\n",
                self.mean_score(seat),
                self.mean_reward(seat),
                self.first_place_share(seat) * 100.0
            ));
        }
        out
    }
}

impl PlayoutRunner {
    pub fn new(config: PlayoutConfig, outputs: ResolvedOutputs) -> Self {
        Self {
            logging_enabled: config.logging.enable_structured,
            config,
            outputs,
        }
    }

    /// Execute every round, streaming JSONL rows to disk.
    pub fn run(&self) -> Result<RunSummary, RunnerError> {
        ensure_parent(self.outputs.jsonl.parent())?;
        ensure_parent(self.outputs.summary_md.parent())?;

        let mut writer = BufWriter::new(File::create(&self.outputs.jsonl)?);
        let mut seeds = StdRng::seed_from_u64(self.config.rounds.seed.unwrap_or(0));
        let mut engine = RoundEngine::with_seed(seeds.next_u64());
        let mut policy = StdRng::seed_from_u64(seeds.next_u64());
        let mut stats = PlayoutStats::default();
        let mut rows_written = 0usize;

        for round_index in 0..self.config.rounds.count {
            let row = self.play_round(&mut engine, &mut policy, round_index)?;
            stats.record(row.scores, row.rewards);
            serde_json::to_writer(&mut writer, &row)?;
            writer.write_all(b"\n")?;
            rows_written += 1;
        }
        writer.flush()?;

        fs::write(
            &self.outputs.summary_md,
            stats.to_markdown(&self.config.run_id),
        )?;

        Ok(RunSummary {
            rounds_played: stats.rounds(),
            rows_written,
            jsonl_path: self.outputs.jsonl.clone(),
            summary_path: self.outputs.summary_md.clone(),
            stats,
        })
    }

    fn play_round(
        &self,
        engine: &mut RoundEngine,
        policy: &mut StdRng,
        round_index: usize,
    ) -> Result<RoundRow<'_>, RunnerError> {
        let start = engine.reset();

        for step in 1..=MAX_STEPS_PER_ROUND {
            let actions = engine.legal_actions();
            let action = *actions
                .choose(policy)
                .ok_or(RunnerError::NoLegalAction { round_index, step })?;
            let outcome = engine.step(action)?;
            if !outcome.done {
                continue;
            }

            let row = RoundRow {
                run_id: &self.config.run_id,
                round_index,
                seed: self.config.rounds.seed.unwrap_or(0),
                dealer: start.dealer,
                trump: outcome.state.trump,
                steps: step,
                tricks: outcome.state.tricks_completed,
                scores: outcome.state.scores,
                rewards: outcome.rewards,
            };
            if self.logging_enabled {
                event!(
                    Level::INFO,
                    round_index,
                    dealer = %row.dealer,
                    scores = ?row.scores,
                    rewards = ?row.rewards,
                    "playout round finished"
                );
            }
            return Ok(row);
        }

        Err(RunnerError::RoundDidNotFinish { round_index })
    }
}

fn ensure_parent(parent: Option<&Path>) -> Result<(), RunnerError> {
    if let Some(dir) = parent.filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode row: {0}")]
    Json(#[from] serde_json::Error),
    #[error("engine rejected an action: {0}")]
    Engine(#[from] PapayooError),
    #[error("round {round_index} offered no legal action at step {step}")]
    NoLegalAction { round_index: usize, step: usize },
    #[error("round {round_index} did not finish within the step limit")]
    RoundDidNotFinish { round_index: usize },
}
