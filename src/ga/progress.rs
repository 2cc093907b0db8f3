//! Per-generation progress reporting.
//!
//! The runner hands a [`GenerationReport`] to a [`ProgressSink`] once per
//! generation, inline, before the next generation starts. A slow sink
//! (e.g. an interactive renderer) therefore paces the run.

use super::types::Candidate;
use crate::graph::Graph;

/// Snapshot of one completed generation.
///
/// Borrowed from the runner; copy out whatever must outlive the callback.
#[derive(Debug, Clone, Copy)]
pub struct GenerationReport<'a> {
    /// The graph being covered.
    pub graph: &'a Graph,
    /// Rank-0 candidate of the generation that was just replaced.
    pub best: &'a Candidate,
    /// Zero-based generation index.
    pub generation: usize,
    /// Fitness of `best`.
    pub best_fitness: f64,
}

/// Receives generation reports.
///
/// Implemented for any `FnMut(&GenerationReport)` closure.
pub trait ProgressSink {
    /// Called once per generation after the population is replaced.
    fn on_generation(&mut self, report: &GenerationReport<'_>);
}

impl<F> ProgressSink for F
where
    F: FnMut(&GenerationReport<'_>),
{
    fn on_generation(&mut self, report: &GenerationReport<'_>) {
        self(report)
    }
}

/// A sink that ignores every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_generation(&mut self, _report: &GenerationReport<'_>) {}
}
