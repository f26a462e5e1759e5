//! Step-driven generation of a random graph drawing.
//!
//! A [`LayoutSession`] relaxes the drawing with the force layout, removes crossing edges once,
//! then relaxes it a little more. The host calls [`LayoutSession::step`] at its own pace, for
//! example once per frame, and can render the drawing between steps.

use crate::config::ForceConfig;
use crate::drawing::{Drawing, Headless, ObjectFactory};
use crate::error::Result;
use crate::force::ForceLayout;
use crate::planarize::DeintersectStrategy;
use rand::Rng;
use serde::{Deserialize, Serialize};
use vertexlab_graph::{DegreeRange, generate_connected_graph};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionSettings {
    pub iterations_before_deintersect: usize,
    pub iterations_after_deintersect: usize,
    pub strategy: DeintersectStrategy,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            iterations_before_deintersect: 1000,
            iterations_after_deintersect: 50,
            strategy: DeintersectStrategy::ByIntersectionsCount,
        }
    }
}

/// What the last [`LayoutSession::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// One force iteration before de-intersection.
    Relaxing { iteration: usize },
    /// The de-intersection pass ran and removed `removed` edges.
    Deintersected { removed: usize },
    /// One force iteration after de-intersection.
    Settling { iteration: usize },
    Finished,
}

pub struct LayoutSession<F: ObjectFactory = Headless> {
    drawing: Drawing<F>,
    layout: ForceLayout,
    settings: SessionSettings,
    relaxed: usize,
    removed: Option<usize>,
    settled: usize,
}

impl<F: ObjectFactory> LayoutSession<F> {
    pub fn new(drawing: Drawing<F>, layout: ForceLayout, settings: SessionSettings) -> Self {
        Self {
            drawing,
            layout,
            settings,
            relaxed: 0,
            removed: None,
            settled: 0,
        }
    }

    pub fn step(&mut self) -> Result<SessionPhase> {
        if self.relaxed < self.settings.iterations_before_deintersect {
            self.layout.iterate(&mut self.drawing);
            self.relaxed += 1;
            return Ok(SessionPhase::Relaxing {
                iteration: self.relaxed,
            });
        }

        if self.removed.is_none() {
            let crossings = self.drawing.intersection_count();
            let removed = self.settings.strategy.run(&mut self.drawing)?;
            self.removed = Some(removed);
            tracing::debug!(
                crossings,
                removed,
                strategy = ?self.settings.strategy,
                "layout session de-intersected"
            );
            return Ok(SessionPhase::Deintersected { removed });
        }

        if self.settled < self.settings.iterations_after_deintersect {
            self.layout.iterate(&mut self.drawing);
            self.settled += 1;
            if self.settled == self.settings.iterations_after_deintersect {
                tracing::debug!(
                    nodes = self.drawing.node_count(),
                    edges = self.drawing.edge_count(),
                    "layout session finished"
                );
            }
            return Ok(SessionPhase::Settling {
                iteration: self.settled,
            });
        }

        Ok(SessionPhase::Finished)
    }

    pub fn is_finished(&self) -> bool {
        self.removed.is_some() && self.settled >= self.settings.iterations_after_deintersect
    }

    pub fn run_to_end(&mut self) -> Result<()> {
        while self.step()? != SessionPhase::Finished {}
        Ok(())
    }

    /// Edges removed by the de-intersection pass, once it has run.
    pub fn removed_edges(&self) -> Option<usize> {
        self.removed
    }

    pub fn drawing(&self) -> &Drawing<F> {
        &self.drawing
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn into_drawing(self) -> Drawing<F> {
        self.drawing
    }
}

/// Generates a connected graph with degrees in `range` and scatters it over the layout area.
pub fn generate_random_drawing<F, R>(
    node_count: usize,
    range: DegreeRange,
    config: &ForceConfig,
    factory: F,
    rng: &mut R,
) -> Result<Drawing<F>>
where
    F: ObjectFactory,
    R: Rng + ?Sized,
{
    let graph = generate_connected_graph(node_count, range, rng)?;
    Drawing::scatter(graph, factory, config, rng)
}
