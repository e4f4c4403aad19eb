//! Simulation runs and weighing reports.

use serde::Serialize;

use oddscale::{locate, ItemId, ScaleResult, SimulatedScale, Transcript, Weighing};

/// Result of one simulated search.
#[derive(Debug, Serialize)]
pub struct SimulationReport {
    pub items: usize,
    pub fake: ItemId,
    pub located: ItemId,
    pub weighings: Vec<Weighing>,
}

/// Run a full search over `items` candidates with `fake` designated anomalous.
pub fn run_simulation(items: u32, fake: ItemId) -> ScaleResult<SimulationReport> {
    let ids: Vec<ItemId> = (0..items).collect();
    let mut scale = Transcript::new(SimulatedScale::new(fake));
    let located = locate(&ids, &mut scale)?;

    tracing::info!(items, fake, located, weighings = scale.count(), "simulation finished");

    Ok(SimulationReport {
        items: ids.len(),
        fake,
        located,
        weighings: scale.into_weighings(),
    })
}

/// Render a weighing list, one line per weighing.
pub fn render_weighings(weighings: &[Weighing]) -> String {
    let mut out = String::new();
    for w in weighings {
        out.push_str(&format!(
            "  {} vs {} -> {}\n",
            fmt_group(&w.left),
            fmt_group(&w.right),
            w.outcome
        ));
    }
    out
}

/// Format a group of item ids as `[0,1,2]`.
pub fn fmt_group(ids: &[ItemId]) -> String {
    let parts: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
    format!("[{}]", parts.join(","))
}
