// In-memory chart registry
use super::chart::{ChartDefinition, ChartPatch};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RegistryError {
    #[error("duplicate chart id: {0}")]
    DuplicateId(String),
}

/// Ordered collection of chart definitions, keyed by `id`.
///
/// The registry does not generate ids and does not sort; entries keep their
/// insertion order.
#[derive(Debug, Clone, Default)]
pub struct ChartRegistry {
    charts: Vec<ChartDefinition>,
}

impl ChartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection. Rejects input with repeated ids and
    /// leaves the registry untouched in that case.
    pub fn initialize(&mut self, charts: Vec<ChartDefinition>) -> Result<(), RegistryError> {
        let mut seen = HashSet::with_capacity(charts.len());
        for chart in &charts {
            if !seen.insert(chart.id.as_str()) {
                return Err(RegistryError::DuplicateId(chart.id.clone()));
            }
        }
        self.charts = charts;
        Ok(())
    }

    /// Append a chart. The caller supplies a fresh id.
    pub fn add(&mut self, chart: ChartDefinition) {
        self.charts.push(chart);
    }

    /// Returns whether an entry was removed. Removing an unknown id is a no-op.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.charts.len();
        self.charts.retain(|c| c.id != id);
        self.charts.len() != before
    }

    /// Returns whether an entry was updated. Editing an unknown id is a no-op.
    pub fn edit(&mut self, id: &str, patch: ChartPatch) -> bool {
        match self.charts.iter_mut().find(|c| c.id == id) {
            Some(chart) => {
                chart.apply(patch);
                true
            }
            None => false,
        }
    }

    pub fn list(&self) -> &[ChartDefinition] {
        &self.charts
    }

    pub fn get(&self, id: &str) -> Option<&ChartDefinition> {
        self.charts.iter().find(|c| c.id == id)
    }

    /// First chart whose name matches exactly. Names are not unique.
    pub fn find_by_name(&self, name: &str) -> Option<&ChartDefinition> {
        self.charts.iter().find(|c| c.name == name)
    }

    /// Case-insensitive substring match on names, in list order.
    pub fn search(&self, query: &str) -> Vec<&ChartDefinition> {
        let needle = query.trim().to_lowercase();
        self.charts
            .iter()
            .filter(|c| needle.is_empty() || c.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}
