use super::CellIndex;

/// Position and hazard-immunity charges of the controlled agent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentState {
    pub position: CellIndex,
    /// Power pellets held. Collected from bonus cells, spent on hazards.
    pub resources: u32,
}

impl AgentState {
    pub fn new(position: CellIndex) -> Self {
        Self {
            position,
            resources: 0,
        }
    }

    #[must_use]
    pub fn with_resources(mut self, resources: u32) -> Self {
        self.resources = resources;
        self
    }

    #[inline]
    pub fn is_shielded(&self) -> bool {
        self.resources > 0
    }
}
