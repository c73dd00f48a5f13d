use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies an element within one management system instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementId {
    pub system_id: u32,
    pub element_id: u32,
}

impl ElementId {
    pub fn new(system_id: u32, element_id: u32) -> Self {
        Self {
            system_id,
            element_id,
        }
    }

    /// Parses the composite `"<systemId>/<elementId>"` form.
    ///
    /// Returns `None` for anything that is not exactly two non-negative
    /// integers; an unparseable id is an expected input, not an error.
    pub fn parse(raw: &str) -> Option<Self> {
        let (system, element) = raw.trim().split_once('/')?;
        let system_id = system.trim().parse().ok()?;
        let element_id = element.trim().parse().ok()?;
        Some(Self::new(system_id, element_id))
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.system_id, self.element_id)
    }
}
