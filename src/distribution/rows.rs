use crate::config::DEFAULT_PERCENT_DECIMALS;
use crate::models::{AlarmState, StateDistribution, StateRow};

/// Display format of a proportion, e.g. `0.5` as `"50.00%"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PercentFormat {
    pub decimals: usize,
}

impl PercentFormat {
    pub fn new(decimals: usize) -> Self {
        Self { decimals }
    }

    pub fn format(&self, proportion: f64) -> String {
        format!("{:.*}%", self.decimals, proportion * 100.0)
    }
}

impl Default for PercentFormat {
    fn default() -> Self {
        Self::new(DEFAULT_PERCENT_DECIMALS)
    }
}

/// Maps percentages onto the nine output rows, in fixed state order.
pub fn build_rows(states: &StateDistribution, format: &PercentFormat) -> Vec<StateRow> {
    AlarmState::ALL
        .iter()
        .map(|&state| {
            let proportion = states.percentage(state) / 100.0;
            StateRow {
                state,
                proportion,
                display: format.format(proportion),
            }
        })
        .collect()
}
