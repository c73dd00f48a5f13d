use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::channel::ReportingChannel;
use crate::distribution::{build_request, build_rows, PercentFormat, StateDistributionFetcher};
use crate::element_id::ElementId;
use crate::metrics;
use crate::models::{Page, TimeWindow};

pub const SOURCE_NAME: &str = "Element alarm state distribution";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    String,
    DateTime,
    Double,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InputArgument {
    pub name: &'static str,
    pub kind: ValueKind,
    pub required: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Column {
    pub name: &'static str,
    pub kind: ValueKind,
}

pub static INPUT_ARGUMENTS: [InputArgument; 3] = [
    InputArgument { name: "Element ID", kind: ValueKind::String, required: true },
    InputArgument { name: "Start time", kind: ValueKind::DateTime, required: true },
    InputArgument { name: "End time", kind: ValueKind::DateTime, required: true },
];

pub static COLUMNS: [Column; 2] = [
    Column { name: "State", kind: ValueKind::String },
    Column { name: "Proportion", kind: ValueKind::Double },
];

/// What a dashboard sees when it lists this source.
#[derive(Debug, Clone, Serialize)]
pub struct SourceDescriptor {
    pub name: &'static str,
    pub inputs: &'static [InputArgument],
    pub columns: &'static [Column],
}

/// Backend handle and display settings, fixed at initialization.
#[derive(Clone)]
pub struct SourceContext {
    pub channel: Arc<dyn ReportingChannel>,
    pub percent_format: PercentFormat,
}

impl SourceContext {
    pub fn new(channel: Arc<dyn ReportingChannel>) -> Self {
        Self {
            channel,
            percent_format: PercentFormat::default(),
        }
    }

    pub fn with_percent_format(mut self, percent_format: PercentFormat) -> Self {
        self.percent_format = percent_format;
        self
    }
}

/// Raw argument values as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InputValues {
    pub element: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundQuery {
    pub element: Option<ElementId>,
    pub window: TimeWindow,
}

pub struct AlarmStateDistributionSource {
    fetcher: StateDistributionFetcher,
    percent_format: PercentFormat,
}

impl AlarmStateDistributionSource {
    pub fn initialize(context: SourceContext) -> Self {
        Self {
            fetcher: StateDistributionFetcher::new(context.channel),
            percent_format: context.percent_format,
        }
    }

    pub fn declare_inputs() -> &'static [InputArgument] {
        &INPUT_ARGUMENTS
    }

    pub fn columns() -> &'static [Column] {
        &COLUMNS
    }

    pub fn descriptor() -> SourceDescriptor {
        SourceDescriptor {
            name: SOURCE_NAME,
            inputs: Self::declare_inputs(),
            columns: Self::columns(),
        }
    }

    pub fn bind_inputs(values: &InputValues) -> BoundQuery {
        BoundQuery {
            element: ElementId::parse(&values.element),
            window: TimeWindow::new(values.start, values.end),
        }
    }

    /// Produces the whole table in one page; there is never a next page.
    pub async fn fetch_rows(&self, query: &BoundQuery) -> Page {
        metrics::record_query();
        match &query.element {
            Some(element) => info!("Fetching alarm state distribution for element {}", element),
            None => info!("Element id not recognized, answering with empty distribution"),
        }

        let request = build_request(query.element.as_ref(), &query.window);
        let states = self.fetcher.fetch(request.as_ref()).await;

        Page {
            rows: build_rows(&states, &self.percent_format),
            has_next_page: false,
        }
    }
}
