use crate::distribution::time_range::format_time_range;
use crate::element_id::ElementId;
use crate::models::{ReportFilter, StateDataRequest, TimeWindow, UNBOUNDED_RESULT_SIZE};

/// Builds the state data request, or nothing when the element is unknown.
pub fn build_request(element: Option<&ElementId>, window: &TimeWindow) -> Option<StateDataRequest> {
    let element = element?;
    Some(StateDataRequest {
        filter: ReportFilter::Element(*element),
        max_amount: UNBOUNDED_RESULT_SIZE,
        timespan: format_time_range(window),
    })
}
