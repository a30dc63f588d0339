use integration_test_utils::{init_logging, FakeNetworkState, RecordingConnectivityService};
use ss_domain::{
    CbFacility, CfReason, ConnectivityService, NetworkStateQuery, RoutingDecisionEngine,
    SsService, SuppServiceRequest,
};
use std::sync::Arc;

pub(crate) fn make_engine(
    name: &str,
    network: &Arc<FakeNetworkState>,
) -> (RoutingDecisionEngine, Arc<RecordingConnectivityService>) {
    init_logging();

    let connectivity = RecordingConnectivityService::new(name);
    let network_query: Arc<dyn NetworkStateQuery> = network.clone();
    let connectivity_service: Arc<dyn ConnectivityService> = connectivity.clone();
    let engine = RoutingDecisionEngine::new(name, network_query, Some(connectivity_service));

    (engine, connectivity)
}

/// Every request the command layer can issue.
#[allow(dead_code)]
pub(crate) fn all_requests() -> Vec<SuppServiceRequest> {
    CbFacility::ALL
        .into_iter()
        .map(SuppServiceRequest::from)
        .chain(CfReason::ALL.into_iter().map(SuppServiceRequest::from))
        .chain(SsService::ALL.into_iter().map(SuppServiceRequest::from))
        .collect()
}

#[allow(dead_code)]
pub(crate) fn assert_routing_invariant(engine: &RoutingDecisionEngine) {
    for request in all_requests() {
        let info = engine.routing_info_for(request);
        assert!(
            info.uses_ut_routing() || info.supports_csfb_fallback(),
            "{request} not routed over Ut must allow CSFB"
        );
    }
}
