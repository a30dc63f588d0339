mod support;

use integration_test_utils::{load_carrier_config, FakeNetworkState};
use ss_domain::{NetworkType, SsService, SuppServiceRequest};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use support::{all_requests, make_engine};

const ITERATIONS: usize = 500;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn queries_stay_consistent_while_config_and_wifi_change() {
    let network = FakeNetworkState::registered_on(NetworkType::Lte);
    let (engine, connectivity) = make_engine("concurrent", &network);
    let engine = Arc::new(engine);
    let wifi_capable = load_carrier_config("ut_cw_lte_wifi");
    let cellular_only = load_carrier_config("ut_all_services_cellular");
    engine.apply_configuration(Some(&wifi_capable));

    let done = Arc::new(AtomicBool::new(false));

    let config_task = {
        let engine = engine.clone();
        let done = done.clone();
        tokio::spawn(async move {
            for iteration in 0..ITERATIONS {
                let bundle = if iteration % 2 == 0 {
                    &cellular_only
                } else {
                    &wifi_capable
                };
                engine.apply_configuration(Some(bundle));
                tokio::task::yield_now().await;
            }
            done.store(true, Ordering::SeqCst);
        })
    };

    let wifi_task = {
        let connectivity = connectivity.clone();
        let done = done.clone();
        tokio::spawn(async move {
            let mut available = false;
            while !done.load(Ordering::SeqCst) {
                if available {
                    connectivity.notify_lost();
                } else {
                    connectivity.notify_available();
                }
                available = !available;
                assert!(connectivity.active_callbacks() <= 1);
                tokio::task::yield_now().await;
            }
        })
    };

    let query_tasks: Vec<_> = (0..2)
        .map(|_| {
            let engine = engine.clone();
            let done = done.clone();
            tokio::spawn(async move {
                let mut last_version = 0;
                while !done.load(Ordering::SeqCst) {
                    let version = engine.snapshot().config_version;
                    assert!(version >= last_version, "configuration version went backwards");
                    last_version = version;

                    assert!(engine.use_ss_over_ut(SsService::Cw));
                    assert!(engine
                        .routing_info_for(SuppServiceRequest::Ss(SsService::Cw))
                        .uses_ut_routing());
                    for request in all_requests() {
                        let info = engine.routing_info_for(request);
                        assert!(info.uses_ut_routing() || info.supports_csfb_fallback());
                    }
                    tokio::task::yield_now().await;
                }
            })
        })
        .collect();

    config_task.await.expect("config task completes");
    wifi_task.await.expect("wifi task completes");
    for task in query_tasks {
        task.await.expect("query task completes");
    }

    // Last applied configuration lists IWLAN.
    assert!(engine.connectivity().is_monitoring());
    assert_eq!(connectivity.active_callbacks(), 1);
    assert_eq!(engine.snapshot().config_version, ITERATIONS as u64 + 1);
}
