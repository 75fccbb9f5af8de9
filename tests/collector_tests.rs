// Collector tests: all-or-nothing fan-out over a scripted provider

mod common;

use common::ScriptedProvider;
use perfserver::collector::collect;
use perfserver::error::CollectionError;
use std::sync::atomic::Ordering;
use std::time::Duration;

#[tokio::test]
async fn collect_gathers_all_five_facts() {
    let provider = ScriptedProvider::new();
    provider.set_counters("enp3s0", 10, 20);
    let raw = collect(&provider, Duration::from_secs(5)).await.unwrap();
    assert_eq!(raw.load, common::current_load());
    assert_eq!(raw.cpu, common::cpu_info());
    assert_eq!(raw.mem, common::mem_stats());
    assert_eq!(raw.interfaces.len(), 1);
    assert_eq!(raw.volumes.len(), 1);

    let sample = raw.primary_sample().unwrap();
    assert_eq!(sample.interface_name, "enp3s0");
    assert_eq!(sample.rx_bytes, 10);
    assert_eq!(sample.tx_bytes, 20);
}

#[tokio::test]
async fn collect_fails_when_any_fetch_fails() {
    let provider = ScriptedProvider::new();
    provider.fail_current_load.store(true, Ordering::SeqCst);
    let err = collect(&provider, Duration::from_secs(5)).await.unwrap_err();
    assert!(matches!(err, CollectionError::Provider(_)));
    assert!(err.to_string().contains("simulated current_load failure"));
}

#[tokio::test(start_paused = true)]
async fn collect_times_out_on_slow_provider() {
    let provider = ScriptedProvider::new();
    *provider.fs_delay.lock().unwrap() = Some(Duration::from_secs(60));
    let err = collect(&provider, Duration::from_secs(2)).await.unwrap_err();
    assert!(matches!(err, CollectionError::Timeout(d) if d == Duration::from_secs(2)));
}

#[tokio::test]
async fn primary_sample_absent_without_interfaces() {
    let provider = ScriptedProvider::new();
    provider.interfaces.lock().unwrap().clear();
    let raw = collect(&provider, Duration::from_secs(5)).await.unwrap();
    assert!(raw.primary_sample().is_none());
}
