// SysinfoRepo against the real host. Values vary, so only invariants are checked.

use perfserver::collector::collect;
use perfserver::provider::MetricsProvider;
use perfserver::sysinfo_repo::SysinfoRepo;
use std::time::Duration;

#[tokio::test]
async fn sysinfo_repo_collects_a_consistent_snapshot() {
    let repo = SysinfoRepo::new();
    let raw = collect(&repo, Duration::from_secs(30))
        .await
        .expect("collect from host");

    assert!((0.0..=100.0).contains(&raw.load.current_load));
    assert!(raw.load.cpus.iter().all(|c| (0.0..=100.0).contains(&c.load)));
    assert!(!raw.cpu.manufacturer.is_empty());
    assert!(!raw.cpu.brand.is_empty());

    assert!(raw.mem.total > 0);
    assert!(raw.mem.used <= raw.mem.total);
    assert_eq!(raw.mem.used, raw.mem.total - raw.mem.free);

    for v in &raw.volumes {
        assert!(v.used <= v.size);
        assert!((0.0..=100.0).contains(&v.use_percent));
    }
}

#[tokio::test]
async fn sysinfo_repo_counters_do_not_decrease_between_calls() {
    let repo = SysinfoRepo::new();
    let first = repo.network_stats().await.expect("network_stats");
    let second = repo.network_stats().await.expect("network_stats");
    for a in &first {
        if let Some(b) = second.iter().find(|b| b.iface == a.iface) {
            assert!(b.rx_bytes >= a.rx_bytes, "{} rx went backwards", a.iface);
            assert!(b.tx_bytes >= a.tx_bytes, "{} tx went backwards", a.iface);
        }
    }
}

#[tokio::test]
async fn sysinfo_repo_back_to_back_loads_stay_in_range() {
    let repo = SysinfoRepo::new();
    for _ in 0..2 {
        let load = repo.current_load().await.expect("current_load");
        assert!((0.0..=100.0).contains(&load.current_load));
        assert!((load.current_load + load.current_load_idle - 100.0).abs() < 1e-9);
    }
}
