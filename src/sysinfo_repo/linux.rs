// Linux-specific helpers: /proc and /sys reads sysinfo does not cover.

/// Read first "model name" from /proc/cpuinfo (Linux). Used when sysinfo reports an empty brand.
pub(super) fn read_cpu_model_linux() -> Option<String> {
    #[cfg(target_os = "linux")]
    {
        let content = std::fs::read_to_string("/proc/cpuinfo").ok()?;
        for line in content.lines() {
            if line.starts_with("model name") {
                let name = line
                    .find(": ")
                    .map(|i| line[i + 2..].trim())
                    .filter(|s| !s.is_empty() && *s != "cpu0")?;
                return Some(name.to_string());
            }
        }
    }
    None
}

/// Interface carrying the IPv4 default route, from /proc/net/route (Linux).
pub(super) fn read_default_route_interface() -> Option<String> {
    #[cfg(target_os = "linux")]
    {
        let content = std::fs::read_to_string("/proc/net/route").ok()?;
        parse_default_route(&content)
    }
    #[cfg(not(target_os = "linux"))]
    None
}

/// First row whose destination and mask are both 0.0.0.0; the header row is skipped.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_default_route(content: &str) -> Option<String> {
    content.lines().skip(1).find_map(|line| {
        let cols: Vec<&str> = line.split_whitespace().collect();
        match cols.as_slice() {
            [iface, "00000000", _gateway, _flags, _refcnt, _use, _metric, "00000000", ..] => {
                Some(iface.to_string())
            }
            _ => None,
        }
    })
}

/// Link state from /sys/class/net/<interface>/operstate (Linux), e.g. "up", "down".
pub(super) fn read_operstate(interface_name: &str) -> Option<String> {
    #[cfg(target_os = "linux")]
    {
        let path = format!("/sys/class/net/{}/operstate", interface_name);
        let v = std::fs::read_to_string(&path).ok()?;
        let v = v.trim();
        if v.is_empty() {
            return None;
        }
        Some(v.to_string())
    }
    #[cfg(not(target_os = "linux"))]
    {
        let _ = interface_name;
        None
    }
}

pub(super) fn is_loopback(interface_name: &str) -> bool {
    interface_name == "lo" || interface_name.starts_with("lo0") || interface_name == "Loopback"
}
