use super::*;

#[test]
fn defaults_when_unset() {
    let cfg = HostConfig::from_values(None, None).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn blank_values_use_defaults() {
    let cfg = HostConfig::from_values(Some("  "), Some("")).unwrap();
    assert_eq!(cfg, HostConfig { bind_addr: DEFAULT_BIND_ADDR, port: DEFAULT_PORT });
}

#[test]
fn parses_explicit_values() {
    let cfg = HostConfig::from_values(Some("127.0.0.1"), Some(" 8080 ")).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn accepts_ipv6_bind_addr() {
    let cfg = HostConfig::from_values(Some("::1"), Some("3000")).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "[::1]:3000");
}

#[test]
fn rejects_bad_port() {
    assert_eq!(
        HostConfig::from_values(None, Some("http")),
        Err(HostConfigError::InvalidPort("http".to_owned()))
    );
    assert!(HostConfig::from_values(None, Some("70000")).is_err());
}

#[test]
fn rejects_bad_bind_addr() {
    let err = HostConfig::from_values(Some("localhost"), None).unwrap_err();
    assert_eq!(err.to_string(), "invalid BIND_ADDR: localhost");
}

#[test]
fn from_env_reads_port() {
    // Only this test touches PORT/BIND_ADDR.
    unsafe {
        std::env::set_var("PORT", "4100");
        std::env::remove_var("BIND_ADDR");
    }
    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg.port, 4100);
    unsafe { std::env::remove_var("PORT") };
}

#[test]
fn log_filter_defaults_to_info() {
    assert_eq!(log_filter(None).to_string(), "info");
    assert_eq!(log_filter(Some("  ")).to_string(), "info");
}

#[test]
fn log_filter_honours_rust_log() {
    assert_eq!(log_filter(Some("debug")).to_string(), "debug");
}

#[test]
fn log_filter_falls_back_on_bad_directive() {
    assert_eq!(log_filter(Some("receipt_desk=loud")).to_string(), "info");
}
