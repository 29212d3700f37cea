use super::*;

fn store() -> (TokenStore, Arc<MemoryBackend>, Arc<MemoryBackend>) {
    let durable = Arc::new(MemoryBackend::new());
    let cookie = Arc::new(MemoryBackend::new());
    let store = TokenStore::new(durable.clone(), cookie.clone(), "access_token");
    (store, durable, cookie)
}

// =============================================================
// TokenStore
// =============================================================

#[test]
fn save_then_read_round_trips() {
    let (store, _, _) = store();
    store.save("tok1");
    assert_eq!(store.read().as_deref(), Some("tok1"));
}

#[test]
fn save_writes_both_backends() {
    let (store, durable, cookie) = store();
    store.save("tok1");
    assert_eq!(durable.read("access_token").as_deref(), Some("tok1"));
    assert_eq!(cookie.read("access_token").as_deref(), Some("tok1"));
}

#[test]
fn read_prefers_durable_over_cookie() {
    let (store, durable, cookie) = store();
    durable.write("access_token", "durable");
    cookie.write("access_token", "cookie");
    assert_eq!(store.read().as_deref(), Some("durable"));
}

#[test]
fn read_falls_back_to_cookie_when_durable_cleared() {
    let (store, durable, _) = store();
    store.save("tok1");
    durable.remove("access_token");
    assert_eq!(store.read().as_deref(), Some("tok1"));
}

#[test]
fn read_survives_cookie_cleared_independently() {
    let (store, _, cookie) = store();
    store.save("tok1");
    cookie.remove("access_token");
    assert_eq!(store.read().as_deref(), Some("tok1"));
    assert!(store.read_cookie().is_none());
}

#[test]
fn clear_removes_from_both_backends() {
    let (store, durable, cookie) = store();
    store.save("tok1");
    store.clear();
    assert!(store.read().is_none());
    assert!(durable.read("access_token").is_none());
    assert!(cookie.read("access_token").is_none());
}

#[test]
fn clear_is_idempotent() {
    let (store, _, _) = store();
    store.clear();
    store.clear();
    assert!(store.read().is_none());
}

#[test]
fn blank_tokens_read_as_absent() {
    let (store, durable, cookie) = store();
    durable.write("access_token", "");
    cookie.write("access_token", "  ");
    assert!(store.read().is_none());
    assert!(store.read_cookie().is_none());
}

#[test]
fn read_cookie_ignores_durable_slot() {
    let (store, durable, _) = store();
    durable.write("access_token", "tok1");
    assert!(store.read_cookie().is_none());
}

#[test]
fn debug_does_not_leak_backends() {
    let (store, _, _) = store();
    store.save("secret-token");
    assert!(!format!("{store:?}").contains("secret-token"));
}

// =============================================================
// cookie helpers
// =============================================================

#[test]
fn find_cookie_picks_named_pair() {
    let header = "theme=dark; access_token=abc.def.ghi; other=1";
    assert_eq!(find_cookie(header, "access_token").as_deref(), Some("abc.def.ghi"));
    assert_eq!(find_cookie(header, "theme").as_deref(), Some("dark"));
}

#[test]
fn find_cookie_does_not_match_prefixes() {
    assert_eq!(find_cookie("my_access_token=x", "access_token"), None);
}

#[test]
fn find_cookie_strips_quotes_and_rejects_empty() {
    assert_eq!(find_cookie(r#"access_token="abc""#, "access_token").as_deref(), Some("abc"));
    assert_eq!(find_cookie("access_token=", "access_token"), None);
    assert_eq!(find_cookie("", "access_token"), None);
}

#[test]
fn find_cookie_keeps_equals_inside_value() {
    assert_eq!(find_cookie("access_token=a=b", "access_token").as_deref(), Some("a=b"));
}

#[test]
fn cookie_assignment_is_root_scoped() {
    assert_eq!(cookie_assignment("access_token", "tok"), "access_token=tok; path=/; SameSite=Lax");
    assert!(expired_cookie("access_token").contains("max-age=0"));
}
