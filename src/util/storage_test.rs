use super::*;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_starts_empty() {
    let store = MemoryStorage::new();
    assert_eq!(store.load("theme"), None);
}

#[test]
fn memory_storage_round_trips_and_overwrites() {
    let store = MemoryStorage::new();
    store.save("theme", "dark");
    assert_eq!(store.load("theme").as_deref(), Some("dark"));
    store.save("theme", "light");
    assert_eq!(store.load("theme").as_deref(), Some("light"));
}

#[test]
fn memory_storage_clones_share_entries() {
    let store = MemoryStorage::new();
    let other = store.clone();
    store.save("theme", "dark");
    assert_eq!(other.load("theme").as_deref(), Some("dark"));
}

// =============================================================
// BrowserStorage outside a browser
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_is_inert_without_window() {
    let store = BrowserStorage;
    store.save("theme", "dark");
    assert_eq!(store.load("theme"), None);
}
