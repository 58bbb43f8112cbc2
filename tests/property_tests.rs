//! Property-based tests for names and the store protocol.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated inputs.

use std::fs;

use proptest::prelude::*;
use tempfile::TempDir;

use superenv::core::paths::SuperenvPaths;
use superenv::core::store::{CreateStatus, SnapshotStore, SyncOutcome};
use superenv::core::types::EnvName;

/// Strategy for generating valid snapshot names.
fn valid_name() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_-]{1,64}"
}

fn initialized_store() -> (TempDir, SnapshotStore) {
    let temp = TempDir::new().expect("create temp dir");
    let store = SnapshotStore::new(SuperenvPaths::new(temp.path().to_path_buf()));
    store.initialize().expect("initialize");
    (temp, store)
}

fn refuse(message: &str) -> bool {
    panic!("unexpected confirmation: {message}")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Valid names survive the trip through their file name.
    #[test]
    fn file_name_recovers_name(raw in valid_name()) {
        let name = EnvName::new(raw.clone()).unwrap();
        let recovered = EnvName::from_file_name(&name.file_name());
        prop_assert_eq!(recovered, Some(name));
    }

    /// Anything containing a dot or separator is rejected.
    #[test]
    fn names_with_separators_rejected(
        prefix in "[a-z]{0,8}",
        sep in prop::sample::select(vec!['.', '/', '\\', ' ']),
        suffix in "[a-z]{0,8}",
    ) {
        let raw = format!("{prefix}{sep}{suffix}");
        prop_assert!(EnvName::new(raw).is_err());
    }

    /// Creating twice never changes the first blob.
    #[test]
    fn create_is_unique(raw in valid_name(), body in prop::collection::vec(any::<u8>(), 0..256)) {
        let (_temp, store) = initialized_store();
        let name = EnvName::new(raw).unwrap();

        prop_assert_eq!(store.create(&name).unwrap(), CreateStatus::Created);
        fs::write(store.paths().snapshot_path(&name), &body).unwrap();
        prop_assert_eq!(store.create(&name).unwrap(), CreateStatus::AlreadyExists);
        prop_assert_eq!(store.read(&name).unwrap(), body);
    }

    /// Pushing identical content never prompts and never writes.
    #[test]
    fn equal_push_short_circuits(body in prop::collection::vec(any::<u8>(), 0..256)) {
        let (temp, store) = initialized_store();
        let name = EnvName::new("prop").unwrap();
        fs::write(temp.path().join(".env"), &body).unwrap();

        let refuse: fn(&str) -> bool = refuse;
        prop_assert_eq!(store.push(&name, &refuse).unwrap(), SyncOutcome::Created);
        prop_assert_eq!(store.push(&name, &refuse).unwrap(), SyncOutcome::Unchanged);
        prop_assert_eq!(store.read(&name).unwrap(), body);
    }

    /// A declined push leaves differing content byte-identical.
    #[test]
    fn declined_push_preserves_blob(
        stored in prop::collection::vec(any::<u8>(), 0..128),
        working in prop::collection::vec(any::<u8>(), 0..128),
    ) {
        prop_assume!(stored != working);
        let (temp, store) = initialized_store();
        let name = EnvName::new("prop").unwrap();
        fs::write(store.paths().snapshot_path(&name), &stored).unwrap();
        fs::write(temp.path().join(".env"), &working).unwrap();

        let decline = |_: &str| false;
        prop_assert_eq!(store.push(&name, &decline).unwrap(), SyncOutcome::Aborted);
        prop_assert_eq!(store.read(&name).unwrap(), stored);
    }
}
