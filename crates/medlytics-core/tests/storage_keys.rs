use medlytics_core::models::analysis::AnalysisKind;
use medlytics_core::storage_keys;
use uuid::Uuid;

#[test]
fn analysis_key_nests_kind_and_encoded_owner() {
    let id = Uuid::nil();
    assert_eq!(
        storage_keys::analysis(AnalysisKind::Depression, Some("user-42"), id),
        "analyses/depression/users/dXNlci00Mg/00000000-0000-0000-0000-000000000000.json"
    );
}

#[test]
fn missing_or_empty_owner_is_anonymous() {
    assert_eq!(
        storage_keys::history_prefix(AnalysisKind::Anxiety, None),
        "analyses/anxiety/anonymous/"
    );
    assert_eq!(
        storage_keys::history_prefix(AnalysisKind::Anxiety, Some("")),
        "analyses/anxiety/anonymous/"
    );
}

#[test]
fn subject_named_anonymous_gets_its_own_prefix() {
    assert_ne!(
        storage_keys::history_prefix(AnalysisKind::Anxiety, Some("anonymous")),
        storage_keys::history_prefix(AnalysisKind::Anxiety, None)
    );
}

#[test]
fn distinct_subjects_never_share_a_prefix() {
    let subjects = ["a/b", "a_b", "a-b", "a/../b", "a", "ab"];
    for (i, left) in subjects.iter().enumerate() {
        for right in &subjects[i + 1..] {
            let l = storage_keys::history_prefix(AnalysisKind::Sleep, Some(left));
            let r = storage_keys::history_prefix(AnalysisKind::Sleep, Some(right));
            assert!(!l.starts_with(&r) && !r.starts_with(&l), "{left} and {right} overlap");
        }
    }
}

#[test]
fn owner_segment_has_no_slash_beyond_namespace() {
    let prefix = storage_keys::history_prefix(AnalysisKind::Sleep, Some("a/../b"));
    assert_eq!(prefix.matches('/').count(), 4);
}

#[test]
fn every_key_lives_under_analyses_prefix() {
    for kind in AnalysisKind::ALL {
        assert!(storage_keys::history_prefix(kind, Some("u")).starts_with(storage_keys::ANALYSES_PREFIX));
    }
}
