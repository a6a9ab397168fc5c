//! Loading stores from fixture directories

use gallery_contracts::{ProjectService, TranscriptService, Wing};
use gallery_store::fixtures::read_dir;
use gallery_store::{audit, FixtureLoader, IntegrityIssue, StoreError, ValidationErrorKind};
use gallery_test_utils::{raw_project, raw_transcript, write_fixture, write_sample_data};
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn loads_sample_catalog_in_file_name_order() {
    let dir = tempfile::tempdir().unwrap();
    write_sample_data(dir.path());

    let loader = FixtureLoader::default();
    let projects = loader.load_projects(&dir.path().join("projects")).await.unwrap();
    let transcripts = loader
        .load_transcripts(&dir.path().join("transcripts"))
        .await
        .unwrap();

    let slugs: Vec<_> = projects.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(
        slugs,
        [
            "app-prototype",
            "barely-started",
            "early-experiment",
            "short-story",
            "song-in-progress",
            "test-project"
        ]
    );
    assert_eq!(transcripts.len(), 1);
    assert!(transcripts.get_by_project_slug("test-project").await.is_some());
    assert_eq!(projects.get_by_wing(Wing::Apps).await.len(), 2);
}

#[tokio::test]
async fn ignores_non_json_files() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "one", &raw_project("one", Wing::Music, 10));
    std::fs::write(dir.path().join("README.md"), "# notes").unwrap();

    let fixtures = read_dir(dir.path()).await.unwrap();
    assert_eq!(fixtures.len(), 1);
    assert_eq!(fixtures[0].stem(), Some("one"));
}

#[tokio::test]
async fn missing_project_dir_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = FixtureLoader::default()
        .load_projects(&dir.path().join("nope"))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
}

#[tokio::test]
async fn missing_transcript_dir_yields_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = FixtureLoader::default()
        .load_transcripts(&dir.path().join("nope"))
        .await
        .unwrap();
    assert!(store.is_empty());
}

#[tokio::test]
async fn malformed_json_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("broken.json"), "{ not json").unwrap();

    let err = FixtureLoader::default().load_projects(dir.path()).await.unwrap_err();
    match err {
        StoreError::Json { path, .. } => assert!(path.ends_with("broken.json")),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn invalid_fixture_aborts_load() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "good", &raw_project("good", Wing::Apps, 10));
    let mut bad = raw_project("bad", Wing::Apps, 10);
    bad["wing"] = json!("unknown");
    write_fixture(dir.path(), "bad", &bad);

    let err = FixtureLoader::default().load_projects(dir.path()).await.unwrap_err();
    let validation = err.validation().unwrap();
    assert_eq!(validation.kind(), ValidationErrorKind::InvalidEnum);
    assert!(err.to_string().contains("bad.json"));
}

#[tokio::test]
async fn file_name_must_match_slug() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "renamed", &raw_project("original", Wing::Stories, 40));

    let err = FixtureLoader::default().load_projects(dir.path()).await.unwrap_err();
    assert!(matches!(err, StoreError::FileNameMismatch { slug, .. } if slug == "original"));
}

#[tokio::test]
async fn transcript_file_name_must_match_project_slug() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "other", &raw_transcript("test-project"));

    let err = FixtureLoader::default()
        .load_transcripts(dir.path())
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::FileNameMismatch { .. }));
}

#[tokio::test]
async fn sample_catalog_audit() {
    let dir = tempfile::tempdir().unwrap();
    write_sample_data(dir.path());
    write_fixture(&dir.path().join("transcripts"), "ghost", &raw_transcript("ghost"));

    let loader = FixtureLoader::default();
    let projects = loader.load_projects(&dir.path().join("projects")).await.unwrap();
    let transcripts = loader
        .load_transcripts(&dir.path().join("transcripts"))
        .await
        .unwrap();

    assert_eq!(
        audit(&projects, &transcripts),
        vec![
            IntegrityIssue::MissingTranscript {
                slug: "app-prototype".to_string()
            },
            IntegrityIssue::OrphanTranscript {
                project_slug: "ghost".to_string()
            },
        ]
    );
}
