/// Integration tests for the application layer
mod test_utilities;

use sbom_cli::prelude::*;
use test_utilities::mocks::*;

fn tokens(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn initialized_store() -> MockDocumentStore {
    let store = MockDocumentStore::new();
    InitDocumentUseCase::new(&store, MockProgressReporter::new())
        .execute(InitRequest::new(
            "acme-lib",
            tokens(&["--name", "Acme", "--version", "1.0.0"]),
        ))
        .unwrap();
    store
}

#[test]
fn test_full_document_lifecycle() {
    let store = initialized_store();
    let reporter = MockProgressReporter::new();

    let info = ManageInfoUseCase::new(&store, &reporter);
    info.add(&tokens(&["--license", "MIT", "--url", "https://acme.dev"]))
        .unwrap();

    let packages = ManagePackagesUseCase::new(&store, &reporter);
    packages
        .add("left-pad", &tokens(&["--version", "2", "--license", "MIT"]))
        .unwrap();
    packages.add("serde", &tokens(&["--version", "1"])).unwrap();
    let flags = tokens(&["--license"]);
    packages.remove("left-pad", &flags).unwrap();

    let expected = r#"{
    "package": "acme-lib",
    "name": "Acme",
    "version": "1.0.0",
    "uri": "https://acme.dev",
    "license": "MIT",
    "packages": {
        "left-pad": {
            "version": "2"
        },
        "serde": {
            "version": "1"
        }
    }
}"#;
    assert_eq!(store.content().unwrap(), expected);

    assert!(reporter
        .get_messages()
        .iter()
        .any(|m| m.contains("Added package 'serde'")));
}

#[test]
fn test_init_rejects_invalid_package_id() {
    let store = MockDocumentStore::new();
    let use_case = InitDocumentUseCase::new(&store, MockProgressReporter::new());

    let err = use_case
        .execute(InitRequest::new("Acme_Lib", Vec::new()))
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<SbomError>(),
        Some(SbomError::InvalidPackageId { .. })
    ));
    assert!(store.content().is_none());
}

#[test]
fn test_init_twice_fails() {
    let store = initialized_store();
    let before = store.content();

    let err = InitDocumentUseCase::new(&store, MockProgressReporter::new())
        .execute(InitRequest::new("other", Vec::new()))
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<SbomError>(),
        Some(SbomError::AlreadyInitialized { .. })
    ));
    assert_eq!(store.content(), before);
}

#[test]
fn test_load_of_hand_edited_document() {
    let store = MockDocumentStore::with_content(
        r#"{"package":"acme-lib","license":null,"packages":{"zlib":{"version":"1.3","packages":null}}}"#,
    );

    let view = ManageInfoUseCase::new(&store, MockProgressReporter::new())
        .list()
        .unwrap();
    assert_eq!(view.package_id.as_str(), "acme-lib");
    assert_eq!(view.info.get(Field::License), "");

    let listing = ManagePackagesUseCase::new(&store, MockProgressReporter::new())
        .list(Some("zlib"))
        .unwrap();
    let zlib = listing.get("zlib").unwrap();
    assert_eq!(zlib.info().get(Field::Version), "1.3");
    assert!(zlib.children().is_empty());
}

#[test]
fn test_malformed_document_is_a_decode_error() {
    let store = MockDocumentStore::with_content("{ not json");

    let err = ManagePackagesUseCase::new(&store, MockProgressReporter::new())
        .list(None)
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<SbomError>(),
        Some(SbomError::Decode { .. })
    ));
}

#[test]
fn test_failed_save_surfaces_error() {
    let store = initialized_store().failing_on_save();
    let before = store.content();

    let err = ManageInfoUseCase::new(&store, MockProgressReporter::new())
        .add(&tokens(&["--license", "MIT"]))
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<SbomError>(),
        Some(SbomError::FileWriteError { .. })
    ));
    assert_eq!(store.content(), before);
}

#[test]
fn test_odd_token_count_is_rejected_before_any_change() {
    let store = initialized_store();
    let before = store.content();

    let err = ManagePackagesUseCase::new(&store, MockProgressReporter::new())
        .add("left-pad", &tokens(&["--version", "2.0.0", "--license"]))
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<SbomError>(),
        Some(SbomError::MalformedArguments { count: 3 })
    ));
    assert_eq!(store.content(), before);
}

#[test]
fn test_router_presents_json() {
    let store = initialized_store();
    let presenter = MockOutputPresenter::new();
    let router = CommandRouter::new(&store, MockProgressReporter::new(), &presenter);

    use clap::Parser;
    let args = sbom_cli::cli::Args::try_parse_from(["sbom", "package", "add", "zlib"]).unwrap();
    router.route(args.command).unwrap();

    assert_eq!(presenter.last_output().unwrap(), "{\n    \"zlib\": {}\n}");
    assert_eq!(presenter.get_outputs().len(), 1);
}
