//! Loads the real bundle files shipped at the repository root.

use veneer_i18n::{Catalog, Localizations};

fn workspace_catalog() -> Catalog {
    Catalog::load_from_dir(concat!(env!("CARGO_MANIFEST_DIR"), "/.."))
}

#[test]
fn loads_both_languages() {
    let catalog = workspace_catalog();

    for language in ["en", "cy"] {
        let bundle = catalog.bundle(language).unwrap();
        assert!(bundle.has("BetaBanner"), "core bundle missing for {language}");
        assert!(bundle.has("ServiceName"), "service bundle missing for {language}");
    }
}

#[test]
fn localises_from_loaded_bundles() {
    let localizations = Localizations::new(workspace_catalog());

    assert_eq!(
        localizations.localise("ServiceName", "en", 1, &[]),
        "Data explorer"
    );
    assert_eq!(
        localizations.localise("ServiceName", "cy", 1, &[]),
        "Archwiliwr data"
    );
    assert_eq!(
        localizations.localise("ReleasedOn", "en", 1, &["1 July 2019".to_string()]),
        "Released on 1 July 2019"
    );
}

#[test]
fn welsh_plural_forms_resolve() {
    let localizations = Localizations::new(workspace_catalog());

    assert_eq!(
        localizations.localise("DatasetCount", "cy", 1, &["1".to_string()]),
        "1 set ddata"
    );
    assert_eq!(
        localizations.localise("DatasetCount", "cy", 0, &["0".to_string()]),
        "0 setiau data"
    );
    assert_eq!(
        localizations.localise("DatasetCount", "cy", 7, &["7".to_string()]),
        "7 setiau data"
    );
}
