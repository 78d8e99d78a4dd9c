use super::*;

#[test]
fn every_accepted_extension_classifies() {
    let exts: Vec<_> = accepted_extensions().collect();
    assert_eq!(exts.len(), 9);
    for ext in exts {
        assert!(ImportKind::from_extension(ext).is_some(), "{ext}");
    }
}

#[test]
fn classification_is_case_insensitive() {
    assert_eq!(
        classify_import(Path::new("scene/Robot.GLB")).unwrap(),
        ImportKind::Model
    );
    assert_eq!(
        classify_import(Path::new("sky.hdr")).unwrap(),
        ImportKind::EnvironmentMap
    );
    assert_eq!(classify_import(Path::new("logo.svg")).unwrap(), ImportKind::Svg);
    assert_eq!(classify_import(Path::new("a.JPG")).unwrap(), ImportKind::Image);
}

#[test]
fn unsupported_or_missing_extensions_are_rejected() {
    let err = classify_import(Path::new("clip.mp4")).unwrap_err();
    assert!(err.to_string().contains("unsupported import type .mp4"));
    assert!(classify_import(Path::new("README")).is_err());
    assert!(classify_import(Path::new("photo.jpeg")).is_err());
}
