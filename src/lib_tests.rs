use super::*;

#[test]
fn reexports_are_usable_from_crate_root() {
    let handlers = SyncHandlers::new().on("*.json", |_, _| Ok(None));
    let options = Options::from(handlers);

    let err = kollekt_sync(options.cwd("/definitely/not/a/real/dir")).unwrap_err();
    assert_eq!(err.error_type(), "FileSystem");
}

#[test]
fn empty_options_report_missing_handlers() {
    let err = kollekt_sync(Options::new()).unwrap_err();
    assert!(matches!(err, KollektorError::Config(ref m) if m == "Missing handlers option"));
}
