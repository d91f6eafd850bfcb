use std::fs;

use super::*;

fn write_sources(dir: &Path, entry_body: &str) -> PathBuf {
    fs::write(dir.join("_variables.scss"), "$brand: #2e7d32;\n").unwrap();
    let entry = dir.join("sitestyles.scss");
    fs::write(&entry, entry_body).unwrap();
    entry
}

#[test]
fn output_name_mirrors_entry_stem() {
    let pipeline = StylePipeline::new("client/style/sitestyles.scss", Mode::Development);
    assert_eq!(pipeline.entry(), Path::new("client/style/sitestyles.scss"));
    assert_eq!(pipeline.output_name(), "sitestyles.css");
    assert_eq!(pipeline.outputs(), ["sitestyles.css"]);
}

#[test]
fn compiles_imports_and_nesting() {
    let dir = tempfile::tempdir().unwrap();
    let entry = write_sources(dir.path(), "@import \"variables\";\n.hero { h1 { color: $brand; } }\n");

    let css = StylePipeline::new(entry, Mode::Development).compile().unwrap();

    assert!(css.contains(".hero h1"), "{css}");
    assert!(css.contains("#2e7d32"), "{css}");
    assert!(!css.contains('$'), "{css}");
}

#[test]
fn production_mode_compresses_output() {
    let dir = tempfile::tempdir().unwrap();
    let entry = write_sources(dir.path(), ".a { color: red; }\n");

    let css = StylePipeline::new(entry, Mode::Production).compile().unwrap();

    assert!(css.contains(".a{color:red}"), "{css}");
}

#[test]
fn post_processing_runs_after_compile() {
    let dir = tempfile::tempdir().unwrap();
    let entry = write_sources(dir.path(), ".brand { user-select: none; }\n");

    let css = StylePipeline::new(entry, Mode::Production).compile().unwrap();

    assert!(css.contains("-webkit-user-select:none;user-select:none"), "{css}");
}

#[test]
fn empty_transform_chain_leaves_css_unprefixed() {
    let dir = tempfile::tempdir().unwrap();
    let entry = write_sources(dir.path(), ".brand { user-select: none; }\n");

    let css = StylePipeline::new(entry, Mode::Production)
        .with_transforms(Vec::new())
        .compile()
        .unwrap();

    assert!(!css.contains("-webkit-"), "{css}");
}

#[test]
fn syntax_error_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let entry = write_sources(dir.path(), ".broken { color: red;\n");

    let err = StylePipeline::new(entry, Mode::Development).compile().unwrap_err();

    assert!(matches!(err, BuildError::Stylesheet(_)), "{err}");
}

#[test]
fn missing_entry_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let entry = dir.path().join("nope.scss");

    let err = StylePipeline::new(&entry, Mode::Development).compile().unwrap_err();

    assert!(matches!(err, BuildError::MissingEntry(ref p) if *p == entry), "{err}");
}

#[test]
fn run_writes_single_css_file() {
    let src = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let entry = write_sources(src.path(), ".a { color: red; }\n");

    let written = StylePipeline::new(entry, Mode::Development).run(out.path()).unwrap();

    assert_eq!(written, [out.path().join("sitestyles.css")]);
    let css = fs::read_to_string(&written[0]).unwrap();
    assert!(css.contains("color: red"), "{css}");
}
