//! Batch isolation tests: one failing file never takes down the run.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use recast::batch::{convert_files, discover_inputs, FileError};
use recast_core::error::ConvertError;
use recast_core::frontend::JsonFrontend;
use recast_core::pipeline::Pipeline;
use recast_core::rules::default_rules;

fn write_unit(dir: &Path, name: &str, func_name: &str) {
    let source = format!(
        r#"{{"TranslationUnit":{{"body":[
            {{"FunctionDecl":{{"name":"{func_name}","params":[],"body":[],"return_type":"void"}}}}
        ]}}}}"#
    );
    fs::write(dir.join(name), source).unwrap();
}

#[test]
fn one_parse_error_does_not_halt_the_batch() {
    let dir = TempDir::new().unwrap();
    write_unit(dir.path(), "a.json", "alpha");
    fs::write(dir.path().join("b.json"), "{this is not an AST").unwrap();
    write_unit(dir.path(), "c.json", "gamma");

    let files = discover_inputs(dir.path(), "json");
    assert_eq!(files.len(), 3);

    let pipeline = Pipeline::new(JsonFrontend, default_rules());
    let outcomes = convert_files(&pipeline, &files);
    assert_eq!(outcomes.len(), 3);

    // Outcomes follow discovery order: a, b, c.
    assert_eq!(outcomes[0].result.as_deref().unwrap(), "def alpha():\n    pass\n");
    assert!(matches!(
        outcomes[1].result,
        Err(FileError::Convert(ConvertError::Parse(_)))
    ));
    assert_eq!(outcomes[2].result.as_deref().unwrap(), "def gamma():\n    pass\n");
}

#[test]
fn discovery_recurses_and_ignores_other_extensions() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    write_unit(dir.path(), "top.json", "top");
    write_unit(&dir.path().join("nested"), "inner.json", "inner");
    fs::write(dir.path().join("notes.txt"), "not an AST").unwrap();

    let files = discover_inputs(dir.path(), "json");
    assert_eq!(files.len(), 2);
    assert!(files.iter().all(|f| f.extension().unwrap() == "json"));
}

#[test]
fn missing_file_is_a_read_error_for_that_file_only() {
    let dir = TempDir::new().unwrap();
    write_unit(dir.path(), "ok.json", "ok");
    let ghost = dir.path().join("ghost.json");

    let pipeline = Pipeline::new(JsonFrontend, default_rules());
    let outcomes = convert_files(&pipeline, &[dir.path().join("ok.json"), ghost]);
    assert!(outcomes[0].result.is_ok());
    assert!(matches!(outcomes[1].result, Err(FileError::Read(_))));
}
