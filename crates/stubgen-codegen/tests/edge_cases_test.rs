//! Edge case tests for stubgen-codegen.
//!
//! Tests handling of unusual inputs:
//! - Empty collections and services
//! - Duplicate method names
//! - Display-name collisions between targets and model packages
//! - Unicode and placeholder-like text in documentation

use stubgen_codegen::BindingsGenerator;
use stubgen_codegen::generator::HEADER;
use stubgen_core::{Bindings, BoundMethod, Parameter, TypeInfo};

#[test]
fn test_empty_bindings_generate_nothing() {
    let generator = BindingsGenerator::new().unwrap();
    let generated = generator.generate(&Bindings::new()).unwrap();
    assert!(generated.is_empty());
}

#[test]
fn test_package_without_services() {
    let bindings = Bindings::from_json_str(r#"{"main": {}}"#).unwrap();
    let generator = BindingsGenerator::new().unwrap();
    let generated = generator.generate(&bindings).unwrap();

    let content = &generated.get("main").unwrap().content;
    let expected = format!("{HEADER}\nwindow.go = window.go || {{}};\nwindow.go.main = {{\n}};\n");
    assert_eq!(content, &expected);
}

#[test]
fn test_service_without_methods() {
    let bindings = Bindings::from_json_str(r#"{"main": {"Empty": []}}"#).unwrap();
    let generator = BindingsGenerator::new().unwrap();
    let generated = generator.generate(&bindings).unwrap();

    let content = &generated.get("main").unwrap().content;
    assert!(content.contains("function Empty(method) {"));
    assert!(content.contains("    Empty: {\n    },\n"));
}

#[test]
fn test_duplicate_method_names_keep_insertion_order() {
    let mut bindings = Bindings::new();
    bindings.add_method("main", "App", BoundMethod::new("Run").with_doc("first"));
    bindings.add_method("main", "App", BoundMethod::new("Run").with_doc("second"));

    let generator = BindingsGenerator::new().unwrap();
    let generated = generator.generate(&bindings).unwrap();
    let content = &generated.get("main").unwrap().content;

    let first = content.find(" * first\n").unwrap();
    let second = content.find(" * second\n").unwrap();
    assert!(first < second);
}

#[test]
fn test_model_package_colliding_with_target_name() {
    let mut bindings = Bindings::new();
    bindings.add_method(
        "models",
        "Repo",
        BoundMethod::new("Load").with_output(Parameter::new(
            "",
            TypeInfo::structure("models.Row", "github.com/db/models"),
        )),
    );

    let generator = BindingsGenerator::new().unwrap();
    let generated = generator.generate(&bindings).unwrap();
    let module = generated.get("models").unwrap();

    assert_eq!(module.models, vec!["models2".to_string()]);
    assert!(module.content.contains("import {models2} from './models';"));
}

#[test]
fn test_multiline_doc_is_trimmed_only_at_edges() {
    let mut bindings = Bindings::new();
    bindings.add_method(
        "main",
        "App",
        BoundMethod::new("Sum").with_doc("\n  Sum adds numbers.\nIt never fails.  \n"),
    );

    let generator = BindingsGenerator::new().unwrap();
    let generated = generator.generate(&bindings).unwrap();
    let content = &generated.get("main").unwrap().content;

    assert!(content.contains(" * App.Sum\n * Sum adds numbers.\nIt never fails.\n *\n"));
}

#[test]
fn test_unicode_in_doc_and_names() {
    let mut bindings = Bindings::new();
    bindings.add_method(
        "github.com/acme/überapp",
        "Grüße",
        BoundMethod::new("Sagen")
            .with_doc("Gibt einen Gruß zurück 👋")
            .with_input(Parameter::new("näme", TypeInfo::new("string"))),
    );

    let generator = BindingsGenerator::new().unwrap();
    let generated = generator.generate(&bindings).unwrap();
    let content = &generated.get("überapp").unwrap().content;

    assert!(content.contains("Gibt einen Gruß zurück 👋"));
    assert!(content.contains("function Sagen(näme) {"));
    assert!(content.contains("window.go.überapp = {"));
}

#[test]
fn test_many_methods_all_registered() {
    let mut bindings = Bindings::new();
    for i in 0..200 {
        bindings.add_method("main", "Bulk", BoundMethod::new(format!("Method{i:03}")));
    }

    let generator = BindingsGenerator::new().unwrap();
    let generated = generator.generate(&bindings).unwrap();
    let content = &generated.get("main").unwrap().content;

    assert_eq!(content.matches("return wails.Call(Bulk(").count(), 200);
    assert!(content.find("        Method000,").unwrap() < content.find("        Method199,").unwrap());
}
