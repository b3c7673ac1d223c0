//! Integration tests that build and run the generated code.
//!
//! The generated module is dropped into a throwaway cargo project whose
//! `main` drives the builder and the options and asserts on the results.
//! Projects are built with warnings denied.

use std::{path::Path, process::Command};

use confgen_codegen_rust::{Generator, GeneratorConfig};
use confgen_core::File;
use tempfile::TempDir;

const CARGO_TOML: &str = r#"[package]
name = "confgen-e2e"
version = "0.1.0"
edition = "2021"

[workspace]
"#;

const MAIN_RS: &str = r#"mod config {
    #![allow(dead_code)]
    use super::Rule;
    include!("generated.rs");
}

use config::*;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum Rule {
    #[default]
    Market,
    Society,
    Universe,
    None,
}

fn main() {
    let mut c = ConfigBuilder::new()
        .Size(10)
        .Rule(Rule::None)
        .Reverse(Rule::Universe)
        .Reader(None)
        .build();

    assert_eq!(*c.Size.get(), 10);
    assert_eq!(*c.Size.default(), 10);
    assert_eq!(*c.Rule.get(), Rule::None);
    assert_eq!(*c.Reverse.get(), Rule::Universe);
    assert!(c.Reader.get().is_none());
    assert!(!c.Size.is_modified());
    assert!(!c.Rule.is_modified());
    assert!(!c.Reverse.is_modified());
    assert!(!c.Reader.is_modified());

    c.apply([WithSize(2), WithRule(Rule::Society), WithReverse(Rule::Market)]);

    assert_eq!(*c.Size.get(), 2);
    assert_eq!(*c.Size.default(), 10);
    assert!(c.Size.is_modified());
    assert_eq!(*c.Rule.get(), Rule::Society);
    assert_eq!(*c.Reverse.get(), Rule::Market);
    assert_eq!(*c.Reverse.default(), Rule::Universe);
    assert!(c.Reader.get().is_none());
    assert!(!c.Reader.is_modified());

    c.apply([WithSize(3), WithSize(4)]);
    assert_eq!(*c.Size.get(), 4);

    let zero = ConfigBuilder::new().build();
    assert_eq!(*zero.Size.get(), 0);
    assert_eq!(*zero.Rule.get(), Rule::Market);

    println!(
        "size={} rule={:?} reverse={:?} reader={}",
        c.Size.get(),
        c.Rule.get(),
        c.Reverse.get(),
        c.Reader.get().is_some()
    );
}
"#;

/// Generate the config module, build the project and return its stdout.
fn run_generated(spec: &str, config: &GeneratorConfig, main_rs: &str) -> String {
    let mut generator = Generator::new(spec, config).expect("Failed to parse spec");
    generator.generate();

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let project = temp_dir.path();

    File::new(project.join("Cargo.toml"), CARGO_TOML)
        .write()
        .expect("Failed to write Cargo.toml");
    File::new(project.join("src/main.rs"), main_rs)
        .write()
        .expect("Failed to write main.rs");
    File::new(project.join("src/generated.rs"), generator.bytes())
        .write()
        .expect("Failed to write generated.rs");

    let output = Command::new("cargo")
        .args(["run", "--quiet"])
        .current_dir(project)
        .env_remove("CARGO_TARGET_DIR")
        .env("RUSTFLAGS", "-D warnings")
        .output()
        .expect("Failed to run cargo run");

    if !output.status.success() {
        eprintln!("\n=== Generated code ===");
        print_generated(project);
        panic!(
            "Generated code failed!\n\nstdout:\n{}\n\nstderr:\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
    }

    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn print_generated(project: &Path) {
    if let Ok(content) = std::fs::read_to_string(project.join("src/generated.rs")) {
        for line in content.lines() {
            eprintln!("  | {}", line);
        }
    }
}

#[test]
fn test_builder_and_options_round_trip() {
    let config = GeneratorConfig::new()
        .header("// Code generated by \"confgen\" for crate `confgen-e2e`; DO NOT EDIT.")
        .with_options(true);
    let stdout = run_generated(
        "Size i32|Rule Rule|Reverse Rule|Reader Option<Box<dyn std::io::Read>>",
        &config,
        MAIN_RS,
    );

    assert_eq!(stdout.trim(), "size=4 rule=Society reverse=Market reader=false");
}

#[test]
fn test_shadowing_type_names_compile() {
    // Type names that collide with std prelude items used by the output.
    let config = GeneratorConfig::new()
        .type_names(confgen_codegen_rust::TypeNames {
            config: "IntoIterator".to_string(),
            item: "Option".to_string(),
            builder: "Box".to_string(),
            option: "FnOnce".to_string(),
        })
        .with_options(true);
    let main_rs = r#"mod config {
    #![allow(dead_code)]
    include!("generated.rs");
}

fn main() {
    let mut s = config::Box::new().Name("a".to_string()).build();
    s.apply([config::WithName("b".to_string())]);
    assert_eq!(s.Name.get(), "b");
    assert_eq!(s.Name.default(), "a");
    println!("ok");
}
"#;

    let stdout = run_generated("name String", &config, main_rs);
    assert_eq!(stdout.trim(), "ok");
}

#[test]
fn test_camel_case_fields_build_without_warnings() {
    let config = GeneratorConfig::new().with_options(true);
    let main_rs = r#"mod config {
    #![allow(dead_code)]
    include!("generated.rs");
}

use config::*;

fn main() {
    let mut c = ConfigBuilder::new().ErrorHandling(3).MaxRetries(1).build();
    c.apply([WithErrorHandling(5)]);
    assert_eq!(*c.ErrorHandling.get(), 5);
    assert_eq!(*c.ErrorHandling.default(), 3);
    assert_eq!(*c.MaxRetries.get(), 1);
    println!("ok");
}
"#;

    let stdout = run_generated("errorHandling i32|maxRetries u8", &config, main_rs);
    assert_eq!(stdout.trim(), "ok");
}
