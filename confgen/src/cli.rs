use std::{ffi::OsString, path::PathBuf};

use clap::{
    Parser,
    builder::{FalseyValueParser, NonEmptyStringValueParser},
};
use confgen_codegen_rust::{Generator, GeneratorConfig, TypeNames};
use eyre::{Result, WrapErr};
use tracing::debug;

use crate::{logging, package, sink::Sink};

/// Extension trait for exiting on generator errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for confgen_codegen_rust::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "confgen")]
#[command(version)]
#[command(about = "Generate a config struct, its builder and functional options")]
#[command(after_help = "F is a list of \"fieldName TypeName\" separated by '|'.")]
pub(crate) struct Cli {
    /// List of fields separated by '|'
    #[arg(short, long, value_name = "F", value_parser = NonEmptyStringValueParser::new())]
    field: String,

    /// Type name of the config
    #[arg(long, value_name = "NAME", default_value = "Config")]
    config: String,

    /// Type name of the config item
    #[arg(long, value_name = "NAME", default_value = "ConfigItem")]
    config_item: String,

    /// Type name of the config builder
    #[arg(long, value_name = "NAME", default_value = "ConfigBuilder")]
    config_builder: String,

    /// Type name of the config option
    #[arg(long, value_name = "NAME", default_value = "ConfigOption")]
    config_option: String,

    /// Generate option functions in WithXXX style
    #[arg(long)]
    option: bool,

    /// Output file (defaults to <dir>/config.rs)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Prefix for the generated type names
    #[arg(long, value_name = "P", default_value = "")]
    prefix: String,

    /// Do not run rustfmt on the result
    #[arg(long)]
    no_format: bool,

    /// Write the result to stdout
    #[arg(long, env = "CONFGEN_STDOUT", value_parser = FalseyValueParser::new())]
    stdout: bool,

    /// Enable debug logs
    #[arg(long, env = "CONFGEN_DEBUG", value_parser = FalseyValueParser::new())]
    debug: bool,

    /// Crate directory or source files (defaults to the current directory)
    #[arg(value_name = "PATHS")]
    paths: Vec<PathBuf>,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        logging::init(self.debug)?;

        // Malformed fields are reported before the crate is looked up.
        let generator = self.generator().unwrap_or_exit();

        let paths = self.paths();
        let package = package::resolve(&paths).wrap_err("Failed to resolve the target crate")?;

        let args = command_args(std::env::args_os().skip(1));
        let mut generator = generator.with_header(header(&args, &package));
        generator.generate();

        let sink = Sink::new(!self.no_format);
        if self.stdout {
            return sink.write_to(generator.bytes(), &mut std::io::stdout().lock());
        }

        let destination = self
            .output
            .clone()
            .unwrap_or_else(|| package::destination_dir(&paths).join("config.rs"));
        debug!(path = %destination.display(), "writing result");
        sink.write_file(&destination, generator.bytes())?;

        Ok(())
    }

    fn paths(&self) -> Vec<PathBuf> {
        if self.paths.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            self.paths.clone()
        }
    }

    fn generator(&self) -> confgen_codegen_rust::Result<Generator> {
        Generator::new(&self.field, &self.generator_config())
    }

    fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig::new()
            .type_names(TypeNames {
                config: self.config.clone(),
                item: self.config_item.clone(),
                builder: self.config_builder.clone(),
                option: self.config_option.clone(),
            })
            .prefix(&self.prefix)
            .with_options(self.option)
    }
}

/// Command line arguments as text for the header; invalid UTF-8 is replaced.
fn command_args(args: impl IntoIterator<Item = OsString>) -> Vec<String> {
    args.into_iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}

/// First line of every generated file.
fn header(args: &[String], package: &str) -> String {
    format!(
        "// Code generated by \"confgen {}\" for crate `{}`; DO NOT EDIT.",
        args.join(" "),
        package
    )
}
