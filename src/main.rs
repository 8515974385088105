#![doc = include_str!("../README.md")]

use clap::Parser;
use core::error::Error;
use log::LevelFilter;
use serde_json::Value;
use std::{path::PathBuf, process::exit};
use tagsmith::{
    AttributeValue, Attributes, HtmlBuilder, HtmlConfig, compile_config, read_config,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Arguments {
    /// A tag selector, e.g. `div`.
    selector: String,
    /// Inner HTML.
    #[arg(long, default_value = "")]
    inner: String,
    /// A string attribute as `KEY=VALUE`.
    #[arg(long = "attribute", value_parser = parse_text_attribute)]
    attributes: Vec<(String, String)>,
    /// A JSON attribute as `KEY=JSON`.
    #[arg(long = "json", value_parser = parse_json_attribute)]
    json_attributes: Vec<(String, Value)>,
    /// A bare attribute.
    #[arg(long = "flag")]
    flags: Vec<String>,
    /// Omits a closing tag.
    #[arg(long)]
    no_close: bool,
    /// A configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Becomes verbose.
    #[arg(long)]
    verbose: bool,
}

fn main() {
    if let Err(error) = run() {
        eprintln!("{error}");
        exit(1)
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let Arguments {
        selector,
        inner,
        attributes,
        json_attributes,
        flags,
        no_close,
        config,
        verbose,
    } = Arguments::parse();

    initialize_logger(verbose);

    let html = if let Some(path) = config {
        compile_config(read_config(&path)?)?.html().clone()
    } else {
        HtmlConfig::default()
    };

    println!(
        "{}",
        HtmlBuilder::new(html)?.element(
            &selector,
            inner,
            compile_attributes(attributes, json_attributes, flags),
            !no_close,
        )
    );

    Ok(())
}

fn initialize_logger(verbose: bool) {
    let mut builder = env_logger::Builder::new();

    if verbose {
        builder.filter_level(LevelFilter::Debug);
    } else {
        builder.filter_level(LevelFilter::Warn).parse_default_env();
    }

    builder.init();
}

fn compile_attributes(
    attributes: Vec<(String, String)>,
    json_attributes: Vec<(String, Value)>,
    flags: Vec<String>,
) -> Attributes {
    attributes
        .into_iter()
        .map(|(name, value)| (name, AttributeValue::from(value)))
        .chain(
            json_attributes
                .into_iter()
                .map(|(name, value)| (name, value.into())),
        )
        .chain(flags.into_iter().map(|name| (name, true.into())))
        .collect()
}

fn parse_text_attribute(argument: &str) -> Result<(String, String), String> {
    let (name, value) = split_attribute(argument)?;

    Ok((name.to_owned(), value.to_owned()))
}

fn parse_json_attribute(argument: &str) -> Result<(String, Value), String> {
    let (name, value) = split_attribute(argument)?;

    Ok((
        name.to_owned(),
        serde_json::from_str(value).map_err(|error| error.to_string())?,
    ))
}

fn split_attribute(argument: &str) -> Result<(&str, &str), String> {
    argument
        .split_once('=')
        .ok_or_else(|| format!("attribute must be KEY=VALUE: {argument}"))
}
