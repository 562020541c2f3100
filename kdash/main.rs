use anyhow::{Result, anyhow};
use clap::Parser;
use cli::{Command, PrintArgs};
use k8s_openapi::serde_json;
use kdash_config::{APP_NAME, APP_VERSION, Config};
use kdash_kube::{MemoryStore, PathLinkGenerator};
use kdash_plugin::DefaultPluginManager;
use kdash_printer::{PluginListDescriber, PrintOptions, Printer};
use serde::Serialize;
use std::sync::Arc;
use tokio::runtime::{Builder, Runtime};
use tracing::{error, info};

pub mod cli;
pub mod plugins;
pub mod select;

fn main() -> Result<()> {
    let args = cli::Args::parse();

    let _logging_guard = kdash_common::logging::initialize(APP_NAME, args.log_filter.as_deref())?;
    info!("{} v{} started", APP_NAME, APP_VERSION);

    if let Err(error) = run_application(&args) {
        error!("{} v{} terminated with an error: {}", APP_NAME, APP_VERSION, error);
        Err(error)
    } else {
        info!("{} v{} stopped", APP_NAME, APP_VERSION);
        Ok(())
    }
}

fn run_application(args: &cli::Args) -> Result<()> {
    let rt = Builder::new_multi_thread().enable_all().build()?;

    let config_path = args.config.clone().unwrap_or_else(Config::default_path);
    let config = rt.block_on(Config::load_or_create(&config_path))?;

    let output = match &args.command {
        Command::Print(print) => print_objects(&rt, &config, print)?,
        Command::Plugins { pretty } => {
            let options = print_options(&config, MemoryStore::default())?;
            let response = PluginListDescriber::new().describe("/plugins", &config.namespace, &options)?;
            to_json(&response, *pretty)?
        },
    };

    println!("{output}");
    Ok(())
}

fn print_objects(rt: &Runtime, config: &Config, args: &PrintArgs) -> Result<String> {
    let store = rt.block_on(MemoryStore::from_files(args.files.as_slice(), &config.namespace))?;
    let objects = store.objects().to_vec();
    let printer = Printer::new(print_options(config, store)?);

    let component = if args.list {
        let (api_version, kind, list) =
            select::select_list(&objects, args).ok_or_else(|| anyhow!("no objects match the print arguments"))?;
        info!("printing {} {api_version}/{kind} objects", list.len());
        printer.print_list(&api_version, &kind, &list)?
    } else {
        let object =
            select::select_object(&objects, args).ok_or_else(|| anyhow!("no object matches the print arguments"))?;
        rt.block_on(printer.print(Some(object)))?
    };

    to_json(&component, args.pretty)
}

fn print_options(config: &Config, store: MemoryStore) -> Result<PrintOptions> {
    let plugins = plugins::plugin_store(&config.plugins)?;
    let mut options = PrintOptions::new(
        Arc::new(store),
        Arc::new(PathLinkGenerator::new(&config.link_prefix)),
        Arc::new(DefaultPluginManager::new(plugins)),
    );
    options.disable_labels = !config.show_labels;
    options.enable_events = config.events;

    Ok(options)
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    if pretty {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(serde_json::to_string(value)?)
    }
}
