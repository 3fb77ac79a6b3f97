//! Subcommand dispatch.

use anyhow::{Context, Result};
use log::info;
use tokio::io::BufReader;

use super::interactive::run_interactive;
use super::output::{format_history_entry, format_result};
use super::session::Session;
use crate::config::{Cli, Command, Config, Credentials};
use crate::export::export_history;
use crate::geocode::OpenCageGeocoder;
use crate::history::HistoryStore;
use crate::initialization::init_pipeline;
use crate::ip_location::IpApiLocator;
use crate::map::MapView;
use crate::phone::PhonenumberProvider;

/// Runs the parsed command line.
///
/// The geocoder key is only required by commands that perform lookups.
pub async fn run(cli: Cli) -> Result<()> {
    let config = cli.config();

    match cli.command {
        Command::Lookup(args) => {
            let mut session = new_session(config)?;
            let tracked = session.track(&args.number, &args.options).await?;
            println!(
                "{}",
                format_result(&tracked.result, tracked.map_file.as_deref())
            );
        }
        Command::Interactive(args) => {
            let mut session = new_session(config)?;
            let stdin = BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            run_interactive(&mut session, &args, stdin, &mut stdout)
                .await
                .context("Failed to read from stdin")?;
        }
        Command::History(args) => {
            let store = HistoryStore::load(&config.history_path);
            let entries = store.filter(&args.filter);
            if entries.is_empty() {
                println!("No history found.");
            }
            for entry in entries {
                println!("{}\n", format_history_entry(entry));
            }
        }
        Command::ClearHistory => {
            let mut store = HistoryStore::load(&config.history_path);
            store.clear().context("Failed to clear history")?;
            println!("History cleared.");
        }
        Command::Export(args) => {
            let store = HistoryStore::load(&config.history_path);
            let opts = args.options(&config.history_export_path);
            let count = export_history(&store, &opts)?;
            match &opts.output {
                Some(path) => println!("Exported {} record(s) to {}", count, path.display()),
                None => info!("Exported {} record(s) to stdout", count),
            }
        }
        Command::HistoryMap(args) => {
            let store = HistoryStore::load(&config.history_path);
            let output = args.output.unwrap_or(config.history_map_path);
            match MapView::for_history(store.all()) {
                Some(view) => {
                    view.save(&output)?;
                    println!("History map saved as: {}", output.display());
                }
                None => println!("No history to map."),
            }
        }
    }

    Ok(())
}

type DefaultSession = Session<PhonenumberProvider, OpenCageGeocoder, IpApiLocator>;

fn new_session(config: Config) -> Result<DefaultSession> {
    let credentials = Credentials::from_env()?;
    let pipeline =
        init_pipeline(&config, &credentials).context("Failed to initialize lookup pipeline")?;
    info!(
        "Loaded {} cached location(s) and {} history entries",
        pipeline.cache().len(),
        pipeline.history().len()
    );
    Ok(Session::new(pipeline, config))
}
