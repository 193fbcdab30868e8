use crate::{config::Config, gateways::geocoding_gateway};
use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};
use tokio::{
    io::{self, AsyncBufReadExt as _, BufReader},
    time::timeout,
};
use walkmap_application::prelude::SuggestionController;
use walkmap_boundary as json;
use walkmap_core::{
    entities::{address::AddressSuggestion, walkability::WalkabilityDataset},
    gateways::geocode::GeoCodingGateway,
    layers::{build_layers, build_render_plan},
    suggestion::FieldState,
    usecases,
};

#[derive(Parser)]
#[command(name = "walkmap", version, about = "Resolve addresses and lay out walkability maps")]
pub struct Cli {
    /// Configuration file (default: walkmap.toml)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print address suggestions for a query
    Suggest { query: String },

    /// Resolve an address to coordinates
    Resolve { address: String },

    /// Lay out the maps of a walkability dataset (JSON)
    Render {
        dataset: PathBuf,

        /// Print only the directives of the walkability layers
        #[arg(long)]
        directives_only: bool,
    },

    /// Suggest addresses while typing lines on stdin
    ///
    /// `:select N` selects the N-th suggestion, `:dismiss` hides
    /// the suggestions and `:quit` exits.
    Autocomplete,
}

pub async fn run(cli: Cli) -> Result<()> {
    let cfg = Config::try_load_from_file_or_default(cli.config.as_ref())?;
    match cli.command {
        Command::Suggest { query } => {
            let gateway = geocoding_gateway(&cfg.geocoding)?;
            let suggestions = usecases::suggest_addresses(&*gateway, &query).await?;
            print_json(
                &suggestions
                    .into_iter()
                    .map(json::AddressSuggestion::from)
                    .collect::<Vec<_>>(),
            )
        }
        Command::Resolve { address } => {
            let gateway = geocoding_gateway(&cfg.geocoding)?;
            let resolved = usecases::resolve_address(&*gateway, &address).await?;
            print_json(&json::ResolvedAddress::from(resolved))
        }
        Command::Render {
            dataset,
            directives_only,
        } => {
            let dataset = load_dataset(&dataset)?;
            if directives_only {
                let directives = build_layers(&dataset, &cfg.map.layers)
                    .into_iter()
                    .map(json::RenderDirective::from)
                    .collect::<Vec<_>>();
                print_json(&directives)
            } else {
                print_json(&json::RenderPlan::from(build_render_plan(&dataset, &cfg.map)))
            }
        }
        Command::Autocomplete => {
            let gateway = geocoding_gateway(&cfg.geocoding)?;
            // The last lookup may still be running when stdin is exhausted.
            let settle = cfg.suggestions.debounce + Duration::from_secs(10);
            autocomplete(gateway, cfg.suggestions.debounce, settle).await
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn load_dataset(path: &Path) -> Result<WalkabilityDataset> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Unable to read dataset {}", path.display()))?;
    parse_dataset(&content).with_context(|| format!("Invalid dataset {}", path.display()))
}

fn parse_dataset(content: &str) -> Result<WalkabilityDataset> {
    let data: json::WalkabilityData = serde_json::from_str(content)?;
    Ok(WalkabilityDataset::try_from(data)?)
}

#[derive(Debug, PartialEq, Eq)]
enum Interaction<'a> {
    Input(&'a str),
    Select(usize),
    Dismiss,
    Quit,
}

impl<'a> Interaction<'a> {
    fn parse(line: &'a str) -> Self {
        match line.trim() {
            ":quit" | ":q" => Self::Quit,
            ":dismiss" => Self::Dismiss,
            cmd => match cmd
                .strip_prefix(":select")
                .and_then(|n| n.trim().parse().ok())
            {
                Some(n) => Self::Select(n),
                None => Self::Input(line),
            },
        }
    }
}

async fn autocomplete(
    gateway: Arc<dyn GeoCodingGateway>,
    debounce: Duration,
    settle: Duration,
) -> Result<()> {
    let mut ctrl = SuggestionController::new("address", gateway, debounce);
    let mut updates = ctrl.subscribe();
    let mut lines = BufReader::new(io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match Interaction::parse(&line) {
                    Interaction::Quit => return Ok(()),
                    Interaction::Dismiss => ctrl.dismiss(),
                    Interaction::Input(value) => ctrl.input(value),
                    Interaction::Select(n) => {
                        let selected = n
                            .checked_sub(1)
                            .and_then(|i| ctrl.suggestions().get(i).cloned());
                        match selected.and_then(|s| ctrl.select(&s)) {
                            Some(resolved) => print_json(&json::ResolvedAddress::from(resolved))?,
                            None => eprintln!("There is no suggestion {n}"),
                        }
                    }
                }
            }
            Ok(()) = updates.changed() => {
                print_suggestions(&updates.borrow_and_update());
            }
        }
    }
    if matches!(ctrl.state(), FieldState::Pending(_)) {
        if let Ok(Ok(())) = timeout(settle, updates.changed()).await {
            print_suggestions(&updates.borrow_and_update());
        }
    }
    Ok(())
}

fn print_suggestions(suggestions: &[AddressSuggestion]) {
    if suggestions.is_empty() {
        println!("(no suggestions)");
        return;
    }
    for (i, s) in suggestions.iter().enumerate() {
        println!(
            "[{}] {} ({:.6}, {:.6})",
            i + 1,
            s.display_name,
            s.pos.lat(),
            s.pos.lng()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use walkmap_core::entities::render::RenderDirective;

    #[test]
    fn parse_interactions() {
        assert_eq!(Interaction::parse(":quit"), Interaction::Quit);
        assert_eq!(Interaction::parse(" :dismiss "), Interaction::Dismiss);
        assert_eq!(Interaction::parse(":select 2"), Interaction::Select(2));
        assert_eq!(Interaction::parse(":select"), Interaction::Input(":select"));
        assert_eq!(Interaction::parse("1 Main St"), Interaction::Input("1 Main St"));
        assert_eq!(Interaction::parse(""), Interaction::Input(""));
    }

    #[test]
    fn parse_cli() {
        let cli = Cli::try_parse_from(["walkmap", "render", "data.json", "--directives-only"])
            .unwrap();
        assert!(cli.config.is_none());
        assert!(matches!(
            cli.command,
            Command::Render {
                directives_only: true,
                ..
            }
        ));
        let cli = Cli::try_parse_from(["walkmap", "resolve", "1 Main St", "-c", "other.toml"])
            .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("other.toml")));
        assert!(Cli::try_parse_from(["walkmap", "suggest"]).is_err());
    }

    #[test]
    fn render_dataset_with_malformed_poi_geometries() {
        let dataset = parse_dataset(
            r#"{
              "center": { "lat": 45.5017, "lon": -73.5673 },
              "breakdown": [{ "name": "metro", "weight": 0.4, "nearby_count": 3 }],
              "buffers_m": [800],
              "nearby": [
                { "name": "Short", "category": "metro",
                  "geometry": { "type": "Point", "coordinates": [1.0] } },
                { "name": "McGill", "category": "metro",
                  "geometry": { "type": "Point", "coordinates": [-73.5712, 45.5041] } },
                { "name": "Null", "category": "metro",
                  "geometry": { "type": "Point", "coordinates": null } }
              ]
            }"#,
        )
        .unwrap();
        let directives = build_layers(&dataset, &Default::default());
        assert_eq!(directives.len(), 3);
        match &directives[2] {
            RenderDirective::Marker { pos, popup, .. } => {
                assert_eq!(pos.lat(), 45.5041);
                assert_eq!(pos.lng(), -73.5712);
                assert!(popup.contains("McGill"));
            }
            other => panic!("unexpected directive {other:?}"),
        }
    }

    #[test]
    fn reject_misaligned_buffers() {
        let err = parse_dataset(
            r#"{
              "center": { "lat": 45.5, "lon": -73.5 },
              "breakdown": [{ "name": "metro", "weight": 0.4, "nearby_count": 3 }],
              "buffers_m": []
            }"#,
        )
        .err()
        .unwrap();
        assert!(err.to_string().contains("buffer radii"));
    }

    #[test]
    fn render_demo_dataset() {
        let dataset = load_dataset(Path::new("demos/montreal.json")).unwrap();
        let plan = build_render_plan(&dataset, &Default::default());
        assert!(plan.gradient.is_some());
        assert!(!plan.walkability.directives.is_empty());
        let plan = json::RenderPlan::from(plan);
        assert!(serde_json::to_string(&plan).is_ok());
    }
}
