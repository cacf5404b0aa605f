use std::{fs, path::PathBuf, sync::Arc, time::Instant};

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::{json, Map};
use shell_state::{Action, AppState, Store};
use telemetry::{config::load_config, EventReporter};
use tracing::{info, warn};

/// Replays a JSON array of shell actions and prints the resulting state.
#[derive(Parser, Debug)]
struct Args {
    #[arg(long)]
    actions: PathBuf,
    #[arg(long, default_value = telemetry::config::DEFAULT_CONFIG_FILE)]
    telemetry_config: PathBuf,
    #[arg(long)]
    collector_url: Option<String>,
    #[arg(long)]
    app: Option<String>,
    #[arg(long)]
    no_telemetry: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut config = load_config(&args.telemetry_config)?;
    if let Some(url) = args.collector_url {
        config.collector_url = url;
    }
    if let Some(app) = args.app {
        config.app_name = app;
    }
    if args.no_telemetry {
        config.disabled = true;
    }
    let reporter = EventReporter::http(config).context("invalid telemetry configuration")?;

    let raw = fs::read_to_string(&args.actions)
        .with_context(|| format!("failed to read '{}'", args.actions.display()))?;
    let actions: Vec<Action> = serde_json::from_str(&raw)
        .with_context(|| format!("'{}' is not a JSON array of actions", args.actions.display()))?;

    let started = Instant::now();
    let state = replay(&actions);
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    info!(actions = actions.len(), elapsed_ms, "replay finished");

    println!("{}", serde_json::to_string_pretty(state.as_ref())?);

    let mut meta = Map::new();
    meta.insert("actions".into(), json!(actions.len().to_string()));
    if let Some(send) = reporter.report("replay", elapsed_ms, meta) {
        if let Err(error) = send.await {
            warn!(%error, "telemetry task did not finish");
        }
    }

    Ok(())
}

fn replay(actions: &[Action]) -> Arc<AppState> {
    let mut store = Store::default();
    for action in actions {
        store.dispatch(action);
    }
    store.state()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_actions_in_order() {
        let actions: Vec<Action> = serde_json::from_value(json!([
            { "type": "pages-listed", "pages": [{ "name": "a" }, { "name": "b" }] },
            { "type": "page-loading", "name": "b" },
            { "type": "page-loaded", "meta": { "name": "b" } },
            { "type": "page-changed" },
            { "type": "something-new" },
            { "type": "set-ui-option", "key": "vimMode", "value": true }
        ]))
        .expect("actions");

        let state = replay(&actions);

        assert!(!state.is_loading);
        assert!(state.unsaved_changes);
        assert_eq!(state.current_page.as_ref().map(|p| p.as_str()), Some("b"));
        assert!(state.page("b").and_then(|p| p.last_opened).is_some());
        assert!(state.page("a").and_then(|p| p.last_opened).is_none());
        assert_eq!(state.ui_options.get("vimMode"), Some(&json!(true)));
    }

    #[test]
    fn parses_cli_flags() {
        let args = Args::try_parse_from([
            "replay",
            "--actions",
            "script.json",
            "--no-telemetry",
            "--collector-url",
            "http://localhost:9000",
        ])
        .expect("args");
        assert!(args.no_telemetry);
        assert_eq!(args.collector_url.as_deref(), Some("http://localhost:9000"));
        assert_eq!(args.actions, PathBuf::from("script.json"));
    }
}
