use crate::{config::Config, gateways, view};
use anyhow::{anyhow, Result};
use redesaude_boundary as json;
use redesaude_core::{
    gateways::alert::{Alert, AlertGateway},
    state::{reduce, Action, AppState},
    usecases,
};
use std::io::{self, Write};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc,
    task,
};

const QUIT_COMMAND: &str = ":q";

/// Run the interactive mode until the user quits.
pub fn run(cfg: Config) -> Result<()> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let result = rt.block_on(event_loop(cfg, &view::TerminalAlerts));
    // Neither a pending download nor a blocked stdin
    // reader should delay the shutdown.
    rt.shutdown_background();
    result
}

async fn event_loop<A: AlertGateway>(cfg: Config, alerts: &A) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Action>();

    let catalog_gw = gateways::catalog_gateway(&cfg.catalog);
    task::spawn_blocking({
        let tx = tx.clone();
        move || {
            let action = usecases::load_catalog(&catalog_gw);
            let _ = tx.send(action);
        }
    });

    let location_gw = gateways::location_gateway(&cfg.location);
    let accuracy = cfg.location.accuracy;
    let mut watch = task::spawn_blocking({
        let tx = tx.clone();
        move || {
            usecases::watch_device_position(&location_gw, accuracy, move |action| {
                let _ = tx.send(action);
            })
        }
    });
    let mut watch_started = false;
    let mut subscription = None;

    let mut state = AppState::new(cfg.map);
    let mut out = io::stdout();
    view::render_header(&mut out)?;
    out.flush()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            Some(action) = rx.recv() => {
                let position_only = matches!(action, Action::PositionUpdated(_));
                let (next, new_alerts) = reduce(state, action);
                state = next;
                for alert in &new_alerts {
                    alerts.show(alert);
                }
                if position_only {
                    view::render_location(&mut out, &state)?;
                } else {
                    view::render(&mut out, &state)?;
                }
                out.flush()?;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    log::debug!("End of input");
                    break;
                };
                let Some(actions) = input_actions(line) else {
                    break;
                };
                for action in actions {
                    // Processed in order behind all pending background results
                    let _ = tx.send(action);
                }
            }
            result = &mut watch, if !watch_started => {
                watch_started = true;
                match result {
                    Ok(watching) => subscription = watching,
                    Err(err) => log::error!("Location watch task failed: {err}"),
                }
            }
        }
    }
    if let Some(subscription) = subscription {
        log::debug!("Stop watching the device position");
        subscription.cancel();
    }
    Ok(())
}

/// Each input line is submitted verbatim as the search term.
///
/// Returns `None` if the user wants to quit.
fn input_actions(line: String) -> Option<[Action; 2]> {
    if line == QUIT_COMMAND {
        return None;
    }
    Some([Action::SearchTermChanged(line), Action::SearchSubmitted])
}

/// Search once and print the results.
///
/// Fails if the catalog cannot be loaded.
pub fn search(cfg: Config, query: String, as_json: bool) -> Result<()> {
    let catalog_gw = gateways::catalog_gateway(&cfg.catalog);
    let state = match usecases::load_catalog(&catalog_gw) {
        Action::CatalogFailed(reason) => {
            view::TerminalAlerts.show(&Alert::catalog_unavailable());
            return Err(anyhow!(reason));
        }
        loaded => [
            loaded,
            Action::SearchTermChanged(query),
            Action::SearchSubmitted,
        ]
        .into_iter()
        .fold(AppState::new(cfg.map), |state, action| {
            reduce(state, action).0
        }),
    };
    let mut out = io::stdout().lock();
    if as_json {
        let response = search_response(&state);
        serde_json::to_writer_pretty(&mut out, &response)?;
        writeln!(out)?;
    } else {
        view::render(&mut out, &state)?;
    }
    out.flush()?;
    Ok(())
}

fn search_response(state: &AppState) -> json::SearchResponse {
    json::SearchResponse {
        query: state.search_term.clone(),
        results: state.search_results.iter().map(Into::into).collect(),
        markers: state.markers.iter().cloned().map(Into::into).collect(),
    }
}
