//! Plain-text rendition of the application screen.

use redesaude_core::{
    entities::Facility,
    gateways::alert::{Alert, AlertGateway},
    state::{AppState, LocationStatus},
    usecases,
};
use std::io::{self, Write};

pub const HEADER: &str = "Rede de Saúde Municipal do Recife";
pub const PROMPT: &str = "Digite o nome do bairro (:q para sair)";

const LOCATION_HEADER: &str = "Sua Localização";
const RESULTS_HEADER: &str = "Unidades de Saúde no Bairro";

pub fn render_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{HEADER}")?;
    writeln!(out, "{}", "=".repeat(HEADER.chars().count()))?;
    writeln!(out, "{PROMPT}")
}

pub fn render<W: Write>(out: &mut W, state: &AppState) -> io::Result<()> {
    render_location(out, state)?;
    render_results(out, state)
}

pub fn render_location<W: Write>(out: &mut W, state: &AppState) -> io::Result<()> {
    match &state.location {
        LocationStatus::Denied => return writeln!(out, "Localização desativada"),
        LocationStatus::Unavailable(reason) => {
            return writeln!(out, "Localização indisponível: {reason}")
        }
        LocationStatus::Undetermined | LocationStatus::Tracking => {}
    }
    let Some(position) = state.position else {
        return Ok(());
    };
    writeln!(out)?;
    writeln!(out, "{LOCATION_HEADER}")?;
    writeln!(out, "Latitude: {}", position.pos.lat())?;
    writeln!(out, "Longitude: {}", position.pos.lng())?;
    if let Some(accuracy) = position.accuracy {
        writeln!(out, "Precisão: {accuracy:.0} m")?;
    }
    writeln!(out, "Atualizado em: {} UTC", position.received_at)?;
    if let Some(region) = state.region {
        let bbox = region.bbox();
        writeln!(
            out,
            "Mapa: {} .. {} ({} de {} unidades visíveis)",
            bbox.south_west(),
            bbox.north_east(),
            region.count_visible(&state.markers),
            state.markers.len()
        )?;
    }
    Ok(())
}

fn render_results<W: Write>(out: &mut W, state: &AppState) -> io::Result<()> {
    if let Some(err) = &state.search_error {
        return writeln!(out, "{}", search_error_text(err));
    }
    if state.search_results.is_empty() {
        if !state.search_term.is_empty() && state.catalog.catalog().is_some() {
            writeln!(out, "Nenhuma unidade encontrada para '{}'", state.search_term)?;
        }
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "{RESULTS_HEADER}")?;
    for facility in &state.search_results {
        writeln!(out)?;
        render_facility(out, facility)?;
        if let Some(distance) = state.distance_to(facility) {
            writeln!(out, "Distância: {distance}")?;
        }
    }
    Ok(())
}

fn render_facility<W: Write>(out: &mut W, facility: &Facility) -> io::Result<()> {
    let field = |value: &Option<String>| value.clone().unwrap_or_default();
    writeln!(out, "Nome: {}", facility.name)?;
    writeln!(out, "Endereço: {}", field(&facility.address))?;
    writeln!(out, "Tipo de Patrimônio: {}", field(&facility.patrimony))?;
    writeln!(out, "Tipo: {}", field(&facility.type_code))
}

fn search_error_text(err: &usecases::Error) -> &'static str {
    match err {
        usecases::Error::CatalogNotLoaded => {
            "Os dados da rede de saúde ainda estão sendo carregados. Tente novamente em instantes."
        }
        usecases::Error::CatalogUnavailable => {
            "Os dados da rede de saúde não estão disponíveis."
        }
    }
}

pub fn render_alert<W: Write>(out: &mut W, alert: &Alert) -> io::Result<()> {
    writeln!(out, "[{}] {}", alert.title, alert.message)
}

#[derive(Debug, Default)]
pub struct TerminalAlerts;

impl AlertGateway for TerminalAlerts {
    fn show(&self, alert: &Alert) {
        let mut out = io::stdout().lock();
        if let Err(err) = render_alert(&mut out, alert).and_then(|()| out.flush()) {
            log::error!("Unable to show alert '{}': {err}", alert.title);
        }
    }
}
