use crate::app::crud::run_crud;
use crate::config::commands::{Command, OverviewCommand, VluchtCyclusCommand};
use crate::config::{CliConfig, FleetSettings, LocalStorage};
use crate::core::client::ApiClient;
use crate::core::export::FleetExporter;
use crate::core::overview::{CyclusOverview, DroneStatusOverview, EventOverview};
use crate::core::render::{render_list, OutputFormat};
use crate::core::selection::FlightCandidates;
use crate::core::{ConfigProvider, Result};
use crate::domain::model::{
    Cyclus, Docking, DockingCyclus, Drone, Event, Startplaats, Verslag, VluchtCyclus, Zone,
};
use crate::utils::error::FleetError;
use crate::utils::validation::Validate;
use serde::Serialize;

/// 執行一個 CLI 指令並回傳要印到 stdout 的內容
pub async fn run(cli: &CliConfig) -> Result<String> {
    let settings = cli.settings()?;
    settings.validate()?;
    tracing::debug!("Resolved settings: {:?}", settings);

    let client = ApiClient::new(settings)?;
    let format = cli.format;

    match &cli.command {
        Command::Drones { action } => {
            run_crud::<Drone, _>(&client, action.to_request(), format).await
        }
        Command::Dockings { action } => {
            run_crud::<Docking, _>(&client, action.to_request(), format).await
        }
        Command::Startplaatsen { action } => {
            run_crud::<Startplaats, _>(&client, action.to_request(), format).await
        }
        Command::Zones { action } => {
            run_crud::<Zone, _>(&client, action.to_request(), format).await
        }
        Command::Events { action } => {
            run_crud::<Event, _>(&client, action.to_request(), format).await
        }
        Command::Verslagen { action } => {
            run_crud::<Verslag, _>(&client, action.to_request(), format).await
        }
        Command::Cycli { action } => {
            run_crud::<Cyclus, _>(&client, action.to_request(), format).await
        }
        Command::VluchtCycli { action } => run_vlucht_cyclus(&client, action, format).await,
        Command::DockingCycli { action } => {
            run_crud::<DockingCyclus, _>(&client, action.to_request(), format).await
        }
        Command::Overview { action } => run_overview(&client, action, format).await,
        Command::Export { .. } => {
            let output_path = client.config().output_path().to_string();
            let exporter = FleetExporter::new(LocalStorage::new(output_path.clone()), output_path);
            let summary = exporter.export(&client).await?;
            match format {
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&summary)?),
                OutputFormat::Table | OutputFormat::Csv => Ok(summary.to_text()),
            }
        }
    }
}

async fn run_vlucht_cyclus(
    client: &ApiClient<FleetSettings>,
    action: &VluchtCyclusCommand,
    format: OutputFormat,
) -> Result<String> {
    match action {
        VluchtCyclusCommand::Crud(crud) => {
            run_crud::<VluchtCyclus, _>(client, crud.to_request(), format).await
        }
        VluchtCyclusCommand::Status { id, status } => {
            client.update_vlucht_cyclus_status(*id, status).await?;
            Ok(format!("✅ vlucht cyclus {} is now {}", id, status))
        }
        VluchtCyclusCommand::AttachVerslag { id, verslag_id } => {
            client.attach_verslag(*id, *verslag_id).await?;
            Ok(format!(
                "✅ verslag {} attached to vlucht cyclus {}",
                verslag_id, id
            ))
        }
        VluchtCyclusCommand::Candidates { vlucht_cyclus_id } => {
            let candidates = FlightCandidates::gather(client, *vlucht_cyclus_id).await?;
            match format {
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&candidates)?),
                OutputFormat::Csv => Err(csv_not_supported("vlucht-cycli candidates")),
                OutputFormat::Table => Ok([
                    format!("Drones\n{}", render_list(&candidates.drones, format, "drones")?),
                    format!(
                        "Startplaatsen\n{}",
                        render_list(&candidates.places, format, "startplaatsen")?
                    ),
                    format!("Zones\n{}", render_list(&candidates.zones, format, "zones")?),
                    format!(
                        "Verslagen\n{}",
                        render_list(&candidates.verslagen, format, "verslagen")?
                    ),
                ]
                .join("\n\n")),
            }
        }
    }
}

async fn run_overview(
    client: &ApiClient<FleetSettings>,
    action: &OverviewCommand,
    format: OutputFormat,
) -> Result<String> {
    match action {
        OverviewCommand::Drones => {
            let overview = DroneStatusOverview::build(client).await?;
            summary_output(&overview, overview.to_text(), format, "overview drones")
        }
        OverviewCommand::Event { id } => {
            let overview = EventOverview::build(client, *id).await?;
            summary_output(&overview, overview.to_text(), format, "overview event")
        }
        OverviewCommand::Cyclus { id } => {
            let overview = CyclusOverview::build(client, *id).await?;
            summary_output(&overview, overview.to_text(), format, "overview cyclus")
        }
    }
}

fn summary_output<T: Serialize>(
    value: &T,
    text: String,
    format: OutputFormat,
    command: &str,
) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(text),
        OutputFormat::Csv => Err(csv_not_supported(command)),
    }
}

fn csv_not_supported(command: &str) -> FleetError {
    FleetError::InvalidConfigValueError {
        field: "format".to_string(),
        value: "csv".to_string(),
        reason: format!("{} supports table or json output only", command),
    }
}
