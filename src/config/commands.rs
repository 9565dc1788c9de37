use crate::app::crud::CrudRequest;
use crate::config::{FleetConfig, FleetSettings};
use crate::core::render::OutputFormat;
use crate::core::ResourceKind;
use crate::domain::model::{
    CyclusInput, DockingCyclusInput, DroneInput, DroneStatus, EventInput, LocationInput,
    VerslagInput, VluchtCyclusInput, VluchtCyclusStatus, ZoneInput,
};
use crate::utils::error::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Parser)]
#[command(name = "fleet-admin")]
#[command(about = "Administration CLI for the drone fleet REST API")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Base URL of the fleet API, e.g. https://host/api")]
    pub api_base_url: Option<String>,

    #[arg(long, global = true, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(short, long, global = true, help = "Do not ask before deleting")]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    /// 預設值 ← `--config` 檔案 ← 命令列參數
    pub fn settings(&self) -> Result<FleetSettings> {
        let mut settings = match &self.config {
            Some(path) => FleetConfig::from_file(path)?.into_settings()?,
            None => FleetSettings::default(),
        };

        if let Some(url) = &self.api_base_url {
            settings.api_base_url = url.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            settings.timeout_seconds = timeout;
        }
        if let Command::Export {
            output_path: Some(path),
        } = &self.command
        {
            settings.output_path = path.clone();
        }

        Ok(settings)
    }

    /// 刪除前需要確認的目標
    pub fn delete_target(&self) -> Option<(ResourceKind, i64)> {
        match &self.command {
            Command::Drones {
                action: DroneCommand::Delete { id },
            } => Some((ResourceKind::Drone, *id)),
            Command::Dockings {
                action: LocationCommand::Delete { id },
            } => Some((ResourceKind::Docking, *id)),
            Command::Startplaatsen {
                action: StartplaatsCommand::Delete { id },
            } => Some((ResourceKind::Startplaats, *id)),
            Command::Zones {
                action: ZoneCommand::Delete { id },
            } => Some((ResourceKind::Zone, *id)),
            Command::Events {
                action: EventCommand::Delete { id },
            } => Some((ResourceKind::Event, *id)),
            Command::Verslagen {
                action: VerslagCommand::Delete { id },
            } => Some((ResourceKind::Verslag, *id)),
            Command::Cycli {
                action: CyclusCommand::Delete { id },
            } => Some((ResourceKind::Cyclus, *id)),
            Command::VluchtCycli {
                action: VluchtCyclusCommand::Crud(VluchtCyclusCrud::Delete { id }),
            } => Some((ResourceKind::VluchtCyclus, *id)),
            Command::DockingCycli {
                action: DockingCyclusCommand::Delete { id },
            } => Some((ResourceKind::DockingCyclus, *id)),
            _ => None,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Drones beheren
    Drones {
        #[command(subcommand)]
        action: DroneCommand,
    },
    /// Dockingstations beheren
    Dockings {
        #[command(subcommand)]
        action: LocationCommand,
    },
    /// Startplaatsen beheren
    Startplaatsen {
        #[command(subcommand)]
        action: StartplaatsCommand,
    },
    /// Zones beheren
    Zones {
        #[command(subcommand)]
        action: ZoneCommand,
    },
    /// Evenementen beheren
    Events {
        #[command(subcommand)]
        action: EventCommand,
    },
    /// Verslagen beheren
    Verslagen {
        #[command(subcommand)]
        action: VerslagCommand,
    },
    /// Cyclus planning
    Cycli {
        #[command(subcommand)]
        action: CyclusCommand,
    },
    /// Vlucht cycli beheren
    VluchtCycli {
        #[command(subcommand)]
        action: VluchtCyclusCommand,
    },
    /// Docking cycli beheren
    DockingCycli {
        #[command(subcommand)]
        action: DockingCyclusCommand,
    },
    /// Dashboard overzichten
    Overview {
        #[command(subcommand)]
        action: OverviewCommand,
    },
    /// Export every resource into a zip snapshot
    Export {
        #[arg(long)]
        output_path: Option<String>,
    },
}

// --- drones ---------------------------------------------------------------

#[derive(Debug, Clone, Args)]
pub struct DroneArgs {
    #[arg(long, default_value = "OFFLINE", value_parser = DroneStatus::from_str)]
    pub status: DroneStatus,

    #[arg(long, allow_negative_numbers = true, help = "Battery level (0-100)")]
    pub batterij: i64,

    #[arg(long, help = "Drone is allowed to take off")]
    pub mag_opstijgen: bool,
}

impl From<&DroneArgs> for DroneInput {
    fn from(args: &DroneArgs) -> Self {
        DroneInput {
            status: args.status.clone(),
            batterij: args.batterij,
            mag_opstijgen: args.mag_opstijgen,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum DroneCommand {
    List,
    Get {
        id: i64,
    },
    Add(DroneArgs),
    Update {
        id: i64,
        #[command(flatten)]
        fields: DroneArgs,
    },
    Delete {
        id: i64,
    },
}

impl DroneCommand {
    pub fn to_request(&self) -> CrudRequest<DroneInput> {
        match self {
            DroneCommand::List => CrudRequest::List(Vec::new()),
            DroneCommand::Get { id } => CrudRequest::Get(*id),
            DroneCommand::Add(args) => CrudRequest::Add(args.into()),
            DroneCommand::Update { id, fields } => CrudRequest::Update(*id, fields.into()),
            DroneCommand::Delete { id } => CrudRequest::Delete(*id),
        }
    }
}

// --- dockings / startplaatsen ---------------------------------------------

#[derive(Debug, Clone, Args)]
pub struct LocationArgs {
    #[arg(long)]
    pub locatie: String,

    #[arg(long, help = "Mark the location as unavailable")]
    pub niet_beschikbaar: bool,
}

impl From<&LocationArgs> for LocationInput {
    fn from(args: &LocationArgs) -> Self {
        LocationInput {
            locatie: args.locatie.clone(),
            isbeschikbaar: !args.niet_beschikbaar,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum LocationCommand {
    List,
    Get {
        id: i64,
    },
    Add(LocationArgs),
    Update {
        id: i64,
        #[command(flatten)]
        fields: LocationArgs,
    },
    Delete {
        id: i64,
    },
}

impl LocationCommand {
    pub fn to_request(&self) -> CrudRequest<LocationInput> {
        match self {
            LocationCommand::List => CrudRequest::List(Vec::new()),
            LocationCommand::Get { id } => CrudRequest::Get(*id),
            LocationCommand::Add(args) => CrudRequest::Add(args.into()),
            LocationCommand::Update { id, fields } => CrudRequest::Update(*id, fields.into()),
            LocationCommand::Delete { id } => CrudRequest::Delete(*id),
        }
    }
}

/// Startplaatsen 可依 event 過濾
#[derive(Debug, Subcommand)]
pub enum StartplaatsCommand {
    List {
        #[arg(long)]
        event_id: Option<i64>,
    },
    Get {
        id: i64,
    },
    Add(LocationArgs),
    Update {
        id: i64,
        #[command(flatten)]
        fields: LocationArgs,
    },
    Delete {
        id: i64,
    },
}

impl StartplaatsCommand {
    pub fn to_request(&self) -> CrudRequest<LocationInput> {
        match self {
            StartplaatsCommand::List { event_id } => CrudRequest::list_by("event_id", *event_id),
            StartplaatsCommand::Get { id } => CrudRequest::Get(*id),
            StartplaatsCommand::Add(args) => CrudRequest::Add(args.into()),
            StartplaatsCommand::Update { id, fields } => CrudRequest::Update(*id, fields.into()),
            StartplaatsCommand::Delete { id } => CrudRequest::Delete(*id),
        }
    }
}

// --- zones ----------------------------------------------------------------

#[derive(Debug, Clone, Args)]
pub struct ZoneArgs {
    #[arg(long)]
    pub naam: String,

    #[arg(long, allow_negative_numbers = true, help = "Width in meters")]
    pub breedte: f64,

    #[arg(long, allow_negative_numbers = true, help = "Length in meters")]
    pub lengte: f64,

    #[arg(long, allow_negative_numbers = true)]
    pub evenement_id: i64,
}

impl From<&ZoneArgs> for ZoneInput {
    fn from(args: &ZoneArgs) -> Self {
        ZoneInput {
            naam: args.naam.clone(),
            breedte: args.breedte,
            lengte: args.lengte,
            evenement_id: args.evenement_id,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ZoneCommand {
    List {
        #[arg(long)]
        event_id: Option<i64>,
    },
    Get {
        id: i64,
    },
    Add(ZoneArgs),
    Update {
        id: i64,
        #[command(flatten)]
        fields: ZoneArgs,
    },
    Delete {
        id: i64,
    },
}

impl ZoneCommand {
    pub fn to_request(&self) -> CrudRequest<ZoneInput> {
        match self {
            ZoneCommand::List { event_id } => CrudRequest::list_by("event_id", *event_id),
            ZoneCommand::Get { id } => CrudRequest::Get(*id),
            ZoneCommand::Add(args) => CrudRequest::Add(args.into()),
            ZoneCommand::Update { id, fields } => CrudRequest::Update(*id, fields.into()),
            ZoneCommand::Delete { id } => CrudRequest::Delete(*id),
        }
    }
}

// --- events ---------------------------------------------------------------

#[derive(Debug, Clone, Args)]
pub struct EventArgs {
    #[arg(long)]
    pub naam: String,

    #[arg(long, help = "YYYY-MM-DD")]
    pub start_datum: String,

    #[arg(long, help = "YYYY-MM-DD")]
    pub eind_datum: String,

    #[arg(long, help = "HH:MM or HH:MM:SS")]
    pub start_tijd: String,

    #[arg(long, help = "HH:MM or HH:MM:SS")]
    pub tijdsduur: String,
}

impl From<&EventArgs> for EventInput {
    fn from(args: &EventArgs) -> Self {
        EventInput {
            naam: args.naam.clone(),
            start_datum: args.start_datum.clone(),
            eind_datum: args.eind_datum.clone(),
            start_tijd: args.start_tijd.clone(),
            tijdsduur: args.tijdsduur.clone(),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum EventCommand {
    List,
    Get {
        id: i64,
    },
    Add(EventArgs),
    Update {
        id: i64,
        #[command(flatten)]
        fields: EventArgs,
    },
    Delete {
        id: i64,
    },
}

impl EventCommand {
    pub fn to_request(&self) -> CrudRequest<EventInput> {
        match self {
            EventCommand::List => CrudRequest::List(Vec::new()),
            EventCommand::Get { id } => CrudRequest::Get(*id),
            EventCommand::Add(args) => CrudRequest::Add(args.into()),
            EventCommand::Update { id, fields } => CrudRequest::Update(*id, fields.into()),
            EventCommand::Delete { id } => CrudRequest::Delete(*id),
        }
    }
}

// --- verslagen ------------------------------------------------------------

#[derive(Debug, Clone, Args)]
pub struct VerslagArgs {
    #[arg(long)]
    pub onderwerp: String,

    #[arg(long)]
    pub inhoud: String,

    #[arg(long)]
    pub verzonden: bool,

    #[arg(long)]
    pub geaccepteerd: bool,

    #[arg(long, allow_negative_numbers = true)]
    pub vlucht_cyclus_id: Option<i64>,
}

impl From<&VerslagArgs> for VerslagInput {
    fn from(args: &VerslagArgs) -> Self {
        VerslagInput {
            onderwerp: args.onderwerp.clone(),
            inhoud: args.inhoud.clone(),
            isverzonden: args.verzonden,
            isgeaccepteerd: args.geaccepteerd,
            vlucht_cyclus_id: args.vlucht_cyclus_id,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum VerslagCommand {
    List {
        #[arg(long)]
        event_id: Option<i64>,
    },
    Get {
        id: i64,
    },
    Add(VerslagArgs),
    Update {
        id: i64,
        #[command(flatten)]
        fields: VerslagArgs,
    },
    Delete {
        id: i64,
    },
}

impl VerslagCommand {
    pub fn to_request(&self) -> CrudRequest<VerslagInput> {
        match self {
            VerslagCommand::List { event_id } => CrudRequest::list_by("event_id", *event_id),
            VerslagCommand::Get { id } => CrudRequest::Get(*id),
            VerslagCommand::Add(args) => CrudRequest::Add(args.into()),
            VerslagCommand::Update { id, fields } => CrudRequest::Update(*id, fields.into()),
            VerslagCommand::Delete { id } => CrudRequest::Delete(*id),
        }
    }
}

// --- cycli ----------------------------------------------------------------

#[derive(Debug, Clone, Args)]
pub struct CyclusArgs {
    #[arg(long, help = "HH:MM or HH:MM:SS")]
    pub startuur: String,

    #[arg(long, help = "HH:MM or HH:MM:SS")]
    pub tijdstip: String,

    #[arg(long, allow_negative_numbers = true)]
    pub vlucht_cyclus_id: Option<i64>,
}

impl From<&CyclusArgs> for CyclusInput {
    fn from(args: &CyclusArgs) -> Self {
        CyclusInput {
            startuur: args.startuur.clone(),
            tijdstip: args.tijdstip.clone(),
            vlucht_cyclus_id: args.vlucht_cyclus_id,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CyclusCommand {
    List {
        #[arg(long)]
        event_id: Option<i64>,
    },
    Get {
        id: i64,
    },
    Add(CyclusArgs),
    Update {
        id: i64,
        #[command(flatten)]
        fields: CyclusArgs,
    },
    Delete {
        id: i64,
    },
}

impl CyclusCommand {
    pub fn to_request(&self) -> CrudRequest<CyclusInput> {
        match self {
            CyclusCommand::List { event_id } => CrudRequest::list_by("event_id", *event_id),
            CyclusCommand::Get { id } => CrudRequest::Get(*id),
            CyclusCommand::Add(args) => CrudRequest::Add(args.into()),
            CyclusCommand::Update { id, fields } => CrudRequest::Update(*id, fields.into()),
            CyclusCommand::Delete { id } => CrudRequest::Delete(*id),
        }
    }
}

// --- vlucht cycli ---------------------------------------------------------

#[derive(Debug, Clone, Args)]
pub struct VluchtCyclusArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub drone_id: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    pub plaats_id: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    pub zone_id: Option<i64>,
}

impl From<&VluchtCyclusArgs> for VluchtCyclusInput {
    fn from(args: &VluchtCyclusArgs) -> Self {
        VluchtCyclusInput {
            drone_id: args.drone_id,
            plaats_id: args.plaats_id,
            zone_id: args.zone_id,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum VluchtCyclusCrud {
    List {
        #[arg(long)]
        cyclus_id: Option<i64>,
    },
    Get {
        id: i64,
    },
    Add(VluchtCyclusArgs),
    Update {
        id: i64,
        #[command(flatten)]
        fields: VluchtCyclusArgs,
    },
    Delete {
        id: i64,
    },
}

impl VluchtCyclusCrud {
    pub fn to_request(&self) -> CrudRequest<VluchtCyclusInput> {
        match self {
            VluchtCyclusCrud::List { cyclus_id } => CrudRequest::list_by("cyclus_id", *cyclus_id),
            VluchtCyclusCrud::Get { id } => CrudRequest::Get(*id),
            VluchtCyclusCrud::Add(args) => CrudRequest::Add(args.into()),
            VluchtCyclusCrud::Update { id, fields } => CrudRequest::Update(*id, fields.into()),
            VluchtCyclusCrud::Delete { id } => CrudRequest::Delete(*id),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum VluchtCyclusCommand {
    #[command(flatten)]
    Crud(VluchtCyclusCrud),
    /// Set the status of a flight cycle
    Status {
        id: i64,
        #[arg(value_parser = VluchtCyclusStatus::from_str)]
        status: VluchtCyclusStatus,
    },
    /// Attach a report to a flight cycle
    AttachVerslag {
        id: i64,
        verslag_id: i64,
    },
    /// Show the drones, places, zones and reports that can be used for a flight cycle
    Candidates {
        #[arg(long)]
        vlucht_cyclus_id: Option<i64>,
    },
}

// --- docking cycli --------------------------------------------------------

#[derive(Debug, Clone, Args)]
pub struct DockingCyclusArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub drone_id: i64,

    #[arg(long, allow_negative_numbers = true)]
    pub docking_id: i64,

    #[arg(long, allow_negative_numbers = true)]
    pub cyclus_id: i64,
}

impl From<&DockingCyclusArgs> for DockingCyclusInput {
    fn from(args: &DockingCyclusArgs) -> Self {
        DockingCyclusInput {
            drone_id: args.drone_id,
            docking_id: args.docking_id,
            cyclus_id: args.cyclus_id,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum DockingCyclusCommand {
    List {
        #[arg(long)]
        cyclus_id: Option<i64>,
    },
    Get {
        id: i64,
    },
    Add(DockingCyclusArgs),
    Update {
        id: i64,
        #[command(flatten)]
        fields: DockingCyclusArgs,
    },
    Delete {
        id: i64,
    },
}

impl DockingCyclusCommand {
    pub fn to_request(&self) -> CrudRequest<DockingCyclusInput> {
        match self {
            DockingCyclusCommand::List { cyclus_id } => {
                CrudRequest::list_by("cyclus_id", *cyclus_id)
            }
            DockingCyclusCommand::Get { id } => CrudRequest::Get(*id),
            DockingCyclusCommand::Add(args) => CrudRequest::Add(args.into()),
            DockingCyclusCommand::Update { id, fields } => CrudRequest::Update(*id, fields.into()),
            DockingCyclusCommand::Delete { id } => CrudRequest::Delete(*id),
        }
    }
}

// --- overview -------------------------------------------------------------

#[derive(Debug, Subcommand)]
pub enum OverviewCommand {
    /// Status distribution and average battery of all drones
    Drones,
    /// An event with its zones, startplaatsen and cycli counts
    Event { id: i64 },
    /// A cyclus with its flight cycles, report and docking cycli
    Cyclus { id: i64 },
}
