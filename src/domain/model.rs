use crate::domain::ports::{FormInput, Resource};
use crate::utils::error::{FleetError, Result};
use crate::utils::validation::{
    normalize_time, parse_iso_date, parse_time, require_text, validate_date_order,
    validate_positive, validate_positive_id, validate_range, Validate,
};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// API 上的每一種資源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    Drone,
    Docking,
    Startplaats,
    Zone,
    Event,
    Verslag,
    Cyclus,
    VluchtCyclus,
    DockingCyclus,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 9] = [
        ResourceKind::Drone,
        ResourceKind::Docking,
        ResourceKind::Startplaats,
        ResourceKind::Zone,
        ResourceKind::Event,
        ResourceKind::Verslag,
        ResourceKind::Cyclus,
        ResourceKind::VluchtCyclus,
        ResourceKind::DockingCyclus,
    ];

    /// 相對於 API base URL 的預設路徑
    pub fn default_path(&self) -> &'static str {
        match self {
            ResourceKind::Drone => "drones",
            ResourceKind::Docking => "docking",
            ResourceKind::Startplaats => "startplaatsen",
            ResourceKind::Zone => "zones",
            ResourceKind::Event => "events",
            ResourceKind::Verslag => "verslagen",
            ResourceKind::Cyclus => "cycli",
            ResourceKind::VluchtCyclus => "vlucht-cycli",
            ResourceKind::DockingCyclus => "docking-cycli",
        }
    }

    /// `[endpoints]` 設定區塊與匯出檔名使用的鍵
    pub fn config_key(&self) -> &'static str {
        match self {
            ResourceKind::Drone => "drones",
            ResourceKind::Docking => "dockings",
            ResourceKind::Startplaats => "startplaatsen",
            ResourceKind::Zone => "zones",
            ResourceKind::Event => "events",
            ResourceKind::Verslag => "verslagen",
            ResourceKind::Cyclus => "cycli",
            ResourceKind::VluchtCyclus => "vlucht_cycli",
            ResourceKind::DockingCyclus => "docking_cycli",
        }
    }

    pub fn from_config_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.config_key() == key)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Drone => "drone",
            ResourceKind::Docking => "docking",
            ResourceKind::Startplaats => "startplaats",
            ResourceKind::Zone => "zone",
            ResourceKind::Event => "event",
            ResourceKind::Verslag => "verslag",
            ResourceKind::Cyclus => "cyclus",
            ResourceKind::VluchtCyclus => "vlucht cyclus",
            ResourceKind::DockingCyclus => "docking cyclus",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            ResourceKind::Drone => "drones",
            ResourceKind::Docking => "dockings",
            ResourceKind::Startplaats => "startplaatsen",
            ResourceKind::Zone => "zones",
            ResourceKind::Event => "events",
            ResourceKind::Verslag => "verslagen",
            ResourceKind::Cyclus => "cycli",
            ResourceKind::VluchtCyclus => "vlucht cycli",
            ResourceKind::DockingCyclus => "docking cycli",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Status enums
// ---------------------------------------------------------------------------

/// 未知的狀態字串保留在 `Unknown` 裡，列表照樣能顯示
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DroneStatus {
    Available,
    InUse,
    Maintenance,
    Offline,
    Unknown(String),
}

impl DroneStatus {
    pub const VALID: [&'static str; 4] = ["AVAILABLE", "IN_USE", "MAINTENANCE", "OFFLINE"];

    pub fn as_str(&self) -> &str {
        match self {
            DroneStatus::Available => "AVAILABLE",
            DroneStatus::InUse => "IN_USE",
            DroneStatus::Maintenance => "MAINTENANCE",
            DroneStatus::Offline => "OFFLINE",
            DroneStatus::Unknown(raw) => raw,
        }
    }

    fn from_wire(raw: &str) -> Option<Self> {
        match raw {
            "AVAILABLE" => Some(DroneStatus::Available),
            "IN_USE" => Some(DroneStatus::InUse),
            "MAINTENANCE" => Some(DroneStatus::Maintenance),
            "OFFLINE" => Some(DroneStatus::Offline),
            _ => None,
        }
    }
}

impl From<String> for DroneStatus {
    fn from(raw: String) -> Self {
        DroneStatus::from_wire(&raw).unwrap_or(DroneStatus::Unknown(raw))
    }
}

impl From<DroneStatus> for String {
    fn from(status: DroneStatus) -> Self {
        status.as_str().to_string()
    }
}

impl FromStr for DroneStatus {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self> {
        let wire = s.trim().to_ascii_uppercase().replace('-', "_");
        DroneStatus::from_wire(&wire).ok_or_else(|| {
            FleetError::validation(
                "status",
                format!(
                    "Invalid status '{}'. Must be one of: {}",
                    s,
                    DroneStatus::VALID.join(", ")
                ),
            )
        })
    }
}

/// 伺服器沒給狀態時當成未知
impl Default for DroneStatus {
    fn default() -> Self {
        DroneStatus::Unknown("UNKNOWN".to_string())
    }
}

fn deserialize_drone_status<'de, D>(deserializer: D) -> std::result::Result<DroneStatus, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .map(DroneStatus::from)
        .unwrap_or_default())
}

impl fmt::Display for DroneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VluchtCyclusStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
    Unknown(String),
}

impl VluchtCyclusStatus {
    pub const VALID: [&'static str; 4] = ["PENDING", "IN_PROGRESS", "COMPLETED", "CANCELLED"];

    pub fn as_str(&self) -> &str {
        match self {
            VluchtCyclusStatus::Pending => "PENDING",
            VluchtCyclusStatus::InProgress => "IN_PROGRESS",
            VluchtCyclusStatus::Completed => "COMPLETED",
            VluchtCyclusStatus::Cancelled => "CANCELLED",
            VluchtCyclusStatus::Unknown(raw) => raw,
        }
    }

    fn from_wire(raw: &str) -> Option<Self> {
        match raw {
            "PENDING" => Some(VluchtCyclusStatus::Pending),
            "IN_PROGRESS" => Some(VluchtCyclusStatus::InProgress),
            "COMPLETED" => Some(VluchtCyclusStatus::Completed),
            "CANCELLED" => Some(VluchtCyclusStatus::Cancelled),
            _ => None,
        }
    }
}

impl From<String> for VluchtCyclusStatus {
    fn from(raw: String) -> Self {
        VluchtCyclusStatus::from_wire(&raw).unwrap_or(VluchtCyclusStatus::Unknown(raw))
    }
}

impl From<VluchtCyclusStatus> for String {
    fn from(status: VluchtCyclusStatus) -> Self {
        status.as_str().to_string()
    }
}

impl FromStr for VluchtCyclusStatus {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self> {
        let wire = s.trim().to_ascii_uppercase().replace('-', "_");
        VluchtCyclusStatus::from_wire(&wire).ok_or_else(|| {
            FleetError::validation(
                "status",
                format!(
                    "Invalid status '{}'. Must be one of: {}",
                    s,
                    VluchtCyclusStatus::VALID.join(", ")
                ),
            )
        })
    }
}

impl fmt::Display for VluchtCyclusStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Entities（API 回傳的 JSON 形狀；id 欄位大小寫不一，兩種都接受）
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drone {
    #[serde(rename = "Id", alias = "id")]
    pub id: i64,
    #[serde(default, deserialize_with = "deserialize_drone_status")]
    pub status: DroneStatus,
    #[serde(default)]
    pub batterij: i64,
    #[serde(rename = "magOpstijgen", default)]
    pub mag_opstijgen: bool,
}

/// Docking 與 Startplaats 共用同樣的欄位
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Docking {
    #[serde(rename = "Id", alias = "id")]
    pub id: i64,
    #[serde(default)]
    pub locatie: String,
    #[serde(default)]
    pub isbeschikbaar: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Startplaats {
    #[serde(rename = "Id", alias = "id")]
    pub id: i64,
    #[serde(default)]
    pub locatie: String,
    #[serde(default)]
    pub isbeschikbaar: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    #[serde(rename = "Id", alias = "id")]
    pub id: i64,
    #[serde(default)]
    pub naam: String,
    #[serde(default)]
    pub breedte: f64,
    #[serde(default)]
    pub lengte: f64,
    #[serde(rename = "EvenementId", alias = "evenement_id", default)]
    pub evenement_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "Id", alias = "id")]
    pub id: i64,
    #[serde(rename = "Naam", default)]
    pub naam: String,
    #[serde(rename = "StartDatum", default)]
    pub start_datum: String,
    #[serde(rename = "EindDatum", default)]
    pub eind_datum: String,
    #[serde(rename = "StartTijd", default)]
    pub start_tijd: String,
    #[serde(rename = "Tijdsduur", default)]
    pub tijdsduur: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verslag {
    #[serde(rename = "Id", alias = "id")]
    pub id: i64,
    #[serde(default)]
    pub onderwerp: String,
    #[serde(default)]
    pub inhoud: String,
    #[serde(default)]
    pub isverzonden: bool,
    #[serde(default)]
    pub isgeaccepteerd: bool,
    #[serde(rename = "VluchtCyclusId", default)]
    pub vlucht_cyclus_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cyclus {
    #[serde(rename = "Id", alias = "id")]
    pub id: i64,
    #[serde(default)]
    pub startuur: String,
    #[serde(default)]
    pub tijdstip: String,
    #[serde(rename = "VluchtCyclusId", default)]
    pub vlucht_cyclus_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VluchtCyclus {
    #[serde(rename = "Id", alias = "id")]
    pub id: i64,
    #[serde(rename = "VerslagId", default)]
    pub verslag_id: Option<i64>,
    #[serde(rename = "PlaatsId", default)]
    pub plaats_id: Option<i64>,
    #[serde(rename = "DroneId", default)]
    pub drone_id: Option<i64>,
    #[serde(rename = "ZoneId", default)]
    pub zone_id: Option<i64>,
    #[serde(default)]
    pub status: Option<VluchtCyclusStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DockingCyclus {
    #[serde(rename = "Id", alias = "id")]
    pub id: i64,
    #[serde(rename = "DroneId", alias = "droneId")]
    pub drone_id: i64,
    #[serde(rename = "DockingId", alias = "dockingId")]
    pub docking_id: i64,
    #[serde(rename = "CyclusId", alias = "cyclusId")]
    pub cyclus_id: i64,
}

// ---------------------------------------------------------------------------
// Form inputs（POST / PUT 的 body）
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DroneInput {
    pub status: DroneStatus,
    pub batterij: i64,
    #[serde(rename = "magOpstijgen")]
    pub mag_opstijgen: bool,
}

impl Validate for DroneInput {
    fn validate(&self) -> Result<()> {
        if let DroneStatus::Unknown(raw) = &self.status {
            return Err(FleetError::validation(
                "status",
                format!(
                    "Invalid status '{}'. Must be one of: {}",
                    raw,
                    DroneStatus::VALID.join(", ")
                ),
            ));
        }
        validate_range("batterij", self.batterij, 0, 100)
    }
}

impl FormInput for DroneInput {}

/// Docking 與 Startplaats 的表單
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationInput {
    pub locatie: String,
    pub isbeschikbaar: bool,
}

impl Validate for LocationInput {
    fn validate(&self) -> Result<()> {
        require_text("locatie", &self.locatie, "Location is required.")
    }
}

impl FormInput for LocationInput {
    fn normalized(&self) -> Self {
        Self {
            locatie: self.locatie.trim().to_string(),
            isbeschikbaar: self.isbeschikbaar,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneInput {
    pub naam: String,
    pub breedte: f64,
    pub lengte: f64,
    pub evenement_id: i64,
}

impl Validate for ZoneInput {
    fn validate(&self) -> Result<()> {
        require_text("naam", &self.naam, "Zone name is required.")?;
        validate_positive(
            "breedte",
            self.breedte,
            "Please enter a valid positive number for Width.",
        )?;
        validate_positive(
            "lengte",
            self.lengte,
            "Please enter a valid positive number for Length.",
        )?;
        validate_positive_id(
            "evenement_id",
            Some(self.evenement_id),
            "Please enter a valid Event ID.",
        )?;
        Ok(())
    }
}

impl FormInput for ZoneInput {}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventInput {
    #[serde(rename = "Naam")]
    pub naam: String,
    #[serde(rename = "StartDatum")]
    pub start_datum: String,
    #[serde(rename = "EindDatum")]
    pub eind_datum: String,
    #[serde(rename = "StartTijd")]
    pub start_tijd: String,
    #[serde(rename = "Tijdsduur")]
    pub tijdsduur: String,
}

impl Validate for EventInput {
    fn validate(&self) -> Result<()> {
        require_text("Naam", &self.naam, "Event name is required")?;

        let fields = [
            ("StartDatum", &self.start_datum),
            ("EindDatum", &self.eind_datum),
            ("StartTijd", &self.start_tijd),
            ("Tijdsduur", &self.tijdsduur),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(FleetError::validation(
                field,
                "All date and time fields are required",
            ));
        }

        let start = parse_iso_date("StartDatum", &self.start_datum)?;
        let end = parse_iso_date("EindDatum", &self.eind_datum)?;
        validate_date_order(start, end)?;

        parse_time("StartTijd", &self.start_tijd)?;
        parse_time("Tijdsduur", &self.tijdsduur)?;
        Ok(())
    }
}

impl FormInput for EventInput {
    fn normalized(&self) -> Self {
        Self {
            naam: self.naam.trim().to_string(),
            start_datum: self.start_datum.trim().to_string(),
            eind_datum: self.eind_datum.trim().to_string(),
            start_tijd: normalize_time(&self.start_tijd),
            tijdsduur: normalize_time(&self.tijdsduur),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerslagInput {
    pub onderwerp: String,
    pub inhoud: String,
    pub isverzonden: bool,
    pub isgeaccepteerd: bool,
    #[serde(rename = "VluchtCyclusId")]
    pub vlucht_cyclus_id: Option<i64>,
}

impl Validate for VerslagInput {
    fn validate(&self) -> Result<()> {
        require_text("onderwerp", &self.onderwerp, "Subject is required.")?;
        require_text("inhoud", &self.inhoud, "Content is required.")?;
        if self.vlucht_cyclus_id.is_some() {
            validate_positive_id(
                "VluchtCyclusId",
                self.vlucht_cyclus_id,
                "Please enter a valid flight cycle ID.",
            )?;
        }
        Ok(())
    }
}

impl FormInput for VerslagInput {}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CyclusInput {
    pub startuur: String,
    pub tijdstip: String,
    #[serde(rename = "vluchtcyclus_id")]
    pub vlucht_cyclus_id: Option<i64>,
}

impl Validate for CyclusInput {
    fn validate(&self) -> Result<()> {
        parse_time("startuur", &self.startuur)?;
        parse_time("tijdstip", &self.tijdstip)?;
        if self.vlucht_cyclus_id.is_some() {
            validate_positive_id(
                "vluchtcyclus_id",
                self.vlucht_cyclus_id,
                "Please enter a valid flight cycle ID.",
            )?;
        }
        Ok(())
    }
}

impl FormInput for CyclusInput {
    fn normalized(&self) -> Self {
        Self {
            startuur: normalize_time(&self.startuur),
            tijdstip: normalize_time(&self.tijdstip),
            vlucht_cyclus_id: self.vlucht_cyclus_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VluchtCyclusInput {
    #[serde(rename = "DroneId")]
    pub drone_id: Option<i64>,
    #[serde(rename = "PlaatsId")]
    pub plaats_id: Option<i64>,
    #[serde(rename = "ZoneId")]
    pub zone_id: Option<i64>,
}

impl Validate for VluchtCyclusInput {
    fn validate(&self) -> Result<()> {
        const MISSING: &str = "Drone and location are required";
        validate_positive_id("DroneId", self.drone_id, MISSING)?;
        validate_positive_id("PlaatsId", self.plaats_id, MISSING)?;
        if self.zone_id.is_some() {
            validate_positive_id("ZoneId", self.zone_id, "Please enter a valid Zone ID.")?;
        }
        Ok(())
    }
}

impl FormInput for VluchtCyclusInput {}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DockingCyclusInput {
    #[serde(rename = "DroneId")]
    pub drone_id: i64,
    #[serde(rename = "DockingId")]
    pub docking_id: i64,
    #[serde(rename = "CyclusId")]
    pub cyclus_id: i64,
}

impl Validate for DockingCyclusInput {
    fn validate(&self) -> Result<()> {
        validate_positive_id("DroneId", Some(self.drone_id), "Please select a drone.")?;
        validate_positive_id("DockingId", Some(self.docking_id), "Please select a docking.")?;
        validate_positive_id("CyclusId", Some(self.cyclus_id), "Please select a cyclus.")?;
        Ok(())
    }
}

impl FormInput for DockingCyclusInput {}

// ---------------------------------------------------------------------------
// Resource bindings
// ---------------------------------------------------------------------------

impl Resource for Drone {
    type Input = DroneInput;
    const KIND: ResourceKind = ResourceKind::Drone;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for Docking {
    type Input = LocationInput;
    const KIND: ResourceKind = ResourceKind::Docking;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for Startplaats {
    type Input = LocationInput;
    const KIND: ResourceKind = ResourceKind::Startplaats;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for Zone {
    type Input = ZoneInput;
    const KIND: ResourceKind = ResourceKind::Zone;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for Event {
    type Input = EventInput;
    const KIND: ResourceKind = ResourceKind::Event;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for Verslag {
    type Input = VerslagInput;
    const KIND: ResourceKind = ResourceKind::Verslag;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for Cyclus {
    type Input = CyclusInput;
    const KIND: ResourceKind = ResourceKind::Cyclus;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for VluchtCyclus {
    type Input = VluchtCyclusInput;
    const KIND: ResourceKind = ResourceKind::VluchtCyclus;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for DockingCyclus {
    type Input = DockingCyclusInput;
    const KIND: ResourceKind = ResourceKind::DockingCyclus;

    fn id(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_event() -> EventInput {
        EventInput {
            naam: "  Zomerfestival ".to_string(),
            start_datum: "2025-07-01".to_string(),
            eind_datum: "2025-07-03".to_string(),
            start_tijd: "10:00".to_string(),
            tijdsduur: "02:30".to_string(),
        }
    }

    #[test]
    fn test_drone_deserializes_either_id_casing() {
        let upper: Drone = serde_json::from_str(
            r#"{"Id": 3, "status": "IN_USE", "batterij": 64, "magOpstijgen": true}"#,
        )
        .unwrap();
        let lower: Drone = serde_json::from_str(
            r#"{"id": 3, "status": "IN_USE", "batterij": 64, "magOpstijgen": true}"#,
        )
        .unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.status, DroneStatus::InUse);
    }

    #[test]
    fn test_unknown_drone_status_is_preserved() {
        let drone: Drone =
            serde_json::from_str(r#"{"Id": 1, "status": "CHARGING", "batterij": 10}"#).unwrap();
        assert_eq!(drone.status, DroneStatus::Unknown("CHARGING".to_string()));
        assert!(!drone.mag_opstijgen);

        let json = serde_json::to_value(&drone).unwrap();
        assert_eq!(json["status"], "CHARGING");
        assert_eq!(json["Id"], 1);
    }

    #[test]
    fn test_missing_or_null_drone_status_is_unknown() {
        let drones: Vec<Drone> = serde_json::from_str(
            r#"[
                {"Id": 1, "status": null, "batterij": 40},
                {"Id": 2, "batterij": 90, "magOpstijgen": true},
                {"Id": 3, "status": "AVAILABLE", "batterij": 70}
            ]"#,
        )
        .unwrap();
        assert_eq!(drones.len(), 3);
        assert_eq!(drones[0].status, DroneStatus::default());
        assert_eq!(drones[1].status, DroneStatus::Unknown("UNKNOWN".to_string()));
        assert_eq!(drones[2].status, DroneStatus::Available);
        assert_eq!(
            drones[0].status.badge(),
            crate::utils::presentation::BadgeColor::Gray
        );
    }

    #[test]
    fn test_drone_status_from_str_is_lenient() {
        assert_eq!("in-use".parse::<DroneStatus>().unwrap(), DroneStatus::InUse);
        assert_eq!(
            " maintenance ".parse::<DroneStatus>().unwrap(),
            DroneStatus::Maintenance
        );
        let err = "flying".parse::<DroneStatus>().unwrap_err();
        assert!(err.to_string().contains("AVAILABLE, IN_USE, MAINTENANCE, OFFLINE"));
    }

    #[test]
    fn test_drone_input_battery_range() {
        let mut input = DroneInput {
            status: DroneStatus::Available,
            batterij: 100,
            mag_opstijgen: true,
        };
        assert!(input.validate().is_ok());

        input.batterij = 101;
        assert!(input.validate().is_err());

        input.batterij = 50;
        input.status = DroneStatus::Unknown("BROKEN".to_string());
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_drone_input_wire_shape() {
        let input = DroneInput {
            status: DroneStatus::Offline,
            batterij: 0,
            mag_opstijgen: false,
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "OFFLINE", "batterij": 0, "magOpstijgen": false})
        );
    }

    #[test]
    fn test_zone_input_rules() {
        let mut zone = ZoneInput {
            naam: "Noord".to_string(),
            breedte: 20.0,
            lengte: 35.5,
            evenement_id: 2,
        };
        assert!(zone.validate().is_ok());

        zone.naam = "   ".to_string();
        assert_eq!(zone.validate().unwrap_err().to_string(), "Zone name is required.");

        zone.naam = "Noord".to_string();
        zone.breedte = 0.0;
        assert_eq!(
            zone.validate().unwrap_err().to_string(),
            "Please enter a valid positive number for Width."
        );

        zone.breedte = 5.0;
        zone.lengte = -1.0;
        assert!(zone.validate().is_err());

        zone.lengte = 5.0;
        zone.evenement_id = 0;
        assert_eq!(
            zone.validate().unwrap_err().to_string(),
            "Please enter a valid Event ID."
        );
    }

    #[test]
    fn test_event_input_normalizes_before_validation() {
        let event = valid_event().normalized();
        assert_eq!(event.naam, "Zomerfestival");
        assert_eq!(event.start_tijd, "10:00:00");
        assert_eq!(event.tijdsduur, "02:30:00");
        assert!(event.validate().is_ok());

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["Naam"], "Zomerfestival");
        assert_eq!(json["StartTijd"], "10:00:00");
    }

    #[test]
    fn test_event_input_rejections() {
        let mut event = valid_event();
        event.naam = " ".to_string();
        assert_eq!(
            event.normalized().validate().unwrap_err().to_string(),
            "Event name is required"
        );

        let mut event = valid_event();
        event.tijdsduur = String::new();
        assert_eq!(
            event.normalized().validate().unwrap_err().to_string(),
            "All date and time fields are required"
        );
        assert!(matches!(
            event.normalized().validate(),
            Err(FleetError::ValidationError { ref field, .. }) if field == "Tijdsduur"
        ));

        let mut event = valid_event();
        event.eind_datum = " ".to_string();
        event.start_tijd = String::new();
        assert!(matches!(
            event.normalized().validate(),
            Err(FleetError::ValidationError { ref field, .. }) if field == "EindDatum"
        ));

        let mut event = valid_event();
        event.eind_datum = "2025-06-30".to_string();
        assert_eq!(
            event.normalized().validate().unwrap_err().to_string(),
            "End date cannot be before start date"
        );

        let mut event = valid_event();
        event.start_datum = "first of july".to_string();
        assert_eq!(
            event.normalized().validate().unwrap_err().to_string(),
            "Invalid date format"
        );
    }

    #[test]
    fn test_vlucht_cyclus_input_requires_drone_and_place() {
        let input = VluchtCyclusInput {
            drone_id: Some(1),
            plaats_id: None,
            zone_id: None,
        };
        assert_eq!(
            input.validate().unwrap_err().to_string(),
            "Drone and location are required"
        );

        let input = VluchtCyclusInput {
            drone_id: Some(1),
            plaats_id: Some(4),
            zone_id: None,
        };
        assert!(input.validate().is_ok());
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"DroneId": 1, "PlaatsId": 4, "ZoneId": null})
        );
    }

    #[test]
    fn test_cyclus_input_time_normalization() {
        let input = CyclusInput {
            startuur: "08:00".to_string(),
            tijdstip: "08:45:00".to_string(),
            vlucht_cyclus_id: None,
        }
        .normalized();
        assert_eq!(input.startuur, "08:00:00");
        assert!(input.validate().is_ok());

        let bad = CyclusInput {
            startuur: "25:00".to_string(),
            tijdstip: "08:45".to_string(),
            vlucht_cyclus_id: None,
        }
        .normalized();
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_location_input_requires_location() {
        let input = LocationInput {
            locatie: "  ".to_string(),
            isbeschikbaar: true,
        };
        assert_eq!(
            input.normalized().validate().unwrap_err().to_string(),
            "Location is required."
        );
    }

    #[test]
    fn test_resource_kind_config_keys_round_trip() {
        for kind in ResourceKind::ALL {
            assert_eq!(ResourceKind::from_config_key(kind.config_key()), Some(kind));
        }
        assert_eq!(ResourceKind::from_config_key("pilots"), None);
    }
}
