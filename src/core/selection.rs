use crate::core::{ResourceSource, Result};
use crate::domain::model::{Docking, Drone, DroneStatus, Startplaats, Verslag, Zone};
use serde::Serialize;

/// 可以起飛的無人機：AVAILABLE 且允許起飛
pub fn flight_ready_drones(drones: &[Drone]) -> Vec<Drone> {
    drones
        .iter()
        .filter(|d| d.status == DroneStatus::Available && d.mag_opstijgen)
        .cloned()
        .collect()
}

pub fn available_places(places: &[Startplaats]) -> Vec<Startplaats> {
    places.iter().filter(|p| p.isbeschikbaar).cloned().collect()
}

pub fn available_dockings(dockings: &[Docking]) -> Vec<Docking> {
    dockings.iter().filter(|d| d.isbeschikbaar).cloned().collect()
}

/// 尚未綁定的報告，或已綁在這個 vlucht cyclus 上的報告
pub fn attachable_reports(verslagen: &[Verslag], vlucht_cyclus_id: Option<i64>) -> Vec<Verslag> {
    verslagen
        .iter()
        .filter(|v| match v.vlucht_cyclus_id {
            None => true,
            Some(linked) => Some(linked) == vlucht_cyclus_id,
        })
        .cloned()
        .collect()
}

/// 建立或編輯 vlucht cyclus 時可選的項目
#[derive(Debug, Clone, Serialize)]
pub struct FlightCandidates {
    pub drones: Vec<Drone>,
    pub places: Vec<Startplaats>,
    pub zones: Vec<Zone>,
    pub verslagen: Vec<Verslag>,
}

impl FlightCandidates {
    pub async fn gather<S: ResourceSource>(
        source: &S,
        vlucht_cyclus_id: Option<i64>,
    ) -> Result<Self> {
        let drones: Vec<Drone> = source.fetch_all().await?;
        let places: Vec<Startplaats> = source.fetch_all().await?;
        let zones: Vec<Zone> = source.fetch_all().await?;
        let verslagen: Vec<Verslag> = source.fetch_all().await?;

        let candidates = Self {
            drones: flight_ready_drones(&drones),
            places: available_places(&places),
            zones,
            verslagen: attachable_reports(&verslagen, vlucht_cyclus_id),
        };

        tracing::debug!(
            "🔎 Candidates: {} drones, {} places, {} zones, {} verslagen",
            candidates.drones.len(),
            candidates.places.len(),
            candidates.zones.len(),
            candidates.verslagen.len()
        );
        Ok(candidates)
    }
}
