use crate::core::{Resource, ResourceSource, Result};
use crate::domain::model::{
    Cyclus, DockingCyclus, Drone, Event, Startplaats, Verslag, VluchtCyclus, Zone,
};
use crate::utils::error::FleetError;
use crate::utils::presentation::{format_optional_id, format_time};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Serialize)]
pub struct DroneStatusOverview {
    pub total_drones: usize,
    pub status_distribution: BTreeMap<String, usize>,
    pub average_battery_level: f64,
    pub flight_ready: usize,
}

impl DroneStatusOverview {
    pub fn from_drones(drones: &[Drone]) -> Self {
        let mut status_distribution = BTreeMap::new();
        for drone in drones {
            *status_distribution
                .entry(drone.status.to_string())
                .or_insert(0) += 1;
        }

        let average_battery_level = if drones.is_empty() {
            0.0
        } else {
            drones.iter().map(|d| d.batterij as f64).sum::<f64>() / drones.len() as f64
        };

        Self {
            total_drones: drones.len(),
            status_distribution,
            average_battery_level,
            flight_ready: crate::core::selection::flight_ready_drones(drones).len(),
        }
    }

    pub async fn build<S: ResourceSource>(source: &S) -> Result<Self> {
        let drones: Vec<Drone> = source.fetch_all().await?;
        Ok(Self::from_drones(&drones))
    }

    pub fn to_text(&self) -> String {
        let mut lines = vec![format!("Total drones: {}", self.total_drones)];
        for (status, count) in &self.status_distribution {
            lines.push(format!("  {}: {}", status, count));
        }
        lines.push(format!(
            "Average battery: {:.1}%",
            self.average_battery_level
        ));
        lines.push(format!("Flight ready: {}", self.flight_ready));
        lines.join("\n")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EventOverview {
    pub event: Event,
    pub zones_count: usize,
    pub startplaatsen_count: usize,
    pub cycli_count: usize,
    pub total_zone_area: f64,
    pub zones: Vec<Zone>,
}

impl EventOverview {
    pub async fn build<S: ResourceSource>(source: &S, event_id: i64) -> Result<Self> {
        let events: Vec<Event> = source.fetch_all().await?;
        let event = find_by_id(events, event_id)?;

        let query = [("event_id", event_id.to_string())];
        let zones: Vec<Zone> = source.fetch_filtered(&query).await?;
        let startplaatsen: Vec<Startplaats> = source.fetch_filtered(&query).await?;
        let cycli: Vec<Cyclus> = source.fetch_filtered(&query).await?;

        tracing::debug!(
            "📊 Event {}: {} zones, {} startplaatsen, {} cycli",
            event_id,
            zones.len(),
            startplaatsen.len(),
            cycli.len()
        );

        Ok(Self {
            event,
            zones_count: zones.len(),
            startplaatsen_count: startplaatsen.len(),
            cycli_count: cycli.len(),
            total_zone_area: zones.iter().map(|z| z.breedte * z.lengte).sum(),
            zones,
        })
    }

    pub fn to_text(&self) -> String {
        let mut lines = vec![
            format!("Event {}: {}", self.event.id, self.event.naam),
            format!(
                "  {} {} → {}",
                format_time(Some(self.event.start_tijd.as_str())),
                self.event.start_datum,
                self.event.eind_datum
            ),
            format!(
                "Zones: {} ({:.1} m²)",
                self.zones_count, self.total_zone_area
            ),
        ];
        for zone in &self.zones {
            lines.push(format!(
                "  #{} {} ({} x {})",
                zone.id, zone.naam, zone.breedte, zone.lengte
            ));
        }
        lines.push(format!("Startplaatsen: {}", self.startplaatsen_count));
        lines.push(format!("Cycli: {}", self.cycli_count));
        lines.join("\n")
    }
}

/// 一個 cyclus 以及掛在它上面的飛行與停靠資料
#[derive(Debug, Clone, Serialize)]
pub struct CyclusOverview {
    pub cyclus: Cyclus,
    pub vlucht_cyclus: Option<VluchtCyclus>,
    pub verslag: Option<Verslag>,
    pub vlucht_cycli: Vec<VluchtCyclus>,
    pub total_vlucht_cycli: usize,
    pub vlucht_status_distribution: BTreeMap<String, usize>,
    pub docking_cycli: Vec<DockingCyclus>,
    pub drone_ids: Vec<i64>,
}

impl CyclusOverview {
    pub async fn build<S: ResourceSource>(source: &S, cyclus_id: i64) -> Result<Self> {
        let cycli: Vec<Cyclus> = source.fetch_all().await?;
        let cyclus = find_by_id(cycli, cyclus_id)?;

        let query = [("cyclus_id", cyclus_id.to_string())];
        let vlucht_cycli: Vec<VluchtCyclus> = source.fetch_filtered(&query).await?;

        // 直接連結的 vlucht cyclus 不一定出現在過濾結果裡
        let vlucht_cyclus = match cyclus.vlucht_cyclus_id {
            Some(id) => match vlucht_cycli.iter().find(|vc| vc.id == id) {
                Some(vc) => Some(vc.clone()),
                None => source
                    .fetch_all::<VluchtCyclus>()
                    .await?
                    .into_iter()
                    .find(|vc| vc.id == id),
            },
            None => None,
        };

        let verslag = match vlucht_cyclus.as_ref().and_then(|vc| vc.verslag_id) {
            Some(id) => source
                .fetch_all::<Verslag>()
                .await?
                .into_iter()
                .find(|v| v.id == id),
            None => None,
        };

        let docking_cycli: Vec<DockingCyclus> = source
            .fetch_filtered::<DockingCyclus>(&query)
            .await?
            .into_iter()
            .filter(|dc| dc.cyclus_id == cyclus_id)
            .collect();

        let mut vlucht_status_distribution = BTreeMap::new();
        for vc in &vlucht_cycli {
            let status = vc
                .status
                .as_ref()
                .map(|s| s.to_string())
                .unwrap_or_else(|| "Unknown".to_string());
            *vlucht_status_distribution.entry(status).or_insert(0) += 1;
        }

        let drone_ids: BTreeSet<i64> = docking_cycli
            .iter()
            .map(|dc| dc.drone_id)
            .chain(vlucht_cycli.iter().filter_map(|vc| vc.drone_id))
            .chain(vlucht_cyclus.as_ref().and_then(|vc| vc.drone_id))
            .collect();

        Ok(Self {
            cyclus,
            vlucht_cyclus,
            verslag,
            total_vlucht_cycli: vlucht_cycli.len(),
            vlucht_cycli,
            vlucht_status_distribution,
            docking_cycli,
            drone_ids: drone_ids.into_iter().collect(),
        })
    }

    pub fn to_text(&self) -> String {
        let mut lines = vec![format!(
            "Cyclus {}: {} - {}",
            self.cyclus.id,
            format_time(Some(self.cyclus.startuur.as_str())),
            format_time(Some(self.cyclus.tijdstip.as_str()))
        )];

        match &self.vlucht_cyclus {
            Some(vc) => lines.push(format!(
                "Vlucht cyclus {}: drone {}, plaats {}, zone {}, status {}",
                vc.id,
                format_optional_id(vc.drone_id),
                format_optional_id(vc.plaats_id),
                format_optional_id(vc.zone_id),
                vc.status
                    .as_ref()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "N/A".to_string())
            )),
            None => lines.push("Vlucht cyclus: N/A".to_string()),
        }

        if let Some(verslag) = &self.verslag {
            lines.push(format!("Verslag {}: {}", verslag.id, verslag.onderwerp));
        }

        lines.push(format!("Vlucht cycli: {}", self.total_vlucht_cycli));
        for (status, count) in &self.vlucht_status_distribution {
            lines.push(format!("  {}: {}", status, count));
        }

        lines.push(format!("Docking cycli: {}", self.docking_cycli.len()));
        for dc in &self.docking_cycli {
            lines.push(format!(
                "  #{} drone {} @ docking {}",
                dc.id, dc.drone_id, dc.docking_id
            ));
        }

        let drones = self
            .drone_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!(
            "Drones: {}",
            if drones.is_empty() { "N/A" } else { drones.as_str() }
        ));
        lines.join("\n")
    }
}

fn find_by_id<R: Resource>(items: Vec<R>, id: i64) -> Result<R> {
    items
        .into_iter()
        .find(|item| item.id() == id)
        .ok_or_else(|| FleetError::NotFound {
            label: R::KIND.label().to_string(),
            id,
        })
}
