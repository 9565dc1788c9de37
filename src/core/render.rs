use crate::domain::model::{
    Cyclus, Docking, DockingCyclus, Drone, Event, Startplaats, Verslag, VluchtCyclus, Zone,
};
use crate::utils::error::{FleetError, Result};
use crate::utils::presentation::{
    format_optional_id, format_time, sent_badge, yes_no, BadgeColor,
};
use serde::Serialize;

const BADGE_HEADER: &str = "Badges";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

/// 可以畫成表格列的資料
pub trait Tabular {
    fn headers() -> Vec<&'static str>;
    fn row(&self) -> Vec<String>;

    fn badges(&self) -> Vec<BadgeColor> {
        Vec::new()
    }
}

pub fn render_list<T: Tabular + Serialize>(
    items: &[T],
    format: OutputFormat,
    plural: &str,
) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(items)?),
        OutputFormat::Csv => to_csv(items),
        OutputFormat::Table if items.is_empty() => Ok(format!("No {} found.", plural)),
        OutputFormat::Table => Ok(to_table(items)),
    }
}

/// 單筆資料：表格模式下以 `欄位: 值` 逐行列出
pub fn render_record<T: Tabular + Serialize>(item: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(item)?),
        OutputFormat::Csv => to_csv(std::slice::from_ref(item)),
        OutputFormat::Table => {
            let headers = T::headers();
            let width = headers
                .iter()
                .chain(std::iter::once(&BADGE_HEADER))
                .map(|h| h.chars().count())
                .max()
                .unwrap_or(0);

            let mut lines: Vec<String> = headers
                .iter()
                .zip(item.row())
                .map(|(header, value)| format!("{:<width$}  {}", header, value, width = width))
                .collect();

            let badges = item.badges();
            if !badges.is_empty() {
                lines.push(format!(
                    "{:<width$}  {}",
                    BADGE_HEADER,
                    join_badges(&badges),
                    width = width
                ));
            }

            Ok(lines.join("\n"))
        }
    }
}

pub fn to_csv<T: Tabular>(items: &[T]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(T::headers())?;
    for item in items {
        writer.write_record(item.row())?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| FleetError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| {
        FleetError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

pub fn to_table<T: Tabular>(items: &[T]) -> String {
    let show_badges = items.iter().any(|item| !item.badges().is_empty());

    let mut headers: Vec<String> = T::headers().into_iter().map(str::to_string).collect();
    if show_badges {
        headers.push(BADGE_HEADER.to_string());
    }

    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|item| {
            let mut cells = item.row();
            if show_badges {
                cells.push(join_badges(&item.badges()));
            }
            cells
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let format_line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![format_line(headers.as_slice())];
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    lines.extend(rows.iter().map(|row| format_line(row.as_slice())));
    lines.join("\n")
}

fn join_badges(badges: &[BadgeColor]) -> String {
    badges
        .iter()
        .map(BadgeColor::label)
        .collect::<Vec<_>>()
        .join(",")
}

impl Tabular for Drone {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Status", "Batterij", "Mag opstijgen"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.status.to_string(),
            format!("{}%", self.batterij),
            yes_no(self.mag_opstijgen).to_string(),
        ]
    }

    fn badges(&self) -> Vec<BadgeColor> {
        vec![self.status.badge()]
    }
}

impl Tabular for Docking {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Locatie", "Beschikbaar"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.locatie.clone(),
            yes_no(self.isbeschikbaar).to_string(),
        ]
    }

    fn badges(&self) -> Vec<BadgeColor> {
        vec![BadgeColor::for_flag(self.isbeschikbaar)]
    }
}

impl Tabular for Startplaats {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Locatie", "Beschikbaar"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.locatie.clone(),
            yes_no(self.isbeschikbaar).to_string(),
        ]
    }

    fn badges(&self) -> Vec<BadgeColor> {
        vec![BadgeColor::for_flag(self.isbeschikbaar)]
    }
}

impl Tabular for Zone {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Naam", "Breedte", "Lengte", "Evenement"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.naam.clone(),
            self.breedte.to_string(),
            self.lengte.to_string(),
            format_optional_id(self.evenement_id),
        ]
    }
}

impl Tabular for Event {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Naam", "Startdatum", "Einddatum", "Starttijd", "Tijdsduur"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.naam.clone(),
            self.start_datum.clone(),
            self.eind_datum.clone(),
            format_time(Some(self.start_tijd.as_str())),
            format_time(Some(self.tijdsduur.as_str())),
        ]
    }
}

impl Tabular for Verslag {
    fn headers() -> Vec<&'static str> {
        vec![
            "ID",
            "Onderwerp",
            "Inhoud",
            "Verzonden",
            "Geaccepteerd",
            "Vlucht cyclus",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.onderwerp.clone(),
            self.inhoud.clone(),
            yes_no(self.isverzonden).to_string(),
            yes_no(self.isgeaccepteerd).to_string(),
            format_optional_id(self.vlucht_cyclus_id),
        ]
    }

    fn badges(&self) -> Vec<BadgeColor> {
        vec![
            sent_badge(self.isverzonden),
            BadgeColor::for_flag(self.isgeaccepteerd),
        ]
    }
}

impl Tabular for Cyclus {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Startuur", "Tijdstip", "Vlucht cyclus"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            format_time(Some(self.startuur.as_str())),
            format_time(Some(self.tijdstip.as_str())),
            format_optional_id(self.vlucht_cyclus_id),
        ]
    }
}

impl Tabular for VluchtCyclus {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Drone", "Plaats", "Zone", "Verslag", "Status"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            format_optional_id(self.drone_id),
            format_optional_id(self.plaats_id),
            format_optional_id(self.zone_id),
            format_optional_id(self.verslag_id),
            self.status
                .as_ref()
                .map(|s| s.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
        ]
    }

    fn badges(&self) -> Vec<BadgeColor> {
        self.status.iter().map(|s| s.badge()).collect()
    }
}

impl Tabular for DockingCyclus {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Drone", "Docking", "Cyclus"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.drone_id.to_string(),
            self.docking_id.to_string(),
            self.cyclus_id.to_string(),
        ]
    }
}
