use crate::core::render::{to_csv, Tabular};
use crate::core::{Resource, ResourceSource, Result, Storage};
use crate::domain::model::{
    Cyclus, Docking, DockingCyclus, Drone, Event, Startplaats, Verslag, VluchtCyclus, Zone,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

pub const EXPORT_FILE_NAME: &str = "fleet_export.zip";
const SNAPSHOT_FILE_NAME: &str = "fleet.json";

struct Section {
    key: &'static str,
    count: usize,
    csv: String,
    json: serde_json::Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportSummary {
    pub path: String,
    pub counts: BTreeMap<String, usize>,
}

impl ExportSummary {
    pub fn to_text(&self) -> String {
        let mut lines = vec![format!("📁 Export saved to: {}", self.path)];
        for (key, count) in &self.counts {
            lines.push(format!("  {}: {}", key, count));
        }
        lines.join("\n")
    }
}

/// 把所有資源打包成一個 zip 快照
pub struct FleetExporter<S: Storage> {
    storage: S,
    output_path: String,
}

impl<S: Storage> FleetExporter<S> {
    pub fn new(storage: S, output_path: impl Into<String>) -> Self {
        Self {
            storage,
            output_path: output_path.into(),
        }
    }

    pub async fn export<Src: ResourceSource>(&self, source: &Src) -> Result<ExportSummary> {
        let sections = vec![
            collect::<Drone, _>(source).await?,
            collect::<Docking, _>(source).await?,
            collect::<Startplaats, _>(source).await?,
            collect::<Zone, _>(source).await?,
            collect::<Event, _>(source).await?,
            collect::<Verslag, _>(source).await?,
            collect::<Cyclus, _>(source).await?,
            collect::<VluchtCyclus, _>(source).await?,
            collect::<DockingCyclus, _>(source).await?,
        ];

        let zip_data = build_zip(&sections)?;

        tracing::debug!("Writing ZIP file ({} bytes) to storage", zip_data.len());
        self.storage.write_file(EXPORT_FILE_NAME, &zip_data).await?;

        let path = format!(
            "{}/{}",
            self.output_path.trim_end_matches('/'),
            EXPORT_FILE_NAME
        );
        tracing::info!("📁 Export saved to: {}", path);

        Ok(ExportSummary {
            path,
            counts: sections
                .iter()
                .map(|s| (s.key.to_string(), s.count))
                .collect(),
        })
    }
}

async fn collect<R, Src>(source: &Src) -> Result<Section>
where
    R: Resource + Tabular,
    Src: ResourceSource,
{
    let items: Vec<R> = source.fetch_all().await?;
    tracing::debug!("📦 Collected {} {}", items.len(), R::KIND.plural());

    Ok(Section {
        key: R::KIND.config_key(),
        count: items.len(),
        csv: to_csv(&items)?,
        json: serde_json::to_value(&items)?,
    })
}

fn build_zip(sections: &[Section]) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

    for section in sections {
        zip.start_file::<_, ()>(format!("{}.csv", section.key), FileOptions::default())?;
        zip.write_all(section.csv.as_bytes())?;
    }

    let snapshot: serde_json::Map<String, serde_json::Value> = sections
        .iter()
        .map(|s| (s.key.to_string(), s.json.clone()))
        .collect();
    zip.start_file::<_, ()>(SNAPSHOT_FILE_NAME, FileOptions::default())?;
    zip.write_all(serde_json::to_string_pretty(&snapshot)?.as_bytes())?;

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::StaticSource;
    use crate::core::ResourceKind;
    use serde_json::json;
    use std::collections::HashMap;
    use std::io::Read;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            self.files.lock().await.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files
                .lock()
                .await
                .insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_export_writes_one_csv_per_resource() {
        let source = StaticSource::new()
            .with(
                ResourceKind::Drone,
                json!([{"Id": 1, "status": "AVAILABLE", "batterij": 80, "magOpstijgen": true}]),
            )
            .with(
                ResourceKind::DockingCyclus,
                json!([{"Id": 2, "DroneId": 1, "DockingId": 3, "CyclusId": 4}]),
            );

        let storage = MockStorage::default();
        let exporter = FleetExporter::new(storage.clone(), "./out/");
        let summary = exporter.export(&source).await.unwrap();

        assert_eq!(summary.path, "./out/fleet_export.zip");
        assert_eq!(summary.counts.get("drones"), Some(&1));
        assert_eq!(summary.counts.get("zones"), Some(&0));
        assert_eq!(summary.counts.len(), 9);

        let data = storage.get_file(EXPORT_FILE_NAME).await.unwrap();
        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(data)).unwrap();
        assert_eq!(archive.len(), 10);

        let mut drones_csv = String::new();
        archive
            .by_name("drones.csv")
            .unwrap()
            .read_to_string(&mut drones_csv)
            .unwrap();
        assert!(drones_csv.starts_with("ID,Status,Batterij,Mag opstijgen"));
        assert!(drones_csv.contains("1,AVAILABLE,80%,Ja"));

        let mut snapshot = String::new();
        archive
            .by_name("fleet.json")
            .unwrap()
            .read_to_string(&mut snapshot)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&snapshot).unwrap();
        assert_eq!(value["docking_cycli"][0]["CyclusId"], 4);
        assert_eq!(value["zones"], json!([]));
    }
}
