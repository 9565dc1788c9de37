use crate::domain::model::{DroneStatus, VluchtCyclusStatus};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeColor {
    Green,
    Blue,
    Yellow,
    Gray,
    Red,
}

impl BadgeColor {
    pub fn label(&self) -> &'static str {
        match self {
            BadgeColor::Green => "green",
            BadgeColor::Blue => "blue",
            BadgeColor::Yellow => "yellow",
            BadgeColor::Gray => "gray",
            BadgeColor::Red => "red",
        }
    }

    /// 布林狀態徽章：是 → 綠，否 → 紅
    pub fn for_flag(flag: bool) -> Self {
        if flag {
            BadgeColor::Green
        } else {
            BadgeColor::Red
        }
    }
}

impl fmt::Display for BadgeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl DroneStatus {
    pub fn badge(&self) -> BadgeColor {
        match self {
            DroneStatus::Available => BadgeColor::Green,
            DroneStatus::InUse => BadgeColor::Blue,
            DroneStatus::Maintenance => BadgeColor::Yellow,
            DroneStatus::Offline | DroneStatus::Unknown(_) => BadgeColor::Gray,
        }
    }
}

impl VluchtCyclusStatus {
    pub fn badge(&self) -> BadgeColor {
        match self {
            VluchtCyclusStatus::Pending | VluchtCyclusStatus::Unknown(_) => BadgeColor::Gray,
            VluchtCyclusStatus::InProgress => BadgeColor::Blue,
            VluchtCyclusStatus::Completed => BadgeColor::Green,
            VluchtCyclusStatus::Cancelled => BadgeColor::Red,
        }
    }
}

/// verzonden：已送出為藍色，草稿為灰色
pub fn sent_badge(is_sent: bool) -> BadgeColor {
    if is_sent {
        BadgeColor::Blue
    } else {
        BadgeColor::Gray
    }
}

/// 只顯示到分鐘（`HH:MM`）；過短的字串原樣回傳
pub fn format_time(value: Option<&str>) -> String {
    match value {
        None => "N/A".to_string(),
        Some(v) if v.is_empty() => "N/A".to_string(),
        Some(v) => match v.get(..5) {
            Some(prefix) => prefix.to_string(),
            None => {
                tracing::warn!("Invalid or short time string: {}", v);
                v.to_string()
            }
        },
    }
}

pub fn format_optional_id(value: Option<i64>) -> String {
    value
        .map(|id| id.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Ja"
    } else {
        "Nee"
    }
}
