//! Exam request file parser (TOML, or JSON by extension).

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::algorithm::Algorithm;
use crate::error::SeatingResult;
use crate::model::{Candidate, Room};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatingConfig {
    pub exam: ExamConfig,
    #[serde(default)]
    pub rooms: Vec<RoomConfig>,
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamConfig {
    pub id: String,
    pub title: Option<String>,
    pub algorithm: String,
    pub seed: Option<u64>,
    pub parallel: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomConfig {
    pub id: String,
    pub name: Option<String>,
    pub building: Option<String>,
    pub rows: u32,
    pub columns: u32,
    /// Defaults to `rows * columns`.
    pub capacity: Option<u32>,
    #[serde(default)]
    pub invigilators: Vec<String>,
}

impl RoomConfig {
    pub fn to_room(&self) -> SeatingResult<Room> {
        let capacity = self
            .capacity
            .unwrap_or_else(|| self.rows.saturating_mul(self.columns));
        let mut room = Room::new(self.id.clone(), self.rows, self.columns, capacity)?;
        room.name = self.name.clone();
        room.building = self.building.clone();
        Ok(room)
    }
}

impl SeatingConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: SeatingConfig = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            _ => toml::from_str(&content)?,
        };
        Ok(config)
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn algorithm(&self) -> SeatingResult<Algorithm> {
        self.exam.algorithm.parse()
    }

    /// Rooms in file order, each validated.
    pub fn rooms(&self) -> SeatingResult<Vec<Room>> {
        self.rooms.iter().map(RoomConfig::to_room).collect()
    }

    /// Check the selector and every room grid up front.
    pub fn validate(&self) -> SeatingResult<()> {
        self.algorithm()?;
        self.rooms()?;
        Ok(())
    }

    /// Scaffold a small request with two rooms and two departments.
    pub fn scaffold(exam_id: &str) -> Self {
        let candidates = (1..=8)
            .map(|i| {
                let group = if i % 2 == 0 { "MATH" } else { "CS" };
                Candidate::new(format!("S{i:03}"), format!("Student {i}"), group)
            })
            .collect();
        SeatingConfig {
            exam: ExamConfig {
                id: exam_id.to_string(),
                title: None,
                algorithm: Algorithm::Serpentine.id().to_string(),
                seed: None,
                parallel: None,
            },
            rooms: vec![
                RoomConfig {
                    id: "room-101".to_string(),
                    name: Some("Room 101".to_string()),
                    building: Some("Main".to_string()),
                    rows: 2,
                    columns: 3,
                    capacity: Some(6),
                    invigilators: vec!["invigilator-1".to_string()],
                },
                RoomConfig {
                    id: "room-102".to_string(),
                    name: Some("Room 102".to_string()),
                    building: Some("Main".to_string()),
                    rows: 2,
                    columns: 2,
                    capacity: None,
                    invigilators: Vec::new(),
                },
            ],
            candidates,
        }
    }
}
