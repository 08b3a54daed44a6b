//! Fixed reference data backing the simulated backends and the demo fleet.

use chrono::{TimeZone, Utc};
use wastewise_core::model::{
    Report, ReportId, ReportStatus, VehicleId, VehicleState, VehicleStatus, WasteItem,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Collection point a QR code can resolve to.
pub struct ScanCandidate {
    /// Collection point code.
    pub id: &'static str,
    /// Accepted waste stream.
    pub waste_type: &'static str,
    /// Reward for a drop-off.
    pub points: u32,
    /// Address of the point.
    pub location: &'static str,
    /// Verified collection site.
    pub verified: bool,
}

fn item(
    id: &str,
    name: &str,
    category: &str,
    recyclable: bool,
    disposal: &str,
    points: u32,
) -> WasteItem {
    WasteItem {
        id: id.to_owned(),
        name: name.to_owned(),
        category: category.to_owned(),
        recyclable,
        disposal: disposal.to_owned(),
        points,
    }
}

/// Items the simulated classifier chooses from.
#[must_use]
pub fn waste_catalog() -> Vec<WasteItem> {
    vec![
        item(
            "pet-bottle",
            "PET bottle",
            "plastic",
            true,
            "Rinse, crush and drop in the plastics bin",
            10,
        ),
        item("newspaper", "Newspaper", "paper", true, "Keep dry, bundle with other paper", 5),
        item(
            "glass-jar",
            "Glass jar",
            "glass",
            true,
            "Remove the lid, sort by colour at the bottle bank",
            8,
        ),
        item("drink-can", "Aluminium can", "metal", true, "Empty and drop in the metals bin", 12),
        item("food-scraps", "Food scraps", "organic", false, "Compost or use the organic bin", 3),
        item(
            "phone-battery",
            "Phone battery",
            "e-waste",
            false,
            "Hand in at an e-waste collection point",
            20,
        ),
    ]
}

/// The four collection points QR scans resolve to. Three are verified.
pub const SCAN_CANDIDATES: [ScanCandidate; 4] = [
    ScanCandidate {
        id: "CP-001",
        waste_type: "Plastic",
        points: 15,
        location: "Central Park Collection Point",
        verified: true,
    },
    ScanCandidate {
        id: "CP-002",
        waste_type: "Paper",
        points: 10,
        location: "Market Street Recycling Hub",
        verified: true,
    },
    ScanCandidate {
        id: "CP-003",
        waste_type: "Glass",
        points: 12,
        location: "Riverside Bottle Bank",
        verified: true,
    },
    ScanCandidate {
        id: "CP-004",
        waste_type: "E-Waste",
        points: 25,
        location: "Old Town Pop-up Drop-off",
        verified: false,
    },
];

fn vehicle(
    id: &str,
    location: &str,
    progress: f64,
    eta: &str,
    status: VehicleStatus,
) -> VehicleState {
    VehicleState {
        id: VehicleId(id.to_owned()),
        current_location: location.to_owned(),
        progress,
        estimated_arrival: eta.to_owned(),
        status,
    }
}

/// Vehicles tracked when the server starts.
#[must_use]
pub fn demo_fleet() -> Vec<VehicleState> {
    vec![
        vehicle("WW-101", "Harbour Road", 35.0, "15 mins", VehicleStatus::Active),
        vehicle("WW-102", "Elm Street", 68.0, "8 mins", VehicleStatus::Active),
        vehicle("WW-103", "Industrial Park", 12.0, "40 mins", VehicleStatus::Delayed),
        vehicle("WW-104", "Station Square", 100.0, "Completed", VehicleStatus::Completed),
    ]
}

/// Reports present when the server starts with demo data.
#[must_use]
pub fn demo_reports() -> Vec<Report> {
    let rows = [
        (
            "RPT-demo-1",
            "Overflowing bins",
            "Public bins near the playground have not been emptied for days",
            "overflow",
            "Central Park",
            "high",
            ReportStatus::Pending,
            4,
        ),
        (
            "RPT-demo-2",
            "Illegal dumping",
            "Mattresses and furniture left behind the supermarket",
            "dumping",
            "Market Street 12",
            "medium",
            ReportStatus::InProgress,
            6,
        ),
        (
            "RPT-demo-3",
            "Missed pickup",
            "Paper collection skipped our street this week",
            "missed-collection",
            "Elm Street",
            "low",
            ReportStatus::Resolved,
            9,
        ),
    ];

    rows.into_iter()
        .map(
            |(id, title, description, category, location, priority, status, day)| Report {
                id: ReportId(id.to_owned()),
                title: title.to_owned(),
                description: description.to_owned(),
                category: category.to_owned(),
                location: location.to_owned(),
                priority: priority.to_owned(),
                status,
                reported_at: Utc
                    .with_ymd_and_hms(2024, 3, day, 9, 30, 0)
                    .single()
                    .unwrap_or_else(Utc::now),
                reported_by: "citizen-demo".to_owned(),
            },
        )
        .collect()
}
