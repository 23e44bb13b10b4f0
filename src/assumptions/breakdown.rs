//! Itemized budget tables backing the summary reports
//!
//! These are the static line-item lists behind the CAPEX, OPEX, equipment,
//! and event figures. The schedule in `schedule.rs` drives the projection;
//! these tables explain where its headline amounts come from.

use serde::Serialize;

/// One line of an itemized budget table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    pub name: &'static str,
    pub description: &'static str,
    /// Unit count, where the line is priced per unit
    pub quantity: Option<u32>,
    pub unit_cost: Option<f64>,
    pub cost: f64,
}

impl LineItem {
    fn new(name: &'static str, description: &'static str, cost: f64) -> Self {
        Self {
            name,
            description,
            quantity: None,
            unit_cost: None,
            cost,
        }
    }

    fn per_unit(name: &'static str, description: &'static str, quantity: u32, unit_cost: f64) -> Self {
        Self {
            name,
            description,
            quantity: Some(quantity),
            unit_cost: Some(unit_cost),
            cost: unit_cost * quantity as f64,
        }
    }
}

/// Sum of a line-item table
pub fn items_total(items: &[LineItem]) -> f64 {
    items.iter().map(|i| i.cost).sum()
}

/// One-time setup (CAPEX) line items
pub fn capex_items() -> Vec<LineItem> {
    vec![
        LineItem::new(
            "Platform development",
            "Web platform and iOS/Android apps: UI/UX, backend, frontend, streaming and payment integration",
            150_000.0,
        ),
        LineItem::new(
            "Production and transmission equipment",
            "Cameras, lenses, audio, lighting, drone, gimbals, high-performance workstations and accessories",
            175_000.0,
        ),
        LineItem::new(
            "Legal and administrative setup",
            "Company registration, artist and sponsor contracts, initial legal counsel",
            12_000.0,
        ),
        LineItem::new(
            "Launch marketing",
            "Initial campaign promoting the platform launch",
            30_000.0,
        ),
    ]
}

/// Recurring monthly operation (OPEX) line items
pub fn opex_items() -> Vec<LineItem> {
    vec![
        LineItem::new(
            "Core team",
            "Salaries and payroll charges: content director, editor, social media, technical support",
            24_000.0,
        ),
        LineItem::new(
            "Digital infrastructure",
            "Hosting, CDN, software licenses",
            6_000.0,
        ),
        LineItem::new(
            "Ongoing marketing",
            "Digital campaigns to acquire and retain subscribers",
            5_000.0,
        ),
        LineItem::new(
            "Administrative",
            "Accounting, fees, general administrative expenses",
            3_000.0,
        ),
    ]
}

/// Itemized equipment kit behind the CAPEX equipment line
pub fn equipment_items() -> Vec<LineItem> {
    vec![
        LineItem::per_unit(
            "Main cameras",
            "Mirrorless bodies with solid 4K video (Sony ZV-E10 / Canon R10 class)",
            3,
            8_000.0,
        ),
        LineItem::per_unit(
            "Lenses",
            "Versatile prime and zoom glass (Sigma 18-50mm f/2.8, Tamron 28-75mm f/2.8)",
            3,
            4_000.0,
        ),
        LineItem::per_unit(
            "Action cameras",
            "GoPro HERO 11 Black or better, for dynamic and POV angles",
            2,
            2_500.0,
        ),
        LineItem::per_unit(
            "Drone",
            "DJI Mini 4 Pro / Air 3 class, aerial footage",
            1,
            8_000.0,
        ),
        LineItem::per_unit(
            "Body camera rig",
            "GoPro with media mod plus wireless video transmitter for discreet high-quality live shots",
            1,
            9_000.0,
        ),
        LineItem::new(
            "Audio",
            "3x wireless mic kits, 2x shotgun mics, portable field recorder",
            10_000.0,
        ),
        LineItem::per_unit(
            "Lighting",
            "Two-head LED kit for studio and dressing room",
            1,
            5_000.0,
        ),
        LineItem::new(
            "Switching and capture",
            "Video switcher, 3x capture cards, HDMI/SDI cabling",
            6_000.0,
        ),
        LineItem::per_unit(
            "Stabilization",
            "Compact gimbals",
            2,
            2_000.0,
        ),
        LineItem::per_unit(
            "Workstations and storage",
            "One editing laptop plus two streaming/editing workstations, NVMe and external SSDs",
            3,
            30_000.0,
        ),
        LineItem::new(
            "Miscellaneous accessories",
            "Tripods, spare batteries, memory cards, transport cases, field monitors",
            2_000.0,
        ),
    ]
}

/// Itemized live-event production budget
///
/// The contingency line is derived as a fixed share of the other lines,
/// matching its stated label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventBudget {
    items: Vec<LineItem>,
}

impl EventBudget {
    /// Contingency share of the itemized subtotal
    pub const CONTINGENCY_RATE: f64 = 0.10;

    /// Six-day carnival broadcast budget
    pub fn standard() -> Self {
        let mut items = vec![
            LineItem::new(
                "Freelance crew",
                "Camera operators, assistants, sound technician (day rates for six days)",
                60_000.0,
            ),
            LineItem::new(
                "Logistics and travel",
                "Flights, lodging and meals for the crew on site for six days",
                35_000.0,
            ),
            LineItem::new(
                "Temporary broadcast infrastructure",
                "Bonded-cellular transmitter rental, power generators (six days)",
                27_000.0,
            ),
            LineItem::new(
                "Insurance and permits",
                "Equipment insurance for large events, local licenses",
                10_000.0,
            ),
        ];

        let subtotal = items_total(&items);
        items.push(LineItem::new(
            "Contingency (10%)",
            "Reserve for the unforeseen during the live broadcast",
            subtotal * Self::CONTINGENCY_RATE,
        ));

        Self { items }
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Itemized event total, contingency included
    ///
    /// Note: this reconciles the line items (145,200), not the schedule's
    /// month-7 event amount (148,980); the two figures disagree in the
    /// plan and both are preserved as-is.
    pub fn total(&self) -> f64 {
        items_total(&self.items)
    }
}
