use serde::{Deserialize, Serialize};

/// One week of the menu as assembled in the planner UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekPlan {
    /// Banner label of the week, e.g. "SEMAINE DU 24 AU 28 AOÛT\n2026".
    pub label: String,
    /// Ordered day slots; the grid consumes them left to right.
    pub space: Vec<DaySlot>,
}

/// One slot of the weekly grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySlot {
    /// Whether the slot takes part in the week at all.
    pub is_used: bool,
    /// Whether the slot holds a meal rather than free text such as "Fermé".
    pub is_meal: bool,
    /// Text shown in the slot.
    pub text: String,
    /// Catalog name of the meal when the slot holds one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal: Option<String>,
}
