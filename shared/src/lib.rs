pub mod models {
    pub mod meal;
    pub mod plan;
}

pub mod dto {
    pub mod common;
    pub mod menu;
}

pub mod error;
pub mod week;
pub mod wire;

// Re-export commonly used items
pub use error::{Result, SharedError};

// Re-export models
pub use models::{
    meal::{display_name, MealCatalog},
    plan::{DaySlot, WeekPlan},
};

// Re-export DTOs
pub use dto::{
    common::ErrorResponse,
    menu::{GenerateImagesResponse, MailingTextResponse},
};

pub use wire::{MenuDay, MenuEntry, MenuWeek};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_week_plan_creation() {
        let plan = WeekPlan {
            label: "SEMAINE DU 24 AU 28 AOÛT\n2026".to_string(),
            space: vec![
                DaySlot {
                    is_used: true,
                    is_meal: true,
                    text: "Poulet curry".to_string(),
                    meal: Some("Poulet curry".to_string()),
                },
                DaySlot {
                    is_used: true,
                    is_meal: false,
                    text: "Fermé".to_string(),
                    meal: None,
                },
            ],
        };

        assert_eq!(plan.space.len(), 2);
        assert_eq!(plan.space[0].meal.as_deref(), Some("Poulet curry"));
        assert!(!plan.space[1].is_meal);
    }

    #[test]
    fn test_menu_week_creation() {
        let week = MenuWeek {
            header: vec!["LUNDI".to_string()],
            french_note: "Bonjour".to_string(),
            english_note: "Hello".to_string(),
            days: vec![MenuDay {
                day: "Lundi".to_string(),
                entries: vec![MenuEntry {
                    text: "Pizza".to_string(),
                    is_meal: true,
                    img: Some("Pizza".to_string()),
                }],
            }],
        };

        assert_eq!(week.days.len(), 1);
        assert_eq!(week.days[0].entries[0].img.as_deref(), Some("Pizza"));
    }
}
