use pretty_assertions::assert_eq;
use shared::wire::{self, MenuDay, MenuEntry, MenuWeek};

use crate::api::menus;

fn sample_week() -> MenuWeek {
    MenuWeek {
        header: vec![
            "LUNDI".to_string(),
            "MARDI".to_string(),
            "MERCREDI".to_string(),
            "JEUDI".to_string(),
            "VENDREDI".to_string(),
        ],
        french_note: "Bonne semaine à tous".to_string(),
        english_note: "Have a great week".to_string(),
        days: vec![
            MenuDay {
                day: "Lundi".to_string(),
                entries: vec![MenuEntry {
                    text: "Poulet curry".to_string(),
                    is_meal: true,
                    img: Some("PouletCurry".to_string()),
                }],
            },
            MenuDay {
                day: "Mardi".to_string(),
                entries: vec![MenuEntry {
                    text: "Fermé".to_string(),
                    is_meal: false,
                    img: None,
                }],
            },
        ],
    }
}

// The full outbound path: plan a week, compose it, encode it into the
// render URL, then read it back the way the backend would.
#[test]
fn generate_images_url_carries_a_parseable_menu() {
    let week = sample_week();
    let url = menus::generate_images_url(&week);

    let (_, query) = url.split_once("?menu=").expect("render URL has a menu query");
    let decoded = urlencoding::decode(query).expect("query is valid percent-encoding");
    let parsed = wire::parse(&decoded).expect("composed menus always parse");

    assert_eq!(parsed, week);
}

#[test]
fn week_label_slots_into_the_plan_shape() {
    let today = chrono::NaiveDate::from_ymd_opt(2026, 8, 19).unwrap();
    let plan = shared::WeekPlan {
        label: shared::week::upcoming_week_label(today),
        space: Vec::new(),
    };
    assert_eq!(plan.label, "SEMAINE DU 24 AU 28 AOÛT\n2026");
}

#[test]
fn render_acknowledgment_payload_parses() {
    let payload = r#"{
        "message": "Images generated successfully",
        "vertical": "1724045678",
        "horizontal": "1724045678"
    }"#;
    let ack: shared::GenerateImagesResponse = serde_json::from_str(payload).unwrap();

    assert!(menus::vertical_menu_url(&ack.vertical).contains("epoch=1724045678"));
    assert!(menus::horizontal_menu_url(&ack.horizontal).contains("epoch=1724045678"));
}

#[test]
fn stored_menu_payload_parses_into_the_wire_shape() {
    let payload = r#"{
        "header": ["LUNDI", "MARDI"],
        "text-custom-french": "Bonjour",
        "text-custom-english": "Hello",
        "content": [
            {"day": "Lundi", "content": [{"text": "Pizza", "is_meal": true, "img": "Pizza"}]}
        ]
    }"#;
    let week: MenuWeek = serde_json::from_str(payload).unwrap();
    assert_eq!(week.days[0].entries[0].img.as_deref(), Some("Pizza"));

    // A re-render of a stored menu goes back out through the same grammar.
    let url = menus::generate_images_url(&week);
    assert!(url.contains("generateImages?menu="));
}
