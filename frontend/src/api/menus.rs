//! URL builders for the menu backend's routes. Transport stays with the
//! caller; these only assemble the URLs.

use shared::wire::{self, MenuWeek};

use crate::api::api_url;

/// URL of the meal catalog.
pub fn meal_list_url() -> String {
    api_url("/getMealList")
}

/// URL that asks the backend to render a new pair of images for `week`.
///
/// The week travels as the `menu` query parameter, composed into the
/// backend's argument grammar and percent-encoded.
pub fn generate_images_url(week: &MenuWeek) -> String {
    let menu = wire::compose(week);
    format!(
        "{}?menu={}",
        api_url("/generateImages"),
        urlencoding::encode(&menu)
    )
}

/// URL of the most recently generated week.
pub fn last_menu_url() -> String {
    api_url("/getLastMenu")
}

/// URL of the newsletter text for the last generated week.
pub fn mailing_text_url() -> String {
    api_url("/getMailingText")
}

/// URL of the story-format image rendered under `epoch`.
pub fn vertical_menu_url(epoch: &str) -> String {
    format!(
        "{}?epoch={}",
        api_url("/verticalMenu"),
        urlencoding::encode(epoch)
    )
}

/// URL of the screen-format image rendered under `epoch`.
pub fn horizontal_menu_url(epoch: &str) -> String {
    format!(
        "{}?epoch={}",
        api_url("/horizontalMenu"),
        urlencoding::encode(epoch)
    )
}
