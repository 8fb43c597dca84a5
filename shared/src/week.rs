use chrono::{Datelike, Duration, NaiveDate};

/// French month names, indexed by zero-based month number.
const FRENCH_MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// The Monday strictly after `today` and the Friday of that week.
///
/// A menu is always published for the week to come, so a Monday rolls
/// over to the following Monday rather than returning itself.
pub fn upcoming_week_span(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let days_ahead = 7 - i64::from(today.weekday().num_days_from_monday());
    let monday = today + Duration::days(days_ahead);
    (monday, monday + Duration::days(4))
}

/// Uppercase French banner label for the upcoming week, e.g.
/// "SEMAINE DU 24 AU 28 AOÛT\n2026".
///
/// Month and year are taken from the Friday, so a week spilling into a
/// new month or year is labeled after its end.
pub fn upcoming_week_label(today: NaiveDate) -> String {
    let (monday, friday) = upcoming_week_span(today);
    let month = FRENCH_MONTHS[friday.month0() as usize];
    format!(
        "Semaine du {:02} au {:02} {}\n{}",
        monday.day(),
        friday.day(),
        month,
        friday.year()
    )
    .to_uppercase()
}
