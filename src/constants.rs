use std::time::Duration;

use once_cell::sync::Lazy;
use scraper::Selector;

use crate::model::CountryField;

/// Page scraped for both the worldwide counters and the country table.
pub(crate) const SOURCE_URL: &str = "https://www.worldometers.info/coronavirus/";

pub(crate) const API_PORT: u16 = 8000;

pub(crate) const REFRESH_INTERVAL: Duration = Duration::from_secs(5 * 60);

pub(crate) const USER_AGENT: &str = concat!("covid-tracker/", env!("CARGO_PKG_VERSION"));

/// The three worldwide counters, in page order: cases, deaths, recovered.
pub(crate) static MAIN_COUNTER_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".maincounter-number").unwrap());

pub(crate) static COUNTER_SPAN_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span").unwrap());

pub(crate) static COUNTRY_TABLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table#main_table_countries_today").unwrap());

pub(crate) static HEADER_CELL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("th").unwrap());

/// Continent subtotal rows carry the `row_continent` class and are not
/// country data.
pub(crate) static BODY_ROW_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tbody tr:not(.row_continent)").unwrap());

pub(crate) static ROW_CELL_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("td").unwrap());

/// Column offset (cell index modulo row width) holding the country name.
/// A cell at this offset starts a new record.
pub(crate) const NAME_COLUMN: usize = 1;

/// Ordered column-to-field mapping for the country table. Offsets absent
/// here (rank, daily-change markers, per-million ratios) are dropped.
pub(crate) const COUNTRY_COLUMNS: &[(usize, CountryField)] = &[
    (2, CountryField::TotalCases),
    (3, CountryField::NewCases),
    (4, CountryField::TotalDeaths),
    (5, CountryField::NewDeaths),
    (6, CountryField::TotalRecovered),
    (8, CountryField::ActiveCases),
    (9, CountryField::CriticalCases),
    (12, CountryField::TotalTests),
    (14, CountryField::Population),
];
