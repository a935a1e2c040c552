//! HTML extraction for the source page: the three worldwide counters and
//! the per-country data table.
//!
//! The table is consumed as one flat sequence of `td` cells in row-major
//! order; `index mod row width` decides which field a cell feeds, per the
//! mapping in `constants::COUNTRY_COLUMNS`. Text that does not survive
//! numeric cleaning becomes 0 rather than an error.

use scraper::{ElementRef, Html};

use crate::constants::{
    BODY_ROW_SELECTOR, COUNTER_SPAN_SELECTOR, COUNTRY_COLUMNS, COUNTRY_TABLE_SELECTOR,
    HEADER_CELL_SELECTOR, MAIN_COUNTER_SELECTOR, NAME_COLUMN, ROW_CELL_SELECTOR,
};
use crate::model::{CountryStats, GlobalStats};

/// Extract the worldwide counters. The page lists them in a fixed order
/// (cases, deaths, recovered); that ordering contract is taken on faith,
/// with any counter past the second overwriting `recovered`.
pub(crate) fn parse_global(html: &str) -> GlobalStats {
    let doc = Html::parse_document(html);
    let mut stats = GlobalStats::default();

    for (i, counter) in doc.select(&MAIN_COUNTER_SELECTOR).enumerate() {
        let number = counter
            .select(&COUNTER_SPAN_SELECTOR)
            .next()
            .map(element_text)
            .unwrap_or_default();
        let value = parse_count(&number);
        match i {
            0 => stats.cases = value,
            1 => stats.deaths = value,
            _ => stats.recovered = value,
        }
    }

    stats
}

/// Assemble country records from the data table.
///
/// Row width comes from the header cell count; every `td` under a
/// non-continent body row is then visited as one flat sequence. The name
/// column starts a new record and each mapped offset fills a field on the
/// record most recently started. The body leads with a worldwide summary
/// row and trails a totals artifact, so the first and last records are
/// dropped before the list is sorted by total cases, descending.
pub(crate) fn parse_countries(html: &str) -> Vec<CountryStats> {
    let doc = Html::parse_document(html);
    let Some(table) = doc.select(&COUNTRY_TABLE_SELECTOR).next() else {
        return Vec::new();
    };
    let width = table.select(&HEADER_CELL_SELECTOR).count();
    if width == 0 {
        return Vec::new();
    }

    let mut records: Vec<CountryStats> = Vec::new();
    let mut index = 0usize;
    for row in table.select(&BODY_ROW_SELECTOR) {
        for cell in row.select(&ROW_CELL_SELECTOR) {
            let offset = index % width;
            index += 1;

            if offset == NAME_COLUMN {
                records.push(CountryStats {
                    country: element_text(cell).trim().to_string(),
                    ..CountryStats::default()
                });
                continue;
            }

            let Some(&(_, field)) = COUNTRY_COLUMNS.iter().find(|(column, _)| *column == offset)
            else {
                continue;
            };
            if let Some(record) = records.last_mut() {
                record.set(field, parse_count(&element_text(cell)));
            }
        }
    }

    if !records.is_empty() {
        records.remove(0);
    }
    records.pop();

    // Stable sort: equal totals keep their table order.
    records.sort_by(|a, b| b.total_cases.cmp(&a.total_cases));
    records
}

/// Strip whitespace, thousands separators and plus signs, leaving the bare
/// digit string the page wraps its numbers in.
pub(crate) fn clean_text(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != ',' && *c != '+')
        .collect()
}

/// Clean and convert a cell value. "N/A", empty cells and stray markup all
/// come out as 0.
pub(crate) fn parse_count(raw: &str) -> i64 {
    clean_text(raw).parse().unwrap_or(0)
}

fn element_text(element: ElementRef) -> String {
    element.text().collect()
}
