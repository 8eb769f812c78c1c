//! Extraction of vehicle details from the search result.
//!
//! The result is a two-column table (`<table class="table">`) of label and
//! value cells. Labels are matched by substring, so small wording changes on
//! the site ("Fuel Type:" vs "Fuel Type") do not break the lookup.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::domain::{VehicleRecord, mask_identifier};

use super::partial::{ParseError, for_each_update, is_partial_response};

static RESULT_TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table.table").unwrap());
static ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());
static CELL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").unwrap());

/// Record fields that can be filled from the result table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    RegistrationNo,
    Class,
    Fuel,
    Engine,
    Chassis,
    InsuranceValidUntil,
    PollutionCheck,
    RegistrationDate,
    Vehicle,
}

/// Label substrings, tested in order. `None` marks rows that are never
/// copied into the record.
const LABELS: &[(&str, Option<Field>)] = &[
    ("Registration No", Some(Field::RegistrationNo)),
    ("Owner Name", None),
    ("Vehicle Class", Some(Field::Class)),
    ("Fuel Type", Some(Field::Fuel)),
    ("Engine No", Some(Field::Engine)),
    ("Chassis No", Some(Field::Chassis)),
    ("Insurance Upto", Some(Field::InsuranceValidUntil)),
    ("PUCC Upto", Some(Field::PollutionCheck)),
    ("Registration Date", Some(Field::RegistrationDate)),
    ("Maker", Some(Field::Vehicle)),
];

/// Build a [`VehicleRecord`] from the body of the search response.
///
/// Never fails: a missing result table yields the all-"N/A" record, and a
/// problem part-way through is reported in the record's `error` while the
/// fields read so far are kept.
pub fn parse_response(body: &str) -> VehicleRecord {
    let mut record = VehicleRecord::default();

    if let Err(e) = fill_record(&mut record, body) {
        warn!(error = %e, "failed to parse lookup response");
        record.error = Some(format!("Parsing error: {e}"));
    }

    record
}

fn fill_record(record: &mut VehicleRecord, body: &str) -> Result<(), ParseError> {
    let body = body.trim_start_matches('\u{feff}');
    let found = if is_partial_response(body) {
        let mut found = false;
        for_each_update(body, |fragment| {
            if !found {
                found = apply_result_table(record, fragment);
            }
        })?;
        found
    } else {
        apply_result_table(record, body)
    };

    if found {
        record.derive_region();
    } else {
        debug!("no result table in response");
    }

    Ok(())
}

/// Copy the rows of the first result table in `html` into `record`.
///
/// Returns `false` when there is no result table.
fn apply_result_table(record: &mut VehicleRecord, html: &str) -> bool {
    let document = Html::parse_document(html);

    let Some(table) = document.select(&RESULT_TABLE).next() else {
        return false;
    };

    for row in table.select(&ROW) {
        let cells: Vec<ElementRef<'_>> = row.select(&CELL).collect();
        if let [label, value] = cells.as_slice() {
            apply_row(record, &cell_text(label), cell_text(value));
        }
    }

    true
}

fn apply_row(record: &mut VehicleRecord, label: &str, value: String) {
    let Some((needle, field)) = LABELS.iter().find(|(needle, _)| label.contains(needle)) else {
        return;
    };

    let Some(field) = field else {
        debug!(label = *needle, "skipping private row");
        return;
    };

    match field {
        Field::RegistrationNo => record.registration_no = value,
        Field::Class => record.class = value,
        Field::Fuel => record.fuel = value,
        Field::Engine => record.engine = mask_identifier(&value),
        Field::Chassis => record.chassis = mask_identifier(&value),
        Field::InsuranceValidUntil => record.insurance_valid_until = value,
        Field::PollutionCheck => record.pollution_check = value,
        Field::RegistrationDate => record.registration_date = value,
        Field::Vehicle => record.vehicle = value,
    }
}

/// Text of a cell with each text node trimmed, joined without separators.
fn cell_text(cell: &ElementRef<'_>) -> String {
    cell.text().map(str::trim).collect()
}
