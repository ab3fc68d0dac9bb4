use calamine::Data;
use chrono::{NaiveDate, NaiveTime, TimeDelta};

const SECONDS_PER_DAY: i64 = 86_400;

#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub value: String,
    pub cell_type: CellType,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CellType {
    Text,
    Number,
    Date,
    Boolean,
    Empty,
}

impl Cell {
    pub fn new(value: String, cell_type: CellType) -> Self {
        Self { value, cell_type }
    }

    pub fn empty() -> Self {
        Self {
            value: String::new(),
            cell_type: CellType::Empty,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cell_type == CellType::Empty || self.value.trim().is_empty()
    }

    pub fn from_data(data: &Data) -> Self {
        match data {
            Data::Empty => Cell::empty(),

            Data::String(s) => Cell::new(s.clone(), CellType::Text),

            Data::Float(f) => Cell::new(format_float(*f), CellType::Number),

            Data::Int(i) => Cell::new(i.to_string(), CellType::Number),

            Data::Bool(b) => Cell::new(
                if *b { "TRUE" } else { "FALSE" }.to_string(),
                CellType::Boolean,
            ),

            Data::Error(e) => Cell::new(format!("Error: {:?}", e), CellType::Text),

            Data::DateTime(dt) => Cell::new(excel_date_to_iso_string(dt.as_f64()), CellType::Date),

            Data::DateTimeIso(s) => Cell::new(s.clone(), CellType::Date),

            Data::DurationIso(s) => Cell::new(s.clone(), CellType::Text),
        }
    }
}

// Whole numbers print without a trailing ".0"
fn format_float(f: f64) -> String {
    if f == (f as i64) as f64 && f.abs() < 1e10 {
        (f as i64).to_string()
    } else {
        f.to_string()
    }
}

/// Convert an Excel serial date (1900 date system) to an ISO-8601 string.
///
/// Serials with a time-of-day fraction become `YYYY-MM-DDTHH:MM:SS`, whole
/// serials become `YYYY-MM-DD`. Negative, non-finite and out-of-range serials
/// are returned as plain numbers.
pub fn excel_date_to_iso_string(excel_date: f64) -> String {
    if !excel_date.is_finite() || excel_date < 0.0 {
        return format_float(excel_date);
    }

    // Excel counts 1900-02-29, which never existed; serials below 61 sit before it.
    let days = if excel_date >= 61.0 {
        excel_date - 1.0
    } else {
        excel_date
    };

    // Round once on the whole value so 23:59:59.96 carries into the next day.
    let total_seconds = (days * SECONDS_PER_DAY as f64).round();
    if total_seconds >= i64::MAX as f64 {
        return format_float(excel_date);
    }
    let total_seconds = total_seconds as i64;
    let whole_days = total_seconds / SECONDS_PER_DAY;
    let seconds = (total_seconds % SECONDS_PER_DAY) as u32;

    let date = NaiveDate::from_ymd_opt(1899, 12, 31)
        .zip(TimeDelta::try_days(whole_days))
        .and_then(|(base, offset)| base.checked_add_signed(offset));
    let Some(date) = date else {
        return format_float(excel_date);
    };

    if seconds == 0 {
        return date.format("%Y-%m-%d").to_string();
    }

    match NaiveTime::from_hms_opt(seconds / 3600, (seconds % 3600) / 60, seconds % 60) {
        Some(time) => date.and_time(time).format("%Y-%m-%dT%H:%M:%S").to_string(),
        None => date.format("%Y-%m-%d").to_string(),
    }
}
