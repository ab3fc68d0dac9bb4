/// Find `target` among the workbook's sheet names.
///
/// An exact match wins; otherwise the first case-insensitive match is used, so
/// a sheet saved as "Vistas" still answers to "VISTAS".
pub fn resolve_sheet_name<'a>(sheet_names: &'a [String], target: &str) -> Option<&'a str> {
    if let Some(exact) = sheet_names.iter().find(|name| name.as_str() == target) {
        return Some(exact.as_str());
    }

    let wanted = target.to_uppercase();
    sheet_names
        .iter()
        .find(|name| name.to_uppercase() == wanted)
        .map(String::as_str)
}
