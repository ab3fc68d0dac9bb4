use reqwest::Url;

use crate::error::{AppError, Result};

/// Validate user input as an absolute http(s) URL. Performs no network I/O.
pub fn parse_url(input: &str) -> Result<Url> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AppError::invalid_url(input, "no URL provided"));
    }

    let url = Url::parse(trimmed).map_err(|e| AppError::invalid_url(trimmed, e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(AppError::invalid_url(
                trimmed,
                format!("unsupported scheme '{}'", other),
            ));
        }
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(AppError::invalid_url(trimmed, "missing host"));
    }

    Ok(url)
}

/// Last non-empty path segment of the URL, or its host when the path is bare.
pub fn file_name(url: &Url) -> String {
    url.path_segments()
        .and_then(|mut segments| segments.rfind(|s| !s.is_empty()))
        .map(str::to_string)
        .or_else(|| url.host_str().map(str::to_string))
        .unwrap_or_default()
}
