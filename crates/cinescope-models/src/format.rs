// Display helpers for provider strings

const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingFormat {
    Star,
    Percentage,
}

fn is_missing(value: Option<&str>) -> bool {
    match value {
        None => true,
        Some(v) => v.is_empty() || v == NOT_AVAILABLE,
    }
}

/// "120 min" -> "2h 0m", "45 min" -> "45m"
pub fn format_runtime(value: Option<&str>) -> String {
    if is_missing(value) {
        return NOT_AVAILABLE.to_string();
    }
    let value = value.unwrap_or_default();

    let digits: String = value
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();

    let total_minutes: u32 = match digits.parse() {
        Ok(minutes) => minutes,
        Err(_) => return value.to_string(),
    };

    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    if hours == 0 {
        format!("{}m", minutes)
    } else {
        format!("{}h {}m", hours, minutes)
    }
}

/// "7.5" -> "★ 7.5" or "75%"
pub fn format_rating(value: Option<&str>, format: RatingFormat) -> String {
    if is_missing(value) {
        return NOT_AVAILABLE.to_string();
    }
    let value = value.unwrap_or_default();

    // "NaN" and "inf" parse as f64 but are not ratings
    let rating: f64 = match value.trim().parse::<f64>() {
        Ok(rating) if rating.is_finite() => rating,
        _ => return value.to_string(),
    };

    match format {
        RatingFormat::Star => format!("★ {:.1}", rating),
        RatingFormat::Percentage => format!("{}%", (rating * 10.0).round() as i64),
    }
}

/// Split the provider's comma-joined genre string
pub fn split_genres(value: &str) -> Vec<String> {
    if is_missing(Some(value)) {
        return Vec::new();
    }
    value
        .split(',')
        .map(|g| g.trim())
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect()
}
