use chrono::NaiveDateTime;

pub fn format_price(value: f64) -> String {
    format!("${:.2}", value)
}

/// Fecha ISO del backend -> dd/mm/aaaa. Si no se puede parsear se
/// devuelve el texto tal cual en lugar de romper la vista.
pub fn format_date(iso: &str) -> String {
    match NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(dt) => dt.format("%d/%m/%Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

pub fn format_datetime(iso: &str) -> String {
    match NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
        Err(_) => iso.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_always_show_two_decimals() {
        assert_eq!(format_price(50.0), "$50.00");
        assert_eq!(format_price(49.99), "$49.99");
        assert_eq!(format_price(0.5), "$0.50");
    }

    #[test]
    fn iso_dates_with_and_without_micros() {
        assert_eq!(format_date("2024-01-15T10:30:00"), "15/01/2024");
        assert_eq!(format_date("2024-01-15T10:30:00.123456"), "15/01/2024");
        assert_eq!(format_datetime("2024-01-15T10:30:00"), "15/01/2024 10:30");
    }

    #[test]
    fn unparseable_dates_pass_through() {
        assert_eq!(format_date("hace un rato"), "hace un rato");
        assert_eq!(format_date(""), "");
    }
}
