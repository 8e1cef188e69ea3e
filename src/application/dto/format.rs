// Display helpers shared by the view models.
use chrono::{DateTime, Datelike, Utc};

const MONTHS: [&str; 12] = [
    "jan", "fév", "mar", "avr", "mai", "juin", "juil", "août", "sep", "oct", "nov", "déc",
];

/// Short French date, e.g. `1 jan 2024`.
pub fn date_fr(at: DateTime<Utc>) -> String {
    let month = MONTHS[at.month0() as usize];
    format!("{} {month} {}", at.day(), at.year())
}

/// Human readable size in octets, truncated to whole units.
pub fn file_size_label(size: i64) -> String {
    const KIB: i64 = 1024;
    if size < KIB {
        format!("{size} o")
    } else if size < KIB * KIB {
        format!("{} Ko", size / KIB)
    } else {
        format!("{} Mo", size / (KIB * KIB))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_french_dates() {
        let at = Utc.with_ymd_and_hms(2024, 8, 15, 10, 0, 0).unwrap();
        assert_eq!(date_fr(at), "15 août 2024");
    }

    #[test]
    fn formats_sizes() {
        assert_eq!(file_size_label(512), "512 o");
        assert_eq!(file_size_label(2048), "2 Ko");
        assert_eq!(file_size_label(5 * 1024 * 1024 + 1), "5 Mo");
    }
}
