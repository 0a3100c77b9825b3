//! Pay-slip periods are keyed by French month names. Resolving the names
//! through this fixed table keeps period lookups deterministic instead of
//! depending on locale-aware date formatting.

pub const FRENCH_MONTHS: [&str; 12] = [
    "Janvier", "Février", "Mars", "Avril", "Mai", "Juin",
    "Juillet", "Août", "Septembre", "Octobre", "Novembre", "Décembre",
];

pub fn is_valid_name(mois: &str) -> bool {
    FRENCH_MONTHS.contains(&mois)
}

/// (year, month name) of the month preceding the given one. Callers pass
/// chrono month numbers (1..=12); anything outside clamps to that range.
pub fn previous(year: i32, month: u32) -> (i32, &'static str) {
    if month <= 1 {
        (year - 1, FRENCH_MONTHS[11])
    } else {
        (year, FRENCH_MONTHS[(month.min(12) - 2) as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previous_rolls_over_january() {
        assert_eq!(previous(2025, 1), (2024, "Décembre"));
        assert_eq!(previous(2025, 7), (2025, "Juin"));
    }

    #[test]
    fn previous_clamps_out_of_range_months() {
        assert_eq!(previous(2025, 0), (2024, "Décembre"));
        assert_eq!(previous(2025, 13), (2025, "Novembre"));
    }
}
