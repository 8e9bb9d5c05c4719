//! Lookup predicates over stored athletes.
//!
//! Every filter is read-only. The Postgres repository renders them as SQL,
//! the in-memory store evaluates [`AthleteFilter::matches`] directly.

use uuid::Uuid;

use crate::models::AthleteRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AthleteFilter {
    /// Equality on the primary key
    Id(Uuid),
    /// Equality on the national id
    NationalId(String),
    /// Case-insensitive substring match on the name
    NameContains(String),
}

impl AthleteFilter {
    /// Resource key reported when the lookup misses.
    pub fn key(&self) -> String {
        match self {
            Self::Id(id) => id.to_string(),
            Self::NationalId(national_id) => national_id.clone(),
            Self::NameContains(name) => name.clone(),
        }
    }

    pub fn matches(&self, record: &AthleteRecord) -> bool {
        match self {
            Self::Id(id) => record.athlete.athlete_id == *id,
            Self::NationalId(national_id) => record.athlete.national_id == *national_id,
            Self::NameContains(needle) => record
                .athlete
                .name
                .to_lowercase()
                .contains(&needle.to_lowercase()),
        }
    }
}

/// Wrap `needle` for `ILIKE` so that `%`, `_` and `\` match literally.
pub fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Athlete;

    fn record(name: &str) -> AthleteRecord {
        AthleteRecord {
            athlete: Athlete {
                athlete_id: Uuid::new_v4(),
                name: name.to_string(),
                national_id: "12345678900".to_string(),
                age: 28,
                weight: 68.5,
                height: 1.66,
                sex: "M".to_string(),
                category_id: 1,
                training_center_id: 1,
                created_at: chrono::Utc::now().naive_utc(),
            },
            category_name: "Scale".to_string(),
            training_center_name: "CT King".to_string(),
        }
    }

    #[test]
    fn name_match_ignores_case() {
        let jonas = record("Jonas");
        assert!(AthleteFilter::NameContains("jon".into()).matches(&jonas));
        assert!(AthleteFilter::NameContains("NAS".into()).matches(&jonas));
        assert!(!AthleteFilter::NameContains("maria".into()).matches(&jonas));
    }

    #[test]
    fn equality_filters_are_exact() {
        let jonas = record("Jonas");
        assert!(AthleteFilter::Id(jonas.athlete.athlete_id).matches(&jonas));
        assert!(!AthleteFilter::Id(Uuid::new_v4()).matches(&jonas));
        assert!(AthleteFilter::NationalId("12345678900".into()).matches(&jonas));
        assert!(!AthleteFilter::NationalId("1234567890".into()).matches(&jonas));
    }

    #[test]
    fn pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("jon"), "%jon%");
        assert_eq!(contains_pattern("50%_a\\b"), "%50\\%\\_a\\\\b%");
    }
}
