use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Rå Apple Health-aktivitetskoder og labelen treningsverktøyet forventer.
pub const DEFAULT_ACTIVITY_MAP: &[(&str, &str)] = &[
    ("HKWorkoutActivityTypePilates", "Pilates"),
    ("HKWorkoutActivityTypeFunctionalStrengthTraining", "Pilates"),
    ("HKWorkoutActivityTypeWalking", "Walking"),
    ("HKWorkoutActivityTypeRunning", "Running"),
    ("HKWorkoutActivityTypeYoga", "Yoga"),
    ("HKWorkoutActivityTypeRowing", "Rowing"),
    ("HKWorkoutActivityTypeCrossCountrySkiing", "Cross Country Skiing"),
    ("HKWorkoutActivityTypeCycling", "Cycling"),
    ("HKWorkoutActivityTypeMartialArts", "Martial Arts"),
    ("HKWorkoutActivityTypeTraditionalStrengthTraining", "Pilates"),
    ("HKWorkoutActivityTypeFlexibility", "Pilates"),
];

/// Resultat av oppslag på en rå kode. `Unmapped` bærer selve koden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved<'a> {
    Mapped(&'a str),
    Unmapped(&'a str),
}

impl<'a> Resolved<'a> {
    pub fn label(self) -> &'a str {
        match self {
            Resolved::Mapped(label) | Resolved::Unmapped(label) => label,
        }
    }
}

/// Eksakt, case-sensitiv remapping-tabell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityMap(BTreeMap<String, String>);

impl ActivityMap {
    pub fn new(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self(entries.into_iter().collect())
    }

    pub fn resolve<'a>(&'a self, raw: &'a str) -> Resolved<'a> {
        match self.0.get(raw) {
            Some(label) => Resolved::Mapped(label.as_str()),
            None => Resolved::Unmapped(raw),
        }
    }

    /// Kun label; ukjente koder slippes gjennom uten advarsel.
    pub fn label<'a>(&'a self, raw: &'a str) -> &'a str {
        self.resolve(raw).label()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ActivityMap {
    fn default() -> Self {
        Self::new(
            DEFAULT_ACTIVITY_MAP
                .iter()
                .map(|(raw, label)| (raw.to_string(), label.to_string())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_sensitive() {
        let map = ActivityMap::default();
        assert_eq!(
            map.resolve("HKWorkoutActivityTypeYoga"),
            Resolved::Mapped("Yoga")
        );
        assert_eq!(
            map.resolve("hkworkoutactivitytypeyoga"),
            Resolved::Unmapped("hkworkoutactivitytypeyoga")
        );
    }

    #[test]
    fn default_table_has_every_entry() {
        assert_eq!(ActivityMap::default().len(), DEFAULT_ACTIVITY_MAP.len());
    }
}
