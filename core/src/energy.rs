// core/src/energy.rs
use crate::models::Calories;

/// ml O₂ per kg per minutt i hvile (1 MET).
pub const OXYGEN_PER_MET: f64 = 3.5;
/// 5 kcal per liter O₂ → del på 1000/5.
pub const KCAL_DIVISOR: f64 = 200.0;

/// kcal = 3.5 · min · MET · kg / 200, uavrundet.
#[inline]
pub fn mets_to_kcal(duration_min: f64, mets: f64, weight_kg: f64) -> f64 {
    OXYGEN_PER_MET * duration_min * mets * weight_kg / KCAL_DIVISOR
}

/// Avrundet (half-to-even) estimat når `mets` er brukbar, ellers gulvet.
/// Et estimat som runder til 0 eller lavere faller også tilbake til gulvet.
pub fn estimate_calories(duration_min: f64, mets: f64, weight_kg: f64, floor: f64) -> Calories {
    if mets > 0.0 {
        let kcal = mets_to_kcal(duration_min, mets, weight_kg).round_ties_even();
        if kcal.is_finite() && kcal >= 1.0 {
            return Calories::Estimated(kcal as i64);
        }
    }
    Calories::Floor(floor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formula_matches_reference_session() {
        // 30 min løp, 9 MET, 70 kg
        assert!((mets_to_kcal(30.0, 9.0, 70.0) - 330.75).abs() < 1e-9);
        assert_eq!(estimate_calories(30.0, 9.0, 70.0, 0.1), Calories::Estimated(331));
    }

    #[test]
    fn halves_round_to_even() {
        // 10.5 → 10, 17.5 → 18, 3.5 → 4
        assert_eq!(estimate_calories(10.0, 1.0, 60.0, 0.1), Calories::Estimated(10));
        assert_eq!(estimate_calories(10.0, 1.0, 100.0, 0.1), Calories::Estimated(18));
        assert_eq!(estimate_calories(2.0, 1.0, 100.0, 0.1), Calories::Estimated(4));
    }

    #[test]
    fn zero_or_negative_mets_keep_floor() {
        assert_eq!(estimate_calories(45.0, 0.0, 80.0, 0.1), Calories::Floor(0.1));
        assert_eq!(estimate_calories(45.0, -2.0, 80.0, 0.1), Calories::Floor(0.1));
    }

    #[test]
    fn zero_duration_keeps_floor() {
        assert_eq!(estimate_calories(0.0, 6.0, 80.0, 0.25), Calories::Floor(0.25));
        assert_eq!(estimate_calories(0.01, 6.0, 80.0, 0.1), Calories::Floor(0.1));
    }
}
