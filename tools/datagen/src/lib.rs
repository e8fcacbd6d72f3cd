//! Synthetic load catalog generator
//!
//! Pure, seedable generation: the same (count, seed, base_time) always
//! produces byte-identical catalogs, so tests and demo deployments can
//! reproduce a fixed catalog on demand.

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rust_decimal::Decimal;
use types::ids::LoadId;
use types::load::{Load, LoadParams, RunType};

/// (city display string, 2-letter state code)
const CITIES: &[(&str, &str)] = &[
    ("Dallas, TX", "TX"),
    ("Atlanta, GA", "GA"),
    ("Chicago, IL", "IL"),
    ("Los Angeles, CA", "CA"),
    ("Phoenix, AZ", "AZ"),
    ("Philadelphia, PA", "PA"),
    ("Houston, TX", "TX"),
    ("Miami, FL", "FL"),
    ("Denver, CO", "CO"),
    ("Seattle, WA", "WA"),
    ("Boston, MA", "MA"),
    ("Portland, OR", "OR"),
    ("Las Vegas, NV", "NV"),
    ("Detroit, MI", "MI"),
    ("Memphis, TN", "TN"),
    ("Nashville, TN", "TN"),
    ("San Francisco, CA", "CA"),
    ("New York, NY", "NY"),
    ("Indianapolis, IN", "IN"),
    ("Kansas City, MO", "MO"),
];

const EQUIPMENT_TYPES: &[&str] = &[
    "Dry Van",
    "Reefer",
    "Flatbed",
    "Step Deck",
    "Box Truck",
    "Tanker",
];

const COMMODITY_TYPES: &[&str] = &[
    "Electronics",
    "Food & Beverage",
    "Machinery",
    "Automotive Parts",
    "Construction Materials",
    "Furniture",
    "Textiles",
    "Pharmaceuticals",
    "Chemicals",
    "Consumer Goods",
    "Agricultural Products",
    "Paper Products",
];

const NOTES: &[&str] = &[
    "",
    "Driver assist required at delivery",
    "No touch freight",
    "Appointment required",
    "Team drivers preferred",
    "Hazmat certification not required",
];

/// Generate `count` loads deterministically from `seed`.
///
/// Pickup windows are laid out relative to `base_time` (1-10 days out,
/// delivery 1-3 days after pickup). Ids run L-1001, L-1002, ...
pub fn generate(count: usize, seed: u64, base_time: DateTime<Utc>) -> Vec<Load> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate_with(&mut rng, count, base_time)
}

/// Generate against an explicit random source.
pub fn generate_with(rng: &mut impl Rng, count: usize, base_time: DateTime<Utc>) -> Vec<Load> {
    (0..count).map(|i| one_load(rng, i, base_time)).collect()
}

fn one_load(rng: &mut impl Rng, index: usize, base_time: DateTime<Utc>) -> Load {
    let origin = *CITIES.choose(rng).unwrap();
    let mut destination = *CITIES.choose(rng).unwrap();
    while destination.0 == origin.0 {
        destination = *CITIES.choose(rng).unwrap();
    }

    let miles: u32 = rng.gen_range(100..=2600);
    // $1.50-$3.00 per mile, rounded to whole dollars.
    let cents_per_mile: u64 = rng.gen_range(150..=300);
    let loadboard_rate = Decimal::from((u64::from(miles) * cents_per_mile + 50) / 100);

    let weight: u32 = rng.gen_range(2_000..=45_000);
    let num_of_pieces: u32 = rng.gen_range(1..=26);
    let equipment_type = *EQUIPMENT_TYPES.choose(rng).unwrap();
    let commodity_type = *COMMODITY_TYPES.choose(rng).unwrap();
    let notes = *NOTES.choose(rng).unwrap();

    let pickup_days: i64 = rng.gen_range(1..=10);
    let transit_days: i64 = rng.gen_range(1..=3);
    let pickup_datetime = base_time + Duration::days(pickup_days);
    let delivery_datetime = pickup_datetime + Duration::days(transit_days);

    // The generator never emits `Either`; that wildcard only appears on
    // externally supplied loads.
    let run_type = if origin.1 == destination.1 {
        RunType::Intrastate
    } else {
        RunType::Interstate
    };

    let dimensions = format!(
        "{}'L x {}'W x {}'H",
        rng.gen_range(8..=48),
        rng.gen_range(4..=10),
        rng.gen_range(4..=10)
    );

    Load::create(LoadParams {
        load_id: LoadId::new(format!("L-{}", 1001 + index)),
        origin: origin.0.to_string(),
        destination: destination.0.to_string(),
        origin_state: origin.1.to_string(),
        destination_state: destination.1.to_string(),
        pickup_datetime,
        delivery_datetime,
        equipment_type: equipment_type.to_string(),
        loadboard_rate,
        notes: notes.to_string(),
        weight,
        commodity_type: commodity_type.to_string(),
        num_of_pieces,
        miles,
        dimensions,
        run_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_same_seed_same_catalog() {
        let a = generate(50, 42, base_time());
        let b = generate(50, 42, base_time());
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_different_catalog() {
        let a = generate(50, 42, base_time());
        let b = generate(50, 43, base_time());
        assert_ne!(a, b);
    }

    #[test]
    fn test_catalog_shape() {
        let loads = generate(100, 7, base_time());
        assert_eq!(loads.len(), 100);
        assert_eq!(loads[0].load_id.as_str(), "L-1001");
        assert_eq!(loads[99].load_id.as_str(), "L-1100");

        for load in &loads {
            assert!(load.loadboard_rate > Decimal::ZERO);
            assert!((100..=2600).contains(&load.miles));
            assert!((2_000..=45_000).contains(&load.weight));
            assert!((1..=26).contains(&load.num_of_pieces));
            assert!(load.delivery_datetime >= load.pickup_datetime);
            assert!(!load.booked);
            assert_ne!(load.origin, load.destination);
        }
    }

    #[test]
    fn test_never_emits_either() {
        let loads = generate(200, 11, base_time());
        assert!(loads.iter().all(|l| l.run_type != RunType::Either));
    }

    #[test]
    fn test_run_type_matches_states() {
        for load in generate(200, 11, base_time()) {
            let expected = if load.origin_state == load.destination_state {
                RunType::Intrastate
            } else {
                RunType::Interstate
            };
            assert_eq!(load.run_type, expected);
        }
    }

    #[test]
    fn test_derived_fields_consistent() {
        for load in generate(50, 3, base_time()) {
            let (rpm, score) = Load::derived_fields(load.loadboard_rate, load.miles);
            assert_eq!(load.rpm, rpm);
            assert_eq!(load.best_load_score, score);
        }
    }
}
