//! Load catalog types
//!
//! A `Load` is a single shippable freight unit with route, schedule,
//! cargo, and commercial terms. The two derived commercial fields
//! (`rpm`, `best_load_score`) are computed exactly once at creation and
//! never re-derived from the live rate/miles afterwards.

use crate::ids::LoadId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Run type of a route
///
/// `Either` on a load acts as a wildcard: it satisfies any requested
/// run type in a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunType {
    /// Origin and destination in different states
    Interstate,
    /// Origin and destination in the same state
    Intrastate,
    /// Matches any requested run type
    Either,
}

impl RunType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunType::Interstate => "interstate",
            RunType::Intrastate => "intrastate",
            RunType::Either => "either",
        }
    }
}

impl fmt::Display for RunType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RunType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "interstate" => Ok(RunType::Interstate),
            "intrastate" => Ok(RunType::Intrastate),
            "either" => Ok(RunType::Either),
            other => Err(other.to_string()),
        }
    }
}

/// A single shippable freight unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Load {
    /// Unique identifier (e.g. "L-1001"), immutable once created
    pub load_id: LoadId,
    /// Pickup city and state (e.g. "Dallas, TX")
    pub origin: String,
    /// Delivery city and state (e.g. "Atlanta, GA")
    pub destination: String,
    /// 2-letter state code parsed from origin
    pub origin_state: String,
    /// 2-letter state code parsed from destination
    pub destination_state: String,
    /// Pickup timestamp
    pub pickup_datetime: DateTime<Utc>,
    /// Delivery timestamp (>= pickup at creation time)
    pub delivery_datetime: DateTime<Utc>,
    /// "Dry Van", "Reefer", "Flatbed", etc.
    pub equipment_type: String,
    /// Listed rate in USD (> 0)
    pub loadboard_rate: Decimal,
    /// Optional free-text details
    pub notes: String,
    /// Load weight in pounds
    pub weight: u32,
    /// Description of commodity
    pub commodity_type: String,
    /// Number of pieces or pallets
    pub num_of_pieces: u32,
    /// Total miles for the route (> 0)
    pub miles: u32,
    /// Optional dimensions (LxWxH)
    pub dimensions: String,
    pub run_type: RunType,
    /// True if load already booked; one-way transition, set exactly once
    pub booked: bool,
    /// Rate per mile, frozen at creation
    pub rpm: Decimal,
    /// Ranking heuristic `2*rpm + rate/100`, frozen at creation
    pub best_load_score: Decimal,
}

/// Creation-time parameters for a load
///
/// Everything except the derived fields and the lifecycle flag, which
/// `Load::create` fills in.
#[derive(Debug, Clone)]
pub struct LoadParams {
    pub load_id: LoadId,
    pub origin: String,
    pub destination: String,
    pub origin_state: String,
    pub destination_state: String,
    pub pickup_datetime: DateTime<Utc>,
    pub delivery_datetime: DateTime<Utc>,
    pub equipment_type: String,
    pub loadboard_rate: Decimal,
    pub notes: String,
    pub weight: u32,
    pub commodity_type: String,
    pub num_of_pieces: u32,
    pub miles: u32,
    pub dimensions: String,
    pub run_type: RunType,
}

impl Load {
    /// Create a load, computing `rpm` and `best_load_score` once.
    ///
    /// The derived fields are intentionally never recomputed after this
    /// point; a later mutation of rate or miles (not supported) would
    /// leave them stale.
    ///
    /// # Panics
    /// Panics if the creation invariants are violated: rate and miles
    /// must be positive, delivery must not precede pickup.
    pub fn create(params: LoadParams) -> Self {
        assert!(
            params.loadboard_rate > Decimal::ZERO,
            "loadboard_rate must be positive"
        );
        assert!(params.miles > 0, "miles must be positive");
        assert!(
            params.delivery_datetime >= params.pickup_datetime,
            "delivery must not precede pickup"
        );

        let (rpm, best_load_score) =
            Self::derived_fields(params.loadboard_rate, params.miles);
        Self {
            load_id: params.load_id,
            origin: params.origin,
            destination: params.destination,
            origin_state: params.origin_state,
            destination_state: params.destination_state,
            pickup_datetime: params.pickup_datetime,
            delivery_datetime: params.delivery_datetime,
            equipment_type: params.equipment_type,
            loadboard_rate: params.loadboard_rate,
            notes: params.notes,
            weight: params.weight,
            commodity_type: params.commodity_type,
            num_of_pieces: params.num_of_pieces,
            miles: params.miles,
            dimensions: params.dimensions,
            run_type: params.run_type,
            booked: false,
            rpm,
            best_load_score,
        }
    }

    /// Try to create a load, returning None if an invariant is violated.
    pub fn try_create(params: LoadParams) -> Option<Self> {
        if params.loadboard_rate <= Decimal::ZERO
            || params.miles == 0
            || params.delivery_datetime < params.pickup_datetime
        {
            return None;
        }
        Some(Self::create(params))
    }

    /// Compute `(rpm, best_load_score)` from rate and miles.
    ///
    /// `rpm = rate / miles`; `best_load_score = 2*rpm + rate/100`.
    ///
    /// # Panics
    /// Panics on zero miles.
    pub fn derived_fields(loadboard_rate: Decimal, miles: u32) -> (Decimal, Decimal) {
        assert!(miles > 0, "miles must be positive");
        let rpm = loadboard_rate / Decimal::from(miles);
        let best_load_score = Decimal::TWO * rpm + loadboard_rate / Decimal::ONE_HUNDRED;
        (rpm, best_load_score)
    }
}
