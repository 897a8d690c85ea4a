use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

const REMOTE: &str = "REMOTE";

/// US state codes -> full names
static STATES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    [
        ("AL", "ALABAMA"), ("AK", "ALASKA"), ("AZ", "ARIZONA"), ("AR", "ARKANSAS"),
        ("CA", "CALIFORNIA"), ("CO", "COLORADO"), ("CT", "CONNECTICUT"), ("DE", "DELAWARE"),
        ("FL", "FLORIDA"), ("GA", "GEORGIA"), ("HI", "HAWAII"), ("ID", "IDAHO"),
        ("IL", "ILLINOIS"), ("IN", "INDIANA"), ("IA", "IOWA"), ("KS", "KANSAS"),
        ("KY", "KENTUCKY"), ("LA", "LOUISIANA"), ("ME", "MAINE"), ("MD", "MARYLAND"),
        ("MA", "MASSACHUSETTS"), ("MI", "MICHIGAN"), ("MN", "MINNESOTA"), ("MS", "MISSISSIPPI"),
        ("MO", "MISSOURI"), ("MT", "MONTANA"), ("NE", "NEBRASKA"), ("NV", "NEVADA"),
        ("NH", "NEW HAMPSHIRE"), ("NJ", "NEW JERSEY"), ("NM", "NEW MEXICO"), ("NY", "NEW YORK"),
        ("NC", "NORTH CAROLINA"), ("ND", "NORTH DAKOTA"), ("OH", "OHIO"), ("OK", "OKLAHOMA"),
        ("OR", "OREGON"), ("PA", "PENNSYLVANIA"), ("RI", "RHODE ISLAND"), ("SC", "SOUTH CAROLINA"),
        ("SD", "SOUTH DAKOTA"), ("TN", "TENNESSEE"), ("TX", "TEXAS"), ("UT", "UTAH"),
        ("VT", "VERMONT"), ("VA", "VIRGINIA"), ("WA", "WASHINGTON"), ("WV", "WEST VIRGINIA"),
        ("WI", "WISCONSIN"), ("WY", "WYOMING"), ("DC", "DISTRICT OF COLUMBIA"),
    ]
    .into_iter()
    .collect()
});

/// Tech hub cities -> metro region shared by neighbouring cities
static TECH_HUBS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    [
        ("SAN FRANCISCO", "BAY AREA"),
        ("PALO ALTO", "BAY AREA"),
        ("MOUNTAIN VIEW", "BAY AREA"),
        ("SUNNYVALE", "BAY AREA"),
        ("SAN JOSE", "BAY AREA"),
        ("OAKLAND", "BAY AREA"),
        ("BERKELEY", "BAY AREA"),
        ("NEW YORK", "NEW YORK METRO"),
        ("BROOKLYN", "NEW YORK METRO"),
        ("JERSEY CITY", "NEW YORK METRO"),
        ("MANHATTAN", "NEW YORK METRO"),
        ("LOS ANGELES", "LOS ANGELES"),
        ("SEATTLE", "SEATTLE"),
        ("AUSTIN", "AUSTIN"),
        ("BOSTON", "BOSTON"),
        ("CHICAGO", "CHICAGO"),
        ("DENVER", "DENVER"),
        ("MIAMI", "MIAMI"),
    ]
    .into_iter()
    .collect()
});

/// Location text broken into comparable parts (all uppercase)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedLocation {
    pub city: String,
    pub state: String,
    pub is_remote: bool,
    pub region: String,
}

/// Display classification of a location match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LocationMatchType {
    Remote,
    SameCity,
    SameState,
    SameRegion,
    DifferentLocation,
}

impl LocationMatchType {
    pub fn label(&self) -> &'static str {
        match self {
            LocationMatchType::Remote => "Remote",
            LocationMatchType::SameCity => "Same City",
            LocationMatchType::SameState => "Same State",
            LocationMatchType::SameRegion => "Same Region",
            LocationMatchType::DifferentLocation => "Different Location",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationDetails {
    pub score: f64,
    pub match_type: LocationMatchType,
    pub candidate: ParsedLocation,
    pub job: ParsedLocation,
}

#[inline]
fn mentions_remote(text: &str) -> bool {
    text.to_uppercase().contains(REMOTE)
}

#[inline]
fn same_non_empty(a: &str, b: &str) -> bool {
    !a.is_empty() && a == b
}

/// Parse "City, ST", "ST", "City" or anything mentioning remote work
///
/// Two-letter state codes expand to full names. The region is the city's
/// tech hub when known, else the state, else the city.
pub fn parse_location(location: &str) -> ParsedLocation {
    let location = location.trim().to_uppercase();
    if location.is_empty() {
        return ParsedLocation::default();
    }

    if location.contains(REMOTE) {
        return ParsedLocation {
            is_remote: true,
            region: REMOTE.to_string(),
            ..ParsedLocation::default()
        };
    }

    let (city, state) = if let Some((city, rest)) = location.split_once(',') {
        let state = rest.split(',').next().unwrap_or_default();
        (city.trim().to_string(), state.trim().to_string())
    } else if location.chars().count() == 2 {
        (String::new(), location.clone())
    } else {
        (location.clone(), String::new())
    };

    let state = match STATES.get(state.as_str()) {
        Some(full) => (*full).to_string(),
        None => state,
    };

    let region = match TECH_HUBS.get(city.as_str()) {
        Some(hub) => (*hub).to_string(),
        None if !state.is_empty() => state.clone(),
        None => city.clone(),
    };

    ParsedLocation {
        city,
        state,
        is_remote: false,
        region,
    }
}

/// Score tier and display type in one pass; first matching tier wins
fn classify(candidate_location: &str, job_location: &str, is_remote_job: bool) -> (f64, LocationMatchType) {
    if is_remote_job || mentions_remote(job_location) {
        // Remote work is broadly acceptable even to on-site candidates
        let score = if mentions_remote(candidate_location) { 100.0 } else { 80.0 };
        return (score, LocationMatchType::Remote);
    }

    let candidate = parse_location(candidate_location);
    let job = parse_location(job_location);

    if candidate.is_remote {
        return (60.0, LocationMatchType::DifferentLocation);
    }
    if same_non_empty(&candidate.city, &job.city) {
        return (100.0, LocationMatchType::SameCity);
    }
    if same_non_empty(&candidate.state, &job.state) {
        return (75.0, LocationMatchType::SameState);
    }
    if same_non_empty(&candidate.region, &job.region) {
        return (70.0, LocationMatchType::SameRegion);
    }

    (30.0, LocationMatchType::DifferentLocation)
}

/// Location score (0-100)
///
/// | tier                                  | score |
/// |---------------------------------------|-------|
/// | remote job, candidate wants remote    | 100   |
/// | remote job, candidate on-site         | 80    |
/// | candidate remote-only, on-site job    | 60    |
/// | same city                             | 100   |
/// | same state                            | 75    |
/// | same region (tech hub)                | 70    |
/// | anything else                         | 30    |
pub fn calculate_location_match(candidate_location: &str, job_location: &str, is_remote_job: bool) -> f64 {
    classify(candidate_location, job_location, is_remote_job).0
}

pub fn location_details(candidate_location: &str, job_location: &str, is_remote_job: bool) -> LocationDetails {
    let (score, match_type) = classify(candidate_location, job_location, is_remote_job);

    LocationDetails {
        score,
        match_type,
        candidate: parse_location(candidate_location),
        job: parse_location(job_location),
    }
}
