//! Static center directory.
//!
//! The center listing is marketing content that changes a few times a
//! year, so it ships compiled into the binary rather than living in the
//! database. Handlers filter this catalog per request.

use serde::Serialize;

use crate::types::DbId;

/// Geographic coordinates for map rendering.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A physical center where programs are held.
#[derive(Debug, Clone, Serialize)]
pub struct Center {
    pub id: DbId,
    pub name: &'static str,
    pub address: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub pincode: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub coordinates: Coordinates,
    /// Program names offered at this center.
    pub programs: &'static [&'static str],
    pub is_main_center: bool,
}

/// The full center directory, main center first.
pub const CENTERS: &[Center] = &[
    Center {
        id: 1,
        name: "Sattva International Center",
        address: "21st KM, Kanakapura Road, Udayapura, Bangalore",
        city: "Bangalore",
        state: "Karnataka",
        pincode: "560082",
        phone: "+91-80-28432321",
        email: "info@sattva.org",
        coordinates: Coordinates {
            lat: 12.9716,
            lng: 77.5946,
        },
        programs: &[
            "Happiness Program",
            "Advanced Meditation Program",
            "Sri Sri Yoga Classes",
        ],
        is_main_center: true,
    },
    Center {
        id: 2,
        name: "Sattva Center - Mumbai",
        address: "Vasudev Chambers, 1st Floor, 49, Marine Drive",
        city: "Mumbai",
        state: "Maharashtra",
        pincode: "400002",
        phone: "+91-22-2288-1234",
        email: "mumbai@sattva.org",
        coordinates: Coordinates {
            lat: 19.0760,
            lng: 72.8777,
        },
        programs: &[
            "Happiness Program",
            "Corporate Programs",
            "Happiness Program for Youth",
        ],
        is_main_center: false,
    },
    Center {
        id: 3,
        name: "Sattva Center - Delhi",
        address: "D-1, Vasant Vihar, New Delhi",
        city: "Delhi",
        state: "Delhi",
        pincode: "110057",
        phone: "+91-11-2615-1234",
        email: "delhi@sattva.org",
        coordinates: Coordinates {
            lat: 28.7041,
            lng: 77.1025,
        },
        programs: &[
            "Happiness Program",
            "Advanced Meditation Program",
            "Medha Yoga Level 1",
        ],
        is_main_center: false,
    },
];

// ---------------------------------------------------------------------------
// Lookups and filters
// ---------------------------------------------------------------------------

/// Case-insensitive substring match.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Find a center by id.
pub fn find_by_id(id: DbId) -> Option<&'static Center> {
    CENTERS.iter().find(|c| c.id == id)
}

/// Find the main center.
pub fn main_center() -> Option<&'static Center> {
    CENTERS.iter().find(|c| c.is_main_center)
}

/// Filter the directory by optional city, state, and offered program.
///
/// All filters are case-insensitive substring matches; a center must
/// satisfy every filter that is present.
pub fn filter(
    city: Option<&str>,
    state: Option<&str>,
    program: Option<&str>,
) -> Vec<&'static Center> {
    CENTERS
        .iter()
        .filter(|c| city.is_none_or(|city| contains_ci(c.city, city)))
        .filter(|c| state.is_none_or(|state| contains_ci(c.state, state)))
        .filter(|c| {
            program.is_none_or(|program| c.programs.iter().any(|p| contains_ci(p, program)))
        })
        .collect()
}

/// All centers in a given city (case-insensitive substring match).
pub fn by_city(city: &str) -> Vec<&'static Center> {
    filter(Some(city), None, None)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_has_exactly_one_main_center() {
        let mains: Vec<_> = CENTERS.iter().filter(|c| c.is_main_center).collect();
        assert_eq!(mains.len(), 1);
        assert_eq!(main_center().unwrap().id, mains[0].id);
    }

    #[test]
    fn find_by_id_returns_matching_center() {
        assert_eq!(find_by_id(2).unwrap().city, "Mumbai");
        assert!(find_by_id(999).is_none());
    }

    #[test]
    fn city_filter_is_case_insensitive() {
        let hits = by_city("bangalore");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
    }

    #[test]
    fn state_filter_matches_substring() {
        let hits = filter(None, Some("maha"), None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].city, "Mumbai");
    }

    #[test]
    fn program_filter_matches_offered_programs() {
        let hits = filter(None, None, Some("corporate"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].city, "Mumbai");
    }

    #[test]
    fn combined_filters_must_all_match() {
        let hits = filter(Some("Delhi"), None, Some("Medha"));
        assert_eq!(hits.len(), 1);

        let none = filter(Some("Delhi"), None, Some("Corporate"));
        assert!(none.is_empty());
    }

    #[test]
    fn no_filters_returns_whole_directory() {
        assert_eq!(filter(None, None, None).len(), CENTERS.len());
    }
}
