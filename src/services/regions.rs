//! Country to region lookup for the fly-home decision
//!
//! A region is a coarse continent-scale grouping used to decide whether two
//! tour stops are close enough to skip a return-home leg. Lookup is a trait
//! so the planner can be tested with a fixed mapping, and unknown countries
//! are an explicit `None` rather than a hard failure.

/// Coarse geographic grouping, continent scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Africa,
    Americas,
    Asia,
    Europe,
    Oceania,
}

impl Region {
    pub fn as_str(&self) -> &str {
        match self {
            Region::Africa => "Africa",
            Region::Americas => "Americas",
            Region::Asia => "Asia",
            Region::Europe => "Europe",
            Region::Oceania => "Oceania",
        }
    }
}

/// Injected lookup capability from country name to region
///
/// Returns `None` for countries the table does not know, which the planner
/// treats conservatively (regions differ, fly home).
pub trait RegionLookup {
    fn region(&self, country: &str) -> Option<Region>;
}

/// Static country table covering the countries that show up in tour data
#[derive(Debug, Clone, Copy, Default)]
pub struct WorldRegions;

impl RegionLookup for WorldRegions {
    fn region(&self, country: &str) -> Option<Region> {
        let region = match country.trim().to_lowercase().as_str() {
            // Europe
            "albania" | "austria" | "belarus" | "belgium" | "bosnia and herzegovina"
            | "bulgaria" | "croatia" | "cyprus" | "czech republic" | "czechia" | "denmark"
            | "estonia" | "finland" | "france" | "germany" | "greece" | "hungary" | "iceland"
            | "ireland" | "italy" | "latvia" | "lithuania" | "luxembourg" | "malta"
            | "moldova" | "monaco" | "montenegro" | "netherlands" | "north macedonia"
            | "norway" | "poland" | "portugal" | "romania" | "russia" | "serbia" | "slovakia"
            | "slovenia" | "spain" | "sweden" | "switzerland" | "ukraine" | "united kingdom"
            | "uk" | "england" | "scotland" | "wales" | "northern ireland" => Region::Europe,

            // Americas
            "argentina" | "bolivia" | "brazil" | "canada" | "chile" | "colombia"
            | "costa rica" | "cuba" | "dominican republic" | "ecuador" | "el salvador"
            | "guatemala" | "honduras" | "jamaica" | "mexico" | "nicaragua" | "panama"
            | "paraguay" | "peru" | "puerto rico" | "trinidad and tobago" | "uruguay"
            | "united states" | "united states of america" | "usa" | "venezuela" => {
                Region::Americas
            }

            // Asia
            "armenia" | "azerbaijan" | "bahrain" | "bangladesh" | "cambodia" | "china"
            | "georgia" | "hong kong" | "india" | "indonesia" | "iran" | "israel" | "japan"
            | "jordan" | "kazakhstan" | "kuwait" | "laos" | "lebanon" | "malaysia"
            | "mongolia" | "myanmar" | "nepal" | "oman" | "pakistan" | "philippines"
            | "qatar" | "saudi arabia" | "singapore" | "south korea" | "sri lanka"
            | "taiwan" | "thailand" | "turkey" | "united arab emirates" | "uzbekistan"
            | "vietnam" => Region::Asia,

            // Africa
            "algeria" | "angola" | "cameroon" | "egypt" | "ethiopia" | "ghana" | "kenya"
            | "morocco" | "mozambique" | "namibia" | "nigeria" | "senegal" | "south africa"
            | "tanzania" | "tunisia" | "uganda" | "zimbabwe" => Region::Africa,

            // Oceania
            "australia" | "fiji" | "new caledonia" | "new zealand" | "papua new guinea" => {
                Region::Oceania
            }

            _ => return None,
        };
        Some(region)
    }
}
