//! Input dataset types for the geographic hierarchy JSON

use indexmap::IndexMap;
use serde::Deserialize;

/// Top-level dataset: country display name -> country record.
/// IndexMap keeps countries in document order, so pages come out in the
/// order countries appear in the JSON file.
pub type Dataset = IndexMap<String, Country>;

#[derive(Debug, Clone, Deserialize)]
pub struct Country {
    /// Regions (provinces, departments, states)
    pub large_units: Option<Vec<LargeUnit>>,
    /// Cities, flat across the whole country (not nested under regions)
    pub small_units: Option<Vec<SmallUnit>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LargeUnit {
    #[serde(rename = "BASIC_INFO")]
    pub basic_info: RegionInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegionInfo {
    #[serde(rename = "NAME")]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SmallUnit {
    #[serde(rename = "BASIC_INFO")]
    pub basic_info: CityInfo,
}

/// `parent` names the owning region by display name, not by identifier
#[derive(Debug, Clone, Deserialize)]
pub struct CityInfo {
    #[serde(rename = "NAME")]
    pub name: String,
    #[serde(rename = "PARENT")]
    pub parent: String,
}
