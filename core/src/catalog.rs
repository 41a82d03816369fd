//! Static datasets: the taggable categories and the cities the directory
//! currently covers.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogTag {
    pub id: String,
    pub name: String,
}

impl CatalogTag {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct City {
    pub id: String,
    pub name: String,
}

const TAGS: &[(&str, &str)] = &[
    ("charity", "Registered Charity"),
    ("faith", "Faith Based"),
    ("lgbt", "LGBT+"),
    ("mental-health", "Mental Health"),
    ("young-people", "Young People"),
    ("women", "Women"),
    ("veterans", "Veterans"),
];

const CITIES: &[(&str, &str)] = &[
    ("birmingham", "Birmingham"),
    ("leeds", "Leeds"),
    ("manchester", "Manchester"),
    ("nottingham", "Nottingham"),
];

pub fn service_provider_tags() -> Vec<CatalogTag> {
    TAGS.iter().map(|(id, name)| CatalogTag::new(id, name)).collect()
}

pub fn supported_cities() -> Vec<City> {
    CITIES
        .iter()
        .map(|(id, name)| City {
            id: id.to_string(),
            name: name.to_string(),
        })
        .collect()
}
