use crate::errors::SiddurError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Time-of-day prayer service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    Shacharis,
    Mincha,
    Maariv,
}

impl ServiceType {
    pub const ALL: [ServiceType; 3] = [
        ServiceType::Shacharis,
        ServiceType::Mincha,
        ServiceType::Maariv,
    ];

    /// Service normally prayed at a local hour (0..=23)
    pub fn for_hour(hour: u32) -> Self {
        match hour {
            4..=11 => ServiceType::Shacharis,
            12..=17 => ServiceType::Mincha,
            _ => ServiceType::Maariv,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Shacharis => "shacharis",
            ServiceType::Mincha => "mincha",
            ServiceType::Maariv => "maariv",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = SiddurError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shacharis" | "shacharit" => Ok(ServiceType::Shacharis),
            "mincha" | "minchah" => Ok(ServiceType::Mincha),
            "maariv" | "arvit" => Ok(ServiceType::Maariv),
            other => Err(SiddurError::UnsupportedServiceType {
                service: other.to_string(),
            }),
        }
    }
}
