//! Reference data served by the system endpoints.

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::basic::CountryCode;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Country {
    /// ISO 3166 country identifier
    pub code: Option<CountryCode>,
    pub label: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Region {
    pub country_code: Option<CountryCode>,
    /// ISO 3166 region identifier
    pub code: Option<String>,
    pub label: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Timezone {
    pub id: Option<String>,
    /// Identifier from the IANA Time Zone Database
    pub timezone: Option<String>,
    /// Localized name
    pub label: Option<String>,
}
