//! # Jurisdiction Profiles
//!
//! Short descriptive notes on the waters, permitting agencies and governing
//! concerns for each supported state. Profiles are informational: no model
//! changes its behaviour based on jurisdiction and no code compliance is
//! checked.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Supported US state codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StateCode {
    CA,
    IN,
    OH,
}

impl StateCode {
    /// All supported states, sorted by code
    pub const ALL: [StateCode; 3] = [StateCode::CA, StateCode::IN, StateCode::OH];

    pub fn code(&self) -> &'static str {
        match self {
            StateCode::CA => "CA",
            StateCode::IN => "IN",
            StateCode::OH => "OH",
        }
    }

    /// Case-insensitive lookup by two-letter code
    pub fn parse(code: &str) -> CalcResult<StateCode> {
        let wanted = code.trim();
        StateCode::ALL
            .iter()
            .copied()
            .find(|s| s.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CalcError::UnknownJurisdiction {
                code: code.to_string(),
                supported: StateCode::ALL.iter().map(|s| s.code()).collect::<Vec<_>>().join(", "),
            })
    }

    pub fn profile(&self) -> JurisdictionProfile {
        match self {
            StateCode::CA => JurisdictionProfile {
                code: *self,
                name: "California",
                waters: "Pacific coast, bays, tidal channels",
                agencies: &["USACE", "NOAA", "CA Coastal Commission", "Regional Boards", "Ports"],
                notes: "Coastal processes, sea level rise, seismic considerations; CEQA/Coastal permits.",
            },
            StateCode::IN => JurisdictionProfile {
                code: *self,
                name: "Indiana",
                waters: "Inland rivers/canals and Ohio River reaches",
                agencies: &["USACE", "IDEM", "DNR", "Local Ports"],
                notes: "Riverine navigation, scour, debris; inland vessel loads and freshwater properties.",
            },
            StateCode::OH => JurisdictionProfile {
                code: *self,
                name: "Ohio",
                waters: "Great Lakes (Lake Erie), Ohio River, inland waterways",
                agencies: &["USACE", "ODNR", "OEPA", "Port Authorities"],
                notes: "Ice, seiches on Lake Erie, riverine hydraulics; USACE/port coordination.",
            },
        }
    }
}

impl std::fmt::Display for StateCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Descriptive profile for one jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JurisdictionProfile {
    pub code: StateCode,
    pub name: &'static str,
    /// Typical water bodies
    pub waters: &'static str,
    /// Agencies usually involved in permitting
    pub agencies: &'static [&'static str],
    /// Governing design concerns
    pub notes: &'static str,
}

/// All profiles, sorted by state code.
pub fn list_jurisdictions() -> Vec<JurisdictionProfile> {
    StateCode::ALL.iter().map(StateCode::profile).collect()
}

/// Profile for a code such as `"oh"` or `"CA"`.
pub fn jurisdiction(code: &str) -> CalcResult<JurisdictionProfile> {
    Ok(StateCode::parse(code)?.profile())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_sorted() {
        let codes: Vec<&str> = list_jurisdictions().iter().map(|p| p.code.code()).collect();
        assert_eq!(codes, vec!["CA", "IN", "OH"]);
    }

    #[test]
    fn test_lookup_case_insensitive() {
        let ohio = jurisdiction("oh").unwrap();
        assert_eq!(ohio.name, "Ohio");
        assert!(ohio.waters.contains("Lake Erie"));
        assert_eq!(jurisdiction(" CA ").unwrap().code, StateCode::CA);
    }

    #[test]
    fn test_unknown_code() {
        let err = jurisdiction("TX").unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_JURISDICTION");
        assert!(err.to_string().contains("CA, IN, OH"));
    }

    #[test]
    fn test_profiles_serialize() {
        let json = serde_json::to_value(jurisdiction("IN").unwrap()).unwrap();
        assert_eq!(json["code"], "IN");
        assert_eq!(json["agencies"][0], "USACE");
    }
}
