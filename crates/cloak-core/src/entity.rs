//! Entity model: the closed set of PII categories and detected spans.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A PII category tag.
///
/// The canonical set is closed; custom scanners may contribute additional
/// tags via [`EntityType::custom`]. The textual name of a type is part of
/// the token grammar (`«TYPE_NNN»`), so names are restricted to uppercase
/// ASCII letters and underscores.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityType {
    Email,
    Phone,
    CreditCard,
    Ssn,
    IpAddress,
    DateOfBirth,
    AuTfn,
    AuMedicare,
    UrlWithSecret,
    ApiKey,
    Person,
    Organization,
    Location,
    Nrp,
    Url,
    DateTime,
    Custom(String),
}

impl EntityType {
    /// The textual name used in tokens and wire payloads.
    pub fn name(&self) -> &str {
        match self {
            Self::Email => "EMAIL",
            Self::Phone => "PHONE",
            Self::CreditCard => "CREDIT_CARD",
            Self::Ssn => "SSN",
            Self::IpAddress => "IP_ADDRESS",
            Self::DateOfBirth => "DATE_OF_BIRTH",
            Self::AuTfn => "AU_TFN",
            Self::AuMedicare => "AU_MEDICARE",
            Self::UrlWithSecret => "URL_WITH_SECRET",
            Self::ApiKey => "API_KEY",
            Self::Person => "PERSON",
            Self::Organization => "ORGANIZATION",
            Self::Location => "LOCATION",
            Self::Nrp => "NRP",
            Self::Url => "URL",
            Self::DateTime => "DATE_TIME",
            Self::Custom(name) => name,
        }
    }

    /// Parse a textual name back into a type. Unknown names become
    /// [`EntityType::Custom`] (normalized to the token alphabet).
    pub fn from_name(name: &str) -> Self {
        Self::known(name).unwrap_or_else(|| Self::custom(name))
    }

    /// Build a custom type, normalizing the name to the token alphabet:
    /// uppercase ASCII letters and underscores. Anything else maps to `_`.
    pub fn custom(name: &str) -> Self {
        let normalized: String = name
            .chars()
            .map(|c| match c.to_ascii_uppercase() {
                u @ 'A'..='Z' => u,
                _ => '_',
            })
            .collect();
        // Token parsing splits at the last underscore, so an empty name
        // would produce an unparseable token.
        if normalized.is_empty() {
            return Self::Custom("CUSTOM".to_string());
        }
        Self::known(&normalized).unwrap_or(Self::Custom(normalized))
    }

    fn known(name: &str) -> Option<Self> {
        match name {
            "EMAIL" => Some(Self::Email),
            "PHONE" => Some(Self::Phone),
            "CREDIT_CARD" => Some(Self::CreditCard),
            "SSN" => Some(Self::Ssn),
            "IP_ADDRESS" => Some(Self::IpAddress),
            "DATE_OF_BIRTH" => Some(Self::DateOfBirth),
            "AU_TFN" => Some(Self::AuTfn),
            "AU_MEDICARE" => Some(Self::AuMedicare),
            "URL_WITH_SECRET" => Some(Self::UrlWithSecret),
            "API_KEY" => Some(Self::ApiKey),
            "PERSON" => Some(Self::Person),
            "ORGANIZATION" => Some(Self::Organization),
            "LOCATION" => Some(Self::Location),
            "NRP" => Some(Self::Nrp),
            "URL" => Some(Self::Url),
            "DATE_TIME" => Some(Self::DateTime),
            _ => None,
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for EntityType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for EntityType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

/// A single detected PII span.
///
/// Offsets are **character** offsets into the scanned text, half-open
/// `[start, end)`. Deterministic detectors report `score` 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMatch {
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub score: f64,
    pub source: String,
}

impl EntityMatch {
    /// Span length in characters.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// True if this span overlaps `other` (half-open semantics).
    pub fn overlaps(&self, other: &EntityMatch) -> bool {
        self.start < other.end && self.end > other.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names_round_trip() {
        let all = [
            EntityType::Email,
            EntityType::Phone,
            EntityType::CreditCard,
            EntityType::Ssn,
            EntityType::IpAddress,
            EntityType::DateOfBirth,
            EntityType::AuTfn,
            EntityType::AuMedicare,
            EntityType::UrlWithSecret,
            EntityType::ApiKey,
            EntityType::Person,
            EntityType::Organization,
            EntityType::Location,
            EntityType::Nrp,
            EntityType::Url,
            EntityType::DateTime,
        ];
        for t in all {
            assert_eq!(EntityType::from_name(t.name()), t);
        }
    }

    #[test]
    fn custom_names_are_normalized_to_token_alphabet() {
        assert_eq!(
            EntityType::custom("employee-id").name(),
            "EMPLOYEE_ID"
        );
        assert_eq!(EntityType::custom("").name(), "CUSTOM");
    }

    #[test]
    fn custom_resolving_to_known_name_collapses() {
        assert_eq!(EntityType::custom("email"), EntityType::Email);
    }

    #[test]
    fn serde_uses_type_key_and_textual_name() {
        let m = EntityMatch {
            entity_type: EntityType::Email,
            text: "a@b.co".to_string(),
            start: 0,
            end: 6,
            score: 1.0,
            source: "regex".to_string(),
        };
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["type"], "EMAIL");
        assert_eq!(json["source"], "regex");
    }
}
