//! The fixed attribute catalog.
//!
//! Attributes are written as `<entity-type>/<field-name>`, for example
//! `person/name`. Only the six combinations of [`EntityType`] and [`Field`]
//! are valid.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Kind of entity an attribute belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Person,
    Company,
    Product,
}

impl EntityType {
    pub const ALL: [EntityType; 3] = [EntityType::Person, EntityType::Company, EntityType::Product];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Person => "person",
            EntityType::Company => "company",
            EntityType::Product => "product",
        }
    }
}

/// Field name half of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Type,
}

impl Field {
    pub const ALL: [Field; 2] = [Field::Name, Field::Type];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Type => "type",
        }
    }
}

/// Errors produced when parsing an attribute key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttributeParseError {
    /// Missing the `/` separator.
    #[error("attribute '{0}' is not of the form <entity-type>/<field>")]
    MissingSeparator(String),

    #[error("unknown entity type '{0}'")]
    UnknownEntityType(String),

    #[error("unknown field '{0}'")]
    UnknownField(String),
}

/// An attribute key from the catalog, e.g. `company/type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Attribute {
    pub entity_type: EntityType,
    pub field: Field,
}

impl Attribute {
    pub const fn new(entity_type: EntityType, field: Field) -> Self {
        Self { entity_type, field }
    }

    /// All six catalog attributes, entity type major.
    pub fn catalog() -> impl Iterator<Item = Attribute> {
        EntityType::ALL
            .into_iter()
            .flat_map(|t| Field::ALL.into_iter().map(move |f| Attribute::new(t, f)))
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.entity_type.as_str(), self.field.as_str())
    }
}

impl FromStr for Attribute {
    type Err = AttributeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (entity_type, field) = s
            .split_once('/')
            .ok_or_else(|| AttributeParseError::MissingSeparator(s.to_string()))?;

        let entity_type = EntityType::ALL
            .into_iter()
            .find(|t| t.as_str() == entity_type)
            .ok_or_else(|| AttributeParseError::UnknownEntityType(entity_type.to_string()))?;
        let field = Field::ALL
            .into_iter()
            .find(|f| f.as_str() == field)
            .ok_or_else(|| AttributeParseError::UnknownField(field.to_string()))?;

        Ok(Attribute::new(entity_type, field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_six_attributes() {
        let all: Vec<String> = Attribute::catalog().map(|a| a.to_string()).collect();
        assert_eq!(
            all,
            vec![
                "person/name",
                "person/type",
                "company/name",
                "company/type",
                "product/name",
                "product/type",
            ]
        );
    }

    #[test]
    fn test_parse_valid_attribute() {
        let attr: Attribute = "product/type".parse().unwrap();
        assert_eq!(attr, Attribute::new(EntityType::Product, Field::Type));
    }

    #[test]
    fn test_parse_rejects_unknown_parts() {
        assert_eq!(
            "person".parse::<Attribute>(),
            Err(AttributeParseError::MissingSeparator("person".to_string()))
        );
        assert_eq!(
            "animal/name".parse::<Attribute>(),
            Err(AttributeParseError::UnknownEntityType("animal".to_string()))
        );
        assert_eq!(
            "person/age".parse::<Attribute>(),
            Err(AttributeParseError::UnknownField("age".to_string()))
        );
    }
}
