//! Shared fixtures for in-crate unit tests
//!
//! Hand-implemented pet-clinic entities so unit tests don't depend on the
//! derive crate. `specimen-derive` generates equivalent impls; its own
//! tests assert that the generated output matches these shapes.

use crate::example::ExampleTrait;
use crate::model::{decode_field, DecodeError, FieldDescriptor, FromRow, ModelTrait};
use chrono::{DateTime, TimeZone, Utc};
use sea_query::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct Owner {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub city: Option<String>,
}

impl ModelTrait for Owner {
    const TABLE: &'static str = "owners";
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::plain("id").primary(),
        FieldDescriptor::plain("name"),
        FieldDescriptor::aliased("email", "contact_email"),
        FieldDescriptor::plain("city"),
    ];

    fn get(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(self.id.into()),
            "name" => Some(self.name.clone().into()),
            "email" => Some(self.email.clone().into()),
            "city" => Some(self.city.clone().into()),
            _ => None,
        }
    }

    fn to_values(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("id", self.id.into()),
            ("name", self.name.clone().into()),
            ("email", self.email.clone().into()),
            ("city", self.city.clone().into()),
        ]
    }

    fn from_values(values: &HashMap<String, Value>) -> Result<Self, DecodeError> {
        Ok(Self {
            id: decode_field(values, Self::TABLE, "id")?,
            name: decode_field(values, Self::TABLE, "name")?,
            email: decode_field(values, Self::TABLE, "email")?,
            city: decode_field(values, Self::TABLE, "city")?,
        })
    }
}

impl FromRow for Owner {
    fn from_row(row: &may_postgres::Row) -> Result<Self, may_postgres::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            city: row.try_get("city")?,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct OwnerCriteria {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub city: Option<String>,
}

impl ExampleTrait for OwnerCriteria {
    type Model = Owner;

    fn fields(&self) -> Vec<(&'static str, Option<Value>)> {
        vec![
            ("id", self.id.map(Value::from)),
            ("name", self.name.clone().map(Value::from)),
            ("email", self.email.clone().map(Value::from)),
            ("city", self.city.clone().map(Value::from)),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pet {
    pub id: i64,
    pub owner_id: i64,
    pub name: String,
    pub adopted_at: DateTime<Utc>,
}

impl ModelTrait for Pet {
    const TABLE: &'static str = "pets";
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::plain("id").primary(),
        FieldDescriptor::aliased("owner_id", "owner"),
        FieldDescriptor::plain("name"),
        FieldDescriptor::plain("adopted_at"),
    ];

    fn get(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(self.id.into()),
            "owner_id" => Some(self.owner_id.into()),
            "name" => Some(self.name.clone().into()),
            "adopted_at" => Some(self.adopted_at.into()),
            _ => None,
        }
    }

    fn to_values(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("id", self.id.into()),
            ("owner_id", self.owner_id.into()),
            ("name", self.name.clone().into()),
            ("adopted_at", self.adopted_at.into()),
        ]
    }

    fn from_values(values: &HashMap<String, Value>) -> Result<Self, DecodeError> {
        Ok(Self {
            id: decode_field(values, Self::TABLE, "id")?,
            owner_id: decode_field(values, Self::TABLE, "owner_id")?,
            name: decode_field(values, Self::TABLE, "name")?,
            adopted_at: decode_field(values, Self::TABLE, "adopted_at")?,
        })
    }
}

impl FromRow for Pet {
    fn from_row(row: &may_postgres::Row) -> Result<Self, may_postgres::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            owner_id: row.try_get("owner_id")?,
            name: row.try_get("name")?,
            adopted_at: row.try_get("adopted_at")?,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct PetCriteria {
    pub id: Option<i64>,
    pub owner_id: Option<i64>,
    pub name: Option<String>,
    pub adopted_at: Option<DateTime<Utc>>,
}

impl ExampleTrait for PetCriteria {
    type Model = Pet;

    fn fields(&self) -> Vec<(&'static str, Option<Value>)> {
        vec![
            ("id", self.id.map(Value::from)),
            ("owner_id", self.owner_id.map(Value::from)),
            ("name", self.name.clone().map(Value::from)),
            ("adopted_at", self.adopted_at.map(Value::from)),
        ]
    }
}

pub fn owner_fixture() -> Owner {
    Owner {
        id: 7,
        name: "Ada".to_string(),
        email: "ada@acm.org".to_string(),
        city: Some("Lisbon".to_string()),
    }
}

pub fn pet_fixture() -> Pet {
    Pet {
        id: 1,
        owner_id: 7,
        name: "Bella".to_string(),
        adopted_at: Utc.with_ymd_and_hms(2023, 6, 1, 9, 0, 0).unwrap(),
    }
}
