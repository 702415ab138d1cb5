// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::error::catalog_error::CatalogError;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::Display;

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Float,
    Double,
    String,
    VarChar,
    BinaryVector,
    FloatVector,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSchema {
    pub field_id: i64,
    pub name: String,
    #[serde(default)]
    pub is_primary_key: bool,
    #[serde(default)]
    pub description: String,
    pub data_type: DataType,
    #[serde(default)]
    pub type_params: BTreeMap<String, String>,
    #[serde(default)]
    pub auto_id: bool,
}

/// Structural description of a collection. Immutable once the collection has
/// been created.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionSchema {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub auto_id: bool,
    #[serde(default)]
    pub fields: Vec<FieldSchema>,
}

impl CollectionSchema {
    /// Decodes and validates the encoded form received with a create request.
    pub fn decode(bytes: &[u8]) -> Result<Self, CatalogError> {
        let schema: CollectionSchema = serde_json::from_slice(bytes)
            .map_err(|error| CatalogError::InvalidSchema(error.to_string()))?;
        schema.validate()?;
        Ok(schema)
    }

    pub fn encode(&self) -> Vec<u8> {
        // Serializing plain structs with string keys cannot fail.
        serde_json::to_vec(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut names = AHashSet::with_capacity(self.fields.len());
        for field in &self.fields {
            if !names.insert(field.name.as_str()) {
                return Err(CatalogError::InvalidSchema(format!(
                    "duplicate field name: {}",
                    field.name
                )));
            }
        }

        let primary_keys = self.fields.iter().filter(|f| f.is_primary_key).count();
        if primary_keys > 1 {
            return Err(CatalogError::InvalidSchema(format!(
                "expected at most one primary key field, found {primary_keys}"
            )));
        }
        Ok(())
    }

    pub fn primary_key(&self) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.is_primary_key)
    }
}
