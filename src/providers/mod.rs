// src/providers/mod.rs

use serde::Serialize;
use std::collections::BTreeMap;

use crate::errors::Result;

pub mod gemini;

/// Field types understood by structured-output schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaType {
    Object,
    Number,
    String,
}

/// The shape the model is asked to emit its JSON answer in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseSchema {
    #[serde(rename = "type")]
    pub kind: SchemaType,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, ResponseSchema>,
}

impl ResponseSchema {
    pub fn scalar(kind: SchemaType) -> Self {
        Self {
            kind,
            properties: BTreeMap::new(),
        }
    }

    pub fn object<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, ResponseSchema)>,
        K: Into<String>,
    {
        Self {
            kind: SchemaType::Object,
            properties: fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// A common trait for text-generation backends.
pub trait LlmProvider: Send + Sync {
    /// Asks the model for a JSON answer conforming to `schema`.
    ///
    /// # Returns
    /// The raw JSON text produced by the model and the latency in milliseconds.
    fn generate_json(
        &self,
        prompt: &str,
        schema: &ResponseSchema,
    ) -> impl std::future::Future<Output = Result<(String, u64)>> + Send;
}
