//! # intent-jsonl Data Model
//!
//! File: cli/src/core/intent.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Defines the single entity the converter deals with: the chatbot intent
//! record, plus the `{"intents": [...]}` envelope that dataset files use.
//!
//! Field declaration order is the serialized field order (`tag`, `patterns`,
//! `responses`), which keeps the JSONL output byte-stable across runs.
//!
use serde::{Deserialize, Serialize};

/// One chatbot intent: a tag, example user utterances, and candidate replies.
///
/// Tags are expected to be unique within a dataset and both lists are expected
/// to be non-empty, but neither is checked here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct IntentRecord {
    /// Identifier of the intent, e.g. `greeting`.
    pub tag: String,
    /// Example user phrases that map to this intent.
    pub patterns: Vec<String>,
    /// Reply texts the bot may answer with.
    pub responses: Vec<String>,
}

impl IntentRecord {
    pub fn new<T, P, R>(tag: T, patterns: P, responses: R) -> Self
    where
        T: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            tag: tag.into(),
            patterns: patterns.into_iter().map(Into::into).collect(),
            responses: responses.into_iter().map(Into::into).collect(),
        }
    }
}

/// An ordered collection of intents as stored in a dataset file.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct IntentDataset {
    pub intents: Vec<IntentRecord>,
}
