//! Catalog project records as stored in `projects.json`.
//!
//! Missing fields decode to defaults and unknown fields are ignored, so the
//! catalog can grow new keys without breaking older tooling. Optional blocks
//! and empty strings are omitted when the catalog is written back.

mod instruction;
mod load;

pub use instruction::{IllegalInstruction, Instruction};
pub use load::{decode_projects, load_projects, write_projects_json};

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

fn is_false(b: &bool) -> bool {
    !*b
}

/// Decodes `null` as the type's default. Catalogs written by older tooling
/// carry `null` for empty lists and strings.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// One catalog entry describing an external Whitespace implementation or resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// Relative path of the project inside the corpus (empty when not vendored).
    #[serde(deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(deserialize_with = "null_as_default")]
    pub authors: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub languages: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Free-form; usually `YYYY-MM-DD HH:MM:SS ±HHMM`.
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub spec_version: String,
    /// Source URLs, in catalog order.
    #[serde(deserialize_with = "null_as_default")]
    pub source: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub features: Features,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assembly: Option<Assembly>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapping: Option<Mapping>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run: Option<Run>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub notes: String,
    /// SPDX identifier, `other`, or `not found`. Never overwritten once set.
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub license: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Features {
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_false")]
    pub arbitrary_precision: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_false")]
    pub buffered_output: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_false")]
    pub negative_heap: bool,
}

/// Assembly dialect accepted by a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assembly {
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "BTreeMap::is_empty")]
    pub instructions: BTreeMap<Instruction, Vec<String>>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_false")]
    pub case_sensitive_instructions: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub line_comment_prefix: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub label_def_format: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub label_ref_format: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub extension: String,
}

/// Character mapping for Whitespace dialects that substitute other tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mapping {
    #[serde(deserialize_with = "null_as_default")]
    pub space: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tab: String,
    #[serde(deserialize_with = "null_as_default")]
    pub lf: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_false")]
    pub spaces_between: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_false")]
    pub ignore_case: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub extension: String,
}

/// How to build and invoke a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Run {
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub build: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub build_errors: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpret: Option<Command>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compile: Option<Command>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assemble: Option<Command>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other: Option<Command>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Command {
    #[serde(deserialize_with = "null_as_default")]
    pub bin: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub usage: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CommandOption>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<SubCommand>,
}

/// A command-line option of a project binary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandOption {
    /// e.g. `-s`
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub short: String,
    /// e.g. `--long`
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub long: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub arg: String,
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub default: serde_json::Value,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub desc: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubCommand {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub desc: String,
}

impl Project {
    pub fn has_license(&self) -> bool {
        !self.license.is_empty()
    }
}
