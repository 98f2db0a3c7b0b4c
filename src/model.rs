//! Core data model: `RawElement`, `NamedElement`, `Manifest`, `Patch`,
//! `ChangeEntry`.
//!
//! Field order on every serializable struct is deliberate: manifest JSON
//! keys must be sorted in a fixed, declared order rather than alphabetized.
//! `serde_json` serializes a typed struct's fields in declaration order, so
//! declaration order here *is* the wire contract.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Always-interactive and generic-but-checked tag names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Button,
    Input,
    Select,
    Textarea,
    A,
    Form,
    Div,
    Span,
    Img,
    Label,
}

impl ElementType {
    pub const ALWAYS_INTERACTIVE: &'static [ElementType] = &[
        ElementType::Button,
        ElementType::Input,
        ElementType::Select,
        ElementType::Textarea,
        ElementType::A,
        ElementType::Form,
    ];

    pub const GENERIC: &'static [ElementType] = &[
        ElementType::Div,
        ElementType::Span,
        ElementType::Img,
        ElementType::Label,
    ];

    /// Parse a JSX tag name into a native element type, if it names one.
    pub fn from_tag_name(name: &str) -> Option<Self> {
        Some(match name {
            "button" => ElementType::Button,
            "input" => ElementType::Input,
            "select" => ElementType::Select,
            "textarea" => ElementType::Textarea,
            "a" => ElementType::A,
            "form" => ElementType::Form,
            "div" => ElementType::Div,
            "span" => ElementType::Span,
            "img" => ElementType::Img,
            "label" => ElementType::Label,
            _ => return None,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Button => "button",
            ElementType::Input => "input",
            ElementType::Select => "select",
            ElementType::Textarea => "textarea",
            ElementType::A => "a",
            ElementType::Form => "form",
            ElementType::Div => "div",
            ElementType::Span => "span",
            ElementType::Img => "img",
            ElementType::Label => "label",
        }
    }

    pub fn is_always_interactive(&self) -> bool {
        Self::ALWAYS_INTERACTIVE.contains(self)
    }

    pub fn is_generic(&self) -> bool {
        Self::GENERIC.contains(self)
    }
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One interactive element discovered by a scan.
///
/// Produced only by `core::discovery`; immutable downstream. `(file_path,
/// line, column)` is unique per scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawElement {
    #[serde(rename = "type")]
    pub element_type: ElementType,
    pub file_path: String,
    pub line: usize,
    pub column: usize,
    pub component_name: Option<String>,
    pub route: Option<String>,
    pub label: Option<String>,
    pub handler: Option<String>,
    pub attributes: BTreeMap<String, String>,
    pub conditional: bool,
    pub dynamic: bool,
}

impl RawElement {
    /// Sort key used throughout the pipeline: scan order is `(filePath,
    /// line, column)` ascending.
    pub fn sort_key(&self) -> (&str, usize, usize) {
        (&self.file_path, self.line, self.column)
    }
}

/// A `RawElement` with its assigned agent id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedElement {
    pub agent_id: String,
    #[serde(rename = "type")]
    pub element_type: ElementType,
    pub file_path: String,
    pub line: usize,
    pub column: usize,
    pub component_name: Option<String>,
    pub route: Option<String>,
    pub label: Option<String>,
    pub handler: Option<String>,
    pub attributes: BTreeMap<String, String>,
    pub conditional: bool,
    pub dynamic: bool,
}

impl NamedElement {
    pub fn from_raw(raw: RawElement, agent_id: String) -> Self {
        Self {
            agent_id,
            element_type: raw.element_type,
            file_path: raw.file_path,
            line: raw.line,
            column: raw.column,
            component_name: raw.component_name,
            route: raw.route,
            label: raw.label,
            handler: raw.handler,
            attributes: raw.attributes,
            conditional: raw.conditional,
            dynamic: raw.dynamic,
        }
    }

    pub fn sort_key(&self) -> (&str, usize, usize) {
        (&self.file_path, self.line, self.column)
    }
}

pub const SCHEMA_VERSION: &str = "1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorInfo {
    pub name: String,
    pub version: String,
}

impl Default for GeneratorInfo {
    fn default() -> Self {
        Self {
            name: "uic".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestMetadata {
    pub framework: String,
    pub project_root: String,
    pub files_scanned: usize,
    pub elements_discovered: usize,
    pub warnings: Vec<String>,
}

/// The long-lived JSON artifact written to `uic.manifest.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub schema_version: String,
    pub generated_at: String,
    pub generator: GeneratorInfo,
    pub metadata: ManifestMetadata,
    pub elements: Vec<NamedElement>,
}

impl Manifest {
    pub fn new(
        generated_at: String,
        metadata: ManifestMetadata,
        mut elements: Vec<NamedElement>,
    ) -> Self {
        elements.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            generated_at,
            generator: GeneratorInfo::default(),
            metadata,
            elements,
        }
    }

    /// UTF-8, LF, 2-space indent, trailing newline.
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"  ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        serde::Serialize::serialize(self, &mut ser)?;
        let mut s = String::from_utf8(buf).expect("serde_json output is valid utf-8");
        s.push('\n');
        Ok(s)
    }
}

/// One file's worth of annotation output.
#[derive(Debug, Clone)]
pub struct Patch {
    pub file_path: String,
    pub diff: String,
    pub insertions: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Removed,
    Modified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeCategory {
    Breaking,
    Additive,
    Neutral,
}

impl ChangeCategory {
    /// Severity ordering: breaking < additive < neutral.
    fn rank(&self) -> u8 {
        match self {
            ChangeCategory::Breaking => 0,
            ChangeCategory::Additive => 1,
            ChangeCategory::Neutral => 2,
        }
    }
}

impl PartialOrd for ChangeCategory {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ChangeCategory {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

/// One entry of a manifest diff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEntry {
    pub kind: ChangeKind,
    pub agent_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<NamedElement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<NamedElement>,
    pub category: ChangeCategory,
}
