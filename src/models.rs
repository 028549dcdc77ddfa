//! Link extraction data model.
//!
//! `LinkRecord` and `ImageRef` are what the extractor produces, one record per
//! anchor element with every field present (possibly empty). `LinkOutput` and
//! `ImageOutput` are the serialized shapes returned by the `/parse` endpoint.

use serde::{Deserialize, Serialize};

/// An image element found under an anchor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageRef {
    /// `src` attribute, empty when absent
    pub src: String,
    /// `alt` attribute, empty when absent
    pub alt: String,
}

/// Everything extracted from one anchor element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkRecord {
    /// Raw `href` value, possibly relative or empty
    pub target: String,
    /// Descendant text, trimmed at both ends
    pub text: String,
    /// Nested images in document order
    pub images: Vec<ImageRef>,
    /// Email addresses in discovery order, duplicates kept
    pub emails: Vec<String>,
}

impl LinkRecord {
    /// True when no field carries any data.
    pub fn is_empty(&self) -> bool {
        self.target.is_empty()
            && self.text.is_empty()
            && self.images.is_empty()
            && self.emails.is_empty()
    }
}

/// JSON form of an `ImageRef`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageOutput {
    pub src: String,
    pub alt: String,
}

impl From<ImageRef> for ImageOutput {
    fn from(image: ImageRef) -> Self {
        Self {
            src: image.src,
            alt: image.alt,
        }
    }
}

/// JSON form of a `LinkRecord`; only non-empty fields are serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LinkOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ImageOutput>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emails: Option<Vec<String>>,
}
