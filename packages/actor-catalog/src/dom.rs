//! Navigable document tree.
//!
//! This is the only module that knows the selector dialect (CSS, via the
//! `scraper` crate). Everything above it works with [`Document`], [`Node`]
//! and compiled [`Path`]s, so a different query language only touches this file.
//!
//! `scraper` trees are `!Send`: parse after the fetch completes and finish
//! walking the tree before the next await.

use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

/// A selector string that failed to compile.
#[derive(Debug, Clone, Error)]
#[error("invalid selector {selector:?}: {reason}")]
pub struct PathError {
    pub selector: String,
    pub reason: String,
}

/// A compiled selector.
#[derive(Debug, Clone)]
pub struct Path {
    raw: String,
    selector: Selector,
}

impl Path {
    /// Compile a selector string.
    pub fn parse(raw: &str) -> Result<Self, PathError> {
        let selector = Selector::parse(raw).map_err(|e| PathError {
            selector: raw.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            raw: raw.to_string(),
            selector,
        })
    }

    /// Compile an optional selector: blank strings yield `None`.
    pub fn parse_optional(raw: &str) -> Result<Option<Self>, PathError> {
        if raw.trim().is_empty() {
            return Ok(None);
        }
        Self::parse(raw).map(Some)
    }

    /// The selector as written in configuration.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

/// A parsed HTML document.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse an HTML document. Malformed markup is repaired, never rejected.
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// All elements in the document matching `path`, in document order.
    pub fn select_all(&self, path: &Path) -> Vec<Node<'_>> {
        self.html
            .select(&path.selector)
            .map(|element| Node { element })
            .collect()
    }

    /// First element in the document matching `path`.
    pub fn select_one(&self, path: &Path) -> Option<Node<'_>> {
        self.html
            .select(&path.selector)
            .next()
            .map(|element| Node { element })
    }
}

/// An element inside a [`Document`].
#[derive(Debug, Clone, Copy)]
pub struct Node<'a> {
    element: ElementRef<'a>,
}

impl<'a> Node<'a> {
    /// Descendants matching `path`, in document order.
    pub fn select_all(&self, path: &Path) -> Vec<Node<'a>> {
        self.element
            .select(&path.selector)
            .map(|element| Node { element })
            .collect()
    }

    /// First descendant matching `path`.
    pub fn select_one(&self, path: &Path) -> Option<Node<'a>> {
        self.element
            .select(&path.selector)
            .next()
            .map(|element| Node { element })
    }

    /// Concatenated text of all descendant text nodes, trimmed.
    pub fn text(&self) -> String {
        self.element.text().collect::<String>().trim().to_string()
    }
}
