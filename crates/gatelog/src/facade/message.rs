//! Deferred message rendering
//!
//! The closure a call site hands to [`Logger::log`](crate::Logger::log)
//! writes into a `MessageBuilder`. It only runs once the sink has accepted
//! the severity, so nothing here executes for filtered calls.

use crate::record::Property;
use std::fmt;

/// Target of the deferred template
#[derive(Debug, Default)]
pub struct MessageBuilder {
    template: &'static str,
    text: String,
    properties: Vec<Property>,
    skip_properties: bool,
}

impl MessageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder that drops properties when `wanted` is false
    pub fn with_properties(wanted: bool) -> Self {
        Self {
            skip_properties: !wanted,
            ..Self::default()
        }
    }

    pub fn wants_properties(&self) -> bool {
        !self.skip_properties
    }

    /// Record the raw format string
    pub fn set_template(&mut self, template: &'static str) -> &mut Self {
        self.template = template;
        self
    }

    /// Render the message text
    ///
    /// # Panics
    ///
    /// Panics if a `Display` implementation among the arguments returns an
    /// error, exactly as `format!` does.
    pub fn render(&mut self, args: fmt::Arguments<'_>) -> &mut Self {
        self.text = fmt::format(args);
        self
    }

    /// Add a labeled argument for structured output
    ///
    /// Ignored when the builder was made without properties.
    pub fn push_property(&mut self, name: &'static str, value: String) -> &mut Self {
        if !self.skip_properties {
            self.properties.push(Property { name, value });
        }
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn into_parts(self) -> (&'static str, String, Vec<Property>) {
        (self.template, self.text, self.properties)
    }
}
