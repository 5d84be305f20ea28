use serde::{Deserialize, Serialize};

use crate::element::{Element, ElementData};
use crate::error::Result;
use crate::primitive::DateTime;
use crate::types::Extension;
use crate::validation;
use crate::visitor::{accept_all, accept_opt, Visitable, Visitor};

/// A time period defined by a start and end date/time.
///
/// A missing start means the period began before it was known; a missing
/// end means the period is ongoing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    #[serde(flatten)]
    pub element: ElementData,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime>,
}

impl Period {
    pub fn builder() -> PeriodBuilder {
        PeriodBuilder::default()
    }

    pub fn to_builder(&self) -> PeriodBuilder {
        PeriodBuilder {
            element: self.element.clone(),
            start: self.start.clone(),
            end: self.end.clone(),
        }
    }
}

impl Element for Period {
    fn id(&self) -> Option<&str> {
        self.element.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.element.extension
    }

    fn type_name(&self) -> &'static str {
        "Period"
    }

    fn has_children(&self) -> bool {
        !self.element.extension.is_empty() || self.start.is_some() || self.end.is_some()
    }
}

impl Visitable for Period {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                if let Some(id) = &self.element.id {
                    visitor.visit_string("id", id);
                }
                accept_all(&self.element.extension, "extension", visitor);
                accept_opt(&self.start, "start", visitor);
                accept_opt(&self.end, "end", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PeriodBuilder {
    element: ElementData,
    start: Option<DateTime>,
    end: Option<DateTime>,
}

impl PeriodBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.element.id = Some(id.into());
        self
    }

    pub fn extension(mut self, extension: Extension) -> Self {
        self.element.extension.push(extension);
        self
    }

    pub fn set_extension(mut self, extension: Vec<Extension>) -> Self {
        self.element.extension = extension;
        self
    }

    pub fn start(mut self, start: impl Into<DateTime>) -> Self {
        self.start = Some(start.into());
        self
    }

    pub fn end(mut self, end: impl Into<DateTime>) -> Self {
        self.end = Some(end.into());
        self
    }

    pub fn build(self) -> Result<Period> {
        let period = Period {
            element: self.element,
            start: self.start,
            end: self.end,
        };
        validation::check_element_strings(&period)?;
        validation::require_value_or_children(&period)?;
        Ok(period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_ended_period_is_valid() {
        let period = Period::builder().start("2024-01-01").build().unwrap();
        assert!(period.end.is_none());
        assert!(Period::builder().build().is_err());
    }
}
