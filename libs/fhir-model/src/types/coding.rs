//! Coding and CodeableConcept

use serde::{Deserialize, Serialize};

use crate::element::{Element, ElementData};
use crate::error::Result;
use crate::primitive::{Boolean, Code, FhirString, Uri};
use crate::types::Extension;
use crate::validation;
use crate::visitor::{accept_all, accept_opt, Visitable, Visitor};

/// A reference to a code defined by a terminology system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coding {
    #[serde(flatten)]
    pub element: ElementData,

    /// Identity of the terminology system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<Uri>,

    /// Version of the system, if relevant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<FhirString>,

    /// Symbol in syntax defined by the system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<Code>,

    /// Representation defined by the system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<FhirString>,

    /// If this coding was chosen directly by the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_selected: Option<Boolean>,
}

impl Coding {
    pub fn builder() -> CodingBuilder {
        CodingBuilder::default()
    }

    pub fn to_builder(&self) -> CodingBuilder {
        CodingBuilder {
            element: self.element.clone(),
            system: self.system.clone(),
            version: self.version.clone(),
            code: self.code.clone(),
            display: self.display.clone(),
            user_selected: self.user_selected.clone(),
        }
    }
}

impl Element for Coding {
    fn id(&self) -> Option<&str> {
        self.element.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.element.extension
    }

    fn type_name(&self) -> &'static str {
        "Coding"
    }

    fn has_children(&self) -> bool {
        !self.element.extension.is_empty()
            || self.system.is_some()
            || self.version.is_some()
            || self.code.is_some()
            || self.display.is_some()
            || self.user_selected.is_some()
    }
}

impl Visitable for Coding {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                if let Some(id) = &self.element.id {
                    visitor.visit_string("id", id);
                }
                accept_all(&self.element.extension, "extension", visitor);
                accept_opt(&self.system, "system", visitor);
                accept_opt(&self.version, "version", visitor);
                accept_opt(&self.code, "code", visitor);
                accept_opt(&self.display, "display", visitor);
                accept_opt(&self.user_selected, "userSelected", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CodingBuilder {
    element: ElementData,
    system: Option<Uri>,
    version: Option<FhirString>,
    code: Option<Code>,
    display: Option<FhirString>,
    user_selected: Option<Boolean>,
}

impl CodingBuilder {
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

    pub fn system(mut self, system: impl Into<Uri>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn version(mut self, version: impl Into<FhirString>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn code(mut self, code: impl Into<Code>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn display(mut self, display: impl Into<FhirString>) -> Self {
        self.display = Some(display.into());
        self
    }

    pub fn user_selected(mut self, user_selected: impl Into<Boolean>) -> Self {
        self.user_selected = Some(user_selected.into());
        self
    }

    pub fn build(self) -> Result<Coding> {
        let coding = Coding {
            element: self.element,
            system: self.system,
            version: self.version,
            code: self.code,
            display: self.display,
            user_selected: self.user_selected,
        };
        validation::check_element_strings(&coding)?;
        validation::require_value_or_children(&coding)?;
        Ok(coding)
    }
}

/// A concept that may be defined by one or more formal codings and/or
/// free text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeableConcept {
    #[serde(flatten)]
    pub element: ElementData,

    /// Codes defined by terminology systems.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub coding: Vec<Coding>,

    /// Plain text representation of the concept.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<FhirString>,
}

impl CodeableConcept {
    pub fn builder() -> CodeableConceptBuilder {
        CodeableConceptBuilder::default()
    }

    pub fn to_builder(&self) -> CodeableConceptBuilder {
        CodeableConceptBuilder {
            element: self.element.clone(),
            coding: self.coding.clone(),
            text: self.text.clone(),
        }
    }
}

impl Element for CodeableConcept {
    fn id(&self) -> Option<&str> {
        self.element.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.element.extension
    }

    fn type_name(&self) -> &'static str {
        "CodeableConcept"
    }

    fn has_children(&self) -> bool {
        !self.element.extension.is_empty() || !self.coding.is_empty() || self.text.is_some()
    }
}

impl Visitable for CodeableConcept {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                if let Some(id) = &self.element.id {
                    visitor.visit_string("id", id);
                }
                accept_all(&self.element.extension, "extension", visitor);
                accept_all(&self.coding, "coding", visitor);
                accept_opt(&self.text, "text", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CodeableConceptBuilder {
    element: ElementData,
    coding: Vec<Coding>,
    text: Option<FhirString>,
}

impl CodeableConceptBuilder {
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

    pub fn coding(mut self, coding: Coding) -> Self {
        self.coding.push(coding);
        self
    }

    pub fn set_coding(mut self, coding: Vec<Coding>) -> Self {
        self.coding = coding;
        self
    }

    pub fn text(mut self, text: impl Into<FhirString>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn build(self) -> Result<CodeableConcept> {
        let concept = CodeableConcept {
            element: self.element,
            coding: self.coding,
            text: self.text,
        };
        validation::check_element_strings(&concept)?;
        validation::require_value_or_children(&concept)?;
        Ok(concept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_coding_fails_ele_1() {
        assert!(Coding::builder().build().is_err());
        assert!(Coding::builder().code("active").build().is_ok());
    }

    #[test]
    fn codeable_concept_from_text_only() {
        let concept = CodeableConcept::builder().text("as needed").build().unwrap();
        assert!(concept.coding.is_empty());
        assert_eq!(concept.text.as_ref().unwrap().as_str(), Some("as needed"));
    }
}
