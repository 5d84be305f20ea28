use serde::{Deserialize, Serialize};

use crate::element::{Element, ElementData};
use crate::error::Result;
use crate::types::DataValue;
use crate::validation;
use crate::visitor::{accept_all, Visitable, Visitor};

/// Additional content defined by an implementation, identified by the URL
/// of its definition.
///
/// `url` is mandatory; the value is optional because an extension may
/// instead carry nested extensions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extension {
    #[serde(flatten)]
    pub element: ElementData,

    /// Source of the definition for this extension.
    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<DataValue>,
}

impl Extension {
    pub fn builder() -> ExtensionBuilder {
        ExtensionBuilder::default()
    }

    pub fn to_builder(&self) -> ExtensionBuilder {
        ExtensionBuilder {
            element: self.element.clone(),
            url: Some(self.url.clone()),
            value: self.value.clone(),
        }
    }
}

impl Element for Extension {
    fn id(&self) -> Option<&str> {
        self.element.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.element.extension
    }

    fn type_name(&self) -> &'static str {
        "Extension"
    }

    fn has_children(&self) -> bool {
        !self.element.extension.is_empty() || self.value.is_some()
    }
}

impl Visitable for Extension {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                if let Some(id) = &self.element.id {
                    visitor.visit_string("id", id);
                }
                accept_all(&self.element.extension, "extension", visitor);
                visitor.visit_string("url", &self.url);
                if let Some(value) = &self.value {
                    value.accept("value", None, visitor);
                }
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExtensionBuilder {
    element: ElementData,
    url: Option<String>,
    value: Option<DataValue>,
}

impl ExtensionBuilder {
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

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn value(mut self, value: impl Into<DataValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn build(self) -> Result<Extension> {
        let extension = Extension {
            element: self.element,
            url: validation::require(self.url, "url")?,
            value: self.value,
        };
        validation::check_element_strings(&extension)?;
        Ok(extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::primitive::Boolean;

    #[test]
    fn url_is_mandatory() {
        let err = Extension::builder().build().unwrap_err();
        assert!(matches!(err, Error::MissingRequired("url")));
    }

    #[test]
    fn value_accepts_any_data_type() {
        let ext = Extension::builder()
            .url("http://example.org/fhir/StructureDefinition/confirmed")
            .value(Boolean::from(true))
            .build()
            .unwrap();
        assert_eq!(ext.value.as_ref().unwrap().declared_type(), "boolean");
    }

    #[test]
    fn nested_extensions_instead_of_a_value() {
        let inner = Extension::builder()
            .url("part")
            .value(Boolean::from(false))
            .build()
            .unwrap();
        let outer = Extension::builder()
            .url("http://example.org/composite")
            .extension(inner)
            .build()
            .unwrap();
        assert!(outer.value.is_none());
        assert_eq!(outer.extension().len(), 1);
    }
}
