use serde::{Deserialize, Serialize};

use crate::element::{Element, ElementData};
use crate::error::Result;
use crate::primitive::{Base64Binary, Code, DateTime, FhirString, UnsignedInt, Url};
use crate::types::Extension;
use crate::validation;
use crate::visitor::{accept_all, accept_opt, Visitable, Visitor};

/// Content defined elsewhere or carried inline as base64 data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    #[serde(flatten)]
    pub element: ElementData,

    /// Mime type of the content, with charset etc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<Code>,

    /// Human language of the content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Code>,

    /// Data inline, base64 encoded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Base64Binary>,

    /// Location where the data can be found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<Url>,

    /// Number of bytes of content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<UnsignedInt>,

    /// Hash of the data (sha-1, base64 encoded).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<Base64Binary>,

    /// Label to display in place of the data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<FhirString>,

    /// Date the attachment was first created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation: Option<DateTime>,
}

impl Attachment {
    pub fn builder() -> AttachmentBuilder {
        AttachmentBuilder::default()
    }

    pub fn to_builder(&self) -> AttachmentBuilder {
        AttachmentBuilder {
            element: self.element.clone(),
            content_type: self.content_type.clone(),
            language: self.language.clone(),
            data: self.data.clone(),
            url: self.url.clone(),
            size: self.size.clone(),
            hash: self.hash.clone(),
            title: self.title.clone(),
            creation: self.creation.clone(),
        }
    }
}

impl Element for Attachment {
    fn id(&self) -> Option<&str> {
        self.element.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.element.extension
    }

    fn type_name(&self) -> &'static str {
        "Attachment"
    }

    fn has_children(&self) -> bool {
        !self.element.extension.is_empty()
            || self.content_type.is_some()
            || self.language.is_some()
            || self.data.is_some()
            || self.url.is_some()
            || self.size.is_some()
            || self.hash.is_some()
            || self.title.is_some()
            || self.creation.is_some()
    }
}

impl Visitable for Attachment {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                if let Some(id) = &self.element.id {
                    visitor.visit_string("id", id);
                }
                accept_all(&self.element.extension, "extension", visitor);
                accept_opt(&self.content_type, "contentType", visitor);
                accept_opt(&self.language, "language", visitor);
                accept_opt(&self.data, "data", visitor);
                accept_opt(&self.url, "url", visitor);
                accept_opt(&self.size, "size", visitor);
                accept_opt(&self.hash, "hash", visitor);
                accept_opt(&self.title, "title", visitor);
                accept_opt(&self.creation, "creation", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AttachmentBuilder {
    element: ElementData,
    content_type: Option<Code>,
    language: Option<Code>,
    data: Option<Base64Binary>,
    url: Option<Url>,
    size: Option<UnsignedInt>,
    hash: Option<Base64Binary>,
    title: Option<FhirString>,
    creation: Option<DateTime>,
}

impl AttachmentBuilder {
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

    pub fn content_type(mut self, content_type: impl Into<Code>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn language(mut self, language: impl Into<Code>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn data(mut self, data: impl Into<Base64Binary>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn url(mut self, url: impl Into<Url>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn size(mut self, size: impl Into<UnsignedInt>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn hash(mut self, hash: impl Into<Base64Binary>) -> Self {
        self.hash = Some(hash.into());
        self
    }

    pub fn title(mut self, title: impl Into<FhirString>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn creation(mut self, creation: impl Into<DateTime>) -> Self {
        self.creation = Some(creation.into());
        self
    }

    pub fn build(self) -> Result<Attachment> {
        let attachment = Attachment {
            element: self.element,
            content_type: self.content_type,
            language: self.language,
            data: self.data,
            url: self.url,
            size: self.size,
            hash: self.hash,
            title: self.title,
            creation: self.creation,
        };
        validation::check_element_strings(&attachment)?;
        validation::require_value_or_children(&attachment)?;
        Ok(attachment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attachment_by_url_with_size() {
        let attachment = Attachment::builder()
            .content_type("application/pdf")
            .url("http://example.org/reports/1.pdf")
            .size(104857u32)
            .title("Discharge summary")
            .build()
            .unwrap();
        assert_eq!(attachment.size.unwrap().value, Some(104857));
        assert!(Attachment::builder().build().is_err());
    }
}
