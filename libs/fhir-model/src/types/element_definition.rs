//! ElementDefinition: the definition of an element in a profile

use serde::{Deserialize, Serialize};

use crate::code::Coded;
use crate::codes::{
    AggregationMode, BindingStrength, ConstraintSeverity, DiscriminatorType,
    PropertyRepresentation, ReferenceVersionRules, SlicingRules,
};
use crate::element::{Backbone, BackboneData, Element};
use crate::error::Result;
use crate::primitive::{
    Boolean, Canonical, Code, Date, DateTime, Decimal, FhirString, Id, Instant, Integer, Markdown,
    PositiveInt, Time, UnsignedInt, Uri,
};
use crate::types::{Coding, DataValue, Extension, Quantity};
use crate::validation;
use crate::visitor::{accept_all, accept_opt, Visitable, Visitor};

/// The bound for `minValue[x]`/`maxValue[x]`: an ordered primitive or a
/// quantity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MinMaxValue {
    #[serde(rename = "date")]
    Date(Date),
    #[serde(rename = "dateTime")]
    DateTime(DateTime),
    #[serde(rename = "instant")]
    Instant(Instant),
    #[serde(rename = "time")]
    Time(Time),
    #[serde(rename = "decimal")]
    Decimal(Decimal),
    #[serde(rename = "integer")]
    Integer(Integer),
    #[serde(rename = "positiveInt")]
    PositiveInt(PositiveInt),
    #[serde(rename = "unsignedInt")]
    UnsignedInt(UnsignedInt),
    Quantity(Quantity),
}

macro_rules! min_max_delegate {
    ($self:expr, $inner:ident => $body:expr) => {
        match $self {
            MinMaxValue::Date($inner) => $body,
            MinMaxValue::DateTime($inner) => $body,
            MinMaxValue::Instant($inner) => $body,
            MinMaxValue::Time($inner) => $body,
            MinMaxValue::Decimal($inner) => $body,
            MinMaxValue::Integer($inner) => $body,
            MinMaxValue::PositiveInt($inner) => $body,
            MinMaxValue::UnsignedInt($inner) => $body,
            MinMaxValue::Quantity($inner) => $body,
        }
    };
}

impl Element for MinMaxValue {
    fn id(&self) -> Option<&str> {
        min_max_delegate!(self, inner => inner.id())
    }

    fn extension(&self) -> &[Extension] {
        min_max_delegate!(self, inner => inner.extension())
    }

    fn type_name(&self) -> &'static str {
        min_max_delegate!(self, inner => inner.type_name())
    }

    fn has_value(&self) -> bool {
        min_max_delegate!(self, inner => inner.has_value())
    }

    fn has_children(&self) -> bool {
        min_max_delegate!(self, inner => inner.has_children())
    }
}

impl Visitable for MinMaxValue {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        min_max_delegate!(self, inner => inner.accept(name, index, visitor))
    }
}

impl From<Decimal> for MinMaxValue {
    fn from(value: Decimal) -> Self {
        MinMaxValue::Decimal(value)
    }
}

impl From<Integer> for MinMaxValue {
    fn from(value: Integer) -> Self {
        MinMaxValue::Integer(value)
    }
}

impl From<Quantity> for MinMaxValue {
    fn from(value: Quantity) -> Self {
        MinMaxValue::Quantity(value)
    }
}

/// How a single slice is identified among its siblings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discriminator {
    #[serde(flatten)]
    pub element: BackboneData,

    /// How the slices are differentiated.
    pub r#type: Coded<DiscriminatorType>,

    /// Path to the element value used for discrimination.
    pub path: FhirString,
}

impl Discriminator {
    pub fn builder() -> DiscriminatorBuilder {
        DiscriminatorBuilder::default()
    }

    pub fn to_builder(&self) -> DiscriminatorBuilder {
        DiscriminatorBuilder {
            element: self.element.clone(),
            r#type: Some(self.r#type.clone()),
            path: Some(self.path.clone()),
        }
    }
}

impl Element for Discriminator {
    fn id(&self) -> Option<&str> {
        self.element.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.element.extension
    }

    fn type_name(&self) -> &'static str {
        "ElementDefinition.Slicing.Discriminator"
    }

    fn has_children(&self) -> bool {
        true
    }
}

impl Backbone for Discriminator {
    fn modifier_extension(&self) -> &[Extension] {
        &self.element.modifier_extension
    }
}

impl Visitable for Discriminator {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                if let Some(id) = &self.element.id {
                    visitor.visit_string("id", id);
                }
                accept_all(&self.element.extension, "extension", visitor);
                accept_all(
                    &self.element.modifier_extension,
                    "modifierExtension",
                    visitor,
                );
                self.r#type.accept("type", None, visitor);
                self.path.accept("path", None, visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DiscriminatorBuilder {
    element: BackboneData,
    r#type: Option<Coded<DiscriminatorType>>,
    path: Option<FhirString>,
}

impl DiscriminatorBuilder {
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

    pub fn modifier_extension(mut self, modifier_extension: Extension) -> Self {
        self.element.modifier_extension.push(modifier_extension);
        self
    }

    pub fn set_modifier_extension(mut self, modifier_extension: Vec<Extension>) -> Self {
        self.element.modifier_extension = modifier_extension;
        self
    }

    pub fn r#type(mut self, r#type: impl Into<Coded<DiscriminatorType>>) -> Self {
        self.r#type = Some(r#type.into());
        self
    }

    pub fn path(mut self, path: impl Into<FhirString>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn build(self) -> Result<Discriminator> {
        let discriminator = Discriminator {
            element: self.element,
            r#type: validation::require(self.r#type, "type")?,
            path: validation::require(self.path, "path")?,
        };
        validation::check_element_strings(&discriminator)?;
        Ok(discriminator)
    }
}

/// Indicates that the element is sliced into a set of alternative
/// definitions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slicing {
    #[serde(flatten)]
    pub element: BackboneData,

    /// Element values that are used to distinguish the slices.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub discriminator: Vec<Discriminator>,

    /// Text description of how slicing works, if no discriminators.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<FhirString>,

    /// Whether elements must appear in the same order as the slices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordered: Option<Boolean>,

    /// Whether additional slices are allowed (closed | open | openAtEnd).
    pub rules: Coded<SlicingRules>,
}

impl Slicing {
    pub fn builder() -> SlicingBuilder {
        SlicingBuilder::default()
    }

    pub fn to_builder(&self) -> SlicingBuilder {
        SlicingBuilder {
            element: self.element.clone(),
            discriminator: self.discriminator.clone(),
            description: self.description.clone(),
            ordered: self.ordered.clone(),
            rules: Some(self.rules.clone()),
        }
    }
}

impl Element for Slicing {
    fn id(&self) -> Option<&str> {
        self.element.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.element.extension
    }

    fn type_name(&self) -> &'static str {
        "ElementDefinition.Slicing"
    }

    fn has_children(&self) -> bool {
        true
    }
}

impl Backbone for Slicing {
    fn modifier_extension(&self) -> &[Extension] {
        &self.element.modifier_extension
    }
}

impl Visitable for Slicing {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                if let Some(id) = &self.element.id {
                    visitor.visit_string("id", id);
                }
                accept_all(&self.element.extension, "extension", visitor);
                accept_all(
                    &self.element.modifier_extension,
                    "modifierExtension",
                    visitor,
                );
                accept_all(&self.discriminator, "discriminator", visitor);
                accept_opt(&self.description, "description", visitor);
                accept_opt(&self.ordered, "ordered", visitor);
                self.rules.accept("rules", None, visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SlicingBuilder {
    element: BackboneData,
    discriminator: Vec<Discriminator>,
    description: Option<FhirString>,
    ordered: Option<Boolean>,
    rules: Option<Coded<SlicingRules>>,
}

impl SlicingBuilder {
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

    pub fn modifier_extension(mut self, modifier_extension: Extension) -> Self {
        self.element.modifier_extension.push(modifier_extension);
        self
    }

    pub fn set_modifier_extension(mut self, modifier_extension: Vec<Extension>) -> Self {
        self.element.modifier_extension = modifier_extension;
        self
    }

    pub fn discriminator(mut self, discriminator: Discriminator) -> Self {
        self.discriminator.push(discriminator);
        self
    }

    pub fn set_discriminator(mut self, discriminator: Vec<Discriminator>) -> Self {
        self.discriminator = discriminator;
        self
    }

    pub fn description(mut self, description: impl Into<FhirString>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn ordered(mut self, ordered: impl Into<Boolean>) -> Self {
        self.ordered = Some(ordered.into());
        self
    }

    pub fn rules(mut self, rules: impl Into<Coded<SlicingRules>>) -> Self {
        self.rules = Some(rules.into());
        self
    }

    pub fn build(self) -> Result<Slicing> {
        let slicing = Slicing {
            element: self.element,
            discriminator: self.discriminator,
            description: self.description,
            ordered: self.ordered,
            rules: validation::require(self.rules, "rules")?,
        };
        validation::check_element_strings(&slicing)?;
        Ok(slicing)
    }
}

/// Information about the base definition of the element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Base {
    #[serde(flatten)]
    pub element: BackboneData,

    /// Path that identifies the base element.
    pub path: FhirString,

    /// Minimum cardinality of the base element.
    pub min: UnsignedInt,

    /// Maximum cardinality of the base element ("1", "*", ...).
    pub max: FhirString,
}

impl Base {
    pub fn builder() -> BaseBuilder {
        BaseBuilder::default()
    }

    pub fn to_builder(&self) -> BaseBuilder {
        BaseBuilder {
            element: self.element.clone(),
            path: Some(self.path.clone()),
            min: Some(self.min.clone()),
            max: Some(self.max.clone()),
        }
    }
}

impl Element for Base {
    fn id(&self) -> Option<&str> {
        self.element.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.element.extension
    }

    fn type_name(&self) -> &'static str {
        "ElementDefinition.Base"
    }

    fn has_children(&self) -> bool {
        true
    }
}

impl Backbone for Base {
    fn modifier_extension(&self) -> &[Extension] {
        &self.element.modifier_extension
    }
}

impl Visitable for Base {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                if let Some(id) = &self.element.id {
                    visitor.visit_string("id", id);
                }
                accept_all(&self.element.extension, "extension", visitor);
                accept_all(
                    &self.element.modifier_extension,
                    "modifierExtension",
                    visitor,
                );
                self.path.accept("path", None, visitor);
                self.min.accept("min", None, visitor);
                self.max.accept("max", None, visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BaseBuilder {
    element: BackboneData,
    path: Option<FhirString>,
    min: Option<UnsignedInt>,
    max: Option<FhirString>,
}

impl BaseBuilder {
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

    pub fn modifier_extension(mut self, modifier_extension: Extension) -> Self {
        self.element.modifier_extension.push(modifier_extension);
        self
    }

    pub fn set_modifier_extension(mut self, modifier_extension: Vec<Extension>) -> Self {
        self.element.modifier_extension = modifier_extension;
        self
    }

    pub fn path(mut self, path: impl Into<FhirString>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn min(mut self, min: impl Into<UnsignedInt>) -> Self {
        self.min = Some(min.into());
        self
    }

    pub fn max(mut self, max: impl Into<FhirString>) -> Self {
        self.max = Some(max.into());
        self
    }

    pub fn build(self) -> Result<Base> {
        let base = Base {
            element: self.element,
            path: validation::require(self.path, "path")?,
            min: validation::require(self.min, "min")?,
            max: validation::require(self.max, "max")?,
        };
        validation::check_element_strings(&base)?;
        Ok(base)
    }
}

/// One data type or resource the element value may take.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Type {
    #[serde(flatten)]
    pub element: BackboneData,

    /// Data type or resource name, as a URI.
    pub code: Uri,

    /// Profiles the value must conform to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub profile: Vec<Canonical>,

    /// Profiles the target of a reference must conform to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub target_profile: Vec<Canonical>,

    /// How references can be aggregated.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aggregation: Vec<Coded<AggregationMode>>,

    /// Version-specificity rules for references.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub versioning: Option<Coded<ReferenceVersionRules>>,
}

impl Type {
    pub fn builder() -> TypeBuilder {
        TypeBuilder::default()
    }

    pub fn to_builder(&self) -> TypeBuilder {
        TypeBuilder {
            element: self.element.clone(),
            code: Some(self.code.clone()),
            profile: self.profile.clone(),
            target_profile: self.target_profile.clone(),
            aggregation: self.aggregation.clone(),
            versioning: self.versioning.clone(),
        }
    }
}

impl Element for Type {
    fn id(&self) -> Option<&str> {
        self.element.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.element.extension
    }

    fn type_name(&self) -> &'static str {
        "ElementDefinition.Type"
    }

    fn has_children(&self) -> bool {
        true
    }
}

impl Backbone for Type {
    fn modifier_extension(&self) -> &[Extension] {
        &self.element.modifier_extension
    }
}

impl Visitable for Type {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                if let Some(id) = &self.element.id {
                    visitor.visit_string("id", id);
                }
                accept_all(&self.element.extension, "extension", visitor);
                accept_all(
                    &self.element.modifier_extension,
                    "modifierExtension",
                    visitor,
                );
                self.code.accept("code", None, visitor);
                accept_all(&self.profile, "profile", visitor);
                accept_all(&self.target_profile, "targetProfile", visitor);
                accept_all(&self.aggregation, "aggregation", visitor);
                accept_opt(&self.versioning, "versioning", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TypeBuilder {
    element: BackboneData,
    code: Option<Uri>,
    profile: Vec<Canonical>,
    target_profile: Vec<Canonical>,
    aggregation: Vec<Coded<AggregationMode>>,
    versioning: Option<Coded<ReferenceVersionRules>>,
}

impl TypeBuilder {
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

    pub fn modifier_extension(mut self, modifier_extension: Extension) -> Self {
        self.element.modifier_extension.push(modifier_extension);
        self
    }

    pub fn set_modifier_extension(mut self, modifier_extension: Vec<Extension>) -> Self {
        self.element.modifier_extension = modifier_extension;
        self
    }

    pub fn code(mut self, code: impl Into<Uri>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn profile(mut self, profile: impl Into<Canonical>) -> Self {
        self.profile.push(profile.into());
        self
    }

    pub fn set_profile(mut self, profile: Vec<Canonical>) -> Self {
        self.profile = profile;
        self
    }

    pub fn target_profile(mut self, target_profile: impl Into<Canonical>) -> Self {
        self.target_profile.push(target_profile.into());
        self
    }

    pub fn set_target_profile(mut self, target_profile: Vec<Canonical>) -> Self {
        self.target_profile = target_profile;
        self
    }

    pub fn aggregation(mut self, aggregation: impl Into<Coded<AggregationMode>>) -> Self {
        self.aggregation.push(aggregation.into());
        self
    }

    pub fn set_aggregation(mut self, aggregation: Vec<Coded<AggregationMode>>) -> Self {
        self.aggregation = aggregation;
        self
    }

    pub fn versioning(mut self, versioning: impl Into<Coded<ReferenceVersionRules>>) -> Self {
        self.versioning = Some(versioning.into());
        self
    }

    pub fn build(self) -> Result<Type> {
        let r#type = Type {
            element: self.element,
            code: validation::require(self.code, "code")?,
            profile: self.profile,
            target_profile: self.target_profile,
            aggregation: self.aggregation,
            versioning: self.versioning,
        };
        validation::check_element_strings(&r#type)?;
        Ok(r#type)
    }
}

/// An example value for the element, with a label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Example {
    #[serde(flatten)]
    pub element: BackboneData,

    /// Describes the purpose of this example.
    pub label: FhirString,

    /// The example value, of any data type.
    pub value: DataValue,
}

impl Example {
    pub fn builder() -> ExampleBuilder {
        ExampleBuilder::default()
    }

    pub fn to_builder(&self) -> ExampleBuilder {
        ExampleBuilder {
            element: self.element.clone(),
            label: Some(self.label.clone()),
            value: Some(self.value.clone()),
        }
    }
}

impl Element for Example {
    fn id(&self) -> Option<&str> {
        self.element.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.element.extension
    }

    fn type_name(&self) -> &'static str {
        "ElementDefinition.Example"
    }

    fn has_children(&self) -> bool {
        true
    }
}

impl Backbone for Example {
    fn modifier_extension(&self) -> &[Extension] {
        &self.element.modifier_extension
    }
}

impl Visitable for Example {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                if let Some(id) = &self.element.id {
                    visitor.visit_string("id", id);
                }
                accept_all(&self.element.extension, "extension", visitor);
                accept_all(
                    &self.element.modifier_extension,
                    "modifierExtension",
                    visitor,
                );
                self.label.accept("label", None, visitor);
                self.value.accept("value", None, visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExampleBuilder {
    element: BackboneData,
    label: Option<FhirString>,
    value: Option<DataValue>,
}

impl ExampleBuilder {
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

    pub fn modifier_extension(mut self, modifier_extension: Extension) -> Self {
        self.element.modifier_extension.push(modifier_extension);
        self
    }

    pub fn set_modifier_extension(mut self, modifier_extension: Vec<Extension>) -> Self {
        self.element.modifier_extension = modifier_extension;
        self
    }

    pub fn label(mut self, label: impl Into<FhirString>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn value(mut self, value: impl Into<DataValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn build(self) -> Result<Example> {
        let example = Example {
            element: self.element,
            label: validation::require(self.label, "label")?,
            value: validation::require(self.value, "value")?,
        };
        validation::check_element_strings(&example)?;
        Ok(example)
    }
}

/// A formal constraint on the element, with a computable expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraint {
    #[serde(flatten)]
    pub element: BackboneData,

    /// Unique identifier of the constraint within its context.
    pub key: Id,

    /// Why this constraint is necessary or appropriate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<FhirString>,

    /// error | warning.
    pub severity: Coded<ConstraintSeverity>,

    /// Human-readable description of the constraint.
    pub human: FhirString,

    /// FHIRPath expression of the constraint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<FhirString>,

    /// XPath expression of the constraint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xpath: Option<FhirString>,

    /// Structure definition the constraint comes from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Canonical>,
}

impl Constraint {
    pub fn builder() -> ConstraintBuilder {
        ConstraintBuilder::default()
    }

    pub fn to_builder(&self) -> ConstraintBuilder {
        ConstraintBuilder {
            element: self.element.clone(),
            key: Some(self.key.clone()),
            requirements: self.requirements.clone(),
            severity: Some(self.severity.clone()),
            human: Some(self.human.clone()),
            expression: self.expression.clone(),
            xpath: self.xpath.clone(),
            source: self.source.clone(),
        }
    }
}

impl Element for Constraint {
    fn id(&self) -> Option<&str> {
        self.element.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.element.extension
    }

    fn type_name(&self) -> &'static str {
        "ElementDefinition.Constraint"
    }

    fn has_children(&self) -> bool {
        true
    }
}

impl Backbone for Constraint {
    fn modifier_extension(&self) -> &[Extension] {
        &self.element.modifier_extension
    }
}

impl Visitable for Constraint {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                if let Some(id) = &self.element.id {
                    visitor.visit_string("id", id);
                }
                accept_all(&self.element.extension, "extension", visitor);
                accept_all(
                    &self.element.modifier_extension,
                    "modifierExtension",
                    visitor,
                );
                self.key.accept("key", None, visitor);
                accept_opt(&self.requirements, "requirements", visitor);
                self.severity.accept("severity", None, visitor);
                self.human.accept("human", None, visitor);
                accept_opt(&self.expression, "expression", visitor);
                accept_opt(&self.xpath, "xpath", visitor);
                accept_opt(&self.source, "source", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConstraintBuilder {
    element: BackboneData,
    key: Option<Id>,
    requirements: Option<FhirString>,
    severity: Option<Coded<ConstraintSeverity>>,
    human: Option<FhirString>,
    expression: Option<FhirString>,
    xpath: Option<FhirString>,
    source: Option<Canonical>,
}

impl ConstraintBuilder {
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

    pub fn modifier_extension(mut self, modifier_extension: Extension) -> Self {
        self.element.modifier_extension.push(modifier_extension);
        self
    }

    pub fn set_modifier_extension(mut self, modifier_extension: Vec<Extension>) -> Self {
        self.element.modifier_extension = modifier_extension;
        self
    }

    pub fn key(mut self, key: impl Into<Id>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn requirements(mut self, requirements: impl Into<FhirString>) -> Self {
        self.requirements = Some(requirements.into());
        self
    }

    pub fn severity(mut self, severity: impl Into<Coded<ConstraintSeverity>>) -> Self {
        self.severity = Some(severity.into());
        self
    }

    pub fn human(mut self, human: impl Into<FhirString>) -> Self {
        self.human = Some(human.into());
        self
    }

    pub fn expression(mut self, expression: impl Into<FhirString>) -> Self {
        self.expression = Some(expression.into());
        self
    }

    pub fn xpath(mut self, xpath: impl Into<FhirString>) -> Self {
        self.xpath = Some(xpath.into());
        self
    }

    pub fn source(mut self, source: impl Into<Canonical>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn build(self) -> Result<Constraint> {
        let constraint = Constraint {
            element: self.element,
            key: validation::require(self.key, "key")?,
            requirements: self.requirements,
            severity: validation::require(self.severity, "severity")?,
            human: validation::require(self.human, "human")?,
            expression: self.expression,
            xpath: self.xpath,
            source: self.source,
        };
        validation::check_element_strings(&constraint)?;
        Ok(constraint)
    }
}

/// Binding of the element value to a value set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Binding {
    #[serde(flatten)]
    pub element: BackboneData,

    /// required | extensible | preferred | example.
    pub strength: Coded<BindingStrength>,

    /// Human explanation of the value set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<FhirString>,

    /// Source of the value set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_set: Option<Canonical>,
}

impl Binding {
    pub fn builder() -> BindingBuilder {
        BindingBuilder::default()
    }

    pub fn to_builder(&self) -> BindingBuilder {
        BindingBuilder {
            element: self.element.clone(),
            strength: Some(self.strength.clone()),
            description: self.description.clone(),
            value_set: self.value_set.clone(),
        }
    }
}

impl Element for Binding {
    fn id(&self) -> Option<&str> {
        self.element.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.element.extension
    }

    fn type_name(&self) -> &'static str {
        "ElementDefinition.Binding"
    }

    fn has_children(&self) -> bool {
        true
    }
}

impl Backbone for Binding {
    fn modifier_extension(&self) -> &[Extension] {
        &self.element.modifier_extension
    }
}

impl Visitable for Binding {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                if let Some(id) = &self.element.id {
                    visitor.visit_string("id", id);
                }
                accept_all(&self.element.extension, "extension", visitor);
                accept_all(
                    &self.element.modifier_extension,
                    "modifierExtension",
                    visitor,
                );
                self.strength.accept("strength", None, visitor);
                accept_opt(&self.description, "description", visitor);
                accept_opt(&self.value_set, "valueSet", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BindingBuilder {
    element: BackboneData,
    strength: Option<Coded<BindingStrength>>,
    description: Option<FhirString>,
    value_set: Option<Canonical>,
}

impl BindingBuilder {
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

    pub fn modifier_extension(mut self, modifier_extension: Extension) -> Self {
        self.element.modifier_extension.push(modifier_extension);
        self
    }

    pub fn set_modifier_extension(mut self, modifier_extension: Vec<Extension>) -> Self {
        self.element.modifier_extension = modifier_extension;
        self
    }

    pub fn strength(mut self, strength: impl Into<Coded<BindingStrength>>) -> Self {
        self.strength = Some(strength.into());
        self
    }

    pub fn description(mut self, description: impl Into<FhirString>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn value_set(mut self, value_set: impl Into<Canonical>) -> Self {
        self.value_set = Some(value_set.into());
        self
    }

    pub fn build(self) -> Result<Binding> {
        let binding = Binding {
            element: self.element,
            strength: validation::require(self.strength, "strength")?,
            description: self.description,
            value_set: self.value_set,
        };
        validation::check_element_strings(&binding)?;
        Ok(binding)
    }
}

/// A mapping of the element to an equivalent concept in another
/// specification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mapping {
    #[serde(flatten)]
    pub element: BackboneData,

    /// Reference to the mapping declaration.
    pub identity: Id,

    /// Computable language of the mapping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Code>,

    /// Details of the mapping.
    pub map: FhirString,

    /// Comments about the mapping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<FhirString>,
}

impl Mapping {
    pub fn builder() -> MappingBuilder {
        MappingBuilder::default()
    }

    pub fn to_builder(&self) -> MappingBuilder {
        MappingBuilder {
            element: self.element.clone(),
            identity: Some(self.identity.clone()),
            language: self.language.clone(),
            map: Some(self.map.clone()),
            comment: self.comment.clone(),
        }
    }
}

impl Element for Mapping {
    fn id(&self) -> Option<&str> {
        self.element.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.element.extension
    }

    fn type_name(&self) -> &'static str {
        "ElementDefinition.Mapping"
    }

    fn has_children(&self) -> bool {
        true
    }
}

impl Backbone for Mapping {
    fn modifier_extension(&self) -> &[Extension] {
        &self.element.modifier_extension
    }
}

impl Visitable for Mapping {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                if let Some(id) = &self.element.id {
                    visitor.visit_string("id", id);
                }
                accept_all(&self.element.extension, "extension", visitor);
                accept_all(
                    &self.element.modifier_extension,
                    "modifierExtension",
                    visitor,
                );
                self.identity.accept("identity", None, visitor);
                accept_opt(&self.language, "language", visitor);
                self.map.accept("map", None, visitor);
                accept_opt(&self.comment, "comment", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MappingBuilder {
    element: BackboneData,
    identity: Option<Id>,
    language: Option<Code>,
    map: Option<FhirString>,
    comment: Option<FhirString>,
}

impl MappingBuilder {
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

    pub fn modifier_extension(mut self, modifier_extension: Extension) -> Self {
        self.element.modifier_extension.push(modifier_extension);
        self
    }

    pub fn set_modifier_extension(mut self, modifier_extension: Vec<Extension>) -> Self {
        self.element.modifier_extension = modifier_extension;
        self
    }

    pub fn identity(mut self, identity: impl Into<Id>) -> Self {
        self.identity = Some(identity.into());
        self
    }

    pub fn language(mut self, language: impl Into<Code>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn map(mut self, map: impl Into<FhirString>) -> Self {
        self.map = Some(map.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<FhirString>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn build(self) -> Result<Mapping> {
        let mapping = Mapping {
            element: self.element,
            identity: validation::require(self.identity, "identity")?,
            language: self.language,
            map: validation::require(self.map, "map")?,
            comment: self.comment,
        };
        validation::check_element_strings(&mapping)?;
        Ok(mapping)
    }
}

/// The definition of one element in a resource or extension, as used in
/// profiles and structure definitions.
///
/// Only `path` is mandatory; everything else refines the base definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementDefinition {
    #[serde(flatten)]
    pub backbone: BackboneData,

    /// Path of the element in the hierarchy of elements.
    pub path: FhirString,

    /// Codes that define how this element is represented in instances.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub representation: Vec<Coded<PropertyRepresentation>>,

    /// Name for this particular element (in a set of slices).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slice_name: Option<FhirString>,

    /// Whether the slice name constrains an inherited slice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slice_is_constraining: Option<Boolean>,

    /// Name for the element to display with or prompt for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<FhirString>,

    /// Corresponding codes in terminologies.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub code: Vec<Coding>,

    /// This element is sliced; slices follow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slicing: Option<Slicing>,

    /// Concise definition for space-constrained presentation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short: Option<FhirString>,

    /// Full formal definition as narrative text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<Markdown>,

    /// Comments about the use of this element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<Markdown>,

    /// Why this resource has been created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Markdown>,

    /// Other names for the element.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alias: Vec<FhirString>,

    /// Minimum cardinality.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<UnsignedInt>,

    /// Maximum cardinality ("1", "*", ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<FhirString>,

    /// Base definition information for tools.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<Base>,

    /// Reference to the definition of the content for the element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_reference: Option<Uri>,

    /// Data types allowed for the value of this element.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub r#type: Vec<Type>,

    /// Value to use when the element is missing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<DataValue>,

    /// Implicit meaning when the element is missing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meaning_when_missing: Option<Markdown>,

    /// What the order of the elements means.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_meaning: Option<FhirString>,

    /// Value must be exactly this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed: Option<DataValue>,

    /// Value must have at least these property values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<DataValue>,

    /// Example values.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub example: Vec<Example>,

    /// Minimum allowed value for ordered types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<MinMaxValue>,

    /// Maximum allowed value for ordered types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<MinMaxValue>,

    /// Maximum length for string values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<Integer>,

    /// References to invariants about presence.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub condition: Vec<Id>,

    /// Conditions that must evaluate to true.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraint: Vec<Constraint>,

    /// Whether the element must be supported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub must_support: Option<Boolean>,

    /// Whether this element modifies the meaning of its container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_modifier: Option<Boolean>,

    /// Reason the element is a modifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_modifier_reason: Option<FhirString>,

    /// Whether the element is included in summaries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_summary: Option<Boolean>,

    /// Value set binding for coded elements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binding: Option<Binding>,

    /// Mappings to other specifications.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mapping: Vec<Mapping>,
}

impl ElementDefinition {
    pub fn builder() -> ElementDefinitionBuilder {
        ElementDefinitionBuilder::default()
    }

    pub fn to_builder(&self) -> ElementDefinitionBuilder {
        ElementDefinitionBuilder {
            backbone: self.backbone.clone(),
            path: Some(self.path.clone()),
            representation: self.representation.clone(),
            slice_name: self.slice_name.clone(),
            slice_is_constraining: self.slice_is_constraining.clone(),
            label: self.label.clone(),
            code: self.code.clone(),
            slicing: self.slicing.clone(),
            short: self.short.clone(),
            definition: self.definition.clone(),
            comment: self.comment.clone(),
            requirements: self.requirements.clone(),
            alias: self.alias.clone(),
            min: self.min.clone(),
            max: self.max.clone(),
            base: self.base.clone(),
            content_reference: self.content_reference.clone(),
            r#type: self.r#type.clone(),
            default_value: self.default_value.clone(),
            meaning_when_missing: self.meaning_when_missing.clone(),
            order_meaning: self.order_meaning.clone(),
            fixed: self.fixed.clone(),
            pattern: self.pattern.clone(),
            example: self.example.clone(),
            min_value: self.min_value.clone(),
            max_value: self.max_value.clone(),
            max_length: self.max_length.clone(),
            condition: self.condition.clone(),
            constraint: self.constraint.clone(),
            must_support: self.must_support.clone(),
            is_modifier: self.is_modifier.clone(),
            is_modifier_reason: self.is_modifier_reason.clone(),
            is_summary: self.is_summary.clone(),
            binding: self.binding.clone(),
            mapping: self.mapping.clone(),
        }
    }
}

impl Element for ElementDefinition {
    fn id(&self) -> Option<&str> {
        self.backbone.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.backbone.extension
    }

    fn type_name(&self) -> &'static str {
        "ElementDefinition"
    }

    fn has_children(&self) -> bool {
        true
    }
}

impl Backbone for ElementDefinition {
    fn modifier_extension(&self) -> &[Extension] {
        &self.backbone.modifier_extension
    }
}

impl Visitable for ElementDefinition {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                if let Some(id) = &self.backbone.id {
                    visitor.visit_string("id", id);
                }
                accept_all(&self.backbone.extension, "extension", visitor);
                accept_all(
                    &self.backbone.modifier_extension,
                    "modifierExtension",
                    visitor,
                );
                self.path.accept("path", None, visitor);
                accept_all(&self.representation, "representation", visitor);
                accept_opt(&self.slice_name, "sliceName", visitor);
                accept_opt(&self.slice_is_constraining, "sliceIsConstraining", visitor);
                accept_opt(&self.label, "label", visitor);
                accept_all(&self.code, "code", visitor);
                accept_opt(&self.slicing, "slicing", visitor);
                accept_opt(&self.short, "short", visitor);
                accept_opt(&self.definition, "definition", visitor);
                accept_opt(&self.comment, "comment", visitor);
                accept_opt(&self.requirements, "requirements", visitor);
                accept_all(&self.alias, "alias", visitor);
                accept_opt(&self.min, "min", visitor);
                accept_opt(&self.max, "max", visitor);
                accept_opt(&self.base, "base", visitor);
                accept_opt(&self.content_reference, "contentReference", visitor);
                accept_all(&self.r#type, "type", visitor);
                accept_opt(&self.default_value, "defaultValue", visitor);
                accept_opt(&self.meaning_when_missing, "meaningWhenMissing", visitor);
                accept_opt(&self.order_meaning, "orderMeaning", visitor);
                accept_opt(&self.fixed, "fixed", visitor);
                accept_opt(&self.pattern, "pattern", visitor);
                accept_all(&self.example, "example", visitor);
                accept_opt(&self.min_value, "minValue", visitor);
                accept_opt(&self.max_value, "maxValue", visitor);
                accept_opt(&self.max_length, "maxLength", visitor);
                accept_all(&self.condition, "condition", visitor);
                accept_all(&self.constraint, "constraint", visitor);
                accept_opt(&self.must_support, "mustSupport", visitor);
                accept_opt(&self.is_modifier, "isModifier", visitor);
                accept_opt(&self.is_modifier_reason, "isModifierReason", visitor);
                accept_opt(&self.is_summary, "isSummary", visitor);
                accept_opt(&self.binding, "binding", visitor);
                accept_all(&self.mapping, "mapping", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ElementDefinitionBuilder {
    backbone: BackboneData,
    path: Option<FhirString>,
    representation: Vec<Coded<PropertyRepresentation>>,
    slice_name: Option<FhirString>,
    slice_is_constraining: Option<Boolean>,
    label: Option<FhirString>,
    code: Vec<Coding>,
    slicing: Option<Slicing>,
    short: Option<FhirString>,
    definition: Option<Markdown>,
    comment: Option<Markdown>,
    requirements: Option<Markdown>,
    alias: Vec<FhirString>,
    min: Option<UnsignedInt>,
    max: Option<FhirString>,
    base: Option<Base>,
    content_reference: Option<Uri>,
    r#type: Vec<Type>,
    default_value: Option<DataValue>,
    meaning_when_missing: Option<Markdown>,
    order_meaning: Option<FhirString>,
    fixed: Option<DataValue>,
    pattern: Option<DataValue>,
    example: Vec<Example>,
    min_value: Option<MinMaxValue>,
    max_value: Option<MinMaxValue>,
    max_length: Option<Integer>,
    condition: Vec<Id>,
    constraint: Vec<Constraint>,
    must_support: Option<Boolean>,
    is_modifier: Option<Boolean>,
    is_modifier_reason: Option<FhirString>,
    is_summary: Option<Boolean>,
    binding: Option<Binding>,
    mapping: Vec<Mapping>,
}

impl ElementDefinitionBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.backbone.id = Some(id.into());
        self
    }

    pub fn extension(mut self, extension: Extension) -> Self {
        self.backbone.extension.push(extension);
        self
    }

    pub fn set_extension(mut self, extension: Vec<Extension>) -> Self {
        self.backbone.extension = extension;
        self
    }

    pub fn modifier_extension(mut self, modifier_extension: Extension) -> Self {
        self.backbone.modifier_extension.push(modifier_extension);
        self
    }

    pub fn set_modifier_extension(mut self, modifier_extension: Vec<Extension>) -> Self {
        self.backbone.modifier_extension = modifier_extension;
        self
    }

    pub fn path(mut self, path: impl Into<FhirString>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn representation(
        mut self,
        representation: impl Into<Coded<PropertyRepresentation>>,
    ) -> Self {
        self.representation.push(representation.into());
        self
    }

    pub fn slice_name(mut self, slice_name: impl Into<FhirString>) -> Self {
        self.slice_name = Some(slice_name.into());
        self
    }

    pub fn slice_is_constraining(mut self, slice_is_constraining: impl Into<Boolean>) -> Self {
        self.slice_is_constraining = Some(slice_is_constraining.into());
        self
    }

    pub fn label(mut self, label: impl Into<FhirString>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn code(mut self, code: Coding) -> Self {
        self.code.push(code);
        self
    }

    pub fn set_code(mut self, code: Vec<Coding>) -> Self {
        self.code = code;
        self
    }

    pub fn slicing(mut self, slicing: Slicing) -> Self {
        self.slicing = Some(slicing);
        self
    }

    pub fn short(mut self, short: impl Into<FhirString>) -> Self {
        self.short = Some(short.into());
        self
    }

    pub fn definition(mut self, definition: impl Into<Markdown>) -> Self {
        self.definition = Some(definition.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<Markdown>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn requirements(mut self, requirements: impl Into<Markdown>) -> Self {
        self.requirements = Some(requirements.into());
        self
    }

    pub fn alias(mut self, alias: impl Into<FhirString>) -> Self {
        self.alias.push(alias.into());
        self
    }

    pub fn set_alias(mut self, alias: Vec<FhirString>) -> Self {
        self.alias = alias;
        self
    }

    pub fn min(mut self, min: impl Into<UnsignedInt>) -> Self {
        self.min = Some(min.into());
        self
    }

    pub fn max(mut self, max: impl Into<FhirString>) -> Self {
        self.max = Some(max.into());
        self
    }

    pub fn base(mut self, base: Base) -> Self {
        self.base = Some(base);
        self
    }

    pub fn content_reference(mut self, content_reference: impl Into<Uri>) -> Self {
        self.content_reference = Some(content_reference.into());
        self
    }

    pub fn r#type(mut self, r#type: Type) -> Self {
        self.r#type.push(r#type);
        self
    }

    pub fn set_type(mut self, r#type: Vec<Type>) -> Self {
        self.r#type = r#type;
        self
    }

    pub fn default_value(mut self, default_value: impl Into<DataValue>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    pub fn meaning_when_missing(mut self, meaning_when_missing: impl Into<Markdown>) -> Self {
        self.meaning_when_missing = Some(meaning_when_missing.into());
        self
    }

    pub fn order_meaning(mut self, order_meaning: impl Into<FhirString>) -> Self {
        self.order_meaning = Some(order_meaning.into());
        self
    }

    pub fn fixed(mut self, fixed: impl Into<DataValue>) -> Self {
        self.fixed = Some(fixed.into());
        self
    }

    pub fn pattern(mut self, pattern: impl Into<DataValue>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn example(mut self, example: Example) -> Self {
        self.example.push(example);
        self
    }

    pub fn set_example(mut self, example: Vec<Example>) -> Self {
        self.example = example;
        self
    }

    pub fn min_value(mut self, min_value: impl Into<MinMaxValue>) -> Self {
        self.min_value = Some(min_value.into());
        self
    }

    pub fn max_value(mut self, max_value: impl Into<MinMaxValue>) -> Self {
        self.max_value = Some(max_value.into());
        self
    }

    pub fn max_length(mut self, max_length: impl Into<Integer>) -> Self {
        self.max_length = Some(max_length.into());
        self
    }

    pub fn condition(mut self, condition: impl Into<Id>) -> Self {
        self.condition.push(condition.into());
        self
    }

    pub fn set_condition(mut self, condition: Vec<Id>) -> Self {
        self.condition = condition;
        self
    }

    pub fn constraint(mut self, constraint: Constraint) -> Self {
        self.constraint.push(constraint);
        self
    }

    pub fn set_constraint(mut self, constraint: Vec<Constraint>) -> Self {
        self.constraint = constraint;
        self
    }

    pub fn must_support(mut self, must_support: impl Into<Boolean>) -> Self {
        self.must_support = Some(must_support.into());
        self
    }

    pub fn is_modifier(mut self, is_modifier: impl Into<Boolean>) -> Self {
        self.is_modifier = Some(is_modifier.into());
        self
    }

    pub fn is_modifier_reason(mut self, is_modifier_reason: impl Into<FhirString>) -> Self {
        self.is_modifier_reason = Some(is_modifier_reason.into());
        self
    }

    pub fn is_summary(mut self, is_summary: impl Into<Boolean>) -> Self {
        self.is_summary = Some(is_summary.into());
        self
    }

    pub fn binding(mut self, binding: Binding) -> Self {
        self.binding = Some(binding);
        self
    }

    pub fn mapping(mut self, mapping: Mapping) -> Self {
        self.mapping.push(mapping);
        self
    }

    pub fn set_mapping(mut self, mapping: Vec<Mapping>) -> Self {
        self.mapping = mapping;
        self
    }

    pub fn build(self) -> Result<ElementDefinition> {
        let definition = ElementDefinition {
            backbone: self.backbone,
            path: validation::require(self.path, "path")?,
            representation: self.representation,
            slice_name: self.slice_name,
            slice_is_constraining: self.slice_is_constraining,
            label: self.label,
            code: self.code,
            slicing: self.slicing,
            short: self.short,
            definition: self.definition,
            comment: self.comment,
            requirements: self.requirements,
            alias: self.alias,
            min: self.min,
            max: self.max,
            base: self.base,
            content_reference: self.content_reference,
            r#type: self.r#type,
            default_value: self.default_value,
            meaning_when_missing: self.meaning_when_missing,
            order_meaning: self.order_meaning,
            fixed: self.fixed,
            pattern: self.pattern,
            example: self.example,
            min_value: self.min_value,
            max_value: self.max_value,
            max_length: self.max_length,
            condition: self.condition,
            constraint: self.constraint,
            must_support: self.must_support,
            is_modifier: self.is_modifier,
            is_modifier_reason: self.is_modifier_reason,
            is_summary: self.is_summary,
            binding: self.binding,
            mapping: self.mapping,
        };
        validation::check_element_strings(&definition)?;
        Ok(definition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::primitive::FhirString;

    #[test]
    fn path_is_the_only_required_field() {
        let err = ElementDefinition::builder().build().unwrap_err();
        assert!(matches!(err, Error::MissingRequired("path")));

        let ed = ElementDefinition::builder()
            .path("Patient.name")
            .build()
            .unwrap();
        assert_eq!(ed.path.as_str(), Some("Patient.name"));
    }

    #[test]
    fn nested_components_enforce_their_own_requireds() {
        assert!(matches!(
            Base::builder().path("Patient.name").min(0u32).build(),
            Err(Error::MissingRequired("max"))
        ));
        assert!(matches!(
            Type::builder().build(),
            Err(Error::MissingRequired("code"))
        ));
        assert!(matches!(
            Example::builder().label("general").build(),
            Err(Error::MissingRequired("value"))
        ));
        assert!(matches!(
            Constraint::builder()
                .key("ele-1")
                .human("All FHIR elements must have a @value or children")
                .build(),
            Err(Error::MissingRequired("severity"))
        ));
        assert!(matches!(
            Binding::builder().build(),
            Err(Error::MissingRequired("strength"))
        ));
        assert!(matches!(
            Mapping::builder().identity("rim").build(),
            Err(Error::MissingRequired("map"))
        ));
        assert!(matches!(
            Slicing::builder().build(),
            Err(Error::MissingRequired("rules"))
        ));
        assert!(matches!(
            Discriminator::builder().path("url").build(),
            Err(Error::MissingRequired("type"))
        ));
    }

    #[test]
    fn nested_components_carry_modifier_extensions() {
        let flag = Extension::builder()
            .url("http://example.org/fhir/StructureDefinition/legacy-rule")
            .value(Boolean::from(true))
            .build()
            .unwrap();

        let constraint = Constraint::builder()
            .key("pat-1")
            .severity(ConstraintSeverity::Warning)
            .human("SHALL at least contain a contact's details or a reference")
            .modifier_extension(flag.clone())
            .build()
            .unwrap();
        assert_eq!(constraint.modifier_extension().len(), 1);

        let cleared = constraint
            .to_builder()
            .set_modifier_extension(Vec::new())
            .build()
            .unwrap();
        assert!(cleared.modifier_extension().is_empty());

        let base = Base::builder()
            .path("Patient.name")
            .min(0u32)
            .max("*")
            .modifier_extension(flag)
            .build()
            .unwrap();
        assert_eq!(base.modifier_extension().len(), 1);
    }

    #[test]
    fn fully_specified_element() {
        let ed = ElementDefinition::builder()
            .path("Patient.identifier")
            .slicing(
                Slicing::builder()
                    .discriminator(
                        Discriminator::builder()
                            .r#type(DiscriminatorType::Value)
                            .path("system")
                            .build()
                            .unwrap(),
                    )
                    .rules(SlicingRules::Open)
                    .build()
                    .unwrap(),
            )
            .short("An identifier for this patient")
            .min(0u32)
            .max("*")
            .base(
                Base::builder()
                    .path("Patient.identifier")
                    .min(0u32)
                    .max("*")
                    .build()
                    .unwrap(),
            )
            .r#type(Type::builder().code("Identifier").build().unwrap())
            .constraint(
                Constraint::builder()
                    .key("ele-1")
                    .severity(ConstraintSeverity::Error)
                    .human("All FHIR elements must have a @value or children")
                    .expression("hasValue() or (children().count() > id.count())")
                    .build()
                    .unwrap(),
            )
            .binding(
                Binding::builder()
                    .strength(BindingStrength::Example)
                    .value_set("http://hl7.org/fhir/ValueSet/identifier-use")
                    .build()
                    .unwrap(),
            )
            .mapping(
                Mapping::builder()
                    .identity("rim")
                    .map(FhirString::from(".id"))
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();

        assert_eq!(ed.r#type[0].code.as_str(), Some("Identifier"));
        assert_eq!(
            ed.slicing.as_ref().unwrap().rules.code_str(),
            Some("open")
        );
        assert_eq!(ed.constraint[0].severity.code_str(), Some("error"));
    }
}
