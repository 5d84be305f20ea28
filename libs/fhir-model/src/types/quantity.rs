//! Quantity and the structures built from it (Range, Ratio)

use serde::{Deserialize, Serialize};

use crate::code::Coded;
use crate::codes::QuantityComparator;
use crate::element::{Element, ElementData};
use crate::error::Result;
use crate::primitive::{Code, Decimal, FhirString, Uri};
use crate::types::Extension;
use crate::validation;
use crate::visitor::{accept_all, accept_opt, Visitable, Visitor};

/// A measured amount: a decimal value with a unit and an optional
/// comparator for inexact measurements.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quantity {
    #[serde(flatten)]
    pub element: ElementData,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Decimal>,

    /// How to understand the value when it is not exact (< | <= | >= | >).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparator: Option<Coded<QuantityComparator>>,

    /// Human-readable unit representation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<FhirString>,

    /// System that defines the coded unit form, e.g. UCUM.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<Uri>,

    /// Coded form of the unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<Code>,
}

/// A [`Quantity`] where the comparator is not used.
pub type SimpleQuantity = Quantity;

/// A length of time, expressed as a [`Quantity`] with a UCUM time unit.
pub type Duration = Quantity;

impl Quantity {
    pub fn builder() -> QuantityBuilder {
        QuantityBuilder::default()
    }

    pub fn to_builder(&self) -> QuantityBuilder {
        QuantityBuilder {
            element: self.element.clone(),
            value: self.value.clone(),
            comparator: self.comparator.clone(),
            unit: self.unit.clone(),
            system: self.system.clone(),
            code: self.code.clone(),
        }
    }
}

impl Element for Quantity {
    fn id(&self) -> Option<&str> {
        self.element.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.element.extension
    }

    fn type_name(&self) -> &'static str {
        "Quantity"
    }

    fn has_children(&self) -> bool {
        !self.element.extension.is_empty()
            || self.value.is_some()
            || self.comparator.is_some()
            || self.unit.is_some()
            || self.system.is_some()
            || self.code.is_some()
    }
}

impl Visitable for Quantity {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                if let Some(id) = &self.element.id {
                    visitor.visit_string("id", id);
                }
                accept_all(&self.element.extension, "extension", visitor);
                accept_opt(&self.value, "value", visitor);
                accept_opt(&self.comparator, "comparator", visitor);
                accept_opt(&self.unit, "unit", visitor);
                accept_opt(&self.system, "system", visitor);
                accept_opt(&self.code, "code", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct QuantityBuilder {
    element: ElementData,
    value: Option<Decimal>,
    comparator: Option<Coded<QuantityComparator>>,
    unit: Option<FhirString>,
    system: Option<Uri>,
    code: Option<Code>,
}

impl QuantityBuilder {
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

    pub fn value(mut self, value: impl Into<Decimal>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn comparator(mut self, comparator: impl Into<Coded<QuantityComparator>>) -> Self {
        self.comparator = Some(comparator.into());
        self
    }

    pub fn unit(mut self, unit: impl Into<FhirString>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn system(mut self, system: impl Into<Uri>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn code(mut self, code: impl Into<Code>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn build(self) -> Result<Quantity> {
        let quantity = Quantity {
            element: self.element,
            value: self.value,
            comparator: self.comparator,
            unit: self.unit,
            system: self.system,
            code: self.code,
        };
        validation::check_element_strings(&quantity)?;
        validation::require_value_or_children(&quantity)?;
        Ok(quantity)
    }
}

/// A set of ordered quantities defined by a low and high limit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Range {
    #[serde(flatten)]
    pub element: ElementData,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<SimpleQuantity>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<SimpleQuantity>,
}

impl Range {
    pub fn builder() -> RangeBuilder {
        RangeBuilder::default()
    }

    pub fn to_builder(&self) -> RangeBuilder {
        RangeBuilder {
            element: self.element.clone(),
            low: self.low.clone(),
            high: self.high.clone(),
        }
    }
}

impl Element for Range {
    fn id(&self) -> Option<&str> {
        self.element.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.element.extension
    }

    fn type_name(&self) -> &'static str {
        "Range"
    }

    fn has_children(&self) -> bool {
        !self.element.extension.is_empty() || self.low.is_some() || self.high.is_some()
    }
}

impl Visitable for Range {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                if let Some(id) = &self.element.id {
                    visitor.visit_string("id", id);
                }
                accept_all(&self.element.extension, "extension", visitor);
                accept_opt(&self.low, "low", visitor);
                accept_opt(&self.high, "high", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RangeBuilder {
    element: ElementData,
    low: Option<SimpleQuantity>,
    high: Option<SimpleQuantity>,
}

impl RangeBuilder {
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

    pub fn low(mut self, low: SimpleQuantity) -> Self {
        self.low = Some(low);
        self
    }

    pub fn high(mut self, high: SimpleQuantity) -> Self {
        self.high = Some(high);
        self
    }

    pub fn build(self) -> Result<Range> {
        let range = Range {
            element: self.element,
            low: self.low,
            high: self.high,
        };
        validation::check_element_strings(&range)?;
        validation::require_value_or_children(&range)?;
        Ok(range)
    }
}

/// A relationship between two quantities expressed as a numerator and a
/// denominator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ratio {
    #[serde(flatten)]
    pub element: ElementData,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub numerator: Option<Quantity>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub denominator: Option<Quantity>,
}

impl Ratio {
    pub fn builder() -> RatioBuilder {
        RatioBuilder::default()
    }

    pub fn to_builder(&self) -> RatioBuilder {
        RatioBuilder {
            element: self.element.clone(),
            numerator: self.numerator.clone(),
            denominator: self.denominator.clone(),
        }
    }
}

impl Element for Ratio {
    fn id(&self) -> Option<&str> {
        self.element.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.element.extension
    }

    fn type_name(&self) -> &'static str {
        "Ratio"
    }

    fn has_children(&self) -> bool {
        !self.element.extension.is_empty() || self.numerator.is_some() || self.denominator.is_some()
    }
}

impl Visitable for Ratio {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        if visitor.pre_visit(self) {
            visitor.visit_start(name, index, self);
            if visitor.visit(name, index, self) {
                if let Some(id) = &self.element.id {
                    visitor.visit_string("id", id);
                }
                accept_all(&self.element.extension, "extension", visitor);
                accept_opt(&self.numerator, "numerator", visitor);
                accept_opt(&self.denominator, "denominator", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RatioBuilder {
    element: ElementData,
    numerator: Option<Quantity>,
    denominator: Option<Quantity>,
}

impl RatioBuilder {
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

    pub fn numerator(mut self, numerator: Quantity) -> Self {
        self.numerator = Some(numerator);
        self
    }

    pub fn denominator(mut self, denominator: Quantity) -> Self {
        self.denominator = Some(denominator);
        self
    }

    pub fn build(self) -> Result<Ratio> {
        let ratio = Ratio {
            element: self.element,
            numerator: self.numerator,
            denominator: self.denominator,
        };
        validation::check_element_strings(&ratio)?;
        validation::require_value_or_children(&ratio)?;
        Ok(ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn mg(value: i64) -> Quantity {
        Quantity::builder()
            .value(Decimal::from(value))
            .unit("mg")
            .system("http://unitsofmeasure.org")
            .code("mg")
            .build()
            .unwrap()
    }

    #[test]
    fn quantity_with_comparator() {
        let q = Quantity::builder()
            .value(Decimal::new(54, 1))
            .comparator(Coded::<QuantityComparator>::of("<").unwrap())
            .unit("mmol/L")
            .build()
            .unwrap();
        assert_eq!(q.comparator.unwrap().value, Some(QuantityComparator::LessThan));
    }

    #[test]
    fn range_and_ratio_build_from_quantities() {
        let range = Range::builder().low(mg(1)).high(mg(4)).build().unwrap();
        assert_eq!(range.low.unwrap().value.unwrap().value, Some(Decimal::ONE));

        let ratio = Ratio::builder()
            .numerator(mg(250))
            .denominator(mg(5))
            .build()
            .unwrap();
        assert!(ratio.numerator.is_some());
        assert!(Ratio::builder().build().is_err());
    }
}
