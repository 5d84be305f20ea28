//! Dosage: how medication should be taken

use serde::{Deserialize, Serialize};

use crate::element::{Backbone, BackboneData, Element};
use crate::error::Result;
use crate::primitive::{Boolean, FhirString, Integer};
use crate::types::{CodeableConcept, Extension, Range, Ratio, SimpleQuantity, Timing};
use crate::validation;
use crate::visitor::{accept_all, accept_opt, Visitable, Visitor};

/// Whether the medication is only taken when needed, optionally limited
/// to a precondition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AsNeeded {
    Boolean(Boolean),
    CodeableConcept(CodeableConcept),
}

impl Element for AsNeeded {
    fn id(&self) -> Option<&str> {
        match self {
            AsNeeded::Boolean(inner) => inner.id(),
            AsNeeded::CodeableConcept(inner) => inner.id(),
        }
    }

    fn extension(&self) -> &[Extension] {
        match self {
            AsNeeded::Boolean(inner) => inner.extension(),
            AsNeeded::CodeableConcept(inner) => inner.extension(),
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            AsNeeded::Boolean(inner) => inner.type_name(),
            AsNeeded::CodeableConcept(inner) => inner.type_name(),
        }
    }

    fn has_value(&self) -> bool {
        match self {
            AsNeeded::Boolean(inner) => inner.has_value(),
            AsNeeded::CodeableConcept(inner) => inner.has_value(),
        }
    }

    fn has_children(&self) -> bool {
        match self {
            AsNeeded::Boolean(inner) => inner.has_children(),
            AsNeeded::CodeableConcept(inner) => inner.has_children(),
        }
    }
}

impl Visitable for AsNeeded {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        match self {
            AsNeeded::Boolean(inner) => inner.accept(name, index, visitor),
            AsNeeded::CodeableConcept(inner) => inner.accept(name, index, visitor),
        }
    }
}

impl From<Boolean> for AsNeeded {
    fn from(value: Boolean) -> Self {
        AsNeeded::Boolean(value)
    }
}

impl From<bool> for AsNeeded {
    fn from(value: bool) -> Self {
        AsNeeded::Boolean(Boolean::from(value))
    }
}

impl From<CodeableConcept> for AsNeeded {
    fn from(value: CodeableConcept) -> Self {
        AsNeeded::CodeableConcept(value)
    }
}

/// Amount of medication per dose.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dose {
    Range(Range),
    Quantity(SimpleQuantity),
}

impl Element for Dose {
    fn id(&self) -> Option<&str> {
        match self {
            Dose::Range(inner) => inner.id(),
            Dose::Quantity(inner) => inner.id(),
        }
    }

    fn extension(&self) -> &[Extension] {
        match self {
            Dose::Range(inner) => inner.extension(),
            Dose::Quantity(inner) => inner.extension(),
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            Dose::Range(inner) => inner.type_name(),
            Dose::Quantity(inner) => inner.type_name(),
        }
    }

    fn has_children(&self) -> bool {
        match self {
            Dose::Range(inner) => inner.has_children(),
            Dose::Quantity(inner) => inner.has_children(),
        }
    }
}

impl Visitable for Dose {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        match self {
            Dose::Range(inner) => inner.accept(name, index, visitor),
            Dose::Quantity(inner) => inner.accept(name, index, visitor),
        }
    }
}

impl From<Range> for Dose {
    fn from(value: Range) -> Self {
        Dose::Range(value)
    }
}

impl From<SimpleQuantity> for Dose {
    fn from(value: SimpleQuantity) -> Self {
        Dose::Quantity(value)
    }
}

/// Rate at which the medication is administered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rate {
    Ratio(Ratio),
    Range(Range),
    Quantity(SimpleQuantity),
}

impl Element for Rate {
    fn id(&self) -> Option<&str> {
        match self {
            Rate::Ratio(inner) => inner.id(),
            Rate::Range(inner) => inner.id(),
            Rate::Quantity(inner) => inner.id(),
        }
    }

    fn extension(&self) -> &[Extension] {
        match self {
            Rate::Ratio(inner) => inner.extension(),
            Rate::Range(inner) => inner.extension(),
            Rate::Quantity(inner) => inner.extension(),
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            Rate::Ratio(inner) => inner.type_name(),
            Rate::Range(inner) => inner.type_name(),
            Rate::Quantity(inner) => inner.type_name(),
        }
    }

    fn has_children(&self) -> bool {
        match self {
            Rate::Ratio(inner) => inner.has_children(),
            Rate::Range(inner) => inner.has_children(),
            Rate::Quantity(inner) => inner.has_children(),
        }
    }
}

impl Visitable for Rate {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        match self {
            Rate::Ratio(inner) => inner.accept(name, index, visitor),
            Rate::Range(inner) => inner.accept(name, index, visitor),
            Rate::Quantity(inner) => inner.accept(name, index, visitor),
        }
    }
}

impl From<Ratio> for Rate {
    fn from(value: Ratio) -> Self {
        Rate::Ratio(value)
    }
}

impl From<Range> for Rate {
    fn from(value: Range) -> Self {
        Rate::Range(value)
    }
}

impl From<SimpleQuantity> for Rate {
    fn from(value: SimpleQuantity) -> Self {
        Rate::Quantity(value)
    }
}

/// One dose/rate pairing within a [`Dosage`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoseAndRate {
    #[serde(flatten)]
    pub element: BackboneData,

    /// The kind of dose or rate specified (calculated | ordered).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<CodeableConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dose: Option<Dose>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<Rate>,
}

impl DoseAndRate {
    pub fn builder() -> DoseAndRateBuilder {
        DoseAndRateBuilder::default()
    }

    pub fn to_builder(&self) -> DoseAndRateBuilder {
        DoseAndRateBuilder {
            element: self.element.clone(),
            r#type: self.r#type.clone(),
            dose: self.dose.clone(),
            rate: self.rate.clone(),
        }
    }
}

impl Element for DoseAndRate {
    fn id(&self) -> Option<&str> {
        self.element.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.element.extension
    }

    fn type_name(&self) -> &'static str {
        "Dosage.DoseAndRate"
    }

    fn has_children(&self) -> bool {
        !self.element.extension.is_empty()
            || !self.element.modifier_extension.is_empty()
            || self.r#type.is_some()
            || self.dose.is_some()
            || self.rate.is_some()
    }
}

impl Backbone for DoseAndRate {
    fn modifier_extension(&self) -> &[Extension] {
        &self.element.modifier_extension
    }
}

impl Visitable for DoseAndRate {
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
                accept_opt(&self.r#type, "type", visitor);
                accept_opt(&self.dose, "dose", visitor);
                accept_opt(&self.rate, "rate", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DoseAndRateBuilder {
    element: BackboneData,
    r#type: Option<CodeableConcept>,
    dose: Option<Dose>,
    rate: Option<Rate>,
}

impl DoseAndRateBuilder {
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

    pub fn r#type(mut self, r#type: CodeableConcept) -> Self {
        self.r#type = Some(r#type);
        self
    }

    pub fn dose(mut self, dose: impl Into<Dose>) -> Self {
        self.dose = Some(dose.into());
        self
    }

    pub fn rate(mut self, rate: impl Into<Rate>) -> Self {
        self.rate = Some(rate.into());
        self
    }

    pub fn build(self) -> Result<DoseAndRate> {
        let dose_and_rate = DoseAndRate {
            element: self.element,
            r#type: self.r#type,
            dose: self.dose,
            rate: self.rate,
        };
        validation::check_element_strings(&dose_and_rate)?;
        validation::require_value_or_children(&dose_and_rate)?;
        Ok(dose_and_rate)
    }
}

/// How medication should be taken: free text and/or the structured
/// timing, site, route, and dose details.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dosage {
    #[serde(flatten)]
    pub backbone: BackboneData,

    /// Order of this dosage instruction among its siblings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<Integer>,

    /// Free text dosage instructions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<FhirString>,

    /// Supplemental instructions, e.g. "with meals".
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_instruction: Vec<CodeableConcept>,

    /// Patient-oriented instructions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_instruction: Option<FhirString>,

    /// When the medication should be administered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing: Option<Timing>,

    /// Take as needed, possibly for a coded precondition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_needed: Option<AsNeeded>,

    /// Body site to administer to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<CodeableConcept>,

    /// How the drug should enter the body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<CodeableConcept>,

    /// Technique for administering the medication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<CodeableConcept>,

    /// Amount of medication administered.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dose_and_rate: Vec<DoseAndRate>,

    /// Upper limit on medication per unit of time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_dose_per_period: Option<Ratio>,

    /// Upper limit on medication per administration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_dose_per_administration: Option<SimpleQuantity>,

    /// Upper limit on medication per lifetime of the patient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_dose_per_lifetime: Option<SimpleQuantity>,
}

impl Dosage {
    pub fn builder() -> DosageBuilder {
        DosageBuilder::default()
    }

    pub fn to_builder(&self) -> DosageBuilder {
        DosageBuilder {
            backbone: self.backbone.clone(),
            sequence: self.sequence.clone(),
            text: self.text.clone(),
            additional_instruction: self.additional_instruction.clone(),
            patient_instruction: self.patient_instruction.clone(),
            timing: self.timing.clone(),
            as_needed: self.as_needed.clone(),
            site: self.site.clone(),
            route: self.route.clone(),
            method: self.method.clone(),
            dose_and_rate: self.dose_and_rate.clone(),
            max_dose_per_period: self.max_dose_per_period.clone(),
            max_dose_per_administration: self.max_dose_per_administration.clone(),
            max_dose_per_lifetime: self.max_dose_per_lifetime.clone(),
        }
    }
}

impl Element for Dosage {
    fn id(&self) -> Option<&str> {
        self.backbone.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.backbone.extension
    }

    fn type_name(&self) -> &'static str {
        "Dosage"
    }

    fn has_children(&self) -> bool {
        !self.backbone.extension.is_empty()
            || !self.backbone.modifier_extension.is_empty()
            || self.sequence.is_some()
            || self.text.is_some()
            || !self.additional_instruction.is_empty()
            || self.patient_instruction.is_some()
            || self.timing.is_some()
            || self.as_needed.is_some()
            || self.site.is_some()
            || self.route.is_some()
            || self.method.is_some()
            || !self.dose_and_rate.is_empty()
            || self.max_dose_per_period.is_some()
            || self.max_dose_per_administration.is_some()
            || self.max_dose_per_lifetime.is_some()
    }
}

impl Backbone for Dosage {
    fn modifier_extension(&self) -> &[Extension] {
        &self.backbone.modifier_extension
    }
}

impl Visitable for Dosage {
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
                accept_opt(&self.sequence, "sequence", visitor);
                accept_opt(&self.text, "text", visitor);
                accept_all(&self.additional_instruction, "additionalInstruction", visitor);
                accept_opt(&self.patient_instruction, "patientInstruction", visitor);
                accept_opt(&self.timing, "timing", visitor);
                accept_opt(&self.as_needed, "asNeeded", visitor);
                accept_opt(&self.site, "site", visitor);
                accept_opt(&self.route, "route", visitor);
                accept_opt(&self.method, "method", visitor);
                accept_all(&self.dose_and_rate, "doseAndRate", visitor);
                accept_opt(&self.max_dose_per_period, "maxDosePerPeriod", visitor);
                accept_opt(
                    &self.max_dose_per_administration,
                    "maxDosePerAdministration",
                    visitor,
                );
                accept_opt(&self.max_dose_per_lifetime, "maxDosePerLifetime", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DosageBuilder {
    backbone: BackboneData,
    sequence: Option<Integer>,
    text: Option<FhirString>,
    additional_instruction: Vec<CodeableConcept>,
    patient_instruction: Option<FhirString>,
    timing: Option<Timing>,
    as_needed: Option<AsNeeded>,
    site: Option<CodeableConcept>,
    route: Option<CodeableConcept>,
    method: Option<CodeableConcept>,
    dose_and_rate: Vec<DoseAndRate>,
    max_dose_per_period: Option<Ratio>,
    max_dose_per_administration: Option<SimpleQuantity>,
    max_dose_per_lifetime: Option<SimpleQuantity>,
}

impl DosageBuilder {
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

    pub fn sequence(mut self, sequence: impl Into<Integer>) -> Self {
        self.sequence = Some(sequence.into());
        self
    }

    pub fn text(mut self, text: impl Into<FhirString>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn additional_instruction(mut self, additional_instruction: CodeableConcept) -> Self {
        self.additional_instruction.push(additional_instruction);
        self
    }

    pub fn set_additional_instruction(
        mut self,
        additional_instruction: Vec<CodeableConcept>,
    ) -> Self {
        self.additional_instruction = additional_instruction;
        self
    }

    pub fn patient_instruction(mut self, patient_instruction: impl Into<FhirString>) -> Self {
        self.patient_instruction = Some(patient_instruction.into());
        self
    }

    pub fn timing(mut self, timing: Timing) -> Self {
        self.timing = Some(timing);
        self
    }

    pub fn as_needed(mut self, as_needed: impl Into<AsNeeded>) -> Self {
        self.as_needed = Some(as_needed.into());
        self
    }

    pub fn site(mut self, site: CodeableConcept) -> Self {
        self.site = Some(site);
        self
    }

    pub fn route(mut self, route: CodeableConcept) -> Self {
        self.route = Some(route);
        self
    }

    pub fn method(mut self, method: CodeableConcept) -> Self {
        self.method = Some(method);
        self
    }

    pub fn dose_and_rate(mut self, dose_and_rate: DoseAndRate) -> Self {
        self.dose_and_rate.push(dose_and_rate);
        self
    }

    pub fn set_dose_and_rate(mut self, dose_and_rate: Vec<DoseAndRate>) -> Self {
        self.dose_and_rate = dose_and_rate;
        self
    }

    pub fn max_dose_per_period(mut self, max_dose_per_period: Ratio) -> Self {
        self.max_dose_per_period = Some(max_dose_per_period);
        self
    }

    pub fn max_dose_per_administration(
        mut self,
        max_dose_per_administration: SimpleQuantity,
    ) -> Self {
        self.max_dose_per_administration = Some(max_dose_per_administration);
        self
    }

    pub fn max_dose_per_lifetime(mut self, max_dose_per_lifetime: SimpleQuantity) -> Self {
        self.max_dose_per_lifetime = Some(max_dose_per_lifetime);
        self
    }

    pub fn build(self) -> Result<Dosage> {
        let dosage = Dosage {
            backbone: self.backbone,
            sequence: self.sequence,
            text: self.text,
            additional_instruction: self.additional_instruction,
            patient_instruction: self.patient_instruction,
            timing: self.timing,
            as_needed: self.as_needed,
            site: self.site,
            route: self.route,
            method: self.method,
            dose_and_rate: self.dose_and_rate,
            max_dose_per_period: self.max_dose_per_period,
            max_dose_per_administration: self.max_dose_per_administration,
            max_dose_per_lifetime: self.max_dose_per_lifetime,
        };
        validation::check_element_strings(&dosage)?;
        validation::require_value_or_children(&dosage)?;
        Ok(dosage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Quantity;
    use rust_decimal::Decimal;

    fn tablet(value: i64) -> SimpleQuantity {
        Quantity::builder()
            .value(Decimal::from(value))
            .unit("TAB")
            .system("http://terminology.hl7.org/CodeSystem/v3-orderableDrugForm")
            .code("TAB")
            .build()
            .unwrap()
    }

    #[test]
    fn one_tablet_as_needed() {
        let dosage = Dosage::builder()
            .sequence(1)
            .text("1 tablet as needed")
            .as_needed(true)
            .dose_and_rate(DoseAndRate::builder().dose(tablet(1)).build().unwrap())
            .build()
            .unwrap();

        match dosage.as_needed.as_ref().unwrap() {
            AsNeeded::Boolean(b) => assert_eq!(b.value, Some(true)),
            other => panic!("unexpected asNeeded: {other:?}"),
        }
        match &dosage.dose_and_rate[0].dose {
            Some(Dose::Quantity(q)) => assert_eq!(q.value.as_ref().unwrap().value, Some(Decimal::ONE)),
            other => panic!("unexpected dose: {other:?}"),
        }
    }

    #[test]
    fn dose_range_variant_surfaces_its_type() {
        let range = Range::builder().low(tablet(1)).high(tablet(2)).build().unwrap();
        let dose: Dose = range.into();
        assert_eq!(dose.type_name(), "Range");
    }

    #[test]
    fn empty_dosage_and_dose_and_rate_fail_ele_1() {
        assert!(Dosage::builder().build().is_err());
        assert!(DoseAndRate::builder().build().is_err());
    }
}
