//! Timing: an event schedule

use serde::{Deserialize, Serialize};

use crate::code::Coded;
use crate::codes::{DayOfWeek, EventTiming, UnitsOfTime};
use crate::element::{Backbone, BackboneData, Element};
use crate::error::Result;
use crate::primitive::{DateTime, Decimal, PositiveInt, Time, UnsignedInt};
use crate::types::{CodeableConcept, Duration, Extension, Period, Range};
use crate::validation;
use crate::visitor::{accept_all, accept_opt, Visitable, Visitor};

/// A timing schedule that specifies an event that may occur multiple
/// times: an optional list of concrete event times, a repeat structure,
/// and/or a code naming a common pattern (BID, QD, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timing {
    #[serde(flatten)]
    pub backbone: BackboneData,

    /// When the event occurs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub event: Vec<DateTime>,

    /// When the event is to occur, structurally.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat: Option<Repeat>,

    /// Code for the timing schedule, e.g. from v3-GTSAbbreviation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,
}

/// Outer limit for a [`Repeat`]: either a per-occurrence duration, a
/// range, or the overall period the schedule applies to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bounds {
    Duration(Duration),
    Range(Range),
    Period(Period),
}

impl Element for Bounds {
    fn id(&self) -> Option<&str> {
        match self {
            Bounds::Duration(inner) => inner.id(),
            Bounds::Range(inner) => inner.id(),
            Bounds::Period(inner) => inner.id(),
        }
    }

    fn extension(&self) -> &[Extension] {
        match self {
            Bounds::Duration(inner) => inner.extension(),
            Bounds::Range(inner) => inner.extension(),
            Bounds::Period(inner) => inner.extension(),
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            Bounds::Duration(inner) => inner.type_name(),
            Bounds::Range(inner) => inner.type_name(),
            Bounds::Period(inner) => inner.type_name(),
        }
    }

    fn has_children(&self) -> bool {
        match self {
            Bounds::Duration(inner) => inner.has_children(),
            Bounds::Range(inner) => inner.has_children(),
            Bounds::Period(inner) => inner.has_children(),
        }
    }
}

impl Visitable for Bounds {
    fn accept(&self, name: &str, index: Option<usize>, visitor: &mut dyn Visitor) {
        match self {
            Bounds::Duration(inner) => inner.accept(name, index, visitor),
            Bounds::Range(inner) => inner.accept(name, index, visitor),
            Bounds::Period(inner) => inner.accept(name, index, visitor),
        }
    }
}

impl From<Duration> for Bounds {
    fn from(value: Duration) -> Self {
        Bounds::Duration(value)
    }
}

impl From<Range> for Bounds {
    fn from(value: Range) -> Self {
        Bounds::Range(value)
    }
}

impl From<Period> for Bounds {
    fn from(value: Period) -> Self {
        Bounds::Period(value)
    }
}

/// The structural repetition rules of a [`Timing`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repeat {
    #[serde(flatten)]
    pub backbone: BackboneData,

    /// Length/range of lengths, or start and/or end limits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Bounds>,

    /// Number of times to repeat.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<PositiveInt>,

    /// Maximum number of times to repeat.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count_max: Option<PositiveInt>,

    /// How long each occurrence lasts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_max: Option<Decimal>,

    /// Unit of time for duration (s | min | h | d | wk | mo | a).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_unit: Option<Coded<UnitsOfTime>>,

    /// Events per period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<PositiveInt>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_max: Option<PositiveInt>,

    /// Duration over which the frequency applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_max: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_unit: Option<Coded<UnitsOfTime>>,

    /// Days of the week on which the action occurs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub day_of_week: Vec<Coded<DayOfWeek>>,

    /// Times of day for the action.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub time_of_day: Vec<Time>,

    /// Real-world events the schedule is tied to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub when: Vec<Coded<EventTiming>>,

    /// Minutes from the named event, when `when` is present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<UnsignedInt>,
}

impl Timing {
    pub fn builder() -> TimingBuilder {
        TimingBuilder::default()
    }

    pub fn to_builder(&self) -> TimingBuilder {
        TimingBuilder {
            backbone: self.backbone.clone(),
            event: self.event.clone(),
            repeat: self.repeat.clone(),
            code: self.code.clone(),
        }
    }
}

impl Element for Timing {
    fn id(&self) -> Option<&str> {
        self.backbone.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.backbone.extension
    }

    fn type_name(&self) -> &'static str {
        "Timing"
    }

    fn has_children(&self) -> bool {
        !self.backbone.extension.is_empty()
            || !self.backbone.modifier_extension.is_empty()
            || !self.event.is_empty()
            || self.repeat.is_some()
            || self.code.is_some()
    }
}

impl Backbone for Timing {
    fn modifier_extension(&self) -> &[Extension] {
        &self.backbone.modifier_extension
    }
}

impl Visitable for Timing {
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
                accept_all(&self.event, "event", visitor);
                accept_opt(&self.repeat, "repeat", visitor);
                accept_opt(&self.code, "code", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TimingBuilder {
    backbone: BackboneData,
    event: Vec<DateTime>,
    repeat: Option<Repeat>,
    code: Option<CodeableConcept>,
}

impl TimingBuilder {
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

    pub fn event(mut self, event: impl Into<DateTime>) -> Self {
        self.event.push(event.into());
        self
    }

    pub fn set_event(mut self, event: Vec<DateTime>) -> Self {
        self.event = event;
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = Some(repeat);
        self
    }

    pub fn code(mut self, code: CodeableConcept) -> Self {
        self.code = Some(code);
        self
    }

    pub fn build(self) -> Result<Timing> {
        let timing = Timing {
            backbone: self.backbone,
            event: self.event,
            repeat: self.repeat,
            code: self.code,
        };
        validation::check_element_strings(&timing)?;
        validation::require_value_or_children(&timing)?;
        Ok(timing)
    }
}

impl Repeat {
    pub fn builder() -> RepeatBuilder {
        RepeatBuilder::default()
    }

    pub fn to_builder(&self) -> RepeatBuilder {
        RepeatBuilder {
            backbone: self.backbone.clone(),
            bounds: self.bounds.clone(),
            count: self.count.clone(),
            count_max: self.count_max.clone(),
            duration: self.duration.clone(),
            duration_max: self.duration_max.clone(),
            duration_unit: self.duration_unit.clone(),
            frequency: self.frequency.clone(),
            frequency_max: self.frequency_max.clone(),
            period: self.period.clone(),
            period_max: self.period_max.clone(),
            period_unit: self.period_unit.clone(),
            day_of_week: self.day_of_week.clone(),
            time_of_day: self.time_of_day.clone(),
            when: self.when.clone(),
            offset: self.offset.clone(),
        }
    }
}

impl Element for Repeat {
    fn id(&self) -> Option<&str> {
        self.backbone.id.as_deref()
    }

    fn extension(&self) -> &[Extension] {
        &self.backbone.extension
    }

    fn type_name(&self) -> &'static str {
        "Timing.Repeat"
    }

    fn has_children(&self) -> bool {
        !self.backbone.extension.is_empty()
            || !self.backbone.modifier_extension.is_empty()
            || self.bounds.is_some()
            || self.count.is_some()
            || self.count_max.is_some()
            || self.duration.is_some()
            || self.duration_max.is_some()
            || self.duration_unit.is_some()
            || self.frequency.is_some()
            || self.frequency_max.is_some()
            || self.period.is_some()
            || self.period_max.is_some()
            || self.period_unit.is_some()
            || !self.day_of_week.is_empty()
            || !self.time_of_day.is_empty()
            || !self.when.is_empty()
            || self.offset.is_some()
    }
}

impl Backbone for Repeat {
    fn modifier_extension(&self) -> &[Extension] {
        &self.backbone.modifier_extension
    }
}

impl Visitable for Repeat {
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
                accept_opt(&self.bounds, "bounds", visitor);
                accept_opt(&self.count, "count", visitor);
                accept_opt(&self.count_max, "countMax", visitor);
                accept_opt(&self.duration, "duration", visitor);
                accept_opt(&self.duration_max, "durationMax", visitor);
                accept_opt(&self.duration_unit, "durationUnit", visitor);
                accept_opt(&self.frequency, "frequency", visitor);
                accept_opt(&self.frequency_max, "frequencyMax", visitor);
                accept_opt(&self.period, "period", visitor);
                accept_opt(&self.period_max, "periodMax", visitor);
                accept_opt(&self.period_unit, "periodUnit", visitor);
                accept_all(&self.day_of_week, "dayOfWeek", visitor);
                accept_all(&self.time_of_day, "timeOfDay", visitor);
                accept_all(&self.when, "when", visitor);
                accept_opt(&self.offset, "offset", visitor);
            }
            visitor.visit_end(name, index, self);
            visitor.post_visit(self);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RepeatBuilder {
    backbone: BackboneData,
    bounds: Option<Bounds>,
    count: Option<PositiveInt>,
    count_max: Option<PositiveInt>,
    duration: Option<Decimal>,
    duration_max: Option<Decimal>,
    duration_unit: Option<Coded<UnitsOfTime>>,
    frequency: Option<PositiveInt>,
    frequency_max: Option<PositiveInt>,
    period: Option<Decimal>,
    period_max: Option<Decimal>,
    period_unit: Option<Coded<UnitsOfTime>>,
    day_of_week: Vec<Coded<DayOfWeek>>,
    time_of_day: Vec<Time>,
    when: Vec<Coded<EventTiming>>,
    offset: Option<UnsignedInt>,
}

impl RepeatBuilder {
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

    pub fn bounds(mut self, bounds: impl Into<Bounds>) -> Self {
        self.bounds = Some(bounds.into());
        self
    }

    pub fn count(mut self, count: impl Into<PositiveInt>) -> Self {
        self.count = Some(count.into());
        self
    }

    pub fn count_max(mut self, count_max: impl Into<PositiveInt>) -> Self {
        self.count_max = Some(count_max.into());
        self
    }

    pub fn duration(mut self, duration: impl Into<Decimal>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    pub fn duration_max(mut self, duration_max: impl Into<Decimal>) -> Self {
        self.duration_max = Some(duration_max.into());
        self
    }

    pub fn duration_unit(mut self, duration_unit: impl Into<Coded<UnitsOfTime>>) -> Self {
        self.duration_unit = Some(duration_unit.into());
        self
    }

    pub fn frequency(mut self, frequency: impl Into<PositiveInt>) -> Self {
        self.frequency = Some(frequency.into());
        self
    }

    pub fn frequency_max(mut self, frequency_max: impl Into<PositiveInt>) -> Self {
        self.frequency_max = Some(frequency_max.into());
        self
    }

    pub fn period(mut self, period: impl Into<Decimal>) -> Self {
        self.period = Some(period.into());
        self
    }

    pub fn period_max(mut self, period_max: impl Into<Decimal>) -> Self {
        self.period_max = Some(period_max.into());
        self
    }

    pub fn period_unit(mut self, period_unit: impl Into<Coded<UnitsOfTime>>) -> Self {
        self.period_unit = Some(period_unit.into());
        self
    }

    pub fn day_of_week(mut self, day_of_week: impl Into<Coded<DayOfWeek>>) -> Self {
        self.day_of_week.push(day_of_week.into());
        self
    }

    pub fn set_day_of_week(mut self, day_of_week: Vec<Coded<DayOfWeek>>) -> Self {
        self.day_of_week = day_of_week;
        self
    }

    pub fn time_of_day(mut self, time_of_day: impl Into<Time>) -> Self {
        self.time_of_day.push(time_of_day.into());
        self
    }

    pub fn set_time_of_day(mut self, time_of_day: Vec<Time>) -> Self {
        self.time_of_day = time_of_day;
        self
    }

    pub fn when(mut self, when: impl Into<Coded<EventTiming>>) -> Self {
        self.when.push(when.into());
        self
    }

    pub fn set_when(mut self, when: Vec<Coded<EventTiming>>) -> Self {
        self.when = when;
        self
    }

    pub fn offset(mut self, offset: impl Into<UnsignedInt>) -> Self {
        self.offset = Some(offset.into());
        self
    }

    pub fn build(self) -> Result<Repeat> {
        let repeat = Repeat {
            backbone: self.backbone,
            bounds: self.bounds,
            count: self.count,
            count_max: self.count_max,
            duration: self.duration,
            duration_max: self.duration_max,
            duration_unit: self.duration_unit,
            frequency: self.frequency,
            frequency_max: self.frequency_max,
            period: self.period,
            period_max: self.period_max,
            period_unit: self.period_unit,
            day_of_week: self.day_of_week,
            time_of_day: self.time_of_day,
            when: self.when,
            offset: self.offset,
        };
        validation::check_element_strings(&repeat)?;
        validation::require_value_or_children(&repeat)?;
        Ok(repeat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal as Dec;

    #[test]
    fn three_times_a_day_for_two_weeks() {
        let repeat = Repeat::builder()
            .bounds(
                Period::builder()
                    .start("2024-03-01")
                    .end("2024-03-15")
                    .build()
                    .unwrap(),
            )
            .frequency(3u32)
            .period(Dec::ONE)
            .period_unit(UnitsOfTime::Day)
            .build()
            .unwrap();
        let timing = Timing::builder().repeat(repeat).build().unwrap();

        let repeat = timing.repeat.as_ref().unwrap();
        assert_eq!(repeat.frequency.as_ref().unwrap().value, Some(3));
        match repeat.bounds.as_ref().unwrap() {
            Bounds::Period(period) => assert!(period.end.is_some()),
            other => panic!("unexpected bounds: {other:?}"),
        }
    }

    #[test]
    fn before_breakfast_on_weekdays() {
        let repeat = Repeat::builder()
            .when(EventTiming::BeforeBreakfast)
            .day_of_week(DayOfWeek::Monday)
            .day_of_week(DayOfWeek::Friday)
            .offset(30u32)
            .build()
            .unwrap();
        assert_eq!(repeat.when[0].code_str(), Some("ACM"));
        assert_eq!(repeat.day_of_week.len(), 2);
    }

    #[test]
    fn empty_timing_and_repeat_fail_ele_1() {
        assert!(Timing::builder().build().is_err());
        assert!(Repeat::builder().build().is_err());
    }
}
