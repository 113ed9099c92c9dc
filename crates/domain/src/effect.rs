use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::{self, ChoiceSchema, RangeSchema};
use crate::DomainError;

/// Effect identifiers understood by the rendering backend.
///
/// Variant order matches the catalog table, see [`catalog::schema`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectType {
    #[serde(rename = "filter")]
    Filter,
    #[serde(rename = "rainbow")]
    Rainbow,
    #[serde(rename = "gaussianBlur")]
    GaussianBlur,
    #[serde(rename = "meanBlur")]
    MeanBlur,
    #[serde(rename = "luminosity")]
    Luminosity,
    #[serde(rename = "sobel")]
    Sobel,
    #[serde(rename = "egalisationS")]
    EgalisationS,
    #[serde(rename = "egalisationV")]
    EgalisationV,
    #[serde(rename = "egalisationRGB")]
    EgalisationRgb,
    #[serde(rename = "dynamicContrast")]
    DynamicContrast,
    #[serde(rename = "negativeImg")]
    Negative,
    #[serde(rename = "threshold")]
    Threshold,
    #[serde(rename = "RGBtoGray")]
    ColorToGray,
    #[serde(rename = "draw")]
    Draw,
    #[serde(rename = "waterColor")]
    WaterColor,
    #[serde(rename = "vortex")]
    Vortex,
    #[serde(rename = "perspective")]
    Perspective,
    #[serde(rename = "rotation")]
    Rotation,
}

impl EffectType {
    pub const ALL: [EffectType; 18] = [
        Self::Filter,
        Self::Rainbow,
        Self::GaussianBlur,
        Self::MeanBlur,
        Self::Luminosity,
        Self::Sobel,
        Self::EgalisationS,
        Self::EgalisationV,
        Self::EgalisationRgb,
        Self::DynamicContrast,
        Self::Negative,
        Self::Threshold,
        Self::ColorToGray,
        Self::Draw,
        Self::WaterColor,
        Self::Vortex,
        Self::Perspective,
        Self::Rotation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Filter => "filter",
            Self::Rainbow => "rainbow",
            Self::GaussianBlur => "gaussianBlur",
            Self::MeanBlur => "meanBlur",
            Self::Luminosity => "luminosity",
            Self::Sobel => "sobel",
            Self::EgalisationS => "egalisationS",
            Self::EgalisationV => "egalisationV",
            Self::EgalisationRgb => "egalisationRGB",
            Self::DynamicContrast => "dynamicContrast",
            Self::Negative => "negativeImg",
            Self::Threshold => "threshold",
            Self::ColorToGray => "RGBtoGray",
            Self::Draw => "draw",
            Self::WaterColor => "waterColor",
            Self::Vortex => "vortex",
            Self::Perspective => "perspective",
            Self::Rotation => "rotation",
        }
    }
}

impl Display for EffectType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EffectType {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|effect_type| effect_type.as_str() == value)
            .ok_or_else(|| DomainError::UnknownEffectType(value.to_string()))
    }
}

/// Enumerated parameter; starts unset (empty value).
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceParam {
    schema: &'static ChoiceSchema,
    value: String,
}

impl ChoiceParam {
    pub fn new(schema: &'static ChoiceSchema) -> Self {
        Self {
            schema,
            value: String::new(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.schema.label
    }

    pub fn key(&self) -> &'static str {
        self.schema.key
    }

    pub fn options(&self) -> &'static [&'static str] {
        self.schema.options
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_set(&self) -> bool {
        !self.value.is_empty()
    }

    pub fn set_value(&mut self, value: &str) -> Result<(), DomainError> {
        if !self.schema.options.contains(&value) {
            return Err(DomainError::OptionNotAllowed {
                key: self.schema.key.to_string(),
                value: value.to_string(),
            });
        }
        self.value = value.to_string();
        Ok(())
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}

/// Bounded numeric parameter; always carries a value.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeParam {
    schema: &'static RangeSchema,
    value: f64,
}

impl RangeParam {
    pub fn new(schema: &'static RangeSchema) -> Self {
        Self {
            schema,
            value: schema.default,
        }
    }

    pub fn label(&self) -> &'static str {
        self.schema.label
    }

    pub fn key(&self) -> &'static str {
        self.schema.key
    }

    /// Bounds exactly as declared in the catalog.
    pub fn raw_bounds(&self) -> [&'static str; 2] {
        self.schema.bounds
    }

    pub fn bounds(&self) -> (f64, f64) {
        let [min, max] = self.schema.bounds;
        (
            min.parse().unwrap_or(f64::NAN),
            max.parse().unwrap_or(f64::NAN),
        )
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_value(&mut self, value: f64) -> Result<(), DomainError> {
        let (min, max) = self.bounds();
        if !value.is_finite() || value < min || value > max {
            return Err(DomainError::ValueOutOfRange {
                key: self.schema.key.to_string(),
                value,
                min,
                max,
            });
        }
        self.value = value;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Parameter {
    Choice(ChoiceParam),
    Range(RangeParam),
}

impl Parameter {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Choice(choice) => choice.key(),
            Self::Range(range) => range.key(),
        }
    }
}

/// Parameters owned by one effect instance, in display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EffectParameterSet {
    parameters: Vec<Parameter>,
}

impl EffectParameterSet {
    fn from_schema(choices: &'static [ChoiceSchema], ranges: &'static [RangeSchema]) -> Self {
        let parameters = choices
            .iter()
            .map(|schema| Parameter::Choice(ChoiceParam::new(schema)))
            .chain(
                ranges
                    .iter()
                    .map(|schema| Parameter::Range(RangeParam::new(schema))),
            )
            .collect();
        Self { parameters }
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter()
    }

    pub fn choices(&self) -> impl Iterator<Item = &ChoiceParam> {
        self.parameters.iter().filter_map(|parameter| match parameter {
            Parameter::Choice(choice) => Some(choice),
            Parameter::Range(_) => None,
        })
    }

    pub fn ranges(&self) -> impl Iterator<Item = &RangeParam> {
        self.parameters.iter().filter_map(|parameter| match parameter {
            Parameter::Range(range) => Some(range),
            Parameter::Choice(_) => None,
        })
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Parameter> {
        self.parameters
            .iter_mut()
            .find(|parameter| parameter.key() == key)
    }

    pub fn keys(&self) -> Vec<&'static str> {
        self.parameters.iter().map(Parameter::key).collect()
    }
}

/// One entry of a pipeline: an effect type plus its own parameter values.
#[derive(Debug, Clone, PartialEq)]
pub struct Effect {
    type_name: String,
    effect_type: Option<EffectType>,
    label: &'static str,
    params: EffectParameterSet,
}

impl Effect {
    pub fn new(effect_type: EffectType) -> Self {
        let schema = catalog::schema(effect_type);
        Self {
            type_name: effect_type.as_str().to_string(),
            effect_type: Some(effect_type),
            label: schema.label,
            params: EffectParameterSet::from_schema(schema.choices, schema.ranges),
        }
    }

    /// Builds an effect from its wire name. Unknown names give an inert
    /// effect with an empty label and no parameters.
    pub fn from_type_name(name: &str) -> Self {
        match name.parse::<EffectType>() {
            Ok(effect_type) => Self::new(effect_type),
            Err(_) => Self {
                type_name: name.to_string(),
                effect_type: None,
                label: "",
                params: EffectParameterSet::default(),
            },
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn effect_type(&self) -> Option<EffectType> {
        self.effect_type
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn params(&self) -> &EffectParameterSet {
        &self.params
    }

    pub fn set_choice(&mut self, key: &str, value: &str) -> Result<(), DomainError> {
        match self.parameter_mut(key)? {
            Parameter::Choice(choice) => choice.set_value(value),
            Parameter::Range(_) => Err(DomainError::OptionNotAllowed {
                key: key.to_string(),
                value: value.to_string(),
            }),
        }
    }

    pub fn set_range(&mut self, key: &str, value: f64) -> Result<(), DomainError> {
        match self.parameter_mut(key)? {
            Parameter::Range(range) => range.set_value(value),
            Parameter::Choice(_) => Err(DomainError::OptionNotAllowed {
                key: key.to_string(),
                value: value.to_string(),
            }),
        }
    }

    /// Sets a parameter from raw text, parsing numbers for range parameters.
    pub fn set_param(&mut self, key: &str, raw: &str) -> Result<(), DomainError> {
        match self.parameter_mut(key)? {
            Parameter::Choice(choice) => choice.set_value(raw),
            Parameter::Range(range) => {
                let value = raw.trim().parse::<f64>().map_err(|_| DomainError::ValueOutOfRange {
                    key: key.to_string(),
                    value: f64::NAN,
                    min: range.bounds().0,
                    max: range.bounds().1,
                })?;
                range.set_value(value)
            }
        }
    }

    fn parameter_mut(&mut self, key: &str) -> Result<&mut Parameter, DomainError> {
        let effect = self.type_name.clone();
        self.params
            .get_mut(key)
            .ok_or_else(|| DomainError::UnknownParameter {
                effect,
                key: key.to_string(),
            })
    }
}
