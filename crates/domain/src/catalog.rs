//! Static effect catalog: label and parameter schema for every effect type.
//!
//! Keys are the query parameter names the backend reads. Several effects
//! share keys (`smin`, `delta`, `color`, ...); the backend consumes repeated
//! values positionally.

use crate::EffectType;

#[derive(Debug, PartialEq)]
pub struct ChoiceSchema {
    pub label: &'static str,
    pub key: &'static str,
    pub options: &'static [&'static str],
}

#[derive(Debug, PartialEq)]
pub struct RangeSchema {
    pub label: &'static str,
    pub key: &'static str,
    pub bounds: [&'static str; 2],
    pub step: f64,
    pub default: f64,
}

#[derive(Debug, PartialEq)]
pub struct EffectSchema {
    pub effect_type: EffectType,
    pub label: &'static str,
    pub choices: &'static [ChoiceSchema],
    pub ranges: &'static [RangeSchema],
}

const BORDER_TYPES: &[&str] = &["SKIP", "NORMALIZED", "EXTENDED", "REFLECT"];

const PERSPECTIVES: &[&str] = &[
    "TOPLEFT",
    "TOP",
    "TOPRIGHT",
    "LEFT",
    "CENTER",
    "RIGHT",
    "BOTTOMLEFT",
    "BOTTOM",
    "BOTTOMRIGHT",
];

const SATURATION_MIN: RangeSchema = RangeSchema {
    label: "min",
    key: "smin",
    bounds: ["0", "1"],
    step: 0.01,
    default: 0.0,
};

const SATURATION_MAX: RangeSchema = RangeSchema {
    label: "max",
    key: "smax",
    bounds: ["0", "1"],
    step: 0.01,
    default: 1.0,
};

const BLUR_SIZE: RangeSchema = RangeSchema {
    label: "Taille",
    key: "size",
    bounds: ["1", "35"],
    step: 2.0,
    default: 1.0,
};

const BORDER_TYPE: ChoiceSchema = ChoiceSchema {
    label: "Type",
    key: "BT",
    options: BORDER_TYPES,
};

const fn parameterless(effect_type: EffectType, label: &'static str) -> EffectSchema {
    EffectSchema {
        effect_type,
        label,
        choices: &[],
        ranges: &[],
    }
}

static CATALOG: [EffectSchema; 18] = [
    EffectSchema {
        effect_type: EffectType::Filter,
        label: "Teinte",
        choices: &[],
        ranges: &[
            RangeSchema {
                label: "Teinte",
                key: "hue",
                bounds: ["0", "359"],
                step: 1.0,
                default: 0.0,
            },
            SATURATION_MIN,
            SATURATION_MAX,
        ],
    },
    EffectSchema {
        effect_type: EffectType::Rainbow,
        label: "Arc En Ciel",
        choices: &[],
        ranges: &[SATURATION_MIN, SATURATION_MAX],
    },
    EffectSchema {
        effect_type: EffectType::GaussianBlur,
        label: "Flou Gauss.",
        choices: &[BORDER_TYPE],
        ranges: &[
            BLUR_SIZE,
            RangeSchema {
                label: "Ecart type",
                key: "sigma",
                bounds: ["1", "7"],
                step: 1.0,
                default: 1.0,
            },
        ],
    },
    EffectSchema {
        effect_type: EffectType::MeanBlur,
        label: "Flou Moy.",
        choices: &[BORDER_TYPE],
        ranges: &[BLUR_SIZE],
    },
    EffectSchema {
        effect_type: EffectType::Luminosity,
        label: "Lum.",
        choices: &[],
        ranges: &[RangeSchema {
            label: "Delta",
            key: "delta",
            bounds: ["-255", "255"],
            step: 1.0,
            default: 0.0,
        }],
    },
    EffectSchema {
        effect_type: EffectType::Sobel,
        label: "Contour",
        choices: &[ChoiceSchema {
            label: "Type",
            key: "color",
            options: &["Color", "White"],
        }],
        ranges: &[],
    },
    parameterless(EffectType::EgalisationS, "Egal° S"),
    parameterless(EffectType::EgalisationV, "Egal° V"),
    parameterless(EffectType::EgalisationRgb, "Egal° RGB"),
    EffectSchema {
        effect_type: EffectType::DynamicContrast,
        label: "Cont- raste Dyn.",
        choices: &[],
        ranges: &[
            RangeSchema {
                label: "min",
                key: "min",
                bounds: ["0", "255"],
                step: 1.0,
                default: 0.0,
            },
            RangeSchema {
                label: "max",
                key: "max",
                bounds: ["0", "255"],
                step: 1.0,
                default: 255.0,
            },
        ],
    },
    parameterless(EffectType::Negative, "Neg."),
    EffectSchema {
        effect_type: EffectType::Threshold,
        label: "Seuil",
        choices: &[],
        ranges: &[RangeSchema {
            label: "seuil",
            key: "threshold",
            bounds: ["0", "255"],
            step: 1.0,
            default: 122.0,
        }],
    },
    parameterless(EffectType::ColorToGray, "Gris"),
    EffectSchema {
        effect_type: EffectType::Draw,
        label: "Draw",
        choices: &[ChoiceSchema {
            label: "Type",
            key: "color",
            options: &["Bright", "Dark"],
        }],
        ranges: &[RangeSchema {
            label: "step",
            key: "step",
            bounds: ["1", "255"],
            step: 1.0,
            default: 1.0,
        }],
    },
    parameterless(EffectType::WaterColor, "Aqua- relle"),
    EffectSchema {
        effect_type: EffectType::Vortex,
        label: "Tour- billon",
        choices: &[],
        ranges: &[
            RangeSchema {
                label: "Rotation",
                key: "vortex",
                bounds: ["0.001", "0.15"],
                step: 0.001,
                default: 0.001,
            },
            RangeSchema {
                label: "Position horizontale",
                key: "x0",
                bounds: ["0", "100"],
                step: 1.0,
                default: 50.0,
            },
            RangeSchema {
                label: "Position verticale",
                key: "y0",
                bounds: ["0", "100"],
                step: 1.0,
                default: 50.0,
            },
        ],
    },
    EffectSchema {
        effect_type: EffectType::Perspective,
        label: "Relief",
        choices: &[ChoiceSchema {
            label: "Perspective",
            key: "persp",
            options: PERSPECTIVES,
        }],
        ranges: &[RangeSchema {
            label: "Delta",
            key: "delta",
            bounds: ["0", "0.002"],
            step: 0.0001,
            default: 0.0,
        }],
    },
    EffectSchema {
        effect_type: EffectType::Rotation,
        label: "Rota- tion",
        choices: &[],
        ranges: &[RangeSchema {
            label: "Angle",
            key: "theta",
            bounds: ["0", "360"],
            step: 0.1,
            default: 0.0,
        }],
    },
];

pub fn all() -> &'static [EffectSchema] {
    &CATALOG
}

pub fn schema(effect_type: EffectType) -> &'static EffectSchema {
    &CATALOG[effect_type as usize]
}

pub fn lookup(type_name: &str) -> Option<&'static EffectSchema> {
    type_name.parse::<EffectType>().ok().map(schema)
}
