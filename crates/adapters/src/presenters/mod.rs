use effect_studio_domain::{
    DecodedImage, Effect, EffectSchema, ImageListing, ImageMetadata, Parameter, Pipeline,
};

pub fn present_image_row(image: &ImageMetadata) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        image.id.get(),
        image.image_type,
        image.size,
        image.name
    )
}

pub fn present_listing(listing: &ImageListing) -> Vec<String> {
    let mut lines = vec![format!(
        "{} of {} images",
        listing.images.len(),
        listing.total
    )];
    lines.extend(listing.images.iter().map(present_image_row));
    lines
}

pub fn present_decoded(label: &str, decoded: &DecodedImage) -> String {
    format!(
        "{} (kind={:?}, {}x{})",
        label, decoded.kind, decoded.width, decoded.height
    )
}

/// One header line for the effect plus one indented line per parameter.
pub fn present_effect_schema(schema: &EffectSchema) -> Vec<String> {
    let mut lines = vec![format!("{}\t{}", schema.effect_type, schema.label)];
    for choice in schema.choices {
        lines.push(format!(
            "  {}={{{}}}\t{}",
            choice.key,
            choice.options.join("|"),
            choice.label
        ));
    }
    for range in schema.ranges {
        lines.push(format!(
            "  {}=[{}, {}] step {} default {}\t{}",
            range.key, range.bounds[0], range.bounds[1], range.step, range.default, range.label
        ));
    }
    lines
}

pub fn present_effect(effect: &Effect) -> String {
    let values: Vec<String> = effect
        .params()
        .iter()
        .map(|parameter| match parameter {
            Parameter::Choice(choice) if choice.is_set() => {
                format!("{}={}", choice.key(), choice.value())
            }
            Parameter::Choice(choice) => format!("{}=<unset>", choice.key()),
            Parameter::Range(range) => format!("{}={}", range.key(), range.value()),
        })
        .collect();

    if values.is_empty() {
        return effect.type_name().to_string();
    }
    format!("{}({})", effect.type_name(), values.join(", "))
}

pub fn present_pipeline(pipeline: &Pipeline) -> String {
    if pipeline.is_empty() {
        return "empty pipeline".to_string();
    }
    pipeline
        .iter()
        .map(present_effect)
        .collect::<Vec<_>>()
        .join(" -> ")
}

#[cfg(test)]
mod tests {
    use effect_studio_domain::{catalog, EffectType};

    use super::*;

    #[test]
    fn pipeline_shows_unset_choices() {
        let mut pipeline = Pipeline::new();
        pipeline.push_type(EffectType::MeanBlur);
        pipeline.push_type(EffectType::Negative);
        assert_eq!(
            present_pipeline(&pipeline),
            "meanBlur(BT=<unset>, size=1) -> negativeImg"
        );
    }

    #[test]
    fn schema_lists_options_and_bounds() {
        let lines = present_effect_schema(catalog::schema(EffectType::Draw));
        assert_eq!(lines[0], "draw\tDraw");
        assert_eq!(lines[1], "  color={Bright|Dark}\tType");
        assert_eq!(lines[2], "  step=[1, 255] step 1 default 1\tstep");
    }
}
