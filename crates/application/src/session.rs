use effect_studio_domain::{Effect, EffectType, Pipeline, SelectedImage};

/// State shared by the views: the chosen image and the effects applied to it.
///
/// Owned by the driver and handed out by reference; there is a single writer.
#[derive(Debug, Clone, Default)]
pub struct PipelineSession {
    selected_image: Option<SelectedImage>,
    applied_effects: Pipeline,
    uploaded: bool,
    deleted: bool,
}

impl PipelineSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_image(&self) -> Option<&SelectedImage> {
        self.selected_image.as_ref()
    }

    pub fn select_image(&mut self, image: SelectedImage) {
        self.selected_image = Some(image);
    }

    pub fn clear_selection(&mut self) -> Option<SelectedImage> {
        self.selected_image.take()
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.applied_effects
    }

    pub fn pipeline_mut(&mut self) -> &mut Pipeline {
        &mut self.applied_effects
    }

    pub fn add_effect(&mut self, effect_type: EffectType) -> usize {
        self.applied_effects.push_type(effect_type)
    }

    pub fn remove_effect(&mut self, index: usize) -> Option<Effect> {
        self.applied_effects.remove(index)
    }

    pub fn move_effect(&mut self, from: usize, to: usize) -> bool {
        self.applied_effects.move_effect(from, to)
    }

    pub fn effect_mut(&mut self, index: usize) -> Option<&mut Effect> {
        self.applied_effects.get_mut(index)
    }

    pub fn clear_effects(&mut self) {
        self.applied_effects.clear();
    }

    pub fn mark_uploaded(&mut self) {
        self.uploaded = true;
    }

    pub fn mark_deleted(&mut self) {
        self.deleted = true;
    }

    /// Returns the upload signal and resets it.
    pub fn take_uploaded(&mut self) -> bool {
        std::mem::take(&mut self.uploaded)
    }

    /// Returns the delete signal and resets it.
    pub fn take_deleted(&mut self) -> bool {
        std::mem::take(&mut self.deleted)
    }
}

#[cfg(test)]
mod tests {
    use effect_studio_domain::ImageId;

    use super::*;

    fn selected(id: i64) -> SelectedImage {
        SelectedImage {
            id: ImageId::new(id).expect("id"),
            source: String::new(),
            name: format!("img{id}.png"),
            image_type: "png".to_string(),
            size: "10*10*3".to_string(),
            url: String::new(),
        }
    }

    #[test]
    fn flags_are_one_shot() {
        let mut session = PipelineSession::new();
        assert!(!session.take_uploaded());
        session.mark_uploaded();
        assert!(session.take_uploaded());
        assert!(!session.take_uploaded());

        session.mark_deleted();
        assert!(session.take_deleted());
        assert!(!session.take_deleted());
    }

    #[test]
    fn selection_is_replaced_and_cleared() {
        let mut session = PipelineSession::new();
        session.select_image(selected(1));
        session.select_image(selected(2));
        assert_eq!(session.selected_image().map(|image| image.id.get()), Some(2));
        assert_eq!(session.clear_selection().map(|image| image.id.get()), Some(2));
        assert!(session.selected_image().is_none());
    }

    #[test]
    fn effects_are_edited_in_place() {
        let mut session = PipelineSession::new();
        let index = session.add_effect(EffectType::Threshold);
        session
            .effect_mut(index)
            .expect("effect")
            .set_range("threshold", 10.0)
            .expect("threshold");
        assert_eq!(
            session
                .pipeline()
                .to_query()
                .expect("query")
                .params
                .get("threshold")
                .map(String::as_str),
            Some("10")
        );
        session.clear_effects();
        assert!(session.pipeline().is_empty());
    }

    #[test]
    fn effects_are_reordered_and_removed() {
        let mut session = PipelineSession::new();
        session.add_effect(EffectType::Negative);
        session.add_effect(EffectType::ColorToGray);
        session.add_effect(EffectType::WaterColor);

        assert!(session.move_effect(2, 0));
        assert_eq!(session.pipeline().algorithm(), "waterColor_negativeImg_RGBtoGray");

        let removed = session.remove_effect(1).expect("removed");
        assert_eq!(removed.effect_type(), Some(EffectType::Negative));
        assert_eq!(session.pipeline().algorithm(), "waterColor_RGBtoGray");
        assert!(session.remove_effect(5).is_none());
    }
}
