use indexmap::IndexMap;

use crate::{DomainError, Effect, EffectType};

const SEPARATOR: char = '_';

/// Ordered list of effects; the backend applies them in this order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pipeline {
    effects: Vec<Effect>,
}

/// Flattened request for the rendering backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectQuery {
    pub algorithm: String,
    pub params: IndexMap<String, String>,
}

impl EffectQuery {
    /// Query pairs with `algorithm` first, then parameters by first appearance.
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        std::iter::once(("algorithm", self.algorithm.as_str()))
            .chain(
                self.params
                    .iter()
                    .map(|(key, value)| (key.as_str(), value.as_str())),
            )
            .collect()
    }
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Effect> {
        self.effects.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Effect> {
        self.effects.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Effect> {
        self.effects.get_mut(index)
    }

    pub fn push(&mut self, effect: Effect) -> usize {
        self.effects.push(effect);
        self.effects.len() - 1
    }

    pub fn push_type(&mut self, effect_type: EffectType) -> usize {
        self.push(Effect::new(effect_type))
    }

    pub fn remove(&mut self, index: usize) -> Option<Effect> {
        (index < self.effects.len()).then(|| self.effects.remove(index))
    }

    /// Moves the effect at `from` so it ends up at `to`. Returns false when
    /// either index is out of range.
    pub fn move_effect(&mut self, from: usize, to: usize) -> bool {
        if from >= self.effects.len() || to >= self.effects.len() {
            return false;
        }
        let effect = self.effects.remove(from);
        self.effects.insert(to, effect);
        true
    }

    pub fn clear(&mut self) {
        self.effects.clear();
    }

    /// Algorithm descriptor: effect type names joined with `_`.
    pub fn algorithm(&self) -> String {
        self.effects
            .iter()
            .map(Effect::type_name)
            .collect::<Vec<_>>()
            .join("_")
    }

    /// Flattens the pipeline into the backend query.
    ///
    /// Values of a key repeated across effects are `_`-joined in pipeline
    /// order. Any unset choice makes the whole pipeline incomplete.
    pub fn to_query(&self) -> Result<EffectQuery, DomainError> {
        let mut params: IndexMap<String, String> = IndexMap::new();

        for effect in &self.effects {
            for choice in effect.params().choices() {
                if !choice.is_set() {
                    return Err(DomainError::IncompletePipeline);
                }
                accumulate(&mut params, choice.key(), choice.value());
            }
            for range in effect.params().ranges() {
                accumulate(&mut params, range.key(), &format_value(range.value()));
            }
        }

        Ok(EffectQuery {
            algorithm: self.algorithm(),
            params,
        })
    }
}

impl FromIterator<Effect> for Pipeline {
    fn from_iter<I: IntoIterator<Item = Effect>>(iter: I) -> Self {
        Self {
            effects: iter.into_iter().collect(),
        }
    }
}

fn accumulate(params: &mut IndexMap<String, String>, key: &str, value: &str) {
    match params.get_mut(key) {
        Some(existing) => {
            existing.push(SEPARATOR);
            existing.push_str(value);
        }
        None => {
            params.insert(key.to_string(), value.to_string());
        }
    }
}

fn format_value(value: f64) -> String {
    // `-0.0` prints as "-0"; the backend expects "0".
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}")
}
