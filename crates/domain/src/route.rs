//! Path table for the three views.

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Gallery,
    /// Malformed ids resolve to `0`; the image view treats it as not found.
    Image { id: i64 },
}

impl Route {
    pub fn resolve(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');

        match trimmed {
            "" => Some(Self::Home),
            "/gallery" => Some(Self::Gallery),
            _ => {
                let raw_id = trimmed.strip_prefix("/image/")?;
                if raw_id.contains('/') {
                    return None;
                }
                Some(Self::Image {
                    id: coerce_id(raw_id),
                })
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Gallery => "gallery",
            Self::Image { .. } => "image",
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Gallery => "/gallery".to_string(),
            Self::Image { id } => format!("/image/{id}"),
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.path())
    }
}

fn coerce_id(raw: &str) -> i64 {
    let raw = raw.trim();
    if let Ok(id) = raw.parse::<i64>() {
        return id;
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value.fract() == 0.0 => value as i64,
        _ => 0,
    }
}
