use crate::{
    animation::ease::Ease,
    foundation::core::Millis,
    foundation::error::{PageError, PageResult},
};

/// Linear interpolation between two values of the same type.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` at normalized progress `t`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

/// A single animatable visual property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    /// Opacity in `[0, 1]`.
    Opacity,
    /// Horizontal offset in px.
    X,
    /// Vertical offset in px.
    Y,
    /// Uniform scale factor.
    Scale,
    /// Rotation in degrees.
    #[serde(rename = "rotate")]
    RotateDeg,
}

impl Property {
    pub const ALL: [Self; 5] = [
        Self::Opacity,
        Self::X,
        Self::Y,
        Self::Scale,
        Self::RotateDeg,
    ];
}

/// Visual state of one element: the subset of CSS transform/opacity the page animates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct VisualProps {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    #[serde(rename = "rotate")]
    pub rotate_deg: f64,
}

impl Default for VisualProps {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl VisualProps {
    /// Fully visible, untransformed.
    pub const IDENTITY: Self = Self {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate_deg: 0.0,
    };

    /// Identity transform with zero opacity.
    pub fn hidden() -> Self {
        Self {
            opacity: 0.0,
            ..Self::IDENTITY
        }
    }

    pub fn get(&self, prop: Property) -> f64 {
        match prop {
            Property::Opacity => self.opacity,
            Property::X => self.x,
            Property::Y => self.y,
            Property::Scale => self.scale,
            Property::RotateDeg => self.rotate_deg,
        }
    }

    pub fn set(&mut self, prop: Property, value: f64) {
        match prop {
            Property::Opacity => self.opacity = value,
            Property::X => self.x = value,
            Property::Y => self.y = value,
            Property::Scale => self.scale = value,
            Property::RotateDeg => self.rotate_deg = value,
        }
    }

    /// Return a copy with `prop` replaced.
    pub fn with(mut self, prop: Property, value: f64) -> Self {
        self.set(prop, value);
        self
    }

    fn is_finite(&self) -> bool {
        Property::ALL.iter().all(|&p| self.get(p).is_finite())
    }
}

impl Lerp for VisualProps {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        let mut out = *a;
        for prop in Property::ALL {
            out.set(prop, f64::lerp(&a.get(prop), &b.get(prop), t));
        }
        out
    }
}

/// One-shot transition from `from` to `to`, sampled as a pure function of elapsed time.
///
/// Before `delay` the tween holds `from`; after `delay + duration` it holds `to`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tween<T = VisualProps> {
    pub from: T,
    pub to: T,
    pub duration: Millis,
    #[serde(default)]
    pub delay: Millis,
    #[serde(default)]
    pub ease: Ease,
}

impl<T> Tween<T>
where
    T: Lerp + Clone,
{
    /// Raw (un-eased) progress in `[0, 1]` at `elapsed` since the tween was started.
    pub fn progress(&self, elapsed: Millis) -> f64 {
        let active = elapsed.saturating_sub(self.delay);
        if elapsed < self.delay {
            return 0.0;
        }
        if self.duration.is_zero() {
            return 1.0;
        }
        (active.0 as f64 / self.duration.0 as f64).min(1.0)
    }

    pub fn sample(&self, elapsed: Millis) -> T {
        let p = self.progress(elapsed);
        if p <= 0.0 {
            return self.from.clone();
        }
        if p >= 1.0 {
            return self.to.clone();
        }
        T::lerp(&self.from, &self.to, self.ease.apply(p))
    }

    /// Delay plus duration.
    pub fn total(&self) -> Millis {
        self.delay.saturating_add(self.duration)
    }

    pub fn is_finished(&self, elapsed: Millis) -> bool {
        elapsed >= self.total()
    }
}

impl Tween<VisualProps> {
    /// Check that the tween only carries finite values and a usable curve.
    pub fn validate(&self) -> PageResult<()> {
        if !self.from.is_finite() || !self.to.is_finite() {
            return Err(PageError::validation(
                "tween endpoints must be finite numbers",
            ));
        }
        if !self.ease.is_valid() {
            return Err(PageError::validation(format!(
                "invalid easing curve {:?}",
                self.ease
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
