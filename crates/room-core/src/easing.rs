/// Smoothstep: t²(3 − 2t). Zero slope at both ends.
#[inline]
pub fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// Ease-out cubic: 1 − (1 − t)³. Decelerates into the endpoint.
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let u = 1.0 - t;
    1.0 - u * u * u
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Smoothstep,
    EaseOutCubic,
}

impl Easing {
    /// Eased progress for `t`, clamped to [0, 1] first.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Smoothstep => smoothstep(t),
            Easing::EaseOutCubic => ease_out_cubic(t),
        }
    }
}
