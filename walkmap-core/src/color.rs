use crate::entities::color::Rgba;

/// Alpha channel of gradient fills, keeps the base map visible.
pub const FILL_ALPHA: f64 = 0.6;

/// Maps a normalized score onto a red → yellow → green ramp.
///
/// Below 0.5 the green channel rises from 0 to 255 while red stays
/// saturated, from 0.5 upwards the red channel falls back to 0.
/// Scores outside of `[0, 1]` are clamped, `NaN` counts as 0.
pub fn score_color(score: f64) -> Rgba {
    let score = if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 1.0)
    };
    if score < 0.5 {
        Rgba::new(255, channel(510.0 * score), 0, FILL_ALPHA)
    } else {
        Rgba::new(channel(510.0 * (1.0 - score)), 255, 0, FILL_ALPHA)
    }
}

// Rounds half up.
fn channel(value: f64) -> u8 {
    (value + 0.5).floor().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_channels() {
        assert_eq!(score_color(0.0).channels(), (255, 0, 0));
        assert_eq!(score_color(0.25).channels(), (255, 128, 0));
        assert_eq!(score_color(0.75).channels(), (128, 255, 0));
        assert_eq!(score_color(1.0).channels(), (0, 255, 0));
    }

    #[test]
    fn half_belongs_to_upper_branch() {
        // red = round(510 * (1 - 0.5))
        assert_eq!(score_color(0.5).channels(), (255, 255, 0));
        assert_eq!(score_color(0.499).channels(), (255, 254, 0));
    }

    #[test]
    fn fixed_alpha() {
        assert_eq!(score_color(0.3).a, 0.6);
        assert_eq!(score_color(0.3).to_string(), "rgba(255, 153, 0, 0.6)");
    }

    #[test]
    fn clamp_out_of_range_scores() {
        assert_eq!(score_color(-0.2), score_color(0.0));
        assert_eq!(score_color(1.7), score_color(1.0));
        assert_eq!(score_color(f64::NAN), score_color(0.0));
    }
}
