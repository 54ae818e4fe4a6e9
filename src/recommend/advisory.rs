//! Advisory text composition
//!
//! The advisory is built from independently evaluated clause generators run
//! in fixed order and joined into one string. Clauses are not mutually
//! exclusive across metrics; every applicable observation is appended.
//! Inline `<strong>` / `<span class="rec-size">` markers and the ✅/⚠️
//! prefixes are styled by the rendering layer.

use crate::geometry::GeometryResult;
use crate::models::ViewingParameters;
use crate::recommend::selector::SizeRecommendation;

/// Everything a clause generator may look at
pub struct AdvisoryContext<'a> {
    pub params: &'a ViewingParameters,
    pub geometry: &'a GeometryResult,
    pub recommendation: &'a SizeRecommendation,
}

type ClauseFn = fn(&AdvisoryContext) -> Option<String>;

/// Fixed clause order: size recommendation, angle, occupancy, height
const CLAUSES: &[ClauseFn] = &[
    size_recommendation_clause,
    horizontal_angle_clause,
    wall_occupancy_clause,
    height_offset_clause,
];

/// Run every clause generator and join the produced clauses
pub fn compose_advisory(ctx: &AdvisoryContext) -> String {
    CLAUSES
        .iter()
        .filter_map(|clause| clause(ctx))
        .collect::<Vec<_>>()
        .join(" ")
}

fn size_recommendation_clause(ctx: &AdvisoryContext) -> Option<String> {
    Some(format!(
        "Based on your viewing distance of <strong>{:.1} m</strong>, \
         a <span class=\"rec-size\">{}–{} inch</span> TV is recommended.",
        ctx.params.distance_m, ctx.recommendation.range_min_in, ctx.recommendation.range_max_in
    ))
}

fn horizontal_angle_clause(ctx: &AdvisoryContext) -> Option<String> {
    let angle = ctx.geometry.horizontal_angle_deg;
    let size = ctx.params.selected_size;

    let clause = if (30.0..=40.0).contains(&angle) {
        format!(
            "The current <strong>{} inch</strong> choice is an excellent fit! \
             A {:.1}° horizontal field of view reaches the THX-recommended \
             cinema-grade experience.",
            size, angle
        )
    } else if (25.0..30.0).contains(&angle) {
        format!(
            "The current <strong>{} inch</strong> choice is slightly small; \
             consider going one size up for a more immersive picture.",
            size
        )
    } else if angle > 40.0 && angle <= 50.0 {
        format!(
            "The current <strong>{} inch</strong> choice is slightly large; \
             sitting this close may require turning your head, but immersion \
             will be stronger.",
            size
        )
    } else if angle < 25.0 {
        format!(
            "The current <strong>{} inch</strong> choice is on the small side; \
             a larger size would improve the viewing experience.",
            size
        )
    } else {
        format!(
            "The current <strong>{} inch</strong> choice is too large and may \
             cause viewing fatigue.",
            size
        )
    };

    Some(clause)
}

fn wall_occupancy_clause(ctx: &AdvisoryContext) -> Option<String> {
    let ratio = ctx.geometry.wall_occupancy_percent;

    if ratio > 70.0 {
        Some(format!(
            "⚠️ The TV takes up {:.0}% of the wall width and may look cramped; \
             consider one size down or a wider TV wall.",
            ratio
        ))
    } else if ratio < 35.0 {
        Some(format!(
            "The TV takes up {:.0}% of the wall, leaving plenty of room; \
             a larger size is an option.",
            ratio
        ))
    } else if (40.0..=55.0).contains(&ratio) {
        Some(format!(
            "✅ The TV takes up {:.0}% of the wall, a well-balanced proportion.",
            ratio
        ))
    } else {
        None
    }
}

fn height_offset_clause(ctx: &AdvisoryContext) -> Option<String> {
    let offset = ctx.geometry.height_offset_cm;
    let magnitude = offset.abs();

    if magnitude > 20.0 {
        if offset > 0.0 {
            Some(format!(
                "⚠️ The TV center sits {:.0}cm above eye level; long sessions \
                 may strain the neck, so consider mounting it lower.",
                magnitude
            ))
        } else {
            Some(format!(
                "⚠️ The TV center sits {:.0}cm below eye level; consider \
                 mounting it a little higher.",
                magnitude
            ))
        }
    } else if magnitude <= 10.0 {
        Some("✅ The TV is level with your eyes, a comfortable viewing posture.".to_string())
    } else {
        // 11–20 cm: no explicit message
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::compute_geometry;
    use crate::recommend::selector::recommend_size;

    fn advisory_for(params: &ViewingParameters) -> String {
        let geometry = compute_geometry(params).unwrap();
        let recommendation = recommend_size(params.distance_m).unwrap();
        compose_advisory(&AdvisoryContext {
            params,
            geometry: &geometry,
            recommendation: &recommendation,
        })
    }

    #[test]
    fn test_default_parameters_compose_three_clauses() {
        // 75" at 3.1 m: 29.98° (just under the praise band), 46% (balanced),
        // 0 cm (level)
        let text = advisory_for(&ViewingParameters::default());

        assert!(text.starts_with("Based on your viewing distance of <strong>3.1 m</strong>"));
        assert!(text.contains("slightly small"));
        assert!(text.contains("well-balanced proportion"));
        assert!(text.contains("level with your eyes"));
    }

    #[test]
    fn test_angle_in_praise_band_mentions_thx() {
        // 85" at 3.1 m subtends 33.8°
        let params = ViewingParameters { selected_size: 85, ..Default::default() };
        let text = advisory_for(&params);

        assert!(text.contains("excellent fit"));
        assert!(text.contains("THX-recommended"));
    }

    #[test]
    fn test_moderate_height_offset_stays_silent() {
        let params = ViewingParameters {
            tv_mount_height_m: 1.25,
            eye_height_m: 1.1,
            ..Default::default()
        };
        let text = advisory_for(&params);

        // 15 cm sits between the praise (≤10) and warning (>20) ranges
        assert!(!text.contains("eye level"));
        assert!(!text.contains("level with your eyes"));
    }

    #[test]
    fn test_tv_mounted_high_warns_about_neck_strain() {
        let params = ViewingParameters {
            tv_mount_height_m: 1.5,
            eye_height_m: 1.1,
            ..Default::default()
        };
        let text = advisory_for(&params);

        assert!(text.contains("40cm above eye level"));
        assert!(text.contains("mounting it lower"));
    }

    #[test]
    fn test_tv_mounted_low_suggests_raising() {
        let params = ViewingParameters {
            tv_mount_height_m: 0.6,
            eye_height_m: 1.1,
            ..Default::default()
        };
        let text = advisory_for(&params);

        assert!(text.contains("50cm below eye level"));
        assert!(text.contains("a little higher"));
    }

    #[test]
    fn test_crowded_wall_warns() {
        let params = ViewingParameters {
            selected_size: 100,
            wall_width_m: 2.5,
            ..Default::default()
        };
        let text = advisory_for(&params);

        // 2.214 / 2.5 = 88.6%
        assert!(text.contains("89% of the wall width"));
        assert!(text.contains("cramped"));
    }

    #[test]
    fn test_roomy_wall_invites_larger_size() {
        let params = ViewingParameters {
            selected_size: 55,
            wall_width_m: 5.0,
            ..Default::default()
        };
        let text = advisory_for(&params);

        // 1.218 / 5.0 = 24.4%
        assert!(text.contains("plenty of room"));
    }

    #[test]
    fn test_clause_order_is_fixed() {
        let params = ViewingParameters {
            selected_size: 100,
            distance_m: 1.5,
            tv_mount_height_m: 1.6,
            eye_height_m: 1.1,
            wall_width_m: 2.5,
            wall_height_m: 2.7,
        };
        let text = advisory_for(&params);

        let recommendation = text.find("Based on your viewing distance").unwrap();
        let angle = text.find("too large").unwrap();
        let occupancy = text.find("of the wall width").unwrap();
        let height = text.find("above eye level").unwrap();
        assert!(recommendation < angle && angle < occupancy && occupancy < height);
    }
}
