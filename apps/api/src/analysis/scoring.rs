//! Score Aggregator - combines section, keyword, readability and formatting
//! signals into a 0-100 composite score, letter grade and color band.

use crate::models::analysis::{CompositeScore, Grade, ScoreBreakdown, ScoreColor};

/// Scalar signals measured on a document, input to scoring and recommendations.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Signals {
    pub has_contact_info: bool,
    pub has_work_experience: bool,
    pub has_education: bool,
    pub has_skills: bool,
    pub keyword_density: f64,
    pub readability_score: f64,
    pub has_tables: bool,
    pub has_special_characters: bool,
    pub has_images: bool,
    pub word_count: usize,
}

impl Signals {
    fn sections_present(&self) -> usize {
        [
            self.has_contact_info,
            self.has_work_experience,
            self.has_education,
            self.has_skills,
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }
}

const POINTS_PER_SECTION: f64 = 10.0;
const KEYWORD_MAX_POINTS: f64 = 25.0;
/// Density at which keyword points saturate.
const KEYWORD_SATURATION: f64 = 60.0;
/// Density below which keyword points use the steeper ramp.
const KEYWORD_LOW_DENSITY: f64 = 20.0;
const TECHNICAL_BASE_POINTS: f64 = 15.0;
const TECHNICAL_PENALTY: f64 = 5.0;

pub fn section_points(signals: &Signals) -> f64 {
    signals.sections_present() as f64 * POINTS_PER_SECTION
}

pub fn keyword_points(density: f64) -> f64 {
    if density >= KEYWORD_LOW_DENSITY {
        (density * KEYWORD_MAX_POINTS / KEYWORD_SATURATION).min(KEYWORD_MAX_POINTS)
    } else {
        density * KEYWORD_MAX_POINTS / KEYWORD_LOW_DENSITY
    }
}

/// Flesch band: [30,70] 20, [20,30)|(70,80] 15, [10,20)|(80,90] 10, otherwise 5.
pub fn readability_points(score: f64) -> f64 {
    if (30.0..=70.0).contains(&score) {
        20.0
    } else if (20.0..30.0).contains(&score) || (score > 70.0 && score <= 80.0) {
        15.0
    } else if (10.0..20.0).contains(&score) || (score > 80.0 && score <= 90.0) {
        10.0
    } else {
        5.0
    }
}

pub fn technical_points(signals: &Signals) -> f64 {
    let penalties = [
        signals.has_tables,
        signals.has_special_characters,
        signals.has_images,
    ]
    .into_iter()
    .filter(|flag| *flag)
    .count();
    (TECHNICAL_BASE_POINTS - penalties as f64 * TECHNICAL_PENALTY).max(0.0)
}

pub fn composite(signals: &Signals) -> CompositeScore {
    CompositeScore {
        sections: section_points(signals),
        keywords: keyword_points(signals.keyword_density),
        readability: readability_points(signals.readability_score),
        technical: technical_points(signals),
    }
}

pub fn grade(score: f64) -> Grade {
    match score {
        s if s >= 90.0 => Grade::A,
        s if s >= 80.0 => Grade::B,
        s if s >= 70.0 => Grade::C,
        s if s >= 60.0 => Grade::D,
        _ => Grade::F,
    }
}

pub fn score_color(score: f64) -> ScoreColor {
    match score {
        s if s >= 80.0 => ScoreColor::Success,
        s if s >= 60.0 => ScoreColor::Warning,
        _ => ScoreColor::Danger,
    }
}

/// Component percentages for display: 25 per section, keywords saturating at
/// 60% density, readability as its band mapped onto 25/50/75/100.
pub fn breakdown(signals: &Signals) -> ScoreBreakdown {
    let keyword_score = if signals.keyword_density > 0.0 {
        (signals.keyword_density * 100.0 / KEYWORD_SATURATION).min(100.0)
    } else {
        0.0
    };
    ScoreBreakdown {
        section_score: signals.sections_present() as f64 * 25.0,
        keyword_score,
        readability_score: readability_points(signals.readability_score) * 5.0,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    fn complete() -> Signals {
        Signals {
            has_contact_info: true,
            has_work_experience: true,
            has_education: true,
            has_skills: true,
            keyword_density: 25.0,
            readability_score: 50.0,
            word_count: 400,
            ..Signals::default()
        }
    }

    #[test]
    fn test_reference_resume_scores_b() {
        let total = composite(&complete()).total();
        let expected = 40.0 + 25.0 * 25.0 / 60.0 + 20.0 + 15.0;
        assert!((total - expected).abs() < 1e-9, "total was {total}");
        assert!((total - 85.4167).abs() < 1e-3);
        assert_eq!(grade(total), Grade::B);
        assert_eq!(score_color(total), ScoreColor::Success);
    }

    #[test]
    fn test_no_sections_gives_zero_section_points() {
        assert_eq!(section_points(&Signals::default()), 0.0);
    }

    #[test]
    fn test_keyword_points_ramps() {
        assert_eq!(keyword_points(0.0), 0.0);
        assert_eq!(keyword_points(10.0), 12.5);
        // discontinuity at 20: low ramp would give 25, saturating ramp gives 8.33
        assert!((keyword_points(20.0) - 8.3333).abs() < 1e-3);
        assert_eq!(keyword_points(60.0), 25.0);
        assert_eq!(keyword_points(100.0), 25.0);
    }

    #[test]
    fn test_readability_bands() {
        let cases = [
            (30.0, 20.0),
            (70.0, 20.0),
            (20.0, 15.0),
            (29.99, 15.0),
            (70.01, 15.0),
            (80.0, 15.0),
            (10.0, 10.0),
            (80.5, 10.0),
            (90.0, 10.0),
            (9.99, 5.0),
            (90.01, 5.0),
            (-40.0, 5.0),
            (121.0, 5.0),
        ];
        for (score, points) in cases {
            assert_eq!(readability_points(score), points, "score {score}");
        }
        assert_eq!(readability_points(f64::NAN), 5.0);
    }

    #[test]
    fn test_technical_penalties_floor_at_zero() {
        let all_bad = Signals {
            has_tables: true,
            has_special_characters: true,
            has_images: true,
            ..Signals::default()
        };
        assert_eq!(technical_points(&all_bad), 0.0);
        let one_bad = Signals {
            has_tables: true,
            ..Signals::default()
        };
        assert_eq!(technical_points(&one_bad), 10.0);
    }

    #[test]
    fn test_grade_and_color_thresholds() {
        assert_eq!(grade(90.0), Grade::A);
        assert_eq!(grade(89.99), Grade::B);
        assert_eq!(grade(70.0), Grade::C);
        assert_eq!(grade(60.0), Grade::D);
        assert_eq!(grade(59.9), Grade::F);
        assert_eq!(score_color(80.0), ScoreColor::Success);
        assert_eq!(score_color(60.0), ScoreColor::Warning);
        assert_eq!(score_color(59.0), ScoreColor::Danger);
    }

    #[test]
    fn test_breakdown_percentages() {
        let b = breakdown(&complete());
        assert_eq!(b.section_score, 100.0);
        assert!((b.keyword_score - 41.6667).abs() < 1e-3);
        assert_eq!(b.readability_score, 100.0);
        assert_eq!(breakdown(&Signals::default()).keyword_score, 0.0);
    }

    proptest! {
        #[test]
        fn prop_composite_in_range(
            contact: bool,
            experience: bool,
            education: bool,
            skills: bool,
            tables: bool,
            special: bool,
            images: bool,
            density in 0.0f64..=100.0,
            readability in proptest::num::f64::ANY,
        ) {
            let signals = Signals {
                has_contact_info: contact,
                has_work_experience: experience,
                has_education: education,
                has_skills: skills,
                keyword_density: density,
                readability_score: readability,
                has_tables: tables,
                has_special_characters: special,
                has_images: images,
                word_count: 0,
            };
            let total = composite(&signals).total();
            prop_assert!((0.0..=100.0).contains(&total), "total was {}", total);
        }

        #[test]
        fn prop_grade_is_monotonic(a in 0.0f64..=100.0, b in 0.0f64..=100.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(grade(lo) <= grade(hi));
        }
    }
}
