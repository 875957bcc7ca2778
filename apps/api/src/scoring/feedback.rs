//! Aggregate feedback: turns a finished interview into a report.
//!
//! Overall score is the rounded mean of the per-response sub-scores. The
//! unrounded mean drives every threshold below (suggestions, the fallback
//! weakness and the narrative cascade).

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::Domain;
use crate::models::interview::Response;
use crate::scoring::analyzer::{analyze, ResponseAnalysis};
use crate::scoring::ScoringError;

const DETAILED_AVG_LENGTH: f64 = 150.0;
const BRIEF_AVG_LENGTH: f64 = 50.0;
const GENERIC_SUGGESTIONS_BELOW: f64 = 70.0;
const MINOR_WEAKNESS_BELOW: f64 = 90.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackReport {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
    pub overall_impression: String,
    pub score: u32, // 0 – 100
}

/// Interview-wide traits, each the logical OR over all analyses.
#[derive(Debug, Clone, Copy)]
struct InterviewTraits {
    any_technical: bool,
    any_structured: bool,
    any_examples: bool,
    any_irrelevant: bool,
    any_blank: bool,
    avg_length: f64,
}

impl InterviewTraits {
    fn collect(responses: &[Response], analyses: &[ResponseAnalysis]) -> Self {
        let total_len: usize = responses.iter().map(|r| r.answer.chars().count()).sum();
        Self {
            any_technical: analyses.iter().any(|a| a.has_technical_terms),
            any_structured: analyses.iter().any(|a| a.is_structured),
            any_examples: analyses.iter().any(|a| a.has_examples),
            any_irrelevant: analyses.iter().any(|a| a.is_irrelevant),
            any_blank: analyses.iter().any(|a| a.is_blank),
            avg_length: total_len as f64 / responses.len() as f64,
        }
    }
}

/// Scores a full interview. Fails with `EmptyInterview` when `responses` is empty.
pub fn synthesize<R: Rng>(
    responses: &[Response],
    domain: Domain,
    rng: &mut R,
) -> Result<FeedbackReport, ScoringError> {
    if responses.is_empty() {
        return Err(ScoringError::EmptyInterview);
    }

    let analyses: Vec<ResponseAnalysis> = responses
        .iter()
        .map(|r| analyze(r, domain, rng))
        .collect();

    for (i, a) in analyses.iter().enumerate() {
        debug!(
            "response {i}: score={:.1} blank={} irrelevant={} technical={} structured={} examples={}",
            a.score, a.is_blank, a.is_irrelevant, a.has_technical_terms, a.is_structured, a.has_examples
        );
    }

    let mean = analyses.iter().map(|a| a.score).sum::<f64>() / analyses.len() as f64;
    let traits = InterviewTraits::collect(responses, &analyses);

    let strengths = build_strengths(&traits);
    let (weaknesses, suggestions) = build_weaknesses(&traits, mean, domain);

    Ok(FeedbackReport {
        strengths,
        weaknesses,
        suggestions,
        overall_impression: overall_impression(mean, domain, &traits),
        score: mean.round() as u32,
    })
}

fn build_strengths(traits: &InterviewTraits) -> Vec<String> {
    let mut strengths = Vec::new();
    if traits.any_technical {
        strengths.push("Demonstrates solid technical knowledge with appropriate terminology".to_string());
    }
    if traits.any_structured {
        strengths.push("Provides well-organized and logical responses".to_string());
    }
    if traits.any_examples {
        strengths.push("Uses concrete examples to support explanations".to_string());
    }
    if traits.avg_length > DETAILED_AVG_LENGTH {
        strengths.push("Gives comprehensive and detailed answers".to_string());
    }
    if strengths.is_empty() {
        strengths.push("Shows willingness to participate in the interview process".to_string());
    }
    strengths
}

fn build_weaknesses(
    traits: &InterviewTraits,
    mean: f64,
    domain: Domain,
) -> (Vec<String>, Vec<String>) {
    let mut weaknesses = Vec::new();
    let mut suggestions = Vec::new();

    if traits.any_blank {
        weaknesses.push("Some responses were left blank or contained minimal content".to_string());
        suggestions.push(
            "Ensure you provide substantive answers to all questions, even if you're unsure"
                .to_string(),
        );
    }
    if traits.any_irrelevant {
        weaknesses.push("Some answers did not directly address the questions asked".to_string());
        suggestions.push(
            "Read questions carefully and ensure your responses stay focused on what's being asked"
                .to_string(),
        );
    }
    if !traits.any_technical {
        weaknesses.push("Responses lack technical depth and domain-specific terminology".to_string());
        suggestions.push(format!(
            "Review fundamental {domain} concepts and practice using technical vocabulary"
        ));
    }
    if traits.avg_length < BRIEF_AVG_LENGTH {
        weaknesses.push("Responses are too brief and lack sufficient detail".to_string());
        suggestions
            .push("Elaborate on your points with explanations, examples, and reasoning".to_string());
    }

    if mean < GENERIC_SUGGESTIONS_BELOW {
        suggestions
            .push("Practice mock interviews to improve response quality and confidence".to_string());
        suggestions.push(
            "Prepare specific examples from your coursework and projects beforehand".to_string(),
        );
    }

    if weaknesses.is_empty() && mean < MINOR_WEAKNESS_BELOW {
        weaknesses.push(
            "Minor improvements in response depth and technical detail would be beneficial"
                .to_string(),
        );
    }

    (weaknesses, suggestions)
}

fn overall_impression(mean: f64, domain: Domain, traits: &InterviewTraits) -> String {
    if traits.any_blank {
        return "Your interview performance needs significant improvement. Several questions were \
                left unanswered or had minimal responses. In a real interview, this would be \
                concerning to employers. Please ensure you provide substantive answers to all \
                questions, even if you need to think through your response."
            .to_string();
    }

    if traits.any_irrelevant {
        return format!(
            "Your responses did not consistently address the questions asked. In interviews, \
             it's crucial to listen carefully and provide relevant answers. Practice active \
             listening and ensure your responses directly relate to what the interviewer is \
             asking about {domain}."
        );
    }

    match mean {
        s if s >= 85.0 => format!(
            "Excellent interview performance! You demonstrated strong technical knowledge in \
             {domain}, provided well-structured responses, and communicated clearly. Your \
             answers show both depth of understanding and practical application. You're \
             well-prepared for real interviews."
        ),
        s if s >= 70.0 => format!(
            "Good interview performance with solid technical foundation in {domain}. Your \
             responses show understanding of key concepts, though there's room for improvement \
             in providing more detailed examples and technical depth. With some additional \
             practice, you'll be very competitive."
        ),
        s if s >= 50.0 => format!(
            "Your interview shows basic understanding but needs improvement in several areas. \
             Focus on providing more detailed, technically accurate responses with concrete \
             examples. Review fundamental {domain} concepts and practice articulating your \
             knowledge more clearly."
        ),
        _ => format!(
            "Your interview performance indicates significant preparation is needed. The \
             responses lacked technical depth and clarity expected for {domain} positions. \
             Consider reviewing core concepts, practicing with mock interviews, and working on \
             communication skills before real interviews."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    const STACK_Q: &str = "Explain the difference between a stack and a queue data structure.";
    const CACHE_Q: &str = "Which algorithm would you pick for caching lookups?";
    const PERFECT: &str = "For example, using a hash map gives O(1) lookup, such as in caching \
                           systems, because amortized cost is constant. Therefore this algorithm \
                           scales well.";

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(1234)
    }

    fn traits() -> InterviewTraits {
        InterviewTraits {
            any_technical: true,
            any_structured: true,
            any_examples: true,
            any_irrelevant: false,
            any_blank: false,
            avg_length: 120.0,
        }
    }

    #[test]
    fn test_empty_interview_is_rejected() {
        let err = synthesize(&[], Domain::ComputerScience, &mut rng()).unwrap_err();
        assert!(matches!(err, ScoringError::EmptyInterview));
    }

    #[test]
    fn test_score_is_rounded_mean_of_sub_scores() {
        let responses = vec![
            Response::new(STACK_Q, "A stack pops newest items"),
            Response::new(STACK_Q, "A stack is a data structure"),
            Response::new(CACHE_Q, "random guess"),
        ];
        let report = synthesize(&responses, Domain::ComputerScience, &mut rng()).unwrap();

        let mut replay = rng();
        let mean = responses
            .iter()
            .map(|r| analyze(r, Domain::ComputerScience, &mut replay).score)
            .sum::<f64>()
            / 3.0;
        assert_eq!(report.score, mean.round() as u32);
    }

    #[test]
    fn test_blank_interview_scores_40_and_uses_blank_narrative() {
        // Sub-scores {0, 100, 40}: mean 46.7, blank narrative still wins.
        let responses = vec![
            Response::new("Explain Big O notation", "idk"),
            Response::new(CACHE_Q, PERFECT),
            Response::new(STACK_Q, "A stack pops newest items"),
        ];
        let analyses: Vec<_> = responses
            .iter()
            .map(|r| analyze(r, Domain::ComputerScience, &mut rng()).score)
            .collect();
        assert_eq!(analyses, vec![0.0, 100.0, 40.0]);

        let report = synthesize(&responses, Domain::ComputerScience, &mut rng()).unwrap();
        assert_eq!(report.score, 47);
        assert!(report.overall_impression.starts_with("Your interview performance needs significant improvement"));
        assert!(report
            .weaknesses
            .contains(&"Some responses were left blank or contained minimal content".to_string()));
    }

    #[test]
    fn test_single_blank_answer_scores_zero() {
        let report = synthesize(
            &[Response::new("Explain Big O notation", "idk")],
            Domain::ComputerScience,
            &mut rng(),
        )
        .unwrap();
        assert_eq!(report.score, 0);
        assert_eq!(
            report.strengths,
            vec!["Shows willingness to participate in the interview process"]
        );
        // blank, no technical, brief → 3 weaknesses; 3 matching + 2 generic suggestions
        assert_eq!(report.weaknesses.len(), 3);
        assert_eq!(report.suggestions.len(), 5);
        assert!(report
            .suggestions
            .contains(&"Review fundamental Computer Science concepts and practice using technical vocabulary".to_string()));
    }

    #[test]
    fn test_perfect_interview_has_no_weaknesses() {
        let responses = vec![Response::new(CACHE_Q, PERFECT)];
        let report = synthesize(&responses, Domain::ComputerScience, &mut rng()).unwrap();
        assert_eq!(report.score, 100);
        assert!(report.weaknesses.is_empty());
        assert!(report.suggestions.is_empty());
        assert_eq!(report.strengths.len(), 3);
        assert!(report.overall_impression.starts_with("Excellent interview performance!"));
        assert!(report.overall_impression.contains("Computer Science"));
    }

    #[test]
    fn test_irrelevant_answers_use_irrelevant_narrative() {
        let responses = vec![
            Response::new(CACHE_Q, PERFECT),
            Response::new(CACHE_Q, "whatever, I don't know anything about this"),
        ];
        let report = synthesize(&responses, Domain::ComputerScience, &mut rng()).unwrap();
        assert!(report.overall_impression.starts_with("Your responses did not consistently"));
        assert!(report
            .weaknesses
            .contains(&"Some answers did not directly address the questions asked".to_string()));
    }

    #[test]
    fn test_strengths_fire_in_fixed_order() {
        let strengths = build_strengths(&InterviewTraits {
            avg_length: 200.0,
            ..traits()
        });
        assert_eq!(
            strengths,
            vec![
                "Demonstrates solid technical knowledge with appropriate terminology",
                "Provides well-organized and logical responses",
                "Uses concrete examples to support explanations",
                "Gives comprehensive and detailed answers",
            ]
        );
    }

    #[test]
    fn test_generic_suggestions_below_70_even_without_weaknesses() {
        let (weaknesses, suggestions) = build_weaknesses(&traits(), 65.0, Domain::CivilEngineering);
        assert_eq!(weaknesses.len(), 1); // minor-improvement fallback
        assert_eq!(suggestions.len(), 2);
        assert!(suggestions[0].starts_with("Practice mock interviews"));
    }

    #[test]
    fn test_minor_weakness_only_below_90() {
        let (w_high, _) = build_weaknesses(&traits(), 92.0, Domain::ComputerScience);
        assert!(w_high.is_empty());
        let (w_mid, _) = build_weaknesses(&traits(), 89.5, Domain::ComputerScience);
        assert_eq!(
            w_mid,
            vec!["Minor improvements in response depth and technical detail would be beneficial"]
        );
    }

    #[test]
    fn test_missing_technical_suggestion_names_domain() {
        let t = InterviewTraits {
            any_technical: false,
            ..traits()
        };
        let (_, suggestions) = build_weaknesses(&t, 80.0, Domain::AerospaceEngineering);
        assert_eq!(
            suggestions,
            vec!["Review fundamental Aerospace Engineering concepts and practice using technical vocabulary"]
        );
    }

    #[test]
    fn test_impression_cascade_by_score() {
        let t = traits();
        let d = Domain::MechanicalEngineering;
        assert!(overall_impression(85.0, d, &t).starts_with("Excellent"));
        assert!(overall_impression(84.9, d, &t).starts_with("Good interview performance"));
        assert!(overall_impression(70.0, d, &t).starts_with("Good interview performance"));
        assert!(overall_impression(50.0, d, &t).starts_with("Your interview shows basic understanding"));
        assert!(overall_impression(49.9, d, &t).starts_with("Your interview performance indicates"));
        assert!(overall_impression(10.0, d, &t).contains("Mechanical Engineering positions"));
    }

    #[test]
    fn test_blank_beats_irrelevant_in_cascade() {
        let t = InterviewTraits {
            any_blank: true,
            any_irrelevant: true,
            ..traits()
        };
        assert!(overall_impression(95.0, Domain::ComputerScience, &t)
            .starts_with("Your interview performance needs significant improvement"));
    }

    #[test]
    fn test_feedback_never_empty_below_90() {
        let cases = [
            vec![Response::new(STACK_Q, "A stack pops newest items")],
            vec![Response::new(STACK_Q, "A stack is a data structure")],
            vec![Response::new(CACHE_Q, "   ")],
        ];
        for responses in cases {
            let report = synthesize(&responses, Domain::ComputerScience, &mut rng()).unwrap();
            assert!(report.score < 90);
            assert!(!report.strengths.is_empty());
            assert!(!report.weaknesses.is_empty());
        }
    }

    #[test]
    fn test_detailed_strength_needs_average_above_150() {
        let detailed = "Gives comprehensive and detailed answers".to_string();
        let at = build_strengths(&InterviewTraits {
            avg_length: 150.0,
            ..traits()
        });
        assert!(!at.contains(&detailed));
        let above = build_strengths(&InterviewTraits {
            avg_length: 150.5,
            ..traits()
        });
        assert!(above.contains(&detailed));

        assert_eq!(PERFECT.chars().count(), 150);
        let report = synthesize(&[Response::new(CACHE_Q, PERFECT)], Domain::ComputerScience, &mut rng())
            .unwrap();
        assert!(!report.strengths.contains(&detailed));
    }

    #[test]
    fn test_brief_weakness_needs_average_below_50() {
        let brief = "Responses are too brief and lack sufficient detail".to_string();
        let (at, _) = build_weaknesses(
            &InterviewTraits {
                avg_length: 50.0,
                ..traits()
            },
            95.0,
            Domain::ComputerScience,
        );
        assert!(!at.contains(&brief));
        let (below, _) = build_weaknesses(
            &InterviewTraits {
                avg_length: 49.5,
                ..traits()
            },
            95.0,
            Domain::ComputerScience,
        );
        assert!(below.contains(&brief));
    }

    #[test]
    fn test_mean_of_exactly_70_gets_no_generic_suggestions() {
        let responses = vec![
            Response::new(STACK_Q, "A stack pops newest items"),
            Response::new(CACHE_Q, PERFECT),
        ];
        let report = synthesize(&responses, Domain::ComputerScience, &mut rng()).unwrap();
        assert_eq!(report.score, 70);
        assert!(report.suggestions.is_empty());
        assert_eq!(
            report.weaknesses,
            vec!["Minor improvements in response depth and technical detail would be beneficial"]
        );
        assert!(report.overall_impression.starts_with("Good interview performance"));
    }

    #[test]
    fn test_mean_of_exactly_90_gets_no_minor_weakness() {
        let responses = vec![
            Response::new(CACHE_Q, PERFECT),
            Response::new(STACK_Q, "A data structure project"),
        ];
        let scores: Vec<f64> = responses
            .iter()
            .map(|r| analyze(r, Domain::ComputerScience, &mut rng()).score)
            .collect();
        assert_eq!(scores, vec![100.0, 80.0]);

        let report = synthesize(&responses, Domain::ComputerScience, &mut rng()).unwrap();
        assert_eq!(report.score, 90);
        assert!(report.weaknesses.is_empty());
        assert!(report.suggestions.is_empty());
    }
}
