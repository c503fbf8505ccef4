//! End-to-end specifications for the screening workflow: import an answer
//! sheet, score it, classify it, and surface intervention content.

use asq_engine::screening::{
    age::midnight_utc, AnswerRecord, AnswerSheetImporter, AnswerValue, AsqInterval,
    AssessmentSubmission, CutoffTable, DevelopmentStatus, Domain, InterventionVideo,
    ScreeningEngine, ThresholdSource, VideoCatalog, DEFAULT_THRESHOLDS,
};
use chrono::NaiveDate;
use std::io::Cursor;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn uniform_answers(domain: Domain, answer: AnswerValue, count: usize) -> Vec<AnswerRecord> {
    (0..count)
        .map(|index| AnswerRecord {
            question_id: format!("{}-{index}", domain.label()),
            domain,
            answer,
            score: None,
        })
        .collect()
}

/// A child born exactly eight months before the reference date, answering all
/// six communication questions YES, lands comfortably above the 8-month
/// cutoff of 17.12.
#[test]
fn eight_month_old_with_perfect_communication_is_on_track() {
    let engine = ScreeningEngine::default();
    let submission = AssessmentSubmission {
        child_id: "child-8mo".to_string(),
        date_of_birth: date(2025, 3, 1),
        interval: None,
        answers: uniform_answers(Domain::Communication, AnswerValue::Yes, 6),
    };

    let outcome = engine.assess(&submission, midnight_utc(date(2025, 11, 1)));

    assert_eq!(outcome.interval, AsqInterval::Month8);
    assert_eq!(outcome.age_at_assessment, 8);
    let communication = &outcome.domain_scores[0];
    assert_eq!(communication.total_score, 60);
    assert_eq!(communication.max_possible_score, 60);
    assert_eq!(communication.threshold, 17);
    assert!(!communication.needs_intervention);
    assert_eq!(communication.status, DevelopmentStatus::OnTrack);
    assert_eq!(outcome.overall_status, DevelopmentStatus::OnTrack);
}

#[test]
fn eight_month_old_with_no_skills_yet_needs_intervention() {
    let engine = ScreeningEngine::default();
    let submission = AssessmentSubmission {
        child_id: "child-8mo".to_string(),
        date_of_birth: date(2025, 3, 1),
        interval: Some(AsqInterval::Month8),
        answers: uniform_answers(Domain::Communication, AnswerValue::NotYet, 6),
    };

    let outcome = engine.assess(&submission, midnight_utc(date(2025, 11, 1)));

    let communication = &outcome.domain_scores[0];
    assert_eq!(communication.total_score, 0);
    assert!(communication.needs_intervention);
    assert_eq!(communication.status, DevelopmentStatus::NeedsIntervention);
    assert_eq!(outcome.overall_status, DevelopmentStatus::NeedsMonitoring);
}

#[test]
fn full_questionnaire_scores_every_answered_domain() {
    let engine = ScreeningEngine::default();
    let mut answers = Vec::new();
    answers.extend(uniform_answers(Domain::Communication, AnswerValue::Yes, 6));
    answers.extend(uniform_answers(Domain::GrossMotor, AnswerValue::NotYet, 6));
    answers.extend(uniform_answers(Domain::FineMotor, AnswerValue::NotYet, 6));
    answers.extend(uniform_answers(Domain::ProblemSolving, AnswerValue::NotYet, 6));
    answers.extend(uniform_answers(Domain::PersonalSocial, AnswerValue::Sometimes, 6));

    let submission = AssessmentSubmission {
        child_id: "child-full".to_string(),
        date_of_birth: date(2025, 1, 15),
        interval: Some(AsqInterval::Month8),
        answers,
    };

    let outcome = engine.assess(&submission, midnight_utc(date(2025, 9, 15)));

    assert_eq!(outcome.domain_scores.len(), 5);
    let flagged: Vec<Domain> = outcome
        .domain_scores
        .iter()
        .filter(|record| record.needs_intervention)
        .map(|record| record.domain)
        .collect();
    // Gross motor, fine motor, and problem solving all scored zero; the
    // 30-point personal-social total clears its 20.06 cutoff.
    assert_eq!(
        flagged,
        vec![Domain::GrossMotor, Domain::FineMotor, Domain::ProblemSolving]
    );
    assert_eq!(outcome.overall_status, DevelopmentStatus::NeedsIntervention);
}

#[test]
fn uncurated_intervals_classify_against_the_flat_default() {
    let table = CutoffTable::published();
    for domain in Domain::ALL {
        let (thresholds, source) = table.lookup(AsqInterval::Month18, domain);
        assert_eq!(source, ThresholdSource::Default);
        assert_eq!(thresholds, DEFAULT_THRESHOLDS);
    }

    let engine = ScreeningEngine::default();
    let submission = AssessmentSubmission {
        child_id: "child-18mo".to_string(),
        date_of_birth: date(2024, 3, 15),
        interval: None,
        answers: uniform_answers(Domain::ProblemSolving, AnswerValue::Sometimes, 6),
    };

    let outcome = engine.assess(&submission, midnight_utc(date(2025, 9, 15)));

    assert_eq!(outcome.interval, AsqInterval::Month18);
    let problem_solving = &outcome.domain_scores[0];
    assert_eq!(problem_solving.threshold, 20);
    // 30 sits exactly on the default monitoring bound.
    assert_eq!(problem_solving.status, DevelopmentStatus::NeedsMonitoring);
}

#[test]
fn imported_sheet_flows_through_to_an_outcome() {
    let sheet = "\
Question ID,Domain,Answer,Score
c-1,COMMUNICATION,YES,
c-2,COMMUNICATION,YES,
c-3,COMMUNICATION,SOMETIMES,
gm-1,GROSS_MOTOR,NOT_YET,
gm-2,GROSS_MOTOR,NOT_YET,8
";
    let answers = AnswerSheetImporter::from_reader(Cursor::new(sheet)).expect("sheet imports");
    let submission = AssessmentSubmission {
        child_id: "child-csv".to_string(),
        date_of_birth: date(2025, 5, 2),
        interval: Some(AsqInterval::Month4),
        answers,
    };

    let outcome =
        ScreeningEngine::default().assess(&submission, midnight_utc(date(2025, 9, 2)));

    assert_eq!(outcome.domain_scores.len(), 2);
    assert_eq!(outcome.domain_scores[0].total_score, 25);
    // The explicit override contributes 8 in place of the NOT_YET zero.
    assert_eq!(outcome.domain_scores[1].total_score, 8);
    // 4-month gross motor cutoff is 19.04.
    assert!(outcome.domain_scores[1].needs_intervention);
}

#[test]
fn flagged_domains_surface_matching_intervention_videos() {
    let catalog = VideoCatalog::new(vec![
        InterventionVideo {
            title: "Tummy time basics".to_string(),
            description: Some("Floor play to build early strength".to_string()),
            video_url: "https://videos.example/tummy-time".to_string(),
            thumbnail_url: None,
            duration_seconds: Some(300),
            domain: Domain::GrossMotor,
            min_interval: AsqInterval::Month2,
            max_interval: AsqInterval::Month9,
            score_threshold: 35,
        },
        InterventionVideo {
            title: "Toddler balance games".to_string(),
            description: None,
            video_url: "https://videos.example/balance".to_string(),
            thumbnail_url: None,
            duration_seconds: None,
            domain: Domain::GrossMotor,
            min_interval: AsqInterval::Month18,
            max_interval: AsqInterval::Month36,
            score_threshold: 35,
        },
    ])
    .expect("catalog builds");

    let engine = ScreeningEngine::default();
    let submission = AssessmentSubmission {
        child_id: "child-videos".to_string(),
        date_of_birth: date(2025, 1, 15),
        interval: Some(AsqInterval::Month8),
        answers: uniform_answers(Domain::GrossMotor, AnswerValue::NotYet, 6),
    };
    let outcome = engine.assess(&submission, midnight_utc(date(2025, 9, 15)));

    let gross_motor = &outcome.domain_scores[0];
    let recommended = catalog.recommend_for(gross_motor, outcome.interval);
    assert_eq!(recommended.len(), 1);
    assert_eq!(recommended[0].title, "Tummy time basics");
}
