use asq_engine::config::AppConfig;
use asq_engine::error::AppError;
use asq_engine::screening::{
    age::{age_in_months, midnight_utc, precise_age_in_months, AdministrationWindow},
    format::{format_age, questionnaire_title},
    AnswerRecord, AnswerSheetImporter, AnswerValue, AsqInterval, AssessmentOutcome,
    AssessmentSubmission, CutoffTable, Domain, InterventionVideo, ScreeningEngine, VideoCatalog,
};
use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct ScreenArgs {
    /// Child's date of birth (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) dob: NaiveDate,
    /// CSV answer sheet (Question ID, Domain, Answer, optional Score)
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Questionnaire interval in months; resolved from age when omitted
    #[arg(long)]
    pub(crate) interval: Option<u8>,
    /// Identifier echoed into the outcome (defaults to the sheet file stem)
    #[arg(long)]
    pub(crate) child_id: Option<String>,
    /// Override the assessment date (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Emit the full outcome as JSON instead of the summary table
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct IntervalsArgs {
    /// Child's date of birth (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) dob: NaiveDate,
    /// Override the reference date (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the assessment date (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_screen(args: ScreenArgs, config: &AppConfig) -> Result<(), AppError> {
    let ScreenArgs {
        dob,
        answers,
        interval,
        child_id,
        today,
        json,
    } = args;

    let child_id = child_id.unwrap_or_else(|| {
        answers
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "child".to_string())
    });
    let interval = interval.map(AsqInterval::try_from).transpose()?;
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    info!(sheet = %answers.display(), %child_id, "scoring answer sheet");
    let answers = AnswerSheetImporter::from_path(&answers)?;

    let submission = AssessmentSubmission {
        child_id,
        date_of_birth: dob,
        interval,
        answers,
    };
    let engine = engine_from_config(config);
    let outcome = engine.assess(&submission, midnight_utc(today));

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        render_outcome(&outcome);
    }

    Ok(())
}

pub(crate) fn run_intervals(args: IntervalsArgs, config: &AppConfig) -> Result<(), AppError> {
    let IntervalsArgs { dob, today } = args;
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let whole_months = age_in_months(dob, today);
    let precise = precise_age_in_months(midnight_utc(dob), midnight_utc(today));
    let nearest = AsqInterval::nearest(precise);
    let next = AsqInterval::next_after(precise);
    let window = window_from_config(config);
    let available = window.available_intervals(precise);

    println!("Age: {} ({precise:.1} months)", format_age(whole_months));
    println!("Nearest questionnaire: {}", questionnaire_title(nearest));
    println!("Upcoming questionnaire: {}", questionnaire_title(next));
    if available.is_empty() {
        println!("No questionnaire is currently within its administration window.");
    } else {
        let titles: Vec<String> = available
            .iter()
            .map(|interval| questionnaire_title(*interval))
            .collect();
        println!("Administrable now: {}", titles.join(", "));
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs, config: &AppConfig) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let dob = today - chrono::Months::new(8);

    println!("ASQ-3 screening demo");
    println!(
        "Child born {dob}, screened {today} with the {}.",
        questionnaire_title(AsqInterval::Month8)
    );
    println!();

    let submission = AssessmentSubmission {
        child_id: "demo-child".to_string(),
        date_of_birth: dob,
        interval: None,
        answers: demo_answers(),
    };
    let engine = engine_from_config(config);
    let outcome = engine.assess(&submission, midnight_utc(today));
    render_outcome(&outcome);

    let catalog = demo_catalog();
    let mut recommended = false;
    for record in &outcome.domain_scores {
        for video in catalog.recommend_for(record, outcome.interval) {
            if !recommended {
                println!();
                println!("Suggested intervention videos:");
                recommended = true;
            }
            println!(
                "  {} — {} ({})",
                record.domain.display_name(),
                video.title,
                video.video_url
            );
        }
    }

    Ok(())
}

fn engine_from_config(config: &AppConfig) -> ScreeningEngine {
    ScreeningEngine::with_window(CutoffTable::published(), window_from_config(config))
}

fn window_from_config(config: &AppConfig) -> AdministrationWindow {
    AdministrationWindow {
        half_window_days: config.screening.age_window_days,
    }
}

fn render_outcome(outcome: &AssessmentOutcome) {
    println!(
        "{} — child {}",
        questionnaire_title(outcome.interval),
        outcome.child_id
    );
    println!("Age at assessment: {}", format_age(outcome.age_at_assessment));
    println!();
    println!(
        "{:<16} {:>7} {:>10} {:<20}",
        "Domain", "Score", "Cutoff", "Status"
    );
    for record in &outcome.domain_scores {
        println!(
            "{:<16} {:>3}/{:<3} {:>10} {:<20}",
            record.domain.display_name(),
            record.total_score,
            record.max_possible_score,
            record.threshold,
            record.status.label()
        );
    }
    println!();
    println!("Overall: {}", outcome.overall_status.label());
}

fn demo_answers() -> Vec<AnswerRecord> {
    let mut answers = Vec::new();
    let spread = [
        (Domain::Communication, AnswerValue::Yes),
        (Domain::GrossMotor, AnswerValue::NotYet),
        (Domain::FineMotor, AnswerValue::Sometimes),
        (Domain::ProblemSolving, AnswerValue::Yes),
        (Domain::PersonalSocial, AnswerValue::Sometimes),
    ];
    for (domain, answer) in spread {
        for index in 0..6 {
            answers.push(AnswerRecord {
                question_id: format!("{}-{index}", domain.label()),
                domain,
                answer,
                score: None,
            });
        }
    }
    answers
}

fn demo_catalog() -> VideoCatalog {
    VideoCatalog::new(vec![
        InterventionVideo {
            title: "Tummy time basics".to_string(),
            description: Some("Floor play that builds early strength".to_string()),
            video_url: "https://videos.example/tummy-time".to_string(),
            thumbnail_url: None,
            duration_seconds: Some(300),
            domain: Domain::GrossMotor,
            min_interval: AsqInterval::Month2,
            max_interval: AsqInterval::Month10,
            score_threshold: 35,
        },
        InterventionVideo {
            title: "Everyday conversation prompts".to_string(),
            description: None,
            video_url: "https://videos.example/conversation".to_string(),
            thumbnail_url: None,
            duration_seconds: Some(180),
            domain: Domain::Communication,
            min_interval: AsqInterval::Month2,
            max_interval: AsqInterval::Month24,
            score_threshold: 30,
        },
    ])
    .expect("demo catalog is valid")
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("expected YYYY-MM-DD, got '{value}'"))
}
