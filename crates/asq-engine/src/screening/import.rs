//! CSV import of a completed answer sheet.
//!
//! The portal's form collaborator exports one row per answered question with
//! the wire labels used throughout the question bank. A blank `Score` column
//! means the fixed answer map applies.

use super::domain::{AnswerRecord, LabelParseError};
use serde::{Deserialize, Deserializer};
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum AnswerImportError {
    #[error("failed to read answer sheet: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid answer sheet CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("answer sheet record {record}: {source}")]
    Label {
        record: usize,
        source: LabelParseError,
    },
    #[error("answer sheet record {record}: invalid score '{value}'")]
    Score { record: usize, value: String },
}

pub struct AnswerSheetImporter;

impl AnswerSheetImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<AnswerRecord>, AnswerImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<AnswerRecord>, AnswerImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for (index, row) in csv_reader.deserialize::<AnswerRow>().enumerate() {
            let record = index + 1;
            let row = row?;
            let domain = row
                .domain
                .parse()
                .map_err(|source| AnswerImportError::Label { record, source })?;
            let answer = row
                .answer
                .parse()
                .map_err(|source| AnswerImportError::Label { record, source })?;
            let score = match row.score {
                Some(value) => Some(value.parse::<u32>().map_err(|_| {
                    AnswerImportError::Score {
                        record,
                        value: value.clone(),
                    }
                })?),
                None => None,
            };

            records.push(AnswerRecord {
                question_id: row.question_id,
                domain,
                answer,
                score,
            });
        }

        Ok(records)
    }
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    #[serde(rename = "Question ID")]
    question_id: String,
    #[serde(rename = "Domain")]
    domain: String,
    #[serde(rename = "Answer")]
    answer: String,
    #[serde(rename = "Score", default, deserialize_with = "empty_string_as_none")]
    score: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screening::domain::{AnswerValue, Domain};
    use std::io::Cursor;

    const SHEET: &str = "\
Question ID,Domain,Answer,Score
c-1,COMMUNICATION,YES,
c-2,COMMUNICATION,SOMETIMES,
gm-1,GROSS_MOTOR,NOT_YET,5
";

    #[test]
    fn imports_rows_with_and_without_overrides() {
        let records =
            AnswerSheetImporter::from_reader(Cursor::new(SHEET)).expect("sheet imports");
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].domain, Domain::Communication);
        assert_eq!(records[0].answer, AnswerValue::Yes);
        assert_eq!(records[0].score, None);
        assert_eq!(records[2].domain, Domain::GrossMotor);
        assert_eq!(records[2].score, Some(5));
    }

    #[test]
    fn rejects_unknown_domain_labels() {
        let sheet = "Question ID,Domain,Answer,Score\nq-1,SPEECH,YES,\n";
        let err = AnswerSheetImporter::from_reader(Cursor::new(sheet))
            .expect_err("unknown domain rejected");
        match err {
            AnswerImportError::Label { record: 1, source } => {
                assert_eq!(source, LabelParseError::Domain("SPEECH".to_string()));
            }
            other => panic!("expected label error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_answer_labels() {
        let sheet = "Question ID,Domain,Answer,Score\nq-1,COMMUNICATION,MAYBE,\n";
        let err = AnswerSheetImporter::from_reader(Cursor::new(sheet))
            .expect_err("unknown answer rejected");
        assert!(matches!(err, AnswerImportError::Label { record: 1, .. }));
    }

    #[test]
    fn rejects_non_numeric_scores() {
        let sheet = "Question ID,Domain,Answer,Score\nq-1,COMMUNICATION,YES,ten\n";
        let err = AnswerSheetImporter::from_reader(Cursor::new(sheet))
            .expect_err("bad score rejected");
        match err {
            AnswerImportError::Score { record: 1, value } => assert_eq!(value, "ten"),
            other => panic!("expected score error, got {other:?}"),
        }
    }
}
