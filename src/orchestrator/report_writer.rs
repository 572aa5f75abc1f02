//! 批处理报告输出：JSON 与 CSV

use std::path::Path;

use crate::error::{AppResult, GeneratorError};
use crate::orchestrator::batch_processor::BatchReport;
use crate::utils::truncate_text;

/// CSV 表头
pub const CSV_HEADERS: [&str; 6] = [
    "Paragraph_ID",
    "Original_Text",
    "Question_Type",
    "Question",
    "Options",
    "Answer",
];

/// CSV 中原文预览的最大字符数
const TEXT_PREVIEW_CHARS: usize = 100;

/// 保存为格式化的 JSON
pub fn save_to_json(report: &BatchReport, path: &Path) -> AppResult<()> {
    let display = path.display().to_string();
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| GeneratorError::file_write_failed(&display, e))?;
    std::fs::write(path, json).map_err(|e| GeneratorError::file_write_failed(&display, e))?;
    Ok(())
}

/// 保存为 CSV，每道题一行（关键短语不输出）
pub fn save_to_csv(report: &BatchReport, path: &Path) -> AppResult<()> {
    let display = path.display().to_string();
    let mut writer =
        csv::Writer::from_path(path).map_err(|e| GeneratorError::file_write_failed(&display, e))?;

    writer
        .write_record(CSV_HEADERS)
        .map_err(|e| GeneratorError::file_write_failed(&display, e))?;

    for (id, paragraph) in &report.paragraphs {
        let text = truncate_text(&paragraph.text, TEXT_PREVIEW_CHARS);

        for (category, records) in paragraph.questions.iter() {
            for record in records {
                let options = record
                    .options()
                    .map(|options| options.join(" | "))
                    .unwrap_or_default();
                let answer = record.answer().unwrap_or_default();

                writer
                    .write_record([
                        id.as_str(),
                        text.as_str(),
                        category.name(),
                        record.question.as_str(),
                        options.as_str(),
                        answer,
                    ])
                    .map_err(|e| GeneratorError::file_write_failed(&display, e))?;
            }
        }
    }

    writer
        .flush()
        .map_err(|e| GeneratorError::file_write_failed(&display, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        GenerationResult, KeyPhrase, QuestionCategory, QuestionKind, QuestionRecord,
    };
    use crate::orchestrator::batch_processor::ParagraphReport;

    fn sample_report() -> BatchReport {
        let mut questions = GenerationResult::new(vec![KeyPhrase::new("radium").unwrap()]);
        questions.insert(
            QuestionCategory::Factual,
            vec![QuestionRecord::new(QuestionKind::Factual, "What is radium?", 1)],
        );
        questions.insert(
            QuestionCategory::MultipleChoice,
            vec![QuestionRecord::new(
                QuestionKind::MultipleChoice {
                    options: vec!["Wrong one.".to_string(), "Right one.".to_string()],
                    correct_answer_index: 1,
                },
                "Which of the following best describes radium?",
                3,
            )],
        );
        questions.insert(
            QuestionCategory::FillBlank,
            vec![QuestionRecord::new(
                QuestionKind::FillBlank {
                    answer: "radium".to_string(),
                },
                "Marie Curie discovered ___________ in 1898.",
                2,
            )],
        );

        BatchReport {
            paragraphs: vec![(
                "Paragraph_1".to_string(),
                ParagraphReport {
                    text: "x".repeat(120),
                    questions,
                },
            )],
            total: 1,
            success: 1,
            ..Default::default()
        }
    }

    #[test]
    fn test_csv_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        save_to_csv(&sample_report(), &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(reader.headers().unwrap(), CSV_HEADERS.as_slice());

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);

        let preview = format!("{}...", "x".repeat(100));
        assert!(rows.iter().all(|row| &row[1] == preview.as_str()));

        assert_eq!(&rows[0][2], "Factual Questions");
        assert_eq!(&rows[0][4], "");
        assert_eq!(&rows[0][5], "");

        assert_eq!(&rows[1][2], "Multiple Choice Questions");
        assert_eq!(&rows[1][4], "Wrong one. | Right one.");
        assert_eq!(&rows[1][5], "Right one.");

        assert_eq!(&rows[2][2], "Fill in the Blank Questions");
        assert_eq!(&rows[2][5], "radium");
    }

    #[test]
    fn test_json_keyed_by_paragraph() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        save_to_json(&sample_report(), &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let paragraph = &value["Paragraph_1"];
        assert_eq!(paragraph["text"].as_str().unwrap().len(), 120);
        assert_eq!(
            paragraph["questions"]["Key Phrases Identified"],
            serde_json::json!(["radium"])
        );
        assert_eq!(
            paragraph["questions"]["Multiple Choice Questions"][0]["correct_answer_index"],
            1
        );
    }
}
