use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use tracing::info;

use quiz_model::{AnswerValue, EditorBlock, ErrorCode, QuizDocument, ValidationError};
use quiz_score::build_result;
use quiz_transform::{TransformContext, blocks_to_dsl, dsl_to_blocks};
use quiz_validate::{ParseFailure, ParseOptions, SerializeOptions, parse, serialize};

use crate::cli::{ConvertArgs, ConvertTargetArg, GradeArgs, ReportFormatArg, ValidateArgs};

pub fn run_validate(args: &ValidateArgs) -> Result<i32> {
    let text = read_input(&args.file)?;
    let options = ParseOptions {
        validate: true,
        strict: args.strict,
    };
    match parse(&text, &options) {
        Ok(document) => {
            let questions = document.quiz.all_questions().count();
            match args.format {
                ReportFormatArg::Table => {
                    println!("{}: valid ({questions} questions)", args.file.display());
                }
                ReportFormatArg::Json => {
                    let report = serde_json::json!({"valid": true, "errors": []});
                    println!("{report}");
                }
            }
            Ok(0)
        }
        Err(ParseFailure::Invalid { errors }) => {
            match args.format {
                ReportFormatArg::Table => {
                    print_error_table(&errors);
                    eprintln!(
                        "{}: invalid ({} error(s))",
                        args.file.display(),
                        errors.len()
                    );
                }
                ReportFormatArg::Json => {
                    let report = serde_json::json!({"valid": false, "errors": errors});
                    println!("{report}");
                }
            }
            Ok(1)
        }
        Err(failure) => Err(failure).with_context(|| format!("parse {}", args.file.display())),
    }
}

pub fn run_convert(args: &ConvertArgs) -> Result<i32> {
    let text = read_input(&args.file)?;
    let output = match args.to {
        ConvertTargetArg::Blocks => {
            let document = parse_document(&text, &args.file)?;
            let blocks = dsl_to_blocks(&document, &TransformContext::new());
            info!(blocks = blocks.len(), "converted document to blocks");
            if args.pretty {
                serde_json::to_string_pretty(&blocks)
            } else {
                serde_json::to_string(&blocks)
            }
            .context("encode blocks")?
        }
        ConvertTargetArg::Dsl => {
            let blocks: Vec<EditorBlock> = serde_json::from_str(&text)
                .with_context(|| format!("parse blocks from {}", args.file.display()))?;
            let document = blocks_to_dsl(&blocks, &TransformContext::new());
            info!(blocks = blocks.len(), "converted blocks to document");
            // Rebuilt documents may carry synthesized empty section titles,
            // so encoding skips validation here.
            let options = SerializeOptions {
                validate: false,
                pretty: args.pretty,
                indent: 2,
            };
            serialize(&document, &options).context("encode document")?
        }
    };
    write_output(args.output.as_deref(), &output)
}

pub fn run_grade(args: &GradeArgs) -> Result<i32> {
    let quiz_text = read_input(&args.quiz)?;
    let document = parse_document(&quiz_text, &args.quiz)?;
    let answers_text = read_input(&args.answers)?;
    let answers: BTreeMap<String, AnswerValue> = serde_json::from_str(&answers_text)
        .with_context(|| format!("parse answers from {}", args.answers.display()))?;

    let now = Utc::now();
    let result = build_result(&document, answers, now, now);
    let encoded = if args.pretty {
        serde_json::to_string_pretty(&result)
    } else {
        serde_json::to_string(&result)
    }
    .context("encode result document")?;

    if let Some(path) = &args.output {
        fs::write(path, &encoded).with_context(|| format!("write {}", path.display()))?;
        print_grade_summary(&document, &result.scoring);
    } else {
        println!("{encoded}");
    }
    Ok(0)
}

pub fn run_codes() -> Result<i32> {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Code"), header_cell("Message")]);
    apply_table_style(&mut table);
    for code in ErrorCode::ALL {
        table.add_row(vec![Cell::new(code.as_str()), Cell::new(code.template())]);
    }
    println!("{table}");
    Ok(0)
}

fn parse_document(text: &str, path: &Path) -> Result<QuizDocument> {
    match parse(text, &ParseOptions::default()) {
        Ok(document) => Ok(document),
        Err(ParseFailure::Invalid { errors }) => {
            print_error_table(&errors);
            bail!(
                "{} failed validation with {} error(s)",
                path.display(),
                errors.len()
            );
        }
        Err(failure) => Err(failure).with_context(|| format!("parse {}", path.display())),
    }
}

fn print_error_table(errors: &[ValidationError]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Path"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    for error in errors {
        table.add_row(vec![
            Cell::new(error.code.as_str()).fg(Color::Red),
            Cell::new(&error.path),
            Cell::new(&error.message),
        ]);
    }
    println!("{table}");
}

fn print_grade_summary(document: &QuizDocument, scoring: &quiz_model::Scoring) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Question"),
        header_cell("Correct"),
        header_cell("Points"),
    ]);
    apply_table_style(&mut table);
    let texts: BTreeMap<&str, &str> = document
        .quiz
        .all_questions()
        .map(|question| (question.id(), question.text()))
        .collect();
    for result in &scoring.question_results {
        let text = texts
            .get(result.question_id.as_str())
            .copied()
            .unwrap_or(result.question_id.as_str());
        let correct_cell = if result.correct {
            Cell::new("✓").fg(Color::Green)
        } else {
            Cell::new("✗").fg(Color::Red)
        };
        table.add_row(vec![
            Cell::new(text),
            correct_cell,
            Cell::new(format!(
                "{}/{}",
                result.points_awarded, result.points_possible
            )),
        ]);
    }
    println!("{table}");
    let verdict = if scoring.passed { "PASSED" } else { "FAILED" };
    println!(
        "Score: {}/{} ({:.1}%) {verdict}",
        scoring.total_score, scoring.max_score, scoring.percentage
    );
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

fn write_output(path: Option<&Path>, content: &str) -> Result<i32> {
    match path {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("write {}", path.display()))?;
        }
        None => println!("{content}"),
    }
    Ok(0)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
