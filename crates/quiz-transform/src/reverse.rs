use tracing::debug;

use quiz_model::{CURRENT_VERSION, EditorBlock, Quiz, QuizDocument, Section, keys};
use uuid::Uuid;

use crate::TransformContext;
use crate::markdown::rich_to_markdown;

/// Rebuild a quiz document from the flat editor block sequence.
///
/// The quiz title is the first level-1 header; a paragraph at the position
/// immediately after it becomes the quiz description. Every level-2 header
/// opens a new section; the first paragraph inside a section becomes its
/// description (later ones are dropped, matching the forward transform's
/// single-paragraph emission). Question blocks with no open section get a
/// synthesized section with an empty title, shared by the questions that
/// follow. Unrecognized block kinds are skipped. The output always uses
/// the `sections` form, so legacy flat documents normalize one-way.
///
/// Quiz and section ids are freshly generated; they are not part of the
/// round-trip contract.
pub fn blocks_to_dsl(blocks: &[EditorBlock], context: &TransformContext) -> QuizDocument {
    if blocks.is_empty() {
        return minimal_document(context);
    }

    let mut title_index = None;
    let mut description_index = None;
    let mut title = None;
    let mut description = None;
    for (index, block) in blocks.iter().enumerate() {
        if let EditorBlock::Header { text, level: 1 } = block {
            title_index = Some(index);
            title = Some(rich_to_markdown(text));
            if let Some(EditorBlock::Paragraph { text }) = blocks.get(index + 1) {
                description_index = Some(index + 1);
                description = Some(rich_to_markdown(text));
            }
            break;
        }
    }

    let mut sections: Vec<Section> = Vec::new();
    let mut current: Option<Section> = None;
    for (index, block) in blocks.iter().enumerate() {
        if Some(index) == title_index || Some(index) == description_index {
            continue;
        }
        match block {
            EditorBlock::Header { text, level: 2 } => {
                if let Some(section) = current.take() {
                    sections.push(section);
                }
                current = Some(Section {
                    id: generated_id(),
                    title: rich_to_markdown(text),
                    description: None,
                    questions: Vec::new(),
                });
            }
            EditorBlock::Header { .. } => {}
            EditorBlock::Paragraph { text } => {
                // First paragraph wins as the section description; later
                // ones are dropped. Known round-trip lossiness boundary.
                if let Some(section) = current.as_mut()
                    && section.description.is_none()
                {
                    section.description = Some(rich_to_markdown(text));
                }
            }
            EditorBlock::Question(question) => {
                let section = current.get_or_insert_with(|| Section {
                    id: generated_id(),
                    title: String::new(),
                    description: None,
                    questions: Vec::new(),
                });
                section.questions.push(question.clone());
            }
            EditorBlock::Unknown { .. } => {}
        }
    }
    if let Some(section) = current.take() {
        sections.push(section);
    }

    debug!(sections = sections.len(), "rebuilt quiz document");
    QuizDocument {
        version: CURRENT_VERSION.to_string(),
        quiz: Quiz {
            id: generated_id(),
            title: title.unwrap_or_else(|| context.placeholder(keys::QUIZ_DEFAULT_TITLE)),
            description,
            metadata: None,
            settings: None,
            sections: Some(sections),
            questions: None,
        },
    }
}

fn minimal_document(context: &TransformContext) -> QuizDocument {
    QuizDocument {
        version: CURRENT_VERSION.to_string(),
        quiz: Quiz {
            id: generated_id(),
            title: context.placeholder(keys::QUIZ_DEFAULT_TITLE),
            description: None,
            metadata: None,
            settings: None,
            sections: Some(Vec::new()),
            questions: None,
        },
    }
}

fn generated_id() -> String {
    Uuid::new_v4().to_string()
}
