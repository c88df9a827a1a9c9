use tracing::debug;

use quiz_model::{EditorBlock, QuizDocument, keys};

use crate::TransformContext;
use crate::markdown::markdown_to_rich;

/// Flatten a quiz document into the ordered editor block sequence.
///
/// Emission order: one level-1 header (quiz title), an optional description
/// paragraph, then per section a level-2 header, optional description
/// paragraph and that section's question blocks. The legacy flat
/// `questions` form emits question blocks with no section headers at all.
///
/// Title fallbacks go localized placeholder, then empty string. Question
/// text is carried verbatim; only titles and descriptions pass through the
/// Markdown codec.
pub fn dsl_to_blocks(document: &QuizDocument, context: &TransformContext) -> Vec<EditorBlock> {
    let quiz = &document.quiz;
    let mut blocks = Vec::new();

    let title = if quiz.title.is_empty() {
        context.placeholder(keys::QUIZ_DEFAULT_TITLE)
    } else {
        markdown_to_rich(&quiz.title)
    };
    blocks.push(EditorBlock::Header {
        text: title,
        level: 1,
    });

    if let Some(description) = quiz.description.as_deref()
        && !description.is_empty()
    {
        blocks.push(EditorBlock::Paragraph {
            text: markdown_to_rich(description),
        });
    }

    if let Some(sections) = &quiz.sections {
        for section in sections {
            let section_title = if section.title.is_empty() {
                context.placeholder(keys::SECTION_DEFAULT_TITLE)
            } else {
                markdown_to_rich(&section.title)
            };
            blocks.push(EditorBlock::Header {
                text: section_title,
                level: 2,
            });
            if let Some(description) = section.description.as_deref()
                && !description.is_empty()
            {
                blocks.push(EditorBlock::Paragraph {
                    text: markdown_to_rich(description),
                });
            }
            for question in &section.questions {
                blocks.push(EditorBlock::Question(question.clone()));
            }
        }
    } else if let Some(questions) = &quiz.questions {
        for question in questions {
            blocks.push(EditorBlock::Question(question.clone()));
        }
    }

    debug!(blocks = blocks.len(), "flattened quiz document");
    blocks
}
