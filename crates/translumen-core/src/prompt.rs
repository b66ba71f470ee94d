//! Prompt templates for the two request shapes

use crate::language::Language;

/// Prompt for translating a block of plain text
pub fn text_prompt(source: Language, target: Language, input: &str) -> String {
    format!(
        "You are a professional academic translator. Translate the following text from {src} to {tgt}.

Rules:
- Preserve all formatting, paragraph breaks, and structure.
- Use formal, scholarly register.
- Keep technical and domain-specific terms accurate.
- Output ONLY the translated text. No explanations, no preamble.

Text to translate:
{input}",
        src = source.display_name(),
        tgt = target.display_name(),
    )
}

/// Prompt sent alongside an attached document
pub fn document_prompt(source: Language, target: Language) -> String {
    format!(
        "You are a professional academic translator. The attached PDF is a research or journal document.
Translate the ENTIRE document from {src} to {tgt}.

Rules:
- Preserve all structure: headings, sub-headings, paragraphs, lists, figure captions, table contents, and references.
- Use formal, scholarly register throughout.
- Keep technical, scientific, and domain-specific terminology accurate.
- Translate every part of the document — do not skip or summarise anything.
- Output ONLY the translated text in one continuous block. No explanations or preamble.",
        src = source.display_name(),
        tgt = target.display_name(),
    )
}
