// Source mapping: ties each token back to the block and word it came from
// so a consumer can highlight the current word in the original layout.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::tokenize::token::{BoundaryType, Token};
use crate::tokenize::{split_into_paragraphs, tokenize};

/// Structural role of an input block. Non-paragraph kinds override the
/// boundary type of the block's final token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BlockKind {
    #[default]
    Paragraph,
    Heading,
    ListItem,
    Code,
    Math,
}

impl BlockKind {
    fn boundary_override(self) -> Option<BoundaryType> {
        match self {
            BlockKind::Paragraph => None,
            BlockKind::Heading => Some(BoundaryType::Heading),
            BlockKind::ListItem => Some(BoundaryType::ListItem),
            BlockKind::Code => Some(BoundaryType::CodeLine),
            BlockKind::Math => Some(BoundaryType::MathChunk),
        }
    }
}

/// One source block: a typed run of text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Block {
    pub kind: BlockKind,
    pub text: String,
}

impl Block {
    pub fn new(kind: BlockKind, text: impl Into<String>) -> Self {
        Block {
            kind,
            text: text.into(),
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::new(BlockKind::Paragraph, text)
    }
}

/// Where a token came from: block index plus word index within that block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TokenOrigin {
    pub block_index: i32,
    pub word_index: i32,
}

/// Origin assigned to paragraph-break tokens.
pub const PARAGRAPH_BREAK_ORIGIN: TokenOrigin = TokenOrigin {
    block_index: -1,
    word_index: -1,
};

/// Concatenates block texts with a blank-line separator, the form the
/// tokenizer expects.
pub fn blocks_to_text(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(|block| block.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Replays the tokenizer's split pipeline per block and emits one origin per
/// token, parallel to `tokenize(blocks_to_text(blocks))`. Word indices count
/// sub-tokens within the whole block; breaks map to (-1, -1).
pub fn create_token_block_mapping(blocks: &[Block]) -> Vec<TokenOrigin> {
    let mut mapping = Vec::new();
    let mut emitted_any = false;
    for (block_number, block) in blocks.iter().enumerate() {
        let paragraphs = split_into_paragraphs(&block.text);
        if paragraphs.is_empty() {
            continue;
        }
        if emitted_any {
            mapping.push(PARAGRAPH_BREAK_ORIGIN);
        }
        let mut word_index = 0i32;
        for (paragraph_number, words) in paragraphs.iter().enumerate() {
            if paragraph_number > 0 {
                mapping.push(PARAGRAPH_BREAK_ORIGIN);
            }
            for _ in words {
                mapping.push(TokenOrigin {
                    block_index: block_number as i32,
                    word_index,
                });
                word_index += 1;
            }
        }
        emitted_any = true;
    }
    mapping
}

/// Position of the token that came from the given block and word, if any.
pub fn find_token_index_by_block_word(
    mapping: &[TokenOrigin],
    block_index: i32,
    word_index: i32,
) -> Option<usize> {
    mapping
        .iter()
        .position(|origin| origin.block_index == block_index && origin.word_index == word_index)
}

/// Tokenizes a block sequence, applying each non-paragraph block's boundary
/// override to its final token.
pub fn tokenize_blocks(blocks: &[Block]) -> Vec<Token> {
    let mut tokens = tokenize(&blocks_to_text(blocks));
    let mapping = create_token_block_mapping(blocks);
    debug_assert_eq!(tokens.len(), mapping.len());
    for (block_number, block) in blocks.iter().enumerate() {
        let Some(tag) = block.kind.boundary_override() else {
            continue;
        };
        let last = mapping
            .iter()
            .rposition(|origin| origin.block_index == block_number as i32);
        if let Some(position) = last {
            if let Some(token) = tokens.get_mut(position) {
                token.boundary_type = tag;
            }
        }
    }
    tokens
}
