use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextSplitterError {
    #[error(
        "Got a larger chunk overlap ({chunk_overlap}) than chunk size ({chunk_size}), should be smaller."
    )]
    InvalidChunkOverlap {
        chunk_overlap: usize,
        chunk_size: usize,
    },

    #[error("Invalid chunk overlap and size")]
    InvalidSplitterOptions,

    #[error("Tokenizer not found")]
    TokenizerNotFound,

    #[error("Tokenizer creation failed due to invalid tokenizer")]
    InvalidTokenizer,

    #[error("Tokenizer creation failed due to invalid model")]
    InvalidModel,
}
