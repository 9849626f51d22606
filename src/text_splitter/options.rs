use std::{fmt, sync::Arc};

use tiktoken_rs::{get_bpe_from_model, get_bpe_from_tokenizer, tokenizer::Tokenizer, CoreBPE};

use super::TextSplitterError;

/// Measures the length of a piece of text, in whatever unit chunks are sized in.
pub type LengthFunction = Arc<dyn Fn(&str) -> usize + Send + Sync>;

// Options is a struct that contains options for a text splitter.
#[derive(Clone)]
pub struct SplitterOptions {
    pub separator: String,
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    pub length_function: LengthFunction,
}

impl fmt::Debug for SplitterOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplitterOptions")
            .field("separator", &self.separator)
            .field("chunk_size", &self.chunk_size)
            .field("chunk_overlap", &self.chunk_overlap)
            .field("length_function", &"...")
            .finish()
    }
}

impl Default for SplitterOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl SplitterOptions {
    pub fn new() -> Self {
        SplitterOptions {
            separator: String::from("\n\n"),
            chunk_size: 4000,
            chunk_overlap: 200,
            length_function: Arc::new(|text: &str| text.chars().count()),
        }
    }
}

// Builder pattern for Options struct
impl SplitterOptions {
    pub fn with_separator<S: Into<String>>(mut self, separator: S) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_chunk_overlap(mut self, chunk_overlap: usize) -> Self {
        self.chunk_overlap = chunk_overlap;
        self
    }

    /// Sizes chunks with a custom function, e.g. a tokenizer's token count.
    pub fn with_length_function<F>(mut self, length_function: F) -> Self
    where
        F: Fn(&str) -> usize + Send + Sync + 'static,
    {
        self.length_function = Arc::new(length_function);
        self
    }

    /// Sizes chunks in tokens of a tiktoken encoding (`cl100k_base`, `gpt2`, ...).
    pub fn with_tiktoken_encoder(self, encoding_name: &str) -> Result<Self, TextSplitterError> {
        let tokenizer = Self::get_tokenizer_from_str(encoding_name)
            .ok_or(TextSplitterError::TokenizerNotFound)?;
        let bpe =
            get_bpe_from_tokenizer(tokenizer).map_err(|_| TextSplitterError::InvalidTokenizer)?;
        Ok(self.with_bpe(bpe))
    }

    /// Sizes chunks in tokens of the encoding used by an OpenAI model.
    pub fn with_tiktoken_model(self, model_name: &str) -> Result<Self, TextSplitterError> {
        let bpe = get_bpe_from_model(model_name).map_err(|_| TextSplitterError::InvalidModel)?;
        Ok(self.with_bpe(bpe))
    }

    fn with_bpe(self, bpe: CoreBPE) -> Self {
        self.with_length_function(move |text: &str| bpe.encode_ordinary(text).len())
    }

    pub fn get_tokenizer_from_str(s: &str) -> Option<Tokenizer> {
        match s.to_lowercase().as_str() {
            "cl100k_base" => Some(Tokenizer::Cl100kBase),
            "p50k_base" => Some(Tokenizer::P50kBase),
            "r50k_base" => Some(Tokenizer::R50kBase),
            "p50k_edit" => Some(Tokenizer::P50kEdit),
            "gpt2" => Some(Tokenizer::Gpt2),
            _ => None,
        }
    }

    pub fn length(&self, text: &str) -> usize {
        (self.length_function)(text)
    }

    pub fn validate(&self) -> Result<(), TextSplitterError> {
        if self.chunk_size == 0 {
            return Err(TextSplitterError::InvalidSplitterOptions);
        }
        if self.chunk_overlap > self.chunk_size {
            return Err(TextSplitterError::InvalidChunkOverlap {
                chunk_overlap: self.chunk_overlap,
                chunk_size: self.chunk_size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = SplitterOptions::default();
        assert_eq!(options.separator, "\n\n");
        assert_eq!(options.chunk_size, 4000);
        assert_eq!(options.chunk_overlap, 200);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_length_counts_characters() {
        let options = SplitterOptions::default();
        assert_eq!(options.length("héllo"), 5);
    }

    #[test]
    fn test_overlap_larger_than_size() {
        let err = SplitterOptions::new()
            .with_chunk_size(10)
            .with_chunk_overlap(20)
            .validate()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Got a larger chunk overlap (20) than chunk size (10), should be smaller."
        );
    }

    #[test]
    fn test_zero_chunk_size() {
        let result = SplitterOptions::new()
            .with_chunk_size(0)
            .with_chunk_overlap(0)
            .validate();
        assert!(matches!(result, Err(TextSplitterError::InvalidSplitterOptions)));
    }

    #[test]
    fn test_tiktoken_encoder_counts_tokens() {
        let options = SplitterOptions::new().with_tiktoken_encoder("gpt2").unwrap();
        assert_eq!(options.length("hello world"), 2);
    }

    #[test]
    fn test_unknown_encoding() {
        let result = SplitterOptions::new().with_tiktoken_encoder("not-an-encoding");
        assert!(matches!(result, Err(TextSplitterError::TokenizerNotFound)));
    }

    #[test]
    fn test_tiktoken_model_counts_tokens() {
        let options = SplitterOptions::new()
            .with_tiktoken_model("gpt-3.5-turbo")
            .unwrap();
        assert_eq!(options.length("hello world"), 2);
    }

    #[test]
    fn test_unknown_model() {
        let result = SplitterOptions::new().with_tiktoken_model("not-a-model");
        assert!(matches!(result, Err(TextSplitterError::InvalidModel)));
    }

    #[test]
    fn test_custom_length_function() {
        let options = SplitterOptions::new()
            .with_length_function(|text: &str| text.split_whitespace().count());
        assert_eq!(options.length("one two three"), 3);
    }
}
