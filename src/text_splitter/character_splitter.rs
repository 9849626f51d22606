use async_trait::async_trait;

use super::{merge_splits, SplitterOptions, TextSplitter, TextSplitterError};

/// CharacterTextSplitter splits text on a single separator and merges the pieces
///
/// Pieces are merged back into chunks of at most `chunk_size` (as measured by the
/// options' length function), with up to `chunk_overlap` shared between
/// neighbouring chunks.
///
/// # Example
/// ```rust
/// use langchain_llms::text_splitter::{CharacterTextSplitter, SplitterOptions, TextSplitter};
///
/// # tokio_test::block_on(async {
/// let options = SplitterOptions::new()
///     .with_separator(" ")
///     .with_chunk_size(7)
///     .with_chunk_overlap(3);
/// let splitter = CharacterTextSplitter::new(options).unwrap();
/// let chunks = splitter.split_text("foo bar baz 123").await.unwrap();
/// assert_eq!(chunks, vec!["foo bar", "bar baz", "baz 123"]);
/// # });
/// ```
#[derive(Debug, Clone, Default)]
pub struct CharacterTextSplitter {
    options: SplitterOptions,
}

impl CharacterTextSplitter {
    /// Create a new CharacterTextSplitter, rejecting an overlap larger than the chunk size
    pub fn new(options: SplitterOptions) -> Result<Self, TextSplitterError> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Create a splitter that sizes chunks in tokens of a tiktoken encoding
    pub fn from_tiktoken_encoder(
        encoding_name: &str,
        options: SplitterOptions,
    ) -> Result<Self, TextSplitterError> {
        Self::new(options.with_tiktoken_encoder(encoding_name)?)
    }

    pub fn options(&self) -> &SplitterOptions {
        &self.options
    }
}

#[async_trait]
impl TextSplitter for CharacterTextSplitter {
    async fn split_text(&self, text: &str) -> Result<Vec<String>, TextSplitterError> {
        if text.is_empty() {
            return Ok(vec![]);
        }

        let splits = if self.options.separator.is_empty() {
            // Empty separator means split by character
            text.chars().map(String::from).collect::<Vec<_>>()
        } else {
            text.split(self.options.separator.as_str())
                .map(String::from)
                .collect()
        };

        Ok(merge_splits(splits, &self.options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_split_on_paragraphs() {
        let options = SplitterOptions::new()
            .with_chunk_size(20)
            .with_chunk_overlap(0);
        let splitter = CharacterTextSplitter::new(options).unwrap();

        let text = "First paragraph.\n\nSecond one.\n\nThird paragraph here.";
        let chunks = splitter.split_text(text).await.unwrap();
        assert_eq!(
            chunks,
            vec!["First paragraph.", "Second one.", "Third paragraph here."]
        );
    }

    #[tokio::test]
    async fn test_short_text_is_one_chunk() {
        let splitter = CharacterTextSplitter::default();
        let chunks = splitter.split_text("a\n\nb").await.unwrap();
        assert_eq!(chunks, vec!["a\n\nb"]);
    }

    #[tokio::test]
    async fn test_empty_text() {
        // No chunks at all, not a single empty chunk
        let splitter = CharacterTextSplitter::default();
        assert!(splitter.split_text("").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_separator_splits_characters() {
        let options = SplitterOptions::new()
            .with_separator("")
            .with_chunk_size(3)
            .with_chunk_overlap(1);
        let splitter = CharacterTextSplitter::new(options).unwrap();
        let chunks = splitter.split_text("abcde").await.unwrap();
        assert_eq!(chunks, vec!["ab", "bc", "cd", "de"]);
    }

    #[tokio::test]
    async fn test_split_texts() {
        let options = SplitterOptions::new()
            .with_separator(" ")
            .with_chunk_size(7)
            .with_chunk_overlap(0);
        let splitter = CharacterTextSplitter::new(options).unwrap();
        let chunks = splitter.split_texts(&["foo bar", "baz"]).await.unwrap();
        assert_eq!(chunks, vec!["foo bar", "baz"]);
    }

    #[test]
    fn test_rejects_large_overlap() {
        let options = SplitterOptions::new()
            .with_chunk_size(5)
            .with_chunk_overlap(6);
        let result = CharacterTextSplitter::new(options);
        assert!(matches!(
            result,
            Err(TextSplitterError::InvalidChunkOverlap {
                chunk_overlap: 6,
                chunk_size: 5
            })
        ));
    }

    #[tokio::test]
    async fn test_tiktoken_sized_chunks() {
        let options = SplitterOptions::new()
            .with_separator(" ")
            .with_chunk_size(100)
            .with_chunk_overlap(0);
        let splitter = CharacterTextSplitter::from_tiktoken_encoder("gpt2", options).unwrap();
        let chunks = splitter.split_text("foo bar baz 123").await.unwrap();
        assert_eq!(chunks, vec!["foo bar baz 123"]);
    }
}
