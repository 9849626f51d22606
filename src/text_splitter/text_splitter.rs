use std::collections::VecDeque;

use async_trait::async_trait;
use log::warn;

use super::{SplitterOptions, TextSplitterError};

/// Interface for splitting text into chunks.
#[async_trait]
pub trait TextSplitter: Send + Sync {
    async fn split_text(&self, text: &str) -> Result<Vec<String>, TextSplitterError>;

    /// Splits each text in turn, concatenating the chunks.
    async fn split_texts(&self, texts: &[&str]) -> Result<Vec<String>, TextSplitterError> {
        let mut chunks = Vec::new();
        for text in texts {
            chunks.extend(self.split_text(text).await?);
        }
        Ok(chunks)
    }
}

/// Combines small pieces into chunks of at most `chunk_size`, measured with the
/// options' length function.
///
/// Consecutive chunks share trailing pieces worth at most `chunk_overlap`. A
/// single piece larger than `chunk_size` still becomes its own chunk; a warning
/// is logged when that happens. The separator does not count towards the size.
pub fn merge_splits<I, S>(splits: I, options: &SplitterOptions) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut chunks = Vec::new();
    let mut current: VecDeque<(String, usize)> = VecDeque::new();
    let mut total = 0;

    for split in splits {
        let split = split.as_ref();
        let len = options.length(split);

        if total + len >= options.chunk_size {
            if total > options.chunk_size {
                warn!(
                    "Created a chunk of size {}, which is longer than the specified {}",
                    total, options.chunk_size
                );
            }
            if !current.is_empty() {
                chunks.push(join(&current, &options.separator));
                while total > options.chunk_overlap {
                    match current.pop_front() {
                        Some((_, front_len)) => total -= front_len,
                        None => break,
                    }
                }
            }
        }

        current.push_back((split.to_string(), len));
        total += len;
    }

    chunks.push(join(&current, &options.separator));
    chunks
}

fn join(pieces: &VecDeque<(String, usize)>, separator: &str) -> String {
    pieces
        .iter()
        .map(|(piece, _)| piece.as_str())
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(chunk_size: usize, chunk_overlap: usize) -> SplitterOptions {
        SplitterOptions::new()
            .with_separator(" ")
            .with_chunk_size(chunk_size)
            .with_chunk_overlap(chunk_overlap)
    }

    #[test]
    fn test_merge_with_overlap() {
        let chunks = merge_splits(["foo", "bar", "baz", "123"], &options(7, 3));
        assert_eq!(chunks, vec!["foo bar", "bar baz", "baz 123"]);
    }

    #[test]
    fn test_merge_without_overlap() {
        let chunks = merge_splits(["a", "b", "c", "d", "e"], &options(3, 0));
        assert_eq!(chunks, vec!["a b", "c d", "e"]);
    }

    #[test]
    fn test_oversized_piece_kept_whole() {
        let _ = env_logger::builder().is_test(true).try_init();
        let chunks = merge_splits(["abcdefghij", "k"], &options(5, 0));
        assert_eq!(chunks, vec!["abcdefghij", "k"]);
    }

    #[test]
    fn test_everything_fits() {
        let chunks = merge_splits(["foo", "bar"], &options(100, 10));
        assert_eq!(chunks, vec!["foo bar"]);
    }
}
