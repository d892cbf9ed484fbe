//! Text chunking with fixed size and overlap

use crate::config::ChunkingConfig;
use crate::error::{Error, Result};
use crate::types::{Chunk, ChunkSource, FileType};

/// Text chunker with configurable size and overlap.
///
/// Splits text into a windowed sequence: each chunk covers
/// `[start, start + chunk_size)` in characters and the cursor advances
/// by `chunk_size - overlap`, so consecutive full-size chunks share
/// exactly `overlap` characters. The final chunk may be shorter.
pub struct TextChunker {
    /// Chunk size in characters
    chunk_size: usize,
    /// Overlap between consecutive chunks
    overlap: usize,
}

impl TextChunker {
    /// Create a new chunker.
    ///
    /// Requires `chunk_size > 0` and `overlap < chunk_size`; an overlap
    /// equal to or larger than the chunk size would never let the cursor
    /// reach the end of the text.
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(Error::InvalidConfig(
                "chunk_size must be greater than zero".to_string(),
            ));
        }
        if overlap >= chunk_size {
            return Err(Error::InvalidConfig(format!(
                "overlap ({}) must be smaller than chunk_size ({})",
                overlap, chunk_size
            )));
        }

        Ok(Self {
            chunk_size,
            overlap,
        })
    }

    /// Create from configuration
    pub fn from_config(config: &ChunkingConfig) -> Result<Self> {
        Self::new(config.chunk_size, config.overlap)
    }

    /// Split text into overlapping chunks.
    ///
    /// Sizes are in characters (Unicode scalar values), never bytes, so
    /// chunk boundaries cannot split a multi-byte character. Empty text
    /// produces no chunks; text no longer than `chunk_size` produces a
    /// single chunk equal to the whole text.
    pub fn chunk(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let step = self.chunk_size - self.overlap;

        let mut chunks = Vec::new();
        let mut start = 0;

        while start < chars.len() {
            let end = (start + self.chunk_size).min(chars.len());
            chunks.push(chars[start..end].iter().collect());
            start += step;
        }

        chunks
    }

    /// Chunk a document's text, attaching source metadata to each chunk
    pub fn chunk_document(&self, text: &str, filename: &str, file_type: FileType) -> Vec<Chunk> {
        self.chunk(text)
            .into_iter()
            .enumerate()
            .map(|(seq, content)| {
                Chunk::new(
                    content,
                    ChunkSource {
                        filename: filename.to_string(),
                        file_type,
                    },
                    seq as u32,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_produces_no_chunks() {
        let chunker = TextChunker::new(4, 1).unwrap();
        assert!(chunker.chunk("").is_empty());
    }

    #[test]
    fn test_short_text_is_a_single_chunk() {
        let chunker = TextChunker::new(10, 2).unwrap();
        assert_eq!(chunker.chunk("abc"), vec!["abc"]);
        // Exactly chunk_size is still one chunk
        assert_eq!(chunker.chunk("abcdefghij"), vec!["abcdefghij"]);
    }

    #[test]
    fn test_window_boundaries() {
        let chunker = TextChunker::new(4, 1).unwrap();
        assert_eq!(chunker.chunk("abcdefghij"), vec!["abcd", "defg", "ghij", "j"]);
    }

    #[test]
    fn test_consecutive_chunks_share_overlap() {
        let chunker = TextChunker::new(20, 5).unwrap();
        let text = "abcdefghijklmnopqrstuvwxyz0123456789ABCDEFGHIJ";
        let chunks = chunker.chunk(text);

        for pair in chunks.windows(2) {
            if pair[1].len() >= 5 {
                let tail: String = pair[0].chars().skip(pair[0].chars().count() - 5).collect();
                let head: String = pair[1].chars().take(5).collect();
                assert_eq!(tail, head);
            }
        }
    }

    #[test]
    fn test_sky_and_grass_boundaries() {
        // 32 characters; cursor advances by 15 per chunk
        let text = "The sky is blue. Grass is green.";
        let chunker = TextChunker::new(20, 5).unwrap();
        assert_eq!(
            chunker.chunk(text),
            vec!["The sky is blue. Gra", ". Grass is green.", "n."]
        );

        // With the default-sized window the whole text fits in one chunk
        let chunker = TextChunker::new(500, 100).unwrap();
        assert_eq!(chunker.chunk(text), vec![text]);
    }

    #[test]
    fn test_chunking_is_pure() {
        let chunker = TextChunker::new(7, 3).unwrap();
        let text = "the quick brown fox jumps over the lazy dog";
        assert_eq!(chunker.chunk(text), chunker.chunk(text));
    }

    #[test]
    fn test_multibyte_characters_are_not_split() {
        let chunker = TextChunker::new(3, 1).unwrap();
        let chunks = chunker.chunk("héllo wörld");
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 3);
        }
        assert_eq!(chunks[0], "hél");
    }

    #[test]
    fn test_overlap_must_be_smaller_than_chunk_size() {
        assert!(matches!(
            TextChunker::new(10, 10),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            TextChunker::new(10, 15),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(TextChunker::new(0, 0), Err(Error::InvalidConfig(_))));
        assert!(TextChunker::new(10, 9).is_ok());
        assert!(TextChunker::new(1, 0).is_ok());
    }

    #[test]
    fn test_chunk_document_attaches_source() {
        let chunker = TextChunker::new(4, 1).unwrap();
        let chunks = chunker.chunk_document("abcdefghij", "letters.txt", FileType::Txt);

        assert_eq!(chunks.len(), 4);
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.seq, i as u32);
            assert_eq!(chunk.source.filename, "letters.txt");
            assert_eq!(chunk.source.file_type, FileType::Txt);
        }
    }
}
