//! Corpus file reading: header extraction and action/document pairing.

use crate::error::LoaderError;
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

/// The index-creation payload from line 1 of a corpus file.
#[derive(Debug, Clone)]
pub struct CorpusHeader {
    /// Target index name.
    pub index: String,
    /// Index settings object.
    pub settings: Value,
    /// Index mappings object.
    pub mappings: Value,
}

/// A corpus file opened for streaming: the parsed header plus an iterator
/// over the raw action/document line pairs.
pub struct CorpusFile {
    header: CorpusHeader,
    lines: Lines<BufReader<File>>,
    /// 1-based number of the last line handed out.
    line_number: u64,
}

impl CorpusFile {
    /// Open a corpus file and parse its header line.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let file = File::open(path)?;
        let mut lines = BufReader::new(file).lines();

        let header_line = lines.next().ok_or(LoaderError::MissingHeader)??;
        let payload: Value = serde_json::from_str(&header_line)?;

        let index = payload
            .get("index")
            .and_then(Value::as_str)
            .ok_or(LoaderError::MissingHeader)?
            .to_string();
        let settings = payload.get("settings").cloned().unwrap_or(Value::Null);
        let mappings = payload.get("mappings").cloned().unwrap_or(Value::Null);

        Ok(Self {
            header: CorpusHeader {
                index,
                settings,
                mappings,
            },
            lines,
            line_number: 1,
        })
    }

    /// The parsed header.
    pub fn header(&self) -> &CorpusHeader {
        &self.header
    }

    /// Read the next action/document line pair as raw JSONL text.
    ///
    /// Returns `Ok(None)` at end of file. An action line without a following
    /// document line is a malformed corpus and fails loudly.
    pub fn next_pair(&mut self) -> Result<Option<(String, String)>, LoaderError> {
        let action = match self.lines.next() {
            Some(line) => {
                self.line_number += 1;
                line?
            }
            None => return Ok(None),
        };

        let document = match self.lines.next() {
            Some(line) => {
                self.line_number += 1;
                line?
            }
            None => {
                return Err(LoaderError::MalformedCorpusFile {
                    line: self.line_number,
                })
            }
        };

        Ok(Some((action, document)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn corpus(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        file
    }

    #[test]
    fn test_open_parses_header() {
        let file = corpus(&[
            r#"{"index": "bench", "settings": {"number_of_shards": 1}, "mappings": {"dynamic": false}}"#,
        ]);

        let corpus = CorpusFile::open(file.path()).unwrap();
        assert_eq!(corpus.header().index, "bench");
        assert_eq!(corpus.header().settings["number_of_shards"], 1);
        assert_eq!(corpus.header().mappings["dynamic"], false);
    }

    #[test]
    fn test_pairs_stream_in_order() {
        let file = corpus(&[
            r#"{"index": "bench", "settings": {}, "mappings": {}}"#,
            r#"{"index": {"_index": "bench", "_id": "doc-000001"}}"#,
            r#"{"id": "doc-000001", "color": "red"}"#,
            r#"{"index": {"_index": "bench", "_id": "doc-000002"}}"#,
            r#"{"id": "doc-000002", "color": "blue"}"#,
        ]);

        let mut corpus = CorpusFile::open(file.path()).unwrap();

        let (action, doc) = corpus.next_pair().unwrap().unwrap();
        assert!(action.contains("doc-000001"));
        assert!(doc.contains("red"));

        let (action, _) = corpus.next_pair().unwrap().unwrap();
        assert!(action.contains("doc-000002"));

        assert!(corpus.next_pair().unwrap().is_none());
    }

    #[test]
    fn test_action_without_document_fails() {
        let file = corpus(&[
            r#"{"index": "bench", "settings": {}, "mappings": {}}"#,
            r#"{"index": {"_index": "bench", "_id": "doc-000001"}}"#,
        ]);

        let mut corpus = CorpusFile::open(file.path()).unwrap();
        let result = corpus.next_pair();
        assert!(matches!(
            result,
            Err(LoaderError::MalformedCorpusFile { line: 2 })
        ));
    }

    #[test]
    fn test_empty_file_fails() {
        let file = corpus(&[]);
        assert!(matches!(
            CorpusFile::open(file.path()),
            Err(LoaderError::MissingHeader)
        ));
    }
}
