//! Newline tokenizer over the raw input buffer.

/// A non-owning view (offset + length) into the input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathRecord {
    pub offset: usize,
    pub len: usize,
}

impl PathRecord {
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bytes<'a>(&self, buf: &'a [u8]) -> &'a [u8] {
        &buf[self.offset..self.offset + self.len]
    }
}

/// Lazy iterator of records split on `\n`.
///
/// The trailing partial record (no final newline) is still produced; a
/// final newline does not produce an extra empty record.
#[derive(Debug, Clone)]
pub struct Records<'a> {
    buf: &'a [u8],
    pos: usize,
}

pub fn records(buf: &[u8]) -> Records<'_> {
    Records { buf, pos: 0 }
}

impl Iterator for Records<'_> {
    type Item = PathRecord;

    fn next(&mut self) -> Option<PathRecord> {
        if self.pos >= self.buf.len() {
            return None;
        }

        let rest = &self.buf[self.pos..];
        let record = match rest.iter().position(|&b| b == b'\n') {
            Some(len) => {
                let record = PathRecord { offset: self.pos, len };
                self.pos += len + 1;
                record
            }
            None => {
                let record = PathRecord {
                    offset: self.pos,
                    len: rest.len(),
                };
                self.pos = self.buf.len();
                record
            }
        };
        Some(record)
    }
}
