use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

pub fn is_sentinel(input: &str, sentinel: &str) -> bool {
    input.trim().eq_ignore_ascii_case(sentinel)
}

/// Questions typed by the user, one per line, until the sentinel word or
/// end of input.
pub struct Questions<R> {
    lines: Lines<R>,
    sentinel: String,
}

impl<R: AsyncBufRead + Unpin> Questions<R> {
    pub fn new(reader: R, sentinel: &str) -> Self {
        Self {
            lines: reader.lines(),
            sentinel: sentinel.to_string(),
        }
    }

    pub fn sentinel(&self) -> &str {
        &self.sentinel
    }

    pub async fn next(&mut self) -> std::io::Result<Option<String>> {
        while let Some(line) = self.lines.next_line().await? {
            let question = line.trim();
            if question.is_empty() {
                continue;
            }
            if is_sentinel(question, &self.sentinel) {
                return Ok(None);
            }
            return Ok(Some(question.to_string()));
        }
        Ok(None)
    }
}
