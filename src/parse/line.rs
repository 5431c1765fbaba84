use std::io::{self, BufRead};

pub struct LineReader<R> {
    inner: R,
    delim: u8,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            delim: b'\n',
        }
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut buf = Vec::new();
        match self.inner.read_until(self.delim, &mut buf) {
            Ok(0) => None, // EOF
            // Invalid UTF-8 is replaced with U+FFFD.
            Ok(_) => Some(Ok(String::from_utf8_lossy(&buf).into_owned())),
            Err(e) => Some(Err(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_lines() -> io::Result<()> {
        let input: &[u8] = b"#type avg\n\nread 1.0\nno newline";
        let lines = LineReader::new(input).collect::<io::Result<Vec<_>>>()?;
        assert_eq!(lines, vec!["#type avg\n", "\n", "read 1.0\n", "no newline"]);
        Ok(())
    }
}
