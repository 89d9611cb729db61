use super::PrintSink;

impl<W> PrintSink<W> {
    /// Creates a sink that writes to `writer`.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            scratch: String::new(),
        }
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Replaces the underlying writer, returning the previous one.
    #[must_use = "the returned writer holds output produced before the replacement"]
    pub fn replace_writer(&mut self, writer: W) -> W {
        std::mem::replace(&mut self.writer, writer)
    }
}

impl<W> Default for PrintSink<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_writer_returns_previous_output() {
        let mut sink = PrintSink::new(b"first".to_vec());
        let previous = sink.replace_writer(Vec::new());
        assert_eq!(previous, b"first");
        assert!(sink.get_ref().is_empty());
    }

    #[test]
    fn default_sink_starts_empty() {
        let sink: PrintSink<Vec<u8>> = PrintSink::default();
        assert!(sink.into_inner().is_empty());
    }
}
