use crate::metrics::MetricId;

const HEADER_MARKER: char = '#';

/// Column layout declared by a report's header line, e.g.
/// `#type avg std min 5th 10th 90th 95th 99th`.
///
/// The marker token is dropped. Columns with labels outside of the label
/// table are kept as `None` so that row values stay aligned.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Header {
    columns: Vec<Option<MetricId>>,
}

impl Header {
    /// Returns `None` if the tokens don't start with the header marker.
    pub fn parse<'a, I>(mut tokens: I) -> Option<Self>
    where
        I: Iterator<Item = &'a str>,
    {
        match tokens.next() {
            Some(marker) if marker.starts_with(HEADER_MARKER) => Some(Self {
                columns: tokens.map(MetricId::from_label).collect(),
            }),
            _ => None,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[inline]
    pub fn columns(&self) -> &[Option<MetricId>] {
        &self.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header() {
        let header = Header::parse("#type 99th foo min".split_whitespace())
            .expect("header line not recognized");

        assert_eq!(header.len(), 3);
        assert_eq!(
            header.columns(),
            &[Some(MetricId::Percentile99th), None, Some(MetricId::Min)]
        );
    }

    #[test]
    fn test_parse_bare_marker() {
        let header = Header::parse("#".split_whitespace()).expect("header line not recognized");
        assert_eq!(header.len(), 0);
    }

    #[test]
    fn test_parse_not_a_header() {
        assert_eq!(Header::parse("read 1 2".split_whitespace()), None);
        assert_eq!(Header::parse("type #avg".split_whitespace()), None);
        assert_eq!(Header::parse("".split_whitespace()), None);
    }
}
