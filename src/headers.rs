use std::ops::Range;

/// Location of one header field inside the receive buffer of the
/// connection that parsed it.  Views hold nothing but offsets, so they can
/// only be turned into text by handing them the buffer they came from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HeaderView {
    name_offset: usize,
    name_size: usize,
    value_offset: usize,
    value_size: usize,
}

impl HeaderView {
    pub(crate) fn new(
        name_offset: usize,
        name_size: usize,
        value_offset: usize,
        value_size: usize,
    ) -> Self {
        Self {
            name_offset,
            name_size,
            value_offset,
            value_size,
        }
    }

    fn name_range(&self) -> Range<usize> {
        self.name_offset..self.name_offset + self.name_size
    }

    fn value_range(&self) -> Range<usize> {
        self.value_offset..self.value_offset + self.value_size
    }

    fn resolve<'a>(
        &self,
        buffer: &'a [u8],
    ) -> Option<Header<'a>> {
        Some(Header {
            name: buffer.get(self.name_range())?,
            value: buffer.get(self.value_range())?,
        })
    }
}

/// One received header field, borrowed from the connection which received
/// it.  The name is always lower case.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Header<'a> {
    name: &'a [u8],
    value: &'a [u8],
}

impl<'a> Header<'a> {
    #[must_use]
    pub fn name(&self) -> &'a str {
        // The tokenizer only admits ASCII into names and values.
        std::str::from_utf8(self.name).unwrap_or_default()
    }

    #[must_use]
    pub fn value(&self) -> &'a str {
        std::str::from_utf8(self.value).unwrap_or_default()
    }

    #[must_use]
    pub fn as_bytes_pair(&self) -> (&'a [u8], &'a [u8]) {
        (self.name, self.value)
    }
}

/// The header fields of one received message, in the order they appeared
/// on the wire.  Names may repeat.
#[derive(Debug, Default)]
pub struct HeaderTable {
    views: Vec<HeaderView>,
}

impl HeaderTable {
    pub fn clear(&mut self) {
        self.views.clear();
    }

    pub fn push(
        &mut self,
        view: HeaderView,
    ) {
        self.views.push(view);
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Find the first header at index `offset` or later whose name matches
    /// `name` without regard to case, returning its index along with it.
    pub fn find<'a>(
        &self,
        buffer: &'a [u8],
        name: &str,
        offset: usize,
    ) -> Option<(usize, Header<'a>)> {
        self.views.iter()
            .enumerate()
            .skip(offset)
            .filter_map(|(index, view)| {
                view.resolve(buffer).map(|header| (index, header))
            })
            .find(|(_, header)| {
                header.name.eq_ignore_ascii_case(name.as_bytes())
            })
    }

    pub fn iter<'a>(
        &'a self,
        buffer: &'a [u8],
    ) -> impl Iterator<Item = Header<'a>> + 'a {
        self.views.iter().filter_map(move |view| view.resolve(buffer))
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn sample() -> (Vec<u8>, HeaderTable) {
        let buffer = b"host: a\r\naccept: b\r\nhost: c\r\n".to_vec();
        let mut table = HeaderTable::default();
        table.push(HeaderView::new(0, 4, 6, 1));
        table.push(HeaderView::new(9, 6, 17, 1));
        table.push(HeaderView::new(20, 4, 26, 1));
        (buffer, table)
    }

    #[test]
    fn find_first_match_ignoring_case() {
        let (buffer, table) = sample();
        let (index, header) = table.find(&buffer, "HOST", 0).unwrap();
        assert_eq!(0, index);
        assert_eq!("host", header.name());
        assert_eq!("a", header.value());
    }

    #[test]
    fn find_repeated_name_from_offset() {
        let (buffer, table) = sample();
        let (index, header) = table.find(&buffer, "host", 1).unwrap();
        assert_eq!(2, index);
        assert_eq!("c", header.value());
        assert!(table.find(&buffer, "host", 3).is_none());
        assert!(table.find(&buffer, "cookie", 0).is_none());
    }

    #[test]
    fn iterate_in_wire_order() {
        let (buffer, table) = sample();
        assert_eq!(
            vec![("host", "a"), ("accept", "b"), ("host", "c")],
            table.iter(&buffer)
                .map(|header| (header.name(), header.value()))
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn views_past_the_end_of_buffer_are_skipped() {
        let (buffer, table) = sample();
        assert_eq!(1, table.iter(&buffer[..10]).count());
        assert!(table.find(&buffer[..10], "accept", 0).is_none());
    }

}
