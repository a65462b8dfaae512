use std::fmt;

/// The raw contents of a guest list file.
///
/// The file is unstructured newline-delimited text, so this wrapper never
/// re-serializes or normalizes anything: `Display` reproduces the contents
/// byte for byte, and `guests()` is a read-only view over non-empty lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestList {
    contents: String,
}

impl GuestList {
    pub fn from_contents(contents: String) -> Self {
        Self { contents }
    }

    /// The exact file contents, including every newline.
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Guest names, one per non-empty line. The file often starts with a
    /// blank line because every append is newline-prefixed.
    pub fn guests(&self) -> impl Iterator<Item = &str> {
        self.contents.lines().filter(|line| !line.is_empty())
    }

    pub fn len(&self) -> usize {
        self.guests().count()
    }

    pub fn is_empty(&self) -> bool {
        self.guests().next().is_none()
    }
}

impl fmt::Display for GuestList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_byte_faithful() {
        let list = GuestList::from_contents("Alice\nBob".to_string());
        assert_eq!(list.to_string(), "Alice\nBob");
    }

    #[test]
    fn guests_skips_the_leading_blank_line() {
        let list = GuestList::from_contents("\nNaomi\nBob".to_string());
        assert_eq!(list.guests().collect::<Vec<_>>(), vec!["Naomi", "Bob"]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn empty_contents_is_empty() {
        let list = GuestList::from_contents(String::new());
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }
}
