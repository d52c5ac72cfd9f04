use crate::normalize;

/// Raw text of one file plus its lines after stage 0.
#[derive(Debug, Clone)]
pub struct Document<'a> {
    pub raw: &'a str,
    pub lines: Vec<String>,
}

impl<'a> Document<'a> {
    pub fn new(raw: &'a str) -> Self {
        Document {
            raw,
            lines: normalize::split_lines(raw),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cleaned {
    pub text: String,
    pub changed: bool,
}
