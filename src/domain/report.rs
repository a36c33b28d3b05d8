/// Captured history output, one entry per line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_output(output: &str) -> Self {
        if output.is_empty() {
            return Self::empty();
        }
        Self {
            lines: output.split('\n').map(str::to_string).collect(),
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Report {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_output_has_no_lines() {
        let report = Report::from_output("");
        assert!(report.is_empty());
    }

    #[test]
    fn splits_on_newlines_in_order() {
        let report = Report::from_output("abc123 msg\n 1 file changed, 1 insertion(+)\n");
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(
            lines,
            vec!["abc123 msg", " 1 file changed, 1 insertion(+)", ""]
        );
    }
}
