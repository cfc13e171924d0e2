pub trait ToDashSeparators {
    /// Returns a copy with all `/` replaced by `-` and leading/trailing
    /// whitespace trimmed.
    fn to_dash_separators(&self) -> String;
}

impl ToDashSeparators for str {
    fn to_dash_separators(&self) -> String {
        self.trim().replace('/', "-")
    }
}

impl ToDashSeparators for String {
    fn to_dash_separators(&self) -> String {
        self.as_str().to_dash_separators()
    }
}

pub trait Truncate {
    /// Cut to at most `max` characters, marking the cut with `…`.
    fn truncate_chars(&self, max: usize) -> String;
}

impl Truncate for str {
    fn truncate_chars(&self, max: usize) -> String {
        if self.chars().count() <= max {
            return self.to_string();
        }
        if max == 0 {
            return String::new();
        }
        let mut out: String = self.chars().take(max - 1).collect();
        out.push('…');
        out
    }
}
