use std::fmt;

use super::palette::Role;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    /// `None` is printed as-is.
    pub role: Option<Role>,
}

/// A line broken into styled fragments. `Display` renders ANSI sequences,
/// [`StyledLine::plain`] the bare text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledLine {
    fragments: Vec<Fragment>,
}

impl StyledLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends text, merging into the previous fragment when the role matches.
    pub fn push(&mut self, role: Option<Role>, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.fragments.last_mut() {
            Some(last) if last.role == role => last.text.push_str(text),
            _ => self.fragments.push(Fragment {
                text: text.to_string(),
                role,
            }),
        }
    }

    pub fn push_char(&mut self, role: Option<Role>, c: char) {
        let mut buf = [0u8; 4];
        self.push(role, c.encode_utf8(&mut buf));
    }

    pub fn append(&mut self, other: StyledLine) {
        for frag in other.fragments {
            self.push(frag.role, &frag.text);
        }
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn plain(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }

    /// The first fragment with the given role, if any.
    #[cfg(test)]
    pub(crate) fn find(&self, role: Role) -> Option<&str> {
        self.fragments
            .iter()
            .find(|f| f.role == Some(role))
            .map(|f| f.text.as_str())
    }
}

impl fmt::Display for StyledLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for frag in &self.fragments {
            match frag.role {
                Some(role) => write!(f, "{}", role.style().apply(frag.text.as_str()))?,
                None => f.write_str(&frag.text)?,
            }
        }
        Ok(())
    }
}
