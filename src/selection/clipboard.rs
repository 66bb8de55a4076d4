//! Cut/copy clipboard for library paths

use std::path::PathBuf;

/// Clipboard content type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardContent {
    Copy(Vec<PathBuf>),
    Cut(Vec<PathBuf>),
}

/// Clipboard state. Holds either copied or cut paths, never both.
#[derive(Debug, Default)]
pub struct Clipboard {
    content: Option<ClipboardContent>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self { content: None }
    }

    /// Replace the clipboard with copied paths
    pub fn copy(&mut self, paths: Vec<PathBuf>) {
        self.content = Some(ClipboardContent::Copy(paths));
    }

    /// Replace the clipboard with cut paths
    pub fn cut(&mut self, paths: Vec<PathBuf>) {
        self.content = Some(ClipboardContent::Cut(paths));
    }

    pub fn content(&self) -> Option<&ClipboardContent> {
        self.content.as_ref()
    }

    /// Paths waiting to be moved
    pub fn cut_paths(&self) -> &[PathBuf] {
        match &self.content {
            Some(ClipboardContent::Cut(paths)) => paths,
            _ => &[],
        }
    }

    /// Paths waiting to be copied
    pub fn copy_paths(&self) -> &[PathBuf] {
        match &self.content {
            Some(ClipboardContent::Copy(paths)) => paths,
            _ => &[],
        }
    }

    pub fn is_cut(&self) -> bool {
        matches!(self.content, Some(ClipboardContent::Cut(_)))
    }

    pub fn is_empty(&self) -> bool {
        self.cut_paths().is_empty() && self.copy_paths().is_empty()
    }

    pub fn clear(&mut self) {
        self.content = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_clears_cut() {
        let mut clipboard = Clipboard::new();
        clipboard.cut(vec![PathBuf::from("a.png")]);
        assert!(clipboard.is_cut());
        clipboard.copy(vec![PathBuf::from("b.png")]);
        assert!(clipboard.cut_paths().is_empty());
        assert_eq!(clipboard.copy_paths(), &[PathBuf::from("b.png")]);
    }

    #[test]
    fn test_empty_clipboard() {
        let mut clipboard = Clipboard::new();
        assert!(clipboard.is_empty());
        clipboard.copy(Vec::new());
        assert!(clipboard.is_empty());
        clipboard.cut(vec![PathBuf::from("a.png")]);
        clipboard.clear();
        assert!(clipboard.content().is_none());
    }
}
