use relative_path::{RelativePath, RelativePathBuf};

/// A document known to a project, identified by its path relative to the
/// project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRef {
    pub path: RelativePathBuf,
    pub title: String,
}

impl DocumentRef {
    pub fn new(path: impl AsRef<RelativePath>, title: impl Into<String>) -> Self {
        Self {
            path: path.as_ref().to_relative_path_buf(),
            title: title.into(),
        }
    }

    /// The canonical identifier links resolve to.
    pub fn id(&self) -> &str {
        self.path.as_str()
    }
}

/// The document set that links are resolved against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectContext {
    pub name: String,
    pub documents: Vec<DocumentRef>,
}

impl ProjectContext {
    pub fn new(name: impl Into<String>, documents: Vec<DocumentRef>) -> Self {
        Self {
            name: name.into(),
            documents,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
