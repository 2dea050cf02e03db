//! Blog post entity, the sole domain record of the service.

/// A stored blog post.
///
/// `id` is assigned by the document store on insertion and never reused.
/// The three text fields carry no constraints; a post created from a partial
/// request simply lacks the omitted fields.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogPost {
    /// Store-assigned unique identifier (hex object id), immutable.
    pub id: String,
    pub author: Option<String>,
    pub article_heading: Option<String>,
    pub content: Option<String>,
}

impl BlogPost {
    /// Creates a new BlogPost instance.
    pub fn new(
        id: String,
        author: Option<String>,
        article_heading: Option<String>,
        content: Option<String>,
    ) -> Self {
        Self {
            id,
            author,
            article_heading,
            content,
        }
    }
}

/// Input data for creating a new post.
///
/// Fields left as `None` were absent from the request and are not persisted.
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub author: Option<String>,
    pub article_heading: Option<String>,
    pub content: Option<String>,
}
