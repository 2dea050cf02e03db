//! DTOs for the blog post endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{BlogPost, NewPost};

/// Request to create a post.
///
/// Any subset of the fields is accepted; nothing is validated before the
/// insert. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub author: Option<String>,
    pub article_heading: Option<String>,
    pub content: Option<String>,
}

impl From<CreatePostRequest> for NewPost {
    fn from(request: CreatePostRequest) -> Self {
        Self {
            author: request.author,
            article_heading: request.article_heading,
            content: request.content,
        }
    }
}

/// JSON representation of a stored post.
///
/// Fields absent from the stored document are omitted from the response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl From<BlogPost> for PostResponse {
    fn from(post: BlogPost) -> Self {
        Self {
            id: post.id,
            author: post.author,
            article_heading: post.article_heading,
            content: post.content,
        }
    }
}

/// Response confirming a deletion, echoing the removed record.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
    pub deleted: PostResponse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_accepts_any_subset() {
        let request: CreatePostRequest = serde_json::from_value(json!({
            "author": "A"
        }))
        .unwrap();

        assert_eq!(request.author.as_deref(), Some("A"));
        assert!(request.article_heading.is_none());
        assert!(request.content.is_none());
    }

    #[test]
    fn test_create_request_ignores_unknown_fields() {
        let request: CreatePostRequest = serde_json::from_value(json!({
            "articleHeading": "H",
            "tags": ["not", "part", "of", "the", "model"]
        }))
        .unwrap();

        assert_eq!(request.article_heading.as_deref(), Some("H"));
    }

    #[test]
    fn test_response_omits_absent_fields() {
        let response = PostResponse::from(BlogPost::new(
            "65f2a1b2c3d4e5f6a7b8c9d0".to_string(),
            Some("A".to_string()),
            None,
            None,
        ));

        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["id"], "65f2a1b2c3d4e5f6a7b8c9d0");
        assert_eq!(value["author"], "A");
        assert!(value.get("articleHeading").is_none());
        assert!(value.get("content").is_none());
    }
}
