//! MongoDB implementation of the post repository.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::doc;
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{BlogPost, NewPost};
use crate::domain::repositories::PostRepository;
use crate::error::StoreError;

/// Name of the collection holding post documents.
const POSTS_COLLECTION: &str = "posts";

/// BSON shape of a post document.
///
/// Absent fields are omitted from the stored document rather than persisted
/// as nulls; field types are the only schema the store enforces.
#[derive(Debug, Serialize, Deserialize)]
struct PostDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    author: Option<String>,
    #[serde(rename = "articleHeading", skip_serializing_if = "Option::is_none")]
    article_heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
}

impl PostDocument {
    fn into_entity(self) -> BlogPost {
        BlogPost::new(
            self.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            self.author,
            self.article_heading,
            self.content,
        )
    }
}

/// MongoDB repository for post storage and retrieval.
///
/// Holds a handle to the single posts collection; the driver multiplexes all
/// requests over its own connection pool.
pub struct MongoPostRepository {
    collection: Collection<PostDocument>,
}

impl MongoPostRepository {
    /// Creates a new repository over the posts collection of `db`.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(POSTS_COLLECTION),
        }
    }
}

#[async_trait]
impl PostRepository for MongoPostRepository {
    async fn insert(&self, new_post: NewPost) -> Result<BlogPost, StoreError> {
        let document = PostDocument {
            id: None,
            author: new_post.author,
            article_heading: new_post.article_heading,
            content: new_post.content,
        };

        let result = self.collection.insert_one(&document).await?;

        let id = result
            .inserted_id
            .as_object_id()
            .map(|oid| oid.to_hex())
            .unwrap_or_default();

        Ok(BlogPost::new(
            id,
            document.author,
            document.article_heading,
            document.content,
        ))
    }

    async fn list(&self) -> Result<Vec<BlogPost>, StoreError> {
        // No explicit sort: order is whatever the store returns.
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<PostDocument> = cursor.try_collect().await?;

        Ok(documents
            .into_iter()
            .map(PostDocument::into_entity)
            .collect())
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<BlogPost>, StoreError> {
        let oid = ObjectId::parse_str(id).map_err(|e| StoreError(e.to_string()))?;

        let removed = self
            .collection
            .find_one_and_delete(doc! { "_id": oid })
            .await?;

        Ok(removed.map(PostDocument::into_entity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn test_document_omits_absent_fields() {
        let document = PostDocument {
            id: None,
            author: Some("A".to_string()),
            article_heading: None,
            content: None,
        };

        let bson = bson::to_document(&document).unwrap();

        assert_eq!(bson.get_str("author").unwrap(), "A");
        assert!(!bson.contains_key("articleHeading"));
        assert!(!bson.contains_key("content"));
        assert!(!bson.contains_key("_id"));
    }

    #[test]
    fn test_document_field_names_match_wire_format() {
        let document = PostDocument {
            id: Some(ObjectId::new()),
            author: Some("A".to_string()),
            article_heading: Some("H".to_string()),
            content: Some("C".to_string()),
        };

        let bson = bson::to_document(&document).unwrap();

        assert!(bson.contains_key("_id"));
        assert!(bson.contains_key("articleHeading"));
    }

    #[test]
    fn test_into_entity_maps_object_id_to_hex() {
        let oid = ObjectId::new();
        let document = PostDocument {
            id: Some(oid),
            author: Some("A".to_string()),
            article_heading: Some("H".to_string()),
            content: Some("C".to_string()),
        };

        let post = document.into_entity();

        assert_eq!(post.id, oid.to_hex());
        assert_eq!(post.author.as_deref(), Some("A"));
    }
}
