//! # Review Service
//!
//! Review list/add/delete. Listing is open to any authenticated caller;
//! adding stamps the caller as author; deleting is author-scoped through
//! the store, so a non-author delete misses rather than fails loudly.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::catalog::model::{Book, BookField};
use crate::store::{Filter, RecordStore, Scope};

use super::errors::{ReviewError, ReviewResult};
use super::model::{Review, ReviewField};

/// Ratings are accepted strictly between these bounds: 1 and 5
/// themselves are refused, 2 through 4 pass.
const RATING_LOWER_BOUND: i64 = 1;
const RATING_UPPER_BOUND: i64 = 5;

/// Review flows over the record store.
pub struct ReviewService<S: RecordStore> {
    store: Arc<S>,
}

impl<S: RecordStore> ReviewService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// All reviews for a book, in store-native order.
    pub async fn list(&self, book_id: Uuid) -> ReviewResult<Vec<Review>> {
        let reviews = self
            .store
            .find_many(Filter::new().eq(ReviewField::BookId, book_id.to_string()))
            .await?;
        Ok(reviews)
    }

    /// Adds a review authored by the caller, after checking the rating
    /// range and that the book exists.
    pub async fn add(
        &self,
        scope: &Scope,
        book_id: Uuid,
        text: String,
        rating: i64,
    ) -> ReviewResult<Review> {
        if rating <= RATING_LOWER_BOUND || rating >= RATING_UPPER_BOUND {
            return Err(ReviewError::RatingOutOfRange);
        }

        let books: Vec<Book> = self
            .store
            .find_many(Filter::new().eq(BookField::Id, book_id.to_string()))
            .await?;
        if books.is_empty() {
            return Err(ReviewError::BookMissing);
        }

        let review = Review::new(text, rating as i32, book_id, scope.account_id());
        self.store.insert(&review).await?;

        info!(book_id = %book_id, rating, "review added");
        Ok(review)
    }

    /// Deletes a review if the caller authored it, returning it.
    pub async fn remove(&self, scope: &Scope, review_id: Uuid) -> ReviewResult<Review> {
        let removed = self
            .store
            .delete_one(
                scope,
                Filter::new().eq(ReviewField::Id, review_id.to_string()),
            )
            .await?;
        removed.ok_or(ReviewError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogService;
    use crate::store::MemoryStore;

    async fn service_with_book() -> (ReviewService<MemoryStore>, Scope, Uuid) {
        let store = Arc::new(MemoryStore::new());
        let reader = Scope::account(Uuid::new_v4());

        let catalog = CatalogService::new(store.clone());
        let book = catalog
            .add(
                &Scope::account(Uuid::new_v4()),
                "Dune".to_string(),
                "Frank Herbert".to_string(),
                "SciFi".to_string(),
            )
            .await
            .unwrap();

        (ReviewService::new(store), reader, book.id)
    }

    #[tokio::test]
    async fn test_boundary_ratings_are_rejected() {
        let (service, reader, book_id) = service_with_book().await;

        for rating in [0, 1, 5, 6] {
            let result = service
                .add(&reader, book_id, "text".to_string(), rating)
                .await;
            assert!(
                matches!(result, Err(ReviewError::RatingOutOfRange)),
                "rating {rating} should be rejected"
            );
        }

        for rating in [2, 3, 4] {
            let review = service
                .add(&reader, book_id, "text".to_string(), rating)
                .await
                .unwrap();
            assert_eq!(review.rating, rating as i32);
        }
    }

    #[tokio::test]
    async fn test_add_requires_an_existing_book() {
        let (service, reader, _) = service_with_book().await;

        let result = service
            .add(&reader, Uuid::new_v4(), "text".to_string(), 3)
            .await;
        assert!(matches!(result, Err(ReviewError::BookMissing)));
    }

    #[tokio::test]
    async fn test_add_stamps_the_caller_as_author() {
        let (service, reader, book_id) = service_with_book().await;

        let review = service
            .add(&reader, book_id, "A classic.".to_string(), 4)
            .await
            .unwrap();

        assert_eq!(review.author_account_id, reader.account_id());
        assert_eq!(review.book_id, book_id);
    }

    #[tokio::test]
    async fn test_list_is_not_author_scoped() {
        let (service, reader, book_id) = service_with_book().await;
        let other = Scope::account(Uuid::new_v4());

        service
            .add(&reader, book_id, "Mine".to_string(), 3)
            .await
            .unwrap();
        service
            .add(&other, book_id, "Theirs".to_string(), 4)
            .await
            .unwrap();

        let reviews = service.list(book_id).await.unwrap();
        assert_eq!(reviews.len(), 2);
    }

    #[tokio::test]
    async fn test_remove_is_author_scoped() {
        let (service, reader, book_id) = service_with_book().await;
        let review = service
            .add(&reader, book_id, "Mine".to_string(), 3)
            .await
            .unwrap();

        let foreign = service
            .remove(&Scope::account(Uuid::new_v4()), review.id)
            .await;
        assert!(matches!(foreign, Err(ReviewError::NotFound)));
        assert_eq!(service.list(book_id).await.unwrap().len(), 1);

        let removed = service.remove(&reader, review.id).await.unwrap();
        assert_eq!(removed, review);
        assert!(service.list(book_id).await.unwrap().is_empty());
    }
}
