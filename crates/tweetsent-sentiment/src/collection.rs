use std::collections::HashSet;

use crate::types::ClassifiedPost;

/// Ordered, in-memory collection of classified posts for one run.
///
/// A post with positive engagement is dropped when a structurally identical
/// post is already retained. Posts with zero engagement are always kept.
#[derive(Debug, Default)]
pub struct PostCollection {
    posts: Vec<ClassifiedPost>,
    seen: HashSet<ClassifiedPost>,
    duplicates_skipped: usize,
}

impl PostCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `post` unless the dedup rule rejects it. Returns whether it was kept.
    pub fn push(&mut self, post: ClassifiedPost, engagement: u64) -> bool {
        if engagement > 0 && self.seen.contains(&post) {
            self.duplicates_skipped += 1;
            return false;
        }
        self.seen.insert(post.clone());
        self.posts.push(post);
        true
    }

    #[must_use]
    pub fn posts(&self) -> &[ClassifiedPost] {
        &self.posts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    #[must_use]
    pub fn duplicates_skipped(&self) -> usize {
        self.duplicates_skipped
    }
}
