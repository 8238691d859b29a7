//! Pagination and pure helpers over the post collection

use indexmap::IndexMap;

use crate::content::{Post, Tag};

/// Default number of posts per page
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Average reading speed in words per minute
pub const AVERAGE_READING_SPEED: usize = 200;

/// Pagination parameters
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    /// 1-based page number
    pub page: usize,
    /// Posts per page; must be at least 1
    pub limit: usize,
}

impl Default for PageRequest {
    /// First page at [`DEFAULT_PAGE_SIZE`] posts per page
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of posts plus pagination bookkeeping
#[derive(Debug, Clone)]
pub struct Page {
    /// Posts on this page, in store order
    pub posts: Vec<Post>,
    /// Clamped page number (0 when the collection is empty)
    pub page: usize,
    /// Page size the slice was computed with
    pub limit: usize,
    /// Total posts across all pages
    pub total_posts: usize,
    /// Total pages at this limit
    pub total_pages: usize,
}

/// Slice one page out of a post collection.
///
/// The page number is clamped into `[1, total_pages]`; on an empty
/// collection it clamps to 0 and the slice is empty. `limit` must be at
/// least 1, a zero limit divides by zero.
pub fn paginate(posts: Vec<Post>, request: PageRequest) -> Page {
    let total_posts = posts.len();
    let total_pages = total_posts.div_ceil(request.limit);

    let mut page = request.page.max(1);
    if page > total_pages {
        page = total_pages;
    }

    let start = page.saturating_sub(1) * request.limit;
    let posts = posts
        .into_iter()
        .skip(start)
        .take(request.limit)
        .collect();

    Page {
        posts,
        page,
        limit: request.limit,
        total_posts,
        total_pages,
    }
}

/// Deduplicate tags across posts by id, preserving first-seen order
pub fn unique_tags(posts: &[Post]) -> Vec<Tag> {
    let mut seen: IndexMap<u64, Tag> = IndexMap::new();

    for post in posts {
        for tag in &post.tags {
            seen.entry(tag.id).or_insert_with(|| tag.clone());
        }
    }

    seen.into_values().collect()
}

/// Estimated reading time in whole minutes
///
/// Whitespace-delimited word count divided by [`AVERAGE_READING_SPEED`],
/// rounded up. Empty text reads in zero minutes.
pub fn read_time(text: &str) -> usize {
    let words = text.split_whitespace().count();
    words.div_ceil(AVERAGE_READING_SPEED)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posts(count: usize) -> Vec<Post> {
        (1..=count as u64)
            .map(|id| Post::new(id, format!("Post {}", id), format!("post-{}", id)))
            .collect()
    }

    #[test]
    fn test_paginate_middle_page() {
        let page = paginate(posts(45), PageRequest { page: 2, limit: 20 });
        assert_eq!(page.posts.len(), 20);
        assert_eq!(page.posts[0].id, 21);
        assert_eq!(page.total_posts, 45);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_paginate_last_partial_page() {
        let page = paginate(posts(45), PageRequest { page: 3, limit: 20 });
        assert_eq!(page.posts.len(), 5);
        assert_eq!(page.posts[0].id, 41);
        assert_eq!(page.posts[4].id, 45);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_paginate_clamps_low_and_high_pages() {
        let low = paginate(posts(45), PageRequest { page: 0, limit: 20 });
        assert_eq!(low.page, 1);
        assert_eq!(low.posts[0].id, 1);

        let high = paginate(posts(45), PageRequest { page: 99, limit: 20 });
        assert_eq!(high.page, 3);
        assert_eq!(high.posts[0].id, 41);
    }

    #[test]
    fn test_paginate_empty_collection_clamps_page_to_zero() {
        let page = paginate(Vec::new(), PageRequest::default());
        assert_eq!(page.page, 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.posts.is_empty());
    }

    #[test]
    fn test_paginate_never_exceeds_limit() {
        for limit in [1, 3, 7, 20] {
            for page in 0..10 {
                let result = paginate(posts(23), PageRequest { page, limit });
                assert!(result.posts.len() <= limit);
                assert_eq!(result.total_pages, 23usize.div_ceil(limit));
            }
        }
    }

    #[test]
    fn test_unique_tags_first_seen_order() {
        let mut first = Post::new(1, "First".to_string(), "first".to_string());
        first.tags = vec![
            Tag {
                id: 2,
                name: "rust".to_string(),
            },
            Tag {
                id: 1,
                name: "blog".to_string(),
            },
        ];
        let mut second = Post::new(2, "Second".to_string(), "second".to_string());
        second.tags = vec![
            Tag {
                id: 1,
                name: "blog".to_string(),
            },
            Tag {
                id: 3,
                name: "cli".to_string(),
            },
        ];

        let tags = unique_tags(&[first, second]);
        let ids: Vec<u64> = tags.iter().map(|tag| tag.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_unique_tags_has_no_duplicates() {
        let mut post = Post::new(1, "Post".to_string(), "post".to_string());
        post.tags = vec![
            Tag {
                id: 1,
                name: "blog".to_string(),
            },
            Tag {
                id: 1,
                name: "blog".to_string(),
            },
        ];
        assert_eq!(unique_tags(&[post]).len(), 1);
    }

    #[test]
    fn test_read_time_rounds_up() {
        let two_hundred = "word ".repeat(200);
        assert_eq!(read_time(&two_hundred), 1);

        let two_hundred_one = "word ".repeat(201);
        assert_eq!(read_time(&two_hundred_one), 2);

        assert_eq!(read_time("just a few words"), 1);
    }

    #[test]
    fn test_read_time_of_empty_text_is_zero() {
        assert_eq!(read_time(""), 0);
        assert_eq!(read_time("   \n\t  "), 0);
    }

    #[test]
    fn test_default_page_request() {
        let request = PageRequest::default();
        assert_eq!(request.page, 1);
        assert_eq!(request.limit, 20);
    }
}
