//! Filter and paging state for the post table.

/// Title/tag/author filters plus paging. Any change that affects the
/// result set snaps back to the first page; no-op changes leave the state
/// untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostFilters {
    pub title: String,
    pub tags: Vec<String>,
    pub user_name: String,
    pub page: u32,
    pub page_size: u32,
}

impl Default for PostFilters {
    fn default() -> Self {
        Self {
            title: String::new(),
            tags: Vec::new(),
            user_name: String::new(),
            page: 1,
            page_size: 10,
        }
    }
}

impl PostFilters {
    pub fn set_title(&self, title: String) -> Self {
        Self {
            title,
            page: 1,
            ..self.clone()
        }
    }

    pub fn set_user_name(&self, user_name: String) -> Self {
        Self {
            user_name,
            page: 1,
            ..self.clone()
        }
    }

    pub fn add_tag(&self, tag: &str) -> Self {
        if self.tags.iter().any(|selected| selected.as_str() == tag) {
            return self.clone();
        }
        let mut tags = self.tags.clone();
        tags.push(tag.to_owned());
        Self {
            tags,
            page: 1,
            ..self.clone()
        }
    }

    pub fn remove_tag(&self, tag: &str) -> Self {
        if !self.tags.iter().any(|selected| selected.as_str() == tag) {
            return self.clone();
        }
        Self {
            tags: self
                .tags
                .iter()
                .filter(|selected| selected.as_str() != tag)
                .cloned()
                .collect(),
            page: 1,
            ..self.clone()
        }
    }

    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    pub fn with_page_size(&self, page_size: u32) -> Self {
        Self {
            page_size,
            page: 1,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adding_a_tag_resets_the_page() {
        let filters = PostFilters::default().with_page(4).add_tag("ai");
        assert_eq!(filters.tags, vec!["ai".to_owned()]);
        assert_eq!(filters.page, 1);
    }

    #[test]
    fn tags_keep_selection_order() {
        let filters = PostFilters::default().add_tag("ai").add_tag("web");
        assert_eq!(filters.tags, vec!["ai".to_owned(), "web".to_owned()]);
    }

    #[test]
    fn adding_a_selected_tag_is_a_noop() {
        let filters = PostFilters::default().add_tag("ai").with_page(3);
        let unchanged = filters.add_tag("ai");
        assert_eq!(unchanged, filters);
        assert_eq!(unchanged.page, 3);
    }

    #[test]
    fn removing_an_unselected_tag_is_a_noop() {
        let filters = PostFilters::default().add_tag("ai").with_page(3);
        let unchanged = filters.remove_tag("web");
        assert_eq!(unchanged, filters);
    }

    #[test]
    fn removing_a_selected_tag_resets_the_page() {
        let filters = PostFilters::default()
            .add_tag("ai")
            .add_tag("web")
            .with_page(2)
            .remove_tag("ai");
        assert_eq!(filters.tags, vec!["web".to_owned()]);
        assert_eq!(filters.page, 1);
    }

    #[test]
    fn title_and_author_changes_reset_the_page() {
        let filters = PostFilters::default().with_page(5).set_title("launch".into());
        assert_eq!(filters.page, 1);

        let filters = filters.with_page(5).set_user_name("ana".into());
        assert_eq!(filters.page, 1);
    }

    #[test]
    fn page_never_goes_below_one() {
        assert_eq!(PostFilters::default().with_page(0).page, 1);
    }

    #[test]
    fn page_size_change_resets_the_page() {
        let filters = PostFilters::default().with_page(3).with_page_size(50);
        assert_eq!(filters.page_size, 50);
        assert_eq!(filters.page, 1);
    }
}
