//! 列表搜尋（不分大小寫的部分比對）

/// 可依名稱搜尋的記錄
pub trait Searchable {
    /// 搜尋比對的欄位
    fn search_key(&self) -> &str;

    /// 不分大小寫包含比對；空字串符合所有記錄
    fn matches_search(&self, term: &str) -> bool {
        self.search_key()
            .to_lowercase()
            .contains(&term.to_lowercase())
    }
}

/// 過濾出符合搜尋字串的記錄，保持原順序
pub fn filter_by_search<'a, T: Searchable>(items: &'a [T], term: &str) -> Vec<&'a T> {
    items.iter().filter(|item| item.matches_search(term)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str);

    impl Searchable for Named {
        fn search_key(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert!(Named("Bolt M8").matches_search("bolt"));
        assert!(Named("Bolt M8").matches_search("M8"));
        assert!(!Named("Bolt M8").matches_search("nut"));
    }

    #[test]
    fn test_empty_term_matches_all() {
        let items = [Named("A"), Named("B")];
        assert_eq!(filter_by_search(&items, "").len(), 2);
    }

    #[test]
    fn test_filter_keeps_order() {
        let items = [Named("Nut M8"), Named("Bolt M8"), Named("Nut M10")];
        let found: Vec<_> = filter_by_search(&items, "nut").iter().map(|n| n.0).collect();
        assert_eq!(found, vec!["Nut M8", "Nut M10"]);
    }
}
