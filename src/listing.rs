//! In-memory machine listing, as the dashboard presents it
//!
//! The API always returns whole collections; searching, filtering and paging
//! happen over the fetched list. Every change recomputes the visible subset
//! with a single linear scan, which holds up fine for the tens-to-hundreds of
//! records an office carries.

use crate::models::{
    enums::{MachineCategory, MachineStatus},
    Machine,
};

/// Rows shown per page
pub const PAGE_SIZE: usize = 10;

/// Zero-padded inventory number, as printed on the asset label
pub fn padded_machine_id(machine_id: i32) -> String {
    format!("{:03}", machine_id)
}

/// Active search and filter state
#[derive(Debug, Clone, Default)]
pub struct MachineFilter {
    /// Case-insensitive substring, matched against name, padded inventory
    /// number and holder
    pub search: String,
    /// None means "all"
    pub status: Option<MachineStatus>,
    pub category: Option<MachineCategory>,
    pub location: Option<String>,
}

impl MachineFilter {
    pub fn matches(&self, machine: &Machine) -> bool {
        let term = self.search.to_lowercase();
        let matches_search = term.is_empty()
            || machine.name.to_lowercase().contains(&term)
            || padded_machine_id(machine.machine_id).contains(&term)
            || machine
                .assigned_user
                .as_deref()
                .map(|u| u.to_lowercase().contains(&term))
                .unwrap_or(false);

        let matches_status = self
            .status
            .map_or(true, |f| machine.status == f.storage_token());
        let matches_category = self
            .category
            .map_or(true, |f| machine.category == f.storage_token());
        let matches_location = self
            .location
            .as_deref()
            .map_or(true, |f| machine.location.as_deref() == Some(f));

        matches_search && matches_status && matches_category && matches_location
    }
}

/// A fetched machine collection plus the dashboard's view state
#[derive(Debug, Clone)]
pub struct MachineList {
    items: Vec<Machine>,
    filter: MachineFilter,
    /// 1-based current page
    page: usize,
}

impl MachineList {
    pub fn new(items: Vec<Machine>) -> Self {
        Self {
            items,
            filter: MachineFilter::default(),
            page: 1,
        }
    }

    /// Replace the source list (wholesale refresh after any mutation)
    pub fn set_items(&mut self, items: Vec<Machine>) {
        self.items = items;
        self.page = 1;
    }

    pub fn set_search(&mut self, term: &str) {
        self.filter.search = term.to_string();
        self.page = 1;
    }

    pub fn set_status_filter(&mut self, status: Option<MachineStatus>) {
        self.filter.status = status;
        self.page = 1;
    }

    pub fn set_category_filter(&mut self, category: Option<MachineCategory>) {
        self.filter.category = category;
        self.page = 1;
    }

    pub fn set_location_filter(&mut self, location: Option<String>) {
        self.filter.location = location;
        self.page = 1;
    }

    pub fn filter(&self) -> &MachineFilter {
        &self.filter
    }

    /// All machines passing the current filter, in source order
    pub fn filtered(&self) -> Vec<&Machine> {
        self.items.iter().filter(|m| self.filter.matches(m)).collect()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        let len = self.filtered().len();
        std::cmp::max(1, len.div_ceil(PAGE_SIZE))
    }

    /// Move to a page, clamped to the valid range
    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages());
    }

    /// The current page of the filtered list
    pub fn visible(&self) -> Vec<&Machine> {
        let filtered = self.filtered();
        let start = (self.page - 1) * PAGE_SIZE;
        filtered
            .into_iter()
            .skip(start)
            .take(PAGE_SIZE)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn machine(id: i32, name: &str, status: &str, category: &str, user: Option<&str>) -> Machine {
        Machine {
            id,
            name: name.to_string(),
            machine_id: id,
            category: category.to_string(),
            status: status.to_string(),
            processor: None,
            ram: None,
            storage: None,
            location: None,
            assigned_user: user.map(str::to_string),
            agent_url: None,
            description: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn fleet(n: i32) -> Vec<Machine> {
        (1..=n)
            .map(|i| machine(i, &format!("DESKTOP{:02}", i), "em uso", "máquina", None))
            .collect()
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let mut list = MachineList::new(vec![
            machine(1, "DESKTOP01", "em uso", "máquina", None),
            machine(2, "Notebook RH", "disponível", "máquina", None),
        ]);
        list.set_search("desktop");
        assert_eq!(list.filtered().len(), 1);
        assert_eq!(list.filtered()[0].name, "DESKTOP01");
    }

    #[test]
    fn test_search_matches_padded_machine_id() {
        let mut list = MachineList::new(vec![
            machine(7, "DESKTOP07", "em uso", "máquina", None),
            machine(70, "DESKTOP70", "em uso", "máquina", None),
        ]);
        list.set_search("007");
        let found = list.filtered();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].machine_id, 7);
    }

    #[test]
    fn test_search_matches_assigned_user() {
        let mut list = MachineList::new(vec![
            machine(1, "DESKTOP01", "em uso", "máquina", Some("Maria")),
            machine(2, "DESKTOP02", "em uso", "máquina", Some("João")),
        ]);
        list.set_search("maria");
        assert_eq!(list.filtered().len(), 1);
    }

    #[test]
    fn test_filters_intersect_with_search() {
        let mut list = MachineList::new(vec![
            machine(1, "DESKTOP01", "em uso", "máquina", None),
            machine(2, "DESKTOP02", "disponível", "máquina", None),
            machine(3, "MONITOR01", "disponível", "monitor", None),
        ]);
        list.set_search("desktop");
        list.set_status_filter(Some(MachineStatus::Disponivel));
        let found = list.filtered();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].machine_id, 2);
    }

    #[test]
    fn test_none_filter_means_all() {
        let list = MachineList::new(vec![
            machine(1, "DESKTOP01", "em uso", "máquina", None),
            machine(2, "MONITOR01", "disponível", "monitor", None),
        ]);
        assert_eq!(list.filtered().len(), 2);
    }

    #[test]
    fn test_last_page_holds_the_remainder() {
        let mut list = MachineList::new(fleet(23));
        assert_eq!(list.total_pages(), 3);
        list.set_page(3);
        assert_eq!(list.visible().len(), 3);
    }

    #[test]
    fn test_exact_multiple_fills_the_last_page() {
        let mut list = MachineList::new(fleet(20));
        assert_eq!(list.total_pages(), 2);
        list.set_page(2);
        assert_eq!(list.visible().len(), PAGE_SIZE);
    }

    #[test]
    fn test_empty_result_still_has_one_page() {
        let mut list = MachineList::new(fleet(5));
        list.set_search("no such machine");
        assert_eq!(list.total_pages(), 1);
        assert!(list.visible().is_empty());
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut list = MachineList::new(fleet(30));
        list.set_page(3);
        assert_eq!(list.page(), 3);
        list.set_search("desktop");
        assert_eq!(list.page(), 1);

        list.set_page(2);
        list.set_status_filter(Some(MachineStatus::EmUso));
        assert_eq!(list.page(), 1);
    }

    #[test]
    fn test_source_refresh_resets_page() {
        let mut list = MachineList::new(fleet(30));
        list.set_page(2);
        list.set_items(fleet(12));
        assert_eq!(list.page(), 1);
    }

    #[test]
    fn test_set_page_clamps_to_range() {
        let mut list = MachineList::new(fleet(15));
        list.set_page(99);
        assert_eq!(list.page(), 2);
        list.set_page(0);
        assert_eq!(list.page(), 1);
    }
}
