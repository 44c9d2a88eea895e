//! Client-side collection view: status filtering and pagination over the
//! in-memory campaign list.
//!
//! Filtering is exact-match and order-preserving; pagination is a fixed
//! five rows per page with 1-based page numbers. The service never pages
//! or filters server-side, so this is the only slicing that happens.

use adscope_api::{Campaign, CampaignStatus};

/// Rows per table page.
pub const PAGE_SIZE: usize = 5;

// ── Status filter ────────────────────────────────────────────────────

/// Which campaigns the list shows.
///
/// `All` passes everything through; the concrete variants keep exactly the
/// campaigns whose status matches. Unknown statuses only ever appear under
/// `All`. Parsing (`FromStr` via strum) accepts the exact lowercase names.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Paused,
    Completed,
}

impl StatusFilter {
    /// Capitalized form for filter bars and hint lines.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Paused => "Paused",
            Self::Completed => "Completed",
        }
    }

    /// Whether a campaign with this status passes the filter.
    pub fn matches(self, status: &CampaignStatus) -> bool {
        match self {
            Self::All => true,
            Self::Active => *status == CampaignStatus::Active,
            Self::Paused => *status == CampaignStatus::Paused,
            Self::Completed => *status == CampaignStatus::Completed,
        }
    }

    /// The next filter in cycling order (wraps back to `All`).
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Active,
            Self::Active => Self::Paused,
            Self::Paused => Self::Completed,
            Self::Completed => Self::All,
        }
    }
}

/// Keep the campaigns passing `filter`, in their original order.
pub fn filter_campaigns(campaigns: &[Campaign], filter: StatusFilter) -> Vec<&Campaign> {
    campaigns
        .iter()
        .filter(|c| filter.matches(&c.status))
        .collect()
}

// ── Summary ──────────────────────────────────────────────────────────

/// Headline numbers for the list view cards, computed over the full
/// (unfiltered) campaign list.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CampaignSummary {
    pub active: usize,
    pub paused: usize,
    pub total_budget: f64,
    pub total_daily_budget: f64,
}

impl CampaignSummary {
    pub fn of(campaigns: &[Campaign]) -> Self {
        let mut summary = Self::default();
        for campaign in campaigns {
            match campaign.status {
                CampaignStatus::Active => summary.active += 1,
                CampaignStatus::Paused => summary.paused += 1,
                _ => {}
            }
            summary.total_budget += campaign.budget;
            summary.total_daily_budget += campaign.daily_budget;
        }
        summary
    }
}

// ── Pager ────────────────────────────────────────────────────────────

/// Pagination state for the filtered campaign list.
///
/// Pages are 1-based and there is always at least one page, so
/// `page ∈ 1..=total_pages` holds even for an empty list. Changing the
/// filter resets to page 1; shrinking the row count clamps the page back
/// into range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CampaignPager {
    filter: StatusFilter,
    page: usize,
    count: usize,
}

impl CampaignPager {
    pub fn new() -> Self {
        Self {
            filter: StatusFilter::All,
            page: 1,
            count: 0,
        }
    }

    pub fn filter(&self) -> StatusFilter {
        self.filter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        self.count.div_ceil(PAGE_SIZE).max(1)
    }

    /// Update the filtered row count, clamping the page back into range.
    pub fn set_count(&mut self, count: usize) {
        self.count = count;
        self.page = self.page.min(self.total_pages());
    }

    /// Switch filters. A changed filter resets to page 1; re-applying the
    /// current filter keeps the page.
    pub fn set_filter(&mut self, filter: StatusFilter) {
        if filter != self.filter {
            self.filter = filter;
            self.page = 1;
        }
    }

    /// Advance to the next filter in cycling order.
    pub fn cycle_filter(&mut self) {
        self.set_filter(self.filter.next());
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn prev_page(&mut self) {
        if self.has_prev() {
            self.page -= 1;
        }
    }

    pub fn next_page(&mut self) {
        if self.has_next() {
            self.page += 1;
        }
    }

    /// Jump to a page, clamped into `1..=total_pages`.
    pub fn goto(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages());
    }

    /// Index range of the visible slice within the filtered list.
    pub fn page_range(&self) -> std::ops::Range<usize> {
        let start = (self.page - 1) * PAGE_SIZE;
        let end = (start + PAGE_SIZE).min(self.count);
        start..end.max(start)
    }
}

impl Default for CampaignPager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn campaign(id: &str, status: CampaignStatus) -> Campaign {
        Campaign {
            id: id.into(),
            name: format!("Campaign {id}"),
            status,
            budget: 1000.0,
            daily_budget: 100.0,
            platforms: Vec::new(),
            brand_id: "brand-1".into(),
            created_at: "2025-01-05T09:30:00Z".into(),
        }
    }

    fn sample_list() -> Vec<Campaign> {
        vec![
            campaign("c1", CampaignStatus::Active),
            campaign("c2", CampaignStatus::Paused),
            campaign("c3", CampaignStatus::Active),
            campaign("c4", CampaignStatus::Completed),
        ]
    }

    #[test]
    fn filter_active_keeps_order() {
        let campaigns = sample_list();
        let filtered = filter_campaigns(&campaigns, StatusFilter::Active);

        let ids: Vec<&str> = filtered.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c1", "c3"]);
    }

    #[test]
    fn filter_all_passes_everything_unchanged() {
        let campaigns = sample_list();
        let filtered = filter_campaigns(&campaigns, StatusFilter::All);

        assert_eq!(filtered.len(), 4);
        let ids: Vec<&str> = filtered.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c1", "c2", "c3", "c4"]);
    }

    #[test]
    fn unknown_status_only_matches_all() {
        let campaigns = vec![campaign("cx", CampaignStatus::Other("archived".into()))];

        assert_eq!(filter_campaigns(&campaigns, StatusFilter::All).len(), 1);
        assert!(filter_campaigns(&campaigns, StatusFilter::Active).is_empty());
        assert!(filter_campaigns(&campaigns, StatusFilter::Paused).is_empty());
    }

    #[test]
    fn filter_parses_exact_lowercase_only() {
        assert_eq!("active".parse::<StatusFilter>(), Ok(StatusFilter::Active));
        assert_eq!("all".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert!("Active".parse::<StatusFilter>().is_err());
        assert!("act".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn filter_cycle_order() {
        assert_eq!(StatusFilter::All.next(), StatusFilter::Active);
        assert_eq!(StatusFilter::Active.next(), StatusFilter::Paused);
        assert_eq!(StatusFilter::Paused.next(), StatusFilter::Completed);
        assert_eq!(StatusFilter::Completed.next(), StatusFilter::All);
    }

    #[test]
    fn summary_counts_and_budgets() {
        let summary = CampaignSummary::of(&sample_list());

        assert_eq!(summary.active, 2);
        assert_eq!(summary.paused, 1);
        assert_eq!(summary.total_budget, 4000.0);
        assert_eq!(summary.total_daily_budget, 400.0);
    }

    #[test]
    fn twelve_rows_make_three_pages() {
        let mut pager = CampaignPager::new();
        pager.set_count(12);

        assert_eq!(pager.total_pages(), 3);
        assert_eq!(pager.page_range(), 0..5);

        pager.goto(3);
        assert_eq!(pager.page_range(), 10..12);
    }

    #[test]
    fn prev_next_disabled_exactly_at_bounds() {
        let mut pager = CampaignPager::new();
        pager.set_count(12);

        assert!(!pager.has_prev());
        assert!(pager.has_next());

        pager.goto(2);
        assert!(pager.has_prev());
        assert!(pager.has_next());

        pager.goto(3);
        assert!(pager.has_prev());
        assert!(!pager.has_next());

        // Clamped no-ops at the edges.
        pager.next_page();
        assert_eq!(pager.page(), 3);
        pager.goto(1);
        pager.prev_page();
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn changing_filter_resets_to_page_one() {
        let mut pager = CampaignPager::new();
        pager.set_count(12);
        pager.goto(3);

        pager.set_filter(StatusFilter::Active);
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn reapplying_same_filter_keeps_page() {
        let mut pager = CampaignPager::new();
        pager.set_count(12);
        pager.goto(2);

        pager.set_filter(StatusFilter::All);
        assert_eq!(pager.page(), 2);
    }

    #[test]
    fn empty_list_is_one_empty_page() {
        let pager = CampaignPager::new();

        assert_eq!(pager.total_pages(), 1);
        assert_eq!(pager.page(), 1);
        assert_eq!(pager.page_range(), 0..0);
        assert!(!pager.has_prev());
        assert!(!pager.has_next());
    }

    #[test]
    fn shrinking_count_clamps_page() {
        let mut pager = CampaignPager::new();
        pager.set_count(12);
        pager.goto(3);

        pager.set_count(7);
        assert_eq!(pager.total_pages(), 2);
        assert_eq!(pager.page(), 2);
        assert_eq!(pager.page_range(), 5..7);
    }
}
