//! `campaigns` subcommands: list, show, insights.

use owo_colors::OwoColorize;
use tabled::Tabled;

use adscope_core::metrics::{self, DerivedMetrics};
use adscope_core::{
    Campaign, CampaignInsights, CampaignPager, CampaignSummary, Controller, Platform, StatusFilter,
    fmt, view,
};

use crate::cli::{CampaignsArgs, CampaignsCommand, GlobalOpts, ListArgs, OutputFormat};
use crate::error::CliError;
use crate::output;

pub async fn handle(
    controller: &Controller,
    args: CampaignsArgs,
    global: &GlobalOpts,
    format: OutputFormat,
) -> Result<(), CliError> {
    match args.command {
        CampaignsCommand::List(list_args) => list(controller, &list_args, global, format).await,
        CampaignsCommand::Show { id } => show(controller, &id, format).await,
        CampaignsCommand::Insights { id } => insights(controller, &id, format).await,
    }
}

// ── List ─────────────────────────────────────────────────────────────

/// Table row for `campaigns list`.
#[derive(Tabled)]
pub struct CampaignRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Platforms")]
    platforms: String,
    #[tabled(rename = "Budget")]
    budget: String,
    #[tabled(rename = "Daily")]
    daily: String,
    #[tabled(rename = "Created")]
    created: String,
}

impl From<&Campaign> for CampaignRow {
    fn from(campaign: &Campaign) -> Self {
        Self {
            id: campaign.id.clone(),
            name: campaign.name.clone(),
            status: campaign.status.label(),
            platforms: platform_list(campaign),
            budget: fmt::currency(campaign.budget),
            daily: fmt::currency(campaign.daily_budget),
            created: fmt::date_short(&campaign.created_at),
        }
    }
}

impl output::Listed for Campaign {
    type Row = CampaignRow;

    fn row(&self) -> CampaignRow {
        CampaignRow::from(self)
    }

    fn key(&self) -> String {
        self.id.clone()
    }
}

async fn list(
    controller: &Controller,
    args: &ListArgs,
    global: &GlobalOpts,
    format: OutputFormat,
) -> Result<(), CliError> {
    // Validate the filter before touching the network
    let filter = parse_filter(args.status.as_deref())?;

    let campaigns = controller.fetch_campaigns().await?;
    let filtered = view::filter_campaigns(&campaigns, filter);

    let mut pager = CampaignPager::new();
    pager.set_count(filtered.len());

    let visible: &[&Campaign] = if args.all_pages {
        &filtered
    } else {
        pager.goto(args.page);
        &filtered[pager.page_range()]
    };

    output::emit(&output::render_list(format, visible));

    // Summary and paging hints go to stderr so stdout stays parseable
    if format == OutputFormat::Table {
        let colors = output::should_color(global.no_color);
        eprintln!("{}", summary_line(&CampaignSummary::of(&campaigns), colors));
        if !args.all_pages && pager.total_pages() > 1 {
            eprintln!(
                "Page {} of {} (use --page or --all-pages for more)",
                pager.page(),
                pager.total_pages()
            );
        }
    }
    Ok(())
}

fn parse_filter(raw: Option<&str>) -> Result<StatusFilter, CliError> {
    match raw {
        None => Ok(StatusFilter::All),
        Some(value) => value.parse().map_err(|_| CliError::Validation {
            field: "status".into(),
            reason: format!("unknown filter '{value}' (expected all, active, paused, or completed)"),
        }),
    }
}

fn summary_line(summary: &CampaignSummary, colors: bool) -> String {
    let budgets = format!(
        "{} total budget, {} daily",
        fmt::budget_k(summary.total_budget),
        fmt::budget_k(summary.total_daily_budget)
    );
    if colors {
        format!(
            "{} active, {} paused, {budgets}",
            summary.active.green(),
            summary.paused.yellow()
        )
    } else {
        format!(
            "{} active, {} paused, {budgets}",
            summary.active, summary.paused
        )
    }
}

// ── Show ─────────────────────────────────────────────────────────────

async fn show(controller: &Controller, id: &str, format: OutputFormat) -> Result<(), CliError> {
    let campaign = controller.fetch_campaign(id).await?;

    let out = output::render_one(
        format,
        &campaign,
        || detail(&campaign),
        || campaign.id.clone(),
    );
    output::emit(&out);
    Ok(())
}

fn detail(campaign: &Campaign) -> String {
    let brand = if campaign.brand_id.is_empty() {
        "-"
    } else {
        campaign.brand_id.as_str()
    };

    let mut lines = vec![
        format!("ID:        {}", campaign.id),
        format!("Name:      {}", campaign.name),
        format!("Status:    {}", campaign.status.label()),
        format!("Platforms: {}", platform_list(campaign)),
        format!("Brand:     {brand}"),
        format!("Budget:    {}", fmt::currency(campaign.budget)),
        format!("Daily:     {}", fmt::currency(campaign.daily_budget)),
    ];
    if let Some(days) = metrics::estimated_duration_days(campaign.budget, campaign.daily_budget) {
        lines.push(format!("Duration:  ~{days} days"));
    }
    lines.push(format!("Created:   {}", fmt::date_short(&campaign.created_at)));
    lines.join("\n")
}

fn platform_list(campaign: &Campaign) -> String {
    if campaign.platforms.is_empty() {
        return "-".into();
    }
    campaign
        .platforms
        .iter()
        .map(Platform::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

// ── Insights ─────────────────────────────────────────────────────────

async fn insights(controller: &Controller, id: &str, format: OutputFormat) -> Result<(), CliError> {
    let insights = controller.fetch_campaign_insights(id).await?;

    let out = output::render_one(
        format,
        &insights,
        || insights_detail(&insights),
        || id.to_owned(),
    );
    output::emit(&out);
    Ok(())
}

/// Raw counters first, upstream ratios second, locally derived efficiency
/// metrics last. JSON and YAML emit the wire payload untouched; the derived
/// values are a table-view concern.
fn insights_detail(insights: &CampaignInsights) -> String {
    let derived = DerivedMetrics::from_insights(insights);
    [
        format!(
            "Impressions:        {}",
            fmt::compact_number(insights.impressions as f64)
        ),
        format!(
            "Clicks:             {}",
            fmt::compact_number(insights.clicks as f64)
        ),
        format!(
            "Conversions:        {}",
            fmt::compact_number(insights.conversions as f64)
        ),
        format!("Spend:              {}", fmt::currency(insights.spend)),
        String::new(),
        format!("CTR:                {:.2}%", derived.ctr),
        format!("CPC:                ${:.2}", derived.cpc),
        format!("Conversion rate:    {:.2}%", derived.conversion_rate),
        format!("CPM:                ${:.3}", derived.cpm),
        String::new(),
        format!(
            "Cost / conversion:  {}",
            fmt::currency(derived.cost_per_conversion)
        ),
        format!(
            "Impressions / conv: {:.0}",
            derived.impressions_per_conversion
        ),
        format!("Clicks / conv:      {:.1}", derived.clicks_per_conversion),
        format!("Updated:            {}", fmt::date_long(&insights.timestamp)),
    ]
    .join("\n")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use adscope_core::CampaignStatus;

    use super::*;

    fn sample() -> Campaign {
        Campaign {
            id: "c42".into(),
            name: "Spring Launch".into(),
            status: CampaignStatus::Active,
            budget: 50_000.0,
            daily_budget: 1_500.0,
            platforms: vec![Platform::Meta, Platform::Google],
            brand_id: "brand-7".into(),
            created_at: "2025-01-05T09:30:00Z".into(),
        }
    }

    #[test]
    fn detail_lists_every_field() {
        insta::assert_snapshot!(detail(&sample()), @r"
        ID:        c42
        Name:      Spring Launch
        Status:    Active
        Platforms: meta, google
        Brand:     brand-7
        Budget:    $50,000.00
        Daily:     $1,500.00
        Duration:  ~33 days
        Created:   Jan 5, 2025
        ");
    }

    #[test]
    fn detail_omits_duration_without_daily_budget() {
        let mut campaign = sample();
        campaign.daily_budget = 0.0;
        campaign.brand_id = String::new();

        let text = detail(&campaign);
        assert!(!text.contains("Duration:"));
        assert!(text.contains("Brand:     -"));
    }

    #[test]
    fn insights_detail_renders_derived_metrics() {
        let insights = CampaignInsights {
            impressions: 1000,
            clicks: 50,
            conversions: 5,
            spend: 100.0,
            ctr: 5.0,
            cpc: 2.0,
            conversion_rate: 10.0,
            timestamp: "2025-01-05T09:30:00Z".into(),
        };

        insta::assert_snapshot!(insights_detail(&insights), @r"
        Impressions:        1.0K
        Clicks:             50
        Conversions:        5
        Spend:              $100.00

        CTR:                5.00%
        CPC:                $2.00
        Conversion rate:    10.00%
        CPM:                $100.000

        Cost / conversion:  $20.00
        Impressions / conv: 200
        Clicks / conv:      10.0
        Updated:            Jan 5, 2025 09:30
        ");
    }

    #[test]
    fn row_keeps_unknown_status_text() {
        let mut campaign = sample();
        campaign.status = CampaignStatus::Other("archived".into());

        let row = CampaignRow::from(&campaign);
        assert_eq!(row.status, "Archived");
    }

    #[test]
    fn filter_parsing_rejects_unknown_values() {
        assert!(matches!(parse_filter(Some("all")), Ok(StatusFilter::All)));
        assert!(matches!(
            parse_filter(Some("archived")),
            Err(CliError::Validation { .. })
        ));
        assert!(matches!(parse_filter(None), Ok(StatusFilter::All)));
    }

    #[test]
    fn summary_line_without_color_is_plain() {
        let summary = CampaignSummary {
            active: 3,
            paused: 2,
            total_budget: 250_000.0,
            total_daily_budget: 8_500.0,
        };

        assert_eq!(
            summary_line(&summary, false),
            "3 active, 2 paused, $250.0K total budget, $8.5K daily"
        );
    }
}
