//! Summary counters

use chrysalis_core::DashboardSummary;
use leptos::prelude::*;

/// Label and value of each counter, in display order
#[must_use]
pub const fn stat_cards(summary: DashboardSummary) -> [(&'static str, u64); 3] {
    [
        ("Total Clients", summary.total_doctors),
        ("Active Clients", summary.active_doctors),
        ("Total Users", summary.total_patients),
    ]
}

/// Three counter cards; renders nothing without a summary
#[component]
pub fn StatsGrid(
    /// Counters from the dashboard payload
    summary: Option<DashboardSummary>,
) -> impl IntoView {
    summary.map(|summary| {
        view! {
            <section class="admin-stats">
                {stat_cards(summary)
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="stat-card">
                                <div class="stat-label">{label}</div>
                                <div class="stat-value">{value}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
        }
    })
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stat_cards_render_counters_verbatim() {
        let summary = DashboardSummary {
            total_doctors: 7,
            active_doctors: 3,
            total_patients: 42,
        };

        assert_eq!(
            stat_cards(summary),
            [
                ("Total Clients", 7),
                ("Active Clients", 3),
                ("Total Users", 42),
            ]
        );
    }
}
