//! The four content panels, one per [`crate::types::TabId`].
//!
//! Panels are pure composition: they feed [`crate::content`] data into the
//! generic card/article/rank components and hold no state of their own.

use leptos::prelude::*;

use super::article::ConstitutionArticle;
use super::card::{CardVariant, DominionCard};
use super::hierarchy::HierarchySection;
use crate::content::{
    ARTICLES, EARTH_FAILURES, GOVERNMENT_BRANCHES, ORDERS, OVERVIEW_CARDS, PRINCIPLE_CARDS,
};
use crate::types::{Branch, TabId};

/// Render the panel for a tab id. This is the id → panel map of the tab
/// controller; the closed enum means there is no unknown-id arm to handle
/// here (string ids are resolved by `TabId::from_id` at the boundary).
pub fn panel_for(tab: TabId) -> AnyView {
    match tab {
        TabId::Overview => view! { <OverviewPanel /> }.into_any(),
        TabId::Constitution => view! { <ConstitutionPanel /> }.into_any(),
        TabId::Hierarchy => view! { <HierarchyPanel /> }.into_any(),
        TabId::Principles => view! { <PrinciplesPanel /> }.into_any(),
    }
}

fn branch_list(branch: &Branch) -> impl IntoView {
    view! {
        <div class="branch">
            <h4 class="branch-title">{branch.title}</h4>
            <ul class="branch-items">
                {branch
                    .items
                    .iter()
                    .map(|&item| view! { <li>{item}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

/// Institution cards plus the government structure card.
#[component]
pub fn OverviewPanel() -> impl IntoView {
    view! {
        <div class="panel-stack">
            <div class="card-grid">
                {OVERVIEW_CARDS
                    .iter()
                    .enumerate()
                    .map(|(index, card)| view! {
                        <DominionCard
                            title=card.title
                            icon=card.icon
                            variant=CardVariant::Feature
                            reveal_delay_ms=(index as u32 + 1) * 100
                        >
                            <p class="card-subtitle">{card.subtitle}</p>
                            <p class="card-text">{card.body}</p>
                        </DominionCard>
                    })
                    .collect::<Vec<_>>()}
            </div>

            <DominionCard
                title="Government Structure"
                variant=CardVariant::Section
                reveal_delay_ms=400
            >
                <p class="card-subtitle">
                    "A balance of imperial wisdom and democratic representation"
                </p>
                <div class="branch-grid">
                    {GOVERNMENT_BRANCHES.iter().map(branch_list).collect::<Vec<_>>()}
                </div>
            </DominionCard>
        </div>
    }
}

/// The six constitution articles in a scrollable column.
#[component]
pub fn ConstitutionPanel() -> impl IntoView {
    view! {
        <div class="panel-stack scroll-column">
            {ARTICLES
                .iter()
                .map(|article| view! {
                    <ConstitutionArticle
                        title=article.title
                        icon=article.icon
                        sections=article.sections.to_vec()
                    />
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// The three rank orders.
#[component]
pub fn HierarchyPanel() -> impl IntoView {
    view! {
        <div class="panel-stack">
            {ORDERS
                .iter()
                .map(|order| view! {
                    <HierarchySection
                        title=order.title
                        icon=order.icon
                        description=order.description
                        ranks=order.ranks.to_vec()
                    />
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// Principles cards plus the "Avoiding Earth's Failures" comparison card.
#[component]
pub fn PrinciplesPanel() -> impl IntoView {
    view! {
        <div class="panel-stack">
            <div class="card-grid-2">
                {PRINCIPLE_CARDS
                    .iter()
                    .map(|card| {
                        let count = card.sections.len();
                        view! {
                            <DominionCard title=card.title variant=CardVariant::Feature>
                                <div class="article-sections">
                                    {card
                                        .sections
                                        .iter()
                                        .enumerate()
                                        .map(|(index, section)| view! {
                                            <div class="article-section">
                                                <h4 class="article-section-title">
                                                    {section.title}
                                                </h4>
                                                <p class="article-section-body">
                                                    {section.content}
                                                </p>
                                                {(index + 1 < count).then(|| view! {
                                                    <hr class="section-divider" />
                                                })}
                                            </div>
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            </DominionCard>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <DominionCard title="Avoiding Earth's Failures" variant=CardVariant::Section>
                <p class="card-subtitle">
                    "How the Starborn Dominion addresses historical political failures"
                </p>
                <div class="branch-grid">
                    {EARTH_FAILURES.iter().map(branch_list).collect::<Vec<_>>()}
                </div>
            </DominionCard>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn each_panel_renders_only_its_own_content() {
        let overview = panel_for(TabId::Overview).to_html();
        assert!(overview.contains("Government Structure"));
        assert!(!overview.contains("Article I"));
        assert!(!overview.contains("Grand Master of Harmony"));

        let constitution = panel_for(TabId::Constitution).to_html();
        assert!(constitution.contains("Article I – Core Principles"));
        assert!(constitution.contains("Article VI – The Guardian Order"));
        assert!(!constitution.contains("Government Structure"));

        let hierarchy = panel_for(TabId::Hierarchy).to_html();
        assert!(hierarchy.contains("Grand Master of Harmony"));
        assert!(!hierarchy.contains("Article I"));

        let principles = panel_for(TabId::Principles).to_html();
        assert!(principles.contains("Avoiding Earth's Failures"));
        assert!(!principles.contains("Grand Master of Harmony"));
    }

    #[test]
    fn constitution_panel_divider_count_matches_section_counts() {
        let html = panel_for(TabId::Constitution).to_html();
        let expected: usize = ARTICLES
            .iter()
            .map(|article| article.sections.len().saturating_sub(1))
            .sum();
        assert_eq!(html.matches("section-divider").count(), expected);
    }

    #[test]
    fn hierarchy_panel_renders_every_rank_row() {
        let html = panel_for(TabId::Hierarchy).to_html();
        let expected: usize = ORDERS.iter().map(|order| order.ranks.len()).sum();
        assert_eq!(html.matches("rank-row").count(), expected);
    }
}
