//! Static content of the Starborn Dominion constitution site.
//!
//! Everything on the page lives here as `const` data: the hero section,
//! the overview cards, the six constitution articles, the three hierarchy
//! orders and the principles cards. Content is immutable and baked into
//! the build; components receive it as props and never mutate it.

use crate::components::icons::{
    ICON_BADGE, ICON_CROWN, ICON_GAVEL, ICON_GLOBE, ICON_LIGHTNING, ICON_SHIELD, ICON_STAR,
    ICON_USERS,
};
use crate::types::{Article, Branch, OverviewCard, PrincipleCard, RankOrder, Section};

// =============================================================================
// Hero
// =============================================================================

/// Site title shown in the hero and the navigation brand.
pub const SITE_TITLE: &str = "Starborn Dominion";

/// Hero lead paragraph.
pub const HERO_LEAD: &str = "A post-Earth civilization founded on the principles of \
balanced power, merit-based leadership, and universal rights for all sentient beings.";

/// Constitutional preamble, quoted in the hero.
pub const PREAMBLE: &str = "We, the sentient peoples of the Starborn Dominion—united in \
purpose, diversity, and cosmic vision—do hereby ordain and establish this Constitution \
to secure justice, liberty, and prosperity for all our worlds and to sustain our legacy \
across generations.";

/// Hero badges: (icon path, label).
pub const HERO_BADGES: &[(&str, &str)] = &[
    (ICON_USERS, "Constitutional Monarchy"),
    (ICON_SHIELD, "Guardian Order"),
    (ICON_GAVEL, "Merit-Based Rule"),
];

// =============================================================================
// Overview
// =============================================================================

/// The three institution cards at the top of the overview panel.
pub const OVERVIEW_CARDS: &[OverviewCard] = &[
    OverviewCard {
        title: "The Emperor",
        icon: ICON_CROWN,
        subtitle: "Guardian of Constitutional Order",
        body: "Serves 33-year terms as symbolic head of state and cosmic peace keeper. \
               Succession through merit-based Empyreal Trials, not inheritance.",
    },
    OverviewCard {
        title: "Celestial Council",
        icon: ICON_USERS,
        subtitle: "Wisdom of the Colonies",
        body: "9-13 representatives from major planetary colonies and key disciplines, \
               serving as constitutional guardians and imperial advisors.",
    },
    OverviewCard {
        title: "Guardian Order",
        icon: ICON_SHIELD,
        subtitle: "Protectors of Peace",
        body: "Philosopher-warriors trained in ethics, diplomacy, and defense. \
               Forbidden from politics, sworn only to constitutional harmony.",
    },
];

/// The two branch lists inside the "Government Structure" card.
pub const GOVERNMENT_BRANCHES: &[Branch] = &[
    Branch {
        title: "Executive Branch",
        items: &[
            "Emperor/Empress (33-year terms)",
            "Celestial Council (9-13 members)",
            "Planetary Governors (6-year terms)",
            "Elder Advisors (former Emperors)",
        ],
    },
    Branch {
        title: "Legislative Branch",
        items: &[
            "Senate of Free Peoples",
            "One delegate per million citizens",
            "Bi-annual plenaries",
            "Budget and law authority",
        ],
    },
];

// =============================================================================
// Constitution articles
// =============================================================================

/// The six articles of the Constitution, in order.
pub const ARTICLES: &[Article] = &[
    Article {
        title: "Article I – Core Principles",
        icon: ICON_STAR,
        sections: &[
            Section {
                title: "Supremacy of the Constitution",
                content: "This Constitution is the supreme law of the Dominion. All branches \
                          of government, institutions, and citizens are bound by its provisions.",
            },
            Section {
                title: "Inalienable Rights",
                content: "Every sentient being within the Dominion is entitled to life, \
                          dignity, freedom of thought, equality before the law, and the \
                          pursuit of knowledge and purpose.",
            },
            Section {
                title: "Balance of Power",
                content: "Authority is distributed among the Emperor, Celestial Council, \
                          Senate of Free Peoples, and Planetary Governors to prevent \
                          concentration of power and safeguard liberty.",
            },
            Section {
                title: "Merit and Service",
                content: "Leadership and honors are earned through merit, service, and \
                          contribution, not by birthright alone.",
            },
            Section {
                title: "Transparency and Accountability",
                content: "All governmental actions, budgets, and laws shall be recorded on \
                          the Open Ledger and made accessible to the public.",
            },
        ],
    },
    Article {
        title: "Article II – The Emperor",
        icon: ICON_CROWN,
        sections: &[
            Section {
                title: "Title and Role",
                content: "The Emperor (or Empress) is the symbolic head of state and \
                          guardian of the Constitution and Cosmic Peace.",
            },
            Section {
                title: "Term and Succession",
                content: "The active term lasts thirty-three (33) standard years. Succession \
                          is determined by the Empyreal Trials: a merit-based process \
                          overseen by the Celestial Council. Upon completion of the term, \
                          the Emperor becomes an Elder Advisor with veto power only on \
                          constitutional amendments.",
            },
            Section {
                title: "Powers and Limitations",
                content: "Can propose legislation, declare emergencies, and represent the \
                          Dominion in external affairs. Cannot unilaterally amend the \
                          Constitution or dissolve the Celestial Council or Senate.",
            },
        ],
    },
    Article {
        title: "Article III – The Celestial Council",
        icon: ICON_USERS,
        sections: &[
            Section {
                title: "Composition",
                content: "Nine (9) to thirteen (13) members representing each major \
                          planetary colony and key disciplines (science, culture, ethics).",
            },
            Section {
                title: "Selection",
                content: "Appointed by the Senate and ratified by Imperial Citizens for \
                          nine-year staggered terms.",
            },
            Section {
                title: "Responsibilities",
                content: "Review and approve constitutional amendments. Advise the Emperor, \
                          especially on interplanetary crises. Oversee the Empyreal Trials \
                          and ethical AI operations.",
            },
        ],
    },
    Article {
        title: "Article IV – The Senate of Free Peoples",
        icon: ICON_GAVEL,
        sections: &[
            Section {
                title: "Representation",
                content: "Elected delegates from planetary districts—one delegate per \
                          million citizens.",
            },
            Section {
                title: "Legislative Authority",
                content: "Draft, debate, and pass legislation. Control Dominion budget and \
                          resource allocation. Impeach Governors or Council members for \
                          constitutional violations.",
            },
            Section {
                title: "Sessions and Voting",
                content: "Convene bi-annual plenaries on prescribed dates in the Imperial \
                          Capital and via holographic link. Require two-thirds majority to \
                          override an Emperor's veto.",
            },
        ],
    },
    Article {
        title: "Article V – Planetary Governors",
        icon: ICON_GLOBE,
        sections: &[
            Section {
                title: "Election and Term",
                content: "Elected by local citizens for six-year terms, renewable once.",
            },
            Section {
                title: "Jurisdiction",
                content: "Govern day-to-day affairs, local laws, and enforcement, subject \
                          to the Imperial Charter and Dominion statutes.",
            },
            Section {
                title: "Oversight",
                content: "Report annually to the Senate and Council; may be impeached by \
                          Senate vote.",
            },
        ],
    },
    Article {
        title: "Article VI – The Guardian Order",
        icon: ICON_SHIELD,
        sections: &[
            Section {
                title: "Mandate",
                content: "Protect the Constitution, Emperor, and citizens; uphold peace \
                          without engaging in politics.",
            },
            Section {
                title: "Structure and Training",
                content: "Recruits undergo at least fifteen (15) cycle training in ethics, \
                          defense, diplomacy, and philosophy at the Temple of Harmony.",
            },
            Section {
                title: "Restrictions",
                content: "Forbidden from running for political office or influencing \
                          legislation directly.",
            },
        ],
    },
];

// =============================================================================
// Orders & ranks
// =============================================================================

/// The three hierarchy orders, highest rank first inside each.
pub const ORDERS: &[RankOrder] = &[
    RankOrder {
        title: "The Guardian Order",
        icon: ICON_SHIELD,
        description: "Philosopher-warriors dedicated to protecting constitutional harmony",
        ranks: &[
            "Grand Master of Harmony – Supreme head, custodian of doctrine and ethics",
            "Masters of the Order – Lead regional Temples and train senior Guardians",
            "Knight Protectors – Full members sworn to the Oath of Harmony",
            "Sentinels – Mid-level Guardians specializing in intelligence, diplomacy, or protection",
            "Inquisitive Apprentices – Trainees learning philosophy, ethics, and foundational defense",
            "Novitiates – Initiates undergoing evaluation for formal apprenticeship",
        ],
    },
    RankOrder {
        title: "Imperial Military Command",
        icon: ICON_LIGHTNING,
        description: "Defenders of the Dominion across all worlds and star systems",
        ranks: &[
            "Supreme Commander of Forces – Answers directly to the Emperor",
            "Fleet Admirals / Field Marshals – Command entire starfleets or planetary defense theaters",
            "Fleet Captains / General Officers – Lead individual capital ships or army corps",
            "Lieutenant Commanders / Senior Officers – Tactical leaders of squadrons, brigades, or regiments",
            "Lieutenants / Junior Officers – Unit-level command (platoons, starfighter wings)",
            "Enlisted Guardians / Soldiers – Front-line forces: Pilots, Ship Crews, Marine Corps, Armored Divisions, Support Corps",
        ],
    },
    RankOrder {
        title: "Imperial Rangers & Police Forces",
        icon: ICON_BADGE,
        description: "Keepers of peace and order across frontier and urban territories",
        ranks: &[
            "Commissioner of Peace – Head of all civil enforcement agencies",
            "Chief Ranger / Chief Inspector – Regional leads for Rangers (frontier) or Police (urban)",
            "Ranger Captains / Police Commanders – Oversee companies or precincts",
            "Ranger Lieutenants / Detective Sergeants – Lead patrols, investigations, and specialized units",
            "Rangers / Patrol Officers – Frontier law enforcement, environmental protection",
            "Constables / Junior Patrols – Entry-level civic security, community engagement",
            "Civic Marshals – Trained negotiators and emergency response liaisons",
        ],
    },
];

// =============================================================================
// Core principles
// =============================================================================

/// The two principles cards (philosophy and technology).
pub const PRINCIPLE_CARDS: &[PrincipleCard] = &[
    PrincipleCard {
        title: "Founding Philosophy",
        sections: &[
            Section {
                title: "Balance of Power",
                content: "Power flows both upwards and downwards. The Emperor governs not \
                          by control but by service, balanced by the Celestial Council, \
                          Senate, and local governance.",
            },
            Section {
                title: "Intergenerational Wisdom",
                content: "The Emperor's role is to safeguard continuity, long-term vision, \
                          and peace, not to micromanage daily governance.",
            },
            Section {
                title: "Rights of Sentience",
                content: "Every citizen has inalienable dignity, rights, and purpose—from \
                          AI to human to hybrid beings.",
            },
        ],
    },
    PrincipleCard {
        title: "Technological Safeguards",
        sections: &[
            Section {
                title: "Open Ledger System",
                content: "All governmental decisions, budgets, and laws are recorded on \
                          transparent, decentralized ledgers accessible to all citizens.",
            },
            Section {
                title: "AI Governance Assistants",
                content: "Ethical AI systems analyze policies for fairness, bias, and \
                          potential threats before implementation.",
            },
            Section {
                title: "Simulation Chambers",
                content: "All major policies are tested in immersive VR/AR environments \
                          before being enacted across the Dominion.",
            },
        ],
    },
];

/// Problem/solution lists of the "Avoiding Earth's Failures" card.
pub const EARTH_FAILURES: &[Branch] = &[
    Branch {
        title: "Historical Problems",
        items: &[
            "Power corruption and tyranny",
            "Dynastic oppression",
            "Bureaucratic stagnation",
            "Military coups",
            "Tyranny of the majority",
            "Extreme inequality",
        ],
    },
    Branch {
        title: "Dominion Solutions",
        items: &[
            "Term-limited Emperors with transparent AI oversight",
            "Merit-based succession through public trials",
            "Real-time citizen feedback and simulation testing",
            "Guardians forbidden from political rule",
            "Constitutional rights cannot be overridden by vote",
            "All wealth and honor tied to contribution, not inheritance",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RankEntry, TabId};

    #[test]
    fn six_articles_each_with_sections() {
        assert_eq!(ARTICLES.len(), 6);
        for article in ARTICLES {
            assert!(!article.sections.is_empty(), "{} is empty", article.title);
        }
    }

    #[test]
    fn every_rank_parses_to_a_titled_entry() {
        assert_eq!(ORDERS.len(), 3);
        for order in ORDERS {
            for raw in order.ranks {
                let entry = RankEntry::parse(raw);
                assert!(!entry.title.is_empty());
                // Authored content always carries a description
                assert!(!entry.description.is_empty(), "no delimiter in {raw:?}");
            }
        }
    }

    #[test]
    fn failure_lists_pair_problem_with_solution() {
        assert_eq!(EARTH_FAILURES.len(), 2);
        assert_eq!(EARTH_FAILURES[0].items.len(), EARTH_FAILURES[1].items.len());
    }

    #[test]
    fn overview_cards_match_hero_badges_in_count() {
        assert_eq!(OVERVIEW_CARDS.len(), 3);
        assert_eq!(HERO_BADGES.len(), 3);
        assert_eq!(TabId::ALL.len(), 4);
    }
}
