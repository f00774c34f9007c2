//! Hero section: title, lead, preamble quote and badges.

use leptos::prelude::*;

use super::icons::{Icon, ICON_CROWN, ICON_STAR};
use crate::content::{HERO_BADGES, HERO_LEAD, PREAMBLE, SITE_TITLE};

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section class="hero">
            // Drifting backdrop stars, animated via CSS only
            <div class="hero-backdrop">
                <div class="hero-star" style="top: 80px; left: 80px;"></div>
                <div class="hero-star" style="top: 160px; right: 128px; animation-delay: 1s;"></div>
                <div class="hero-star" style="bottom: 128px; left: 160px; animation-delay: 2s;"></div>
                <div class="hero-star" style="top: 240px; left: 50%; animation-delay: 3s;"></div>
            </div>

            <div class="hero-inner reveal">
                <div class="hero-sigil">
                    <Icon path=ICON_CROWN size="64" class="icon-stellar" />
                    <Icon path=ICON_STAR size="48" class="icon-cosmic" />
                </div>

                <h1 class="hero-title stellar-text">{SITE_TITLE}</h1>
                <p class="hero-lead">{HERO_LEAD}</p>

                <div class="hero-badges">
                    {HERO_BADGES
                        .iter()
                        .map(|&(icon, label)| view! {
                            <span class="hero-badge">
                                <Icon path=icon size="16" />
                                {label}
                            </span>
                        })
                        .collect::<Vec<_>>()}
                </div>

                <blockquote class="hero-preamble">{PREAMBLE}</blockquote>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_title_preamble_and_badges() {
        let html = view! { <HeroSection /> }.to_html();
        assert!(html.contains(SITE_TITLE));
        assert!(html.contains("hereby ordain and establish"));
        assert_eq!(html.matches("hero-badge\"").count(), HERO_BADGES.len());
    }
}
