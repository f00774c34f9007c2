//! CSS for the constitution site.
//!
//! One stylesheet shared by the CSR app (injected into `<head>` at mount)
//! and the static export (inlined into the rendered document). Dark cosmic
//! theme with two accent families: stellar (gold) and cosmic (violet).

/// Complete stylesheet for the page.
pub const PAGE_CSS: &str = r#"
:root {
    --bg: #07070f;
    --bg-raised: #0e0e1c;
    --bg-card: rgba(20, 20, 38, 0.85);
    --border: rgba(136, 136, 180, 0.25);
    --text: #e8e8f2;
    --text-dim: rgba(232, 232, 242, 0.7);
    --stellar-300: #ffe9a8;
    --stellar-400: #f5c542;
    --cosmic-300: #c4b5fd;
    --cosmic-400: #8b7cf6;
    --danger: #f87171;
}

* { box-sizing: border-box; }

body {
    margin: 0;
    background: var(--bg);
    color: var(--text);
    font-family: "Inter", "Segoe UI", system-ui, sans-serif;
    line-height: 1.6;
}

.container {
    max-width: 1120px;
    margin: 0 auto;
    padding: 0 16px;
}

/* ---------- navigation ---------- */

.nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    border-bottom: 1px solid transparent;
    background: transparent;
    transition: background 0.3s ease, border-color 0.3s ease;
}

.nav-scrolled {
    background: rgba(7, 7, 15, 0.82);
    backdrop-filter: blur(12px);
    border-bottom-color: var(--border);
}

.nav-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    height: 64px;
}

.nav-brand {
    display: flex;
    align-items: center;
    gap: 8px;
    background: none;
    border: none;
    color: var(--stellar-400);
    font-weight: 700;
    font-size: 1.05rem;
    cursor: pointer;
}

.nav-links { display: flex; gap: 32px; }

.nav-link {
    background: none;
    border: none;
    color: var(--text-dim);
    font-size: 0.95rem;
    cursor: pointer;
    padding: 4px 0;
}

.nav-link:hover { color: var(--text); }
.nav-link.active { color: var(--stellar-400); font-weight: 600; }

.nav-menu-toggle {
    display: none;
    background: none;
    border: none;
    color: var(--text);
    cursor: pointer;
}

.nav-mobile {
    display: flex;
    flex-direction: column;
    gap: 8px;
    padding: 16px;
    background: rgba(7, 7, 15, 0.95);
    border-bottom: 1px solid var(--border);
}

.nav-mobile .nav-link {
    text-align: left;
    padding: 12px;
    border-radius: 8px;
}

.nav-mobile .nav-link.active { background: rgba(139, 124, 246, 0.2); }

@media (max-width: 768px) {
    .nav-links { display: none; }
    .nav-menu-toggle { display: block; }
}

/* ---------- hero ---------- */

.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    overflow: hidden;
    background: radial-gradient(ellipse at top, rgba(139, 124, 246, 0.12), transparent 60%);
}

.hero-backdrop { position: absolute; inset: 0; }

.hero-star {
    position: absolute;
    width: 6px;
    height: 6px;
    border-radius: 50%;
    background: var(--stellar-300);
    animation: stellar-pulse 3s ease-in-out infinite;
}

.hero-inner {
    position: relative;
    z-index: 1;
    text-align: center;
    max-width: 900px;
    padding: 96px 16px;
}

.hero-sigil {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 16px;
    margin-bottom: 24px;
}

.icon-stellar { color: var(--stellar-400); }
.icon-cosmic { color: var(--cosmic-400); }

.hero-title {
    font-size: clamp(3rem, 9vw, 6rem);
    font-weight: 800;
    margin: 0 0 24px;
}

.stellar-text {
    background: linear-gradient(120deg, var(--stellar-300), var(--stellar-400), var(--cosmic-300));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.cosmic-text { color: var(--cosmic-400); }

.hero-lead {
    font-size: 1.25rem;
    color: var(--text-dim);
    margin: 0 auto 32px;
    max-width: 720px;
}

.hero-badges {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 16px;
    margin-bottom: 48px;
}

.hero-badge {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    padding: 8px 16px;
    border-radius: 999px;
    background: var(--bg-raised);
    border: 1px solid var(--border);
    font-size: 0.85rem;
}

.hero-preamble {
    margin: 0 auto;
    max-width: 720px;
    padding-left: 24px;
    border-left: 4px solid var(--stellar-400);
    font-style: italic;
    font-size: 1.05rem;
    color: rgba(232, 232, 242, 0.9);
    text-align: left;
}

/* ---------- tab strip & panels ---------- */

.content { padding: 64px 0; }

.tab-strip {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 4px;
    padding: 4px;
    margin-bottom: 48px;
    border-radius: 12px;
    background: rgba(20, 20, 38, 0.5);
    backdrop-filter: blur(8px);
}

.tab-trigger {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 8px;
    padding: 10px 12px;
    border: none;
    border-radius: 8px;
    background: none;
    color: var(--text-dim);
    font-size: 0.9rem;
    white-space: nowrap;
    cursor: pointer;
}

.tab-trigger.active {
    background: rgba(139, 124, 246, 0.2);
    color: var(--stellar-400);
}

.tab-label-short { display: none; }

@media (max-width: 640px) {
    .tab-strip { grid-template-columns: repeat(2, 1fr); }
    .tab-label { display: none; }
    .tab-label-short { display: inline; }
}

.tab-panel { display: none; }
.tab-panel.active { display: block; }

.panel-stack { display: flex; flex-direction: column; gap: 32px; }

.scroll-column { max-height: 800px; overflow-y: auto; padding-right: 8px; }

/* ---------- cards ---------- */

.card {
    background: var(--bg-card);
    border: 1px solid var(--border);
    border-radius: 14px;
    padding: 24px;
}

.card-interactive { transition: border-color 0.3s ease, transform 0.3s ease; }
.card-interactive:hover { border-color: var(--cosmic-400); transform: translateY(-2px); }

.card-feature { box-shadow: 0 0 32px rgba(139, 124, 246, 0.15); }

.constitution-section { padding: 32px; }

.card-header { margin-bottom: 16px; }

.card-title {
    display: flex;
    align-items: flex-start;
    gap: 12px;
    margin: 0;
    font-size: 1.2rem;
}

.card-icon { color: var(--stellar-400); flex-shrink: 0; margin-top: 2px; }

.card-subtitle { margin: 0 0 16px; color: var(--text-dim); font-size: 0.9rem; }

.card-text { margin: 0; font-size: 0.9rem; color: rgba(232, 232, 242, 0.8); }

.card-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
    gap: 24px;
}

.card-grid-2 {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
    gap: 32px;
}

/* ---------- articles ---------- */

.article-sections { display: flex; flex-direction: column; gap: 24px; }

.article-section-title {
    margin: 0 0 12px;
    color: var(--cosmic-400);
    font-size: 1.05rem;
}

.article-section-body {
    margin: 0;
    color: rgba(232, 232, 242, 0.85);
}

.section-divider {
    margin: 24px 0 0;
    border: none;
    border-top: 1px solid var(--border);
}

/* ---------- ranks ---------- */

.order-description { margin: 0 0 16px; color: var(--text-dim); }

.rank-list {
    list-style: none;
    margin: 0;
    padding: 0;
    display: flex;
    flex-direction: column;
    gap: 12px;
}

.rank-row {
    display: flex;
    align-items: flex-start;
    gap: 12px;
    padding: 16px;
    border-radius: 10px;
    background: rgba(136, 136, 180, 0.08);
    border: 1px solid transparent;
    transition: background 0.3s ease, border-color 0.3s ease;
}

.rank-row:hover {
    background: rgba(136, 136, 180, 0.16);
    border-color: var(--border);
}

.rank-number {
    flex-shrink: 0;
    width: 32px;
    height: 32px;
    display: flex;
    align-items: center;
    justify-content: center;
    border-radius: 50%;
    background: rgba(139, 124, 246, 0.2);
    color: var(--cosmic-300);
    font-weight: 700;
    font-size: 0.85rem;
}

.rank-title { margin: 0 0 4px; font-size: 1rem; }

.rank-description { margin: 0; font-size: 0.85rem; color: var(--text-dim); }

/* ---------- branches ---------- */

.branch-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
    gap: 32px;
}

.branch-title { margin: 0 0 16px; color: var(--stellar-400); }

.branch:nth-child(2n) .branch-title { color: var(--cosmic-400); }

.branch-items {
    margin: 0;
    padding-left: 20px;
    display: flex;
    flex-direction: column;
    gap: 8px;
    font-size: 0.9rem;
    color: rgba(232, 232, 242, 0.8);
}

/* ---------- spinner ---------- */

.spinner-box {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    gap: 16px;
    padding: 48px;
}

.spinner {
    border-radius: 50%;
    border: 2px solid rgba(245, 197, 66, 0.2);
    border-top-color: var(--stellar-400);
    animation: spin 0.8s linear infinite;
}

.spinner-sm { width: 24px; height: 24px; }
.spinner-md { width: 32px; height: 32px; }
.spinner-lg { width: 48px; height: 48px; }

.spinner-text {
    margin: 0;
    font-size: 0.85rem;
    color: var(--text-dim);
    animation: pulse 1.6s ease-in-out infinite;
}

/* ---------- fault fallback ---------- */

.fault-box {
    min-height: 320px;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 24px;
}

.fault-box .card { max-width: 420px; text-align: center; }
.fault-box .card-icon { color: var(--danger); }

.fault-message { margin: 0 0 16px; color: var(--text-dim); }

.fault-detail {
    text-align: left;
    font-size: 0.75rem;
    background: var(--bg-raised);
    border-radius: 8px;
    padding: 12px;
    margin-bottom: 16px;
}

.fault-detail pre { white-space: pre-wrap; margin: 8px 0 0; }

.fault-reset {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    padding: 10px 20px;
    border: none;
    border-radius: 8px;
    background: var(--cosmic-400);
    color: var(--bg);
    font-weight: 600;
    cursor: pointer;
}

/* ---------- not found ---------- */

.notfound {
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    text-align: center;
}

.notfound-inner { max-width: 440px; padding: 32px; }

.notfound-code { font-size: 4rem; font-weight: 800; margin: 16px 0; }

.notfound-title { margin: 0 0 12px; font-size: 1.4rem; }

.notfound-lead { margin: 0 0 24px; color: var(--text-dim); }

.notfound-home {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    padding: 10px 20px;
    border-radius: 8px;
    background: var(--stellar-400);
    color: var(--bg);
    font-weight: 600;
    text-decoration: none;
}

/* ---------- footer ---------- */

.footer {
    border-top: 1px solid var(--border);
    padding: 32px 0;
    text-align: center;
    color: var(--text-dim);
    font-size: 0.85rem;
}

.footer p { margin: 4px 0; }

.footer-note { font-size: 0.75rem; opacity: 0.7; }

/* ---------- animations ---------- */

.reveal {
    animation: fade-in-up 0.6s ease-out both;
}

.delay-100 { animation-delay: 100ms; }
.delay-200 { animation-delay: 200ms; }
.delay-300 { animation-delay: 300ms; }
.delay-400 { animation-delay: 400ms; }

@keyframes fade-in-up {
    from { opacity: 0; transform: translateY(12px); }
    to { opacity: 1; transform: translateY(0); }
}

@keyframes stellar-pulse {
    0%, 100% { opacity: 0.4; transform: scale(1); }
    50% { opacity: 1; transform: scale(1.4); }
}

@keyframes spin {
    to { transform: rotate(360deg); }
}

@keyframes pulse {
    0%, 100% { opacity: 1; }
    50% { opacity: 0.5; }
}

@media (prefers-reduced-motion: reduce) {
    .reveal, .hero-star, .spinner, .spinner-text { animation: none; }
}
"#;
