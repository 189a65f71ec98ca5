//! CSS for the landing page.
//!
//! Reveal animation contract:
//! - a revealing container carries `data-reveal="hidden" | "visible"`
//! - its `.reveal-item` children fade up once it turns visible, each delayed
//!   by its own `--reveal-delay`
//! - `.reveal-slide` elements are their own container and slide in from the left
//! - `--reveal-duration` and `--reveal-offset` come from the motion config

pub const LANDING_CSS: &str = r#"
:root {
    --bg: #000000;
    --purple-900: #581c87;
    --purple-600: #9333ea;
    --purple-500: #a855f7;
    --purple-400: #c084fc;
    --purple-300: #d8b4fe;
    --blue-600: #2563eb;
    --blue-500: #3b82f6;
    --blue-400: #60a5fa;
    --blue-200: #bfdbfe;
    --green-400: #4ade80;
    --text: #ffffff;
    --text-muted: #9ca3af;
    --text-soft: #d1d5db;
    --glass: rgba(255, 255, 255, 0.1);
    --glass-hover: rgba(255, 255, 255, 0.2);
    --nav-height: 64px;
    --reveal-duration: 500ms;
    --reveal-offset: 20px;
}

*, *::before, *::after { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
    margin: 0;
    min-height: 100vh;
    background: var(--bg);
    color: var(--text);
    font-family: "Inter", system-ui, -apple-system, "Segoe UI", sans-serif;
    line-height: 1.5;
}

a { color: inherit; text-decoration: none; }
h1, h2, h3, h4, p { margin: 0; }

.sr-only {
    position: absolute;
    width: 1px;
    height: 1px;
    overflow: hidden;
    clip: rect(0, 0, 0, 0);
    white-space: nowrap;
}

.gradient-text {
    background: linear-gradient(to right, var(--purple-400), var(--blue-400), var(--purple-500));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.container { max-width: 72rem; margin: 0 auto; padding: 0 1rem; }
.container.narrow { max-width: 56rem; }

.icon-sm { width: 20px; height: 20px; flex-shrink: 0; }
.icon-md { width: 24px; height: 24px; }
.icon-check { color: var(--green-400); }

/* ---------- Navigation ---------- */

.nav {
    position: fixed;
    top: 0;
    width: 100%;
    z-index: 50;
    background: rgba(0, 0, 0, 0.1);
    backdrop-filter: blur(12px);
}

.nav-inner {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1rem;
    height: var(--nav-height);
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.nav-brand { font-size: 1.25rem; font-weight: 700; }

.nav-links { display: none; gap: 1rem; }

.nav-link, .nav-mobile-link {
    color: var(--text-soft);
    padding: 0.5rem 0.75rem;
    border-radius: 0.375rem;
    font-size: 0.875rem;
    font-weight: 500;
}

.nav-link:hover, .nav-mobile-link:hover { color: var(--text); }

.nav-toggle {
    background: none;
    border: 0;
    color: var(--text);
    cursor: pointer;
    padding: 0.25rem;
}

.nav-mobile { display: flex; flex-direction: column; padding: 0.5rem 0.5rem 0.75rem; }
.nav-mobile-link { display: block; font-size: 1rem; }

@media (min-width: 768px) {
    .nav-links { display: flex; }
    .nav-toggle, .nav-mobile { display: none; }
}

/* ---------- Hero ---------- */

.hero {
    position: relative;
    height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    overflow: hidden;
}

.hero-backdrop { position: absolute; inset: 0; z-index: 0; }

.hero-image {
    width: 100%;
    height: 100%;
    object-fit: cover;
    transform: scale(1.1);
}

.hero-glass {
    position: absolute;
    inset: 0;
    background:
        linear-gradient(to bottom, transparent, rgba(0, 0, 0, 0.1), rgba(0, 0, 0, 0.3)),
        linear-gradient(to right, rgba(0, 0, 0, 0.3), rgba(88, 28, 135, 0.3));
    backdrop-filter: blur(4px) brightness(0.75) saturate(1.5);
}

.hero-content {
    position: relative;
    z-index: 10;
    text-align: center;
    padding: 0 1rem;
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 1.5rem;
    animation: fade-up 800ms ease-out both;
}

.hero-title {
    font-size: clamp(3rem, 8vw, 4.5rem);
    font-weight: 700;
    background: linear-gradient(to right, var(--purple-300), var(--blue-200), var(--purple-300));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
    animation: scale-in 500ms 500ms both;
}

.hero-tagline {
    max-width: 42rem;
    font-size: clamp(1.25rem, 3vw, 1.5rem);
    color: rgba(255, 255, 255, 0.9);
    animation: fade-in 500ms 800ms both;
}

.hero-cta { animation: fade-in 500ms 1000ms both; }

@keyframes fade-up { from { opacity: 0; transform: translateY(20px); } }
@keyframes fade-in { from { opacity: 0; } }
@keyframes scale-in { from { opacity: 0; transform: scale(0.5); } }

/* ---------- Buttons ---------- */

.btn {
    display: inline-block;
    border: 0;
    cursor: pointer;
    color: var(--text);
    font: inherit;
    transition: transform 150ms, background-color 150ms;
}

.btn-primary {
    padding: 0.75rem 2rem;
    border-radius: 9999px;
    font-size: 1.125rem;
    font-weight: 600;
    background: linear-gradient(to right, var(--purple-500), var(--blue-500));
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
}

.btn-primary:hover { transform: scale(1.05); }
.btn-primary:active { transform: scale(0.95); }

.btn-ghost {
    width: 100%;
    padding: 0.75rem;
    border-radius: 9999px;
    background: var(--glass-hover);
}

.btn-ghost:hover { background: rgba(255, 255, 255, 0.3); }

/* ---------- Sections ---------- */

.section {
    padding: 5rem 1rem;
    scroll-margin-top: var(--nav-height);
}

.section-dark { background: linear-gradient(to bottom, var(--bg), var(--purple-900)); }
.section-fade { background: linear-gradient(to bottom, var(--purple-900), var(--bg)); }

.section-title { font-size: 2.25rem; font-weight: 700; margin-bottom: 1.5rem; }
.section-title.centered { text-align: center; margin-bottom: 3rem; }
.section-lead { font-size: 1.125rem; color: var(--text-soft); margin-bottom: 1.5rem; }

.card {
    background: var(--glass);
    backdrop-filter: blur(16px);
    border-radius: 0.75rem;
    padding: 1.5rem;
    transition: background-color 150ms, transform 200ms;
}

.card:hover { background: var(--glass-hover); }
.card-title { font-size: 1.25rem; font-weight: 600; }
.card-subtitle { color: var(--text-muted); }

.photo-frame {
    position: relative;
    height: 400px;
    border-radius: 0.75rem;
    overflow: hidden;
}

.photo { width: 100%; height: 100%; object-fit: cover; }

/* ---------- Image fallback ---------- */

.img-placeholder {
    display: flex;
    align-items: center;
    justify-content: center;
    background: linear-gradient(135deg, rgba(147, 51, 234, 0.35), rgba(37, 99, 235, 0.35));
    color: var(--text-soft);
}

.img-placeholder-text { font-weight: 600; letter-spacing: 0.05em; }

/* ---------- Reveal ---------- */

[data-reveal] .reveal-item {
    opacity: 0;
    transform: translateY(var(--reveal-offset));
    transition:
        opacity var(--reveal-duration) ease-out var(--reveal-delay, 0ms),
        transform var(--reveal-duration) ease-out var(--reveal-delay, 0ms);
}

[data-reveal="visible"] .reveal-item { opacity: 1; transform: none; }

.reveal-slide {
    opacity: 0;
    transform: translateX(calc(-1 * var(--reveal-offset)));
    transition:
        opacity var(--reveal-duration) ease-out var(--reveal-delay, 0ms),
        transform var(--reveal-duration) ease-out var(--reveal-delay, 0ms);
}

.reveal-slide[data-reveal="visible"] { opacity: 1; transform: none; }

@media (prefers-reduced-motion: reduce) {
    [data-reveal] .reveal-item, .reveal-slide { transition: none; opacity: 1; transform: none; }
    .hero-content, .hero-title, .hero-tagline, .hero-cta { animation: none; }
}

/* ---------- About ---------- */

.about-grid { display: grid; gap: 3rem; align-items: center; }
.stats-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1.5rem; }

.stat-card {
    text-align: center;
    padding: 1rem;
    border-radius: 0.5rem;
    background: var(--glass);
}

.stat-card:hover { background: var(--glass-hover); }
.stat-value { font-size: 1.5rem; font-weight: 700; }
.stat-label { color: var(--text-muted); }

/* ---------- Speakers ---------- */

.speakers-grid { display: grid; gap: 2rem; }
.speaker-card { text-align: center; }
.speaker-card:hover { transform: translateY(-10px); }
.speaker-photo { width: 8rem; height: 8rem; margin: 0 auto 1rem; }

.avatar {
    width: 100%;
    height: 100%;
    border-radius: 9999px;
    object-fit: cover;
    object-position: center top;
}

.avatar.img-placeholder { font-size: 2rem; }

/* ---------- Schedule ---------- */

.schedule-list { display: flex; flex-direction: column; gap: 1.5rem; }

.schedule-row {
    display: flex;
    flex-direction: column;
    gap: 1rem;
    border-radius: 0.5rem;
}

.schedule-time { color: var(--purple-400); }

/* ---------- Pricing ---------- */

.pricing-grid { display: grid; gap: 2rem; }

.tier-card {
    position: relative;
    padding: 2rem;
    border-radius: 1rem;
    background: var(--glass);
    transition: transform 200ms;
}

.tier-card:hover { transform: translateY(-10px); }
.tier-recommended { background: linear-gradient(to bottom, var(--purple-600), var(--blue-600)); }

.tier-badge {
    position: absolute;
    top: 0;
    left: 50%;
    transform: translate(-50%, -50%);
    padding: 0.25rem 1rem;
    border-radius: 9999px;
    background: #ffffff;
    color: var(--purple-600);
    font-size: 0.875rem;
    font-weight: 700;
}

.tier-name { font-size: 1.5rem; font-weight: 700; margin-bottom: 1rem; }
.tier-price { font-size: 2.25rem; font-weight: 700; margin-bottom: 1.5rem; }

.tier-features {
    list-style: none;
    margin: 0 0 2rem;
    padding: 0;
    display: flex;
    flex-direction: column;
    gap: 1rem;
}

.tier-features li { display: flex; align-items: center; gap: 0.5rem; }

/* ---------- Venue ---------- */

.venue-grid { display: grid; gap: 3rem; }
.venue-name { font-size: 1.5rem; font-weight: 600; margin-bottom: 1rem; }

.venue-address {
    display: flex;
    flex-direction: column;
    font-style: normal;
    color: var(--text-soft);
    margin-bottom: 1.5rem;
}

.venue-amenities {
    list-style: none;
    margin: 0;
    padding: 0;
    display: flex;
    flex-direction: column;
    gap: 1rem;
}

.venue-amenities li { display: flex; align-items: center; gap: 0.5rem; }

/* ---------- Sponsors ---------- */

.sponsors-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 2rem; }

.sponsor-tile {
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1.5rem;
    border-radius: 0.75rem;
    background: var(--glass);
    transition: background-color 300ms, transform 200ms;
}

.sponsor-tile:hover { background: var(--glass-hover); transform: scale(1.1) rotate(5deg); }
.sponsor-logo { width: 48px; height: 48px; }
.sponsor-logo.img-placeholder { width: auto; min-width: 48px; background: none; }

/* ---------- FAQ ---------- */

.faq-list { display: flex; flex-direction: column; gap: 1.5rem; }
.faq-item { border-radius: 0.5rem; }
.faq-item:hover { transform: scale(1.02); }
.faq-question { font-size: 1.25rem; font-weight: 600; margin-bottom: 0.5rem; }
.faq-answer { color: var(--text-muted); }

/* ---------- Footer ---------- */

.footer {
    background: rgba(0, 0, 0, 0.5);
    backdrop-filter: blur(16px);
    padding: 3rem 1rem;
}

.footer-grid { display: grid; gap: 2rem; }
.footer-title { font-size: 1.25rem; font-weight: 700; margin-bottom: 1rem; }
.footer-heading { font-weight: 600; margin-bottom: 1rem; }
.footer-text, .footer-links { color: var(--text-muted); }

.footer-links {
    list-style: none;
    margin: 0;
    padding: 0;
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
}

.footer-link:hover { color: var(--text); }

.social-links { display: flex; gap: 1rem; }
.social-icon { width: 24px; height: 24px; }
.social-icon.img-placeholder { width: auto; background: none; font-size: 0.75rem; }
.social-link { color: var(--text-muted); transition: color 150ms; }
.social-link:hover { color: var(--text); }

.newsletter { display: flex; }

.newsletter-input {
    min-width: 0;
    flex: 1;
    padding: 0.5rem 1rem;
    border: 0;
    border-radius: 0.5rem 0 0 0.5rem;
    background: var(--glass);
    color: var(--text);
    font: inherit;
}

.newsletter-input:focus { outline: 2px solid var(--purple-500); }

.newsletter-button {
    padding: 0 1rem;
    border: 0;
    border-radius: 0 0.5rem 0.5rem 0;
    background: var(--purple-500);
    color: var(--text);
    font: inherit;
    cursor: pointer;
}

.newsletter-button:hover { background: var(--purple-600); }

/* ---------- Breakpoints ---------- */

@media (min-width: 768px) {
    .about-grid, .venue-grid { grid-template-columns: repeat(2, 1fr); }
    .speakers-grid { grid-template-columns: repeat(2, 1fr); }
    .pricing-grid { grid-template-columns: repeat(3, 1fr); }
    .sponsors-grid { grid-template-columns: repeat(4, 1fr); }
    .footer-grid { grid-template-columns: repeat(4, 1fr); }
    .schedule-row { flex-direction: row; justify-content: space-between; align-items: center; }
}

@media (min-width: 1024px) {
    .speakers-grid { grid-template-columns: repeat(3, 1fr); }
}
"#;
