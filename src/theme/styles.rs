//! Global CSS for the Maison Atelier page.
//!
//! Quiet-luxury palette: ivory ground, charcoal type, a single gold accent.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Ground */
  --ivory: #faf7f2;
  --ivory-deep: #f0ebe2;
  --card: #ffffff;

  /* Type */
  --charcoal: #232020;
  --charcoal-soft: rgba(35, 32, 32, 0.72);
  --charcoal-muted: rgba(35, 32, 32, 0.5);

  /* Accent */
  --gold: #b08d3f;
  --gold-glow: rgba(176, 141, 63, 0.25);

  /* Semantic */
  --success: #27ae60;
  --danger: #e74c3c;
  --field-border: rgba(102, 126, 234, 0.3);

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-sans: 'Inter', 'Helvetica Neue', Arial, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--ivory);
  color: var(--charcoal);
  line-height: 1.7;
}

/* === Page Shell === */
/* The shell is the scroll container; all offsets are measured against it */
.page-shell {
  height: 100vh;
  overflow-y: auto;
  scroll-behavior: auto;
}

main {
  max-width: 1080px;
  margin: 0 auto;
  padding: 0 1.5rem;
}

section {
  padding: 5rem 0;
}

.section-title {
  font-family: var(--font-serif);
  font-size: 2.25rem;
  font-weight: 500;
  margin-bottom: 2rem;
}

/* === Navbar === */
.navbar {
  position: sticky;
  top: 0;
  z-index: 100;
  background: rgba(250, 247, 242, 0.92);
  backdrop-filter: blur(8px);
  border-bottom: 1px solid var(--ivory-deep);
}

.nav-inner {
  max-width: 1080px;
  margin: 0 auto;
  padding: 0.9rem 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.brand {
  font-family: var(--font-serif);
  font-size: 1.4rem;
  font-weight: 600;
  letter-spacing: 0.04em;
}

.nav-menu {
  display: flex;
  gap: 2rem;
}

.nav-link {
  color: var(--charcoal-soft);
  text-decoration: none;
  font-size: 0.95rem;
  letter-spacing: 0.02em;
  padding-bottom: 2px;
  border-bottom: 2px solid transparent;
  transition: color var(--transition-fast), border-color var(--transition-fast);
}

.nav-link:hover {
  color: var(--charcoal);
}

.nav-link.active {
  color: var(--gold);
  border-bottom-color: var(--gold);
}

/* Backdrop behind the open mobile menu; clicking it closes the menu */
.nav-backdrop {
  position: fixed;
  inset: 0;
  z-index: 90;
  background: transparent;
}

/* === Hamburger === */
.hamburger {
  display: none;
  flex-direction: column;
  gap: 4px;
  background: none;
  border: none;
  padding: 6px;
  cursor: pointer;
  z-index: 110;
}

.hamburger-bar {
  width: 22px;
  height: 2px;
  background: var(--charcoal);
  transition: transform var(--transition-normal), opacity var(--transition-normal);
}

.hamburger.active .hamburger-bar:nth-child(1) {
  transform: translateY(6px) rotate(45deg);
}

.hamburger.active .hamburger-bar:nth-child(2) {
  opacity: 0;
}

.hamburger.active .hamburger-bar:nth-child(3) {
  transform: translateY(-6px) rotate(-45deg);
}

@media (max-width: 768px) {
  .hamburger {
    display: flex;
  }

  .nav-menu {
    position: absolute;
    top: 100%;
    left: 0;
    right: 0;
    flex-direction: column;
    gap: 0;
    background: var(--ivory);
    border-bottom: 1px solid var(--ivory-deep);
    max-height: 0;
    overflow: hidden;
    transition: max-height var(--transition-normal);
  }

  .nav-menu.active {
    max-height: 320px;
  }

  .nav-menu .nav-link {
    padding: 0.9rem 1.5rem;
    border-bottom: 1px solid var(--ivory-deep);
  }
}

/* === Hero === */
.hero {
  min-height: 70vh;
  display: flex;
  flex-direction: column;
  justify-content: center;
  align-items: flex-start;
  gap: 1.25rem;
}

.hero-title {
  font-family: var(--font-serif);
  font-size: 3rem;
  font-weight: 500;
  line-height: 1.15;
  max-width: 18ch;
}

.hero-tagline {
  color: var(--charcoal-soft);
  max-width: 48ch;
}

.cta {
  display: inline-block;
  margin-top: 0.75rem;
  padding: 0.8rem 2rem;
  background: var(--charcoal);
  color: var(--ivory);
  text-decoration: none;
  letter-spacing: 0.06em;
  text-transform: uppercase;
  font-size: 0.8rem;
  transition: background var(--transition-fast);
}

.cta:hover {
  background: var(--gold);
}

/* === Services / Portfolio === */
.services-grid, .portfolio-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
  gap: 1.5rem;
}

.service-card, .portfolio-item {
  background: var(--card);
  border: 1px solid var(--ivory-deep);
  padding: 1.75rem;
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.service-card:hover, .portfolio-item:hover {
  box-shadow: 0 12px 24px rgba(35, 32, 32, 0.08);
}

.service-card h3 {
  font-family: var(--font-serif);
  font-size: 1.3rem;
  margin-bottom: 0.75rem;
}

.service-card p {
  color: var(--charcoal-soft);
  font-size: 0.95rem;
}

.portfolio-item {
  padding: 0;
  overflow: hidden;
}

.fade-img {
  width: 100%;
  aspect-ratio: 4 / 5;
  object-fit: cover;
  display: block;
  transition: opacity 500ms ease;
}

.caption {
  padding: 1rem 1.25rem;
  color: var(--charcoal-muted);
  font-size: 0.9rem;
}

/* === Contact === */
.contact-lead {
  color: var(--charcoal-soft);
  margin-bottom: 2rem;
  max-width: 52ch;
}

.contact-form {
  display: block;
  max-width: 640px;
}

.form-row {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1.25rem;
}

@media (max-width: 600px) {
  .form-row {
    grid-template-columns: 1fr;
  }
}

.form-group {
  margin-bottom: 1.25rem;
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
}

.form-group label {
  font-size: 0.8rem;
  letter-spacing: 0.05em;
  text-transform: uppercase;
  color: var(--charcoal-muted);
}

.form-group input, .form-group textarea {
  font-family: inherit;
  font-size: 1rem;
  padding: 0.7rem 0.9rem;
  background: var(--card);
  color: var(--charcoal);
  border: 1px solid var(--field-border);
  border-radius: 3px;
  outline: none;
  transition: border-color var(--transition-fast);
}

.form-group textarea {
  resize: vertical;
}

.submit-btn {
  padding: 0.85rem 2.5rem;
  background: var(--charcoal);
  color: var(--ivory);
  border: none;
  cursor: pointer;
  letter-spacing: 0.06em;
  text-transform: uppercase;
  font-size: 0.8rem;
  transition: background var(--transition-fast), opacity var(--transition-fast);
}

.submit-btn:hover:enabled {
  background: var(--gold);
}

.submit-btn:disabled {
  opacity: 0.6;
  cursor: wait;
}

/* === Scroll-to-top === */
.scroll-top {
  position: fixed;
  right: 1.5rem;
  bottom: 1.5rem;
  width: 44px;
  height: 44px;
  border: none;
  border-radius: 50%;
  background: var(--charcoal);
  color: var(--ivory);
  font-size: 1.1rem;
  cursor: pointer;
  opacity: 0;
  pointer-events: none;
  transition: opacity var(--transition-normal);
  z-index: 120;
}

.scroll-top.show {
  opacity: 1;
  pointer-events: auto;
}

/* === Toasts === */
.notification-layer {
  position: fixed;
  top: 20px;
  right: 20px;
  display: flex;
  flex-direction: column;
  gap: 10px;
  z-index: 10000;
}

.notification {
  padding: 15px 20px;
  color: #ffffff;
  border-radius: 5px;
  font-weight: 500;
  font-size: 14px;
  max-width: 360px;
  box-shadow: 0 4px 6px rgba(0, 0, 0, 0.2);
  animation: slideInNotification var(--transition-normal);
}

.notification.success {
  background: var(--success);
}

.notification.error {
  background: var(--danger);
}

/* === Footer === */
.footer {
  border-top: 1px solid var(--ivory-deep);
  padding: 2rem 1.5rem;
  text-align: center;
  color: var(--charcoal-muted);
  font-size: 0.85rem;
}
"#;
