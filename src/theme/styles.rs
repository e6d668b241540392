//! Global CSS styles for Tati Nails.
//!
//! Soft blush palette, serif headings, card grid layout.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --blush: #f6d6d6;
  --blush-deep: #e8a9a9;
  --rose: #c76b7e;
  --rose-dark: #9e4a5c;
  --cream: #fdf8f5;
  --ink: #2e2a2b;
  --ink-muted: rgba(46, 42, 43, 0.65);
  --white: #ffffff;
  --danger: #c0392b;
  --success: #3c8d5a;

  --font-serif: 'Playfair Display', Georgia, serif;
  --font-sans: 'Montserrat', 'Helvetica Neue', Arial, sans-serif;

  --header-height: 72px;
  --radius: 12px;
  --shadow: 0 10px 30px rgba(158, 74, 92, 0.12);
  --transition-normal: 300ms ease;
  --transition-slow: 600ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html { scroll-behavior: smooth; }

body {
  font-family: var(--font-sans);
  color: var(--ink);
  background: var(--cream);
  line-height: 1.6;
}

body.menu-open { overflow: hidden; }

body.loading * { transition: none !important; }

a { color: inherit; text-decoration: none; }

img { display: block; max-width: 100%; }

.container {
  width: 100%;
  max-width: 1140px;
  margin: 0 auto;
  padding: 0 20px;
}

/* === Header === */
.header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: var(--header-height);
  background: rgba(253, 248, 245, 0.95);
  box-shadow: 0 2px 12px rgba(0, 0, 0, 0.05);
  z-index: 100;
  transition: transform var(--transition-normal);
}

.header.scroll-down { transform: translateY(-100%); }
.header.scroll-up { transform: translateY(0); }

.header__inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
  height: 100%;
}

.logo { font-family: var(--font-serif); font-size: 1.6rem; }
.logo__mark { color: var(--rose); font-weight: 700; }
.logo__text { margin-left: 4px; }

.nav__list { display: flex; gap: 28px; list-style: none; }

.nav__link {
  font-size: 0.95rem;
  letter-spacing: 0.03em;
  transition: color var(--transition-normal);
}

.nav__link:hover { color: var(--rose); }

.mobile-menu-btn {
  display: none;
  flex-direction: column;
  gap: 5px;
  background: none;
  border: none;
  cursor: pointer;
  padding: 6px;
}

.mobile-menu-btn span {
  width: 26px;
  height: 2px;
  background: var(--ink);
  transition: transform var(--transition-normal), opacity var(--transition-normal);
}

.mobile-menu-btn.active span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
.mobile-menu-btn.active span:nth-child(2) { opacity: 0; }
.mobile-menu-btn.active span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }

/* === Hero === */
.hero {
  min-height: 100vh;
  display: flex;
  align-items: center;
  padding-top: var(--header-height);
  background: linear-gradient(135deg, var(--blush) 0%, var(--cream) 70%);
}

.hero__title {
  font-family: var(--font-serif);
  font-size: 3.2rem;
  line-height: 1.2;
  max-width: 640px;
}

.hero__subtitle {
  margin: 20px 0 32px;
  max-width: 520px;
  color: var(--ink-muted);
}

/* === Sections === */
.section { padding: 96px 0; }

.section__title {
  font-family: var(--font-serif);
  font-size: 2.4rem;
  text-align: center;
  margin-bottom: 48px;
}

.section__subtitle {
  text-align: center;
  color: var(--ink-muted);
  margin: -32px 0 40px;
}

.services-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
  gap: 24px;
}

.service-card {
  background: var(--white);
  border-radius: var(--radius);
  padding: 32px 24px;
  box-shadow: var(--shadow);
}

.service-card__title {
  font-family: var(--font-serif);
  font-size: 1.4rem;
  color: var(--rose-dark);
  margin-bottom: 12px;
}

/* === Portfolio === */
.portfolio-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
  gap: 16px;
}

.portfolio-item {
  position: relative;
  display: block;
  overflow: hidden;
  border-radius: var(--radius);
  aspect-ratio: 1 / 1;
}

.portfolio-item img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: transform var(--transition-slow);
}

.portfolio-item__overlay {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(158, 74, 92, 0.4);
  opacity: 0;
  transition: opacity var(--transition-normal);
}

.portfolio-item__zoom { color: var(--white); font-size: 2.4rem; }

.no-touch-device .portfolio-item:hover img { transform: scale(1.06); }
.no-touch-device .portfolio-item:hover .portfolio-item__overlay { opacity: 1; }

/* === Prices === */
.price-list { list-style: none; max-width: 640px; margin: 0 auto; }

.price-list__item {
  display: flex;
  justify-content: space-between;
  padding: 16px 0;
  border-bottom: 1px dashed var(--blush-deep);
}

.price-list__price { color: var(--rose-dark); font-weight: 600; }

/* === Booking Form === */
.appointment { background: var(--blush); }

.appointment-form {
  max-width: 480px;
  margin: 0 auto;
  background: var(--white);
  border-radius: var(--radius);
  padding: 40px 32px;
  box-shadow: var(--shadow);
}

.form-group { margin-bottom: 20px; }

.form-group label {
  display: block;
  font-size: 0.9rem;
  margin-bottom: 6px;
  color: var(--ink-muted);
}

.form-group input {
  width: 100%;
  padding: 12px 14px;
  border: 1px solid var(--blush-deep);
  border-radius: 8px;
  font: inherit;
}

.form-group input:focus { outline: none; border-color: var(--rose); }

/* === Buttons === */
.btn {
  display: inline-block;
  padding: 14px 32px;
  border: none;
  border-radius: 999px;
  font: inherit;
  font-weight: 600;
  cursor: pointer;
  transition: background var(--transition-normal);
}

.btn--primary { background: var(--rose); color: var(--white); }
.btn--primary:hover { background: var(--rose-dark); }
.btn--primary:disabled { opacity: 0.6; cursor: wait; }
.btn--block { width: 100%; }

/* === Contacts / Footer === */
.contact-info {
  text-align: center;
  font-size: 1.1rem;
  line-height: 2;
}

.contact-info a { color: var(--rose-dark); }

.footer {
  padding: 32px 0;
  text-align: center;
  color: var(--ink-muted);
  border-top: 1px solid var(--blush);
}

/* === Reveal on scroll === */
.service-card,
.portfolio-item,
.contact-info,
.appointment-form {
  opacity: 0;
  transform: translateY(24px);
  transition: opacity var(--transition-slow), transform var(--transition-slow);
}

.fade-in {
  opacity: 1;
  transform: translateY(0);
}

/* === Lightbox === */
.lightbox {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(20, 14, 16, 0.92);
  z-index: 1000;
  outline: none;
}

.lightbox-image {
  max-width: 86vw;
  max-height: 86vh;
  border-radius: 6px;
  box-shadow: 0 20px 60px rgba(0, 0, 0, 0.5);
}

.lightbox-close,
.lightbox-prev,
.lightbox-next {
  position: absolute;
  background: none;
  border: none;
  color: var(--white);
  cursor: pointer;
  font-size: 3rem;
  line-height: 1;
  padding: 12px;
  opacity: 0.8;
}

.lightbox-close:hover,
.lightbox-prev:hover,
.lightbox-next:hover { opacity: 1; }

.lightbox-close { top: 16px; right: 24px; }
.lightbox-prev { left: 24px; top: 50%; transform: translateY(-50%); }
.lightbox-next { right: 24px; top: 50%; transform: translateY(-50%); }

/* === Notice Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(46, 42, 43, 0.5);
  z-index: 1100;
}

.notice {
  max-width: 420px;
  background: var(--white);
  border-radius: var(--radius);
  padding: 32px;
  text-align: center;
  box-shadow: var(--shadow);
}

.notice--success { border-top: 4px solid var(--success); }
.notice--error { border-top: 4px solid var(--danger); }
.notice__text { margin-bottom: 24px; }

/* === Mobile === */
@media (max-width: 768px) {
  .mobile-menu-btn { display: flex; }

  .nav {
    position: fixed;
    top: var(--header-height);
    left: 0;
    right: 0;
    background: var(--cream);
    transform: translateY(-120%);
    transition: transform var(--transition-normal);
    box-shadow: 0 8px 16px rgba(0, 0, 0, 0.08);
  }

  .nav.active { transform: translateY(0); }

  .nav__list {
    flex-direction: column;
    gap: 0;
    padding: 12px 20px;
  }

  .nav__item { padding: 12px 0; }

  .hero__title { font-size: 2.2rem; }
  .section { padding: 64px 0; }
}
"#;
