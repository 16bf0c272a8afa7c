//! Global CSS styles for Flip Gallery.
//!
//! Card transforms are keyed off the `is-pulled` / `is-flipped` classes the
//! components set from card state; all timing lives here.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --bg: #101214;
  --bg-raised: #1a1d21;
  --border: #2a2e33;

  --text-primary: #f2f2f2;
  --text-secondary: rgba(242, 242, 242, 0.7);
  --text-muted: rgba(242, 242, 242, 0.45);

  --accent: #e0b354;
  --accent-glow: rgba(224, 179, 84, 0.35);
  --danger: #ff5a6e;
  --chat: #25d366;
  --email: #5f8fff;

  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;

  --card-width: 220px;
  --card-height: 320px;
  --stack-overlap: -250px;

  --transition-fast: 150ms ease;
  --transition-flip: 600ms cubic-bezier(0.4, 0, 0.2, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  background: var(--bg);
  color: var(--text-primary);
  font-family: var(--font-sans);
  min-height: 100vh;
}

/* === Password Overlay === */
.password-overlay {
  position: fixed;
  inset: 0;
  z-index: 1000;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(8, 9, 10, 0.96);
}

.password-box {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  width: 320px;
  padding: 2rem;
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 12px;
}

.password-box__title {
  font-size: 1.25rem;
  font-weight: 500;
  text-align: center;
}

.password-box__input {
  padding: 0.75rem 1rem;
  background: var(--bg);
  border: 1px solid var(--border);
  border-radius: 8px;
  color: var(--text-primary);
  font-size: 1rem;
}

.password-box__input:focus {
  outline: none;
  border-color: var(--accent);
  box-shadow: 0 0 0 3px var(--accent-glow);
}

.password-box__submit {
  padding: 0.75rem;
  background: var(--accent);
  border: none;
  border-radius: 8px;
  color: var(--bg);
  font-weight: 600;
  cursor: pointer;
}

.password-box__error {
  min-height: 1.25rem;
  color: var(--danger);
  font-size: 0.875rem;
  text-align: center;
}

/* === Gallery === */
.main-content {
  padding: 2rem;
}

.main-content--hidden {
  display: none;
}

.gallery-grid {
  display: flex;
  gap: 2rem;
  justify-content: center;
  flex-wrap: wrap;
}

.gallery-column {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
}

.gallery-column__title {
  color: var(--text-secondary);
  font-size: 0.875rem;
  letter-spacing: 0.1em;
  text-transform: uppercase;
}

.card-stack {
  display: flex;
  flex-direction: column;
  align-items: center;
}

/* === Flip Cards === */
.card-container {
  position: relative;
  width: var(--card-width);
  height: var(--card-height);
  perspective: 1200px;
  cursor: pointer;
  transition: transform var(--transition-flip), margin var(--transition-flip);
}

.card-container + .card-container {
  margin-top: var(--stack-overlap);
}

.card-container:hover {
  transform: translateY(-6px);
}

.card-container.is-pulled {
  z-index: 10;
  transform: translateX(40px) scale(1.08);
  margin-bottom: 280px;
}

.card-inner {
  position: relative;
  width: 100%;
  height: 100%;
  transform-style: preserve-3d;
  transition: transform var(--transition-flip);
}

.card-inner.is-flipped {
  transform: rotateY(180deg);
}

.card-face {
  position: absolute;
  inset: 0;
  overflow: hidden;
  border-radius: 12px;
  border: 1px solid var(--border);
  background: var(--bg-raised);
  backface-visibility: hidden;
  box-shadow: 0 8px 24px rgba(0, 0, 0, 0.45);
}

.card-face--back {
  transform: rotateY(180deg);
}

.card-face__img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  user-select: none;
}

.card-face__loading,
.card-face__missing {
  display: flex;
  align-items: center;
  justify-content: center;
  height: 100%;
  padding: 1rem;
  color: var(--text-muted);
  font-size: 0.875rem;
  text-align: center;
}

/* === Share Controls === */
.share-controls {
  position: absolute;
  left: 0;
  right: 0;
  bottom: -2.75rem;
  display: none;
  gap: 0.5rem;
  justify-content: center;
}

.card-container.is-pulled .share-controls {
  display: flex;
}

.share-btn {
  padding: 0.4rem 0.9rem;
  border: none;
  border-radius: 999px;
  color: #fff;
  font-size: 0.8rem;
  cursor: pointer;
  transition: opacity var(--transition-fast);
}

.share-btn:hover {
  opacity: 0.85;
}

.share-btn--chat {
  background: var(--chat);
}

.share-btn--email {
  background: var(--email);
}
"#;
