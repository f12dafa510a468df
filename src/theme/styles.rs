//! Global CSS styles for the stockwatch desktop app.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --surface: #13161a;
  --surface-raised: #1b2026;
  --surface-border: #2a323c;

  /* Text */
  --text-primary: #eef2f5;
  --text-secondary: rgba(238, 242, 245, 0.7);
  --text-muted: rgba(238, 242, 245, 0.45);

  /* Semantic */
  --ok: #3fae6a;
  --danger: #e5484d;
  --accent: #3b82c4;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-mono: 'JetBrains Mono', 'Consolas', monospace;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  background: var(--surface);
  color: var(--text-primary);
  font-family: var(--font-sans);
  font-size: 15px;
  line-height: 1.5;
}

/* === Page Chrome === */
.page {
  max-width: 640px;
  margin: 0 auto;
  padding: 1.5rem;
}

.page-header {
  display: flex;
  align-items: baseline;
  justify-content: space-between;
  margin-bottom: 1.5rem;
  padding-bottom: 0.75rem;
  border-bottom: 1px solid var(--surface-border);
}

.app-title {
  font-size: 1.4rem;
  font-weight: 600;
}

.back-link {
  color: var(--accent);
  text-decoration: none;
  font-size: 0.9rem;
}

.back-link:hover {
  text-decoration: underline;
}

/* === Panel === */
.panel {
  background: var(--surface-raised);
  border: 1px solid var(--surface-border);
  border-radius: 8px;
  padding: 1.25rem;
}

.panel-title {
  font-size: 1.1rem;
  margin-bottom: 0.25rem;
}

.panel-subtitle {
  color: var(--text-secondary);
  margin-bottom: 1rem;
}

.field-row {
  display: flex;
  gap: 1rem;
  margin-bottom: 1rem;
}

.field {
  flex: 1;
}

.field label {
  display: block;
  font-size: 0.85rem;
  color: var(--text-secondary);
  margin-bottom: 0.25rem;
}

.field input {
  width: 100%;
  padding: 0.5rem;
  background: var(--surface);
  border: 1px solid var(--surface-border);
  border-radius: 6px;
  color: var(--text-primary);
  font-family: var(--font-mono);
}

.field input:disabled {
  color: var(--text-muted);
}

.field-hint {
  display: block;
  margin-top: 0.25rem;
  font-size: 0.75rem;
  color: var(--text-muted);
}

.stock-display {
  display: flex;
  gap: 0.5rem;
  align-items: center;
}

.stock-badge {
  padding: 0.3rem 0.6rem;
  border-radius: 6px;
  font-size: 0.8rem;
  font-weight: 600;
  white-space: nowrap;
}

.stock-badge.low {
  background: var(--danger);
  color: #fff;
}

.stock-badge.ok {
  background: var(--ok);
  color: #fff;
}

.btn {
  padding: 0.5rem 1rem;
  border: none;
  border-radius: 6px;
  cursor: pointer;
  font-size: 0.9rem;
}

.btn-primary {
  background: var(--accent);
  color: #fff;
}

.btn:disabled {
  opacity: 0.6;
  cursor: default;
}

/* === Notices === */
.notice {
  margin-top: 0.75rem;
  padding: 0.5rem 0.75rem;
  border-radius: 6px;
  font-size: 0.85rem;
}

.notice-success {
  background: rgba(63, 174, 106, 0.15);
  color: var(--ok);
}

.notice-error {
  background: rgba(229, 72, 77, 0.15);
  color: var(--danger);
}

.alert {
  padding: 0.75rem 1rem;
  border-radius: 6px;
}

.alert-error {
  background: rgba(229, 72, 77, 0.15);
  color: var(--danger);
}

/* === Dashboard === */
.dashboard.loading,
.panel.loading {
  color: var(--text-muted);
  padding: 1.5rem;
  text-align: center;
}

.dashboard-title {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: 1.1rem;
  margin-bottom: 1rem;
}

.count-badge {
  background: var(--danger);
  color: #fff;
  border-radius: 999px;
  font-size: 0.75rem;
  padding: 0.1rem 0.55rem;
}

.entry-list {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  max-height: 480px;
  overflow-y: auto;
}

.entry-row {
  display: block;
  background: var(--surface-raised);
  border: 1px solid var(--surface-border);
  border-radius: 8px;
  padding: 0.75rem 1rem;
  text-decoration: none;
  color: var(--text-primary);
}

.entry-row:hover {
  border-color: var(--accent);
}

.entry-main {
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.entry-name {
  font-size: 0.95rem;
  font-weight: 600;
}

.entry-ipn {
  color: var(--text-muted);
  font-size: 0.75rem;
}

.entry-quantities {
  background: var(--danger);
  color: #fff;
  border-radius: 6px;
  font-family: var(--font-mono);
  font-size: 0.8rem;
  padding: 0.2rem 0.5rem;
}

.entry-progress {
  margin-top: 0.5rem;
  height: 6px;
  background: var(--surface);
  border-radius: 3px;
  overflow: hidden;
}

.entry-progress-bar {
  height: 100%;
  background: var(--danger);
}

.entry-overflow {
  text-align: center;
  color: var(--text-muted);
  font-size: 0.85rem;
  padding: 0.5rem;
}

.empty-state {
  text-align: center;
  color: var(--text-secondary);
  padding: 1.5rem;
}
"#;
