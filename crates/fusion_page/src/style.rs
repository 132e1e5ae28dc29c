//! Page stylesheet

/// Base stylesheet embedded in rendered documents
pub const STYLESHEET: &str = r#":root {
  --qf-purple: #8B5CF6;
  --qf-cyan: #06B6D4;
  --qf-bg: #0B0B14;
  --qf-text: #E5E7EB;
  --qf-muted: #9CA3AF;
}
* { box-sizing: border-box; margin: 0; padding: 0; }
html { scroll-behavior: smooth; }
body { background: var(--qf-bg); color: var(--qf-text); font-family: Inter, system-ui, sans-serif; line-height: 1.5; }
section { padding: 6rem 1rem; display: flex; flex-direction: column; gap: 3rem; }
button { cursor: pointer; font: inherit; color: inherit; background: none; border: 0; }
button[disabled] { opacity: 0.5; cursor: not-allowed; }
a { color: inherit; text-decoration: none; }
.navbar { position: fixed; top: 0; left: 0; right: 0; z-index: 50; backdrop-filter: blur(12px); background: rgba(11, 11, 20, 0.8); }
.nav-inner { display: flex; align-items: center; justify-content: space-between; height: 4rem; padding: 0 1rem; }
.nav-links { display: flex; gap: 1.5rem; }
.menu-toggle { display: none; }
.mobile-sheet { display: flex; flex-direction: column; gap: 0.5rem; padding: 1rem; }
@media (max-width: 768px) {
  .nav-links, .nav-wallet { display: none; }
  .menu-toggle { display: block; }
}
.gradient-text { background: linear-gradient(90deg, var(--qf-purple), var(--qf-cyan)); -webkit-background-clip: text; background-clip: text; color: transparent; }
.glass-card { background: rgba(255, 255, 255, 0.05); border: 1px solid rgba(255, 255, 255, 0.1); border-radius: 1rem; backdrop-filter: blur(8px); }
.btn { padding: 0.75rem 2rem; border-radius: 0.75rem; font-weight: 600; }
.btn-primary { background: linear-gradient(90deg, var(--qf-purple), var(--qf-cyan)); color: #fff; }
.btn-outline { border: 1px solid var(--qf-purple); }
.hero { min-height: 100vh; align-items: center; justify-content: center; text-align: center; }
.hero-title { font-size: 3.5rem; font-weight: 800; }
.hero-ctas, .hero-stats { display: flex; flex-wrap: wrap; gap: 1rem; justify-content: center; }
.section-header { text-align: center; max-width: 48rem; margin: 0 auto; }
.section-intro, .stat-label, .counter-label { color: var(--qf-muted); }
.counter-grid, .feature-grid, .overview-grid, .utility-grid, .tier-grid, .benefit-grid,
.buy-steps, .dex-links, .community-stats, .social-grid { display: flex; flex-wrap: wrap; gap: 1.5rem; }
.counter-value, .stat-value, .overview-value { font-size: 2rem; font-weight: 700; }
.distribution { display: flex; flex-wrap: wrap; gap: 3rem; align-items: center; }
.distribution-chart { width: 20rem; height: 20rem; border-radius: 50%; }
.allocation-track { background: rgba(255, 255, 255, 0.1); border-radius: 9999px; height: 0.5rem; }
.allocation-fill { height: 100%; border-radius: 9999px; }
.apy-chart { display: flex; align-items: flex-end; gap: 1rem; height: 12.5rem; }
.apy-bar { flex: 1; background: linear-gradient(0deg, var(--qf-purple), var(--qf-cyan)); border-radius: 0.5rem 0.5rem 0 0; }
.buy-step { text-align: left; padding: 1.5rem; border-radius: 1rem; border: 1px solid rgba(255, 255, 255, 0.1); }
.buy-step.active { border-color: var(--qf-purple); background: rgba(139, 92, 246, 0.1); }
.contract-address .info-value { font-family: monospace; word-break: break-all; }
.timeline { display: flex; gap: 1.5rem; }
.timeline-line { position: relative; width: 4px; background: rgba(255, 255, 255, 0.1); transform-origin: top; }
.timeline-fill { width: 100%; background: linear-gradient(180deg, var(--qf-purple), var(--qf-cyan)); }
.timeline-node { width: 1.5rem; height: 1.5rem; border-radius: 50%; border: 2px solid var(--qf-muted); }
.timeline-node.completed { background: var(--qf-purple); border-color: var(--qf-purple); }
.phase-items .done::before { content: "\2713  "; color: #10B981; }
.newsletter-form { display: flex; gap: 0.5rem; width: 100%; max-width: 32rem; }
.newsletter-input { flex: 1; padding: 0.75rem 1rem; border-radius: 0.75rem; background: rgba(255, 255, 255, 0.05); border: 1px solid rgba(255, 255, 255, 0.1); color: inherit; }
.newsletter-success { color: #10B981; }
.footer { border-top: 1px solid rgba(255, 255, 255, 0.1); padding: 3rem 1rem; }
.footer-link { display: block; color: var(--qf-muted); }
.footer-legal { color: var(--qf-muted); font-size: 0.875rem; }
"#;
