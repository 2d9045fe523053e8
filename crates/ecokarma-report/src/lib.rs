//! ecokarma-report — Share-card generation.
//!
//! Renders a saved `KarmaReport` as a self-contained HTML card or a plain
//! text card for terminals. Pure string building; exporting pixels is
//! somebody else's job.

pub mod card;
pub mod text;
