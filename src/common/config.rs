use std::path::Path;

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Layout policy selected at startup: "tall" (master/stack) or "stack"
    #[serde(default)]
    pub mode: LayoutMode,
    /// Tiling parameters
    #[serde(default)]
    pub layout: LayoutSettings,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Default)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    /// Master area plus evenly stacked remainder, orientation chosen by frame width
    #[default]
    Tall,
    /// Every pane in one evenly divided stack
    Stack,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(deny_unknown_fields)]
pub struct LayoutSettings {
    /// Number of panes routed to the master area. Zero omits the master area
    /// entirely; values beyond the pane count route every pane to it.
    #[serde(default = "default_master_count")]
    pub master_count: usize,
    /// Master area share of the split axis, strictly inside (0, 1).
    #[serde(default = "default_master_ratio")]
    pub master_ratio: f64,
    /// Step applied by each grow/shrink adjustment of the master ratio.
    #[serde(default = "default_ratio_step")]
    pub ratio_step: f64,
    /// Lower clamp for master ratio adjustments.
    #[serde(default = "default_min_ratio")]
    pub min_ratio: f64,
    /// Upper clamp for master ratio adjustments.
    #[serde(default = "default_max_ratio")]
    pub max_ratio: f64,
    /// Frames at least this wide place the master area beside the stack;
    /// narrower frames place it on top.
    #[serde(default = "default_wide_threshold")]
    pub wide_threshold: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            master_count: default_master_count(),
            master_ratio: default_master_ratio(),
            ratio_step: default_ratio_step(),
            min_ratio: default_min_ratio(),
            max_ratio: default_max_ratio(),
            wide_threshold: default_wide_threshold(),
        }
    }
}

fn default_master_count() -> usize { 1 }
fn default_master_ratio() -> f64 { 0.55 }
fn default_ratio_step() -> f64 { 0.05 }
fn default_min_ratio() -> f64 { 0.05 }
fn default_max_ratio() -> f64 { 0.95 }
fn default_wide_threshold() -> f64 { 132.0 }

impl Config {
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(text).context("failed to parse layout config")?;
        let issues = config.validate();
        if !issues.is_empty() {
            bail!("invalid layout config: {}", issues.join("; "));
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::parse(&text)
    }

    pub fn validate(&self) -> Vec<String> { self.layout.validate() }
}

impl LayoutSettings {
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if !(self.master_ratio > 0.0 && self.master_ratio < 1.0) {
            issues.push(format!(
                "master_ratio must be inside (0, 1), got {}",
                self.master_ratio
            ));
        }

        if self.ratio_step <= 0.0 {
            issues.push(format!(
                "ratio_step must be positive, got {}",
                self.ratio_step
            ));
        }

        if !(self.min_ratio > 0.0 && self.min_ratio < 1.0) {
            issues.push(format!(
                "min_ratio must be inside (0, 1), got {}",
                self.min_ratio
            ));
        }

        if !(self.max_ratio > 0.0 && self.max_ratio < 1.0) {
            issues.push(format!(
                "max_ratio must be inside (0, 1), got {}",
                self.max_ratio
            ));
        }

        if self.min_ratio >= self.max_ratio {
            issues.push(format!(
                "min_ratio ({}) must be below max_ratio ({})",
                self.min_ratio, self.max_ratio
            ));
        }

        if self.wide_threshold <= 0.0 {
            issues.push(format!(
                "wide_threshold must be positive, got {}",
                self.wide_threshold
            ));
        }

        issues
    }

    /// Adjust the master pane count, saturating at zero. There is no upper
    /// bound; a count beyond the pane list routes every pane to the master.
    pub fn bump_master_count(&mut self, delta: i32) -> usize {
        self.master_count = if delta < 0 {
            self.master_count.saturating_sub(delta.unsigned_abs() as usize)
        } else {
            self.master_count.saturating_add(delta as usize)
        };
        self.master_count
    }

    /// Adjust the master ratio by `delta`, clamped to the configured bounds.
    pub fn bump_master_ratio(&mut self, delta: f64) -> f64 {
        self.master_ratio = (self.master_ratio + delta).clamp(self.min_ratio, self.max_ratio);
        self.master_ratio
    }
}
