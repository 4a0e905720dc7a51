//! Date-keyed JSON files
//!
//! `prompts/{date}_prompts.json` and `results/{date}_videos.json`. Writes
//! are whole-file overwrites with no locking; the last writer wins.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use uranai::{PromptResult, VideoLink};

/// Generated prompts, one file per day
#[derive(Debug, Clone)]
pub struct PromptStore {
    dir: PathBuf,
}

impl PromptStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!("{}_prompts.json", date))
    }

    pub fn exists(&self, date: NaiveDate) -> bool {
        self.path_for(date).exists()
    }

    pub fn save(&self, date: NaiveDate, prompts: &[PromptResult]) -> Result<PathBuf> {
        let path = self.path_for(date);
        write_json(&self.dir, &path, prompts)?;
        info!(path = %path.display(), count = prompts.len(), "Saved prompts");
        Ok(path)
    }

    pub fn load(&self, date: NaiveDate) -> Result<Vec<PromptResult>> {
        read_json(&self.path_for(date))
    }
}

/// Collected video links, one file per day
#[derive(Debug, Clone)]
pub struct ResultStore {
    dir: PathBuf,
}

impl ResultStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!("{}_videos.json", date))
    }

    /// Links recorded so far for `date`; empty when the file does not exist yet
    pub fn load(&self, date: NaiveDate) -> Result<Vec<VideoLink>> {
        let path = self.path_for(date);
        if !path.exists() {
            return Ok(Vec::new());
        }
        read_json(&path)
    }

    pub fn save(&self, date: NaiveDate, links: &[VideoLink]) -> Result<PathBuf> {
        let path = self.path_for(date);
        write_json(&self.dir, &path, links)?;
        info!(path = %path.display(), count = links.len(), "Results saved");
        Ok(path)
    }

    /// Insert or replace the link for `link.sign`, keeping rank order
    pub fn record(&self, link: VideoLink) -> Result<(PathBuf, Vec<VideoLink>)> {
        let date = link.date;
        let mut links = self.load(date)?;
        links.retain(|existing| existing.sign != link.sign);
        links.push(link);
        links.sort_by_key(|l| l.rank.unwrap_or(u32::MAX));

        let path = self.save(date, &links)?;
        Ok((path, links))
    }
}

fn write_json<T: Serialize + ?Sized>(dir: &Path, path: &Path, value: &T) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create directory {:?}", dir))?;

    let content = serde_json::to_string_pretty(value).context("Failed to serialize JSON")?;
    fs::write(path, content).with_context(|| format!("Failed to write {:?}", path))?;
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {:?}", path))
}
