//! Run orchestration
//!
//! fetch -> select -> render -> persist -> summary, plus the date-keyed
//! "generate if missing" loader used by the daily command.

use anyhow::Result;
use chrono::NaiveDate;
use tracing::{error, info, warn};

use uranai::{
    render_prompt, resolve_ranking, select_top, PromptRequest, PromptResult, RankingProvider,
    ZodiacSign, TOP_N,
};

use crate::report::format_summary;
use crate::store::PromptStore;

pub struct Workflow<P> {
    provider: P,
    prompts: PromptStore,
}

impl<P: RankingProvider> Workflow<P> {
    pub fn new(provider: P, prompts: PromptStore) -> Self {
        Self { provider, prompts }
    }

    /// Ranking variant: top three of today's ranking, with podium themes.
    ///
    /// A failed fetch is downgraded to the embedded fallback here and
    /// nowhere else.
    pub async fn run_ranking(&self, lang: &str, today: NaiveDate) -> Result<Vec<PromptResult>> {
        info!(lang = %lang, "Fetching today's ranking");
        let fetched = self.provider.fetch_today(lang).await;
        if let Err(err) = &fetched {
            warn!(error = %err, "Ranking fetch failed, using fallback data");
        }

        let snapshot = resolve_ranking(fetched, today);
        let date = snapshot.data.date;
        info!(date = %date, origin = %snapshot.origin, "Ranking ready");

        let results: Vec<PromptResult> = select_top(&snapshot.data, TOP_N)
            .iter()
            .map(|entry| {
                let prompt = render_prompt(&PromptRequest::from_entry(entry));
                info!(
                    rank = entry.rank,
                    sign = %entry.sign,
                    chars = prompt.chars().count(),
                    "Prompt generated"
                );
                PromptResult::for_entry(entry, prompt, date)
            })
            .collect();

        self.prompts.save(date, &results)?;
        println!("{}", format_summary("Top 3 Zodiac Sora Prompts", date, &results));

        Ok(results)
    }

    /// All-signs variant: one unranked prompt per sign in canonical order.
    pub fn run_all_signs(&self, today: NaiveDate) -> Result<Vec<PromptResult>> {
        info!(date = %today, "Generating prompts for all signs");

        let results: Vec<PromptResult> = ZodiacSign::ALL
            .into_iter()
            .map(|sign| {
                let prompt = render_prompt(&PromptRequest::new(sign.as_str()));
                info!(sign = %sign, chars = prompt.chars().count(), "Prompt generated");
                PromptResult::for_sign(sign.as_str(), prompt, today)
            })
            .collect();

        self.prompts.save(today, &results)?;
        println!("{}", format_summary("12 Zodiac Signs Sora Prompts", today, &results));

        Ok(results)
    }

    /// Today's prompts, generating them through the ranking variant first if
    /// the file is missing. Empty means nothing usable exists.
    pub async fn load_today(&self, lang: &str, today: NaiveDate) -> Vec<PromptResult> {
        if !self.prompts.exists(today) {
            info!("Prompts not found, generating...");
            if let Err(err) = self.run_ranking(lang, today).await {
                error!(error = %err, "Prompt generation failed");
            }
        }

        if !self.prompts.exists(today) {
            let path = self.prompts.path_for(today);
            error!(path = %path.display(), "Failed to generate prompts");
            return Vec::new();
        }

        match self.prompts.load(today) {
            Ok(prompts) => {
                info!(count = prompts.len(), date = %today, "Loaded prompts");
                prompts
            }
            Err(err) => {
                error!(error = %err, "Failed to load prompts");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::fs;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tempfile::TempDir;
    use uranai::{FetchError, RankingData, RankingEntry};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
    }

    /// Serves a fixed ranking and counts fetches
    struct StaticProvider {
        data: RankingData,
        calls: Arc<AtomicUsize>,
    }

    impl StaticProvider {
        fn new(date: NaiveDate, ranking: Vec<RankingEntry>) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            let provider = Self {
                data: RankingData { date, ranking },
                calls: Arc::clone(&calls),
            };
            (provider, calls)
        }
    }

    #[async_trait]
    impl RankingProvider for StaticProvider {
        async fn fetch_today(&self, _lang: &str) -> Result<RankingData, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.data.clone())
        }
    }

    struct RefusingProvider;

    /// Answers every fetch with a server error
    struct FailingStatusProvider;

    #[async_trait]
    impl RankingProvider for FailingStatusProvider {
        async fn fetch_today(&self, _lang: &str) -> Result<RankingData, FetchError> {
            Err(FetchError::Status {
                status: 500,
                body: "Internal Server Error".to_string(),
            })
        }
    }

    #[async_trait]
    impl RankingProvider for RefusingProvider {
        async fn fetch_today(&self, _lang: &str) -> Result<RankingData, FetchError> {
            Err(FetchError::Transport("connection refused".to_string()))
        }
    }

    fn unsorted_ranking() -> Vec<RankingEntry> {
        vec![
            RankingEntry::new(5, "gemini", "Chatty", "notebook"),
            RankingEntry::new(3, "virgo", "Neat", "comb"),
            RankingEntry::new(1, "scorpio", "Fierce", "ruby"),
            RankingEntry::new(8, "taurus", "Calm", "tea"),
            RankingEntry::new(2, "libra", "Fair", "rose"),
        ]
    }

    #[tokio::test]
    async fn test_fetch_failure_uses_fallback() {
        let tmp = TempDir::new().unwrap();
        let workflow = Workflow::new(RefusingProvider, PromptStore::new(tmp.path()));

        let results = workflow.run_ranking("ja", today()).await.unwrap();

        let picked: Vec<_> = results
            .iter()
            .map(|r| (r.rank, r.sign.as_str()))
            .collect();
        assert_eq!(
            picked,
            vec![(Some(1), "leo"), (Some(2), "pisces"), (Some(3), "aries")]
        );
        assert!(results.iter().all(|r| r.date == today()));
        assert!(tmp.path().join("2026-10-14_prompts.json").exists());
    }

    #[tokio::test]
    async fn test_server_error_uses_fallback() {
        let tmp = TempDir::new().unwrap();
        let workflow = Workflow::new(FailingStatusProvider, PromptStore::new(tmp.path()));

        let results = workflow.run_ranking("ja", today()).await.unwrap();

        let signs: Vec<_> = results.iter().map(|r| r.sign.as_str()).collect();
        assert_eq!(signs, vec!["leo", "pisces", "aries"]);
        assert!(results.iter().all(|r| r.date == today()));
    }

    #[tokio::test]
    async fn test_live_records_use_resolved_signs() {
        let tmp = TempDir::new().unwrap();
        let store = PromptStore::new(tmp.path());
        let (provider, _calls) = StaticProvider::new(
            today(),
            vec![
                RankingEntry::new(0, "Leo", "Zero", "none"),
                RankingEntry::new(1, "ophiuchus", "Unknown", "staff"),
                RankingEntry::new(2, "Pisces", "Dreamy", "shell"),
            ],
        );
        let workflow = Workflow::new(provider, store.clone());

        workflow.run_ranking("ja", today()).await.unwrap();
        let saved = store.load(today()).unwrap();

        let picked: Vec<_> = saved.iter().map(|r| (r.rank, r.sign.as_str())).collect();
        assert_eq!(picked, vec![(Some(1), "aries"), (Some(2), "pisces")]);
        assert!(saved[0].prompt.contains(uranai::ZodiacVisual::of(ZodiacSign::Aries).scene));
        assert!(saved[1].prompt.contains(uranai::ZodiacVisual::of(ZodiacSign::Pisces).scene));
    }

    #[tokio::test]
    async fn test_live_ranking_keeps_source_order() {
        let tmp = TempDir::new().unwrap();
        let (provider, calls) = StaticProvider::new(today(), unsorted_ranking());
        let workflow = Workflow::new(provider, PromptStore::new(tmp.path()));

        let results = workflow.run_ranking("en", today()).await.unwrap();

        let signs: Vec<_> = results.iter().map(|r| r.sign.as_str()).collect();
        assert_eq!(signs, vec!["virgo", "scorpio", "libra"]);
        assert!(results[1].prompt.contains("1st"));
        assert_eq!(results[0].lucky_item.as_deref(), Some("comb"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_all_signs_is_byte_identical_on_rerun() {
        let tmp = TempDir::new().unwrap();
        let store = PromptStore::new(tmp.path().join("prompts"));
        let workflow = Workflow::new(RefusingProvider, store.clone());

        let first = workflow.run_all_signs(today()).unwrap();
        let first_bytes = fs::read(store.path_for(today())).unwrap();
        let second = workflow.run_all_signs(today()).unwrap();
        let second_bytes = fs::read(store.path_for(today())).unwrap();

        assert_eq!(first.len(), 12);
        assert_eq!(first, second);
        assert_eq!(first_bytes, second_bytes);

        let signs: Vec<_> = first.iter().map(|r| r.sign.as_str()).collect();
        let canonical: Vec<_> = ZodiacSign::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(signs, canonical);
        assert!(first.iter().all(|r| r.rank.is_none()));
    }

    #[tokio::test]
    async fn test_load_today_generates_once() {
        let tmp = TempDir::new().unwrap();
        let (provider, calls) = StaticProvider::new(today(), unsorted_ranking());
        let workflow = Workflow::new(provider, PromptStore::new(tmp.path()));

        let first = workflow.load_today("ja", today()).await;
        assert_eq!(first.len(), 3);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        let second = workflow.load_today("ja", today()).await;
        assert_eq!(second, first);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_load_today_reuses_all_signs_file() {
        let tmp = TempDir::new().unwrap();
        let (provider, calls) = StaticProvider::new(today(), unsorted_ranking());
        let workflow = Workflow::new(provider, PromptStore::new(tmp.path()));

        workflow.run_all_signs(today()).unwrap();
        let loaded = workflow.load_today("ja", today()).await;

        assert_eq!(loaded.len(), 12);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_load_today_empty_when_file_never_appears() {
        let tmp = TempDir::new().unwrap();
        // Live data dated another day lands in a different file.
        let yesterday = NaiveDate::from_ymd_opt(2026, 10, 13).unwrap();
        let (provider, calls) = StaticProvider::new(yesterday, unsorted_ranking());
        let workflow = Workflow::new(provider, PromptStore::new(tmp.path()));

        let loaded = workflow.load_today("ja", today()).await;
        assert!(loaded.is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(tmp.path().join("2026-10-13_prompts.json").exists());
    }

    #[tokio::test]
    async fn test_load_today_empty_on_corrupt_file() {
        let tmp = TempDir::new().unwrap();
        let store = PromptStore::new(tmp.path());
        fs::write(store.path_for(today()), "[{").unwrap();
        let workflow = Workflow::new(RefusingProvider, store);

        assert!(workflow.load_today("ja", today()).await.is_empty());
    }
}
