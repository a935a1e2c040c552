use tokio::sync::RwLock;

use crate::model::{CountryStats, GlobalStats};

/// Latest scrape results, replaced wholesale by the refresh jobs and read
/// by the API handlers. Each cell is swapped under its own write lock, so
/// readers always see a complete snapshot; the two cells refresh
/// independently of each other.
#[derive(Default)]
pub(crate) struct StatsStore {
    global: RwLock<GlobalStats>,
    countries: RwLock<Vec<CountryStats>>,
}

impl StatsStore {
    pub(crate) async fn global(&self) -> GlobalStats {
        self.global.read().await.clone()
    }

    pub(crate) async fn set_global(&self, stats: GlobalStats) {
        *self.global.write().await = stats;
    }

    pub(crate) async fn countries(&self) -> Vec<CountryStats> {
        self.countries.read().await.clone()
    }

    pub(crate) async fn set_countries(&self, list: Vec<CountryStats>) {
        *self.countries.write().await = list;
    }

    /// Exact, case-sensitive name match against the current list.
    pub(crate) async fn lookup(&self, name: &str) -> Option<CountryStats> {
        self.countries
            .read()
            .await
            .iter()
            .find(|c| c.country == name)
            .cloned()
    }
}
