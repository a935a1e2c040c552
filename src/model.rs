use serde_derive::{Deserialize, Serialize};

/// Worldwide totals served by `/all`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct GlobalStats {
    pub(crate) cases: i64,
    pub(crate) deaths: i64,
    pub(crate) recovered: i64,
}

/// One row of per-country statistics. JSON keys are the camelCase names
/// existing consumers of the API expect.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CountryStats {
    pub(crate) country: String,
    pub(crate) total_cases: i64,
    pub(crate) new_cases: i64,
    pub(crate) total_deaths: i64,
    pub(crate) new_deaths: i64,
    pub(crate) total_recovered: i64,
    pub(crate) active_cases: i64,
    pub(crate) critical_cases: i64,
    pub(crate) total_tests: i64,
    pub(crate) population: i64,
}

/// Numeric columns of the country table the parser fills. Which table
/// offset feeds which field is declared in `constants::COUNTRY_COLUMNS`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CountryField {
    TotalCases,
    NewCases,
    TotalDeaths,
    NewDeaths,
    TotalRecovered,
    ActiveCases,
    CriticalCases,
    TotalTests,
    Population,
}

impl CountryStats {
    pub(crate) fn set(&mut self, field: CountryField, value: i64) {
        match field {
            CountryField::TotalCases => self.total_cases = value,
            CountryField::NewCases => self.new_cases = value,
            CountryField::TotalDeaths => self.total_deaths = value,
            CountryField::NewDeaths => self.new_deaths = value,
            CountryField::TotalRecovered => self.total_recovered = value,
            CountryField::ActiveCases => self.active_cases = value,
            CountryField::CriticalCases => self.critical_cases = value,
            CountryField::TotalTests => self.total_tests = value,
            CountryField::Population => self.population = value,
        }
    }
}
