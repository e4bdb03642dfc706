//! Price lookups over a built pricebook document.

use crate::domain::model::{CountryRecord, Level, PricebookDocument};
use crate::utils::error::{EtlError, Result};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectTerm {
    Short,
    Long,
}

impl ProjectTerm {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectTerm::Short => "short",
            ProjectTerm::Long => "long",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceQuery {
    /// Yearly rate for a staffing level, with or without backfill.
    Yearly { level: Level, backfill: String },
    /// On-site dispatch, priced at the full-day rate.
    Dispatch { level: String },
    Incident { response: String },
    Project { level: Level, term: ProjectTerm },
}

fn invalid(message: impl Into<String>) -> EtlError {
    EtlError::InvalidQuery {
        message: message.into(),
    }
}

fn parse_level(value: &str) -> Result<Level> {
    value
        .parse::<Level>()
        .map_err(|_| invalid("Invalid level parameter"))
}

impl PriceQuery {
    /// Builds a query from a service name and its path parts, e.g.
    /// `yearly L2 with` or `incident nbd`.
    pub fn parse(service: &str, parts: &[&str]) -> Result<Self> {
        let parts: Vec<&str> = parts.iter().copied().filter(|p| !p.is_empty()).collect();

        match service {
            "yearly" => match parts.as_slice() {
                [level, backfill, ..] => Ok(PriceQuery::Yearly {
                    level: parse_level(level)?,
                    backfill: backfill.to_string(),
                }),
                _ => Err(invalid(
                    "Missing level or backfill parameter for yearly service",
                )),
            },
            "dispatch" => match parts.as_slice() {
                [level, ..] => Ok(PriceQuery::Dispatch {
                    level: level.to_string(),
                }),
                _ => Err(invalid("Missing level parameter for dispatch service")),
            },
            "incident" => match parts.as_slice() {
                [response, ..] => Ok(PriceQuery::Incident {
                    response: response.to_string(),
                }),
                _ => Err(invalid(
                    "Missing responseType parameter for incident service",
                )),
            },
            "project" => match parts.as_slice() {
                [level, term, ..] => {
                    let level = parse_level(level)?;
                    let term = match *term {
                        "short" => ProjectTerm::Short,
                        "long" => ProjectTerm::Long,
                        other => {
                            return Err(invalid(format!("Invalid projectType '{}'", other)))
                        }
                    };
                    Ok(PriceQuery::Project { level, term })
                }
                _ => Err(invalid(
                    "Missing level or projectType parameter for project service",
                )),
            },
            _ => Err(invalid("Invalid service type")),
        }
    }

    fn describe(&self) -> String {
        match self {
            PriceQuery::Yearly { level, backfill } => format!("yearly/{}/{}", level, backfill),
            PriceQuery::Dispatch { level } => format!("dispatch/{}", level),
            PriceQuery::Incident { response } => format!("incident/{}", response),
            PriceQuery::Project { level, term } => format!("project/{}/{}", level, term.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub value: f64,
    pub currency: Option<String>,
    pub payment_terms: Option<String>,
    pub description: String,
    pub terms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountrySummary {
    pub country: Option<String>,
    pub region: Option<String>,
}

/// Distinct regions in the order they first appear.
pub fn regions(document: &PricebookDocument) -> Vec<String> {
    let mut regions: Vec<String> = Vec::new();
    for region in document.countries.iter().filter_map(|c| c.region.as_ref()) {
        if !regions.contains(region) {
            regions.push(region.clone());
        }
    }
    regions
}

pub fn countries(document: &PricebookDocument, region: Option<&str>) -> Vec<CountrySummary> {
    document
        .countries
        .iter()
        .filter(|c| region.map_or(true, |r| c.region.as_deref() == Some(r)))
        .map(|c| CountrySummary {
            country: c.country.clone(),
            region: c.region.clone(),
        })
        .collect()
}

pub fn find_country<'a>(
    document: &'a PricebookDocument,
    country: &str,
) -> Result<&'a CountryRecord> {
    document
        .countries
        .iter()
        .find(|c| c.country.as_deref() == Some(country))
        .ok_or_else(|| EtlError::CountryNotFound {
            country: country.to_string(),
        })
}

pub fn quote(document: &PricebookDocument, country: &str, query: &PriceQuery) -> Result<Quote> {
    let record = find_country(document, country)?;
    let not_found = || EtlError::PriceNotFound {
        query: format!("{}/{}", country, query.describe()),
    };

    let (value, description) = match query {
        PriceQuery::Yearly { level, backfill } => {
            let rate = record.levels.get(*level);
            let value = match backfill.as_str() {
                "with" => rate.with_backfill,
                "without" => rate.without_backfill,
                _ => return Err(not_found()),
            };
            (value, document.descriptions.get(*level).to_string())
        }
        PriceQuery::Dispatch { level } => {
            (record.dispatch.full_day, format!("Dispatch for {}", level))
        }
        PriceQuery::Incident { response } => {
            let value = record
                .dispatch
                .incident_responses
                .get(response)
                .ok_or_else(not_found)?;
            (
                value,
                format!("Incident response: {}", response.to_uppercase()),
            )
        }
        PriceQuery::Project { level, term } => {
            let monthly = match term {
                ProjectTerm::Short => &record.dispatch.project_short_monthly,
                ProjectTerm::Long => &record.dispatch.project_long_monthly,
            };
            (
                monthly[level.index()],
                format!("{} project monthly rate for {}", term.as_str(), level),
            )
        }
    };

    tracing::debug!("Quoted {} for {}: {}", query.describe(), country, value);

    Ok(Quote {
        value,
        currency: record.currency.clone(),
        payment_terms: record.payment_terms.clone(),
        description,
        terms: document.terms.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{DispatchRates, IncidentResponses, Levels, SupportLevelRate};

    fn record(region: &str, country: &str) -> CountryRecord {
        let mut levels = Levels::default();
        levels.l2 = SupportLevelRate {
            with_backfill: 52000.0,
            without_backfill: 48000.0,
        };
        CountryRecord {
            region: Some(region.to_string()),
            country: Some(country.to_string()),
            supplier: Some("Acme".to_string()),
            currency: Some("EUR".to_string()),
            payment_terms: Some("Net 45".to_string()),
            levels,
            dispatch: DispatchRates {
                full_day: 400.0,
                half_day: 250.0,
                per_hour: 60.0,
                incident_responses: IncidentResponses::from_rates([
                    120.0, 180.0, 150.0, 110.0, 90.0, 80.0,
                ]),
                additional_hour: 55.0,
                project_short_monthly: [1.0, 2.0, 3.0, 4.0, 5.0],
                project_long_monthly: [10.0, 20.0, 30.0, 40.0, 50.0],
            },
        }
    }

    fn document() -> PricebookDocument {
        PricebookDocument::new(vec![
            record("EMEA", "Germany"),
            record("APAC", "Japan"),
            record("EMEA", "France"),
        ])
    }

    #[test]
    fn test_regions_first_seen_order() {
        assert_eq!(regions(&document()), vec!["EMEA", "APAC"]);
    }

    #[test]
    fn test_countries_filtered_by_region() {
        let doc = document();
        assert_eq!(countries(&doc, None).len(), 3);

        let emea: Vec<_> = countries(&doc, Some("EMEA"))
            .into_iter()
            .map(|c| c.country.unwrap())
            .collect();
        assert_eq!(emea, vec!["Germany", "France"]);
        assert!(countries(&doc, Some("LATAM")).is_empty());
    }

    #[test]
    fn test_yearly_quote() {
        let query = PriceQuery::parse("yearly", &["L2", "without"]).unwrap();
        let quote = quote(&document(), "Germany", &query).unwrap();

        assert_eq!(quote.value, 48000.0);
        assert_eq!(quote.currency.as_deref(), Some("EUR"));
        assert_eq!(quote.payment_terms.as_deref(), Some("Net 45"));
        assert_eq!(quote.description, crate::domain::reference::L2_DESCRIPTION);
        assert_eq!(quote.terms.len(), 8);
    }

    #[test]
    fn test_dispatch_quote_uses_full_day() {
        let query = PriceQuery::parse("dispatch", &["L4"]).unwrap();
        let quote = quote(&document(), "Japan", &query).unwrap();
        assert_eq!(quote.value, 400.0);
        assert_eq!(quote.description, "Dispatch for L4");
    }

    #[test]
    fn test_incident_quote() {
        let query = PriceQuery::parse("incident", &["24x7x4"]).unwrap();
        let quote = quote(&document(), "France", &query).unwrap();
        assert_eq!(quote.value, 180.0);
        assert_eq!(quote.description, "Incident response: 24X7X4");
    }

    #[test]
    fn test_project_quote() {
        let query = PriceQuery::parse("project", &["L3", "long"]).unwrap();
        let quote = quote(&document(), "Germany", &query).unwrap();
        assert_eq!(quote.value, 30.0);
        assert_eq!(quote.description, "long project monthly rate for L3");
    }

    #[test]
    fn test_unknown_country() {
        let query = PriceQuery::parse("dispatch", &["L1"]).unwrap();
        let err = quote(&document(), "Atlantis", &query).unwrap_err();
        assert!(matches!(err, EtlError::CountryNotFound { .. }));
    }

    #[test]
    fn test_unknown_price_keys() {
        let doc = document();
        let query = PriceQuery::parse("incident", &["4bd"]).unwrap();
        assert!(matches!(
            quote(&doc, "Germany", &query),
            Err(EtlError::PriceNotFound { .. })
        ));

        let query = PriceQuery::parse("yearly", &["L1", "partial"]).unwrap();
        assert!(matches!(
            quote(&doc, "Germany", &query),
            Err(EtlError::PriceNotFound { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_bad_queries() {
        let cases: [(&str, &[&str]); 6] = [
            ("yearly", &["L1"]),
            ("yearly", &["L9", "with"]),
            ("dispatch", &[]),
            ("incident", &[""]),
            ("project", &["L1", "medium"]),
            ("support", &["L1"]),
        ];
        for (service, parts) in cases {
            assert!(matches!(
                PriceQuery::parse(service, parts),
                Err(EtlError::InvalidQuery { .. })
            ));
        }
    }
}
