use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use smk_model::{Publication, PublicationSummary, YearCount};

pub fn summarize_publications(publications: &[Publication], today: NaiveDate) -> PublicationSummary {
    let mut by_year: BTreeMap<i32, usize> = BTreeMap::new();
    for publication in publications {
        *by_year.entry(publication.publication_date.year()).or_insert(0) += 1;
    }
    PublicationSummary {
        total: publications.len(),
        first_author: publications.iter().filter(|p| p.is_first_author).count(),
        peer_reviewed: publications.iter().filter(|p| p.is_peer_reviewed).count(),
        impact_score_total: publications.iter().map(|p| p.impact_score(today)).sum(),
        by_year: by_year
            .into_iter()
            .rev()
            .map(|(year, count)| YearCount { year, count })
            .collect(),
    }
}
