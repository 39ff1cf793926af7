//! Chart datasets over the full store

use crate::model::Country;

/// Bucket label for records without a region
pub const UNKNOWN_REGION: &str = "Unknown";

/// Bars in the population chart
pub const TOP_POPULATION_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct RegionShare {
    pub region: String,
    pub count: usize,
    /// Share of all countries, 0.0..=100.0
    pub percent: f64,
}

/// Country counts per region in first-seen order
pub fn region_distribution(countries: &[Country]) -> Vec<RegionShare> {
    let mut buckets: Vec<(String, usize)> = Vec::new();
    for country in countries {
        let region = if country.region.is_empty() {
            UNKNOWN_REGION
        } else {
            country.region.as_str()
        };
        match buckets.iter_mut().find(|(name, _)| name == region) {
            Some((_, count)) => *count += 1,
            None => buckets.push((region.to_string(), 1)),
        }
    }

    let total = countries.len().max(1) as f64;
    buckets
        .into_iter()
        .map(|(region, count)| RegionShare {
            region,
            count,
            percent: count as f64 * 100.0 / total,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopulationBar {
    pub name: String,
    pub population: u64,
}

/// The most populous countries, largest first; zero populations are skipped
pub fn top_by_population(countries: &[Country], limit: usize) -> Vec<PopulationBar> {
    let mut ranked: Vec<&Country> = countries
        .iter()
        .filter(|c| c.population_or_zero() > 0)
        .collect();
    ranked.sort_by(|a, b| b.population_or_zero().cmp(&a.population_or_zero()));
    ranked
        .into_iter()
        .take(limit)
        .map(|c| PopulationBar {
            name: c.common_name().to_string(),
            population: c.population_or_zero(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::country::fixtures::country;

    #[test]
    fn test_region_distribution_buckets_unknown() {
        let data = vec![
            country("A", "Asia", None),
            country("B", "", None),
            country("C", "Asia", None),
            country("D", "Europe", None),
        ];
        let shares = region_distribution(&data);
        let counts: Vec<(&str, usize)> = shares.iter().map(|s| (s.region.as_str(), s.count)).collect();
        assert_eq!(counts, vec![("Asia", 2), ("Unknown", 1), ("Europe", 1)]);
        assert_eq!(shares[0].percent, 50.0);
        assert_eq!(shares.iter().map(|s| s.count).sum::<usize>(), data.len());
    }

    #[test]
    fn test_region_distribution_empty() {
        assert!(region_distribution(&[]).is_empty());
    }

    #[test]
    fn test_top_by_population_limits_and_orders() {
        let mut data: Vec<Country> = (1..=12)
            .map(|i| country(&format!("C{}", i), "Asia", Some(i * 100)))
            .collect();
        data.push(country("Empty", "Asia", Some(0)));
        data.push(country("Missing", "Asia", None));

        let top = top_by_population(&data, TOP_POPULATION_LIMIT);
        assert_eq!(top.len(), 10);
        assert_eq!(top[0].name, "C12");
        assert_eq!(top[9].name, "C3");
        assert!(top.windows(2).all(|w| w[0].population >= w[1].population));
        assert!(top.iter().all(|b| b.population > 0));
    }

    #[test]
    fn test_top_by_population_with_few_countries() {
        let data = vec![country("Zero", "Asia", Some(0)), country("One", "Asia", Some(1))];
        let top = top_by_population(&data, TOP_POPULATION_LIMIT);
        assert_eq!(top, vec![PopulationBar { name: "One".to_string(), population: 1 }]);
    }
}
