//! Listing and point lookup over a [`RecordSource`].

use tracing::debug;

use crate::car::Car;
use crate::error::{Error, Result};
use crate::query::Query;
use crate::store::RecordSource;

/// The read side of the car inventory.
pub struct Inventory<S> {
    source: S,
}

impl<S: RecordSource> Inventory<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// All cars, or those whose name or brand contains `search`
    /// case-insensitively.
    pub async fn list(&self, search: Option<&str>) -> Result<Vec<Car>> {
        let query = Query::list(search);
        self.source.fetch(&query.filter()).await
    }

    /// The car with identifier `id`.
    ///
    /// Takes the first row if the store returns more than one; identifier
    /// uniqueness is the store's job.
    pub async fn resolve(&self, id: &str) -> Result<Car> {
        let query = Query::by_id(id)?;
        let cars = self.source.fetch(&query.filter()).await?;

        if cars.len() > 1 {
            debug!(id, rows = cars.len(), "point lookup matched several rows, using the first");
        }
        cars.into_iter().next().ok_or(Error::NotFound)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::query::Filter;

    /// In-memory source that records every filter it is asked for.
    #[derive(Default)]
    pub(crate) struct FakeSource {
        pub cars: Vec<Car>,
        pub fail: bool,
        pub seen: Mutex<Vec<String>>,
    }

    impl FakeSource {
        pub(crate) fn with(cars: Vec<Car>) -> Self {
            Self { cars, ..Self::default() }
        }

        pub(crate) fn failing() -> Self {
            Self { fail: true, ..Self::default() }
        }

        pub(crate) fn calls(&self) -> Vec<String> {
            self.seen.lock().unwrap().clone()
        }
    }

    impl RecordSource for FakeSource {
        async fn fetch(&self, filter: &Filter) -> Result<Vec<Car>> {
            self.seen.lock().unwrap().push(filter.to_string());
            if self.fail {
                return Err(Error::UpstreamStatus(503));
            }
            Ok(self.cars.clone())
        }
    }

    pub(crate) fn car(id: i64, name: &str) -> Car {
        Car { id, name: name.into(), ..Car::default() }
    }

    #[tokio::test]
    async fn list_without_term_selects_all() {
        let inventory = Inventory::new(FakeSource::with(vec![car(1, "X")]));

        let cars = inventory.list(None).await.unwrap();
        assert_eq!(cars, vec![car(1, "X")]);
        assert_eq!(inventory.source.calls(), ["select=*"]);
    }

    #[tokio::test]
    async fn list_with_term_filters_name_and_brand() {
        let inventory = Inventory::new(FakeSource::with(vec![]));

        let cars = inventory.list(Some("Range Rover")).await.unwrap();
        assert!(cars.is_empty());
        assert_eq!(
            inventory.source.calls(),
            ["or=(name.ilike.*Range%Rover*,brand.ilike.*Range%Rover*)"]
        );
    }

    #[tokio::test]
    async fn resolve_takes_the_first_row() {
        let inventory = Inventory::new(FakeSource::with(vec![car(3, "first"), car(3, "second")]));

        let found = inventory.resolve("3").await.unwrap();
        assert_eq!(found.name, "first");
        assert_eq!(inventory.source.calls(), ["id=eq.3"]);
    }

    #[tokio::test]
    async fn resolve_without_rows_is_not_found() {
        let inventory = Inventory::new(FakeSource::with(vec![]));
        assert!(matches!(inventory.resolve("3").await, Err(Error::NotFound)));
    }

    #[tokio::test]
    async fn empty_id_never_reaches_the_source() {
        let inventory = Inventory::new(FakeSource::with(vec![car(1, "X")]));

        let err = inventory.resolve("").await.unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert!(inventory.source.calls().is_empty());
    }

    #[tokio::test]
    async fn source_failures_are_not_retried() {
        let inventory = Inventory::new(FakeSource::failing());

        assert!(matches!(inventory.list(None).await, Err(Error::UpstreamStatus(503))));
        assert!(matches!(inventory.resolve("1").await, Err(Error::UpstreamStatus(503))));
        assert_eq!(inventory.source.calls().len(), 2);
    }
}
