//! Reporting - read-time aggregations over the full sales set.
//!
//! No materialized views, no caching: every report walks the stored
//! sales. Correctness matters more than performance at this scale.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::{Capability, Sale, Session};
use crate::errors::AppResult;
use crate::infra::Repositories;

/// Headline dashboard metrics.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub product_count: u64,
    pub customer_count: u64,
    pub total_sales: f64,
}

/// Reporting service trait for dependency injection.
///
/// Grouped reports key on the denormalized name snapshots carried by
/// each sale, so a renamed product keeps its historical rows under
/// the old name.
#[async_trait]
pub trait ReportService: Send + Sync {
    /// Sum of `total` across all sales; 0 when there are none
    async fn total_sales(&self, session: &Session) -> AppResult<f64>;

    /// Summed totals per product name, descending by total
    async fn sales_by_product(&self, session: &Session) -> AppResult<Vec<(String, f64)>>;

    /// Summed totals per customer name, descending by total
    async fn sales_by_customer(&self, session: &Session) -> AppResult<Vec<(String, f64)>>;

    /// The `n` most recent sales, date-descending
    async fn recent_sales(&self, session: &Session, n: usize) -> AppResult<Vec<Sale>>;

    /// Headline counts and revenue for the dashboard
    async fn dashboard(&self, session: &Session) -> AppResult<Dashboard>;
}

/// Concrete implementation of ReportService.
pub struct ReportDesk<R: Repositories> {
    repos: Arc<R>,
}

impl<R: Repositories> ReportDesk<R> {
    /// Create new report service instance
    pub fn new(repos: Arc<R>) -> Self {
        Self { repos }
    }
}

#[async_trait]
impl<R: Repositories> ReportService for ReportDesk<R> {
    async fn total_sales(&self, session: &Session) -> AppResult<f64> {
        session.require(Capability::ViewReports)?;
        let sales = self.repos.sales().list().await?;
        Ok(sum_totals(&sales))
    }

    async fn sales_by_product(&self, session: &Session) -> AppResult<Vec<(String, f64)>> {
        session.require(Capability::ViewReports)?;
        let sales = self.repos.sales().list().await?;
        Ok(totals_by(&sales, |sale| &sale.product_name))
    }

    async fn sales_by_customer(&self, session: &Session) -> AppResult<Vec<(String, f64)>> {
        session.require(Capability::ViewReports)?;
        let sales = self.repos.sales().list().await?;
        Ok(totals_by(&sales, |sale| &sale.customer_name))
    }

    async fn recent_sales(&self, session: &Session, n: usize) -> AppResult<Vec<Sale>> {
        session.require(Capability::ViewReports)?;
        let mut sales = self.repos.sales().list().await?;
        sales.sort_by(|a, b| b.date.cmp(&a.date));
        sales.truncate(n);
        Ok(sales)
    }

    async fn dashboard(&self, session: &Session) -> AppResult<Dashboard> {
        session.require(Capability::ViewReports)?;
        let products = self.repos.products().list().await?;
        let customers = self.repos.customers().list().await?;
        let sales = self.repos.sales().list().await?;
        Ok(Dashboard {
            product_count: products.len() as u64,
            customer_count: customers.len() as u64,
            total_sales: sum_totals(&sales),
        })
    }
}

/// Sum of sale totals.
fn sum_totals(sales: &[Sale]) -> f64 {
    sales.iter().map(|sale| sale.total).sum()
}

/// Group sale totals by a key and sort descending by summed total.
/// Ties break on the name so the ordering is deterministic.
fn totals_by<'a, F>(sales: &'a [Sale], key: F) -> Vec<(String, f64)>
where
    F: Fn(&'a Sale) -> &'a str,
{
    let mut grouped: HashMap<&str, f64> = HashMap::new();
    for sale in sales {
        *grouped.entry(key(sale)).or_insert(0.0) += sale.total;
    }

    let mut rows: Vec<(String, f64)> = grouped
        .into_iter()
        .map(|(name, total)| (name.to_string(), total))
        .collect();
    rows.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    rows
}
