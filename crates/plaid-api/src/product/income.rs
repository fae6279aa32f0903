//! Income allows you to retrieve various information pertaining to a user's income.

use serde::Deserialize;

use super::{Product, ProductKind};
use crate::data::{Account, Amount};

/// The definition of the `Income` product.
#[derive(Debug, Clone, Copy, Default)]
pub struct Income;

/// The underlying data representation of Income.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct IncomeData {
    /// A list of user accounts and their balances.
    pub accounts: Vec<Account>,
    /// Income data.
    pub income: IncomeInternalData,
}

/// Internal data representation of the income response.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct IncomeInternalData {
    /// A list of income streams.
    pub income_streams: Vec<IncomeStream>,
    /// The sum of user's income over the past 365 days. If there are less than 365 days of data
    /// this will be less than a full year's income.
    pub last_year_income: Amount,
    /// `last_year_income` interpolated to value before taxes. This is the minimum pre-tax salary
    /// that assumes a filing status of single with zero dependents.
    pub last_year_income_before_tax: Amount,
    /// User's income extrapolated over a year based on current, active income streams. Income
    /// streams become inactive if they have not recurred for more than two cycles.
    pub projected_yearly_income: Amount,
    /// `projected_yearly_income` interpolated to value before taxes.
    pub projected_yearly_income_before_tax: Amount,
    /// Max number of income streams present at the same time over the past 365 days.
    pub max_number_of_overlapping_income_streams: u64,
    /// Total number of distinct income streams received over the past 365 days.
    pub number_of_income_streams: u64,
}

/// A stream of income that Plaid has detected from the user's transactions.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct IncomeStream {
    /// How much income per month in dollars.
    pub monthly_income: Amount,
    /// Plaid's confidence in this estimate, between 0 and 1.
    pub confidence: f64,
    /// The number of days Plaid has seen this stream for.
    pub days: u64,
    /// The name of the income stream.
    pub name: String,
}

impl Product for Income {
    const KIND: ProductKind = ProductKind::Income;
    type Data = IncomeData;
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decode_income_data() {
        let data: IncomeData = serde_json::from_value(json!({
            "accounts": [],
            "income": {
                "income_streams": [
                    { "monthly_income": 5250, "confidence": 1, "days": 284, "name": "PLAID" }
                ],
                "last_year_income": 65000,
                "last_year_income_before_tax": 81250,
                "projected_yearly_income": 63000,
                "projected_yearly_income_before_tax": 78750,
                "max_number_of_overlapping_income_streams": 1,
                "number_of_income_streams": 1
            }
        }))
        .unwrap();

        let stream = &data.income.income_streams[0];
        assert_eq!(stream.monthly_income, 5250.0);
        assert_eq!(stream.confidence, 1.0);
        assert_eq!(stream.days, 284);
        assert_eq!(stream.name, "PLAID");
        assert_eq!(data.income.number_of_income_streams, 1);
    }
}
