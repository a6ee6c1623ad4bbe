//! Fund listing payload types (camelCase JSON)

use serde::{Deserialize, Serialize};

use crate::format::{format_date_millis, format_optional_number, format_percentage};

/// Asset class of a fund
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetClass {
    Bond,
    Stock,
    Balanced,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundOwner {
    pub id: u64,
    pub name: String,
    pub short_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundType {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundAssetType {
    pub id: u64,
    pub name: String,
    pub code: AssetClass,
}

/// NAV change percentages over several look-back windows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavChange {
    pub nav_to_previous: Option<f64>,
    pub nav_to_last_year: Option<f64>,
    #[serde(rename = "navTo1Months")]
    pub nav_to_1_months: Option<f64>,
    #[serde(rename = "navTo3Months")]
    pub nav_to_3_months: Option<f64>,
    #[serde(rename = "navTo6Months")]
    pub nav_to_6_months: Option<f64>,
    #[serde(rename = "navTo12Months")]
    pub nav_to_12_months: Option<f64>,
    #[serde(rename = "navTo24Months")]
    pub nav_to_24_months: Option<f64>,
    #[serde(rename = "navTo36Months")]
    pub nav_to_36_months: Option<f64>,
    #[serde(rename = "navTo60Months")]
    pub nav_to_60_months: Option<f64>,
    #[serde(rename = "annualizedReturn36Months")]
    pub annualized_return_36_months: Option<f64>,
    /// Unix milliseconds
    pub update_at: Option<i64>,
}

/// A single fund row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundData {
    pub id: u64,
    pub code: String,
    pub name: String,
    pub short_name: String,
    pub nav: f64,
    #[serde(default)]
    pub last_year_nav: Option<f64>,
    #[serde(default)]
    pub owner: Option<FundOwner>,
    #[serde(default)]
    pub fund_type: Option<FundType>,
    #[serde(default)]
    pub data_fund_asset_type: Option<FundAssetType>,
    #[serde(default)]
    pub product_nav_change: Option<NavChange>,
}

impl FundData {
    pub fn asset_class(&self) -> Option<AssetClass> {
        self.data_fund_asset_type.as_ref().map(|t| t.code)
    }

    pub fn twelve_month_change(&self) -> Option<f64> {
        self.product_nav_change.as_ref().and_then(|c| c.nav_to_12_months)
    }

    /// Display strings for a listing row
    pub fn display_row(&self) -> FundDisplayRow {
        let change = self.product_nav_change.as_ref();
        FundDisplayRow {
            code: self.code.clone(),
            short_name: self.short_name.clone(),
            nav: format_optional_number(Some(self.nav)),
            change_12_months: format_percentage(self.twelve_month_change()),
            change_36_months: format_percentage(change.and_then(|c| c.nav_to_36_months)),
            updated: format_date_millis(change.and_then(|c| c.update_at)),
        }
    }
}

/// Pre-formatted columns for a fund listing table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FundDisplayRow {
    pub code: String,
    pub short_name: String,
    pub nav: String,
    pub change_12_months: String,
    pub change_36_months: String,
    pub updated: String,
}

/// One page of fund rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundPage {
    pub page: u32,
    pub page_size: u32,
    pub total: u32,
    pub rows: Vec<FundData>,
}

/// Envelope returned by the fund listing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundListingResponse {
    pub status: u16,
    pub code: i32,
    pub message: String,
    pub data: FundPage,
}

/// Product types accepted by the listing filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    NewFund,
    TradingFund,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Request body for the fund listing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundFilterParams {
    pub types: Vec<ProductType>,
    pub sort_order: SortOrder,
    pub sort_field: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fund_asset_types: Vec<AssetClass>,
    pub page: u32,
    pub page_size: u32,
}

impl Default for FundFilterParams {
    fn default() -> Self {
        Self {
            types: vec![ProductType::NewFund, ProductType::TradingFund],
            sort_order: SortOrder::Desc,
            sort_field: "navTo12Months".to_string(),
            fund_asset_types: Vec::new(),
            page: 1,
            page_size: 20,
        }
    }
}

/// Asset filter offered on the fund listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FundAssetFilter {
    #[default]
    All,
    Stock,
    Bond,
}

impl FundAssetFilter {
    pub fn matches(&self, fund: &FundData) -> bool {
        match self {
            FundAssetFilter::All => true,
            FundAssetFilter::Stock => fund.asset_class() == Some(AssetClass::Stock),
            FundAssetFilter::Bond => fund.asset_class() == Some(AssetClass::Bond),
        }
    }
}

impl FundPage {
    /// Rows accepted by `filter`, in listing order
    pub fn filtered(&self, filter: FundAssetFilter) -> Vec<&FundData> {
        self.rows.iter().filter(|fund| filter.matches(fund)).collect()
    }
}
