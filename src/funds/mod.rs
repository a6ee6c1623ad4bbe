//! Fund listing payload model
//!
//! Types for the open-ended fund listing the site displays next to the
//! calculators. Fetching is handled by the caller; this module only builds
//! the request body and parses the response.

mod data;
pub mod loader;

pub use data::{
    AssetClass, FundAssetFilter, FundAssetType, FundData, FundDisplayRow, FundFilterParams,
    FundListingResponse, FundOwner, FundPage, FundType, NavChange, ProductType, SortOrder,
};
