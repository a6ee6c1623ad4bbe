//! Parse fund listing responses that were fetched elsewhere

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::FundListingResponse;

impl FundListingResponse {
    /// Parse a response body
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }

    /// Parse a saved response from disk
    pub fn from_json_path(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let file = File::open(path)?;
        Ok(Self::from_reader(BufReader::new(file))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::funds::{AssetClass, FundAssetFilter, FundFilterParams};

    #[test]
    fn test_load_sample_listing() {
        let listing = FundListingResponse::from_json_path(Path::new("data/funds_sample.json"))
            .expect("Failed to load sample listing");

        assert_eq!(listing.status, 200);
        assert_eq!(listing.data.rows.len(), 3);

        let first = &listing.data.rows[0];
        assert_eq!(first.short_name, "DCDS");
        assert_eq!(first.asset_class(), Some(AssetClass::Stock));
        assert_eq!(first.twelve_month_change(), Some(25.43));
    }

    #[test]
    fn test_filters() {
        let listing = FundListingResponse::from_json_path(Path::new("data/funds_sample.json")).unwrap();

        assert_eq!(listing.data.filtered(FundAssetFilter::All).len(), 3);
        let bonds = listing.data.filtered(FundAssetFilter::Bond);
        assert_eq!(bonds.len(), 1);
        assert_eq!(bonds[0].code, "DCBF");
        assert_eq!(listing.data.filtered(FundAssetFilter::Stock).len(), 1);
    }

    #[test]
    fn test_display_row() {
        let listing = FundListingResponse::from_json_path(Path::new("data/funds_sample.json")).unwrap();
        let row = listing.data.rows[0].display_row();

        assert_eq!(row.nav, "98.765,43");
        assert_eq!(row.change_12_months, "+25.43%");
        assert_eq!(row.updated, "15/03/2024");

        // Third fund carries no change block at all
        let bare = listing.data.rows[2].display_row();
        assert_eq!(bare.change_12_months, "N/A");
        assert_eq!(bare.updated, "N/A");
    }

    #[test]
    fn test_minimal_row() {
        let json = r#"{"status":200,"code":200,"message":"ok","data":{"page":1,"pageSize":20,"total":1,
            "rows":[{"id":1,"code":"X","name":"Fund X","shortName":"X","nav":10000}]}}"#;
        let listing = FundListingResponse::from_reader(json.as_bytes()).unwrap();

        let fund = &listing.data.rows[0];
        assert!(fund.owner.is_none());
        assert_eq!(fund.asset_class(), None);
        assert!(!FundAssetFilter::Stock.matches(fund));
    }

    #[test]
    fn test_default_request_body() {
        let body = serde_json::to_value(FundFilterParams::default()).unwrap();

        assert_eq!(body["types"], serde_json::json!(["NEW_FUND", "TRADING_FUND"]));
        assert_eq!(body["sortOrder"], "DESC");
        assert_eq!(body["sortField"], "navTo12Months");
        assert_eq!(body["page"], 1);
        assert_eq!(body["pageSize"], 20);
        assert!(body.get("fundAssetTypes").is_none());
    }
}
